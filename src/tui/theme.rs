//! TUI color semantics and style constants.
//!
//! Pure data, consumed by the rendering layer. The window background
//! itself is not themed: it starts at the terminal default and is
//! replaced by whatever green "Change Background Color" draws.
//!
//! Color semantics:
//! - Green: success notices
//! - Yellow: warning notices (empty input)
//! - Red: error notices (write failures)
//! - Cyan: interactive elements (menu title, accelerators)

use ratatui::style::{Color, Modifier, Style};

use crate::types::{NoticeKind, Rgb};

// ============================================================================
// SEMANTIC STYLES
// ============================================================================

/// Success — green.
pub const STYLE_SAFE: Style = Style::new().fg(Color::Green);

/// Warning — yellow.
pub const STYLE_WARNING: Style = Style::new().fg(Color::Yellow);

/// Failure — red.
pub const STYLE_DANGER: Style = Style::new().fg(Color::Red);

/// Interactive element / keybinding hint — cyan.
pub const STYLE_INTERACTIVE: Style = Style::new().fg(Color::Cyan);

// ============================================================================
// UI ELEMENT STYLES
// ============================================================================

/// Window title.
pub const STYLE_TITLE: Style = Style::new().add_modifier(Modifier::BOLD);

/// Menu bar.
pub const STYLE_MENU_BAR: Style = Style::new().fg(Color::Black).bg(Color::Gray);

/// Menu bar entry while its menu is open.
pub const STYLE_MENU_BAR_OPEN: Style = Style::new().fg(Color::Black).bg(Color::Cyan);

/// Dropdown entries.
pub const STYLE_MENU_ITEM: Style = Style::new().fg(Color::Black).bg(Color::Gray);

/// Highlighted dropdown entry.
pub const STYLE_MENU_CURSOR: Style = Style::new().fg(Color::White).bg(Color::Blue);

/// Footer / help line.
pub const STYLE_HELP: Style = Style::new().fg(Color::DarkGray);

// ============================================================================
// DERIVED STYLES
// ============================================================================

/// Border/title style for a notice of this kind.
pub fn notice_style(kind: NoticeKind) -> Style {
    match kind {
        NoticeKind::Info => STYLE_SAFE,
        NoticeKind::Warning => STYLE_WARNING,
        NoticeKind::Error => STYLE_DANGER,
    }
}

/// Style for the content region and controls given the current background.
///
/// A painted background forces black text so it stays legible on green.
pub fn surface(background: Option<Rgb>) -> Style {
    match background {
        Some(Rgb { r, g, b }) => Style::new().fg(Color::Black).bg(Color::Rgb(r, g, b)),
        None => Style::new(),
    }
}

// ============================================================================
// TESTS
// ============================================================================
