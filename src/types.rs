//! Domain types for logpad.
//!
//! Plain data shared between the behaviors (clock, journal, color)
//! and the TUI layers. No effects live here.

// ============================================================================
// COLOR
// ============================================================================

/// A renderable 8-bit RGB color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Rgb { r, g, b }
    }

    /// Returns the color as a `#rrggbb` hex string.
    pub fn to_hex(&self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

/// Hue / saturation / brightness, every component in `[0, 1]`.
///
/// Hue is a fraction of the full color circle (0.0 = red, 1/3 = green).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Hsb {
    pub hue: f32,
    pub saturation: f32,
    pub brightness: f32,
}

// ============================================================================
// NOTICES
// ============================================================================

/// Severity of a user-facing notice.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeKind {
    /// Something worked.
    Info,
    /// Nothing was done because the input was unusable.
    Warning,
    /// An operation failed.
    Error,
}

/// A modal message shown over the window until dismissed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub kind: NoticeKind,
    pub message: String,
}

impl Notice {
    pub fn info(message: impl Into<String>) -> Self {
        Notice { kind: NoticeKind::Info, message: message.into() }
    }

    pub fn warning(message: impl Into<String>) -> Self {
        Notice { kind: NoticeKind::Warning, message: message.into() }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Notice { kind: NoticeKind::Error, message: message.into() }
    }
}

// ============================================================================
// CONFIGURATION
// ============================================================================

/// Window geometry and title.
///
/// Width and height are terminal cells. The window is centered and
/// clamped to the terminal when the terminal is smaller.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WindowConfig {
    pub title: String,
    pub width: u16,
    pub height: u16,
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            title: "Simple User Interface".to_string(),
            width: 60,
            height: 18,
        }
    }
}

// ============================================================================
// TESTS
// ============================================================================
