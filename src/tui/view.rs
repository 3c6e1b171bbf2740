//! Pure rendering: map App state to ratatui widget trees.
//!
//! The window is a fixed-size bordered rect centered in the terminal.
//! Inside it: a one-line menu bar, the input field, the output region,
//! and a help line. The dropdown and notices are drawn last, on top.
//! Widget-building functions are pure (state in, widgets out); the only
//! effect is Frame::render_widget() which writes to the terminal buffer.

use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Layout, Rect};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Clear, Paragraph, Wrap};
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

use crate::types::Notice;

use super::state::{App, Command, InputField, Mode};
use super::theme;

/// Label of the single menu in the menu bar.
pub const MENU_TITLE: &str = "Menu";

// ============================================================================
// DISPATCH
// ============================================================================

/// Render the window to the terminal frame.
pub fn render(app: &App, frame: &mut Frame) {
    let window = centered_rect(frame.area(), app.window.width, app.window.height);
    frame.render_widget(Clear, window);

    let frame_block = Block::bordered()
        .title(Span::styled(format!(" {} ", app.window.title), theme::STYLE_TITLE))
        .title_alignment(Alignment::Center);
    let inner = frame_block.inner(window);
    frame.render_widget(frame_block, window);

    let chunks = Layout::vertical([
        Constraint::Length(1), // menu bar
        Constraint::Min(0),    // content
        Constraint::Length(1), // help
    ])
    .split(inner);

    frame.render_widget(render_menu_bar(&app.mode), chunks[0]);
    render_content(app, frame, chunks[1]);
    frame.render_widget(render_help(&app.mode), chunks[2]);

    match &app.mode {
        Mode::Editing => {}
        Mode::MenuOpen { cursor } => render_dropdown(*cursor, frame, chunks[0], inner),
        Mode::Notice(notice) => render_notice(notice, frame, inner),
    }
}

// ============================================================================
// SHARED LAYOUT
// ============================================================================

/// A `width` × `height` rect centered in `area`, clamped to fit.
pub fn centered_rect(area: Rect, width: u16, height: u16) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y + (area.height - height) / 2,
        width,
        height,
    }
}

/// Menu bar with the single menu title.
fn render_menu_bar(mode: &Mode) -> Paragraph<'static> {
    let title_style = match mode {
        Mode::MenuOpen { .. } => theme::STYLE_MENU_BAR_OPEN,
        _ => theme::STYLE_MENU_BAR,
    };

    Paragraph::new(Line::from(vec![
        Span::styled(format!(" {} ", MENU_TITLE), title_style),
    ]))
    .style(theme::STYLE_MENU_BAR)
}

/// Help line showing available keybindings for the current mode.
fn render_help(mode: &Mode) -> Paragraph<'static> {
    let help_text = match mode {
        Mode::Editing => "[F10] menu  ^T time  ^L log  ^B color  ^Q exit",
        Mode::MenuOpen { .. } => "[↑/↓] move  [Enter] select  [1-4] pick  [Esc] close",
        Mode::Notice(_) => "[Enter] OK",
    };

    Paragraph::new(Span::styled(help_text, theme::STYLE_HELP))
}

// ============================================================================
// CONTENT: INPUT + OUTPUT
// ============================================================================

fn render_content(app: &App, frame: &mut Frame, area: Rect) {
    let surface = theme::surface(app.background);
    frame.render_widget(Block::new().style(surface), area);

    let chunks = Layout::vertical([
        Constraint::Min(3),    // input
        Constraint::Length(5), // output
    ])
    .split(area);

    // Input field, vertically centered in its region like a stretched text field
    let input_area = centered_rect(chunks[0], chunks[0].width, 3);
    let input_block = Block::bordered().title(" Input ").style(surface);
    let input_inner = input_block.inner(input_area);
    frame.render_widget(input_block, input_area);

    let viewport = input_viewport(&app.input, input_inner.width);
    let alignment = if viewport.centered { Alignment::Center } else { Alignment::Left };
    frame.render_widget(
        Paragraph::new(viewport.visible).alignment(alignment).style(surface),
        input_inner,
    );

    if app.mode == Mode::Editing && input_inner.width > 0 && input_inner.height > 0 {
        let x = input_inner.x + viewport.cursor_x.min(input_inner.width - 1);
        frame.set_cursor_position((x, input_inner.y));
    }

    // Output region: read-only, wraps, keeps its last line in view
    let output_block = Block::bordered().title(" Output ").style(surface);
    let output_inner = output_block.inner(chunks[1]);
    let line_count = app.display.lines().count() as u16;
    let scroll = line_count.saturating_sub(output_inner.height);
    frame.render_widget(
        Paragraph::new(app.display.as_str())
            .block(output_block)
            .style(surface)
            .wrap(Wrap { trim: false })
            .scroll((scroll, 0)),
        chunks[1],
    );
}

/// Visible slice of the input field and where its cursor lands.
#[derive(Debug, PartialEq, Eq)]
pub struct InputViewport {
    /// Text to draw.
    pub visible: String,
    /// Cursor column relative to the field's left edge.
    pub cursor_x: u16,
    /// Whether the text fits and is drawn centered.
    pub centered: bool,
}

/// Fit the field into `width` columns.
///
/// Text that fits is centered. Longer text is left-aligned and scrolled
/// so the cursor stays visible.
pub fn input_viewport(field: &InputField, width: u16) -> InputViewport {
    let width = width as usize;
    let chars: Vec<char> = field.text.chars().collect();
    let cursor = field.cursor.min(chars.len());
    let char_width = |c: &char| c.width().unwrap_or(0);

    let text_width = field.text.width();
    if text_width < width {
        // Same offset ratatui uses for centered lines
        let offset = (width / 2).saturating_sub(text_width / 2);
        let before: usize = chars[..cursor].iter().map(char_width).sum();
        return InputViewport {
            visible: field.text.clone(),
            cursor_x: (offset + before) as u16,
            centered: true,
        };
    }

    // Walk back from the cursor while the chars fit with one column to spare
    let limit = width.max(1);
    let mut start = cursor;
    let mut before = 0;
    while start > 0 {
        let w = char_width(&chars[start - 1]);
        if before + w >= limit {
            break;
        }
        before += w;
        start -= 1;
    }

    // Only what fits in the field is drawn
    let mut used = 0;
    let visible = chars[start..]
        .iter()
        .take_while(|c| {
            used += char_width(*c);
            used <= width
        })
        .collect();

    InputViewport {
        visible,
        cursor_x: before as u16,
        centered: false,
    }
}

// ============================================================================
// OVERLAYS
// ============================================================================

/// Dropdown under the menu title, one row per command.
fn render_dropdown(cursor: usize, frame: &mut Frame, menu_bar: Rect, bounds: Rect) {
    let label_width = Command::ALL
        .iter()
        .map(|c| c.label().len())
        .max()
        .unwrap_or(0);

    let lines: Vec<Line> = Command::ALL
        .iter()
        .enumerate()
        .map(|(i, command)| {
            let style = if i == cursor {
                theme::STYLE_MENU_CURSOR
            } else {
                theme::STYLE_MENU_ITEM
            };
            Line::from(Span::styled(
                format!(
                    " {} {:<width$}  {} ",
                    i + 1,
                    command.label(),
                    command.accelerator(),
                    width = label_width
                ),
                style,
            ))
        })
        .collect();

    let content_width = lines.iter().map(Line::width).max().unwrap_or(0) as u16;
    let area = Rect {
        x: menu_bar.x,
        y: menu_bar.y + 1,
        width: (content_width + 2).min(bounds.width),
        height: (lines.len() as u16 + 2).min(bounds.bottom().saturating_sub(menu_bar.y + 1)),
    };

    frame.render_widget(Clear, area);
    frame.render_widget(
        Paragraph::new(lines).block(Block::bordered().style(theme::STYLE_MENU_ITEM)),
        area,
    );
}

/// Modal message box centered in the window.
fn render_notice(notice: &Notice, frame: &mut Frame, bounds: Rect) {
    let style = theme::notice_style(notice.kind);
    let message_width = Span::raw(notice.message.as_str()).width() as u16;
    let area = centered_rect(bounds, (message_width + 4).max(30), 6);

    let lines = vec![
        Line::from(notice.message.clone()),
        Line::from(""),
        Line::from(Span::styled("[ OK ]", theme::STYLE_INTERACTIVE)),
    ];

    frame.render_widget(Clear, area);
    frame.render_widget(
        Paragraph::new(lines)
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: true })
            .block(
                Block::bordered()
                    .title(Span::styled(" Message ", style))
                    .border_style(style),
            ),
        area,
    );
}

// ============================================================================
// TESTS
// ============================================================================
