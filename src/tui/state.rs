//! TUI state algebra: pure types, zero effects.
//!
//! These types define the entire window state space. The transition
//! function and the rendering layer both program against them.
//!
//! Session data (input text, output text, background color, log path)
//! lives in [`App`]. [`Mode`] carries only what is transient: whether
//! the menu is open and where its cursor is, or which notice is showing.

use std::path::PathBuf;

use crate::types::{Notice, Rgb, WindowConfig};

// ============================================================================
// APPLICATION STATE
// ============================================================================

/// Top-level window model.
#[derive(Debug)]
pub struct App {
    /// Current interaction mode.
    pub mode: Mode,

    /// The editable single-line field.
    pub input: InputField,

    /// Content of the read-only output region.
    pub display: String,

    /// Background of the content region and both controls.
    /// None = terminal default.
    pub background: Option<Rgb>,

    /// Where "Log to File" appends. Resolved once at startup.
    pub log_path: PathBuf,

    /// Title and geometry.
    pub window: WindowConfig,

    /// Set to true when the app should exit on the next tick.
    pub should_quit: bool,
}

// ============================================================================
// MODES
// ============================================================================

/// What keystrokes currently mean.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Mode {
    /// Keys edit the input field.
    #[default]
    Editing,

    /// The menu is dropped down.
    MenuOpen {
        /// Index into [`Command::ALL`].
        cursor: usize,
    },

    /// A modal notice is showing; only dismissal is accepted.
    Notice(Notice),
}

// ============================================================================
// COMMANDS
// ============================================================================

/// The four menu entries, in menu order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    ShowDateTime,
    LogToFile,
    ChangeBackground,
    Exit,
}

impl Command {
    /// Every command, in the order the menu lists them.
    pub const ALL: [Command; 4] = [
        Command::ShowDateTime,
        Command::LogToFile,
        Command::ChangeBackground,
        Command::Exit,
    ];

    /// Menu label.
    pub fn label(self) -> &'static str {
        match self {
            Command::ShowDateTime => "Show Date & Time",
            Command::LogToFile => "Log to File",
            Command::ChangeBackground => "Change Background Color",
            Command::Exit => "Exit",
        }
    }

    /// Keyboard accelerator shown next to the label.
    pub fn accelerator(self) -> &'static str {
        match self {
            Command::ShowDateTime => "^T",
            Command::LogToFile => "^L",
            Command::ChangeBackground => "^B",
            Command::Exit => "^Q",
        }
    }

    /// Command at a menu position, if any.
    pub fn at(index: usize) -> Option<Command> {
        Command::ALL.get(index).copied()
    }
}

// ============================================================================
// ACTIONS
// ============================================================================

/// Semantic user action, decoupled from raw key events.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// Insert a character at the input cursor.
    Insert(char),
    /// Delete the character before the cursor.
    Backspace,
    /// Delete the character under the cursor.
    Delete,
    /// Move the input cursor, or the menu cursor when the menu is open.
    Left,
    Right,
    Up,
    Down,
    Home,
    End,
    /// Open or close the menu.
    ToggleMenu,
    /// Run the highlighted menu entry / dismiss a notice.
    Enter,
    /// Close the menu / dismiss a notice.
    Cancel,
    /// Run a command directly via its accelerator.
    Invoke(Command),
    /// Close the window.
    Quit,
}

// ============================================================================
// TRANSITIONS
// ============================================================================

/// Result of a pure state transition.
///
/// Pure code describes WHAT should happen; the run loop decides HOW.
#[derive(Debug, PartialEq)]
pub enum Transition {
    /// Continue in this mode.
    Mode(Mode),
    /// Close the window.
    Quit,
    /// Execute a side effect. The effects layer sets the next mode.
    Effect(Effect),
}

/// Side effect requested by a pure transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Effect {
    /// Read the clock and replace the output region.
    ShowTimestamp,
    /// Append the trimmed input to the log file.
    LogInput,
    /// Paint the window a random green.
    RandomizeBackground,
}

// ============================================================================
// INPUT FIELD
// ============================================================================

/// Single-line editable text with a char-indexed cursor.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InputField {
    pub text: String,
    /// Cursor position in chars, `0..=text.chars().count()`.
    pub cursor: usize,
}

impl InputField {
    pub fn with_text(text: impl Into<String>) -> Self {
        let text = text.into();
        let cursor = text.chars().count();
        InputField { text, cursor }
    }

    fn len(&self) -> usize {
        self.text.chars().count()
    }

    fn byte_offset(&self, char_index: usize) -> usize {
        self.text
            .char_indices()
            .nth(char_index)
            .map(|(i, _)| i)
            .unwrap_or(self.text.len())
    }

    pub fn insert(&mut self, c: char) {
        let at = self.byte_offset(self.cursor);
        self.text.insert(at, c);
        self.cursor += 1;
    }

    pub fn backspace(&mut self) {
        if self.cursor == 0 {
            return;
        }
        self.cursor -= 1;
        let at = self.byte_offset(self.cursor);
        self.text.remove(at);
    }

    pub fn delete(&mut self) {
        if self.cursor < self.len() {
            let at = self.byte_offset(self.cursor);
            self.text.remove(at);
        }
    }

    pub fn move_left(&mut self) {
        self.cursor = self.cursor.saturating_sub(1);
    }

    pub fn move_right(&mut self) {
        self.cursor = (self.cursor + 1).min(self.len());
    }

    pub fn move_home(&mut self) {
        self.cursor = 0;
    }

    pub fn move_end(&mut self) {
        self.cursor = self.len();
    }
}

// ============================================================================
// CONSTRUCTORS
// ============================================================================

impl App {
    /// Fresh window: empty field, empty output, default background.
    pub fn new(log_path: PathBuf, window: WindowConfig) -> Self {
        App {
            mode: Mode::Editing,
            input: InputField::default(),
            display: String::new(),
            background: None,
            log_path,
            window,
            should_quit: false,
        }
    }
}

impl Mode {
    /// Menu dropped down with the first entry highlighted.
    pub fn menu() -> Self {
        Mode::MenuOpen { cursor: 0 }
    }
}

// ============================================================================
// TESTS
// ============================================================================
