//! TUI effects boundary: event loop, terminal lifecycle, key mapping.
//!
//! This is the only TUI module with side effects. It wires the pure
//! layers (state, update, view) to the real terminal via crossterm and
//! ratatui, and runs the three command behaviors (clock, journal, color).
//!
//! Everything happens on one thread: read one event, run its handler to
//! completion, redraw. Handlers never overlap, so the log file needs no
//! lock.

use std::io;

use crossterm::ExecutableCommand;
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use crossterm::terminal::{
    EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode,
};
use rand::Rng;
use ratatui::Terminal;
use ratatui::backend::CrosstermBackend;

use crate::clock::current_timestamp;
use crate::color::random_green;
use crate::journal::{LOGGED_MESSAGE, LogError, log_input};
use crate::types::Notice;

use super::state::{Action, App, Command, Effect, Mode, Transition};
use super::update::update;
use super::view::render;

// ============================================================================
// KEY MAPPING
// ============================================================================

/// Map a crossterm key event to a semantic Action.
///
/// Returns None for keys that don't map to any action.
pub fn map_key(key: KeyEvent) -> Option<Action> {
    // AltGr arrives as Ctrl+Alt on Windows; it types text
    if key.modifiers.contains(KeyModifiers::CONTROL | KeyModifiers::ALT) {
        if let KeyCode::Char(c) = key.code {
            return Some(Action::Insert(c));
        }
    }

    if key.modifiers.contains(KeyModifiers::CONTROL) {
        return match key.code {
            KeyCode::Char('c') | KeyCode::Char('q') => Some(Action::Quit),
            KeyCode::Char('t') => Some(Action::Invoke(Command::ShowDateTime)),
            KeyCode::Char('l') => Some(Action::Invoke(Command::LogToFile)),
            KeyCode::Char('b') => Some(Action::Invoke(Command::ChangeBackground)),
            _ => None,
        };
    }

    if key.modifiers.contains(KeyModifiers::ALT) {
        return match key.code {
            KeyCode::Char('m') | KeyCode::Char('M') => Some(Action::ToggleMenu),
            _ => None,
        };
    }

    match key.code {
        KeyCode::F(10) => Some(Action::ToggleMenu),

        // Text
        KeyCode::Char(c) => Some(Action::Insert(c)),
        KeyCode::Backspace => Some(Action::Backspace),
        KeyCode::Delete => Some(Action::Delete),

        // Navigation
        KeyCode::Left => Some(Action::Left),
        KeyCode::Right => Some(Action::Right),
        KeyCode::Up => Some(Action::Up),
        KeyCode::Down => Some(Action::Down),
        KeyCode::Home => Some(Action::Home),
        KeyCode::End => Some(Action::End),

        KeyCode::Enter => Some(Action::Enter),
        KeyCode::Esc => Some(Action::Cancel),

        _ => None,
    }
}

// ============================================================================
// TERMINAL LIFECYCLE
// ============================================================================

/// Set up the terminal for TUI mode.
fn setup_terminal() -> io::Result<Terminal<CrosstermBackend<io::Stdout>>> {
    enable_raw_mode()?;
    io::stdout().execute(EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(io::stdout());
    let terminal = Terminal::new(backend)?;
    Ok(terminal)
}

/// Restore the terminal to normal mode.
fn restore_terminal() -> io::Result<()> {
    disable_raw_mode()?;
    io::stdout().execute(LeaveAlternateScreen)?;
    Ok(())
}

/// Install a panic hook that restores the terminal before printing the panic.
fn install_panic_hook() {
    let original_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |panic_info| {
        // Best-effort terminal restoration
        let _ = restore_terminal();
        original_hook(panic_info);
    }));
}

// ============================================================================
// EVENT LOOP
// ============================================================================

/// Show the window and run until it is closed.
///
/// The terminal is restored even when the loop fails.
pub fn run(app: App) -> io::Result<()> {
    install_panic_hook();
    let mut terminal = setup_terminal()?;
    tracing::info!(log_path = %app.log_path.display(), "window opened");

    let result = event_loop(&mut terminal, app);

    // A loop failure outranks a restore failure
    let restored = restore_terminal();
    tracing::info!("window closed");
    result.and(restored)
}

fn event_loop(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    mut app: App,
) -> io::Result<()> {
    let mut rng = rand::thread_rng();

    loop {
        terminal.draw(|frame| render(&app, frame))?;

        if app.should_quit {
            break;
        }

        // Resize and other events just fall through to a redraw
        if let Event::Key(key) = event::read()? {
            if key.kind != KeyEventKind::Press {
                continue;
            }
            if let Some(action) = map_key(key) {
                apply(&mut app, &action, &mut rng);
            }
        }
    }

    Ok(())
}

/// Feed one action through the pure transition and execute the result.
pub fn apply<R: Rng + ?Sized>(app: &mut App, action: &Action, rng: &mut R) {
    let mode = std::mem::take(&mut app.mode);

    match update(mode, action, &mut app.input) {
        Transition::Mode(mode) => app.mode = mode,
        Transition::Quit => {
            tracing::debug!("exit requested");
            app.should_quit = true;
        }
        Transition::Effect(effect) => handle_effect(effect, app, rng),
    }
}

// ============================================================================
// EFFECT HANDLING
// ============================================================================

/// Run a command behavior and leave the window idle (or showing a notice).
fn handle_effect<R: Rng + ?Sized>(effect: Effect, app: &mut App, rng: &mut R) {
    app.mode = match effect {
        Effect::ShowTimestamp => {
            app.display = current_timestamp();
            tracing::debug!(display = %app.display, "timestamp shown");
            Mode::Editing
        }
        Effect::LogInput => match log_input(&app.log_path, &app.input.text) {
            Ok(entry) => {
                tracing::info!(
                    path = %app.log_path.display(),
                    chars = entry.chars().count(),
                    "entry logged"
                );
                Mode::Notice(Notice::info(LOGGED_MESSAGE))
            }
            Err(err @ LogError::EmptyInput) => Mode::Notice(Notice::warning(err.to_string())),
            Err(err @ LogError::Write { .. }) => {
                tracing::warn!(path = %app.log_path.display(), error = %err, "log write failed");
                Mode::Notice(Notice::error(err.to_string()))
            }
        },
        Effect::RandomizeBackground => {
            let color = random_green(rng);
            tracing::debug!(color = %color.to_hex(), "background changed");
            app.background = Some(color);
            Mode::Editing
        }
    };
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::{GREEN_HUE_HIGH, GREEN_HUE_LOW, rgb_to_hsb};
    use crate::journal::LINE_ENDING;
    use crate::tui::state::InputField;
    use crate::types::{NoticeKind, WindowConfig};
    use rand::SeedableRng;
    use rand::rngs::StdRng;
    use std::fs;
    use std::path::Path;
    use tempfile::TempDir;

    fn app_at(path: &Path, input: &str) -> App {
        let mut app = App::new(path.to_path_buf(), WindowConfig::default());
        app.input = InputField::with_text(input);
        app
    }

    fn rng() -> StdRng {
        StdRng::seed_from_u64(1)
    }

    fn notice_kind(app: &App) -> Option<NoticeKind> {
        match &app.mode {
            Mode::Notice(n) => Some(n.kind),
            _ => None,
        }
    }

    fn notice_text(app: &App) -> &str {
        match &app.mode {
            Mode::Notice(n) => &n.message,
            other => panic!("Expected notice, got {:?}", other),
        }
    }

    // --- Key mapping ---

    #[test]
    fn ctrl_c_and_ctrl_q_quit() {
        for c in ['c', 'q'] {
            let key = KeyEvent::new(KeyCode::Char(c), KeyModifiers::CONTROL);
            assert_eq!(map_key(key), Some(Action::Quit));
        }
    }

    #[test]
    fn accelerators_map_to_commands() {
        let ctrl = |c| KeyEvent::new(KeyCode::Char(c), KeyModifiers::CONTROL);
        assert_eq!(map_key(ctrl('t')), Some(Action::Invoke(Command::ShowDateTime)));
        assert_eq!(map_key(ctrl('l')), Some(Action::Invoke(Command::LogToFile)));
        assert_eq!(map_key(ctrl('b')), Some(Action::Invoke(Command::ChangeBackground)));
        assert_eq!(map_key(ctrl('z')), None);
    }

    #[test]
    fn f10_and_alt_m_toggle_menu() {
        let f10 = KeyEvent::new(KeyCode::F(10), KeyModifiers::NONE);
        let alt_m = KeyEvent::new(KeyCode::Char('m'), KeyModifiers::ALT);
        assert_eq!(map_key(f10), Some(Action::ToggleMenu));
        assert_eq!(map_key(alt_m), Some(Action::ToggleMenu));
    }

    #[test]
    fn plain_and_shifted_chars_insert() {
        let a = KeyEvent::new(KeyCode::Char('a'), KeyModifiers::NONE);
        let upper = KeyEvent::new(KeyCode::Char('Q'), KeyModifiers::SHIFT);
        assert_eq!(map_key(a), Some(Action::Insert('a')));
        assert_eq!(map_key(upper), Some(Action::Insert('Q')));
    }

    #[test]
    fn esc_cancels_and_enter_enters() {
        let esc = KeyEvent::new(KeyCode::Esc, KeyModifiers::NONE);
        let enter = KeyEvent::new(KeyCode::Enter, KeyModifiers::NONE);
        assert_eq!(map_key(esc), Some(Action::Cancel));
        assert_eq!(map_key(enter), Some(Action::Enter));
    }

    #[test]
    fn altgr_chars_insert() {
        for c in ['@', '{', '\\', '€'] {
            let key = KeyEvent::new(KeyCode::Char(c), KeyModifiers::CONTROL | KeyModifiers::ALT);
            assert_eq!(map_key(key), Some(Action::Insert(c)));
        }
    }

    #[test]
    fn unmapped_key_returns_none() {
        let key = KeyEvent::new(KeyCode::Tab, KeyModifiers::NONE);
        assert_eq!(map_key(key), None);
    }

    // --- Log to File ---

    #[test]
    fn log_writes_trimmed_line_and_shows_success() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("log.txt");
        let mut app = app_at(&path, "  hello world  ");

        apply(&mut app, &Action::Invoke(Command::LogToFile), &mut rng());

        assert_eq!(
            fs::read_to_string(&path).unwrap(),
            format!("hello world{}", LINE_ENDING)
        );
        assert_eq!(notice_kind(&app), Some(NoticeKind::Info));
        assert_eq!(notice_text(&app), "Logged to file successfully!");
        // Field keeps its text
        assert_eq!(app.input.text, "  hello world  ");
    }

    #[test]
    fn log_empty_input_warns_and_writes_nothing() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("log.txt");

        for input in ["", "   ", "\t"] {
            let mut app = app_at(&path, input);
            apply(&mut app, &Action::Invoke(Command::LogToFile), &mut rng());

            assert_eq!(notice_kind(&app), Some(NoticeKind::Warning));
            assert_eq!(notice_text(&app), "Input field is empty!");
        }
        assert!(!path.exists());
    }

    #[test]
    fn log_failure_shows_error_with_io_message() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("Documents").join("log.txt");
        let mut app = app_at(&path, "hello");

        apply(&mut app, &Action::Invoke(Command::LogToFile), &mut rng());

        assert_eq!(notice_kind(&app), Some(NoticeKind::Error));
        let text = notice_text(&app);
        assert!(text.starts_with("Error writing to file: "), "{}", text);
        assert!(text.len() > "Error writing to file: ".len());
        assert!(!path.exists());
        assert!(!app.should_quit);
    }

    #[test]
    fn log_via_menu_navigation() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("log.txt");
        let mut app = app_at(&path, "from the menu");
        let mut rng = rng();

        apply(&mut app, &Action::ToggleMenu, &mut rng);
        apply(&mut app, &Action::Down, &mut rng);
        assert_eq!(app.mode, Mode::MenuOpen { cursor: 1 });
        apply(&mut app, &Action::Enter, &mut rng);

        assert_eq!(
            fs::read_to_string(&path).unwrap(),
            format!("from the menu{}", LINE_ENDING)
        );

        // Dismiss and log again: appended, prior line kept
        apply(&mut app, &Action::Enter, &mut rng);
        assert_eq!(app.mode, Mode::Editing);
        apply(&mut app, &Action::Invoke(Command::LogToFile), &mut rng);
        let content = fs::read_to_string(&path).unwrap();
        assert_eq!(content.lines().collect::<Vec<_>>(), vec!["from the menu", "from the menu"]);
    }

    // --- Show Date & Time ---

    #[test]
    fn timestamp_replaces_display_and_stays_idle() {
        let temp = TempDir::new().unwrap();
        let mut app = app_at(&temp.path().join("log.txt"), "");
        app.display = "old content".to_string();

        apply(&mut app, &Action::Invoke(Command::ShowDateTime), &mut rng());

        assert_eq!(app.display.len(), 19);
        assert!(!app.display.contains("old"));
        assert_eq!(&app.display[4..5], "/");
        assert_eq!(&app.display[13..14], ":");
        assert_eq!(app.mode, Mode::Editing);
        assert!(!temp.path().join("log.txt").exists());
    }

    // --- Change Background Color ---

    #[test]
    fn background_becomes_vivid_green() {
        let temp = TempDir::new().unwrap();
        let mut app = app_at(&temp.path().join("log.txt"), "");
        let mut rng = rng();

        for _ in 0..20 {
            apply(&mut app, &Action::Invoke(Command::ChangeBackground), &mut rng);
            let color = app.background.expect("background set");
            let hsb = rgb_to_hsb(color);
            assert!(hsb.hue > GREEN_HUE_LOW - 0.01 && hsb.hue < GREEN_HUE_HIGH + 0.01);
            assert_eq!(hsb.saturation, 1.0);
            assert_eq!(hsb.brightness, 1.0);
            assert_eq!(app.mode, Mode::Editing);
        }
    }

    // --- Exit ---

    #[test]
    fn exit_sets_quit_without_writing() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("log.txt");
        let mut app = app_at(&path, "unsaved");

        apply(&mut app, &Action::ToggleMenu, &mut rng());
        apply(&mut app, &Action::Insert('4'), &mut rng());

        assert!(app.should_quit);
        assert!(!path.exists());
    }
}
