//! Pure state transitions: (Mode, Action) → Transition.
//!
//! This is the core logic of the window. Fully testable without a
//! terminal. The only state it touches besides the mode is the input
//! field, which keystrokes edit directly. Unhandled actions return the
//! current mode unchanged (no-op).

use crate::types::Notice;

use super::state::{Action, Command, Effect, InputField, Mode, Transition};

/// Pure state transition function.
///
/// Given the current mode and an action, produces the next transition.
/// The effects boundary interprets the result.
pub fn update(mode: Mode, action: &Action, input: &mut InputField) -> Transition {
    if *action == Action::Quit {
        return Transition::Quit;
    }

    match mode {
        Mode::Editing => update_editing(action, input),
        Mode::MenuOpen { cursor } => update_menu(cursor, action),
        Mode::Notice(notice) => update_notice(notice, action),
    }
}

/// What selecting a command means.
pub fn dispatch(command: Command) -> Transition {
    match command {
        Command::ShowDateTime => Transition::Effect(Effect::ShowTimestamp),
        Command::LogToFile => Transition::Effect(Effect::LogInput),
        Command::ChangeBackground => Transition::Effect(Effect::RandomizeBackground),
        Command::Exit => Transition::Quit,
    }
}

// ============================================================================
// PER-MODE HANDLERS
// ============================================================================

/// Editing: keys go to the input field; the menu and accelerators run commands.
fn update_editing(action: &Action, input: &mut InputField) -> Transition {
    match action {
        Action::Insert(c) => input.insert(*c),
        Action::Backspace => input.backspace(),
        Action::Delete => input.delete(),
        Action::Left => input.move_left(),
        Action::Right => input.move_right(),
        Action::Home => input.move_home(),
        Action::End => input.move_end(),
        Action::ToggleMenu => return Transition::Mode(Mode::menu()),
        Action::Invoke(command) => return dispatch(*command),
        _ => {}
    }
    Transition::Mode(Mode::Editing)
}

/// MenuOpen: wrap-around cursor, Enter or 1-4 picks, Esc closes.
fn update_menu(cursor: usize, action: &Action) -> Transition {
    let len = Command::ALL.len();

    match action {
        Action::Up => Transition::Mode(Mode::MenuOpen {
            cursor: (cursor + len - 1) % len,
        }),
        Action::Down => Transition::Mode(Mode::MenuOpen {
            cursor: (cursor + 1) % len,
        }),
        Action::Home => Transition::Mode(Mode::MenuOpen { cursor: 0 }),
        Action::End => Transition::Mode(Mode::MenuOpen { cursor: len - 1 }),
        Action::Enter => match Command::at(cursor) {
            Some(command) => dispatch(command),
            None => Transition::Mode(Mode::Editing),
        },
        Action::Insert(c @ '1'..='4') => {
            let index = (*c as u8 - b'1') as usize;
            match Command::at(index) {
                Some(command) => dispatch(command),
                None => Transition::Mode(Mode::MenuOpen { cursor }),
            }
        }
        Action::Invoke(command) => dispatch(*command),
        Action::Cancel | Action::ToggleMenu => Transition::Mode(Mode::Editing),
        _ => Transition::Mode(Mode::MenuOpen { cursor }),
    }
}

/// Notice: modal until dismissed.
fn update_notice(notice: Notice, action: &Action) -> Transition {
    match action {
        Action::Enter | Action::Cancel | Action::Insert(' ') => Transition::Mode(Mode::Editing),
        _ => Transition::Mode(Mode::Notice(notice)),
    }
}

// ============================================================================
// TESTS
// ============================================================================
