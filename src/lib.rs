//! logpad: a one-window terminal notepad.
//!
//! Shows the time, appends the input line to `~/Documents/log.txt`,
//! and repaints itself a random green.

pub mod clock;
pub mod color;
pub mod journal;
pub mod platform;
pub mod tui;
pub mod types;
