//! TUI module: the application window.
//!
//! Organized along FP/Unix boundaries:
//! - `state`: Pure data types (App, Mode, Action, Transition)
//! - `update`: Pure transitions
//! - `view`: Pure rendering
//! - `theme`: Style constants
//! - `run`: Effects (terminal, event loop, command behaviors)

pub mod run;
pub mod state;
pub mod theme;
pub mod update;
pub mod view;
