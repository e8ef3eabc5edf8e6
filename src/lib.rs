//! Post-round outcome screen
//!
//! After a level is cleared the game shows the finished session (score, lives, level,
//! best score for the mode) and asks whether to play again or return to the main
//! menu. This crate holds that screen and the services it runs against.
//!
//! # Architecture
//!
//! - `outcome_menu`: the debounced two-option selection state machine
//! - `session`: the immutable snapshot of the finished round
//! - `scores`: historical score archive and best-score resolution
//! - `cooldown`: rate-limit timers behind a swappable clock
//! - `input`, `frame`, `render`: the service traits and their SDL2 implementations
//! - `gui`, `text`: SDL2 drawing of the screen
//! - `config`: JSON screen configuration

pub mod config;
pub mod cooldown;
pub mod frame;
pub mod gui;
pub mod input;
pub mod outcome_menu;
pub mod render;
pub mod scores;
pub mod session;
pub mod text;

#[cfg(test)]
mod testing;

pub use outcome_menu::{MenuChoice, MenuSettings, OutcomeMenu, ScreenServices};
pub use session::{GameMode, SessionSnapshot};
