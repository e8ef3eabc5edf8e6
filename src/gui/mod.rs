//! Screen-space GUI
//!
//! SDL2 front ends for the game's screens. Each screen renders procedurally (filled
//! rectangles and the bitmap font in [`crate::text`]) and keeps its layout math apart
//! from the draw calls.
//!
//! # Available Components
//!
//! - [`SdlOutcomeRenderer`] - Post-round summary with the replay / main menu choice

pub mod outcome_screen;

pub use outcome_screen::{OutcomeScreenStyle, SdlOutcomeRenderer, TextLine};
