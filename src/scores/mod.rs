//! High score access for the outcome screen
//!
//! - `archive`: the [`ScoreArchive`] trait and the JSON file implementation
//! - `best`: best-score resolution that tolerates a broken archive

pub mod archive;
pub mod best;

pub use archive::{ArchiveError, JsonScoreArchive, ScoreArchive, ScoreRecord};
pub use best::resolve_best_score;
