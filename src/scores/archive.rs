//! Historical score storage
//!
//! The [`ScoreArchive`] trait is all the outcome screen needs. [`JsonScoreArchive`] is
//! the file-backed implementation used by the game: one pretty-printed JSON file per
//! game mode inside a scores directory.

use crate::session::GameMode;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// One past result
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreRecord {
    pub name: String,
    pub score: u32,
}

impl ScoreRecord {
    pub fn new(name: impl Into<String>, score: u32) -> Self {
        ScoreRecord {
            name: name.into(),
            score,
        }
    }
}

/// Errors reading or writing the archive
#[derive(Debug, thiserror::Error)]
pub enum ArchiveError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Malformed score record: {0}")]
    Malformed(#[from] serde_json::Error),
}

/// Read access to historical scores, keyed by game mode
pub trait ScoreArchive {
    fn load_historical_scores(&self, mode: GameMode) -> Result<Vec<ScoreRecord>, ArchiveError>;
}

/// Score archive stored as JSON files (`scores_1p.json`, `scores_2p.json`)
pub struct JsonScoreArchive {
    directory: PathBuf,
}

impl JsonScoreArchive {
    /// Creates an archive rooted at `directory`
    ///
    /// Nothing touches the disk until scores are loaded or saved.
    pub fn new(directory: impl AsRef<Path>) -> Self {
        JsonScoreArchive {
            directory: directory.as_ref().to_path_buf(),
        }
    }

    pub fn path_for(&self, mode: GameMode) -> PathBuf {
        self.directory
            .join(format!("scores_{}p.json", mode.player_count()))
    }

    /// Overwrite the records for `mode`, creating the directory if needed
    pub fn save_scores(
        &self,
        mode: GameMode,
        records: &[ScoreRecord],
    ) -> Result<PathBuf, ArchiveError> {
        if !self.directory.exists() {
            fs::create_dir_all(&self.directory)?;
        }

        let path = self.path_for(mode);
        let json = serde_json::to_string_pretty(records)?;
        fs::write(&path, json)?;

        log::info!("Saved {} {} scores to {}", records.len(), mode, path.display());
        Ok(path)
    }
}

impl ScoreArchive for JsonScoreArchive {
    fn load_historical_scores(&self, mode: GameMode) -> Result<Vec<ScoreRecord>, ArchiveError> {
        let json = fs::read_to_string(self.path_for(mode))?;
        Ok(serde_json::from_str(&json)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::scratch_dir;

    #[test]
    fn test_missing_file_is_io_error() {
        let archive = JsonScoreArchive::new(scratch_dir("archive_missing"));
        let result = archive.load_historical_scores(GameMode::SinglePlayer);
        assert!(matches!(result, Err(ArchiveError::Io(_))));
    }

    #[test]
    fn test_saved_scores_load_per_mode() {
        let archive = JsonScoreArchive::new(scratch_dir("archive_per_mode"));
        let one = vec![ScoreRecord::new("AAA", 10), ScoreRecord::new("BBB", 55)];
        let two = vec![ScoreRecord::new("CCC", 99)];
        archive.save_scores(GameMode::SinglePlayer, &one).unwrap();
        archive.save_scores(GameMode::TwoPlayer, &two).unwrap();

        assert_eq!(archive.load_historical_scores(GameMode::SinglePlayer).unwrap(), one);
        assert_eq!(archive.load_historical_scores(GameMode::TwoPlayer).unwrap(), two);
    }

    #[test]
    fn test_corrupt_file_is_malformed() {
        let dir = scratch_dir("archive_corrupt");
        fs::create_dir_all(&dir).unwrap();
        let archive = JsonScoreArchive::new(&dir);
        fs::write(
            archive.path_for(GameMode::SinglePlayer),
            r#"[{"name": "AAA", "score": -4}]"#,
        )
        .unwrap();

        let result = archive.load_historical_scores(GameMode::SinglePlayer);
        assert!(matches!(result, Err(ArchiveError::Malformed(_))));
    }

    #[test]
    fn test_file_names_follow_player_count() {
        let archive = JsonScoreArchive::new("scores");
        assert!(archive.path_for(GameMode::SinglePlayer).ends_with("scores_1p.json"));
        assert!(archive.path_for(GameMode::TwoPlayer).ends_with("scores_2p.json"));
    }
}
