//! Session outcome snapshot
//!
//! A read-only record of a just-finished round: level reached, final score and the
//! lives left for each player. Two-player sessions always carry the second player's
//! lives and single-player sessions never do; the private `Lives` enum makes the
//! mismatched state unrepresentable.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs;
use std::path::Path;

/// Number of players in a session
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GameMode {
    SinglePlayer,
    TwoPlayer,
}

impl GameMode {
    pub fn player_count(self) -> u8 {
        match self {
            GameMode::SinglePlayer => 1,
            GameMode::TwoPlayer => 2,
        }
    }
}

impl fmt::Display for GameMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}P", self.player_count())
    }
}

/// Errors raised while building or loading a session snapshot
#[derive(Debug, thiserror::Error)]
pub enum SessionError {
    #[error("Lives do not match mode: {mode} session with second player lives {lives_p2:?}")]
    LivesModeMismatch {
        mode: GameMode,
        lives_p2: Option<u32>,
    },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid session file: {0}")]
    Parse(#[from] serde_json::Error),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Lives {
    Single(u32),
    Two(u32, u32),
}

/// Immutable results of a finished round
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "SessionRecord", into = "SessionRecord")]
pub struct SessionSnapshot {
    level: u32,
    score: u32,
    lives: Lives,
}

impl SessionSnapshot {
    pub fn single_player(level: u32, score: u32, lives: u32) -> Self {
        SessionSnapshot {
            level,
            score,
            lives: Lives::Single(lives),
        }
    }

    pub fn two_player(level: u32, score: u32, lives_p1: u32, lives_p2: u32) -> Self {
        SessionSnapshot {
            level,
            score,
            lives: Lives::Two(lives_p1, lives_p2),
        }
    }

    /// Builds a snapshot from loose game state, rejecting a lives/mode mismatch
    pub fn from_parts(
        level: u32,
        score: u32,
        lives_p1: u32,
        lives_p2: Option<u32>,
        mode: GameMode,
    ) -> Result<Self, SessionError> {
        match (mode, lives_p2) {
            (GameMode::SinglePlayer, None) => Ok(Self::single_player(level, score, lives_p1)),
            (GameMode::TwoPlayer, Some(p2)) => Ok(Self::two_player(level, score, lives_p1, p2)),
            (mode, lives_p2) => Err(SessionError::LivesModeMismatch { mode, lives_p2 }),
        }
    }

    /// Loads a snapshot from a JSON session file
    pub fn load_from_file(path: impl AsRef<Path>) -> Result<Self, SessionError> {
        let json = fs::read_to_string(path)?;
        Ok(serde_json::from_str(&json)?)
    }

    pub fn level(&self) -> u32 {
        self.level
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn lives_p1(&self) -> u32 {
        match self.lives {
            Lives::Single(lives) | Lives::Two(lives, _) => lives,
        }
    }

    /// Second player's lives, only present for two-player sessions
    pub fn lives_p2(&self) -> Option<u32> {
        match self.lives {
            Lives::Single(_) => None,
            Lives::Two(_, lives) => Some(lives),
        }
    }

    pub fn mode(&self) -> GameMode {
        match self.lives {
            Lives::Single(_) => GameMode::SinglePlayer,
            Lives::Two(..) => GameMode::TwoPlayer,
        }
    }
}

/// Flat on-disk shape of a session
#[derive(Debug, Serialize, Deserialize)]
struct SessionRecord {
    level: u32,
    score: u32,
    lives_p1: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    lives_p2: Option<u32>,
    mode: GameMode,
}

impl TryFrom<SessionRecord> for SessionSnapshot {
    type Error = SessionError;

    fn try_from(record: SessionRecord) -> Result<Self, Self::Error> {
        SessionSnapshot::from_parts(
            record.level,
            record.score,
            record.lives_p1,
            record.lives_p2,
            record.mode,
        )
    }
}

impl From<SessionSnapshot> for SessionRecord {
    fn from(snapshot: SessionSnapshot) -> Self {
        SessionRecord {
            level: snapshot.level(),
            score: snapshot.score(),
            lives_p1: snapshot.lives_p1(),
            lives_p2: snapshot.lives_p2(),
            mode: snapshot.mode(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_player_has_no_second_lives() {
        let snapshot = SessionSnapshot::single_player(3, 1200, 2);
        assert_eq!(snapshot.mode(), GameMode::SinglePlayer);
        assert_eq!(snapshot.lives_p1(), 2);
        assert_eq!(snapshot.lives_p2(), None);
    }

    #[test]
    fn test_two_player_always_has_second_lives() {
        let snapshot = SessionSnapshot::two_player(5, 900, 1, 3);
        assert_eq!(snapshot.mode(), GameMode::TwoPlayer);
        assert_eq!(snapshot.lives_p1(), 1);
        assert_eq!(snapshot.lives_p2(), Some(3));
    }

    #[test]
    fn test_from_parts_rejects_mismatch() {
        let err = SessionSnapshot::from_parts(1, 10, 3, Some(2), GameMode::SinglePlayer);
        assert!(matches!(err, Err(SessionError::LivesModeMismatch { .. })));

        let err = SessionSnapshot::from_parts(1, 10, 3, None, GameMode::TwoPlayer);
        assert!(matches!(err, Err(SessionError::LivesModeMismatch { .. })));

        let ok = SessionSnapshot::from_parts(1, 10, 3, Some(0), GameMode::TwoPlayer).unwrap();
        assert_eq!(ok.lives_p2(), Some(0));
    }

    #[test]
    fn test_session_json_validates_mode() {
        let json = r#"{"level": 2, "score": 450, "lives_p1": 1, "mode": "single_player"}"#;
        let snapshot: SessionSnapshot = serde_json::from_str(json).unwrap();
        assert_eq!(snapshot, SessionSnapshot::single_player(2, 450, 1));

        let bad = r#"{"level": 2, "score": 450, "lives_p1": 1, "mode": "two_player"}"#;
        assert!(serde_json::from_str::<SessionSnapshot>(bad).is_err());
    }

    #[test]
    fn test_single_player_json_omits_second_lives() {
        let json = serde_json::to_string(&SessionSnapshot::single_player(1, 5, 3)).unwrap();
        assert!(!json.contains("lives_p2"));
        assert!(json.contains("\"single_player\""));
    }

    #[test]
    fn test_mode_display() {
        assert_eq!(GameMode::SinglePlayer.to_string(), "1P");
        assert_eq!(GameMode::TwoPlayer.to_string(), "2P");
    }
}
