//! Test doubles for the screen's services
//!
//! Each fake hands out shared handles (`Rc<Cell<..>>`, `Rc<RefCell<..>>`) so a test can
//! keep steering or inspecting it while the menu holds the borrow.

use crate::frame::FrameLoopContext;
use crate::input::{InputSource, LogicalKey};
use crate::render::{OutcomeView, Renderer};
use crate::scores::{ArchiveError, ScoreArchive, ScoreRecord};
use crate::session::GameMode;
use std::cell::{Cell, RefCell};
use std::collections::HashSet;
use std::fs;
use std::path::PathBuf;
use std::rc::Rc;

/// Fresh, not yet created directory under the system temp dir
pub fn scratch_dir(name: &str) -> PathBuf {
    let dir = std::env::temp_dir().join(format!("round_clear_{}_{}", name, std::process::id()));
    let _ = fs::remove_dir_all(&dir);
    dir
}

/// Scripted key state
#[derive(Clone, Default)]
pub struct FakeInput {
    held: Rc<RefCell<HashSet<LogicalKey>>>,
}

impl FakeInput {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn press(&self, key: LogicalKey) {
        self.held.borrow_mut().insert(key);
    }

    pub fn release_all(&self) {
        self.held.borrow_mut().clear();
    }
}

impl InputSource for FakeInput {
    fn is_key_held(&self, key: LogicalKey) -> bool {
        self.held.borrow().contains(&key)
    }
}

/// Records every view it is asked to draw
#[derive(Default)]
pub struct RecordingRenderer {
    draws: Rc<RefCell<Vec<OutcomeView>>>,
}

impl RecordingRenderer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn handle(&self) -> Rc<RefCell<Vec<OutcomeView>>> {
        Rc::clone(&self.draws)
    }
}

impl Renderer for RecordingRenderer {
    fn draw_outcome(&mut self, view: &OutcomeView) {
        self.draws.borrow_mut().push(*view);
    }
}

/// Frame context with a switchable input-delay gate
pub struct FakeFrame {
    input_ready: Rc<Cell<bool>>,
    polls: Rc<Cell<u32>>,
    open: bool,
    close_at: Option<u32>,
    confirm_at: Option<(FakeInput, u32)>,
}

impl FakeFrame {
    /// Window open and input delay already elapsed
    pub fn ready() -> Self {
        FakeFrame {
            input_ready: Rc::new(Cell::new(true)),
            polls: Rc::new(Cell::new(0)),
            open: true,
            close_at: None,
            confirm_at: None,
        }
    }

    pub fn input_gate(&self) -> Rc<Cell<bool>> {
        Rc::clone(&self.input_ready)
    }

    pub fn poll_count(&self) -> Rc<Cell<u32>> {
        Rc::clone(&self.polls)
    }

    /// Close the window on the given poll
    pub fn close_after(&mut self, polls: u32) {
        self.close_at = Some(polls);
    }

    /// Press confirm on `input` on the given poll
    pub fn confirm_after(&mut self, input: &FakeInput, polls: u32) {
        self.confirm_at = Some((input.clone(), polls));
    }
}

impl FrameLoopContext for FakeFrame {
    fn poll_frame(&mut self) {
        let polls = self.polls.get() + 1;
        self.polls.set(polls);

        if self.close_at == Some(polls) {
            self.open = false;
        }
        if let Some((input, at)) = &self.confirm_at {
            if *at == polls {
                input.press(LogicalKey::Confirm);
            }
        }
    }

    fn is_running(&self) -> bool {
        self.open
    }

    fn input_delay_elapsed(&self) -> bool {
        self.input_ready.get()
    }
}

/// In-memory archive with canned outcomes
pub enum FakeArchive {
    Scores(Vec<u32>),
    PerMode { single: Vec<u32>, two: Vec<u32> },
    Unreadable,
    Corrupt,
}

impl FakeArchive {
    pub fn with_scores(scores: &[u32]) -> Self {
        FakeArchive::Scores(scores.to_vec())
    }
}

fn records(scores: &[u32]) -> Vec<ScoreRecord> {
    scores
        .iter()
        .map(|&score| ScoreRecord::new("AAA", score))
        .collect()
}

impl ScoreArchive for FakeArchive {
    fn load_historical_scores(&self, mode: GameMode) -> Result<Vec<ScoreRecord>, ArchiveError> {
        match self {
            FakeArchive::Scores(scores) => Ok(records(scores)),
            FakeArchive::PerMode { single, two } => Ok(match mode {
                GameMode::SinglePlayer => records(single),
                GameMode::TwoPlayer => records(two),
            }),
            FakeArchive::Unreadable => Err(ArchiveError::Io(std::io::Error::new(
                std::io::ErrorKind::NotFound,
                "no score file",
            ))),
            FakeArchive::Corrupt => {
                let err = serde_json::from_str::<Vec<ScoreRecord>>("[{\"score\":")
                    .expect_err("truncated JSON must not parse");
                Err(ArchiveError::Malformed(err))
            }
        }
    }
}
