//! Round outcome menu
//!
//! Shown after a level is cleared. It displays the finished session (score, lives,
//! level, best score for the mode) and lets the player pick between playing again and
//! returning to the main menu.
//!
//! # Input handling
//!
//! The screen polls held keys every frame, so a single press spans many frames. A
//! selection cooldown limits the highlighted option to one flip per interval, and the
//! frame context's input delay ignores movement right after the screen opens. Confirm
//! is never rate-limited: it is read every frame and ends the menu immediately with
//! whatever option is highlighted after that frame's movement.
//!
//! # Example
//!
//! ```ignore
//! let mut menu = OutcomeMenu::new(snapshot, &archive, services, MenuSettings::default());
//!
//! match menu.run() {
//!     Some(MenuChoice::Replay) => start_new_round(),
//!     Some(MenuChoice::ToMainMenu) => open_main_menu(),
//!     None => {} // window closed
//! }
//! ```

use crate::cooldown::{Cooldown, TimerFactory};
use crate::frame::FrameLoopContext;
use crate::input::{InputSource, LogicalKey};
use crate::render::{OutcomeView, Renderer};
use crate::scores::{resolve_best_score, ScoreArchive};
use crate::session::SessionSnapshot;
use std::time::Duration;

/// Default milliseconds between changes in the highlighted option
pub const SELECTION_INTERVAL_MS: u64 = 200;

/// What the player can do after a round
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    Replay,
    ToMainMenu,
}

impl MenuChoice {
    /// The other option
    pub fn toggled(self) -> Self {
        match self {
            MenuChoice::Replay => MenuChoice::ToMainMenu,
            MenuChoice::ToMainMenu => MenuChoice::Replay,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            MenuChoice::Replay => "PLAY AGAIN",
            MenuChoice::ToMainMenu => "MAIN MENU",
        }
    }
}

/// Tuning for the menu
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MenuSettings {
    pub selection_interval: Duration,
}

impl Default for MenuSettings {
    fn default() -> Self {
        MenuSettings {
            selection_interval: Duration::from_millis(SELECTION_INTERVAL_MS),
        }
    }
}

/// Services a screen runs against
pub struct ScreenServices<'a> {
    pub input: &'a dyn InputSource,
    pub renderer: &'a mut dyn Renderer,
    pub frame: &'a mut dyn FrameLoopContext,
    pub timers: &'a dyn TimerFactory,
}

pub struct OutcomeMenu<'a> {
    snapshot: SessionSnapshot,
    best_score: Option<u32>,
    choice: MenuChoice,
    selection_cooldown: Box<dyn Cooldown>,
    running: bool,
    input: &'a dyn InputSource,
    renderer: &'a mut dyn Renderer,
    frame: &'a mut dyn FrameLoopContext,
}

impl<'a> OutcomeMenu<'a> {
    /// Creates the menu and resolves the best score for the session's mode
    ///
    /// The archive is read exactly once. A failed read leaves the best score empty;
    /// construction itself cannot fail. Nothing is drawn and no input is read here.
    pub fn new(
        snapshot: SessionSnapshot,
        archive: &dyn ScoreArchive,
        services: ScreenServices<'a>,
        settings: MenuSettings,
    ) -> Self {
        let best_score = resolve_best_score(archive, snapshot.mode());

        let mut selection_cooldown = services.timers.cooldown(settings.selection_interval);
        selection_cooldown.reset();

        OutcomeMenu {
            snapshot,
            best_score,
            choice: MenuChoice::ToMainMenu,
            selection_cooldown,
            running: true,
            input: services.input,
            renderer: services.renderer,
            frame: services.frame,
        }
    }

    /// Advance one frame
    ///
    /// Draws, then handles movement if both the selection cooldown and the input
    /// delay allow it, then checks confirm. Does nothing once the menu has ended.
    pub fn update(&mut self) {
        if !self.running {
            return;
        }

        let view = self.view();
        self.renderer.draw_outcome(&view);

        if self.selection_cooldown.has_elapsed()
            && self.frame.input_delay_elapsed()
            && self.input.is_any_held(&[LogicalKey::Up, LogicalKey::Down])
        {
            self.choice = self.choice.toggled();
            self.selection_cooldown.reset();
            log::debug!("Outcome menu highlight: {:?}", self.choice);
        }

        if self.input.is_key_held(LogicalKey::Confirm) {
            self.running = false;
            log::info!("Outcome menu confirmed: {:?}", self.choice);
        }
    }

    /// Drive frames until the player confirms or the host stops
    ///
    /// Returns `None` if the window closed before a choice was made.
    pub fn run(&mut self) -> Option<MenuChoice> {
        while self.running && self.frame.is_running() {
            self.frame.poll_frame();
            if !self.frame.is_running() {
                break;
            }
            self.update();
        }
        self.result()
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    /// Confirmed choice, `None` while the menu is still running
    pub fn result(&self) -> Option<MenuChoice> {
        if self.running { None } else { Some(self.choice) }
    }

    /// Currently highlighted option
    pub fn choice(&self) -> MenuChoice {
        self.choice
    }

    pub fn best_score(&self) -> Option<u32> {
        self.best_score
    }

    pub fn snapshot(&self) -> &SessionSnapshot {
        &self.snapshot
    }

    /// Current visible state
    pub fn view(&self) -> OutcomeView {
        OutcomeView {
            level: self.snapshot.level(),
            score: self.snapshot.score(),
            lives_p1: self.snapshot.lives_p1(),
            lives_p2: self.snapshot.lives_p2(),
            best_score: self.best_score,
            highlighted: self.choice,
        }
    }
}
