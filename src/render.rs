use crate::outcome_menu::MenuChoice;

/// Everything the outcome screen shows in one frame
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OutcomeView {
    pub level: u32,
    pub score: u32,
    pub lives_p1: u32,
    /// Only set in two-player sessions
    pub lives_p2: Option<u32>,
    /// `None` when no high score could be loaded
    pub best_score: Option<u32>,
    pub highlighted: MenuChoice,
}

/// Draw service for the outcome screen
///
/// Fire-and-forget: implementations report their own failures (the SDL renderer logs
/// them) because nothing in the menu's state depends on a frame being drawn.
pub trait Renderer {
    fn draw_outcome(&mut self, view: &OutcomeView);
}
