//! Outcome Screen Renderer
//!
//! Draws the post-round summary: a HUD row (lives, best score, score) above a
//! separation line, the cleared level as a title, and the two follow-on options with
//! the highlighted one in the selection color.
//!
//! Layout is computed by [`layout`] as plain data so it can be checked without a
//! window; [`SdlOutcomeRenderer`] only turns it into SDL draw calls.

use crate::outcome_menu::MenuChoice;
use crate::render::{OutcomeView, Renderer};
use crate::text::{draw_text, text_width, GLYPH_HEIGHT};
use sdl2::pixels::Color;
use sdl2::render::Canvas;
use sdl2::video::Window;

/// Y coordinate of the line under the HUD row
pub const SEPARATION_LINE_Y: i32 = 39;

/// Colors and sizes for the outcome screen
#[derive(Debug, Clone)]
pub struct OutcomeScreenStyle {
    pub background_color: Color,

    /// HUD text and separation line
    pub hud_color: Color,

    pub title_color: Color,

    pub option_color: Color,

    /// Highlighted option
    pub selected_color: Color,

    /// Left/right padding of the HUD row
    pub margin: i32,

    pub hud_scale: u32,
    pub title_scale: u32,
    pub option_scale: u32,
}

impl Default for OutcomeScreenStyle {
    fn default() -> Self {
        OutcomeScreenStyle {
            background_color: Color::RGB(0, 0, 0),
            hud_color: Color::RGB(255, 255, 255),
            title_color: Color::RGB(255, 255, 255),
            option_color: Color::RGB(255, 255, 255),
            selected_color: Color::RGB(0, 255, 0), // Green
            margin: 10,
            hud_scale: 2,
            title_scale: 3,
            option_scale: 2,
        }
    }
}

/// One piece of text to draw
#[derive(Debug, Clone, PartialEq)]
pub struct TextLine {
    pub text: String,
    pub x: i32,
    pub y: i32,
    pub color: Color,
    pub scale: u32,
}

/// Positions every text element of the screen for a `width` x `height` surface
pub fn layout(view: &OutcomeView, style: &OutcomeScreenStyle, width: u32, height: u32) -> Vec<TextLine> {
    let mut lines = Vec::new();
    let hud_y = (SEPARATION_LINE_Y - (GLYPH_HEIGHT * style.hud_scale) as i32) / 2;

    let hud = |text: String, x: i32| TextLine {
        text,
        x,
        y: hud_y,
        color: style.hud_color,
        scale: style.hud_scale,
    };

    // Lives, left aligned; second player follows the first
    let p1 = format!("P1 {}", view.lives_p1);
    let p1_width = text_width(&p1, style.hud_scale) as i32;
    lines.push(hud(p1, style.margin));
    if let Some(lives_p2) = view.lives_p2 {
        let p2_x = style.margin * 2 + p1_width;
        lines.push(hud(format!("P2 {}", lives_p2), p2_x));
    }

    let best = match view.best_score {
        Some(best) => format!("HI {:04}", best),
        None => "HI ----".to_string(),
    };
    lines.push(hud(best.clone(), centered_x(&best, style.hud_scale, width)));

    let score = format!("SCORE {:04}", view.score);
    let score_x = width as i32 - style.margin - text_width(&score, style.hud_scale) as i32;
    lines.push(hud(score, score_x));

    let title = format!("LEVEL {} CLEAR!", view.level);
    lines.push(TextLine {
        x: centered_x(&title, style.title_scale, width),
        y: height as i32 / 3,
        color: style.title_color,
        scale: style.title_scale,
        text: title,
    });

    let option_spacing = (GLYPH_HEIGHT * style.option_scale * 3) as i32;
    for (i, choice) in [MenuChoice::Replay, MenuChoice::ToMainMenu].into_iter().enumerate() {
        let label = choice.label();
        let color = if choice == view.highlighted {
            style.selected_color
        } else {
            style.option_color
        };
        lines.push(TextLine {
            text: label.to_string(),
            x: centered_x(label, style.option_scale, width),
            y: height as i32 * 2 / 3 + i as i32 * option_spacing,
            color,
            scale: style.option_scale,
        });
    }

    lines
}

fn centered_x(text: &str, scale: u32, width: u32) -> i32 {
    (width as i32 - text_width(text, scale) as i32) / 2
}

/// [`Renderer`] drawing to an SDL2 window canvas
pub struct SdlOutcomeRenderer {
    canvas: Canvas<Window>,
    style: OutcomeScreenStyle,
    width: u32,
    height: u32,
}

impl SdlOutcomeRenderer {
    /// `width` and `height` are the canvas's logical size
    pub fn new(canvas: Canvas<Window>, width: u32, height: u32) -> Self {
        SdlOutcomeRenderer {
            canvas,
            style: OutcomeScreenStyle::default(),
            width,
            height,
        }
    }

    fn try_draw(&mut self, view: &OutcomeView) -> Result<(), String> {
        self.canvas.set_draw_color(self.style.background_color);
        self.canvas.clear();

        for line in layout(view, &self.style, self.width, self.height) {
            draw_text(&mut self.canvas, &line.text, line.x, line.y, line.color, line.scale)?;
        }

        self.canvas.set_draw_color(self.style.hud_color);
        self.canvas.draw_line(
            (0, SEPARATION_LINE_Y),
            (self.width as i32 - 1, SEPARATION_LINE_Y),
        )?;

        self.canvas.present();
        Ok(())
    }
}

impl Renderer for SdlOutcomeRenderer {
    fn draw_outcome(&mut self, view: &OutcomeView) {
        if let Err(e) = self.try_draw(view) {
            log::error!("Failed to draw outcome screen: {}", e);
        }
    }
}
