//! Frame loop context
//!
//! Screens do not own the frame loop. They are handed a [`FrameLoopContext`] that paces
//! frames, tracks whether the host window is still open and exposes the input-delay
//! gate that keeps a key held from the previous screen from leaking into this one.

use crate::cooldown::Cooldown;
use crate::input::KeyState;
use sdl2::event::Event;
use sdl2::EventPump;
use std::time::{Duration, Instant};

pub trait FrameLoopContext {
    /// Wait for the next frame and refresh window and input state
    fn poll_frame(&mut self);

    /// False once the host loop should stop (window closed)
    fn is_running(&self) -> bool;

    /// True once the screen has been open longer than the input delay
    fn input_delay_elapsed(&self) -> bool;
}

/// SDL2 implementation: fixed-rate pacing, quit handling and keyboard snapshots
pub struct SdlFrameContext {
    event_pump: EventPump,
    keys: KeyState,
    frame_duration: Duration,
    next_frame: Option<Instant>,
    input_delay: Box<dyn Cooldown>,
    quit_requested: bool,
}

impl SdlFrameContext {
    /// Creates the context and starts the input delay
    pub fn new(
        event_pump: EventPump,
        keys: KeyState,
        frame_duration: Duration,
        input_delay: Box<dyn Cooldown>,
    ) -> Self {
        let mut context = SdlFrameContext {
            event_pump,
            keys,
            frame_duration,
            next_frame: None,
            input_delay,
            quit_requested: false,
        };
        context.restart_input_delay();
        context
    }

    /// Call when a new screen opens on this context
    pub fn restart_input_delay(&mut self) {
        self.input_delay.reset();
    }

    fn wait_for_frame(&mut self) {
        let now = Instant::now();
        let deadline = self.next_frame.unwrap_or(now);
        if deadline > now {
            std::thread::sleep(deadline - now);
        }
        // Drop missed frames instead of trying to catch up
        self.next_frame = Some(deadline.max(now) + self.frame_duration);
    }
}

impl FrameLoopContext for SdlFrameContext {
    fn poll_frame(&mut self) {
        self.wait_for_frame();

        for event in self.event_pump.poll_iter() {
            if let Event::Quit { .. } = event {
                log::info!("Window closed");
                self.quit_requested = true;
            }
        }

        self.keys
            .replace(self.event_pump.keyboard_state().pressed_scancodes());
    }

    fn is_running(&self) -> bool {
        !self.quit_requested
    }

    fn input_delay_elapsed(&self) -> bool {
        self.input_delay.has_elapsed()
    }
}
