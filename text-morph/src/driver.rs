use std::io;
use std::time::{Duration, Instant};

use ratatui::backend::Backend;
use ratatui::{Frame, Terminal};

use crate::controller::{MorphText, Tick};

/// Frame pacing for a host event loop.
///
/// Frames land on a fixed grid anchored at construction time, so a slow
/// frame does not push every later frame back.
#[derive(Debug, Clone)]
pub struct Driver {
    epoch: Instant,
    frame_interval: Duration,
    dirty: bool,
}

impl Driver {
    /// `fps` of zero is treated as one.
    pub fn new(fps: u32, now: Instant) -> Self {
        Self {
            epoch: now,
            frame_interval: Duration::from_secs(1) / fps.max(1),
            dirty: true,
        }
    }

    pub fn frame_interval(&self) -> Duration {
        self.frame_interval
    }

    /// How long the host may block (e.g. waiting for input) before the next
    /// frame is due.
    pub fn time_until_next_frame(&self, now: Instant) -> Duration {
        let elapsed = now.saturating_duration_since(self.epoch);
        let slots = (elapsed.as_secs_f64() / self.frame_interval.as_secs_f64()).ceil() as u32;
        let next_tick = self.epoch + self.frame_interval * slots;

        next_tick.saturating_duration_since(now)
    }

    /// Forces a redraw on the next `step`, e.g. after a resize or a mode change.
    pub fn invalidate(&mut self) {
        self.dirty = true;
    }

    /// Ticks `morph` and redraws when something visible changed.
    pub fn step<B, F>(
        &mut self,
        terminal: &mut Terminal<B>,
        morph: &mut MorphText,
        now: Instant,
        draw: F,
    ) -> io::Result<Tick>
    where
        B: Backend,
        F: FnOnce(&mut Frame, &mut MorphText),
    {
        let tick = morph.tick(now);

        if tick == Tick::Redraw || self.dirty {
            terminal.draw(|frame| draw(frame, morph))?;
            self.dirty = false;
        }

        Ok(tick)
    }
}
