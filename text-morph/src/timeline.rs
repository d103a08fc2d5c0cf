use std::time::{Duration, Instant};

use crate::easing::Curve;

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Progress {
    /// Eased progress, strictly before completion.
    Running(f32),
    Complete,
}

/// A pausable 0-to-1 progress value over a fixed duration.
///
/// Completion is signalled by `poll` returning `Progress::Complete`; the
/// owner decides what happens next.
#[derive(Debug, Clone, PartialEq)]
pub struct Timeline {
    duration: Duration,
    curve: Curve,
    started: Option<Instant>,
    banked: Duration,
}

impl Timeline {
    pub fn new(duration: Duration, curve: Curve) -> Self {
        Self {
            duration,
            curve,
            started: None,
            banked: Duration::ZERO,
        }
    }

    pub fn started_at(duration: Duration, curve: Curve, now: Instant) -> Self {
        let mut timeline = Self::new(duration, curve);
        timeline.start(now);
        timeline
    }

    /// Restarts from zero.
    pub fn start(&mut self, now: Instant) {
        self.banked = Duration::ZERO;
        self.started = Some(now);
    }

    pub fn is_running(&self) -> bool {
        self.started.is_some()
    }

    /// Freezes progress. No-op when already paused.
    pub fn pause(&mut self, now: Instant) {
        if let Some(started) = self.started.take() {
            self.banked += now.saturating_duration_since(started);
        }
    }

    /// Continues from the frozen progress.
    pub fn resume(&mut self, now: Instant) {
        if self.started.is_none() {
            self.started = Some(now);
        }
    }

    pub fn elapsed(&self, now: Instant) -> Duration {
        match self.started {
            Some(started) => self.banked + now.saturating_duration_since(started),
            None => self.banked,
        }
    }

    /// Linear fraction of the duration covered, in `[0.0, 1.0]`.
    pub fn fraction(&self, now: Instant) -> f32 {
        if self.duration.is_zero() {
            return 1.0;
        }

        (self.elapsed(now).as_secs_f32() / self.duration.as_secs_f32()).min(1.0)
    }

    /// Eased progress, `1.0` once complete.
    pub fn value(&self, now: Instant) -> f32 {
        self.curve.transform(self.fraction(now))
    }

    pub fn poll(&self, now: Instant) -> Progress {
        if self.elapsed(now) >= self.duration {
            Progress::Complete
        } else {
            Progress::Running(self.value(now))
        }
    }
}
