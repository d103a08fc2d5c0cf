use std::collections::HashMap;
use std::time::{Duration, Instant};

use tracing::{trace, warn};

use crate::glyph::TaggedGlyph;
use crate::plan::{Position, SharedGlyphMap};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Measurement {
    Measured(Position),
    /// Not laid out yet. Ask again later.
    Pending,
}

/// Host service reporting where a glyph of a word was last rendered.
pub trait Measure {
    fn measure(&self, word: usize, glyph: TaggedGlyph) -> Measurement;
}

/// Glyph boxes recorded by the widget as it paints.
#[derive(Debug, Clone, Default)]
pub struct GlyphRegistry {
    boxes: HashMap<(usize, TaggedGlyph), Position>,
}

impl GlyphRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record(&mut self, word: usize, glyph: TaggedGlyph, position: Position) {
        self.boxes.insert((word, glyph), position);
    }

    /// Drops every box recorded for `word`.
    pub fn forget_word(&mut self, word: usize) {
        self.boxes.retain(|(w, _), _| *w != word);
    }

    pub fn clear(&mut self) {
        self.boxes.clear();
    }

    pub fn len(&self) -> usize {
        self.boxes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.boxes.is_empty()
    }
}

impl Measure for GlyphRegistry {
    fn measure(&self, word: usize, glyph: TaggedGlyph) -> Measurement {
        match self.boxes.get(&(word, glyph)) {
            Some(position) => Measurement::Measured(*position),
            None => Measurement::Pending,
        }
    }
}

#[derive(Debug, Clone)]
struct Attempt {
    glyph: TaggedGlyph,
    due: Instant,
    tries: u32,
}

#[derive(Debug, Clone)]
struct Job {
    word: usize,
    pending: Vec<Attempt>,
}

/// Fills a word's shared-glyph map from a `Measure` service, retrying
/// unmeasured glyphs on a fixed delay up to a bounded number of attempts.
#[derive(Debug, Clone)]
pub struct PositionTracker {
    retry_delay: Duration,
    max_retries: u32,
    job: Option<Job>,
}

impl PositionTracker {
    pub fn new(retry_delay: Duration, max_retries: u32) -> Self {
        Self {
            retry_delay,
            max_retries,
            job: None,
        }
    }

    /// Replaces any running job with one measuring `glyphs` of `word`,
    /// first attempt due at `now`.
    pub fn request(
        &mut self,
        word: usize,
        glyphs: impl IntoIterator<Item = TaggedGlyph>,
        now: Instant,
    ) {
        let mut pending: Vec<Attempt> = glyphs
            .into_iter()
            .map(|glyph| Attempt {
                glyph,
                due: now,
                tries: 0,
            })
            .collect();
        pending.sort_by_key(|a| a.glyph);

        self.job = if pending.is_empty() {
            None
        } else {
            Some(Job { word, pending })
        };
    }

    pub fn cancel(&mut self) {
        self.job = None;
    }

    pub fn is_idle(&self) -> bool {
        self.job.is_none()
    }

    pub fn word(&self) -> Option<usize> {
        self.job.as_ref().map(|job| job.word)
    }

    pub fn pending(&self) -> usize {
        self.job.as_ref().map_or(0, |job| job.pending.len())
    }

    /// Attempts every due glyph and stores hits in `map`. Returns the number
    /// of glyphs measured in this call.
    pub fn poll(&mut self, now: Instant, host: &dyn Measure, map: &mut SharedGlyphMap) -> usize {
        let Some(job) = self.job.as_mut() else {
            return 0;
        };

        let word = job.word;
        let retry_delay = self.retry_delay;
        let max_retries = self.max_retries;
        let mut measured = 0;

        job.pending.retain_mut(|attempt| {
            if attempt.due > now {
                return true;
            }

            attempt.tries += 1;

            match host.measure(word, attempt.glyph) {
                Measurement::Measured(position) => {
                    trace!(word, glyph = %attempt.glyph, ?position, "glyph measured");
                    map.insert(attempt.glyph, Some(position));
                    measured += 1;
                    false
                }

                Measurement::Pending if attempt.tries >= max_retries => {
                    warn!(
                        word,
                        glyph = %attempt.glyph,
                        tries = attempt.tries,
                        "glyph never became measurable"
                    );
                    false
                }

                Measurement::Pending => {
                    trace!(
                        word,
                        glyph = %attempt.glyph,
                        tries = attempt.tries,
                        "glyph not laid out, retrying"
                    );
                    attempt.due = now + retry_delay;
                    true
                }
            }
        });

        if job.pending.is_empty() {
            self.job = None;
        }

        measured
    }
}
