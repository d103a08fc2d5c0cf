use std::time::Duration;

use ratatui::layout::Alignment;
use ratatui::style::Style;

use crate::easing::Curve;
use crate::error::MorphError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PlaybackMode {
    /// Run through the list `repeat_count + 1` times, then stop on the last word.
    Play,
    /// Freeze where we are. Switching back to `Play`/`Loop` resumes.
    Pause,
    /// Halt and rewind to the first word.
    Stop,
    /// Throw everything away and start over.
    Restart,
    #[default]
    Loop,
}

impl PlaybackMode {
    /// Modes in which the sequence advances.
    pub fn is_running(self) -> bool {
        matches!(self, Self::Play | Self::Restart | Self::Loop)
    }
}

#[derive(Debug, Clone)]
pub struct MorphConfig {
    pub words: Vec<String>,
    /// Length of one fade-out or fade-in.
    pub transition: Duration,
    /// Hold time once a word is fully shown.
    pub display: Duration,
    /// Extra passes through the list. Ignored by `PlaybackMode::Loop`.
    pub repeat_count: i32,
    pub mode: PlaybackMode,
    pub curve: Curve,
    pub style: Style,
    pub alignment: Alignment,
    /// Delay between attempts to measure a glyph that is not laid out yet.
    pub retry_delay: Duration,
    pub max_retries: u32,
}

impl Default for MorphConfig {
    fn default() -> Self {
        Self {
            words: Vec::new(),
            transition: Duration::from_millis(600),
            display: Duration::from_millis(1500),
            repeat_count: 0,
            mode: PlaybackMode::Loop,
            curve: Curve::EaseInOut,
            style: Style::default(),
            alignment: Alignment::Center,
            retry_delay: Duration::from_millis(16),
            max_retries: 30,
        }
    }
}

impl MorphConfig {
    pub fn with_words<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            words: words.into_iter().map(Into::into).collect(),
            ..Self::default()
        }
    }

    pub fn validate(&self) -> Result<(), MorphError> {
        if self.words.len() < 2 {
            return Err(MorphError::TooFewWords {
                count: self.words.len(),
            });
        }

        if self.repeat_count < 0 {
            return Err(MorphError::NegativeRepeatCount {
                count: self.repeat_count,
            });
        }

        Ok(())
    }
}
