//! Word-to-word morphing text for ratatui.
//!
//! Glyphs shared by consecutive words slide into their new place while the
//! rest fade out and in. The planner (`solver`) is pure; `MorphText`
//! sequences the words from the host's frame loop and `MorphTextView`
//! paints it.

pub mod config;
pub mod controller;
pub mod driver;
pub mod easing;
pub mod error;
pub mod fade;
pub mod glyph;
pub mod plan;
pub mod render;
pub mod solver;
pub mod timeline;
pub mod tracker;

pub use config::{MorphConfig, PlaybackMode};
pub use controller::{MorphText, Phase, Scene, Tick};
pub use driver::Driver;
pub use easing::Curve;
pub use error::MorphError;
pub use glyph::{TaggedGlyph, Word};
pub use plan::{FadePlan, Position, SharedGlyphMap, Token, WordPlans};
pub use render::MorphTextView;
pub use tracker::{GlyphRegistry, Measure, Measurement, PositionTracker};
