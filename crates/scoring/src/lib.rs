//! SketchQuest scoring system - palette classification and similarity scoring
//!
//! This crate compares a rasterized drawing against a reference image and
//! produces a reproducible integer score in `[0, 100]`:
//! - [`palette::Palette`] - Ordered pen colors with a penalty-by-rank table
//! - [`score::SimilarityScorer`] - Per-pixel classification and aggregation

pub mod palette;
pub mod score;

pub use palette::*;
pub use score::*;
