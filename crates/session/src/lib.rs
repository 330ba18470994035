//! SketchQuest play-session orchestration
//!
//! This crate connects the drawing and scoring systems for one level:
//! - [`ScoringSession`] - Owns a canvas and a reference image, forwards
//!   tool input during play and produces a [`RoundResult`] at level end
//! - [`rules::Difficulty`] - Pass thresholds and time limits
//! - [`rules::Countdown`] - Level timer state (the caller drives the ticks)
//!
//! The session performs no I/O: reference images arrive as in-memory pixel
//! grids and scores leave as plain values. Window management, asset loading
//! and highscore storage are the caller's business.

pub mod rules;

use glam::DVec2;
use serde::{Deserialize, Serialize};
use tracing::debug;

use drawing::{PixelGrid, StrokeCanvas, Tool};
use scoring::{ScoreError, SimilarityScorer};

pub use rules::{Countdown, Difficulty};

/// Outcome of a finished level.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoundResult {
    /// Similarity score in `[0, 100]`.
    pub score: u8,
    /// Whether the score meets the difficulty's requirement.
    pub passed: bool,
}

/// One play session: a fresh canvas traced against a level's reference image.
///
/// Input flows in through [`apply`] while the level timer runs; when play
/// stops, [`finish`] rasterizes the canvas, scores it against the reference
/// and consumes the session. At most one writer mutates the canvas and
/// scoring happens only after input has stopped, so no locking is needed.
///
/// [`apply`]: ScoringSession::apply
/// [`finish`]: ScoringSession::finish
pub struct ScoringSession {
    canvas: StrokeCanvas,
    reference: PixelGrid,
    scorer: SimilarityScorer,
    difficulty: Difficulty,
}

impl ScoringSession {
    /// Create a session for a level.
    ///
    /// The canvas is sized to the reference grid so the exported drawing
    /// always matches it.
    pub fn new(reference: PixelGrid, scorer: SimilarityScorer, difficulty: Difficulty) -> Self {
        let canvas = StrokeCanvas::new(reference.width, reference.height);
        Self {
            canvas,
            reference,
            scorer,
            difficulty,
        }
    }

    /// Get the session difficulty.
    pub fn difficulty(&self) -> Difficulty {
        self.difficulty
    }

    /// Get the reference image being traced.
    pub fn reference(&self) -> &PixelGrid {
        &self.reference
    }

    /// Get the canvas, e.g. for on-screen rendering of the marks.
    pub fn canvas(&self) -> &StrokeCanvas {
        &self.canvas
    }

    /// Apply a tool stroke at the given canvas position.
    pub fn apply(&mut self, tool: Tool, x: f64, y: f64, radius: u32) {
        tool.apply(&mut self.canvas, DVec2::new(x, y), radius);
    }

    /// Discard everything drawn so far.
    pub fn restart(&mut self) {
        self.canvas.clear();
    }

    /// End the level: rasterize the drawing, score it against the reference
    /// and report whether the difficulty's requirement was met.
    ///
    /// Consumes the session; a drawing is exported once per play.
    pub fn finish(self) -> Result<RoundResult, ScoreError> {
        let drawing = self.canvas.rasterize();
        let score = self.scorer.score(&self.reference, &drawing)?;
        let passed = score >= self.difficulty.score_requirement();

        debug!(
            "ScoringSession::finish: score={}, required={}, passed={}",
            score,
            self.difficulty.score_requirement(),
            passed
        );
        Ok(RoundResult { score, passed })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use drawing::Rgba;

    /// A small reference: a black disk in the middle of a transparent grid.
    fn disk_reference(size: u32) -> PixelGrid {
        let mut canvas = StrokeCanvas::new(size, size);
        let mid = size as f64 / 2.0;
        canvas.add_mark(mid, mid, size / 3, Rgba::BLACK);
        canvas.rasterize()
    }

    #[test]
    fn test_tracing_the_reference_passes() {
        let reference = disk_reference(50);
        let mut session = ScoringSession::new(
            reference,
            SimilarityScorer::with_classic_palette(),
            Difficulty::Hard,
        );

        // Reproduce the reference exactly
        session.apply(Tool::Pen(Rgba::BLACK), 25.0, 25.0, 16);

        let result = session.finish().unwrap();
        assert_eq!(result.score, 100);
        assert!(result.passed);
    }

    #[test]
    fn test_untouched_canvas_fails() {
        let reference = disk_reference(50);
        let session = ScoringSession::new(
            reference,
            SimilarityScorer::with_classic_palette(),
            Difficulty::Easy,
        );

        let result = session.finish().unwrap();
        assert_eq!(result.score, 0);
        assert!(!result.passed);
    }

    #[test]
    fn test_pass_threshold_depends_on_difficulty() {
        // Identical 60-scoring drawings pass Medium but not Hard
        assert!(60 >= Difficulty::Medium.score_requirement());
        assert!(60 < Difficulty::Hard.score_requirement());
    }

    #[test]
    fn test_eraser_strokes_flow_through() {
        let reference = disk_reference(50);
        let mut session = ScoringSession::new(
            reference,
            SimilarityScorer::with_classic_palette(),
            Difficulty::Easy,
        );

        session.apply(Tool::Pen(Rgba::RED), 10.0, 10.0, 4);
        assert_eq!(session.canvas().len(), 1);

        session.apply(Tool::Eraser, 10.0, 10.0, 4);
        assert!(session.canvas().is_empty());
    }

    #[test]
    fn test_restart_clears_the_drawing() {
        let reference = disk_reference(50);
        let mut session = ScoringSession::new(
            reference,
            SimilarityScorer::with_classic_palette(),
            Difficulty::Easy,
        );

        session.apply(Tool::Pen(Rgba::BLACK), 25.0, 25.0, 10);
        session.restart();
        assert!(session.canvas().is_empty());
    }

    #[test]
    fn test_canvas_matches_reference_size() {
        let reference = PixelGrid::new(33, 21);
        let session = ScoringSession::new(
            reference,
            SimilarityScorer::with_classic_palette(),
            Difficulty::Easy,
        );
        assert_eq!(session.canvas().width(), 33);
        assert_eq!(session.canvas().height(), 21);
    }
}
