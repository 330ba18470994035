//! Similarity scoring between a reference grid and a drawing grid

use drawing::PixelGrid;
use thiserror::Error;
use tracing::debug;

use crate::palette::Palette;

#[derive(Debug, Error)]
pub enum ScoreError {
    #[error(
        "grid dimensions do not match: reference {reference_width}x{reference_height}, \
         drawing {drawing_width}x{drawing_height}"
    )]
    DimensionMismatch {
        reference_width: u32,
        reference_height: u32,
        drawing_width: u32,
        drawing_height: u32,
    },
}

/// Maximum penalty a single pixel can contribute; also the capacity each
/// pixel adds to the score denominator.
const PIXEL_CAPACITY: u64 = 100;

/// Penalty for drawing where the reference has only background.
const BACKGROUND_DRAWN_PENALTY: u64 = 50;

/// Penalty for leaving a reference pixel blank.
const MISSED_PIXEL_PENALTY: u64 = 100;

/// Compares two equally-sized pixel grids and produces a score in `[0, 100]`.
///
/// The scorer is a pure function of its inputs and the palette it was
/// constructed with; it may be called from any thread and shared across
/// sessions.
#[derive(Debug, Clone)]
pub struct SimilarityScorer {
    palette: Palette,
}

impl SimilarityScorer {
    /// Create a scorer over the given palette.
    pub fn new(palette: Palette) -> Self {
        Self { palette }
    }

    /// Create a scorer over the classic sixteen-color palette.
    pub fn with_classic_palette() -> Self {
        Self::new(Palette::classic())
    }

    /// Get the palette this scorer classifies against.
    pub fn palette(&self) -> &Palette {
        &self.palette
    }

    /// Score a drawing against a reference image.
    ///
    /// Both grids must have identical dimensions; anything else is a caller
    /// error. Per pixel:
    /// - reference background, drawing background: excluded from scoring
    ///   (the pixel's capacity leaves the denominator)
    /// - reference background, drawing drawn: penalty 50
    /// - reference drawn, drawing background: penalty 100
    /// - both drawn: difference-table penalty for the drawing's nearest pen
    ///   color within the reference pixel's similarity ranking
    ///
    /// A reference that is entirely background scored against an untouched
    /// drawing has nothing to get wrong and scores 100.
    pub fn score(&self, reference: &PixelGrid, drawing: &PixelGrid) -> Result<u8, ScoreError> {
        if !reference.same_dimensions(drawing) {
            return Err(ScoreError::DimensionMismatch {
                reference_width: reference.width,
                reference_height: reference.height,
                drawing_width: drawing.width,
                drawing_height: drawing.height,
            });
        }

        let mut total_penalty: u64 = 0;
        let mut excluded_capacity: u64 = 0;

        for (&reference_pixel, &drawing_pixel) in reference.pixels().iter().zip(drawing.pixels()) {
            if reference_pixel.is_transparent() {
                if drawing_pixel.is_transparent() {
                    // Nothing to draw here and nothing drawn: this pixel
                    // does not take part in scoring at all
                    excluded_capacity += PIXEL_CAPACITY;
                } else {
                    total_penalty += BACKGROUND_DRAWN_PENALTY;
                }
            } else if drawing_pixel.is_transparent() {
                total_penalty += MISSED_PIXEL_PENALTY;
            } else {
                total_penalty += self.palette.penalty_for(reference_pixel, drawing_pixel) as u64;
            }
        }

        let capacity = PIXEL_CAPACITY * (reference.width as u64) * (reference.height as u64);
        let max_possible = capacity - excluded_capacity;

        // All-background reference with an untouched drawing: guard the
        // division and call it perfect
        if max_possible == 0 {
            return Ok(100);
        }

        let score = (100.0 - total_penalty as f64 / max_possible as f64 * 100.0).round();
        debug!(
            "SimilarityScorer::score: total_penalty={}, max_possible={}, score={}",
            total_penalty, max_possible, score
        );

        Ok(score.clamp(0.0, 100.0) as u8)
    }
}
