//! Pen color palette and penalty-by-rank lookup

use drawing::Rgba;
use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum PaletteError {
    #[error("palette must contain at least one color")]
    Empty,
    #[error("palette has {colors} colors but the difference table has {penalties} entries")]
    MismatchedTable { colors: usize, penalties: usize },
    #[error("difference table must be non-decreasing (entry {index} is smaller than its predecessor)")]
    NonMonotonicTable { index: usize },
}

/// The penalty-by-rank table used with the classic sixteen-color palette.
pub const CLASSIC_DIFFERENCE_TABLE: [u32; 16] =
    [0, 7, 9, 12, 18, 23, 27, 35, 45, 55, 67, 84, 85, 86, 89, 90];

/// An ordered list of reference colors with an index-aligned penalty table.
///
/// Declaration order is significant: it breaks distance ties during
/// classification, and the penalty table is indexed by a color's position in
/// a similarity ranking. Palettes are immutable once constructed and can be
/// shared freely across sessions and threads.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Palette {
    colors: Vec<Rgba>,
    penalties: Vec<u32>,
}

impl Palette {
    /// Create a palette from colors and an index-aligned penalty table.
    ///
    /// The table must have one entry per color and be non-decreasing
    /// (rank 0 means "the drawing picked the reference's best color", so
    /// penalties can only grow with rank).
    pub fn new(colors: Vec<Rgba>, penalties: Vec<u32>) -> Result<Self, PaletteError> {
        if colors.is_empty() {
            return Err(PaletteError::Empty);
        }
        if colors.len() != penalties.len() {
            return Err(PaletteError::MismatchedTable {
                colors: colors.len(),
                penalties: penalties.len(),
            });
        }
        if let Some(index) = (1..penalties.len()).find(|&i| penalties[i] < penalties[i - 1]) {
            return Err(PaletteError::NonMonotonicTable { index });
        }

        Ok(Self { colors, penalties })
    }

    /// The classic sixteen pen colors in their selection order, with the
    /// matching difference table.
    pub fn classic() -> Self {
        // Invariants hold by construction, so no validation round-trip.
        Self {
            colors: vec![
                Rgba::WHITE,
                Rgba::GRAY,
                Rgba::RED,
                Rgba::ORANGE,
                Rgba::YELLOW,
                Rgba::GREEN,
                Rgba::CYAN,
                Rgba::PINK,
                Rgba::BLACK,
                Rgba::DARK_GRAY,
                Rgba::MAROON,
                Rgba::BROWN,
                Rgba::OLIVE,
                Rgba::DARK_GREEN,
                Rgba::BLUE,
                Rgba::PURPLE,
            ],
            penalties: CLASSIC_DIFFERENCE_TABLE.to_vec(),
        }
    }

    /// Get the number of palette colors.
    pub fn len(&self) -> usize {
        self.colors.len()
    }

    /// Whether the palette holds no colors (never true for constructed palettes).
    pub fn is_empty(&self) -> bool {
        self.colors.is_empty()
    }

    /// Get the palette colors in declaration order.
    pub fn colors(&self) -> &[Rgba] {
        &self.colors
    }

    /// Get the penalty for a similarity rank.
    /// Returns None if the rank is out of range.
    pub fn penalty(&self, rank: usize) -> Option<u32> {
        self.penalties.get(rank).copied()
    }

    /// Rank palette colors by similarity to a pixel color, nearest first.
    ///
    /// Colors are scanned in declaration order and sorted by ascending
    /// Euclidean RGB distance (alpha ignored); the sort is stable so
    /// declaration order breaks ties. An exact match stops the scan
    /// immediately, so the returned ranking covers only the colors scanned
    /// up to that point. Returns palette indices.
    pub fn rank_colors(&self, color: Rgba) -> Vec<usize> {
        let mut scanned: Vec<(usize, u32)> = Vec::with_capacity(self.colors.len());
        for (index, &candidate) in self.colors.iter().enumerate() {
            let distance = distance_squared(candidate, color);
            scanned.push((index, distance));
            if distance == 0 {
                // The pixel is exactly this pen color
                break;
            }
        }

        scanned.sort_by_key(|&(_, distance)| distance);
        scanned.into_iter().map(|(index, _)| index).collect()
    }

    /// Get the index of the palette color nearest to a pixel color
    /// (ties broken by declaration order).
    /// Returns None only for an empty palette.
    pub fn closest(&self, color: Rgba) -> Option<usize> {
        let mut best: Option<(usize, u32)> = None;
        for (index, &candidate) in self.colors.iter().enumerate() {
            let distance = distance_squared(candidate, color);
            if distance == 0 {
                return Some(index);
            }
            if best.is_none_or(|(_, best_distance)| distance < best_distance) {
                best = Some((index, distance));
            }
        }
        best.map(|(index, _)| index)
    }

    /// Compute the penalty for a drawn pixel against a reference pixel.
    ///
    /// The reference pixel's full similarity ranking is searched for the
    /// drawing pixel's single nearest color; the position found indexes the
    /// difference table. The rule is deliberately asymmetric: it measures how
    /// far the drawing's color choice sits from what the reference considers
    /// its best pen color. A nearest color absent from a short ranking (see
    /// [`rank_colors`]) counts as rank 0, which is required for parity with
    /// the game's historical scores.
    ///
    /// [`rank_colors`]: Palette::rank_colors
    pub fn penalty_for(&self, reference: Rgba, drawing: Rgba) -> u32 {
        let ranking = self.rank_colors(reference);
        let Some(drawing_color) = self.closest(drawing) else {
            return 0;
        };
        let rank = ranking
            .iter()
            .position(|&index| index == drawing_color)
            .unwrap_or(0);

        // rank < ranking.len() <= penalties.len(), so the lookup cannot miss
        self.penalty(rank).unwrap_or(0)
    }
}

/// Squared Euclidean distance in RGB space (alpha ignored).
///
/// Squares preserve the ordering of the real distances and keep the
/// comparison exact in integers.
#[inline]
fn distance_squared(a: Rgba, b: Rgba) -> u32 {
    let dr = a.r as i32 - b.r as i32;
    let dg = a.g as i32 - b.g as i32;
    let db = a.b as i32 - b.b as i32;
    (dr * dr + dg * dg + db * db) as u32
}
