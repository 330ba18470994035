//! Stroke canvas - ordered mark collection with add, erase and rasterize

use glam::DVec2;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::constants::{CANVAS_HEIGHT, CANVAS_WIDTH};
use crate::grid::PixelGrid;
use crate::types::{InkMark, Rgba};

/// A drawing tool applied to a [`StrokeCanvas`].
///
/// Two fixed variants, so a tagged enum instead of a trait object: a pen
/// deposits marks in its color, the eraser removes marks by proximity.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum Tool {
    Pen(Rgba),
    Eraser,
}

impl Default for Tool {
    fn default() -> Self {
        Tool::Pen(Rgba::BLACK)
    }
}

impl Tool {
    /// Apply this tool to the canvas at the given point and radius.
    pub fn apply(&self, canvas: &mut StrokeCanvas, point: DVec2, radius: u32) {
        match self {
            Tool::Pen(color) => canvas.add_mark(point.x, point.y, radius, *color),
            Tool::Eraser => canvas.erase_near(point.x, point.y, radius),
        }
    }
}

/// An insertion-ordered collection of ink marks with a fixed logical size.
///
/// Marks are append-only except for [`erase_near`], which removes every mark
/// intersecting the eraser disk while preserving the order of survivors.
/// Mark coordinates may lie outside the canvas box; such marks are clipped
/// (or dropped entirely) at rasterization time.
///
/// [`erase_near`]: StrokeCanvas::erase_near
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StrokeCanvas {
    width: u32,
    height: u32,
    marks: Vec<InkMark>,
}

impl StrokeCanvas {
    /// Create an empty canvas with the given rasterization size.
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            marks: Vec::new(),
        }
    }

    /// Create an empty canvas with the default play-session size.
    pub fn with_default_size() -> Self {
        Self::new(CANVAS_WIDTH, CANVAS_HEIGHT)
    }

    /// Get the canvas width.
    #[inline]
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Get the canvas height.
    #[inline]
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Get the marks in insertion order.
    pub fn marks(&self) -> &[InkMark] {
        &self.marks
    }

    /// Get the number of marks.
    pub fn len(&self) -> usize {
        self.marks.len()
    }

    /// Whether the canvas holds no marks.
    pub fn is_empty(&self) -> bool {
        self.marks.is_empty()
    }

    /// Remove every mark, keeping the canvas size.
    pub fn clear(&mut self) {
        self.marks.clear();
    }

    /// Append a mark at the given position.
    ///
    /// Coordinates are not validated; the caller guarantees `radius > 0`.
    pub fn add_mark(&mut self, x: f64, y: f64, radius: u32, color: Rgba) {
        self.marks.push(InkMark::new(DVec2::new(x, y), radius, color));
    }

    /// Remove every mark whose disk intersects an eraser disk at (x, y)
    /// with the given radius. Survivors keep their insertion order.
    ///
    /// Linear in the number of marks; stroke counts stay small enough that
    /// no spatial index is needed.
    pub fn erase_near(&mut self, x: f64, y: f64, radius: u32) {
        let eraser = DVec2::new(x, y);
        let before = self.marks.len();
        self.marks
            .retain(|mark| !mark.intersects_circle(eraser, radius));

        let removed = before - self.marks.len();
        if removed > 0 {
            debug!(
                "StrokeCanvas::erase_near: removed {} marks at ({:.1}, {:.1}), radius={}",
                removed, x, y, radius
            );
        }
    }

    /// Rasterize the canvas to a pixel grid.
    ///
    /// The grid starts fully transparent; each mark is painted in insertion
    /// order as a hard-edged filled disk. Overlapping pixels are overwritten
    /// by later marks (no blending). Any on-screen rendering path must draw
    /// marks in this same order to stay visually consistent with the export.
    pub fn rasterize(&self) -> PixelGrid {
        let mut grid = PixelGrid::new(self.width, self.height);
        for mark in &self.marks {
            stamp_disk(&mut grid, mark);
        }

        debug!(
            "StrokeCanvas::rasterize: painted {} marks onto {}x{} grid",
            self.marks.len(),
            self.width,
            self.height
        );
        grid
    }
}

/// Paint a single mark as a filled disk, clipped to the grid.
fn stamp_disk(grid: &mut PixelGrid, mark: &InkMark) {
    let center = mark.center;
    let radius = mark.radius as f64;

    // Integer bounding box, clamped to the grid
    let x_min = ((center.x - radius).floor().max(0.0) as u32).min(grid.width);
    let y_min = ((center.y - radius).floor().max(0.0) as u32).min(grid.height);
    let x_max = ((center.x + radius).ceil().max(0.0) as u32).min(grid.width);
    let y_max = ((center.y + radius).ceil().max(0.0) as u32).min(grid.height);

    // Completely outside the grid
    if x_min >= x_max || y_min >= y_max {
        return;
    }

    let radius_sq = radius * radius;
    for py in y_min..y_max {
        for px in x_min..x_max {
            // Sample at the pixel center
            let dx = (px as f64 + 0.5) - center.x;
            let dy = (py as f64 + 0.5) - center.y;
            if dx * dx + dy * dy <= radius_sq {
                grid.set(px, py, mark.color);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_size() {
        let canvas = StrokeCanvas::with_default_size();
        assert_eq!(canvas.width(), CANVAS_WIDTH);
        assert_eq!(canvas.height(), CANVAS_HEIGHT);
        assert!(canvas.is_empty());
    }

    #[test]
    fn test_add_mark_appends_in_order() {
        let mut canvas = StrokeCanvas::new(100, 100);
        canvas.add_mark(10.0, 10.0, 5, Rgba::RED);
        canvas.add_mark(20.0, 20.0, 5, Rgba::BLUE);

        assert_eq!(canvas.len(), 2);
        assert_eq!(canvas.marks()[0].color, Rgba::RED);
        assert_eq!(canvas.marks()[1].color, Rgba::BLUE);
    }

    #[test]
    fn test_erase_near_empty_region_is_noop() {
        let mut canvas = StrokeCanvas::new(100, 100);
        canvas.add_mark(10.0, 10.0, 3, Rgba::BLACK);
        canvas.add_mark(15.0, 10.0, 3, Rgba::RED);
        let before = canvas.marks().to_vec();

        // Eraser nowhere near either mark
        canvas.erase_near(90.0, 90.0, 5);

        assert_eq!(canvas.marks(), before.as_slice());
    }

    #[test]
    fn test_erase_removes_exactly_the_overlapping_mark() {
        let mut canvas = StrokeCanvas::new(100, 100);
        canvas.add_mark(10.0, 10.0, 3, Rgba::BLACK);
        canvas.add_mark(50.0, 50.0, 3, Rgba::RED);

        // Erase at the second mark's center with a radius covering it
        canvas.erase_near(50.0, 50.0, 3);

        assert_eq!(canvas.len(), 1);
        assert_eq!(canvas.marks()[0].color, Rgba::BLACK);
    }

    #[test]
    fn test_erase_preserves_survivor_order() {
        let mut canvas = StrokeCanvas::new(200, 200);
        canvas.add_mark(10.0, 10.0, 2, Rgba::RED);
        canvas.add_mark(100.0, 100.0, 2, Rgba::GREEN);
        canvas.add_mark(20.0, 10.0, 2, Rgba::BLUE);

        canvas.erase_near(100.0, 100.0, 2);

        assert_eq!(canvas.len(), 2);
        assert_eq!(canvas.marks()[0].color, Rgba::RED);
        assert_eq!(canvas.marks()[1].color, Rgba::BLUE);
    }

    #[test]
    fn test_tool_apply() {
        let mut canvas = StrokeCanvas::new(100, 100);
        let pen = Tool::Pen(Rgba::GREEN);
        let eraser = Tool::Eraser;

        pen.apply(&mut canvas, DVec2::new(30.0, 30.0), 4);
        assert_eq!(canvas.len(), 1);

        eraser.apply(&mut canvas, DVec2::new(30.0, 30.0), 4);
        assert!(canvas.is_empty());
    }

    #[test]
    fn test_rasterize_paints_disk() {
        let mut canvas = StrokeCanvas::new(20, 20);
        canvas.add_mark(10.0, 10.0, 4, Rgba::BLACK);

        let grid = canvas.rasterize();
        // Center pixel is covered
        assert_eq!(grid.get(10, 10), Some(Rgba::BLACK));
        // Corner of the canvas is not
        assert_eq!(grid.get(0, 0), Some(Rgba::TRANSPARENT));
    }

    #[test]
    fn test_rasterize_last_write_wins() {
        let mut canvas = StrokeCanvas::new(20, 20);
        canvas.add_mark(10.0, 10.0, 4, Rgba::RED);
        canvas.add_mark(10.0, 10.0, 4, Rgba::BLUE);

        let grid = canvas.rasterize();
        assert_eq!(grid.get(10, 10), Some(Rgba::BLUE));
    }

    #[test]
    fn test_rasterize_clips_out_of_bounds_marks() {
        let mut canvas = StrokeCanvas::new(20, 20);
        // Fully outside: contributes nothing
        canvas.add_mark(100.0, 100.0, 5, Rgba::RED);
        // Straddling the edge: clipped
        canvas.add_mark(0.0, 10.0, 3, Rgba::BLUE);

        let grid = canvas.rasterize();
        assert!(grid.pixels().iter().all(|p| *p != Rgba::RED));
        assert_eq!(grid.get(0, 10), Some(Rgba::BLUE));
    }

    #[test]
    fn test_clear() {
        let mut canvas = StrokeCanvas::new(20, 20);
        canvas.add_mark(10.0, 10.0, 4, Rgba::RED);
        canvas.clear();

        assert!(canvas.is_empty());
        assert_eq!(canvas.width(), 20);
    }
}
