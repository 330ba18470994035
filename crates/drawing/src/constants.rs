/// Logical canvas width used by play sessions (matches the reference art).
pub const CANVAS_WIDTH: u32 = 500;

/// Logical canvas height used by play sessions.
pub const CANVAS_HEIGHT: u32 = 500;

/// Default brush radius in pixels.
pub const DEFAULT_BRUSH_RADIUS: u32 = 6;

/// Selectable brush radii (small, medium, large, extra large).
pub const BRUSH_RADII: [u32; 4] = [3, 6, 10, 12];
