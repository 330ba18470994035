//! SketchQuest drawing system - stroke model and rasterization
//!
//! This crate provides the core data types for freehand drawing:
//! - [`types::Rgba`] - 8-bit RGBA color (bytemuck-compatible)
//! - [`types::InkMark`] - A single circular brush deposit
//! - [`grid::PixelGrid`] - Dense RGBA pixel grid produced by rasterization
//! - [`canvas::StrokeCanvas`] - Ordered mark collection with add/erase/rasterize
//! - [`canvas::Tool`] - Pen/eraser variants applied to a canvas

pub mod canvas;
pub mod constants;
pub mod grid;
pub mod types;

pub use canvas::*;
pub use constants::*;
pub use grid::*;
pub use types::*;
