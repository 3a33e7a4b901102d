//! # Layout
//!
//! Heuristic clean-up of Polotno editor layouts for flyers and cards.

mod errors;
mod optimizer;

pub use errors::{LayoutError, LayoutResult};
pub use optimizer::{
    optimization_score, optimize, LayoutOptimization, LayoutOptimizationRequest,
    DEFAULT_FONT_SIZE, DEFAULT_HEIGHT, MIN_CORNER_RADIUS, MIN_SPACING, PREVIEW_CHARS,
    TITLE_FONT_SIZE,
};
