//! # Photo Strategy Policies
//!
//! Purpose-keyed decisions for the photo pipeline, one module per axis:
//!
//! - `capture`: camera vs. photo library, with an injectable recommendation
//! - `display`: thumbnail / aspect-fit / full-size / rounded treatment
//! - `treatment`: edit-ability, compression quality, auto-optimization
//! - `rules`: the threshold and bonus tables the above consume
//!
//! All functions here are pure and total: no I/O, no shared state, every
//! purpose and capability combination handled.

use serde::{Deserialize, Serialize};

pub mod capture;
pub mod display;
pub mod rules;
pub mod treatment;

pub use capture::{capture_strategy, CaptureAdvisor, DefaultAdvisor};
pub use display::display_strategy;
pub use rules::StrategyRules;
pub use treatment::{auto_optimize, compression_quality, editing_enabled};

/// Where a photo should come from.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PhotoCaptureStrategy {
    Camera,
    PhotoLibrary,
}

/// How a photo should be presented.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PhotoDisplayStrategy {
    /// Small fixed-size crop for lists and reference rows.
    Thumbnail,
    /// Scaled to fit the available space, aspect preserved.
    AspectFit,
    /// Shown at natural size, scrollable if larger than the space.
    FullSize,
    /// Circular avatar treatment.
    Rounded,
}

/// The full strategy bundle for one purpose/context pair, as handed to
/// rendering and capture layers that want every axis at once.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct PhotoPolicy {
    pub capture: PhotoCaptureStrategy,
    pub display: PhotoDisplayStrategy,
    pub editing_enabled: bool,
    pub compression_quality: f32,
    pub auto_optimize: bool,
}
