//! # Adaptive Presentation Policy Library
//!
//! A pure decision engine that maps situational context (device class,
//! content volume, screen geometry, capability flags, photo purpose) to
//! fully-specified presentation configuration. Rendering layers consult
//! these policies and materialize them; nothing here draws, captures, or
//! stores anything.
//!
//! ## Architecture
//!
//! The library is organized into several key modules:
//! - `pres_layout` (workspace member): grid, sizing, and motion planning
//! - `context`: photo decision inputs (purpose, preferences, capabilities)
//! - `strategy`: capture/display/treatment policies keyed by purpose
//! - `error`: validation errors for externally supplied rule tables
//!
//! ## Features
//!
//! - **Pure and total**: every function returns a valid decision for every
//!   input, with degenerate values clamped rather than rejected
//! - **Deterministic**: identical inputs produce bit-identical outputs,
//!   so decisions can be cached or diffed with `==`
//! - **Thread-safe for free**: no shared mutable state anywhere, so calls
//!   may run concurrently without locking
//! - **Injectable tables**: base constants travel as explicit rule values,
//!   never as ambient globals
//!
//! ## Example
//!
//! ```rust
//! use adaptive_presentation::{
//!     decide_layout, select_capture_strategy, ContentComplexity, DeviceClass, PhotoCaptureStrategy,
//!     PhotoContext, PhotoPurpose,
//! };
//!
//! let plan = decide_layout(12, 1440.0, DeviceClass::Desktop, ContentComplexity::Moderate);
//! assert_eq!(plan.columns, 3);
//!
//! let context = PhotoContext::default();
//! let capture = select_capture_strategy(PhotoPurpose::FuelReceipt, &context);
//! assert_eq!(capture, PhotoCaptureStrategy::Camera);
//! ```

// Internal module imports
pub mod context;
pub mod error;
pub mod strategy;

/// Re-export error types for convenience
pub use error::{PolicyError, PolicyResult};

/// Re-export the photo decision inputs
pub use context::{
    DeviceCapabilities, Extent, PhotoContext, PhotoPurpose, SourcePreference, UserPreferences,
};

/// Re-export the strategy outputs and seams
pub use strategy::{
    CaptureAdvisor, DefaultAdvisor, PhotoCaptureStrategy, PhotoDisplayStrategy, PhotoPolicy,
    StrategyRules,
};

/// Re-export layout planning from the workspace member
pub use pres_layout::{
    decide_layout, plan_layout, ContentComplexity, DeviceClass, LayoutDecision, LayoutRules,
};

/// Picks the capture source for a photo flow using the stock
/// recommendation table.
///
/// Availability wins first, explicit user preference second, and the
/// purpose-keyed recommendation only decides when both sources are live
/// and the preference is `Either`. To supply your own recommendation,
/// call [`strategy::capture_strategy`] with a [`CaptureAdvisor`].
pub fn select_capture_strategy(
    purpose: PhotoPurpose,
    context: &PhotoContext,
) -> PhotoCaptureStrategy {
    strategy::capture_strategy(purpose, context, &DefaultAdvisor)
}

/// Picks the display treatment for a photo using the production gates.
///
/// See [`strategy::display_strategy`] for the rule-injected variant.
pub fn select_display_strategy(
    purpose: PhotoPurpose,
    context: &PhotoContext,
) -> PhotoDisplayStrategy {
    strategy::display_strategy(purpose, context, &StrategyRules::default())
}

/// Whether the edit step is offered for this purpose on this device.
pub fn is_editing_enabled(purpose: PhotoPurpose, context: &PhotoContext) -> bool {
    strategy::editing_enabled(purpose, context)
}

/// Encoding quality in `0.0..=1.0` using the production bonus table.
///
/// ```rust
/// use adaptive_presentation::{compression_quality, PhotoContext, PhotoPurpose};
///
/// let mut context = PhotoContext::default();
/// context.preferences.quality_baseline = 0.9;
/// assert_eq!(compression_quality(PhotoPurpose::Odometer, &context), 1.0);
/// ```
pub fn compression_quality(purpose: PhotoPurpose, context: &PhotoContext) -> f32 {
    strategy::compression_quality(purpose, context, &StrategyRules::default())
}

/// Whether the pipeline should auto-optimize the shot for text extraction.
///
/// Purpose-keyed only; the context rides along for signature symmetry with
/// the other policies.
pub fn should_auto_optimize(purpose: PhotoPurpose, _context: &PhotoContext) -> bool {
    strategy::auto_optimize(purpose)
}

/// Resolves every strategy axis at once with the production tables.
///
/// Time complexity: O(1) - five table lookups.
pub fn photo_policy(purpose: PhotoPurpose, context: &PhotoContext) -> PhotoPolicy {
    PhotoPolicy {
        capture: select_capture_strategy(purpose, context),
        display: select_display_strategy(purpose, context),
        editing_enabled: is_editing_enabled(purpose, context),
        compression_quality: compression_quality(purpose, context),
        auto_optimize: should_auto_optimize(purpose, context),
    }
}
