// SPDX-License-Identifier: MIT
//! # pres-layout: Adaptive Grid & Motion Planning
//!
//! Pure layout planning for cross-device presentation. Maps (content count,
//! screen width, device class, content complexity) to a fully-specified
//! [`LayoutDecision`]: column count, spacing, card dimensions, padding,
//! expansion scale and motion timing.
//!
//! ## Key Components
//!
//! - [`context`]: Device class and content complexity input vocabulary
//! - [`rules`]: Injectable per-device constant tables with validation
//! - [`grid`]: Content-modulated column selection per device class
//! - [`plan`]: Plan assembly and the [`decide_layout`] entry point
//!
//! ## Design Principles
//!
//! 1. **Pure and total**: No I/O, no shared state, no failure path
//! 2. **Deterministic**: Identical inputs produce bit-identical plans
//! 3. **Valid by construction**: Clamped dimensions, banded column counts
//!
//! Rendering layers can call every function here from any thread and cache
//! nothing.
//!
//! ## Usage Example
//!
//! ```rust
//! use pres_layout::{decide_layout, ContentComplexity, DeviceClass};
//!
//! let plan = decide_layout(12, 1024.0, DeviceClass::Tablet, ContentComplexity::Moderate);
//! assert!(plan.columns >= 1);
//! assert!(plan.card_width <= plan.card_height);
//! ```

pub mod context;
pub mod grid;
pub mod plan;
pub mod rules;

pub use context::{ContentComplexity, DeviceClass};
pub use plan::{decide_layout, plan_layout, LayoutDecision};
pub use rules::{DeviceBases, LayoutRules, RuleError};
