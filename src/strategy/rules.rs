//! # Strategy Rule Tables
//!
//! Thresholds and bonuses consumed by the photo strategy policies. Like the
//! layout tables, these live in one injectable value so the whole policy is
//! auditable at a glance and consumers can pass their own tables instead of
//! reconfiguring shared state.
//!
//! ## Rule Fields
//!
//! | Field | Default | Used by |
//! |-------|---------|---------|
//! | `vehicle_gate` | 0.30 | vehicle photos: aspect-fit above, thumbnail below |
//! | `receipt_gate` | 0.20 | fuel receipts & pump displays: full-size above, aspect-fit below |
//! | `odometer_gate` | 0.15 | odometer shots: aspect-fit above, thumbnail below |
//! | `document_gate` | 0.25 | documents: aspect-fit above, thumbnail below |
//! | `visual_bonus` | 0.10 | compression bump for appeal-driven purposes |
//! | `text_bonus` | 0.15 | compression bump for purposes read back by extraction |
//!
//! Gates compare against [space utilization](crate::context::PhotoContext::space_utilization)
//! with a strict greater-than, so a context sitting exactly on a gate takes
//! the compact branch.

use serde::{Deserialize, Serialize};

use crate::error::PolicyError;

/// Immutable rule set for photo strategy decisions.
///
/// `Default` carries the production constants; [`StrategyRules::validate`]
/// checks externally supplied overrides.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct StrategyRules {
    /// Utilization above which vehicle photos get aspect-fit treatment.
    pub vehicle_gate: f32,
    /// Utilization above which receipts and pump displays go full-size.
    pub receipt_gate: f32,
    /// Utilization above which odometer shots get aspect-fit treatment.
    pub odometer_gate: f32,
    /// Utilization above which documents get aspect-fit treatment.
    pub document_gate: f32,
    /// Quality added for visual-appeal purposes (vehicle photos, profiles).
    pub visual_bonus: f32,
    /// Quality added for text-readability purposes (receipts, pump
    /// displays, odometer shots, documents).
    pub text_bonus: f32,
}

impl Default for StrategyRules {
    fn default() -> Self {
        Self {
            vehicle_gate: 0.30,
            receipt_gate: 0.20,
            odometer_gate: 0.15,
            document_gate: 0.25,
            visual_bonus: 0.10,
            text_bonus: 0.15,
        }
    }
}

impl StrategyRules {
    /// Validates an externally supplied rule set.
    ///
    /// Time complexity: O(1) - constant-time range checks per field.
    pub fn validate(&self) -> Result<(), PolicyError> {
        let unit_ranged = [
            ("vehicle_gate", self.vehicle_gate),
            ("receipt_gate", self.receipt_gate),
            ("odometer_gate", self.odometer_gate),
            ("document_gate", self.document_gate),
            ("visual_bonus", self.visual_bonus),
            ("text_bonus", self.text_bonus),
        ];
        for (field, value) in unit_ranged {
            if !(value.is_finite() && (0.0..=1.0).contains(&value)) {
                return Err(PolicyError::validation(
                    field,
                    "must be within 0.0..=1.0",
                    format!("{}", value),
                ));
            }
        }
        Ok(())
    }
}
