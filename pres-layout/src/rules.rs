// SPDX-License-Identifier: MIT
// Layout rule tables. One struct holds every base constant the planner
// consumes, so the whole policy is auditable in one place and callers that
// need different tables pass their own instead of mutating globals.

use serde::{Deserialize, Serialize};

use crate::context::DeviceClass;

/// Per-device base values: spacing between cards, expansion scale applied on
/// focus, and motion duration in seconds. Complexity multipliers are applied
/// on top of `spacing` and `expansion`; `duration` is deliberately left
/// untouched by content (motion timing tracks platform input latency, not
/// content shape).
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct DeviceBases {
    pub spacing: f32,
    pub expansion: f32,
    pub duration: f32,
}

/// Immutable rule set for layout planning.
///
/// `Default` carries the production constants. Consumers that need different
/// tables construct their own value and pass it to
/// [`plan_layout`](crate::plan::plan_layout); there is no ambient global to
/// reconfigure. Externally supplied overrides should be checked with
/// [`LayoutRules::validate`] before use.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct LayoutRules {
    /// Edge padding, also charged twice against the usable width.
    pub padding: f32,
    /// Card width floor; tiny screens clamp here rather than erroring.
    pub min_card_width: f32,
    /// Card width ceiling; wide screens clamp here.
    pub max_card_width: f32,
    pub phone: DeviceBases,
    pub tablet: DeviceBases,
    pub desktop: DeviceBases,
    pub watch: DeviceBases,
    pub tv: DeviceBases,
    pub car: DeviceBases,
    pub vision: DeviceBases,
}

impl Default for LayoutRules {
    fn default() -> Self {
        Self {
            padding: 16.0,
            min_card_width: 200.0,
            max_card_width: 400.0,
            phone: DeviceBases {
                spacing: 12.0,
                expansion: 1.10,
                duration: 0.25,
            },
            tablet: DeviceBases {
                spacing: 16.0,
                expansion: 1.15,
                duration: 0.25,
            },
            desktop: DeviceBases {
                spacing: 20.0,
                expansion: 1.20,
                duration: 0.30,
            },
            watch: DeviceBases {
                spacing: 8.0,
                expansion: 1.05,
                duration: 0.15,
            },
            tv: DeviceBases {
                spacing: 24.0,
                expansion: 1.25,
                duration: 0.40,
            },
            car: DeviceBases {
                spacing: 16.0,
                expansion: 1.10,
                duration: 0.20,
            },
            vision: DeviceBases {
                spacing: 16.0,
                expansion: 1.05,
                duration: 0.30,
            },
        }
    }
}

impl LayoutRules {
    /// Base values for one device class (ordered mapping, not a runtime map).
    pub fn bases(&self, device: DeviceClass) -> DeviceBases {
        match device {
            DeviceClass::Phone => self.phone,
            DeviceClass::Tablet => self.tablet,
            DeviceClass::Desktop => self.desktop,
            DeviceClass::Watch => self.watch,
            DeviceClass::Tv => self.tv,
            DeviceClass::Car => self.car,
            DeviceClass::Vision => self.vision,
        }
    }

    /// Validates an externally supplied rule set.
    ///
    /// Time complexity: O(1) - fixed number of range checks.
    pub fn validate(&self) -> Result<(), RuleError> {
        if !(self.padding.is_finite() && self.padding > 0.0) {
            return Err(RuleError::NonPositivePadding(self.padding));
        }
        if !(self.min_card_width.is_finite()
            && self.max_card_width.is_finite()
            && self.min_card_width > 0.0
            && self.min_card_width <= self.max_card_width)
        {
            return Err(RuleError::InvalidCardBounds {
                min: self.min_card_width,
                max: self.max_card_width,
            });
        }
        for device in DeviceClass::ALL {
            let bases = self.bases(device);
            if !(bases.spacing.is_finite() && bases.spacing > 0.0) {
                return Err(RuleError::NonPositiveBase {
                    device,
                    field: "spacing",
                    value: bases.spacing,
                });
            }
            if !(bases.duration.is_finite() && bases.duration > 0.0) {
                return Err(RuleError::NonPositiveBase {
                    device,
                    field: "duration",
                    value: bases.duration,
                });
            }
            if !(bases.expansion.is_finite() && bases.expansion >= 1.0) {
                return Err(RuleError::ExpansionBelowOne {
                    device,
                    value: bases.expansion,
                });
            }
        }
        Ok(())
    }
}

/// Rejected layout rule override.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum RuleError {
    NonPositivePadding(f32),
    InvalidCardBounds { min: f32, max: f32 },
    NonPositiveBase {
        device: DeviceClass,
        field: &'static str,
        value: f32,
    },
    ExpansionBelowOne { device: DeviceClass, value: f32 },
}

impl std::fmt::Display for RuleError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RuleError::NonPositivePadding(value) => {
                write!(f, "padding must be a positive finite value (got {})", value)
            }
            RuleError::InvalidCardBounds { min, max } => {
                write!(
                    f,
                    "card width bounds must satisfy 0 < min <= max (got {}..{})",
                    min, max
                )
            }
            RuleError::NonPositiveBase {
                device,
                field,
                value,
            } => {
                write!(
                    f,
                    "{:?} base {} must be a positive finite value (got {})",
                    device, field, value
                )
            }
            RuleError::ExpansionBelowOne { device, value } => {
                write!(
                    f,
                    "{:?} expansion base must be at least 1.0 (got {})",
                    device, value
                )
            }
        }
    }
}

impl std::error::Error for RuleError {}
