// SPDX-License-Identifier: MIT
// Closed input vocabulary for the layout planner. Every decision function
// matches these enums exhaustively, so adding a variant is a forced review of
// each policy table rather than a silent fallthrough.

use serde::{Deserialize, Serialize};

/// Device class the layout is planned for.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, clap::ValueEnum, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DeviceClass {
    Phone,
    Tablet,
    Desktop,
    Watch,
    Tv,
    Car,
    /// Headset-class immersive devices (single-focus policy).
    Vision,
}

impl DeviceClass {
    /// Every device class, in table order. Used by audit tooling and sweeps.
    pub const ALL: [DeviceClass; 7] = [
        DeviceClass::Phone,
        DeviceClass::Tablet,
        DeviceClass::Desktop,
        DeviceClass::Watch,
        DeviceClass::Tv,
        DeviceClass::Car,
        DeviceClass::Vision,
    ];

    /// Whether the device is held/worn rather than parked on a desk or wall.
    /// Posture matters to capture-source policy: a handheld device can be
    /// pointed at a subject, a stationary one usually cannot.
    pub fn is_handheld(self) -> bool {
        match self {
            DeviceClass::Phone
            | DeviceClass::Tablet
            | DeviceClass::Watch
            | DeviceClass::Car
            | DeviceClass::Vision => true,
            DeviceClass::Desktop | DeviceClass::Tv => false,
        }
    }
}

/// Ordered classification of how much structure a unit of content carries.
///
/// The ordering drives monotonic scaling (denser content gets more spacing,
/// taller cards, stronger expansion). `VeryComplex` and `Advanced` carry
/// identical weights in every table; the ordering still separates them so the
/// progression stays total.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, clap::ValueEnum, Serialize, Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum ContentComplexity {
    Simple,
    Moderate,
    Complex,
    VeryComplex,
    Advanced,
}

impl ContentComplexity {
    /// Every complexity tier, in ascending order.
    pub const ALL: [ContentComplexity; 5] = [
        ContentComplexity::Simple,
        ContentComplexity::Moderate,
        ContentComplexity::Complex,
        ContentComplexity::VeryComplex,
        ContentComplexity::Advanced,
    ];

    /// Multiplier applied to the per-device spacing base.
    pub fn spacing_factor(self) -> f32 {
        match self {
            ContentComplexity::Simple => 1.0,
            ContentComplexity::Moderate => 1.2,
            ContentComplexity::Complex => 1.5,
            ContentComplexity::VeryComplex | ContentComplexity::Advanced => 2.0,
        }
    }

    /// Card height / card width ratio.
    pub fn aspect_ratio(self) -> f32 {
        match self {
            ContentComplexity::Simple => 1.2,
            ContentComplexity::Moderate => 1.4,
            ContentComplexity::Complex => 1.6,
            ContentComplexity::VeryComplex | ContentComplexity::Advanced => 1.8,
        }
    }

    /// Multiplier applied to the per-device expansion base.
    pub fn expansion_factor(self) -> f32 {
        match self {
            ContentComplexity::Simple => 1.0,
            ContentComplexity::Moderate => 1.05,
            ContentComplexity::Complex => 1.10,
            ContentComplexity::VeryComplex | ContentComplexity::Advanced => 1.15,
        }
    }
}

/// Clamp a caller-supplied dimension to something the planner can divide by.
/// Negative, NaN and infinite widths all collapse to 0, which then clamps to
/// the per-device floors downstream instead of erroring.
pub(crate) fn sane_dimension(value: f32) -> f32 {
    if value.is_finite() && value > 0.0 {
        value
    } else {
        0.0
    }
}
