//! # Photo Decision Context
//!
//! Input types for the photo strategy policies: what the photo is for, what
//! the device can do, what the user prefers, and how much room the hosting
//! view actually has. All of these are plain values constructed fresh per
//! decision call; nothing here is shared or cached between calls.

use clap::ValueEnum;
use serde::{Deserialize, Serialize};

use pres_layout::DeviceClass;

/// Semantic purpose of a photo. The dominant classifier for every strategy
/// decision: capture source, display treatment, edit-ability, compression,
/// and auto-optimization all key off this first.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, ValueEnum, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PhotoPurpose {
    /// Exterior/interior shots of a vehicle, shown for visual appeal.
    VehiclePhoto,
    /// Fuel purchase receipt, read back by number-extraction tooling.
    FuelReceipt,
    /// Pump display at fill-up time, read back by number-extraction tooling.
    PumpDisplay,
    /// Odometer reading, read back by number-extraction tooling.
    Odometer,
    /// Maintenance record snapshot, kept for reference.
    Maintenance,
    /// General expense snapshot, kept for reference.
    Expense,
    /// User avatar.
    Profile,
    /// Registration, insurance card, or other paperwork.
    Document,
}

impl PhotoPurpose {
    /// Every purpose, in declaration order. Handy for sweeps and audits.
    pub const ALL: [PhotoPurpose; 8] = [
        PhotoPurpose::VehiclePhoto,
        PhotoPurpose::FuelReceipt,
        PhotoPurpose::PumpDisplay,
        PhotoPurpose::Odometer,
        PhotoPurpose::Maintenance,
        PhotoPurpose::Expense,
        PhotoPurpose::Profile,
        PhotoPurpose::Document,
    ];

    /// Whether the photo's value lies in unaltered fidelity (receipts, pump
    /// displays, odometer readings, paperwork). Evidentiary purposes are
    /// excluded from editing no matter what the device or user would allow.
    pub fn is_evidentiary(&self) -> bool {
        matches!(
            self,
            PhotoPurpose::FuelReceipt
                | PhotoPurpose::PumpDisplay
                | PhotoPurpose::Odometer
                | PhotoPurpose::Document
        )
    }
}

/// User's stated preference for where photos should come from when both
/// sources are on the table.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, ValueEnum, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SourcePreference {
    Camera,
    Library,
    Either,
}

/// Per-user photo preferences.
///
/// `quality_baseline` is the starting point for compression decisions and is
/// kept inside `0.0..=1.0`; use [`UserPreferences::new`] for values from
/// outside the process so degenerate floats are absorbed here instead of
/// leaking into policy math.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct UserPreferences {
    pub preferred_source: SourcePreference,
    pub allow_editing: bool,
    pub quality_baseline: f32,
}

impl UserPreferences {
    /// Baseline used when no usable value was supplied.
    pub const DEFAULT_BASELINE: f32 = 0.8;

    /// Builds preferences with the baseline clamped to `0.0..=1.0`.
    /// Non-finite baselines fall back to [`Self::DEFAULT_BASELINE`].
    pub fn new(
        preferred_source: SourcePreference,
        allow_editing: bool,
        quality_baseline: f32,
    ) -> Self {
        let quality_baseline = if quality_baseline.is_finite() {
            quality_baseline.clamp(0.0, 1.0)
        } else {
            Self::DEFAULT_BASELINE
        };
        Self {
            preferred_source,
            allow_editing,
            quality_baseline,
        }
    }
}

impl Default for UserPreferences {
    fn default() -> Self {
        Self {
            preferred_source: SourcePreference::Either,
            allow_editing: true,
            quality_baseline: Self::DEFAULT_BASELINE,
        }
    }
}

/// What the device reports it can do with photos. These are declarations
/// from the platform layer, taken at face value by the policies.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeviceCapabilities {
    pub has_camera: bool,
    pub has_photo_library: bool,
    pub supports_editing: bool,
}

impl Default for DeviceCapabilities {
    fn default() -> Self {
        Self {
            has_camera: true,
            has_photo_library: true,
            supports_editing: true,
        }
    }
}

/// A width/height pair in points.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Extent {
    pub w: f32,
    pub h: f32,
}

impl Extent {
    /// Builds an extent with degenerate sides (NaN, infinite, negative)
    /// clamped to zero.
    pub fn new(w: f32, h: f32) -> Self {
        Self {
            w: sane(w),
            h: sane(h),
        }
    }

    /// Area in square points; degenerate sides read as zero even on values
    /// built without [`Extent::new`].
    pub fn area(&self) -> f32 {
        sane(self.w) * sane(self.h)
    }
}

fn sane(value: f32) -> f32 {
    if value.is_finite() && value > 0.0 {
        value
    } else {
        0.0
    }
}

/// Everything the photo policies look at besides the purpose itself.
///
/// Constructed by the hosting view per decision; the policies never mutate
/// it and never hold onto it past the call.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct PhotoContext {
    /// Device class hosting the photo flow; informs the capture source
    /// recommendation (a handheld near the vehicle favors the camera).
    pub device: DeviceClass,
    pub preferences: UserPreferences,
    pub capabilities: DeviceCapabilities,
    /// Space the hosting view can give the photo.
    pub available_space: Extent,
    /// Full screen size, the denominator for utilization.
    pub screen_size: Extent,
}

impl Default for PhotoContext {
    /// A phone-shaped context with full capabilities and stock preferences,
    /// sized like a list row on a portrait phone screen.
    fn default() -> Self {
        Self {
            device: DeviceClass::Phone,
            preferences: UserPreferences::default(),
            capabilities: DeviceCapabilities::default(),
            available_space: Extent::new(358.0, 120.0),
            screen_size: Extent::new(390.0, 844.0),
        }
    }
}

impl PhotoContext {
    /// Fraction of the screen the photo area occupies, the secondary gate
    /// for display-strategy choices. A degenerate screen (zero or garbage
    /// dimensions) yields 0.0 rather than NaN, which drives every gated
    /// decision to its compact branch.
    ///
    /// Time complexity: O(1) - two multiplies and a divide.
    pub fn space_utilization(&self) -> f32 {
        let screen = self.screen_size.area();
        if screen <= 0.0 {
            return 0.0;
        }
        self.available_space.area() / screen
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn context_with_areas(avail: Extent, screen: Extent) -> PhotoContext {
        PhotoContext {
            device: DeviceClass::Phone,
            preferences: UserPreferences::default(),
            capabilities: DeviceCapabilities::default(),
            available_space: avail,
            screen_size: screen,
        }
    }

    #[test]
    fn test_evidentiary_split_covers_all_purposes() {
        let evidentiary: Vec<_> = PhotoPurpose::ALL
            .iter()
            .filter(|p| p.is_evidentiary())
            .collect();
        assert_eq!(evidentiary.len(), 4);
        assert!(PhotoPurpose::FuelReceipt.is_evidentiary());
        assert!(PhotoPurpose::Document.is_evidentiary());
        assert!(!PhotoPurpose::VehiclePhoto.is_evidentiary());
        assert!(!PhotoPurpose::Profile.is_evidentiary());
    }

    #[test]
    fn test_baseline_is_clamped_on_construction() {
        let prefs = UserPreferences::new(SourcePreference::Either, true, 1.7);
        assert_eq!(prefs.quality_baseline, 1.0);
        let prefs = UserPreferences::new(SourcePreference::Either, true, -0.2);
        assert_eq!(prefs.quality_baseline, 0.0);
        let prefs = UserPreferences::new(SourcePreference::Either, true, f32::NAN);
        assert_eq!(prefs.quality_baseline, UserPreferences::DEFAULT_BASELINE);
    }

    #[test]
    fn test_space_utilization_basic_ratio() {
        let ctx = context_with_areas(Extent::new(50.0, 50.0), Extent::new(100.0, 100.0));
        assert_eq!(ctx.space_utilization(), 0.25);
    }

    #[test]
    fn test_space_utilization_guards_degenerate_screens() {
        let ctx = context_with_areas(Extent::new(50.0, 50.0), Extent::new(0.0, 100.0));
        assert_eq!(ctx.space_utilization(), 0.0);
        let ctx = context_with_areas(Extent::new(50.0, 50.0), Extent::new(f32::NAN, 100.0));
        assert_eq!(ctx.space_utilization(), 0.0);
    }

    #[test]
    fn test_degenerate_available_space_reads_as_zero() {
        let ctx = context_with_areas(
            Extent::new(f32::INFINITY, -3.0),
            Extent::new(100.0, 100.0),
        );
        assert_eq!(ctx.space_utilization(), 0.0);
    }
}
