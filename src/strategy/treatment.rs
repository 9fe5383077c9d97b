//! # Photo Treatment Policies
//!
//! The three smaller strategy outputs: whether the user may edit the photo
//! before it is kept, what compression quality to encode it at, and whether
//! to run automatic optimization for text extraction.

use crate::context::{PhotoContext, PhotoPurpose, UserPreferences};
use crate::strategy::StrategyRules;

/// Whether the edit step is offered after capture.
///
/// Requires all three votes: the device supports editing, the user allows
/// it, and the purpose is not evidentiary. Receipts, pump displays,
/// odometer readings, and documents stay untouched regardless of
/// capability or preference.
pub fn editing_enabled(purpose: PhotoPurpose, context: &PhotoContext) -> bool {
    context.capabilities.supports_editing
        && context.preferences.allow_editing
        && !purpose.is_evidentiary()
}

/// Encoding quality in `0.0..=1.0`.
///
/// Starts from the user's baseline and adds a purpose bonus: visual-appeal
/// purposes get a small bump, text-readability purposes a larger one,
/// reference purposes none. The result is clamped into the unit range, so
/// a generous baseline simply saturates at 1.0.
///
/// Time complexity: O(1) - one table lookup and one clamp.
pub fn compression_quality(
    purpose: PhotoPurpose,
    context: &PhotoContext,
    rules: &StrategyRules,
) -> f32 {
    let bonus = match purpose {
        PhotoPurpose::VehiclePhoto | PhotoPurpose::Profile => rules.visual_bonus,
        PhotoPurpose::FuelReceipt
        | PhotoPurpose::PumpDisplay
        | PhotoPurpose::Odometer
        | PhotoPurpose::Document => rules.text_bonus,
        PhotoPurpose::Maintenance | PhotoPurpose::Expense => 0.0,
    };
    let baseline = if context.preferences.quality_baseline.is_finite() {
        context.preferences.quality_baseline
    } else {
        UserPreferences::DEFAULT_BASELINE
    };
    (baseline + bonus).clamp(0.0, 1.0)
}

/// Whether the pipeline should auto-optimize the shot for extraction.
///
/// True only for purposes that feed automated text/number reading (fuel
/// receipts, pump displays, odometer). Everything else defers to explicit
/// user choice, including documents, which are read by humans first.
pub fn auto_optimize(purpose: PhotoPurpose) -> bool {
    matches!(
        purpose,
        PhotoPurpose::FuelReceipt | PhotoPurpose::PumpDisplay | PhotoPurpose::Odometer
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::context::{DeviceCapabilities, Extent, SourcePreference};
    use pres_layout::DeviceClass;

    fn context(supports_editing: bool, allow_editing: bool, baseline: f32) -> PhotoContext {
        PhotoContext {
            device: DeviceClass::Phone,
            preferences: UserPreferences::new(SourcePreference::Either, allow_editing, baseline),
            capabilities: DeviceCapabilities {
                has_camera: true,
                has_photo_library: true,
                supports_editing,
            },
            available_space: Extent::new(300.0, 200.0),
            screen_size: Extent::new(390.0, 844.0),
        }
    }

    fn close(a: f32, b: f32) -> bool {
        (a - b).abs() < 1e-3
    }

    #[test]
    fn test_evidentiary_purposes_are_never_editable() {
        for purpose in PhotoPurpose::ALL.iter().filter(|p| p.is_evidentiary()) {
            for supports in [false, true] {
                for allows in [false, true] {
                    assert!(
                        !editing_enabled(*purpose, &context(supports, allows, 0.8)),
                        "{:?} became editable",
                        purpose
                    );
                }
            }
        }
    }

    #[test]
    fn test_editing_needs_all_three_votes() {
        let purpose = PhotoPurpose::VehiclePhoto;
        assert!(editing_enabled(purpose, &context(true, true, 0.8)));
        assert!(!editing_enabled(purpose, &context(false, true, 0.8)));
        assert!(!editing_enabled(purpose, &context(true, false, 0.8)));
    }

    #[test]
    fn test_quality_bonuses_by_purpose_family() {
        let rules = StrategyRules::default();
        let ctx = context(true, true, 0.8);
        assert!(close(
            compression_quality(PhotoPurpose::VehiclePhoto, &ctx, &rules),
            0.9
        ));
        assert!(close(
            compression_quality(PhotoPurpose::Profile, &ctx, &rules),
            0.9
        ));
        assert!(close(
            compression_quality(PhotoPurpose::FuelReceipt, &ctx, &rules),
            0.95
        ));
        assert_eq!(
            compression_quality(PhotoPurpose::Maintenance, &ctx, &rules),
            0.8
        );
        assert_eq!(
            compression_quality(PhotoPurpose::Expense, &ctx, &rules),
            0.8
        );
    }

    #[test]
    fn test_quality_saturates_at_one() {
        let rules = StrategyRules::default();
        let ctx = context(true, true, 0.9);
        assert_eq!(
            compression_quality(PhotoPurpose::Odometer, &ctx, &rules),
            1.0
        );
        let ctx = context(true, true, 1.0);
        assert_eq!(
            compression_quality(PhotoPurpose::Document, &ctx, &rules),
            1.0
        );
    }

    #[test]
    fn test_quality_stays_in_unit_range_for_hostile_baselines() {
        let rules = StrategyRules::default();
        // Bypass the constructor clamp on purpose.
        let mut ctx = context(true, true, 0.8);
        ctx.preferences.quality_baseline = f32::NAN;
        let q = compression_quality(PhotoPurpose::Maintenance, &ctx, &rules);
        assert!((0.0..=1.0).contains(&q));
        ctx.preferences.quality_baseline = -5.0;
        let q = compression_quality(PhotoPurpose::Maintenance, &ctx, &rules);
        assert_eq!(q, 0.0);
    }

    #[test]
    fn test_auto_optimize_only_for_extraction_purposes() {
        let expected: &[PhotoPurpose] = &[
            PhotoPurpose::FuelReceipt,
            PhotoPurpose::PumpDisplay,
            PhotoPurpose::Odometer,
        ];
        for purpose in PhotoPurpose::ALL {
            assert_eq!(auto_optimize(purpose), expected.contains(&purpose));
        }
    }
}
