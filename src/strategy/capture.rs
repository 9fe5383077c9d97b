//! # Capture Source Selection
//!
//! Decides whether a photo flow should open the camera or the photo library.
//! Availability wins first, the user's explicit preference second, and only
//! when both sources are live and the user does not care does the
//! purpose-keyed recommendation get a vote. That recommendation sits behind
//! [`CaptureAdvisor`] so hosting apps can supply their own without touching
//! the rest of the ladder.

use crate::context::{PhotoContext, PhotoPurpose, SourcePreference};
use crate::strategy::PhotoCaptureStrategy;

/// Purpose-keyed capture recommendation, consulted only when both sources
/// are available and the user preference is `Either`.
///
/// Implementations must be pure: same purpose and context, same answer.
pub trait CaptureAdvisor {
    fn recommend(&self, purpose: PhotoPurpose, context: &PhotoContext) -> PhotoCaptureStrategy;
}

/// Stock recommendation table.
///
/// Purposes whose value decays with staleness (receipts, pump displays,
/// odometer readings, paperwork being filed right now) point at the camera.
/// Profile photos point at the library, where the flattering shots live.
/// The rest follow the device: a handheld is plausibly standing at the
/// vehicle, a desk machine is plausibly importing existing shots.
#[derive(Clone, Copy, Debug, Default)]
pub struct DefaultAdvisor;

impl CaptureAdvisor for DefaultAdvisor {
    fn recommend(&self, purpose: PhotoPurpose, context: &PhotoContext) -> PhotoCaptureStrategy {
        match purpose {
            PhotoPurpose::FuelReceipt
            | PhotoPurpose::PumpDisplay
            | PhotoPurpose::Odometer
            | PhotoPurpose::Document => PhotoCaptureStrategy::Camera,
            PhotoPurpose::Profile => PhotoCaptureStrategy::PhotoLibrary,
            PhotoPurpose::VehiclePhoto | PhotoPurpose::Maintenance | PhotoPurpose::Expense => {
                if context.device.is_handheld() {
                    PhotoCaptureStrategy::Camera
                } else {
                    PhotoCaptureStrategy::PhotoLibrary
                }
            }
        }
    }
}

/// Picks the capture source for a photo flow.
///
/// Resolution ladder, in order:
/// 1. Neither source available: return `PhotoLibrary` as an inert fallback;
///    the hosting UI is expected to surface a file-selection affordance.
/// 2. Exactly one source available: return it, ignoring purpose and
///    preference.
/// 3. Both available: an explicit user preference wins outright; `Either`
///    defers to the advisor's purpose-keyed recommendation.
///
/// Time complexity: O(1) - two capability checks plus one table lookup.
pub fn capture_strategy(
    purpose: PhotoPurpose,
    context: &PhotoContext,
    advisor: &dyn CaptureAdvisor,
) -> PhotoCaptureStrategy {
    let caps = context.capabilities;
    match (caps.has_camera, caps.has_photo_library) {
        (false, false) => PhotoCaptureStrategy::PhotoLibrary,
        (true, false) => PhotoCaptureStrategy::Camera,
        (false, true) => PhotoCaptureStrategy::PhotoLibrary,
        (true, true) => match context.preferences.preferred_source {
            SourcePreference::Camera => PhotoCaptureStrategy::Camera,
            SourcePreference::Library => PhotoCaptureStrategy::PhotoLibrary,
            SourcePreference::Either => advisor.recommend(purpose, context),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::context::{DeviceCapabilities, Extent, UserPreferences};
    use pres_layout::DeviceClass;

    fn context(device: DeviceClass, caps: DeviceCapabilities, prefer: SourcePreference) -> PhotoContext {
        PhotoContext {
            device,
            preferences: UserPreferences::new(prefer, true, 0.8),
            capabilities: caps,
            available_space: Extent::new(300.0, 200.0),
            screen_size: Extent::new(390.0, 844.0),
        }
    }

    fn caps(camera: bool, library: bool) -> DeviceCapabilities {
        DeviceCapabilities {
            has_camera: camera,
            has_photo_library: library,
            supports_editing: true,
        }
    }

    #[test]
    fn test_no_sources_falls_back_to_library_everywhere() {
        for purpose in PhotoPurpose::ALL {
            for prefer in [
                SourcePreference::Camera,
                SourcePreference::Library,
                SourcePreference::Either,
            ] {
                let ctx = context(DeviceClass::Phone, caps(false, false), prefer);
                assert_eq!(
                    capture_strategy(purpose, &ctx, &DefaultAdvisor),
                    PhotoCaptureStrategy::PhotoLibrary
                );
            }
        }
    }

    #[test]
    fn test_single_source_wins_over_preference() {
        // Camera only, user prefers the library: camera still wins.
        let ctx = context(DeviceClass::Phone, caps(true, false), SourcePreference::Library);
        assert_eq!(
            capture_strategy(PhotoPurpose::VehiclePhoto, &ctx, &DefaultAdvisor),
            PhotoCaptureStrategy::Camera
        );
        let ctx = context(DeviceClass::Phone, caps(false, true), SourcePreference::Camera);
        assert_eq!(
            capture_strategy(PhotoPurpose::VehiclePhoto, &ctx, &DefaultAdvisor),
            PhotoCaptureStrategy::PhotoLibrary
        );
    }

    #[test]
    fn test_explicit_preference_overrides_the_recommendation() {
        // Pump displays recommend the camera, but the user said library.
        let ctx = context(DeviceClass::Phone, caps(true, true), SourcePreference::Library);
        assert_eq!(
            capture_strategy(PhotoPurpose::PumpDisplay, &ctx, &DefaultAdvisor),
            PhotoCaptureStrategy::PhotoLibrary
        );
        // Profiles recommend the library, but the user said camera.
        let ctx = context(DeviceClass::Phone, caps(true, true), SourcePreference::Camera);
        assert_eq!(
            capture_strategy(PhotoPurpose::Profile, &ctx, &DefaultAdvisor),
            PhotoCaptureStrategy::Camera
        );
    }

    #[test]
    fn test_either_defers_to_the_stock_table() {
        let ctx = context(DeviceClass::Phone, caps(true, true), SourcePreference::Either);
        assert_eq!(
            capture_strategy(PhotoPurpose::FuelReceipt, &ctx, &DefaultAdvisor),
            PhotoCaptureStrategy::Camera
        );
        assert_eq!(
            capture_strategy(PhotoPurpose::Profile, &ctx, &DefaultAdvisor),
            PhotoCaptureStrategy::PhotoLibrary
        );
    }

    #[test]
    fn test_stock_table_splits_on_device_for_flexible_purposes() {
        let handheld = context(DeviceClass::Phone, caps(true, true), SourcePreference::Either);
        let desk = context(DeviceClass::Desktop, caps(true, true), SourcePreference::Either);
        for purpose in [
            PhotoPurpose::VehiclePhoto,
            PhotoPurpose::Maintenance,
            PhotoPurpose::Expense,
        ] {
            assert_eq!(
                capture_strategy(purpose, &handheld, &DefaultAdvisor),
                PhotoCaptureStrategy::Camera
            );
            assert_eq!(
                capture_strategy(purpose, &desk, &DefaultAdvisor),
                PhotoCaptureStrategy::PhotoLibrary
            );
        }
    }

    #[test]
    fn test_custom_advisor_is_honored() {
        struct LibraryAlways;
        impl CaptureAdvisor for LibraryAlways {
            fn recommend(&self, _: PhotoPurpose, _: &PhotoContext) -> PhotoCaptureStrategy {
                PhotoCaptureStrategy::PhotoLibrary
            }
        }
        let ctx = context(DeviceClass::Phone, caps(true, true), SourcePreference::Either);
        assert_eq!(
            capture_strategy(PhotoPurpose::FuelReceipt, &ctx, &LibraryAlways),
            PhotoCaptureStrategy::PhotoLibrary
        );
        // The advisor only speaks when the ladder reaches it.
        let ctx = context(DeviceClass::Phone, caps(true, false), SourcePreference::Either);
        assert_eq!(
            capture_strategy(PhotoPurpose::FuelReceipt, &ctx, &LibraryAlways),
            PhotoCaptureStrategy::Camera
        );
    }
}
