//! Common test utilities and helpers for the presentation policy tests
//!
//! This module provides shared context builders and assertion helpers for
//! exercising the decision functions across realistic device situations.

/// Ready-made photo contexts for strategy tests
pub mod contexts {
    use adaptive_presentation::{
        DeviceCapabilities, DeviceClass, Extent, PhotoContext, SourcePreference, UserPreferences,
    };

    /// Standard screen sizes in points
    pub const PHONE_SCREEN: (f32, f32) = (390.0, 844.0);
    pub const TABLET_SCREEN: (f32, f32) = (1024.0, 768.0);
    pub const DESKTOP_SCREEN: (f32, f32) = (1440.0, 900.0);

    /// Fully capable phone with stock preferences and a list-row sized slot.
    pub fn phone_context() -> PhotoContext {
        PhotoContext {
            device: DeviceClass::Phone,
            preferences: UserPreferences::default(),
            capabilities: DeviceCapabilities::default(),
            available_space: Extent::new(358.0, 120.0),
            screen_size: Extent::new(PHONE_SCREEN.0, PHONE_SCREEN.1),
        }
    }

    /// Context whose utilization is exactly `numerator / 100` (for values
    /// that divide cleanly in binary, e.g. 25.0 -> 0.25).
    pub fn context_with_utilization(numerator: f32) -> PhotoContext {
        PhotoContext {
            available_space: Extent::new(numerator, 100.0),
            screen_size: Extent::new(100.0, 100.0),
            ..phone_context()
        }
    }

    /// Phone context with explicit capability flags.
    pub fn context_with_caps(camera: bool, library: bool, editing: bool) -> PhotoContext {
        PhotoContext {
            capabilities: DeviceCapabilities {
                has_camera: camera,
                has_photo_library: library,
                supports_editing: editing,
            },
            ..phone_context()
        }
    }

    /// Phone context with an explicit source preference.
    pub fn context_preferring(preference: SourcePreference) -> PhotoContext {
        let mut context = phone_context();
        context.preferences.preferred_source = preference;
        context
    }
}

/// Custom assertions for decision values
pub mod assertions {
    use adaptive_presentation::LayoutDecision;

    /// Assert two floats agree to within a millipoint.
    pub fn assert_close(actual: f32, expected: f32, label: &str) {
        assert!(
            (actual - expected).abs() < 1e-3,
            "{} mismatch: expected {}, got {}",
            label,
            expected,
            actual
        );
    }

    /// Assert a layout decision satisfies every construction guarantee.
    pub fn assert_plan_in_bounds(plan: &LayoutDecision) {
        assert!(plan.columns >= 1, "columns fell below 1: {:?}", plan);
        assert!(
            (200.0..=400.0).contains(&plan.card_width),
            "card width out of bounds: {:?}",
            plan
        );
        assert!(
            plan.card_height.is_finite() && plan.card_height > 0.0,
            "card height degenerate: {:?}",
            plan
        );
        assert!(plan.spacing > 0.0, "spacing degenerate: {:?}", plan);
        assert!(
            plan.expansion_scale >= 1.0,
            "expansion below identity: {:?}",
            plan
        );
        assert!(
            plan.animation_duration > 0.0,
            "animation duration degenerate: {:?}",
            plan
        );
    }
}
