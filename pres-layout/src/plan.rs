// SPDX-License-Identifier: MIT
// Plan construction. Combines the column decision with the sizing and
// motion tables into one value a renderer can apply verbatim.

use serde::{Deserialize, Serialize};

use crate::context::{sane_dimension, ContentComplexity, DeviceClass};
use crate::grid::column_count;
use crate::rules::LayoutRules;

/// A complete presentation plan for one context.
///
/// Plain data, no behavior: render layers consume the fields directly and
/// two plans for the same inputs are bit-identical, so callers may cache or
/// diff them with `==`.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct LayoutDecision {
    /// Grid columns, always at least 1.
    pub columns: u32,
    /// Gap between cards in points.
    pub spacing: f32,
    /// Card width after clamping to the legibility bounds.
    pub card_width: f32,
    /// Card height derived from width and the content aspect table.
    pub card_height: f32,
    /// Edge padding in points.
    pub padding: f32,
    /// Scale applied to a card on focus/hover, `>= 1.0`.
    pub expansion_scale: f32,
    /// Motion duration in seconds for entry/expansion transitions.
    pub animation_duration: f32,
}

/// Builds a layout plan from explicit rules.
///
/// Width handling is total: degenerate screen widths (NaN, infinite,
/// non-positive) are treated as zero usable space, which drives the card
/// width to the configured floor instead of producing NaN downstream. The
/// card width clamp means the plan is always renderable, even when the
/// screen cannot honestly fit `columns` cards at the floor width.
///
/// Time complexity: O(1) - pure arithmetic, no allocation.
pub fn plan_layout(
    content_count: u32,
    screen_width: f32,
    device: DeviceClass,
    complexity: ContentComplexity,
    rules: &LayoutRules,
) -> LayoutDecision {
    let bases = rules.bases(device);
    let columns = column_count(content_count, screen_width, device, complexity);
    let spacing = bases.spacing * complexity.spacing_factor();

    // Padding is charged on both edges; gaps only between columns.
    let width = sane_dimension(screen_width);
    let available = (width - 2.0 * rules.padding).max(0.0);
    let gaps = spacing * (columns - 1) as f32;
    let card_width =
        ((available - gaps) / columns as f32).clamp(rules.min_card_width, rules.max_card_width);
    let card_height = card_width * complexity.aspect_ratio();

    LayoutDecision {
        columns,
        spacing,
        card_width,
        card_height,
        padding: rules.padding,
        expansion_scale: bases.expansion * complexity.expansion_factor(),
        animation_duration: bases.duration,
    }
}

/// Builds a layout plan with the production rule tables.
///
/// Equivalent to [`plan_layout`] with [`LayoutRules::default`]; this is the
/// call sites' common path.
pub fn decide_layout(
    content_count: u32,
    screen_width: f32,
    device: DeviceClass,
    complexity: ContentComplexity,
) -> LayoutDecision {
    plan_layout(
        content_count,
        screen_width,
        device,
        complexity,
        &LayoutRules::default(),
    )
}
