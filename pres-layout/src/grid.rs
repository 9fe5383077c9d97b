// SPDX-License-Identifier: MIT
// Column selection. Pure banding math: integer division pushes the count
// into a band, clamp pins the band to what the device can legibly show.

use crate::context::{sane_dimension, ContentComplexity, DeviceClass};

/// Density band: roughly one column per `per_column` items, pinned to
/// `lo..=hi`. Integer division keeps the whole decision exact.
fn band(count: u32, per_column: u32, lo: u32, hi: u32) -> u32 {
    (count / per_column).clamp(lo, hi)
}

/// Picks the column count for a content grid.
///
/// Every device class resolves through its own arm so a new class cannot be
/// added without choosing its banding here. Column counts are exact integers
/// and never depend on float rounding: screen width only participates in
/// coarse threshold checks (phone landscape split, desktop tiering).
///
/// Degenerate widths (NaN, infinite, non-positive) are treated as zero,
/// which lands in the narrowest band for the device rather than erroring.
///
/// Time complexity: O(1) - a handful of integer ops per call.
pub fn column_count(
    content_count: u32,
    screen_width: f32,
    device: DeviceClass,
    complexity: ContentComplexity,
) -> u32 {
    let width = sane_dimension(screen_width);
    match device {
        // Two columns only when there is both enough content and enough
        // horizontal room (landscape or a large phone).
        DeviceClass::Phone => {
            if content_count <= 2 {
                1
            } else if width > 400.0 {
                2
            } else {
                1
            }
        }
        // Spatial canvas: panes float freely, the grid itself stays single
        // file and the volumetric layer does the spreading.
        DeviceClass::Vision => 1,
        DeviceClass::Tablet => match complexity {
            ContentComplexity::Simple => band(content_count, 2, 2, 4),
            ContentComplexity::Moderate => band(content_count, 3, 2, 3),
            ContentComplexity::Complex
            | ContentComplexity::VeryComplex
            | ContentComplexity::Advanced => band(content_count, 4, 1, 2),
        },
        // Desktop tiers by window width, not complexity: the window is the
        // user's density control there.
        DeviceClass::Desktop => {
            if width < 1200.0 {
                band(content_count, 3, 2, 3)
            } else if width < 1800.0 {
                band(content_count, 4, 3, 4)
            } else {
                band(content_count, 6, 4, 6)
            }
        }
        DeviceClass::Watch => 1,
        DeviceClass::Tv => band(content_count, 3, 2, 3),
        DeviceClass::Car => band(content_count, 2, 1, 2),
    }
}
