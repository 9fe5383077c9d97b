//! # Display Treatment Selection
//!
//! Maps a photo purpose, gated by how much of the screen the hosting view
//! actually has, to the treatment the render layer should apply. Purposes
//! with fixed presentation (reference thumbnails, rounded avatars) ignore
//! the gate entirely.

use crate::context::{PhotoContext, PhotoPurpose};
use crate::strategy::{PhotoDisplayStrategy, StrategyRules};

/// Picks the display treatment for a photo.
///
/// The gate is strict: a utilization exactly equal to a threshold takes the
/// compact branch. Receipts and pump displays escalate all the way to
/// full-size because the numbers on them have to stay readable; vehicle
/// photos, odometer shots, and documents step up to aspect-fit; maintenance
/// and expense shots stay thumbnails and profiles stay rounded no matter
/// how much room there is.
///
/// Time complexity: O(1) - one utilization ratio and one table lookup.
pub fn display_strategy(
    purpose: PhotoPurpose,
    context: &PhotoContext,
    rules: &StrategyRules,
) -> PhotoDisplayStrategy {
    let utilization = context.space_utilization();
    match purpose {
        PhotoPurpose::VehiclePhoto => {
            if utilization > rules.vehicle_gate {
                PhotoDisplayStrategy::AspectFit
            } else {
                PhotoDisplayStrategy::Thumbnail
            }
        }
        PhotoPurpose::FuelReceipt | PhotoPurpose::PumpDisplay => {
            if utilization > rules.receipt_gate {
                PhotoDisplayStrategy::FullSize
            } else {
                PhotoDisplayStrategy::AspectFit
            }
        }
        PhotoPurpose::Odometer => {
            if utilization > rules.odometer_gate {
                PhotoDisplayStrategy::AspectFit
            } else {
                PhotoDisplayStrategy::Thumbnail
            }
        }
        PhotoPurpose::Maintenance | PhotoPurpose::Expense => PhotoDisplayStrategy::Thumbnail,
        PhotoPurpose::Profile => PhotoDisplayStrategy::Rounded,
        PhotoPurpose::Document => {
            if utilization > rules.document_gate {
                PhotoDisplayStrategy::AspectFit
            } else {
                PhotoDisplayStrategy::Thumbnail
            }
        }
    }
}
