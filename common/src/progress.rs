//! Synthetic delivery progress.
//!
//! The order service only records paid/delivered flags, so progress for an
//! order in transit is estimated from how long ago it was paid against a
//! fixed delivery window. It is an estimate, not a carrier signal.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::order::Order;

/// Assumed time from payment to delivery: 7 days.
pub const ESTIMATED_DELIVERY_MS: i64 = 7 * 24 * 60 * 60 * 1000;

/// Ceiling for an order that has not been delivered. Only delivery reaches 100.
pub const IN_TRANSIT_CAP: u8 = 90;

/// Estimate delivery progress (0-100) for `order` as of `now`.
///
/// Unpaid is always 0, even if the delivered flag is set. The estimate is
/// anchored on `paid_at`, then `created_at`, then `now` itself.
pub fn compute_progress(order: &Order, now: DateTime<Utc>) -> u8 {
    if !order.is_paid {
        return 0;
    }
    if order.is_delivered {
        return 100;
    }

    let anchor = order.paid_at.or(order.created_at).unwrap_or(now);
    let elapsed_ms = (now - anchor).num_milliseconds().max(0);

    // Anything past the full window is already over the cap.
    let elapsed_ms = elapsed_ms.min(ESTIMATED_DELIVERY_MS);
    let raw = (elapsed_ms * 100 + ESTIMATED_DELIVERY_MS / 2) / ESTIMATED_DELIVERY_MS;

    (raw as u8).min(IN_TRANSIT_CAP)
}

/// Human-facing tracking status derived from a progress value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TrackingStatus {
    Processing,
    Confirmed,
    Packaged,
    Shipped,
    OutForDelivery,
    Delivered,
}

impl TrackingStatus {
    pub fn label(self) -> &'static str {
        match self {
            TrackingStatus::Processing => "Processing",
            TrackingStatus::Confirmed => "Confirmed",
            TrackingStatus::Packaged => "Packaged",
            TrackingStatus::Shipped => "Shipped",
            TrackingStatus::OutForDelivery => "Out for delivery",
            TrackingStatus::Delivered => "Delivered",
        }
    }
}

impl std::fmt::Display for TrackingStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// Map a progress value to its status. Values above 100 count as delivered.
pub fn classify_status(progress: u8) -> TrackingStatus {
    match progress {
        0 => TrackingStatus::Processing,
        1..=24 => TrackingStatus::Confirmed,
        25..=49 => TrackingStatus::Packaged,
        50..=74 => TrackingStatus::Shipped,
        75..=99 => TrackingStatus::OutForDelivery,
        _ => TrackingStatus::Delivered,
    }
}
