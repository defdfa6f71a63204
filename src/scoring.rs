//! Priority scoring and zone assignment.
//!
//! The priority is a fixed-weight linear combination of the normalized
//! attributes, clamped to `[0,1]` and rounded to four decimals. Zones are
//! assigned by closed lower thresholds, evaluated from `A` down to `D`.

use crate::model::{Attributes, ScoredSku, SkuRecord, ZoneLabel};
use crate::types::round_half_up;

pub const WEIGHT_OUTBOUND_FREQUENCY: f64 = 0.38;
pub const WEIGHT_WEIGHT: f64 = 0.24;
pub const WEIGHT_VOLUME: f64 = 0.20;
pub const WEIGHT_INBOUND_FREQUENCY: f64 = 0.18;

/// Decimal places kept on the priority.
pub const PRIORITY_DECIMALS: u32 = 4;

/// Lowest priority that still lands in zone A.
pub const ZONE_A_THRESHOLD: f64 = 0.70;
/// Lowest priority that still lands in zone B.
pub const ZONE_B_THRESHOLD: f64 = 0.50;
/// Lowest priority that still lands in zone C.
pub const ZONE_C_THRESHOLD: f64 = 0.30;

/// Computes the rounded priority of a set of normalized attributes.
///
/// # Examples
/// ```
/// use slap_planner::model::Attributes;
/// use slap_planner::scoring::priority;
///
/// let attrs = Attributes { f: 0.25, w: 0.4, s: 0.2, i: 0.3 };
/// assert_eq!(priority(&attrs), 0.285);
/// ```
pub fn priority(attributes: &Attributes) -> f64 {
    let weighted = WEIGHT_OUTBOUND_FREQUENCY * attributes.f
        + WEIGHT_WEIGHT * attributes.w
        + WEIGHT_VOLUME * attributes.s
        + WEIGHT_INBOUND_FREQUENCY * attributes.i;
    let clamped = if weighted.is_nan() {
        0.0
    } else {
        weighted.clamp(0.0, 1.0)
    };
    round_half_up(clamped, PRIORITY_DECIMALS)
}

/// Maps a priority onto its zone.
pub fn zone_for_priority(priority: f64) -> ZoneLabel {
    if priority >= ZONE_A_THRESHOLD {
        ZoneLabel::A
    } else if priority >= ZONE_B_THRESHOLD {
        ZoneLabel::B
    } else if priority >= ZONE_C_THRESHOLD {
        ZoneLabel::C
    } else {
        ZoneLabel::D
    }
}

/// Derives priority and zone for a registered SKU.
pub fn score(record: &SkuRecord) -> ScoredSku {
    let priority = priority(&record.attributes);
    ScoredSku {
        id: record.id,
        sku_code: record.sku_code.clone(),
        product_name: record.product_name.clone(),
        attributes: record.attributes,
        priority,
        zone: zone_for_priority(priority),
    }
}
