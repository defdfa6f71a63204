//! Conversion of raw SKU attributes onto the canonical `[0,1]` scale.
//!
//! Every attribute is divided by a fixed full-scale value and saturates at 1.
//! Normalization never fails: missing or non-numeric input counts as 0 and
//! negative input is clamped to 0 before dividing.

use crate::model::{Attributes, RawAttributes};

/// Outbound picks per day that map to `f = 1`.
pub const FREQUENCY_FULL_SCALE: f64 = 200.0;
/// Weight in kg that maps to `w = 1`.
pub const WEIGHT_FULL_SCALE: f64 = 20.0;
/// Volume in cm³ that maps to `s = 1`.
pub const VOLUME_FULL_SCALE: f64 = 50_000.0;
/// Inbound deliveries per day that map to `i = 1`.
pub const INBOUND_FULL_SCALE: f64 = 20.0;

/// Normalizes a single raw value against its full-scale divisor.
///
/// # Examples
/// ```
/// use slap_planner::normalizer::{normalize_value, FREQUENCY_FULL_SCALE};
///
/// assert_eq!(normalize_value(Some(100.0), FREQUENCY_FULL_SCALE), 0.5);
/// assert_eq!(normalize_value(Some(-4.0), FREQUENCY_FULL_SCALE), 0.0);
/// assert_eq!(normalize_value(None, FREQUENCY_FULL_SCALE), 0.0);
/// assert_eq!(normalize_value(Some(900.0), FREQUENCY_FULL_SCALE), 1.0);
/// ```
#[inline]
pub fn normalize_value(raw: Option<f64>, full_scale: f64) -> f64 {
    let raw = raw.filter(|value| value.is_finite()).unwrap_or(0.0);
    (raw.max(0.0) / full_scale).min(1.0)
}

/// Normalizes all four attributes.
///
/// Values that already lie in `[0,1]` are divided like any other value;
/// callers holding normalized values construct [`Attributes`] directly.
pub fn normalize(raw: &RawAttributes) -> Attributes {
    Attributes {
        f: normalize_value(raw.f, FREQUENCY_FULL_SCALE),
        w: normalize_value(raw.w, WEIGHT_FULL_SCALE),
        s: normalize_value(raw.s, VOLUME_FULL_SCALE),
        i: normalize_value(raw.i, INBOUND_FULL_SCALE),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    const EPS: f64 = 1e-12;

    #[test]
    fn normalizes_sample_power_bank() {
        let attrs = normalize(&RawAttributes::new(180.0, 1.0, 300.0, 18.0));
        assert!((attrs.f - 0.9).abs() < EPS);
        assert!((attrs.w - 0.05).abs() < EPS);
        assert!((attrs.s - 0.006).abs() < EPS);
        assert!((attrs.i - 0.9).abs() < EPS);
    }

    #[test]
    fn values_inside_unit_interval_are_still_divided() {
        let attrs = normalize(&RawAttributes::new(0.5, 1.0, 0.2, 0.3));
        assert!((attrs.f - 0.0025).abs() < EPS);
        assert!((attrs.w - 0.05).abs() < EPS);
        assert!((attrs.s - 0.000004).abs() < EPS);
        assert!((attrs.i - 0.015).abs() < EPS);
    }

    #[test]
    fn saturates_at_one() {
        let attrs = normalize(&RawAttributes::new(1_000.0, 20.0, 75_000.0, 21.0));
        assert_eq!(attrs, Attributes { f: 1.0, w: 1.0, s: 1.0, i: 1.0 });
    }

    #[test]
    fn missing_and_negative_input_count_as_zero() {
        let raw = RawAttributes {
            f: None,
            w: Some(-3.0),
            s: Some(f64::NAN),
            i: Some(f64::NEG_INFINITY),
        };
        assert_eq!(normalize(&raw), Attributes::default());
    }

    #[test]
    fn non_numeric_json_normalizes_to_zero() {
        let raw: RawAttributes =
            serde_json::from_str(r#"{"f": "lots", "w": "4", "s": [], "i": ""}"#)
                .expect("lenient input should parse");
        let attrs = normalize(&raw);
        assert_eq!(attrs.f, 0.0);
        assert!((attrs.w - 0.2).abs() < EPS);
        assert_eq!(attrs.s, 0.0);
        assert_eq!(attrs.i, 0.0);
    }

    proptest! {
        #[test]
        fn normalized_values_stay_in_unit_interval(
            f in proptest::num::f64::ANY,
            w in proptest::num::f64::ANY,
            s in proptest::num::f64::ANY,
            i in proptest::num::f64::ANY,
        ) {
            let attrs = normalize(&RawAttributes::new(f, w, s, i));
            for value in [attrs.f, attrs.w, attrs.s, attrs.i] {
                prop_assert!(value.is_finite());
                prop_assert!((0.0..=1.0).contains(&value));
            }
        }
    }
}
