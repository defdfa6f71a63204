//! Data models for SKU slotting.
//!
//! This module defines the fundamental data structures of the planner:
//! - `ZoneLabel`: One of the four storage zones `A`..`D`
//! - `Attributes`: The four normalized SKU attributes (`f`, `w`, `s`, `i`)
//! - `RawAttributes`: Attribute input in raw units, leniently parsed
//! - `NewSku` / `SkuRecord`: A SKU before and after registration
//! - `ScoredSku`: A registered SKU with its derived priority and zone

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize};
#[allow(unused_imports)]
use serde_json::json;
use thiserror::Error;
use utoipa::ToSchema;

use crate::types::validation;

/// Maximum accepted length of a SKU code (in characters).
pub const MAX_SKU_CODE_LEN: usize = 64;

/// Maximum accepted length of a product name (in characters).
pub const MAX_PRODUCT_NAME_LEN: usize = 200;

/// Validation error for SKU data.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ValidationError {
    #[error("Invalid attribute: {0}")]
    InvalidAttribute(String),
    #[error("Invalid SKU code: {0}")]
    InvalidSkuCode(String),
    #[error("Invalid product name: {0}")]
    InvalidProductName(String),
    #[error("Invalid configuration: {0}")]
    InvalidConfiguration(String),
}

/// Storage zone, ordered from fastest dispatch (`A`) to slowest (`D`).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, ToSchema)]
pub enum ZoneLabel {
    A,
    B,
    C,
    D,
}

impl ZoneLabel {
    /// All zones in their default rendering order.
    pub const ALL: [ZoneLabel; 4] = [ZoneLabel::A, ZoneLabel::B, ZoneLabel::C, ZoneLabel::D];

    pub const fn as_str(&self) -> &'static str {
        match self {
            ZoneLabel::A => "A",
            ZoneLabel::B => "B",
            ZoneLabel::C => "C",
            ZoneLabel::D => "D",
        }
    }
}

impl fmt::Display for ZoneLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when text does not name a zone.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown zone '{0}'")]
pub struct UnknownZone(pub String);

impl FromStr for ZoneLabel {
    type Err = UnknownZone;

    /// Parses a zone label, ignoring surrounding whitespace and case.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "A" => Ok(ZoneLabel::A),
            "B" => Ok(ZoneLabel::B),
            "C" => Ok(ZoneLabel::C),
            "D" => Ok(ZoneLabel::D),
            _ => Err(UnknownZone(s.to_string())),
        }
    }
}

/// The four SKU attributes on the canonical `[0,1]` scale.
///
/// # Fields
/// * `f` - Outbound frequency
/// * `w` - Weight
/// * `s` - Volume
/// * `i` - Inbound frequency
#[derive(Clone, Copy, Debug, PartialEq, Default, Serialize, Deserialize, ToSchema)]
pub struct Attributes {
    #[schema(example = 0.25)]
    pub f: f64,
    #[schema(example = 0.4)]
    pub w: f64,
    #[schema(example = 0.2)]
    pub s: f64,
    #[schema(example = 0.3)]
    pub i: f64,
}

impl Attributes {
    /// Creates attributes from values that are already normalized.
    ///
    /// # Returns
    /// `Ok(Attributes)` when every value is finite and within `[0,1]`,
    /// otherwise `Err(ValidationError)`
    ///
    /// # Examples
    /// ```
    /// use slap_planner::model::Attributes;
    ///
    /// assert!(Attributes::new(0.25, 0.4, 0.2, 0.3).is_ok());
    /// assert!(Attributes::new(1.5, 0.4, 0.2, 0.3).is_err());
    /// ```
    pub fn new(f: f64, w: f64, s: f64, i: f64) -> Result<Self, ValidationError> {
        for (value, name) in [(f, "f"), (w, "w"), (s, "s"), (i, "i")] {
            validation::validate_unit_interval(value, name)
                .map_err(ValidationError::InvalidAttribute)?;
        }
        Ok(Self { f, w, s, i })
    }

    /// Forces arbitrary values onto the `[0,1]` scale (non-finite becomes 0).
    ///
    /// Used when reading stored payloads that predate validation.
    pub fn clamped(f: f64, w: f64, s: f64, i: f64) -> Self {
        Self {
            f: validation::clamp_unit(f),
            w: validation::clamp_unit(w),
            s: validation::clamp_unit(s),
            i: validation::clamp_unit(i),
        }
    }
}

/// Attribute input in raw units (orders per day, kg, cm³, deliveries per day).
///
/// Every field is optional; numbers, numeric strings, `null` and empty strings are
/// accepted. Anything that is not a number ends up as `None`.
#[derive(Clone, Copy, Debug, PartialEq, Default, Deserialize, ToSchema)]
#[schema(example = json!({ "f": 180, "w": 1, "s": 300, "i": 18 }))]
pub struct RawAttributes {
    #[serde(default, deserialize_with = "lenient_number")]
    #[schema(value_type = Option<f64>)]
    pub f: Option<f64>,
    #[serde(default, deserialize_with = "lenient_number")]
    #[schema(value_type = Option<f64>)]
    pub w: Option<f64>,
    #[serde(default, deserialize_with = "lenient_number")]
    #[schema(value_type = Option<f64>)]
    pub s: Option<f64>,
    #[serde(default, deserialize_with = "lenient_number")]
    #[schema(value_type = Option<f64>)]
    pub i: Option<f64>,
}

impl RawAttributes {
    pub fn new(f: f64, w: f64, s: f64, i: f64) -> Self {
        Self {
            f: Some(f),
            w: Some(w),
            s: Some(s),
            i: Some(i),
        }
    }
}

/// Reads a JSON value as a number if it is one (or a numeric string).
pub(crate) fn lenient_number<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    Ok(match value {
        serde_json::Value::Number(number) => number.as_f64(),
        serde_json::Value::String(text) => text.trim().parse::<f64>().ok(),
        _ => None,
    }
    .filter(|number| number.is_finite()))
}

/// A validated SKU that is not yet part of a registry.
#[derive(Clone, Debug, PartialEq)]
pub struct NewSku {
    pub sku_code: String,
    pub product_name: Option<String>,
    pub attributes: Attributes,
}

impl NewSku {
    /// Creates a new SKU after trimming and validating code and name.
    ///
    /// An empty or whitespace-only product name is stored as `None`.
    pub fn new(
        sku_code: &str,
        product_name: Option<&str>,
        attributes: Attributes,
    ) -> Result<Self, ValidationError> {
        let sku_code = sku_code.trim();
        if sku_code.is_empty() {
            return Err(ValidationError::InvalidSkuCode(
                "SKU code must not be empty".to_string(),
            ));
        }
        if sku_code.chars().count() > MAX_SKU_CODE_LEN {
            return Err(ValidationError::InvalidSkuCode(format!(
                "SKU code must not exceed {} characters",
                MAX_SKU_CODE_LEN
            )));
        }

        let product_name = product_name
            .map(str::trim)
            .filter(|name| !name.is_empty())
            .map(str::to_owned);
        if let Some(name) = &product_name {
            if name.chars().count() > MAX_PRODUCT_NAME_LEN {
                return Err(ValidationError::InvalidProductName(format!(
                    "Product name must not exceed {} characters",
                    MAX_PRODUCT_NAME_LEN
                )));
            }
        }

        Ok(Self {
            sku_code: sku_code.to_owned(),
            product_name,
            attributes,
        })
    }
}

/// A SKU owned by a registry.
///
/// # Fields
/// * `id` - Registry-assigned identifier, never reused
/// * `sku_code` - Unique code within the registry
/// * `product_name` - Optional display name
/// * `attributes` - Normalized attributes
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SkuRecord {
    pub id: u64,
    pub sku_code: String,
    pub product_name: Option<String>,
    pub attributes: Attributes,
}

/// A SKU together with its derived priority and zone.
///
/// Produced by [`crate::scoring::score`]; never stored.
#[derive(Clone, Debug, PartialEq, Serialize, ToSchema)]
#[schema(
    example = json!({
        "id": 1,
        "sku_code": "SKU01",
        "product_name": "Power Bank 10,000mAh",
        "f": 0.9, "w": 0.05, "s": 0.006, "i": 0.9,
        "priority": 0.5172,
        "zone": "B"
    })
)]
pub struct ScoredSku {
    pub id: u64,
    pub sku_code: String,
    pub product_name: Option<String>,
    #[serde(flatten)]
    pub attributes: Attributes,
    pub priority: f64,
    pub zone: ZoneLabel,
}
