//! Warehouse footprint: zone bands and rack metadata.
//!
//! The footprint is a `width_m × height_m` rectangle split into vertical
//! zone bands. Rack metadata is passed through to the renderer.

use std::collections::HashSet;

use serde::Serialize;
use utoipa::ToSchema;

use crate::model::{ValidationError, ZoneLabel};
use crate::types::{Span, validation};

/// One zone's horizontal extent inside the warehouse.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, ToSchema)]
pub struct ZoneBand {
    pub id: ZoneLabel,
    pub from_m: f64,
    pub to_m: f64,
}

impl ZoneBand {
    pub fn span(&self) -> Span {
        Span::new(self.from_m, self.to_m)
    }
}

/// Rack dimensions used by the renderer.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, ToSchema)]
pub struct RackSpec {
    pub length_m: f64,
    pub width_m: f64,
    pub levels: u32,
    pub cluster_size: u32,
    pub aisle_m: f64,
}

impl Default for RackSpec {
    fn default() -> Self {
        Self {
            length_m: 3.6,
            width_m: 3.0,
            levels: 7,
            cluster_size: 3,
            aisle_m: 4.0,
        }
    }
}

/// Validated warehouse footprint.
///
/// Zones are kept in rendering order (left to right).
#[derive(Clone, Debug, PartialEq, Serialize, ToSchema)]
pub struct WarehouseLayout {
    width_m: f64,
    height_m: f64,
    zones: Vec<ZoneBand>,
    rack: RackSpec,
}

impl WarehouseLayout {
    pub const DEFAULT_WIDTH_M: f64 = 100.0;
    pub const DEFAULT_HEIGHT_M: f64 = 50.0;

    /// Creates a footprint after validating dimensions and zones.
    pub fn new(
        width_m: f64,
        height_m: f64,
        zones: Vec<ZoneBand>,
        rack: RackSpec,
    ) -> Result<Self, ValidationError> {
        validation::validate_positive(width_m, "Warehouse width")
            .map_err(ValidationError::InvalidConfiguration)?;
        validation::validate_positive(height_m, "Warehouse height")
            .map_err(ValidationError::InvalidConfiguration)?;

        if zones.is_empty() {
            return Err(ValidationError::InvalidConfiguration(
                "At least one zone must be configured".to_string(),
            ));
        }

        let mut seen = HashSet::new();
        for band in &zones {
            if !seen.insert(band.id) {
                return Err(ValidationError::InvalidConfiguration(format!(
                    "Zone {} is configured more than once",
                    band.id
                )));
            }
            let span = band.span();
            if !span.from.is_finite() || !span.to.is_finite() || span.length() <= 0.0 {
                return Err(ValidationError::InvalidConfiguration(format!(
                    "Zone {} must have from_m < to_m, got {}..{}",
                    band.id, band.from_m, band.to_m
                )));
            }
            if !span.within(width_m) {
                return Err(ValidationError::InvalidConfiguration(format!(
                    "Zone {} ({}..{}) lies outside the warehouse width {}",
                    band.id, band.from_m, band.to_m, width_m
                )));
            }
        }

        Ok(Self {
            width_m,
            height_m,
            zones,
            rack,
        })
    }

    /// Splits the width into equal bands, one per zone, in the given order.
    pub fn with_equal_bands(
        width_m: f64,
        height_m: f64,
        order: &[ZoneLabel],
    ) -> Result<Self, ValidationError> {
        let band_width = width_m / order.len().max(1) as f64;
        let zones = order
            .iter()
            .enumerate()
            .map(|(idx, id)| ZoneBand {
                id: *id,
                from_m: idx as f64 * band_width,
                to_m: (idx + 1) as f64 * band_width,
            })
            .collect();
        Self::new(width_m, height_m, zones, RackSpec::default())
    }

    pub fn width_m(&self) -> f64 {
        self.width_m
    }

    pub fn height_m(&self) -> f64 {
        self.height_m
    }

    pub fn zones(&self) -> &[ZoneBand] {
        &self.zones
    }

    /// Zone labels in rendering order.
    pub fn zone_order(&self) -> Vec<ZoneLabel> {
        self.zones.iter().map(|band| band.id).collect()
    }

    pub fn band(&self, zone: ZoneLabel) -> Option<&ZoneBand> {
        self.zones.iter().find(|band| band.id == zone)
    }
}

impl Default for WarehouseLayout {
    fn default() -> Self {
        Self {
            width_m: Self::DEFAULT_WIDTH_M,
            height_m: Self::DEFAULT_HEIGHT_M,
            zones: vec![
                ZoneBand { id: ZoneLabel::A, from_m: 0.0, to_m: 25.0 },
                ZoneBand { id: ZoneLabel::B, from_m: 25.0, to_m: 50.0 },
                ZoneBand { id: ZoneLabel::C, from_m: 50.0, to_m: 75.0 },
                ZoneBand { id: ZoneLabel::D, from_m: 75.0, to_m: 100.0 },
            ],
            rack: RackSpec::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_layout_matches_equal_bands() {
        let equal = WarehouseLayout::with_equal_bands(100.0, 50.0, &ZoneLabel::ALL)
            .expect("default bands are valid");
        assert_eq!(equal, WarehouseLayout::default());
        assert_eq!(equal.zone_order(), ZoneLabel::ALL.to_vec());
    }

    #[test]
    fn custom_order_rebuilds_bands() {
        let layout =
            WarehouseLayout::with_equal_bands(60.0, 30.0, &[ZoneLabel::C, ZoneLabel::A])
                .expect("valid order");
        let c = layout.band(ZoneLabel::C).expect("zone C configured");
        assert_eq!((c.from_m, c.to_m), (0.0, 30.0));
        assert!(layout.band(ZoneLabel::B).is_none());
    }

    #[test]
    fn rejects_duplicate_zones() {
        let result =
            WarehouseLayout::with_equal_bands(100.0, 50.0, &[ZoneLabel::A, ZoneLabel::A]);
        assert!(matches!(
            result,
            Err(ValidationError::InvalidConfiguration(_))
        ));
    }

    #[test]
    fn rejects_invalid_dimensions_and_bands() {
        assert!(WarehouseLayout::with_equal_bands(0.0, 50.0, &ZoneLabel::ALL).is_err());
        assert!(WarehouseLayout::with_equal_bands(100.0, f64::NAN, &ZoneLabel::ALL).is_err());
        assert!(WarehouseLayout::with_equal_bands(100.0, 50.0, &[]).is_err());

        let outside = vec![ZoneBand { id: ZoneLabel::A, from_m: 90.0, to_m: 120.0 }];
        assert!(WarehouseLayout::new(100.0, 50.0, outside, RackSpec::default()).is_err());

        let inverted = vec![ZoneBand { id: ZoneLabel::A, from_m: 30.0, to_m: 10.0 }];
        assert!(WarehouseLayout::new(100.0, 50.0, inverted, RackSpec::default()).is_err());
    }
}
