//! Deterministic layout packing of ranked SKUs into zone grids.
//!
//! Each zone is drawn as `row_count` row groups; every row group is a
//! `block_cols × block_rows` block of cells. SKUs are consumed in the order
//! given and fill their zone's slots row group first, then row, then column.
//! SKUs beyond a zone's capacity are dropped, never moved to another zone.

use std::collections::{BTreeMap, HashMap};
use std::fmt;

use serde::Serialize;
use utoipa::ToSchema;

use crate::model::{ScoredSku, ValidationError, ZoneLabel};
use crate::types::{Point2, Span};
use crate::warehouse::WarehouseLayout;

/// Decimal places kept on cell coordinates (metres).
const COORDINATE_DECIMALS: u32 = 2;

/// Grid shape of a single zone.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct GridGeometry {
    row_count: usize,
    block_cols: usize,
    block_rows: usize,
}

impl GridGeometry {
    pub const DEFAULT_ROW_COUNT: usize = 4;
    pub const DEFAULT_BLOCK_COLS: usize = 2;
    pub const DEFAULT_BLOCK_ROWS: usize = 2;
    /// Upper bound for every grid dimension.
    pub const MAX_DIMENSION: usize = 32;

    /// Creates a grid after checking every dimension is within `1..=MAX_DIMENSION`.
    pub fn new(
        row_count: usize,
        block_cols: usize,
        block_rows: usize,
    ) -> Result<Self, ValidationError> {
        for (value, name) in [
            (row_count, "row_count"),
            (block_cols, "block_cols"),
            (block_rows, "block_rows"),
        ] {
            if !(1..=Self::MAX_DIMENSION).contains(&value) {
                return Err(ValidationError::InvalidConfiguration(format!(
                    "{} must be between 1 and {}, got: {}",
                    name,
                    Self::MAX_DIMENSION,
                    value
                )));
            }
        }
        Ok(Self {
            row_count,
            block_cols,
            block_rows,
        })
    }

    pub fn row_count(&self) -> usize {
        self.row_count
    }

    pub fn block_cols(&self) -> usize {
        self.block_cols
    }

    pub fn block_rows(&self) -> usize {
        self.block_rows
    }

    pub fn cells_per_block(&self) -> usize {
        self.block_cols * self.block_rows
    }

    /// Number of SKUs a single zone can show.
    pub fn capacity(&self) -> usize {
        self.cells_per_block() * self.row_count
    }

    /// Splits a slot index into row group, inner row and column.
    ///
    /// # Examples
    /// ```
    /// use slap_planner::layout::{GridGeometry, SlotCoordinates};
    ///
    /// let grid = GridGeometry::default();
    /// assert_eq!(grid.slot_coordinates(6), SlotCoordinates { block: 1, row: 1, col: 0 });
    /// ```
    pub fn slot_coordinates(&self, slot: usize) -> SlotCoordinates {
        let cells = self.cells_per_block();
        let within = slot % cells;
        SlotCoordinates {
            block: slot / cells,
            row: within / self.block_cols,
            col: within % self.block_cols,
        }
    }

    /// Inverse of [`GridGeometry::slot_coordinates`].
    pub fn slot_index(&self, coords: SlotCoordinates) -> usize {
        coords.block * self.cells_per_block() + coords.row * self.block_cols + coords.col
    }
}

impl Default for GridGeometry {
    fn default() -> Self {
        Self {
            row_count: Self::DEFAULT_ROW_COUNT,
            block_cols: Self::DEFAULT_BLOCK_COLS,
            block_rows: Self::DEFAULT_BLOCK_ROWS,
        }
    }
}

/// Position of a cell inside a zone.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct SlotCoordinates {
    pub block: usize,
    pub row: usize,
    pub col: usize,
}

/// One SKU placed into a zone cell.
///
/// # Fields
/// * `zone` - Zone the SKU was placed in (after overrides)
/// * `scored_zone` - Zone derived from the SKU's priority
/// * `slot` - Slot index inside the zone
/// * `block`, `row`, `col` - Decomposition of `slot`
/// * `position_id` - Human readable cell label
/// * `x_m`, `y_m` - Cell center on the warehouse floor
#[derive(Clone, Debug, PartialEq, Serialize, ToSchema)]
pub struct Placement {
    pub sku_code: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub product_name: Option<String>,
    pub priority: f64,
    pub zone: ZoneLabel,
    pub scored_zone: ZoneLabel,
    pub slot: usize,
    pub block: usize,
    pub row: usize,
    pub col: usize,
    #[schema(example = "A-R1-L1-C2")]
    pub position_id: String,
    pub x_m: f64,
    pub y_m: f64,
}

/// Why a SKU did not receive a cell.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DropReason {
    ZoneFull,
    ZoneNotConfigured,
}

impl DropReason {
    pub fn code(&self) -> &'static str {
        match self {
            DropReason::ZoneFull => "zone_full",
            DropReason::ZoneNotConfigured => "zone_not_configured",
        }
    }
}

impl fmt::Display for DropReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DropReason::ZoneFull => write!(f, "All cells of the zone are occupied"),
            DropReason::ZoneNotConfigured => {
                write!(f, "The zone is not part of the warehouse layout")
            }
        }
    }
}

/// A SKU that was left out of the layout.
#[derive(Clone, Debug, PartialEq)]
pub struct UnplacedSku {
    pub sku_code: String,
    pub priority: f64,
    pub zone: ZoneLabel,
    pub reason: DropReason,
}

/// Result of a packing run.
#[derive(Clone, Debug, PartialEq, Default)]
pub struct LayoutPlan {
    /// Placements in zone order, then slot order.
    pub placements: Vec<Placement>,
    pub dropped: Vec<UnplacedSku>,
    /// SKUs that targeted each configured zone, overflow included.
    pub counts: BTreeMap<ZoneLabel, usize>,
}

impl LayoutPlan {
    pub fn placed_count(&self) -> usize {
        self.placements.len()
    }

    pub fn dropped_count(&self) -> usize {
        self.dropped.len()
    }

    /// Placements of a single zone, in slot order.
    pub fn zone_placements(&self, zone: ZoneLabel) -> impl Iterator<Item = &Placement> {
        self.placements.iter().filter(move |p| p.zone == zone)
    }
}

/// Packs ranked SKUs into the zones of `warehouse`.
///
/// `overrides` maps SKU codes to a preferred zone; an override naming a zone
/// that is not configured is ignored in favour of the scored zone.
pub fn pack(
    ranked: &[ScoredSku],
    warehouse: &WarehouseLayout,
    geometry: &GridGeometry,
    overrides: &HashMap<String, ZoneLabel>,
) -> LayoutPlan {
    let order = warehouse.zone_order();
    let capacity = geometry.capacity();
    let mut buckets: Vec<Vec<(&ScoredSku, ZoneLabel)>> = vec![Vec::new(); order.len()];
    let mut counts: BTreeMap<ZoneLabel, usize> = order.iter().map(|zone| (*zone, 0)).collect();
    let mut dropped = Vec::new();

    for sku in ranked {
        let target = overrides
            .get(&sku.sku_code)
            .copied()
            .filter(|zone| order.contains(zone))
            .unwrap_or(sku.zone);

        let Some(bucket_idx) = order.iter().position(|zone| *zone == target) else {
            dropped.push(unplaced(sku, target, DropReason::ZoneNotConfigured));
            continue;
        };

        *counts.entry(target).or_insert(0) += 1;
        let bucket = &mut buckets[bucket_idx];
        if bucket.len() < capacity {
            bucket.push((sku, target));
        } else {
            dropped.push(unplaced(sku, target, DropReason::ZoneFull));
        }
    }

    let height = Span::new(0.0, warehouse.height_m());
    let rows_total = geometry.row_count() * geometry.block_rows();
    let mut placements = Vec::new();

    for (zone, bucket) in order.iter().zip(buckets) {
        let Some(band) = warehouse.band(*zone) else {
            continue;
        };
        let band_span = band.span();

        for (slot, (sku, target)) in bucket.into_iter().enumerate() {
            let coords = geometry.slot_coordinates(slot);
            let center = Point2::new(
                band_span.subdivision_center(coords.col, geometry.block_cols()),
                height.subdivision_center(
                    coords.block * geometry.block_rows() + coords.row,
                    rows_total,
                ),
            )
            .rounded(COORDINATE_DECIMALS);

            placements.push(Placement {
                sku_code: sku.sku_code.clone(),
                product_name: sku.product_name.clone(),
                priority: sku.priority,
                zone: target,
                scored_zone: sku.zone,
                slot,
                block: coords.block,
                row: coords.row,
                col: coords.col,
                position_id: position_id(target, coords),
                x_m: center.x,
                y_m: center.y,
            });
        }
    }

    LayoutPlan {
        placements,
        dropped,
        counts,
    }
}

fn unplaced(sku: &ScoredSku, zone: ZoneLabel, reason: DropReason) -> UnplacedSku {
    UnplacedSku {
        sku_code: sku.sku_code.clone(),
        priority: sku.priority,
        zone,
        reason,
    }
}

fn position_id(zone: ZoneLabel, coords: SlotCoordinates) -> String {
    format!(
        "{}-R{}-L{}-C{}",
        zone,
        coords.block + 1,
        coords.row + 1,
        coords.col + 1
    )
}
