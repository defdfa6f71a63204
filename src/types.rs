//! Common numeric helpers and 2D geometry types.
//!
//! Shared by the scorer, the layout packer and the warehouse configuration.

/// Global numerical tolerance for floating-point comparisons.
pub const EPSILON_GENERAL: f64 = 1e-9;

/// A point on the warehouse floor, in metres.
///
/// # Examples
/// ```
/// use slap_planner::types::Point2;
///
/// let cell = Point2::new(6.25, 3.125);
/// assert_eq!(cell.as_tuple(), (6.25, 3.125));
/// ```
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Point2 {
    pub x: f64,
    pub y: f64,
}

impl Point2 {
    #[inline]
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    #[inline]
    pub const fn as_tuple(&self) -> (f64, f64) {
        (self.x, self.y)
    }

    /// Rounds both coordinates to the given number of decimals.
    #[inline]
    pub fn rounded(&self, decimals: u32) -> Self {
        Self::new(round_half_up(self.x, decimals), round_half_up(self.y, decimals))
    }
}

/// A half-open interval `[from, to)` along one axis, in metres.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Span {
    pub from: f64,
    pub to: f64,
}

impl Span {
    #[inline]
    pub const fn new(from: f64, to: f64) -> Self {
        Self { from, to }
    }

    #[inline]
    pub fn length(&self) -> f64 {
        self.to - self.from
    }

    /// Center of the `index`-th of `parts` equal subdivisions.
    #[inline]
    pub fn subdivision_center(&self, index: usize, parts: usize) -> f64 {
        let parts = parts.max(1) as f64;
        self.from + (index as f64 + 0.5) * (self.length() / parts)
    }

    /// Checks whether the span lies within `[0, limit]`.
    #[inline]
    pub fn within(&self, limit: f64) -> bool {
        self.from >= -EPSILON_GENERAL && self.to <= limit + EPSILON_GENERAL
    }
}

/// Rounds `value` to `decimals` places, halves rounding up.
///
/// Values are expected to be non-negative; a tiny epsilon absorbs binary
/// representation error (`0.28499999999999998` rounds like `0.285`).
#[inline]
pub fn round_half_up(value: f64, decimals: u32) -> f64 {
    let factor = 10f64.powi(decimals as i32);
    (value * factor + 0.5 + EPSILON_GENERAL).floor() / factor
}

/// Validation functions shared by models and configuration.
pub mod validation {

    /// Validates that a value is finite and strictly positive.
    ///
    /// # Returns
    /// `Ok(())` for valid values, otherwise error text
    pub fn validate_positive(value: f64, name: &str) -> Result<(), String> {
        if value.is_nan() {
            return Err(format!("{} must not be NaN", name));
        }
        if value.is_infinite() {
            return Err(format!("{} must not be infinite", name));
        }
        if value <= 0.0 {
            return Err(format!("{} must be positive, got: {}", name, value));
        }
        Ok(())
    }

    /// Validates that a value is finite and within `[0,1]`.
    pub fn validate_unit_interval(value: f64, name: &str) -> Result<(), String> {
        if !value.is_finite() {
            return Err(format!("{} must be a finite number", name));
        }
        if !(0.0..=1.0).contains(&value) {
            return Err(format!("{} must be between 0 and 1, got: {}", name, value));
        }
        Ok(())
    }

    /// Clamps a value into `[0,1]`, mapping non-finite input to 0.
    #[inline]
    pub fn clamp_unit(value: f64) -> f64 {
        if value.is_finite() {
            value.clamp(0.0, 1.0)
        } else {
            0.0
        }
    }
}
