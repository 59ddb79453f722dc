//! # Density-Independent Pixels (Dp)
//!
//! [`Dp`] is the unit layout sizes and design constants are written in. A
//! `Dp` has no fixed pixel size; it is resolved through a [`Metric`], either
//! one passed explicitly or the process-wide [`Metric::current`].
//!
//! ```
//! use umbra_ui::{Dp, unit::Metric};
//!
//! let elevation = Dp(3.0);
//! let retina = Metric::new(2.0, 2.0);
//! assert_eq!(elevation.to_px(&retina), 6.0);
//! ```

use std::fmt;

use crate::unit::{Metric, Unit, Value};

/// Density-independent pixels.
///
/// Values are stored as `f64` like the host's other layout scalars and
/// narrowed to `f32` at the paint boundary.
#[derive(Debug, Default, Clone, Copy, PartialEq, PartialOrd)]
pub struct Dp(pub f64);

impl Dp {
    /// Zero dp.
    pub const ZERO: Self = Dp(0.0);

    /// Creates a new `Dp` instance with the specified value.
    pub const fn new(value: f64) -> Self {
        Dp(value)
    }

    /// Converts to physical pixels under `metric`.
    pub fn to_px(self, metric: &Metric) -> f32 {
        metric.to_px(self.into())
    }

    /// Converts to physical pixels under the process-wide metric.
    pub fn to_pixels_f32(self) -> f32 {
        self.to_px(&Metric::current())
    }
}

impl From<f64> for Dp {
    fn from(value: f64) -> Self {
        Dp(value)
    }
}

impl From<Dp> for Value {
    fn from(dp: Dp) -> Self {
        Value::new(dp.0 as f32, Unit::Dp)
    }
}

impl fmt::Display for Dp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}dp", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dp_to_px() {
        assert_eq!(Dp(3.0).to_px(&Metric::new(1.0, 9.0)), 3.0);
        assert_eq!(Dp(3.0).to_px(&Metric::new(2.5, 9.0)), 7.5);
        assert_eq!(Dp(3.0).to_px(&Metric::new(0.0, 9.0)), 3.0);
    }

    #[test]
    fn test_dp_value() {
        assert_eq!(Value::from(Dp(4.0)), Value::new(4.0, Unit::Dp));
        assert_eq!(Dp(4.0).to_string(), "4dp");
    }
}
