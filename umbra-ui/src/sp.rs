//! Scale-independent pixels, the text-relative sibling of [`Dp`](crate::Dp).

use std::fmt;

use crate::unit::{Metric, Unit, Value};

/// Scale-independent pixels.
///
/// Resolves through [`Metric::px_per_sp`], which folds in the user's text
/// size preference on top of display density.
#[derive(Debug, Default, Clone, Copy, PartialEq, PartialOrd)]
pub struct Sp(pub f64);

impl Sp {
    /// Creates a new `Sp` instance with the specified value.
    pub const fn new(value: f64) -> Self {
        Sp(value)
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

impl From<Sp> for Value {
    fn from(sp: Sp) -> Self {
        Value::new(sp.0 as f32, Unit::Sp)
    }
}

impl fmt::Display for Sp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}sp", self.0)
    }
}
