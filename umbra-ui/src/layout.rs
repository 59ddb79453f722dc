//! # Layout Constraints
//!
//! A layout pass hands every widget a [`Constraints`] range of acceptable
//! sizes, and the widget answers with the [`Dimensions`] it actually takes.
//!
//! ```
//! use umbra_ui::{Constraints, Px, PxSize};
//!
//! let exact = Constraints::tight(PxSize::new(Px(100), Px(40)));
//! assert_eq!(exact.min, exact.max);
//!
//! let widened = exact.with_min(PxSize::new(Px(120), Px(10)));
//! assert_eq!(widened.min, PxSize::new(Px(120), Px(40)));
//! ```

use crate::px::PxSize;

/// The range of sizes a widget may take in the current layout pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Constraints {
    /// Smallest acceptable size.
    pub min: PxSize,
    /// Largest acceptable size.
    pub max: PxSize,
}

impl Constraints {
    /// Creates constraints from a minimum and maximum size.
    pub const fn new(min: PxSize, max: PxSize) -> Self {
        Self { min, max }
    }

    /// Constraints that accept exactly `size`.
    pub const fn tight(size: PxSize) -> Self {
        Self {
            min: size,
            max: size,
        }
    }

    /// Constraints from zero up to `max`.
    pub const fn loose(max: PxSize) -> Self {
        Self {
            min: PxSize::ZERO,
            max,
        }
    }

    /// Raises the minimum to at least `min`, growing the maximum with it
    /// when needed so that `max >= min` still holds.
    pub fn with_min(self, min: PxSize) -> Self {
        let min = self.min.max(min);
        Self {
            min,
            max: self.max.max(min),
        }
    }
}

/// The size a widget reports back to layout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Dimensions {
    /// The size occupied by the widget.
    pub size: PxSize,
}

impl Dimensions {
    /// Creates dimensions of the given size.
    pub const fn new(size: PxSize) -> Self {
        Self { size }
    }
}
