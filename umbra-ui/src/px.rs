//! Physical pixel coordinates for umbra.
//!
//! Layout works in whole pixels ([`Px`], [`PxSize`]); paint geometry works in
//! continuous, sub-pixel coordinates ([`PxPoint`], [`PxRect`]) so that
//! fractional offsets such as half an elevation survive until rasterization.
//!
//! # Coordinate System
//!
//! - Origin (0, 0) at the top-left corner
//! - X-axis increases to the right
//! - Y-axis increases downward
//!
//! # Example
//!
//! ```
//! use umbra_ui::px::{Px, PxRect, PxSize};
//!
//! let size = PxSize::new(Px::new(100), Px::new(40));
//! let rect = PxRect::from_size(size);
//!
//! let grown = rect.outset(1.5);
//! assert_eq!(grown.width(), 103.0);
//!
//! let lowered = rect.translate(0.0, 2.0);
//! assert_eq!(lowered.min.y, 2.0);
//! ```

use std::ops::{Add, Sub};

/// A whole physical pixel value.
///
/// Negative values are allowed; they show up for content that is scrolled or
/// positioned off-screen.
#[derive(Debug, Default, Clone, Copy, PartialEq, PartialOrd, Eq, Ord, Hash)]
pub struct Px(pub i32);

impl Px {
    /// Zero pixels.
    pub const ZERO: Self = Self(0);

    /// Creates a new `Px` from an i32 value.
    pub const fn new(value: i32) -> Self {
        Px(value)
    }

    /// Returns the raw i32 value.
    pub fn raw(self) -> i32 {
        self.0
    }

    /// Converts to `f32`.
    pub fn to_f32(self) -> f32 {
        self.0 as f32
    }

    /// Creates a `Px` from an f32 value, truncating toward zero and clamping
    /// to the i32 range instead of overflowing.
    ///
    /// ```
    /// use umbra_ui::px::Px;
    ///
    /// assert_eq!(Px::saturating_from_f32(42.7).raw(), 42);
    /// assert_eq!(Px::saturating_from_f32(f32::MAX).raw(), i32::MAX);
    /// ```
    pub fn saturating_from_f32(value: f32) -> Self {
        let clamped_value = value.clamp(i32::MIN as f32, i32::MAX as f32);
        Px(clamped_value as i32)
    }
}

impl Add for Px {
    type Output = Px;

    fn add(self, rhs: Self) -> Self::Output {
        Px(self.0.saturating_add(rhs.0))
    }
}

impl Sub for Px {
    type Output = Px;

    fn sub(self, rhs: Self) -> Self::Output {
        Px(self.0.saturating_sub(rhs.0))
    }
}

/// A size in whole physical pixels, as handed out by the layout system.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct PxSize {
    /// The width in physical pixels
    pub width: Px,
    /// The height in physical pixels
    pub height: Px,
}

impl PxSize {
    /// Zero size (0×0).
    pub const ZERO: Self = Self {
        width: Px(0),
        height: Px(0),
    };

    /// Creates a new size from width and height.
    pub const fn new(width: Px, height: Px) -> Self {
        Self { width, height }
    }

    /// Returns the componentwise maximum of two sizes.
    pub fn max(self, other: Self) -> Self {
        Self {
            width: self.width.max(other.width),
            height: self.height.max(other.height),
        }
    }
}

/// A point in continuous physical pixel space.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct PxPoint {
    /// Horizontal coordinate.
    pub x: f32,
    /// Vertical coordinate.
    pub y: f32,
}

impl PxPoint {
    /// The origin.
    pub const ZERO: Self = Self { x: 0.0, y: 0.0 };

    /// Creates a point.
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

/// An axis-aligned rectangle in continuous physical pixel space.
///
/// Stored as two corners. A rectangle is well formed when `max >= min` on
/// both axes; the transforms here do not check that, callers that shrink a
/// rectangle with a negative [`outset`](Self::outset) own that contract.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct PxRect {
    /// Top-left corner.
    pub min: PxPoint,
    /// Bottom-right corner.
    pub max: PxPoint,
}

impl PxRect {
    /// Creates a rectangle from its corner coordinates.
    pub const fn new(min_x: f32, min_y: f32, max_x: f32, max_y: f32) -> Self {
        Self {
            min: PxPoint::new(min_x, min_y),
            max: PxPoint::new(max_x, max_y),
        }
    }

    /// A rectangle anchored at the origin with the given layout size.
    pub fn from_size(size: PxSize) -> Self {
        Self::new(0.0, 0.0, size.width.to_f32(), size.height.to_f32())
    }

    /// Width of the rectangle.
    pub fn width(&self) -> f32 {
        self.max.x - self.min.x
    }

    /// Height of the rectangle.
    pub fn height(&self) -> f32 {
        self.max.y - self.min.y
    }

    /// Center point of the rectangle.
    pub fn center(&self) -> PxPoint {
        PxPoint::new(
            (self.min.x + self.max.x) / 2.0,
            (self.min.y + self.max.y) / 2.0,
        )
    }

    /// Grows the rectangle by `amount` on every side. Negative amounts shrink it.
    pub fn outset(self, amount: f32) -> Self {
        Self::new(
            self.min.x - amount,
            self.min.y - amount,
            self.max.x + amount,
            self.max.y + amount,
        )
    }

    /// Moves both corners by `(dx, dy)`.
    pub fn translate(self, dx: f32, dy: f32) -> Self {
        Self::new(
            self.min.x + dx,
            self.min.y + dy,
            self.max.x + dx,
            self.max.y + dy,
        )
    }

    /// Returns true if `other` lies within this rectangle, edges included.
    pub fn contains(&self, other: &PxRect) -> bool {
        self.min.x <= other.min.x
            && self.min.y <= other.min.y
            && self.max.x >= other.max.x
            && self.max.y >= other.max.y
    }

    /// Returns true if `max >= min` on both axes.
    pub fn is_well_formed(&self) -> bool {
        self.max.x >= self.min.x && self.max.y >= self.min.y
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_px_saturating() {
        assert_eq!(Px(i32::MAX) + Px(1), Px(i32::MAX));
        assert_eq!(Px(i32::MIN) - Px(1), Px(i32::MIN));
        assert_eq!(Px::saturating_from_f32(-100.5), Px(-100));
        assert_eq!(Px::saturating_from_f32(f32::MIN), Px(i32::MIN));
    }

    #[test]
    fn test_size_max() {
        let a = PxSize::new(Px(10), Px(50));
        let b = PxSize::new(Px(30), Px(20));
        assert_eq!(a.max(b), PxSize::new(Px(30), Px(50)));
    }

    #[test]
    fn test_rect_from_size() {
        let rect = PxRect::from_size(PxSize::new(Px(100), Px(40)));
        assert_eq!(rect, PxRect::new(0.0, 0.0, 100.0, 40.0));
        assert_eq!(rect.width(), 100.0);
        assert_eq!(rect.height(), 40.0);
        assert_eq!(rect.center(), PxPoint::new(50.0, 20.0));
    }

    #[test]
    fn test_outset_and_inset() {
        let rect = PxRect::new(0.0, 0.0, 100.0, 40.0);
        assert_eq!(rect.outset(1.5), PxRect::new(-1.5, -1.5, 101.5, 41.5));
        assert_eq!(rect.outset(-2.0), PxRect::new(2.0, 2.0, 98.0, 38.0));
        assert_eq!(rect.outset(3.0).outset(-3.0), rect);
        assert_eq!(rect.outset(0.0), rect);
    }

    #[test]
    fn test_translate_keeps_size() {
        let rect = PxRect::new(0.0, 0.0, 100.0, 40.0);
        let moved = rect.translate(-4.0, 1.5);
        assert_eq!(moved, PxRect::new(-4.0, 1.5, 96.0, 41.5));
        assert_eq!(moved.width(), rect.width());
        assert_eq!(moved.height(), rect.height());
    }

    #[test]
    fn test_contains_and_well_formed() {
        let rect = PxRect::new(0.0, 0.0, 10.0, 10.0);
        assert!(rect.outset(1.0).contains(&rect));
        assert!(rect.contains(&rect));
        assert!(!rect.contains(&rect.translate(0.0, 0.5)));
        assert!(rect.is_well_formed());
        assert!(!rect.outset(-6.0).is_well_formed());
    }
}
