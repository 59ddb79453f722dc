//! Fill commands and the painter boundary.
//!
//! Components never rasterize anything themselves. They describe what to
//! fill as [`FillCommand`]s and hand them, in back-to-front order, to a
//! [`Painter`] supplied by the host renderer.
//!
//! # Example
//!
//! ```
//! use umbra_ui::{
//!     Color,
//!     paint::{CornerRadii, FillCommand, PaintQueue, Painter, RoundedRect},
//!     px::PxRect,
//! };
//!
//! let mut queue = PaintQueue::new();
//! queue.fill(FillCommand::new(
//!     RoundedRect::new(PxRect::new(0.0, 0.0, 10.0, 10.0), CornerRadii::uniform(2.0)),
//!     Color::BLACK,
//! ));
//! assert_eq!(queue.len(), 1);
//! ```

use smallvec::SmallVec;

use crate::{Color, px::PxRect};

/// Radii of the four corners of a rounded rectangle, in physical pixels.
///
/// Radii larger than half the shorter side are left for the rasterizer to
/// clamp.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct CornerRadii {
    /// Top-left (north-west) radius.
    pub top_left: f32,
    /// Top-right (north-east) radius.
    pub top_right: f32,
    /// Bottom-right (south-east) radius.
    pub bottom_right: f32,
    /// Bottom-left (south-west) radius.
    pub bottom_left: f32,
}

impl CornerRadii {
    /// Square corners.
    pub const ZERO: Self = Self::uniform(0.0);

    /// The same radius on every corner.
    pub const fn uniform(radius: f32) -> Self {
        Self {
            top_left: radius,
            top_right: radius,
            bottom_right: radius,
            bottom_left: radius,
        }
    }

    /// Returns `Some(radius)` if all four corners share one radius.
    pub fn as_uniform(&self) -> Option<f32> {
        let r = self.top_left;
        (self.top_right == r && self.bottom_right == r && self.bottom_left == r).then_some(r)
    }
}

/// A rectangle with rounded corners.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct RoundedRect {
    /// Outer bounds of the shape.
    pub rect: PxRect,
    /// Corner radii.
    pub radii: CornerRadii,
}

impl RoundedRect {
    /// Creates a rounded rectangle.
    pub const fn new(rect: PxRect, radii: CornerRadii) -> Self {
        Self { rect, radii }
    }
}

/// Fill `shape` with a solid `color`.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct FillCommand {
    /// The shape to fill.
    pub shape: RoundedRect,
    /// The fill color.
    pub color: Color,
}

impl FillCommand {
    /// Creates a fill command.
    pub const fn new(shape: RoundedRect, color: Color) -> Self {
        Self { shape, color }
    }
}

/// Receives fill commands from components.
///
/// Implement this for the host renderer's paint queue. Commands arrive in
/// paint order: each one is composited over everything received before it.
pub trait Painter {
    /// Submits one fill command.
    fn fill(&mut self, command: FillCommand);
}

impl<P: Painter + ?Sized> Painter for &mut P {
    fn fill(&mut self, command: FillCommand) {
        (**self).fill(command);
    }
}

/// A [`Painter`] that records commands in order.
///
/// Sized to hold one shadowed surface inline; longer recordings spill to
/// the heap.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PaintQueue {
    commands: SmallVec<[FillCommand; 4]>,
}

impl PaintQueue {
    /// Creates an empty queue.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of recorded commands.
    pub fn len(&self) -> usize {
        self.commands.len()
    }

    /// Returns true if nothing has been recorded.
    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    /// Recorded commands in paint order.
    pub fn commands(&self) -> &[FillCommand] {
        &self.commands
    }

    /// Moves every command of `other` to the end of this queue, keeping
    /// their order. Used to stack content recorded before its backdrop.
    pub fn append(&mut self, other: &mut PaintQueue) {
        self.commands.extend(other.commands.drain(..));
    }

    /// Forwards every recorded command to `painter`, in order.
    pub fn replay(&self, painter: &mut impl Painter) {
        for command in &self.commands {
            painter.fill(*command);
        }
    }
}

impl Painter for PaintQueue {
    fn fill(&mut self, command: FillCommand) {
        self.commands.push(command);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn command(x: f32) -> FillCommand {
        FillCommand::new(
            RoundedRect::new(PxRect::new(x, 0.0, x + 1.0, 1.0), CornerRadii::ZERO),
            Color::BLACK,
        )
    }

    #[test]
    fn test_uniform_radii() {
        let radii = CornerRadii::uniform(5.5);
        assert_eq!(radii.as_uniform(), Some(5.5));
        assert_eq!(CornerRadii::ZERO.as_uniform(), Some(0.0));

        let mixed = CornerRadii {
            top_left: 8.0,
            top_right: 8.0,
            ..CornerRadii::ZERO
        };
        assert_eq!(mixed.as_uniform(), None);
    }

    #[test]
    fn test_queue_keeps_order() {
        let mut queue = PaintQueue::new();
        for x in 0..6 {
            queue.fill(command(x as f32));
        }
        let xs: Vec<f32> = queue.commands().iter().map(|c| c.shape.rect.min.x).collect();
        assert_eq!(xs, vec![0.0, 1.0, 2.0, 3.0, 4.0, 5.0]);
    }

    #[test]
    fn test_append_and_replay() {
        let mut first = PaintQueue::new();
        first.fill(command(0.0));
        let mut second = PaintQueue::new();
        second.fill(command(1.0));
        second.fill(command(2.0));

        first.append(&mut second);
        assert!(second.is_empty());
        assert_eq!(first.len(), 3);

        let xs: Vec<f32> = first.commands().iter().map(|c| c.shape.rect.min.x).collect();
        assert_eq!(xs, vec![0.0, 1.0, 2.0]);

        let mut sink = PaintQueue::new();
        first.replay(&mut sink);
        assert_eq!(sink, first);
    }
}
