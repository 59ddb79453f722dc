//! umbra-ui holds the framework-level primitives that umbra's components
//! are written against.
//!
//! # Units
//!
//! Sizes are written in [`Dp`] (layout) or [`Sp`] (text) and resolved to
//! physical pixels through a [`Metric`]:
//!
//! ```
//! use umbra_ui::{Dp, Metric};
//!
//! let metric = Metric::new(2.0, 2.0);
//! assert_eq!(Dp(3.0).to_px(&metric), 6.0);
//! ```
//!
//! # Geometry
//!
//! Layout sizes are whole pixels ([`PxSize`]); paint geometry is continuous
//! ([`PxRect`]) so sub-pixel offsets survive until rasterization.
//!
//! # Painting
//!
//! Components emit [`FillCommand`]s into a [`Painter`] in back-to-front
//! order. [`PaintQueue`] is an in-memory painter for recording and
//! replaying.
#![deny(missing_docs, clippy::unwrap_used)]

pub mod color;
pub mod dp;
pub mod layout;
pub mod logging;
pub mod paint;
pub mod px;
pub mod sp;
pub mod unit;

pub use crate::{
    color::Color,
    dp::Dp,
    layout::{Constraints, Dimensions},
    paint::{CornerRadii, FillCommand, PaintQueue, Painter, RoundedRect},
    px::{Px, PxPoint, PxRect, PxSize},
    sp::Sp,
    unit::{Metric, Unit, UnitError, Value},
};
