//! Components for umbra built on `umbra-ui`.
//!
//! # Example
//!
//! Paint a card with the theme's elevation shadow behind some content:
//!
//! ```
//! use umbra_components::theme::Theme;
//! use umbra_ui::{Constraints, Dimensions, Metric, PaintQueue, Px, PxSize};
//!
//! let card = Theme::default().shadow();
//! let constraints = Constraints::loose(PxSize::new(Px(320), Px(200)));
//!
//! let mut queue = PaintQueue::new();
//! let dims = card.layout_with(constraints, &Metric::new(2.0, 2.0), &mut queue, |_, _| {
//!     Dimensions::new(PxSize::new(Px(120), Px(48)))
//! });
//!
//! assert_eq!(dims.size, PxSize::new(Px(120), Px(48)));
//! assert_eq!(queue.len(), 4);
//! ```
#![deny(missing_docs, clippy::unwrap_used)]

pub mod shadow;
pub mod theme;

pub use shadow::{ShadowComposition, ShadowSpec, compose_shadow};
pub use theme::Theme;
