//! Elevation shadows for raised surfaces.
//!
//! ## Usage
//!
//! Paint a soft drop shadow under a card-like surface, then the surface
//! itself.
//!
//! A real blur is too expensive to run per widget, so the shadow is built
//! from three translucent rounded rectangles painted back to front:
//!
//! - **ambient**: the surface grown by half the elevation offset on every
//!   side; the widest, faintest band.
//! - **penumbra**: the surface pushed down by half the offset, then grown by
//!   the full offset; the directional part that makes the shadow fall below
//!   the surface.
//! - **umbra**: the same pushed-down surface, shrunk by half the offset and
//!   spread back out by the same amount, with tighter corners; the contact
//!   shadow with the darkest tint, peeking out below the surface.
//!
//! The opaque surface fill goes on top, so only the parts of the bands that
//! stick out past the surface stay visible.
//!
//! ```
//! use umbra_components::shadow::ShadowSpec;
//! use umbra_ui::{Constraints, Dp, Metric, PaintQueue, Px, PxSize};
//!
//! let spec = ShadowSpec::new().radius(Dp(4.0));
//! let constraints = Constraints::tight(PxSize::new(Px(100), Px(40)));
//!
//! let mut queue = PaintQueue::new();
//! let dims = spec.layout(constraints, &Metric::IDENTITY, &mut queue);
//!
//! assert_eq!(dims.size, constraints.min);
//! assert_eq!(queue.len(), 4);
//! ```

use umbra_ui::{
    Color, Constraints, CornerRadii, Dimensions, Dp, FillCommand, Metric, PaintQueue, Painter,
    PxRect, RoundedRect,
};

/// How far a shadowed surface appears to float above its background.
pub const SHADOW_ELEVATION: Dp = Dp(3.0);

/// Default values for [`ShadowSpec`].
pub struct ShadowDefaults;

impl ShadowDefaults {
    /// Corner radius of the surface.
    pub const RADIUS: Dp = Dp(4.0);
    /// Alpha of the ambient band tint (`0x01` of `0xff`).
    pub const AMBIENT_ALPHA: f32 = 1.0 / 255.0;
    /// Alpha of the penumbra band tint (`0x05` of `0xff`).
    pub const PENUMBRA_ALPHA: f32 = 5.0 / 255.0;
    /// Alpha of the umbra band tint (`0x10` of `0xff`).
    pub const UMBRA_ALPHA: f32 = 16.0 / 255.0;
}

/// Configuration of one shadowed surface.
///
/// Build it once per widget and reuse it every frame; geometry is derived
/// fresh on each pass from the rectangle layout hands out.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ShadowSpec {
    /// Corner radius of the surface. Must not be negative.
    pub radius: Dp,
    /// Offset between the surface and its shadow.
    pub elevation: Dp,
    /// Fill of the surface painted over the bands. May be transparent.
    pub surface: Color,
    /// Tint of the ambient band.
    pub ambient: Color,
    /// Tint of the penumbra band.
    pub penumbra: Color,
    /// Tint of the umbra band.
    pub umbra: Color,
}

impl Default for ShadowSpec {
    fn default() -> Self {
        Self {
            radius: ShadowDefaults::RADIUS,
            elevation: SHADOW_ELEVATION,
            surface: Color::WHITE,
            ambient: Color::BLACK.with_alpha(ShadowDefaults::AMBIENT_ALPHA),
            penumbra: Color::BLACK.with_alpha(ShadowDefaults::PENUMBRA_ALPHA),
            umbra: Color::BLACK.with_alpha(ShadowDefaults::UMBRA_ALPHA),
        }
    }
}

impl ShadowSpec {
    /// Creates a spec with the default radius, elevation and tints.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the corner radius.
    pub fn radius(mut self, radius: Dp) -> Self {
        self.radius = radius;
        self
    }

    /// Sets the elevation.
    pub fn elevation(mut self, elevation: Dp) -> Self {
        self.elevation = elevation;
        self
    }

    /// Sets the surface fill.
    pub fn surface(mut self, color: Color) -> Self {
        self.surface = color;
        self
    }

    /// Sets the ambient band tint.
    pub fn ambient(mut self, color: Color) -> Self {
        self.ambient = color;
        self
    }

    /// Sets the penumbra band tint.
    pub fn penumbra(mut self, color: Color) -> Self {
        self.penumbra = color;
        self
    }

    /// Sets the umbra band tint.
    pub fn umbra(mut self, color: Color) -> Self {
        self.umbra = color;
        self
    }

    /// Paints the shadow and surface for a widget sized to `constraints.min`.
    ///
    /// Always reports `constraints.min`: the bands spill outside the widget
    /// without claiming layout space. An empty minimum size paints nothing.
    pub fn layout(
        &self,
        constraints: Constraints,
        metric: &Metric,
        painter: &mut impl Painter,
    ) -> Dimensions {
        let size = constraints.min;
        if size.width.0 <= 0 || size.height.0 <= 0 {
            tracing::trace!(?size, "skipping shadow for empty surface");
            return Dimensions::new(size);
        }
        compose_shadow(PxRect::from_size(size), self, metric).paint(painter);
        Dimensions::new(size)
    }

    /// Lays out `content` and paints this shadow behind it.
    ///
    /// `content` is measured first, recording into a scratch queue. The
    /// shadow then covers the larger of `constraints.min` and the content
    /// size; the content is queued after it and everything is replayed to
    /// `painter` in one pass.
    pub fn layout_with<F>(
        &self,
        constraints: Constraints,
        metric: &Metric,
        painter: &mut impl Painter,
        content: F,
    ) -> Dimensions
    where
        F: FnOnce(Constraints, &mut PaintQueue) -> Dimensions,
    {
        let mut recorded = PaintQueue::new();
        let content_dims = content(constraints, &mut recorded);
        let size = constraints.min.max(content_dims.size);

        let mut stacked = PaintQueue::new();
        self.layout(constraints.with_min(size), metric, &mut stacked);
        stacked.append(&mut recorded);
        stacked.replay(painter);
        Dimensions::new(size)
    }
}

/// The three shadow bands of a [`ShadowComposition`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ShadowBand {
    /// Diffuse surround.
    Ambient,
    /// Directional falloff below the surface.
    Penumbra,
    /// Tight contact core.
    Umbra,
}

/// Fill commands for one shadowed surface, in paint order.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ShadowComposition {
    /// Ambient band, painted first.
    pub ambient: FillCommand,
    /// Penumbra band.
    pub penumbra: FillCommand,
    /// Umbra band.
    pub umbra: FillCommand,
    /// Surface fill, painted last.
    pub surface: FillCommand,
}

impl ShadowComposition {
    /// Returns one band.
    pub fn band(&self, band: ShadowBand) -> FillCommand {
        match band {
            ShadowBand::Ambient => self.ambient,
            ShadowBand::Penumbra => self.penumbra,
            ShadowBand::Umbra => self.umbra,
        }
    }

    /// All commands, back to front.
    pub fn commands(&self) -> [FillCommand; 4] {
        [self.ambient, self.penumbra, self.umbra, self.surface]
    }

    /// Submits all commands to `painter`, back to front.
    pub fn paint(&self, painter: &mut impl Painter) {
        for command in self.commands() {
            painter.fill(command);
        }
    }
}

/// Computes the shadow bands and surface fill for a surface occupying `rect`.
///
/// # Panics
///
/// Panics if `rect` does not have a positive width and height, or if
/// `spec.radius` is negative.
pub fn compose_shadow(rect: PxRect, spec: &ShadowSpec, metric: &Metric) -> ShadowComposition {
    assert!(
        rect.width() > 0.0 && rect.height() > 0.0,
        "shadow surface must have a positive size, got {rect:?}"
    );
    assert!(
        spec.radius.0 >= 0.0,
        "shadow corner radius must not be negative, got {}",
        spec.radius
    );

    let radius = spec.radius.to_px(metric);
    let offset = spec.elevation.to_px(metric);
    let half = offset / 2.0;

    // The umbra is derived from the lowered rect, not `rect`. The inset is
    // undone by the band spread, leaving its bottom edge below the surface.
    let lowered = rect.translate(0.0, half);

    let composition = ShadowComposition {
        ambient: fill(rect.outset(half), radius + half, spec.ambient),
        penumbra: fill(lowered.outset(offset), radius + offset, spec.penumbra),
        umbra: fill(lowered.outset(-half).outset(half), radius / 4.0 + half, spec.umbra),
        surface: fill(rect, radius, spec.surface),
    };
    tracing::trace!(offset, radius, ?rect, "composed elevation shadow");
    composition
}

fn fill(rect: PxRect, radius: f32, color: Color) -> FillCommand {
    FillCommand::new(RoundedRect::new(rect, CornerRadii::uniform(radius)), color)
}
