//! Theme colors and the shadow presets derived from them.
//!
//! ## Usage
//!
//! Keep one [`Theme`] for the app and ask it for shadow specs instead of
//! assembling tints by hand.

use umbra_ui::{Color, Dp};

use crate::shadow::{SHADOW_ELEVATION, ShadowDefaults, ShadowSpec};

const DEFAULT_SURFACE: Color = Color::from_rgb(1.0, 1.0, 1.0);

/// Colors a theme hands to its components.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ColorScheme {
    /// Fill of raised surfaces such as cards.
    pub surface: Color,
    /// Base color of shadows. Band alphas are applied on top.
    pub shadow: Color,
}

impl Default for ColorScheme {
    fn default() -> Self {
        Self {
            surface: DEFAULT_SURFACE,
            shadow: Color::BLACK,
        }
    }
}

/// App-wide component defaults.
#[derive(Clone, Copy, Debug, PartialEq, Default)]
pub struct Theme {
    /// Colors used by components.
    pub color_scheme: ColorScheme,
}

impl Theme {
    /// Creates a theme from a color scheme.
    pub fn new(color_scheme: ColorScheme) -> Self {
        Self { color_scheme }
    }

    /// The standard card shadow: surface-colored, 4dp corners.
    pub fn shadow(&self) -> ShadowSpec {
        let shadow = self.color_scheme.shadow;
        ShadowSpec {
            radius: ShadowDefaults::RADIUS,
            elevation: SHADOW_ELEVATION,
            surface: self.color_scheme.surface,
            ambient: shadow.with_alpha(ShadowDefaults::AMBIENT_ALPHA),
            penumbra: shadow.with_alpha(ShadowDefaults::PENUMBRA_ALPHA),
            umbra: shadow.with_alpha(ShadowDefaults::UMBRA_ALPHA),
        }
    }

    /// A shadow whose surface is left transparent, for content that paints
    /// its own background.
    pub fn transparent_shadow(&self, radius: Dp) -> ShadowSpec {
        self.shadow().surface(Color::TRANSPARENT).radius(radius)
    }
}

#[cfg(test)]
mod tests {
    use umbra_ui::{Constraints, Metric, PaintQueue, Px, PxSize};

    use super::*;

    #[test]
    fn test_default_shadow() {
        let spec = Theme::default().shadow();
        assert_eq!(spec, ShadowSpec::default());
        assert_eq!(spec.radius, Dp(4.0));
        assert_eq!(spec.elevation, Dp(3.0));
        assert_eq!(spec.ambient, Color::from_rgba_u8(0, 0, 0, 0x01));
        assert_eq!(spec.penumbra, Color::from_rgba_u8(0, 0, 0, 0x05));
        assert_eq!(spec.umbra, Color::from_rgba_u8(0, 0, 0, 0x10));
    }

    #[test]
    fn test_tints_are_ordered() {
        let spec = Theme::default().shadow();
        assert!(spec.ambient.a < spec.penumbra.a);
        assert!(spec.penumbra.a < spec.umbra.a);
        assert!(spec.umbra.a < 0.1);
    }

    #[test]
    fn test_scheme_colors_flow_into_shadow() {
        let theme = Theme::new(ColorScheme {
            surface: Color::from_rgb_u8(0xf3, 0xf5, 0xf6),
            shadow: Color::from_rgb(0.1, 0.2, 0.3),
        });
        let spec = theme.shadow();
        assert_eq!(spec.surface, theme.color_scheme.surface);
        assert_eq!(spec.umbra, Color::new(0.1, 0.2, 0.3, ShadowDefaults::UMBRA_ALPHA));
    }

    #[test]
    fn test_transparent_shadow() {
        let theme = Theme::default();
        let spec = theme.transparent_shadow(Dp(8.0));
        assert!(spec.surface.is_transparent());
        assert_eq!(spec.radius, Dp(8.0));
        assert_eq!(spec.penumbra, theme.shadow().penumbra);

        let mut queue = PaintQueue::new();
        let constraints = Constraints::tight(PxSize::new(Px(64), Px(64)));
        let dims = spec.layout(constraints, &Metric::IDENTITY, &mut queue);
        assert_eq!(dims.size, constraints.min);
        assert_eq!(queue.commands()[3].color, Color::TRANSPARENT);
    }
}
