//! # Unit Values and Metrics
//!
//! A [`Value`] is a magnitude tagged with the [`Unit`] it is expressed in.
//! A [`Metric`] describes how the current display maps those units onto
//! physical pixels, and is the only thing needed to resolve a value:
//!
//! ```
//! use umbra_ui::unit::{Metric, Unit, Value};
//!
//! let metric = Metric::new(2.0, 2.5);
//! assert_eq!(metric.to_px(Value::new(3.0, Unit::Dp)), 6.0);
//! assert_eq!(metric.to_px(Value::new(4.0, Unit::Sp)), 10.0);
//! assert_eq!(metric.to_px(Value::new(7.0, Unit::Px)), 7.0);
//! ```
//!
//! ## Zero ratios
//!
//! A ratio of exactly `0.0` means the host never filled it in. It is read as
//! `1.0` so an unset metric degrades to unscaled geometry instead of
//! collapsing everything to a point.
//!
//! ## Textual form
//!
//! Values print and parse as `<magnitude><suffix>`, e.g. `3dp`, `14sp`,
//! `1.5px`.

use std::{fmt, str::FromStr, sync::OnceLock};

use parking_lot::RwLock;
use thiserror::Error;

use crate::px::Px;

/// Errors produced while decoding unit tags or unit strings.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum UnitError {
    /// A raw unit tag did not name any known unit.
    #[error("unknown unit tag {0}")]
    UnknownTag(u8),
    /// A textual value ended in a suffix that is not `px`, `dp` or `sp`.
    #[error("unknown unit suffix in {0:?}")]
    UnknownSuffix(String),
    /// The magnitude part of a textual value is not a number.
    #[error("malformed unit value {0:?}")]
    Malformed(String),
}

/// The unit a [`Value`] is expressed in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum Unit {
    /// Physical pixels. Never scaled.
    Px = 0,
    /// Device-independent pixels, scaled by display density.
    Dp = 1,
    /// Scale-independent pixels, scaled by density and the user's text size.
    Sp = 2,
}

impl Unit {
    /// Decodes a raw unit tag as stored by hosts that keep units as integers.
    pub fn from_tag(tag: u8) -> Result<Self, UnitError> {
        match tag {
            0 => Ok(Unit::Px),
            1 => Ok(Unit::Dp),
            2 => Ok(Unit::Sp),
            other => Err(UnitError::UnknownTag(other)),
        }
    }

    /// Returns the raw tag for this unit.
    pub const fn tag(self) -> u8 {
        self as u8
    }

    /// The textual suffix used by [`Value`]'s `Display` and `FromStr`.
    pub const fn suffix(self) -> &'static str {
        match self {
            Unit::Px => "px",
            Unit::Dp => "dp",
            Unit::Sp => "sp",
        }
    }
}

/// A magnitude tagged with its unit.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Value {
    /// The numeric magnitude, in `unit`s.
    pub magnitude: f32,
    /// The unit `magnitude` is expressed in.
    pub unit: Unit,
}

impl Value {
    /// Creates a value from a magnitude and unit.
    pub const fn new(magnitude: f32, unit: Unit) -> Self {
        Self { magnitude, unit }
    }

    /// Creates a value from a raw unit tag.
    ///
    /// # Panics
    ///
    /// Panics if `tag` does not name a unit. Hosts only ever hand out tags
    /// produced by [`Unit::tag`], so anything else is a programming error.
    /// Use [`Value::try_from_tag`] when the tag comes from untrusted data.
    pub fn from_tag(magnitude: f32, tag: u8) -> Self {
        match Self::try_from_tag(magnitude, tag) {
            Ok(value) => value,
            Err(err) => panic!("{err}"),
        }
    }

    /// Creates a value from a raw unit tag, reporting unknown tags.
    pub fn try_from_tag(magnitude: f32, tag: u8) -> Result<Self, UnitError> {
        Ok(Self::new(magnitude, Unit::from_tag(tag)?))
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.magnitude, self.unit.suffix())
    }
}

impl FromStr for Value {
    type Err = UnitError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        let (number, unit) = [Unit::Px, Unit::Dp, Unit::Sp]
            .into_iter()
            .find_map(|unit| Some((trimmed.strip_suffix(unit.suffix())?, unit)))
            .ok_or_else(|| UnitError::UnknownSuffix(s.to_owned()))?;
        let magnitude = number
            .trim()
            .parse::<f32>()
            .map_err(|_| UnitError::Malformed(s.to_owned()))?;
        Ok(Self::new(magnitude, unit))
    }
}

/// Process-wide metric, set by the host once it knows the display density.
static CURRENT_METRIC: OnceLock<RwLock<Metric>> = OnceLock::new();

/// Conversion ratios from abstract units to physical pixels.
#[derive(Debug, Default, Clone, Copy, PartialEq)]
pub struct Metric {
    /// Physical pixels per device-independent pixel.
    pub px_per_dp: f32,
    /// Physical pixels per scale-independent pixel.
    pub px_per_sp: f32,
}

impl Metric {
    /// A metric that maps every unit one-to-one onto pixels.
    pub const IDENTITY: Self = Self::new(1.0, 1.0);

    /// Creates a metric from its two ratios.
    pub const fn new(px_per_dp: f32, px_per_sp: f32) -> Self {
        Self {
            px_per_dp,
            px_per_sp,
        }
    }

    /// Resolves `value` to physical pixels.
    pub fn to_px(&self, value: Value) -> f32 {
        match value.unit {
            Unit::Px => value.magnitude,
            Unit::Dp => guard_ratio(self.px_per_dp) * value.magnitude,
            Unit::Sp => guard_ratio(self.px_per_sp) * value.magnitude,
        }
    }

    /// Resolves `value` to the nearest whole physical pixel.
    pub fn px(&self, value: Value) -> Px {
        Px::saturating_from_f32(self.to_px(value).round())
    }

    /// Replaces the process-wide metric.
    pub fn install(metric: Metric) {
        let lock = CURRENT_METRIC.get_or_init(|| RwLock::new(Metric::default()));
        *lock.write() = metric;
        tracing::debug!(
            px_per_dp = metric.px_per_dp,
            px_per_sp = metric.px_per_sp,
            "installed display metric"
        );
    }

    /// Returns the process-wide metric, or the all-zero default if none has
    /// been installed.
    pub fn current() -> Metric {
        CURRENT_METRIC
            .get()
            .map(|lock| *lock.read())
            .unwrap_or_default()
    }
}

fn guard_ratio(ratio: f32) -> f32 {
    if ratio == 0.0 { 1.0 } else { ratio }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_px_is_identity() {
        let metric = Metric::new(3.0, 4.0);
        for magnitude in [-2.5, 0.0, 1.0, 17.25] {
            assert_eq!(metric.to_px(Value::new(magnitude, Unit::Px)), magnitude);
        }
    }

    #[test]
    fn test_zero_magnitude_is_zero_pixels() {
        let metric = Metric::new(2.75, 1.5);
        for unit in [Unit::Px, Unit::Dp, Unit::Sp] {
            assert_eq!(metric.to_px(Value::new(0.0, unit)), 0.0);
        }
    }

    #[test]
    fn test_scaled_units() {
        let metric = Metric::new(2.0, 3.0);
        assert_eq!(metric.to_px(Value::new(3.0, Unit::Dp)), 6.0);
        assert_eq!(metric.to_px(Value::new(3.0, Unit::Sp)), 9.0);
    }

    #[test]
    fn test_zero_ratio_matches_unit_ratio() {
        let unset = Metric::new(0.0, 0.0);
        for unit in [Unit::Px, Unit::Dp, Unit::Sp] {
            for magnitude in [0.0, 0.5, 3.0, 48.0] {
                let value = Value::new(magnitude, unit);
                assert_eq!(unset.to_px(value), Metric::IDENTITY.to_px(value));
            }
        }
        assert_eq!(Metric::default(), unset);
    }

    #[test]
    fn test_zero_guard_is_per_ratio() {
        let metric = Metric::new(0.0, 2.0);
        assert_eq!(metric.to_px(Value::new(5.0, Unit::Dp)), 5.0);
        assert_eq!(metric.to_px(Value::new(5.0, Unit::Sp)), 10.0);
    }

    #[test]
    fn test_px_rounds_to_whole_pixels() {
        let metric = Metric::new(1.5, 1.0);
        assert_eq!(metric.px(Value::new(3.0, Unit::Dp)), Px(5));
        assert_eq!(metric.px(Value::new(2.4, Unit::Px)), Px(2));
    }

    #[test]
    fn test_tags() {
        for unit in [Unit::Px, Unit::Dp, Unit::Sp] {
            assert_eq!(Unit::from_tag(unit.tag()), Ok(unit));
        }
        assert_eq!(Unit::from_tag(9), Err(UnitError::UnknownTag(9)));
        assert_eq!(Value::try_from_tag(1.0, 3), Err(UnitError::UnknownTag(3)));
        assert_eq!(Value::from_tag(2.0, 1), Value::new(2.0, Unit::Dp));
    }

    #[test]
    #[should_panic(expected = "unknown unit tag 7")]
    fn test_unknown_tag_is_fatal() {
        let _ = Value::from_tag(1.0, 7);
    }

    #[test]
    fn test_parse_values() {
        assert_eq!("3dp".parse(), Ok(Value::new(3.0, Unit::Dp)));
        assert_eq!(" 14sp ".parse(), Ok(Value::new(14.0, Unit::Sp)));
        assert_eq!("1.5px".parse(), Ok(Value::new(1.5, Unit::Px)));
        assert_eq!("-2 dp".parse(), Ok(Value::new(-2.0, Unit::Dp)));
        assert_eq!("1e3dp".parse(), Ok(Value::new(1000.0, Unit::Dp)));
        assert_eq!("2.5E-1sp".parse(), Ok(Value::new(0.25, Unit::Sp)));
    }

    #[test]
    fn test_parse_errors() {
        assert_eq!("3em".parse::<Value>(), Err(UnitError::UnknownSuffix("3em".to_owned())));
        assert_eq!("42".parse::<Value>(), Err(UnitError::UnknownSuffix("42".to_owned())));
        assert_eq!("3DP".parse::<Value>(), Err(UnitError::UnknownSuffix("3DP".to_owned())));
        assert_eq!("x.ydp".parse::<Value>(), Err(UnitError::Malformed("x.ydp".to_owned())));
        assert_eq!("1e3xdp".parse::<Value>(), Err(UnitError::Malformed("1e3xdp".to_owned())));
        assert_eq!("..dp".parse::<Value>(), Err(UnitError::Malformed("..dp".to_owned())));
        assert_eq!("dp".parse::<Value>(), Err(UnitError::Malformed("dp".to_owned())));
    }

    #[test]
    fn test_display() {
        assert_eq!(Value::new(3.0, Unit::Dp).to_string(), "3dp");
        assert_eq!(Value::new(1.5, Unit::Px).to_string(), "1.5px");
    }

    #[test]
    fn test_install_current_metric() {
        let metric = Metric::new(2.0, 2.25);
        Metric::install(metric);
        assert_eq!(Metric::current(), metric);
        assert_eq!(crate::Dp(3.0).to_pixels_f32(), 6.0);
        assert_eq!(crate::Sp(4.0).to_pixels_f32(), 9.0);
    }
}
