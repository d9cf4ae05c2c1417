//! Transform and color records shared by every extractor.
//!
//! Both keep the source document's numeric formatting verbatim: values are
//! carried as strings and never reparsed to native numbers on output.

use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// An affine 2D transform as an ordered 6-tuple `[a, b, c, d, tx, ty]`.
///
/// Scale/shear/rotation live in `a..d`, translation in `tx`/`ty`. Every
/// element is a numeric string taken verbatim from the source attribute;
/// attributes the source omits take the format's defaults (`a`/`d` are
/// `"1"`, the rest `"0"`), so the 6-element invariant always holds.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TransformMatrix(pub [String; 6]);

impl TransformMatrix {
    /// The identity transform, as the source format spells its defaults.
    pub fn identity() -> Self {
        TransformMatrix([
            "1".to_string(),
            "0".to_string(),
            "0".to_string(),
            "1".to_string(),
            "0".to_string(),
            "0".to_string(),
        ])
    }

    /// The ordered elements `[a, b, c, d, tx, ty]`.
    pub fn elements(&self) -> &[String; 6] {
        &self.0
    }

    /// Whether every element parses as a finite real number.
    pub fn is_numeric(&self) -> bool {
        self.0.iter().all(|v| v.parse::<f64>().map(f64::is_finite).unwrap_or(false))
    }
}

/// A per-channel color multiplier, or the `"default"` identity sentinel.
///
/// The sentinel is used iff all four multiplier strings are textually equal
/// to `"1.000000"`. This is a textual-equality check on the formatted source
/// value, not a numeric-tolerance check: `"1.0"` does not collapse.
#[derive(Debug, Clone, PartialEq)]
pub enum ColorTransform {
    /// All four multipliers are the textual identity value
    Default,
    /// Explicit `[r, g, b, a]` multipliers
    Multipliers([String; 4]),
}

impl ColorTransform {
    /// The textual identity multiplier as the source format writes it.
    pub const IDENTITY: &'static str = "1.000000";

    /// Build from four multiplier strings, collapsing the textual identity.
    pub fn from_multipliers(values: [String; 4]) -> Self {
        if values.iter().all(|v| v == Self::IDENTITY) {
            ColorTransform::Default
        } else {
            ColorTransform::Multipliers(values)
        }
    }
}

impl Serialize for ColorTransform {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            ColorTransform::Default => serializer.serialize_str("default"),
            ColorTransform::Multipliers(values) => values.serialize(serializer),
        }
    }
}

impl<'de> Deserialize<'de> for ColorTransform {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum Repr {
            Sentinel(String),
            Values([String; 4]),
        }

        match Repr::deserialize(deserializer)? {
            Repr::Sentinel(s) if s == "default" => Ok(ColorTransform::Default),
            Repr::Sentinel(s) => Err(serde::de::Error::custom(format!(
                "expected \"default\" or a 4-element multiplier array, got \"{}\"",
                s
            ))),
            Repr::Values(values) => Ok(ColorTransform::Multipliers(values)),
        }
    }
}
