use std::{fmt, str::FromStr};

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Font size used to turn `em` and `rem` values into pixels.
pub const ROOT_FONT_SIZE: f32 = 16.;

/// A single configuration value.
///
/// Numbers used as lengths are pixels, numbers used as column counts are
/// counts. Text is passed through to CSS unchanged.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Scalar {
    Number(f64),
    Text(String),
}

impl Scalar {
    /// Formats the value as a CSS length, appending `px` to bare numbers.
    pub fn to_length_css(&self) -> String {
        match self {
            Scalar::Number(number) => format!("{number}px"),
            Scalar::Text(text) => text.clone(),
        }
    }

    /// Interprets the value as a positive whole column count.
    pub fn as_count(&self) -> Option<u16> {
        let number = match self {
            Scalar::Number(number) => *number,
            Scalar::Text(text) => text.trim().parse::<f64>().ok()?,
        };

        if number.fract() != 0. || number < 1. || number > u16::MAX as f64 {
            return None;
        }

        Some(number as u16)
    }
}

impl fmt::Display for Scalar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Scalar::Number(number) => write!(f, "{number}"),
            Scalar::Text(text) => f.write_str(text),
        }
    }
}

impl From<&str> for Scalar {
    fn from(value: &str) -> Self {
        Scalar::Text(value.to_owned())
    }
}

impl From<String> for Scalar {
    fn from(value: String) -> Self {
        Scalar::Text(value)
    }
}

impl From<f64> for Scalar {
    fn from(value: f64) -> Self {
        Scalar::Number(value)
    }
}

impl From<u32> for Scalar {
    fn from(value: u32) -> Self {
        Scalar::Number(value as f64)
    }
}

/// A configuration value that may vary by breakpoint.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ResponsiveValue {
    /// One value for every viewport width.
    Scalar(Scalar),
    /// Values indexed positionally by ascending breakpoint.
    Sequence(Vec<Scalar>),
    /// Values keyed by breakpoint name.
    BreakpointMap(IndexMap<String, Scalar>),
}

impl ResponsiveValue {
    /// Builds a breakpoint map from `(name, value)` pairs, keeping their order.
    pub fn map<K, V>(entries: impl IntoIterator<Item = (K, V)>) -> Self
    where
        K: Into<String>,
        V: Into<Scalar>,
    {
        ResponsiveValue::BreakpointMap(
            entries
                .into_iter()
                .map(|(key, value)| (key.into(), value.into()))
                .collect(),
        )
    }
}

impl From<Scalar> for ResponsiveValue {
    fn from(value: Scalar) -> Self {
        ResponsiveValue::Scalar(value)
    }
}

impl From<&str> for ResponsiveValue {
    fn from(value: &str) -> Self {
        ResponsiveValue::Scalar(value.into())
    }
}

impl From<f64> for ResponsiveValue {
    fn from(value: f64) -> Self {
        ResponsiveValue::Scalar(value.into())
    }
}

impl From<u32> for ResponsiveValue {
    fn from(value: u32) -> Self {
        ResponsiveValue::Scalar(value.into())
    }
}

impl<T: Into<Scalar>> FromIterator<T> for ResponsiveValue {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        ResponsiveValue::Sequence(iter.into_iter().map(Into::into).collect())
    }
}

/// A CSS length the overlay knows how to draw.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Length {
    Px(f32),
    Rem(f32),
    Em(f32),
    Percent(f32),
    /// The `none` keyword, used for an unconstrained max-width.
    None,
}

impl Length {
    /// Absolute size in pixels, if the length is not relative to its container.
    pub fn to_pixels(&self) -> Option<f32> {
        match self {
            Length::Px(px) => Some(*px),
            Length::Rem(value) | Length::Em(value) => Some(value * ROOT_FONT_SIZE),
            Length::Percent(_) | Length::None => None,
        }
    }
}

impl TryFrom<&Scalar> for Length {
    type Error = LengthError;

    fn try_from(value: &Scalar) -> Result<Self, Self::Error> {
        match value {
            Scalar::Number(number) => Ok(Length::Px(*number as f32)),
            Scalar::Text(text) => text.parse(),
        }
    }
}

impl FromStr for Length {
    type Err = LengthError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();

        if trimmed.eq_ignore_ascii_case("none") {
            return Ok(Length::None);
        }

        let number = |digits: &str| {
            digits
                .trim()
                .parse::<f32>()
                .map_err(|_| LengthError::Invalid(s.to_owned()))
        };

        if let Some(digits) = trimmed.strip_suffix("px") {
            Ok(Length::Px(number(digits)?))
        } else if let Some(digits) = trimmed.strip_suffix("rem") {
            Ok(Length::Rem(number(digits)?))
        } else if let Some(digits) = trimmed.strip_suffix("em") {
            Ok(Length::Em(number(digits)?))
        } else if let Some(digits) = trimmed.strip_suffix('%') {
            Ok(Length::Percent(number(digits)?))
        } else {
            Ok(Length::Px(number(trimmed)?))
        }
    }
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum LengthError {
    #[error("`{0}` is not a length in px, rem, em or %")]
    Invalid(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_length_parsing() {
        assert_eq!("16px".parse(), Ok(Length::Px(16.)));
        assert_eq!("1.5rem".parse(), Ok(Length::Rem(1.5)));
        assert_eq!("2em".parse(), Ok(Length::Em(2.)));
        assert_eq!("90%".parse(), Ok(Length::Percent(90.)));
        assert_eq!("0".parse(), Ok(Length::Px(0.)));
        assert_eq!("none".parse(), Ok(Length::None));
        assert_eq!(
            "12vw".parse::<Length>(),
            Err(LengthError::Invalid("12vw".into()))
        );
    }

    #[test]
    fn test_length_from_number_is_pixels() {
        let length = Length::try_from(&Scalar::Number(24.)).unwrap();
        assert_eq!(length, Length::Px(24.));
        assert_eq!(Length::Rem(2.).to_pixels(), Some(32.));
        assert_eq!(Length::Percent(50.).to_pixels(), None);
    }

    #[test]
    fn test_scalar_css_formatting() {
        assert_eq!(Scalar::Number(16.).to_length_css(), "16px");
        assert_eq!(Scalar::Number(1.5).to_length_css(), "1.5px");
        assert_eq!(Scalar::from("2rem").to_length_css(), "2rem");
        assert_eq!(Scalar::Number(12.).to_string(), "12");
    }

    #[test]
    fn test_scalar_column_counts() {
        assert_eq!(Scalar::from(12u32).as_count(), Some(12));
        assert_eq!(Scalar::from("6").as_count(), Some(6));
        assert_eq!(Scalar::Number(0.).as_count(), None);
        assert_eq!(Scalar::Number(2.5).as_count(), None);
        assert_eq!(Scalar::from("many").as_count(), None);
    }

    #[test]
    fn test_responsive_value_from_json() {
        let scalar: ResponsiveValue = serde_json::from_str(r#""16px""#).unwrap();
        assert_eq!(scalar, ResponsiveValue::from("16px"));

        let number: ResponsiveValue = serde_json::from_str("12").unwrap();
        assert_eq!(number, ResponsiveValue::from(12u32));

        let sequence: ResponsiveValue = serde_json::from_str("[4, 8, 12]").unwrap();
        assert_eq!(sequence, [4u32, 8, 12].into_iter().collect());

        let map: ResponsiveValue = serde_json::from_str(r#"{"xs": "10px", "md": 20}"#).unwrap();
        assert_eq!(
            map,
            ResponsiveValue::map([("xs", Scalar::from("10px")), ("md", Scalar::from(20u32))])
        );
    }
}
