//! # Ingredient Quantities
//!
//! Recipes record quantities the way cooks write them: `"2"`, `"2.5"`, `"2-3"`,
//! `"1/2"`, or `"-"` for "to taste". [`Quantity`] parses these once, when a
//! record is ingested, so the aggregation code only ever sees numbers.
//!
//! | input     | variant                 | amount |
//! |-----------|-------------------------|--------|
//! | `5`       | `Fixed(5.0)`            | 5      |
//! | `"2-4"`   | `Range { min, max }`    | 3      |
//! | `"1/2"`   | `Fraction { num, den }` | 0.5    |
//! | `"-"`     | `Unspecified`           | 0      |
//!
//! Rules are applied in that order: a string containing `-` is a range, else a
//! string containing `/` is a fraction, else it must be a plain number. Anything
//! that does not parse, is negative, is not finite, or divides by zero is a
//! [`QuantityError`] instead of a `NaN` that silently poisons a calorie total.

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum QuantityError {
    #[error("'{0}' is not a number, range or fraction")]
    Malformed(String),

    #[error("'{0}' has a zero denominator")]
    ZeroDenominator(String),

    #[error("'{0}' is negative or not finite")]
    OutOfRange(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum Quantity {
    Fixed(f64),
    Range { min: f64, max: f64 },
    Fraction { num: f64, den: f64 },
    /// "To taste". Counts as zero.
    #[default]
    Unspecified,
}

impl Quantity {
    /// Builds a fixed quantity from a numeric amount.
    pub fn from_amount(amount: f64) -> Result<Self, QuantityError> {
        if amount.is_finite() && amount >= 0.0 {
            Ok(Quantity::Fixed(amount))
        } else {
            Err(QuantityError::OutOfRange(amount.to_string()))
        }
    }

    /// The single number this quantity stands for: the mean of a range,
    /// the quotient of a fraction.
    pub fn amount(&self) -> f64 {
        match *self {
            Quantity::Fixed(n) => n,
            Quantity::Range { min, max } => (min + max) / 2.0,
            Quantity::Fraction { num, den } => num / den,
            Quantity::Unspecified => 0.0,
        }
    }

    pub fn is_unspecified(&self) -> bool {
        matches!(self, Quantity::Unspecified)
    }
}

fn parse_part(part: &str, whole: &str) -> Result<f64, QuantityError> {
    let value: f64 = part
        .trim()
        .parse()
        .map_err(|_| QuantityError::Malformed(whole.to_string()))?;
    if !value.is_finite() || value < 0.0 {
        return Err(QuantityError::OutOfRange(whole.to_string()));
    }
    Ok(value)
}

impl FromStr for Quantity {
    type Err = QuantityError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if trimmed.is_empty() || trimmed == "-" {
            return Ok(Quantity::Unspecified);
        }

        if let Some((min, max)) = trimmed.split_once('-') {
            return Ok(Quantity::Range {
                min: parse_part(min, trimmed)?,
                max: parse_part(max, trimmed)?,
            });
        }

        if let Some((num, den)) = trimmed.split_once('/') {
            let num = parse_part(num, trimmed)?;
            let den = parse_part(den, trimmed)?;
            if den == 0.0 {
                return Err(QuantityError::ZeroDenominator(trimmed.to_string()));
            }
            return Ok(Quantity::Fraction { num, den });
        }

        parse_part(trimmed, trimmed).map(Quantity::Fixed)
    }
}

impl fmt::Display for Quantity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Quantity::Fixed(n) => write!(f, "{}", n),
            Quantity::Range { min, max } => write!(f, "{}-{}", min, max),
            Quantity::Fraction { num, den } => write!(f, "{}/{}", num, den),
            Quantity::Unspecified => write!(f, "-"),
        }
    }
}

// Stored records carry quantities as strings (sometimes as bare numbers), so
// both shapes are accepted and the canonical string form is written back.
impl<'de> Deserialize<'de> for Quantity {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum Raw {
            Number(f64),
            Text(String),
        }

        match Raw::deserialize(deserializer)? {
            Raw::Number(n) => Quantity::from_amount(n),
            Raw::Text(s) => s.parse(),
        }
        .map_err(serde::de::Error::custom)
    }
}

impl Serialize for Quantity {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_plain_numbers() {
        assert_eq!("3".parse::<Quantity>().unwrap(), Quantity::Fixed(3.0));
        assert_eq!(" 2.5 ".parse::<Quantity>().unwrap().amount(), 2.5);
    }

    #[test]
    fn range_amount_is_the_mean() {
        let q: Quantity = "2-4".parse().unwrap();
        assert_eq!(q, Quantity::Range { min: 2.0, max: 4.0 });
        assert_eq!(q.amount(), 3.0);
        assert_eq!("2 - 3".parse::<Quantity>().unwrap().amount(), 2.5);
    }

    #[test]
    fn fraction_amount_is_the_quotient() {
        let q: Quantity = "1/2".parse().unwrap();
        assert_eq!(q.amount(), 0.5);
    }

    #[test]
    fn dash_and_empty_mean_to_taste() {
        assert!("-".parse::<Quantity>().unwrap().is_unspecified());
        assert!("  ".parse::<Quantity>().unwrap().is_unspecified());
        assert_eq!(Quantity::Unspecified.amount(), 0.0);
    }

    #[test]
    fn rejects_zero_denominator() {
        assert_eq!(
            "1/0".parse::<Quantity>(),
            Err(QuantityError::ZeroDenominator("1/0".into()))
        );
    }

    #[test]
    fn rejects_garbage_and_half_open_ranges() {
        assert!(matches!(
            "a pinch".parse::<Quantity>(),
            Err(QuantityError::Malformed(_))
        ));
        assert!(matches!(
            "-2".parse::<Quantity>(),
            Err(QuantityError::Malformed(_))
        ));
        assert!(matches!(
            "2/".parse::<Quantity>(),
            Err(QuantityError::Malformed(_))
        ));
    }

    #[test]
    fn rejects_non_finite_values() {
        assert!(matches!(
            "inf".parse::<Quantity>(),
            Err(QuantityError::OutOfRange(_))
        ));
        assert!(Quantity::from_amount(-1.0).is_err());
        assert!(Quantity::from_amount(f64::NAN).is_err());
    }

    #[test]
    fn deserializes_numbers_and_strings() {
        let from_number: Quantity = serde_json::from_str("5").unwrap();
        assert_eq!(from_number.amount(), 5.0);

        let from_text: Quantity = serde_json::from_str("\"1/4\"").unwrap();
        assert_eq!(from_text.amount(), 0.25);

        assert!(serde_json::from_str::<Quantity>("\"lots\"").is_err());
    }

    #[test]
    fn serializes_canonical_text() {
        let json = serde_json::to_string(&Quantity::Range { min: 2.0, max: 3.0 }).unwrap();
        assert_eq!(json, "\"2-3\"");
        assert_eq!(serde_json::to_string(&Quantity::Fixed(100.0)).unwrap(), "\"100\"");
        assert_eq!(serde_json::to_string(&Quantity::Unspecified).unwrap(), "\"-\"");
    }
}
