//! Weight, converted through kilograms.

use crate::{Category, ConversionError, Scale, Unit, UnknownUnit};

pub const KILOGRAM_TO_POUND: f64 = 2.20462;
pub const KILOGRAM_TO_GRAM: f64 = 1000.0;
pub const KILOGRAM_TO_OUNCE: f64 = 35.274;
pub const KILOGRAM_TO_MILLIGRAM: f64 = 1_000_000.0;

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum WeightUnit { Kilogram, Pound, Gram, Milligram, Ounce }

impl Unit for WeightUnit {
    const ALL: &'static [Self] = &[
        Self::Kilogram, Self::Pound, Self::Gram, Self::Milligram, Self::Ounce,
    ];

    fn name(self) -> &'static str {
        match self {
            Self::Kilogram => "kilogram",
            Self::Pound => "pound",
            Self::Gram => "gram",
            Self::Milligram => "milligram",
            Self::Ounce => "ounce",
        }
    }

    fn aliases(self) -> &'static [&'static str] {
        match self {
            Self::Kilogram => &["kg", "kilogram", "kilograms"],
            Self::Pound => &["lb", "pound", "pounds"],
            Self::Gram => &["g", "gram", "grams"],
            Self::Milligram => &["mg", "milligram", "milligrams"],
            Self::Ounce => &["oz", "ounce", "ounces"],
        }
    }
}

impl WeightUnit {
    pub(crate) fn scale(self) -> Scale {
        match self {
            Self::Kilogram => Scale::Base,
            Self::Pound => Scale::PerBase(KILOGRAM_TO_POUND),
            Self::Gram => Scale::PerBase(KILOGRAM_TO_GRAM),
            Self::Milligram => Scale::PerBase(KILOGRAM_TO_MILLIGRAM),
            Self::Ounce => Scale::PerBase(KILOGRAM_TO_OUNCE),
        }
    }
}

pub fn to_kilograms(value: f64, from: &str) -> Result<f64, UnknownUnit> {
    Ok(WeightUnit::parse(from)?.scale().to_base(value))
}

pub fn from_kilograms(kilograms: f64, to: &str) -> Result<f64, UnknownUnit> {
    Ok(WeightUnit::parse(to)?.scale().from_base(kilograms))
}

pub fn convert(value: f64, from: &str, to: &str) -> Result<f64, ConversionError> {
    let invalid = |_| ConversionError::invalid(Category::Weight, from, to);
    let kilograms = to_kilograms(value, from).map_err(invalid)?;
    from_kilograms(kilograms, to).map_err(invalid)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn known_factors() {
        assert_relative_eq!(convert(1.0, "kg", "lb").unwrap(), 2.20462);
        assert_eq!(convert(1000.0, "g", "kg").unwrap(), 1.0);
        assert_eq!(convert(1.0, "kilogram", "mg").unwrap(), 1_000_000.0);
        assert_relative_eq!(convert(1.0, "kg", "ounces").unwrap(), 35.274);
        assert_relative_eq!(convert(16.0, "oz", "pound").unwrap(), 1.0, epsilon = 1e-3);
    }

    #[test]
    fn round_trips_through_every_unit() {
        for from in WeightUnit::ALL {
            for to in WeightUnit::ALL {
                let there = convert(3.75, from.name(), to.aliases()[1]).unwrap();
                let back = convert(there, to.aliases()[0], from.aliases()[2]).unwrap();
                assert_relative_eq!(back, 3.75, max_relative = 1e-12);
            }
        }
    }

    #[test]
    fn unknown_token_fails_the_whole_conversion() {
        let err = convert(1.0, "gram", "stone").unwrap_err();
        assert_eq!(err.to_string(), "invalid weight unit 'gram' or 'stone'");
        assert_eq!(from_kilograms(2.0, "g"), Ok(2000.0));
    }
}
