//! Unit classification and conversion for temperature, length and weight.
//!
//! Every category converts through a base unit: Celsius, meters and
//! kilograms respectively. Tokens are matched case-insensitively.

use serde::{Deserialize, Serialize};
use std::fmt;

mod classify;
mod error;
pub mod length;
pub mod temperature;
pub mod weight;

pub use classify::{classify, LENGTH_BLOB, TEMPERATURE_BLOB, WEIGHT_BLOB};
pub use error::{ConversionError, UnknownUnit};
pub use length::LengthUnit;
pub use temperature::TemperatureUnit;
pub use weight::WeightUnit;

/// Measurement category a pair of units belongs to.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Category { Temperature, Length, Weight }

impl Category {
    pub const ALL: [Category; 3] = [Category::Temperature, Category::Length, Category::Weight];

    /// Lower-case noun used in error messages ("temperature", ...).
    pub fn noun(self) -> &'static str {
        match self {
            Category::Temperature => "temperature",
            Category::Length => "length",
            Category::Weight => "weight",
        }
    }

    /// Canonical unit names with their accepted aliases.
    pub fn aliases(self) -> Vec<(&'static str, &'static [&'static str])> {
        match self {
            Category::Temperature => table::<TemperatureUnit>(),
            Category::Length => table::<LengthUnit>(),
            Category::Weight => table::<WeightUnit>(),
        }
    }

    /// Run the category's two-stage conversion.
    pub fn convert(self, value: f64, from: &str, to: &str) -> Result<f64, ConversionError> {
        match self {
            Category::Temperature => temperature::convert(value, from, to),
            Category::Length => length::convert(value, from, to),
            Category::Weight => weight::convert(value, from, to),
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Category::Temperature => "Temperature",
            Category::Length => "Length",
            Category::Weight => "Weight",
        };
        f.write_str(s)
    }
}

/// A unit of one category, identified by a fixed set of alias tokens.
pub trait Unit: Copy + Sized + 'static {
    const ALL: &'static [Self];

    fn name(self) -> &'static str;
    fn aliases(self) -> &'static [&'static str];

    /// Resolve a token (any case) to a unit.
    fn parse(token: &str) -> Result<Self, UnknownUnit> {
        let token = token.to_lowercase();
        Self::ALL
            .iter()
            .copied()
            .find(|u| u.aliases().iter().any(|a| *a == token))
            .ok_or(UnknownUnit(token))
    }
}

fn table<U: Unit>() -> Vec<(&'static str, &'static [&'static str])> {
    U::ALL.iter().map(|u| (u.name(), u.aliases())).collect()
}

/// How a unit relates to its category's base unit.
#[derive(Copy, Clone, Debug, PartialEq)]
pub(crate) enum Scale {
    /// The base unit itself.
    Base,
    /// `n` of this unit make one base unit (3.28084 ft per meter).
    PerBase(f64),
    /// One of this unit is `n` base units (1 km is 1000 m).
    OfBase(f64),
}

impl Scale {
    pub(crate) fn to_base(self, value: f64) -> f64 {
        match self {
            Scale::Base => value,
            Scale::PerBase(n) => value / n,
            Scale::OfBase(n) => value * n,
        }
    }

    pub(crate) fn from_base(self, base: f64) -> f64 {
        match self {
            Scale::Base => base,
            Scale::PerBase(n) => base * n,
            Scale::OfBase(n) => base / n,
        }
    }
}

/// Outcome of a successful conversion.
#[derive(Clone, Debug, PartialEq)]
pub struct Conversion {
    pub original_value: f64,
    pub from_unit: String,
    pub target_value: f64,
    pub to_unit: String,
    pub category: Category,
}

/// Classify the unit pair, then convert `value` within that category.
///
/// Units are lower-cased first; the returned [`Conversion`] echoes the
/// lower-cased tokens.
pub fn convert(value: f64, from: &str, to: &str) -> Result<Conversion, ConversionError> {
    let from = from.to_lowercase();
    let to = to.to_lowercase();
    let category = classify(&from, &to).ok_or_else(|| ConversionError::UnrecognizedCategory {
        from: from.clone(),
        to: to.clone(),
    })?;
    let target_value = category.convert(value, &from, &to)?;
    Ok(Conversion { original_value: value, from_unit: from, target_value, to_unit: to, category })
}
