//! Temperature, converted through Celsius.

use crate::{Category, ConversionError, Unit, UnknownUnit};

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum TemperatureUnit { Celsius, Fahrenheit, Kelvin }

impl Unit for TemperatureUnit {
    const ALL: &'static [Self] = &[Self::Celsius, Self::Fahrenheit, Self::Kelvin];

    fn name(self) -> &'static str {
        match self {
            Self::Celsius => "celsius",
            Self::Fahrenheit => "fahrenheit",
            Self::Kelvin => "kelvin",
        }
    }

    fn aliases(self) -> &'static [&'static str] {
        match self {
            Self::Celsius => &["c", "celsius", "cel"],
            Self::Fahrenheit => &["f", "fahrenheit", "fah"],
            Self::Kelvin => &["k", "kelvin", "kel"],
        }
    }
}

impl TemperatureUnit {
    pub fn to_celsius(self, value: f64) -> f64 {
        match self {
            Self::Celsius => value,
            Self::Fahrenheit => (value - 32.0) * 5.0 / 9.0,
            Self::Kelvin => value - 273.15,
        }
    }

    pub fn from_celsius(self, celsius: f64) -> f64 {
        match self {
            Self::Celsius => celsius,
            Self::Fahrenheit => celsius * 9.0 / 5.0 + 32.0,
            Self::Kelvin => celsius + 273.15,
        }
    }
}

pub fn to_celsius(value: f64, from: &str) -> Result<f64, UnknownUnit> {
    Ok(TemperatureUnit::parse(from)?.to_celsius(value))
}

pub fn from_celsius(celsius: f64, to: &str) -> Result<f64, UnknownUnit> {
    Ok(TemperatureUnit::parse(to)?.from_celsius(celsius))
}

pub fn convert(value: f64, from: &str, to: &str) -> Result<f64, ConversionError> {
    let invalid = |_| ConversionError::invalid(Category::Temperature, from, to);
    let celsius = to_celsius(value, from).map_err(invalid)?;
    from_celsius(celsius, to).map_err(invalid)
}
