//! Length, converted through meters.

use crate::{Category, ConversionError, Scale, Unit, UnknownUnit};

pub const METER_TO_FOOT: f64 = 3.28084;
pub const METER_TO_INCH: f64 = 39.3701;
pub const METER_TO_YARD: f64 = 1.09361;
pub const METER_TO_MILE: f64 = 0.000621371;

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum LengthUnit { Meter, Foot, Inch, Kilometer, Centimeter, Millimeter, Yard, Mile }

impl Unit for LengthUnit {
    const ALL: &'static [Self] = &[
        Self::Meter, Self::Foot, Self::Inch, Self::Kilometer,
        Self::Centimeter, Self::Millimeter, Self::Yard, Self::Mile,
    ];

    fn name(self) -> &'static str {
        match self {
            Self::Meter => "meter",
            Self::Foot => "foot",
            Self::Inch => "inch",
            Self::Kilometer => "kilometer",
            Self::Centimeter => "centimeter",
            Self::Millimeter => "millimeter",
            Self::Yard => "yard",
            Self::Mile => "mile",
        }
    }

    fn aliases(self) -> &'static [&'static str] {
        match self {
            Self::Meter => &["m", "meter", "meters"],
            Self::Foot => &["ft", "foot", "feet"],
            Self::Inch => &["in", "inch", "inches"],
            Self::Kilometer => &["km", "kilometer", "kilometers"],
            Self::Centimeter => &["cm", "centimeter", "centimeters"],
            Self::Millimeter => &["mm", "millimeter", "millimeters"],
            Self::Yard => &["yd", "yard", "yards"],
            Self::Mile => &["mi", "mile", "miles"],
        }
    }
}

impl LengthUnit {
    pub(crate) fn scale(self) -> Scale {
        match self {
            Self::Meter => Scale::Base,
            Self::Foot => Scale::PerBase(METER_TO_FOOT),
            Self::Inch => Scale::PerBase(METER_TO_INCH),
            Self::Kilometer => Scale::OfBase(1000.0),
            Self::Centimeter => Scale::PerBase(100.0),
            Self::Millimeter => Scale::PerBase(1000.0),
            Self::Yard => Scale::PerBase(METER_TO_YARD),
            Self::Mile => Scale::PerBase(METER_TO_MILE),
        }
    }
}

pub fn to_meters(value: f64, from: &str) -> Result<f64, UnknownUnit> {
    Ok(LengthUnit::parse(from)?.scale().to_base(value))
}

pub fn from_meters(meters: f64, to: &str) -> Result<f64, UnknownUnit> {
    Ok(LengthUnit::parse(to)?.scale().from_base(meters))
}

pub fn convert(value: f64, from: &str, to: &str) -> Result<f64, ConversionError> {
    let invalid = |_| ConversionError::invalid(Category::Length, from, to);
    let meters = to_meters(value, from).map_err(invalid)?;
    from_meters(meters, to).map_err(invalid)
}
