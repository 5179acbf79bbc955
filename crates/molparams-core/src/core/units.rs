use phf::{Map, phf_map};
use serde::de::{self, Deserializer};
use serde::{Deserialize, Serialize, Serializer};
use std::fmt;
use std::ops::Mul;
use std::str::FromStr;
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum Dimension {
    Length,
    Time,
    Temperature,
    InverseTime,
}

impl fmt::Display for Dimension {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Dimension::Length => "length",
            Dimension::Time => "time",
            Dimension::Temperature => "temperature",
            Dimension::InverseTime => "inverse time",
        };
        f.write_str(name)
    }
}

/// A physical unit tag.
///
/// Units only carry their symbol and dimension. Two units are compatible when they
/// share a dimension; converting magnitudes between them is left to the backend
/// that consumes the parameter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Unit {
    symbol: &'static str,
    dimension: Dimension,
}

pub const NANOMETER: Unit = Unit::new("nm", Dimension::Length);
pub const ANGSTROM: Unit = Unit::new("angstrom", Dimension::Length);
pub const FEMTOSECOND: Unit = Unit::new("fs", Dimension::Time);
pub const PICOSECOND: Unit = Unit::new("ps", Dimension::Time);
pub const KELVIN: Unit = Unit::new("K", Dimension::Temperature);
pub const PER_PICOSECOND: Unit = Unit::new("1/ps", Dimension::InverseTime);
pub const PER_FEMTOSECOND: Unit = Unit::new("1/fs", Dimension::InverseTime);

/// Unit used for time-valued parameters that do not name one explicitly.
pub const DEFAULT_TIME: Unit = FEMTOSECOND;
/// Unit used for temperature-valued parameters that do not name one explicitly.
pub const DEFAULT_TEMPERATURE: Unit = KELVIN;

static UNITS_BY_SYMBOL: Map<&'static str, Unit> = phf_map! {
    "nm" => NANOMETER, "nanometer" => NANOMETER, "nanometers" => NANOMETER,
    "angstrom" => ANGSTROM, "angstroms" => ANGSTROM, "ang" => ANGSTROM, "Å" => ANGSTROM,
    "fs" => FEMTOSECOND, "femtosecond" => FEMTOSECOND, "femtoseconds" => FEMTOSECOND,
    "ps" => PICOSECOND, "picosecond" => PICOSECOND, "picoseconds" => PICOSECOND,
    "K" => KELVIN, "kelvin" => KELVIN,
    "1/ps" => PER_PICOSECOND, "ps^-1" => PER_PICOSECOND, "/ps" => PER_PICOSECOND,
    "1/fs" => PER_FEMTOSECOND, "fs^-1" => PER_FEMTOSECOND, "/fs" => PER_FEMTOSECOND,
};

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum UnitError {
    #[error("Unknown unit '{0}'")]
    UnknownUnit(String),
    #[error("Invalid magnitude in quantity '{0}'")]
    InvalidMagnitude(String),
    #[error("Quantity '{0}' has no unit. Expected '<magnitude> <unit>' (e.g., '2.0 fs')")]
    MissingUnit(String),
}

impl Unit {
    pub const fn new(symbol: &'static str, dimension: Dimension) -> Self {
        Self { symbol, dimension }
    }

    pub fn symbol(&self) -> &'static str {
        self.symbol
    }

    pub fn dimension(&self) -> Dimension {
        self.dimension
    }

    pub fn is_compatible(&self, other: &Unit) -> bool {
        self.dimension == other.dimension
    }

    pub fn lookup(symbol: &str) -> Result<Self, UnitError> {
        UNITS_BY_SYMBOL
            .get(symbol.trim())
            .copied()
            .ok_or_else(|| UnitError::UnknownUnit(symbol.trim().to_string()))
    }
}

impl fmt::Display for Unit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol)
    }
}

impl Serialize for Unit {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.symbol)
    }
}

impl<'de> Deserialize<'de> for Unit {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let symbol = String::deserialize(deserializer)?;
        Unit::lookup(&symbol).map_err(de::Error::custom)
    }
}

/// A magnitude paired with a unit.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Quantity {
    magnitude: f64,
    unit: Unit,
}

impl Quantity {
    pub const fn new(magnitude: f64, unit: Unit) -> Self {
        Self { magnitude, unit }
    }

    pub fn magnitude(&self) -> f64 {
        self.magnitude
    }

    pub fn unit(&self) -> Unit {
        self.unit
    }

    pub fn dimension(&self) -> Dimension {
        self.unit.dimension
    }
}

impl Mul<Unit> for f64 {
    type Output = Quantity;

    fn mul(self, unit: Unit) -> Quantity {
        Quantity::new(self, unit)
    }
}

impl fmt::Display for Quantity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // `{:?}` keeps the trailing `.0` so the text parses back as a float.
        write!(f, "{:?} {}", self.magnitude, self.unit.symbol)
    }
}

impl FromStr for Quantity {
    type Err = UnitError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        let (magnitude, unit) = trimmed
            .split_once(char::is_whitespace)
            .ok_or_else(|| UnitError::MissingUnit(trimmed.to_string()))?;
        let magnitude: f64 = magnitude
            .parse()
            .map_err(|_| UnitError::InvalidMagnitude(trimmed.to_string()))?;
        Ok(Self::new(magnitude, Unit::lookup(unit)?))
    }
}

impl Serialize for Quantity {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Quantity {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let text = String::deserialize(deserializer)?;
        text.parse().map_err(de::Error::custom)
    }
}
