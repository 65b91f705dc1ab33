use std::{fmt, str::FromStr};

use thiserror::Error;

use crate::support::units::{Measure, UnitSystem};

use super::{InputIssue, ResolveError};

/// Identifies one of the independent properties a caller may supply.
///
/// The declaration order is the canonical order used when a pair is
/// normalized for dispatch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum PropertyId {
    Pressure,
    Temperature,
    /// Specific internal energy, kept distinct from enthalpy.
    InternalEnergy,
    Enthalpy,
    Entropy,
    SpecificVolume,
    Quality,
}

impl PropertyId {
    /// Every property, in canonical order.
    pub const ALL: [Self; 7] = [
        Self::Pressure,
        Self::Temperature,
        Self::InternalEnergy,
        Self::Enthalpy,
        Self::Entropy,
        Self::SpecificVolume,
        Self::Quality,
    ];

    /// Conventional symbol (`p`, `T`, `u`, `h`, `s`, `v`, `x`).
    #[must_use]
    pub fn symbol(self) -> &'static str {
        match self {
            Self::Pressure => "p",
            Self::Temperature => "T",
            Self::InternalEnergy => "u",
            Self::Enthalpy => "h",
            Self::Entropy => "s",
            Self::SpecificVolume => "v",
            Self::Quality => "x",
        }
    }

    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Self::Pressure => "pressure",
            Self::Temperature => "temperature",
            Self::InternalEnergy => "internal energy",
            Self::Enthalpy => "enthalpy",
            Self::Entropy => "entropy",
            Self::SpecificVolume => "specific volume",
            Self::Quality => "quality",
        }
    }

    /// The measure raw values of this property are expressed in.
    #[must_use]
    pub fn measure(self) -> Measure {
        match self {
            Self::Pressure => Measure::Pressure,
            Self::Temperature => Measure::Temperature,
            Self::InternalEnergy | Self::Enthalpy => Measure::SpecificEnergy,
            Self::Entropy => Measure::SpecificEntropy,
            Self::SpecificVolume => Measure::SpecificVolume,
            Self::Quality => Measure::Dimensionless,
        }
    }
}

impl fmt::Display for PropertyId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Error returned when text does not name a property.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown property: {0:?}")]
pub struct ParsePropertyIdError(pub String);

impl FromStr for PropertyId {
    type Err = ParsePropertyIdError;

    /// Parses a symbol or name, e.g. `"h"`, `"Enthalpy"`, or `"energy"`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let id = match s.trim().to_lowercase().as_str() {
            "p" | "pressure" => Self::Pressure,
            "t" | "temperature" => Self::Temperature,
            "u" | "energy" | "internal energy" => Self::InternalEnergy,
            "h" | "enthalpy" => Self::Enthalpy,
            "s" | "entropy" => Self::Entropy,
            "v" | "volume" | "specific volume" => Self::SpecificVolume,
            "x" | "quality" => Self::Quality,
            _ => return Err(ParsePropertyIdError(s.to_string())),
        };
        Ok(id)
    }
}

/// A raw property value in the unit system of the enclosing [`StateSpec`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PropertyValue {
    pub property: PropertyId,
    pub value: f64,
}

impl PropertyValue {
    #[must_use]
    pub fn new(property: PropertyId, value: f64) -> Self {
        Self { property, value }
    }
}

impl fmt::Display for PropertyValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} = {}", self.property.symbol(), self.value)
    }
}

/// Two known properties of one steam state and the unit system they use.
///
/// The pair is unordered: `(p, T)` and `(T, p)` describe the same state.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StateSpec {
    pub first: PropertyValue,
    pub second: PropertyValue,
    pub units: UnitSystem,
}

impl StateSpec {
    #[must_use]
    pub fn new(first: PropertyValue, second: PropertyValue, units: UnitSystem) -> Self {
        Self {
            first,
            second,
            units,
        }
    }

    /// Builds a spec from raw text fields, as typed by a user.
    ///
    /// Checks run in the same order as resolution: a repeated property is
    /// reported before text that fails to parse.
    ///
    /// # Errors
    ///
    /// Returns [`ResolveError::DuplicateProperty`] if both fields name the same
    /// property, or [`ResolveError::InvalidInput`] if a field is not a number.
    pub fn parse(
        first: (PropertyId, &str),
        second: (PropertyId, &str),
        units: UnitSystem,
    ) -> Result<Self, ResolveError> {
        if first.0 == second.0 {
            return Err(ResolveError::DuplicateProperty { property: first.0 });
        }
        Ok(Self::new(
            parse_value(first.0, first.1)?,
            parse_value(second.0, second.1)?,
            units,
        ))
    }

    /// The same spec with both values re-expressed in `units`.
    #[must_use]
    pub fn in_units(self, units: UnitSystem) -> Self {
        if units == self.units {
            return self;
        }
        let convert = |given: PropertyValue| {
            let measure = given.property.measure();
            PropertyValue::new(
                given.property,
                units.from_si(measure, self.units.to_si(measure, given.value)),
            )
        };
        Self::new(convert(self.first), convert(self.second), units)
    }
}

fn parse_value(property: PropertyId, text: &str) -> Result<PropertyValue, ResolveError> {
    text.trim()
        .parse::<f64>()
        .map(|value| PropertyValue::new(property, value))
        .map_err(|_| ResolveError::InvalidInput {
            property,
            input: text.to_string(),
            reason: InputIssue::NotANumber,
        })
}

impl fmt::Display for StateSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}, {} ({})", self.first, self.second, self.units)
    }
}
