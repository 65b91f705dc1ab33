//! Units and unit systems.
//!
//! This crate uses [`uom`] for all physical quantities once caller input has
//! been read. This module provides the pieces [`uom`] does not:
//!
//! - Quantity aliases for specific enthalpy, entropy, internal energy, and volume.
//! - [`TemperatureDifference`] for subtracting absolute temperatures.
//! - [`UnitSystem`] for reading and rendering raw numbers in SI or English units,
//!   backed by the scale factors in [`convert`].
//!
//! ```
//! use steam_states::support::units::UnitSystem;
//! use uom::si::thermodynamic_temperature::degree_celsius;
//!
//! let t = UnitSystem::English.temperature(212.0);
//! assert!((t.get::<degree_celsius>() - 100.0).abs() < 1e-12);
//! ```

pub mod convert;

mod quantities;
mod temperature_difference;
mod unit_system;

pub use quantities::{SpecificEnthalpy, SpecificEntropy, SpecificInternalEnergy, SpecificVolume};
pub use temperature_difference::TemperatureDifference;
pub use unit_system::{Measure, UnitSystem};
