//! Water and steam state models.
//!
//! This module provides [`twine_core::Model`] implementations for resolving
//! steam states. The computational core is in the internal `core` module.
//!
//! - [`StateResolver`] resolves one state from two known properties.
//! - [`TwoStateCalculator`] resolves two states and the change between them.
//!
//! Both are generic over a property backend implementing
//! [`SteamThermoModel`], such as
//! [`CoolProp<Water>`](crate::support::thermo::model::CoolProp) with the
//! `coolprop` feature.

mod core;
mod state_resolver;
mod two_state_calculator;

pub use self::core::{
    InputIssue, ParsePropertyIdError, PropertyId, PropertyValue, PropertyValues,
    QualityInversionError, Region, ResolveError, ResolverConfig, SINGLE_PHASE_QUALITY,
    StateChange, StateError, StateSpec, SteamThermoModel, ThermoState, TwoStateResults,
    TwoStates, Which,
};
pub use state_resolver::StateResolver;
pub use two_state_calculator::TwoStateCalculator;
