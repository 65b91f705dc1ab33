//! Canonical fluid identifiers.
//!
//! A fluid type names a substance, and each model decides how that name is
//! interpreted (for example, backend identifiers for an external property
//! library such as [`CoolProp`](crate::support::thermo::model)).

mod water;

pub use water::Water;
