//! Thermodynamic property modeling for water and steam.
//!
//! A property backend is any type implementing the traits in [`capability`].
//! The resolver in [`crate::models::steam`] only talks to backends through
//! those traits, so swapping CoolProp for another steam table is a matter of
//! implementing them for a new model type.

mod error;
mod input;
mod state;

pub mod capability;
pub mod fluid;
pub mod model;

pub use error::PropertyError;
pub use input::StateInput;
pub use state::State;
