//! Capability traits used to query and construct thermodynamic states.
//!
//! A steam property backend needs four kinds of capability:
//!
//! - [`ThermoModel`]: names the fluid the model describes.
//! - [`HasPressure`], [`HasInternalEnergy`], [`HasEnthalpy`], [`HasEntropy`]:
//!   evaluate properties of an existing [`State`](super::State).
//! - [`StateFrom`]: construct a state from a known input pair.
//! - [`HasSaturation`]: saturated liquid and vapor states and the limits of
//!   the two-phase dome.

mod base;
mod properties;
mod saturation;
mod state_from;

pub use base::ThermoModel;
pub use properties::*;
pub use saturation::{HasSaturation, Saturation, SaturationLimits};
pub use state_from::StateFrom;
