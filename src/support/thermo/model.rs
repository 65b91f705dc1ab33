//! Thermodynamic property models.
//!
//! Models here are full steam property backends: they implement every
//! capability the steam resolver needs, including saturation.

#[cfg(feature = "coolprop")]
#[cfg_attr(docsrs, doc(cfg(feature = "coolprop")))]
pub mod coolprop;

#[cfg(feature = "coolprop")]
#[cfg_attr(docsrs, doc(cfg(feature = "coolprop")))]
pub use coolprop::CoolProp;
