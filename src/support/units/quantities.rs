use uom::{
    si::{ISQ, Quantity, SI},
    typenum::{N1, N2, P2, P3, Z0},
};

/// Specific enthalpy, J/kg in SI.
pub type SpecificEnthalpy = Quantity<ISQ<P2, Z0, N2, Z0, Z0, Z0, Z0>, SI<f64>, f64>;

/// Specific entropy, J/kg·K in SI.
pub type SpecificEntropy = Quantity<ISQ<P2, Z0, N2, Z0, N1, Z0, Z0>, SI<f64>, f64>;

/// Specific internal energy, J/kg in SI.
pub type SpecificInternalEnergy = Quantity<ISQ<P2, Z0, N2, Z0, Z0, Z0, Z0>, SI<f64>, f64>;

/// Specific volume, m³/kg in SI.
///
/// Obtained as the reciprocal of a [`MassDensity`](uom::si::f64::MassDensity),
/// e.g. `density.recip()`. The SI value is available as `.value`.
pub type SpecificVolume = Quantity<ISQ<P3, N1, Z0, Z0, Z0, Z0, Z0>, SI<f64>, f64>;
