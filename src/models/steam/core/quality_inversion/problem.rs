//! Problem formulation for quality inversion.

use std::{convert::Infallible, marker::PhantomData};

use twine_core::{EquationProblem, Model};
use uom::si::{f64::ThermodynamicTemperature, thermodynamic_temperature::kelvin};

use crate::models::steam::core::{
    dispatch::Bound, properties::Dome, traits::SteamThermoModel,
};
use crate::support::thermo::PropertyError;

/// Model adapter exposing the saturation temperature as the sole input.
pub(super) struct SaturationModel<'a, Thermo, Fluid> {
    thermo: &'a Thermo,
    _fluid: PhantomData<Fluid>,
}

impl<'a, Thermo, Fluid> SaturationModel<'a, Thermo, Fluid> {
    pub(super) fn new(thermo: &'a Thermo) -> Self {
        Self {
            thermo,
            _fluid: PhantomData,
        }
    }
}

impl<Thermo, Fluid> Model for SaturationModel<'_, Thermo, Fluid>
where
    Thermo: SteamThermoModel<Fluid>,
{
    type Input = ThermodynamicTemperature;
    type Output = Dome;
    type Error = PropertyError;

    fn call(&self, input: &Self::Input) -> Result<Self::Output, Self::Error> {
        Dome::at_temperature(self.thermo, *input)
    }
}

/// Equation problem definition for quality inversion.
///
/// Computes the residual as `(mixture_value - target) / |target|`,
/// falling back to the absolute difference for a zero target.
pub(super) struct QualityProblem {
    bound: Bound,
    quality: f64,
}

impl QualityProblem {
    pub(super) fn new(bound: Bound, quality: f64) -> Self {
        Self { bound, quality }
    }

    pub(super) fn residual(&self, dome: &Dome) -> f64 {
        let target = self.bound.target();
        let value = dome.mixture(self.quality).select(self.bound);
        let scale = if target == 0.0 { 1.0 } else { target.abs() };
        (value - target) / scale
    }
}

impl EquationProblem<1> for QualityProblem {
    type Input = ThermodynamicTemperature;
    type Output = Dome;
    type Error = Infallible;

    fn input(&self, x: &[f64; 1]) -> Result<Self::Input, Self::Error> {
        Ok(ThermodynamicTemperature::new::<kelvin>(x[0]))
    }

    fn residuals(
        &self,
        _input: &Self::Input,
        output: &Self::Output,
    ) -> Result<[f64; 1], Self::Error> {
        Ok([self.residual(output)])
    }
}
