use std::{convert::Infallible, marker::PhantomData};

use twine_core::Model;

use super::core::{ResolverConfig, SteamThermoModel, TwoStateResults, TwoStates, resolve_two};

/// Resolves two independent steam states and the property change between them.
///
/// Per-state failures are reported in [`TwoStateResults`] rather than as a
/// model error, so one bad state does not hide the other.
#[derive(Debug, Clone)]
pub struct TwoStateCalculator<Thermo, Fluid> {
    thermo: Thermo,
    config: ResolverConfig,
    _fluid: PhantomData<Fluid>,
}

impl<Thermo, Fluid> TwoStateCalculator<Thermo, Fluid>
where
    Thermo: SteamThermoModel<Fluid>,
{
    /// Creates a calculator with default tolerances.
    #[must_use]
    pub fn new(thermo: Thermo) -> Self {
        Self::with_config(thermo, ResolverConfig::default())
    }

    #[must_use]
    pub fn with_config(thermo: Thermo, config: ResolverConfig) -> Self {
        Self {
            thermo,
            config,
            _fluid: PhantomData,
        }
    }
}

impl<Thermo, Fluid> Model for TwoStateCalculator<Thermo, Fluid>
where
    Thermo: SteamThermoModel<Fluid>,
{
    type Input = TwoStates;
    type Output = TwoStateResults;
    type Error = Infallible;

    fn call(&self, input: &Self::Input) -> Result<Self::Output, Self::Error> {
        Ok(resolve_two(input, &self.config, &self.thermo))
    }
}
