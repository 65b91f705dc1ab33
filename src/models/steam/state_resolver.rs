use std::marker::PhantomData;

use twine_core::Model;

use super::core::{ResolveError, ResolverConfig, StateSpec, SteamThermoModel, ThermoState, resolve};

/// Resolves a single steam state from two known properties.
///
/// `Fluid` is the fluid marker of the property backend and is inferred from
/// `Thermo`.
///
/// # Example
///
/// ```ignore
/// use steam_states::models::steam::{PropertyId, PropertyValue, StateResolver, StateSpec};
/// use steam_states::support::{
///     thermo::{fluid::Water, model::CoolProp},
///     units::UnitSystem,
/// };
/// use twine_core::Model;
///
/// let resolver = StateResolver::new(CoolProp::<Water>::new()?);
/// let state = resolver.call(&StateSpec::new(
///     PropertyValue::new(PropertyId::Pressure, 1.0),
///     PropertyValue::new(PropertyId::Quality, 1.0),
///     UnitSystem::Si,
/// ))?;
/// ```
#[derive(Debug, Clone)]
pub struct StateResolver<Thermo, Fluid> {
    thermo: Thermo,
    config: ResolverConfig,
    _fluid: PhantomData<Fluid>,
}

impl<Thermo, Fluid> StateResolver<Thermo, Fluid>
where
    Thermo: SteamThermoModel<Fluid>,
{
    /// Creates a resolver with default tolerances.
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

    /// The property backend this resolver drives.
    pub fn thermo(&self) -> &Thermo {
        &self.thermo
    }

    pub fn config(&self) -> &ResolverConfig {
        &self.config
    }
}

impl<Thermo, Fluid> Model for StateResolver<Thermo, Fluid>
where
    Thermo: SteamThermoModel<Fluid>,
{
    type Input = StateSpec;
    type Output = ThermoState;
    type Error = ResolveError;

    fn call(&self, input: &Self::Input) -> Result<Self::Output, Self::Error> {
        resolve(input, &self.config, &self.thermo)
    }
}


#[cfg(all(test, feature = "coolprop"))]
mod coolprop_tests {
    use super::*;

    use approx::assert_relative_eq;
    use uom::si::{
        available_energy::kilojoule_per_kilogram, thermodynamic_temperature::degree_celsius,
    };

    use crate::models::steam::core::{PropertyId, PropertyValue, Region};
    use crate::support::{
        thermo::{fluid::Water, model::CoolProp},
        units::UnitSystem,
    };

    fn resolve_si(a: (PropertyId, f64), b: (PropertyId, f64)) -> ThermoState {
        let resolver = StateResolver::new(CoolProp::<Water>::new().unwrap());
        resolver
            .call(&StateSpec::new(
                PropertyValue::new(a.0, a.1),
                PropertyValue::new(b.0, b.1),
                UnitSystem::Si,
            ))
            .unwrap()
    }

    #[test]
    fn room_temperature_water() {
        let state = resolve_si((PropertyId::Pressure, 1.0), (PropertyId::Temperature, 25.0));

        assert_eq!(state.region, Region::SubCooledLiquid);
        assert_relative_eq!(
            state.enthalpy.get::<kilojoule_per_kilogram>(),
            104.92,
            epsilon = 0.05
        );
    }

    #[test]
    fn saturated_vapor_at_one_bar() {
        let state = resolve_si((PropertyId::Pressure, 1.0), (PropertyId::Quality, 1.0));

        assert_eq!(state.region, Region::Saturated);
        assert_relative_eq!(state.temperature.get::<degree_celsius>(), 99.606, epsilon = 1e-2);
        assert_relative_eq!(
            state.enthalpy.get::<kilojoule_per_kilogram>(),
            2674.9,
            epsilon = 0.5
        );
    }

    #[test]
    fn superheated_steam_from_enthalpy() {
        let state = resolve_si((PropertyId::Pressure, 10.0), (PropertyId::Enthalpy, 3000.0));

        assert_eq!(state.region, Region::SuperHeatedVapor);
        assert!(state.temperature.get::<degree_celsius>() > 179.88);
    }
}
