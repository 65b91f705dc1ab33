//! CoolProp-backed steam property model.

mod error;

use std::{
    marker::PhantomData,
    sync::{Mutex, MutexGuard},
};

use rfluids::{
    io::{FluidInputPair, FluidParam, FluidTrivialParam},
    native::AbstractState,
};
use uom::si::{
    available_energy::joule_per_kilogram,
    f64::{MassDensity, Pressure, ThermodynamicTemperature},
    mass_density::kilogram_per_cubic_meter,
    pressure::pascal,
    specific_heat_capacity::joule_per_kilogram_kelvin,
    thermodynamic_temperature::kelvin,
};

use crate::support::thermo::{
    PropertyError, State, StateInput,
    capability::{
        HasEnthalpy, HasEntropy, HasInternalEnergy, HasPressure, HasSaturation, Saturation,
        SaturationLimits, StateFrom, ThermoModel,
    },
};
use crate::support::units::{SpecificEnthalpy, SpecificEntropy, SpecificInternalEnergy};

pub use error::CoolPropError;

/// Trait used to mark fluids as usable with the [`CoolProp`] model.
///
/// Implementors provide the backend and fluid identifiers needed to construct a
/// `CoolProp` `AbstractState`.
#[cfg_attr(docsrs, doc(cfg(feature = "coolprop")))]
pub trait CoolPropFluid: Default + Send + Sync + 'static {
    const BACKEND: &'static str;
    const NAME: &'static str;
}

/// A steam property backend powered by `CoolProp`.
///
/// With [`Water`](crate::support::thermo::fluid::Water) this uses the
/// IAPWS-95 Helmholtz formulation (`HEOS`), which agrees with IAPWS-IF97
/// steam tables well within display precision.
#[cfg_attr(docsrs, doc(cfg(feature = "coolprop")))]
pub struct CoolProp<F: CoolPropFluid> {
    state: Mutex<AbstractState>,
    _f: PhantomData<F>,
}

impl<F: CoolPropFluid> ThermoModel for CoolProp<F> {
    type Fluid = F;
}

impl<F: CoolPropFluid> CoolProp<F> {
    /// Construct a new CoolProp-backed model instance.
    ///
    /// # Errors
    ///
    /// Returns [`CoolPropError`] if the underlying `AbstractState` cannot be
    /// created for the given `F::BACKEND` and `F::NAME`.
    pub fn new() -> Result<Self, CoolPropError> {
        let state = AbstractState::new(F::BACKEND, F::NAME)?;
        Ok(Self {
            state: Mutex::new(state),
            _f: PhantomData,
        })
    }

    /// Locks the underlying `AbstractState` and updates it from `state`.
    fn lock_with_state(
        &self,
        state: &State<F>,
    ) -> Result<MutexGuard<'_, AbstractState>, CoolPropError> {
        let mut abstract_state = self.state.lock()?;
        abstract_state.update(
            FluidInputPair::DMassT,
            state.density.get::<kilogram_per_cubic_meter>(),
            state.temperature.get::<kelvin>(),
        )?;
        Ok(abstract_state)
    }

    /// Reads the `(T, ρ)` state the `AbstractState` currently holds.
    fn current_state(abstract_state: &AbstractState) -> Result<State<F>, CoolPropError> {
        let temperature = abstract_state.keyed_output(FluidParam::T)?;
        let density = abstract_state.keyed_output(FluidParam::DMass)?;
        Ok(State::new(
            ThermodynamicTemperature::new::<kelvin>(temperature),
            MassDensity::new::<kilogram_per_cubic_meter>(density),
            F::default(),
        ))
    }

    /// Updates the `AbstractState` to quality 0 and then quality 1 on the
    /// saturation curve identified by `pair` and `value`.
    fn saturation(
        &self,
        pair: FluidInputPair,
        value: f64,
    ) -> Result<Saturation<F>, CoolPropError> {
        let mut abstract_state = self.state.lock()?;

        let (q_first, q_second) = match pair {
            FluidInputPair::PQ => ((value, 0.0), (value, 1.0)),
            _ => ((0.0, value), (1.0, value)),
        };

        abstract_state.update(pair, q_first.0, q_first.1)?;
        let pressure = abstract_state.keyed_output(FluidParam::P)?;
        let liquid = Self::current_state(&abstract_state)?;

        abstract_state.update(pair, q_second.0, q_second.1)?;
        let vapor = Self::current_state(&abstract_state)?;

        Ok(Saturation {
            pressure: Pressure::new::<pascal>(pressure),
            temperature: liquid.temperature,
            liquid,
            vapor,
        })
    }
}

impl<F: CoolPropFluid> HasPressure for CoolProp<F> {
    fn pressure(&self, state: &State<Self::Fluid>) -> Result<Pressure, PropertyError> {
        let abstract_state = self.lock_with_state(state)?;
        let pressure = abstract_state
            .keyed_output(FluidParam::P)
            .map_err(CoolPropError::Rfluids)?;
        Ok(Pressure::new::<pascal>(pressure))
    }
}

impl<F: CoolPropFluid> HasInternalEnergy for CoolProp<F> {
    fn internal_energy(
        &self,
        state: &State<Self::Fluid>,
    ) -> Result<SpecificInternalEnergy, PropertyError> {
        let abstract_state = self.lock_with_state(state)?;
        let internal_energy = abstract_state
            .keyed_output(FluidParam::UMass)
            .map_err(CoolPropError::Rfluids)?;
        Ok(SpecificInternalEnergy::new::<joule_per_kilogram>(
            internal_energy,
        ))
    }
}

impl<F: CoolPropFluid> HasEnthalpy for CoolProp<F> {
    fn enthalpy(&self, state: &State<Self::Fluid>) -> Result<SpecificEnthalpy, PropertyError> {
        let abstract_state = self.lock_with_state(state)?;
        let enthalpy = abstract_state
            .keyed_output(FluidParam::HMass)
            .map_err(CoolPropError::Rfluids)?;
        Ok(SpecificEnthalpy::new::<joule_per_kilogram>(enthalpy))
    }
}

impl<F: CoolPropFluid> HasEntropy for CoolProp<F> {
    fn entropy(&self, state: &State<Self::Fluid>) -> Result<SpecificEntropy, PropertyError> {
        let abstract_state = self.lock_with_state(state)?;
        let entropy = abstract_state
            .keyed_output(FluidParam::SMass)
            .map_err(CoolPropError::Rfluids)?;
        Ok(SpecificEntropy::new::<joule_per_kilogram_kelvin>(entropy))
    }
}

impl<F: CoolPropFluid> HasSaturation for CoolProp<F> {
    fn saturation_limits(&self) -> Result<SaturationLimits, PropertyError> {
        let abstract_state = self.state.lock().map_err(CoolPropError::from)?;
        let read = |param: FluidTrivialParam| {
            abstract_state
                .keyed_output(param)
                .map_err(CoolPropError::Rfluids)
        };
        Ok(SaturationLimits {
            triple_temperature: ThermodynamicTemperature::new::<kelvin>(read(
                FluidTrivialParam::TTriple,
            )?),
            triple_pressure: Pressure::new::<pascal>(read(FluidTrivialParam::PTriple)?),
            critical_temperature: ThermodynamicTemperature::new::<kelvin>(read(
                FluidTrivialParam::TCritical,
            )?),
            critical_pressure: Pressure::new::<pascal>(read(FluidTrivialParam::PCritical)?),
        })
    }

    fn saturation_at_pressure(
        &self,
        pressure: Pressure,
    ) -> Result<Saturation<Self::Fluid>, PropertyError> {
        let limits = self.saturation_limits()?;
        if pressure >= limits.critical_pressure || pressure < limits.triple_pressure {
            return Err(PropertyError::OutOfDomain {
                context: format!("no saturation at {pressure:?}"),
            });
        }
        Ok(self.saturation(FluidInputPair::PQ, pressure.get::<pascal>())?)
    }

    fn saturation_at_temperature(
        &self,
        temperature: ThermodynamicTemperature,
    ) -> Result<Saturation<Self::Fluid>, PropertyError> {
        let limits = self.saturation_limits()?;
        if temperature >= limits.critical_temperature || temperature < limits.triple_temperature {
            return Err(PropertyError::OutOfDomain {
                context: format!("no saturation at {temperature:?}"),
            });
        }
        Ok(self.saturation(FluidInputPair::QT, temperature.get::<kelvin>())?)
    }
}

impl<F: CoolPropFluid> StateFrom<StateInput> for CoolProp<F> {
    type Error = CoolPropError;

    fn state_from(&self, input: StateInput) -> Result<State<F>, Self::Error> {
        // CoolProp expects the two values in the order the pair is named.
        let (pair, first, second) = match input {
            StateInput::PressureTemperature(p, t) => {
                (FluidInputPair::PT, p.get::<pascal>(), t.get::<kelvin>())
            }
            StateInput::PressureInternalEnergy(p, u) => (
                FluidInputPair::PUMass,
                p.get::<pascal>(),
                u.get::<joule_per_kilogram>(),
            ),
            StateInput::PressureEnthalpy(p, h) => (
                FluidInputPair::HMassP,
                h.get::<joule_per_kilogram>(),
                p.get::<pascal>(),
            ),
            StateInput::PressureEntropy(p, s) => (
                FluidInputPair::PSMass,
                p.get::<pascal>(),
                s.get::<joule_per_kilogram_kelvin>(),
            ),
            StateInput::PressureDensity(p, rho) => (
                FluidInputPair::DMassP,
                rho.get::<kilogram_per_cubic_meter>(),
                p.get::<pascal>(),
            ),
            StateInput::TemperatureInternalEnergy(t, u) => (
                FluidInputPair::TUMass,
                t.get::<kelvin>(),
                u.get::<joule_per_kilogram>(),
            ),
            StateInput::TemperatureEnthalpy(t, h) => (
                FluidInputPair::HMassT,
                h.get::<joule_per_kilogram>(),
                t.get::<kelvin>(),
            ),
            StateInput::TemperatureEntropy(t, s) => (
                FluidInputPair::SMassT,
                s.get::<joule_per_kilogram_kelvin>(),
                t.get::<kelvin>(),
            ),
            StateInput::TemperatureDensity(t, rho) => (
                FluidInputPair::DMassT,
                rho.get::<kilogram_per_cubic_meter>(),
                t.get::<kelvin>(),
            ),
            StateInput::InternalEnergyEntropy(u, s) => (
                FluidInputPair::SMassUMass,
                s.get::<joule_per_kilogram_kelvin>(),
                u.get::<joule_per_kilogram>(),
            ),
            StateInput::InternalEnergyDensity(u, rho) => (
                FluidInputPair::DMassUMass,
                rho.get::<kilogram_per_cubic_meter>(),
                u.get::<joule_per_kilogram>(),
            ),
            StateInput::EnthalpyEntropy(h, s) => (
                FluidInputPair::HMassSMass,
                h.get::<joule_per_kilogram>(),
                s.get::<joule_per_kilogram_kelvin>(),
            ),
            StateInput::EnthalpyDensity(h, rho) => (
                FluidInputPair::DMassHMass,
                rho.get::<kilogram_per_cubic_meter>(),
                h.get::<joule_per_kilogram>(),
            ),
            StateInput::EntropyDensity(s, rho) => (
                FluidInputPair::DMassSMass,
                rho.get::<kilogram_per_cubic_meter>(),
                s.get::<joule_per_kilogram_kelvin>(),
            ),
        };

        let mut abstract_state = self.state.lock()?;
        abstract_state.update(pair, first, second)?;
        Self::current_state(&abstract_state)
    }
}

// Static assertion: CoolProp<F> must be Send + Sync for any CoolPropFluid.
// Thread-safety is provided by rfluids, which serializes all CoolProp FFI calls
// through a global mutex. Our local Mutex<AbstractState> keeps update/query
// call pairs atomic.
#[allow(dead_code)]
const _: () = {
    fn assert_send_sync<T: Send + Sync>() {}
    fn check<F: CoolPropFluid>() {
        assert_send_sync::<CoolProp<F>>();
    }
};
