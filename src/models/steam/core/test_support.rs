use uom::si::{
    available_energy::joule_per_kilogram,
    f64::{MassDensity, Pressure, ThermodynamicTemperature},
    mass_density::kilogram_per_cubic_meter,
    pressure::pascal,
    specific_heat_capacity::joule_per_kilogram_kelvin,
    thermodynamic_temperature::kelvin,
};

use crate::support::{
    thermo::{
        PropertyError, State, StateInput,
        capability::{
            HasEnthalpy, HasEntropy, HasInternalEnergy, HasPressure, HasSaturation, Saturation,
            SaturationLimits, StateFrom, ThermoModel,
        },
    },
    units::{SpecificEnthalpy, SpecificEntropy, SpecificInternalEnergy, UnitSystem},
};

use super::{PropertyId, PropertyValue, StateSpec};

pub(crate) const P0: f64 = 1.0e5;
pub(crate) const T0: f64 = 372.756;
pub(crate) const L: f64 = 2.257e6;
pub(crate) const RV: f64 = 461.5;
pub(crate) const C: f64 = 4180.0;
pub(crate) const KAPPA: f64 = 5.0e-10;
pub(crate) const V0: f64 = 1.0e-3;
pub(crate) const CP: f64 = 2000.0;
pub(crate) const T_REF: f64 = 273.15;
pub(crate) const T_TRIPLE: f64 = 273.16;
pub(crate) const T_CRIT: f64 = 647.096;

#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub(crate) struct TestWater;

/// A small, self-consistent steam model with closed-form saturation.
///
/// - Saturation follows Clausius-Clapeyron with constant latent heat `L`,
///   anchored at `T0` for 1 bar.
/// - Liquid has constant heat capacity and a volume linear in pressure.
/// - Vapor is an ideal gas with constant `cp` above saturation.
///
/// Enthalpy or entropy paired with density is found by bisection along the
/// isochore. Other inversions with no closed form return
/// [`PropertyError::Undefined`].
#[derive(Debug, Clone, Copy, Default)]
pub(crate) struct TestSteam;

/// Pressure, internal energy, enthalpy, and entropy of a state, in SI base units.
struct Props {
    p: f64,
    u: f64,
    h: f64,
    s: f64,
}

enum Phase {
    Liquid,
    Mixture(f64),
    Vapor,
}

impl TestSteam {
    pub(crate) fn psat(t: f64) -> f64 {
        P0 * (L / RV * (1.0 / T0 - 1.0 / t)).exp()
    }

    pub(crate) fn tsat(p: f64) -> f64 {
        1.0 / (1.0 / T0 - RV / L * (p / P0).ln())
    }

    pub(crate) fn p_crit() -> f64 {
        Self::psat(T_CRIT)
    }

    pub(crate) fn p_triple() -> f64 {
        Self::psat(T_TRIPLE)
    }

    pub(crate) fn v_liquid(p: f64) -> f64 {
        V0 * (1.0 - KAPPA * (p - P0))
    }

    pub(crate) fn u_liquid(t: f64) -> f64 {
        C * (t - T_REF)
    }

    pub(crate) fn s_liquid(t: f64) -> f64 {
        C * (t / T_REF).ln()
    }

    /// Saturated liquid enthalpy at pressure `p`.
    pub(crate) fn h_f(p: f64) -> f64 {
        Self::u_liquid(Self::tsat(p)) + p * Self::v_liquid(p)
    }

    pub(crate) fn h_vapor(t: f64, p: f64) -> f64 {
        Self::h_f(p) + L + CP * (t - Self::tsat(p))
    }

    pub(crate) fn s_vapor(t: f64, p: f64) -> f64 {
        let ts = Self::tsat(p);
        Self::s_liquid(ts) + L / ts + CP * (t / ts).ln()
    }

    fn phase(t: f64, v: f64) -> Phase {
        if t >= T_CRIT {
            return Phase::Vapor;
        }
        let p_s = Self::psat(t);
        let v_f = Self::v_liquid(p_s);
        let v_g = RV * t / p_s;
        if v <= v_f {
            Phase::Liquid
        } else if v >= v_g {
            Phase::Vapor
        } else {
            Phase::Mixture((v - v_f) / (v_g - v_f))
        }
    }

    fn props(state: &State<TestWater>) -> Props {
        let t = state.temperature.get::<kelvin>();
        let v = state.specific_volume().value;
        match Self::phase(t, v) {
            Phase::Liquid => {
                let p = P0 + (1.0 - v / V0) / KAPPA;
                let u = Self::u_liquid(t);
                Props {
                    p,
                    u,
                    h: u + p * v,
                    s: Self::s_liquid(t),
                }
            }
            Phase::Vapor => {
                let p = RV * t / v;
                let h = Self::h_vapor(t, p);
                Props {
                    p,
                    u: h - p * v,
                    h,
                    s: Self::s_vapor(t, p),
                }
            }
            Phase::Mixture(x) => {
                let p = Self::psat(t);
                let v_f = Self::v_liquid(p);
                let v_g = RV * t / p;
                let u_f = Self::u_liquid(t);
                let h_f = u_f + p * v_f;
                let s_f = Self::s_liquid(t);
                let h_g = h_f + L;
                let u_g = h_g - p * v_g;
                let s_g = s_f + L / t;
                Props {
                    p,
                    u: u_f + x * (u_g - u_f),
                    h: h_f + x * (h_g - h_f),
                    s: s_f + x * (s_g - s_f),
                }
            }
        }
    }

    fn saturation(t: f64, p: f64) -> Saturation<TestWater> {
        Saturation {
            pressure: Pressure::new::<pascal>(p),
            temperature: ThermodynamicTemperature::new::<kelvin>(t),
            liquid: state(t, Self::v_liquid(p)),
            vapor: state(t, RV * t / p),
        }
    }

    /// Mixture state at saturation temperature `t` and pressure `p`.
    fn mixture(t: f64, p: f64, x: f64) -> State<TestWater> {
        let v_f = Self::v_liquid(p);
        let v_g = RV * t / p;
        state(t, v_f + x * (v_g - v_f))
    }

    /// Bisects on temperature at fixed specific volume until `value` reaches `target`.
    ///
    /// Enthalpy and entropy both rise with temperature along an isochore,
    /// through every phase of this model.
    fn at_volume(v: f64, target: f64, value: impl Fn(&Props) -> f64) -> State<TestWater> {
        let (mut lo, mut hi) = (200.0, 2000.0);
        for _ in 0..200 {
            let mid = 0.5 * (lo + hi);
            if value(&Self::props(&state(mid, v))) < target {
                lo = mid;
            } else {
                hi = mid;
            }
        }
        state(0.5 * (lo + hi), v)
    }
}

/// Builds a state from temperature in K and specific volume in m³/kg.
pub(crate) fn state(t: f64, v: f64) -> State<TestWater> {
    State::new(
        ThermodynamicTemperature::new::<kelvin>(t),
        MassDensity::new::<kilogram_per_cubic_meter>(v.recip()),
        TestWater,
    )
}

/// Builds an SI state spec from two property values.
pub(crate) fn spec(a: (PropertyId, f64), b: (PropertyId, f64)) -> StateSpec {
    StateSpec::new(
        PropertyValue::new(a.0, a.1),
        PropertyValue::new(b.0, b.1),
        UnitSystem::Si,
    )
}

fn unsupported(input: StateInput) -> PropertyError {
    PropertyError::Undefined {
        context: format!("{} is not supported by the test model", input.label()),
    }
}

impl ThermoModel for TestSteam {
    type Fluid = TestWater;
}

impl HasPressure for TestSteam {
    fn pressure(&self, state: &State<TestWater>) -> Result<Pressure, PropertyError> {
        Ok(Pressure::new::<pascal>(Self::props(state).p))
    }
}

impl HasInternalEnergy for TestSteam {
    fn internal_energy(
        &self,
        state: &State<TestWater>,
    ) -> Result<SpecificInternalEnergy, PropertyError> {
        Ok(SpecificInternalEnergy::new::<joule_per_kilogram>(
            Self::props(state).u,
        ))
    }
}

impl HasEnthalpy for TestSteam {
    fn enthalpy(&self, state: &State<TestWater>) -> Result<SpecificEnthalpy, PropertyError> {
        Ok(SpecificEnthalpy::new::<joule_per_kilogram>(
            Self::props(state).h,
        ))
    }
}

impl HasEntropy for TestSteam {
    fn entropy(&self, state: &State<TestWater>) -> Result<SpecificEntropy, PropertyError> {
        Ok(SpecificEntropy::new::<joule_per_kilogram_kelvin>(
            Self::props(state).s,
        ))
    }
}

impl HasSaturation for TestSteam {
    fn saturation_limits(&self) -> Result<SaturationLimits, PropertyError> {
        Ok(SaturationLimits {
            triple_temperature: ThermodynamicTemperature::new::<kelvin>(T_TRIPLE),
            triple_pressure: Pressure::new::<pascal>(Self::p_triple()),
            critical_temperature: ThermodynamicTemperature::new::<kelvin>(T_CRIT),
            critical_pressure: Pressure::new::<pascal>(Self::p_crit()),
        })
    }

    fn saturation_at_pressure(
        &self,
        pressure: Pressure,
    ) -> Result<Saturation<TestWater>, PropertyError> {
        let p = pressure.get::<pascal>();
        if !(Self::p_triple()..Self::p_crit()).contains(&p) {
            return Err(PropertyError::OutOfDomain {
                context: format!("no saturation at {p} Pa"),
            });
        }
        Ok(Self::saturation(Self::tsat(p), p))
    }

    fn saturation_at_temperature(
        &self,
        temperature: ThermodynamicTemperature,
    ) -> Result<Saturation<TestWater>, PropertyError> {
        let t = temperature.get::<kelvin>();
        if !(T_TRIPLE..T_CRIT).contains(&t) {
            return Err(PropertyError::OutOfDomain {
                context: format!("no saturation at {t} K"),
            });
        }
        Ok(Self::saturation(t, Self::psat(t)))
    }
}

impl StateFrom<StateInput> for TestSteam {
    type Error = PropertyError;

    fn state_from(&self, input: StateInput) -> Result<State<TestWater>, Self::Error> {
        match input {
            StateInput::PressureTemperature(p, t) => {
                let (p, t) = (p.get::<pascal>(), t.get::<kelvin>());
                let liquid = if p >= Self::p_crit() {
                    t < T_CRIT
                } else {
                    t <= Self::tsat(p)
                };
                Ok(if liquid {
                    state(t, Self::v_liquid(p))
                } else {
                    state(t, RV * t / p)
                })
            }
            StateInput::PressureEnthalpy(p, h) => {
                let (p, h) = (subcritical(p, input)?, h.get::<joule_per_kilogram>());
                let ts = Self::tsat(p);
                let h_f = Self::h_f(p);
                let h_g = h_f + L;
                Ok(if h < h_f {
                    state(T_REF + (h - p * Self::v_liquid(p)) / C, Self::v_liquid(p))
                } else if h > h_g {
                    let t = ts + (h - h_g) / CP;
                    state(t, RV * t / p)
                } else {
                    Self::mixture(ts, p, (h - h_f) / L)
                })
            }
            StateInput::PressureEntropy(p, s) => {
                let (p, s) = (subcritical(p, input)?, s.get::<joule_per_kilogram_kelvin>());
                let ts = Self::tsat(p);
                let s_f = Self::s_liquid(ts);
                let s_g = s_f + L / ts;
                Ok(if s < s_f {
                    state(T_REF * (s / C).exp(), Self::v_liquid(p))
                } else if s > s_g {
                    let t = ts * ((s - s_g) / CP).exp();
                    state(t, RV * t / p)
                } else {
                    Self::mixture(ts, p, (s - s_f) / (s_g - s_f))
                })
            }
            StateInput::PressureInternalEnergy(p, u) => {
                let (p, u) = (subcritical(p, input)?, u.get::<joule_per_kilogram>());
                let ts = Self::tsat(p);
                let h_f = Self::h_f(p);
                let u_f = Self::u_liquid(ts);
                let u_g = h_f + L - RV * ts;
                Ok(if u < u_f {
                    state(T_REF + u / C, Self::v_liquid(p))
                } else if u > u_g {
                    let t = (u - h_f - L + CP * ts) / (CP - RV);
                    state(t, RV * t / p)
                } else {
                    Self::mixture(ts, p, (u - u_f) / (u_g - u_f))
                })
            }
            StateInput::PressureDensity(p, rho) => {
                let (p, v) = (subcritical(p, input)?, rho.get::<kilogram_per_cubic_meter>().recip());
                let ts = Self::tsat(p);
                let v_f = Self::v_liquid(p);
                let v_g = RV * ts / p;
                if v < v_f {
                    Err(unsupported(input))
                } else if v > v_g {
                    Ok(state(p * v / RV, v))
                } else {
                    Ok(state(ts, v))
                }
            }
            StateInput::TemperatureDensity(t, rho) => Ok(State::new(t, rho, TestWater)),
            StateInput::TemperatureInternalEnergy(t, u) => {
                let (t, u) = (t.get::<kelvin>(), u.get::<joule_per_kilogram>());
                let sat = self.saturation_at_temperature(ThermodynamicTemperature::new::<kelvin>(t))?;
                let u_f = self.internal_energy(&sat.liquid)?.get::<joule_per_kilogram>();
                let u_g = self.internal_energy(&sat.vapor)?.get::<joule_per_kilogram>();
                if (u_f..=u_g).contains(&u) {
                    Ok(Self::mixture(t, Self::psat(t), (u - u_f) / (u_g - u_f)))
                } else {
                    Err(unsupported(input))
                }
            }
            StateInput::TemperatureEnthalpy(t, h) => {
                let (t, h) = (t.get::<kelvin>(), h.get::<joule_per_kilogram>());
                let p = Self::psat(t);
                let h_f = Self::u_liquid(t) + p * Self::v_liquid(p);
                if (h_f..=h_f + L).contains(&h) {
                    Ok(Self::mixture(t, p, (h - h_f) / L))
                } else {
                    Err(unsupported(input))
                }
            }
            StateInput::TemperatureEntropy(t, s) => {
                let (t, s) = (t.get::<kelvin>(), s.get::<joule_per_kilogram_kelvin>());
                let s_f = Self::s_liquid(t);
                if (s_f..=s_f + L / t).contains(&s) {
                    Ok(Self::mixture(t, Self::psat(t), (s - s_f) * t / L))
                } else {
                    Err(unsupported(input))
                }
            }
            StateInput::InternalEnergyDensity(u, rho) => {
                let candidate = State::new(
                    ThermodynamicTemperature::new::<kelvin>(
                        T_REF + u.get::<joule_per_kilogram>() / C,
                    ),
                    rho,
                    TestWater,
                );
                let t = candidate.temperature.get::<kelvin>();
                match Self::phase(t, candidate.specific_volume().value) {
                    Phase::Liquid => Ok(candidate),
                    _ => Err(unsupported(input)),
                }
            }
            StateInput::EnthalpyDensity(h, rho) => Ok(Self::at_volume(
                rho.get::<kilogram_per_cubic_meter>().recip(),
                h.get::<joule_per_kilogram>(),
                |props| props.h,
            )),
            StateInput::EntropyDensity(s, rho) => Ok(Self::at_volume(
                rho.get::<kilogram_per_cubic_meter>().recip(),
                s.get::<joule_per_kilogram_kelvin>(),
                |props| props.s,
            )),
            StateInput::InternalEnergyEntropy(..) | StateInput::EnthalpyEntropy(..) => {
                Err(unsupported(input))
            }
        }
    }
}

/// Rejects pressures at or above the critical point.
fn subcritical(p: Pressure, input: StateInput) -> Result<f64, PropertyError> {
    let p = p.get::<pascal>();
    if p < TestSteam::p_crit() {
        Ok(p)
    } else {
        Err(unsupported(input))
    }
}
