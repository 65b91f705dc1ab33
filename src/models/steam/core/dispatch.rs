//! Validation and dispatch of a property pair to a resolution strategy.

use uom::si::{
    available_energy::joule_per_kilogram,
    f64::{Pressure, ThermodynamicTemperature},
    specific_heat_capacity::joule_per_kilogram_kelvin,
    thermodynamic_temperature::kelvin,
};

use crate::support::{
    constraint::{Constrained, ConstraintError, StrictlyPositive, UnitInterval},
    thermo::StateInput,
    units::{
        SpecificEnthalpy, SpecificEntropy, SpecificInternalEnergy, SpecificVolume, UnitSystem,
    },
};

use super::{InputIssue, PropertyId, PropertyValue, ResolveError, StateSpec};

pub(super) type Quality = Constrained<f64, UnitInterval>;

/// A property that fixes one point on the saturation curve.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(super) enum Anchor {
    Pressure(Pressure),
    Temperature(ThermodynamicTemperature),
}

impl Anchor {
    /// Pairs this anchor with a bounded property as a backend input.
    pub(super) fn with(self, bound: Bound) -> StateInput {
        match (self, bound) {
            (Self::Pressure(p), Bound::InternalEnergy(u)) => StateInput::PressureInternalEnergy(p, u),
            (Self::Pressure(p), Bound::Enthalpy(h)) => StateInput::PressureEnthalpy(p, h),
            (Self::Pressure(p), Bound::Entropy(s)) => StateInput::PressureEntropy(p, s),
            (Self::Pressure(p), Bound::SpecificVolume(v)) => StateInput::PressureDensity(p, v.recip()),
            (Self::Temperature(t), Bound::InternalEnergy(u)) => {
                StateInput::TemperatureInternalEnergy(t, u)
            }
            (Self::Temperature(t), Bound::Enthalpy(h)) => StateInput::TemperatureEnthalpy(t, h),
            (Self::Temperature(t), Bound::Entropy(s)) => StateInput::TemperatureEntropy(t, s),
            (Self::Temperature(t), Bound::SpecificVolume(v)) => {
                StateInput::TemperatureDensity(t, v.recip())
            }
        }
    }
}

/// A property whose saturated-liquid and saturated-vapor values bound the dome.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(super) enum Bound {
    InternalEnergy(SpecificInternalEnergy),
    Enthalpy(SpecificEnthalpy),
    Entropy(SpecificEntropy),
    SpecificVolume(SpecificVolume),
}

impl Bound {
    pub(super) fn property(self) -> PropertyId {
        match self {
            Self::InternalEnergy(_) => PropertyId::InternalEnergy,
            Self::Enthalpy(_) => PropertyId::Enthalpy,
            Self::Entropy(_) => PropertyId::Entropy,
            Self::SpecificVolume(_) => PropertyId::SpecificVolume,
        }
    }

    /// The given value in SI base units.
    pub(super) fn target(self) -> f64 {
        match self {
            Self::InternalEnergy(u) => u.get::<joule_per_kilogram>(),
            Self::Enthalpy(h) => h.get::<joule_per_kilogram>(),
            Self::Entropy(s) => s.get::<joule_per_kilogram_kelvin>(),
            Self::SpecificVolume(v) => v.value,
        }
    }
}

/// A validated property in canonical units.
#[derive(Debug, Clone, Copy)]
enum Known {
    Pressure(Pressure),
    Temperature(ThermodynamicTemperature),
    Bound(Bound),
    Quality(Quality),
}

impl Known {
    fn from_raw(given: PropertyValue, units: UnitSystem) -> Result<Self, ResolveError> {
        let PropertyValue { property, value } = given;
        let invalid = |reason: InputIssue| ResolveError::InvalidInput {
            property,
            input: value.to_string(),
            reason,
        };
        let constrained = |err: ConstraintError| invalid(err.into());

        if value.is_nan() {
            return Err(invalid(InputIssue::NotANumber));
        }
        if !value.is_finite() {
            return Err(invalid(InputIssue::NotFinite));
        }

        let known = match property {
            PropertyId::Pressure => {
                let p = StrictlyPositive::new(units.pressure(value)).map_err(constrained)?;
                Self::Pressure(p.into_inner())
            }
            PropertyId::Temperature => {
                let t = units.temperature(value);
                StrictlyPositive::new(t.get::<kelvin>()).map_err(constrained)?;
                Self::Temperature(t)
            }
            PropertyId::InternalEnergy => {
                Self::Bound(Bound::InternalEnergy(units.specific_energy(value)))
            }
            PropertyId::Enthalpy => Self::Bound(Bound::Enthalpy(units.specific_energy(value))),
            PropertyId::Entropy => Self::Bound(Bound::Entropy(units.specific_entropy(value))),
            PropertyId::SpecificVolume => {
                StrictlyPositive::new(value).map_err(constrained)?;
                let density = units.density_from_specific_volume(value);
                Self::Bound(Bound::SpecificVolume(density.recip()))
            }
            PropertyId::Quality => Self::Quality(UnitInterval::new(value).map_err(constrained)?),
        };
        Ok(known)
    }
}

/// How a validated pair is resolved.
#[derive(Debug, Clone, Copy)]
pub(super) enum Dispatch {
    PressureTemperature(Pressure, ThermodynamicTemperature),

    /// Interpolate between saturated liquid and vapor at the anchor.
    SaturatedMixture(Anchor, Quality),

    /// Classify the bound against its saturation values at the anchor.
    Bounded(Anchor, Bound),

    /// Search the saturation curve for the temperature matching the bound.
    QualityInversion(Bound, Quality),

    /// Hand the pair to the backend's general solver, then classify.
    General(StateInput, [Bound; 2]),
}

/// Validates a state spec and selects its resolution strategy.
///
/// Checks run in order: repeated property, invalid values, unsupported pair.
pub(super) fn dispatch(spec: &StateSpec) -> Result<Dispatch, ResolveError> {
    let (first, second) = (spec.first, spec.second);

    if first.property == second.property {
        return Err(ResolveError::DuplicateProperty {
            property: first.property,
        });
    }

    let first_known = Known::from_raw(first, spec.units)?;
    let second_known = Known::from_raw(second, spec.units)?;

    let unsupported = || ResolveError::UnsupportedPair {
        first: first.property,
        second: second.property,
    };

    let pair = if first.property < second.property {
        (first_known, second_known)
    } else {
        (second_known, first_known)
    };

    match pair {
        (Known::Pressure(p), Known::Temperature(t)) => Ok(Dispatch::PressureTemperature(p, t)),
        (Known::Pressure(p), Known::Quality(x)) => {
            Ok(Dispatch::SaturatedMixture(Anchor::Pressure(p), x))
        }
        (Known::Temperature(t), Known::Quality(x)) => {
            Ok(Dispatch::SaturatedMixture(Anchor::Temperature(t), x))
        }
        (Known::Pressure(p), Known::Bound(b)) => Ok(Dispatch::Bounded(Anchor::Pressure(p), b)),
        (Known::Temperature(t), Known::Bound(b)) => {
            Ok(Dispatch::Bounded(Anchor::Temperature(t), b))
        }
        (Known::Bound(b), Known::Quality(x)) => Ok(Dispatch::QualityInversion(b, x)),
        (Known::Bound(a), Known::Bound(b)) => general_input(a, b)
            .map(|input| Dispatch::General(input, [a, b]))
            .ok_or_else(unsupported),
        _ => Err(unsupported()),
    }
}

/// Backend input for two bounded properties in canonical order.
///
/// Internal energy and enthalpy together do not pin down a state reliably
/// enough for the backend, so that pair has no input.
fn general_input(a: Bound, b: Bound) -> Option<StateInput> {
    match (a, b) {
        (Bound::InternalEnergy(u), Bound::Entropy(s)) => {
            Some(StateInput::InternalEnergyEntropy(u, s))
        }
        (Bound::InternalEnergy(u), Bound::SpecificVolume(v)) => {
            Some(StateInput::InternalEnergyDensity(u, v.recip()))
        }
        (Bound::Enthalpy(h), Bound::Entropy(s)) => Some(StateInput::EnthalpyEntropy(h, s)),
        (Bound::Enthalpy(h), Bound::SpecificVolume(v)) => {
            Some(StateInput::EnthalpyDensity(h, v.recip()))
        }
        (Bound::Entropy(s), Bound::SpecificVolume(v)) => {
            Some(StateInput::EntropyDensity(s, v.recip()))
        }
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;
    use uom::si::{pressure::bar, thermodynamic_temperature::degree_celsius};

    fn spec(a: (PropertyId, f64), b: (PropertyId, f64)) -> StateSpec {
        StateSpec::new(
            PropertyValue::new(a.0, a.1),
            PropertyValue::new(b.0, b.1),
            UnitSystem::Si,
        )
    }

    fn sample(property: PropertyId) -> f64 {
        match property {
            PropertyId::Quality => 0.5,
            PropertyId::SpecificVolume => 0.1,
            _ => 100.0,
        }
    }

    #[test]
    fn every_repeated_property_is_rejected() {
        for id in PropertyId::ALL {
            let err = dispatch(&spec((id, sample(id)), (id, sample(id)))).unwrap_err();
            assert!(
                matches!(err, ResolveError::DuplicateProperty { property } if property == id),
                "{id}: {err}"
            );
        }
    }

    #[test]
    fn duplicates_are_reported_before_bad_values() {
        let err = dispatch(&spec(
            (PropertyId::Pressure, f64::NAN),
            (PropertyId::Pressure, -1.0),
        ))
        .unwrap_err();
        assert!(matches!(err, ResolveError::DuplicateProperty { .. }));
    }

    #[test]
    fn invalid_values_are_rejected() {
        let cases = [
            (PropertyId::Pressure, f64::NAN, InputIssue::NotANumber),
            (PropertyId::Enthalpy, f64::INFINITY, InputIssue::NotFinite),
            (
                PropertyId::Pressure,
                -1.0,
                InputIssue::Constraint(ConstraintError::Negative),
            ),
            (
                PropertyId::SpecificVolume,
                0.0,
                InputIssue::Constraint(ConstraintError::Zero),
            ),
            (
                PropertyId::Temperature,
                -300.0,
                InputIssue::Constraint(ConstraintError::Negative),
            ),
            (
                PropertyId::Quality,
                1.2,
                InputIssue::Constraint(ConstraintError::AboveMaximum),
            ),
        ];

        for (id, value, expected) in cases {
            let other = if id == PropertyId::Entropy {
                PropertyId::Pressure
            } else {
                PropertyId::Entropy
            };
            let err = dispatch(&spec((id, value), (other, 1.0))).unwrap_err();
            assert!(
                matches!(
                    err,
                    ResolveError::InvalidInput { property, reason, .. }
                        if property == id && reason == expected
                ),
                "{id} = {value}: {err}"
            );
        }
    }

    #[test]
    fn invalid_values_are_reported_before_unsupported_pairs() {
        let err = dispatch(&spec(
            (PropertyId::InternalEnergy, f64::NAN),
            (PropertyId::Enthalpy, 100.0),
        ))
        .unwrap_err();
        assert!(matches!(err, ResolveError::InvalidInput { .. }));
    }

    #[test]
    fn internal_energy_with_enthalpy_is_unsupported() {
        for (a, b) in [
            (PropertyId::InternalEnergy, PropertyId::Enthalpy),
            (PropertyId::Enthalpy, PropertyId::InternalEnergy),
        ] {
            let err = dispatch(&spec((a, 100.0), (b, 200.0))).unwrap_err();
            assert!(matches!(
                err,
                ResolveError::UnsupportedPair { first, second } if first == a && second == b
            ));
        }
    }

    #[test]
    fn every_other_pair_has_a_strategy() {
        for a in PropertyId::ALL {
            for b in PropertyId::ALL {
                let skip = a == b
                    || matches!(
                        (a, b),
                        (PropertyId::InternalEnergy, PropertyId::Enthalpy)
                            | (PropertyId::Enthalpy, PropertyId::InternalEnergy)
                    );
                if skip {
                    continue;
                }
                assert!(
                    dispatch(&spec((a, sample(a)), (b, sample(b)))).is_ok(),
                    "{a} with {b}"
                );
            }
        }
    }

    #[test]
    fn pair_order_does_not_matter() {
        let forward = dispatch(&spec(
            (PropertyId::Pressure, 1.0),
            (PropertyId::Temperature, 25.0),
        ))
        .unwrap();
        let reverse = dispatch(&spec(
            (PropertyId::Temperature, 25.0),
            (PropertyId::Pressure, 1.0),
        ))
        .unwrap();

        for dispatch in [forward, reverse] {
            let Dispatch::PressureTemperature(p, t) = dispatch else {
                panic!("expected the pressure-temperature strategy, got {dispatch:?}");
            };
            assert_relative_eq!(p.get::<bar>(), 1.0);
            assert_relative_eq!(t.get::<degree_celsius>(), 25.0, epsilon = 1e-12);
        }
    }

    #[test]
    fn strategies_match_the_pair() {
        let mixture = dispatch(&spec((PropertyId::Quality, 1.0), (PropertyId::Pressure, 1.0)));
        assert!(matches!(
            mixture,
            Ok(Dispatch::SaturatedMixture(Anchor::Pressure(_), _))
        ));

        let bounded = dispatch(&spec((PropertyId::Entropy, 7.0), (PropertyId::Temperature, 200.0)));
        assert!(matches!(
            bounded,
            Ok(Dispatch::Bounded(Anchor::Temperature(_), Bound::Entropy(_)))
        ));

        let inversion = dispatch(&spec((PropertyId::Quality, 0.3), (PropertyId::SpecificVolume, 0.2)));
        assert!(matches!(
            inversion,
            Ok(Dispatch::QualityInversion(Bound::SpecificVolume(_), _))
        ));

        let general = dispatch(&spec((PropertyId::Entropy, 7.0), (PropertyId::Enthalpy, 3000.0)));
        assert!(matches!(
            general,
            Ok(Dispatch::General(StateInput::EnthalpyEntropy(..), _))
        ));
    }
}
