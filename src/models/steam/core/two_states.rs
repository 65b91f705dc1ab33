//! Side-by-side resolution of two independent states.

use std::fmt;

use thiserror::Error;
use tracing::debug;

use super::{ResolveError, ResolverConfig, StateChange, StateSpec, ThermoState, resolve};
use super::traits::SteamThermoModel;

/// Inputs for two independent steam states.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TwoStates {
    pub state1: StateSpec,
    pub state2: StateSpec,
}

/// Which of the two states an error belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Which {
    State1,
    State2,
}

impl fmt::Display for Which {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::State1 => "state 1",
            Self::State2 => "state 2",
        })
    }
}

/// A resolution failure tagged with the state it belongs to.
#[derive(Debug, Error)]
#[error("{which} could not be resolved")]
pub struct StateError {
    pub which: Which,
    #[source]
    pub source: ResolveError,
}

/// Per-state results of a two-state calculation.
///
/// A failure in one state does not prevent the other from resolving.
#[derive(Debug)]
pub struct TwoStateResults {
    pub state1: Result<ThermoState, StateError>,
    pub state2: Result<ThermoState, StateError>,
}

impl TwoStateResults {
    /// Property change from state 1 to state 2, if both resolved.
    #[must_use]
    pub fn change(&self) -> Option<StateChange> {
        match (&self.state1, &self.state2) {
            (Ok(state1), Ok(state2)) => Some(StateChange::between(state1, state2)),
            _ => None,
        }
    }
}

/// Resolves both states in order.
pub(crate) fn resolve_two<Fluid>(
    states: &TwoStates,
    config: &ResolverConfig,
    thermo: &impl SteamThermoModel<Fluid>,
) -> TwoStateResults {
    let resolve_one = |which: Which, spec: &StateSpec| {
        resolve(spec, config, thermo).map_err(|source| {
            debug!(%which, error = %source, "state failed to resolve");
            StateError { which, source }
        })
    };

    TwoStateResults {
        state1: resolve_one(Which::State1, &states.state1),
        state2: resolve_one(Which::State2, &states.state2),
    }
}
