use std::sync::PoisonError;

use thiserror::Error;

use crate::support::thermo::PropertyError;

/// Errors returned by the [`CoolProp`](super::CoolProp) steam model.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum CoolPropError {
    #[error(transparent)]
    Rfluids(#[from] rfluids::native::CoolPropError),
    #[error("CoolProp abstract state mutex poisoned")]
    Poisoned,
}

impl<T> From<PoisonError<T>> for CoolPropError {
    fn from(_: PoisonError<T>) -> Self {
        CoolPropError::Poisoned
    }
}

impl From<CoolPropError> for PropertyError {
    fn from(error: CoolPropError) -> Self {
        match error {
            CoolPropError::Rfluids(message) => classify(&message.to_string()),
            CoolPropError::Poisoned => PropertyError::Calculation {
                context: CoolPropError::Poisoned.to_string(),
            },
        }
    }
}

/// Classifies a CoolProp message into a [`PropertyError`] variant.
///
/// CoolProp reports failures as free text. Steam lookups mostly fail because
/// an input pair lands outside the IAPWS-95 domain (below the triple point,
/// above the melting line, or on the wrong side of the critical point), so
/// those phrasings map to [`PropertyError::OutOfDomain`]. Unknown messages
/// fall back to [`PropertyError::Calculation`] with the text preserved.
fn classify(message: &str) -> PropertyError {
    const UNDEFINED: &[&str] = &["not defined", "not yet implemented", "not available"];
    const OUT_OF_DOMAIN: &[&str] = &[
        "out of range",
        "not in range",
        "outside the range of validity",
        "must be in range",
        "must be between",
        "quality must be",
        "below the triple",
        "above the critical",
        "greater than critical",
        "less than the melting",
        "above the maximum",
        "below the minimum",
    ];
    const INVALID_STATE: &[&str] = &["not a valid number", "invalid state", "invalid number"];

    let lowered = message.to_lowercase();
    let context = message.to_string();
    let matches = |needles: &[&str]| needles.iter().any(|needle| lowered.contains(needle));

    if matches(UNDEFINED) {
        PropertyError::Undefined { context }
    } else if matches(OUT_OF_DOMAIN) {
        PropertyError::OutOfDomain { context }
    } else if matches(INVALID_STATE) {
        PropertyError::InvalidState { context }
    } else {
        PropertyError::Calculation { context }
    }
}
