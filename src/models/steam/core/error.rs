use thiserror::Error;

use crate::support::constraint::ConstraintError;

use super::{PropertyId, StateSpec};

/// Errors that can occur while resolving a steam state.
#[derive(Debug, Error)]
pub enum ResolveError {
    /// The same property was supplied twice.
    ///
    /// Detected before any other check; no property lookups are made.
    #[error("{property} was given twice")]
    DuplicateProperty { property: PropertyId },

    /// A supplied value is not a usable number for its property.
    #[error("invalid {property} {input:?}: {reason}")]
    InvalidInput {
        property: PropertyId,

        /// The value as supplied by the caller.
        input: String,

        reason: InputIssue,
    },

    /// No resolution strategy exists for this property pair.
    #[error("cannot resolve a state from {first} and {second}")]
    UnsupportedPair {
        first: PropertyId,
        second: PropertyId,
    },

    /// The property backend or an iterative solve failed.
    ///
    /// Covers lookups outside the phase diagram, requests for quality at or
    /// above the critical point, and quality inversions that do not converge.
    #[error("could not resolve {given}: {context}")]
    PropertyResolution {
        /// The inputs that could not be resolved.
        given: StateSpec,

        /// Which step failed.
        context: String,

        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },
}

/// Why a supplied value was rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum InputIssue {
    #[error("not a number")]
    NotANumber,
    #[error("not finite")]
    NotFinite,
    #[error(transparent)]
    Constraint(#[from] ConstraintError),
}

/// A failed backend lookup or solve, before the offending inputs are attached.
#[derive(Debug)]
pub(super) struct Failure {
    context: String,
    source: Box<dyn std::error::Error + Send + Sync>,
}

impl Failure {
    /// Creates a failure with context describing the step that failed.
    pub(super) fn new(
        context: impl Into<String>,
        err: impl std::error::Error + Send + Sync + 'static,
    ) -> Self {
        Self {
            context: context.into(),
            source: Box::new(err),
        }
    }

    pub(super) fn into_resolve_error(self, given: StateSpec) -> ResolveError {
        ResolveError::PropertyResolution {
            given,
            context: self.context,
            source: self.source,
        }
    }
}
