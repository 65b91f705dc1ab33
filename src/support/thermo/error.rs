use thiserror::Error;

/// Errors that may occur when evaluating thermodynamic properties.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PropertyError {
    /// The property or input combination is undefined for this model.
    ///
    /// For example, a state from pressure and density in a model whose liquid
    /// density does not depend on temperature.
    #[error("undefined property: {context}")]
    Undefined { context: String },

    /// The input state is outside the model's valid domain.
    ///
    /// For example, saturation properties above the critical point.
    #[error("out of domain: {context}")]
    OutOfDomain { context: String },

    /// The provided state is invalid or inconsistent.
    #[error("invalid state: {context}")]
    InvalidState { context: String },

    /// The calculation failed due to a numerical or internal error.
    ///
    /// For example, a flash calculation that fails to converge.
    #[error("calculation error: {context}")]
    Calculation { context: String },
}
