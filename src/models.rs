//! Public Twine models.
//!
//! Models are the primary public interface of this crate.
//!
//! # Model structure
//!
//! Each model lives in its own module and contains an internal `core` submodule
//! where the actual computation and domain logic lives. The `core` module is an
//! implementation detail; the types callers need are re-exported by the model
//! module itself.
//!
//! The [`twine_core::Model`] implementation is a thin adapter that delegates
//! to the model-specific core API. A single `core` may be exposed through
//! multiple adapters (e.g., different wrapper types implementing `Model`).

pub mod steam;
