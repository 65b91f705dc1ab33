#![cfg_attr(docsrs, feature(doc_cfg))]

//! # Steam States
//!
//! Water and steam state resolution for [Twine](https://github.com/isentropic-dev/twine).
//!
//! Given any two independent properties of water (pressure, temperature,
//! internal energy, enthalpy, entropy, specific volume, or quality),
//! this crate determines the phase region and resolves the remaining
//! properties using a pluggable property backend.
//! Two states can be resolved side by side to report the property change
//! between them.
//!
//! ## Crate layout
//!
//! - [`models`]: [`twine_core::Model`] implementations for resolving one or two states.
//! - [`support`]: Supporting utilities (units, constraints, thermo capabilities).
//!
//! ## Property backends
//!
//! The resolver does not evaluate steam correlations itself.
//! It drives any model implementing the capability traits in
//! [`support::thermo::capability`].
//! A CoolProp-backed water model is available with the `coolprop` feature.
//!
//! ## Utility code lifecycle
//!
//! Modules in [`support`] are part of the public API because they're useful,
//! but their APIs are not stable. Breaking changes may occur as needed.

pub mod models;
pub mod support;
