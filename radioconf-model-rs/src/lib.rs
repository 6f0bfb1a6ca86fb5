//! A `no_std` configuration-variable model for sub-GHz radio PHY profiles.
//!
//! This crate provides the data model that configuration profiles operate on:
//! typed variable cells with default/profile/forced value layering, the
//! enumerated radio parameter sets those cells carry, the chip family
//! identifiers, and the output entries a resolved configuration renders to.
//!
//! The main entry point is the [`Model`] struct, which bundles a chip
//! [`Family`] with the full set of configuration variables for that chip.
//!
//! # Usage
//!
//! See the `radioconf-profiles` crate for the profile presets built on top of
//! this model.

#![no_std]

pub mod op;
pub mod outputs;
pub mod vars;

mod err;
mod model;

pub use err::ConfigError;
pub use model::*;
