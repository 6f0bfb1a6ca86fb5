//! Configuration profiles for the ocelot and sol sub-GHz chip families.
//!
//! A profile is a named preset of configuration overrides for one radio
//! operating mode, tied to a chip family. Running a profile against a
//! [`radioconf_model::Model`] pins the variables that define the PHY and
//! renders the resolved configuration as a list of output entries.
//!
//! # Usage
//!
//! ```
//! use radioconf_model::{Family, Model};
//! use radioconf_profiles::long_range::LongRangeSol;
//! use radioconf_profiles::profile::Profile;
//!
//! let mut model = Model::new(Family::Sol);
//! let outputs = LongRangeSol::new().configure(&mut model).unwrap();
//! assert!(outputs.iter().any(|entry| entry.name == "ofdm_option"));
//! ```

#![no_std]
#![deny(missing_docs)]

pub mod long_range;
pub mod outputs_common;
pub mod profile;
