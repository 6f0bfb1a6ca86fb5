//! Error type for profile configuration.

use crate::model::Family;

/// The error type for running a profile against a model.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum ConfigError {
    /// A profile was asked to configure a model of a family it does not
    /// target.
    UnsupportedFamily {
        /// The profile's name.
        profile: &'static str,
        /// The model's family.
        family: Family,
    },
    /// The outputs list is full.
    OutputOverflow {
        /// The entry that did not fit.
        name: &'static str,
    },
}

impl core::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::UnsupportedFamily { profile, family } => {
                write!(f, "profile {profile} does not target family {family}")
            }
            Self::OutputOverflow { name } => {
                write!(f, "no room for output entry {name}")
            }
        }
    }
}
