//! The profile abstraction and the per-family profile registry.

use radioconf_model::outputs::Outputs;
use radioconf_model::{ConfigError, Family, Model};

use crate::long_range::{LongRangeOcelot, LongRangeSol};
use crate::outputs_common::OutputsBuilder;

/// A named preset of configuration overrides for one radio operating mode,
/// tied to a chip family.
pub trait Profile: Sync {
    /// The profile's registry name.
    fn name(&self) -> &'static str;

    /// A one-line description of the operating mode.
    fn description(&self) -> &'static str;

    /// The chip family the profile targets.
    fn family(&self) -> Family;

    /// Pins the variables that define the PHY, regardless of profile input.
    fn fixed_vars(&self, model: &mut Model);

    /// The builder that renders this profile's output entries.
    fn outputs_builder(&self) -> &dyn OutputsBuilder;

    /// Runs the profile against `model`.
    ///
    /// Checks the model's family, applies the profile's fixed variables, and
    /// renders the resolved configuration.
    fn configure(&self, model: &mut Model) -> Result<Outputs, ConfigError> {
        if model.family() != self.family() {
            return Err(ConfigError::UnsupportedFamily {
                profile: self.name(),
                family: model.family(),
            });
        }
        log::trace!("{}::configure family: {}", self.name(), model.family());

        self.fixed_vars(model);
        log::trace!("{}::configure fixed vars applied", self.name());

        let mut outputs = Outputs::new();
        self.outputs_builder().build(model, &mut outputs)?;
        log::trace!(
            "{}::configure done. outputs: {}",
            self.name(),
            outputs.len()
        );
        Ok(outputs)
    }
}

static LONG_RANGE_OCELOT: LongRangeOcelot = LongRangeOcelot::new();
static LONG_RANGE_SOL: LongRangeSol = LongRangeSol::new();

static OCELOT_PROFILES: [&dyn Profile; 1] = [&LONG_RANGE_OCELOT];
static SOL_PROFILES: [&dyn Profile; 1] = [&LONG_RANGE_SOL];

/// The profiles available for `family`.
pub fn profiles(family: Family) -> &'static [&'static dyn Profile] {
    match family {
        Family::Ocelot => &OCELOT_PROFILES,
        Family::Sol => &SOL_PROFILES,
    }
}

/// Finds `family`'s profile named `name`.
pub fn lookup(family: Family, name: &str) -> Option<&'static dyn Profile> {
    profiles(family).iter().copied().find(|p| p.name() == name)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_family_registers_a_long_range_profile() {
        for family in [Family::Ocelot, Family::Sol] {
            let profile = lookup(family, "long_range").unwrap();
            assert_eq!(profile.family(), family);
        }
    }

    #[test]
    fn lookup_misses_unknown_names() {
        assert!(lookup(Family::Sol, "wisun_ofdm").is_none());
    }

    #[test]
    fn configure_rejects_a_foreign_family() {
        let profile = lookup(Family::Sol, "long_range").unwrap();
        let mut model = Model::new(Family::Ocelot);
        assert_eq!(
            profile.configure(&mut model).unwrap_err(),
            ConfigError::UnsupportedFamily {
                profile: "long_range",
                family: Family::Ocelot,
            }
        );
    }
}
