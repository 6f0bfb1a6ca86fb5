//! The long range profile: a DSSS-coded OQPSK PHY traded down in rate for
//! link budget.

use radioconf_model::op::{ModulationType, OfdmOption, ShapingFilter, Syncword};
use radioconf_model::{Family, Model};

use crate::outputs_common::{CommonOutputsOcelot, CommonOutputsSol, OutputsBuilder};
use crate::profile::Profile;

const DESCRIPTION: &str = "Profile used for long range applications";

/// The long range profile for the ocelot family.
pub struct LongRangeOcelot {
    outputs: CommonOutputsOcelot,
}

impl LongRangeOcelot {
    /// Creates the profile.
    pub const fn new() -> Self {
        Self {
            outputs: CommonOutputsOcelot,
        }
    }

    /// Pins the variables that define the long range PHY.
    ///
    /// The only degree of freedom left to profile input is the rate
    /// selector; everything else is part of the PHY's definition.
    pub fn fixed_long_range_vars(&self, model: &mut Model) {
        let vars = &mut model.vars;
        vars.modulation_type.force(ModulationType::Oqpsk);
        vars.shaping_filter.force(ShapingFilter::None);
        vars.dsss_chipping_code.force(0x8CC);
        vars.dsss_len.force(8);
        vars.dsss_spreading_factor.force(8);
        vars.preamble_length_bits.force(40);
        vars.syncword.force(Syncword::new(0x904E, 16));
        vars.payload_crc_en.force(true);
        vars.fec_en.force(false);

        let mode = vars.longrange_mode.get();
        vars.bitrate.force(mode.bitrate_bps());
        log::debug!("long_range rate selector: {mode:?}");
    }
}

impl Default for LongRangeOcelot {
    fn default() -> Self {
        Self::new()
    }
}

impl Profile for LongRangeOcelot {
    fn name(&self) -> &'static str {
        "long_range"
    }

    fn description(&self) -> &'static str {
        DESCRIPTION
    }

    fn family(&self) -> Family {
        Family::Ocelot
    }

    fn fixed_vars(&self, model: &mut Model) {
        self.fixed_long_range_vars(model);
    }

    fn outputs_builder(&self) -> &dyn OutputsBuilder {
        &self.outputs
    }
}

/// The long range profile for the sol family.
///
/// Same PHY as ocelot's. Sol additionally carries an OFDM modem whose option
/// field must hold a defined value even for non-OFDM PHYs, so this profile
/// pins it to option 1.
pub struct LongRangeSol {
    base: LongRangeOcelot,
    outputs: CommonOutputsSol,
}

impl LongRangeSol {
    /// Creates the profile.
    pub const fn new() -> Self {
        Self {
            base: LongRangeOcelot::new(),
            outputs: CommonOutputsSol,
        }
    }
}

impl Default for LongRangeSol {
    fn default() -> Self {
        Self::new()
    }
}

impl Profile for LongRangeSol {
    fn name(&self) -> &'static str {
        self.base.name()
    }

    fn description(&self) -> &'static str {
        self.base.description()
    }

    fn family(&self) -> Family {
        Family::Sol
    }

    fn fixed_vars(&self, model: &mut Model) {
        self.base.fixed_long_range_vars(model);
        model.vars.ofdm_option.force(OfdmOption::Opt1);
        log::debug!("long_range ofdm_option pinned: {:?}", OfdmOption::Opt1);
    }

    fn outputs_builder(&self) -> &dyn OutputsBuilder {
        &self.outputs
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use radioconf_model::op::LongRangeMode;
    use radioconf_model::vars::VarSource;
    use radioconf_model::ConfigError;

    #[test]
    fn sol_forces_ofdm_option_opt1() {
        let mut model = Model::new(Family::Sol);
        LongRangeSol::new().configure(&mut model).unwrap();

        assert_eq!(model.family(), Family::Sol);
        assert_eq!(model.vars.ofdm_option.get(), OfdmOption::Opt1);
        assert_eq!(model.vars.ofdm_option.source(), VarSource::Forced);
    }

    #[test]
    fn sol_forces_ofdm_option_over_profile_input() {
        let mut model = Model::new(Family::Sol);
        model.vars.ofdm_option.set_profile(OfdmOption::Opt3);
        LongRangeSol::new().configure(&mut model).unwrap();

        assert_eq!(model.vars.ofdm_option.get(), OfdmOption::Opt1);
    }

    #[test]
    fn ocelot_leaves_ofdm_option_alone() {
        let mut model = Model::new(Family::Ocelot);
        LongRangeOcelot::new().configure(&mut model).unwrap();

        assert_eq!(model.vars.ofdm_option.source(), VarSource::Default);
        assert_eq!(model.vars.modulation_type.get(), ModulationType::Oqpsk);
        assert_eq!(model.vars.dsss_spreading_factor.get(), 8);
    }

    #[test]
    fn bitrate_follows_the_rate_selector() {
        let mut model = Model::new(Family::Sol);
        model.vars.longrange_mode.set_profile(LongRangeMode::Lr9p6k);
        LongRangeSol::new().configure(&mut model).unwrap();

        assert_eq!(model.vars.bitrate.get(), 9_600);
        assert_eq!(model.vars.bitrate.source(), VarSource::Forced);
    }

    #[test]
    fn sol_outputs_carry_the_ofdm_entries() {
        let mut model = Model::new(Family::Sol);
        let outputs = LongRangeSol::new().configure(&mut model).unwrap();

        let entry = outputs.iter().find(|e| e.name == "ofdm_option").unwrap();
        assert_eq!(
            entry.value,
            radioconf_model::outputs::OutputValue::Name("OPT1")
        );
        assert!(outputs.iter().any(|e| e.name == "ofdm_bandwidth_hz"));
    }

    #[test]
    fn ocelot_outputs_do_not_mention_ofdm() {
        let mut model = Model::new(Family::Ocelot);
        let outputs = LongRangeOcelot::new().configure(&mut model).unwrap();

        assert!(outputs.iter().all(|e| !e.name.starts_with("ofdm")));
    }

    #[test]
    fn sol_rejects_an_ocelot_model() {
        let mut model = Model::new(Family::Ocelot);
        assert_eq!(
            LongRangeSol::new().configure(&mut model).unwrap_err(),
            ConfigError::UnsupportedFamily {
                profile: "long_range",
                family: Family::Ocelot,
            }
        );
    }
}
