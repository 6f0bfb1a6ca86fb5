//! Per-family builders for the output entries every profile renders.

use radioconf_model::outputs::{push, Output, OutputCategory, OutputValue, Outputs};
use radioconf_model::{ConfigError, Model};

/// Renders a resolved model into output entries.
pub trait OutputsBuilder {
    /// Appends this builder's entries to `outputs`.
    fn build(&self, model: &Model, outputs: &mut Outputs) -> Result<(), ConfigError>;
}

/// The entry set every ocelot profile renders.
pub struct CommonOutputsOcelot;

impl OutputsBuilder for CommonOutputsOcelot {
    fn build(&self, model: &Model, outputs: &mut Outputs) -> Result<(), ConfigError> {
        let vars = &model.vars;
        push(
            outputs,
            Output {
                name: "base_frequency_hz",
                category: OutputCategory::Frequency,
                value: OutputValue::U32(vars.base_frequency_hz.get()),
            },
        )?;
        push(
            outputs,
            Output {
                name: "channel_spacing_hz",
                category: OutputCategory::Frequency,
                value: OutputValue::U32(vars.channel_spacing_hz.get()),
            },
        )?;
        push(
            outputs,
            Output {
                name: "bitrate",
                category: OutputCategory::Modem,
                value: OutputValue::U32(vars.bitrate.get()),
            },
        )?;
        push(
            outputs,
            Output {
                name: "modulation_type",
                category: OutputCategory::Modem,
                value: OutputValue::Name(vars.modulation_type.get().as_str()),
            },
        )?;
        push(
            outputs,
            Output {
                name: "dsss_spreading_factor",
                category: OutputCategory::Modem,
                value: OutputValue::U8(vars.dsss_spreading_factor.get()),
            },
        )?;
        push(
            outputs,
            Output {
                name: "preamble_length_bits",
                category: OutputCategory::Frame,
                value: OutputValue::U32(vars.preamble_length_bits.get() as u32),
            },
        )?;
        push(
            outputs,
            Output {
                name: "syncword",
                category: OutputCategory::Frame,
                value: OutputValue::U32(vars.syncword.get().value()),
            },
        )?;
        push(
            outputs,
            Output {
                name: "payload_crc_en",
                category: OutputCategory::Frame,
                value: OutputValue::Bool(vars.payload_crc_en.get()),
            },
        )?;
        Ok(())
    }
}

/// The entry set every sol profile renders: the ocelot set plus the entries
/// only sol's OFDM modem consumes.
pub struct CommonOutputsSol;

impl OutputsBuilder for CommonOutputsSol {
    fn build(&self, model: &Model, outputs: &mut Outputs) -> Result<(), ConfigError> {
        CommonOutputsOcelot.build(model, outputs)?;

        let ofdm_option = model.vars.ofdm_option.get();
        push(
            outputs,
            Output {
                name: "ofdm_option",
                category: OutputCategory::Modem,
                value: OutputValue::Name(ofdm_option.as_str()),
            },
        )?;
        push(
            outputs,
            Output {
                name: "ofdm_bandwidth_hz",
                category: OutputCategory::Advanced,
                value: OutputValue::U32(ofdm_option.bandwidth_hz()),
            },
        )?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use radioconf_model::Family;

    #[test]
    fn sol_extends_the_ocelot_entry_set() {
        let model = Model::new(Family::Sol);

        let mut ocelot = Outputs::new();
        CommonOutputsOcelot.build(&model, &mut ocelot).unwrap();
        let mut sol = Outputs::new();
        CommonOutputsSol.build(&model, &mut sol).unwrap();

        assert_eq!(sol.len(), ocelot.len() + 2);
        for entry in &ocelot {
            assert!(sol.iter().any(|e| e.name == entry.name));
        }
        assert!(ocelot.iter().all(|e| e.name != "ofdm_option"));
    }
}
