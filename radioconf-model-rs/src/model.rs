//! The chip family identifier and the per-chip variable model.

use crate::op::{LongRangeMode, ModulationType, OfdmOption, ShapingFilter, Syncword};
use crate::vars::Var;

/// Identifier for a chip variant.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Family {
    /// The ocelot family: FSK/OQPSK sub-GHz modem.
    Ocelot,
    /// The sol family: ocelot's modem plus a SUN-OFDM modem.
    Sol,
}

impl Family {
    /// The family's lowercase name.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Ocelot => "ocelot",
            Self::Sol => "sol",
        }
    }
}

impl core::fmt::Display for Family {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The full set of configuration variables a profile can touch.
///
/// Variables a family's modem does not implement stay at their defaults
/// unless a profile pins them; `ofdm_option` is only consumed by sol.
pub struct ModelVars {
    /// Carrier center frequency in Hz.
    pub base_frequency_hz: Var<u32>,
    /// Channel raster spacing in Hz.
    pub channel_spacing_hz: Var<u32>,
    /// Reference crystal frequency in Hz.
    pub xtal_frequency_hz: Var<u32>,
    /// Over-the-air bit rate in bits per second.
    pub bitrate: Var<u32>,
    /// FSK frequency deviation in Hz.
    pub deviation_hz: Var<u32>,
    /// Modulation scheme.
    pub modulation_type: Var<ModulationType>,
    /// Baseband pulse shaping.
    pub shaping_filter: Var<ShapingFilter>,
    /// DSSS chip sequence, right-aligned.
    pub dsss_chipping_code: Var<u32>,
    /// DSSS chip sequence length in chips.
    pub dsss_len: Var<u8>,
    /// DSSS spreading factor.
    pub dsss_spreading_factor: Var<u8>,
    /// Preamble length in bits.
    pub preamble_length_bits: Var<u16>,
    /// Frame sync pattern.
    pub syncword: Var<Syncword>,
    /// Payload CRC enable.
    pub payload_crc_en: Var<bool>,
    /// Forward error correction enable.
    pub fec_en: Var<bool>,
    /// Rate selector for the long range PHY.
    pub longrange_mode: Var<LongRangeMode>,
    /// SUN-OFDM bandwidth option (sol only).
    pub ofdm_option: Var<OfdmOption>,
}

impl Default for ModelVars {
    fn default() -> Self {
        Self {
            base_frequency_hz: Var::new(915_000_000),
            channel_spacing_hz: Var::new(200_000),
            xtal_frequency_hz: Var::new(39_000_000),
            bitrate: Var::new(100_000),
            deviation_hz: Var::new(25_000),
            modulation_type: Var::new(ModulationType::Fsk2),
            shaping_filter: Var::new(ShapingFilter::Gaussian),
            dsss_chipping_code: Var::new(0),
            dsss_len: Var::new(0),
            dsss_spreading_factor: Var::new(0),
            preamble_length_bits: Var::new(32),
            syncword: Var::new(Syncword::new(0xF68D, 16)),
            payload_crc_en: Var::new(true),
            fec_en: Var::new(false),
            longrange_mode: Var::new(LongRangeMode::Lr4p8k),
            ofdm_option: Var::new(OfdmOption::Opt1),
        }
    }
}

/// The configuration model for one chip/profile combination.
pub struct Model {
    family: Family,
    /// The model's variables.
    pub vars: ModelVars,
}

impl Model {
    /// Creates a model for `family` with every variable at its reset default.
    pub fn new(family: Family) -> Self {
        Self {
            family,
            vars: ModelVars::default(),
        }
    }

    /// The chip family this model targets.
    pub fn family(&self) -> Family {
        self.family
    }
}
