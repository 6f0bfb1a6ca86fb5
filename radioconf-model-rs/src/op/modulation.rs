//! Modulation parameters for the ocelot and sol modems.

/// The modulation scheme driving the modem.
#[repr(u8)]
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum ModulationType {
    /// 2-level frequency shift keying.
    Fsk2 = 0x00,
    /// 4-level frequency shift keying.
    Fsk4 = 0x01,
    /// Offset quadrature phase shift keying.
    Oqpsk = 0x02,
    /// Orthogonal frequency-division multiplexing (sol only).
    Ofdm = 0x03,
    /// On-off keying.
    Ook = 0x04,
}

impl ModulationType {
    /// The scheme's wire name.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Fsk2 => "fsk2",
            Self::Fsk4 => "fsk4",
            Self::Oqpsk => "oqpsk",
            Self::Ofdm => "ofdm",
            Self::Ook => "ook",
        }
    }
}

/// Pulse shaping applied to the transmitted baseband signal.
#[repr(u8)]
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum ShapingFilter {
    /// No shaping.
    None = 0x00,
    /// Gaussian shaping.
    Gaussian = 0x01,
}

/// SUN-OFDM bandwidth option.
///
/// The sol modem implements the four 802.15.4g OFDM options. The option
/// selects the FFT size and with it the occupied bandwidth and the number of
/// active tones.
#[repr(u8)]
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum OfdmOption {
    /// Option 1: 128-point FFT, roughly 1.1 MHz occupied.
    Opt1 = 0x00,
    /// Option 2: 64-point FFT, roughly 550 kHz occupied.
    Opt2 = 0x01,
    /// Option 3: 32-point FFT, roughly 280 kHz occupied.
    Opt3 = 0x02,
    /// Option 4: 16-point FFT, roughly 156 kHz occupied.
    Opt4 = 0x03,
}

impl OfdmOption {
    /// The option's wire name.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Opt1 => "OPT1",
            Self::Opt2 => "OPT2",
            Self::Opt3 => "OPT3",
            Self::Opt4 => "OPT4",
        }
    }

    /// Occupied bandwidth in Hz.
    pub fn bandwidth_hz(self) -> u32 {
        match self {
            Self::Opt1 => 1_094_000,
            Self::Opt2 => 552_000,
            Self::Opt3 => 281_000,
            Self::Opt4 => 156_000,
        }
    }

    /// FFT size in points.
    pub fn fft_size(self) -> u16 {
        match self {
            Self::Opt1 => 128,
            Self::Opt2 => 64,
            Self::Opt3 => 32,
            Self::Opt4 => 16,
        }
    }

    /// Number of active (data plus pilot) tones.
    pub fn active_tones(self) -> u16 {
        match self {
            Self::Opt1 => 104,
            Self::Opt2 => 52,
            Self::Opt3 => 26,
            Self::Opt4 => 14,
        }
    }
}

impl From<OfdmOption> for u8 {
    fn from(val: OfdmOption) -> Self {
        val as u8
    }
}

impl From<u8> for OfdmOption {
    fn from(value: u8) -> Self {
        match value {
            0x00 => Self::Opt1,
            0x01 => Self::Opt2,
            0x02 => Self::Opt3,
            0x03 => Self::Opt4,
            _ => panic!("Invalid OFDM option"),
        }
    }
}

/// Over-the-air rate selector for the long range PHY.
#[repr(u8)]
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum LongRangeMode {
    /// 1.2 kbps
    Lr1p2k = 0x00,
    /// 2.4 kbps
    Lr2p4k = 0x01,
    /// 4.8 kbps
    Lr4p8k = 0x02,
    /// 9.6 kbps
    Lr9p6k = 0x03,
    /// 19.2 kbps
    Lr19p2k = 0x04,
    /// 38.4 kbps
    Lr38p4k = 0x05,
}

impl LongRangeMode {
    /// The mode's over-the-air bit rate in bits per second.
    pub fn bitrate_bps(self) -> u32 {
        match self {
            Self::Lr1p2k => 1_200,
            Self::Lr2p4k => 2_400,
            Self::Lr4p8k => 4_800,
            Self::Lr9p6k => 9_600,
            Self::Lr19p2k => 19_200,
            Self::Lr38p4k => 38_400,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ofdm_option_raw_conversion() {
        assert_eq!(u8::from(OfdmOption::Opt1), 0x00);
        assert_eq!(OfdmOption::from(0x03), OfdmOption::Opt4);
    }

    #[test]
    fn ofdm_bandwidth_shrinks_with_option() {
        assert!(OfdmOption::Opt1.bandwidth_hz() > OfdmOption::Opt2.bandwidth_hz());
        assert!(OfdmOption::Opt2.bandwidth_hz() > OfdmOption::Opt3.bandwidth_hz());
        assert!(OfdmOption::Opt3.bandwidth_hz() > OfdmOption::Opt4.bandwidth_hz());
    }

    #[test]
    fn long_range_mode_bitrates() {
        assert_eq!(LongRangeMode::Lr1p2k.bitrate_bps(), 1_200);
        assert_eq!(LongRangeMode::Lr38p4k.bitrate_bps(), 38_400);
    }
}
