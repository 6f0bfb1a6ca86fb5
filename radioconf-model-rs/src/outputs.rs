//! Output entries rendered from a resolved configuration.

use crate::err::ConfigError;

/// The section of the rendered configuration an entry belongs to.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum OutputCategory {
    /// Carrier and channel raster.
    Frequency,
    /// Modem settings.
    Modem,
    /// Frame format settings.
    Frame,
    /// Entries most integrations leave alone.
    Advanced,
}

/// The value shapes an output entry can carry.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum OutputValue {
    /// An unsigned 32-bit quantity.
    U32(u32),
    /// An unsigned 8-bit quantity.
    U8(u8),
    /// A flag.
    Bool(bool),
    /// An enum-valued entry, carrying the variant's wire name.
    Name(&'static str),
}

impl core::fmt::Display for OutputValue {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::U32(value) => write!(f, "{value}"),
            Self::U8(value) => write!(f, "{value}"),
            Self::Bool(value) => write!(f, "{value}"),
            Self::Name(name) => f.write_str(name),
        }
    }
}

/// One named entry of a profile's rendered output.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Output {
    /// The entry's name.
    pub name: &'static str,
    /// The section the entry belongs to.
    pub category: OutputCategory,
    /// The entry's value.
    pub value: OutputValue,
}

impl core::fmt::Display for Output {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{}: {}", self.name, self.value)
    }
}

/// The bounded list of entries a profile renders.
pub type Outputs = heapless::Vec<Output, 32>;

/// Appends `output`, surfacing capacity exhaustion as a [`ConfigError`].
pub fn push(outputs: &mut Outputs, output: Output) -> Result<(), ConfigError> {
    outputs
        .push(output)
        .map_err(|output| ConfigError::OutputOverflow { name: output.name })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn renders_name_and_value() {
        let output = Output {
            name: "ofdm_option",
            category: OutputCategory::Modem,
            value: OutputValue::Name("OPT1"),
        };
        let mut buf = heapless::String::<64>::new();
        core::fmt::write(&mut buf, format_args!("{output}")).unwrap();
        assert_eq!(buf.as_str(), "ofdm_option: OPT1");
    }

    #[test]
    fn push_surfaces_overflow() {
        let mut outputs = Outputs::new();
        let entry = Output {
            name: "bitrate",
            category: OutputCategory::Modem,
            value: OutputValue::U32(4_800),
        };
        for _ in 0..outputs.capacity() {
            push(&mut outputs, entry).unwrap();
        }
        assert_eq!(
            push(&mut outputs, entry),
            Err(ConfigError::OutputOverflow { name: "bitrate" })
        );
    }
}
