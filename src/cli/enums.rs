//! CLI enum types for ramp presets.

use clap::ValueEnum;

use crate::ascii::RampPreset;

/// Named density ramp.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum Preset {
    /// @%#*+=-:.  (10 levels)
    #[default]
    Standard,
    /// Unicode block characters (5 levels)
    Blocks,
    /// #:.  (4 levels)
    Minimal,
    /// 70 levels for fine gradients
    Detailed,
}

impl From<Preset> for RampPreset {
    fn from(p: Preset) -> Self {
        match p {
            Preset::Standard => RampPreset::Standard,
            Preset::Blocks => RampPreset::Blocks,
            Preset::Minimal => RampPreset::Minimal,
            Preset::Detailed => RampPreset::Detailed,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_preset_conversion() {
        assert_eq!(RampPreset::from(Preset::Standard), RampPreset::Standard);
        assert_eq!(RampPreset::from(Preset::Blocks), RampPreset::Blocks);
        assert_eq!(RampPreset::from(Preset::Minimal), RampPreset::Minimal);
        assert_eq!(RampPreset::from(Preset::Detailed), RampPreset::Detailed);
    }

    #[test]
    fn test_preset_names_match_config_names() {
        for preset in Preset::value_variants() {
            let name = preset.to_possible_value().unwrap();
            assert_eq!(name.get_name(), RampPreset::from(*preset).name());
        }
    }
}
