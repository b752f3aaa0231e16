//! Density ramps: the ordered characters that luminance maps onto.

use crate::error::ConvertError;

/// Default ramp, ordered from darkest to lightest.
pub const DEFAULT_RAMP: &str = "@%#*+=-:. ";

/// Unicode block ramp (5 levels), darkest to lightest.
pub const BLOCKS_RAMP: &str = "█▓▒░ ";

/// Minimal ramp (4 levels) for a clean look.
pub const MINIMAL_RAMP: &str = "#:. ";

/// Long 70-level ramp for high-detail output.
pub const DETAILED_RAMP: &str =
    "$@B%8&WM#*oahkbdpqwmZO0QLCJUYXzcvunxrjft/\\|()1{}[]?-_+~<>i!lI;:,\"^`'. ";

/// An ordered sequence of characters.
///
/// Index 0 is what the darkest pixels map to, the last index is what the
/// lightest pixels map to. A ramp is never empty: `new` and `from_str`
/// reject an empty string with `InvalidRamp`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DensityRamp {
    chars: Vec<char>,
}

impl DensityRamp {
    /// Build a ramp from a string, one entry per `char`.
    ///
    /// Returns `InvalidRamp` if the string is empty.
    pub fn new(ramp: &str) -> Result<Self, ConvertError> {
        let chars: Vec<char> = ramp.chars().collect();
        if chars.is_empty() {
            return Err(ConvertError::InvalidRamp);
        }
        Ok(Self { chars })
    }

    pub fn chars(&self) -> &[char] {
        &self.chars
    }

    pub fn len(&self) -> usize {
        self.chars.len()
    }

    pub fn is_empty(&self) -> bool {
        self.chars.is_empty()
    }

    /// A copy of this ramp with the character order reversed.
    pub fn reversed(&self) -> Self {
        let mut chars = self.chars.clone();
        chars.reverse();
        Self { chars }
    }

    /// Character at `idx`, clamped to the last entry.
    pub fn at(&self, idx: usize) -> char {
        self.chars[idx.min(self.chars.len() - 1)]
    }
}

impl Default for DensityRamp {
    fn default() -> Self {
        Self {
            chars: DEFAULT_RAMP.chars().collect(),
        }
    }
}

impl std::fmt::Display for DensityRamp {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for c in &self.chars {
            write!(f, "{}", c)?;
        }
        Ok(())
    }
}

impl std::str::FromStr for DensityRamp {
    type Err = ConvertError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

/// Named ramp presets selectable from the CLI and config file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RampPreset {
    /// `@%#*+=-:. ` (10 levels)
    #[default]
    Standard,
    /// Unicode block characters (5 levels)
    Blocks,
    /// `#:. ` (4 levels)
    Minimal,
    /// 70-level ramp for fine gradients
    Detailed,
}

impl RampPreset {
    /// All presets, in display order.
    pub const ALL: [RampPreset; 4] = [
        RampPreset::Standard,
        RampPreset::Blocks,
        RampPreset::Minimal,
        RampPreset::Detailed,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            RampPreset::Standard => DEFAULT_RAMP,
            RampPreset::Blocks => BLOCKS_RAMP,
            RampPreset::Minimal => MINIMAL_RAMP,
            RampPreset::Detailed => DETAILED_RAMP,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            RampPreset::Standard => "standard",
            RampPreset::Blocks => "blocks",
            RampPreset::Minimal => "minimal",
            RampPreset::Detailed => "detailed",
        }
    }

    pub fn ramp(&self) -> DensityRamp {
        DensityRamp {
            chars: self.as_str().chars().collect(),
        }
    }
}
