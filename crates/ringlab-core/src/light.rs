use std::fmt;
use std::str::FromStr;

use serde::Serialize;

/// Lamp options for the interference pattern.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub enum LightSource {
    Sodium,
    Neon,
    Helium,
    Mercury,
    Hydrogen,
}

impl LightSource {
    pub const ALL: [LightSource; 5] = [
        LightSource::Sodium,
        LightSource::Neon,
        LightSource::Helium,
        LightSource::Mercury,
        LightSource::Hydrogen,
    ];

    pub fn name(self) -> &'static str {
        match self {
            LightSource::Sodium => "Sodium (Na)",
            LightSource::Neon => "Neon (Ne)",
            LightSource::Helium => "Helium (He)",
            LightSource::Mercury => "Mercury (Hg)",
            LightSource::Hydrogen => "Hydrogen (H)",
        }
    }

    /// Dominant emission line, in angstroms.
    pub fn wavelength_angstrom(self) -> u32 {
        match self {
            LightSource::Sodium => 5893,
            LightSource::Neon => 6402,
            LightSource::Helium => 5876,
            LightSource::Mercury => 5461,
            LightSource::Hydrogen => 6563,
        }
    }

    pub fn color(self) -> &'static str {
        match self {
            LightSource::Sodium => "Yellow",
            LightSource::Neon => "Red-Orange",
            LightSource::Helium => "Yellow",
            LightSource::Mercury => "Green",
            LightSource::Hydrogen => "Red",
        }
    }
}

impl fmt::Display for LightSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            LightSource::Sodium => "sodium",
            LightSource::Neon => "neon",
            LightSource::Helium => "helium",
            LightSource::Mercury => "mercury",
            LightSource::Hydrogen => "hydrogen",
        };
        f.write_str(s)
    }
}

impl FromStr for LightSource {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "sodium" | "na" => Ok(LightSource::Sodium),
            "neon" | "ne" => Ok(LightSource::Neon),
            "helium" | "he" => Ok(LightSource::Helium),
            "mercury" | "hg" => Ok(LightSource::Mercury),
            "hydrogen" | "h" => Ok(LightSource::Hydrogen),
            other => Err(format!(
                "unknown light source '{other}' (expected sodium|neon|helium|mercury|hydrogen)"
            )),
        }
    }
}
