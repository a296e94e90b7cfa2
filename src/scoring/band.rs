use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Coarse classification of a distress score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum DistressBand {
    Low,
    Medium,
    High,
}

/// Map a score to its band: 0-25 LOW, 26-55 MEDIUM, 56 and up HIGH.
pub fn distress_band(score: u32) -> DistressBand {
    if score <= 25 {
        DistressBand::Low
    } else if score <= 55 {
        DistressBand::Medium
    } else {
        DistressBand::High
    }
}

impl DistressBand {
    pub fn as_str(&self) -> &'static str {
        match self {
            DistressBand::Low => "LOW",
            DistressBand::Medium => "MEDIUM",
            DistressBand::High => "HIGH",
        }
    }
}

impl fmt::Display for DistressBand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for DistressBand {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "LOW" => Ok(DistressBand::Low),
            "MEDIUM" => Ok(DistressBand::Medium),
            "HIGH" => Ok(DistressBand::High),
            _ => anyhow::bail!("Band must be LOW, MEDIUM or HIGH: {}", s),
        }
    }
}
