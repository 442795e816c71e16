//! Proficiency levels and their HUD glyphs.

use serde::{Deserialize, Serialize};

use crate::error::DomainError;

/// Proficiency level for skills and saves.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(try_from = "f32", into = "f32")]
pub enum ProficiencyLevel {
    /// Not proficient
    #[default]
    None,
    /// Half proficiency (Jack of All Trades, etc.)
    Half,
    /// Standard proficiency
    Proficient,
    /// Expertise (double proficiency)
    Expert,
}

impl ProficiencyLevel {
    /// Get the multiplier for this proficiency level.
    pub fn multiplier(&self) -> f32 {
        match self {
            ProficiencyLevel::None => 0.0,
            ProficiencyLevel::Half => 0.5,
            ProficiencyLevel::Proficient => 1.0,
            ProficiencyLevel::Expert => 2.0,
        }
    }

    pub fn icon_class(&self) -> &'static str {
        match self {
            ProficiencyLevel::None => "fa-regular fa-circle",
            ProficiencyLevel::Half => "fa-regular fa-circle-half-stroke",
            ProficiencyLevel::Proficient => "fa-solid fa-circle",
            ProficiencyLevel::Expert => "fa-regular fa-circle-dot",
        }
    }

    pub fn label_key(&self) -> &'static str {
        match self {
            ProficiencyLevel::None => "DND5E.NotProficient",
            ProficiencyLevel::Half => "DND5E.HalfProficient",
            ProficiencyLevel::Proficient => "DND5E.Proficient",
            ProficiencyLevel::Expert => "DND5E.Expertise",
        }
    }
}

impl TryFrom<f32> for ProficiencyLevel {
    type Error = DomainError;

    fn try_from(value: f32) -> Result<Self, Self::Error> {
        match value {
            v if v == 0.0 => Ok(Self::None),
            v if v == 0.5 => Ok(Self::Half),
            v if v == 1.0 => Ok(Self::Proficient),
            v if v == 2.0 => Ok(Self::Expert),
            other => Err(DomainError::parse(format!(
                "Unknown proficiency multiplier: {}",
                other
            ))),
        }
    }
}

impl From<ProficiencyLevel> for f32 {
    fn from(level: ProficiencyLevel) -> Self {
        level.multiplier()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_host_multipliers() {
        assert_eq!(ProficiencyLevel::try_from(0.5).unwrap(), ProficiencyLevel::Half);
        assert_eq!(ProficiencyLevel::try_from(2.0).unwrap(), ProficiencyLevel::Expert);
        assert!(ProficiencyLevel::try_from(3.0).is_err());
    }

    #[test]
    fn deserializes_from_number() {
        let level: ProficiencyLevel = serde_json::from_str("1").unwrap();
        assert_eq!(level, ProficiencyLevel::Proficient);
    }
}
