//! Spell details and spell-slot pools.
//!
//! A spell is an [`Item`](super::Item) whose type is `spell`; this module holds
//! the spell-only attributes plus the actor's per-level slot pools.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::DomainError;

/// How a spell is empowered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CastingMode {
    /// Standard slot casting; the host calls this mode "spell" (older data: "prepared").
    #[serde(alias = "prepared", alias = "always")]
    Spell,
    #[serde(rename = "atwill")]
    AtWill,
    Innate,
    Pact,
    /// Ritual-only and other modes sort by level like standard spells.
    #[serde(other)]
    Other,
}

/// Preparation state as the host stores it (0 / 1 / 2).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub enum PreparationState {
    #[default]
    Unprepared,
    Prepared,
    Always,
}

impl PreparationState {
    pub fn is_prepared(&self) -> bool {
        !matches!(self, Self::Unprepared)
    }
}

impl TryFrom<u8> for PreparationState {
    type Error = DomainError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(Self::Unprepared),
            1 => Ok(Self::Prepared),
            2 => Ok(Self::Always),
            other => Err(DomainError::parse(format!(
                "Unknown preparation state: {}",
                other
            ))),
        }
    }
}

impl From<PreparationState> for u8 {
    fn from(state: PreparationState) -> Self {
        match state {
            PreparationState::Unprepared => 0,
            PreparationState::Prepared => 1,
            PreparationState::Always => 2,
        }
    }
}

/// Required components (verbal, somatic, material)
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SpellComponents {
    pub vocal: bool,
    pub somatic: bool,
    pub material: bool,
}

/// A spell granted through another item's activity.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct LinkedActivity {
    pub display_in_spellbook: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SpellDetails {
    /// Spell level (cantrip = 0)
    pub level: u8,
    pub method: CastingMode,
    #[serde(default)]
    pub prepared: PreparationState,
    #[serde(default)]
    pub components: SpellComponents,
    #[serde(default)]
    pub ritual: bool,
    #[serde(default)]
    pub concentration: bool,
    #[serde(default)]
    pub linked_activity: Option<LinkedActivity>,
}

impl SpellDetails {
    pub fn is_cantrip(&self) -> bool {
        self.level == 0
    }

    pub fn validate(&self) -> Result<(), DomainError> {
        if self.level > 9 {
            return Err(DomainError::validation(format!(
                "Spell level must be 0-9, got {}",
                self.level
            )));
        }
        Ok(())
    }
}

/// Which pool a slot entry belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum SlotKey {
    /// `spell1` .. `spell9`
    Level(u8),
    Pact,
}

impl fmt::Display for SlotKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SlotKey::Level(level) => write!(f, "spell{}", level),
            SlotKey::Pact => f.write_str("pact"),
        }
    }
}

impl FromStr for SlotKey {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s == "pact" {
            return Ok(SlotKey::Pact);
        }
        s.strip_prefix("spell")
            .and_then(|n| n.parse::<u8>().ok())
            .filter(|n| *n <= 9)
            .map(SlotKey::Level)
            .ok_or_else(|| DomainError::parse(format!("Unknown spell slot key: {}", s)))
    }
}

impl Serialize for SlotKey {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for SlotKey {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        raw.parse().map_err(serde::de::Error::custom)
    }
}

/// One entry of the actor's spellcasting resource pool.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SpellSlotPool {
    pub key: SlotKey,
    #[serde(default)]
    pub value: u32,
    #[serde(default)]
    pub max: u32,
    /// Casting level; only meaningful for pact slots.
    #[serde(default)]
    pub level: u8,
}

impl SpellSlotPool {
    pub fn level(level: u8, value: u32, max: u32) -> Self {
        Self {
            key: SlotKey::Level(level),
            value,
            max,
            level,
        }
    }

    pub fn pact(level: u8, value: u32, max: u32) -> Self {
        Self {
            key: SlotKey::Pact,
            value,
            max,
            level,
        }
    }

    /// Has at least one unspent slot out of a positive maximum.
    pub fn has_charge(&self) -> bool {
        self.value > 0 && self.max > 0
    }
}
