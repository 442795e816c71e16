//! Actor snapshot: the read-only view of one actor a HUD refresh works from.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::{ActiveEffect, Item, SpellSlotPool};
use crate::ids::{ActorId, EffectId, ItemId, TokenId};
use crate::value_objects::ProficiencyLevel;

/// Actor document type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ActorKind {
    Character,
    Npc,
    Vehicle,
    Group,
    #[serde(other)]
    Other,
}

impl ActorKind {
    /// Player characters and NPCs share the full build plan.
    pub fn is_creature(&self) -> bool {
        matches!(self, Self::Character | Self::Npc)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AbilityScore {
    /// Three-letter id, e.g. `str`
    pub id: String,
    pub value: i32,
    #[serde(rename = "mod", default)]
    pub modifier: i32,
    /// Saving-throw modifier; falls back to `modifier` when absent
    #[serde(default)]
    pub save: Option<i32>,
    #[serde(default)]
    pub proficient: ProficiencyLevel,
}

impl AbilityScore {
    pub fn new(id: impl Into<String>, value: i32, modifier: i32) -> Self {
        Self {
            id: id.into(),
            value,
            modifier,
            save: None,
            proficient: ProficiencyLevel::None,
        }
    }

    pub fn with_save(mut self, save: i32, proficient: ProficiencyLevel) -> Self {
        self.save = Some(save);
        self.proficient = proficient;
        self
    }

    pub fn save_modifier(&self) -> i32 {
        self.save.unwrap_or(self.modifier)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SkillEntry {
    pub id: String,
    /// Proficiency multiplier as the host stores it; validated when classified
    #[serde(default)]
    pub value: f32,
    #[serde(default)]
    pub total: i32,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct HitPoints {
    pub value: i32,
    pub max: i32,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DeathSaves {
    pub success: u8,
    pub failure: u8,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Attributes {
    pub hp: HitPoints,
    pub exhaustion: u8,
    pub inspiration: bool,
    pub death: DeathSaves,
}

/// A numeric actor resource that an activity can consume, e.g. `resources.primary`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Resource {
    pub path: String,
    #[serde(default)]
    pub label: Option<String>,
    #[serde(default)]
    pub value: i64,
    #[serde(default)]
    pub max: i64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ActorSnapshot {
    pub id: ActorId,
    pub name: String,
    #[serde(rename = "type")]
    pub kind: ActorKind,
    #[serde(default)]
    pub abilities: Vec<AbilityScore>,
    #[serde(default)]
    pub skills: Vec<SkillEntry>,
    #[serde(default)]
    pub attributes: Attributes,
    #[serde(default)]
    pub spell_slots: Vec<SpellSlotPool>,
    #[serde(default)]
    pub items: Vec<Item>,
    #[serde(default)]
    pub effects: Vec<ActiveEffect>,
    #[serde(default)]
    pub resources: Vec<Resource>,
    /// Custom counter values keyed by counter key
    #[serde(default)]
    pub counters: BTreeMap<String, Value>,
}

impl ActorSnapshot {
    pub fn new(id: impl Into<ActorId>, name: impl Into<String>, kind: ActorKind) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            kind,
            abilities: Vec::new(),
            skills: Vec::new(),
            attributes: Attributes::default(),
            spell_slots: Vec::new(),
            items: Vec::new(),
            effects: Vec::new(),
            resources: Vec::new(),
            counters: BTreeMap::new(),
        }
    }

    pub fn item(&self, id: &ItemId) -> Option<&Item> {
        self.items.iter().find(|item| &item.id == id)
    }

    pub fn effect(&self, id: &EffectId) -> Option<&ActiveEffect> {
        self.effects.iter().find(|effect| &effect.id == id)
    }

    pub fn ability(&self, id: &str) -> Option<&AbilityScore> {
        self.abilities.iter().find(|ability| ability.id == id)
    }

    pub fn resource(&self, path: &str) -> Option<&Resource> {
        self.resources.iter().find(|resource| resource.path == path)
    }

    pub fn counter_value(&self, key: &str) -> Option<&Value> {
        self.counters.get(key)
    }

    /// Has a non-disabled effect applying `status`.
    pub fn has_status(&self, status: &str) -> bool {
        self.effects
            .iter()
            .any(|effect| !effect.disabled && effect.has_status(status))
    }

    pub fn is_dying(&self) -> bool {
        self.attributes.hp.value <= 0
    }
}

/// A token on the canvas and the actor it represents.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TokenRef {
    pub id: TokenId,
    pub actor_id: ActorId,
}

impl TokenRef {
    pub fn new(id: impl Into<TokenId>, actor_id: impl Into<ActorId>) -> Self {
        Self {
            id: id.into(),
            actor_id: actor_id.into(),
        }
    }
}
