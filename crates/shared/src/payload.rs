//! Action payloads: what a clicked action asks the dispatcher to do.
//!
//! On the wire a payload is the host's `"category|identifier"` string. It is
//! decoded exactly once, at the dispatcher's entry point, into [`ActionPayload`].
//! Compound identifiers (custom counters, magic items) join their two parts
//! with `>`.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use tahud_domain::{CounterType, EffectId, ItemId};
use thiserror::Error;

const CATEGORY_SEPARATOR: char = '|';
const COMPOUND_SEPARATOR: char = '>';

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PayloadError {
    #[error("Malformed action payload: {0}")]
    Malformed(String),
    #[error("Unknown action category: {0}")]
    UnknownCategory(String),
    #[error("Unknown {category} action: {id}")]
    UnknownIdentifier { category: ActionCategory, id: String },
}

/// The fixed category vocabulary shared by classifier and dispatcher.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ActionCategory {
    Ability,
    Check,
    Save,
    Skill,
    Condition,
    Counter,
    Effect,
    Exhaustion,
    Feature,
    Item,
    Spell,
    Weapon,
    MagicItem,
    Utility,
}

impl ActionCategory {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Ability => "ability",
            Self::Check => "check",
            Self::Save => "save",
            Self::Skill => "skill",
            Self::Condition => "condition",
            Self::Counter => "counter",
            Self::Effect => "effect",
            Self::Exhaustion => "exhaustion",
            Self::Feature => "feature",
            Self::Item => "item",
            Self::Spell => "spell",
            Self::Weapon => "weapon",
            Self::MagicItem => "magicItem",
            Self::Utility => "utility",
        }
    }

    /// Localization key used as the list-name prefix.
    pub fn label_key(&self) -> &'static str {
        match self {
            Self::Ability => "DND5E.Ability",
            Self::Check => "tokenActionHud.dnd5e.check",
            Self::Save => "DND5E.SAVE.Title.one",
            Self::Skill => "tokenActionHud.dnd5e.skill",
            Self::Condition => "tokenActionHud.dnd5e.condition",
            Self::Counter => "tokenActionHud.dnd5e.counter",
            Self::Effect => "DND5E.Effect",
            Self::Exhaustion => "DND5E.Exhaustion",
            Self::Feature => "TYPES.Item.feat",
            Self::Item | Self::Weapon | Self::MagicItem => "tokenActionHud.dnd5e.item",
            Self::Spell => "TYPES.Item.spell",
            Self::Utility => "DND5E.ActionUtil",
        }
    }
}

impl fmt::Display for ActionCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ActionCategory {
    type Err = PayloadError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "ability" => Ok(Self::Ability),
            "check" => Ok(Self::Check),
            "save" => Ok(Self::Save),
            "skill" => Ok(Self::Skill),
            "condition" => Ok(Self::Condition),
            "counter" => Ok(Self::Counter),
            "effect" => Ok(Self::Effect),
            "exhaustion" => Ok(Self::Exhaustion),
            "feature" => Ok(Self::Feature),
            "item" => Ok(Self::Item),
            "spell" => Ok(Self::Spell),
            "weapon" => Ok(Self::Weapon),
            "magicItem" | "magic-item" => Ok(Self::MagicItem),
            "utility" => Ok(Self::Utility),
            other => Err(PayloadError::UnknownCategory(other.to_string())),
        }
    }
}

/// Which ability roll an ability action requests.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AbilityRoll {
    /// The host's generic ability roll prompt
    Ability,
    Check,
    Save,
}

impl AbilityRoll {
    pub fn category(&self) -> ActionCategory {
        match self {
            Self::Ability => ActionCategory::Ability,
            Self::Check => ActionCategory::Check,
            Self::Save => ActionCategory::Save,
        }
    }
}

/// Item-backed categories; they all open or use the item.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ItemKind {
    Feature,
    Item,
    Spell,
    Weapon,
}

impl ItemKind {
    pub fn category(&self) -> ActionCategory {
        match self {
            Self::Feature => ActionCategory::Feature,
            Self::Item => ActionCategory::Item,
            Self::Spell => ActionCategory::Spell,
            Self::Weapon => ActionCategory::Weapon,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum UtilityAction {
    DeathSave,
    EndTurn,
    Initiative,
    Inspiration,
    LongRest,
    ShortRest,
}

impl UtilityAction {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::DeathSave => "deathSave",
            Self::EndTurn => "endTurn",
            Self::Initiative => "initiative",
            Self::Inspiration => "inspiration",
            Self::LongRest => "longRest",
            Self::ShortRest => "shortRest",
        }
    }

    pub fn parse(id: &str) -> Option<Self> {
        match id {
            "deathSave" => Some(Self::DeathSave),
            "endTurn" => Some(Self::EndTurn),
            "initiative" => Some(Self::Initiative),
            "inspiration" => Some(Self::Inspiration),
            "longRest" => Some(Self::LongRest),
            "shortRest" => Some(Self::ShortRest),
            _ => None,
        }
    }
}

/// A decoded click target.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum ActionPayload {
    Ability { roll: AbilityRoll, ability: String },
    Skill { skill: String },
    Condition { condition: String },
    /// Built-in counters carry no type; custom ones do
    Counter {
        key: String,
        counter_type: Option<CounterType>,
    },
    Effect { effect_id: EffectId },
    Exhaustion,
    Item { kind: ItemKind, item_id: ItemId },
    MagicItem { item_id: ItemId, effect_id: String },
    Utility(UtilityAction),
}

impl ActionPayload {
    pub fn category(&self) -> ActionCategory {
        match self {
            Self::Ability { roll, .. } => roll.category(),
            Self::Skill { .. } => ActionCategory::Skill,
            Self::Condition { .. } => ActionCategory::Condition,
            Self::Counter { .. } => ActionCategory::Counter,
            Self::Effect { .. } => ActionCategory::Effect,
            Self::Exhaustion => ActionCategory::Exhaustion,
            Self::Item { kind, .. } => kind.category(),
            Self::MagicItem { .. } => ActionCategory::MagicItem,
            Self::Utility(_) => ActionCategory::Utility,
        }
    }

    /// The identifier half of the wire form.
    pub fn identifier(&self) -> String {
        match self {
            Self::Ability { ability, .. } => ability.clone(),
            Self::Skill { skill } => skill.clone(),
            Self::Condition { condition } => condition.clone(),
            Self::Counter {
                key,
                counter_type: None,
            } => key.clone(),
            Self::Counter {
                key,
                counter_type: Some(counter_type),
            } => format!("{}{}{}", key, COMPOUND_SEPARATOR, counter_type.as_str()),
            Self::Effect { effect_id } => effect_id.to_string(),
            Self::Exhaustion => "exhaustion".to_string(),
            Self::Item { item_id, .. } => item_id.to_string(),
            Self::MagicItem { item_id, effect_id } => {
                format!("{}{}{}", item_id, COMPOUND_SEPARATOR, effect_id)
            }
            Self::Utility(action) => action.as_str().to_string(),
        }
    }

    /// Encode to the `"category|identifier"` wire form.
    pub fn encode(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for ActionPayload {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}{}", self.category(), CATEGORY_SEPARATOR, self.identifier())
    }
}

impl FromStr for ActionPayload {
    type Err = PayloadError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (category, id) = s
            .split_once(CATEGORY_SEPARATOR)
            .ok_or_else(|| PayloadError::Malformed(s.to_string()))?;
        let category: ActionCategory = category.parse()?;
        if id.is_empty() {
            return Err(PayloadError::Malformed(s.to_string()));
        }

        let payload = match category {
            ActionCategory::Ability => ActionPayload::Ability {
                roll: AbilityRoll::Ability,
                ability: id.to_string(),
            },
            ActionCategory::Check => ActionPayload::Ability {
                roll: AbilityRoll::Check,
                ability: id.to_string(),
            },
            ActionCategory::Save => ActionPayload::Ability {
                roll: AbilityRoll::Save,
                ability: id.to_string(),
            },
            ActionCategory::Skill => ActionPayload::Skill {
                skill: id.to_string(),
            },
            ActionCategory::Condition => ActionPayload::Condition {
                condition: id.to_string(),
            },
            ActionCategory::Counter => match id.rsplit_once(COMPOUND_SEPARATOR) {
                Some((key, counter_type)) => ActionPayload::Counter {
                    key: key.to_string(),
                    counter_type: Some(CounterType::parse(counter_type).ok_or_else(|| {
                        PayloadError::UnknownIdentifier {
                            category,
                            id: id.to_string(),
                        }
                    })?),
                },
                None => ActionPayload::Counter {
                    key: id.to_string(),
                    counter_type: None,
                },
            },
            ActionCategory::Effect => ActionPayload::Effect {
                effect_id: EffectId::new(id),
            },
            ActionCategory::Exhaustion => ActionPayload::Exhaustion,
            ActionCategory::Feature => item(ItemKind::Feature, id),
            ActionCategory::Item => item(ItemKind::Item, id),
            ActionCategory::Spell => item(ItemKind::Spell, id),
            ActionCategory::Weapon => item(ItemKind::Weapon, id),
            ActionCategory::MagicItem => {
                let (item_id, effect_id) = id
                    .split_once(COMPOUND_SEPARATOR)
                    .ok_or_else(|| PayloadError::Malformed(s.to_string()))?;
                ActionPayload::MagicItem {
                    item_id: ItemId::new(item_id),
                    effect_id: effect_id.to_string(),
                }
            }
            ActionCategory::Utility => ActionPayload::Utility(UtilityAction::parse(id).ok_or_else(
                || PayloadError::UnknownIdentifier {
                    category,
                    id: id.to_string(),
                },
            )?),
        };
        Ok(payload)
    }
}

fn item(kind: ItemKind, id: &str) -> ActionPayload {
    ActionPayload::Item {
        kind,
        item_id: ItemId::new(id),
    }
}

impl Serialize for ActionPayload {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for ActionPayload {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        raw.parse().map_err(serde::de::Error::custom)
    }
}
