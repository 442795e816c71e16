//! Owned items: inventory, features, and spells share one document shape.

use serde::{Deserialize, Serialize};

use super::spell::SpellDetails;
use crate::error::DomainError;
use crate::ids::ItemId;
use crate::value_objects::ActivationType;

/// Host item document type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ItemType {
    Weapon,
    Equipment,
    Consumable,
    Tool,
    Loot,
    #[serde(alias = "backpack")]
    Container,
    Feat,
    Spell,
    #[serde(other)]
    Other,
}

impl ItemType {
    /// Types that live in the inventory and carry a quantity.
    pub fn is_physical(&self) -> bool {
        matches!(
            self,
            Self::Weapon | Self::Equipment | Self::Consumable | Self::Tool | Self::Loot | Self::Container
        )
    }
}

/// When limited uses come back.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RecoveryPeriod {
    Lr,
    Sr,
    Day,
    Dawn,
    Dusk,
    Charges,
    Recharge,
    Turn,
    Round,
    #[serde(other)]
    Other,
}

impl RecoveryPeriod {
    pub fn label_key(&self) -> Option<&'static str> {
        match self {
            Self::Lr => Some("DND5E.UsesPeriods.Lr"),
            Self::Sr => Some("DND5E.UsesPeriods.Sr"),
            Self::Day => Some("DND5E.UsesPeriods.Day"),
            Self::Dawn => Some("DND5E.UsesPeriods.Dawn"),
            Self::Dusk => Some("DND5E.UsesPeriods.Dusk"),
            Self::Charges => Some("DND5E.UsesPeriods.Charges"),
            Self::Recharge => Some("DND5E.UsesPeriods.Recharge"),
            Self::Turn => Some("DND5E.UsesPeriods.Turn"),
            Self::Round => Some("DND5E.UsesPeriods.Round"),
            Self::Other => None,
        }
    }
}

/// Limited uses / charges.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Uses {
    pub max: Option<u32>,
    pub spent: u32,
    pub recovery: Option<RecoveryPeriod>,
}

impl Uses {
    /// Remaining uses out of the maximum.
    pub fn value(&self) -> u32 {
        self.max.unwrap_or(0).saturating_sub(self.spent)
    }

    pub fn has_max(&self) -> bool {
        self.max.is_some_and(|max| max > 0)
    }

    /// Recharge-style uses that are spent out need a recharge roll before use.
    pub fn needs_recharge(&self) -> bool {
        self.recovery == Some(RecoveryPeriod::Recharge) && self.value() == 0
    }
}

/// What an item's first activity consumes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ConsumptionKind {
    /// An actor attribute path such as `resources.primary.value`
    Attribute,
    /// Uses of another item
    #[serde(alias = "charges")]
    ItemUses,
    /// Quantity of another item
    Material,
    HitDice,
    SpellSlots,
    ActivityUses,
    #[serde(other)]
    Other,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConsumptionTarget {
    #[serde(rename = "type")]
    pub kind: ConsumptionKind,
    pub target: String,
    #[serde(default = "default_amount")]
    pub value: u32,
}

fn default_amount() -> u32 {
    1
}

/// Feature category and subtype, e.g. `class` / `maneuver`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FeatureType {
    #[serde(default)]
    pub value: String,
    #[serde(default)]
    pub subtype: Option<String>,
}

/// One owned item as materialized from the live actor.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Item {
    pub id: ItemId,
    pub name: String,
    #[serde(rename = "type")]
    pub item_type: ItemType,
    #[serde(default)]
    pub img: Option<String>,
    /// Host document reference used for tooltips
    #[serde(default)]
    pub uuid: Option<String>,
    #[serde(default)]
    pub quantity: Option<u32>,
    #[serde(default)]
    pub equipped: bool,
    /// Activation timing of the first activity
    #[serde(default)]
    pub activation: Option<ActivationType>,
    #[serde(default)]
    pub uses: Option<Uses>,
    #[serde(default)]
    pub consumption: Option<ConsumptionTarget>,
    #[serde(default)]
    pub feature: Option<FeatureType>,
    #[serde(default)]
    pub spell: Option<SpellDetails>,
}

impl Item {
    pub fn new(id: impl Into<ItemId>, name: impl Into<String>, item_type: ItemType) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            item_type,
            img: None,
            uuid: None,
            quantity: if item_type.is_physical() { Some(1) } else { None },
            equipped: false,
            activation: None,
            uses: None,
            consumption: None,
            feature: None,
            spell: None,
        }
    }

    pub fn with_quantity(mut self, quantity: u32) -> Self {
        self.quantity = Some(quantity);
        self
    }

    pub fn with_equipped(mut self, equipped: bool) -> Self {
        self.equipped = equipped;
        self
    }

    pub fn with_activation(mut self, activation: ActivationType) -> Self {
        self.activation = Some(activation);
        self
    }

    pub fn with_uses(mut self, uses: Uses) -> Self {
        self.uses = Some(uses);
        self
    }

    pub fn with_consumption(mut self, consumption: ConsumptionTarget) -> Self {
        self.consumption = Some(consumption);
        self
    }

    pub fn with_feature(mut self, value: impl Into<String>, subtype: Option<&str>) -> Self {
        self.feature = Some(FeatureType {
            value: value.into(),
            subtype: subtype.map(str::to_string),
        });
        self
    }

    pub fn with_spell(mut self, spell: SpellDetails) -> Self {
        self.spell = Some(spell);
        self
    }

    pub fn quantity(&self) -> u32 {
        self.quantity.unwrap_or(0)
    }

    /// Carries a recognized activation timing.
    pub fn has_activation(&self) -> bool {
        self.activation.is_some_and(|a| a.is_recognized())
    }

    pub fn needs_recharge(&self) -> bool {
        self.uses.is_some_and(|uses| uses.needs_recharge())
    }

    /// Spell attributes, or a malformed-entry error when a spell lacks them.
    pub fn spell_details(&self) -> Result<&SpellDetails, DomainError> {
        let details = self
            .spell
            .as_ref()
            .ok_or_else(|| DomainError::malformed("spell", self.id.as_str(), "missing spell details"))?;
        details
            .validate()
            .map_err(|e| DomainError::malformed("spell", self.id.as_str(), e.to_string()))?;
        Ok(details)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn uses_value_is_max_minus_spent() {
        let uses = Uses {
            max: Some(3),
            spent: 1,
            recovery: Some(RecoveryPeriod::Lr),
        };
        assert_eq!(uses.value(), 2);
        assert!(!uses.needs_recharge());
    }

    #[test]
    fn spent_recharge_needs_recharge() {
        let uses = Uses {
            max: Some(1),
            spent: 1,
            recovery: Some(RecoveryPeriod::Recharge),
        };
        assert!(uses.needs_recharge());
    }

    #[test]
    fn spell_without_details_is_malformed() {
        let item = Item::new("s1", "Fireball", ItemType::Spell);
        assert!(matches!(
            item.spell_details(),
            Err(DomainError::Malformed { entity_type: "spell", .. })
        ));
    }

    #[test]
    fn item_deserializes_from_host_shape() {
        let item: Item = serde_json::from_str(
            r#"{
                "id": "abc", "name": "Longsword", "type": "weapon",
                "quantity": 1, "equipped": true, "activation": "action",
                "consumption": { "type": "charges", "target": "xyz" }
            }"#,
        )
        .unwrap();
        assert_eq!(item.item_type, ItemType::Weapon);
        assert!(item.has_activation());
        assert_eq!(item.consumption.unwrap().kind, ConsumptionKind::ItemUses);
    }
}
