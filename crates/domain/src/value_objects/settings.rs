//! HUD settings value object
//!
//! Settings arrive from the host as a key -> value store. Keys are the host's
//! camelCase setting names, so the serde representation IS the lookup contract.

use serde::{Deserialize, Serialize};

use crate::entities::ActorKind;

/// How much tooltip data each action carries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum TooltipMode {
    #[default]
    Full,
    NameOnly,
    None,
}

/// What clicking an item, feature, or spell does.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ItemClickBehavior {
    /// Invoke the entity's use workflow.
    #[default]
    Use,
    /// Open the entity's detail sheet.
    Render,
}

/// All configurable HUD settings
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct HudSettings {
    /// Shorten ability and skill names to their abbreviations
    pub abbreviate_skills: bool,
    /// Add component/ritual/concentration annotations to spells
    pub display_spell_info: bool,
    pub show_items_without_activation_costs: bool,
    pub show_uncharged_items: bool,
    pub show_unequipped_items: bool,
    /// Replaces `show_unequipped_items` for NPCs when that one is off
    pub show_unequipped_items_npcs: bool,
    pub show_unprepared_spells: bool,
    /// Include minute/hour/day activation timings
    pub show_slow_actions: bool,
    pub tooltips: TooltipMode,
    pub item_click_behavior: ItemClickBehavior,
    /// A secondary click opens the sheet even when clicks use the item
    pub render_item_on_right_click: bool,
}

impl Default for HudSettings {
    fn default() -> Self {
        Self {
            abbreviate_skills: false,
            display_spell_info: true,
            show_items_without_activation_costs: false,
            show_uncharged_items: false,
            show_unequipped_items: false,
            show_unequipped_items_npcs: true,
            show_unprepared_spells: true,
            show_slow_actions: true,
            tooltips: TooltipMode::Full,
            item_click_behavior: ItemClickBehavior::Use,
            render_item_on_right_click: false,
        }
    }
}

/// Setting keys as the host names them.
pub mod keys {
    pub const ABBREVIATE_SKILLS: &str = "abbreviateSkills";
    pub const DISPLAY_SPELL_INFO: &str = "displaySpellInfo";
    pub const SHOW_ITEMS_WITHOUT_ACTIVATION_COSTS: &str = "showItemsWithoutActivationCosts";
    pub const SHOW_UNCHARGED_ITEMS: &str = "showUnchargedItems";
    pub const SHOW_UNEQUIPPED_ITEMS: &str = "showUnequippedItems";
    pub const SHOW_UNEQUIPPED_ITEMS_NPCS: &str = "showUnequippedItemsNpcs";
    pub const SHOW_UNPREPARED_SPELLS: &str = "showUnpreparedSpells";
    pub const SHOW_SLOW_ACTIONS: &str = "showSlowActions";
    pub const TOOLTIPS: &str = "tooltips";
    pub const ITEM_CLICK_BEHAVIOR: &str = "itemClickBehavior";
    pub const RENDER_ITEM_ON_RIGHT_CLICK: &str = "renderItemOnRightClick";
}

impl HudSettings {
    /// Settings as they apply to one actor kind.
    ///
    /// NPCs fall back to the NPC-specific unequipped-items switch when the
    /// general one is off.
    pub fn effective_for(&self, kind: Option<ActorKind>) -> HudSettings {
        let mut effective = *self;
        if kind == Some(ActorKind::Npc) && !self.show_unequipped_items {
            effective.show_unequipped_items = self.show_unequipped_items_npcs;
        }
        effective
    }

    /// Whether an item click opens the sheet instead of using the item.
    pub fn renders_item(&self, secondary: bool) -> bool {
        self.item_click_behavior == ItemClickBehavior::Render
            || (secondary && self.render_item_on_right_click)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn npc_override_applies_only_to_npcs() {
        let settings = HudSettings {
            show_unequipped_items: false,
            show_unequipped_items_npcs: true,
            ..Default::default()
        };
        assert!(settings.effective_for(Some(ActorKind::Npc)).show_unequipped_items);
        assert!(!settings.effective_for(Some(ActorKind::Character)).show_unequipped_items);
        assert!(!settings.effective_for(None).show_unequipped_items);
    }

    #[test]
    fn right_click_renders_only_when_enabled() {
        let settings = HudSettings::default();
        assert!(!settings.renders_item(true));

        let settings = HudSettings {
            render_item_on_right_click: true,
            ..Default::default()
        };
        assert!(settings.renders_item(true));
        assert!(!settings.renders_item(false));

        let settings = HudSettings {
            item_click_behavior: ItemClickBehavior::Render,
            ..Default::default()
        };
        assert!(settings.renders_item(false));
    }

    #[test]
    fn partial_json_fills_defaults() {
        let settings: HudSettings =
            serde_json::from_str(r#"{ "showSlowActions": false, "tooltips": "nameOnly" }"#)
                .unwrap();
        assert!(!settings.show_slow_actions);
        assert_eq!(settings.tooltips, TooltipMode::NameOnly);
        assert!(settings.display_spell_info);
    }
}
