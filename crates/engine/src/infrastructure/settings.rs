//! HUD settings loaded through the key -> value settings port.

use serde::de::DeserializeOwned;
use serde_json::{Map, Value};
use tahud_domain::{setting_keys as keys, HudSettings};

use crate::infrastructure::ports::SettingsPort;

/// In-memory settings store backed by a JSON object.
#[derive(Debug, Clone, Default)]
pub struct JsonSettings {
    values: Map<String, Value>,
}

impl JsonSettings {
    pub fn new(values: Map<String, Value>) -> Self {
        Self { values }
    }

    /// Parse a JSON object of `settingKey: value` pairs.
    pub fn from_json(raw: &str) -> Result<Self, serde_json::Error> {
        Ok(Self::new(serde_json::from_str(raw)?))
    }
}

impl SettingsPort for JsonSettings {
    fn get(&self, key: &str) -> Option<Value> {
        self.values.get(key).cloned()
    }
}

/// Read every HUD setting, falling back to the default for missing or mistyped keys.
pub fn load_hud_settings(port: &dyn SettingsPort) -> HudSettings {
    let defaults = HudSettings::default();
    HudSettings {
        abbreviate_skills: read(port, keys::ABBREVIATE_SKILLS, defaults.abbreviate_skills),
        display_spell_info: read(port, keys::DISPLAY_SPELL_INFO, defaults.display_spell_info),
        show_items_without_activation_costs: read(
            port,
            keys::SHOW_ITEMS_WITHOUT_ACTIVATION_COSTS,
            defaults.show_items_without_activation_costs,
        ),
        show_uncharged_items: read(port, keys::SHOW_UNCHARGED_ITEMS, defaults.show_uncharged_items),
        show_unequipped_items: read(
            port,
            keys::SHOW_UNEQUIPPED_ITEMS,
            defaults.show_unequipped_items,
        ),
        show_unequipped_items_npcs: read(
            port,
            keys::SHOW_UNEQUIPPED_ITEMS_NPCS,
            defaults.show_unequipped_items_npcs,
        ),
        show_unprepared_spells: read(
            port,
            keys::SHOW_UNPREPARED_SPELLS,
            defaults.show_unprepared_spells,
        ),
        show_slow_actions: read(port, keys::SHOW_SLOW_ACTIONS, defaults.show_slow_actions),
        tooltips: read(port, keys::TOOLTIPS, defaults.tooltips),
        item_click_behavior: read(port, keys::ITEM_CLICK_BEHAVIOR, defaults.item_click_behavior),
        render_item_on_right_click: read(
            port,
            keys::RENDER_ITEM_ON_RIGHT_CLICK,
            defaults.render_item_on_right_click,
        ),
    }
}

fn read<T: DeserializeOwned>(port: &dyn SettingsPort, key: &str, default: T) -> T {
    let Some(value) = port.get(key) else {
        tracing::debug!(key, "Setting not found, using default");
        return default;
    };
    serde_json::from_value(value).unwrap_or_else(|e| {
        tracing::debug!(key, error = %e, "Setting has unexpected type, using default");
        default
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::ports::MockSettingsPort;
    use serde_json::json;
    use tahud_domain::{ItemClickBehavior, TooltipMode};

    #[test]
    fn missing_keys_fall_back_to_defaults() {
        let settings = load_hud_settings(&JsonSettings::default());
        assert_eq!(settings, HudSettings::default());
    }

    #[test]
    fn reads_known_keys_from_json() {
        let port = JsonSettings::from_json(
            r#"{ "showUnchargedItems": true, "tooltips": "none", "itemClickBehavior": "render", "renderItemOnRightClick": true }"#,
        )
        .unwrap();
        let settings = load_hud_settings(&port);
        assert!(settings.show_uncharged_items);
        assert_eq!(settings.tooltips, TooltipMode::None);
        assert_eq!(settings.item_click_behavior, ItemClickBehavior::Render);
        assert!(settings.render_item_on_right_click);
    }

    #[test]
    fn mistyped_value_uses_default() {
        let mut port = MockSettingsPort::new();
        port.expect_get().returning(|key| match key {
            "showSlowActions" => Some(json!("sometimes")),
            "abbreviateSkills" => Some(json!(true)),
            _ => None,
        });

        let settings = load_hud_settings(&port);
        assert!(settings.show_slow_actions);
        assert!(settings.abbreviate_skills);
    }
}
