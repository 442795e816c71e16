//! Host adapter that records every call as a tracing event.
//!
//! Stands in for the game engine when the binary runs outside a live table.

use async_trait::async_trait;
use serde_json::Value;
use tahud_domain::{ActorId, CombatState, EffectId, ItemId, MagicItem, TokenId};
use tahud_shared::{AbilityRoll, Action, ClickContext, GroupHeader, InfoField};

use super::ports::{
    ActorUpdatePort, CombatPort, HudPort, ItemPort, MagicItemsPort, PortError, RollPort,
};

#[derive(Debug, Clone, Default)]
pub struct TracingHost {
    combat: Option<CombatState>,
    magic_items: Vec<MagicItem>,
}

impl TracingHost {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_combat(mut self, combat: CombatState) -> Self {
        self.combat = Some(combat);
        self
    }

    pub fn with_magic_items(mut self, items: Vec<MagicItem>) -> Self {
        self.magic_items = items;
        self
    }
}

#[async_trait]
impl ActorUpdatePort for TracingHost {
    async fn set_exhaustion(&self, actor: ActorId, level: u8) -> Result<(), PortError> {
        tracing::info!(actor = %actor, level, "Set exhaustion");
        Ok(())
    }

    async fn set_inspiration(&self, actor: ActorId, inspired: bool) -> Result<(), PortError> {
        tracing::info!(actor = %actor, inspired, "Set inspiration");
        Ok(())
    }

    async fn set_counter(
        &self,
        actor: ActorId,
        path: String,
        value: Value,
    ) -> Result<(), PortError> {
        tracing::info!(actor = %actor, path = %path, value = %value, "Set counter");
        Ok(())
    }

    async fn toggle_status(
        &self,
        actor: ActorId,
        token: TokenId,
        status: String,
        overlay: bool,
    ) -> Result<(), PortError> {
        tracing::info!(actor = %actor, token = %token, status = %status, overlay, "Toggle status");
        Ok(())
    }

    async fn set_effect_disabled(
        &self,
        actor: ActorId,
        effect: EffectId,
        disabled: bool,
    ) -> Result<(), PortError> {
        tracing::info!(actor = %actor, effect = %effect, disabled, "Set effect disabled");
        Ok(())
    }

    async fn delete_effect(&self, actor: ActorId, effect: EffectId) -> Result<(), PortError> {
        tracing::info!(actor = %actor, effect = %effect, "Delete effect");
        Ok(())
    }
}

#[async_trait]
impl RollPort for TracingHost {
    async fn roll_ability(
        &self,
        actor: ActorId,
        roll: AbilityRoll,
        ability: String,
        click: ClickContext,
    ) -> Result<(), PortError> {
        tracing::info!(actor = %actor, roll = %roll.category(), ability = %ability, ?click, "Roll ability");
        Ok(())
    }

    async fn roll_skill(
        &self,
        actor: ActorId,
        skill: String,
        click: ClickContext,
    ) -> Result<(), PortError> {
        tracing::info!(actor = %actor, skill = %skill, ?click, "Roll skill");
        Ok(())
    }

    async fn roll_death_save(&self, actor: ActorId, click: ClickContext) -> Result<(), PortError> {
        tracing::info!(actor = %actor, ?click, "Roll death save");
        Ok(())
    }

    async fn roll_initiative(
        &self,
        actor: ActorId,
        create_combatants: bool,
    ) -> Result<(), PortError> {
        tracing::info!(actor = %actor, create_combatants, "Roll initiative");
        Ok(())
    }

    async fn short_rest(&self, actor: ActorId) -> Result<(), PortError> {
        tracing::info!(actor = %actor, "Short rest");
        Ok(())
    }

    async fn long_rest(&self, actor: ActorId) -> Result<(), PortError> {
        tracing::info!(actor = %actor, "Long rest");
        Ok(())
    }
}

#[async_trait]
impl ItemPort for TracingHost {
    async fn use_item(
        &self,
        actor: ActorId,
        item: ItemId,
        click: ClickContext,
    ) -> Result<(), PortError> {
        tracing::info!(actor = %actor, item = %item, ?click, "Use item");
        Ok(())
    }

    async fn render_item(&self, actor: ActorId, item: ItemId) -> Result<(), PortError> {
        tracing::info!(actor = %actor, item = %item, "Render item sheet");
        Ok(())
    }

    async fn roll_recharge(&self, actor: ActorId, item: ItemId) -> Result<(), PortError> {
        tracing::info!(actor = %actor, item = %item, "Roll recharge");
        Ok(())
    }
}

#[async_trait]
impl CombatPort for TracingHost {
    async fn combat_state(&self) -> Result<Option<CombatState>, PortError> {
        Ok(self.combat.clone())
    }

    async fn next_turn(&self) -> Result<(), PortError> {
        tracing::info!("Advance combat turn");
        Ok(())
    }
}

#[async_trait]
impl MagicItemsPort for TracingHost {
    async fn magic_items(&self, _actor: ActorId) -> Result<Vec<MagicItem>, PortError> {
        Ok(self.magic_items.clone())
    }

    async fn roll(&self, actor: ActorId, item: ItemId, effect: String) -> Result<(), PortError> {
        tracing::info!(actor = %actor, item = %item, effect = %effect, "Roll magic item");
        Ok(())
    }
}

#[async_trait]
impl HudPort for TracingHost {
    async fn add_group(&self, group: GroupHeader, parent: Option<String>) -> Result<(), PortError> {
        tracing::debug!(group = %group.id, parent = ?parent, "Add group");
        Ok(())
    }

    async fn add_group_info(&self, group: String, info: InfoField) -> Result<(), PortError> {
        tracing::debug!(group = %group, info = %info.text, "Add group info");
        Ok(())
    }

    async fn add_actions(&self, group: String, actions: Vec<Action>) -> Result<(), PortError> {
        tracing::debug!(group = %group, count = actions.len(), "Add actions");
        Ok(())
    }

    fn request_refresh(&self) {
        tracing::debug!("HUD refresh requested");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tahud_domain::Combatant;

    #[tokio::test]
    async fn returns_configured_combat() {
        let combat = CombatState {
            current_token: Some(TokenId::new("t1")),
            combatants: vec![Combatant {
                token_id: TokenId::new("t1"),
                initiative: Some(14.0),
            }],
        };
        let host = TracingHost::new().with_combat(combat.clone());

        assert_eq!(host.combat_state().await.unwrap(), Some(combat));
        assert!(TracingHost::new().combat_state().await.unwrap().is_none());
    }
}
