//! Host game-engine port traits: actor mutations, rolls, combat and rendering.

use async_trait::async_trait;
use serde_json::Value;
use tahud_domain::{ActorId, CombatState, EffectId, ItemId, MagicItem, TokenId};
use tahud_shared::{AbilityRoll, Action, ClickContext, GroupHeader, InfoField};

use super::error::PortError;

// =============================================================================
// Actor Mutations
// =============================================================================

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ActorUpdatePort: Send + Sync {
    async fn set_exhaustion(&self, actor: ActorId, level: u8) -> Result<(), PortError>;
    async fn set_inspiration(&self, actor: ActorId, inspired: bool) -> Result<(), PortError>;
    /// Write a custom counter flag; `path` is the counter key or `key.field`.
    async fn set_counter(&self, actor: ActorId, path: String, value: Value)
        -> Result<(), PortError>;
    async fn toggle_status(
        &self,
        actor: ActorId,
        token: TokenId,
        status: String,
        overlay: bool,
    ) -> Result<(), PortError>;
    async fn set_effect_disabled(
        &self,
        actor: ActorId,
        effect: EffectId,
        disabled: bool,
    ) -> Result<(), PortError>;
    async fn delete_effect(&self, actor: ActorId, effect: EffectId) -> Result<(), PortError>;
}

// =============================================================================
// Rolls and Rests
// =============================================================================

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait RollPort: Send + Sync {
    async fn roll_ability(
        &self,
        actor: ActorId,
        roll: AbilityRoll,
        ability: String,
        click: ClickContext,
    ) -> Result<(), PortError>;
    async fn roll_skill(
        &self,
        actor: ActorId,
        skill: String,
        click: ClickContext,
    ) -> Result<(), PortError>;
    async fn roll_death_save(&self, actor: ActorId, click: ClickContext) -> Result<(), PortError>;
    async fn roll_initiative(&self, actor: ActorId, create_combatants: bool)
        -> Result<(), PortError>;
    async fn short_rest(&self, actor: ActorId) -> Result<(), PortError>;
    async fn long_rest(&self, actor: ActorId) -> Result<(), PortError>;
}

// =============================================================================
// Items
// =============================================================================

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ItemPort: Send + Sync {
    async fn use_item(&self, actor: ActorId, item: ItemId, click: ClickContext)
        -> Result<(), PortError>;
    async fn render_item(&self, actor: ActorId, item: ItemId) -> Result<(), PortError>;
    async fn roll_recharge(&self, actor: ActorId, item: ItemId) -> Result<(), PortError>;
}

// =============================================================================
// Combat
// =============================================================================

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CombatPort: Send + Sync {
    /// The active encounter, if any.
    async fn combat_state(&self) -> Result<Option<CombatState>, PortError>;
    async fn next_turn(&self) -> Result<(), PortError>;
}

// =============================================================================
// Magic Items (optional collaborator)
// =============================================================================

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait MagicItemsPort: Send + Sync {
    async fn magic_items(&self, actor: ActorId) -> Result<Vec<MagicItem>, PortError>;
    async fn roll(&self, actor: ActorId, item: ItemId, effect: String) -> Result<(), PortError>;
}

// =============================================================================
// HUD Rendering
// =============================================================================

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait HudPort: Send + Sync {
    async fn add_group(&self, group: GroupHeader, parent: Option<String>) -> Result<(), PortError>;
    async fn add_group_info(&self, group: String, info: InfoField) -> Result<(), PortError>;
    async fn add_actions(&self, group: String, actions: Vec<Action>) -> Result<(), PortError>;
    /// Fire-and-forget refresh request.
    fn request_refresh(&self);
}
