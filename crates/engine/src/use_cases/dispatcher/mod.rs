//! Dispatcher: routes a decoded click to exactly one host call.
//!
//! Stale targets (an item, effect or token that no longer exists) skip rather
//! than fail; only host failures surface as [`DispatchError`].

mod counters;
mod error;

use std::sync::Arc;

use tahud_domain::{
    ActorSnapshot, EffectId, HudSettings, ItemId, TokenRef, DEATH_SAVES_COUNTER,
    EXHAUSTION_COUNTER, INSPIRATION_COUNTER,
};
use tahud_shared::{AbilityRoll, ActionPayload, ClickContext, UtilityAction};

use crate::infrastructure::ports::{
    ActorUpdatePort, CombatPort, ConditionCatalogPort, HudPort, ItemPort, MagicItemsPort, RollPort,
};

pub use counters::{next_counter_write, next_exhaustion, CounterWrite};
pub use error::DispatchError;

/// One click against one actor.
#[derive(Debug, Clone, Copy)]
pub struct DispatchRequest<'a> {
    pub payload: &'a ActionPayload,
    pub actor: &'a ActorSnapshot,
    pub token: Option<&'a TokenRef>,
    pub click: ClickContext,
    /// Settings at click time
    pub settings: HudSettings,
}

/// What a dispatch did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DispatchOutcome {
    /// The actor, a roll or the encounter changed.
    Mutated,
    /// A sheet was opened; nothing changed.
    Queried,
    /// Nothing to do; the reason is for logs.
    Skipped(&'static str),
}

pub struct Dispatcher {
    actors: Arc<dyn ActorUpdatePort>,
    rolls: Arc<dyn RollPort>,
    items: Arc<dyn ItemPort>,
    combat: Arc<dyn CombatPort>,
    conditions: Arc<dyn ConditionCatalogPort>,
    magic_items: Option<Arc<dyn MagicItemsPort>>,
    hud: Arc<dyn HudPort>,
}

impl Dispatcher {
    pub fn new(
        actors: Arc<dyn ActorUpdatePort>,
        rolls: Arc<dyn RollPort>,
        items: Arc<dyn ItemPort>,
        combat: Arc<dyn CombatPort>,
        conditions: Arc<dyn ConditionCatalogPort>,
        hud: Arc<dyn HudPort>,
    ) -> Self {
        Self {
            actors,
            rolls,
            items,
            combat,
            conditions,
            magic_items: None,
            hud,
        }
    }

    pub fn with_magic_items(mut self, magic_items: Arc<dyn MagicItemsPort>) -> Self {
        self.magic_items = Some(magic_items);
        self
    }

    /// Dispatch one click. A completed dispatch requests one HUD refresh.
    pub async fn dispatch(
        &self,
        request: DispatchRequest<'_>,
    ) -> Result<DispatchOutcome, DispatchError> {
        let outcome = self.route(&request).await?;
        match outcome {
            DispatchOutcome::Skipped(reason) => {
                tracing::debug!(
                    actor = %request.actor.id,
                    payload = %request.payload,
                    reason,
                    "Dispatch skipped"
                );
            }
            DispatchOutcome::Mutated | DispatchOutcome::Queried => {
                tracing::info!(
                    actor = %request.actor.id,
                    payload = %request.payload,
                    "Dispatched action"
                );
                self.hud.request_refresh();
            }
        }
        Ok(outcome)
    }

    async fn route(&self, request: &DispatchRequest<'_>) -> Result<DispatchOutcome, DispatchError> {
        let DispatchRequest {
            actor,
            token,
            click,
            ..
        } = *request;

        match request.payload {
            ActionPayload::Ability { roll, ability } => self.roll_ability(actor, *roll, ability, click).await,
            ActionPayload::Skill { skill } => {
                if actor.skills.is_empty() {
                    return Ok(DispatchOutcome::Skipped("actor has no skills"));
                }
                self.rolls
                    .roll_skill(actor.id.clone(), skill.clone(), click)
                    .await?;
                Ok(DispatchOutcome::Mutated)
            }
            ActionPayload::Condition { condition } => {
                let Some(token) = token else {
                    return Ok(DispatchOutcome::Skipped("condition needs a token"));
                };
                self.toggle_condition(actor, token, condition, click).await
            }
            ActionPayload::Counter { key, counter_type } => match (key.as_str(), counter_type) {
                (DEATH_SAVES_COUNTER, None) => {
                    self.rolls.roll_death_save(actor.id.clone(), click).await?;
                    Ok(DispatchOutcome::Mutated)
                }
                (EXHAUSTION_COUNTER, None) => self.modify_exhaustion(actor, click).await,
                (INSPIRATION_COUNTER, None) => self.flip_inspiration(actor).await,
                (_, Some(counter_type)) => {
                    let write =
                        next_counter_write(key, *counter_type, actor.counter_value(key), click);
                    match write {
                        Some(CounterWrite { path, value }) => {
                            self.actors.set_counter(actor.id.clone(), path, value).await?;
                            Ok(DispatchOutcome::Mutated)
                        }
                        None => Ok(DispatchOutcome::Skipped("counter unchanged")),
                    }
                }
                (_, None) => Ok(DispatchOutcome::Skipped("unknown counter")),
            },
            ActionPayload::Effect { effect_id } => self.toggle_effect(actor, effect_id, click).await,
            ActionPayload::Exhaustion => self.modify_exhaustion(actor, click).await,
            ActionPayload::Item { item_id, .. } => self.use_item(request, item_id).await,
            ActionPayload::MagicItem { item_id, effect_id } => {
                let Some(magic_items) = &self.magic_items else {
                    return Ok(DispatchOutcome::Skipped("magic item tracker not installed"));
                };
                magic_items
                    .roll(actor.id.clone(), item_id.clone(), effect_id.clone())
                    .await?;
                Ok(DispatchOutcome::Mutated)
            }
            ActionPayload::Utility(utility) => self.utility(actor, token, *utility, click).await,
        }
    }

    async fn roll_ability(
        &self,
        actor: &ActorSnapshot,
        roll: AbilityRoll,
        ability: &str,
        click: ClickContext,
    ) -> Result<DispatchOutcome, DispatchError> {
        if actor.ability(ability).is_none() {
            return Ok(DispatchOutcome::Skipped("ability no longer exists"));
        }
        self.rolls
            .roll_ability(actor.id.clone(), roll, ability.to_string(), click)
            .await?;
        Ok(DispatchOutcome::Mutated)
    }

    /// A disabled effect carrying only this status is removed before toggling,
    /// otherwise the toggle would re-enable it instead of applying the status.
    async fn toggle_condition(
        &self,
        actor: &ActorSnapshot,
        token: &TokenRef,
        condition: &str,
        click: ClickContext,
    ) -> Result<DispatchOutcome, DispatchError> {
        let Some(condition) = self
            .conditions
            .conditions()
            .into_iter()
            .find(|known| known.id == condition)
        else {
            return Ok(DispatchOutcome::Skipped("unknown condition"));
        };

        if let Some(stale) = actor
            .effects
            .iter()
            .find(|effect| effect.disabled && effect.is_only_status(&condition.id))
        {
            self.actors
                .delete_effect(actor.id.clone(), stale.id.clone())
                .await?;
        }
        self.actors
            .toggle_status(
                actor.id.clone(),
                token.id.clone(),
                condition.id,
                click.is_secondary(),
            )
            .await?;
        Ok(DispatchOutcome::Mutated)
    }

    async fn toggle_effect(
        &self,
        actor: &ActorSnapshot,
        effect_id: &EffectId,
        click: ClickContext,
    ) -> Result<DispatchOutcome, DispatchError> {
        let Some(effect) = actor.effect(effect_id) else {
            return Ok(DispatchOutcome::Skipped("effect no longer exists"));
        };
        if click.is_secondary() && !effect.is_transferred() {
            self.actors
                .delete_effect(actor.id.clone(), effect.id.clone())
                .await?;
        } else {
            self.actors
                .set_effect_disabled(actor.id.clone(), effect.id.clone(), !effect.disabled)
                .await?;
        }
        Ok(DispatchOutcome::Mutated)
    }

    async fn modify_exhaustion(
        &self,
        actor: &ActorSnapshot,
        click: ClickContext,
    ) -> Result<DispatchOutcome, DispatchError> {
        match next_exhaustion(actor.attributes.exhaustion, click) {
            Some(level) => {
                self.actors.set_exhaustion(actor.id.clone(), level).await?;
                Ok(DispatchOutcome::Mutated)
            }
            None => Ok(DispatchOutcome::Skipped("exhaustion unchanged")),
        }
    }

    async fn flip_inspiration(&self, actor: &ActorSnapshot) -> Result<DispatchOutcome, DispatchError> {
        self.actors
            .set_inspiration(actor.id.clone(), !actor.attributes.inspiration)
            .await?;
        Ok(DispatchOutcome::Mutated)
    }

    async fn use_item(
        &self,
        request: &DispatchRequest<'_>,
        item_id: &ItemId,
    ) -> Result<DispatchOutcome, DispatchError> {
        let actor = request.actor;
        let Some(item) = actor.item(item_id) else {
            return Ok(DispatchOutcome::Skipped("item no longer exists"));
        };

        if request.settings.renders_item(request.click.is_secondary()) {
            self.items
                .render_item(actor.id.clone(), item.id.clone())
                .await?;
            return Ok(DispatchOutcome::Queried);
        }
        if item.needs_recharge() {
            self.items
                .roll_recharge(actor.id.clone(), item.id.clone())
                .await?;
        } else {
            self.items
                .use_item(actor.id.clone(), item.id.clone(), request.click)
                .await?;
        }
        Ok(DispatchOutcome::Mutated)
    }

    async fn utility(
        &self,
        actor: &ActorSnapshot,
        token: Option<&TokenRef>,
        utility: UtilityAction,
        click: ClickContext,
    ) -> Result<DispatchOutcome, DispatchError> {
        match utility {
            UtilityAction::DeathSave => {
                self.rolls.roll_death_save(actor.id.clone(), click).await?;
            }
            UtilityAction::EndTurn => {
                let Some(token) = token else {
                    return Ok(DispatchOutcome::Skipped("end turn needs a token"));
                };
                let holds_turn = self
                    .combat
                    .combat_state()
                    .await?
                    .is_some_and(|combat| combat.is_current_turn(&token.id));
                if !holds_turn {
                    return Ok(DispatchOutcome::Skipped("not this token's turn"));
                }
                self.combat.next_turn().await?;
            }
            UtilityAction::Initiative => {
                self.rolls.roll_initiative(actor.id.clone(), true).await?;
            }
            UtilityAction::Inspiration => return self.flip_inspiration(actor).await,
            UtilityAction::LongRest => self.rolls.long_rest(actor.id.clone()).await?,
            UtilityAction::ShortRest => self.rolls.short_rest(actor.id.clone()).await?,
        }
        Ok(DispatchOutcome::Mutated)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::conditions::StaticConditions;
    use crate::infrastructure::ports::{
        MockActorUpdatePort, MockCombatPort, MockHudPort, MockItemPort, MockRollPort, PortError,
    };
    use crate::test_fixtures::actors;
    use mockall::predicate::*;
    use serde_json::json;
    use tahud_domain::{
        ActiveEffect, ActorId, CombatState, CounterType, EffectOrigin, Item, ItemClickBehavior,
        ItemType, RecoveryPeriod, TokenId, Uses,
    };
    use tahud_shared::ItemKind;

    struct Ports {
        actors: MockActorUpdatePort,
        rolls: MockRollPort,
        items: MockItemPort,
        combat: MockCombatPort,
        hud: MockHudPort,
    }

    impl Ports {
        fn new() -> Self {
            Self {
                actors: MockActorUpdatePort::new(),
                rolls: MockRollPort::new(),
                items: MockItemPort::new(),
                combat: MockCombatPort::new(),
                hud: MockHudPort::new(),
            }
        }

        fn expect_refresh(mut self, times: usize) -> Self {
            self.hud.expect_request_refresh().times(times).return_const(());
            self
        }

        fn build(self) -> Dispatcher {
            Dispatcher::new(
                Arc::new(self.actors),
                Arc::new(self.rolls),
                Arc::new(self.items),
                Arc::new(self.combat),
                Arc::new(StaticConditions::default()),
                Arc::new(self.hud),
            )
        }
    }

    fn request<'a>(
        payload: &'a ActionPayload,
        actor: &'a ActorSnapshot,
        token: Option<&'a TokenRef>,
        click: ClickContext,
    ) -> DispatchRequest<'a> {
        DispatchRequest {
            payload,
            actor,
            token,
            click,
            settings: HudSettings::default(),
        }
    }

    fn with_item(actor: &mut ActorSnapshot) -> ActionPayload {
        actor
            .items
            .push(Item::new("fire-bolt", "Fire Bolt", ItemType::Spell));
        ActionPayload::Item {
            kind: ItemKind::Spell,
            item_id: ItemId::new("fire-bolt"),
        }
    }

    #[tokio::test]
    async fn exhaustion_at_zero_does_not_write_on_decrement() {
        let dispatcher = Ports::new().expect_refresh(0).build();
        let actor = actors::fighter();
        let payload = ActionPayload::Exhaustion;

        let outcome = dispatcher
            .dispatch(request(&payload, &actor, None, ClickContext::secondary()))
            .await
            .unwrap();
        assert_eq!(outcome, DispatchOutcome::Skipped("exhaustion unchanged"));
    }

    #[tokio::test]
    async fn exhaustion_increments_on_primary_click() {
        let mut ports = Ports::new().expect_refresh(1);
        ports
            .actors
            .expect_set_exhaustion()
            .with(eq(ActorId::new("fighter")), eq(3u8))
            .times(1)
            .returning(|_, _| Ok(()));
        let dispatcher = ports.build();
        let mut actor = actors::fighter();
        actor.attributes.exhaustion = 2;
        let payload = ActionPayload::Counter {
            key: EXHAUSTION_COUNTER.to_string(),
            counter_type: None,
        };

        let outcome = dispatcher
            .dispatch(request(&payload, &actor, None, ClickContext::primary()))
            .await
            .unwrap();
        assert_eq!(outcome, DispatchOutcome::Mutated);
    }

    #[tokio::test]
    async fn ctrl_click_writes_failure_only() {
        let mut ports = Ports::new().expect_refresh(1);
        ports
            .actors
            .expect_set_counter()
            .with(
                eq(ActorId::new("fighter")),
                eq("trial.failure".to_string()),
                eq(json!(1)),
            )
            .times(1)
            .returning(|_, _, _| Ok(()));
        let dispatcher = ports.build();
        let mut actor = actors::fighter();
        actor
            .counters
            .insert("trial".into(), json!({ "success": 2, "failure": 0 }));
        let payload = ActionPayload::Counter {
            key: "trial".into(),
            counter_type: Some(CounterType::SuccessFailure),
        };

        dispatcher
            .dispatch(request(&payload, &actor, None, ClickContext::primary().with_ctrl()))
            .await
            .unwrap();
    }

    #[tokio::test]
    async fn stale_item_is_skipped() {
        let dispatcher = Ports::new().expect_refresh(0).build();
        let actor = actors::fighter();
        let payload = ActionPayload::Item {
            kind: ItemKind::Weapon,
            item_id: ItemId::new("gone"),
        };

        let outcome = dispatcher
            .dispatch(request(&payload, &actor, None, ClickContext::primary()))
            .await
            .unwrap();
        assert_eq!(outcome, DispatchOutcome::Skipped("item no longer exists"));
    }

    #[tokio::test]
    async fn depleted_item_rolls_recharge() {
        let mut ports = Ports::new().expect_refresh(1);
        ports
            .items
            .expect_roll_recharge()
            .with(eq(ActorId::new("fighter")), eq(ItemId::new("breath")))
            .times(1)
            .returning(|_, _| Ok(()));
        let dispatcher = ports.build();
        let mut actor = actors::fighter();
        actor.items.push(
            Item::new("breath", "Breath Weapon", ItemType::Feat).with_uses(Uses {
                max: Some(1),
                spent: 1,
                recovery: Some(RecoveryPeriod::Recharge),
            }),
        );
        let payload = ActionPayload::Item {
            kind: ItemKind::Feature,
            item_id: ItemId::new("breath"),
        };

        dispatcher
            .dispatch(request(&payload, &actor, None, ClickContext::primary()))
            .await
            .unwrap();
    }

    #[tokio::test]
    async fn condition_removes_disabled_effect_first() {
        let mut ports = Ports::new().expect_refresh(1);
        let mut seq = mockall::Sequence::new();
        ports
            .actors
            .expect_delete_effect()
            .with(eq(ActorId::new("fighter")), eq(EffectId::new("e1")))
            .times(1)
            .in_sequence(&mut seq)
            .returning(|_, _| Ok(()));
        ports
            .actors
            .expect_toggle_status()
            .with(
                eq(ActorId::new("fighter")),
                eq(TokenId::new("t1")),
                eq("prone".to_string()),
                eq(true),
            )
            .times(1)
            .in_sequence(&mut seq)
            .returning(|_, _, _, _| Ok(()));
        let dispatcher = ports.build();
        let mut actor = actors::fighter();
        actor.effects.push(
            ActiveEffect::new("e1", "Prone")
                .with_status("prone")
                .with_disabled(true),
        );
        let token = TokenRef::new("t1", "fighter");
        let payload = ActionPayload::Condition {
            condition: "prone".into(),
        };

        dispatcher
            .dispatch(request(&payload, &actor, Some(&token), ClickContext::secondary()))
            .await
            .unwrap();
    }

    #[tokio::test]
    async fn end_turn_requires_current_turn() {
        let mut ports = Ports::new().expect_refresh(0);
        ports.combat.expect_combat_state().returning(|| {
            Ok(Some(CombatState {
                current_token: Some(TokenId::new("other")),
                combatants: Vec::new(),
            }))
        });
        ports.combat.expect_next_turn().never();
        let dispatcher = ports.build();
        let actor = actors::fighter();
        let token = TokenRef::new("t1", "fighter");
        let payload = ActionPayload::Utility(UtilityAction::EndTurn);

        let outcome = dispatcher
            .dispatch(request(&payload, &actor, Some(&token), ClickContext::primary()))
            .await
            .unwrap();
        assert_eq!(outcome, DispatchOutcome::Skipped("not this token's turn"));
    }

    #[tokio::test]
    async fn magic_item_without_tracker_is_skipped() {
        let dispatcher = Ports::new().expect_refresh(0).build();
        let actor = actors::fighter();
        let payload = ActionPayload::MagicItem {
            item_id: ItemId::new("wand"),
            effect_id: "mm".into(),
        };

        let outcome = dispatcher
            .dispatch(request(&payload, &actor, None, ClickContext::primary()))
            .await
            .unwrap();
        assert!(matches!(outcome, DispatchOutcome::Skipped(_)));
    }

    #[tokio::test]
    async fn host_failure_surfaces_as_error() {
        let mut ports = Ports::new().expect_refresh(0);
        ports
            .rolls
            .expect_long_rest()
            .returning(|_| Err(PortError::rejected("long_rest", "actor locked")));
        let dispatcher = ports.build();
        let actor = actors::fighter();
        let payload = ActionPayload::Utility(UtilityAction::LongRest);

        let result = dispatcher
            .dispatch(request(&payload, &actor, None, ClickContext::primary()))
            .await;
        assert!(matches!(result, Err(DispatchError::Port(_))));
    }

    #[tokio::test]
    async fn secondary_click_deletes_actor_effect() {
        let mut ports = Ports::new().expect_refresh(1);
        ports
            .actors
            .expect_delete_effect()
            .with(eq(ActorId::new("fighter")), eq(EffectId::new("bless")))
            .times(1)
            .returning(|_, _| Ok(()));
        ports.actors.expect_set_effect_disabled().never();
        let dispatcher = ports.build();
        let mut actor = actors::fighter();
        actor.effects.push(ActiveEffect::new("bless", "Bless"));
        let payload = ActionPayload::Effect {
            effect_id: EffectId::new("bless"),
        };

        dispatcher
            .dispatch(request(&payload, &actor, None, ClickContext::secondary()))
            .await
            .unwrap();
    }

    #[tokio::test]
    async fn transferred_effect_is_toggled_not_deleted() {
        let mut ports = Ports::new().expect_refresh(2);
        ports.actors.expect_delete_effect().never();
        ports
            .actors
            .expect_set_effect_disabled()
            .with(
                eq(ActorId::new("fighter")),
                eq(EffectId::new("ring")),
                eq(true),
            )
            .times(2)
            .returning(|_, _, _| Ok(()));
        let dispatcher = ports.build();
        let mut actor = actors::fighter();
        actor.effects.push(
            ActiveEffect::new("ring", "Ring of Protection").with_origin(EffectOrigin::Item {
                item_id: ItemId::new("ring"),
                identified: true,
            }),
        );
        let payload = ActionPayload::Effect {
            effect_id: EffectId::new("ring"),
        };

        for click in [ClickContext::primary(), ClickContext::secondary()] {
            dispatcher
                .dispatch(request(&payload, &actor, None, click))
                .await
                .unwrap();
        }
    }

    #[tokio::test]
    async fn secondary_click_uses_item_by_default() {
        let mut ports = Ports::new().expect_refresh(1);
        ports.items.expect_render_item().never();
        ports
            .items
            .expect_use_item()
            .with(
                eq(ActorId::new("fighter")),
                eq(ItemId::new("fire-bolt")),
                eq(ClickContext::secondary()),
            )
            .times(1)
            .returning(|_, _, _| Ok(()));
        let dispatcher = ports.build();
        let mut actor = actors::fighter();
        let payload = with_item(&mut actor);

        let outcome = dispatcher
            .dispatch(request(&payload, &actor, None, ClickContext::secondary()))
            .await
            .unwrap();
        assert_eq!(outcome, DispatchOutcome::Mutated);
    }

    #[tokio::test]
    async fn render_mode_opens_the_sheet() {
        let mut ports = Ports::new().expect_refresh(1);
        ports.items.expect_use_item().never();
        ports
            .items
            .expect_render_item()
            .with(eq(ActorId::new("fighter")), eq(ItemId::new("fire-bolt")))
            .times(1)
            .returning(|_, _| Ok(()));
        let dispatcher = ports.build();
        let mut actor = actors::fighter();
        let payload = with_item(&mut actor);
        let mut click = request(&payload, &actor, None, ClickContext::primary());
        click.settings.item_click_behavior = ItemClickBehavior::Render;

        let outcome = dispatcher.dispatch(click).await.unwrap();
        assert_eq!(outcome, DispatchOutcome::Queried);
    }

    #[tokio::test]
    async fn right_click_renders_when_enabled() {
        let mut ports = Ports::new().expect_refresh(1);
        ports.items.expect_use_item().never();
        ports
            .items
            .expect_render_item()
            .times(1)
            .returning(|_, _| Ok(()));
        let dispatcher = ports.build();
        let mut actor = actors::fighter();
        let payload = with_item(&mut actor);
        let mut click = request(&payload, &actor, None, ClickContext::secondary());
        click.settings.render_item_on_right_click = true;

        dispatcher.dispatch(click).await.unwrap();
    }

    #[tokio::test]
    async fn inspiration_flips() {
        let mut ports = Ports::new().expect_refresh(2);
        ports
            .actors
            .expect_set_inspiration()
            .with(eq(ActorId::new("fighter")), eq(false))
            .times(2)
            .returning(|_, _| Ok(()));
        let dispatcher = ports.build();
        let mut actor = actors::fighter();
        actor.attributes.inspiration = true;

        for payload in [
            ActionPayload::Utility(UtilityAction::Inspiration),
            ActionPayload::Counter {
                key: INSPIRATION_COUNTER.to_string(),
                counter_type: None,
            },
        ] {
            dispatcher
                .dispatch(request(&payload, &actor, None, ClickContext::primary()))
                .await
                .unwrap();
        }
    }

    #[tokio::test]
    async fn initiative_creates_combatants() {
        let mut ports = Ports::new().expect_refresh(1);
        ports
            .rolls
            .expect_roll_initiative()
            .with(eq(ActorId::new("fighter")), eq(true))
            .times(1)
            .returning(|_, _| Ok(()));
        let dispatcher = ports.build();
        let actor = actors::fighter();
        let payload = ActionPayload::Utility(UtilityAction::Initiative);

        dispatcher
            .dispatch(request(&payload, &actor, None, ClickContext::primary()))
            .await
            .unwrap();
    }

    #[tokio::test]
    async fn rests_route_to_their_rolls() {
        let mut ports = Ports::new().expect_refresh(2);
        ports
            .rolls
            .expect_short_rest()
            .with(eq(ActorId::new("fighter")))
            .times(1)
            .returning(|_| Ok(()));
        ports
            .rolls
            .expect_long_rest()
            .with(eq(ActorId::new("fighter")))
            .times(1)
            .returning(|_| Ok(()));
        let dispatcher = ports.build();
        let actor = actors::fighter();

        for utility in [UtilityAction::ShortRest, UtilityAction::LongRest] {
            let payload = ActionPayload::Utility(utility);
            dispatcher
                .dispatch(request(&payload, &actor, None, ClickContext::primary()))
                .await
                .unwrap();
        }
    }

    #[tokio::test]
    async fn unknown_condition_is_skipped() {
        let mut ports = Ports::new().expect_refresh(0);
        ports.actors.expect_toggle_status().never();
        let dispatcher = ports.build();
        let actor = actors::fighter();
        let token = TokenRef::new("t1", "fighter");
        let payload = ActionPayload::Condition {
            condition: "petrified-by-gaze".into(),
        };

        let outcome = dispatcher
            .dispatch(request(&payload, &actor, Some(&token), ClickContext::primary()))
            .await
            .unwrap();
        assert_eq!(outcome, DispatchOutcome::Skipped("unknown condition"));
    }

    #[tokio::test]
    async fn missing_ability_is_skipped() {
        let mut ports = Ports::new().expect_refresh(0);
        ports.rolls.expect_roll_ability().never();
        let dispatcher = ports.build();
        let actor = actors::fighter();
        let payload = ActionPayload::Ability {
            roll: AbilityRoll::Save,
            ability: "san".into(),
        };

        let outcome = dispatcher
            .dispatch(request(&payload, &actor, None, ClickContext::primary()))
            .await
            .unwrap();
        assert_eq!(outcome, DispatchOutcome::Skipped("ability no longer exists"));
    }
}
