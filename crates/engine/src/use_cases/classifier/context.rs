//! The immutable input threaded through every classification stage.

use tahud_domain::{
    dnd5e, ActorKind, ActorSnapshot, CombatState, ConditionDefinition, CounterDefinition,
    HudSettings, Item, ItemType, MagicItem, Selection, TokenId, TokenRef,
};

use crate::infrastructure::ports::Localizer;

/// Everything a classification pass reads. Built once per refresh.
pub struct ClassificationContext<'a> {
    /// The single selected actor, if exactly one is selected
    pub actor: Option<&'a ActorSnapshot>,
    pub token: Option<&'a TokenRef>,
    /// Every actor in the selection; empty for an unsupported mix
    pub actors: Vec<&'a ActorSnapshot>,
    pub tokens: Vec<&'a TokenRef>,
    /// The actor's items, slow ones discarded, ordered by name then id
    pub items: Vec<&'a Item>,
    /// Settings with the NPC override applied
    pub settings: HudSettings,
    pub is_gm: bool,
    pub conditions: Vec<ConditionDefinition>,
    /// `None` when no counter configuration exists for this actor type
    pub custom_counters: Option<Vec<CounterDefinition>>,
    pub combat: Option<CombatState>,
    pub magic_items: Vec<MagicItem>,
    localizer: &'a dyn Localizer,
}

impl<'a> ClassificationContext<'a> {
    pub fn from_selection(
        selection: &'a Selection,
        settings: &HudSettings,
        localizer: &'a dyn Localizer,
    ) -> Self {
        let actor = selection.actor.as_ref();
        let (actors, tokens) = match actor {
            Some(actor) => (vec![actor], selection.token.iter().collect()),
            None if selection
                .controlled
                .iter()
                .all(|controlled| controlled.actor.kind.is_creature()) =>
            {
                (
                    selection.controlled.iter().map(|c| &c.actor).collect(),
                    selection.controlled.iter().map(|c| &c.token).collect(),
                )
            }
            None => {
                tracing::debug!("Selection mixes unsupported actor types, treating as empty");
                (Vec::new(), Vec::new())
            }
        };

        let settings = settings.effective_for(actor.map(|a| a.kind));
        let items = actor
            .map(|actor| sorted_items(actor, settings.show_slow_actions))
            .unwrap_or_default();

        Self {
            actor,
            token: selection.token.as_ref(),
            actors,
            tokens,
            items,
            settings,
            is_gm: false,
            conditions: dnd5e::default_conditions(),
            custom_counters: None,
            combat: None,
            magic_items: Vec::new(),
            localizer,
        }
    }

    pub fn with_gm(mut self, is_gm: bool) -> Self {
        self.is_gm = is_gm;
        self
    }

    pub fn with_conditions(mut self, conditions: Vec<ConditionDefinition>) -> Self {
        self.conditions = conditions;
        self
    }

    pub fn with_custom_counters(mut self, counters: Option<Vec<CounterDefinition>>) -> Self {
        self.custom_counters = counters;
        self
    }

    pub fn with_combat(mut self, combat: Option<CombatState>) -> Self {
        self.combat = combat;
        self
    }

    pub fn with_magic_items(mut self, magic_items: Vec<MagicItem>) -> Self {
        self.magic_items = magic_items;
        self
    }

    pub fn localize(&self, key: &str) -> String {
        self.localizer.localize(key)
    }

    pub fn actor_kind(&self) -> Option<ActorKind> {
        self.actor.map(|actor| actor.kind)
    }

    pub fn token_ids(&self) -> Vec<TokenId> {
        self.tokens.iter().map(|token| token.id.clone()).collect()
    }

    /// Every selected actor is a player character.
    pub fn all_characters(&self) -> bool {
        !self.actors.is_empty()
            && self
                .actors
                .iter()
                .all(|actor| actor.kind == ActorKind::Character)
    }

    pub fn items_of<'s>(&'s self, item_type: ItemType) -> impl Iterator<Item = &'a Item> + 's {
        self.items
            .iter()
            .copied()
            .filter(move |item| item.item_type == item_type)
    }
}

fn sorted_items(actor: &ActorSnapshot, show_slow_actions: bool) -> Vec<&Item> {
    let mut items: Vec<&Item> = actor
        .items
        .iter()
        .filter(|item| show_slow_actions || !item.activation.is_some_and(|a| a.is_slow()))
        .collect();
    items.sort_by(|a, b| a.name.cmp(&b.name).then_with(|| a.id.cmp(&b.id)));
    items
}
