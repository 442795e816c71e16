//! Classifier: turns an actor snapshot into the HUD group tree.
//!
//! Each [`Stage`] reads the shared [`ClassificationContext`] and emits staged
//! groups; the [`TreeBuilder`] merges them in stage order. Stages never see
//! each other's output, so the result depends only on the context.

pub mod abilities;
pub mod builder;
pub mod conditions;
pub mod context;
pub mod counters;
pub mod effects;
pub mod features;
pub mod inventory;
pub mod magic_items;
pub mod metadata;
pub mod spells;
pub mod utility;

use tahud_domain::ActorKind;
use tahud_shared::{AbilityRoll, GroupTree};

pub use builder::{StagedGroup, TreeBuilder};
pub use context::ClassificationContext;

/// One independent pass over the context.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    Conditions,
    Effects,
    Features,
    Inventory,
    Spells,
    Abilities,
    Checks,
    Saves,
    Combat,
    Counters,
    Exhaustion,
    Rests,
    Skills,
    Utility,
    MagicItems,
}

impl Stage {
    const CREATURE: &'static [Stage] = &[
        Stage::Conditions,
        Stage::Effects,
        Stage::Features,
        Stage::Inventory,
        Stage::Spells,
        Stage::Abilities,
        Stage::Checks,
        Stage::Saves,
        Stage::Combat,
        Stage::Counters,
        Stage::Exhaustion,
        Stage::Rests,
        Stage::Skills,
        Stage::Utility,
        Stage::MagicItems,
    ];

    const VEHICLE: &'static [Stage] = &[
        Stage::Conditions,
        Stage::Effects,
        Stage::Features,
        Stage::Inventory,
        Stage::Abilities,
        Stage::Checks,
        Stage::Saves,
        Stage::Combat,
        Stage::Utility,
    ];

    const MULTIPLE: &'static [Stage] = &[
        Stage::Abilities,
        Stage::Checks,
        Stage::Saves,
        Stage::Combat,
        Stage::Conditions,
        Stage::Rests,
        Stage::Skills,
        Stage::Utility,
    ];

    /// The stages run for a selection, in emission order.
    pub fn plan(kind: Option<ActorKind>) -> &'static [Stage] {
        match kind {
            Some(ActorKind::Character | ActorKind::Npc) => Self::CREATURE,
            Some(ActorKind::Vehicle) => Self::VEHICLE,
            Some(ActorKind::Group | ActorKind::Other) => &[],
            None => Self::MULTIPLE,
        }
    }

    pub fn run(self, ctx: &ClassificationContext<'_>) -> Vec<StagedGroup> {
        match self {
            Stage::Conditions => conditions::build_conditions(ctx),
            Stage::Effects => effects::build_effects(ctx),
            Stage::Features => features::build_features(ctx),
            Stage::Inventory => inventory::build_inventory(ctx),
            Stage::Spells => spells::build_spells(ctx),
            Stage::Abilities => abilities::build_abilities(ctx, AbilityRoll::Ability),
            Stage::Checks => abilities::build_abilities(ctx, AbilityRoll::Check),
            Stage::Saves => abilities::build_abilities(ctx, AbilityRoll::Save),
            Stage::Combat => utility::build_combat(ctx),
            Stage::Counters => counters::build_counters(ctx),
            Stage::Exhaustion => utility::build_exhaustion(ctx),
            Stage::Rests => utility::build_rests(ctx),
            Stage::Skills => abilities::build_skills(ctx),
            Stage::Utility => utility::build_utility(ctx),
            Stage::MagicItems => magic_items::build_magic_items(ctx),
        }
    }
}

/// Stateless classifier; one call per HUD refresh.
#[derive(Debug, Clone, Copy, Default)]
pub struct Classifier;

impl Classifier {
    pub fn new() -> Self {
        Self
    }

    pub fn classify(&self, ctx: &ClassificationContext<'_>) -> GroupTree {
        let plan = Stage::plan(ctx.actor_kind());
        let staged: Vec<Vec<StagedGroup>> = plan.iter().map(|stage| stage.run(ctx)).collect();

        let mut builder = TreeBuilder::new(ctx);
        for (stage, groups) in plan.iter().zip(staged) {
            tracing::trace!(stage = ?stage, groups = groups.len(), "Stage complete");
            builder.extend(groups);
        }
        builder.build()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::i18n::Catalog;
    use crate::test_fixtures::{actors, controlled, spells};
    use tahud_domain::{
        ActivationType, HudSettings, Item, ItemType, Selection, SpellSlotPool, TokenRef,
    };
    use tahud_shared::GroupNode;

    fn classify(selection: &Selection, settings: &HudSettings) -> GroupTree {
        let catalog = Catalog::default();
        let ctx = ClassificationContext::from_selection(selection, settings, &catalog);
        Classifier::new().classify(&ctx)
    }

    fn assert_no_empty(nodes: &[GroupNode]) {
        for node in nodes {
            assert!(!node.is_empty(), "empty group {}", node.id);
            assert_no_empty(&node.children);
        }
    }

    fn equipped_fighter() -> Selection {
        let mut fighter = actors::fighter();
        fighter.spell_slots = vec![SpellSlotPool::level(1, 1, 2)];
        fighter.items = vec![
            Item::new("sword", "Longsword", ItemType::Weapon)
                .with_equipped(true)
                .with_activation(ActivationType::Action),
            Item::new("dagger", "Dagger", ItemType::Weapon)
                .with_equipped(true)
                .with_activation(ActivationType::Bonus),
            spells::spell("shield", "Shield", 1, true).with_activation(ActivationType::Reaction),
        ];
        Selection::single(TokenRef::new("t1", "fighter"), fighter)
    }

    #[test]
    fn empty_actor_still_gets_ability_groups() {
        let tree = classify(&Selection::default(), &HudSettings::default());
        for id in ["abilities", "checks", "saves", "skills"] {
            assert!(tree.contains(id), "{id} missing");
        }
        assert!(!tree.contains("conditions"));
        assert_no_empty(&tree.groups);
    }

    #[test]
    fn activation_containers_come_first() {
        let tree = classify(&equipped_fighter(), &HudSettings::default());
        let roots: Vec<&str> = tree.groups.iter().map(|g| g.id.as_str()).collect();
        assert_eq!(&roots[..3], &["actions", "bonus-actions", "reactions"]);
        assert!(tree.contains("actions+weapons"));
        assert!(tree.contains("reactions+1st-level-spells"));
        assert_no_empty(&tree.groups);
    }

    #[test]
    fn item_lands_in_every_bucket() {
        let tree = classify(&equipped_fighter(), &HudSettings::default());
        let payload = tree
            .find("weapons")
            .and_then(|group| group.actions.iter().find(|a| a.id == "sword"))
            .map(|action| action.payload.clone())
            .unwrap();
        assert_eq!(
            tree.groups_containing(&payload),
            vec!["actions+equipped", "actions+weapons", "equipped", "weapons"]
        );
    }

    #[test]
    fn classification_is_idempotent() {
        let selection = equipped_fighter();
        let settings = HudSettings::default();
        assert_eq!(classify(&selection, &settings), classify(&selection, &settings));
    }

    #[test]
    fn multi_selection_uses_default_plan() {
        let selection = Selection::multiple(vec![
            controlled("t1", actors::fighter()),
            controlled("t2", actors::fighter()),
        ]);
        let tree = classify(&selection, &HudSettings::default());
        assert!(tree.contains("rests"));
        assert!(tree.contains("conditions"));
        assert!(!tree.contains("counters"));
        assert!(!tree.contains("equipped"));
    }

    #[test]
    fn uncharged_spell_levels_follow_the_setting() {
        let mut wizard = actors::wizard();
        wizard.spell_slots = vec![SpellSlotPool::level(3, 0, 0)];
        wizard.items = vec![
            spells::spell("fireball", "Fireball", 3, true),
            spells::spell("light", "Light", 0, false),
        ];
        let selection = Selection::single(TokenRef::new("t1", "wizard"), wizard);

        let tree = classify(&selection, &HudSettings::default());
        assert!(tree.contains("cantrips"));
        assert!(!tree.contains("3rd-level-spells"));
        assert!(!tree.contains("other-actions+3rd-level-spells"));
        assert_no_empty(&tree.groups);

        let settings = HudSettings {
            show_uncharged_items: true,
            ..Default::default()
        };
        let tree = classify(&selection, &settings);
        assert!(tree.contains("3rd-level-spells"));
        assert!(tree.contains("other-actions+3rd-level-spells"));
        assert_eq!(tree.find("3rd-level-spells").and_then(|g| g.info.as_ref()), None);
    }

    #[test]
    fn vehicle_skips_spells_and_counters() {
        let selection = Selection::single(TokenRef::new("t1", "ship"), actors::ship());
        let plan = Stage::plan(Some(ActorKind::Vehicle));
        assert!(!plan.contains(&Stage::Spells));
        let tree = classify(&selection, &HudSettings::default());
        assert!(!tree.contains("counters"));
        assert!(!tree.contains("rests"));
    }
}
