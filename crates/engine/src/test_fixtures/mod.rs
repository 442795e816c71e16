//! Snapshot builders shared by unit tests.
//!
//! # Usage
//!
//! ```rust,ignore
//! use crate::test_fixtures::{actors, controlled};
//!
//! #[test]
//! fn test_fighter_has_abilities() {
//!     let fighter = actors::fighter();
//!     // ... test logic
//! }
//! ```

use tahud_domain::{ActorSnapshot, ControlledToken, TokenRef};

/// Pair an actor with a token of the given id.
pub fn controlled(token_id: &str, actor: ActorSnapshot) -> ControlledToken {
    ControlledToken {
        token: TokenRef::new(token_id, actor.id.clone()),
        actor,
    }
}

// =============================================================================
// Actors
// =============================================================================

pub mod actors {
    use tahud_domain::{AbilityScore, ActorKind, ActorSnapshot, ProficiencyLevel};

    fn scores(scores: [(&str, i32, i32); 6]) -> Vec<AbilityScore> {
        scores
            .into_iter()
            .map(|(id, value, modifier)| AbilityScore::new(id, value, modifier))
            .collect()
    }

    /// Level 5 fighter: proficient strength save, no skills, no items.
    pub fn fighter() -> ActorSnapshot {
        let mut actor = ActorSnapshot::new("fighter", "Brienne", ActorKind::Character);
        actor.abilities = scores([
            ("str", 16, 3),
            ("dex", 12, 1),
            ("con", 14, 2),
            ("int", 10, 0),
            ("wis", 10, 0),
            ("cha", 8, -1),
        ]);
        actor.abilities[0] = actor.abilities[0]
            .clone()
            .with_save(5, ProficiencyLevel::Proficient);
        actor.abilities[2] = actor.abilities[2]
            .clone()
            .with_save(4, ProficiencyLevel::Proficient);
        actor.attributes.hp.value = 44;
        actor.attributes.hp.max = 44;
        actor
    }

    pub fn wizard() -> ActorSnapshot {
        let mut actor = ActorSnapshot::new("wizard", "Elminster", ActorKind::Character);
        actor.abilities = scores([
            ("str", 8, -1),
            ("dex", 14, 2),
            ("con", 12, 1),
            ("int", 18, 4),
            ("wis", 12, 1),
            ("cha", 10, 0),
        ]);
        actor.attributes.hp.value = 27;
        actor.attributes.hp.max = 27;
        actor
    }

    pub fn goblin() -> ActorSnapshot {
        let mut actor = ActorSnapshot::new("goblin", "Goblin", ActorKind::Npc);
        actor.abilities = scores([
            ("str", 8, -1),
            ("dex", 14, 2),
            ("con", 10, 0),
            ("int", 10, 0),
            ("wis", 8, -1),
            ("cha", 8, -1),
        ]);
        actor.attributes.hp.value = 7;
        actor.attributes.hp.max = 7;
        actor
    }

    pub fn ship() -> ActorSnapshot {
        let mut actor = ActorSnapshot::new("ship", "Sloop", ActorKind::Vehicle);
        actor.abilities = scores([
            ("str", 17, 3),
            ("dex", 10, 0),
            ("con", 12, 1),
            ("int", 0, 0),
            ("wis", 0, 0),
            ("cha", 0, 0),
        ]);
        actor.attributes.hp.value = 100;
        actor.attributes.hp.max = 100;
        actor
    }
}

// =============================================================================
// Spells
// =============================================================================

pub mod spells {
    use tahud_domain::{
        CastingMode, Item, ItemType, PreparationState, SpellComponents, SpellDetails,
    };

    /// A slot-cast spell of the given level.
    pub fn spell(id: &str, name: &str, level: u8, prepared: bool) -> Item {
        Item::new(id, name, ItemType::Spell).with_spell(SpellDetails {
            level,
            method: CastingMode::Spell,
            prepared: if prepared {
                PreparationState::Prepared
            } else {
                PreparationState::Unprepared
            },
            components: SpellComponents::default(),
            ritual: false,
            concentration: false,
            linked_activity: None,
        })
    }
}
