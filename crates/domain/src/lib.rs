//! Rules vocabulary for the D&D 5e token action HUD.
//!
//! Pure data: actor snapshots, items, spells, effects, counters and the 5e
//! lookup tables. No I/O and no logging live here.

pub mod entities;
pub mod error;
pub mod game_systems;
pub mod ids;
pub mod value_objects;

pub use entities::{
    AbilityScore, ActiveEffect, ActorKind, ActorSnapshot, Attributes, CastingMode,
    ConditionDefinition, ConsumptionKind, ControlledToken, ConsumptionTarget, DeathSaves, EffectOrigin,
    FeatureType, HitPoints, Item, ItemType, LinkedActivity, MagicItem, MagicItemEntry,
    PreparationState, RecoveryPeriod, Resource, Selection, SkillEntry, SlotKey, SpellComponents,
    SpellDetails, SpellSlotPool, TokenRef, Uses,
};
pub use error::DomainError;
pub use game_systems::{dnd5e, groups, GroupDef};
pub use ids::{ActorId, EffectId, ItemId, TokenId};
pub use value_objects::{
    setting_keys, ActivationGroup, ActivationType, CombatState, Combatant, CounterDefinition,
    CounterType, CounterValue, HudSettings, ItemClickBehavior, ProficiencyLevel, TooltipMode,
    DEATH_SAVES_COUNTER, EXHAUSTION_COUNTER, INSPIRATION_COUNTER,
};
