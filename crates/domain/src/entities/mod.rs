//! Entities: host documents as the HUD sees them.

pub mod actor;
pub mod condition;
pub mod effect;
pub mod item;
pub mod magic_item;
pub mod selection;
pub mod spell;

pub use actor::{
    AbilityScore, ActorKind, ActorSnapshot, Attributes, DeathSaves, HitPoints, Resource,
    SkillEntry, TokenRef,
};
pub use condition::ConditionDefinition;
pub use effect::{ActiveEffect, EffectOrigin};
pub use item::{
    ConsumptionKind, ConsumptionTarget, FeatureType, Item, ItemType, RecoveryPeriod, Uses,
};
pub use magic_item::{MagicItem, MagicItemEntry};
pub use selection::{ControlledToken, Selection};
pub use spell::{
    CastingMode, LinkedActivity, PreparationState, SlotKey, SpellComponents, SpellDetails,
    SpellSlotPool,
};
