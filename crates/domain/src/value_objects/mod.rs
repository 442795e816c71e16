//! Value objects: small immutable vocabulary types with no identity.

pub mod activation;
pub mod combat;
pub mod counter;
pub mod proficiency;
pub mod settings;

pub use activation::{ActivationGroup, ActivationType};
pub use combat::{CombatState, Combatant};
pub use counter::{
    CounterDefinition, CounterType, CounterValue, DEATH_SAVES_COUNTER, EXHAUSTION_COUNTER,
    INSPIRATION_COUNTER,
};
pub use proficiency::ProficiencyLevel;
pub use settings::{keys as setting_keys, HudSettings, ItemClickBehavior, TooltipMode};
