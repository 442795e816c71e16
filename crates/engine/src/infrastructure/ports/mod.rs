//! Port traits for infrastructure boundaries.
//!
//! These are the ONLY abstractions toward the host. Ports exist for:
//! - Actor mutations, rolls, items and combat (the host game engine)
//! - The magic-item tracker (optional)
//! - HUD rendering
//! - Settings, translations, status conditions and counter configuration lookups

mod config;
mod error;
mod host;

pub use config::{ConditionCatalogPort, CounterConfigPort, Localizer, SettingsPort};
pub use error::PortError;
pub use host::{ActorUpdatePort, CombatPort, HudPort, ItemPort, MagicItemsPort, RollPort};

// =============================================================================
// Test-Only Mocks (only available during test builds)
// =============================================================================
#[cfg(test)]
pub use config::{
    MockConditionCatalogPort, MockCounterConfigPort, MockLocalizer, MockSettingsPort,
};

#[cfg(test)]
pub use host::{
    MockActorUpdatePort, MockCombatPort, MockHudPort, MockItemPort, MockMagicItemsPort,
    MockRollPort,
};
