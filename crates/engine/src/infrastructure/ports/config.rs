//! Synchronous lookup ports: settings, translations, status conditions and
//! counter configuration.

use serde_json::Value;
use tahud_domain::{ActorKind, ConditionDefinition, CounterDefinition};

/// Key -> value settings store.
#[cfg_attr(test, mockall::automock)]
pub trait SettingsPort: Send + Sync {
    fn get(&self, key: &str) -> Option<Value>;
}

/// Key -> translated string lookup.
#[cfg_attr(test, mockall::automock)]
pub trait Localizer: Send + Sync {
    fn localize(&self, key: &str) -> String;
}

/// Custom counters configured per actor type.
#[cfg_attr(test, mockall::automock)]
pub trait CounterConfigPort: Send + Sync {
    /// `None` when nothing is configured for this actor type.
    fn counters(&self, kind: ActorKind) -> Option<Vec<CounterDefinition>>;
}

/// Status conditions the host registers for tokens.
#[cfg_attr(test, mockall::automock)]
pub trait ConditionCatalogPort: Send + Sync {
    fn conditions(&self) -> Vec<ConditionDefinition>;
}
