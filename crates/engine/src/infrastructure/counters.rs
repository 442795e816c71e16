//! Custom counter configuration from a static JSON document.

use std::collections::HashMap;

use tahud_domain::{ActorKind, CounterDefinition};

use crate::infrastructure::ports::CounterConfigPort;

/// Counter lists keyed by actor type, e.g. `{ "character": [ ... ] }`.
#[derive(Debug, Clone, Default)]
pub struct StaticCounterConfig {
    by_kind: HashMap<ActorKind, Vec<CounterDefinition>>,
}

impl StaticCounterConfig {
    pub fn from_json(raw: &str) -> Result<Self, serde_json::Error> {
        Ok(Self {
            by_kind: serde_json::from_str(raw)?,
        })
    }
}

impl CounterConfigPort for StaticCounterConfig {
    fn counters(&self, kind: ActorKind) -> Option<Vec<CounterDefinition>> {
        self.by_kind.get(&kind).cloned()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tahud_domain::CounterType;

    #[test]
    fn loads_counters_per_actor_type() {
        let config = StaticCounterConfig::from_json(
            r#"{ "character": [ { "key": "luck", "name": "Luck", "type": "number" } ] }"#,
        )
        .unwrap();

        let counters = config.counters(ActorKind::Character).unwrap();
        assert_eq!(counters[0].counter_type, CounterType::Number);
        assert!(config.counters(ActorKind::Npc).is_none());
    }
}
