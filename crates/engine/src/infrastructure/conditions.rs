//! Status condition catalogue from a static JSON document.

use tahud_domain::{dnd5e, ConditionDefinition};

use crate::infrastructure::ports::ConditionCatalogPort;

/// A fixed list of conditions; the 5e defaults unless loaded from JSON.
#[derive(Debug, Clone)]
pub struct StaticConditions {
    conditions: Vec<ConditionDefinition>,
}

impl StaticConditions {
    pub fn new(conditions: Vec<ConditionDefinition>) -> Self {
        Self { conditions }
    }

    /// Parse a JSON array of condition definitions. Blank ids are dropped.
    pub fn from_json(raw: &str) -> Result<Self, serde_json::Error> {
        let mut conditions: Vec<ConditionDefinition> = serde_json::from_str(raw)?;
        conditions.retain(|condition| !condition.id.is_empty());
        Ok(Self::new(conditions))
    }
}

impl Default for StaticConditions {
    fn default() -> Self {
        Self::new(dnd5e::default_conditions())
    }
}

impl ConditionCatalogPort for StaticConditions {
    fn conditions(&self) -> Vec<ConditionDefinition> {
        self.conditions.clone()
    }
}
