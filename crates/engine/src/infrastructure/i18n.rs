//! Translation catalog.

use std::collections::HashMap;

use serde_json::Value;

use crate::infrastructure::ports::Localizer;

/// In-memory translations. Missing keys localize to themselves.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    entries: HashMap<String, String>,
}

impl Catalog {
    pub fn new(entries: HashMap<String, String>) -> Self {
        Self { entries }
    }

    /// Parse a language file. Nested objects are flattened into dotted keys.
    pub fn from_json(raw: &str) -> Result<Self, serde_json::Error> {
        let root: Value = serde_json::from_str(raw)?;
        let mut entries = HashMap::new();
        flatten("", &root, &mut entries);
        Ok(Self { entries })
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

fn flatten(prefix: &str, value: &Value, out: &mut HashMap<String, String>) {
    match value {
        Value::Object(map) => {
            for (key, child) in map {
                let path = if prefix.is_empty() {
                    key.clone()
                } else {
                    format!("{}.{}", prefix, key)
                };
                flatten(&path, child, out);
            }
        }
        Value::String(text) => {
            out.insert(prefix.to_string(), text.clone());
        }
        _ => {}
    }
}

impl Localizer for Catalog {
    fn localize(&self, key: &str) -> String {
        self.entries
            .get(key)
            .cloned()
            .unwrap_or_else(|| key.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn flattens_nested_language_files() {
        let catalog = Catalog::from_json(
            r#"{ "DND5E.Exhaustion": "Exhaustion", "tokenActionHud": { "dnd5e": { "skills": "Skills" } } }"#,
        )
        .unwrap();
        assert_eq!(catalog.len(), 2);
        assert_eq!(catalog.localize("tokenActionHud.dnd5e.skills"), "Skills");
        assert_eq!(catalog.localize("DND5E.Exhaustion"), "Exhaustion");
    }

    #[test]
    fn missing_key_returns_key() {
        assert_eq!(Catalog::default().localize("DND5E.Missing"), "DND5E.Missing");
    }
}
