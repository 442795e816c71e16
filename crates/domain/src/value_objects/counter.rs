//! Counters: built-in death saves / exhaustion / inspiration, or a custom per-actor-type list.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// How a counter stores and displays its value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum CounterType {
    Checkbox,
    Number,
    Fraction,
    SuccessFailure,
}

impl CounterType {
    pub fn as_str(&self) -> &'static str {
        match self {
            CounterType::Checkbox => "checkbox",
            CounterType::Number => "number",
            CounterType::Fraction => "fraction",
            CounterType::SuccessFailure => "successFailure",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "checkbox" => Some(CounterType::Checkbox),
            "number" => Some(CounterType::Number),
            "fraction" => Some(CounterType::Fraction),
            "successFailure" => Some(CounterType::SuccessFailure),
            _ => None,
        }
    }
}

/// One counter shown in the counters group.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CounterDefinition {
    pub key: String,
    pub name: String,
    #[serde(rename = "type")]
    pub counter_type: CounterType,
    /// Built-in counters read actor attributes instead of flags.
    #[serde(default)]
    pub system: bool,
    #[serde(default = "default_visible")]
    pub visible: bool,
}

fn default_visible() -> bool {
    true
}

pub const DEATH_SAVES_COUNTER: &str = "death-saves";
pub const EXHAUSTION_COUNTER: &str = "exhaustion";
pub const INSPIRATION_COUNTER: &str = "inspiration";

impl CounterDefinition {
    /// The built-in counters, used when no custom list is configured.
    pub fn built_in() -> Vec<CounterDefinition> {
        vec![
            CounterDefinition {
                key: DEATH_SAVES_COUNTER.to_string(),
                name: "DND5E.DeathSave".to_string(),
                counter_type: CounterType::SuccessFailure,
                system: true,
                visible: true,
            },
            CounterDefinition {
                key: EXHAUSTION_COUNTER.to_string(),
                name: "DND5E.Exhaustion".to_string(),
                counter_type: CounterType::Number,
                system: true,
                visible: true,
            },
            CounterDefinition {
                key: INSPIRATION_COUNTER.to_string(),
                name: "DND5E.Inspiration".to_string(),
                counter_type: CounterType::Checkbox,
                system: true,
                visible: true,
            },
        ]
    }
}

/// A counter's current value, decoded from untyped flag storage.
///
/// Missing or mistyped fields decode to zero / false, matching how the host
/// treats an unset flag.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CounterValue {
    Checkbox(bool),
    Number(i64),
    Fraction { value: i64, max: Option<i64> },
    SuccessFailure { success: i64, failure: i64 },
}

impl CounterValue {
    pub fn decode(counter_type: CounterType, raw: Option<&Value>) -> Self {
        let field = |name: &str| raw.and_then(|v| v.get(name)).and_then(Value::as_i64);
        match counter_type {
            CounterType::Checkbox => {
                CounterValue::Checkbox(raw.and_then(Value::as_bool).unwrap_or(false))
            }
            CounterType::Number => CounterValue::Number(raw.and_then(Value::as_i64).unwrap_or(0)),
            CounterType::Fraction => CounterValue::Fraction {
                value: field("value").unwrap_or(0),
                max: field("max").filter(|max| *max > 0),
            },
            CounterType::SuccessFailure => CounterValue::SuccessFailure {
                success: field("success").unwrap_or(0),
                failure: field("failure").unwrap_or(0),
            },
        }
    }

    /// Toggle state for the HUD button; success/failure counters are not toggles.
    pub fn toggle_state(&self) -> Option<bool> {
        match self {
            CounterValue::Checkbox(checked) => Some(*checked),
            CounterValue::Number(n) => Some(*n > 0),
            CounterValue::Fraction { value, .. } => Some(*value > 0),
            CounterValue::SuccessFailure { .. } => None,
        }
    }

    /// Short text shown beside the counter.
    pub fn display(&self) -> Option<String> {
        match self {
            CounterValue::Checkbox(_) => None,
            CounterValue::Number(n) => Some(n.to_string()),
            CounterValue::Fraction { value, max } => {
                Some(format!("{}/{}", value, max.unwrap_or(0)))
            }
            CounterValue::SuccessFailure { success, failure } => {
                Some(format!("{}/{}", success, failure))
            }
        }
    }
}
