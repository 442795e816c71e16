//! Counter and exhaustion arithmetic, kept free of port calls.

use serde_json::{json, Value};
use tahud_domain::{CounterType, CounterValue};
use tahud_shared::ClickContext;

/// Exhaustion after a click; `None` when the level would not change.
pub fn next_exhaustion(current: u8, click: ClickContext) -> Option<u8> {
    let next = if click.is_secondary() {
        current.checked_sub(1)?
    } else {
        current.saturating_add(1)
    };
    (next != current).then_some(next)
}

/// A flag write: the path under the counter key and the new value.
#[derive(Debug, Clone, PartialEq)]
pub struct CounterWrite {
    pub path: String,
    pub value: Value,
}

impl CounterWrite {
    fn new(path: impl Into<String>, value: Value) -> Self {
        Self {
            path: path.into(),
            value,
        }
    }
}

fn step(current: i64, click: ClickContext) -> i64 {
    if click.is_secondary() {
        (current - 1).max(0)
    } else {
        current + 1
    }
}

/// The write a click on a custom counter produces; `None` when nothing changes.
pub fn next_counter_write(
    key: &str,
    counter_type: CounterType,
    raw: Option<&Value>,
    click: ClickContext,
) -> Option<CounterWrite> {
    match CounterValue::decode(counter_type, raw) {
        CounterValue::Checkbox(checked) => Some(CounterWrite::new(key, json!(!checked))),
        CounterValue::Number(current) => {
            let next = step(current, click);
            (next != current).then(|| CounterWrite::new(key, json!(next)))
        }
        CounterValue::Fraction { value, max } => {
            let at_max = max.is_some_and(|max| value >= max);
            if !click.is_secondary() && at_max {
                return None;
            }
            let next = step(value, click);
            (next != value).then(|| CounterWrite::new(format!("{}.value", key), json!(next)))
        }
        CounterValue::SuccessFailure { success, failure } => {
            let (field, current) = if click.ctrl {
                ("failure", failure)
            } else {
                ("success", success)
            };
            let next = step(current, click);
            (next != current).then(|| CounterWrite::new(format!("{}.{}", key, field), json!(next)))
        }
    }
}
