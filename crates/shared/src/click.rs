//! Click modifiers as the host reports them.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum MouseButton {
    #[default]
    Primary,
    Secondary,
}

/// Which button was pressed and whether ctrl was held.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ClickContext {
    pub button: MouseButton,
    pub ctrl: bool,
}

impl ClickContext {
    pub fn primary() -> Self {
        Self {
            button: MouseButton::Primary,
            ctrl: false,
        }
    }

    pub fn secondary() -> Self {
        Self {
            button: MouseButton::Secondary,
            ctrl: false,
        }
    }

    pub fn with_ctrl(mut self) -> Self {
        self.ctrl = true;
        self
    }

    /// Right click; decrements and alternate actions.
    pub fn is_secondary(&self) -> bool {
        self.button == MouseButton::Secondary
    }
}
