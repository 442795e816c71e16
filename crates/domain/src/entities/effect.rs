//! Active effects applicable to an actor.

use serde::{Deserialize, Serialize};

use crate::ids::{EffectId, ItemId};

/// Where an applicable effect lives.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum EffectOrigin {
    /// Embedded directly on the actor
    Actor,
    /// Transferred from an owned item
    #[serde(rename_all = "camelCase")]
    Item { item_id: ItemId, identified: bool },
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ActiveEffect {
    pub id: EffectId,
    pub name: String,
    #[serde(default)]
    pub img: Option<String>,
    #[serde(default)]
    pub uuid: Option<String>,
    #[serde(default)]
    pub disabled: bool,
    #[serde(default)]
    pub suppressed: bool,
    /// Has a duration; otherwise the effect is passive
    #[serde(default)]
    pub temporary: bool,
    /// Status condition ids this effect applies
    #[serde(default)]
    pub statuses: Vec<String>,
    #[serde(default = "default_origin")]
    pub origin: EffectOrigin,
}

fn default_origin() -> EffectOrigin {
    EffectOrigin::Actor
}

impl ActiveEffect {
    pub fn new(id: impl Into<EffectId>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            img: None,
            uuid: None,
            disabled: false,
            suppressed: false,
            temporary: false,
            statuses: Vec::new(),
            origin: EffectOrigin::Actor,
        }
    }

    pub fn with_status(mut self, status: impl Into<String>) -> Self {
        self.statuses.push(status.into());
        self
    }

    pub fn with_disabled(mut self, disabled: bool) -> Self {
        self.disabled = disabled;
        self
    }

    pub fn with_temporary(mut self, temporary: bool) -> Self {
        self.temporary = temporary;
        self
    }

    pub fn with_origin(mut self, origin: EffectOrigin) -> Self {
        self.origin = origin;
        self
    }

    /// Transferred from an item; deleting it would only be undone by the item.
    pub fn is_transferred(&self) -> bool {
        matches!(self.origin, EffectOrigin::Item { .. })
    }

    /// Comes from an item the viewer has not identified yet.
    pub fn is_from_unidentified_item(&self) -> bool {
        matches!(self.origin, EffectOrigin::Item { identified: false, .. })
    }

    pub fn has_status(&self, status: &str) -> bool {
        self.statuses.iter().any(|s| s == status)
    }

    /// Applies exactly the given status and nothing else.
    pub fn is_only_status(&self, status: &str) -> bool {
        !self.statuses.is_empty() && self.statuses.iter().all(|s| s == status)
    }
}
