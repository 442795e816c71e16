//! Status conditions that can be toggled on a token.

use serde::{Deserialize, Serialize};

use crate::ids::EffectId;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConditionDefinition {
    /// Status id, e.g. `prone`
    pub id: String,
    /// Localization key for the display name
    pub name: String,
    #[serde(default)]
    pub img: Option<String>,
    /// Fixed id of the effect document the host creates for this status
    #[serde(default)]
    pub effect_id: Option<EffectId>,
    /// Rules journal reference used for rich tooltips
    #[serde(default)]
    pub reference: Option<String>,
}
