//! Combat encounter state as seen by the HUD.

use serde::{Deserialize, Serialize};

use crate::ids::TokenId;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Combatant {
    pub token_id: TokenId,
    #[serde(default)]
    pub initiative: Option<f64>,
}

/// The active combat encounter, if any.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CombatState {
    /// Token whose turn it currently is
    #[serde(default)]
    pub current_token: Option<TokenId>,
    #[serde(default)]
    pub combatants: Vec<Combatant>,
}

impl CombatState {
    pub fn is_current_turn(&self, token_id: &TokenId) -> bool {
        self.current_token.as_ref() == Some(token_id)
    }

    /// Combatants belonging to any of the given tokens.
    pub fn combatants_for<'a>(&'a self, tokens: &'a [TokenId]) -> Vec<&'a Combatant> {
        self.combatants
            .iter()
            .filter(|c| tokens.contains(&c.token_id))
            .collect()
    }
}
