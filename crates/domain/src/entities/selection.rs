//! What the HUD is currently pointed at.

use serde::{Deserialize, Serialize};

use super::{ActorSnapshot, TokenRef};

/// A controlled token together with its actor.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ControlledToken {
    pub token: TokenRef,
    pub actor: ActorSnapshot,
}

/// The HUD's current target.
///
/// `actor` and `token` are set when exactly one token (or a sheet) is selected;
/// `controlled` always lists every controlled token.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Selection {
    pub actor: Option<ActorSnapshot>,
    pub token: Option<TokenRef>,
    pub controlled: Vec<ControlledToken>,
}

impl Selection {
    /// Selection of a single token and its actor.
    pub fn single(token: TokenRef, actor: ActorSnapshot) -> Self {
        Self {
            actor: Some(actor.clone()),
            token: Some(token.clone()),
            controlled: vec![ControlledToken { token, actor }],
        }
    }

    /// Several controlled tokens and no single focus.
    pub fn multiple(controlled: Vec<ControlledToken>) -> Self {
        Self {
            actor: None,
            token: None,
            controlled,
        }
    }
}
