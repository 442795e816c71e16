//! Token Action HUD D&D 5e shared types
//!
//! The contract between the classifier, the dispatcher and the host HUD:
//! - `payload`: the `"category|identifier"` click payload and its codec
//! - `hud`: the group tree handed to the renderer
//! - `click`: click modifiers
//!
//! Pure data types and serialization, no business logic.

pub mod click;
pub mod hud;
pub mod payload;

pub use click::{ClickContext, MouseButton};
pub use hud::{Action, GroupHeader, GroupKind, GroupNode, GroupTree, InfoField};
pub use payload::{
    AbilityRoll, ActionCategory, ActionPayload, ItemKind, PayloadError, UtilityAction,
};
