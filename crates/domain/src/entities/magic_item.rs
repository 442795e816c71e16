//! Magic items tracked by the optional magic-item collaborator.

use serde::{Deserialize, Serialize};

use crate::ids::ItemId;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MagicItemEntry {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub img: Option<String>,
    /// Charge cost, shown verbatim
    #[serde(default)]
    pub consumption: Option<String>,
    #[serde(default)]
    pub base_level: Option<u8>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MagicItem {
    pub id: ItemId,
    pub name: String,
    #[serde(default)]
    pub uses: u32,
    #[serde(default)]
    pub charges: u32,
    /// The item only works while attuned
    #[serde(default)]
    pub requires_attunement: bool,
    #[serde(default)]
    pub attuned: bool,
    /// The item only works while equipped
    #[serde(default)]
    pub requires_equipped: bool,
    #[serde(default)]
    pub equipped: bool,
    #[serde(default)]
    pub entries: Vec<MagicItemEntry>,
}

impl MagicItem {
    /// Attunement and equip requirements are met.
    pub fn is_usable(&self) -> bool {
        (!self.requires_attunement || self.attuned) && (!self.requires_equipped || self.equipped)
    }
}
