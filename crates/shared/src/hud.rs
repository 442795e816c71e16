//! Render boundary DTOs: the group tree handed to the host HUD.

use serde::{Deserialize, Serialize};

use crate::payload::ActionPayload;

/// A short text badge with an optional hover title and CSS class.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InfoField {
    pub text: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub class: Option<String>,
}

impl InfoField {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            title: None,
            class: None,
        }
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn with_class(mut self, class: impl Into<String>) -> Self {
        self.class = Some(class.into());
        self
    }
}

/// The leaf, clickable unit.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Action {
    pub id: String,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub img: Option<String>,
    /// Activation timing badge
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub icon1: Option<String>,
    /// Prepared / proficiency badge
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub icon2: Option<String>,
    /// Concentration badge
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub icon3: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub info1: Option<InfoField>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub info2: Option<InfoField>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub info3: Option<InfoField>,
    /// `Some` for toggle-style actions; the value is the active state
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub active: Option<bool>,
    pub list_name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tooltip: Option<String>,
    #[serde(rename = "encodedValue")]
    pub payload: ActionPayload,
}

impl Action {
    pub fn new(id: impl Into<String>, name: impl Into<String>, payload: ActionPayload) -> Self {
        let name = name.into();
        Self {
            id: id.into(),
            list_name: name.clone(),
            name,
            img: None,
            icon1: None,
            icon2: None,
            icon3: None,
            info1: None,
            info2: None,
            info3: None,
            active: None,
            tooltip: None,
            payload,
        }
    }

    pub fn encoded_value(&self) -> String {
        self.payload.encode()
    }
}

/// Whether a group is one of the fixed catalogue groups or derived at runtime.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum GroupKind {
    System,
    SystemDerived,
}

/// Group metadata without contents, as registered with the host.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GroupHeader {
    pub id: String,
    pub name: String,
    #[serde(rename = "type")]
    pub kind: GroupKind,
    pub default_selected: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GroupNode {
    pub id: String,
    pub name: String,
    #[serde(rename = "type")]
    pub kind: GroupKind,
    /// Summary badge such as remaining spell slots
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub info: Option<InfoField>,
    /// Expanded by default
    pub default_selected: bool,
    #[serde(default)]
    pub actions: Vec<Action>,
    #[serde(default)]
    pub children: Vec<GroupNode>,
}

impl GroupNode {
    pub fn new(id: impl Into<String>, name: impl Into<String>, kind: GroupKind) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            kind,
            info: None,
            default_selected: true,
            actions: Vec::new(),
            children: Vec::new(),
        }
    }

    pub fn header(&self) -> GroupHeader {
        GroupHeader {
            id: self.id.clone(),
            name: self.name.clone(),
            kind: self.kind,
            default_selected: self.default_selected,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.actions.is_empty() && self.children.is_empty()
    }

    pub fn find(&self, id: &str) -> Option<&GroupNode> {
        if self.id == id {
            return Some(self);
        }
        self.children.iter().find_map(|child| child.find(id))
    }

    fn collect_ids<'a>(&'a self, out: &mut Vec<&'a str>) {
        out.push(&self.id);
        for child in &self.children {
            child.collect_ids(out);
        }
    }
}

/// The full classification result for one HUD refresh.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GroupTree {
    pub groups: Vec<GroupNode>,
}

impl GroupTree {
    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }

    /// Depth-first search for a group by id.
    pub fn find(&self, id: &str) -> Option<&GroupNode> {
        self.groups.iter().find_map(|group| group.find(id))
    }

    pub fn contains(&self, id: &str) -> bool {
        self.find(id).is_some()
    }

    /// Every group id, parents before children.
    pub fn group_ids(&self) -> Vec<&str> {
        let mut ids = Vec::new();
        for group in &self.groups {
            group.collect_ids(&mut ids);
        }
        ids
    }

    /// Ids of the groups that directly hold an action with this payload.
    pub fn groups_containing(&self, payload: &ActionPayload) -> Vec<&str> {
        fn walk<'a>(node: &'a GroupNode, payload: &ActionPayload, out: &mut Vec<&'a str>) {
            if node.actions.iter().any(|action| &action.payload == payload) {
                out.push(&node.id);
            }
            for child in &node.children {
                walk(child, payload, out);
            }
        }

        let mut out = Vec::new();
        for group in &self.groups {
            walk(group, payload, &mut out);
        }
        out
    }
}
