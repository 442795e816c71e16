//! Fan-in: merges stage output into the final group tree.

use std::collections::BTreeMap;

use tahud_domain::{groups, ActivationGroup, ActivationType, GroupDef};
use tahud_shared::{Action, GroupKind, GroupNode, GroupTree, InfoField};

use super::context::ClassificationContext;

/// One group as a stage produced it, before it is placed in the tree.
#[derive(Debug, Clone, PartialEq)]
pub struct StagedGroup {
    pub id: String,
    pub name: String,
    pub kind: GroupKind,
    pub parent: Option<String>,
    pub info: Option<InfoField>,
    pub default_selected: bool,
    pub actions: Vec<Action>,
}

impl StagedGroup {
    /// A catalogue group at the root of the tree.
    pub fn system(def: GroupDef, ctx: &ClassificationContext<'_>) -> Self {
        Self {
            id: def.id.to_string(),
            name: ctx.localize(def.name),
            kind: GroupKind::System,
            parent: None,
            info: None,
            default_selected: true,
            actions: Vec::new(),
        }
    }

    /// A runtime group nested under `parent`.
    pub fn derived(id: impl Into<String>, name: impl Into<String>, parent: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            kind: GroupKind::SystemDerived,
            parent: Some(parent.into()),
            info: None,
            default_selected: true,
            actions: Vec::new(),
        }
    }

    pub fn with_info(mut self, info: Option<InfoField>) -> Self {
        self.info = info;
        self
    }

    pub fn with_actions(mut self, actions: Vec<Action>) -> Self {
        self.actions = actions;
        self
    }

    fn into_node(self) -> GroupNode {
        GroupNode {
            id: self.id,
            name: self.name,
            kind: self.kind,
            info: self.info,
            default_selected: self.default_selected,
            actions: self.actions,
            children: Vec::new(),
        }
    }
}

/// A classified action and the activation timing that picks its derived sub-group.
#[derive(Debug, Clone, PartialEq)]
pub struct Entry {
    pub action: Action,
    pub activation: Option<ActivationType>,
}

impl Entry {
    pub fn new(action: Action, activation: Option<ActivationType>) -> Self {
        Self { action, activation }
    }
}

/// The base group holding every entry, followed by one derived group per
/// activation bucket, in bucket order.
pub fn with_activation_groups(mut base: StagedGroup, entries: Vec<Entry>) -> Vec<StagedGroup> {
    let mut buckets: BTreeMap<ActivationGroup, Vec<Action>> = BTreeMap::new();
    for entry in &entries {
        let bucket = entry
            .activation
            .map_or(ActivationGroup::OtherActions, |activation| activation.group());
        buckets.entry(bucket).or_default().push(entry.action.clone());
    }

    let collapsed = base.id == groups::EQUIPPED.id || base.id == groups::UNEQUIPPED.id;
    let derived: Vec<StagedGroup> = buckets
        .into_iter()
        .map(|(bucket, actions)| {
            let mut group = StagedGroup::derived(
                format!("{}+{}", bucket.group_id(), base.id),
                base.name.clone(),
                bucket.group_id(),
            )
            .with_info(base.info.clone())
            .with_actions(actions);
            group.default_selected = !collapsed;
            group
        })
        .collect();

    base.actions = entries.into_iter().map(|entry| entry.action).collect();
    let mut out = Vec::with_capacity(derived.len() + 1);
    out.push(base);
    out.extend(derived);
    out
}

/// Places staged groups and prunes empty ones.
///
/// Activation containers are created on first use and always precede the
/// other roots, in bucket order.
pub struct TreeBuilder {
    roots: Vec<GroupNode>,
    containers: BTreeMap<ActivationGroup, GroupNode>,
    container_names: Vec<String>,
}

impl TreeBuilder {
    pub fn new(ctx: &ClassificationContext<'_>) -> Self {
        Self {
            roots: Vec::new(),
            containers: BTreeMap::new(),
            container_names: groups::ACTIVATIONS
                .iter()
                .map(|def| ctx.localize(def.name))
                .collect(),
        }
    }

    pub fn push(&mut self, staged: StagedGroup) {
        let parent = staged.parent.clone();
        let node = staged.into_node();
        let Some(parent) = parent else {
            merge_into(&mut self.roots, node);
            return;
        };

        if let Some(index) = ActivationGroup::ALL
            .iter()
            .position(|bucket| bucket.group_id() == parent)
        {
            let bucket = ActivationGroup::ALL[index];
            let name = self.container_names.get(index).cloned().unwrap_or_default();
            let container = self
                .containers
                .entry(bucket)
                .or_insert_with(|| GroupNode::new(bucket.group_id(), name, GroupKind::System));
            merge_into(&mut container.children, node);
        } else if let Some(parent_node) = find_mut(&mut self.roots, &parent) {
            merge_into(&mut parent_node.children, node);
        } else {
            tracing::warn!(group = %node.id, parent = %parent, "Parent group missing, placing at root");
            merge_into(&mut self.roots, node);
        }
    }

    pub fn extend(&mut self, staged: impl IntoIterator<Item = StagedGroup>) {
        for group in staged {
            self.push(group);
        }
    }

    pub fn build(self) -> GroupTree {
        let mut groups: Vec<GroupNode> = self.containers.into_values().collect();
        groups.extend(self.roots);
        prune(&mut groups);
        GroupTree { groups }
    }
}

fn merge_into(nodes: &mut Vec<GroupNode>, node: GroupNode) {
    match nodes.iter_mut().find(|existing| existing.id == node.id) {
        Some(existing) => {
            existing.actions.extend(node.actions);
            existing.children.extend(node.children);
            if existing.info.is_none() {
                existing.info = node.info;
            }
        }
        None => nodes.push(node),
    }
}

fn find_mut<'n>(nodes: &'n mut [GroupNode], id: &str) -> Option<&'n mut GroupNode> {
    nodes.iter_mut().find_map(|node| {
        if node.id == id {
            Some(node)
        } else {
            find_mut(&mut node.children, id)
        }
    })
}

fn prune(nodes: &mut Vec<GroupNode>) {
    for node in nodes.iter_mut() {
        prune(&mut node.children);
    }
    nodes.retain(|node| !node.is_empty());
}
