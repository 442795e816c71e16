//! Drives the host HUD from a classified group tree.

use std::sync::Arc;

use tahud_shared::{GroupNode, GroupTree};

use crate::infrastructure::ports::{HudPort, PortError};

pub struct HudRenderer {
    hud: Arc<dyn HudPort>,
}

impl HudRenderer {
    pub fn new(hud: Arc<dyn HudPort>) -> Self {
        Self { hud }
    }

    /// Register every group, parents before children.
    pub async fn render(&self, tree: &GroupTree) -> Result<(), PortError> {
        let mut pending: Vec<(&GroupNode, Option<&str>)> =
            tree.groups.iter().rev().map(|group| (group, None)).collect();

        while let Some((node, parent)) = pending.pop() {
            self.hud
                .add_group(node.header(), parent.map(str::to_string))
                .await?;
            if let Some(info) = &node.info {
                self.hud.add_group_info(node.id.clone(), info.clone()).await?;
            }
            if !node.actions.is_empty() {
                self.hud
                    .add_actions(node.id.clone(), node.actions.clone())
                    .await?;
            }
            pending.extend(
                node.children
                    .iter()
                    .rev()
                    .map(|child| (child, Some(node.id.as_str()))),
            );
        }
        Ok(())
    }
}
