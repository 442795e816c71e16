//! Magic items reported by the magic-item collaborator.

use tahud_domain::{groups, MagicItem, MagicItemEntry};
use tahud_shared::{Action, ActionCategory, ActionPayload, InfoField};

use super::builder::StagedGroup;
use super::context::ClassificationContext;
use super::metadata::{list_name, tooltip};

/// One derived group per usable magic item, nested under `magic-items`.
pub fn build_magic_items(ctx: &ClassificationContext<'_>) -> Vec<StagedGroup> {
    if ctx.actor.is_none() || ctx.magic_items.is_empty() {
        return Vec::new();
    }

    let parent = StagedGroup::system(groups::MAGIC_ITEMS, ctx);
    let mut staged = vec![parent];
    for item in ctx.magic_items.iter().filter(|item| item.is_usable()) {
        let actions = item
            .entries
            .iter()
            .map(|entry| entry_action(ctx, item, entry))
            .collect();
        staged.push(
            StagedGroup::derived(
                format!("{}_{}", groups::MAGIC_ITEMS.id, item.id),
                item.name.clone(),
                groups::MAGIC_ITEMS.id,
            )
            .with_info(Some(InfoField::new(format!("{}/{}", item.uses, item.charges))))
            .with_actions(actions),
        );
    }
    staged
}

fn entry_action(ctx: &ClassificationContext<'_>, item: &MagicItem, entry: &MagicItemEntry) -> Action {
    let payload = ActionPayload::MagicItem {
        item_id: item.id.clone(),
        effect_id: entry.id.clone(),
    };
    let mut action = Action::new(entry.id.clone(), entry.name.clone(), payload);
    action.img = entry.img.clone();
    action.info1 = entry.consumption.clone().map(InfoField::new);
    action.info2 = entry.base_level.map(|level| {
        InfoField::new(format!("{} {}", ctx.localize("DND5E.AbbreviationLevel"), level))
    });
    action.list_name = list_name(ctx, ActionCategory::MagicItem, &entry.name);
    action.tooltip = tooltip(ctx, &entry.name, None);
    action
}
