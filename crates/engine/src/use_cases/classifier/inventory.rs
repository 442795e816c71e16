//! Inventory groups: equipped/unequipped plus per-type buckets.

use std::collections::HashMap;

use tahud_domain::{dnd5e, groups, ActorKind, GroupDef, HudSettings, Item, ItemType};
use tahud_shared::ItemKind;

use super::builder::{with_activation_groups, Entry, StagedGroup};
use super::context::ClassificationContext;
use super::metadata::item_action;

pub fn build_inventory(ctx: &ClassificationContext<'_>) -> Vec<StagedGroup> {
    let layout: &[GroupDef] = if ctx.actor_kind() == Some(ActorKind::Vehicle) {
        &groups::VEHICLE_INVENTORY
    } else {
        &groups::INVENTORY
    };

    let mut buckets: HashMap<&'static str, Vec<Entry>> = HashMap::new();
    for item in ctx.items.iter().copied() {
        if item.quantity() == 0 || !is_active(&ctx.settings, item) {
            continue;
        }
        let action = item_action(ctx, item, ItemKind::Item);
        for bucket in inventory_buckets(&ctx.settings, item) {
            buckets
                .entry(bucket)
                .or_default()
                .push(Entry::new(action.clone(), item.activation));
        }
    }

    layout
        .iter()
        .filter_map(|def| buckets.remove(def.id).map(|entries| (*def, entries)))
        .flat_map(|(def, entries)| with_activation_groups(StagedGroup::system(def, ctx), entries))
        .collect()
}

/// Equipped or unequipped, then at most one type bucket.
pub fn inventory_buckets(settings: &HudSettings, item: &Item) -> Vec<&'static str> {
    let mut buckets = vec![if item.equipped {
        groups::EQUIPPED.id
    } else {
        groups::UNEQUIPPED.id
    }];
    if item.item_type == ItemType::Consumable {
        if is_usable(settings, item) {
            buckets.push(groups::CONSUMABLES.id);
        }
    } else if is_equipped_item(settings, item) {
        buckets.extend(dnd5e::item_type_group(item.item_type));
    }
    buckets
}

/// Has a recognized activation, is a tool, or the setting shows everything.
fn is_active(settings: &HudSettings, item: &Item) -> bool {
    settings.show_items_without_activation_costs
        || item.has_activation()
        || item.item_type == ItemType::Tool
}

/// Has charges left, has no charge limit, or uncharged items are shown.
pub fn is_usable(settings: &HudSettings, item: &Item) -> bool {
    settings.show_uncharged_items
        || item
            .uses
            .map_or(true, |uses| !uses.has_max() || uses.value() > 0)
}

fn is_equipped_item(settings: &HudSettings, item: &Item) -> bool {
    let excluded = matches!(
        item.item_type,
        ItemType::Consumable | ItemType::Spell | ItemType::Feat
    );
    (settings.show_unequipped_items && !excluded)
        || (item.equipped && item.item_type != ItemType::Consumable)
}
