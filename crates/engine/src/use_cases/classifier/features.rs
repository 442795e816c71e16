//! Feature groups: active/passive plus thematic type and subtype buckets.

use std::collections::HashMap;

use tahud_domain::{dnd5e, groups, Item, ItemType};
use tahud_shared::ItemKind;

use super::builder::{with_activation_groups, Entry, StagedGroup};
use super::context::ClassificationContext;
use super::metadata::item_action;

/// Each feature is classified once and then fanned out to every bucket it belongs to.
pub fn build_features(ctx: &ClassificationContext<'_>) -> Vec<StagedGroup> {
    let mut buckets: HashMap<&'static str, Vec<Entry>> = HashMap::new();
    for item in ctx.items_of(ItemType::Feat) {
        let action = item_action(ctx, item, ItemKind::Feature);
        for bucket in feature_buckets(item) {
            buckets
                .entry(bucket)
                .or_default()
                .push(Entry::new(action.clone(), item.activation));
        }
    }

    groups::FEATURES
        .iter()
        .filter_map(|def| buckets.remove(def.id).map(|entries| (*def, entries)))
        .flat_map(|(def, entries)| with_activation_groups(StagedGroup::system(def, ctx), entries))
        .collect()
}

/// Active or passive first, then the type and subtype buckets.
pub fn feature_buckets(item: &Item) -> Vec<&'static str> {
    let primary = if item.activation.is_some() {
        groups::ACTIVE_FEATURES.id
    } else {
        groups::PASSIVE_FEATURES.id
    };
    let mut buckets = vec![primary];
    if let Some(feature) = &item.feature {
        buckets.extend(dnd5e::feature_type_group(&feature.value));
        buckets.extend(
            feature
                .subtype
                .as_deref()
                .and_then(dnd5e::feature_subtype_group),
        );
    }
    buckets
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::i18n::Catalog;
    use crate::test_fixtures::actors;
    use tahud_domain::{ActivationType, HudSettings, Selection, TokenRef};

    #[test]
    fn maneuver_fans_out_to_three_buckets() {
        let maneuver = Item::new("trip", "Trip Attack", ItemType::Feat)
            .with_activation(ActivationType::Bonus)
            .with_feature("class", Some("maneuver"));
        assert_eq!(
            feature_buckets(&maneuver),
            vec!["active-features", "class-features", "maneuvers"]
        );

        let mut actor = actors::fighter();
        actor.items.push(maneuver);
        let selection = Selection::single(TokenRef::new("t1", "fighter"), actor);
        let catalog = Catalog::default();
        let ctx = ClassificationContext::from_selection(&selection, &HudSettings::default(), &catalog);

        let staged = build_features(&ctx);
        let roots: Vec<&str> = staged
            .iter()
            .filter(|g| g.parent.is_none())
            .map(|g| g.id.as_str())
            .collect();
        assert_eq!(roots, vec!["active-features", "class-features", "maneuvers"]);
        assert!(staged.iter().any(|g| g.id == "bonus-actions+maneuvers"));
        assert!(staged
            .iter()
            .all(|g| g.actions.iter().all(|a| a.encoded_value() == "feature|trip")));
    }

    #[test]
    fn passive_feature_without_type_lands_once() {
        let feat = Item::new("darkvision", "Darkvision", ItemType::Feat).with_feature("race", None);
        assert_eq!(feature_buckets(&feat), vec!["passive-features", "race-features"]);

        let odd = Item::new("x", "Odd", ItemType::Feat).with_feature("weird", Some("unknown"));
        assert_eq!(feature_buckets(&odd), vec!["passive-features"]);
    }
}
