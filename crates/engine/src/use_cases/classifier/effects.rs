//! Passive and temporary effect toggles.

use std::collections::HashSet;

use tahud_domain::{groups, ActiveEffect, EffectId};

use super::builder::StagedGroup;
use super::context::ClassificationContext;
use super::metadata::effect_action;

/// Suppressed effects, effects backing a listed condition, and effects from
/// unidentified items (unless the viewer is the GM) are left out.
///
/// An effect backs a condition when it has the condition's fixed effect id or
/// applies that status and nothing else.
pub fn build_effects(ctx: &ClassificationContext<'_>) -> Vec<StagedGroup> {
    let Some(actor) = ctx.actor else {
        return Vec::new();
    };
    let condition_effects: HashSet<&EffectId> = ctx
        .conditions
        .iter()
        .filter_map(|condition| condition.effect_id.as_ref())
        .collect();
    let backs_condition = |effect: &ActiveEffect| {
        condition_effects.contains(&effect.id)
            || ctx
                .conditions
                .iter()
                .any(|condition| effect.is_only_status(&condition.id))
    };

    let mut passive = Vec::new();
    let mut temporary = Vec::new();
    for effect in &actor.effects {
        if effect.suppressed
            || (effect.is_from_unidentified_item() && !ctx.is_gm)
            || backs_condition(effect)
        {
            continue;
        }
        let action = effect_action(ctx, effect);
        if effect.temporary {
            temporary.push(action);
        } else {
            passive.push(action);
        }
    }

    vec![
        StagedGroup::system(groups::PASSIVE_EFFECTS, ctx).with_actions(passive),
        StagedGroup::system(groups::TEMPORARY_EFFECTS, ctx).with_actions(temporary),
    ]
}
