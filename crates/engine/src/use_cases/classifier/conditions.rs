//! Status condition toggles.

use tahud_domain::groups;
use tahud_shared::{Action, ActionCategory, ActionPayload};

use super::builder::StagedGroup;
use super::context::ClassificationContext;
use super::metadata::{condition_tooltip, list_name};

/// Only built when at least one token is selected. A condition is active when
/// every selected actor carries it.
pub fn build_conditions(ctx: &ClassificationContext<'_>) -> Vec<StagedGroup> {
    if ctx.tokens.is_empty() {
        return Vec::new();
    }

    let actions: Vec<Action> = ctx
        .conditions
        .iter()
        .filter(|condition| !condition.id.is_empty())
        .map(|condition| {
            let active = !ctx.actors.is_empty()
                && ctx.actors.iter().all(|actor| actor.has_status(&condition.id));
            let name = ctx.localize(&condition.name);
            let payload = ActionPayload::Condition {
                condition: condition.id.clone(),
            };

            let mut action = Action::new(condition.id.clone(), name.clone(), payload);
            action.img = condition.img.clone();
            action.active = Some(active);
            action.list_name = list_name(ctx, ActionCategory::Condition, &name);
            action.tooltip = condition_tooltip(ctx, condition, &name);
            action
        })
        .collect();

    vec![StagedGroup::system(groups::CONDITIONS, ctx).with_actions(actions)]
}
