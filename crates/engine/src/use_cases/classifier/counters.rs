//! Counter toggles: the built-in trio or a configured custom list.

use tahud_domain::{
    groups, ActorSnapshot, CounterDefinition, CounterValue, DEATH_SAVES_COUNTER,
    EXHAUSTION_COUNTER, INSPIRATION_COUNTER,
};
use tahud_shared::{Action, ActionCategory, ActionPayload, InfoField};

use super::builder::StagedGroup;
use super::context::ClassificationContext;
use super::metadata::list_name;

const ICON_DIR: &str = "modules/token-action-hud-dnd5e/icons";

/// A non-empty custom list replaces the built-in counters entirely.
pub fn build_counters(ctx: &ClassificationContext<'_>) -> Vec<StagedGroup> {
    let Some(actor) = ctx.actor else {
        return Vec::new();
    };

    let counters: Vec<CounterDefinition> = match &ctx.custom_counters {
        Some(custom) if !custom.is_empty() => {
            custom.iter().filter(|counter| counter.visible).cloned().collect()
        }
        _ => CounterDefinition::built_in(),
    };

    let actions: Vec<Action> = counters
        .iter()
        .map(|counter| counter_action(ctx, actor, counter))
        .collect();
    vec![StagedGroup::system(groups::COUNTERS, ctx).with_actions(actions)]
}

fn counter_action(
    ctx: &ClassificationContext<'_>,
    actor: &ActorSnapshot,
    counter: &CounterDefinition,
) -> Action {
    let name = ctx.localize(&counter.name);
    let payload = ActionPayload::Counter {
        key: counter.key.clone(),
        counter_type: (!counter.system).then_some(counter.counter_type),
    };
    let mut action = Action::new(counter.key.clone(), name.clone(), payload);
    action.list_name = list_name(ctx, ActionCategory::Counter, &name);

    if counter.system {
        let attributes = &actor.attributes;
        match counter.key.as_str() {
            EXHAUSTION_COUNTER => {
                action.active = Some(attributes.exhaustion > 0);
                action.img = Some(format!("{}/exhaustion.svg", ICON_DIR));
                action.info1 = Some(InfoField::new(attributes.exhaustion.to_string()));
            }
            DEATH_SAVES_COUNTER => {
                action.img = Some(format!("{}/death-saves.svg", ICON_DIR));
                action.info1 = Some(InfoField::new(format!(
                    "{}/{}",
                    attributes.death.success, attributes.death.failure
                )));
            }
            INSPIRATION_COUNTER => {
                action.active = Some(attributes.inspiration);
                action.img = Some(format!("{}/inspiration.svg", ICON_DIR));
            }
            other => tracing::debug!(counter = %other, "Unknown system counter"),
        }
    } else {
        let value = CounterValue::decode(counter.counter_type, actor.counter_value(&counter.key));
        action.active = value.toggle_state();
        action.info1 = value.display().map(InfoField::new);
    }
    action
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::i18n::Catalog;
    use crate::test_fixtures::actors;
    use serde_json::json;
    use tahud_domain::{CounterType, HudSettings, Selection, TokenRef};

    fn definition(key: &str, counter_type: CounterType, visible: bool) -> CounterDefinition {
        CounterDefinition {
            key: key.into(),
            name: key.into(),
            counter_type,
            system: false,
            visible,
        }
    }

    #[test]
    fn built_in_counters_read_attributes() {
        let mut actor = actors::fighter();
        actor.attributes.exhaustion = 2;
        actor.attributes.death.success = 1;
        actor.attributes.death.failure = 2;
        let selection = Selection::single(TokenRef::new("t1", "fighter"), actor);
        let catalog = Catalog::default();
        let ctx = ClassificationContext::from_selection(&selection, &HudSettings::default(), &catalog);

        let groups = build_counters(&ctx);
        let actions = &groups[0].actions;
        assert_eq!(actions.len(), 3);
        assert_eq!(actions[0].info1.as_ref().unwrap().text, "1/2");
        assert_eq!(actions[1].active, Some(true));
        assert_eq!(actions[1].encoded_value(), "counter|exhaustion");
        assert_eq!(actions[2].active, Some(false));
    }

    #[test]
    fn custom_list_replaces_built_ins() {
        let mut actor = actors::fighter();
        actor.counters.insert("luck".into(), json!(3));
        actor
            .counters
            .insert("focus".into(), json!({ "value": 0, "max": 2 }));
        let selection = Selection::single(TokenRef::new("t1", "fighter"), actor);
        let catalog = Catalog::default();
        let ctx = ClassificationContext::from_selection(&selection, &HudSettings::default(), &catalog)
            .with_custom_counters(Some(vec![
                definition("luck", CounterType::Number, true),
                definition("focus", CounterType::Fraction, true),
                definition("hidden", CounterType::Checkbox, false),
            ]));

        let groups = build_counters(&ctx);
        let actions = &groups[0].actions;
        assert_eq!(actions.len(), 2);
        assert_eq!(actions[0].encoded_value(), "counter|luck>number");
        assert_eq!(actions[0].active, Some(true));
        assert_eq!(actions[0].info1.as_ref().unwrap().text, "3");
        assert_eq!(actions[1].active, Some(false));
        assert_eq!(actions[1].info1.as_ref().unwrap().text, "0/2");
    }

    #[test]
    fn empty_custom_list_falls_back() {
        let selection = Selection::single(TokenRef::new("t1", "fighter"), actors::fighter());
        let catalog = Catalog::default();
        let ctx = ClassificationContext::from_selection(&selection, &HudSettings::default(), &catalog)
            .with_custom_counters(Some(Vec::new()));

        assert_eq!(build_counters(&ctx)[0].actions.len(), 3);
    }
}
