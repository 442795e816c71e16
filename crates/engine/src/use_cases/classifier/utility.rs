//! Combat, exhaustion, rest and utility groups.

use tahud_domain::groups;
use tahud_shared::{Action, ActionCategory, ActionPayload, InfoField, UtilityAction};

use super::builder::StagedGroup;
use super::context::ClassificationContext;
use super::metadata::{list_name, SPOTLIGHT_CLASS};

const EXHAUSTION_ICON: &str = "modules/token-action-hud-dnd5e/icons/exhaustion.svg";

fn utility_action(ctx: &ClassificationContext<'_>, utility: UtilityAction, name_key: &str) -> Action {
    let name = ctx.localize(name_key);
    let mut action = Action::new(utility.as_str(), name.clone(), ActionPayload::Utility(utility));
    action.list_name = list_name(ctx, ActionCategory::Utility, &name);
    action
}

/// Initiative toggle, plus end-turn while the acting token holds the turn.
pub fn build_combat(ctx: &ClassificationContext<'_>) -> Vec<StagedGroup> {
    if ctx.tokens.is_empty() {
        return Vec::new();
    }

    let token_ids = ctx.token_ids();
    let combatants = ctx
        .combat
        .as_ref()
        .map(|combat| combat.combatants_for(&token_ids))
        .unwrap_or_default();

    let mut initiative =
        utility_action(ctx, UtilityAction::Initiative, "tokenActionHud.dnd5e.rollInitiative");
    initiative.active = Some(
        !combatants.is_empty() && combatants.iter().all(|combatant| combatant.initiative.is_some()),
    );
    if let [combatant] = combatants.as_slice() {
        initiative.info1 = combatant
            .initiative
            .map(|value| InfoField::new(value.to_string()).with_class(SPOTLIGHT_CLASS));
    }

    let mut actions = vec![initiative];
    let holds_turn = match (&ctx.combat, ctx.token) {
        (Some(combat), Some(token)) => combat.is_current_turn(&token.id),
        _ => false,
    };
    if holds_turn {
        actions.push(utility_action(ctx, UtilityAction::EndTurn, "tokenActionHud.endTurn"));
    }

    vec![StagedGroup::system(groups::COMBAT, ctx).with_actions(actions)]
}

pub fn build_exhaustion(ctx: &ClassificationContext<'_>) -> Vec<StagedGroup> {
    let Some(actor) = ctx.actor else {
        return Vec::new();
    };
    if !ctx.all_characters() {
        return Vec::new();
    }

    let level = actor.attributes.exhaustion;
    let name = ctx.localize("DND5E.Exhaustion");
    let mut action = Action::new("exhaustion", name.clone(), ActionPayload::Exhaustion);
    action.img = Some(EXHAUSTION_ICON.to_string());
    action.active = Some(level > 0);
    action.info1 = Some(InfoField::new(level.to_string()));
    action.list_name = list_name(ctx, ActionCategory::Exhaustion, &name);

    vec![StagedGroup::system(groups::EXHAUSTION, ctx).with_actions(vec![action])]
}

pub fn build_rests(ctx: &ClassificationContext<'_>) -> Vec<StagedGroup> {
    if !ctx.all_characters() {
        return Vec::new();
    }
    let actions = vec![
        utility_action(ctx, UtilityAction::ShortRest, "DND5E.REST.Short.Label"),
        utility_action(ctx, UtilityAction::LongRest, "DND5E.REST.Long.Label"),
    ];
    vec![StagedGroup::system(groups::RESTS, ctx).with_actions(actions)]
}

/// Death-save prompt while a single actor is dying, and the inspiration toggle.
pub fn build_utility(ctx: &ClassificationContext<'_>) -> Vec<StagedGroup> {
    if !ctx.all_characters() {
        return Vec::new();
    }

    let mut actions = Vec::new();
    if ctx.actor.is_some_and(|actor| actor.is_dying()) {
        actions.push(utility_action(ctx, UtilityAction::DeathSave, "DND5E.DeathSave"));
    }

    let mut inspiration = utility_action(ctx, UtilityAction::Inspiration, "DND5E.Inspiration");
    inspiration.active = Some(ctx.actors.iter().all(|actor| actor.attributes.inspiration));
    actions.push(inspiration);

    vec![StagedGroup::system(groups::UTILITY, ctx).with_actions(actions)]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::i18n::Catalog;
    use crate::test_fixtures::{actors, controlled};
    use tahud_domain::{CombatState, Combatant, HudSettings, Selection, TokenId, TokenRef};

    fn action_ids(staged: &[StagedGroup]) -> Vec<&str> {
        staged
            .iter()
            .flat_map(|group| group.actions.iter().map(|action| action.id.as_str()))
            .collect()
    }

    #[test]
    fn initiative_shows_single_combatant_value() {
        let selection = Selection::single(TokenRef::new("t1", "fighter"), actors::fighter());
        let catalog = Catalog::default();
        let combat = CombatState {
            current_token: Some(TokenId::new("t1")),
            combatants: vec![Combatant {
                token_id: TokenId::new("t1"),
                initiative: Some(17.0),
            }],
        };
        let ctx = ClassificationContext::from_selection(&selection, &HudSettings::default(), &catalog)
            .with_combat(Some(combat));

        let staged = build_combat(&ctx);
        assert_eq!(action_ids(&staged), vec!["initiative", "endTurn"]);
        let initiative = &staged[0].actions[0];
        assert_eq!(initiative.active, Some(true));
        assert_eq!(initiative.info1.as_ref().map(|i| i.text.as_str()), Some("17"));
    }

    #[test]
    fn end_turn_hidden_when_another_token_acts() {
        let selection = Selection::single(TokenRef::new("t1", "fighter"), actors::fighter());
        let catalog = Catalog::default();
        let combat = CombatState {
            current_token: Some(TokenId::new("t9")),
            combatants: vec![Combatant {
                token_id: TokenId::new("t1"),
                initiative: None,
            }],
        };
        let ctx = ClassificationContext::from_selection(&selection, &HudSettings::default(), &catalog)
            .with_combat(Some(combat));

        let staged = build_combat(&ctx);
        assert_eq!(action_ids(&staged), vec!["initiative"]);
        assert_eq!(staged[0].actions[0].active, Some(false));
    }

    #[test]
    fn death_save_only_while_dying() {
        let mut dying = actors::fighter();
        dying.attributes.hp.value = 0;
        let selection = Selection::single(TokenRef::new("t1", "fighter"), dying);
        let catalog = Catalog::default();
        let ctx = ClassificationContext::from_selection(&selection, &HudSettings::default(), &catalog);
        assert_eq!(action_ids(&build_utility(&ctx)), vec!["deathSave", "inspiration"]);

        let selection = Selection::single(TokenRef::new("t1", "fighter"), actors::fighter());
        let ctx = ClassificationContext::from_selection(&selection, &HudSettings::default(), &catalog);
        assert_eq!(action_ids(&build_utility(&ctx)), vec!["inspiration"]);
    }

    #[test]
    fn character_gate_is_all_or_nothing() {
        let selection = Selection::multiple(vec![
            controlled("t1", actors::fighter()),
            controlled("t2", actors::goblin()),
        ]);
        let catalog = Catalog::default();
        let ctx = ClassificationContext::from_selection(&selection, &HudSettings::default(), &catalog);

        assert!(build_rests(&ctx).is_empty());
        assert!(build_utility(&ctx).is_empty());
        assert_eq!(action_ids(&build_combat(&ctx)), vec!["initiative"]);
    }

    #[test]
    fn exhaustion_reflects_level() {
        let mut tired = actors::fighter();
        tired.attributes.exhaustion = 2;
        let selection = Selection::single(TokenRef::new("t1", "fighter"), tired);
        let catalog = Catalog::default();
        let ctx = ClassificationContext::from_selection(&selection, &HudSettings::default(), &catalog);

        let staged = build_exhaustion(&ctx);
        let action = &staged[0].actions[0];
        assert_eq!(action.encoded_value(), "exhaustion|exhaustion");
        assert_eq!(action.active, Some(true));
        assert_eq!(action.info1.as_ref().map(|i| i.text.as_str()), Some("2"));
    }
}
