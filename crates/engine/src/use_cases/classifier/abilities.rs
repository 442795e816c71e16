//! Ability, check, save and skill groups.

use tahud_domain::{dnd5e, groups, AbilityScore, DomainError, ProficiencyLevel, SkillEntry};
use tahud_shared::{AbilityRoll, Action, ActionCategory, ActionPayload, InfoField};

use super::builder::StagedGroup;
use super::context::ClassificationContext;
use super::metadata::{capitalize, list_name, proficiency_icon, signed};

/// One group per roll kind. Without a single actor the system abilities are
/// listed without modifiers.
pub fn build_abilities(ctx: &ClassificationContext<'_>, roll: AbilityRoll) -> Vec<StagedGroup> {
    let def = match roll {
        AbilityRoll::Ability => groups::ABILITIES,
        AbilityRoll::Check => groups::CHECKS,
        AbilityRoll::Save => groups::SAVES,
    };

    let actions: Vec<Action> = match ctx.actor {
        Some(actor) => actor
            .abilities
            .iter()
            .filter(|score| score.value != 0)
            .map(|score| ability_action(ctx, roll, &score.id, Some(score)))
            .collect(),
        None => dnd5e::ABILITIES
            .iter()
            .map(|(id, _)| ability_action(ctx, roll, id, None))
            .collect(),
    };

    if actions.is_empty() {
        return Vec::new();
    }
    vec![StagedGroup::system(def, ctx).with_actions(actions)]
}

fn ability_action(
    ctx: &ClassificationContext<'_>,
    roll: AbilityRoll,
    id: &str,
    score: Option<&AbilityScore>,
) -> Action {
    let full_name = dnd5e::ability_name_key(id).map_or_else(|| id.to_string(), |key| ctx.localize(key));
    let name = if ctx.settings.abbreviate_skills {
        capitalize(id)
    } else {
        full_name.clone()
    };
    let category = roll.category();
    let payload = ActionPayload::Ability {
        roll,
        ability: id.to_string(),
    };

    let mut action = Action::new(format!("{}-{}", category, id), name, payload);
    action.list_name = list_name(ctx, category, &full_name);

    let Some(score) = score else {
        return action;
    };
    if roll != AbilityRoll::Check {
        action.icon1 = Some(proficiency_icon(ctx, score.proficient));
    }

    let modifier = signed(match roll {
        AbilityRoll::Save => score.save_modifier(),
        AbilityRoll::Ability | AbilityRoll::Check => score.modifier,
    });
    action.info1 = Some(
        InfoField::new(modifier.clone())
            .with_title(format!("{}: {}", ctx.localize("DND5E.ActionAbil"), modifier)),
    );
    if roll == AbilityRoll::Ability {
        let save = signed(score.save_modifier());
        action.info2 = Some(
            InfoField::new(format!("({})", save))
                .with_title(format!("{}: {}", ctx.localize("DND5E.SavingThrow"), save)),
        );
    }
    action
}

/// Skills the actor defines, or the system list without an actor.
/// A skill that fails to classify is dropped and logged.
pub fn build_skills(ctx: &ClassificationContext<'_>) -> Vec<StagedGroup> {
    let actions: Vec<Action> = match ctx.actor {
        Some(actor) => actor
            .skills
            .iter()
            .filter_map(|skill| match skill_action(ctx, &skill.id, Some(skill)) {
                Ok(action) => Some(action),
                Err(e) => {
                    tracing::error!(skill = %skill.id, error = %e, "Dropping skill");
                    None
                }
            })
            .collect(),
        None => dnd5e::SKILLS
            .iter()
            .filter_map(|(id, _, _)| skill_action(ctx, id, None).ok())
            .collect(),
    };

    if actions.is_empty() {
        return Vec::new();
    }
    vec![StagedGroup::system(groups::SKILLS, ctx).with_actions(actions)]
}

fn skill_action(
    ctx: &ClassificationContext<'_>,
    id: &str,
    entry: Option<&SkillEntry>,
) -> Result<Action, DomainError> {
    let name_key = dnd5e::skill_name_key(id).ok_or_else(|| DomainError::not_found("Skill", id))?;
    let proficiency = entry
        .map(|skill| ProficiencyLevel::try_from(skill.value))
        .transpose()?
        .unwrap_or_default();

    let full_name = ctx.localize(name_key);
    let name = if ctx.settings.abbreviate_skills {
        capitalize(id)
    } else {
        full_name.clone()
    };
    let payload = ActionPayload::Skill {
        skill: id.to_string(),
    };

    let mut action = Action::new(id, name, payload);
    action.icon1 = Some(proficiency_icon(ctx, proficiency));
    action.info1 = entry.map(|skill| InfoField::new(signed(skill.total)));
    action.list_name = list_name(ctx, ActionCategory::Skill, &full_name);
    Ok(action)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::i18n::Catalog;
    use crate::test_fixtures::actors;
    use tahud_domain::{ActorSnapshot, HudSettings, Selection, TokenRef};

    fn single(actor: ActorSnapshot) -> Selection {
        Selection::single(TokenRef::new("t1", actor.id.as_str()), actor)
    }

    #[test]
    fn save_group_uses_save_modifier() {
        let selection = single(actors::fighter());
        let catalog = Catalog::default();
        let ctx = ClassificationContext::from_selection(&selection, &HudSettings::default(), &catalog);

        let saves = build_abilities(&ctx, AbilityRoll::Save);
        let str_save = &saves[0].actions[0];
        assert_eq!(str_save.id, "save-str");
        assert_eq!(str_save.info1.as_ref().unwrap().text, "+5");
        assert!(str_save.icon1.is_some());

        let checks = build_abilities(&ctx, AbilityRoll::Check);
        let str_check = &checks[0].actions[0];
        assert_eq!(str_check.info1.as_ref().unwrap().text, "+3");
        assert!(str_check.icon1.is_none());
        assert!(str_check.info2.is_none());

        let abilities = build_abilities(&ctx, AbilityRoll::Ability);
        assert_eq!(abilities[0].actions[0].info2.as_ref().unwrap().text, "(+5)");
    }

    #[test]
    fn zero_value_abilities_are_skipped() {
        let mut actor = actors::fighter();
        actor.abilities.iter_mut().for_each(|score| score.value = 0);
        let selection = single(actor);
        let catalog = Catalog::default();
        let ctx = ClassificationContext::from_selection(&selection, &HudSettings::default(), &catalog);

        assert!(build_abilities(&ctx, AbilityRoll::Ability).is_empty());
    }

    #[test]
    fn no_actor_lists_system_abilities_without_modifiers() {
        let selection = Selection::default();
        let catalog = Catalog::default();
        let ctx = ClassificationContext::from_selection(&selection, &HudSettings::default(), &catalog);

        let groups = build_abilities(&ctx, AbilityRoll::Check);
        assert_eq!(groups[0].actions.len(), 6);
        assert!(groups[0].actions.iter().all(|a| a.info1.is_none()));

        let skills = build_skills(&ctx);
        assert_eq!(skills[0].actions.len(), 18);
    }

    #[test]
    fn malformed_skill_is_dropped() {
        let mut actor = actors::fighter();
        actor.skills.push(SkillEntry {
            id: "ath".into(),
            value: 1.0,
            total: 5,
        });
        actor.skills.push(SkillEntry {
            id: "juggling".into(),
            value: 1.0,
            total: 2,
        });
        actor.skills.push(SkillEntry {
            id: "prc".into(),
            value: 3.0,
            total: 2,
        });
        let selection = single(actor);
        let settings = HudSettings {
            abbreviate_skills: true,
            ..Default::default()
        };
        let catalog = Catalog::default();
        let ctx = ClassificationContext::from_selection(&selection, &settings, &catalog);

        let skills = build_skills(&ctx);
        let names: Vec<&str> = skills[0].actions.iter().map(|a| a.name.as_str()).collect();
        assert_eq!(names, vec!["Ath"]);
        assert_eq!(skills[0].actions[0].info1.as_ref().unwrap().text, "+5");
    }
}
