//! Display metadata shared by the stages: badges, info fields, list names and tooltips.

use tahud_domain::{
    ActivationType, ActiveEffect, CastingMode, ConditionDefinition, ConsumptionKind, Item,
    ItemType, PreparationState, ProficiencyLevel, RecoveryPeriod, TooltipMode, Uses,
};
use tahud_shared::{Action, ActionCategory, ActionPayload, InfoField, ItemKind};

use super::context::ClassificationContext;

const PREPARED_ICON: &str = "fas fa-sun";
const DISABLED_ICON_CLASS: &str = "tah-icon-disabled";
const CONCENTRATION_ICON: &str = "systems/dnd5e/icons/svg/statuses/concentrating.svg";
pub const SPOTLIGHT_CLASS: &str = "tah-spotlight";

/// Build the action for an owned item, feature or spell.
pub fn item_action(ctx: &ClassificationContext<'_>, item: &Item, kind: ItemKind) -> Action {
    let payload = ActionPayload::Item {
        kind,
        item_id: item.id.clone(),
    };
    let mut action = Action::new(item.id.as_str(), item.name.clone(), payload);
    action.img = item.img.clone();
    action.icon1 = item.activation.and_then(|activation| activation_icon(ctx, activation));
    action.icon2 = prepared_icon(ctx, item);
    action.icon3 = concentration_icon(ctx, item);
    action.info1 = if item.item_type == ItemType::Spell {
        spell_info(ctx, item)
    } else {
        quantity_info(ctx, item)
    };
    action.info2 = item.uses.and_then(|uses| uses_info(ctx, &uses));
    action.info3 = consumption_info(ctx, item);
    action.list_name = list_name(ctx, kind.category(), &item.name);
    action.tooltip = tooltip(ctx, &item.name, item.uuid.as_deref());
    action
}

/// Build the toggle action for an active effect.
pub fn effect_action(ctx: &ClassificationContext<'_>, effect: &ActiveEffect) -> Action {
    let payload = ActionPayload::Effect {
        effect_id: effect.id.clone(),
    };
    let mut action = Action::new(effect.id.as_str(), effect.name.clone(), payload);
    action.img = effect.img.clone();
    action.active = Some(!effect.disabled);
    action.list_name = list_name(ctx, ActionCategory::Effect, &effect.name);
    action.tooltip = tooltip(ctx, &effect.name, effect.uuid.as_deref());
    action
}

pub fn list_name(ctx: &ClassificationContext<'_>, category: ActionCategory, name: &str) -> String {
    format!("{}: {}", ctx.localize(category.label_key()), name)
}

pub fn tooltip(ctx: &ClassificationContext<'_>, name: &str, uuid: Option<&str>) -> Option<String> {
    match ctx.settings.tooltips {
        TooltipMode::None => None,
        TooltipMode::NameOnly => Some(name.to_string()),
        TooltipMode::Full => Some(uuid.map_or_else(|| name.to_string(), loading_section)),
    }
}

pub fn condition_tooltip(
    ctx: &ClassificationContext<'_>,
    condition: &ConditionDefinition,
    name: &str,
) -> Option<String> {
    match (ctx.settings.tooltips, condition.reference.as_deref()) {
        (TooltipMode::None, _) => None,
        (TooltipMode::Full, Some(reference)) => Some(loading_section(reference)),
        _ => Some(name.to_string()),
    }
}

fn loading_section(uuid: &str) -> String {
    format!(
        r#"<section class="loading" data-uuid="{}"><i class="fas fa-spinner fa-spin-pulse"></i></section>"#,
        uuid
    )
}

pub fn proficiency_icon(ctx: &ClassificationContext<'_>, level: ProficiencyLevel) -> String {
    icon_tag(level.icon_class(), &ctx.localize(level.label_key()))
}

pub fn activation_icon(ctx: &ClassificationContext<'_>, activation: ActivationType) -> Option<String> {
    activation
        .icon_class()
        .map(|class| icon_tag(class, &ctx.localize(activation.label_key())))
}

fn icon_tag(class: &str, title: &str) -> String {
    format!(r#"<i class="{}" title="{}"></i>"#, class, title)
}

/// Prepared badge for slot-cast spells above cantrip level.
fn prepared_icon(ctx: &ClassificationContext<'_>, item: &Item) -> Option<String> {
    if !ctx.settings.show_unprepared_spells {
        return None;
    }
    let spell = item.spell.as_ref()?;
    let slot_cast =
        spell.method == CastingMode::Spell || spell.prepared == PreparationState::Always;
    if !slot_cast || spell.is_cantrip() {
        return None;
    }

    let (class, title_key) = match spell.prepared {
        PreparationState::Always => (PREPARED_ICON.to_string(), "DND5E.SpellPrepAlways"),
        PreparationState::Prepared => (PREPARED_ICON.to_string(), "DND5E.SpellPrepared"),
        PreparationState::Unprepared => (
            format!("{} {}", PREPARED_ICON, DISABLED_ICON_CLASS),
            "DND5E.SpellUnprepared",
        ),
    };
    Some(icon_tag(&class, &ctx.localize(title_key)))
}

fn concentration_icon(ctx: &ClassificationContext<'_>, item: &Item) -> Option<String> {
    let spell = item.spell.as_ref()?;
    if !ctx.settings.display_spell_info || !spell.concentration {
        return None;
    }
    Some(format!(
        r#"<dnd5e-icon src="{}" title="{}">"#,
        CONCENTRATION_ICON,
        ctx.localize("DND5E.Scroll.RequiresConcentration")
    ))
}

/// Component abbreviations, e.g. `VSM [R]`.
fn spell_info(ctx: &ClassificationContext<'_>, item: &Item) -> Option<InfoField> {
    if !ctx.settings.display_spell_info {
        return None;
    }
    let spell = item.spell.as_ref()?;
    let components = [
        (spell.components.vocal, "DND5E.ComponentVerbal"),
        (spell.components.somatic, "DND5E.ComponentSomatic"),
        (spell.components.material, "DND5E.ComponentMaterial"),
    ];

    let mut text = String::new();
    let mut titles = Vec::new();
    for (_, label) in components.iter().filter(|(present, _)| *present) {
        text.push_str(&ctx.localize(&format!("{}Abbr", label)));
        titles.push(ctx.localize(label));
    }
    if spell.ritual {
        text.push_str(&format!(" [{}]", ctx.localize("DND5E.RitualAbbr")));
        titles.push(format!("[{}]", ctx.localize("DND5E.Ritual")));
    }

    if text.is_empty() {
        return None;
    }
    Some(InfoField::new(text.trim_start()).with_title(titles.join(", ")))
}

fn quantity_info(ctx: &ClassificationContext<'_>, item: &Item) -> Option<InfoField> {
    let quantity = item.quantity();
    (quantity > 1).then(|| {
        InfoField::new(quantity.to_string())
            .with_title(format!("{}: {}", ctx.localize("DND5E.Quantity"), quantity))
    })
}

/// Remaining uses, e.g. `2/3` titled `2/3 per Long Rest`.
pub fn uses_info(ctx: &ClassificationContext<'_>, uses: &Uses) -> Option<InfoField> {
    if !uses.has_max() {
        return None;
    }
    let text = format!("{}/{}", uses.value(), uses.max.unwrap_or(0));
    let title = match uses.recovery.and_then(|period| period.label_key().map(|key| (period, key))) {
        Some((RecoveryPeriod::Charges, key)) => format!("{} {}", text, ctx.localize(key)),
        Some((_, key)) => format!("{} {} {}", text, ctx.localize("DND5E.per"), ctx.localize(key)),
        None => text.clone(),
    };
    Some(InfoField::new(text).with_title(title))
}

/// What the item's activity consumes, read from the actor.
fn consumption_info(ctx: &ClassificationContext<'_>, item: &Item) -> Option<InfoField> {
    let actor = ctx.actor?;
    let consumption = item.consumption.as_ref()?;
    if consumption.target.is_empty() || consumption.target == item.id.as_str() {
        return None;
    }

    match consumption.kind {
        ConsumptionKind::Attribute => {
            let parent = consumption
                .target
                .rsplit_once('.')
                .map_or(consumption.target.as_str(), |(parent, _)| parent);
            let resource = actor.resource(parent)?;
            let text = if resource.max > 0 {
                format!("{}/{}", resource.value, resource.max)
            } else {
                resource.value.to_string()
            };
            let title = match &resource.label {
                Some(label) => format!("{} {}", text, label),
                None => text.clone(),
            };
            Some(InfoField::new(text).with_title(title))
        }
        kind => {
            let target = actor.item(&consumption.target.as_str().into())?;
            if kind == ConsumptionKind::ItemUses {
                return target.uses.and_then(|uses| uses_info(ctx, &uses));
            }
            let quantity = target.quantity();
            if quantity == 0 {
                return None;
            }
            let text = if consumption.value > 1 {
                format!("{} {} {}", consumption.value, ctx.localize("DND5E.of"), quantity)
            } else {
                quantity.to_string()
            };
            Some(InfoField::new(text.clone()).with_title(format!("{} {}", text, target.name)))
        }
    }
}

/// `+3` / `-1`
pub fn signed(modifier: i32) -> String {
    if modifier >= 0 {
        format!("+{}", modifier)
    } else {
        modifier.to_string()
    }
}

/// `str` -> `Str`
pub fn capitalize(id: &str) -> String {
    let mut chars = id.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
