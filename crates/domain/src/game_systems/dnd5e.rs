//! D&D 5th Edition lookup tables.
//!
//! Everything the HUD needs to know about the 5e rules vocabulary: ability
//! and skill ids, the default status conditions, and the fixed group catalogue
//! with the tables that map items, features, and spells onto it.

use crate::entities::{CastingMode, ConditionDefinition, ItemType};
use crate::ids::EffectId;

/// A group the HUD knows how to emit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GroupDef {
    pub id: &'static str,
    /// Localization key for the display name
    pub name: &'static str,
}

const fn group(id: &'static str, name: &'static str) -> GroupDef {
    GroupDef { id, name }
}

/// Ability ids in sheet order, with their name keys.
pub const ABILITIES: [(&str, &str); 6] = [
    ("str", "DND5E.AbilityStr"),
    ("dex", "DND5E.AbilityDex"),
    ("con", "DND5E.AbilityCon"),
    ("int", "DND5E.AbilityInt"),
    ("wis", "DND5E.AbilityWis"),
    ("cha", "DND5E.AbilityCha"),
];

/// Skill ids with their governing ability and name key.
pub const SKILLS: [(&str, &str, &str); 18] = [
    ("acr", "dex", "DND5E.SkillAcr"),
    ("ani", "wis", "DND5E.SkillAni"),
    ("arc", "int", "DND5E.SkillArc"),
    ("ath", "str", "DND5E.SkillAth"),
    ("dec", "cha", "DND5E.SkillDec"),
    ("his", "int", "DND5E.SkillHis"),
    ("ins", "wis", "DND5E.SkillIns"),
    ("itm", "cha", "DND5E.SkillItm"),
    ("inv", "int", "DND5E.SkillInv"),
    ("med", "wis", "DND5E.SkillMed"),
    ("nat", "int", "DND5E.SkillNat"),
    ("prc", "wis", "DND5E.SkillPrc"),
    ("prf", "cha", "DND5E.SkillPrf"),
    ("per", "cha", "DND5E.SkillPer"),
    ("rel", "int", "DND5E.SkillRel"),
    ("slt", "dex", "DND5E.SkillSlt"),
    ("ste", "dex", "DND5E.SkillSte"),
    ("sur", "wis", "DND5E.SkillSur"),
];

pub fn ability_name_key(id: &str) -> Option<&'static str> {
    ABILITIES.iter().find(|(a, _)| *a == id).map(|(_, name)| *name)
}

/// Get the skill's governing ability.
pub fn skill_ability(skill: &str) -> Option<&'static str> {
    SKILLS.iter().find(|(s, _, _)| *s == skill).map(|(_, ability, _)| *ability)
}

pub fn skill_name_key(skill: &str) -> Option<&'static str> {
    SKILLS.iter().find(|(s, _, _)| *s == skill).map(|(_, _, name)| *name)
}

/// Fixed id of the effect the 5e system creates for a status: `dnd5e{status}`
/// right-padded with `0` to 16 characters.
pub fn status_effect_id(status: &str) -> EffectId {
    EffectId::new(format!("{:0<16}", format!("dnd5e{}", status)))
}

/// Status conditions the 5e system registers when the host supplies none.
pub fn default_conditions() -> Vec<ConditionDefinition> {
    [
        "blinded",
        "charmed",
        "deafened",
        "frightened",
        "grappled",
        "incapacitated",
        "invisible",
        "paralyzed",
        "petrified",
        "poisoned",
        "prone",
        "restrained",
        "stunned",
        "unconscious",
    ]
    .into_iter()
    .map(|id| {
        let mut chars = id.chars();
        let title: String = chars
            .next()
            .map(|c| c.to_ascii_uppercase())
            .into_iter()
            .chain(chars)
            .collect();
        ConditionDefinition {
            id: id.to_string(),
            name: format!("DND5E.Con{}", title),
            img: Some(format!("systems/dnd5e/icons/svg/statuses/{}.svg", id)),
            effect_id: Some(status_effect_id(id)),
            reference: None,
        }
    })
    .collect()
}

pub mod groups {
    use super::{group, GroupDef};

    pub const ABILITIES: GroupDef = group("abilities", "tokenActionHud.dnd5e.abilities");
    pub const CHECKS: GroupDef = group("checks", "tokenActionHud.dnd5e.checks");
    pub const SAVES: GroupDef = group("saves", "DND5E.ClassSaves");
    pub const SKILLS: GroupDef = group("skills", "tokenActionHud.dnd5e.skills");
    pub const CONDITIONS: GroupDef = group("conditions", "tokenActionHud.dnd5e.conditions");
    pub const COUNTERS: GroupDef = group("counters", "tokenActionHud.dnd5e.counters");
    pub const COMBAT: GroupDef = group("combat", "tokenActionHud.combat");
    pub const EXHAUSTION: GroupDef = group("exhaustion", "DND5E.Exhaustion");
    pub const RESTS: GroupDef = group("rests", "tokenActionHud.dnd5e.rests");
    pub const UTILITY: GroupDef = group("utility", "tokenActionHud.utility");
    pub const TEMPORARY_EFFECTS: GroupDef = group("temporary-effects", "DND5E.EffectTemporary");
    pub const PASSIVE_EFFECTS: GroupDef = group("passive-effects", "DND5E.EffectPassive");
    pub const MAGIC_ITEMS: GroupDef = group("magic-items", "tokenActionHud.dnd5e.magicItems");

    pub const EQUIPPED: GroupDef = group("equipped", "DND5E.Equipped");
    pub const UNEQUIPPED: GroupDef = group("unequipped", "DND5E.Unequipped");
    pub const CONSUMABLES: GroupDef = group("consumables", "TYPES.Item.consumablePl");
    pub const CONTAINERS: GroupDef = group("containers", "TYPES.Item.containerPl");
    pub const EQUIPMENT: GroupDef = group("equipment", "TYPES.Item.equipmentPl");
    pub const LOOT: GroupDef = group("loot", "TYPES.Item.lootPl");
    pub const TOOLS: GroupDef = group("tools", "TYPES.Item.toolPl");
    pub const WEAPONS: GroupDef = group("weapons", "TYPES.Item.weaponPl");

    pub const ACTIVE_FEATURES: GroupDef = group("active-features", "tokenActionHud.dnd5e.activeFeatures");
    pub const PASSIVE_FEATURES: GroupDef =
        group("passive-features", "tokenActionHud.dnd5e.passiveFeatures");

    pub const CANTRIPS: GroupDef = group("cantrips", "tokenActionHud.dnd5e.cantrips");
    pub const AT_WILL_SPELLS: GroupDef = group("at-will-spells", "tokenActionHud.dnd5e.atWillSpells");
    pub const INNATE_SPELLS: GroupDef = group("innate-spells", "tokenActionHud.dnd5e.innateSpells");
    pub const PACT_SPELLS: GroupDef = group("pact-spells", "tokenActionHud.dnd5e.pactSpells");
    pub const ADDITIONAL_SPELLS: GroupDef =
        group("additional-spells", "DND5E.CAST.SECTIONS.Spellbook");

    /// Spell levels 1-9, index = level - 1.
    pub const SPELL_LEVELS: [GroupDef; 9] = [
        group("1st-level-spells", "tokenActionHud.dnd5e.1stLevelSpells"),
        group("2nd-level-spells", "tokenActionHud.dnd5e.2ndLevelSpells"),
        group("3rd-level-spells", "tokenActionHud.dnd5e.3rdLevelSpells"),
        group("4th-level-spells", "tokenActionHud.dnd5e.4thLevelSpells"),
        group("5th-level-spells", "tokenActionHud.dnd5e.5thLevelSpells"),
        group("6th-level-spells", "tokenActionHud.dnd5e.6thLevelSpells"),
        group("7th-level-spells", "tokenActionHud.dnd5e.7thLevelSpells"),
        group("8th-level-spells", "tokenActionHud.dnd5e.8thLevelSpells"),
        group("9th-level-spells", "tokenActionHud.dnd5e.9thLevelSpells"),
    ];

    /// Feature groups in emission order.
    pub const FEATURES: [GroupDef; 22] = [
        ACTIVE_FEATURES,
        PASSIVE_FEATURES,
        group("background-features", "tokenActionHud.dnd5e.backgroundFeatures"),
        group("class-features", "tokenActionHud.dnd5e.classFeatures"),
        group("feats", "tokenActionHud.dnd5e.feats"),
        group("monster-features", "tokenActionHud.dnd5e.monsterFeatures"),
        group("race-features", "tokenActionHud.dnd5e.raceFeatures"),
        group("artificer-infusions", "tokenActionHud.dnd5e.artificerInfusions"),
        group("channel-divinity", "tokenActionHud.dnd5e.channelDivinity"),
        group("defensive-tactics", "tokenActionHud.dnd5e.defensiveTactics"),
        group("eldritch-invocations", "tokenActionHud.dnd5e.eldritchInvocations"),
        group("elemental-disciplines", "tokenActionHud.dnd5e.elementalDisciplines"),
        group("fighting-styles", "tokenActionHud.dnd5e.fightingStyles"),
        group("hunters-prey", "tokenActionHud.dnd5e.huntersPrey"),
        group("ki-abilities", "tokenActionHud.dnd5e.kiAbilities"),
        group("maneuvers", "tokenActionHud.dnd5e.maneuvers"),
        group("metamagic-options", "tokenActionHud.dnd5e.metamagicOptions"),
        group("multiattacks", "tokenActionHud.dnd5e.multiattacks"),
        group("pact-boons", "tokenActionHud.dnd5e.pactBoons"),
        group("psionic-powers", "tokenActionHud.dnd5e.psionicPowers"),
        group("runes", "tokenActionHud.dnd5e.runes"),
        group("superior-hunters-defense", "tokenActionHud.dnd5e.superiorHuntersDefense"),
    ];

    /// Inventory groups for characters and NPCs, in emission order.
    pub const INVENTORY: [GroupDef; 8] = [
        EQUIPPED, CONSUMABLES, CONTAINERS, EQUIPMENT, LOOT, TOOLS, WEAPONS, UNEQUIPPED,
    ];

    /// Vehicles only carry these.
    pub const VEHICLE_INVENTORY: [GroupDef; 4] = [CONSUMABLES, EQUIPMENT, TOOLS, WEAPONS];

    /// Activation containers, matching `ActivationGroup::ALL`.
    pub const ACTIVATIONS: [GroupDef; 8] = [
        group("actions", "DND5E.ActionPl"),
        group("bonus-actions", "tokenActionHud.dnd5e.bonusActions"),
        group("crew-actions", "tokenActionHud.dnd5e.crewActions"),
        group("lair-actions", "tokenActionHud.dnd5e.lairActions"),
        group("legendary-actions", "tokenActionHud.dnd5e.legendaryActions"),
        group("reactions", "DND5E.ReactionPl"),
        group("special-actions", "tokenActionHud.dnd5e.specialActions"),
        group("other-actions", "tokenActionHud.dnd5e.otherActions"),
    ];
}

/// Every group the catalogue defines, for name lookups.
fn all_groups() -> Vec<GroupDef> {
    let mut all = vec![
        groups::ABILITIES,
        groups::CHECKS,
        groups::SAVES,
        groups::SKILLS,
        groups::CONDITIONS,
        groups::COUNTERS,
        groups::COMBAT,
        groups::EXHAUSTION,
        groups::RESTS,
        groups::UTILITY,
        groups::TEMPORARY_EFFECTS,
        groups::PASSIVE_EFFECTS,
        groups::MAGIC_ITEMS,
    ];
    all.extend(groups::INVENTORY);
    all.extend(groups::FEATURES);
    all.extend(spell_groups());
    all.extend(groups::ACTIVATIONS);
    all
}

/// Look up a catalogue group by id.
pub fn group_def(id: &str) -> Option<GroupDef> {
    all_groups().into_iter().find(|g| g.id == id)
}

/// Thematic feature bucket for a feature type, e.g. `class` -> `class-features`.
pub fn feature_type_group(feature_type: &str) -> Option<&'static str> {
    match feature_type {
        "background" => Some("background-features"),
        "class" => Some("class-features"),
        "monster" => Some("monster-features"),
        "race" => Some("race-features"),
        "feat" | "feats" => Some("feats"),
        _ => None,
    }
}

/// Thematic feature bucket for a feature subtype, e.g. `maneuver` -> `maneuvers`.
pub fn feature_subtype_group(subtype: &str) -> Option<&'static str> {
    match subtype {
        "artificerInfusion" => Some("artificer-infusions"),
        "channelDivinity" => Some("channel-divinity"),
        "defensiveTactic" => Some("defensive-tactics"),
        "eldritchInvocation" => Some("eldritch-invocations"),
        "elementalDiscipline" => Some("elemental-disciplines"),
        "fightingStyle" => Some("fighting-styles"),
        "huntersPrey" => Some("hunters-prey"),
        "ki" => Some("ki-abilities"),
        "maneuver" => Some("maneuvers"),
        "metamagic" => Some("metamagic-options"),
        "multiattack" => Some("multiattacks"),
        "pact" => Some("pact-boons"),
        "psionicPower" => Some("psionic-powers"),
        "rune" => Some("runes"),
        "superiorHuntersDefense" => Some("superior-hunters-defense"),
        _ => None,
    }
}

/// Type bucket an inventory item fans out into.
pub fn item_type_group(item_type: ItemType) -> Option<&'static str> {
    match item_type {
        ItemType::Consumable => Some(groups::CONSUMABLES.id),
        ItemType::Container => Some(groups::CONTAINERS.id),
        ItemType::Equipment => Some(groups::EQUIPMENT.id),
        ItemType::Loot => Some(groups::LOOT.id),
        ItemType::Tool => Some(groups::TOOLS.id),
        ItemType::Weapon => Some(groups::WEAPONS.id),
        ItemType::Feat | ItemType::Spell | ItemType::Other => None,
    }
}

/// Group a spell of the given mode and level sorts into.
pub fn spell_group(method: CastingMode, level: u8) -> Option<GroupDef> {
    match method {
        CastingMode::AtWill => Some(groups::AT_WILL_SPELLS),
        CastingMode::Innate => Some(groups::INNATE_SPELLS),
        CastingMode::Pact => Some(groups::PACT_SPELLS),
        CastingMode::Spell | CastingMode::Other => match level {
            0 => Some(groups::CANTRIPS),
            1..=9 => Some(groups::SPELL_LEVELS[usize::from(level) - 1]),
            _ => None,
        },
    }
}

/// Spell groups in emission order.
pub fn spell_groups() -> Vec<GroupDef> {
    let mut order = vec![groups::CANTRIPS];
    order.extend(groups::SPELL_LEVELS);
    order.extend([
        groups::AT_WILL_SPELLS,
        groups::INNATE_SPELLS,
        groups::PACT_SPELLS,
        groups::ADDITIONAL_SPELLS,
    ]);
    order
}
