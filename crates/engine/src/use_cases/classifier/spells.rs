//! Spell groups and the spell-slot ledger that gates them.

use std::collections::{BTreeMap, HashMap};

use tahud_domain::{
    dnd5e, groups, ActorKind, CastingMode, GroupDef, ItemType, SlotKey, SpellDetails,
    SpellSlotPool,
};
use tahud_shared::{InfoField, ItemKind};

use super::builder::{with_activation_groups, Entry, StagedGroup};
use super::context::ClassificationContext;
use super::inventory::is_usable;
use super::metadata::{item_action, SPOTLIGHT_CLASS};

/// Remaining and maximum slots for one pool, and whether its group is shown.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SlotStatus {
    pub value: u32,
    pub max: u32,
    pub available: bool,
}

impl SlotStatus {
    /// `value/max` badge, only for pools with a maximum.
    pub fn info(&self) -> Option<InfoField> {
        (self.max > 0).then(|| {
            InfoField::new(format!("{}/{}", self.value, self.max)).with_class(SPOTLIGHT_CLASS)
        })
    }
}

/// Per-level slot availability, computed once per pass.
///
/// Levels are walked from 9 down to 1: a level is available when uncharged
/// items are shown or any pool at that level or higher, pact included, has a
/// slot left. A pact pool without a casting level is ignored.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SlotLedger {
    levels: BTreeMap<u8, SlotStatus>,
    pact: SlotStatus,
}

impl SlotLedger {
    pub fn new(pools: &[SpellSlotPool], show_uncharged: bool) -> Self {
        let pact = pools
            .iter()
            .find(|pool| pool.key == SlotKey::Pact && pool.level > 0);

        let mut levels = BTreeMap::new();
        let mut available = show_uncharged;
        for level in (1..=9u8).rev() {
            let pool = pools.iter().find(|pool| pool.key == SlotKey::Level(level));
            available = available
                || pool.is_some_and(SpellSlotPool::has_charge)
                || pact.is_some_and(|pact| pact.level == level && pact.has_charge());
            levels.insert(
                level,
                SlotStatus {
                    value: pool.map_or(0, |pool| pool.value),
                    max: pool.map_or(0, |pool| pool.max),
                    available,
                },
            );
        }

        let pact = pact.map_or_else(SlotStatus::default, |pact| SlotStatus {
            value: pact.value,
            max: pact.max,
            available: show_uncharged || pact.has_charge(),
        });
        Self { levels, pact }
    }

    pub fn status(&self, key: SlotKey) -> SlotStatus {
        match key {
            SlotKey::Pact => self.pact,
            SlotKey::Level(level) => self.levels.get(&level).copied().unwrap_or_default(),
        }
    }
}

/// The slot pool gating a spell group; `None` for groups never gated.
fn gating_slot(def: GroupDef) -> Option<SlotKey> {
    if def == groups::PACT_SPELLS {
        return Some(SlotKey::Pact);
    }
    groups::SPELL_LEVELS
        .iter()
        .position(|level| *level == def)
        .and_then(|index| u8::try_from(index + 1).ok())
        .map(SlotKey::Level)
}

pub fn build_spells(ctx: &ClassificationContext<'_>) -> Vec<StagedGroup> {
    let Some(actor) = ctx.actor else {
        return Vec::new();
    };

    let mut buckets: HashMap<&'static str, Vec<Entry>> = HashMap::new();
    for item in ctx.items_of(ItemType::Spell) {
        let spell = match item.spell_details() {
            Ok(spell) => spell,
            Err(e) => {
                tracing::warn!(item = %item.id, error = %e, "Dropping malformed spell");
                continue;
            }
        };
        if !is_usable(&ctx.settings, item) || !is_usable_spell(ctx, spell) {
            continue;
        }
        let Some(group) = spell_bucket(spell) else {
            continue;
        };
        buckets
            .entry(group.id)
            .or_default()
            .push(Entry::new(item_action(ctx, item, ItemKind::Spell), item.activation));
    }
    if buckets.is_empty() {
        return Vec::new();
    }

    let ledger = SlotLedger::new(&actor.spell_slots, ctx.settings.show_uncharged_items);
    dnd5e::spell_groups()
        .into_iter()
        .filter_map(|def| {
            let entries = buckets.remove(def.id)?;
            let info = match gating_slot(def) {
                Some(key) => {
                    let status = ledger.status(key);
                    if !status.available {
                        tracing::debug!(group = def.id, "No spell slots available, skipping group");
                        return None;
                    }
                    status.info()
                }
                None => None,
            };
            Some(with_activation_groups(
                StagedGroup::system(def, ctx).with_info(info),
                entries,
            ))
        })
        .flatten()
        .collect()
}

fn spell_bucket(spell: &SpellDetails) -> Option<GroupDef> {
    match spell.linked_activity {
        Some(linked) if linked.display_in_spellbook => Some(groups::ADDITIONAL_SPELLS),
        Some(_) => None,
        None => dnd5e::spell_group(spell.method, spell.level),
    }
}

fn is_usable_spell(ctx: &ClassificationContext<'_>, spell: &SpellDetails) -> bool {
    let settings = &ctx.settings;
    if ctx.actor_kind() != Some(ActorKind::Character) && settings.show_unequipped_items {
        return true;
    }
    settings.show_unprepared_spells
        || spell.method != CastingMode::Spell
        || spell.prepared.is_prepared()
        || spell.is_cantrip()
        || spell
            .linked_activity
            .is_some_and(|linked| linked.display_in_spellbook)
}
