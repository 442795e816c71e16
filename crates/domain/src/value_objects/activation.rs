//! Activation timings and the fixed timing -> activation group table.

use serde::{Deserialize, Serialize};

/// The trigger under which an item, feature, or spell activity is used.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ActivationType {
    Action,
    Bonus,
    Crew,
    Day,
    Hour,
    Lair,
    Minute,
    Legendary,
    Reaction,
    ReactionDamage,
    ReactionManual,
    Special,
    /// Any timing the host knows about but this module does not.
    #[serde(other)]
    Unknown,
}

impl ActivationType {
    /// Whether this timing is one of the host's recognized activation types.
    pub fn is_recognized(&self) -> bool {
        !matches!(self, Self::Unknown)
    }

    /// Minute, hour, and day timings are hidden unless slow actions are shown.
    pub fn is_slow(&self) -> bool {
        matches!(self, Self::Minute | Self::Hour | Self::Day)
    }

    /// Activation group this timing sorts into. Unmapped timings fall back to `other-actions`.
    pub fn group(&self) -> ActivationGroup {
        match self {
            Self::Action => ActivationGroup::Actions,
            Self::Bonus => ActivationGroup::BonusActions,
            Self::Crew => ActivationGroup::CrewActions,
            Self::Lair => ActivationGroup::LairActions,
            Self::Legendary => ActivationGroup::LegendaryActions,
            Self::Reaction | Self::ReactionDamage | Self::ReactionManual => {
                ActivationGroup::Reactions
            }
            Self::Special => ActivationGroup::SpecialActions,
            Self::Day | Self::Hour | Self::Minute | Self::Unknown => ActivationGroup::OtherActions,
        }
    }

    /// Font Awesome class for the timing badge, if the timing has one.
    pub fn icon_class(&self) -> Option<&'static str> {
        match self {
            Self::Bonus => Some("fas fa-plus"),
            Self::Crew => Some("fas fa-users"),
            Self::Day => Some("fas fa-hourglass-end"),
            Self::Hour => Some("fas fa-hourglass-half"),
            Self::Lair => Some("fas fa-home"),
            Self::Minute => Some("fas fa-hourglass-start"),
            Self::Legendary => Some("fas fa-dragon"),
            Self::Reaction | Self::ReactionDamage | Self::ReactionManual => Some("fas fa-bolt"),
            Self::Special => Some("fas fa-star"),
            Self::Action | Self::Unknown => None,
        }
    }

    /// Localization key for the timing's title.
    pub fn label_key(&self) -> &'static str {
        match self {
            Self::Action => "DND5E.Action",
            Self::Bonus => "DND5E.BonusAction",
            Self::Crew => "DND5E.VehicleCrewAction",
            Self::Day => "DND5E.TimeDay",
            Self::Hour => "DND5E.TimeHour",
            Self::Lair => "DND5E.LAIR.Action.Label",
            Self::Minute => "DND5E.TimeMinute",
            Self::Legendary => "DND5E.LegendaryAction.Label",
            Self::Reaction | Self::ReactionDamage | Self::ReactionManual => "DND5E.Reaction",
            Self::Special => "DND5E.Special",
            Self::Unknown => "",
        }
    }
}

/// Derived sub-group buckets, in the order they are emitted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum ActivationGroup {
    Actions,
    BonusActions,
    CrewActions,
    LairActions,
    LegendaryActions,
    Reactions,
    SpecialActions,
    OtherActions,
}

impl ActivationGroup {
    pub const ALL: [ActivationGroup; 8] = [
        Self::Actions,
        Self::BonusActions,
        Self::CrewActions,
        Self::LairActions,
        Self::LegendaryActions,
        Self::Reactions,
        Self::SpecialActions,
        Self::OtherActions,
    ];

    pub fn group_id(&self) -> &'static str {
        match self {
            Self::Actions => "actions",
            Self::BonusActions => "bonus-actions",
            Self::CrewActions => "crew-actions",
            Self::LairActions => "lair-actions",
            Self::LegendaryActions => "legendary-actions",
            Self::Reactions => "reactions",
            Self::SpecialActions => "special-actions",
            Self::OtherActions => "other-actions",
        }
    }

    /// Whether `id` names one of the activation groups.
    pub fn is_activation_group_id(id: &str) -> bool {
        Self::ALL.iter().any(|group| group.group_id() == id)
    }
}
