//! Application state and composition.

use std::sync::Arc;

use tahud_domain::{ActorSnapshot, CombatState, MagicItem, Selection};
use tahud_shared::{ActionPayload, ClickContext, GroupTree, PayloadError};

use crate::infrastructure::ports::{
    ActorUpdatePort, CombatPort, ConditionCatalogPort, CounterConfigPort, HudPort, ItemPort,
    Localizer, MagicItemsPort, PortError, RollPort, SettingsPort,
};
use crate::infrastructure::settings::load_hud_settings;
use crate::use_cases::{
    ClassificationContext, Classifier, DispatchError, DispatchOutcome, DispatchRequest,
    Dispatcher, HudRenderer,
};

/// Host-side collaborators.
pub struct HostPorts {
    pub actors: Arc<dyn ActorUpdatePort>,
    pub rolls: Arc<dyn RollPort>,
    pub items: Arc<dyn ItemPort>,
    pub combat: Arc<dyn CombatPort>,
    pub hud: Arc<dyn HudPort>,
    /// The magic-item tracker, when installed
    pub magic_items: Option<Arc<dyn MagicItemsPort>>,
}

/// Lookup collaborators read on every refresh.
pub struct ConfigPorts {
    pub settings: Arc<dyn SettingsPort>,
    pub localizer: Arc<dyn Localizer>,
    /// Status conditions offered as toggles
    pub conditions: Arc<dyn ConditionCatalogPort>,
    pub counters: Option<Arc<dyn CounterConfigPort>>,
    pub is_gm: bool,
}

/// Main application state.
///
/// Owns the classifier, dispatcher and renderer and the ports they share.
pub struct App {
    config: ConfigPorts,
    combat: Arc<dyn CombatPort>,
    magic_items: Option<Arc<dyn MagicItemsPort>>,
    classifier: Classifier,
    dispatcher: Dispatcher,
    renderer: HudRenderer,
}

impl App {
    pub fn new(host: HostPorts, config: ConfigPorts) -> Self {
        let mut dispatcher = Dispatcher::new(
            host.actors,
            host.rolls,
            host.items,
            host.combat.clone(),
            config.conditions.clone(),
            host.hud.clone(),
        );
        if let Some(magic_items) = &host.magic_items {
            dispatcher = dispatcher.with_magic_items(magic_items.clone());
        }

        Self {
            config,
            combat: host.combat,
            magic_items: host.magic_items,
            classifier: Classifier::new(),
            dispatcher,
            renderer: HudRenderer::new(host.hud),
        }
    }

    /// Classify the selection and hand the tree to the HUD.
    pub async fn refresh(&self, selection: &Selection) -> Result<GroupTree, PortError> {
        let settings = load_hud_settings(self.config.settings.as_ref());
        let combat = self.combat_state().await;
        let magic_items = match selection.actor.as_ref() {
            Some(actor) => self.magic_items_for(actor).await,
            None => Vec::new(),
        };
        let custom_counters = match (&self.config.counters, selection.actor.as_ref()) {
            (Some(counters), Some(actor)) => counters.counters(actor.kind),
            _ => None,
        };

        let ctx = ClassificationContext::from_selection(
            selection,
            &settings,
            self.config.localizer.as_ref(),
        )
        .with_gm(self.config.is_gm)
        .with_conditions(self.config.conditions.conditions())
        .with_combat(combat)
        .with_custom_counters(custom_counters)
        .with_magic_items(magic_items);

        let tree = self.classifier.classify(&ctx);
        tracing::debug!(groups = tree.groups.len(), "Classified selection");
        self.renderer.render(&tree).await?;
        Ok(tree)
    }

    /// Decode and dispatch a click. Without a single selected actor the click
    /// is applied to every controlled token in turn.
    pub async fn handle_click(
        &self,
        encoded: &str,
        selection: &Selection,
        click: ClickContext,
    ) -> Result<Vec<DispatchOutcome>, DispatchError> {
        let payload = match encoded.parse::<ActionPayload>() {
            Ok(payload) => payload,
            Err(PayloadError::UnknownCategory(category)) => {
                tracing::debug!(category = %category, "Ignoring click with unknown category");
                return Ok(vec![DispatchOutcome::Skipped("unknown category")]);
            }
            Err(e) => return Err(e.into()),
        };
        let settings = load_hud_settings(self.config.settings.as_ref());

        if let Some(actor) = selection.actor.as_ref() {
            let outcome = self
                .dispatcher
                .dispatch(DispatchRequest {
                    payload: &payload,
                    actor,
                    token: selection.token.as_ref(),
                    click,
                    settings,
                })
                .await?;
            return Ok(vec![outcome]);
        }

        let mut outcomes = Vec::with_capacity(selection.controlled.len());
        for controlled in &selection.controlled {
            let outcome = self
                .dispatcher
                .dispatch(DispatchRequest {
                    payload: &payload,
                    actor: &controlled.actor,
                    token: Some(&controlled.token),
                    click,
                    settings,
                })
                .await?;
            outcomes.push(outcome);
        }
        Ok(outcomes)
    }

    async fn combat_state(&self) -> Option<CombatState> {
        match self.combat.combat_state().await {
            Ok(combat) => combat,
            Err(e) => {
                tracing::warn!(error = %e, "Failed to read combat state");
                None
            }
        }
    }

    async fn magic_items_for(&self, actor: &ActorSnapshot) -> Vec<MagicItem> {
        let Some(port) = &self.magic_items else {
            return Vec::new();
        };
        match port.magic_items(actor.id.clone()).await {
            Ok(items) => items,
            Err(e) => {
                tracing::warn!(actor = %actor.id, error = %e, "Failed to load magic items");
                Vec::new()
            }
        }
    }
}
