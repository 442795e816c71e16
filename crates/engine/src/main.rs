//! Token Action HUD D&D 5e engine - command-line entry point.
//!
//! Classifies a selection snapshot read from disk, prints the resulting group
//! tree as JSON and optionally dispatches one encoded click against it. Host
//! calls are logged instead of executed.

use std::path::Path;
use std::sync::Arc;

use anyhow::Context;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use tahud_domain::Selection;
use tahud_engine::infrastructure::{
    conditions::StaticConditions,
    counters::StaticCounterConfig,
    i18n::Catalog,
    ports::{CounterConfigPort, HudPort, MagicItemsPort},
    settings::JsonSettings,
    tracing_host::TracingHost,
};
use tahud_engine::{App, ConfigPorts, HostPorts};
use tahud_shared::ClickContext;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    load_dotenv_from_repo_root();

    // Initialize logging
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "tahud_engine=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let snapshot_path =
        std::env::var("TAHUD_SNAPSHOT").context("TAHUD_SNAPSHOT must point to a selection file")?;
    let selection: Selection = serde_json::from_str(&read(&snapshot_path)?)
        .with_context(|| format!("Invalid selection in {}", snapshot_path))?;

    let settings = match std::env::var("TAHUD_SETTINGS").ok() {
        Some(path) => JsonSettings::from_json(&read(&path)?)
            .with_context(|| format!("Invalid settings in {}", path))?,
        None => JsonSettings::default(),
    };
    let localizer = match std::env::var("TAHUD_LANG").ok() {
        Some(path) => Catalog::from_json(&read(&path)?)
            .with_context(|| format!("Invalid translations in {}", path))?,
        None => Catalog::default(),
    };
    let conditions = match std::env::var("TAHUD_CONDITIONS").ok() {
        Some(path) => StaticConditions::from_json(&read(&path)?)
            .with_context(|| format!("Invalid conditions in {}", path))?,
        None => StaticConditions::default(),
    };
    let counters: Option<Arc<dyn CounterConfigPort>> = match std::env::var("TAHUD_COUNTERS").ok() {
        Some(path) => Some(Arc::new(
            StaticCounterConfig::from_json(&read(&path)?)
                .with_context(|| format!("Invalid counter configuration in {}", path))?,
        )),
        None => None,
    };
    tracing::info!(translations = localizer.len(), "Configuration loaded");

    let host = Arc::new(TracingHost::new());
    let hud: Arc<dyn HudPort> = host.clone();
    let magic_items: Arc<dyn MagicItemsPort> = host.clone();
    let app = App::new(
        HostPorts {
            actors: host.clone(),
            rolls: host.clone(),
            items: host.clone(),
            combat: host.clone(),
            hud,
            magic_items: Some(magic_items),
        },
        ConfigPorts {
            settings: Arc::new(settings),
            localizer: Arc::new(localizer),
            conditions: Arc::new(conditions),
            counters,
            is_gm: std::env::var("TAHUD_GM").is_ok_and(|value| value == "true"),
        },
    );

    let tree = app.refresh(&selection).await?;
    println!("{}", serde_json::to_string_pretty(&tree)?);

    if let Ok(encoded) = std::env::var("TAHUD_CLICK") {
        let outcomes = app
            .handle_click(&encoded, &selection, ClickContext::primary())
            .await?;
        tracing::info!(payload = %encoded, ?outcomes, "Click handled");
    }

    Ok(())
}

fn read(path: &str) -> anyhow::Result<String> {
    std::fs::read_to_string(Path::new(path)).with_context(|| format!("Failed to read {}", path))
}

fn load_dotenv_from_repo_root() {
    let repo_root = Path::new(env!("CARGO_MANIFEST_DIR")).join("..").join("..");

    // Prefer local overrides.
    for filename in [".env.local", ".env"] {
        let path = repo_root.join(filename);
        if path.exists() {
            let _ = dotenvy::from_path(path);
        }
    }
}
