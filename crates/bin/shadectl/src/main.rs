//! # shadectl — shade theme controller CLI
//!
//! Composition root that wires the adapters into the controller.
//!
//! ## Responsibilities
//! - Parse configuration (TOML file, env vars)
//! - Initialize tracing
//! - Construct the file store, system preference source, terminal surface,
//!   and (when enabled) the HTTP sync adapter
//! - Construct the [`ThemeController`], injecting the adapters via ports
//! - Dispatch one subcommand: `init`, `toggle`, or `watch`
//!
//! ## Dependency rule
//! This is the **only** crate that depends on all other crates.
//! It is the wiring layer — no domain logic belongs here.

mod config;
mod source;
mod surface;
mod sync;

use std::time::Duration;

use anyhow::Context;

use shade_adapter_storage_file::FilePreferenceStore;
use shade_adapter_sync_http::HttpPreferenceSync;
use shade_app::ThemeController;
use shade_app::ports::PreferenceSource;

use crate::config::Config;
use crate::source::SystemPreferenceSource;
use crate::surface::TerminalSurface;
use crate::sync::SyncAdapter;

type Controller =
    ThemeController<FilePreferenceStore, SystemPreferenceSource, TerminalSurface, SyncAdapter>;

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    let config = Config::load().context("loading configuration")?;

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_new(&config.logging.filter)
                .context("parsing log filter")?,
        )
        .init();

    let store = FilePreferenceStore::new(&config.storage.path);
    let source = SystemPreferenceSource::new(config.server_preference());
    let sync = if config.sync.enabled {
        SyncAdapter::Http(HttpPreferenceSync::new(
            &config.sync.base_url,
            &config.sync.cookie,
        ))
    } else {
        SyncAdapter::Disabled
    };
    let controller = ThemeController::new(store, source.clone(), TerminalSurface::new(), sync);

    let command = std::env::args().nth(1);
    match command.as_deref() {
        None | Some("init") => {
            let theme = controller.initialize().await?;
            tracing::info!(%theme, "theme initialized");
        }
        Some("toggle") => {
            let theme = controller.toggle().await?;
            tracing::info!(%theme, "theme toggled");
            // Unlike a page, the process exits right after toggling; give
            // the fire-and-forget push a moment to leave first.
            tokio::time::sleep(Duration::from_millis(250)).await;
        }
        Some("watch") => {
            controller.initialize().await?;
            watch(&controller, &source, config.watch.interval_secs).await?;
        }
        Some(other) => {
            anyhow::bail!("unknown command {other:?} (expected init, toggle, or watch)");
        }
    }

    Ok(())
}

/// Poll the OS color-scheme signal and feed changes to the controller
/// until interrupted.
async fn watch(
    controller: &Controller,
    source: &SystemPreferenceSource,
    interval_secs: u64,
) -> anyhow::Result<()> {
    let mut interval = tokio::time::interval(Duration::from_secs(interval_secs));
    let mut last = source.prefers_dark();
    tracing::info!(prefers_dark = last, "watching system color scheme");

    loop {
        tokio::select! {
            _ = tokio::signal::ctrl_c() => break,
            _ = interval.tick() => {
                let prefers_dark = source.prefers_dark();
                if prefers_dark != last {
                    last = prefers_dark;
                    let reapplied = controller.on_system_change(prefers_dark).await?;
                    tracing::info!(prefers_dark, reapplied, "system color scheme changed");
                }
            }
        }
    }

    Ok(())
}
