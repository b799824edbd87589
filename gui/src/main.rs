// GUI main entry point using Dioxus
#![allow(non_snake_case)] // Common for Dioxus components

use dioxus::prelude::*;
use dioxus_desktop::{Config as DesktopConfig, WindowBuilder};

mod app;
mod components;
mod config;
mod state;

use app::App;
use config::AppConfig;

fn main() {
    // Initialize tracing subscriber for logging
    tracing_subscriber::fmt::init();

    tracing::info!("Starting Simulador de Marketing GUI (Dioxus Desktop)...");

    let app_config = match AppConfig::load_default() {
        Ok(cfg) => {
            tracing::info!("Successfully loaded default configuration version {}.", cfg.version);
            cfg
        }
        Err(e) => {
            // The embedded config is part of the binary, so this only happens on a broken build
            tracing::error!("Failed to load default configuration: {}. Exiting.", e);
            std::process::exit(1);
        }
    };

    let desktop_config = DesktopConfig::new().with_window(WindowBuilder::new().with_title(app_config.app.title.clone()));

    // AppConfig is provided as context; App builds the AppState signal from it
    LaunchBuilder::desktop()
        .with_cfg(desktop_config)
        .with_context(app_config)
        .launch(App);
}
