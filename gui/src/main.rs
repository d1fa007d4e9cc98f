// GUI main entry point using Dioxus
#![allow(non_snake_case)] // Common for Dioxus components

use dioxus::prelude::*;
use dioxus_desktop::{Config as DesktopConfig, LogicalSize, WindowBuilder};

mod app;
mod components;
mod config;
mod quote;
mod services;
mod state;

use app::App;
use config::AppConfig;

const STYLE: &str = r#"<style>
body { font-family: sans-serif; margin: 1.5rem; background: #fafafa; color: #222; }
h1 { font-size: 1.4rem; }
h2 { font-size: 1.1rem; }
table { border-collapse: collapse; width: 100%; margin: 0.75rem 0; }
th, td { border: 1px solid #ddd; padding: 0.4rem 0.6rem; text-align: left; }
th.num, td.num { text-align: right; }
td.center { text-align: center; }
td.muted { color: #777; }
td.erro { color: #b00020; }
td.aviso { color: #8a6d00; }
.uf-row, .campos { display: flex; align-items: center; gap: 0.5rem; margin: 0.5rem 0; }
.status { color: #555; font-size: 0.9rem; }
.totais div { margin: 0.25rem 0; }
.totais span { font-weight: bold; }
input, select { padding: 0.25rem; }
textarea { width: 100%; margin-top: 0.5rem; font-family: monospace; }
button { padding: 0.3rem 0.8rem; }
</style>"#;

fn main() {
    tracing_subscriber::fmt::init();

    tracing::info!("Starting Balcão de Vendas GUI (Dioxus Desktop)...");

    let app_config = match AppConfig::load_default() {
        Ok(cfg) => {
            tracing::info!("Loaded embedded configuration version {}.", cfg.version);
            cfg
        }
        Err(e) => {
            // The default config is compiled in; failing to parse it means
            // the build itself is broken.
            tracing::error!("Failed to load embedded configuration: {}. Exiting.", e);
            panic!("Failed to load critical default configuration: {}", e);
        }
    };

    let window = WindowBuilder::new()
        .with_title("Balcão de Vendas")
        .with_inner_size(LogicalSize::new(1100.0, 760.0));

    LaunchBuilder::desktop()
        .with_cfg(
            DesktopConfig::new()
                .with_window(window)
                .with_custom_head(STYLE.to_string()),
        )
        .with_context(app_config)
        .launch(App);
}
