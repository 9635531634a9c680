//! Tauri application entry point.

#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

#[cfg(feature = "tauri")]
fn main() -> anyhow::Result<()> {
    use anyhow::Context;
    use stockroom_desktop::config::DesktopConfig;

    let config = DesktopConfig::from_env().context("invalid desktop configuration")?;
    stockroom_observability::init(&config.logging);

    tracing::info!(title = %config.title, currency = %config.currency, "starting warehouse window");

    stockroom_desktop::commands::run(config)
}

#[cfg(not(feature = "tauri"))]
fn main() {
    eprintln!("This binary requires the 'tauri' feature to be enabled.");
    eprintln!("Build with: cargo build --features tauri");
    std::process::exit(1);
}
