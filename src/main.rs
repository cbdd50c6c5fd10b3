//! Animated BMI Calculator - a small desktop utility for Body Mass Index.
//!
//! This application allows you to:
//! - Enter weight and height as free-form text ("70", "1,75", "175 cm")
//! - Compute the BMI and classify it into a health category
//! - Watch the result arrive through a few lightweight animations

// Hide console window on Windows in release builds
#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

mod app;
mod config;
mod core;
mod ui;

use app::App;
use config::ConfigManager;
use eframe::NativeOptions;
use tracing_subscriber::EnvFilter;

fn main() -> eframe::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let config_manager = ConfigManager::new();
    let config = config_manager.load();
    tracing::info!(
        config_file = %config_manager.get_config_file_path().display(),
        "starting Animated BMI Calculator v{}",
        env!("CARGO_PKG_VERSION")
    );

    // Configure native window options
    let options = NativeOptions {
        viewport: eframe::egui::ViewportBuilder::default()
            .with_title("Animated BMI Calculator")
            .with_inner_size([config.window_width, config.window_height])
            .with_min_inner_size([360.0, 320.0]),
        ..Default::default()
    };

    // Run the application
    eframe::run_native(
        "Animated BMI Calculator",
        options,
        Box::new(move |cc| Ok(Box::new(App::new(cc, config_manager, config)))),
    )
}
