//! Echonote Desktop Application
//!
//! A note board where notes are captured by typing or by dictation.

#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

mod app;
mod components;
mod config;
mod speech;

use dioxus::desktop::{Config, LogicalSize, WindowBuilder};

fn main() {
    // Load environment variables from .env file
    dotenvy::dotenv().ok();

    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("echonote=debug".parse().unwrap()),
        )
        .init();

    tracing::info!("Starting Echonote...");

    let config = Config::new().with_window(
        WindowBuilder::new()
            .with_title("Echonote")
            .with_inner_size(LogicalSize::new(1100.0, 720.0)),
    );

    dioxus::LaunchBuilder::new()
        .with_cfg(config)
        .launch(app::App);
}
