#![allow(non_snake_case)]

mod app;
mod components;
pub mod context;
mod pages;
mod theme;

use std::sync::OnceLock;

use careermap_core::config::{DEFAULT_ROLES_PATH, DEFAULT_WORLD_PATH};
use careermap_core::{CareerMapConfig, DatasetSource};
use clap::Parser;
use dioxus::desktop::{Config, WindowBuilder};

/// Global configuration, set from command line
static CONFIG: OnceLock<CareerMapConfig> = OnceLock::new();

/// Get the configuration (set from command line or default)
pub fn get_config() -> CareerMapConfig {
    CONFIG.get().cloned().unwrap_or_default()
}

/// Career Theme Park - interactive career map
#[derive(Parser, Debug)]
#[command(name = "careermap-desktop")]
#[command(about = "Career Theme Park - a career history as a themed map")]
struct Args {
    /// Role dataset: a file path or an http(s) URL
    #[arg(short, long, env = "CAREERMAP_ROLES", default_value = DEFAULT_ROLES_PATH)]
    roles: String,

    /// Background shape document: a file path or an http(s) URL
    #[arg(short, long, env = "CAREERMAP_WORLD", default_value = DEFAULT_WORLD_PATH)]
    world: String,
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let args = Args::parse();

    let config = CareerMapConfig {
        roles: DatasetSource::parse(&args.roles),
        world: DatasetSource::parse(&args.world),
    };

    tracing::info!(roles = %config.roles, world = %config.world, "Starting Career Theme Park");

    // Store configuration globally
    let _ = CONFIG.set(config);

    let window_width = 1280.0;
    let window_height = 820.0;

    // Configure desktop window
    let window = Config::new().with_window(
        WindowBuilder::new()
            .with_title("Career Theme Park")
            .with_inner_size(dioxus::desktop::LogicalSize::new(window_width, window_height))
            .with_resizable(true),
    );

    dioxus::LaunchBuilder::desktop()
        .with_cfg(window)
        .launch(app::App);
}
