//! Career Theme Park CLI
//!
//! Thin wrapper around careermap-core for checking a role dataset without
//! starting the desktop app.
//!
//! ## Usage
//!
//! ```bash
//! # Print every role, newest first
//! careermap list
//!
//! # Print the roles a search would keep, as JSON
//! careermap list --query abm --json
//!
//! # Print the zone table
//! careermap zones
//!
//! # Validate a dataset served over HTTP
//! careermap --roles https://example.com/roles.json check
//! ```

use anyhow::{Context, Result};
use careermap_core::camera::{WORLD_MAX, WORLD_MIN};
use careermap_core::config::DEFAULT_ROLES_PATH;
use careermap_core::zones::is_known_zone;
use careermap_core::{
    bounds_for, filter_roles, loader, Bounds, DatasetSource, DecoratedRole, LngLat, UNKNOWN_THEME,
    ZONE_THEMES,
};
use clap::{Parser, Subcommand};

/// Career Theme Park - role dataset inspector
#[derive(Parser)]
#[command(name = "careermap")]
#[command(version = "0.1.0")]
#[command(about = "Career Theme Park - inspect role datasets")]
struct Cli {
    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// Role dataset: a file path or an http(s) URL
    #[arg(
        short,
        long,
        global = true,
        env = "CAREERMAP_ROLES",
        default_value = DEFAULT_ROLES_PATH,
        value_parser = DatasetSource::try_parse,
    )]
    roles: DatasetSource,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List roles, newest first
    List {
        /// Only keep roles whose title, company or land contains this text
        #[arg(short, long, default_value = "")]
        query: String,

        /// Print JSON instead of text
        #[arg(long)]
        json: bool,
    },

    /// List the lands roles can belong to
    Zones,

    /// Load the dataset strictly and report roles that cannot be placed
    Check,
}

fn setup_logging(verbosity: u8) {
    let filter = match verbosity {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };

    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(filter)),
        )
        .init();
}

/// One line of `list` output
fn role_line(role: &DecoratedRole) -> String {
    let mut line = format!(
        "{} {} · {} · {} · {}",
        role.theme.icon, role.title, role.company, role.years, role.theme.name
    );
    if !role.is_placeable() {
        line.push_str(" (no map position)");
    }
    line
}

fn print_roles(roles: &[DecoratedRole], query: &str) {
    if roles.is_empty() {
        if query.trim().is_empty() {
            println!("No roles.");
        } else {
            println!("No roles match \"{}\".", query);
        }
        return;
    }

    for role in roles {
        println!("{}", role_line(role));
        println!("  ID: {}", role.id);
        if let Some(position) = role.resolved_position() {
            println!("  At: {} (from {})", position.lng_lat(), position.shape_name());
        }
    }
    println!();
    println!("{} role(s)", roles.len());
}

fn print_zones() {
    for theme in ZONE_THEMES.iter().chain(std::iter::once(&UNKNOWN_THEME)) {
        println!("{} {:<20} {} {}", theme.icon, theme.id, theme.color, theme.name);
    }
}

async fn check(source: &DatasetSource) -> Result<()> {
    let roles = loader::try_load_roles(source)
        .await
        .with_context(|| format!("Failed to load roles from {}", source))?;

    println!("Loaded {} role(s) from {}", roles.len(), source);

    let unplaced: Vec<&DecoratedRole> = roles.iter().filter(|r| !r.is_placeable()).collect();
    if unplaced.is_empty() {
        println!("Every role has a map position.");
    } else {
        println!("{} role(s) without a map position:", unplaced.len());
        for role in unplaced {
            tracing::debug!(role = %role.id, "No lat/lng, coordinates or geometry resolved");
            println!("  {} ({})", role.id, role.title);
        }
    }

    let world = Bounds {
        min: LngLat::new(WORLD_MIN, WORLD_MIN),
        max: LngLat::new(WORLD_MAX, WORLD_MAX),
    };
    for role in &roles {
        if let Some(at) = role.coordinates().filter(|at| !world.contains(*at)) {
            println!("  {} is outside the map at {}", role.id, at);
        }
    }

    for role in roles.iter().filter(|r| !is_known_zone(&r.zone_id)) {
        println!("  {} has unknown land \"{}\"", role.id, role.zone_id);
    }

    match bounds_for(&roles) {
        Some(bounds) => println!("Bounds: {} to {}", bounds.min, bounds.max),
        None => println!("Bounds: none"),
    }

    Ok(())
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    setup_logging(cli.verbose);

    match cli.command {
        Commands::List { query, json } => {
            let roles = loader::load_roles(&cli.roles).await;
            let filtered = filter_roles(&roles, &query);
            tracing::info!(total = roles.len(), shown = filtered.len(), "Filtered roles");
            if json {
                println!("{}", serde_json::to_string_pretty(&filtered)?);
            } else {
                print_roles(&filtered, &query);
            }
        }
        Commands::Zones => print_zones(),
        Commands::Check => check(&cli.roles).await?,
    }

    Ok(())
}
