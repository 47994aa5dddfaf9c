//! Laundry CLI
//!
//! Prints room availability and machine status from the campus laundry site.

use std::path::{Path, PathBuf};
use std::process::ExitCode;
use std::sync::Arc;

use clap::{Parser, Subcommand};
use laundry::{AppError, Config, LaundryClient, Location, Machine, Result, RoomMachines};
use serde::Serialize;
use url::Url;

/// Campus laundry room status
#[derive(Parser, Debug)]
#[command(name = "laundry", version, about = "Campus laundry room status")]
struct Cli {
    /// Path to TOML configuration
    #[arg(short, long, default_value = "laundry.toml")]
    config: PathBuf,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Print JSON instead of text
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// List rooms with free washers and dryers
    Locations {
        /// Site identifier (default from config)
        #[arg(long)]
        site: Option<String>,
    },

    /// Show every machine in one room
    Machines {
        /// Room name (case-insensitive) or room page URL
        room: String,

        /// Site identifier used to look the room up by name
        #[arg(long)]
        site: Option<String>,
    },

    /// Fetch the listing and then every room
    Snapshot {
        /// Site identifier (default from config)
        #[arg(long)]
        site: Option<String>,
    },

    /// Validate configuration file
    Validate,
}

#[derive(Serialize)]
struct RoomReport<'a> {
    location: &'a Location,
    #[serde(skip_serializing_if = "Option::is_none")]
    machines: Option<&'a RoomMachines>,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<String>,
}

/// Initialize logging based on verbosity flag.
fn init_logging(verbose: bool) {
    let level = if verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level))
        .format_timestamp_secs()
        .init();
}

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match run(cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            log::error!("{e}");
            let mut cause = std::error::Error::source(&e);
            while let Some(inner) = cause {
                log::error!("  caused by: {inner}");
                cause = inner.source();
            }
            eprintln!("{}", e.user_message());
            ExitCode::FAILURE
        }
    }
}

async fn run(cli: Cli) -> Result<()> {
    let config = load_config(&cli.config)?;

    let site_or_default =
        |site: Option<String>| site.unwrap_or_else(|| config.fetcher.site_id.clone());

    match cli.command {
        Command::Validate => {
            config.validate()?;
            println!("Config OK");
        }

        Command::Locations { site } => {
            let client = LaundryClient::new(Arc::clone(&config))?;
            let locations = client.fetch_locations(&site_or_default(site)).await?;
            if cli.json {
                print_json(&locations)?;
            } else {
                for location in &locations {
                    println!("{}", location.summary());
                }
            }
        }

        Command::Machines { room, site } => {
            let client = LaundryClient::new(Arc::clone(&config))?;
            let location = find_room(&client, &room, site_or_default(site)).await?;
            let machines = client.fetch_machines(&location).await?;
            if cli.json {
                print_json(&RoomReport {
                    location: &location,
                    machines: Some(&machines),
                    error: None,
                })?;
            } else {
                print_room(&location, &machines);
            }
        }

        Command::Snapshot { site } => {
            let client = LaundryClient::new(Arc::clone(&config))?;
            let locations = client.fetch_locations(&site_or_default(site)).await?;
            let results = client.fetch_rooms(&locations).await;

            let failures = results.iter().filter(|(_, r)| r.is_err()).count();
            if failures > 0 {
                log::warn!("{failures} of {} rooms failed", results.len());
            }

            if cli.json {
                let reports: Vec<RoomReport> = results
                    .iter()
                    .map(|(location, result)| RoomReport {
                        location: *location,
                        machines: result.as_ref().ok(),
                        error: result.as_ref().err().map(ToString::to_string),
                    })
                    .collect();
                print_json(&reports)?;
            } else {
                for (location, result) in &results {
                    match result {
                        Ok(machines) => print_room(location, machines),
                        Err(e) => println!("{}: {}\n", location.name, e),
                    }
                }
            }
        }
    }

    Ok(())
}

/// Load the config file if present, defaults otherwise.
fn load_config(path: &Path) -> Result<Arc<Config>> {
    let config = if path.exists() {
        log::debug!("Loading configuration from {}", path.display());
        Config::load(path)?
    } else {
        log::debug!("No config at {}; using defaults", path.display());
        Config::default()
    };
    Ok(Arc::new(config))
}

/// Resolve a room argument: a URL is used as-is, otherwise the listing is
/// searched by name.
async fn find_room(client: &LaundryClient, room: &str, site: String) -> Result<Location> {
    if let Ok(url) = Url::parse(room) {
        return Ok(Location {
            url,
            name: room.to_string(),
            available_washers: 0,
            available_dryers: 0,
        });
    }

    client
        .fetch_locations(&site)
        .await?
        .into_iter()
        .find(|location| location.matches_name(room))
        .ok_or_else(|| {
            AppError::RoomNotFound(format!("no room named '{room}' on site {site}"))
        })
}

fn print_room(location: &Location, machines: &RoomMachines) {
    println!("{}", location.name);
    print_machines("Washers", &machines.washers, machines.available_washers());
    print_machines("Dryers", &machines.dryers, machines.available_dryers());
    println!();
}

fn print_machines(label: &str, machines: &[Machine], available: usize) {
    println!("  {label} ({available}/{} available)", machines.len());
    for machine in machines {
        let progress = machine
            .status
            .progress_percent()
            .map(|p| format!(" [{p}]"))
            .unwrap_or_default();
        println!("    #{:<3} {}{}", machine.number, machine.status, progress);
    }
}

fn print_json<T: Serialize + ?Sized>(value: &T) -> Result<()> {
    let json = serde_json::to_string_pretty(value)
        .map_err(|e| AppError::Unknown(format!("failed to encode JSON: {e}")))?;
    println!("{json}");
    Ok(())
}
