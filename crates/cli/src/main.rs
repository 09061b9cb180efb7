use std::path::PathBuf;

use {
    clap::{Parser, Subcommand},
    parcel_delivery::{Delivered, DeliveryError},
    parcel_world::World,
    tracing::{debug, info},
    tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt},
};

#[derive(Parser)]
#[command(name = "parcel", about = "parcel: ownership-safe item delivery")]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Log level (trace, debug, info, warn, error).
    #[arg(long, global = true, default_value = "info")]
    log_level: String,

    /// Output logs as JSON instead of human-readable.
    #[arg(long, global = true, default_value_t = false)]
    json_logs: bool,

    /// Config file (overrides discovery in ./ and ~/.config/parcel/).
    #[arg(long, global = true, env = "PARCEL_CONFIG")]
    config: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// Deliver one item to a player.
    Deliver {
        /// Recipient player name.
        #[arg(long)]
        to: String,
        /// Item type id.
        #[arg(long)]
        item: u16,
    },
    /// Run the demonstration scenarios against the configured world.
    Demo,
    /// Print the effective configuration.
    Config,
}

/// Item type the default world refuses to create.
const FAIL_ITEM: u16 = 99;

/// (label, recipient, item type)
const DEMO_SCENARIOS: &[(&str, &str, u16)] = &[
    ("player is not in game", "notloaded", 1),
    ("loading player from storage fails", "faillogin", 1),
    ("item creation fails", "example", FAIL_ITEM),
    ("player is in game and item creation succeeds", "example", 1),
];

fn init_telemetry(cli: &Cli) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&cli.log_level));

    let registry = tracing_subscriber::registry().with(filter);

    if cli.json_logs {
        registry
            .with(fmt::layer().json().with_target(true).with_thread_ids(false))
            .init();
    } else {
        registry
            .with(
                fmt::layer()
                    .with_target(false)
                    .with_thread_ids(false)
                    .with_ansi(true),
            )
            .init();
    }
}

fn describe(result: &Result<Delivered, DeliveryError>) -> String {
    match result {
        Ok(d) => {
            let source = if d.owned {
                format!("loaded from {}", d.resolved_by)
            } else {
                d.resolved_by.to_string()
            };
            let saved = if d.saved { ", player saved" } else { "" };
            format!(
                "delivered item {} (serial {}) to {} [{source}]{saved}",
                d.item_type, d.serial, d.recipient
            )
        },
        Err(e) => format!("nothing delivered: {e}"),
    }
}

fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    let cli = Cli::parse();
    init_telemetry(&cli);

    let config = parcel_config::load_or_discover(cli.config.as_deref())?;
    debug!(?config, "effective config");

    match cli.command {
        Commands::Deliver { to, item } => {
            let world = World::from_config(&config.world);
            let delivery = world.delivery(&config.delivery);
            let result = delivery.try_deliver(&to, item);
            println!("{}", describe(&result));
        },
        Commands::Demo => {
            let world = World::from_config(&config.world);
            let delivery = world.delivery(&config.delivery);
            for (label, recipient, item) in DEMO_SCENARIOS {
                println!("When {label}:");
                println!("  {}", describe(&delivery.try_deliver(recipient, *item)));
            }
            info!(
                created = world.catalog.created(),
                saves = world.storage.saves(),
                discarded = world.inboxes.discarded(),
                "demo finished"
            );
        },
        Commands::Config => {
            print!("{}", toml::to_string_pretty(&config)?);
        },
    }

    Ok(())
}
