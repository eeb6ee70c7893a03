use std::time::Duration;

use clap::{Parser, Subcommand};
use mimalloc::MiMalloc;
use rotaviz_service::client::{DEFAULT_API_URL, RouteServiceClient, RouteServiceClientParams};
use tracing::debug;

use crate::{map_args::MapArgs, optimize::OptimizeArgs};

mod console_notifier;
mod customers;
mod map_args;
mod optimize;
mod parsers;
mod schema;
mod summary_table;

#[global_allocator]
static GLOBAL: MiMalloc = MiMalloc;

#[derive(Parser)]
#[clap(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Base url of the route service
    #[arg(long, env = "ROTAVIZ_API_URL", default_value = DEFAULT_API_URL, global = true)]
    api_url: String,

    /// Network timeout for every request (e.g., "30s", "5m", "PT1M"). Waits forever when omitted.
    #[arg(long, value_parser = parsers::parse_duration, global = true)]
    timeout: Option<jiff::SignedDuration>,

    #[arg(short, long, global = true)]
    debug: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Load customers, orders and vehicles and draw the customers
    #[command(visible_alias = "c")]
    Customers {
        #[command(flatten)]
        map: MapArgs,
    },
    /// Load the data, optimize the routes and draw them
    #[command(visible_alias = "o")]
    Optimize {
        #[command(flatten)]
        args: OptimizeArgs,
    },
    /// Print the JSON schema of the optimization request
    Schema,
}

#[tokio::main]
async fn main() -> Result<(), anyhow::Error> {
    dotenvy::from_filename(".env.local").ok();
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    tracing_subscriber::fmt()
        .with_max_level(if cli.debug {
            tracing::Level::DEBUG
        } else {
            tracing::Level::INFO
        })
        .with_writer(std::io::stderr)
        .init();

    match cli.command {
        Commands::Customers { map } => {
            let client = build_client(cli.api_url, cli.timeout)?;
            customers::run(client, map).await?
        }
        Commands::Optimize { args } => {
            let client = build_client(cli.api_url, cli.timeout)?;
            optimize::run(client, args).await?
        }
        Commands::Schema => schema::run()?,
    }

    Ok(())
}

fn build_client(
    base_url: String,
    timeout: Option<jiff::SignedDuration>,
) -> anyhow::Result<RouteServiceClient> {
    let timeout = timeout.map(Duration::try_from).transpose()?;

    debug!("Route service at {} (timeout: {:?})", base_url, timeout);

    Ok(RouteServiceClient::new(RouteServiceClientParams {
        base_url,
        timeout,
    })?)
}
