use crate::demo::{
    run_demo, run_estimate, run_locations, run_products, run_replay, EstimateArgs, LocationsArgs,
    ReplayArgs,
};
use crate::server;
use clap::{Args, Parser, Subcommand};
use mindful_market::error::AppError;

#[derive(Parser, Debug)]
#[command(
    name = "Mindful Market",
    about = "Estimate purchase footprints and track a session eco score",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Start the HTTP service (default command)
    Serve(ServeArgs),
    /// List shipping locations, or the sub-locations of one country
    Locations(LocationsArgs),
    /// List product categories with their emission factors
    Products,
    /// Estimate the footprint of a single purchase
    Estimate(EstimateArgs),
    /// Replay a CSV purchase list into a fresh session and print the standing
    Replay(ReplayArgs),
    /// Run a scripted shopping session
    Demo,
}

#[derive(Args, Debug, Default)]
pub(crate) struct ServeArgs {
    /// Override the configured host for the HTTP server
    #[arg(long)]
    pub(crate) host: Option<String>,
    /// Override the configured port for the HTTP server
    #[arg(long)]
    pub(crate) port: Option<u16>,
}

pub(crate) async fn run() -> Result<(), AppError> {
    let cli = Cli::parse();
    let command = cli
        .command
        .unwrap_or_else(|| Command::Serve(ServeArgs::default()));

    match command {
        Command::Serve(args) => server::run(args).await,
        Command::Locations(args) => run_locations(args),
        Command::Products => {
            run_products();
            Ok(())
        }
        Command::Estimate(args) => run_estimate(args),
        Command::Replay(args) => run_replay(args),
        Command::Demo => run_demo(),
    }
}
