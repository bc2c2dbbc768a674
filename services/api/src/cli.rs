use crate::check::{run_check, run_schemes, CheckArgs};
use crate::server;
use clap::{Args, Parser, Subcommand};
use kisan_mitra::error::AppError;

#[derive(Parser, Debug)]
#[command(
    name = "KisanMitra",
    about = "Check farm scheme eligibility from the command line or serve the recommendation API",
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
    /// Evaluate one farmer profile against the scheme catalog
    Check(CheckArgs),
    /// List the schemes in the loaded catalog
    Schemes,
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
        Command::Check(args) => run_check(args).await,
        Command::Schemes => run_schemes(),
    }
}
