use crate::report::{run_check, run_documents, CheckArgs, DocumentsArgs};
use crate::server;
use clap::{Args, Parser, Subcommand};
use seis_eligibility::error::AppError;

#[derive(Parser, Debug)]
#[command(
    name = "SEIS/EIS Eligibility",
    about = "Evaluate SEIS/EIS eligibility and serve the eligibility API",
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
    /// Evaluate a company and funding round from a JSON request file
    Check(CheckArgs),
    /// List the advance-assurance documents a request file will need
    Documents(DocumentsArgs),
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
        Command::Check(args) => run_check(args),
        Command::Documents(args) => run_documents(args),
    }
}
