mod cli;

use clap::{Parser, Subcommand};
use lambdaway_core::logging::init_logging;

#[derive(Parser, Debug)]
#[command(
    name = "lambdaway",
    version,
    about = "Lambdaway: Pingora-based proxy that turns HTTP requests into Lambda invocations"
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Run the Lambdaway proxy (default)
    Run(cli::run::RunArgs),

    /// Print the invocation event generated for a request, without forwarding it
    Envelope(cli::envelope::EnvelopeArgs),
}

fn main() {
    let cli = Cli::parse();

    init_logging();

    let result = match cli.command {
        Some(Command::Run(args)) => cli::run::run(args),
        Some(Command::Envelope(args)) => cli::envelope::run(args),
        None => cli::run::run(cli::run::RunArgs::defaults()),
    };

    if let Err(e) = result {
        eprintln!("lambdaway error: {e:#}");
        std::process::exit(1);
    }
}
