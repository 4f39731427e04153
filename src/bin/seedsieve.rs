use clap::Parser;
use seedsieve::cli::Cli;
use std::process::ExitCode;

#[tokio::main]
async fn main() -> ExitCode {
    seedsieve::init_logging();
    seedsieve::cli::dispatch(Cli::parse()).await
}
