use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "seedsieve", version, about = "Bit-exact seed search over a procedurally generated card game's RNG")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// run a filter document against the seed lattice
    Search(SearchArgs),
    /// dump every per-ante draw for a single seed
    Analyze(AnalyzeArgs),
    /// run the HTTP façade
    Serve(ServeArgs),
}

#[derive(Args)]
pub struct SearchArgs {
    #[arg(long)]
    pub filter: PathBuf,
    #[arg(long)]
    pub threads: Option<usize>,
    #[arg(long = "batch-size", default_value_t = 8)]
    pub batch_size: usize,
    #[arg(long = "start-batch", default_value_t = 0)]
    pub start_batch: u64,
    #[arg(long = "end-batch")]
    pub end_batch: Option<u64>,
    /// an integer score cutoff, or `auto` to adapt to the running top-10 watermark
    #[arg(long, default_value = "auto")]
    pub cutoff: String,
    #[arg(long)]
    pub deck: Option<String>,
    #[arg(long)]
    pub stake: Option<String>,
}

#[derive(Args)]
pub struct AnalyzeArgs {
    pub seed: String,
    #[arg(long)]
    pub deck: Option<String>,
    #[arg(long)]
    pub stake: Option<String>,
}

#[derive(Args)]
pub struct ServeArgs {
    #[arg(long, default_value = "127.0.0.1")]
    pub host: String,
    #[arg(long, default_value_t = 8080)]
    pub port: u16,
    #[arg(long)]
    pub threads: Option<usize>,
}
