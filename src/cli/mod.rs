//! Subcommand dispatch: `search`, `analyze`, `serve`. Each subcommand maps
//! onto the already-built core (`search::SearchDriver`, `analysis::analyze`,
//! `server::Server`) — this module is just argument parsing and exit-code
//! bookkeeping.

mod args;

pub use args::{Cli, Command};

use crate::domain::{Deck, GameEnum, Stake};
use crate::filters::{compile, FilterDocument};
use crate::search::{Cutoff, SearchConfig, SearchDriver};
use crate::sink::{FertilizerPile, ResultSink, StateStore};
use std::process::ExitCode;
use std::sync::Arc;

const EXIT_OK: u8 = 0;
const EXIT_INVALID_ARGUMENT: u8 = 2;
const EXIT_INVALID_FILTER: u8 = 3;
const EXIT_CANCELLED: u8 = 4;
const EXIT_INTERNAL: u8 = 1;

pub async fn dispatch(cli: Cli) -> ExitCode {
    match cli.command {
        Command::Search(args) => run_search(args).await,
        Command::Analyze(args) => run_analyze(args),
        Command::Serve(args) => run_serve(args).await,
    }
}

async fn run_search(args: args::SearchArgs) -> ExitCode {
    let text = match std::fs::read_to_string(&args.filter) {
        Ok(text) => text,
        Err(e) => {
            log::error!("reading filter document: {e}");
            return ExitCode::from(EXIT_INVALID_ARGUMENT);
        }
    };

    let mut doc = match FilterDocument::parse(&text) {
        Ok(doc) => doc,
        Err(e) => {
            log::error!("parsing filter document: {e}");
            return ExitCode::from(EXIT_INVALID_FILTER);
        }
    };
    if let Some(deck) = &args.deck {
        doc.deck = Some(deck.clone());
    }
    if let Some(stake) = &args.stake {
        doc.stake = Some(stake.clone());
    }

    let pipeline = match compile(&doc) {
        Ok(pipeline) => pipeline,
        Err(e) => {
            log::error!("compiling filter document: {e}");
            return ExitCode::from(EXIT_INVALID_FILTER);
        }
    };

    let cutoff = if args.cutoff.eq_ignore_ascii_case("auto") {
        Cutoff::Auto
    } else {
        match args.cutoff.parse::<i64>() {
            Ok(value) => Cutoff::Fixed(value),
            Err(_) => {
                log::error!("--cutoff must be an integer or `auto`, got {:?}", args.cutoff);
                return ExitCode::from(EXIT_INVALID_ARGUMENT);
            }
        }
    };

    let name = doc.name.clone().unwrap_or_else(|| "unnamed".to_string());
    let filter_id = crate::sink::schema::filter_id(&name, &doc.deck.clone().unwrap_or_default(), &doc.stake.clone().unwrap_or_default());

    let (sink, state_store, fertilizer): (Arc<dyn ResultSink>, Arc<dyn StateStore>, Arc<dyn FertilizerPile>) = build_stores(&filter_id, pipeline.should.len()).await;

    let config = SearchConfig {
        threads: args.threads.unwrap_or_else(num_cpus::get),
        prefix_len: args.batch_size,
        start_batch: args.start_batch,
        end_batch: args.end_batch,
        cutoff,
        filter_id,
        filter_text: text,
    };

    let driver = SearchDriver::new(pipeline, sink, state_store, fertilizer, config);
    for seed in driver.fertilize() {
        println!("fertilized: {seed}");
    }
    driver.run();

    if crate::cancelled() {
        ExitCode::from(EXIT_CANCELLED)
    } else {
        ExitCode::from(EXIT_OK)
    }
}

#[cfg(feature = "database")]
async fn build_stores(_filter_id: &str, width: usize) -> (Arc<dyn ResultSink>, Arc<dyn StateStore>, Arc<dyn FertilizerPile>) {
    let client = crate::db().await;
    crate::sink::connect::ensure_results_table(&client, width).await;
    (
        Arc::new(crate::sink::PostgresSink::new(client.clone())),
        Arc::new(crate::sink::PostgresStateStore::new(client.clone())),
        Arc::new(crate::sink::PostgresFertilizerPile::new(client)),
    )
}

#[cfg(not(feature = "database"))]
async fn build_stores(_filter_id: &str, _width: usize) -> (Arc<dyn ResultSink>, Arc<dyn StateStore>, Arc<dyn FertilizerPile>) {
    (
        Arc::new(crate::sink::MemorySink::new()),
        Arc::new(crate::sink::MemoryStateStore::new()),
        Arc::new(crate::sink::MemoryFertilizerPile::new()),
    )
}

fn run_analyze(args: args::AnalyzeArgs) -> ExitCode {
    let deck = match args.deck.as_deref().map(Deck::parse) {
        Some(None) => {
            log::error!("unknown deck: {:?}", args.deck);
            return ExitCode::from(EXIT_INVALID_ARGUMENT);
        }
        Some(Some(deck)) => deck,
        None => Deck::Red,
    };
    let stake = match args.stake.as_deref().map(Stake::parse) {
        Some(None) => {
            log::error!("unknown stake: {:?}", args.stake);
            return ExitCode::from(EXIT_INVALID_ARGUMENT);
        }
        Some(Some(stake)) => stake,
        None => Stake::White,
    };

    let dump = crate::analysis::analyze(&args.seed, deck, stake);
    match serde_json::to_string_pretty(&dump) {
        Ok(json) => {
            println!("{json}");
            ExitCode::from(EXIT_OK)
        }
        Err(e) => {
            log::error!("serializing analysis: {e}");
            ExitCode::from(EXIT_INTERNAL)
        }
    }
}

#[cfg(feature = "server")]
async fn run_serve(args: args::ServeArgs) -> ExitCode {
    crate::watch_ctrlc();
    match crate::server::Server::run(&args.host, args.port).await {
        Ok(()) => ExitCode::from(EXIT_OK),
        Err(e) => {
            log::error!("server exited: {e}");
            ExitCode::from(EXIT_INTERNAL)
        }
    }
}

#[cfg(not(feature = "server"))]
async fn run_serve(_args: args::ServeArgs) -> ExitCode {
    log::error!("this build was compiled without the `server` feature");
    ExitCode::from(EXIT_INVALID_ARGUMENT)
}
