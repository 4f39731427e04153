//! seedsieve — bit-exact seed search over a procedurally generated card
//! game's shop/pack/voucher/tag/boss/event RNG.
//!
//! The crate is organized leaves-first, matching the data flow described in
//! the design docs: `prng` -> `sample` -> `filters` -> `search`.

pub mod analysis;
pub mod cli;
pub mod domain;
pub mod filters;
pub mod pools;
pub mod prng;
pub mod sample;
pub mod search;
pub mod seed;
pub mod sink;

#[cfg(feature = "server")]
pub mod server;

/// number of lanes advanced together through one batch group
pub const LANES: usize = 8;

/// antes a run is divided into
pub const MAX_ANTE: u8 = 8;

/// progress bar, styled the way every long-running pass in this crate reports itself
pub fn progress(n: u64) -> indicatif::ProgressBar {
    let tick = std::time::Duration::from_millis(250);
    let style = "{spinner:.cyan} {elapsed} ~ {percent:>3}% {wide_bar:.cyan} {pos}/{len} ({per_sec})";
    let style = indicatif::ProgressStyle::with_template(style).unwrap();
    let bar = indicatif::ProgressBar::new(n);
    bar.set_style(style);
    bar.enable_steady_tick(tick);
    bar
}

/// initialize terminal + rotating file logging
pub fn init_logging() {
    let config = simplelog::ConfigBuilder::new()
        .set_location_level(log::LevelFilter::Off)
        .set_target_level(log::LevelFilter::Off)
        .set_thread_level(log::LevelFilter::Off)
        .build();
    let term = simplelog::TermLogger::new(
        log::LevelFilter::Info,
        config.clone(),
        simplelog::TerminalMode::Mixed,
        simplelog::ColorChoice::Auto,
    );
    match std::fs::create_dir_all("logs") {
        Ok(()) => {
            let time = std::time::SystemTime::now()
                .duration_since(std::time::UNIX_EPOCH)
                .expect("time moves slow")
                .as_secs();
            let path = format!("logs/{}.log", time);
            match std::fs::File::create(&path) {
                Ok(file) => {
                    let disk = simplelog::WriteLogger::new(log::LevelFilter::Debug, config, file);
                    simplelog::CombinedLogger::init(vec![term, disk])
                        .expect("initialize logger");
                }
                Err(_) => {
                    simplelog::CombinedLogger::init(vec![term]).expect("initialize logger");
                }
            }
        }
        Err(_) => {
            simplelog::CombinedLogger::init(vec![term]).expect("initialize logger");
        }
    }
}

/// a process-wide cancellation flag, consulted at batch boundaries and
/// 8-lane evaluation groups
static CANCELLED: std::sync::atomic::AtomicBool = std::sync::atomic::AtomicBool::new(false);

pub fn cancel() {
    CANCELLED.store(true, std::sync::atomic::Ordering::SeqCst);
}

pub fn cancelled() -> bool {
    CANCELLED.load(std::sync::atomic::Ordering::SeqCst)
}

pub fn reset_cancellation() {
    CANCELLED.store(false, std::sync::atomic::Ordering::SeqCst);
}

/// spawn a ctrl-c watcher that trips the cancellation flag instead of killing the process
#[cfg(feature = "database")]
pub fn watch_ctrlc() {
    tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            log::warn!("interrupt received, cancelling");
            cancel();
        }
    });
}

/// get a database connection, run migrations, and return the client
#[cfg(feature = "database")]
pub async fn db() -> std::sync::Arc<tokio_postgres::Client> {
    crate::sink::connect::db().await
}
