use super::request::{AnalyzeRequest, StartSearchRequest, StopSearchRequest};
use super::response::{ResultRowResponse, SearchStatusResponse, StartSearchResponse};
use crate::domain::{Deck, GameEnum, Stake};
use crate::filters::{compile, FilterDocument};
use crate::search::{Cutoff, SearchConfig, SearchDriver, SearchStats};
use crate::sink::{schema, PostgresFertilizerPile, PostgresSink, PostgresStateStore, ResultSink, StateStore};
use actix_cors::Cors;
use actix_web::middleware::Logger;
use actix_web::{web, App, HttpResponse, HttpServer, Responder};
use std::sync::{Arc, Mutex};
use tokio_postgres::Client;

struct ActiveSearch {
    id: String,
    driver: Arc<SearchDriver>,
    sink: Arc<PostgresSink>,
    stats: Arc<SearchStats>,
    filter_text: String,
    thread: Option<std::thread::JoinHandle<()>>,
}

pub struct AppState {
    client: Arc<Client>,
    active: Mutex<Option<ActiveSearch>>,
}

pub struct Server;

impl Server {
    pub async fn run(host: &str, port: u16) -> Result<(), std::io::Error> {
        let client = crate::db().await;
        let state = web::Data::new(AppState { client, active: Mutex::new(None) });
        log::info!("starting HTTP server on {host}:{port}");
        HttpServer::new(move || {
            App::new()
                .wrap(Logger::new("%r %s %Ts"))
                .wrap(Cors::default().allow_any_origin().allow_any_method().allow_any_header())
                .app_data(state.clone())
                .route("/search", web::post().to(start_search))
                .route("/search", web::get().to(get_status))
                .route("/search/stop", web::post().to(stop_search))
                .route("/analyze", web::post().to(analyze))
        })
        .bind((host, port))?
        .run()
        .await
    }
}

async fn start_search(state: web::Data<AppState>, req: web::Json<StartSearchRequest>) -> impl Responder {
    let doc = match FilterDocument::parse(&req.filter_text) {
        Ok(doc) => doc,
        Err(e) => return HttpResponse::BadRequest().body(format!("invalid filter document: {e}")),
    };
    let pipeline = match compile(&doc) {
        Ok(p) => p,
        Err(e) => return HttpResponse::UnprocessableEntity().body(e.to_string()),
    };

    let mut active = state.active.lock().expect("active search mutex poisoned");
    if let Some(mut running) = active.take() {
        // starting a new search cancels and drains whichever one is running
        crate::cancel();
        if let Some(thread) = running.thread.take() {
            let _ = thread.join();
        }
    }

    let search_id = schema::filter_id(doc.name.as_deref().unwrap_or("unnamed"), &doc.deck.clone().unwrap_or_default(), &doc.stake.clone().unwrap_or_default());
    crate::sink::connect::ensure_results_table(&state.client, pipeline.should.len()).await;
    crate::reset_cancellation();

    let sink = Arc::new(PostgresSink::new(state.client.clone()));
    let state_store = Arc::new(PostgresStateStore::new(state.client.clone()));
    let fertilizer = Arc::new(PostgresFertilizerPile::new(state.client.clone()));

    let prefix_len: u8 = 8;
    let resume_from = crate::sink::resume_or_invalidate(
        state_store.as_ref(),
        sink.as_ref(),
        fertilizer.as_ref(),
        &search_id,
        &req.filter_text,
        prefix_len,
    );

    let config = SearchConfig {
        threads: req.threads.unwrap_or_else(num_cpus::get),
        prefix_len: prefix_len as usize,
        start_batch: resume_from,
        end_batch: None,
        cutoff: Cutoff::Auto,
        filter_id: search_id.clone(),
        filter_text: req.filter_text.clone(),
    };

    let driver = Arc::new(SearchDriver::new(pipeline, sink.clone(), state_store, fertilizer, config));
    let fertilizer_hits = driver.fertilize();

    let stats = driver.stats();
    let run_driver = driver.clone();
    let thread = std::thread::spawn(move || run_driver.run());

    *active = Some(ActiveSearch {
        id: search_id.clone(),
        driver,
        sink,
        stats,
        filter_text: req.filter_text.clone(),
        thread: Some(thread),
    });

    HttpResponse::Ok().json(StartSearchResponse { search_id, fertilizer_hits })
}

async fn get_status(state: web::Data<AppState>, query: web::Query<std::collections::HashMap<String, String>>) -> impl Responder {
    let id = match query.get("id") {
        Some(id) => id.clone(),
        None => return HttpResponse::BadRequest().body("missing query parameter `id`"),
    };

    let mut active = state.active.lock().expect("active search mutex poisoned");
    if let Some(search) = active.as_mut() {
        if search.id == id {
            if let Some(thread) = &search.thread {
                if thread.is_finished() {
                    search.thread.take().map(|t| t.join());
                }
            }
            let top = search.sink.top(1000).into_iter().map(ResultRowResponse::from).collect();
            return HttpResponse::Ok().json(SearchStatusResponse {
                search_id: search.id.clone(),
                running: search.thread.is_some(),
                seeds_evaluated: search.stats.seeds_evaluated.load(std::sync::atomic::Ordering::Relaxed),
                batches_completed: search.stats.batches_completed.load(std::sync::atomic::Ordering::Relaxed),
                last_completed_batch: search.stats.batches_completed.load(std::sync::atomic::Ordering::Relaxed),
                top,
                filter_text: search.filter_text.clone(),
            });
        }
    }
    drop(active);

    let store = PostgresStateStore::new(state.client.clone());
    match store.load(&id) {
        Some(checkpoint) => {
            let sink = PostgresSink::new(state.client.clone());
            let top = sink.top(1000).into_iter().map(ResultRowResponse::from).collect();
            HttpResponse::Ok().json(SearchStatusResponse {
                search_id: id,
                running: false,
                seeds_evaluated: 0,
                batches_completed: checkpoint.last_completed_batch,
                last_completed_batch: checkpoint.last_completed_batch,
                top,
                filter_text: checkpoint.filter_text,
            })
        }
        None => HttpResponse::NotFound().body("unknown search id"),
    }
}

async fn stop_search(state: web::Data<AppState>, req: web::Json<StopSearchRequest>) -> impl Responder {
    let active = state.active.lock().expect("active search mutex poisoned");
    match active.as_ref() {
        Some(search) if search.id == req.search_id => {
            crate::cancel();
            HttpResponse::Ok().finish()
        }
        Some(_) => HttpResponse::NotFound().body("no such running search"),
        None => HttpResponse::NotFound().body("no search is running"),
    }
}

async fn analyze(req: web::Json<AnalyzeRequest>) -> impl Responder {
    let deck = match req.deck.as_deref().map(|d| Deck::parse(d).ok_or(d)) {
        Some(Ok(d)) => d,
        Some(Err(d)) => return HttpResponse::BadRequest().body(format!("unknown deck: {d}")),
        None => Deck::Red,
    };
    let stake = match req.stake.as_deref().map(|s| Stake::parse(s).ok_or(s)) {
        Some(Ok(s)) => s,
        Some(Err(s)) => return HttpResponse::BadRequest().body(format!("unknown stake: {s}")),
        None => Stake::White,
    };
    HttpResponse::Ok().json(crate::analysis::analyze(&req.seed, deck, stake))
}
