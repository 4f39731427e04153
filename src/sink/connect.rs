//! Database bootstrap: connect, run the migrations in [`super::schema`], and
//! hand back a shared client.

#![cfg(feature = "database")]

use std::sync::Arc;
use tokio_postgres::{Client, NoTls};

pub async fn db() -> Arc<Client> {
    let url = std::env::var("DATABASE_URL").expect("DATABASE_URL in environment");
    let (client, connection) = tokio_postgres::connect(&url, NoTls).await.expect("to connect to database");
    tokio::spawn(connection);
    client.batch_execute(super::schema::CREATE_SEARCH_STATE_TABLE).await.expect("to initialize search_state table");
    client.batch_execute(super::schema::CREATE_FERTILIZER_TABLE).await.expect("to initialize fertilizer table");
    Arc::new(client)
}

/// Create (or widen) the results table for a filter pipeline with `width`
/// `should`-clauses. Idempotent: safe to call on every search start.
pub async fn ensure_results_table(client: &Client, width: usize) {
    client.batch_execute(&super::schema::create_results_table(width)).await.expect("to initialize results table");
}
