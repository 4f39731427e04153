//! A thin passthrough HTTP façade over the search driver: one active search
//! at a time, Postgres-backed, no auth and no static assets. Everything
//! interesting lives in `search`/`sink`/`filters`; this module only wires
//! requests onto it.

mod request;
mod response;
mod server;

pub use server::Server;
