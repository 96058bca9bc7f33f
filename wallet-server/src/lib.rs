//! wallet-server: HTTP API over a single `transactions` table
//!
//! Create, list-by-user, delete and per-user summary endpoints backed by
//! PostgreSQL. The binary in `wallet-cli` wires configuration, logging
//! and the schema bootstrap around [`http::run_server`].

pub mod db;
pub mod http;
pub mod models;
pub mod state;

pub use http::{build_router, run_server, ServerConfig};
pub use state::AppState;
