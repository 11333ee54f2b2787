//! HTTP service for configuring and registering NTAG 424 DNA tags.
//!
//! Thin plumbing around the derivation engine and the tag store: a
//! clap CLI, environment configuration, tracing setup and the axum
//! routes mirroring the tag-manager API.

mod cli;
mod config;
mod error;
mod logging;
mod routes;
mod server;

pub use cli::Cli;
pub use config::Config;
pub use routes::router;
pub use server::{AppState, run};
