use std::sync::Arc;

use adaki_tag_store::{MemoryStore, RestStore, TagStore};
use anyhow::Context;
use clap::Parser;
use cli::Cli;
use config::Config;
use server::AppState;

mod cli;
mod config;
mod error;
mod logging;
mod routes;
mod server;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Cli::parse();
    logging::init(args.verbose);

    let Config {
        master_key,
        supabase_url,
        supabase_service_key,
    } = Config::from_env()?;

    let store: Arc<dyn TagStore> = if args.memory_store {
        Arc::new(MemoryStore::new())
    } else {
        let url = supabase_url.context("SUPABASE_URL is not set (or pass --memory-store)")?;
        let key = supabase_service_key
            .context("SUPABASE_SERVICE_KEY is not set (or pass --memory-store)")?;
        Arc::new(RestStore::new(url, key))
    };

    let state = AppState { master_key, store };
    server::run(args.listen_addr, state).await
}
