//! Process configuration from the environment.

use std::env;

use adaki_sdm::MasterKey;
use anyhow::Context;
use tracing::warn;

/// All-zero development master key used when `MASTER_KEY` is unset.
pub const DEFAULT_MASTER_KEY_HEX: &str = "00000000000000000000000000000000";

/// Environment-sourced configuration, loaded once at startup.
#[derive(Debug, Clone)]
pub struct Config {
    /// Master key tags are provisioned under
    pub master_key: MasterKey,
    /// Base URL of the Supabase project holding registered tags
    pub supabase_url: Option<String>,
    /// Service key for the Supabase REST API
    pub supabase_service_key: Option<String>,
}

impl Config {
    /// Read configuration from the environment.
    ///
    /// `MASTER_KEY` falls back to the all-zero development key with a
    /// warning; `SUPABASE_URL`/`SUPABASE_SERVICE_KEY` stay optional so
    /// the service can run against the in-memory store.
    pub fn from_env() -> anyhow::Result<Self> {
        let master_key_hex =
            env::var("MASTER_KEY").unwrap_or_else(|_| DEFAULT_MASTER_KEY_HEX.to_string());
        let master_key =
            MasterKey::from_hex(&master_key_hex).context("MASTER_KEY is not 32 hex digits")?;
        if master_key.is_default() {
            warn!("using the default all-zero master key; set MASTER_KEY before provisioning real tags");
        }

        Ok(Self {
            master_key,
            supabase_url: env::var("SUPABASE_URL").ok(),
            supabase_service_key: env::var("SUPABASE_SERVICE_KEY").ok(),
        })
    }
}
