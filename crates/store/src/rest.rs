//! PostgREST-backed tag store.
//!
//! Speaks the Supabase REST conventions the deployment uses: schema
//! profile headers, `Prefer: return=representation` on insert, and
//! PostgREST order syntax on list. The service key doubles as the
//! `apikey` header and the bearer token.

use std::fmt;

use async_trait::async_trait;
use reqwest::header;
use tracing::debug;

use crate::error::{Result, StoreError};
use crate::store::TagStore;
use crate::tag::{NewTag, ProgrammedTag};

const SCHEMA: &str = "nfc_verify";
const TABLE: &str = "programmed_tags";

/// Tag store talking PostgREST against a Supabase project.
pub struct RestStore {
    client: reqwest::Client,
    base_url: String,
    service_key: String,
}

impl RestStore {
    /// Create a store for the given project base URL and service key.
    pub fn new(base_url: impl Into<String>, service_key: impl Into<String>) -> Self {
        let base_url: String = base_url.into();
        Self {
            client: reqwest::Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
            service_key: service_key.into(),
        }
    }

    fn table_url(&self) -> String {
        format!("{}/rest/v1/{}", self.base_url, TABLE)
    }
}

#[async_trait]
impl TagStore for RestStore {
    async fn insert(&self, tag: NewTag) -> Result<ProgrammedTag> {
        debug!(uid = %tag.tag_uid, "inserting tag registration");

        let response = self
            .client
            .post(self.table_url())
            .header("apikey", &self.service_key)
            .bearer_auth(&self.service_key)
            .header("Content-Profile", SCHEMA)
            .header("Prefer", "return=representation")
            // Ask PostgREST for the inserted row as a single object
            // instead of a one-element array
            .header(header::ACCEPT, "application/vnd.pgrst.object+json")
            .json(&tag)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(StoreError::UnexpectedStatus { status, body });
        }

        Ok(response.json().await?)
    }

    async fn list(&self) -> Result<Vec<ProgrammedTag>> {
        let response = self
            .client
            .get(self.table_url())
            .query(&[("select", "*"), ("order", "created_at.desc")])
            .header("apikey", &self.service_key)
            .bearer_auth(&self.service_key)
            .header("Accept-Profile", SCHEMA)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(StoreError::UnexpectedStatus { status, body });
        }

        Ok(response.json().await?)
    }
}

impl fmt::Debug for RestStore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // service_key stays out of Debug output
        f.debug_struct("RestStore")
            .field("base_url", &self.base_url)
            .finish_non_exhaustive()
    }
}
