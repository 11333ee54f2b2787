//! `POST /api/tag-config`: derive TagWriter parameters for a URL.

use adaki_sdm::{DEFAULT_ACCESS_RIGHTS, TagConfig, derive, is_valid_hex};
use axum::Json;
use axum::extract::State;
use serde::{Deserialize, Serialize};
use tracing::error;

use crate::error::ApiError;
use crate::server::AppState;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct TagConfigRequest {
    #[serde(default)]
    url: Option<String>,
    #[serde(default)]
    access_rights: Option<String>,
    #[serde(default)]
    enable_tag_tamper: Option<bool>,
}

/// The derived parameter set, with the master key already stripped.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct TagConfigResponse {
    sdm_enc_file_data: String,
    access_rights: String,
    sdm_meta_read_key: String,
    tt_status_ctl_key: String,
}

pub(crate) async fn create(
    State(state): State<AppState>,
    Json(request): Json<TagConfigRequest>,
) -> Result<Json<TagConfigResponse>, ApiError> {
    let url = request
        .url
        .filter(|url| !url.is_empty())
        .ok_or_else(|| ApiError::bad_request("URL is required"))?;

    let access_rights = request
        .access_rights
        .unwrap_or_else(|| DEFAULT_ACCESS_RIGHTS.to_string());
    if access_rights.len() != 2 || !is_valid_hex(&access_rights) {
        return Err(ApiError::bad_request(
            "accessRights must be exactly 2 hexadecimal digits",
        ));
    }

    let config = TagConfig {
        access_rights,
        enable_tag_tamper: request.enable_tag_tamper.unwrap_or(false),
    };

    let params = derive(&state.master_key, &url, &config).map_err(|err| {
        // The error carries no key material; the response stays generic
        error!(%err, "tag parameter derivation failed");
        ApiError::internal("Failed to generate tag configuration")
    })?;

    // The master key never leaves the process
    Ok(Json(TagConfigResponse {
        sdm_enc_file_data: params.sdm_enc_file_data,
        access_rights: params.access_rights,
        sdm_meta_read_key: params.sdm_meta_read_key,
        tt_status_ctl_key: params.tt_status_ctl_key,
    }))
}
