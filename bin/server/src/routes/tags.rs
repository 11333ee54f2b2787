//! `POST /api/tags` and `GET /api/tags`: register and list programmed tags.

use adaki_sdm::{format_uid, is_valid_hex};
use adaki_tag_store::{NewTag, ProgrammedTag, TagType};
use axum::Json;
use axum::extract::State;
use serde::{Deserialize, Serialize};
use tracing::{error, info};

use crate::error::ApiError;
use crate::server::AppState;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct RegisterTagRequest {
    #[serde(default)]
    tag_uid: Option<String>,
    #[serde(default)]
    tag_type: Option<String>,
    #[serde(default)]
    redirect_url: Option<String>,
    #[serde(default)]
    access_rights: Option<String>,
    #[serde(default)]
    derivation_key: Option<String>,
    #[serde(default)]
    tt_status_mirroring: Option<bool>,
    #[serde(default)]
    notes: Option<String>,
}

#[derive(Debug, Serialize)]
pub(crate) struct RegisterTagResponse {
    message: &'static str,
    tag: ProgrammedTag,
}

fn two_hex_or_default(
    value: Option<String>,
    field: &'static str,
) -> Result<String, ApiError> {
    let value = value.unwrap_or_else(|| "0F".to_string());
    if value.len() == 2 && is_valid_hex(&value) {
        Ok(value)
    } else {
        Err(ApiError::bad_request(format!(
            "{field} must be exactly 2 hexadecimal digits"
        )))
    }
}

pub(crate) async fn register(
    State(state): State<AppState>,
    Json(request): Json<RegisterTagRequest>,
) -> Result<Json<RegisterTagResponse>, ApiError> {
    let (Some(tag_uid), Some(tag_type)) = (
        request.tag_uid.filter(|uid| !uid.is_empty()),
        request.tag_type.filter(|ty| !ty.is_empty()),
    ) else {
        return Err(ApiError::bad_request("Tag UID and type are required"));
    };

    if !is_valid_hex(&tag_uid) {
        return Err(ApiError::bad_request(
            "Tag UID must be a valid hexadecimal string",
        ));
    }

    let tag_type = TagType::parse(&tag_type).ok_or_else(|| {
        ApiError::bad_request(r#"Tag type must be either "DNA" or "DNA_TAGTAMPER""#)
    })?;

    let access_rights = two_hex_or_default(request.access_rights, "accessRights")?;
    let derivation_key = two_hex_or_default(request.derivation_key, "derivationKey")?;

    let tag = NewTag {
        tag_uid: tag_uid.to_ascii_uppercase(),
        tag_type,
        redirect_url: request.redirect_url,
        access_rights,
        derivation_key,
        tt_status_mirroring: request.tt_status_mirroring.unwrap_or(false),
        notes: request.notes,
    };

    let tag = state.store.insert(tag).await.map_err(|err| {
        error!(%err, "tag registration failed");
        ApiError::internal("Failed to register tag")
    })?;

    info!(uid = %format_uid(&tag.tag_uid), tag_type = %tag.tag_type, "registered tag");

    Ok(Json(RegisterTagResponse {
        message: "Tag registered successfully",
        tag,
    }))
}

pub(crate) async fn list(
    State(state): State<AppState>,
) -> Result<Json<Vec<ProgrammedTag>>, ApiError> {
    let tags = state.store.list().await.map_err(|err| {
        error!(%err, "tag listing failed");
        ApiError::internal("Failed to fetch tags")
    })?;

    Ok(Json(tags))
}
