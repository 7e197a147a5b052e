use crate::api::csv;
use crate::api::error::ApiError;
use crate::api::extract::{truthy, ApiJson, ApiQuery};
use crate::application_ports::Locator;
use application_ports::rsvp::{RsvpListDto, SubmitRsvpDto};
use axum::extract::State;
use axum::http::header;
use axum::response::{IntoResponse, Response};
use axum::Json;
use domain_shared::invitation::Slug;
use serde::{Deserialize, Serialize};
use tracing::{info, instrument};

#[derive(Deserialize, Debug, Default)]
#[serde(rename_all = "camelCase")]
pub struct SubmitRsvpRequest {
    invitation_slug: Option<String>,
    name: Option<String>,
    #[serde(default, deserialize_with = "truthy")]
    attending: bool,
}

#[derive(Serialize, Debug)]
pub struct OkResponse {
    ok: bool,
}

#[instrument(level = "debug", skip_all)]
pub async fn submit_handler<L: Locator>(
    State(locator): State<L>,
    ApiJson(request): ApiJson<SubmitRsvpRequest>,
) -> Result<Json<OkResponse>, ApiError> {
    locator
        .get_rsvp_port()
        .submit_rsvp(SubmitRsvpDto {
            invitation_slug: request.invitation_slug.unwrap_or_default(),
            name: request.name.unwrap_or_default(),
            attending: request.attending,
        })
        .await?;

    Ok(Json(OkResponse { ok: true }))
}

#[derive(Deserialize, Debug)]
pub struct SlugQuery {
    slug: Option<String>,
}

#[derive(Serialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct RsvpEntry {
    name: String,
    attending: bool,
    created_at: String,
}

#[derive(Serialize, Debug)]
pub struct RsvpListResponse {
    ok: bool,
    slug: Slug,
    attending: usize,
    declined: usize,
    rsvps: Vec<RsvpEntry>,
}

#[instrument(level = "debug", skip_all)]
pub async fn list_handler<L: Locator>(
    State(locator): State<L>,
    ApiQuery(query): ApiQuery<SlugQuery>,
) -> Result<Json<RsvpListResponse>, ApiError> {
    let RsvpListDto {
        invitation_slug,
        rsvps,
        attending,
        declined,
    } = locator
        .get_rsvp_port()
        .list_rsvps(query.slug.unwrap_or_default())
        .await?;

    Ok(Json(RsvpListResponse {
        ok: true,
        slug: invitation_slug,
        attending,
        declined,
        rsvps: rsvps
            .into_iter()
            .map(|rsvp| RsvpEntry {
                name: rsvp.name,
                attending: rsvp.attending,
                created_at: rsvp.created_at.to_rfc3339(),
            })
            .collect(),
    }))
}

#[instrument(level = "debug", skip_all)]
pub async fn export_handler<L: Locator>(
    State(locator): State<L>,
    ApiQuery(query): ApiQuery<SlugQuery>,
) -> Result<Response, ApiError> {
    let RsvpListDto {
        invitation_slug,
        rsvps,
        ..
    } = locator
        .get_rsvp_port()
        .list_rsvps(query.slug.unwrap_or_default())
        .await?;

    let body = csv::render_rsvps(&rsvps);
    let disposition = format!(
        "attachment; filename=\"{}\"",
        csv::attachment_filename(&invitation_slug.0)
    );

    info!(
        invitation_slug = %invitation_slug,
        rows = rsvps.len(),
        "RSVPs exported",
    );

    Ok((
        [
            (header::CONTENT_TYPE, csv::CONTENT_TYPE.to_string()),
            (header::CONTENT_DISPOSITION, disposition),
        ],
        body,
    )
        .into_response())
}
