use crate::api::error::ApiError;
use crate::api::extract::{ApiJson, ApiQuery};
use crate::api::share::share_url;
use crate::application_ports::Locator;
use application_ports::invitation::{CreateInvitationDto, InvitationDto};
use axum::extract::{Path, State};
use axum::Json;
use domain_shared::invitation::{Slug, TemplateId};
use serde::{Deserialize, Serialize};
use tracing::instrument;

#[derive(Deserialize, Debug, Default)]
#[serde(rename_all = "camelCase")]
pub struct CreateInvitationRequest {
    title: Option<String>,
    date_label: Option<String>,
    message: Option<String>,
    access_code: Option<String>,
    template_id: Option<String>,
}

#[derive(Serialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct CreateInvitationResponse {
    ok: bool,
    slug: Slug,
    share_url: String,
}

#[instrument(level = "debug", skip_all)]
pub async fn create_handler<L: Locator>(
    State(locator): State<L>,
    ApiJson(request): ApiJson<CreateInvitationRequest>,
) -> Result<Json<CreateInvitationResponse>, ApiError> {
    let CreateInvitationRequest {
        title,
        date_label,
        message,
        access_code,
        template_id,
    } = request;

    let slug = locator
        .get_invitation_port()
        .create_invitation(CreateInvitationDto {
            title: title.unwrap_or_default(),
            date_label,
            message,
            access_code,
            template_id,
        })
        .await?;
    let share_url = share_url(locator.public_base_url(), &slug).to_string();

    Ok(Json(CreateInvitationResponse {
        ok: true,
        slug,
        share_url,
    }))
}

#[derive(Deserialize, Debug)]
pub struct AccessQuery {
    code: Option<String>,
}

#[derive(Serialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct InvitationResponse {
    ok: bool,
    slug: Slug,
    title: String,
    date_label: Option<String>,
    message: Option<String>,
    template_id: TemplateId,
    share_url: String,
    created_at: String,
}

#[instrument(level = "debug", skip_all)]
pub async fn get_handler<L: Locator>(
    State(locator): State<L>,
    Path(slug): Path<String>,
    ApiQuery(query): ApiQuery<AccessQuery>,
) -> Result<Json<InvitationResponse>, ApiError> {
    let InvitationDto {
        slug,
        title,
        date_label,
        message,
        template_id,
        created_at,
    } = locator
        .get_invitation_port()
        .get_invitation(Slug(slug), query.code)
        .await?;
    let share_url = share_url(locator.public_base_url(), &slug).to_string();

    Ok(Json(InvitationResponse {
        ok: true,
        slug,
        title,
        date_label,
        message,
        template_id,
        share_url,
        created_at: created_at.to_rfc3339(),
    }))
}
