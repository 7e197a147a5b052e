use async_trait::async_trait;
use chrono::{DateTime, Utc};
use domain_shared::invitation::{Slug, TemplateId};
use thiserror::Error;

#[async_trait]
pub trait InvitationPort {
    async fn create_invitation(
        &self,
        request: CreateInvitationDto,
    ) -> Result<Slug, InvitationError>;
    async fn get_invitation(
        &self,
        slug: Slug,
        access_code: Option<String>,
    ) -> Result<InvitationDto, InvitationError>;
}

#[derive(Debug, Default)]
pub struct CreateInvitationDto {
    pub title: String,
    pub date_label: Option<String>,
    pub message: Option<String>,
    pub access_code: Option<String>,
    pub template_id: Option<String>,
}

#[derive(Debug)]
pub struct InvitationDto {
    pub slug: Slug,
    pub title: String,
    pub date_label: Option<String>,
    pub message: Option<String>,
    pub template_id: TemplateId,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Error)]
pub enum InvitationError {
    #[error("Title too short")]
    TitleTooShort,
    #[error("Invitation not found")]
    NotFound,
    #[error("Access code required")]
    AccessDenied,
    #[error("Slug unavailable")]
    SlugUnavailable,
    #[error("Service is temporarily unavailable")]
    TemporaryUnavailable,
}
