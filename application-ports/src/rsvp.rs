use async_trait::async_trait;
use chrono::{DateTime, Utc};
use domain_shared::invitation::Slug;
use thiserror::Error;

#[async_trait]
pub trait RsvpPort {
    async fn submit_rsvp(&self, request: SubmitRsvpDto) -> Result<(), RsvpError>;
    async fn list_rsvps(&self, invitation_slug: String) -> Result<RsvpListDto, RsvpError>;
}

#[derive(Debug, Default)]
pub struct SubmitRsvpDto {
    pub invitation_slug: String,
    pub name: String,
    pub attending: bool,
}

#[derive(Debug, Clone, PartialEq)]
pub struct RsvpDto {
    pub name: String,
    pub attending: bool,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug)]
pub struct RsvpListDto {
    pub invitation_slug: Slug,
    /// Newest first.
    pub rsvps: Vec<RsvpDto>,
    pub attending: usize,
    pub declined: usize,
}

#[derive(Debug, Error)]
pub enum RsvpError {
    #[error("Missing invitationSlug or name")]
    MissingInvitationSlugOrName,
    #[error("Missing slug")]
    MissingSlug,
    #[error("Service is temporarily unavailable")]
    TemporaryUnavailable,
}
