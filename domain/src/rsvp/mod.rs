use async_trait::async_trait;
use chrono::{DateTime, Utc};
use domain_shared::invitation::Slug;
use thiserror::Error;
use tracing::instrument;

#[derive(Debug, Clone)]
pub struct Rsvp {
    pub invitation_slug: Slug,
    pub name: String,
    pub attending: bool,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Error, PartialEq)]
pub enum RsvpValidationError {
    #[error("Missing invitationSlug or name")]
    MissingInvitationSlugOrName,
}

#[instrument(level = "info", skip(name))]
pub fn create_rsvp(
    invitation_slug: &str,
    name: &str,
    attending: bool,
) -> Result<Rsvp, RsvpValidationError> {
    let invitation_slug = invitation_slug.trim();
    let name = name.trim();

    if invitation_slug.is_empty() || name.is_empty() {
        return Err(RsvpValidationError::MissingInvitationSlugOrName);
    }

    Ok(Rsvp {
        invitation_slug: Slug(invitation_slug.to_string()),
        name: name.to_string(),
        attending,
        created_at: Utc::now(),
    })
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct RsvpTally {
    pub attending: usize,
    pub declined: usize,
}

#[instrument(level = "trace", skip_all)]
pub fn tally_rsvps(rsvps: &[Rsvp]) -> RsvpTally {
    rsvps.iter().fold(RsvpTally::default(), |mut tally, rsvp| {
        if rsvp.attending {
            tally.attending += 1;
        } else {
            tally.declined += 1;
        }
        tally
    })
}

#[cfg_attr(feature = "mock", mockall::automock)]
#[async_trait]
pub trait RsvpRepository {
    async fn save(&self, rsvp: &Rsvp) -> Result<(), RsvpRepositoryError>;
    /// Newest first.
    async fn find_by_invitation_slug(
        &self,
        invitation_slug: &Slug,
    ) -> Result<Vec<Rsvp>, RsvpRepositoryError>;
}

#[derive(Debug, Error)]
pub enum RsvpRepositoryError {
    #[error("Service unavailable")]
    ServiceUnavailable,
}
