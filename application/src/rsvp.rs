use application_ports::rsvp::{RsvpDto, RsvpError, RsvpListDto, RsvpPort, SubmitRsvpDto};
use async_trait::async_trait;
use domain::rsvp::{
    create_rsvp, tally_rsvps, RsvpRepository, RsvpRepositoryError, RsvpTally, RsvpValidationError,
};
use domain_shared::invitation::Slug;
use std::sync::Arc;
use tracing::{error, info, instrument, warn};

pub struct RsvpService {
    rsvp_repository: Arc<dyn RsvpRepository + Send + Sync>,
}

impl RsvpService {
    #[instrument(level = "trace", skip_all)]
    pub fn new(rsvp_repository: Arc<dyn RsvpRepository + Send + Sync>) -> Self {
        Self { rsvp_repository }
    }
}

#[async_trait]
impl RsvpPort for RsvpService {
    #[instrument(level = "info", skip(self))]
    async fn submit_rsvp(&self, request: SubmitRsvpDto) -> Result<(), RsvpError> {
        let SubmitRsvpDto {
            invitation_slug,
            name,
            attending,
        } = request;

        let rsvp = create_rsvp(&invitation_slug, &name, attending).map_err(|err| {
            warn!(error = %err, "Rejected RSVP");
            map_validation_err(err)
        })?;

        self.rsvp_repository
            .save(&rsvp)
            .await
            .map_err(map_rsvp_repo_err)?;

        info!(
            invitation_slug = %rsvp.invitation_slug,
            attending = rsvp.attending,
            "RSVP recorded",
        );

        Ok(())
    }

    #[instrument(level = "info", skip(self))]
    async fn list_rsvps(&self, invitation_slug: String) -> Result<RsvpListDto, RsvpError> {
        let invitation_slug = invitation_slug.trim();
        if invitation_slug.is_empty() {
            return Err(RsvpError::MissingSlug);
        }
        let invitation_slug = Slug(invitation_slug.to_string());

        let rsvps = self
            .rsvp_repository
            .find_by_invitation_slug(&invitation_slug)
            .await
            .map_err(map_rsvp_repo_err)?;
        let RsvpTally {
            attending,
            declined,
        } = tally_rsvps(&rsvps);

        info!(
            invitation_slug = %invitation_slug,
            attending,
            declined,
            "RSVPs listed",
        );

        Ok(RsvpListDto {
            invitation_slug,
            rsvps: rsvps
                .into_iter()
                .map(|rsvp| RsvpDto {
                    name: rsvp.name,
                    attending: rsvp.attending,
                    created_at: rsvp.created_at,
                })
                .collect(),
            attending,
            declined,
        })
    }
}

#[instrument(level = "trace", skip_all)]
fn map_validation_err(err: RsvpValidationError) -> RsvpError {
    match err {
        RsvpValidationError::MissingInvitationSlugOrName => RsvpError::MissingInvitationSlugOrName,
    }
}

#[instrument(level = "trace", skip_all)]
fn map_rsvp_repo_err(err: RsvpRepositoryError) -> RsvpError {
    match err {
        RsvpRepositoryError::ServiceUnavailable => {
            error!("RsvpRepositoryError::ServiceUnavailable");
            RsvpError::TemporaryUnavailable
        }
    }
}
