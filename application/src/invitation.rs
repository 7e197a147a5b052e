use application_ports::invitation::{
    CreateInvitationDto, InvitationDto, InvitationError, InvitationPort,
};
use async_trait::async_trait;
use domain::invitation::slug::allocate_slug;
use domain::invitation::{
    create_invitation, validate_invitation_draft, InvitationRepository, InvitationRepositoryError,
    InvitationValidationError,
};
use domain::ports::random::SlugSuffixGenerator;
use domain_shared::invitation::Slug;
use std::sync::Arc;
use tracing::{error, info, instrument, warn};

/// Inserts attempted before giving up on a title whose slugs keep being taken
/// between the existence check and the insert.
pub const MAX_INSERT_ATTEMPTS: usize = 3;

pub struct InvitationService {
    invitation_repository: Arc<dyn InvitationRepository + Send + Sync>,
    slug_suffix_generator: Arc<dyn SlugSuffixGenerator + Send + Sync>,
}

impl InvitationService {
    #[instrument(level = "trace", skip_all)]
    pub fn new(
        invitation_repository: Arc<dyn InvitationRepository + Send + Sync>,
        slug_suffix_generator: Arc<dyn SlugSuffixGenerator + Send + Sync>,
    ) -> Self {
        Self {
            invitation_repository,
            slug_suffix_generator,
        }
    }
}

#[async_trait]
impl InvitationPort for InvitationService {
    #[instrument(level = "info", skip(self, request), fields(title = %request.title))]
    async fn create_invitation(
        &self,
        request: CreateInvitationDto,
    ) -> Result<Slug, InvitationError> {
        let CreateInvitationDto {
            title,
            date_label,
            message,
            access_code,
            template_id,
        } = request;

        let draft = validate_invitation_draft(
            &title,
            date_label.as_deref(),
            message.as_deref(),
            access_code.as_deref(),
            template_id.as_deref(),
        )
        .map_err(map_validation_err)?;

        let repository = &self.invitation_repository;

        for attempt in 1..=MAX_INSERT_ATTEMPTS {
            let slug = allocate_slug(
                &draft.title,
                move |candidate| async move { repository.exists_by_slug(&candidate).await },
                &*self.slug_suffix_generator,
            )
            .await
            .map_err(map_invitation_repo_err)?;

            let invitation = create_invitation(slug, draft.clone());

            match repository.save(&invitation).await {
                Ok(()) => {
                    info!(
                        slug = %invitation.slug(),
                        template_id = %invitation.template_id(),
                        protected = invitation.is_protected(),
                        "Invitation created",
                    );
                    return Ok(invitation.slug().clone());
                }
                Err(InvitationRepositoryError::SlugTaken) => {
                    warn!(
                        slug = %invitation.slug(),
                        attempt,
                        "Slug was taken before the invitation got inserted, allocating again",
                    );
                }
                Err(err) => return Err(map_invitation_repo_err(err)),
            }
        }

        error!(
            title = %draft.title,
            "Could not insert the invitation, every allocated slug was taken",
        );

        Err(InvitationError::SlugUnavailable)
    }

    #[instrument(level = "info", skip(self, access_code))]
    async fn get_invitation(
        &self,
        slug: Slug,
        access_code: Option<String>,
    ) -> Result<InvitationDto, InvitationError> {
        let invitation = match self
            .invitation_repository
            .find_by_slug(&slug)
            .await
            .map_err(map_invitation_repo_err)?
        {
            Some(invitation) => invitation,
            None => {
                info!(slug = %slug, "Invitation not found");
                return Err(InvitationError::NotFound);
            }
        };

        if !invitation.admits(access_code.as_deref()) {
            warn!(
                slug = %slug,
                code_provided = access_code.is_some(),
                "Invitation requested without a valid access code",
            );
            return Err(InvitationError::AccessDenied);
        }

        Ok(InvitationDto {
            slug: invitation.slug().clone(),
            title: invitation.title().to_string(),
            date_label: invitation.date_label().map(str::to_string),
            message: invitation.message().map(str::to_string),
            template_id: invitation.template_id(),
            created_at: invitation.created_at(),
        })
    }
}

#[instrument(level = "trace", skip_all)]
fn map_validation_err(err: InvitationValidationError) -> InvitationError {
    match err {
        InvitationValidationError::TitleTooShort => InvitationError::TitleTooShort,
    }
}

#[instrument(level = "trace", skip_all)]
fn map_invitation_repo_err(err: InvitationRepositoryError) -> InvitationError {
    match err {
        InvitationRepositoryError::SlugTaken => {
            error!("InvitationRepositoryError::SlugTaken");
            InvitationError::SlugUnavailable
        }
        InvitationRepositoryError::ServiceUnavailable => {
            error!("InvitationRepositoryError::ServiceUnavailable");
            InvitationError::TemporaryUnavailable
        }
    }
}
