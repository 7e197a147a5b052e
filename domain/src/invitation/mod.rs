pub mod slug;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use domain_shared::invitation::{AccessCode, Slug, TemplateId};
use thiserror::Error;
use tracing::instrument;

pub const MIN_TITLE_LEN: usize = 3;

pub struct Invitation {
    slug: Slug,
    title: String,
    date_label: Option<String>,
    message: Option<String>,
    access_code: Option<AccessCode>,
    template_id: TemplateId,
    created_at: DateTime<Utc>,
}

impl Invitation {
    #[instrument(level = "trace", skip(self))]
    pub fn slug(&self) -> &Slug {
        &self.slug
    }

    #[instrument(level = "trace", skip(self))]
    pub fn title(&self) -> &str {
        &self.title
    }

    #[instrument(level = "trace", skip(self))]
    pub fn date_label(&self) -> Option<&str> {
        self.date_label.as_deref()
    }

    #[instrument(level = "trace", skip(self))]
    pub fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }

    #[instrument(level = "trace", skip(self))]
    pub fn template_id(&self) -> TemplateId {
        self.template_id
    }

    #[instrument(level = "trace", skip(self))]
    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    #[instrument(level = "trace", skip(self))]
    pub fn is_protected(&self) -> bool {
        self.access_code.is_some()
    }

    /// Whether a guest presenting `code` may view the invitation.
    #[instrument(level = "trace", skip_all)]
    pub fn admits(&self, code: Option<&str>) -> bool {
        match &self.access_code {
            None => true,
            Some(AccessCode(expected)) => code.map(str::trim) == Some(expected.as_str()),
        }
    }
}

/// Validated creation request, waiting for a slug.
#[derive(Debug, Clone, PartialEq)]
pub struct InvitationDraft {
    pub title: String,
    pub date_label: Option<String>,
    pub message: Option<String>,
    pub access_code: Option<AccessCode>,
    pub template_id: TemplateId,
}

#[derive(Debug, Error, PartialEq)]
pub enum InvitationValidationError {
    #[error("Title too short")]
    TitleTooShort,
}

#[instrument(level = "debug", skip(access_code))]
pub fn validate_invitation_draft(
    title: &str,
    date_label: Option<&str>,
    message: Option<&str>,
    access_code: Option<&str>,
    template_id: Option<&str>,
) -> Result<InvitationDraft, InvitationValidationError> {
    let title = title.trim();
    if title.chars().count() < MIN_TITLE_LEN {
        return Err(InvitationValidationError::TitleTooShort);
    }

    Ok(InvitationDraft {
        title: title.to_string(),
        date_label: non_empty(date_label),
        message: non_empty(message),
        access_code: non_empty(access_code).map(AccessCode),
        template_id: template_id
            .map(TemplateId::parse_or_default)
            .unwrap_or_default(),
    })
}

fn non_empty(value: Option<&str>) -> Option<String> {
    value
        .map(str::trim)
        .filter(|value| !value.is_empty())
        .map(str::to_string)
}

#[instrument(level = "trace", skip(draft))]
pub fn create_invitation(slug: Slug, draft: InvitationDraft) -> Invitation {
    let InvitationDraft {
        title,
        date_label,
        message,
        access_code,
        template_id,
    } = draft;

    Invitation {
        slug,
        title,
        date_label,
        message,
        access_code,
        template_id,
        created_at: Utc::now(),
    }
}

impl Invitation {
    #[instrument(level = "trace", skip(snapshot))]
    pub fn from_snapshot(snapshot: InvitationSnapshot) -> Self {
        Self {
            slug: snapshot.slug,
            title: snapshot.title,
            date_label: snapshot.date_label,
            message: snapshot.message,
            access_code: snapshot.access_code,
            template_id: snapshot.template_id,
            created_at: snapshot.created_at,
        }
    }

    #[instrument(level = "trace", skip(self))]
    pub fn to_snapshot(&self) -> InvitationSnapshot {
        InvitationSnapshot {
            slug: self.slug.clone(),
            title: self.title.clone(),
            date_label: self.date_label.clone(),
            message: self.message.clone(),
            access_code: self.access_code.clone(),
            template_id: self.template_id,
            created_at: self.created_at,
        }
    }
}

#[derive(Clone)]
pub struct InvitationSnapshot {
    pub slug: Slug,
    pub title: String,
    pub date_label: Option<String>,
    pub message: Option<String>,
    pub access_code: Option<AccessCode>,
    pub template_id: TemplateId,
    pub created_at: DateTime<Utc>,
}

#[cfg_attr(feature = "mock", mockall::automock)]
#[async_trait]
pub trait InvitationRepository {
    async fn exists_by_slug(&self, slug: &Slug) -> Result<bool, InvitationRepositoryError>;
    async fn find_by_slug(
        &self,
        slug: &Slug,
    ) -> Result<Option<Invitation>, InvitationRepositoryError>;
    /// Inserts a new invitation; an already used slug is reported as `SlugTaken`.
    async fn save(&self, invitation: &Invitation) -> Result<(), InvitationRepositoryError>;
}

#[derive(Debug, Error)]
pub enum InvitationRepositoryError {
    #[error("Slug is already taken")]
    SlugTaken,
    #[error("Service is temporarily unavailable")]
    ServiceUnavailable,
}
