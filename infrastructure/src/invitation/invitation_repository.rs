use async_trait::async_trait;
use chrono::{DateTime, Utc};
use domain::invitation::{
    Invitation, InvitationRepository, InvitationRepositoryError, InvitationSnapshot,
};
use domain_shared::invitation::{AccessCode, Slug, TemplateId};
use sqlx::{query, query_as, query_scalar, FromRow, PgPool};
use tracing::{instrument, warn};

pub struct PostgresInvitationRepository {
    pool: PgPool,
}

impl PostgresInvitationRepository {
    #[instrument(level = "trace", skip_all)]
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(FromRow)]
struct InvitationRow {
    slug: String,
    title: String,
    date_label: Option<String>,
    message: Option<String>,
    access_code: Option<String>,
    template_id: String,
    created_at: DateTime<Utc>,
}

impl From<InvitationRow> for Invitation {
    fn from(row: InvitationRow) -> Self {
        Invitation::from_snapshot(InvitationSnapshot {
            slug: Slug(row.slug),
            title: row.title,
            date_label: row.date_label,
            message: row.message,
            access_code: row.access_code.map(AccessCode),
            template_id: TemplateId::parse_or_default(&row.template_id),
            created_at: row.created_at,
        })
    }
}

#[async_trait]
impl InvitationRepository for PostgresInvitationRepository {
    #[instrument(level = "debug", err, skip(self))]
    async fn exists_by_slug(&self, slug: &Slug) -> Result<bool, InvitationRepositoryError> {
        query_scalar::<_, bool>("SELECT EXISTS(SELECT 1 FROM invitations WHERE slug = $1)")
            .bind(&slug.0)
            .fetch_one(&self.pool)
            .await
            .map_err(|err| {
                warn!(error = ?err, "Failed to check invitation slug");
                InvitationRepositoryError::ServiceUnavailable
            })
    }

    #[instrument(level = "debug", err, skip(self))]
    async fn find_by_slug(
        &self,
        slug: &Slug,
    ) -> Result<Option<Invitation>, InvitationRepositoryError> {
        let row = query_as::<_, InvitationRow>(
            "SELECT slug, title, date_label, message, access_code, template_id, created_at FROM invitations WHERE slug = $1",
        )
        .bind(&slug.0)
        .fetch_optional(&self.pool)
        .await
        .map_err(|err| {
            warn!(error = ?err, "Failed to fetch invitation");
            InvitationRepositoryError::ServiceUnavailable
        })?;

        Ok(row.map(Invitation::from))
    }

    #[instrument(level = "debug", err, skip(self, invitation))]
    async fn save(&self, invitation: &Invitation) -> Result<(), InvitationRepositoryError> {
        let InvitationSnapshot {
            slug,
            title,
            date_label,
            message,
            access_code,
            template_id,
            created_at,
        } = invitation.to_snapshot();

        query(
            "INSERT INTO invitations (slug, title, date_label, message, access_code, template_id, created_at) VALUES ($1, $2, $3, $4, $5, $6, $7)",
        )
        .bind(slug.0)
        .bind(title)
        .bind(date_label)
        .bind(message)
        .bind(access_code.map(|AccessCode(code)| code))
        .bind(template_id.as_str())
        .bind(created_at)
        .execute(&self.pool)
        .await
        .map_err(|err| match err {
            sqlx::Error::Database(ref db_err) if db_err.is_unique_violation() => {
                InvitationRepositoryError::SlugTaken
            }
            err => {
                warn!(error = ?err, "Failed to save invitation");
                InvitationRepositoryError::ServiceUnavailable
            }
        })?;

        Ok(())
    }
}
