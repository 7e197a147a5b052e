use async_trait::async_trait;
use chrono::{DateTime, Utc};
use domain::rsvp::{Rsvp, RsvpRepository, RsvpRepositoryError};
use domain_shared::invitation::Slug;
use sqlx::{query, query_as, FromRow, PgPool};
use tracing::{instrument, warn};

pub struct PostgresRsvpRepository {
    pool: PgPool,
}

impl PostgresRsvpRepository {
    #[instrument(level = "trace", skip_all)]
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(FromRow)]
struct RsvpRow {
    invitation_slug: String,
    name: String,
    attending: bool,
    created_at: DateTime<Utc>,
}

#[async_trait]
impl RsvpRepository for PostgresRsvpRepository {
    #[instrument(level = "debug", err, skip_all)]
    async fn save(&self, rsvp: &Rsvp) -> Result<(), RsvpRepositoryError> {
        query(
            "INSERT INTO rsvps (invitation_slug, name, attending, created_at) VALUES ($1, $2, $3, $4)",
        )
        .bind(&rsvp.invitation_slug.0)
        .bind(&rsvp.name)
        .bind(rsvp.attending)
        .bind(rsvp.created_at)
        .execute(&self.pool)
        .await
        .map_err(|err| {
            warn!(error = ?err, "Failed to save RSVP");
            RsvpRepositoryError::ServiceUnavailable
        })?;

        Ok(())
    }

    #[instrument(level = "debug", err, skip(self))]
    async fn find_by_invitation_slug(
        &self,
        invitation_slug: &Slug,
    ) -> Result<Vec<Rsvp>, RsvpRepositoryError> {
        let rows = query_as::<_, RsvpRow>(
            "SELECT invitation_slug, name, attending, created_at FROM rsvps WHERE invitation_slug = $1 ORDER BY created_at DESC, id DESC",
        )
        .bind(&invitation_slug.0)
        .fetch_all(&self.pool)
        .await
        .map_err(|err| {
            warn!(error = ?err, "Failed to fetch RSVPs");
            RsvpRepositoryError::ServiceUnavailable
        })?;

        Ok(rows
            .into_iter()
            .map(|row| Rsvp {
                invitation_slug: Slug(row.invitation_slug),
                name: row.name,
                attending: row.attending,
                created_at: row.created_at,
            })
            .collect())
    }
}
