use crate::args::CommonArgs;
use crate::locator::ApplicationPortLocator;
use anyhow::{anyhow, bail};
use application::invitation::InvitationService;
use application::rsvp::RsvpService;
use clap::Args;
use infrastructure::invitation::invitation_repository::PostgresInvitationRepository;
use infrastructure::random::ThreadRngSlugSuffixGenerator;
use infrastructure::rsvp::rsvp_repository::PostgresRsvpRepository;
use presentation::api::run_api;
use std::sync::Arc;
use tracing::instrument;
use url::Url;

#[derive(Args, Debug)]
pub struct ServeArgs {
    /// The port for the HTTP API to listen on
    #[arg(long, env = "API_PORT", default_value_t = 8080)]
    pub port: u16,
    /// The public origin of the invitation pages, used for share links
    #[arg(long, env = "PUBLIC_BASE_URL")]
    pub public_base_url: String,
}

#[instrument(level = "trace", skip(common_args, args))]
pub async fn run(common_args: CommonArgs, args: ServeArgs) -> anyhow::Result<()> {
    let CommonArgs { database_url, .. } = common_args;
    let ServeArgs {
        port,
        public_base_url,
    } = args;
    let public_base_url = Url::parse(&public_base_url)?;
    if public_base_url.cannot_be_a_base() {
        bail!("PUBLIC_BASE_URL must be a hierarchical URL, got {public_base_url}");
    }

    let database_connection = sqlx::PgPool::connect(&database_url).await?;

    let invitation_repository = Arc::new(PostgresInvitationRepository::new(
        database_connection.clone(),
    ));
    let rsvp_repository = Arc::new(PostgresRsvpRepository::new(database_connection));

    let invitation_adapter = Arc::new(InvitationService::new(
        invitation_repository,
        Arc::new(ThreadRngSlugSuffixGenerator),
    ));
    let rsvp_adapter = Arc::new(RsvpService::new(rsvp_repository));

    let locator = ApplicationPortLocator::new(invitation_adapter, rsvp_adapter, public_base_url);

    run_api(locator, port).await.map_err(|e| anyhow!(e))?;

    Ok(())
}
