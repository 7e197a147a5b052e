use application::invitation::InvitationService;
use application::rsvp::RsvpService;
use application_ports::invitation::InvitationPort;
use application_ports::rsvp::RsvpPort;
use presentation::application_ports::Locator;
use std::sync::Arc;
use tracing::instrument;
use url::Url;

#[derive(Clone)]
pub struct ApplicationPortLocator {
    invitation_adapter: Arc<InvitationService>,
    rsvp_adapter: Arc<RsvpService>,
    public_base_url: Url,
}

impl ApplicationPortLocator {
    #[instrument(level = "trace", skip_all)]
    pub fn new(
        invitation_adapter: Arc<InvitationService>,
        rsvp_adapter: Arc<RsvpService>,
        public_base_url: Url,
    ) -> Self {
        Self {
            invitation_adapter,
            rsvp_adapter,
            public_base_url,
        }
    }
}

impl Locator for ApplicationPortLocator {
    #[instrument(level = "trace", skip(self))]
    fn get_invitation_port(&self) -> Arc<dyn InvitationPort + Send + Sync> {
        self.invitation_adapter.clone()
    }

    #[instrument(level = "trace", skip(self))]
    fn get_rsvp_port(&self) -> Arc<dyn RsvpPort + Send + Sync> {
        self.rsvp_adapter.clone()
    }

    #[instrument(level = "trace", skip(self))]
    fn public_base_url(&self) -> &Url {
        &self.public_base_url
    }
}
