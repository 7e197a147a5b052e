use application_ports::invitation::InvitationPort;
use application_ports::rsvp::RsvpPort;
use std::sync::Arc;
use url::Url;

pub trait Locator {
    fn get_invitation_port(&self) -> Arc<dyn InvitationPort + Send + Sync>;
    fn get_rsvp_port(&self) -> Arc<dyn RsvpPort + Send + Sync>;
    /// Origin the invitation pages are served from.
    fn public_base_url(&self) -> &Url;
}
