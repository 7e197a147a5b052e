use crate::application_ports::Locator;
use application_ports::invitation::{
    CreateInvitationDto, InvitationDto, InvitationError, InvitationPort,
};
use application_ports::rsvp::{RsvpDto, RsvpError, RsvpListDto, RsvpPort, SubmitRsvpDto};
use async_trait::async_trait;
use chrono::{TimeZone, Utc};
use domain_shared::invitation::{Slug, TemplateId};
use std::sync::{Arc, Mutex};
use url::Url;

#[derive(Clone)]
pub struct FakeLocator {
    invitation_port: Arc<FakeInvitationPort>,
    rsvp_port: Arc<FakeRsvpPort>,
    public_base_url: Url,
}

impl FakeLocator {
    pub fn new(invitation_port: FakeInvitationPort, rsvp_port: FakeRsvpPort) -> Self {
        Self {
            invitation_port: Arc::new(invitation_port),
            rsvp_port: Arc::new(rsvp_port),
            public_base_url: Url::parse("https://ceremo.ro").unwrap(),
        }
    }
}

impl Locator for FakeLocator {
    fn get_invitation_port(&self) -> Arc<dyn InvitationPort + Send + Sync> {
        self.invitation_port.clone()
    }

    fn get_rsvp_port(&self) -> Arc<dyn RsvpPort + Send + Sync> {
        self.rsvp_port.clone()
    }

    fn public_base_url(&self) -> &Url {
        &self.public_base_url
    }
}

/// Slugs are the lowercased, hyphenated title; `get_result` forces an error.
#[derive(Clone, Default)]
pub struct FakeInvitationPort {
    pub created: Arc<Mutex<Vec<CreateInvitationDto>>>,
    pub get_result: Arc<Mutex<Option<InvitationError>>>,
}

#[async_trait]
impl InvitationPort for FakeInvitationPort {
    async fn create_invitation(
        &self,
        request: CreateInvitationDto,
    ) -> Result<Slug, InvitationError> {
        if request.title.trim().chars().count() < 3 {
            return Err(InvitationError::TitleTooShort);
        }
        let slug = request
            .title
            .to_lowercase()
            .split(|c: char| !c.is_ascii_alphanumeric())
            .filter(|part| !part.is_empty())
            .collect::<Vec<_>>()
            .join("-");
        self.created.lock().unwrap().push(request);
        Ok(Slug(slug))
    }

    async fn get_invitation(
        &self,
        slug: Slug,
        _access_code: Option<String>,
    ) -> Result<InvitationDto, InvitationError> {
        if let Some(error) = self.get_result.lock().unwrap().take() {
            return Err(error);
        }
        Ok(InvitationDto {
            slug,
            title: "Ana & Andrei".to_string(),
            date_label: None,
            message: None,
            template_id: TemplateId::Ivory,
            created_at: Utc::now(),
        })
    }
}

#[derive(Clone, Default)]
pub struct FakeRsvpPort {
    pub submitted: Arc<Mutex<Vec<SubmitRsvpDto>>>,
}

#[async_trait]
impl RsvpPort for FakeRsvpPort {
    async fn submit_rsvp(&self, request: SubmitRsvpDto) -> Result<(), RsvpError> {
        if request.invitation_slug.trim().is_empty() || request.name.trim().is_empty() {
            return Err(RsvpError::MissingInvitationSlugOrName);
        }
        self.submitted.lock().unwrap().push(request);
        Ok(())
    }

    async fn list_rsvps(&self, invitation_slug: String) -> Result<RsvpListDto, RsvpError> {
        if invitation_slug.trim().is_empty() {
            return Err(RsvpError::MissingSlug);
        }
        let created_at = Utc.with_ymd_and_hms(2025, 7, 12, 18, 30, 0).unwrap();
        Ok(RsvpListDto {
            invitation_slug: Slug(invitation_slug),
            rsvps: vec![
                RsvpDto {
                    name: "Popescu, Ion".to_string(),
                    attending: false,
                    created_at,
                },
                RsvpDto {
                    name: "Maria".to_string(),
                    attending: true,
                    created_at,
                },
            ],
            attending: 1,
            declined: 1,
        })
    }
}
