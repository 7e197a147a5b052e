use crate::application_ports::Locator;
use axum::routing::{get, post};
use axum::Router;
use tower_http::trace::TraceLayer;
use tracing::{info, instrument};

pub mod csv;
pub mod error;
pub mod extract;
pub mod invitations;
pub mod rsvps;
pub mod share;
#[cfg(test)]
mod test_support;

pub fn create_router<L: Locator + Send + Sync + Clone + 'static>() -> Router<L> {
    Router::new()
        .route("/api/invitations", post(invitations::create_handler::<L>))
        .route("/api/invitations/{slug}", get(invitations::get_handler::<L>))
        .route("/api/rsvp", post(rsvps::submit_handler::<L>))
        .route("/api/rsvps", get(rsvps::list_handler::<L>))
        .route("/api/rsvps/export", get(rsvps::export_handler::<L>))
        .layer(TraceLayer::new_for_http())
}

#[instrument(level = "info", skip(locator))]
pub async fn run_api<L: Locator + Send + Sync + Clone + 'static>(
    locator: L,
    port: u16,
) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    let router: Router<()> = create_router::<L>().with_state(locator);

    let listener = tokio::net::TcpListener::bind(format!("0.0.0.0:{}", port)).await?;
    info!(port, "API listening");

    axum::serve(listener, router.into_make_service()).await?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::test_support::{FakeInvitationPort, FakeLocator, FakeRsvpPort};
    use application_ports::invitation::InvitationError;
    use axum::body::{to_bytes, Body};
    use axum::http::{header, Request, StatusCode};
    use axum::response::Response;
    use serde_json::{json, Value};
    use tower::ServiceExt;

    async fn send(
        invitation_port: FakeInvitationPort,
        rsvp_port: FakeRsvpPort,
        request: Request<Body>,
    ) -> Response {
        create_router::<FakeLocator>()
            .with_state(FakeLocator::new(invitation_port, rsvp_port))
            .oneshot(request)
            .await
            .unwrap()
    }

    async fn body_text(response: Response) -> String {
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        String::from_utf8(bytes.to_vec()).unwrap()
    }

    async fn body_json(response: Response) -> Value {
        serde_json::from_str(&body_text(response).await).unwrap()
    }

    fn post_json(uri: &str, body: &str) -> Request<Body> {
        Request::post(uri)
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    fn get(uri: &str) -> Request<Body> {
        Request::get(uri).body(Body::empty()).unwrap()
    }

    #[tokio::test]
    async fn create_returns_slug_and_share_url() {
        let response = send(
            FakeInvitationPort::default(),
            FakeRsvpPort::default(),
            post_json("/api/invitations", r#"{"title":"Ana & Andrei"}"#),
        )
        .await;

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(
            body_json(response).await,
            json!({
                "ok": true,
                "slug": "ana-andrei",
                "shareUrl": "https://ceremo.ro/i/ana-andrei",
            }),
        );
    }

    #[tokio::test]
    async fn short_title_renders_error_body() {
        // Four bytes, two characters.
        let response = send(
            FakeInvitationPort::default(),
            FakeRsvpPort::default(),
            post_json("/api/invitations", r#"{"title":"Ăă"}"#),
        )
        .await;

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(
            body_json(response).await,
            json!({ "ok": false, "error": "Title too short" }),
        );
    }

    #[tokio::test]
    async fn unknown_invitation_is_not_found() {
        let invitation_port = FakeInvitationPort::default();
        *invitation_port.get_result.lock().unwrap() = Some(InvitationError::NotFound);

        let response = send(
            invitation_port,
            FakeRsvpPort::default(),
            get("/api/invitations/nope"),
        )
        .await;

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        assert_eq!(
            body_json(response).await,
            json!({ "ok": false, "error": "Invitation not found" }),
        );
    }

    #[tokio::test]
    async fn protected_invitation_without_code_is_forbidden() {
        let invitation_port = FakeInvitationPort::default();
        *invitation_port.get_result.lock().unwrap() = Some(InvitationError::AccessDenied);

        let response = send(
            invitation_port,
            FakeRsvpPort::default(),
            get("/api/invitations/ana-andrei?code=0000"),
        )
        .await;

        assert_eq!(response.status(), StatusCode::FORBIDDEN);
        assert_eq!(
            body_json(response).await,
            json!({ "ok": false, "error": "Access code required" }),
        );
    }

    #[tokio::test]
    async fn visible_invitation_is_served_by_slug() {
        let response = send(
            FakeInvitationPort::default(),
            FakeRsvpPort::default(),
            get("/api/invitations/ana-andrei"),
        )
        .await;

        assert_eq!(response.status(), StatusCode::OK);
        let body = body_json(response).await;
        assert_eq!(body["ok"], json!(true));
        assert_eq!(body["slug"], json!("ana-andrei"));
        assert_eq!(body["templateId"], json!("ivory"));
        assert_eq!(body["shareUrl"], json!("https://ceremo.ro/i/ana-andrei"));
    }

    #[tokio::test]
    async fn rsvp_attending_accepts_any_json_value() {
        let rsvp_port = FakeRsvpPort::default();

        for body in [
            r#"{"invitationSlug":"ana-andrei","name":"Maria","attending":1}"#,
            r#"{"invitationSlug":"ana-andrei","name":"Ion","attending":"yes"}"#,
            r#"{"invitationSlug":"ana-andrei","name":"Elena","attending":0}"#,
            r#"{"invitationSlug":"ana-andrei","name":"Dan"}"#,
        ] {
            let response = send(
                FakeInvitationPort::default(),
                rsvp_port.clone(),
                post_json("/api/rsvp", body),
            )
            .await;
            assert_eq!(response.status(), StatusCode::OK, "{body}");
            assert_eq!(body_json(response).await, json!({ "ok": true }));
        }

        let submitted = rsvp_port.submitted.lock().unwrap();
        let answers: Vec<_> = submitted
            .iter()
            .map(|rsvp| (rsvp.name.as_str(), rsvp.attending))
            .collect();
        assert_eq!(
            answers,
            vec![("Maria", true), ("Ion", true), ("Elena", false), ("Dan", false)],
        );
    }

    #[tokio::test]
    async fn rsvp_without_name_renders_error_body() {
        let response = send(
            FakeInvitationPort::default(),
            FakeRsvpPort::default(),
            post_json("/api/rsvp", r#"{"invitationSlug":"ana-andrei","attending":true}"#),
        )
        .await;

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(
            body_json(response).await,
            json!({ "ok": false, "error": "Missing invitationSlug or name" }),
        );
    }

    #[tokio::test]
    async fn unreadable_bodies_render_error_body() {
        let cases = [
            (
                Request::post("/api/rsvp")
                    .body(Body::from(r#"{"name":"Maria"}"#))
                    .unwrap(),
                "Expected a JSON body",
            ),
            (post_json("/api/rsvp", "not json"), "Malformed JSON body"),
            (
                post_json("/api/rsvp", r#"{"invitationSlug":"ana-andrei","name":5}"#),
                "Invalid request body",
            ),
            (post_json("/api/invitations", r#"{"title":"#), "Malformed JSON body"),
        ];

        for (request, error) in cases {
            let response = send(
                FakeInvitationPort::default(),
                FakeRsvpPort::default(),
                request,
            )
            .await;

            assert_eq!(response.status(), StatusCode::BAD_REQUEST, "{error}");
            assert_eq!(
                body_json(response).await,
                json!({ "ok": false, "error": error }),
            );
        }
    }

    #[tokio::test]
    async fn listing_without_slug_renders_error_body() {
        let response = send(
            FakeInvitationPort::default(),
            FakeRsvpPort::default(),
            get("/api/rsvps"),
        )
        .await;

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(
            body_json(response).await,
            json!({ "ok": false, "error": "Missing slug" }),
        );
    }

    #[tokio::test]
    async fn listing_reports_rows_and_counts() {
        let response = send(
            FakeInvitationPort::default(),
            FakeRsvpPort::default(),
            get("/api/rsvps?slug=ana-andrei"),
        )
        .await;

        assert_eq!(response.status(), StatusCode::OK);
        let body = body_json(response).await;
        assert_eq!(body["slug"], json!("ana-andrei"));
        assert_eq!(body["attending"], json!(1));
        assert_eq!(body["declined"], json!(1));
        assert_eq!(
            body["rsvps"][0],
            json!({
                "name": "Popescu, Ion",
                "attending": false,
                "createdAt": "2025-07-12T18:30:00+00:00",
            }),
        );
    }

    #[tokio::test]
    async fn export_serves_csv_attachment() {
        let response = send(
            FakeInvitationPort::default(),
            FakeRsvpPort::default(),
            get("/api/rsvps/export?slug=ana-andrei"),
        )
        .await;

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(
            response.headers()[header::CONTENT_TYPE],
            "text/csv; charset=utf-8",
        );
        assert_eq!(
            response.headers()[header::CONTENT_DISPOSITION],
            "attachment; filename=\"rsvps-ana-andrei.csv\"",
        );
        assert_eq!(
            body_text(response).await,
            "name,attending,created_at\n\
             \"Popescu, Ion\",no,2025-07-12T18:30:00+00:00\n\
             Maria,yes,2025-07-12T18:30:00+00:00",
        );
    }

    #[tokio::test]
    async fn export_without_slug_renders_error_body() {
        let response = send(
            FakeInvitationPort::default(),
            FakeRsvpPort::default(),
            get("/api/rsvps/export?slug="),
        )
        .await;

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(
            body_json(response).await,
            json!({ "ok": false, "error": "Missing slug" }),
        );
    }
}
