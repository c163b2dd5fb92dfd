use std::sync::Arc;

use askama::Template;
use async_trait::async_trait;
use chrono::NaiveDate;
use serde::Serialize;
use tracing::info;
use url::Url;

use crate::{config::MailConfig, error::AppError, models::trip::NewTrip};

pub const TRIP_CONFIRMATION_SUBJECT: &str = "Trip confirmation";

/// Outbound mail. One blocking attempt per call; no retries.
#[async_trait]
pub trait EmailSender: Send + Sync {
    async fn send(&self, recipients: &[String], html_body: &str) -> Result<(), AppError>;
}

pub type SharedMailer = Arc<dyn EmailSender>;

pub fn mailer_from_config(config: &MailConfig) -> SharedMailer {
    match &config.api_url {
        Some(url) => Arc::new(HttpMailer::new(
            url.clone(),
            config.api_token.clone(),
            config.from.clone(),
        )),
        None => Arc::new(LogMailer),
    }
}

#[derive(Serialize)]
struct OutgoingMail<'a> {
    from: &'a str,
    to: &'a [String],
    subject: &'a str,
    html: &'a str,
}

/// Delivers through an HTTP mail relay that accepts a JSON message.
#[derive(Clone)]
pub struct HttpMailer {
    client: reqwest::Client,
    endpoint: Url,
    token: Option<String>,
    from: String,
}

impl HttpMailer {
    pub fn new(endpoint: Url, token: Option<String>, from: String) -> Self {
        Self {
            client: reqwest::Client::new(),
            endpoint,
            token,
            from,
        }
    }
}

#[async_trait]
impl EmailSender for HttpMailer {
    async fn send(&self, recipients: &[String], html_body: &str) -> Result<(), AppError> {
        let mail = OutgoingMail {
            from: &self.from,
            to: recipients,
            subject: TRIP_CONFIRMATION_SUBJECT,
            html: html_body,
        };
        let mut request = self.client.post(self.endpoint.clone()).json(&mail);
        if let Some(token) = &self.token {
            request = request.bearer_auth(token);
        }
        let response = request.send().await?;
        let status = response.status();
        if !status.is_success() {
            let detail = response.text().await.unwrap_or_default();
            return Err(AppError::Mail(format!("relay answered {status}: {detail}")));
        }
        info!(targets = ?recipients, "mail relayed");
        Ok(())
    }
}

/// Used when no relay is configured: the message only reaches the log.
#[derive(Clone, Default)]
pub struct LogMailer;

#[async_trait]
impl EmailSender for LogMailer {
    async fn send(&self, recipients: &[String], html_body: &str) -> Result<(), AppError> {
        info!(targets = ?recipients, body = %html_body, "mail not relayed, no MAIL_API_URL set");
        Ok(())
    }
}

/// Everything taken from the request body is HTML-escaped by askama; only
/// the confirmation link, built from config and the generated id, is not.
#[derive(Template)]
#[template(
    source = "<p>Hi {{ owner }}, your trip to {{ destination }} ({{ start }} - {{ end }}) is almost ready.</p><p>Trip confirmation: <a href='{{ confirm_url|safe }}'>click here</a></p>",
    ext = "html"
)]
struct TripConfirmationMail<'a> {
    owner: &'a str,
    destination: &'a str,
    start: String,
    end: String,
    confirm_url: &'a str,
}

pub fn render_trip_confirmation(trip: &NewTrip, confirm_url: &str) -> Result<String, AppError> {
    TripConfirmationMail {
        owner: &trip.owner_name,
        destination: &trip.destination,
        start: display_date(&trip.start_date),
        end: display_date(&trip.end_date),
        confirm_url,
    }
    .render()
    .map_err(|err| AppError::Other(err.into()))
}

fn display_date(raw: &str) -> String {
    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .map(|date| date.format("%d/%m/%Y").to_string())
        .unwrap_or_else(|_| raw.to_string())
}


#[cfg(test)]
mod tests {
    use std::sync::Mutex;

    use axum::{
        extract::State,
        http::{header::AUTHORIZATION, HeaderMap, StatusCode},
        routing::post,
        Json, Router,
    };
    use serde_json::{json, Value};
    use tokio::net::TcpListener;

    use super::*;

    fn trip() -> NewTrip {
        NewTrip {
            id: "trip-1".into(),
            destination: "Osasco".into(),
            start_date: "2024-07-30".into(),
            end_date: "30 de julho".into(),
            owner_name: "Higor".into(),
            owner_email: "h@x.com".into(),
        }
    }

    #[test]
    fn confirmation_body_links_to_trip() {
        let html =
            render_trip_confirmation(&trip(), "http://localhost:3000/trips/trip-1/confirm").unwrap();
        assert!(html.contains("href='http://localhost:3000/trips/trip-1/confirm'"));
        assert!(html.contains("Osasco"));
    }

    #[test]
    fn iso_dates_are_reformatted_and_others_kept() {
        let html = render_trip_confirmation(&trip(), "http://x/confirm").unwrap();
        assert!(html.contains("30/07/2024"));
        assert!(html.contains("30 de julho"));
    }

    #[tokio::test]
    async fn mailer_without_relay_only_logs() {
        let config = MailConfig {
            api_url: None,
            api_token: None,
            from: "no-reply@planner.local".into(),
        };
        let mailer = mailer_from_config(&config);
        mailer
            .send(&["h@x.com".to_string()], "<p>hi</p>")
            .await
            .unwrap();
    }

    #[test]
    fn request_markup_is_escaped_in_confirmation_body() {
        let mut trip = trip();
        trip.owner_name = "<img src=x onerror=alert(1)>".into();
        trip.destination = "<a href=\"https://evil.example\">Paris</a> & co".into();

        let html = render_trip_confirmation(&trip, "http://localhost:3000/trips/trip-1/confirm")
            .unwrap();

        assert!(!html.contains("<img"));
        assert!(!html.contains("evil.example\">"));
        assert!(!html.contains("<a href=\""));
        assert!(html.contains("&lt;img src=x onerror=alert(1)&gt;"));
        assert!(html.contains("&amp; co"));
        assert!(html.contains("href='http://localhost:3000/trips/trip-1/confirm'"));
    }

    #[derive(Clone)]
    struct Relay {
        status: StatusCode,
        received: Arc<Mutex<Vec<(Option<String>, Value)>>>,
    }

    async fn accept(
        State(relay): State<Relay>,
        headers: HeaderMap,
        Json(body): Json<Value>,
    ) -> StatusCode {
        let auth = headers
            .get(AUTHORIZATION)
            .and_then(|value| value.to_str().ok())
            .map(String::from);
        relay.received.lock().unwrap().push((auth, body));
        relay.status
    }

    async fn spawn_relay(status: StatusCode) -> (Url, Relay) {
        let relay = Relay {
            status,
            received: Arc::new(Mutex::new(Vec::new())),
        };
        let app = Router::new()
            .route("/send", post(accept))
            .with_state(relay.clone());
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });
        (Url::parse(&format!("http://{addr}/send")).unwrap(), relay)
    }

    #[tokio::test]
    async fn http_mailer_posts_message_with_bearer_token() {
        let (endpoint, relay) = spawn_relay(StatusCode::OK).await;
        let mailer = HttpMailer::new(
            endpoint,
            Some("secret-token".into()),
            "no-reply@planner.local".into(),
        );

        mailer
            .send(&["h@x.com".to_string()], "<p>hi</p>")
            .await
            .unwrap();

        let received = relay.received.lock().unwrap().clone();
        assert_eq!(received.len(), 1);
        let (auth, body) = &received[0];
        assert_eq!(auth.as_deref(), Some("Bearer secret-token"));
        assert_eq!(
            body,
            &json!({
                "from": "no-reply@planner.local",
                "to": ["h@x.com"],
                "subject": TRIP_CONFIRMATION_SUBJECT,
                "html": "<p>hi</p>",
            })
        );
    }

    #[tokio::test]
    async fn http_mailer_maps_relay_rejection_to_mail_error() {
        let (endpoint, relay) = spawn_relay(StatusCode::BAD_GATEWAY).await;
        let mailer = HttpMailer::new(endpoint, None, "no-reply@planner.local".into());

        let err = mailer
            .send(&["h@x.com".to_string()], "<p>hi</p>")
            .await
            .unwrap_err();

        match err {
            AppError::Mail(message) => assert!(message.contains("502"), "{message}"),
            other => panic!("expected mail error, got {other:?}"),
        }
        let received = relay.received.lock().unwrap().clone();
        assert_eq!(received[0].0, None);
    }
}
