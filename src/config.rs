use std::{env, net::SocketAddr};

use url::Url;

use crate::error::AppError;

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub database_url: String,
    pub listen_addr: SocketAddr,
    pub max_connections: u32,
    pub public_base_url: Url,
    pub mail: MailConfig,
}

#[derive(Debug, Clone)]
pub struct MailConfig {
    pub api_url: Option<Url>,
    pub api_token: Option<String>,
    pub from: String,
}

impl AppConfig {
    pub fn from_env() -> Result<Self, AppError> {
        let database_url =
            env::var("DATABASE_URL").unwrap_or_else(|_| "sqlite://storage.db".to_string());
        let listen_addr: SocketAddr = env::var("APP_LISTEN_ADDR")
            .unwrap_or_else(|_| "127.0.0.1:3000".to_string())
            .parse()
            .map_err(|err| AppError::Config(format!("invalid APP_LISTEN_ADDR: {err}")))?;

        let max_connections: u32 = env::var("DATABASE_MAX_CONNECTIONS")
            .unwrap_or_else(|_| "5".to_string())
            .parse()
            .map_err(|err| AppError::Config(format!("invalid DATABASE_MAX_CONNECTIONS: {err}")))?;

        let public_base_url = env::var("PUBLIC_BASE_URL")
            .unwrap_or_else(|_| "http://localhost:3000".to_string());
        let public_base_url = Url::parse(&public_base_url)
            .map_err(|err| AppError::Config(format!("invalid PUBLIC_BASE_URL: {err}")))?;

        let api_url = match env::var("MAIL_API_URL") {
            Ok(raw) if !raw.trim().is_empty() => Some(
                Url::parse(raw.trim())
                    .map_err(|err| AppError::Config(format!("invalid MAIL_API_URL: {err}")))?,
            ),
            _ => None,
        };
        let api_token = env::var("MAIL_API_TOKEN")
            .ok()
            .filter(|token| !token.trim().is_empty());
        let from = env::var("MAIL_FROM").unwrap_or_else(|_| "no-reply@planner.local".to_string());

        Ok(Self {
            database_url,
            listen_addr,
            max_connections,
            public_base_url,
            mail: MailConfig {
                api_url,
                api_token,
                from,
            },
        })
    }
}

/// Link mailed to the trip owner; opening it confirms the trip.
pub fn trip_confirmation_url(public_base_url: &Url, trip_id: &str) -> String {
    let base = public_base_url.as_str().trim_end_matches('/');
    format!("{base}/trips/{trip_id}/confirm")
}
