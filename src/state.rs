use crate::{config::AppConfig, db::DbPool, services::mailer::SharedMailer};

#[derive(Clone)]
pub struct AppState {
    pub config: AppConfig,
    pub db: DbPool,
    pub mailer: SharedMailer,
}

impl AppState {
    pub fn new(config: AppConfig, db: DbPool, mailer: SharedMailer) -> Self {
        Self { config, db, mailer }
    }
}
