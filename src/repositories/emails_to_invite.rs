use crate::{db::DbPool, error::AppError, models::email_invite::EmailInvite};

#[derive(Clone)]
pub struct EmailsToInviteRepository {
    db: DbPool,
}

impl EmailsToInviteRepository {
    pub fn new(db: DbPool) -> Self {
        Self { db }
    }

    pub async fn registry_email(&self, invite: &EmailInvite) -> Result<(), AppError> {
        sqlx::query("INSERT INTO emails_to_invite (id, trip_id, email) VALUES (?1, ?2, ?3)")
            .bind(&invite.id)
            .bind(&invite.trip_id)
            .bind(&invite.email)
            .execute(&self.db)
            .await?;
        Ok(())
    }

    pub async fn find_emails_from_trip(&self, trip_id: &str) -> Result<Vec<EmailInvite>, AppError> {
        let invites = sqlx::query_as::<_, EmailInvite>(
            "SELECT id, trip_id, email FROM emails_to_invite WHERE trip_id = ?1",
        )
        .bind(trip_id)
        .fetch_all(&self.db)
        .await?;
        Ok(invites)
    }
}
