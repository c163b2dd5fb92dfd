use crate::{
    db::DbPool,
    error::AppError,
    models::participant::{NewParticipant, ParticipantWithEmail},
};

#[derive(Clone)]
pub struct ParticipantsRepository {
    db: DbPool,
}

impl ParticipantsRepository {
    pub fn new(db: DbPool) -> Self {
        Self { db }
    }

    pub async fn registry_participant(&self, participant: &NewParticipant) -> Result<(), AppError> {
        sqlx::query(
            r#"INSERT INTO participants (id, trip_id, emails_to_invite_id, name)
               VALUES (?1, ?2, ?3, ?4)"#,
        )
        .bind(&participant.id)
        .bind(&participant.trip_id)
        .bind(&participant.emails_to_invite_id)
        .bind(&participant.name)
        .execute(&self.db)
        .await?;
        Ok(())
    }

    /// Inner join: a participant whose invite row is gone is not returned.
    pub async fn find_participants_from_trip(
        &self,
        trip_id: &str,
    ) -> Result<Vec<ParticipantWithEmail>, AppError> {
        let participants = sqlx::query_as::<_, ParticipantWithEmail>(
            r#"SELECT p.id, p.name, p.is_confirmed, e.email
               FROM participants AS p
               JOIN emails_to_invite AS e ON e.id = p.emails_to_invite_id
               WHERE p.trip_id = ?1"#,
        )
        .bind(trip_id)
        .fetch_all(&self.db)
        .await?;
        Ok(participants)
    }

    pub async fn update_participant_status(&self, participant_id: &str) -> Result<(), AppError> {
        sqlx::query("UPDATE participants SET is_confirmed = 1 WHERE id = ?1")
            .bind(participant_id)
            .execute(&self.db)
            .await?;
        Ok(())
    }
}
