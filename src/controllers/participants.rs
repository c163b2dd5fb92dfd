use serde_json::json;
use tracing::{debug, info};

use super::new_id;
use crate::{
    envelope::Envelope,
    error::AppError,
    models::{
        email_invite::EmailInvite,
        participant::{CreateParticipantRequest, NewParticipant, ParticipantView},
    },
    repositories::{EmailsToInviteRepository, ParticipantsRepository},
};

pub struct ParticipantCreator {
    participants: ParticipantsRepository,
    emails: EmailsToInviteRepository,
}

impl ParticipantCreator {
    pub fn new(participants: ParticipantsRepository, emails: EmailsToInviteRepository) -> Self {
        Self {
            participants,
            emails,
        }
    }

    /// Writes the invite first and the participant second. If the second
    /// insert fails the invite row is left behind.
    pub async fn create(
        &self,
        request: CreateParticipantRequest,
        trip_id: &str,
    ) -> Result<Envelope, AppError> {
        let invite = EmailInvite {
            id: new_id(),
            trip_id: trip_id.to_string(),
            email: request.email,
        };
        let participant = NewParticipant {
            id: new_id(),
            trip_id: trip_id.to_string(),
            emails_to_invite_id: invite.id.clone(),
            name: request.name,
        };

        self.emails.registry_email(&invite).await?;
        self.participants.registry_participant(&participant).await?;

        info!(%trip_id, participant_id = %participant.id, "participant invited");
        Ok(Envelope::created(
            json!({ "participant_id": participant.id }),
        ))
    }
}

pub struct ParticipantsFinder {
    participants: ParticipantsRepository,
}

impl ParticipantsFinder {
    pub fn new(participants: ParticipantsRepository) -> Self {
        Self { participants }
    }

    pub async fn find(&self, trip_id: &str) -> Result<Envelope, AppError> {
        let participants: Vec<ParticipantView> = self
            .participants
            .find_participants_from_trip(trip_id)
            .await?
            .into_iter()
            .map(ParticipantView::from)
            .collect();
        Ok(Envelope::ok(json!({ "participants": participants })))
    }
}

pub struct ParticipantConfirmer {
    participants: ParticipantsRepository,
}

impl ParticipantConfirmer {
    pub fn new(participants: ParticipantsRepository) -> Self {
        Self { participants }
    }

    pub async fn confirm(&self, participant_id: &str) -> Result<Envelope, AppError> {
        self.participants
            .update_participant_status(participant_id)
            .await?;
        debug!(%participant_id, "participant confirmed");
        Ok(Envelope::no_content())
    }
}

#[cfg(test)]
mod tests {
    use axum::http::StatusCode;

    use super::*;
    use crate::db::{test_pool, DbPool};

    fn creator(pool: &DbPool) -> ParticipantCreator {
        ParticipantCreator::new(
            ParticipantsRepository::new(pool.clone()),
            EmailsToInviteRepository::new(pool.clone()),
        )
    }

    fn john() -> CreateParticipantRequest {
        CreateParticipantRequest {
            email: "john@example.com".into(),
            name: "John Doe".into(),
        }
    }

    #[tokio::test]
    async fn creates_one_invite_and_one_linked_participant() {
        let pool = test_pool().await;
        let created = creator(&pool).create(john(), "trip-1").await.unwrap();
        assert_eq!(created.status_code, StatusCode::CREATED);
        let participant_id = created.body.unwrap()["participant_id"]
            .as_str()
            .unwrap()
            .to_string();

        let invites = EmailsToInviteRepository::new(pool.clone())
            .find_emails_from_trip("trip-1")
            .await
            .unwrap();
        assert_eq!(invites.len(), 1);

        let linked: String =
            sqlx::query_scalar("SELECT emails_to_invite_id FROM participants WHERE id = ?1")
                .bind(&participant_id)
                .fetch_one(&pool)
                .await
                .unwrap();
        assert_eq!(linked, invites[0].id);
    }

    #[tokio::test]
    async fn finder_projects_joined_rows() {
        let pool = test_pool().await;
        let created = creator(&pool).create(john(), "trip-1").await.unwrap();
        let participant_id = created.body.unwrap()["participant_id"].clone();

        let found = ParticipantsFinder::new(ParticipantsRepository::new(pool))
            .find("trip-1")
            .await
            .unwrap();
        assert_eq!(
            found.body.unwrap(),
            json!({
                "participants": [{
                    "id": participant_id,
                    "name": "John Doe",
                    "is_confirmed": 0,
                    "email_to_invite": "john@example.com",
                }]
            })
        );
    }

    #[tokio::test]
    async fn finder_returns_empty_list_for_unknown_trip() {
        let found = ParticipantsFinder::new(ParticipantsRepository::new(test_pool().await))
            .find("nope")
            .await
            .unwrap();
        assert_eq!(found.status_code, StatusCode::OK);
        assert_eq!(found.body.unwrap(), json!({ "participants": [] }));
    }

    #[tokio::test]
    async fn confirm_flips_flag() {
        let pool = test_pool().await;
        let created = creator(&pool).create(john(), "trip-1").await.unwrap();
        let participant_id = created.body.unwrap()["participant_id"]
            .as_str()
            .unwrap()
            .to_string();

        let envelope = ParticipantConfirmer::new(ParticipantsRepository::new(pool.clone()))
            .confirm(&participant_id)
            .await
            .unwrap();
        assert_eq!(envelope.status_code, StatusCode::NO_CONTENT);

        let rows = ParticipantsRepository::new(pool)
            .find_participants_from_trip("trip-1")
            .await
            .unwrap();
        assert_eq!(rows[0].is_confirmed, 1);
    }

    #[tokio::test]
    async fn failed_participant_insert_leaves_invite_behind() {
        let pool = test_pool().await;
        sqlx::query("DROP TABLE participants")
            .execute(&pool)
            .await
            .unwrap();

        let err = creator(&pool).create(john(), "trip-1").await.unwrap_err();
        assert!(matches!(err, AppError::Database(_)));

        let invites = EmailsToInviteRepository::new(pool)
            .find_emails_from_trip("trip-1")
            .await
            .unwrap();
        assert_eq!(invites.len(), 1);
        assert_eq!(invites[0].email, "john@example.com");
    }
}
