use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// Body of `POST /trips/:trip_id/invite`.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateParticipantRequest {
    pub email: String,
    pub name: String,
}

#[derive(Debug, Clone)]
pub struct NewParticipant {
    pub id: String,
    pub trip_id: String,
    pub emails_to_invite_id: String,
    pub name: String,
}

/// Participant joined with the address it was invited under.
#[derive(Debug, Clone, FromRow)]
pub struct ParticipantWithEmail {
    pub id: String,
    pub name: String,
    pub is_confirmed: i64,
    pub email: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ParticipantView {
    pub id: String,
    pub name: String,
    pub is_confirmed: i64,
    pub email_to_invite: String,
}

impl From<ParticipantWithEmail> for ParticipantView {
    fn from(row: ParticipantWithEmail) -> Self {
        Self {
            id: row.id,
            name: row.name,
            is_confirmed: row.is_confirmed,
            email_to_invite: row.email,
        }
    }
}
