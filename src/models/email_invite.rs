use serde::{Deserialize, Serialize};
use sqlx::FromRow;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
pub struct EmailInvite {
    pub id: String,
    pub trip_id: String,
    pub email: String,
}
