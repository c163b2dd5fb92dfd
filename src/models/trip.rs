use serde::{Deserialize, Serialize};
use sqlx::FromRow;

pub const STATUS_UNCONFIRMED: i64 = 0;
pub const STATUS_CONFIRMED: i64 = 1;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Trip {
    pub id: String,
    pub destination: String,
    pub start_date: String,
    pub end_date: String,
    pub owner_name: String,
    pub owner_email: String,
    pub status: i64,
}

/// Body of `POST /trips`.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateTripRequest {
    pub destination: String,
    pub start_date: String,
    pub end_date: String,
    pub owner_name: String,
    pub owner_email: String,
    #[serde(default)]
    pub emails_to_invite: Option<Vec<String>>,
}

#[derive(Debug, Clone)]
pub struct NewTrip {
    pub id: String,
    pub destination: String,
    pub start_date: String,
    pub end_date: String,
    pub owner_name: String,
    pub owner_email: String,
}

impl NewTrip {
    pub fn from_request(id: String, request: &CreateTripRequest) -> Self {
        Self {
            id,
            destination: request.destination.clone(),
            start_date: request.start_date.clone(),
            end_date: request.end_date.clone(),
            owner_name: request.owner_name.clone(),
            owner_email: request.owner_email.clone(),
        }
    }
}

/// Public projection of a trip. Owner fields stay private.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TripDetails {
    pub id: String,
    pub destination: String,
    pub starts_at: String,
    pub ends_at: String,
    pub status: i64,
}

impl From<Trip> for TripDetails {
    fn from(trip: Trip) -> Self {
        Self {
            id: trip.id,
            destination: trip.destination,
            starts_at: trip.start_date,
            ends_at: trip.end_date,
            status: trip.status,
        }
    }
}
