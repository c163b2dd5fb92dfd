use serde_json::json;
use tracing::{debug, info};
use url::Url;

use super::new_id;
use crate::{
    config::trip_confirmation_url,
    envelope::Envelope,
    error::AppError,
    models::{
        email_invite::EmailInvite,
        trip::{CreateTripRequest, NewTrip, TripDetails},
    },
    repositories::{EmailsToInviteRepository, TripsRepository},
    services::mailer::{render_trip_confirmation, SharedMailer},
};

pub struct TripCreator {
    trips: TripsRepository,
    emails: EmailsToInviteRepository,
    mailer: SharedMailer,
    public_base_url: Url,
}

impl TripCreator {
    pub fn new(
        trips: TripsRepository,
        emails: EmailsToInviteRepository,
        mailer: SharedMailer,
        public_base_url: Url,
    ) -> Self {
        Self {
            trips,
            emails,
            mailer,
            public_base_url,
        }
    }

    /// Persists the trip, then one invite per address, then mails the owner.
    /// Each step commits on its own: a failure further down leaves the
    /// earlier rows in place.
    pub async fn create(&self, request: CreateTripRequest) -> Result<Envelope, AppError> {
        let trip = NewTrip::from_request(new_id(), &request);
        self.trips.create_trip(&trip).await?;

        let invites = request.emails_to_invite.unwrap_or_default();
        for email in &invites {
            self.emails
                .registry_email(&EmailInvite {
                    id: new_id(),
                    trip_id: trip.id.clone(),
                    email: email.clone(),
                })
                .await?;
        }

        let confirm_url = trip_confirmation_url(&self.public_base_url, &trip.id);
        let html = render_trip_confirmation(&trip, &confirm_url)?;
        self.mailer
            .send(std::slice::from_ref(&trip.owner_email), &html)
            .await?;

        info!(trip_id = %trip.id, invites = invites.len(), "trip created");
        Ok(Envelope::created(json!({ "id": trip.id })))
    }
}

pub struct TripFinder {
    trips: TripsRepository,
}

impl TripFinder {
    pub fn new(trips: TripsRepository) -> Self {
        Self { trips }
    }

    pub async fn find_trip_details(&self, trip_id: &str) -> Result<Envelope, AppError> {
        let trip = self
            .trips
            .find_trip_by_id(trip_id)
            .await?
            .ok_or_else(|| AppError::NotFound("No Trip Found".into()))?;
        Ok(Envelope::ok(json!({ "trip": TripDetails::from(trip) })))
    }
}

pub struct TripConfirmer {
    trips: TripsRepository,
}

impl TripConfirmer {
    pub fn new(trips: TripsRepository) -> Self {
        Self { trips }
    }

    /// No existence check; confirming twice is a no-op.
    pub async fn confirm(&self, trip_id: &str) -> Result<Envelope, AppError> {
        self.trips.update_trip_status(trip_id).await?;
        debug!(%trip_id, "trip confirmed");
        Ok(Envelope::no_content())
    }
}
