//! Use-case controllers. Each is built per request from the repositories it
//! needs and exposes one async method returning an [`Envelope`].
//!
//! Errors come back as [`AppError`](crate::error::AppError) so callers and
//! tests can tell them apart; the route layer flattens all of them to 400.
//!
//! [`Envelope`]: crate::envelope::Envelope

pub mod activities;
pub mod links;
pub mod participants;
pub mod trips;

pub use activities::{ActivitiesFinder, ActivityCreator};
pub use links::{LinkCreator, LinksFinder};
pub use participants::{ParticipantConfirmer, ParticipantCreator, ParticipantsFinder};
pub use trips::{TripConfirmer, TripCreator, TripFinder};

pub(crate) fn new_id() -> String {
    uuid::Uuid::new_v4().to_string()
}
