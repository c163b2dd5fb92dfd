use axum::{
    extract::{Path, State},
    routing::{get, patch, post},
    Router,
};

use crate::{
    controllers::{
        ActivitiesFinder, ActivityCreator, LinkCreator, LinksFinder, ParticipantConfirmer,
        ParticipantCreator, ParticipantsFinder, TripConfirmer, TripCreator, TripFinder,
    },
    envelope::{Envelope, JsonBody},
    error::AppError,
    models::{
        activity::CreateActivityRequest, link::CreateLinkRequest,
        participant::CreateParticipantRequest, trip::CreateTripRequest,
    },
    repositories::{
        ActivitiesRepository, EmailsToInviteRepository, LinksRepository, ParticipantsRepository,
        TripsRepository,
    },
    state::AppState,
};

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/trips", post(create_trip))
        .route("/trips/:trip_id", get(find_trip))
        .route("/trips/:trip_id/confirm", get(confirm_trip))
        .route("/trips/:trip_id/links", post(create_link).get(find_links))
        .route("/trips/:trip_id/invite", post(invite_to_trip))
        .route("/trips/:trip_id/participants", get(find_participants))
        .route(
            "/trips/:trip_id/participants/:participant_id/confirm",
            patch(confirm_participant),
        )
        .route(
            "/trips/:trip_id/activities",
            post(create_activity).get(find_activities),
        )
}

async fn create_trip(
    State(state): State<AppState>,
    JsonBody(request): JsonBody<CreateTripRequest>,
) -> Result<Envelope, AppError> {
    let controller = TripCreator::new(
        TripsRepository::new(state.db.clone()),
        EmailsToInviteRepository::new(state.db.clone()),
        state.mailer.clone(),
        state.config.public_base_url.clone(),
    );
    controller.create(request).await
}

async fn find_trip(
    State(state): State<AppState>,
    Path(trip_id): Path<String>,
) -> Result<Envelope, AppError> {
    let controller = TripFinder::new(TripsRepository::new(state.db.clone()));
    controller.find_trip_details(&trip_id).await
}

async fn confirm_trip(
    State(state): State<AppState>,
    Path(trip_id): Path<String>,
) -> Result<Envelope, AppError> {
    let controller = TripConfirmer::new(TripsRepository::new(state.db.clone()));
    controller.confirm(&trip_id).await
}

async fn create_link(
    State(state): State<AppState>,
    Path(trip_id): Path<String>,
    JsonBody(request): JsonBody<CreateLinkRequest>,
) -> Result<Envelope, AppError> {
    let controller = LinkCreator::new(LinksRepository::new(state.db.clone()));
    controller.create(request, &trip_id).await
}

async fn find_links(
    State(state): State<AppState>,
    Path(trip_id): Path<String>,
) -> Result<Envelope, AppError> {
    let controller = LinksFinder::new(LinksRepository::new(state.db.clone()));
    controller.find(&trip_id).await
}

async fn invite_to_trip(
    State(state): State<AppState>,
    Path(trip_id): Path<String>,
    JsonBody(request): JsonBody<CreateParticipantRequest>,
) -> Result<Envelope, AppError> {
    let controller = ParticipantCreator::new(
        ParticipantsRepository::new(state.db.clone()),
        EmailsToInviteRepository::new(state.db.clone()),
    );
    controller.create(request, &trip_id).await
}

async fn find_participants(
    State(state): State<AppState>,
    Path(trip_id): Path<String>,
) -> Result<Envelope, AppError> {
    let controller = ParticipantsFinder::new(ParticipantsRepository::new(state.db.clone()));
    controller.find(&trip_id).await
}

// The trip segment only scopes the URL; confirmation goes by participant id.
async fn confirm_participant(
    State(state): State<AppState>,
    Path((_trip_id, participant_id)): Path<(String, String)>,
) -> Result<Envelope, AppError> {
    let controller = ParticipantConfirmer::new(ParticipantsRepository::new(state.db.clone()));
    controller.confirm(&participant_id).await
}

async fn create_activity(
    State(state): State<AppState>,
    Path(trip_id): Path<String>,
    JsonBody(request): JsonBody<CreateActivityRequest>,
) -> Result<Envelope, AppError> {
    let controller = ActivityCreator::new(ActivitiesRepository::new(state.db.clone()));
    controller.create(request, &trip_id).await
}

async fn find_activities(
    State(state): State<AppState>,
    Path(trip_id): Path<String>,
) -> Result<Envelope, AppError> {
    let controller = ActivitiesFinder::new(ActivitiesRepository::new(state.db.clone()));
    controller.find(&trip_id).await
}
