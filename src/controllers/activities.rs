use serde_json::json;
use tracing::info;

use super::new_id;
use crate::{
    envelope::Envelope,
    error::AppError,
    models::activity::{Activity, ActivityView, CreateActivityRequest},
    repositories::ActivitiesRepository,
};

pub struct ActivityCreator {
    activities: ActivitiesRepository,
}

impl ActivityCreator {
    pub fn new(activities: ActivitiesRepository) -> Self {
        Self { activities }
    }

    pub async fn create(
        &self,
        request: CreateActivityRequest,
        trip_id: &str,
    ) -> Result<Envelope, AppError> {
        let activity = Activity {
            id: new_id(),
            trip_id: trip_id.to_string(),
            title: request.title,
            occurs_at: request.occurs_at,
        };
        self.activities.registry_activity(&activity).await?;
        info!(%trip_id, activity_id = %activity.id, "activity scheduled");
        Ok(Envelope::created(json!({ "activity_id": activity.id })))
    }
}

pub struct ActivitiesFinder {
    activities: ActivitiesRepository,
}

impl ActivitiesFinder {
    pub fn new(activities: ActivitiesRepository) -> Self {
        Self { activities }
    }

    pub async fn find(&self, trip_id: &str) -> Result<Envelope, AppError> {
        let activities: Vec<ActivityView> = self
            .activities
            .find_activities_from_trip(trip_id)
            .await?
            .into_iter()
            .map(ActivityView::from)
            .collect();
        Ok(Envelope::ok(json!({ "activities": activities })))
    }
}
