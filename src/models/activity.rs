use serde::{Deserialize, Serialize};
use sqlx::FromRow;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Activity {
    pub id: String,
    pub trip_id: String,
    pub title: String,
    pub occurs_at: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CreateActivityRequest {
    pub title: String,
    pub occurs_at: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ActivityView {
    pub id: String,
    pub title: String,
    pub occurs_at: String,
}

impl From<Activity> for ActivityView {
    fn from(activity: Activity) -> Self {
        Self {
            id: activity.id,
            title: activity.title,
            occurs_at: activity.occurs_at,
        }
    }
}
