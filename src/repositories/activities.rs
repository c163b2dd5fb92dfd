use crate::{db::DbPool, error::AppError, models::activity::Activity};

#[derive(Clone)]
pub struct ActivitiesRepository {
    db: DbPool,
}

impl ActivitiesRepository {
    pub fn new(db: DbPool) -> Self {
        Self { db }
    }

    pub async fn registry_activity(&self, activity: &Activity) -> Result<(), AppError> {
        sqlx::query("INSERT INTO activities (id, trip_id, title, occurs_at) VALUES (?1, ?2, ?3, ?4)")
            .bind(&activity.id)
            .bind(&activity.trip_id)
            .bind(&activity.title)
            .bind(&activity.occurs_at)
            .execute(&self.db)
            .await?;
        Ok(())
    }

    pub async fn find_activities_from_trip(&self, trip_id: &str) -> Result<Vec<Activity>, AppError> {
        let activities = sqlx::query_as::<_, Activity>(
            "SELECT id, trip_id, title, occurs_at FROM activities WHERE trip_id = ?1",
        )
        .bind(trip_id)
        .fetch_all(&self.db)
        .await?;
        Ok(activities)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::test_pool;

    #[tokio::test]
    async fn occurs_at_round_trips_verbatim() {
        let repo = ActivitiesRepository::new(test_pool().await);
        repo.registry_activity(&Activity {
            id: "a1".into(),
            trip_id: "trip-1".into(),
            title: "Museu".into(),
            occurs_at: "2024-07-30 10:00:00".into(),
        })
        .await
        .unwrap();

        let activities = repo.find_activities_from_trip("trip-1").await.unwrap();
        assert_eq!(activities.len(), 1);
        assert_eq!(activities[0].occurs_at, "2024-07-30 10:00:00");
    }
}
