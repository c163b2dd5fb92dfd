use crate::{
    db::DbPool,
    error::AppError,
    models::trip::{NewTrip, Trip},
};

#[derive(Clone)]
pub struct TripsRepository {
    db: DbPool,
}

impl TripsRepository {
    pub fn new(db: DbPool) -> Self {
        Self { db }
    }

    pub async fn create_trip(&self, trip: &NewTrip) -> Result<(), AppError> {
        sqlx::query(
            r#"INSERT INTO trips (id, destination, start_date, end_date, owner_name, owner_email)
               VALUES (?1, ?2, ?3, ?4, ?5, ?6)"#,
        )
        .bind(&trip.id)
        .bind(&trip.destination)
        .bind(&trip.start_date)
        .bind(&trip.end_date)
        .bind(&trip.owner_name)
        .bind(&trip.owner_email)
        .execute(&self.db)
        .await?;
        Ok(())
    }

    pub async fn find_trip_by_id(&self, trip_id: &str) -> Result<Option<Trip>, AppError> {
        let trip = sqlx::query_as::<_, Trip>(
            r#"SELECT id, destination, start_date, end_date, owner_name, owner_email, status
               FROM trips WHERE id = ?1"#,
        )
        .bind(trip_id)
        .fetch_optional(&self.db)
        .await?;
        Ok(trip)
    }

    pub async fn update_trip_status(&self, trip_id: &str) -> Result<(), AppError> {
        sqlx::query("UPDATE trips SET status = 1 WHERE id = ?1")
            .bind(trip_id)
            .execute(&self.db)
            .await?;
        Ok(())
    }
}
