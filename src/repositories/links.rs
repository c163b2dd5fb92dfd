use crate::{db::DbPool, error::AppError, models::link::Link};

#[derive(Clone)]
pub struct LinksRepository {
    db: DbPool,
}

impl LinksRepository {
    pub fn new(db: DbPool) -> Self {
        Self { db }
    }

    pub async fn registry_link(&self, link: &Link) -> Result<(), AppError> {
        sqlx::query("INSERT INTO links (id, trip_id, link, title) VALUES (?1, ?2, ?3, ?4)")
            .bind(&link.id)
            .bind(&link.trip_id)
            .bind(&link.link)
            .bind(&link.title)
            .execute(&self.db)
            .await?;
        Ok(())
    }

    pub async fn find_links_from_trip(&self, trip_id: &str) -> Result<Vec<Link>, AppError> {
        let links = sqlx::query_as::<_, Link>(
            "SELECT id, trip_id, link, title FROM links WHERE trip_id = ?1",
        )
        .bind(trip_id)
        .fetch_all(&self.db)
        .await?;
        Ok(links)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::test_pool;

    #[tokio::test]
    async fn stores_and_reads_links() {
        let repo = LinksRepository::new(test_pool().await);
        repo.registry_link(&Link {
            id: "l1".into(),
            trip_id: "trip-1".into(),
            link: "https://www.google.com".into(),
            title: "Google".into(),
        })
        .await
        .unwrap();

        let links = repo.find_links_from_trip("trip-1").await.unwrap();
        assert_eq!(links.len(), 1);
        assert_eq!(links[0].link, "https://www.google.com");
        assert_eq!(links[0].title, "Google");
        assert!(repo.find_links_from_trip("trip-2").await.unwrap().is_empty());
    }
}
