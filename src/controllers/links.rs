use serde_json::json;
use tracing::info;

use super::new_id;
use crate::{
    envelope::Envelope,
    error::AppError,
    models::link::{CreateLinkRequest, Link, LinkView},
    repositories::LinksRepository,
};

pub struct LinkCreator {
    links: LinksRepository,
}

impl LinkCreator {
    pub fn new(links: LinksRepository) -> Self {
        Self { links }
    }

    pub async fn create(
        &self,
        request: CreateLinkRequest,
        trip_id: &str,
    ) -> Result<Envelope, AppError> {
        let link = Link {
            id: new_id(),
            trip_id: trip_id.to_string(),
            link: request.url,
            title: request.title,
        };
        self.links.registry_link(&link).await?;
        info!(%trip_id, link_id = %link.id, "link added");
        Ok(Envelope::created(json!({ "linkId": link.id })))
    }
}

pub struct LinksFinder {
    links: LinksRepository,
}

impl LinksFinder {
    pub fn new(links: LinksRepository) -> Self {
        Self { links }
    }

    pub async fn find(&self, trip_id: &str) -> Result<Envelope, AppError> {
        let links: Vec<LinkView> = self
            .links
            .find_links_from_trip(trip_id)
            .await?
            .into_iter()
            .map(LinkView::from)
            .collect();
        Ok(Envelope::ok(json!({ "links": links })))
    }
}
