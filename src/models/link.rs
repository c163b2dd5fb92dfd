use serde::{Deserialize, Serialize};
use sqlx::FromRow;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Link {
    pub id: String,
    pub trip_id: String,
    pub link: String,
    pub title: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CreateLinkRequest {
    pub url: String,
    pub title: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LinkView {
    pub id: String,
    pub url: String,
    pub title: String,
}

impl From<Link> for LinkView {
    fn from(link: Link) -> Self {
        Self {
            id: link.id,
            url: link.link,
            title: link.title,
        }
    }
}
