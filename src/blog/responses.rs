use serde::Serialize;

use crate::{models::blogs::BlogData, utils::format_time_str};

#[derive(Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BlogItem {
    pub id: u64,
    pub title: String,
    pub description: String,
    pub image: String,
    pub created_at: String,
}

impl From<BlogData> for BlogItem {
    fn from(data: BlogData) -> Self {
        Self {
            id: data.id,
            title: data.title,
            description: data.description,
            image: data.image,
            created_at: format_time_str(&data.created_at),
        }
    }
}

#[derive(Default, Serialize)]
pub struct BlogResponse {
    pub success: bool,
    pub message: String,
    pub blog: BlogItem,
}

#[derive(Default, Serialize)]
pub struct BlogListResponse {
    pub success: bool,
    pub message: String,
    pub blogs: Vec<BlogItem>,
}