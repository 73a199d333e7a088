use serde::Serialize;

use crate::{models::reviews::ReviewData, utils::format_time_str};

#[derive(Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ReviewItem {
    pub id: u64,
    pub full_name: String,
    pub semester: String,
    pub shift: String,
    pub department: String,
    pub review_message: String,
    pub profile_image: String,
    pub created_at: String,
}

impl From<ReviewData> for ReviewItem {
    fn from(data: ReviewData) -> Self {
        Self {
            id: data.id,
            full_name: data.full_name,
            semester: data.semester,
            shift: data.shift,
            department: data.department,
            review_message: data.review_message,
            profile_image: data.profile_image,
            created_at: format_time_str(&data.created_at),
        }
    }
}

#[derive(Default, Serialize)]
pub struct ReviewListResponse {
    pub success: bool,
    pub message: String,
    pub reviews: Vec<ReviewItem>,
}