use serde::Serialize;

use crate::models::advisors::AdvisorData;

#[derive(Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AdvisorItem {
    pub id: u64,
    pub name: String,
    pub role: String,
    pub advisor_profile: String,
}

impl From<AdvisorData> for AdvisorItem {
    fn from(data: AdvisorData) -> Self {
        Self {
            id: data.id,
            name: data.name,
            role: data.role,
            advisor_profile: data.profile_image,
        }
    }
}

#[derive(Default, Serialize)]
pub struct AdvisorListResponse {
    pub success: bool,
    pub message: String,
    pub advisors: Vec<AdvisorItem>,
}