use serde::Serialize;

use crate::models::admins::AdminData;

#[derive(Default, Serialize)]
pub struct TokenResponse {
    pub success: bool,
    pub message: String,
    pub token: String,
}

#[derive(Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AdminItem {
    pub id: u64,
    pub name: String,
    pub email: String,
    pub admin_profile: String,
}

impl From<AdminData> for AdminItem {
    fn from(data: AdminData) -> Self {
        Self {
            id: data.id,
            name: data.name,
            email: data.email,
            admin_profile: data.profile_image,
        }
    }
}

#[derive(Default, Serialize)]
pub struct AdminDataResponse {
    pub success: bool,
    pub message: String,
    pub admin: AdminItem,
}