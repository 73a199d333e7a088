use serde::Serialize;

use crate::models::users::UserData;

#[derive(Default, Serialize)]
pub struct TokenResponse {
    pub success: bool,
    pub message: String,
    pub token: String,
}

#[derive(Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UserItem {
    pub id: u64,
    pub full_name: String,
    pub email: String,
    pub mobile_number: String,
    pub roll_number: String,
    pub department: String,
    pub shift: String,
    pub profile_image: String,
}

impl From<UserData> for UserItem {
    fn from(data: UserData) -> Self {
        Self {
            id: data.id,
            full_name: data.full_name,
            email: data.email,
            mobile_number: data.mobile_number,
            roll_number: data.roll_number,
            department: data.department,
            shift: data.shift,
            profile_image: data.profile_image,
        }
    }
}

#[derive(Default, Serialize)]
pub struct UserDataResponse {
    pub success: bool,
    pub message: String,
    pub user: UserItem,
}