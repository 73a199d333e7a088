use serde::Deserialize;

use crate::utils::OtpValue;

#[derive(Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

#[derive(Deserialize)]
pub struct SendOtpRequest {
    pub email: String,
}

#[derive(Deserialize)]
pub struct CheckOtpRequest {
    pub email: String,
    pub otp: OtpValue,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChangePasswordRequest {
    pub email: String,
    pub otp: OtpValue,
    pub new_password: String,
}
