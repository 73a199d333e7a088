use crate::schema::users;

#[derive(Queryable, Identifiable)]
#[table_name = "users"]
pub struct UserData {
    pub id: u64,
    pub full_name: String,
    pub email: String,
    pub mobile_number: String,
    pub roll_number: String,
    pub department: String,
    pub shift: String,
    pub password: String,
    pub profile_image: String,
    pub otp: Option<i32>,
}

#[derive(Insertable)]
#[table_name = "users"]
pub struct NewUser {
    pub full_name: String,
    pub email: String,
    pub mobile_number: String,
    pub roll_number: String,
    pub department: String,
    pub shift: String,
    pub password: String,
    pub profile_image: String,
}

#[derive(AsChangeset, Default)]
#[table_name = "users"]
pub struct UpdateUser {
    pub full_name: Option<String>,
    pub email: Option<String>,
    pub mobile_number: Option<String>,
    pub roll_number: Option<String>,
    pub department: Option<String>,
    pub shift: Option<String>,
    pub password: Option<String>,
    pub profile_image: Option<String>,
}

impl UpdateUser {
    pub fn is_empty(&self) -> bool {
        self.full_name.is_none()
            && self.email.is_none()
            && self.mobile_number.is_none()
            && self.roll_number.is_none()
            && self.department.is_none()
            && self.shift.is_none()
            && self.password.is_none()
            && self.profile_image.is_none()
    }
}
