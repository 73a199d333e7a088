use crate::schema::admins;

#[derive(Queryable, Identifiable)]
#[table_name = "admins"]
pub struct AdminData {
    pub id: u64,
    pub name: String,
    pub email: String,
    pub password: String,
    pub profile_image: String,
    pub otp: Option<i32>,
}

#[derive(Insertable)]
#[table_name = "admins"]
pub struct NewAdmin {
    pub name: String,
    pub email: String,
    pub password: String,
    pub profile_image: String,
}

#[derive(AsChangeset, Default)]
#[table_name = "admins"]
pub struct UpdateAdmin {
    pub name: Option<String>,
    pub email: Option<String>,
    pub password: Option<String>,
    pub profile_image: Option<String>,
}

impl UpdateAdmin {
    // diesel rejects an all-None changeset, so callers skip the write.
    pub fn is_empty(&self) -> bool {
        self.name.is_none()
            && self.email.is_none()
            && self.password.is_none()
            && self.profile_image.is_none()
    }
}
