use crate::schema::advisors;

#[derive(Queryable, Identifiable)]
#[table_name = "advisors"]
pub struct AdvisorData {
    pub id: u64,
    pub name: String,
    pub role: String,
    pub profile_image: String,
}

#[derive(Insertable)]
#[table_name = "advisors"]
pub struct NewAdvisor {
    pub name: String,
    pub role: String,
    pub profile_image: String,
}
