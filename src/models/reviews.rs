use crate::schema::reviews;
use chrono::NaiveDateTime;

#[derive(Queryable, Identifiable)]
#[table_name = "reviews"]
pub struct ReviewData {
    pub id: u64,
    pub full_name: String,
    pub semester: String,
    pub shift: String,
    pub department: String,
    pub review_message: String,
    pub profile_image: String,
    pub created_at: NaiveDateTime,
}

#[derive(Insertable)]
#[table_name = "reviews"]
pub struct NewReview {
    pub full_name: String,
    pub semester: String,
    pub shift: String,
    pub department: String,
    pub review_message: String,
    pub profile_image: String,
    pub created_at: NaiveDateTime,
}
