use crate::schema::blogs;
use chrono::NaiveDateTime;

#[derive(Queryable, Identifiable)]
#[table_name = "blogs"]
pub struct BlogData {
    pub id: u64,
    pub title: String,
    pub description: String,
    pub image: String,
    pub created_at: NaiveDateTime,
}

#[derive(Insertable)]
#[table_name = "blogs"]
pub struct NewBlog {
    pub title: String,
    pub description: String,
    pub image: String,
    pub created_at: NaiveDateTime,
}
