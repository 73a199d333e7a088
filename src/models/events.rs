use crate::schema::events;
use chrono::NaiveDateTime;

pub const STATUS_PLANNED: &str = "planned";
pub const STATUS_ONGOING: &str = "ongoing";
pub const STATUS_COMPLETED: &str = "completed";
pub const STATUS_CANCELLED: &str = "cancelled";

#[derive(Queryable, Identifiable)]
#[table_name = "events"]
pub struct EventData {
    pub id: u64,
    pub title: String,
    pub location: String,
    pub description: String,
    pub event_type: String,
    pub organizer: String,
    pub start_time: NaiveDateTime,
    pub end_time: Option<NaiveDateTime>,
    pub status: String,
    pub image: String,
}

#[derive(Insertable)]
#[table_name = "events"]
pub struct NewEvent {
    pub title: String,
    pub location: String,
    pub description: String,
    pub event_type: String,
    pub organizer: String,
    pub start_time: NaiveDateTime,
    pub end_time: Option<NaiveDateTime>,
    pub status: String,
    pub image: String,
}

#[derive(AsChangeset, Default)]
#[table_name = "events"]
pub struct UpdateEvent {
    pub title: Option<String>,
    pub location: Option<String>,
    pub description: Option<String>,
    pub event_type: Option<String>,
    pub organizer: Option<String>,
    pub start_time: Option<NaiveDateTime>,
    pub end_time: Option<NaiveDateTime>,
    pub status: Option<String>,
    pub image: Option<String>,
}

impl UpdateEvent {
    pub fn is_empty(&self) -> bool {
        self.title.is_none()
            && self.location.is_none()
            && self.description.is_none()
            && self.event_type.is_none()
            && self.organizer.is_none()
            && self.start_time.is_none()
            && self.end_time.is_none()
            && self.status.is_none()
            && self.image.is_none()
    }
}
