use serde::Serialize;

use crate::{models::events::EventData, utils::format_time_str};

#[derive(Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EventItem {
    pub id: u64,
    pub title: String,
    pub location: String,
    pub description: String,
    pub event_type: String,
    pub organizer: String,
    pub start_time: String,
    pub end_time: Option<String>,
    pub status: String,
    pub image: String,
}

impl From<EventData> for EventItem {
    fn from(data: EventData) -> Self {
        Self {
            id: data.id,
            title: data.title,
            location: data.location,
            description: data.description,
            event_type: data.event_type,
            organizer: data.organizer,
            start_time: format_time_str(&data.start_time),
            end_time: data.end_time.as_ref().map(format_time_str),
            status: data.status,
            image: data.image,
        }
    }
}

#[derive(Default, Serialize)]
pub struct EventListResponse {
    pub success: bool,
    pub message: String,
    pub events: Vec<EventItem>,
}