pub(crate) mod responses;

use actix_multipart::Multipart;
use actix_web::{delete, get, post, put, web, HttpResponse};
use anyhow::Context;
use diesel::prelude::*;

use crate::{
    auth::AuthId,
    database::{assert::assert_event, get_db_conn},
    error::ApiError,
    models::events::{EventData, NewEvent, UpdateEvent},
    multipart::read_form,
    protocol::SimpleResponse,
    upload::MediaClient,
    utils::{assert_status_str, parse_time_str},
    DbPool,
};

use self::responses::*;

const FILE_FIELD: &str = "eventImage";

pub fn config(cfg: &mut web::ServiceConfig) {
    cfg.service(add).service(list).service(update).service(remove);
}

#[post("/add")]
async fn add(
    pool: web::Data<DbPool>,
    media: web::Data<MediaClient>,
    _auth: AuthId,
    payload: Multipart,
) -> Result<HttpResponse, ApiError> {
    use crate::schema::events;

    let mut form = read_form(payload, FILE_FIELD).await?;
    let title = form.text("title")?;
    let location = form.text("location")?;
    let description = form.text("description")?;
    let event_type = form.text("eventType")?;
    let organizer = form.text("organizer")?;
    let start_time = parse_time_str(form.text("startTime")?)?;
    let end_time = form.text_opt("endTime").map(parse_time_str).transpose()?;
    let status = form.text("status")?;
    let file = form.require_file()?;

    assert_status_str(&status)?;

    let image = media.upload_image(file).await?;
    let record = NewEvent {
        title,
        location,
        description,
        event_type,
        organizer,
        start_time,
        end_time,
        status,
        image,
    };

    let conn = get_db_conn(&pool)?;
    web::block(move || {
        diesel::insert_into(events::table)
            .values(record)
            .execute(&conn)
    })
    .await
    .context("database error")?;

    Ok(HttpResponse::Created().json(SimpleResponse::ok("Event added successfully")))
}

#[get("/list")]
async fn list(pool: web::Data<DbPool>) -> Result<HttpResponse, ApiError> {
    use crate::schema::events;

    let conn = get_db_conn(&pool)?;
    let events = web::block(move || {
        events::table
            .order(events::start_time.desc())
            .load::<EventData>(&conn)
    })
    .await
    .context("database error")?;

    Ok(HttpResponse::Ok().json(EventListResponse {
        success: true,
        message: "Events fetched successfully".to_string(),
        events: events.into_iter().map(Into::into).collect(),
    }))
}

#[put("/{id}")]
async fn update(
    pool: web::Data<DbPool>,
    media: web::Data<MediaClient>,
    _auth: AuthId,
    id: web::Path<u64>,
    payload: Multipart,
) -> Result<HttpResponse, ApiError> {
    use crate::schema::events;

    let id = id.into_inner();
    let mut form = read_form(payload, FILE_FIELD).await?;
    assert_event(&pool, id).await?;

    let mut changes = UpdateEvent {
        title: form.text_opt("title"),
        location: form.text_opt("location"),
        description: form.text_opt("description"),
        event_type: form.text_opt("eventType"),
        organizer: form.text_opt("organizer"),
        start_time: form.text_opt("startTime").map(parse_time_str).transpose()?,
        end_time: form.text_opt("endTime").map(parse_time_str).transpose()?,
        status: form.text_opt("status"),
        ..Default::default()
    };
    if let Some(status) = &changes.status {
        assert_status_str(status)?;
    }
    if let Some(file) = form.take_file() {
        changes.image = Some(media.upload_image(file).await?);
    }

    if !changes.is_empty() {
        let conn = get_db_conn(&pool)?;
        web::block(move || {
            diesel::update(events::table.filter(events::id.eq(id)))
                .set(&changes)
                .execute(&conn)
        })
        .await
        .context("database error")?;
    }

    Ok(HttpResponse::Ok().json(SimpleResponse::ok("Event updated successfully")))
}

#[delete("/{id}")]
async fn remove(
    pool: web::Data<DbPool>,
    _auth: AuthId,
    id: web::Path<u64>,
) -> Result<HttpResponse, ApiError> {
    use crate::schema::events;

    let id = id.into_inner();
    assert_event(&pool, id).await?;

    let conn = get_db_conn(&pool)?;
    web::block(move || {
        diesel::delete(events::table.filter(events::id.eq(id))).execute(&conn)
    })
    .await
    .context("database error")?;

    Ok(HttpResponse::Ok().json(SimpleResponse::ok("Event deleted successfully")))
}
