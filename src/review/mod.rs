pub(crate) mod responses;

use actix_multipart::Multipart;
use actix_web::{delete, get, post, web, HttpResponse};
use anyhow::Context;
use chrono::Utc;
use diesel::prelude::*;

use crate::{
    auth::AuthId,
    database::{assert::assert_review, get_db_conn},
    error::ApiError,
    models::reviews::{NewReview, ReviewData},
    multipart::read_form,
    protocol::SimpleResponse,
    upload::MediaClient,
    DbPool,
};

use self::responses::*;

const FILE_FIELD: &str = "profileImage";

pub fn config(cfg: &mut web::ServiceConfig) {
    cfg.service(add).service(list).service(remove);
}

#[post("/add")]
async fn add(
    pool: web::Data<DbPool>,
    media: web::Data<MediaClient>,
    _auth: AuthId,
    payload: Multipart,
) -> Result<HttpResponse, ApiError> {
    use crate::schema::reviews;

    let mut form = read_form(payload, FILE_FIELD).await?;
    let full_name = form.text("fullName")?;
    let semester = form.text("semester")?;
    let shift = form.text("shift")?;
    let department = form.text("department")?;
    let review_message = form.text("reviewMessage")?;
    let file = form.require_file()?;

    let profile_image = media.upload_image(file).await?;
    let record = NewReview {
        full_name,
        semester,
        shift,
        department,
        review_message,
        profile_image,
        created_at: Utc::now().naive_utc(),
    };

    let conn = get_db_conn(&pool)?;
    web::block(move || {
        diesel::insert_into(reviews::table)
            .values(record)
            .execute(&conn)
    })
    .await
    .context("database error")?;

    Ok(HttpResponse::Created().json(SimpleResponse::ok("Review added successfully")))
}

#[get("/list")]
async fn list(pool: web::Data<DbPool>) -> Result<HttpResponse, ApiError> {
    use crate::schema::reviews;

    let conn = get_db_conn(&pool)?;
    let reviews = web::block(move || {
        reviews::table
            .order(reviews::created_at.desc())
            .load::<ReviewData>(&conn)
    })
    .await
    .context("database error")?;

    Ok(HttpResponse::Ok().json(ReviewListResponse {
        success: true,
        message: "Reviews fetched successfully".to_string(),
        reviews: reviews.into_iter().map(Into::into).collect(),
    }))
}

#[delete("/{id}")]
async fn remove(
    pool: web::Data<DbPool>,
    _auth: AuthId,
    id: web::Path<u64>,
) -> Result<HttpResponse, ApiError> {
    use crate::schema::reviews;

    let id = id.into_inner();
    assert_review(&pool, id).await?;

    let conn = get_db_conn(&pool)?;
    web::block(move || {
        diesel::delete(reviews::table.filter(reviews::id.eq(id))).execute(&conn)
    })
    .await
    .context("database error")?;

    Ok(HttpResponse::Ok().json(SimpleResponse::ok("Review deleted successfully")))
}
