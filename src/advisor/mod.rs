pub(crate) mod responses;

use actix_multipart::Multipart;
use actix_web::{delete, get, post, web, HttpResponse};
use anyhow::Context;
use diesel::prelude::*;

use crate::{
    auth::AuthId,
    database::{assert::assert_advisor, get_db_conn},
    error::ApiError,
    models::advisors::{AdvisorData, NewAdvisor},
    multipart::read_form,
    protocol::SimpleResponse,
    upload::MediaClient,
    DbPool,
};

use self::responses::*;

const FILE_FIELD: &str = "advisorProfile";

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
    use crate::schema::advisors;

    let mut form = read_form(payload, FILE_FIELD).await?;
    let name = form.text("name")?;
    let role = form.text("role")?;
    let file = form.require_file()?;

    let profile_image = media.upload_image(file).await?;
    let record = NewAdvisor {
        name,
        role,
        profile_image,
    };

    let conn = get_db_conn(&pool)?;
    web::block(move || {
        diesel::insert_into(advisors::table)
            .values(record)
            .execute(&conn)
    })
    .await
    .context("database error")?;

    Ok(HttpResponse::Created().json(SimpleResponse::ok("Advisor added successfully")))
}

#[get("/list")]
async fn list(pool: web::Data<DbPool>) -> Result<HttpResponse, ApiError> {
    use crate::schema::advisors;

    let conn = get_db_conn(&pool)?;
    let advisors = web::block(move || advisors::table.load::<AdvisorData>(&conn))
        .await
        .context("database error")?;

    Ok(HttpResponse::Ok().json(AdvisorListResponse {
        success: true,
        message: "Advisors fetched successfully".to_string(),
        advisors: advisors.into_iter().map(Into::into).collect(),
    }))
}

#[delete("/{id}")]
async fn remove(
    pool: web::Data<DbPool>,
    _auth: AuthId,
    id: web::Path<u64>,
) -> Result<HttpResponse, ApiError> {
    use crate::schema::advisors;

    let id = id.into_inner();
    assert_advisor(&pool, id).await?;

    let conn = get_db_conn(&pool)?;
    web::block(move || {
        diesel::delete(advisors::table.filter(advisors::id.eq(id))).execute(&conn)
    })
    .await
    .context("database error")?;

    Ok(HttpResponse::Ok().json(SimpleResponse::ok("Advisor deleted successfully")))
}
