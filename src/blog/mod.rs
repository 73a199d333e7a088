pub(crate) mod responses;

use actix_multipart::Multipart;
use actix_web::{delete, get, post, web, HttpResponse};
use anyhow::Context;
use chrono::Utc;
use diesel::prelude::*;

use crate::{
    auth::AuthId,
    database::{assert::assert_blog, get_db_conn, last_insert_id},
    error::ApiError,
    models::blogs::{BlogData, NewBlog},
    multipart::read_form,
    protocol::SimpleResponse,
    upload::MediaClient,
    DbPool,
};

use self::responses::*;

const FILE_FIELD: &str = "image";

pub fn config(cfg: &mut web::ServiceConfig) {
    cfg.service(add).service(list).service(get_one).service(remove);
}

#[post("/add")]
async fn add(
    pool: web::Data<DbPool>,
    media: web::Data<MediaClient>,
    _auth: AuthId,
    payload: Multipart,
) -> Result<HttpResponse, ApiError> {
    use crate::schema::blogs;

    let mut form = read_form(payload, FILE_FIELD).await?;
    let title = form.text("title")?;
    let description = form.text("description")?;
    let file = form.require_file()?;

    let image = media.upload_image(file).await?;
    let record = NewBlog {
        title,
        description,
        image,
        created_at: Utc::now().naive_utc(),
    };

    let conn = get_db_conn(&pool)?;
    let blog = web::block(move || {
        conn.transaction(|| {
            diesel::insert_into(blogs::table)
                .values(record)
                .execute(&conn)
                .context("database error")?;
            let id = diesel::select(last_insert_id)
                .get_result::<u64>(&conn)
                .context("database error")?;
            blogs::table
                .filter(blogs::id.eq(id))
                .first::<BlogData>(&conn)
                .context("database error")
        })
    })
    .await?;

    Ok(HttpResponse::Created().json(BlogResponse {
        success: true,
        message: "Blog added successfully".to_string(),
        blog: blog.into(),
    }))
}

#[get("/list")]
async fn list(pool: web::Data<DbPool>) -> Result<HttpResponse, ApiError> {
    use crate::schema::blogs;

    let conn = get_db_conn(&pool)?;
    let blogs = web::block(move || {
        blogs::table
            .order(blogs::created_at.desc())
            .load::<BlogData>(&conn)
    })
    .await
    .context("database error")?;

    Ok(HttpResponse::Ok().json(BlogListResponse {
        success: true,
        message: "Blogs fetched successfully".to_string(),
        blogs: blogs.into_iter().map(Into::into).collect(),
    }))
}

#[get("/{id}")]
async fn get_one(pool: web::Data<DbPool>, id: web::Path<u64>) -> Result<HttpResponse, ApiError> {
    use crate::schema::blogs;

    let id = id.into_inner();
    let conn = get_db_conn(&pool)?;
    let blog = web::block(move || {
        blogs::table
            .filter(blogs::id.eq(id))
            .first::<BlogData>(&conn)
            .optional()
    })
    .await
    .context("database error")?
    .ok_or_else(|| ApiError::NotFound("Blog not found".to_string()))?;

    Ok(HttpResponse::Ok().json(BlogResponse {
        success: true,
        message: "Blog fetched successfully".to_string(),
        blog: blog.into(),
    }))
}

#[delete("/{id}")]
async fn remove(
    pool: web::Data<DbPool>,
    _auth: AuthId,
    id: web::Path<u64>,
) -> Result<HttpResponse, ApiError> {
    use crate::schema::blogs;

    let id = id.into_inner();
    assert_blog(&pool, id).await?;

    let conn = get_db_conn(&pool)?;
    web::block(move || {
        diesel::delete(blogs::table.filter(blogs::id.eq(id))).execute(&conn)
    })
    .await
    .context("database error")?;

    Ok(HttpResponse::Ok().json(SimpleResponse::ok("Blog deleted successfully")))
}
