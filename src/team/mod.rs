pub(crate) mod responses;

use actix_multipart::Multipart;
use actix_web::{delete, get, post, web, HttpResponse};
use anyhow::Context;
use diesel::prelude::*;

use crate::{
    auth::AuthId,
    database::{assert::assert_team_member, get_db_conn},
    error::ApiError,
    models::team_members::{NewTeamMember, TeamMemberData},
    multipart::read_form,
    protocol::SimpleResponse,
    upload::MediaClient,
    DbPool,
};

use self::responses::*;

const FILE_FIELD: &str = "memberProfile";

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
    use crate::schema::team_members;

    let mut form = read_form(payload, FILE_FIELD).await?;
    let name = form.text("name")?;
    let role = form.text("role")?;
    let file = form.require_file()?;

    let profile_image = media.upload_image(file).await?;
    let record = NewTeamMember {
        name,
        role,
        profile_image,
    };

    let conn = get_db_conn(&pool)?;
    web::block(move || {
        diesel::insert_into(team_members::table)
            .values(record)
            .execute(&conn)
    })
    .await
    .context("database error")?;

    Ok(HttpResponse::Created().json(SimpleResponse::ok("Team member added successfully")))
}

#[get("/list")]
async fn list(pool: web::Data<DbPool>) -> Result<HttpResponse, ApiError> {
    use crate::schema::team_members;

    let conn = get_db_conn(&pool)?;
    let members = web::block(move || team_members::table.load::<TeamMemberData>(&conn))
        .await
        .context("database error")?;

    Ok(HttpResponse::Ok().json(TeamListResponse {
        success: true,
        message: "Team members fetched successfully".to_string(),
        team_members: members.into_iter().map(Into::into).collect(),
    }))
}

#[delete("/{id}")]
async fn remove(
    pool: web::Data<DbPool>,
    _auth: AuthId,
    id: web::Path<u64>,
) -> Result<HttpResponse, ApiError> {
    use crate::schema::team_members;

    let id = id.into_inner();
    assert_team_member(&pool, id).await?;

    let conn = get_db_conn(&pool)?;
    web::block(move || {
        diesel::delete(team_members::table.filter(team_members::id.eq(id))).execute(&conn)
    })
    .await
    .context("database error")?;

    Ok(HttpResponse::Ok().json(SimpleResponse::ok("Team member deleted successfully")))
}
