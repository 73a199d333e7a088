pub(crate) mod responses;

use actix_web::{get, web, HttpResponse};
use anyhow::Context;
use diesel::prelude::*;

use crate::{
    database::get_db_conn,
    error::ApiError,
    models::{
        advisors::AdvisorData, blogs::BlogData, events::EventData,
        ex_team_members::ExTeamMemberData, reviews::ReviewData, team_members::TeamMemberData,
    },
    DbPool,
};

use self::responses::*;

pub fn config(cfg: &mut web::ServiceConfig) {
    cfg.service(data);
}

async fn load_advisors(pool: &web::Data<DbPool>) -> Result<Vec<AdvisorData>, ApiError> {
    use crate::schema::advisors;

    let conn = get_db_conn(pool)?;
    let rows = web::block(move || advisors::table.load::<AdvisorData>(&conn))
        .await
        .context("database error")?;
    Ok(rows)
}

async fn load_team_members(pool: &web::Data<DbPool>) -> Result<Vec<TeamMemberData>, ApiError> {
    use crate::schema::team_members;

    let conn = get_db_conn(pool)?;
    let rows = web::block(move || team_members::table.load::<TeamMemberData>(&conn))
        .await
        .context("database error")?;
    Ok(rows)
}

async fn load_ex_team_members(
    pool: &web::Data<DbPool>,
) -> Result<Vec<ExTeamMemberData>, ApiError> {
    use crate::schema::ex_team_members;

    let conn = get_db_conn(pool)?;
    let rows = web::block(move || ex_team_members::table.load::<ExTeamMemberData>(&conn))
        .await
        .context("database error")?;
    Ok(rows)
}

async fn load_events(pool: &web::Data<DbPool>) -> Result<Vec<EventData>, ApiError> {
    use crate::schema::events;

    let conn = get_db_conn(pool)?;
    let rows = web::block(move || {
        events::table
            .order(events::start_time.desc())
            .load::<EventData>(&conn)
    })
    .await
    .context("database error")?;
    Ok(rows)
}

async fn load_blogs(pool: &web::Data<DbPool>) -> Result<Vec<BlogData>, ApiError> {
    use crate::schema::blogs;

    let conn = get_db_conn(pool)?;
    let rows = web::block(move || {
        blogs::table
            .order(blogs::created_at.desc())
            .load::<BlogData>(&conn)
    })
    .await
    .context("database error")?;
    Ok(rows)
}

async fn load_reviews(pool: &web::Data<DbPool>) -> Result<Vec<ReviewData>, ApiError> {
    use crate::schema::reviews;

    let conn = get_db_conn(pool)?;
    let rows = web::block(move || {
        reviews::table
            .order(reviews::created_at.desc())
            .load::<ReviewData>(&conn)
    })
    .await
    .context("database error")?;
    Ok(rows)
}

// One landing-page payload instead of six round-trips. The reads are
// independent, so a record written between two of them may show up in one
// collection and not another.
#[get("/data")]
async fn data(pool: web::Data<DbPool>) -> Result<HttpResponse, ApiError> {
    let (advisors, team_members, ex_team_members, events, blogs, reviews) = futures::try_join!(
        load_advisors(&pool),
        load_team_members(&pool),
        load_ex_team_members(&pool),
        load_events(&pool),
        load_blogs(&pool),
        load_reviews(&pool),
    )?;

    Ok(HttpResponse::Ok().json(HomePageResponse {
        success: true,
        message: "Home page data fetched successfully".to_string(),
        advisors: advisors.into_iter().map(Into::into).collect(),
        team_members: team_members.into_iter().map(Into::into).collect(),
        ex_team_members: ex_team_members.into_iter().map(Into::into).collect(),
        events: events.into_iter().map(Into::into).collect(),
        blogs: blogs.into_iter().map(Into::into).collect(),
        reviews: reviews.into_iter().map(Into::into).collect(),
    }))
}
