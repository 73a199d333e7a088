use actix_web::web;
use anyhow::Context;
use diesel::prelude::*;

use crate::{database::get_db_conn, error::ApiError, DbPool};

// Existence checks used by delete and update handlers. A missing record is
// a 404, everything else surfaces as an internal error.

pub async fn assert_advisor(pool: &web::Data<DbPool>, id: u64) -> Result<(), ApiError> {
    use crate::schema::advisors;

    let conn = get_db_conn(pool)?;
    let res = web::block(move || {
        advisors::table
            .filter(advisors::id.eq(id))
            .count()
            .get_result::<i64>(&conn)
    })
    .await
    .context("database error")?;

    if res == 0 {
        return Err(ApiError::NotFound("Advisor not found".to_string()));
    }

    Ok(())
}

pub async fn assert_team_member(pool: &web::Data<DbPool>, id: u64) -> Result<(), ApiError> {
    use crate::schema::team_members;

    let conn = get_db_conn(pool)?;
    let res = web::block(move || {
        team_members::table
            .filter(team_members::id.eq(id))
            .count()
            .get_result::<i64>(&conn)
    })
    .await
    .context("database error")?;

    if res == 0 {
        return Err(ApiError::NotFound("Team member not found".to_string()));
    }

    Ok(())
}

pub async fn assert_ex_team_member(pool: &web::Data<DbPool>, id: u64) -> Result<(), ApiError> {
    use crate::schema::ex_team_members;

    let conn = get_db_conn(pool)?;
    let res = web::block(move || {
        ex_team_members::table
            .filter(ex_team_members::id.eq(id))
            .count()
            .get_result::<i64>(&conn)
    })
    .await
    .context("database error")?;

    if res == 0 {
        return Err(ApiError::NotFound("Ex-team member not found".to_string()));
    }

    Ok(())
}

pub async fn assert_event(pool: &web::Data<DbPool>, id: u64) -> Result<(), ApiError> {
    use crate::schema::events;

    let conn = get_db_conn(pool)?;
    let res = web::block(move || {
        events::table
            .filter(events::id.eq(id))
            .count()
            .get_result::<i64>(&conn)
    })
    .await
    .context("database error")?;

    if res == 0 {
        return Err(ApiError::NotFound("Event not found".to_string()));
    }

    Ok(())
}

pub async fn assert_blog(pool: &web::Data<DbPool>, id: u64) -> Result<(), ApiError> {
    use crate::schema::blogs;

    let conn = get_db_conn(pool)?;
    let res = web::block(move || {
        blogs::table
            .filter(blogs::id.eq(id))
            .count()
            .get_result::<i64>(&conn)
    })
    .await
    .context("database error")?;

    if res == 0 {
        return Err(ApiError::NotFound("Blog not found".to_string()));
    }

    Ok(())
}

pub async fn assert_review(pool: &web::Data<DbPool>, id: u64) -> Result<(), ApiError> {
    use crate::schema::reviews;

    let conn = get_db_conn(pool)?;
    let res = web::block(move || {
        reviews::table
            .filter(reviews::id.eq(id))
            .count()
            .get_result::<i64>(&conn)
    })
    .await
    .context("database error")?;

    if res == 0 {
        return Err(ApiError::NotFound("Review not found".to_string()));
    }

    Ok(())
}
