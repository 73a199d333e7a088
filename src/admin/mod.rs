mod requests;
mod responses;

use actix_multipart::Multipart;
use actix_web::{get, post, put, web, HttpResponse};
use anyhow::Context;
use diesel::prelude::*;

use crate::{
    auth::{issue_token, AuthId},
    database::{get_db_conn, last_insert_id},
    error::ApiError,
    mailer::Mailer,
    models::admins::{AdminData, NewAdmin, UpdateAdmin},
    multipart::read_form,
    otp::generate_otp,
    password::{hash_password, verify_password},
    protocol::SimpleResponse,
    upload::MediaClient,
    DbPool,
};

use self::{requests::*, responses::*};

const FILE_FIELD: &str = "adminProfile";

pub(crate) const UPDATE_OK: &str = "Profile updated successfully";

pub fn config(cfg: &mut web::ServiceConfig) {
    cfg.service(register)
        .service(login)
        .service(data)
        .service(update)
        .service(send_otp)
        .service(check_otp)
        .service(change_password);
}

crate::json_routes! {
    (post, login, "/login", LoginRequest),
    (post, check_otp, "/check-otp", CheckOtpRequest),
    (put, change_password, "/change-password", ChangePasswordRequest),
}

async fn find_admin_by_id(pool: &web::Data<DbPool>, id: u64) -> Result<AdminData, ApiError> {
    use crate::schema::admins;

    let conn = get_db_conn(pool)?;
    let admin = web::block(move || {
        admins::table
            .filter(admins::id.eq(id))
            .first::<AdminData>(&conn)
            .optional()
    })
    .await
    .context("database error")?;

    admin.ok_or_else(|| ApiError::NotFound("Admin not found".to_string()))
}

async fn find_admin_by_email(
    pool: &web::Data<DbPool>,
    email: String,
) -> Result<AdminData, ApiError> {
    use crate::schema::admins;

    let conn = get_db_conn(pool)?;
    let admin = web::block(move || {
        admins::table
            .filter(admins::email.eq(email))
            .first::<AdminData>(&conn)
            .optional()
    })
    .await
    .context("database error")?;

    admin.ok_or_else(|| ApiError::NotFound("Admin not found".to_string()))
}

fn check_otp_matches(stored: Option<i32>, submitted: Option<i32>) -> Result<(), ApiError> {
    match (stored, submitted) {
        (Some(stored), Some(submitted)) if stored == submitted => Ok(()),
        _ => Err(ApiError::BadRequest("Invalid OTP".to_string())),
    }
}

#[post("/register")]
async fn register(
    pool: web::Data<DbPool>,
    media: web::Data<MediaClient>,
    payload: Multipart,
) -> Result<HttpResponse, ApiError> {
    use crate::schema::admins;

    let mut form = read_form(payload, FILE_FIELD).await?;
    let name = form.text("name")?;
    let email = form.text("email")?;
    let password = form.text("password")?;
    let file = form.require_file()?;

    let conn = get_db_conn(&pool)?;
    let email_check = email.clone();
    let existing = web::block(move || {
        admins::table
            .filter(admins::email.eq(email_check))
            .count()
            .get_result::<i64>(&conn)
    })
    .await
    .context("database error")?;
    if existing > 0 {
        return Err(ApiError::BadRequest("Admin already exists".to_string()));
    }

    let profile_image = media.upload_image(file).await?;
    let record = NewAdmin {
        name,
        email,
        password: hash_password(&password),
        profile_image,
    };

    let conn = get_db_conn(&pool)?;
    let id = web::block(move || {
        conn.transaction(|| {
            diesel::insert_into(admins::table)
                .values(record)
                .execute(&conn)
                .context("database error")?;
            diesel::select(last_insert_id)
                .get_result::<u64>(&conn)
                .context("database error")
        })
    })
    .await?;

    let token = issue_token(id)?;
    Ok(HttpResponse::Created().json(TokenResponse {
        success: true,
        message: "Registration successful".to_string(),
        token,
    }))
}

async fn login_impl(
    pool: web::Data<DbPool>,
    info: LoginRequest,
) -> Result<HttpResponse, ApiError> {
    if info.email.trim().is_empty() || info.password.is_empty() {
        return Err(ApiError::BadRequest("All fields are required".to_string()));
    }

    let admin = find_admin_by_email(&pool, info.email).await?;
    if !verify_password(&info.password, &admin.password) {
        return Err(ApiError::Unauthorized("Invalid credentials".to_string()));
    }

    let token = issue_token(admin.id)?;
    Ok(HttpResponse::Ok().json(TokenResponse {
        success: true,
        message: "Login successful".to_string(),
        token,
    }))
}

#[get("/data")]
async fn data(pool: web::Data<DbPool>, auth: AuthId) -> Result<HttpResponse, ApiError> {
    let admin = find_admin_by_id(&pool, auth.0).await?;
    Ok(HttpResponse::Ok().json(AdminDataResponse {
        success: true,
        message: "Profile fetched successfully".to_string(),
        admin: admin.into(),
    }))
}

#[put("/update")]
async fn update(
    pool: web::Data<DbPool>,
    media: web::Data<MediaClient>,
    auth: AuthId,
    payload: Multipart,
) -> Result<HttpResponse, ApiError> {
    use crate::schema::admins;

    let mut form = read_form(payload, FILE_FIELD).await?;
    find_admin_by_id(&pool, auth.0).await?;

    let mut changes = UpdateAdmin {
        name: form.text_opt("name"),
        email: form.text_opt("email"),
        password: form.text_opt("password").map(|p| hash_password(&p)),
        ..Default::default()
    };
    if let Some(file) = form.take_file() {
        changes.profile_image = Some(media.upload_image(file).await?);
    }

    if !changes.is_empty() {
        let conn = get_db_conn(&pool)?;
        let id = auth.0;
        web::block(move || {
            diesel::update(admins::table.filter(admins::id.eq(id)))
                .set(&changes)
                .execute(&conn)
        })
        .await
        .context("database error")?;
    }

    Ok(HttpResponse::Ok().json(SimpleResponse::ok(UPDATE_OK)))
}

#[post("/send-otp")]
async fn send_otp(
    pool: web::Data<DbPool>,
    mailer: web::Data<Mailer>,
    info: web::Json<SendOtpRequest>,
) -> Result<HttpResponse, ApiError> {
    use crate::schema::admins;

    let info = info.into_inner();
    if info.email.trim().is_empty() {
        return Err(ApiError::BadRequest("Email is required".to_string()));
    }

    let admin = find_admin_by_email(&pool, info.email).await?;
    let code = generate_otp();

    let conn = get_db_conn(&pool)?;
    let id = admin.id;
    web::block(move || {
        diesel::update(admins::table.filter(admins::id.eq(id)))
            .set(admins::otp.eq(Some(code)))
            .execute(&conn)
    })
    .await
    .context("database error")?;

    mailer.send_otp_email(&admin.email, &admin.name, code).await?;

    Ok(HttpResponse::Ok().json(SimpleResponse::ok("OTP sent successfully")))
}

async fn check_otp_impl(
    pool: web::Data<DbPool>,
    info: CheckOtpRequest,
) -> Result<HttpResponse, ApiError> {
    if info.email.trim().is_empty() {
        return Err(ApiError::BadRequest("All fields are required".to_string()));
    }

    let admin = find_admin_by_email(&pool, info.email).await?;
    check_otp_matches(admin.otp, info.otp.as_i32())?;

    Ok(HttpResponse::Ok().json(SimpleResponse::ok("OTP is valid")))
}

async fn change_password_impl(
    pool: web::Data<DbPool>,
    info: ChangePasswordRequest,
) -> Result<HttpResponse, ApiError> {
    use crate::schema::admins;

    if info.email.trim().is_empty() || info.new_password.is_empty() {
        return Err(ApiError::BadRequest("All fields are required".to_string()));
    }

    let admin = find_admin_by_email(&pool, info.email).await?;
    check_otp_matches(admin.otp, info.otp.as_i32())?;

    let hashed = hash_password(&info.new_password);
    let conn = get_db_conn(&pool)?;
    let id = admin.id;
    web::block(move || {
        diesel::update(admins::table.filter(admins::id.eq(id)))
            .set((admins::password.eq(hashed), admins::otp.eq(None::<i32>)))
            .execute(&conn)
    })
    .await
    .context("database error")?;

    Ok(HttpResponse::Ok().json(SimpleResponse::ok("Password changed successfully")))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn otp_comparison_requires_exact_match() {
        assert!(check_otp_matches(Some(4321), Some(4321)).is_ok());
        assert!(check_otp_matches(Some(4321), Some(1234)).is_err());
        assert!(check_otp_matches(Some(4321), None).is_err());
    }

    #[test]
    fn cleared_otp_never_matches() {
        // after a successful password change the stored code is null, so a
        // replay of the old code must fail
        let err = check_otp_matches(None, Some(4321)).unwrap_err();
        assert_eq!(err.to_string(), "Invalid OTP");
    }
}
