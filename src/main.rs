#[macro_use]
extern crate diesel;

mod admin;
mod advisor;
mod auth;
mod blog;
mod database;
mod error;
mod event;
mod ex_team;
mod home_page;
mod mailer;
mod models;
mod multipart;
mod otp;
mod password;
mod protocol;
mod rate_limit;
mod review;
mod schema;
mod team;
mod upload;
mod user;
mod utils;

use actix_web::{get, middleware::Logger, web, App, HttpServer, Responder};
use diesel::{r2d2::ConnectionManager, MysqlConnection};

use crate::{
    error::{json_error_handler, path_error_handler},
    mailer::Mailer,
    rate_limit::RateLimit,
    upload::MediaClient,
};

type DbPool = r2d2::Pool<ConnectionManager<MysqlConnection>>;

#[get("/")]
async fn index() -> impl Responder {
    "api is running!"
}

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    dotenv::dotenv().ok();
    env_logger::init();

    let conn_url = std::env::var("DATABASE_URL").expect("DATABASE_URL not found");
    let manager = ConnectionManager::<MysqlConnection>::new(conn_url);
    let pool = r2d2::Pool::builder()
        .build(manager)
        .expect("Failed to create pool");

    let media = MediaClient::from_env().expect("media host config missing");
    let mailer = Mailer::from_env().expect("mail provider config missing");

    let rate_limit = std::env::var("RATE_LIMIT_PER_MINUTE")
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(100);
    let limiter = RateLimit::new(rate_limit, 60);

    let port = std::env::var("PORT").unwrap_or_else(|_| "8080".to_string());
    let bind = format!("0.0.0.0:{}", port);

    log::info!("listening on {}", bind);

    HttpServer::new(move || {
        App::new()
            .data(pool.clone())
            .data(media.clone())
            .data(mailer.clone())
            .app_data(web::JsonConfig::default().error_handler(json_error_handler))
            .app_data(web::PathConfig::default().error_handler(path_error_handler))
            .wrap(limiter.clone())
            .wrap(Logger::default())
            .service(index)
            .service(web::scope("/admin").configure(admin::config))
            .service(web::scope("/user").configure(user::config))
            .service(web::scope("/advisor").configure(advisor::config))
            .service(web::scope("/team").configure(team::config))
            .service(web::scope("/ex-team").configure(ex_team::config))
            .service(web::scope("/event").configure(event::config))
            .service(web::scope("/blog").configure(blog::config))
            .service(web::scope("/review").configure(review::config))
            .service(web::scope("/home-page").configure(home_page::config))
    })
    .bind(bind)?
    .run()
    .await
}
