use actix_web::{
    error::{BlockingError, JsonPayloadError, PathError},
    http::StatusCode,
    HttpRequest, HttpResponse, ResponseError,
};
use thiserror::Error;

use crate::protocol::SimpleResponse;

/// Error taxonomy surfaced at the HTTP boundary. Every variant renders the
/// uniform `{success, message}` envelope with its status code; `Internal`
/// logs the full cause chain server-side and shows only its top-level
/// message to the client.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("{0}")]
    BadRequest(String),
    #[error("{0}")]
    Unauthorized(String),
    #[error("{0}")]
    NotFound(String),
    #[error("Too many requests. Please try again later.")]
    TooManyRequests,
    #[error("{0}")]
    Internal(#[from] anyhow::Error),
}

impl ResponseError for ApiError {
    fn status_code(&self) -> StatusCode {
        match self {
            ApiError::BadRequest(_) => StatusCode::BAD_REQUEST,
            ApiError::Unauthorized(_) => StatusCode::UNAUTHORIZED,
            ApiError::NotFound(_) => StatusCode::NOT_FOUND,
            ApiError::TooManyRequests => StatusCode::TOO_MANY_REQUESTS,
            ApiError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        if let ApiError::Internal(err) = self {
            log::error!("internal error: {:#}", err);
        }
        HttpResponse::build(self.status_code()).json(SimpleResponse::err(self))
    }
}

// Extractor failures (malformed JSON body, non-numeric path id) render the
// same envelope as handler errors. Mounted via JsonConfig/PathConfig.
pub fn json_error_handler(err: JsonPayloadError, _req: &HttpRequest) -> actix_web::Error {
    ApiError::BadRequest(format!("invalid request body: {}", err)).into()
}

pub fn path_error_handler(err: PathError, _req: &HttpRequest) -> actix_web::Error {
    ApiError::BadRequest(format!("invalid path parameter: {}", err)).into()
}

// Needed so diesel transactions can run with `ApiError` as their error type.
impl From<diesel::result::Error> for ApiError {
    fn from(err: diesel::result::Error) -> Self {
        ApiError::Internal(anyhow::Error::new(err).context("database error"))
    }
}

// Lets `web::block(..).await?` propagate into the typed error regardless
// of what the closure returned.
impl From<BlockingError<ApiError>> for ApiError {
    fn from(err: BlockingError<ApiError>) -> Self {
        match err {
            BlockingError::Error(e) => e,
            BlockingError::Canceled => {
                ApiError::Internal(anyhow::anyhow!("blocking task canceled"))
            }
        }
    }
}

impl From<BlockingError<anyhow::Error>> for ApiError {
    fn from(err: BlockingError<anyhow::Error>) -> Self {
        match err {
            BlockingError::Error(e) => ApiError::Internal(e),
            BlockingError::Canceled => {
                ApiError::Internal(anyhow::anyhow!("blocking task canceled"))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_codes_follow_taxonomy() {
        assert_eq!(
            ApiError::BadRequest("x".into()).status_code(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            ApiError::Unauthorized("x".into()).status_code(),
            StatusCode::UNAUTHORIZED
        );
        assert_eq!(
            ApiError::NotFound("x".into()).status_code(),
            StatusCode::NOT_FOUND
        );
        assert_eq!(
            ApiError::TooManyRequests.status_code(),
            StatusCode::TOO_MANY_REQUESTS
        );
        assert_eq!(
            ApiError::Internal(anyhow::anyhow!("db down")).status_code(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn internal_shows_only_top_level_context() {
        let err: anyhow::Error = anyhow::anyhow!("connection refused");
        let err = err.context("database error");
        let api = ApiError::Internal(err);
        assert_eq!(api.to_string(), "database error");
    }

    #[actix_rt::test]
    async fn non_numeric_path_id_renders_envelope() {
        use actix_web::{test, web, App};

        let mut app = test::init_service(
            App::new()
                .app_data(web::PathConfig::default().error_handler(path_error_handler))
                .route(
                    "/{id}",
                    web::get().to(|id: web::Path<u64>| async move {
                        HttpResponse::Ok().body(id.to_string())
                    }),
                ),
        )
        .await;

        let resp = test::call_service(
            &mut app,
            test::TestRequest::with_uri("/not-a-number").to_request(),
        )
        .await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

        let body = test::read_body(resp).await;
        let json: serde_json::Value = serde_json::from_slice(&body).unwrap();
        assert_eq!(json["success"], false);
        assert!(json["message"].as_str().unwrap().contains("invalid path parameter"));
    }
}
