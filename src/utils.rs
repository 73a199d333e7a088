#[macro_export]
macro_rules! json_routes {
    ( $( ( $method:ident, $func_name:ident, $url:expr, $request:ty ) ),+ $(,)? ) => {
        $(
            paste::paste! {
                #[$method($url)]
                async fn $func_name(
                    pool: web::Data<DbPool>,
                    info: web::Json<$request>,
                ) -> Result<HttpResponse, ApiError> {
                    [<$func_name _impl>](pool, info.into_inner()).await
                }
            }
        )+
    };
}

use chrono::{DateTime, NaiveDateTime};
use serde::Deserialize;

use crate::{error::ApiError, models::events};

/// OTP codes arrive from the SPAs both as JSON numbers and as strings;
/// comparison always happens on the numeric value.
#[derive(Deserialize)]
#[serde(untagged)]
pub enum OtpValue {
    Number(i32),
    Text(String),
}

impl OtpValue {
    pub fn as_i32(&self) -> Option<i32> {
        match self {
            OtpValue::Number(n) => Some(*n),
            OtpValue::Text(s) => s.trim().parse().ok(),
        }
    }
}

pub fn assert_status_str(status: &str) -> Result<(), ApiError> {
    match status {
        events::STATUS_PLANNED
        | events::STATUS_ONGOING
        | events::STATUS_COMPLETED
        | events::STATUS_CANCELLED => Ok(()),
        _ => Err(ApiError::BadRequest("Invalid event status".to_string())),
    }
}

pub fn parse_time_str<S: AsRef<str>>(s: S) -> Result<NaiveDateTime, ApiError> {
    const TIME_FMT: &str = "%Y-%m-%dT%H:%M:%S%.f%:z";
    const TIME_FMT_SPECIAL: &str = "%Y-%m-%dT%H:%M:%S%.fZ";

    let s = s.as_ref();
    let parsed = if let Some('Z') = s.chars().last() {
        NaiveDateTime::parse_from_str(s, TIME_FMT_SPECIAL)
    } else {
        DateTime::parse_from_str(s, TIME_FMT).map(|t| t.naive_utc())
    };
    parsed.map_err(|_| ApiError::BadRequest("Invalid time format".to_string()))
}

pub fn format_time_str(time: &NaiveDateTime) -> String {
    const TIME_FMT: &str = "%Y-%m-%dT%H:%M:%S%.f";

    format!("{}+00:00", time.format(TIME_FMT))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn otp_value_coerces_numbers_and_strings() {
        let n: OtpValue = serde_json::from_str("4321").unwrap();
        let s: OtpValue = serde_json::from_str("\"4321\"").unwrap();
        assert_eq!(n.as_i32(), Some(4321));
        assert_eq!(s.as_i32(), Some(4321));
        let bad: OtpValue = serde_json::from_str("\"abcd\"").unwrap();
        assert_eq!(bad.as_i32(), None);
    }

    #[test]
    fn accepts_every_event_status() {
        for status in &["planned", "ongoing", "completed", "cancelled"] {
            assert!(assert_status_str(status).is_ok());
        }
    }

    #[test]
    fn rejects_unknown_event_status() {
        let err = assert_status_str("postponed").unwrap_err();
        assert!(matches!(err, ApiError::BadRequest(_)));
    }

    #[test]
    fn parses_utc_suffix_and_offset_forms() {
        let a = parse_time_str("2024-06-01T09:00:00.0000Z").unwrap();
        let b = parse_time_str("2024-06-01T09:00:00.0000+00:00").unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn rejects_malformed_time() {
        assert!(parse_time_str("next tuesday").is_err());
    }

    #[test]
    fn formats_round_trip() {
        let t = parse_time_str("2024-06-01T09:30:00.0000Z").unwrap();
        let s = format_time_str(&t);
        assert_eq!(parse_time_str(&s).unwrap(), t);
    }
}
