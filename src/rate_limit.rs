use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use std::task::{Context, Poll};

use actix_web::dev::{Service, ServiceRequest, ServiceResponse, Transform};
use actix_web::Error;
use chrono::Utc;
use futures::future::{err, ok, Either, Ready};

use crate::error::ApiError;

/// Fixed-window hit counter keyed by client address. Requests beyond the
/// limit inside one window are rejected; entries whose window has elapsed
/// are evicted on the next check, so the map only holds addresses seen
/// within the current window.
pub struct FixedWindow {
    limit: u32,
    window_secs: i64,
    hits: Mutex<HashMap<String, (i64, u32)>>,
}

impl FixedWindow {
    pub fn new(limit: u32, window_secs: i64) -> Self {
        Self {
            limit,
            window_secs,
            hits: Mutex::new(HashMap::new()),
        }
    }

    pub fn check(&self, key: &str, now: i64) -> bool {
        let mut hits = match self.hits.lock() {
            Ok(guard) => guard,
            Err(poisoned) => poisoned.into_inner(),
        };
        let window_secs = self.window_secs;
        hits.retain(|_, (start, _)| now - *start < window_secs);
        let entry = hits.entry(key.to_string()).or_insert((now, 0));
        if entry.1 >= self.limit {
            false
        } else {
            entry.1 += 1;
            true
        }
    }

    #[cfg(test)]
    fn tracked(&self) -> usize {
        self.hits.lock().unwrap().len()
    }
}

/// Per-IP limiter wrapped around the whole app. Clones share one window,
/// so every server worker counts against the same budget.
#[derive(Clone)]
pub struct RateLimit {
    window: Arc<FixedWindow>,
}

impl RateLimit {
    pub fn new(limit: u32, window_secs: i64) -> Self {
        Self {
            window: Arc::new(FixedWindow::new(limit, window_secs)),
        }
    }
}

impl<S, B> Transform<S> for RateLimit
where
    S: Service<Request = ServiceRequest, Response = ServiceResponse<B>, Error = Error>,
{
    type Request = ServiceRequest;
    type Response = ServiceResponse<B>;
    type Error = Error;
    type InitError = ();
    type Transform = RateLimitMiddleware<S>;
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ok(RateLimitMiddleware {
            service,
            window: self.window.clone(),
        })
    }
}

pub struct RateLimitMiddleware<S> {
    service: S,
    window: Arc<FixedWindow>,
}

impl<S, B> Service for RateLimitMiddleware<S>
where
    S: Service<Request = ServiceRequest, Response = ServiceResponse<B>, Error = Error>,
{
    type Request = ServiceRequest;
    type Response = ServiceResponse<B>;
    type Error = Error;
    type Future = Either<S::Future, Ready<Result<Self::Response, Self::Error>>>;

    fn poll_ready(&mut self, cx: &mut Context<'_>) -> Poll<Result<(), Self::Error>> {
        self.service.poll_ready(cx)
    }

    fn call(&mut self, req: ServiceRequest) -> Self::Future {
        let key = req
            .peer_addr()
            .map(|addr| addr.ip().to_string())
            .unwrap_or_else(|| "unknown".to_string());

        if self.window.check(&key, Utc::now().timestamp()) {
            Either::Left(self.service.call(req))
        } else {
            Either::Right(err(ApiError::TooManyRequests.into()))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn admits_up_to_limit_then_rejects() {
        let window = FixedWindow::new(3, 60);
        assert!(window.check("10.0.0.1", 0));
        assert!(window.check("10.0.0.1", 1));
        assert!(window.check("10.0.0.1", 2));
        assert!(!window.check("10.0.0.1", 3));
        assert!(!window.check("10.0.0.1", 59));
    }

    #[test]
    fn counter_resets_when_window_rolls() {
        let window = FixedWindow::new(1, 60);
        assert!(window.check("10.0.0.1", 0));
        assert!(!window.check("10.0.0.1", 30));
        assert!(window.check("10.0.0.1", 60));
    }

    #[test]
    fn stale_addresses_are_evicted() {
        let window = FixedWindow::new(1, 60);
        assert!(window.check("10.0.0.1", 0));
        assert!(window.check("10.0.0.2", 0));
        assert_eq!(window.tracked(), 2);
        assert!(window.check("10.0.0.3", 120));
        assert_eq!(window.tracked(), 1);
    }

    #[test]
    fn addresses_are_counted_independently() {
        let window = FixedWindow::new(1, 60);
        assert!(window.check("10.0.0.1", 0));
        assert!(window.check("10.0.0.2", 0));
        assert!(!window.check("10.0.0.1", 1));
    }
}
