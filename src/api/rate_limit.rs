//! Coarse global request ceiling: one fixed window shared by all clients.
//! Not per-client fairness, just a throughput bound; everything over the
//! ceiling gets a uniform 429 until the window rolls over.

use std::sync::Mutex;
use std::time::{Duration, Instant};

use axum::{extract::State, middleware::Next, response::Response};

use crate::api::error::ApiError;
use crate::api::server::AppState;

#[derive(Debug)]
pub struct RateLimiter {
    max_requests: u32,
    window: Duration,
    state: Mutex<Window>,
}

#[derive(Debug)]
struct Window {
    started: Instant,
    count: u32,
}

impl RateLimiter {
    pub fn new(max_requests: u32, window: Duration) -> Self {
        Self {
            max_requests,
            window,
            state: Mutex::new(Window {
                started: Instant::now(),
                count: 0,
            }),
        }
    }

    pub fn try_acquire(&self) -> bool {
        self.try_acquire_at(Instant::now())
    }

    fn try_acquire_at(&self, now: Instant) -> bool {
        // A poisoned lock only means another thread panicked mid-update;
        // the window state is still usable, so keep serving
        let mut window = self.state.lock().unwrap_or_else(|e| e.into_inner());

        if now.duration_since(window.started) >= self.window {
            window.started = now;
            window.count = 0;
        }

        if window.count < self.max_requests {
            window.count += 1;
            true
        } else {
            false
        }
    }
}

pub async fn rate_limit_middleware(
    State(state): State<AppState>,
    request: axum::extract::Request,
    next: Next,
) -> Result<Response, ApiError> {
    if !state.rate_limiter.try_acquire() {
        return Err(ApiError::RateLimited);
    }
    Ok(next.run(request).await)
}
