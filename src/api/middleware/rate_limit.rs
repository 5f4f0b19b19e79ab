use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use std::{num::NonZeroU32, time::Duration};
use tower::limit::RateLimitLayer;

use crate::config::RateLimitSettings;

/// Rate limiting configuration for API endpoints
#[derive(Debug, Clone)]
pub struct RateLimitConfig {
    pub requests: NonZeroU32,
    pub per_seconds: u64,
}

impl RateLimitConfig {
    /// Creates a new rate limiter layer based on configuration
    pub fn layer(&self) -> RateLimitLayer {
        let window = Duration::from_secs(self.per_seconds);
        RateLimitLayer::new(u64::from(self.requests.get()), window)
    }
}

impl From<&RateLimitSettings> for RateLimitConfig {
    fn from(settings: &RateLimitSettings) -> Self {
        Self {
            requests: NonZeroU32::new(settings.upload_requests_per_minute)
                .unwrap_or(NonZeroU32::MIN),
            per_seconds: 60,
        }
    }
}

/// Custom rate limit exceeded response
#[derive(Debug)]
pub struct RateLimitExceeded;

impl IntoResponse for RateLimitExceeded {
    fn into_response(self) -> Response {
        (
            StatusCode::TOO_MANY_REQUESTS,
            "Rate limit exceeded. Please try again later.",
        )
            .into_response()
    }
}
