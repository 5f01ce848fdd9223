use std::{
    sync::Arc,
    time::{Duration, Instant},
};

use axum::{
    extract::{Request, State},
    http::{
        header::{AUTHORIZATION, RETRY_AFTER},
        HeaderMap, HeaderValue, StatusCode,
    },
    middleware::Next,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use subtle::ConstantTimeEq;
use tokio::sync::Mutex;
use uuid::Uuid;

const API_KEYS_VAR: &str = "CRMCAL_API_KEYS";
const REQUEST_ID_HEADER: &str = "x-request-id";
const MAX_REQUEST_ID_LEN: usize = 128;

/// Request ID carried as a request extension and echoed in `x-request-id`.
#[derive(Debug, Clone)]
pub struct RequestId(pub String);

/// Bearer-token settings for the protected calendar routes.
#[derive(Debug, Clone)]
pub struct AuthState {
    api_keys: Arc<Vec<String>>,
    pub enabled: bool,
}

impl AuthState {
    /// Reads `CRMCAL_API_KEYS` (comma-separated bearer tokens).
    ///
    /// Outside development an empty key list fails startup.
    pub fn from_env(is_development: bool) -> anyhow::Result<Self> {
        let raw = std::env::var(API_KEYS_VAR).unwrap_or_default();
        Self::from_keys(&raw, is_development)
    }

    pub fn from_keys(raw: &str, is_development: bool) -> anyhow::Result<Self> {
        let mut keys: Vec<String> = raw
            .split(',')
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(ToOwned::to_owned)
            .collect();
        keys.sort_unstable();
        keys.dedup();

        if keys.is_empty() {
            if is_development {
                tracing::warn!("{API_KEYS_VAR} not set; bearer auth disabled in development");
                return Ok(Self::disabled());
            }
            anyhow::bail!("{API_KEYS_VAR} is required outside development");
        }

        Ok(Self {
            api_keys: Arc::new(keys),
            enabled: true,
        })
    }

    #[must_use]
    pub fn disabled() -> Self {
        Self {
            api_keys: Arc::new(Vec::new()),
            enabled: false,
        }
    }

    fn allows(&self, token: &str) -> bool {
        let presented = token.as_bytes();
        self.api_keys.iter().fold(false, |found, key| {
            found | bool::from(key.as_bytes().ct_eq(presented))
        })
    }
}

/// Requests admitted in the current fixed window.
#[derive(Debug)]
struct CalendarQuota {
    opened_at: Instant,
    admitted: usize,
}

impl CalendarQuota {
    /// Admit one request at `now`, or return the wait until the window reopens.
    fn admit(&mut self, now: Instant, limit: usize, window: Duration) -> Result<(), Duration> {
        if now.saturating_duration_since(self.opened_at) >= window {
            self.opened_at = now;
            self.admitted = 0;
        }
        if self.admitted >= limit {
            let elapsed = now.saturating_duration_since(self.opened_at);
            return Err(window.saturating_sub(elapsed));
        }
        self.admitted += 1;
        Ok(())
    }
}

/// Quota shared by every protected calendar route.
#[derive(Debug, Clone)]
pub struct RateLimitState {
    limit: usize,
    window: Duration,
    quota: Arc<Mutex<CalendarQuota>>,
}

impl RateLimitState {
    #[must_use]
    pub fn new(limit: usize, window: Duration) -> Self {
        Self {
            limit,
            window,
            quota: Arc::new(Mutex::new(CalendarQuota {
                opened_at: Instant::now(),
                admitted: 0,
            })),
        }
    }
}

#[derive(Debug, Serialize)]
struct MiddlewareErrorBody {
    success: bool,
    error: MiddlewareError,
}

#[derive(Debug, Serialize)]
struct MiddlewareError {
    code: &'static str,
    message: &'static str,
}

fn reject(status: StatusCode, code: &'static str, message: &'static str) -> Response {
    let body = MiddlewareErrorBody {
        success: false,
        error: MiddlewareError { code, message },
    };
    (status, Json(body)).into_response()
}

/// Caller-supplied id, if it is printable and of reasonable length.
fn incoming_request_id(headers: &HeaderMap) -> Option<String> {
    headers
        .get(REQUEST_ID_HEADER)
        .and_then(|v| v.to_str().ok())
        .map(str::trim)
        .filter(|id| !id.is_empty() && id.len() <= MAX_REQUEST_ID_LEN)
        .map(ToOwned::to_owned)
}

/// Tags the request with an id (the caller's or a fresh `UUIDv4`) and echoes
/// it on the response.
pub async fn request_id(mut req: Request, next: Next) -> Response {
    let id = incoming_request_id(req.headers()).unwrap_or_else(|| Uuid::new_v4().to_string());
    let echoed = HeaderValue::from_str(&id).ok();
    req.extensions_mut().insert(RequestId(id));

    let mut res = next.run(req).await;
    if let Some(value) = echoed {
        res.headers_mut().insert(REQUEST_ID_HEADER, value);
    }
    res
}

pub async fn require_bearer_auth(
    State(auth): State<AuthState>,
    req: Request,
    next: Next,
) -> Response {
    if !auth.enabled {
        return next.run(req).await;
    }

    match extract_bearer_token(req.headers().get(AUTHORIZATION)) {
        Some(token) if auth.allows(token) => next.run(req).await,
        _ => {
            tracing::debug!(
                path = %req.uri().path(),
                "rejected calendar request without valid token"
            );
            reject(
                StatusCode::UNAUTHORIZED,
                "unauthorized",
                "missing or invalid bearer token",
            )
        }
    }
}

/// Rejects with `429` and a `Retry-After` hint once the window's quota is spent.
pub async fn enforce_rate_limit(
    State(rate_limit): State<RateLimitState>,
    req: Request,
    next: Next,
) -> Response {
    let admitted = rate_limit
        .quota
        .lock()
        .await
        .admit(Instant::now(), rate_limit.limit, rate_limit.window);

    match admitted {
        Ok(()) => next.run(req).await,
        Err(retry_after) => {
            let retry_secs = retry_after.as_secs().max(1);
            tracing::warn!(
                limit = rate_limit.limit,
                retry_secs,
                path = %req.uri().path(),
                "calendar API quota exhausted"
            );
            let mut res = reject(
                StatusCode::TOO_MANY_REQUESTS,
                "rate_limited",
                "too many calendar requests; retry later",
            );
            res.headers_mut().insert(RETRY_AFTER, HeaderValue::from(retry_secs));
            res
        }
    }
}

fn extract_bearer_token(value: Option<&HeaderValue>) -> Option<&str> {
    value
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.strip_prefix("Bearer "))
        .map(str::trim)
        .filter(|s| !s.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn extract_bearer_token_accepts_valid_header() {
        let header = HeaderValue::from_static("Bearer test-token");
        assert_eq!(extract_bearer_token(Some(&header)), Some("test-token"));
    }

    #[test]
    fn extract_bearer_token_rejects_non_bearer_header() {
        let header = HeaderValue::from_static("Basic abc123");
        assert_eq!(extract_bearer_token(Some(&header)), None);
        assert_eq!(extract_bearer_token(None), None);
    }

    #[test]
    fn empty_keys_disable_auth_in_development() {
        let state = AuthState::from_keys(" , ", true).expect("dev allows missing keys");
        assert!(!state.enabled);
    }

    #[test]
    fn empty_keys_fail_outside_development() {
        let err = AuthState::from_keys("", false).unwrap_err();
        assert!(err.to_string().contains(API_KEYS_VAR));
    }

    #[test]
    fn allows_only_configured_keys() {
        let state = AuthState::from_keys("alpha, beta", false).expect("keys");
        assert!(state.enabled);
        assert!(state.allows("alpha"));
        assert!(state.allows("beta"));
        assert!(!state.allows("alph"));
        assert!(!state.allows("gamma"));
    }

    #[test]
    fn quota_admits_up_to_limit_then_reports_wait() {
        let opened = Instant::now();
        let window = Duration::from_secs(60);
        let mut quota = CalendarQuota {
            opened_at: opened,
            admitted: 0,
        };

        assert!(quota.admit(opened, 2, window).is_ok());
        assert!(quota.admit(opened + Duration::from_secs(1), 2, window).is_ok());
        let wait = quota.admit(opened + Duration::from_secs(20), 2, window).unwrap_err();
        assert_eq!(wait, Duration::from_secs(40));
    }

    #[test]
    fn quota_reopens_after_window() {
        let opened = Instant::now();
        let window = Duration::from_secs(10);
        let mut quota = CalendarQuota {
            opened_at: opened,
            admitted: 1,
        };

        assert!(quota.admit(opened, 1, window).is_err());
        assert!(quota.admit(opened + window, 1, window).is_ok());
        assert_eq!(quota.admitted, 1);
    }

    #[test]
    fn incoming_request_id_rejects_blank_and_oversized_values() {
        let mut headers = HeaderMap::new();
        assert_eq!(incoming_request_id(&headers), None);

        headers.insert(REQUEST_ID_HEADER, HeaderValue::from_static("  "));
        assert_eq!(incoming_request_id(&headers), None);

        let long = "r".repeat(MAX_REQUEST_ID_LEN + 1);
        headers.insert(REQUEST_ID_HEADER, HeaderValue::from_str(&long).unwrap());
        assert_eq!(incoming_request_id(&headers), None);

        headers.insert(REQUEST_ID_HEADER, HeaderValue::from_static(" cal-42 "));
        assert_eq!(incoming_request_id(&headers).as_deref(), Some("cal-42"));
    }
}
