//! HTTP client for the calendar events endpoint.
//!
//! Wraps `reqwest` with base-URL handling, bearer token injection and the
//! `{ success, data }` envelope check.

use std::time::Duration;

use crmcal_core::{CalendarEvent, DateRange};
use reqwest::{Client, Url};

use crate::error::ClientError;
use crate::types::EventsEnvelope;

const EVENTS_PATH: &str = "api/v1/calendar/events";
const USER_AGENT: &str = "crmcal/0.1 (calendar-client)";

/// Client for the calendar events API.
pub struct CalendarClient {
    client: Client,
    base_url: Url,
    token: Option<String>,
}

impl CalendarClient {
    /// Creates a client for the API rooted at `base_url`.
    ///
    /// When `token` is set every request carries `Authorization: Bearer <token>`.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::Http`] if the underlying `reqwest::Client`
    /// cannot be constructed, or [`ClientError::InvalidBaseUrl`] if
    /// `base_url` does not parse.
    pub fn new(
        base_url: &str,
        token: Option<&str>,
        timeout_secs: u64,
    ) -> Result<Self, ClientError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .connect_timeout(Duration::from_secs(10))
            .user_agent(USER_AGENT)
            .build()?;

        // Exactly one trailing slash so `join` appends instead of replacing
        // the last path segment.
        let normalised = format!("{}/", base_url.trim_end_matches('/'));
        let parsed = Url::parse(&normalised).map_err(|e| ClientError::InvalidBaseUrl {
            base_url: base_url.to_owned(),
            reason: e.to_string(),
        })?;

        Ok(Self {
            client,
            base_url: parsed,
            token: token
                .map(str::trim)
                .filter(|t| !t.is_empty())
                .map(ToOwned::to_owned),
        })
    }

    /// URL for the events of `range`.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::InvalidBaseUrl`] if the path cannot be joined.
    pub fn events_url(&self, range: DateRange) -> Result<Url, ClientError> {
        let mut url = self
            .base_url
            .join(EVENTS_PATH)
            .map_err(|e| ClientError::InvalidBaseUrl {
                base_url: self.base_url.to_string(),
                reason: e.to_string(),
            })?;
        url.query_pairs_mut()
            .append_pair("start", &range.start.format("%Y-%m-%d").to_string())
            .append_pair("end", &range.end.format("%Y-%m-%d").to_string());
        Ok(url)
    }

    /// Fetches all events whose day falls within `range`.
    ///
    /// # Errors
    ///
    /// - [`ClientError::Api`] if the envelope reports `success: false`.
    /// - [`ClientError::UnexpectedStatus`] for a non-2xx response without an
    ///   error envelope.
    /// - [`ClientError::Http`] on network failure.
    /// - [`ClientError::Deserialize`] if the body does not match the envelope.
    pub async fn fetch_events(&self, range: DateRange) -> Result<Vec<CalendarEvent>, ClientError> {
        let url = self.events_url(range)?;

        let mut request = self
            .client
            .get(url.clone())
            .header(reqwest::header::ACCEPT, "application/json");
        if let Some(token) = &self.token {
            request = request.bearer_auth(token);
        }

        let response = request.send().await?;
        let status = response.status();
        let body = response.text().await?;

        let parsed = serde_json::from_str::<EventsEnvelope>(&body);
        match parsed {
            Ok(envelope) if !envelope.success => {
                let message = envelope
                    .error
                    .map_or_else(|| "request failed".to_string(), |e| {
                        format!("{}: {}", e.code, e.message)
                    });
                Err(ClientError::Api(message))
            }
            _ if !status.is_success() => Err(ClientError::UnexpectedStatus {
                status: status.as_u16(),
                url: url.to_string(),
            }),
            Ok(envelope) => Ok(envelope.data.unwrap_or_default()),
            Err(e) => Err(ClientError::Deserialize {
                context: format!("events({} to {})", range.start, range.end),
                source: e,
            }),
        }
    }

    /// Like [`fetch_events`](Self::fetch_events), but any failure yields an
    /// empty event set. The calendar renders "no data" and "fetch error"
    /// identically.
    pub async fn fetch_events_or_empty(&self, range: DateRange) -> Vec<CalendarEvent> {
        match self.fetch_events(range).await {
            Ok(events) => events,
            Err(e) => {
                tracing::warn!(
                    error = %e,
                    start = %range.start,
                    end = %range.end,
                    "event fetch failed; showing empty calendar"
                );
                Vec::new()
            }
        }
    }
}
