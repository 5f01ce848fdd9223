//! Where the CLI reads calendar events from.

use std::path::PathBuf;

use anyhow::Context;
use crmcal_client::CalendarClient;
use crmcal_core::{AppConfig, CalendarEvent, DateRange};

pub(crate) enum EventSource {
    /// The YAML dataset on disk; the whole file is read regardless of range.
    Local(PathBuf),
    /// The calendar API, queried for the requested range only.
    Remote(CalendarClient),
}

impl EventSource {
    /// # Errors
    ///
    /// Returns an error if the API client cannot be built from `config`.
    pub(crate) fn from_config(
        config: &AppConfig,
        remote: bool,
        events_path: Option<PathBuf>,
    ) -> anyhow::Result<Self> {
        if remote {
            let client = CalendarClient::new(
                &config.api_url,
                config.api_token.as_deref(),
                config.client_timeout_secs,
            )
            .with_context(|| format!("building API client for {}", config.api_url))?;
            return Ok(Self::Remote(client));
        }
        Ok(Self::Local(
            events_path.unwrap_or_else(|| config.events_path.clone()),
        ))
    }

    /// Load events covering at least `range`.
    ///
    /// A failed remote fetch is logged and yields no events so the views
    /// still render.
    ///
    /// # Errors
    ///
    /// Returns an error if the local events file cannot be read or validated.
    pub(crate) async fn load(&self, range: DateRange) -> anyhow::Result<Vec<CalendarEvent>> {
        match self {
            Self::Local(path) => {
                let file = crmcal_core::load_events(path)
                    .with_context(|| format!("loading events from {}", path.display()))?;
                tracing::debug!(
                    path = %path.display(),
                    count = file.events.len(),
                    "loaded local events"
                );
                Ok(file.events)
            }
            Self::Remote(client) => {
                let events = client.fetch_events_or_empty(range).await;
                tracing::debug!(
                    start = %range.start,
                    end = %range.end,
                    count = events.len(),
                    "fetched remote events"
                );
                Ok(events)
            }
        }
    }
}
