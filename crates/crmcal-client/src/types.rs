use crmcal_core::CalendarEvent;
use serde::Deserialize;

/// `{ success, data }` envelope returned by the events endpoint.
///
/// Failed responses carry `error` instead of `data`.
#[derive(Debug, Deserialize)]
pub struct EventsEnvelope {
    pub success: bool,
    #[serde(default)]
    pub data: Option<Vec<CalendarEvent>>,
    #[serde(default)]
    pub error: Option<EnvelopeError>,
}

#[derive(Debug, Deserialize)]
pub struct EnvelopeError {
    pub code: String,
    pub message: String,
}
