//! Activity calendar handlers.
//!
//! - `GET /api/v1/calendar/events`: raw events for a date range
//! - `GET /api/v1/calendar/day`: filtered day view with nearby-event fallback
//! - `GET /api/v1/calendar/month`: per-day indicator dots for a month

use axum::{
    extract::{Query, State},
    Extension, Json,
};
use crmcal_core::{CalendarEvent, DateRange, EntityFilter, EventDateIndex, TypeFilter};
use serde::Deserialize;

use crate::middleware::RequestId;

use super::params::{parse_date, parse_month, FilterQuery};
use super::views::{DayData, MonthData};
use super::{ApiError, ApiResponse, AppState};

#[derive(Debug, Deserialize)]
pub(super) struct EventsQuery {
    pub start: Option<String>,
    pub end: Option<String>,
}

#[derive(Debug, Deserialize)]
pub(super) struct DayQuery {
    pub date: Option<String>,
    #[serde(flatten)]
    pub filters: FilterQuery,
}

#[derive(Debug, Deserialize)]
pub(super) struct MonthQuery {
    pub month: Option<String>,
    #[serde(flatten)]
    pub filters: FilterQuery,
}

pub(super) async fn list_events(
    State(state): State<AppState>,
    Extension(req_id): Extension<RequestId>,
    Query(query): Query<EventsQuery>,
) -> Result<Json<ApiResponse<Vec<CalendarEvent>>>, ApiError> {
    let start = parse_date(&req_id.0, "start", query.start.as_deref())?;
    let end = parse_date(&req_id.0, "end", query.end.as_deref())?;
    let range =
        DateRange::new(start, end).map_err(|e| ApiError::validation(&req_id.0, e.to_string()))?;

    let index = EventDateIndex::new(&state.events, &EntityFilter::default(), &TypeFilter::all());
    let data: Vec<CalendarEvent> = index.in_range(range).into_iter().cloned().collect();

    tracing::debug!(start = %start, end = %end, count = data.len(), "listed calendar events");

    Ok(Json(ApiResponse::ok(data, req_id.0)))
}

pub(super) async fn get_day(
    State(state): State<AppState>,
    Extension(req_id): Extension<RequestId>,
    Query(query): Query<DayQuery>,
) -> Result<Json<ApiResponse<DayData>>, ApiError> {
    let date = parse_date(&req_id.0, "date", query.date.as_deref())?;
    let types = query.filters.type_filter(&req_id.0)?;
    let entities = query.filters.entity_filter();

    let index = EventDateIndex::new(&state.events, &entities, &types);
    let data = DayData::build(&index, date);

    Ok(Json(ApiResponse::ok(data, req_id.0)))
}

pub(super) async fn get_month(
    State(state): State<AppState>,
    Extension(req_id): Extension<RequestId>,
    Query(query): Query<MonthQuery>,
) -> Result<Json<ApiResponse<MonthData>>, ApiError> {
    let first_day = parse_month(&req_id.0, query.month.as_deref())?;
    let types = query.filters.type_filter(&req_id.0)?;
    let entities = query.filters.entity_filter();

    let index = EventDateIndex::new(&state.events, &entities, &types);
    let data = MonthData::build(&index, first_day);

    Ok(Json(ApiResponse::ok(data, req_id.0)))
}
