//! `GET /api/v1/talent/{talent_id}/calendar`: per-talent calendar variant.

use axum::{
    extract::{Path, Query, State},
    Extension, Json,
};
use chrono::Datelike;
use crmcal_core::{CalendarState, EventDateIndex};
use serde::{Deserialize, Serialize};

use crate::middleware::RequestId;

use super::params::{parse_date, parse_type_filter};
use super::views::{DayData, MonthData};
use super::{ApiError, ApiResponse, AppState};

#[derive(Debug, Deserialize)]
pub(super) struct TalentCalendarQuery {
    pub date: Option<String>,
    pub types: Option<String>,
}

#[derive(Debug, Serialize)]
pub(super) struct TalentCalendarData {
    pub talent_id: String,
    pub day: DayData,
    pub month: MonthData,
}

pub(super) async fn get_talent_calendar(
    State(state): State<AppState>,
    Extension(req_id): Extension<RequestId>,
    Path(talent_id): Path<String>,
    Query(query): Query<TalentCalendarQuery>,
) -> Result<Json<ApiResponse<TalentCalendarData>>, ApiError> {
    let date = parse_date(&req_id.0, "date", query.date.as_deref())?;

    let mut calendar = CalendarState::for_talent(talent_id.clone(), date);
    calendar.types = parse_type_filter(query.types.as_deref())
        .map_err(|e| ApiError::validation(&req_id.0, e.to_string()))?;

    let index = EventDateIndex::for_state(&state.events, &calendar);
    let first_day = date.with_day(1).unwrap_or(date);

    let data = TalentCalendarData {
        day: DayData::build(&index, date),
        month: MonthData::build(&index, first_day),
        talent_id,
    };

    Ok(Json(ApiResponse::ok(data, req_id.0)))
}
