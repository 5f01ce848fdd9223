//! `GET /api/v1/event-types`: label and color lookup table.

use axum::{Extension, Json};
use crmcal_core::{EventType, EventTypeStyle};

use crate::middleware::RequestId;

use super::ApiResponse;

pub(super) async fn list_event_types(
    Extension(req_id): Extension<RequestId>,
) -> Json<ApiResponse<Vec<&'static EventTypeStyle>>> {
    let data = EventType::ALL.iter().map(|t| t.style()).collect();
    Json(ApiResponse::ok(data, req_id.0))
}
