//! Serialized shapes for derived calendar views.

use chrono::NaiveDate;
use crmcal_core::{
    truncate_list, CalendarEvent, DateRange, DayKey, DayView, EventDateIndex, EventType,
    Fallback, MAX_DAY_LIST_ITEMS,
};
use serde::Serialize;

/// An event plus its lookup-table display attributes and dashboard link.
#[derive(Debug, Serialize)]
pub(super) struct EventItem {
    #[serde(flatten)]
    pub event: CalendarEvent,
    pub label: &'static str,
    pub color: &'static str,
    pub link: Option<String>,
}

impl From<&CalendarEvent> for EventItem {
    fn from(event: &CalendarEvent) -> Self {
        Self {
            event: event.clone(),
            label: event.event_type.label(),
            color: event.event_type.color(),
            link: event.link(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub(super) enum DayKind {
    Scheduled,
    Future,
    Past,
    NoNearbyEvents,
}

#[derive(Debug, Serialize)]
pub(super) struct DayData {
    pub date: NaiveDate,
    pub kind: DayKind,
    pub events: Vec<EventItem>,
    /// Scheduled events hidden behind "+N more".
    pub more: usize,
}

impl DayData {
    pub fn build(index: &EventDateIndex<'_>, date: NaiveDate) -> Self {
        match index.day_view(date) {
            DayView::Scheduled(events) => {
                let truncated = truncate_list(&events, MAX_DAY_LIST_ITEMS);
                Self {
                    date,
                    kind: DayKind::Scheduled,
                    events: truncated.shown.iter().map(|e| EventItem::from(*e)).collect(),
                    more: truncated.more,
                }
            }
            DayView::Nearby(fallback) => {
                let kind = match &fallback {
                    Fallback::Future(_) => DayKind::Future,
                    Fallback::Past(_) => DayKind::Past,
                    Fallback::NoNearbyEvents => DayKind::NoNearbyEvents,
                };
                Self {
                    date,
                    kind,
                    events: fallback.events().iter().map(|e| EventItem::from(*e)).collect(),
                    more: 0,
                }
            }
        }
    }
}

#[derive(Debug, Serialize)]
pub(super) struct IndicatorDot {
    #[serde(rename = "type")]
    pub event_type: EventType,
    pub color: &'static str,
}

#[derive(Debug, Serialize)]
pub(super) struct DayIndicators {
    pub date: DayKey,
    pub event_count: usize,
    pub dots: Vec<IndicatorDot>,
}

#[derive(Debug, Serialize)]
pub(super) struct MonthData {
    pub month: String,
    pub days: Vec<DayIndicators>,
}

impl MonthData {
    pub fn build(index: &EventDateIndex<'_>, first_day: NaiveDate) -> Self {
        let range = DateRange::month_of(first_day);
        let days = index
            .indicators(range)
            .into_iter()
            .map(|(key, types)| DayIndicators {
                date: key,
                event_count: index.day(key.date()).map_or(0, |b| b.events().len()),
                dots: types
                    .iter()
                    .map(|t| IndicatorDot {
                        event_type: *t,
                        color: t.color(),
                    })
                    .collect(),
            })
            .collect();
        Self {
            month: first_day.format("%Y-%m").to_string(),
            days,
        }
    }
}
