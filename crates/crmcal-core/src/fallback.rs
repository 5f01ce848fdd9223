//! Nearby-event selection for days with no matching events.

use chrono::{Datelike, NaiveDate};
use serde::Serialize;

use crate::CalendarEvent;

/// Maximum number of nearby events reported for an empty day.
pub const FALLBACK_LIMIT: usize = 5;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum FallbackDirection {
    Future,
    Past,
}

/// Outcome of a nearby-event search within the selected month.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Fallback<'a> {
    /// Upcoming events, nearest first.
    Future(Vec<&'a CalendarEvent>),
    /// Earlier events, most recent first.
    Past(Vec<&'a CalendarEvent>),
    NoNearbyEvents,
}

impl<'a> Fallback<'a> {
    #[must_use]
    pub fn direction(&self) -> Option<FallbackDirection> {
        match self {
            Fallback::Future(_) => Some(FallbackDirection::Future),
            Fallback::Past(_) => Some(FallbackDirection::Past),
            Fallback::NoNearbyEvents => None,
        }
    }

    #[must_use]
    pub fn events(&self) -> &[&'a CalendarEvent] {
        match self {
            Fallback::Future(events) | Fallback::Past(events) => events,
            Fallback::NoNearbyEvents => &[],
        }
    }
}

fn same_month(a: NaiveDate, b: NaiveDate) -> bool {
    a.year() == b.year() && a.month() == b.month()
}

/// Find up to [`FALLBACK_LIMIT`] events near `selected` in the same calendar
/// month, preferring days after it over days before it.
///
/// `events` is expected to be the already-filtered set. Neighbouring months
/// are never searched, even when `selected` sits on a month boundary. Ordering
/// is a stable sort on the timestamp alone, so equal timestamps keep their
/// input order.
#[must_use]
pub fn select_fallback<'a>(events: &[&'a CalendarEvent], selected: NaiveDate) -> Fallback<'a> {
    let in_month: Vec<&'a CalendarEvent> = events
        .iter()
        .copied()
        .filter(|event| same_month(event.day(), selected))
        .collect();

    let mut future: Vec<_> = in_month
        .iter()
        .copied()
        .filter(|e| e.day() > selected)
        .collect();
    if !future.is_empty() {
        future.sort_by_key(|e| e.date);
        future.truncate(FALLBACK_LIMIT);
        return Fallback::Future(future);
    }

    let mut past: Vec<_> = in_month
        .into_iter()
        .filter(|e| e.day() < selected)
        .collect();
    if !past.is_empty() {
        past.sort_by(|a, b| b.date.cmp(&a.date));
        past.truncate(FALLBACK_LIMIT);
        return Fallback::Past(past);
    }

    Fallback::NoNearbyEvents
}
