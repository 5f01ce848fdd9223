//! Day-level grouping of filtered events.

use std::collections::BTreeMap;

use chrono::NaiveDate;
use serde::{Serialize, Serializer};

use crate::{CalendarEvent, EventType};

/// Indicator dots rendered per day cell; extra types are not shown.
pub const MAX_INDICATOR_DOTS: usize = 4;

/// Rows listed for a single day before collapsing into "+N more".
pub const MAX_DAY_LIST_ITEMS: usize = 5;

/// Calendar-day key, formatted `YYYY-MM-DD`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct DayKey(NaiveDate);

impl DayKey {
    #[must_use]
    pub fn date(self) -> NaiveDate {
        self.0
    }
}

impl From<NaiveDate> for DayKey {
    fn from(date: NaiveDate) -> Self {
        Self(date)
    }
}

impl std::fmt::Display for DayKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0.format("%Y-%m-%d"))
    }
}

impl Serialize for DayKey {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

/// Events and distinct event types that fall on one calendar day.
#[derive(Debug, Clone, Default)]
pub struct DayBucket<'a> {
    events: Vec<&'a CalendarEvent>,
    types: Vec<EventType>,
}

impl<'a> DayBucket<'a> {
    fn push(&mut self, event: &'a CalendarEvent) {
        if !self.types.contains(&event.event_type) {
            self.types.push(event.event_type);
        }
        self.events.push(event);
    }

    /// Events on this day in input order.
    #[must_use]
    pub fn events(&self) -> &[&'a CalendarEvent] {
        &self.events
    }

    /// Distinct types in first-occurrence order.
    #[must_use]
    pub fn types(&self) -> &[EventType] {
        &self.types
    }

    /// Types to render as dots, at most [`MAX_INDICATOR_DOTS`].
    #[must_use]
    pub fn indicator_types(&self) -> &[EventType] {
        &self.types[..self.types.len().min(MAX_INDICATOR_DOTS)]
    }
}

/// Mapping from day key to that day's bucket.
#[derive(Debug, Clone, Default)]
pub struct DateBuckets<'a> {
    days: BTreeMap<DayKey, DayBucket<'a>>,
}

impl<'a> DateBuckets<'a> {
    #[must_use]
    pub fn build(events: &[&'a CalendarEvent]) -> Self {
        let mut days: BTreeMap<DayKey, DayBucket<'a>> = BTreeMap::new();
        for &event in events {
            days.entry(DayKey::from(event.day()))
                .or_default()
                .push(event);
        }
        Self { days }
    }

    #[must_use]
    pub fn get(&self, date: NaiveDate) -> Option<&DayBucket<'a>> {
        self.days.get(&DayKey::from(date))
    }

    /// Events on `date`, or an empty slice.
    #[must_use]
    pub fn events_on(&self, date: NaiveDate) -> &[&'a CalendarEvent] {
        match self.get(date) {
            Some(bucket) => bucket.events(),
            None => &[],
        }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.days.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.days.is_empty()
    }

    /// Days in ascending order.
    pub fn iter(&self) -> impl Iterator<Item = (DayKey, &DayBucket<'a>)> {
        self.days.iter().map(|(key, bucket)| (*key, bucket))
    }
}

/// A list cut to a display limit, with the count of hidden items.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Truncated<'s, T> {
    pub shown: &'s [T],
    pub more: usize,
}

/// Split `items` into the first `limit` entries and an overflow count.
#[must_use]
pub fn truncate_list<T>(items: &[T], limit: usize) -> Truncated<'_, T> {
    let cut = items.len().min(limit);
    Truncated {
        shown: &items[..cut],
        more: items.len() - cut,
    }
}

#[cfg(test)]
#[path = "bucket_test.rs"]
mod tests;
