//! `EventDateIndex`: filtered, day-bucketed view over a calendar's events.

use chrono::NaiveDate;

use crate::{
    filter_events, select_fallback, CalendarEvent, CalendarScope, CalendarState, DateBuckets,
    DateRange, DayBucket, DayKey, EntityFilter, EventType, Fallback, TypeFilter,
};

/// What the calendar shows for one selected day.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DayView<'a> {
    /// The day has matching events, in input order.
    Scheduled(Vec<&'a CalendarEvent>),
    /// The day is empty; nearby events in the same month, if any.
    Nearby(Fallback<'a>),
}

/// Derived index over a borrowed event list.
///
/// Rebuild it whenever the source events or the filter selections change;
/// nothing here mutates the source.
#[derive(Debug, Clone)]
pub struct EventDateIndex<'a> {
    filtered: Vec<&'a CalendarEvent>,
    buckets: DateBuckets<'a>,
}

impl<'a> EventDateIndex<'a> {
    #[must_use]
    pub fn new(events: &'a [CalendarEvent], entities: &EntityFilter, types: &TypeFilter) -> Self {
        let filtered = filter_events(events, entities, types);
        let buckets = DateBuckets::build(&filtered);
        Self { filtered, buckets }
    }

    /// Build the index for a calendar screen, honouring its scope.
    ///
    /// A talent-scoped calendar replaces the entity selections with the
    /// single talent it belongs to.
    #[must_use]
    pub fn for_state(events: &'a [CalendarEvent], state: &CalendarState) -> Self {
        match &state.scope {
            CalendarScope::All => Self::new(events, &state.entities, &state.types),
            CalendarScope::Talent(talent_id) => {
                let talent_only = EntityFilter::new([talent_id.as_str()], Vec::<String>::new());
                Self::new(events, &talent_only, &state.types)
            }
        }
    }

    #[must_use]
    pub fn filtered(&self) -> &[&'a CalendarEvent] {
        &self.filtered
    }

    #[must_use]
    pub fn buckets(&self) -> &DateBuckets<'a> {
        &self.buckets
    }

    #[must_use]
    pub fn day(&self, date: NaiveDate) -> Option<&DayBucket<'a>> {
        self.buckets.get(date)
    }

    /// Events for `date`, or the nearby-event fallback when it has none.
    #[must_use]
    pub fn day_view(&self, date: NaiveDate) -> DayView<'a> {
        let scheduled = self.buckets.events_on(date);
        if scheduled.is_empty() {
            DayView::Nearby(select_fallback(&self.filtered, date))
        } else {
            DayView::Scheduled(scheduled.to_vec())
        }
    }

    /// Indicator types for each day in `range` that has events.
    #[must_use]
    pub fn indicators(&self, range: DateRange) -> Vec<(DayKey, &[EventType])> {
        self.buckets
            .iter()
            .filter(|(key, _)| range.contains(key.date()))
            .map(|(key, bucket)| (key, bucket.indicator_types()))
            .collect()
    }

    /// Filtered events inside `range`, sorted by timestamp.
    #[must_use]
    pub fn in_range(&self, range: DateRange) -> Vec<&'a CalendarEvent> {
        let mut events: Vec<_> = self
            .filtered
            .iter()
            .copied()
            .filter(|event| range.contains(event.day()))
            .collect();
        events.sort_by_key(|event| event.date);
        events
    }
}
