//! Fixture builders shared by unit tests.

use chrono::{NaiveDate, NaiveDateTime};

use crate::{CalendarEvent, EntityRef, EventMetadata, EventType};

pub(crate) fn at(year: i32, month: u32, day: u32, hour: u32) -> NaiveDateTime {
    NaiveDate::from_ymd_opt(year, month, day)
        .and_then(|d| d.and_hms_opt(hour, 0, 0))
        .expect("valid fixture timestamp")
}

pub(crate) fn day(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).expect("valid fixture date")
}

pub(crate) fn event(id: &str, date: NaiveDateTime, event_type: EventType) -> CalendarEvent {
    CalendarEvent {
        id: id.to_string(),
        date,
        event_type,
        title: format!("Event {id}"),
        metadata: EventMetadata::default(),
        deal: None,
        talent_client: None,
        brand: None,
    }
}

pub(crate) fn with_talent(mut event: CalendarEvent, talent_id: &str) -> CalendarEvent {
    event.talent_client = Some(EntityRef::new(talent_id));
    event
}

pub(crate) fn with_brand(mut event: CalendarEvent, brand_id: &str) -> CalendarEvent {
    event.brand = Some(EntityRef::new(brand_id));
    event
}

pub(crate) fn ids(events: &[&CalendarEvent]) -> Vec<String> {
    events.iter().map(|e| e.id.clone()).collect()
}
