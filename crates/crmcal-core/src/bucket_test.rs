use super::*;
use crate::test_support::{at, day, event, ids};

#[test]
fn same_day_different_times_share_a_bucket() {
    let events = vec![
        event("morning", at(2025, 3, 14, 0), EventType::Meeting),
        event("night", at(2025, 3, 14, 23), EventType::Call),
    ];
    let refs: Vec<_> = events.iter().collect();
    let buckets = DateBuckets::build(&refs);

    assert_eq!(buckets.len(), 1);
    let bucket = buckets.get(day(2025, 3, 14)).expect("bucket for the 14th");
    assert_eq!(ids(bucket.events()), vec!["morning", "night"]);
}

#[test]
fn adjacent_days_get_separate_buckets() {
    let events = vec![
        event("late", at(2025, 3, 14, 23), EventType::Note),
        event("early", at(2025, 3, 15, 0), EventType::Note),
    ];
    let refs: Vec<_> = events.iter().collect();
    let buckets = DateBuckets::build(&refs);

    let keys: Vec<String> = buckets.iter().map(|(key, _)| key.to_string()).collect();
    assert_eq!(keys, vec!["2025-03-14", "2025-03-15"]);
}

#[test]
fn duplicate_types_collapse_in_first_seen_order() {
    let events = vec![
        event("a", at(2025, 3, 14, 9), EventType::PaymentDue),
        event("b", at(2025, 3, 14, 10), EventType::Meeting),
        event("c", at(2025, 3, 14, 11), EventType::PaymentDue),
    ];
    let refs: Vec<_> = events.iter().collect();
    let buckets = DateBuckets::build(&refs);

    let bucket = buckets.get(day(2025, 3, 14)).unwrap();
    assert_eq!(bucket.types(), &[EventType::PaymentDue, EventType::Meeting]);
    assert_eq!(bucket.events().len(), 3);
}

#[test]
fn indicator_dots_cap_at_four() {
    let types = [
        EventType::Meeting,
        EventType::Call,
        EventType::Note,
        EventType::DealWon,
        EventType::TaskDue,
        EventType::InvoiceSent,
    ];
    let events: Vec<_> = types
        .iter()
        .enumerate()
        .map(|(i, t)| event(&format!("e{i}"), at(2025, 3, 14, 8), *t))
        .collect();
    let refs: Vec<_> = events.iter().collect();
    let buckets = DateBuckets::build(&refs);

    let bucket = buckets.get(day(2025, 3, 14)).unwrap();
    assert_eq!(bucket.types().len(), 6);
    assert_eq!(bucket.indicator_types(), &types[..MAX_INDICATOR_DOTS]);
}

#[test]
fn missing_day_has_no_events() {
    let buckets = DateBuckets::build(&[]);
    assert!(buckets.is_empty());
    assert!(buckets.events_on(day(2025, 3, 14)).is_empty());
}

#[test]
fn day_key_formats_zero_padded() {
    assert_eq!(DayKey::from(day(2025, 1, 5)).to_string(), "2025-01-05");
    let json = serde_json::to_string(&DayKey::from(day(2025, 12, 31))).unwrap();
    assert_eq!(json, "\"2025-12-31\"");
}

#[test]
fn truncate_list_reports_overflow() {
    let items = [1, 2, 3, 4, 5, 6, 7];
    let truncated = truncate_list(&items, MAX_DAY_LIST_ITEMS);
    assert_eq!(truncated.shown, &[1, 2, 3, 4, 5]);
    assert_eq!(truncated.more, 2);

    let short = truncate_list(&items[..3], MAX_DAY_LIST_ITEMS);
    assert_eq!(short.shown.len(), 3);
    assert_eq!(short.more, 0);
}
