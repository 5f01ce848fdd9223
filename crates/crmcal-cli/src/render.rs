//! Plain-text rendering of calendar views.

use chrono::NaiveDate;
use crmcal_core::{
    truncate_list, CalendarEvent, CalendarState, DateRange, DayView, EventDateIndex, Fallback,
    SplitLayout, ViewMode, MAX_DAY_LIST_ITEMS,
};

/// Pane proportions, e.g. `calendar 60% | details 40%`.
pub(crate) fn render_layout(split: &SplitLayout) -> String {
    format!(
        "calendar {:.0}% | details {:.0}%\n",
        split.percent(),
        split.remainder()
    )
}

/// The calendar pane for the state's view mode.
pub(crate) fn render_calendar(index: &EventDateIndex<'_>, state: &CalendarState) -> String {
    let range = state.visible_range();
    match state.view_mode {
        ViewMode::Month => render_indicators(
            index,
            range,
            &state.selected_date.format("%B %Y").to_string(),
        ),
        ViewMode::Week => render_indicators(
            index,
            range,
            &format!("Week of {}", range.start.format("%Y-%m-%d")),
        ),
        ViewMode::List => render_agenda(index, range),
    }
}

/// One row per day in `range` that has matching events.
pub(crate) fn render_indicators(
    index: &EventDateIndex<'_>,
    range: DateRange,
    heading: &str,
) -> String {
    let mut lines = vec![heading.to_string()];
    let rows = index.indicators(range);
    if rows.is_empty() {
        lines.push("  no events".to_string());
    }
    for (key, types) in rows {
        let count = index.day(key.date()).map_or(0, |b| b.events().len());
        let tags: Vec<&str> = types.iter().map(|t| t.as_str()).collect();
        lines.push(format!(
            "  {key}  {count:>2} {}  {}",
            if count == 1 { "event " } else { "events" },
            tags.join(" ")
        ));
    }
    join_lines(&lines)
}

/// Every matching event in `range`, oldest first.
pub(crate) fn render_agenda(index: &EventDateIndex<'_>, range: DateRange) -> String {
    let mut lines = vec![format!(
        "Agenda {} to {}",
        range.start.format("%Y-%m-%d"),
        range.end.format("%Y-%m-%d")
    )];
    let events = index.in_range(range);
    if events.is_empty() {
        lines.push("  no events".to_string());
    }
    lines.extend(events.into_iter().map(|e| event_line(e, "%Y-%m-%d %H:%M")));
    join_lines(&lines)
}

/// The day pane: scheduled events, or the nearby-event fallback.
pub(crate) fn render_day(index: &EventDateIndex<'_>, date: NaiveDate) -> String {
    let day = date.format("%Y-%m-%d");
    let mut lines = Vec::new();
    match index.day_view(date) {
        DayView::Scheduled(events) => {
            lines.push(format!("{day} ({} scheduled)", events.len()));
            let truncated = truncate_list(&events, MAX_DAY_LIST_ITEMS);
            lines.extend(truncated.shown.iter().map(|e| event_line(e, "%H:%M")));
            if truncated.more > 0 {
                lines.push(format!("  +{} more", truncated.more));
            }
        }
        DayView::Nearby(fallback) => {
            let heading = match &fallback {
                Fallback::Future(_) => "upcoming this month",
                Fallback::Past(_) => "earlier this month",
                Fallback::NoNearbyEvents => "nothing else this month",
            };
            lines.push(format!("{day}: no events, {heading}"));
            lines.extend(
                fallback
                    .events()
                    .iter()
                    .map(|e| event_line(e, "%Y-%m-%d %H:%M")),
            );
        }
    }
    join_lines(&lines)
}

fn event_line(event: &CalendarEvent, time_format: &str) -> String {
    let mut line = format!(
        "  {}  {:<20}{}",
        event.date.format(time_format),
        event.event_type.label(),
        event.title
    );
    if let Some(amount) = event.metadata.amount {
        line.push_str(&format!(" [{amount}]"));
    }
    if let Some(link) = event.link() {
        line.push_str(&format!(" -> {link}"));
    }
    line
}

fn join_lines(lines: &[String]) -> String {
    let mut out = lines.join("\n");
    out.push('\n');
    out
}
