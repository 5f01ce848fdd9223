use chrono::{Datelike, Days, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::{CoreError, EntityFilter, SplitLayout, TypeFilter};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ViewMode {
    #[default]
    Month,
    Week,
    List,
}

impl std::fmt::Display for ViewMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ViewMode::Month => write!(f, "month"),
            ViewMode::Week => write!(f, "week"),
            ViewMode::List => write!(f, "list"),
        }
    }
}

impl std::str::FromStr for ViewMode {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "month" => Ok(ViewMode::Month),
            "week" => Ok(ViewMode::Week),
            "list" => Ok(ViewMode::List),
            other => Err(CoreError::UnknownViewMode(other.to_string())),
        }
    }
}

/// Inclusive range of calendar days.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawDateRange")]
pub struct DateRange {
    pub start: NaiveDate,
    pub end: NaiveDate,
}

#[derive(Deserialize)]
struct RawDateRange {
    start: NaiveDate,
    end: NaiveDate,
}

impl TryFrom<RawDateRange> for DateRange {
    type Error = CoreError;

    fn try_from(raw: RawDateRange) -> Result<Self, Self::Error> {
        Self::new(raw.start, raw.end)
    }
}

impl DateRange {
    /// # Errors
    ///
    /// Returns [`CoreError::InvalidDateRange`] when `start` is after `end`.
    pub fn new(start: NaiveDate, end: NaiveDate) -> Result<Self, CoreError> {
        if start > end {
            return Err(CoreError::InvalidDateRange { start, end });
        }
        Ok(Self { start, end })
    }

    #[must_use]
    pub fn contains(&self, date: NaiveDate) -> bool {
        self.start <= date && date <= self.end
    }

    /// The whole calendar month containing `date`.
    #[must_use]
    pub fn month_of(date: NaiveDate) -> Self {
        let start = date.with_day(1).unwrap_or(date);
        let end = start
            .checked_add_months(chrono::Months::new(1))
            .and_then(|next| next.pred_opt())
            .unwrap_or(date);
        Self { start, end }
    }

    /// Monday through Sunday of the week containing `date`.
    #[must_use]
    pub fn week_of(date: NaiveDate) -> Self {
        let offset = u64::from(date.weekday().num_days_from_monday());
        let start = date.checked_sub_days(Days::new(offset)).unwrap_or(date);
        let end = start.checked_add_days(Days::new(6)).unwrap_or(date);
        Self { start, end }
    }

    pub fn days(&self) -> impl Iterator<Item = NaiveDate> {
        let end = self.end;
        self.start.iter_days().take_while(move |d| *d <= end)
    }
}

/// Which events a calendar shows before user filters apply.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum CalendarScope {
    /// Activity calendar across deals, talent and brands.
    #[default]
    All,
    /// Calendar for a single talent client.
    Talent(String),
}

/// Everything the calendar screen would otherwise keep as ambient UI state.
#[derive(Debug, Clone)]
pub struct CalendarState {
    pub scope: CalendarScope,
    pub view_mode: ViewMode,
    pub selected_date: NaiveDate,
    pub entities: EntityFilter,
    pub types: TypeFilter,
    pub split: SplitLayout,
}

impl CalendarState {
    #[must_use]
    pub fn new(selected_date: NaiveDate) -> Self {
        Self {
            scope: CalendarScope::All,
            view_mode: ViewMode::default(),
            selected_date,
            entities: EntityFilter::default(),
            types: TypeFilter::default(),
            split: SplitLayout::default(),
        }
    }

    /// Per-talent variant. Entity filters are ignored for this scope.
    #[must_use]
    pub fn for_talent(talent_id: impl Into<String>, selected_date: NaiveDate) -> Self {
        Self {
            scope: CalendarScope::Talent(talent_id.into()),
            ..Self::new(selected_date)
        }
    }

    /// Days whose events must be fetched to render the current view.
    #[must_use]
    pub fn visible_range(&self) -> DateRange {
        match self.view_mode {
            ViewMode::Month | ViewMode::List => DateRange::month_of(self.selected_date),
            ViewMode::Week => DateRange::week_of(self.selected_date),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::day;

    #[test]
    fn month_range_covers_whole_month() {
        let range = DateRange::month_of(day(2024, 2, 14));
        assert_eq!(range.start, day(2024, 2, 1));
        assert_eq!(range.end, day(2024, 2, 29));

        let december = DateRange::month_of(day(2025, 12, 31));
        assert_eq!(december.end, day(2025, 12, 31));
        assert_eq!(december.days().count(), 31);
    }

    #[test]
    fn week_range_runs_monday_to_sunday() {
        // 2025-03-13 is a Thursday.
        let range = DateRange::week_of(day(2025, 3, 13));
        assert_eq!(range.start, day(2025, 3, 10));
        assert_eq!(range.end, day(2025, 3, 16));
        assert!(range.contains(day(2025, 3, 16)));
        assert!(!range.contains(day(2025, 3, 17)));
    }

    #[test]
    fn visible_range_follows_view_mode() {
        let mut state = CalendarState::new(day(2025, 3, 13));
        assert_eq!(state.visible_range(), DateRange::month_of(day(2025, 3, 13)));
        state.view_mode = ViewMode::Week;
        assert_eq!(state.visible_range().start, day(2025, 3, 10));
        state.view_mode = ViewMode::List;
        assert_eq!(state.visible_range().end, day(2025, 3, 31));
    }

    #[test]
    fn rejects_inverted_range() {
        assert!(DateRange::new(day(2025, 3, 2), day(2025, 3, 1)).is_err());
        assert!(DateRange::new(day(2025, 3, 1), day(2025, 3, 1)).is_ok());
    }

    #[test]
    fn deserialized_range_is_validated() {
        let march = r#"{"start":"2025-03-01","end":"2025-03-31"}"#;
        let range: DateRange = serde_json::from_str(march).expect("range");
        assert_eq!(range, DateRange::month_of(day(2025, 3, 9)));

        let inverted = r#"{"start":"2025-03-10","end":"2025-03-01"}"#;
        let err = serde_json::from_str::<DateRange>(inverted).unwrap_err();
        assert!(err.to_string().contains("invalid date range"));
    }

    #[test]
    fn view_mode_round_trips_through_str() {
        for mode in [ViewMode::Month, ViewMode::Week, ViewMode::List] {
            assert_eq!(mode.to_string().parse::<ViewMode>().unwrap(), mode);
        }
        assert!("agenda".parse::<ViewMode>().is_err());
    }

    #[test]
    fn talent_state_has_talent_scope() {
        let state = CalendarState::for_talent("t-1", day(2025, 3, 13));
        assert_eq!(state.scope, CalendarScope::Talent("t-1".to_string()));
    }
}
