//! Query-string parsing shared by the calendar handlers.
//!
//! Dates and filters arrive as raw strings so that malformed values produce
//! the standard `validation_error` envelope instead of axum's plain-text
//! rejection.

use chrono::NaiveDate;
use crmcal_core::{EntityFilter, EventType, TypeFilter};
use serde::Deserialize;

use super::ApiError;

/// Comma-separated entity and type selections.
#[derive(Debug, Default, Deserialize)]
pub(super) struct FilterQuery {
    pub talent: Option<String>,
    pub brand: Option<String>,
    pub types: Option<String>,
}

impl FilterQuery {
    pub fn entity_filter(&self) -> EntityFilter {
        EntityFilter::new(
            split_list(self.talent.as_deref()),
            split_list(self.brand.as_deref()),
        )
    }

    pub fn type_filter(&self, request_id: &str) -> Result<TypeFilter, ApiError> {
        parse_type_filter(self.types.as_deref())
            .map_err(|e| ApiError::validation(request_id, e.to_string()))
    }
}

pub(super) fn split_list(raw: Option<&str>) -> Vec<&str> {
    raw.map(|s| {
        s.split(',')
            .map(str::trim)
            .filter(|item| !item.is_empty())
            .collect()
    })
    .unwrap_or_default()
}

/// Absent or blank means every type.
pub(super) fn parse_type_filter(raw: Option<&str>) -> Result<TypeFilter, crmcal_core::CoreError> {
    let tags = split_list(raw);
    if tags.is_empty() {
        return Ok(TypeFilter::all());
    }
    let types = tags
        .into_iter()
        .map(str::parse::<EventType>)
        .collect::<Result<Vec<_>, _>>()?;
    Ok(TypeFilter::only(types))
}

pub(super) fn parse_date(
    request_id: &str,
    name: &str,
    raw: Option<&str>,
) -> Result<NaiveDate, ApiError> {
    let raw = raw
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .ok_or_else(|| ApiError::validation(request_id, format!("missing '{name}' parameter")))?;
    NaiveDate::parse_from_str(raw, "%Y-%m-%d").map_err(|_| {
        ApiError::validation(
            request_id,
            format!("invalid '{name}' value '{raw}'; expected YYYY-MM-DD"),
        )
    })
}

/// Parse a `YYYY-MM` month into its first day.
pub(super) fn parse_month(request_id: &str, raw: Option<&str>) -> Result<NaiveDate, ApiError> {
    let raw = raw
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .ok_or_else(|| ApiError::validation(request_id, "missing 'month' parameter"))?;
    NaiveDate::parse_from_str(&format!("{raw}-01"), "%Y-%m-%d").map_err(|_| {
        ApiError::validation(
            request_id,
            format!("invalid 'month' value '{raw}'; expected YYYY-MM"),
        )
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn split_list_trims_and_drops_blanks() {
        assert_eq!(split_list(Some(" a, b ,,c ")), vec!["a", "b", "c"]);
        assert!(split_list(Some("")).is_empty());
        assert!(split_list(None).is_empty());
    }

    #[test]
    fn type_filter_defaults_to_all() {
        assert!(parse_type_filter(None).unwrap().is_all());
        assert!(parse_type_filter(Some(" ")).unwrap().is_all());
    }

    #[test]
    fn type_filter_parses_tags() {
        let filter = parse_type_filter(Some("meeting,call")).unwrap();
        assert!(filter.contains(EventType::Meeting));
        assert!(filter.contains(EventType::Call));
        assert!(!filter.contains(EventType::Note));
    }

    #[test]
    fn type_filter_rejects_unknown_tag() {
        assert!(parse_type_filter(Some("meeting,party")).is_err());
    }

    #[test]
    fn parse_month_returns_first_day() {
        let first = parse_month("req", Some("2025-03")).unwrap();
        assert_eq!(first, NaiveDate::from_ymd_opt(2025, 3, 1).unwrap());
        assert!(parse_month("req", Some("2025-13")).is_err());
        assert!(parse_month("req", None).is_err());
    }

    #[test]
    fn parse_date_requires_iso_format() {
        assert!(parse_date("req", "date", Some("2025-03-14")).is_ok());
        assert!(parse_date("req", "date", Some("14/03/2025")).is_err());
        assert!(parse_date("req", "date", Some("")).is_err());
    }
}
