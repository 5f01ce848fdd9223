use std::collections::HashSet;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::{CalendarEvent, ConfigError};

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct EventsFile {
    #[serde(default)]
    pub events: Vec<CalendarEvent>,
}

/// Load and validate the calendar event dataset from a YAML file.
///
/// # Errors
///
/// Returns `ConfigError` if the file cannot be read, parsed, or fails validation.
pub fn load_events(path: &Path) -> Result<EventsFile, ConfigError> {
    let content = std::fs::read_to_string(path).map_err(|e| ConfigError::EventsFileIo {
        path: path.display().to_string(),
        source: e,
    })?;

    parse_events(&content)
}

/// Parse and validate an event dataset from YAML text.
///
/// # Errors
///
/// Returns `ConfigError` if the text does not parse or fails validation.
pub fn parse_events(content: &str) -> Result<EventsFile, ConfigError> {
    let events_file: EventsFile =
        serde_yaml::from_str(content).map_err(ConfigError::EventsFileParse)?;

    validate_events(&events_file)?;

    Ok(events_file)
}

fn validate_events(events_file: &EventsFile) -> Result<(), ConfigError> {
    let mut seen_ids = HashSet::new();

    for event in &events_file.events {
        if event.id.trim().is_empty() {
            return Err(ConfigError::Validation(
                "event id must be non-empty".to_string(),
            ));
        }

        if event.title.trim().is_empty() {
            return Err(ConfigError::Validation(format!(
                "event '{}' has an empty title",
                event.id
            )));
        }

        if !seen_ids.insert(event.id.as_str()) {
            return Err(ConfigError::Validation(format!(
                "duplicate event id: '{}'",
                event.id
            )));
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::EventType;

    const SAMPLE: &str = r#"
events:
  - id: evt-1
    date: "2025-03-14T10:00:00"
    type: meeting
    title: Brand sync
    brand: { id: b-1, name: Northwind }
  - id: evt-2
    date: "2025-03-15T09:30:00"
    type: payment_due
    title: Retainer invoice
    metadata: { amount: "1200.00" }
    deal: { id: d-4 }
"#;

    #[test]
    fn parses_valid_dataset() {
        let file = parse_events(SAMPLE).expect("valid dataset");
        assert_eq!(file.events.len(), 2);
        assert_eq!(file.events[0].event_type, EventType::Meeting);
        assert_eq!(file.events[1].link().as_deref(), Some("/deals/d-4"));
    }

    #[test]
    fn rejects_duplicate_ids() {
        let yaml = r#"
events:
  - { id: x, date: "2025-03-14T10:00:00", type: note, title: One }
  - { id: x, date: "2025-03-15T10:00:00", type: note, title: Two }
"#;
        let err = parse_events(yaml).unwrap_err();
        assert!(err.to_string().contains("duplicate event id"));
    }

    #[test]
    fn rejects_empty_title() {
        let yaml = r#"
events:
  - { id: x, date: "2025-03-14T10:00:00", type: note, title: "  " }
"#;
        let err = parse_events(yaml).unwrap_err();
        assert!(err.to_string().contains("empty title"));
    }

    #[test]
    fn rejects_unknown_event_type() {
        let yaml = r#"
events:
  - { id: x, date: "2025-03-14T10:00:00", type: birthday, title: Party }
"#;
        assert!(matches!(
            parse_events(yaml),
            Err(ConfigError::EventsFileParse(_))
        ));
    }

    #[test]
    fn missing_file_is_io_error() {
        let err = load_events(Path::new("/nonexistent/crmcal/events.yaml")).unwrap_err();
        assert!(matches!(err, ConfigError::EventsFileIo { .. }));
    }

    #[test]
    fn load_events_from_bundled_file() {
        let path = Path::new(env!("CARGO_MANIFEST_DIR"))
            .join("..")
            .join("..")
            .join("config")
            .join("events.yaml");
        let result = load_events(&path);
        assert!(result.is_ok(), "failed to load events.yaml: {result:?}");
        assert!(!result.unwrap().events.is_empty());
    }
}
