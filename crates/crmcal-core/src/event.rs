use chrono::{NaiveDate, NaiveDateTime};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::EventType;

/// Weak reference to a CRM entity (deal, talent client, or brand).
///
/// Events only point at entities for lookup and linking; they never own them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EntityRef {
    pub id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

impl EntityRef {
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: None,
        }
    }

    #[must_use]
    pub fn named(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: Some(name.into()),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EventMetadata {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub amount: Option<Decimal>,
}

/// A single dated entry on the activity calendar.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CalendarEvent {
    pub id: String,
    /// Wall-clock calendar time; the day key is derived from its date part.
    pub date: NaiveDateTime,
    #[serde(rename = "type")]
    pub event_type: EventType,
    pub title: String,
    #[serde(default)]
    pub metadata: EventMetadata,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub deal: Option<EntityRef>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub talent_client: Option<EntityRef>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub brand: Option<EntityRef>,
}

impl CalendarEvent {
    #[must_use]
    pub fn day(&self) -> NaiveDate {
        self.date.date()
    }

    #[must_use]
    pub fn talent_id(&self) -> Option<&str> {
        self.talent_client.as_ref().map(|t| t.id.as_str())
    }

    #[must_use]
    pub fn brand_id(&self) -> Option<&str> {
        self.brand.as_ref().map(|b| b.id.as_str())
    }

    /// Dashboard route for the most specific related entity.
    ///
    /// Precedence is deal, then talent, then brand. Events without any
    /// reference have no link.
    #[must_use]
    pub fn link(&self) -> Option<String> {
        if let Some(deal) = &self.deal {
            return Some(format!("/deals/{}", deal.id));
        }
        if let Some(talent) = &self.talent_client {
            return Some(format!("/talent/{}", talent.id));
        }
        self.brand
            .as_ref()
            .map(|brand| format!("/brands/{}", brand.id))
    }
}
