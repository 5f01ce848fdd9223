//! Entity and category filtering over calendar events.
//!
//! Filtering is pure: callers keep the source list and re-derive the filtered
//! view whenever a selection changes.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use crate::{CalendarEvent, EventType};

/// Talent and brand selections.
///
/// An empty set places no restriction on its dimension. When both dimensions
/// are active an event passes if it matches either of them.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EntityFilter {
    #[serde(default)]
    pub talent_ids: BTreeSet<String>,
    #[serde(default)]
    pub brand_ids: BTreeSet<String>,
}

impl EntityFilter {
    pub fn new<T, B>(talent_ids: T, brand_ids: B) -> Self
    where
        T: IntoIterator,
        T::Item: Into<String>,
        B: IntoIterator,
        B::Item: Into<String>,
    {
        Self {
            talent_ids: talent_ids.into_iter().map(Into::into).collect(),
            brand_ids: brand_ids.into_iter().map(Into::into).collect(),
        }
    }

    #[must_use]
    pub fn is_active(&self) -> bool {
        !self.talent_ids.is_empty() || !self.brand_ids.is_empty()
    }

    #[must_use]
    pub fn matches(&self, event: &CalendarEvent) -> bool {
        let talent_active = !self.talent_ids.is_empty();
        let brand_active = !self.brand_ids.is_empty();

        let talent_hit = || {
            event
                .talent_id()
                .is_some_and(|id| self.talent_ids.contains(id))
        };
        let brand_hit = || {
            event
                .brand_id()
                .is_some_and(|id| self.brand_ids.contains(id))
        };

        match (talent_active, brand_active) {
            (false, false) => true,
            (true, true) => talent_hit() || brand_hit(),
            (true, false) => talent_hit(),
            (false, true) => brand_hit(),
        }
    }
}

/// Selected event categories. Defaults to every category.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TypeFilter {
    selected: BTreeSet<EventType>,
}

impl Default for TypeFilter {
    fn default() -> Self {
        Self::all()
    }
}

impl TypeFilter {
    #[must_use]
    pub fn all() -> Self {
        Self {
            selected: EventType::ALL.into_iter().collect(),
        }
    }

    #[must_use]
    pub fn none() -> Self {
        Self {
            selected: BTreeSet::new(),
        }
    }

    pub fn only(types: impl IntoIterator<Item = EventType>) -> Self {
        Self {
            selected: types.into_iter().collect(),
        }
    }

    #[must_use]
    pub fn contains(&self, event_type: EventType) -> bool {
        self.selected.contains(&event_type)
    }

    /// Flip a single category on or off.
    pub fn toggle(&mut self, event_type: EventType) {
        if !self.selected.remove(&event_type) {
            self.selected.insert(event_type);
        }
    }

    pub fn select_all(&mut self) {
        self.selected = EventType::ALL.into_iter().collect();
    }

    pub fn clear(&mut self) {
        self.selected.clear();
    }

    #[must_use]
    pub fn is_all(&self) -> bool {
        self.selected.len() == EventType::ALL.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = EventType> + '_ {
        self.selected.iter().copied()
    }
}

/// Apply both filters, preserving input order.
#[must_use]
pub fn filter_events<'a>(
    events: &'a [CalendarEvent],
    entities: &EntityFilter,
    types: &TypeFilter,
) -> Vec<&'a CalendarEvent> {
    events
        .iter()
        .filter(|event| types.contains(event.event_type) && entities.matches(event))
        .collect()
}

#[cfg(test)]
#[path = "filter_test.rs"]
mod tests;
