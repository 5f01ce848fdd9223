use serde::{Deserialize, Serialize};

use crate::CoreError;

/// Closed set of calendar event categories.
///
/// Declaration order is the canonical display order used by the legend and
/// the default type filter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EventType {
    ContractStart,
    ContractEnd,
    ContractSigned,
    DealCreated,
    DealStageChanged,
    DealWon,
    DealLost,
    PaymentDue,
    PaymentReceived,
    InvoiceSent,
    DeliverableDue,
    ContentPosted,
    CampaignStart,
    CampaignEnd,
    Meeting,
    Call,
    Note,
    TaskDue,
    TalentOnboarded,
    BrandAdded,
}

/// Display attributes for one event type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct EventTypeStyle {
    pub tag: &'static str,
    pub label: &'static str,
    /// Indicator dot color as a `#rrggbb` hex string.
    pub color: &'static str,
}

static STYLES: [EventTypeStyle; EventType::ALL.len()] = [
    style("contract_start", "Contract Start", "#22c55e"),
    style("contract_end", "Contract End", "#ef4444"),
    style("contract_signed", "Contract Signed", "#16a34a"),
    style("deal_created", "Deal Created", "#3b82f6"),
    style("deal_stage_changed", "Deal Stage Changed", "#6366f1"),
    style("deal_won", "Deal Won", "#10b981"),
    style("deal_lost", "Deal Lost", "#f43f5e"),
    style("payment_due", "Payment Due", "#f59e0b"),
    style("payment_received", "Payment Received", "#84cc16"),
    style("invoice_sent", "Invoice Sent", "#eab308"),
    style("deliverable_due", "Deliverable Due", "#f97316"),
    style("content_posted", "Content Posted", "#ec4899"),
    style("campaign_start", "Campaign Start", "#8b5cf6"),
    style("campaign_end", "Campaign End", "#a855f7"),
    style("meeting", "Meeting", "#0ea5e9"),
    style("call", "Call", "#06b6d4"),
    style("note", "Note", "#64748b"),
    style("task_due", "Task Due", "#d946ef"),
    style("talent_onboarded", "Talent Onboarded", "#14b8a6"),
    style("brand_added", "Brand Added", "#0284c7"),
];

const fn style(tag: &'static str, label: &'static str, color: &'static str) -> EventTypeStyle {
    EventTypeStyle { tag, label, color }
}

impl EventType {
    pub const ALL: [EventType; 20] = [
        EventType::ContractStart,
        EventType::ContractEnd,
        EventType::ContractSigned,
        EventType::DealCreated,
        EventType::DealStageChanged,
        EventType::DealWon,
        EventType::DealLost,
        EventType::PaymentDue,
        EventType::PaymentReceived,
        EventType::InvoiceSent,
        EventType::DeliverableDue,
        EventType::ContentPosted,
        EventType::CampaignStart,
        EventType::CampaignEnd,
        EventType::Meeting,
        EventType::Call,
        EventType::Note,
        EventType::TaskDue,
        EventType::TalentOnboarded,
        EventType::BrandAdded,
    ];

    /// Lookup-table entry for this type.
    #[must_use]
    pub fn style(self) -> &'static EventTypeStyle {
        &STYLES[self as usize]
    }

    #[must_use]
    pub fn as_str(self) -> &'static str {
        self.style().tag
    }

    /// Human-readable name shown in legends and agenda rows.
    #[must_use]
    pub fn label(self) -> &'static str {
        self.style().label
    }

    #[must_use]
    pub fn color(self) -> &'static str {
        self.style().color
    }
}

impl std::fmt::Display for EventType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for EventType {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let needle = s.trim();
        EventType::ALL
            .iter()
            .copied()
            .find(|t| t.as_str() == needle)
            .ok_or_else(|| CoreError::UnknownEventType(needle.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lookup_table_is_aligned_with_enum_order() {
        for event_type in EventType::ALL {
            let json = serde_json::to_string(&event_type).expect("serialize");
            assert_eq!(json, format!("\"{}\"", event_type.as_str()));
        }
    }

    #[test]
    fn parses_known_tag() {
        assert_eq!(
            "payment_due".parse::<EventType>().unwrap(),
            EventType::PaymentDue
        );
        assert_eq!(" note ".parse::<EventType>().unwrap(), EventType::Note);
    }

    #[test]
    fn rejects_unknown_tag() {
        let err = "birthday".parse::<EventType>().unwrap_err();
        assert!(err.to_string().contains("birthday"));
    }

    #[test]
    fn labels_are_distinct() {
        let mut labels: Vec<_> = EventType::ALL.iter().map(|t| t.label()).collect();
        labels.sort_unstable();
        labels.dedup();
        assert_eq!(labels.len(), EventType::ALL.len());
    }

    #[test]
    fn colors_are_hex() {
        for event_type in EventType::ALL {
            let color = event_type.color();
            assert_eq!(color.len(), 7, "{event_type}: {color}");
            assert!(color.starts_with('#'));
        }
    }
}
