use crate::domain::common::{
    entity_id, lenient_count, EntityId, Resource, ResourceDescriptor, StatusField, UpdateRoute,
};
use crate::shared::form::{FieldKind, FieldSpec, FormSchema, ValidationRules};
use serde::{Deserialize, Serialize};

pub const EVENT_CATEGORIES: &[&str] = &["Networking", "Workshop", "Seminar", "Conference", "Other"];
pub const EVENT_STATUSES: &[&str] = &["upcoming", "completed", "cancelled"];

// ============================================================================
// Editable record / list row
// ============================================================================

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Event {
    #[serde(default, deserialize_with = "entity_id")]
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub date: String,
    #[serde(default)]
    pub time: String,
    #[serde(default, alias = "location")]
    pub venue: String,
    #[serde(default)]
    pub category: String,
    #[serde(default, deserialize_with = "lenient_count")]
    pub capacity: u64,
    #[serde(
        default,
        alias = "registrationsCount",
        deserialize_with = "lenient_count"
    )]
    pub registrations: u64,
    #[serde(default)]
    pub status: String,
}

impl EntityId for Event {
    fn entity_id(&self) -> &str {
        &self.id
    }
}

const EVENT_FIELDS: &[FieldSpec] = &[
    FieldSpec::new("title", "Title", FieldKind::Text).rules(ValidationRules::required()),
    FieldSpec::new("description", "Description", FieldKind::TextArea)
        .rules(ValidationRules::required()),
    FieldSpec::new("date", "Date", FieldKind::Date).rules(ValidationRules::required().date()),
    FieldSpec::new("time", "Time", FieldKind::Time)
        .rules(ValidationRules::required().time())
        .placeholder("HH:MM"),
    FieldSpec::new("venue", "Venue", FieldKind::Text).rules(ValidationRules::required()),
    FieldSpec::new("category", "Category", FieldKind::Select(EVENT_CATEGORIES))
        .rules(ValidationRules::required()),
    FieldSpec::new("capacity", "Capacity", FieldKind::Number)
        .rules(ValidationRules::required().non_negative()),
];

impl Resource for Event {
    type Row = Event;

    const DESCRIPTOR: ResourceDescriptor = ResourceDescriptor {
        key: "a004_event",
        collection: "/events",
        detail: "/events",
        detail_envelope: None,
        create: Some("/events"),
        update: UpdateRoute::ById,
        deletable: true,
        filter_param: "search",
        fetch_detail_for_edit: true,
        status: Some(StatusField {
            name: "status",
            label: "Status",
            options: EVENT_STATUSES,
        }),
        element_name: "Event",
        list_name: "Events",
    };

    fn form_schema() -> FormSchema {
        FormSchema::new(EVENT_FIELDS)
    }
}

// ============================================================================
// Detail view (registrations and funding)
// ============================================================================

#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct TierPricing {
    pub adult: f64,
    pub senior_citizen: f64,
    pub children: f64,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct TierBreakdown {
    pub adult: u64,
    pub senior_citizen: u64,
    pub children: u64,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Registration {
    pub user_id: String,
    pub registration_type: String,
    pub name: String,
    pub email: String,
    pub phone: String,
    pub registered_at: String,
    // participant
    pub adults: Option<u32>,
    pub children: Option<u32>,
    pub children_under5: Option<u32>,
    pub seniors: Option<u32>,
    pub dietary_restrictions: Option<String>,
    pub amount: Option<f64>,
    // sponsor
    pub sponsorship_level: Option<String>,
    pub amount_sponsored: Option<f64>,
    // service provider
    pub service_type: Option<String>,
    pub contract_value: Option<f64>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct RegistrationsByType {
    pub participant: Vec<Registration>,
    pub sponsor: Vec<Registration>,
    pub service_provider: Vec<Registration>,
}

/// Full record returned by `GET /events/{id}`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EventDetails {
    #[serde(default, deserialize_with = "entity_id")]
    pub id: String,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub date: String,
    #[serde(default)]
    pub time: String,
    #[serde(default)]
    pub venue: String,
    #[serde(default)]
    pub category: String,
    #[serde(default, deserialize_with = "lenient_count")]
    pub capacity: u64,
    #[serde(default, deserialize_with = "lenient_count")]
    pub registrations_count: u64,
    #[serde(default, deserialize_with = "lenient_count")]
    pub remaining_capacity: u64,
    #[serde(default)]
    pub total_targeted_amount: f64,
    #[serde(default)]
    pub pricing: TierPricing,
    #[serde(default)]
    pub registration_breakdown: TierBreakdown,
    #[serde(default)]
    pub registrations_by_type: RegistrationsByType,
}

impl EventDetails {
    /// Ticket revenue per tier plus sponsorships plus service contracts
    pub fn raised_amount(&self) -> f64 {
        let b = &self.registration_breakdown;
        let p = &self.pricing;
        let participants = b.adult as f64 * p.adult
            + b.senior_citizen as f64 * p.senior_citizen
            + b.children as f64 * p.children;
        let sponsors: f64 = self
            .registrations_by_type
            .sponsor
            .iter()
            .map(|r| r.amount_sponsored.unwrap_or(0.0))
            .sum();
        let providers: f64 = self
            .registrations_by_type
            .service_provider
            .iter()
            .map(|r| r.contract_value.unwrap_or(0.0))
            .sum();
        participants + sponsors + providers
    }

    /// Percentage of the funding target reached, capped at 100
    pub fn funding_progress(&self) -> f64 {
        if self.total_targeted_amount <= 0.0 {
            return 0.0;
        }
        (self.raised_amount() / self.total_targeted_amount * 100.0).min(100.0)
    }
}

impl EntityId for EventDetails {
    fn entity_id(&self) -> &str {
        &self.id
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::form::FormValues;
    use serde_json::json;

    fn details() -> EventDetails {
        serde_json::from_value(json!({
            "id": "ev-1",
            "title": "Annual Alumni Meet 2025",
            "date": "2025-03-15",
            "time": "10:00 AM",
            "venue": "Main Campus",
            "capacity": 300,
            "category": "Networking",
            "registrationsCount": 84,
            "remainingCapacity": 216,
            "totalTargetedAmount": 10000.0,
            "pricing": { "adult": 500.0, "seniorCitizen": 250.0, "children": 100.0 },
            "registrationBreakdown": { "adult": 10, "seniorCitizen": 4, "children": 5 },
            "registrationsByType": {
                "participant": [{ "userId": "u1", "name": "A", "adults": 2 }],
                "sponsor": [{ "userId": "s1", "amountSponsored": 2000.0 }],
                "serviceProvider": [{ "userId": "p1", "contractValue": 1500.0 }]
            }
        }))
        .unwrap()
    }

    #[test]
    fn test_raised_amount_and_progress() {
        let event = details();
        // 10*500 + 4*250 + 5*100 + 2000 + 1500
        assert_eq!(event.raised_amount(), 10_000.0);
        assert_eq!(event.funding_progress(), 100.0);

        let mut half = event.clone();
        half.total_targeted_amount = 20_000.0;
        assert_eq!(half.funding_progress(), 50.0);

        half.total_targeted_amount = 0.0;
        assert_eq!(half.funding_progress(), 0.0);
    }

    #[test]
    fn test_detail_payload_reads_as_editable_event() {
        let raw = serde_json::to_value(details()).unwrap();
        let event: Event = serde_json::from_value(raw).unwrap();
        assert_eq!(event.registrations, 84);
        assert_eq!(event.capacity, 300);

        let schema = Event::form_schema();
        let values = FormValues::from_entity(&schema, &event).unwrap();
        assert_eq!(values.text("capacity"), "300");
        assert!(schema.validate(&values).is_err(), "description is empty");
    }

    #[test]
    fn test_sample_row_uses_location_alias() {
        let event: Event = serde_json::from_value(json!({
            "id": 2,
            "title": "Career Development Workshop",
            "date": "2025-02-28",
            "time": "2:00 PM",
            "location": "Virtual",
            "category": "Workshop",
            "registrations": 32,
            "status": "upcoming"
        }))
        .unwrap();
        assert_eq!(event.venue, "Virtual");
        assert_eq!(event.registrations, 32);
    }
}
