use crate::domain::common::{
    entity_id, EntityId, Resource, ResourceDescriptor, StatusField, UpdateRoute,
};
use crate::shared::form::{FieldKind, FieldSpec, FormSchema, ValidationRules};
use serde::{Deserialize, Serialize};

pub const BUSINESS_STATUSES: &[&str] = &["approved", "pending", "rejected"];

/// Alumni-owned business listed in the business directory
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Business {
    #[serde(default, deserialize_with = "entity_id")]
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub owner: String,
    #[serde(default)]
    pub category: String,
    #[serde(default)]
    pub location: String,
    #[serde(default)]
    pub phone: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub website: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub status: String,
}

impl Business {
    pub fn is_approved(&self) -> bool {
        self.status.eq_ignore_ascii_case("approved")
    }
}

impl EntityId for Business {
    fn entity_id(&self) -> &str {
        &self.id
    }
}

const BUSINESS_FIELDS: &[FieldSpec] = &[
    FieldSpec::new("name", "Business Name", FieldKind::Text).rules(ValidationRules::required()),
    FieldSpec::new("owner", "Owner", FieldKind::Text).rules(ValidationRules::required()),
    FieldSpec::new("category", "Category", FieldKind::Text).rules(ValidationRules::required()),
    FieldSpec::new("location", "Location", FieldKind::Text).rules(ValidationRules::required()),
    FieldSpec::new("phone", "Phone", FieldKind::Phone).rules(ValidationRules::required()),
    FieldSpec::new("email", "Email", FieldKind::Email).rules(ValidationRules::required().email()),
    FieldSpec::new("website", "Website", FieldKind::Url)
        .rules(ValidationRules::required().url())
        .placeholder("https://"),
    FieldSpec::new("description", "Description", FieldKind::TextArea)
        .rules(ValidationRules::required()),
];

impl Resource for Business {
    type Row = Business;

    const DESCRIPTOR: ResourceDescriptor = ResourceDescriptor {
        key: "a002_business",
        collection: "/businesses",
        detail: "/businesses",
        detail_envelope: None,
        create: Some("/businesses"),
        update: UpdateRoute::ById,
        deletable: true,
        filter_param: "search",
        fetch_detail_for_edit: false,
        status: Some(StatusField {
            name: "status",
            label: "Status",
            options: BUSINESS_STATUSES,
        }),
        element_name: "Business",
        list_name: "Business Directory",
    };

    fn form_schema() -> FormSchema {
        FormSchema::new(BUSINESS_FIELDS)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::form::FormValues;
    use serde_json::json;

    #[test]
    fn test_sample_website_needs_scheme() {
        let business: Business = serde_json::from_value(json!({
            "id": 1,
            "name": "Tech Solutions Inc",
            "owner": "John Smith",
            "category": "Technology",
            "location": "New York, USA",
            "phone": "+1234567890",
            "email": "contact@techsolutions.com",
            "website": "www.techsolutions.com",
            "status": "approved",
            "description": "Leading provider of innovative technology solutions"
        }))
        .unwrap();
        assert_eq!(business.id, "1");
        assert!(business.is_approved());

        let schema = Business::form_schema();
        let mut values = FormValues::from_entity(&schema, &business).unwrap();
        let errors = schema.validate(&values).unwrap_err();
        assert_eq!(errors.get("website"), Some("Invalid URL"));

        values.set_text("website", "https://www.techsolutions.com");
        assert!(schema.validate(&values).is_ok());
        // status is changed through its own dialog, never by the edit form
        assert!(!values.to_payload(&schema).contains_key("status"));
    }
}
