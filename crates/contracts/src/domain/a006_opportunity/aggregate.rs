use crate::domain::common::{
    entity_id, EntityId, Resource, ResourceDescriptor, StatusField, UpdateRoute,
};
use crate::shared::form::{FieldKind, FieldSpec, FormSchema, ValidationRules};
use serde::{Deserialize, Serialize};

pub const EMPLOYMENT_TYPES: &[&str] = &["Full-time", "Part-time", "Contract", "Internship", "Mentorship"];
pub const OPPORTUNITY_STATUSES: &[&str] = &["active", "closed"];

/// Job or mentorship opportunity posted on the networking page
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Opportunity {
    #[serde(default, deserialize_with = "entity_id")]
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub company: String,
    #[serde(default)]
    pub location: String,
    #[serde(rename = "type", default)]
    pub employment_type: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub apply_url: String,
    #[serde(default)]
    pub documents: Vec<String>,
    #[serde(default)]
    pub posted_by: String,
    #[serde(default)]
    pub posted_date: String,
    #[serde(default)]
    pub status: String,
}

impl EntityId for Opportunity {
    fn entity_id(&self) -> &str {
        &self.id
    }
}

const OPPORTUNITY_FIELDS: &[FieldSpec] = &[
    FieldSpec::new("title", "Title", FieldKind::Text).rules(ValidationRules::required()),
    FieldSpec::new("company", "Company", FieldKind::Text).rules(ValidationRules::required()),
    FieldSpec::new("location", "Location", FieldKind::Text).rules(ValidationRules::required()),
    FieldSpec::new("type", "Type", FieldKind::Select(EMPLOYMENT_TYPES))
        .rules(ValidationRules::required()),
    FieldSpec::new("description", "Description", FieldKind::TextArea),
    FieldSpec::new("applyUrl", "Application Link", FieldKind::Url)
        .rules(ValidationRules::none().url()),
    FieldSpec::new("documents", "Documents", FieldKind::List).placeholder("Document link"),
];

impl Resource for Opportunity {
    type Row = Opportunity;

    const DESCRIPTOR: ResourceDescriptor = ResourceDescriptor {
        key: "a006_opportunity",
        collection: "/opportunities",
        detail: "/opportunities",
        detail_envelope: None,
        create: Some("/opportunities"),
        update: UpdateRoute::ById,
        deletable: true,
        filter_param: "search",
        fetch_detail_for_edit: false,
        status: Some(StatusField {
            name: "status",
            label: "Status",
            options: OPPORTUNITY_STATUSES,
        }),
        element_name: "Opportunity",
        list_name: "Networking & Opportunities",
    };

    fn form_schema() -> FormSchema {
        FormSchema::new(OPPORTUNITY_FIELDS)
    }
}
