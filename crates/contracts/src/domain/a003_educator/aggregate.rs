use crate::domain::common::{
    entity_id, EntityId, Resource, ResourceDescriptor, StatusField, UpdateRoute,
};
use crate::shared::form::{FieldKind, FieldSpec, FormSchema, ValidationRules};
use serde::{Deserialize, Serialize};

pub const EDUCATOR_STATUSES: &[&str] = &["active", "inactive"];

/// Faculty member featured on the educators page
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Educator {
    #[serde(default, deserialize_with = "entity_id")]
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub department: String,
    #[serde(default)]
    pub specialization: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub phone: String,
    #[serde(default)]
    pub experience: String,
    #[serde(rename = "areasOfExpertise", default)]
    pub areas_of_expertise: Vec<String>,
    #[serde(default)]
    pub achievements: Vec<String>,
    #[serde(default)]
    pub documents: Vec<String>,
    #[serde(default)]
    pub status: String,
}

impl EntityId for Educator {
    fn entity_id(&self) -> &str {
        &self.id
    }
}

const EDUCATOR_FIELDS: &[FieldSpec] = &[
    FieldSpec::new("name", "Name", FieldKind::Text).rules(ValidationRules::required()),
    FieldSpec::new("department", "Department", FieldKind::Text).rules(ValidationRules::required()),
    FieldSpec::new("specialization", "Specialization", FieldKind::Text)
        .rules(ValidationRules::required()),
    FieldSpec::new("email", "Email", FieldKind::Email).rules(ValidationRules::required().email()),
    FieldSpec::new("phone", "Phone", FieldKind::Phone).rules(ValidationRules::required()),
    FieldSpec::new("experience", "Experience", FieldKind::Text)
        .rules(ValidationRules::required())
        .placeholder("e.g. 15 years"),
    FieldSpec::new("areasOfExpertise", "Areas of Expertise", FieldKind::List)
        .rules(ValidationRules::none().non_empty_list()),
    FieldSpec::new("achievements", "Achievements", FieldKind::List)
        .rules(ValidationRules::none().non_empty_list()),
    FieldSpec::new("documents", "Documents", FieldKind::List).placeholder("Document link"),
];

impl Resource for Educator {
    type Row = Educator;

    const DESCRIPTOR: ResourceDescriptor = ResourceDescriptor {
        key: "a003_educator",
        collection: "/educators",
        detail: "/educators",
        detail_envelope: None,
        create: Some("/educators"),
        update: UpdateRoute::ById,
        deletable: true,
        filter_param: "search",
        fetch_detail_for_edit: false,
        status: Some(StatusField {
            name: "status",
            label: "Status",
            options: EDUCATOR_STATUSES,
        }),
        element_name: "Educator",
        list_name: "Educators",
    };

    fn form_schema() -> FormSchema {
        FormSchema::new(EDUCATOR_FIELDS)
    }
}
