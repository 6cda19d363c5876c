use crate::domain::common::{
    entity_id, EntityId, Resource, ResourceDescriptor, StatusField, UpdateRoute,
};
use crate::shared::form::{FieldKind, FieldSpec, FormSchema, ValidationRules};
use serde::{Deserialize, Serialize};

// ============================================================================
// Directory row
// ============================================================================

pub const MEMBERSHIP_STATUSES: &[&str] = &["LifeTime Member", "Annual Member", "Inactive"];

/// Alumnus as listed by the directory endpoint
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Alumni {
    #[serde(deserialize_with = "entity_id")]
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub batch: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub mobile: String,
    #[serde(default)]
    pub city: String,
    #[serde(default)]
    pub state: String,
    #[serde(default)]
    pub membership_status: String,
    #[serde(rename = "isActive", default)]
    pub is_active: bool,
}

impl EntityId for Alumni {
    fn entity_id(&self) -> &str {
        &self.id
    }
}

// ============================================================================
// Full profile
// ============================================================================

/// Profile record returned by `GET /profile/{id}` under the `profile` key
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AlumniProfile {
    #[serde(default, deserialize_with = "entity_id")]
    pub id: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub batch: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub mobile: String,
    #[serde(default)]
    pub address: String,
    #[serde(default)]
    pub city: String,
    #[serde(default)]
    pub state: String,
    #[serde(default)]
    pub bio: Option<String>,
    #[serde(default)]
    pub linkedin: Option<String>,
    #[serde(default)]
    pub twitter: Option<String>,
    #[serde(default)]
    pub website: Option<String>,
    #[serde(rename = "areasOfExpertise", default)]
    pub areas_of_expertise: Vec<String>,
    #[serde(default)]
    pub education: Vec<String>,
    #[serde(default)]
    pub experience: Vec<String>,
    #[serde(default)]
    pub achievements: Vec<String>,
    #[serde(default)]
    pub membership_status: String,
    #[serde(default)]
    pub membership_no: Option<String>,
}

impl AlumniProfile {
    pub fn has_social_links(&self) -> bool {
        [&self.linkedin, &self.twitter, &self.website]
            .iter()
            .any(|link| link.as_deref().is_some_and(|l| !l.trim().is_empty()))
    }
}

impl EntityId for AlumniProfile {
    fn entity_id(&self) -> &str {
        &self.id
    }
}

const PROFILE_FIELDS: &[FieldSpec] = &[
    FieldSpec::new("name", "Name", FieldKind::Text).rules(ValidationRules::required()),
    FieldSpec::new("email", "Email", FieldKind::Email).rules(ValidationRules::required().email()),
    FieldSpec::new("mobile", "Mobile", FieldKind::Phone).rules(ValidationRules::required()),
    FieldSpec::new("address", "Address", FieldKind::Text).rules(ValidationRules::required()),
    FieldSpec::new("city", "City", FieldKind::Text).rules(ValidationRules::required()),
    FieldSpec::new("state", "State", FieldKind::Text).rules(ValidationRules::required()),
    FieldSpec::new("bio", "Bio", FieldKind::TextArea),
    FieldSpec::new("linkedin", "LinkedIn", FieldKind::Url)
        .rules(ValidationRules::none().url())
        .placeholder("https://linkedin.com/in/..."),
    FieldSpec::new("twitter", "Twitter", FieldKind::Url).rules(ValidationRules::none().url()),
    FieldSpec::new("website", "Website", FieldKind::Url).rules(ValidationRules::none().url()),
    FieldSpec::new("areasOfExpertise", "Areas of Expertise", FieldKind::List),
    FieldSpec::new("education", "Education", FieldKind::List),
    FieldSpec::new("experience", "Experience", FieldKind::List),
    FieldSpec::new("achievements", "Achievements", FieldKind::List),
];

impl Resource for AlumniProfile {
    type Row = Alumni;

    const DESCRIPTOR: ResourceDescriptor = ResourceDescriptor {
        key: "a001_alumni",
        collection: "/directory",
        detail: "/profile",
        detail_envelope: Some("profile"),
        create: None,
        update: UpdateRoute::IdInBody("/users/profile"),
        deletable: true,
        filter_param: "name",
        fetch_detail_for_edit: true,
        status: Some(StatusField {
            name: "membership_status",
            label: "Membership Status",
            options: MEMBERSHIP_STATUSES,
        }),
        element_name: "Alumnus",
        list_name: "Alumni Directory",
    };

    fn form_schema() -> FormSchema {
        FormSchema::new(PROFILE_FIELDS)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::form::FormValues;
    use crate::shared::pagination::Page;
    use serde_json::json;

    #[test]
    fn test_directory_page_decodes() {
        let raw = json!({
            "users": [{
                "id": "u-17",
                "name": "Asha Rao",
                "batch": "2014-2018",
                "email": "asha@example.com",
                "mobile": "+91 98000 00000",
                "city": "Pune",
                "state": "MH",
                "membership_status": "Annual Member",
                "isActive": true
            }],
            "pagination": { "page": 1, "limit": 20, "hasMore": false, "total": 1 }
        });
        let page: Page<Alumni> = serde_json::from_value(raw).unwrap();
        assert_eq!(page.items[0].id, "u-17");
        assert!(page.items[0].is_active);
    }

    #[test]
    fn test_profile_prefills_form() {
        let profile: AlumniProfile = serde_json::from_value(json!({
            "name": "Asha Rao",
            "email": "asha@example.com",
            "mobile": "+91 98000 00000",
            "address": "12 MG Road",
            "city": "Pune",
            "state": "MH",
            "areasOfExpertise": ["Data Engineering", "Mentoring"],
            "linkedin": null
        }))
        .unwrap();
        assert!(!profile.has_social_links());

        let schema = AlumniProfile::form_schema();
        let values = FormValues::from_entity(&schema, &profile).unwrap();
        assert_eq!(values.text("address"), "12 MG Road");
        assert_eq!(values.list("areasOfExpertise").unwrap().len(), 2);
        assert_eq!(values.text("linkedin"), "");
        assert!(schema.validate(&values).is_ok());
    }

    #[test]
    fn test_invalid_social_link_blocks() {
        let schema = AlumniProfile::form_schema();
        let mut values = FormValues::blank(&schema);
        for (name, value) in [
            ("name", "Asha Rao"),
            ("email", "asha@example.com"),
            ("mobile", "1"),
            ("address", "x"),
            ("city", "Pune"),
            ("state", "MH"),
            ("twitter", "twitter.com/asha"),
        ] {
            values.set_text(name, value);
        }
        let errors = schema.validate(&values).unwrap_err();
        assert_eq!(errors.len(), 1);
        assert_eq!(errors.get("twitter"), Some("Invalid URL"));
    }
}
