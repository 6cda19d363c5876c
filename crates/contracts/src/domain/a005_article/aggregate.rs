use crate::domain::common::{
    entity_id, EntityId, Resource, ResourceDescriptor, StatusField, UpdateRoute,
};
use crate::shared::form::{FieldKind, FieldSpec, FormSchema, ValidationRules};
use serde::{Deserialize, Serialize};

pub const ARTICLE_CATEGORIES: &[&str] = &["Success Stories", "Campus News", "Events", "Announcements"];
pub const ARTICLE_STATUSES: &[&str] = &["published", "draft"];

/// News article
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Article {
    #[serde(default, deserialize_with = "entity_id")]
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub content: String,
    #[serde(default)]
    pub excerpt: String,
    #[serde(default)]
    pub author: String,
    #[serde(default)]
    pub date: String,
    #[serde(default)]
    pub category: String,
    #[serde(default)]
    pub status: String,
    #[serde(default)]
    pub featured: bool,
}

impl Article {
    /// Excerpt if the gateway sent one, otherwise the first 120 characters of the content
    pub fn summary(&self) -> String {
        if !self.excerpt.trim().is_empty() {
            return self.excerpt.clone();
        }
        let mut summary: String = self.content.chars().take(120).collect();
        if self.content.chars().count() > 120 {
            summary.push_str("...");
        }
        summary
    }
}

impl EntityId for Article {
    fn entity_id(&self) -> &str {
        &self.id
    }
}

const ARTICLE_FIELDS: &[FieldSpec] = &[
    FieldSpec::new("title", "Title", FieldKind::Text).rules(ValidationRules::required()),
    FieldSpec::new("content", "Content", FieldKind::TextArea)
        .rules(ValidationRules::required())
        .placeholder("Article content"),
    FieldSpec::new("category", "Category", FieldKind::Select(ARTICLE_CATEGORIES))
        .rules(ValidationRules::required()),
    FieldSpec::new("featured", "Featured article", FieldKind::Checkbox),
];

impl Resource for Article {
    type Row = Article;

    const DESCRIPTOR: ResourceDescriptor = ResourceDescriptor {
        key: "a005_article",
        collection: "/news",
        detail: "/news",
        detail_envelope: None,
        create: Some("/news"),
        update: UpdateRoute::ById,
        deletable: true,
        filter_param: "search",
        fetch_detail_for_edit: false,
        status: Some(StatusField {
            name: "status",
            label: "Status",
            options: ARTICLE_STATUSES,
        }),
        element_name: "Article",
        list_name: "News & Articles",
    };

    fn form_schema() -> FormSchema {
        FormSchema::new(ARTICLE_FIELDS)
    }
}
