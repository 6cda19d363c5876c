//! Transient form state and its conversion from/to JSON entities

use super::field_type::FieldKind;
use super::list_field::ListField;
use super::types::FormSchema;
use serde::Serialize;
use serde_json::{Map, Number, Value};
use std::collections::BTreeMap;

/// Current value of a single input
#[derive(Debug, Clone, PartialEq)]
pub enum FieldValue {
    Text(String),
    Flag(bool),
    List(ListField),
}

impl FieldValue {
    pub fn blank_for(kind: FieldKind) -> Self {
        match kind {
            FieldKind::Checkbox => Self::Flag(false),
            FieldKind::List => Self::List(ListField::new()),
            _ => Self::Text(String::new()),
        }
    }

    /// Read a JSON value as the given input kind. Missing and `null`
    /// values become blank inputs.
    pub fn from_json(kind: FieldKind, value: Option<&Value>) -> Self {
        match (kind, value) {
            (FieldKind::Checkbox, Some(Value::Bool(b))) => Self::Flag(*b),
            (FieldKind::Checkbox, Some(Value::String(s))) => Self::Flag(s == "true"),
            (FieldKind::List, Some(Value::Array(items))) => {
                Self::List(ListField::from_entries(items.iter().map(json_to_text)))
            }
            // one-per-line text is accepted for list fields
            (FieldKind::List, Some(Value::String(s))) => {
                Self::List(ListField::from_entries(s.lines()))
            }
            (_, Some(Value::Null)) | (_, None) => Self::blank_for(kind),
            (FieldKind::Checkbox, _) | (FieldKind::List, _) => Self::blank_for(kind),
            (_, Some(v)) => Self::Text(json_to_text(v)),
        }
    }

    pub fn as_text(&self) -> &str {
        match self {
            Self::Text(s) => s,
            _ => "",
        }
    }
}

fn json_to_text(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Null => String::new(),
        other => other.to_string(),
    }
}

fn number_value(raw: &str) -> Option<Value> {
    let raw = raw.trim();
    if raw.is_empty() {
        return None;
    }
    if let Ok(n) = raw.parse::<u64>() {
        return Some(Value::Number(n.into()));
    }
    if let Ok(n) = raw.parse::<i64>() {
        return Some(Value::Number(n.into()));
    }
    match raw.parse::<f64>().ok().and_then(Number::from_f64) {
        Some(n) => Some(Value::Number(n)),
        None => Some(Value::String(raw.to_string())),
    }
}

/// Values of all inputs of one open form, keyed by field name
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FormValues(BTreeMap<String, FieldValue>);

impl FormValues {
    /// Empty inputs for create mode
    pub fn blank(schema: &FormSchema) -> Self {
        Self(
            schema
                .iter()
                .map(|f| (f.name.to_string(), FieldValue::blank_for(f.kind)))
                .collect(),
        )
    }

    /// Initial inputs taken from a JSON record (edit mode)
    pub fn from_json(schema: &FormSchema, record: &Value) -> Self {
        Self(
            schema
                .iter()
                .map(|f| {
                    (
                        f.name.to_string(),
                        FieldValue::from_json(f.kind, record.get(f.name)),
                    )
                })
                .collect(),
        )
    }

    pub fn from_entity<T: Serialize>(
        schema: &FormSchema,
        entity: &T,
    ) -> Result<Self, serde_json::Error> {
        let record = serde_json::to_value(entity)?;
        Ok(Self::from_json(schema, &record))
    }

    pub fn get(&self, name: &str) -> Option<&FieldValue> {
        self.0.get(name)
    }

    pub fn text(&self, name: &str) -> &str {
        self.0.get(name).map(FieldValue::as_text).unwrap_or_default()
    }

    pub fn set_text(&mut self, name: &str, value: impl Into<String>) {
        self.0
            .insert(name.to_string(), FieldValue::Text(value.into()));
    }

    pub fn flag(&self, name: &str) -> bool {
        matches!(self.0.get(name), Some(FieldValue::Flag(true)))
    }

    pub fn set_flag(&mut self, name: &str, value: bool) {
        self.0.insert(name.to_string(), FieldValue::Flag(value));
    }

    pub fn list(&self, name: &str) -> Option<&ListField> {
        match self.0.get(name) {
            Some(FieldValue::List(list)) => Some(list),
            _ => None,
        }
    }

    /// Mutable access to a list field, replacing any non-list value
    pub fn list_mut(&mut self, name: &str) -> &mut ListField {
        let slot = self
            .0
            .entry(name.to_string())
            .or_insert_with(|| FieldValue::List(ListField::new()));
        if !matches!(slot, FieldValue::List(_)) {
            *slot = FieldValue::List(ListField::new());
        }
        match slot {
            FieldValue::List(list) => list,
            _ => unreachable!("slot was just set to a list"),
        }
    }

    /// JSON body for the gateway. List fields are pruned, numbers are sent
    /// as JSON numbers and blank numbers are left out.
    pub fn to_payload(&self, schema: &FormSchema) -> Map<String, Value> {
        let mut body = Map::new();
        for spec in schema.iter() {
            let value = match (spec.kind, self.0.get(spec.name)) {
                (FieldKind::List, Some(FieldValue::List(list))) => Some(Value::Array(
                    list.pruned().into_iter().map(Value::String).collect(),
                )),
                (FieldKind::List, _) => Some(Value::Array(Vec::new())),
                (FieldKind::Checkbox, v) => Some(Value::Bool(matches!(
                    v,
                    Some(FieldValue::Flag(true))
                ))),
                (FieldKind::Number, v) => {
                    number_value(v.map(FieldValue::as_text).unwrap_or_default())
                }
                (_, v) => Some(Value::String(
                    v.map(FieldValue::as_text)
                        .unwrap_or_default()
                        .trim()
                        .to_string(),
                )),
            };
            if let Some(value) = value {
                body.insert(spec.name.to_string(), value);
            }
        }
        body
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::form::{FieldSpec, ValidationRules};
    use serde_json::json;

    const FIELDS: &[FieldSpec] = &[
        FieldSpec::new("title", "Title", FieldKind::Text).rules(ValidationRules::required()),
        FieldSpec::new("capacity", "Capacity", FieldKind::Number),
        FieldSpec::new("featured", "Featured", FieldKind::Checkbox),
        FieldSpec::new("achievements", "Achievements", FieldKind::List),
    ];
    const SCHEMA: FormSchema = FormSchema::new(FIELDS);

    #[test]
    fn test_from_json_reads_each_kind() {
        let record = json!({
            "id": 7,
            "title": "Career Development Workshop",
            "capacity": 120,
            "featured": true,
            "achievements": ["Sold out", "Live streamed"]
        });
        let values = FormValues::from_json(&SCHEMA, &record);
        assert_eq!(values.text("title"), "Career Development Workshop");
        assert_eq!(values.text("capacity"), "120");
        assert!(values.flag("featured"));
        assert_eq!(values.list("achievements").unwrap().len(), 2);
        // fields outside the schema are not carried
        assert!(values.get("id").is_none());
    }

    #[test]
    fn test_missing_fields_are_blank() {
        let values = FormValues::from_json(&SCHEMA, &json!({ "title": null }));
        assert_eq!(values.text("title"), "");
        assert!(!values.flag("featured"));
        assert!(values.list("achievements").unwrap().is_empty());
    }

    #[test]
    fn test_payload_prunes_lists_and_types_numbers() {
        let mut values = FormValues::blank(&SCHEMA);
        values.set_text("title", "  Webinar ");
        values.set_text("capacity", "53");
        let list = values.list_mut("achievements");
        list.push("First");
        list.push_blank();
        list.push("  ");

        let body = values.to_payload(&SCHEMA);
        assert_eq!(body["title"], json!("Webinar"));
        assert_eq!(body["capacity"], json!(53));
        assert_eq!(body["featured"], json!(false));
        assert_eq!(body["achievements"], json!(["First"]));
    }

    #[test]
    fn test_blank_number_is_omitted() {
        let values = FormValues::blank(&SCHEMA);
        let body = values.to_payload(&SCHEMA);
        assert!(!body.contains_key("capacity"));
    }

    #[test]
    fn test_list_accepts_multiline_text() {
        let values = FormValues::from_json(
            &SCHEMA,
            &json!({ "achievements": "Best Teacher Award 2023\nIEEE Senior Member" }),
        );
        assert_eq!(
            values.list("achievements").unwrap().pruned(),
            vec!["Best Teacher Award 2023", "IEEE Senior Member"]
        );
    }
}
