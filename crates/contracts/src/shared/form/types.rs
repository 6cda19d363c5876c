//! Field and form schema types
//!
//! All types use 'static data so every entity can declare its form as a
//! compile-time constant.

use super::field_type::FieldKind;
use super::validation::{ValidationErrors, ValidationRules};
use super::values::{FieldValue, FormValues};

/// One input of an edit form
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FieldSpec {
    /// JSON key on the wire
    pub name: &'static str,
    pub label: &'static str,
    pub kind: FieldKind,
    pub validation: ValidationRules,
    pub placeholder: &'static str,
}

impl FieldSpec {
    pub const fn new(name: &'static str, label: &'static str, kind: FieldKind) -> Self {
        Self {
            name,
            label,
            kind,
            validation: ValidationRules::none(),
            placeholder: "",
        }
    }

    pub const fn rules(self, validation: ValidationRules) -> Self {
        Self { validation, ..self }
    }

    pub const fn placeholder(self, placeholder: &'static str) -> Self {
        Self {
            placeholder,
            ..self
        }
    }

    /// Check one value against this field's rules
    pub fn check(&self, value: Option<&FieldValue>) -> Result<(), String> {
        match (self.kind, value) {
            (FieldKind::Checkbox, _) => Ok(()),
            (FieldKind::List, Some(FieldValue::List(list))) => {
                self.validation.validate_list(&list.pruned(), self.label)
            }
            (FieldKind::List, _) => self.validation.validate_list(&[], self.label),
            (FieldKind::Number, v) => self
                .validation
                .validate_number(v.map(FieldValue::as_text).unwrap_or_default(), self.label),
            (_, v) => self
                .validation
                .validate_string(v.map(FieldValue::as_text).unwrap_or_default(), self.label),
        }
    }
}

/// Ordered set of fields making up one entity's edit form
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FormSchema {
    pub fields: &'static [FieldSpec],
}

impl FormSchema {
    pub const fn new(fields: &'static [FieldSpec]) -> Self {
        Self { fields }
    }

    pub fn field(&self, name: &str) -> Option<&'static FieldSpec> {
        self.fields.iter().find(|f| f.name == name)
    }

    pub fn iter(&self) -> impl Iterator<Item = &'static FieldSpec> {
        self.fields.iter()
    }

    /// Validate every field, collecting one message per failing field
    pub fn validate(&self, values: &FormValues) -> Result<(), ValidationErrors> {
        let mut errors = ValidationErrors::new();
        for spec in self.fields {
            if let Err(message) = spec.check(values.get(spec.name)) {
                errors.insert(spec.name, message);
            }
        }
        errors.into_result()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const FIELDS: &[FieldSpec] = &[
        FieldSpec::new("name", "Name", FieldKind::Text).rules(ValidationRules::required()),
        FieldSpec::new("email", "Email", FieldKind::Email)
            .rules(ValidationRules::required().email()),
        FieldSpec::new("capacity", "Capacity", FieldKind::Number)
            .rules(ValidationRules::required().non_negative()),
        FieldSpec::new("achievements", "Achievements", FieldKind::List)
            .rules(ValidationRules::none().non_empty_list()),
        FieldSpec::new("featured", "Featured", FieldKind::Checkbox),
    ];
    const SCHEMA: FormSchema = FormSchema::new(FIELDS);

    #[test]
    fn test_blank_form_reports_every_required_field() {
        let errors = SCHEMA.validate(&FormValues::blank(&SCHEMA)).unwrap_err();
        assert_eq!(errors.get("name"), Some("Name is required"));
        assert_eq!(errors.get("email"), Some("Email is required"));
        assert_eq!(errors.get("capacity"), Some("Capacity is required"));
        assert!(errors.contains("achievements"));
        assert!(!errors.contains("featured"));
    }

    #[test]
    fn test_filled_form_passes() {
        let mut values = FormValues::blank(&SCHEMA);
        values.set_text("name", "Annual Alumni Meet");
        values.set_text("email", "events@example.com");
        values.set_text("capacity", "250");
        values.list_mut("achievements").push("Record attendance");
        assert!(SCHEMA.validate(&values).is_ok());
    }

    #[test]
    fn test_field_lookup() {
        assert_eq!(SCHEMA.field("email").map(|f| f.label), Some("Email"));
        assert!(SCHEMA.field("missing").is_none());
        assert_eq!(SCHEMA.iter().count(), 5);
    }
}
