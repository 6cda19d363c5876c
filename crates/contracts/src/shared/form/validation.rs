//! Validation rules for form fields

use chrono::{NaiveDate, NaiveTime};
use std::collections::BTreeMap;
use thiserror::Error;

/// Textual formats a non-empty value must match
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextFormat {
    Email,
    Url,
    /// `YYYY-MM-DD`
    Date,
    /// `HH:MM` (24h) or `HH:MM AM`
    Time,
}

/// Validation rules for a field
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ValidationRules {
    pub required: bool,
    pub min: Option<f64>,
    pub min_items: Option<usize>,
    pub format: Option<TextFormat>,
}

impl ValidationRules {
    /// Create empty validation rules (all optional, no constraints)
    pub const fn none() -> Self {
        Self {
            required: false,
            min: None,
            min_items: None,
            format: None,
        }
    }

    /// Create validation rules for required field
    pub const fn required() -> Self {
        Self {
            required: true,
            min: None,
            min_items: None,
            format: None,
        }
    }

    pub const fn email(self) -> Self {
        Self {
            format: Some(TextFormat::Email),
            ..self
        }
    }

    pub const fn url(self) -> Self {
        Self {
            format: Some(TextFormat::Url),
            ..self
        }
    }

    pub const fn date(self) -> Self {
        Self {
            format: Some(TextFormat::Date),
            ..self
        }
    }

    pub const fn time(self) -> Self {
        Self {
            format: Some(TextFormat::Time),
            ..self
        }
    }

    /// Numeric value must be >= 0
    pub const fn non_negative(self) -> Self {
        Self {
            min: Some(0.0),
            ..self
        }
    }

    /// List must keep at least one non-blank entry
    pub const fn non_empty_list(self) -> Self {
        Self {
            min_items: Some(1),
            ..self
        }
    }

    /// Check if field is required
    pub const fn is_required(&self) -> bool {
        self.required || self.min_items.is_some()
    }

    /// Validate a string value against the rules.
    /// Format checks only run on non-empty input.
    pub fn validate_string(&self, value: &str, field_label: &str) -> Result<(), String> {
        let value = value.trim();
        if value.is_empty() {
            if self.required {
                return Err(format!("{} is required", field_label));
            }
            return Ok(());
        }

        match self.format {
            Some(TextFormat::Email) if !is_valid_email(value) => {
                Err("Invalid email address".to_string())
            }
            Some(TextFormat::Url) if !is_valid_url(value) => Err("Invalid URL".to_string()),
            Some(TextFormat::Date) if !is_valid_date(value) => {
                Err(format!("{} must be a date (YYYY-MM-DD)", field_label))
            }
            Some(TextFormat::Time) if !is_valid_time(value) => {
                Err(format!("{} must be a time (HH:MM)", field_label))
            }
            _ => Ok(()),
        }
    }

    /// Validate a numeric input (as typed) against required/min rules
    pub fn validate_number(&self, raw: &str, field_label: &str) -> Result<(), String> {
        let raw = raw.trim();
        if raw.is_empty() {
            if self.required {
                return Err(format!("{} is required", field_label));
            }
            return Ok(());
        }

        let value: f64 = raw
            .parse()
            .map_err(|_| format!("{} must be a number", field_label))?;
        if !value.is_finite() {
            return Err(format!("{} must be a number", field_label));
        }

        if let Some(min) = self.min {
            if value < min {
                if min == 0.0 {
                    return Err(format!("{} must not be negative", field_label));
                }
                return Err(format!("{} must be at least {}", field_label, min));
            }
        }

        Ok(())
    }

    /// Validate the pruned entries of a list field
    pub fn validate_list(&self, entries: &[String], field_label: &str) -> Result<(), String> {
        let min = self.min_items.unwrap_or(usize::from(self.required));
        if entries.len() < min {
            return Err(format!("{} needs at least {} entry", field_label, min));
        }
        Ok(())
    }
}

/// Structural e-mail check: `local@domain.tld`, no whitespace
pub fn is_valid_email(value: &str) -> bool {
    if value.chars().any(char::is_whitespace) {
        return false;
    }
    let Some((local, domain)) = value.split_once('@') else {
        return false;
    };
    if local.is_empty() || domain.contains('@') {
        return false;
    }
    let labels: Vec<&str> = domain.split('.').collect();
    labels.len() >= 2 && labels.iter().all(|l| !l.is_empty())
}

/// Absolute http(s) URL with a non-empty host
pub fn is_valid_url(value: &str) -> bool {
    if value.chars().any(char::is_whitespace) {
        return false;
    }
    let rest = value
        .strip_prefix("https://")
        .or_else(|| value.strip_prefix("http://"));
    let Some(rest) = rest else {
        return false;
    };
    let host = rest
        .split(|c| c == '/' || c == '?' || c == '#')
        .next()
        .unwrap_or_default();
    let host = host.rsplit('@').next().unwrap_or_default();
    let host = host.split(':').next().unwrap_or_default();
    !host.is_empty() && !host.starts_with('.') && !host.ends_with('.')
}

pub fn is_valid_date(value: &str) -> bool {
    NaiveDate::parse_from_str(value, "%Y-%m-%d").is_ok()
}

pub fn is_valid_time(value: &str) -> bool {
    NaiveTime::parse_from_str(value, "%H:%M").is_ok()
        || NaiveTime::parse_from_str(value, "%I:%M %p").is_ok()
}

/// Field-scoped validation failures, keyed by field name
#[derive(Debug, Clone, Default, PartialEq, Eq, Error)]
#[error("{} field(s) failed validation", .0.len())]
pub struct ValidationErrors(BTreeMap<String, String>);

impl ValidationErrors {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, field: impl Into<String>, message: impl Into<String>) {
        self.0.insert(field.into(), message.into());
    }

    pub fn remove(&mut self, field: &str) -> Option<String> {
        self.0.remove(field)
    }

    pub fn get(&self, field: &str) -> Option<&str> {
        self.0.get(field).map(String::as_str)
    }

    pub fn contains(&self, field: &str) -> bool {
        self.0.contains_key(field)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    pub fn into_result(self) -> Result<(), Self> {
        if self.is_empty() {
            Ok(())
        } else {
            Err(self)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_required_string() {
        let rules = ValidationRules::required();
        assert_eq!(
            rules.validate_string("   ", "Name"),
            Err("Name is required".to_string())
        );
        assert!(rules.validate_string("Dr. Sarah Wilson", "Name").is_ok());
    }

    #[test]
    fn test_optional_format_skips_empty() {
        let rules = ValidationRules::none().url();
        assert!(rules.validate_string("", "LinkedIn").is_ok());
        assert_eq!(
            rules.validate_string("www.example.com", "LinkedIn"),
            Err("Invalid URL".to_string())
        );
    }

    #[test]
    fn test_required_email_rejects_empty_and_malformed() {
        let rules = ValidationRules::required().email();
        assert!(rules.validate_string("", "Email").is_err());
        assert_eq!(
            rules.validate_string("contact@", "Email"),
            Err("Invalid email address".to_string())
        );
        assert!(rules
            .validate_string("contact@techsolutions.com", "Email")
            .is_ok());
    }

    #[test]
    fn test_email_shapes() {
        assert!(is_valid_email("sarah.wilson@example.com"));
        assert!(!is_valid_email("sarah wilson@example.com"));
        assert!(!is_valid_email("@example.com"));
        assert!(!is_valid_email("a@b@example.com"));
        assert!(!is_valid_email("a@example"));
        assert!(!is_valid_email("a@example..com"));
    }

    #[test]
    fn test_url_shapes() {
        assert!(is_valid_url("https://techsolutions.com"));
        assert!(is_valid_url("http://localhost:3000/path?q=1"));
        assert!(!is_valid_url("ftp://techsolutions.com"));
        assert!(!is_valid_url("https://"));
        assert!(!is_valid_url("https:// spaced.com"));
    }

    #[test]
    fn test_date_and_time() {
        let date = ValidationRules::required().date();
        assert!(date.validate_string("2025-03-15", "Date").is_ok());
        assert!(date.validate_string("15.03.2025", "Date").is_err());

        let time = ValidationRules::required().time();
        assert!(time.validate_string("14:30", "Time").is_ok());
        assert!(time.validate_string("10:00 AM", "Time").is_ok());
        assert!(time.validate_string("25:00", "Time").is_err());
    }

    #[test]
    fn test_non_negative_number() {
        let rules = ValidationRules::required().non_negative();
        assert!(rules.validate_number("0", "Capacity").is_ok());
        assert!(rules.validate_number("150", "Capacity").is_ok());
        assert_eq!(
            rules.validate_number("-1", "Capacity"),
            Err("Capacity must not be negative".to_string())
        );
        assert_eq!(
            rules.validate_number("many", "Capacity"),
            Err("Capacity must be a number".to_string())
        );
        assert!(rules.validate_number("", "Capacity").is_err());
        assert!(ValidationRules::none().validate_number("", "Capacity").is_ok());
    }

    #[test]
    fn test_non_empty_list() {
        let rules = ValidationRules::none().non_empty_list();
        assert!(rules.is_required());
        assert!(rules.validate_list(&[], "Achievements").is_err());
        assert!(rules
            .validate_list(&["Best Teacher Award 2023".to_string()], "Achievements")
            .is_ok());
        assert!(ValidationRules::none().validate_list(&[], "Documents").is_ok());
    }

    #[test]
    fn test_errors_collection() {
        let mut errors = ValidationErrors::new();
        assert!(errors.clone().into_result().is_ok());
        errors.insert("name", "Name is required");
        assert!(errors.contains("name"));
        assert_eq!(errors.get("name"), Some("Name is required"));
        assert_eq!(errors.to_string(), "1 field(s) failed validation");
        assert!(errors.into_result().is_err());
    }
}
