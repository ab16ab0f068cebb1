//! Field-level validation errors.
//!
//! Serialized as a map from field name to messages, e.g.
//! `{"artist_contact": ["can't be blank"]}`.

use serde::Serialize;
use std::collections::BTreeMap;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct ValidationErrors {
    fields: BTreeMap<String, Vec<String>>,
}

impl ValidationErrors {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, field: &str, message: impl Into<String>) {
        self.fields
            .entry(field.to_string())
            .or_default()
            .push(message.into());
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    pub fn len(&self) -> usize {
        self.fields.values().map(Vec::len).sum()
    }

    /// Messages recorded for one field (empty if none).
    pub fn on(&self, field: &str) -> &[String] {
        self.fields.get(field).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn fields(&self) -> impl Iterator<Item = &str> {
        self.fields.keys().map(String::as_str)
    }

    /// `Ok(())` when nothing was recorded, otherwise the collected errors.
    pub fn into_result(self) -> Result<(), ValidationErrors> {
        if self.is_empty() {
            Ok(())
        } else {
            Err(self)
        }
    }
}

impl std::fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let parts: Vec<String> = self
            .fields
            .iter()
            .flat_map(|(field, messages)| messages.iter().map(move |m| format!("{} {}", field, m)))
            .collect();
        write!(f, "{}", parts.join(", "))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_serializes_as_field_map() {
        let mut errors = ValidationErrors::new();
        errors.add("travel_party_count", "can't be blank");
        errors.add("travel_party_count", "must be greater than 0");
        errors.add("artist_contact", "can't be blank");

        assert_eq!(
            serde_json::to_value(&errors).unwrap(),
            serde_json::json!({
                "artist_contact": ["can't be blank"],
                "travel_party_count": ["can't be blank", "must be greater than 0"],
            })
        );
        assert_eq!(errors.len(), 3);
    }

    #[test]
    fn test_into_result() {
        assert!(ValidationErrors::new().into_result().is_ok());

        let mut errors = ValidationErrors::new();
        errors.add("fixed_fee", "can't be blank");
        let err = errors.into_result().unwrap_err();
        assert_eq!(err.on("fixed_fee"), ["can't be blank".to_string()]);
        assert!(err.on("artist_contact").is_empty());
        assert_eq!(err.to_string(), "fixed_fee can't be blank");
    }
}
