//! Read-only view over a parsed YAML definition.
//!
//! Every lookup distinguishes a key that is absent from a key that is present
//! with the wrong shape. Only absence of a required key yields
//! [`DomainError::MissingFields`]; wrong shapes yield
//! [`DomainError::InvalidField`]. An explicit `null` on an optional key is
//! treated like an absent key.

use crate::error::{AppResult, DomainError};
use serde_yaml::{Mapping, Sequence, Value};

#[derive(Debug, Clone, Copy)]
pub struct Definition<'a> {
    map: &'a Mapping,
}

impl<'a> Definition<'a> {
    pub fn new(map: &'a Mapping) -> Self {
        Self { map }
    }

    /// Wraps a value that must itself be a mapping. `what` names the value in
    /// the error when it is not.
    pub fn from_value(value: &'a Value, what: &'static str) -> AppResult<Self> {
        value.as_mapping().map(Self::new).ok_or(DomainError::InvalidField {
            field: what,
            expected: "a mapping",
        })
    }

    pub fn mapping(&self) -> &'a Mapping {
        self.map
    }

    pub fn contains(&self, field: &str) -> bool {
        self.map.contains_key(field)
    }

    /// Fails with every field of `required` that is absent, in the order given.
    pub fn require(&self, required: &[&'static str]) -> AppResult<()> {
        let missing: Vec<&'static str> = required.iter().copied().filter(|f| !self.contains(f)).collect();
        if missing.is_empty() {
            Ok(())
        } else {
            Err(DomainError::MissingFields(missing))
        }
    }

    fn optional(&self, field: &str) -> Option<&'a Value> {
        self.map.get(field).filter(|v| !v.is_null())
    }

    fn required(&self, field: &'static str) -> AppResult<&'a Value> {
        self.map
            .get(field)
            .ok_or_else(|| DomainError::MissingFields(vec![field]))
    }

    pub fn str(&self, field: &'static str) -> AppResult<&'a str> {
        self.required(field)?.as_str().ok_or(DomainError::InvalidField {
            field,
            expected: "a string",
        })
    }

    pub fn opt_str(&self, field: &'static str) -> AppResult<Option<&'a str>> {
        match self.optional(field) {
            None => Ok(None),
            Some(v) => v.as_str().map(Some).ok_or(DomainError::InvalidField {
                field,
                expected: "a string",
            }),
        }
    }

    pub fn seq(&self, field: &'static str) -> AppResult<&'a Sequence> {
        self.required(field)?.as_sequence().ok_or(DomainError::InvalidField {
            field,
            expected: "a list",
        })
    }

    /// Optional list of strings; absent or `null` gives an empty list.
    pub fn str_list(&self, field: &'static str) -> AppResult<Vec<String>> {
        let Some(v) = self.optional(field) else {
            return Ok(Vec::new());
        };
        let invalid = DomainError::InvalidField {
            field,
            expected: "a list of strings",
        };
        let Some(items) = v.as_sequence() else {
            return Err(invalid);
        };
        items
            .iter()
            .map(|item| item.as_str().map(str::to_string))
            .collect::<Option<Vec<_>>>()
            .ok_or(invalid)
    }
}
