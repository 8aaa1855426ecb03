//! Form binding: raw submitted key/value pairs onto typed form models
//!
//! Binding is a pure step. A `DataBinder` applies every allowed field to a
//! fresh target, then runs the target's `validator` rules. Fields on the
//! binder's deny-list are never applied, whatever the client sends.

use std::collections::BTreeMap;
use validator::{Validate, ValidationErrors};

/// Form model that can receive raw submitted values by field name
pub trait Bindable: Default {
    /// Apply one submitted value. Returns false for unknown fields.
    fn bind_field(&mut self, name: &str, value: String) -> bool;
}

/// Single field-level error
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldError {
    pub code: String,
    pub message: String,
}

/// Field-level errors keyed by field name
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldErrors {
    fields: BTreeMap<String, Vec<FieldError>>,
}

impl FieldErrors {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record an error against a field
    pub fn reject(&mut self, field: impl Into<String>, code: impl Into<String>, message: impl Into<String>) {
        self.fields.entry(field.into()).or_default().push(FieldError {
            code: code.into(),
            message: message.into(),
        });
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Total number of errors across all fields
    pub fn len(&self) -> usize {
        self.fields.values().map(Vec::len).sum()
    }

    pub fn has_field(&self, field: &str) -> bool {
        self.fields.contains_key(field)
    }

    pub fn get(&self, field: &str) -> &[FieldError] {
        self.fields.get(field).map(Vec::as_slice).unwrap_or_default()
    }

    /// Messages for a field, joined for display
    pub fn message(&self, field: &str) -> Option<String> {
        let errors = self.get(field);
        if errors.is_empty() {
            return None;
        }
        Some(
            errors
                .iter()
                .map(|e| e.message.as_str())
                .collect::<Vec<_>>()
                .join("; "),
        )
    }
}

impl From<ValidationErrors> for FieldErrors {
    fn from(errors: ValidationErrors) -> Self {
        let mut out = FieldErrors::new();
        for (field, errs) in errors.field_errors() {
            for err in errs.iter() {
                let message = err
                    .message
                    .as_ref()
                    .map(|m| m.to_string())
                    .unwrap_or_else(|| err.code.to_string());
                out.reject(field.to_string(), err.code.to_string(), message);
            }
        }
        out
    }
}

/// Result of binding: the populated target, valid or not, plus its errors.
///
/// The target is kept on failure so forms can be redisplayed with the
/// submitted values.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BindingResult<T> {
    target: T,
    errors: FieldErrors,
}

impl<T> BindingResult<T> {
    pub fn new(target: T, errors: FieldErrors) -> Self {
        Self { target, errors }
    }

    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }

    pub fn target(&self) -> &T {
        &self.target
    }

    pub fn errors(&self) -> &FieldErrors {
        &self.errors
    }

    pub fn reject_value(&mut self, field: &str, code: &str, message: &str) {
        self.errors.reject(field, code, message);
    }

    /// `Ok(target)` when valid, otherwise the target with its errors
    pub fn into_result(self) -> Result<T, (T, FieldErrors)> {
        if self.errors.is_empty() {
            Ok(self.target)
        } else {
            Err((self.target, self.errors))
        }
    }
}

/// Binds raw fields onto `Bindable` targets, skipping disallowed fields
#[derive(Debug, Clone, Default)]
pub struct DataBinder {
    disallowed: Vec<String>,
}

impl DataBinder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Never bind `field` from user input
    pub fn disallow(mut self, field: impl Into<String>) -> Self {
        self.disallowed.push(field.into());
        self
    }

    pub fn is_allowed(&self, field: &str) -> bool {
        !self.disallowed.iter().any(|d| d.eq_ignore_ascii_case(field))
    }

    /// Apply allowed fields without validating
    pub fn bind_only<T: Bindable>(&self, fields: &[(String, String)]) -> T {
        let mut target = T::default();
        for (name, value) in fields {
            if !self.is_allowed(name) {
                tracing::debug!(field = %name, "Skipping disallowed form field");
                continue;
            }
            if !target.bind_field(name, value.clone()) {
                tracing::trace!(field = %name, "Ignoring unknown form field");
            }
        }
        target
    }

    /// Apply allowed fields, then validate the target
    pub fn bind<T: Bindable + Validate>(&self, fields: &[(String, String)]) -> BindingResult<T> {
        let target: T = self.bind_only(fields);
        let errors = match target.validate() {
            Ok(()) => FieldErrors::new(),
            Err(errors) => errors.into(),
        };
        BindingResult::new(target, errors)
    }
}
