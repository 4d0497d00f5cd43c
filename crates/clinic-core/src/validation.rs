//! Input validation with accumulated, coded errors
//!
//! Provides validators for:
//! - Program names
//! - Patient demographics and contacts
//! - Staff display names
//! - Diagnosis text
//! - Enrollment dates

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

use crate::limits::{
    ENROLLMENT_DATE_FORMAT, MAX_CONTACT_LEN, MAX_NAME_LEN, MAX_PROGRAM_NAME_LEN,
};

/// Validation error with detailed context
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct ValidationError {
    pub field: String,
    pub message: String,
    pub code: ValidationErrorCode,
}

/// Specific validation error codes for programmatic handling
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub enum ValidationErrorCode {
    Required,
    InvalidFormat,
    OutOfRange,
    TooLong,
    InvalidCharacters,
    DuplicateValue,
    InvalidReference,
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {} ({:?})", self.field, self.message, self.code)
    }
}

/// One or more fields failed validation
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq, Error)]
#[error("Validation failed: {}", join_errors(.errors))]
pub struct ValidationFailure {
    pub errors: Vec<ValidationError>,
}

fn join_errors(errors: &[ValidationError]) -> String {
    errors
        .iter()
        .map(|e| e.to_string())
        .collect::<Vec<_>>()
        .join("; ")
}

impl ValidationFailure {
    pub fn single(field: &str, message: &str, code: ValidationErrorCode) -> Self {
        Self {
            errors: vec![ValidationError {
                field: field.to_string(),
                message: message.to_string(),
                code,
            }],
        }
    }

    /// Error shown when a second patient registers with a known contact
    pub fn duplicate_contact() -> Self {
        Self::single(
            "contact",
            "Patient with this contact already exists.",
            ValidationErrorCode::DuplicateValue,
        )
    }

    pub fn duplicate_program(name: &str) -> Self {
        Self::single(
            "name",
            &format!("Program '{}' already exists.", name),
            ValidationErrorCode::DuplicateValue,
        )
    }

    pub fn has_code(&self, code: &ValidationErrorCode) -> bool {
        self.errors.iter().any(|e| &e.code == code)
    }
}

/// Validation result that can accumulate multiple errors
#[derive(Clone, Debug, Default)]
pub struct ValidationResult {
    pub errors: Vec<ValidationError>,
}

impl ValidationResult {
    pub fn new() -> Self {
        Self { errors: Vec::new() }
    }

    pub fn add_error(&mut self, field: &str, message: &str, code: ValidationErrorCode) {
        self.errors.push(ValidationError {
            field: field.to_string(),
            message: message.to_string(),
            code,
        });
    }

    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn into_result(self) -> Result<(), ValidationFailure> {
        if self.is_valid() {
            Ok(())
        } else {
            Err(ValidationFailure {
                errors: self.errors,
            })
        }
    }

    pub fn merge(&mut self, other: ValidationResult) {
        self.errors.extend(other.errors);
    }
}

/// Required, trimmed text no longer than `max` characters
fn check_text(result: &mut ValidationResult, field: &str, value: &str, max: usize) {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        result.add_error(field, &format!("{} is required", field), ValidationErrorCode::Required);
        return;
    }
    if trimmed.chars().count() > max {
        result.add_error(
            field,
            &format!("{} must be at most {} characters", field, max),
            ValidationErrorCode::TooLong,
        );
    }
    if trimmed.chars().any(|c| c.is_control()) {
        result.add_error(
            field,
            &format!("{} contains control characters", field),
            ValidationErrorCode::InvalidCharacters,
        );
    }
}

/// Validate a program name
pub fn validate_program_name(name: &str) -> ValidationResult {
    let mut result = ValidationResult::new();
    check_text(&mut result, "name", name, MAX_PROGRAM_NAME_LEN);
    result
}

/// Validate patient demographics
///
/// Age is unsigned so it cannot be negative; gender is a closed enum.
pub fn validate_patient(name: &str, contact: &str) -> ValidationResult {
    let mut result = ValidationResult::new();
    check_text(&mut result, "name", name, MAX_NAME_LEN);
    result.merge(validate_contact(contact));
    result
}

pub fn validate_contact(contact: &str) -> ValidationResult {
    let mut result = ValidationResult::new();
    check_text(&mut result, "contact", contact, MAX_CONTACT_LEN);
    result
}

/// Validate a staff member's display name
pub fn validate_display_name(name: &str) -> ValidationResult {
    let mut result = ValidationResult::new();
    check_text(&mut result, "display_name", name, MAX_NAME_LEN);
    result
}

/// Both diagnosis and recommendations are required
pub fn validate_clinical_notes(diagnosis: &str, recommendations: &str) -> ValidationResult {
    let mut result = ValidationResult::new();
    if diagnosis.trim().is_empty() {
        result.add_error("diagnosis", "All fields are required.", ValidationErrorCode::Required);
    }
    if recommendations.trim().is_empty() {
        result.add_error(
            "recommendations",
            "All fields are required.",
            ValidationErrorCode::Required,
        );
    }
    result
}

/// Parse the date an enrollment was made
pub fn parse_enrollment_date(value: &str) -> Result<NaiveDate, ValidationFailure> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(ValidationFailure::single(
            "enrolled_on",
            "Enrollment date is required",
            ValidationErrorCode::Required,
        ));
    }
    NaiveDate::parse_from_str(trimmed, ENROLLMENT_DATE_FORMAT).map_err(|_| {
        ValidationFailure::single(
            "enrolled_on",
            "Enrollment date must be in YYYY-MM-DD format",
            ValidationErrorCode::InvalidFormat,
        )
    })
}

/// Trim free text before it is stored
pub fn normalize_text(value: &str) -> String {
    value.trim().to_string()
}
