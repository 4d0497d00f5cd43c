//! Enumerations and state rules of the clinic data model.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::WorkflowError;
use crate::validation::{ValidationErrorCode, ValidationFailure};

/// Patient gender as recorded at registration
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum Gender {
    Male,
    Female,
    Other,
}

impl Gender {
    pub const ALL: [Gender; 3] = [Gender::Male, Gender::Female, Gender::Other];

    pub fn as_str(&self) -> &'static str {
        match self {
            Gender::Male => "Male",
            Gender::Female => "Female",
            Gender::Other => "Other",
        }
    }
}

impl fmt::Display for Gender {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Gender {
    type Err = ValidationFailure;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        Gender::ALL
            .into_iter()
            .find(|g| g.as_str().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| {
                ValidationFailure::single(
                    "gender",
                    &format!("'{}' is not one of Male, Female, Other", wanted),
                    ValidationErrorCode::InvalidFormat,
                )
            })
    }
}

/// Lifecycle of an enrollment
///
/// Ordered so that `Registered < Consulted < Dispensed`.
#[derive(Clone, Copy, Debug, Default, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[serde(rename_all = "lowercase")]
pub enum EnrollmentStatus {
    #[default]
    Registered,
    Consulted,
    Dispensed,
}

impl EnrollmentStatus {
    pub const ALL: [EnrollmentStatus; 3] = [
        EnrollmentStatus::Registered,
        EnrollmentStatus::Consulted,
        EnrollmentStatus::Dispensed,
    ];

    /// The only status this one may advance to
    pub fn next(self) -> Option<Self> {
        match self {
            EnrollmentStatus::Registered => Some(EnrollmentStatus::Consulted),
            EnrollmentStatus::Consulted => Some(EnrollmentStatus::Dispensed),
            EnrollmentStatus::Dispensed => None,
        }
    }

    pub fn is_final(self) -> bool {
        self.next().is_none()
    }

    /// Stored value, as used in queries and payloads
    pub fn as_str(self) -> &'static str {
        match self {
            EnrollmentStatus::Registered => "registered",
            EnrollmentStatus::Consulted => "consulted",
            EnrollmentStatus::Dispensed => "dispensed",
        }
    }

    /// Human label shown to staff
    pub fn label(self) -> &'static str {
        match self {
            EnrollmentStatus::Registered => "Registered",
            EnrollmentStatus::Consulted => "Consulted",
            EnrollmentStatus::Dispensed => "Medicated",
        }
    }

    /// Accept exactly one forward step
    pub fn check_transition(self, to: Self) -> Result<(), WorkflowError> {
        if self.next() == Some(to) {
            Ok(())
        } else {
            Err(WorkflowError::InvalidTransition { from: self, to })
        }
    }

    pub fn advance_to(self, to: Self) -> Result<Self, WorkflowError> {
        self.check_transition(to).map(|_| to)
    }
}

impl fmt::Display for EnrollmentStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for EnrollmentStatus {
    type Err = ValidationFailure;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        EnrollmentStatus::ALL
            .into_iter()
            .find(|st| st.as_str().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| {
                ValidationFailure::single(
                    "status",
                    &format!("'{}' is not a valid enrollment status", wanted),
                    ValidationErrorCode::InvalidFormat,
                )
            })
    }
}

/// The mutable part of an enrollment, generic over the diagnosis reference
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EnrollmentState<D> {
    pub status: EnrollmentStatus,
    pub diagnosis: Option<D>,
}

impl<D: PartialEq> EnrollmentState<D> {
    /// A freshly created enrollment
    pub fn check_initial(&self) -> Result<(), WorkflowError> {
        if self.status == EnrollmentStatus::Registered && self.diagnosis.is_none() {
            Ok(())
        } else {
            Err(WorkflowError::InvalidInitialState)
        }
    }

    /// A revision of `self` into `next`
    pub fn check_revision(&self, next: &Self) -> Result<(), WorkflowError> {
        self.status.check_transition(next.status)?;

        match (&self.diagnosis, &next.diagnosis) {
            (_, None) => Err(WorkflowError::MissingDiagnosis),
            (Some(before), Some(after)) if before != after => {
                Err(WorkflowError::DiagnosisReplaced)
            }
            _ => Ok(()),
        }
    }
}

/// An enrollment carries the dispensing revision of its diagnosis exactly
/// when it is dispensed
pub fn check_dispense_reference(
    status: EnrollmentStatus,
    has_reference: bool,
) -> Result<(), WorkflowError> {
    if (status == EnrollmentStatus::Dispensed) == has_reference {
        Ok(())
    } else {
        Err(WorkflowError::DispenseReferenceMismatch)
    }
}

/// A diagnosis may be revised only to record the dispense, and only once
pub fn check_dispense_revision(
    was_dispensed: bool,
    now_dispensed: bool,
) -> Result<(), WorkflowError> {
    if was_dispensed {
        return Err(WorkflowError::AlreadyDispensed);
    }
    if !now_dispensed {
        return Err(WorkflowError::DispenseNotRecorded);
    }
    Ok(())
}
