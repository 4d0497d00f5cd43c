//! Workflow errors raised by the status machine and role checks.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::model::EnrollmentStatus;
use crate::roles::{ClinicAction, StaffRole};

/// A rule of the clinic workflow was broken
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq, Error)]
pub enum WorkflowError {
    #[error("Enrollment cannot move from {from} to {to}")]
    InvalidTransition {
        from: EnrollmentStatus,
        to: EnrollmentStatus,
    },

    #[error("New enrollments must start registered without a diagnosis")]
    InvalidInitialState,

    #[error("Diagnosis already exists for this enrollment.")]
    DuplicateDiagnosis,

    #[error("A consulted enrollment must reference its diagnosis")]
    MissingDiagnosis,

    #[error("The diagnosis of an enrollment cannot be replaced")]
    DiagnosisReplaced,

    #[error("Diagnosis belongs to a different enrollment")]
    DiagnosisMismatch,

    #[error("Only a dispensed enrollment references the revision that dispensed its diagnosis")]
    DispenseReferenceMismatch,

    #[error("Medication for this diagnosis has already been dispensed")]
    AlreadyDispensed,

    #[error("A diagnosis revision must mark the medication as dispensed")]
    DispenseNotRecorded,

    #[error("Enrollment belongs to a program the doctor is not assigned to")]
    ProgramMismatch,

    #[error("{role} is not permitted to {action}")]
    Forbidden { role: StaffRole, action: ClinicAction },
}
