//! Staff roles and what each may do.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::WorkflowError;
use crate::model::EnrollmentStatus;

/// Role a staff member holds in the clinic
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum StaffRole {
    Receptionist,
    Doctor,
    Pharmacist,
    /// Passes every role check
    Admin,
}

/// Operations gated by role
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum ClinicAction {
    ManageStaff,
    ManagePrograms,
    ViewPrograms,
    ManagePatients,
    EnrollPatients,
    ViewPatients,
    RecordDiagnosis,
    DispenseMedication,
    ViewPharmacyQueue,
    ViewOverview,
}

/// Where a signed-in staff member starts
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub enum Landing {
    PatientList,
    DoctorPatients,
    PharmacyQueue,
    AdminOverview,
}

impl StaffRole {
    pub fn may(self, action: ClinicAction) -> bool {
        use ClinicAction::*;
        match self {
            StaffRole::Admin => true,
            StaffRole::Receptionist => matches!(
                action,
                ManagePatients | EnrollPatients | ViewPatients | ViewPrograms
            ),
            StaffRole::Doctor => matches!(action, RecordDiagnosis | ViewPatients | ViewPrograms),
            StaffRole::Pharmacist => matches!(
                action,
                DispenseMedication | ViewPharmacyQueue | ViewPatients | ViewPrograms
            ),
        }
    }

    pub fn authorize(self, action: ClinicAction) -> Result<(), WorkflowError> {
        if self.may(action) {
            Ok(())
        } else {
            Err(WorkflowError::Forbidden { role: self, action })
        }
    }

    pub fn landing(self) -> Landing {
        match self {
            StaffRole::Admin => Landing::AdminOverview,
            StaffRole::Receptionist => Landing::PatientList,
            StaffRole::Doctor => Landing::DoctorPatients,
            StaffRole::Pharmacist => Landing::PharmacyQueue,
        }
    }
}

impl ClinicAction {
    /// Action required to move an enrollment into `status`
    pub fn for_status(status: EnrollmentStatus) -> Option<Self> {
        match status {
            EnrollmentStatus::Registered => None,
            EnrollmentStatus::Consulted => Some(ClinicAction::RecordDiagnosis),
            EnrollmentStatus::Dispensed => Some(ClinicAction::DispenseMedication),
        }
    }
}

impl fmt::Display for StaffRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            StaffRole::Receptionist => "Receptionist",
            StaffRole::Doctor => "Doctor",
            StaffRole::Pharmacist => "Pharmacist",
            StaffRole::Admin => "Admin",
        };
        f.write_str(name)
    }
}

impl fmt::Display for ClinicAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let phrase = match self {
            ClinicAction::ManageStaff => "manage staff",
            ClinicAction::ManagePrograms => "manage programs",
            ClinicAction::ViewPrograms => "view programs",
            ClinicAction::ManagePatients => "manage patients",
            ClinicAction::EnrollPatients => "enroll patients",
            ClinicAction::ViewPatients => "view patients",
            ClinicAction::RecordDiagnosis => "record diagnoses",
            ClinicAction::DispenseMedication => "dispense medication",
            ClinicAction::ViewPharmacyQueue => "view the pharmacy queue",
            ClinicAction::ViewOverview => "view the clinic overview",
        };
        f.write_str(phrase)
    }
}
