//! Aggregate statistics for the administrator overview.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Enrollments counted for one program
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct ProgramCount {
    pub program: String,
    pub count: u64,
}

/// Diagnoses counted for one doctor
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct DoctorCount {
    /// Identifies the doctor; display names need not be unique
    pub agent: String,
    pub doctor: String,
    pub count: u64,
}

/// Clinic-wide totals shown on the administrator overview
#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct ClinicOverview {
    pub patients_count: u64,
    pub total_enrollments: u64,
    /// Sorted by program name
    pub programs_summary: Vec<ProgramCount>,
    /// Sorted by doctor name, then agent
    pub doctor_diagnoses: Vec<DoctorCount>,
    pub dispensed_count: u64,
    pub not_dispensed_count: u64,
}

impl ClinicOverview {
    pub fn total_diagnoses(&self) -> u64 {
        self.dispensed_count + self.not_dispensed_count
    }
}

/// Accumulates records into a [`ClinicOverview`]
#[derive(Debug, Default)]
pub struct OverviewBuilder {
    patients: u64,
    enrollments: u64,
    per_program: BTreeMap<String, u64>,
    /// Keyed by agent, holding the display name and count
    per_doctor: BTreeMap<String, (String, u64)>,
    dispensed: u64,
    not_dispensed: u64,
}

impl OverviewBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn patients(&mut self, count: u64) -> &mut Self {
        self.patients = count;
        self
    }

    pub fn record_enrollment(&mut self, program: &str) -> &mut Self {
        self.enrollments += 1;
        *self.per_program.entry(program.to_string()).or_insert(0) += 1;
        self
    }

    /// Count a diagnosis recorded by the doctor `agent`, shown as `name`
    pub fn record_diagnosis(&mut self, agent: &str, name: &str, dispensed: bool) -> &mut Self {
        self.per_doctor
            .entry(agent.to_string())
            .or_insert_with(|| (name.to_string(), 0))
            .1 += 1;
        if dispensed {
            self.dispensed += 1;
        } else {
            self.not_dispensed += 1;
        }
        self
    }

    fn doctor_rows(&self) -> Vec<DoctorCount> {
        let mut rows: Vec<DoctorCount> = self
            .per_doctor
            .iter()
            .map(|(agent, (name, count))| DoctorCount {
                agent: agent.clone(),
                doctor: name.clone(),
                count: *count,
            })
            .collect();
        rows.sort_by(|a, b| a.doctor.cmp(&b.doctor).then_with(|| a.agent.cmp(&b.agent)));
        rows
    }

    pub fn build(&self) -> ClinicOverview {
        ClinicOverview {
            patients_count: self.patients,
            total_enrollments: self.enrollments,
            programs_summary: self
                .per_program
                .iter()
                .map(|(program, count)| ProgramCount {
                    program: program.clone(),
                    count: *count,
                })
                .collect(),
            doctor_diagnoses: self.doctor_rows(),
            dispensed_count: self.dispensed,
            not_dispensed_count: self.not_dispensed,
        }
    }
}

/// Headline numbers for the dashboard tiles
#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct DashboardCounts {
    pub total_patients: u64,
    pub total_enrollments: u64,
    pub total_diagnoses: u64,
    pub total_dispensed: u64,
    pub total_pending: u64,
}

impl From<&ClinicOverview> for DashboardCounts {
    fn from(overview: &ClinicOverview) -> Self {
        Self {
            total_patients: overview.patients_count,
            total_enrollments: overview.total_enrollments,
            total_diagnoses: overview.total_diagnoses(),
            total_dispensed: overview.dispensed_count,
            total_pending: overview.not_dispensed_count,
        }
    }
}
