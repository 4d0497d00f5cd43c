//! Doctor Page Tests
//!
//! What a doctor sees of the register: their program's patients, searched
//! by name, and a patient view limited to their program.

#[cfg(test)]
mod doctor_page_scenarios {
    use crate::fixture::*;
    use clinic_core::{Gender, StaffRole, WorkflowError};

    struct Ward {
        clinic: TestClinic,
        doctor: TestStaff,
        program_b: usize,
        john: usize,
        jane: usize,
        amina: usize,
        amina_a: Vec<usize>,
    }

    /// - John Doe, twice in Program A
    /// - Jane Doe, Program B only
    /// - Amina Otieno, Program A and Program B
    fn ward() -> Ward {
        let Staffed {
            mut clinic,
            admin,
            receptionist,
            doctor,
            program,
            ..
        } = staffed_clinic();
        let program_b = clinic.create_program(&admin, "Program B").unwrap();

        let john = clinic
            .register_patient(&receptionist, "John Doe", 30, Gender::Male, "1234567890")
            .unwrap();
        let jane = clinic
            .register_patient(&receptionist, "Jane Doe", 28, Gender::Female, "0711000222")
            .unwrap();
        let amina = clinic
            .register_patient(&receptionist, "Amina Otieno", 41, Gender::Female, "0722000111")
            .unwrap();

        clinic.enroll(&receptionist, john, program, "2024-12-01").unwrap();
        clinic.enroll(&receptionist, john, program, "2025-01-15").unwrap();
        clinic.enroll(&receptionist, jane, program_b, "2025-01-15").unwrap();
        let amina_first = clinic.enroll(&receptionist, amina, program, "2025-01-15").unwrap();
        clinic.enroll(&receptionist, amina, program_b, "2025-03-02").unwrap();

        Ward {
            clinic,
            doctor,
            program_b,
            john,
            jane,
            amina,
            amina_a: vec![amina_first],
        }
    }

    /// Scenario: a patient enrolled twice is listed once
    #[test]
    fn scenario_patients_listed_once() {
        let w = ward();
        assert_eq!(
            w.clinic.doctor_patients(&w.doctor, "").unwrap(),
            vec![w.amina, w.john]
        );
    }

    /// Scenario: the search is one case-insensitive piece of the name
    #[test]
    fn scenario_name_search() {
        let w = ward();
        assert_eq!(w.clinic.doctor_patients(&w.doctor, "DOE").unwrap(), vec![w.john]);
        assert_eq!(w.clinic.doctor_patients(&w.doctor, "n do").unwrap(), vec![w.john]);
        // not split into terms
        assert!(w.clinic.doctor_patients(&w.doctor, "john otieno").unwrap().is_empty());
        // contact is not searched
        assert!(w.clinic.doctor_patients(&w.doctor, "0722").unwrap().is_empty());
    }

    /// Scenario: the other program's doctor sees the other register
    #[test]
    fn scenario_second_program_doctor() {
        let w = ward();
        let other = TestStaff::doctor("Dr. Achieng", w.program_b);
        assert_eq!(
            w.clinic.doctor_patients(&other, "").unwrap(),
            vec![w.amina, w.jane]
        );
    }

    /// Scenario: viewing a patient shows only enrollments in the doctor's program
    #[test]
    fn scenario_view_patient_scoped_to_program() {
        let w = ward();
        assert_eq!(w.clinic.doctor_view_patient(&w.doctor, w.amina).unwrap(), w.amina_a);
        assert!(w.clinic.doctor_view_patient(&w.doctor, w.jane).unwrap().is_empty());
        assert_eq!(
            w.clinic.doctor_view_patient(&w.doctor, w.john).unwrap().len(),
            2
        );
        assert_eq!(
            w.clinic.doctor_view_patient(&w.doctor, 99).unwrap_err(),
            TestClinicError::NotFound("patient")
        );
    }

    /// Scenario: only doctors with a program reach these pages
    #[test]
    fn scenario_doctor_pages_need_a_doctor() {
        let w = ward();
        let pharmacist = TestStaff::new("Peter", StaffRole::Pharmacist);
        assert!(matches!(
            w.clinic.doctor_patients(&pharmacist, "").unwrap_err(),
            TestClinicError::Workflow(WorkflowError::Forbidden { .. })
        ));

        let unassigned = TestStaff::new("Dr. Kamau", StaffRole::Doctor);
        assert_eq!(
            w.clinic.doctor_view_patient(&unassigned, w.john).unwrap_err(),
            TestClinicError::NotFound("doctor profile")
        );
    }
}
