//! Field limits and formats shared by validation and queries.

/// Maximum characters in a patient or staff display name.
pub const MAX_NAME_LEN: usize = 100;

/// Maximum characters in a patient contact.
pub const MAX_CONTACT_LEN: usize = 100;

/// Maximum characters in a program name.
pub const MAX_PROGRAM_NAME_LEN: usize = 100;

/// Enrollment dates are exchanged as ISO calendar dates.
pub const ENROLLMENT_DATE_FORMAT: &str = "%Y-%m-%d";
