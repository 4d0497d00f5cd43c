//! Mycelix-Clinic Core Rules
//!
//! Host-independent business rules shared by the clinic zomes:
//! - Enrollment status machine (registered → consulted → dispensed)
//! - Staff roles and the permission matrix
//! - Field validation with accumulated, coded errors
//! - Patient / enrollment query matching
//! - Aggregate statistics for the administrator overview
//!
//! Integrity zomes call into this crate from their validation callbacks and
//! coordinator zomes from their extern functions, so both sides enforce the
//! same rules.

pub mod error;
pub mod limits;
pub mod model;
pub mod query;
pub mod roles;
pub mod stats;
pub mod validation;

pub use chrono::NaiveDate;

pub use error::*;
pub use model::*;
pub use query::*;
pub use roles::*;
pub use stats::*;
pub use validation::*;
