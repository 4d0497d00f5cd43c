//! Patient and enrollment list filters.
//!
//! Queries are generic over `P`, the program reference, so the same matching
//! rules run against action hashes in the zomes and plain ids in tests.

use chrono::{Datelike, NaiveDate, Weekday};
use serde::{Deserialize, Serialize};

use crate::model::EnrollmentStatus;

/// What a patient filter needs to know about one enrollment
#[derive(Clone, Debug, PartialEq)]
pub struct EnrollmentFacts<P> {
    pub program: P,
    pub enrolled_on: NaiveDate,
}

/// Filters accepted when listing patients
///
/// Every enrollment criterion may be satisfied by a different enrollment of
/// the same patient.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct PatientQuery<P> {
    /// Terms that must each appear in the name or contact
    pub search: Option<String>,
    /// Case-insensitive substring of the contact
    pub contact: Option<String>,
    /// Enrollment date, ISO 8601 or `YYYY-M-D`
    pub date: Option<String>,
    pub month: Option<u32>,
    pub year: Option<i32>,
    pub program: Option<P>,
}

impl<P> Default for PatientQuery<P> {
    fn default() -> Self {
        Self {
            search: None,
            contact: None,
            date: None,
            month: None,
            year: None,
            program: None,
        }
    }
}

/// Outcome of reading the `date` filter
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DateFilter {
    /// No usable filter
    Ignored,
    /// Not date-shaped; nothing can match
    Unmatchable,
    On(NaiveDate),
}

impl DateFilter {
    /// ISO 8601 calendar and week dates are tried first, then a loose
    /// `YYYY-M-D`. Only a missing or empty value is ignored; a loose date
    /// that does not exist is ignored too. Nothing else is trimmed or
    /// forgiven, so any other text matches nobody.
    pub fn parse(raw: Option<&str>) -> Self {
        let Some(raw) = raw.filter(|s| !s.is_empty()) else {
            return DateFilter::Ignored;
        };
        if let Some(date) = iso_date(raw) {
            return DateFilter::On(date);
        }
        match loose_date(raw) {
            Some((year, month, day)) => match NaiveDate::from_ymd_opt(year, month, day) {
                Some(date) if year >= 1 => DateFilter::On(date),
                _ => DateFilter::Ignored,
            },
            None => DateFilter::Unmatchable,
        }
    }
}

fn ascii_number(s: &str) -> Option<u32> {
    if s.is_empty() || !s.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    s.parse().ok()
}

fn iso_weekday(day: u32) -> Option<Weekday> {
    Some(match day {
        1 => Weekday::Mon,
        2 => Weekday::Tue,
        3 => Weekday::Wed,
        4 => Weekday::Thu,
        5 => Weekday::Fri,
        6 => Weekday::Sat,
        7 => Weekday::Sun,
        _ => return None,
    })
}

/// `YYYY-MM-DD`, `YYYYMMDD`, `YYYY-Www`, `YYYY-Www-D`, `YYYYWww` or `YYYYWwwD`
fn iso_date(raw: &str) -> Option<NaiveDate> {
    if !raw.is_ascii() || raw.len() < 7 {
        return None;
    }
    let (year, rest) = raw.split_at(4);
    let year = ascii_number(year)? as i32;
    if year < 1 {
        return None;
    }
    let (dashed, rest) = match rest.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, rest),
    };

    if let Some(week) = rest.strip_prefix('W') {
        if week.len() < 2 {
            return None;
        }
        let (week, day) = week.split_at(2);
        let day = match (dashed, day) {
            (_, "") => "1",
            (true, day) => day.strip_prefix('-')?,
            (false, day) => day,
        };
        if day.len() != 1 {
            return None;
        }
        let weekday = iso_weekday(ascii_number(day)?)?;
        return NaiveDate::from_isoywd_opt(year, ascii_number(week)?, weekday);
    }

    let (month, day) = match (dashed, rest.len()) {
        (true, 5) => {
            let (month, day) = rest.split_at(2);
            (month, day.strip_prefix('-')?)
        }
        (false, 4) => rest.split_at(2),
        _ => return None,
    };
    NaiveDate::from_ymd_opt(year, ascii_number(month)?, ascii_number(day)?)
}

/// Year, month and day of a `YYYY-M-D` value; one trailing newline is allowed
fn loose_date(raw: &str) -> Option<(i32, u32, u32)> {
    let raw = raw.strip_suffix('\n').unwrap_or(raw);
    let mut parts = raw.split('-');
    let (year, month, day) = (parts.next()?, parts.next()?, parts.next()?);
    if parts.next().is_some()
        || year.len() != 4
        || !(1..=2).contains(&month.len())
        || !(1..=2).contains(&day.len())
    {
        return None;
    }
    Some((ascii_number(year)? as i32, ascii_number(month)?, ascii_number(day)?))
}

fn non_empty(value: &Option<String>) -> Option<&str> {
    value.as_deref().map(str::trim).filter(|s| !s.is_empty())
}

fn contains_ci(haystack: &str, needle: &str) -> bool {
    haystack.to_lowercase().contains(&needle.to_lowercase())
}

/// Split free-text search into terms on whitespace and commas
pub fn search_terms(search: &str) -> Vec<String> {
    search
        .split(|c: char| c.is_whitespace() || c == ',')
        .filter(|t| !t.is_empty())
        .map(str::to_string)
        .collect()
}

/// Every term appears in at least one of `fields`
pub fn matches_search(search: &str, fields: &[&str]) -> bool {
    search_terms(search)
        .iter()
        .all(|term| fields.iter().any(|field| contains_ci(field, term)))
}

/// Whole-string, case-insensitive match on a name; an empty `q` matches all
pub fn name_contains(name: &str, q: &str) -> bool {
    contains_ci(name, q)
}

impl<P: PartialEq> PatientQuery<P> {
    pub fn matches(&self, name: &str, contact: &str, enrollments: &[EnrollmentFacts<P>]) -> bool {
        if let Some(search) = non_empty(&self.search) {
            if !matches_search(search, &[name, contact]) {
                return false;
            }
        }

        if let Some(wanted) = non_empty(&self.contact) {
            if !contains_ci(contact, wanted) {
                return false;
            }
        }

        match DateFilter::parse(self.date.as_deref()) {
            DateFilter::Ignored => {}
            DateFilter::Unmatchable => return false,
            DateFilter::On(date) => {
                if !enrollments.iter().any(|e| e.enrolled_on == date) {
                    return false;
                }
            }
        }

        if let Some(month) = self.month {
            if !enrollments.iter().any(|e| e.enrolled_on.month() == month) {
                return false;
            }
        }

        if let Some(year) = self.year {
            if !enrollments.iter().any(|e| e.enrolled_on.year() == year) {
                return false;
            }
        }

        if let Some(program) = &self.program {
            if !enrollments.iter().any(|e| &e.program == program) {
                return false;
            }
        }

        true
    }
}

/// Filters accepted when listing enrollments
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct EnrollmentQuery<P> {
    /// Terms matched against the patient's name and contact
    pub search: Option<String>,
    pub program: Option<P>,
    pub status: Option<EnrollmentStatus>,
}

impl<P> Default for EnrollmentQuery<P> {
    fn default() -> Self {
        Self {
            search: None,
            program: None,
            status: None,
        }
    }
}

impl<P: PartialEq> EnrollmentQuery<P> {
    pub fn matches(
        &self,
        patient_name: &str,
        patient_contact: &str,
        program: &P,
        status: EnrollmentStatus,
    ) -> bool {
        if let Some(search) = non_empty(&self.search) {
            if !matches_search(search, &[patient_name, patient_contact]) {
                return false;
            }
        }
        if let Some(wanted) = &self.program {
            if wanted != program {
                return false;
            }
        }
        if let Some(wanted) = self.status {
            if wanted != status {
                return false;
            }
        }
        true
    }
}
