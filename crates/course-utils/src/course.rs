use crate::{
    days::DaySet,
    time::{minutes_since_midnight, parse_time},
};
use serde::{Deserialize, Serialize};
use std::{
    cmp::Ordering,
    fmt::{Display, Formatter, Result as FmtResult},
};

/// One meeting-time entry within a course's weekly schedule
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Slot {
    /// One character per weekday the slot occurs, e.g. `"MWF"`
    pub days: String,
    /// 24-hour `"H:MM"` or `"HH:MM"` clock time
    pub start_time: String,
    pub end_time: String,
}

/// A scheduled course section as served by the catalog.
///
/// Field names follow the catalog's JSON payload, so records deserialize
/// directly from it. Numeric fields are unsigned; the remaining shape
/// invariants are checked by [`Course::validate`], which callers run once
/// at the ingestion boundary. Everything else in this crate assumes
/// validated records.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Course {
    pub school: String,
    pub department: String,
    pub course_number: u32,
    pub course_code_suffix: String,
    pub section: u32,
    pub course_name: String,
    pub course_status: String,
    pub open_seats: u32,
    pub total_seats: u32,
    /// Instructor names; the catalog stores these lowercased
    pub faculty: Vec<String>,
    pub quarter_credits: u32,
    pub first_half_semester: bool,
    pub second_half_semester: bool,
    pub start_date: String,
    pub end_date: String,
    pub schedule: Vec<Slot>,
}

/// Custom error type for boundary validation of catalog records
#[derive(Debug, Clone, Serialize, PartialEq)]
pub enum ValidationError {
    /// A required identity field is empty
    EmptyField(&'static str),
    /// A slot's day pattern contains a character outside `MTWRFSU`
    UnknownDayCode(char),
    /// A slot's start or end time does not parse
    InvalidTime(String),
    /// A slot ends at or before it starts
    StartNotBeforeEnd(String, String),
}

impl Display for ValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        match self {
            Self::EmptyField(field) => write!(f, "Field '{field}' must not be empty"),
            Self::UnknownDayCode(c) => write!(f, "Unknown day code '{c}'"),
            Self::InvalidTime(time) => write!(f, "Invalid time string: '{time}'"),
            Self::StartNotBeforeEnd(start, end) => {
                write!(f, "Slot start '{start}' is not before end '{end}'")
            }
        }
    }
}

impl std::error::Error for ValidationError {}

impl Course {
    /// Unique identity string for one scheduled section.
    ///
    /// Injective over its fields provided none of them contain `/`.
    pub fn key(&self) -> String {
        format!(
            "{}/{}/{}/{}/{}",
            self.school, self.department, self.course_number, self.course_code_suffix, self.section
        )
    }

    /// Identity string for a course offering, independent of which
    /// school/section teaches it
    pub fn code_key(&self) -> String {
        format!(
            "{}/{}/{}",
            self.department, self.course_number, self.course_code_suffix
        )
    }

    /// Composite sort key ordering courses by department, number, suffix,
    /// school, then section
    pub fn sort_key(&self) -> (&str, u32, &str, &str, u32) {
        (
            &self.department,
            self.course_number,
            &self.course_code_suffix,
            &self.school,
            self.section,
        )
    }

    /// Display code, e.g. `"CS 004A"` (number padded to three digits)
    pub fn code(&self) -> String {
        format!(
            "{} {:03}{}",
            self.department, self.course_number, self.course_code_suffix
        )
    }

    /// Display section label, e.g. `"A-03"` (section padded to two digits)
    pub fn section_label(&self) -> String {
        format!("{}-{:02}", self.school, self.section)
    }

    /// Display code and section label together, e.g. `"CS 004A A-03"`
    pub fn full_code(&self) -> String {
        format!("{} {}", self.code(), self.section_label())
    }

    /// Enrollment summary, e.g. `"Open, 5/30 seats filled"`
    pub fn status_line(&self) -> String {
        format!(
            "{}, {}/{} seats filled",
            self.course_status, self.open_seats, self.total_seats
        )
    }

    /// Instructor names joined with `", "`; empty when there are none
    pub fn faculty_line(&self) -> String {
        self.faculty.join(", ")
    }

    /// Whether the course meets in at least one half of the semester
    /// (logical OR of the two half-semester flags)
    pub fn any_half_semester(&self) -> bool {
        self.first_half_semester || self.second_half_semester
    }

    /// Semester-credit equivalent of the quarter-credit count
    pub fn credits(&self) -> f64 {
        self.quarter_credits as f64 / 4.0
    }

    /// Whether two records are sections of the same course offering
    pub fn is_equivalent_to(&self, other: &Course) -> bool {
        self.code_key() == other.code_key()
    }

    /// Checks the shape invariants the rest of this crate assumes.
    ///
    /// Intended to run once when a record enters the system; search and
    /// conflict logic do not re-check.
    pub fn validate(&self) -> Result<(), ValidationError> {
        for (name, value) in [
            ("school", &self.school),
            ("department", &self.department),
            ("courseName", &self.course_name),
        ] {
            if value.is_empty() {
                return Err(ValidationError::EmptyField(name));
            }
        }

        for slot in &self.schedule {
            if let Some(c) = slot.days.chars().find(|&c| !DaySet::is_day_code(c)) {
                return Err(ValidationError::UnknownDayCode(c));
            }

            let start = parse_time(&slot.start_time)
                .map_err(|_| ValidationError::InvalidTime(slot.start_time.clone()))?;
            let end = parse_time(&slot.end_time)
                .map_err(|_| ValidationError::InvalidTime(slot.end_time.clone()))?;

            if minutes_since_midnight(start) >= minutes_since_midnight(end) {
                return Err(ValidationError::StartNotBeforeEnd(
                    slot.start_time.clone(),
                    slot.end_time.clone(),
                ));
            }
        }

        Ok(())
    }
}

/// Comparator over [`Course::sort_key`], usable with `slice::sort_by`
pub fn compare_courses(a: &Course, b: &Course) -> Ordering {
    a.sort_key().cmp(&b.sort_key())
}
