//! Pure helpers over course-catalog records: identity keys, composite
//! sort ordering, display formatting, fuzzy multi-term search, pairwise
//! schedule-conflict detection, and a deterministic section color.
//!
//! Every function is a stateless transformation of one or two [`Course`]
//! records. Records are validated once at the ingestion boundary with
//! [`Course::validate`]; past that point the helpers assume well-formed
//! input, and only time parsing inside conflict detection can fail.

pub mod color;
pub mod conflict;
pub mod course;
pub mod days;
pub mod search;
pub mod time;

pub use color::{ColorFormat, seeded_color};
pub use course::{Course, Slot, ValidationError, compare_courses};
pub use days::DaySet;
pub use time::{ParseTimeError, minutes_since_midnight, parse_time};
