use crate::{
    course::Course,
    days::DaySet,
    time::{ParseTimeError, minutes_since_midnight, parse_time},
};
use std::str::FromStr;

impl Course {
    /// Whether two sections ever meet at the same time.
    ///
    /// Sections can only conflict if they share an active half of the
    /// semester. Past that gate, every slot of `self` is checked against
    /// every slot of `other`: a pair conflicts when the day sets intersect
    /// and the meeting intervals overlap. Intervals are half-open, so a
    /// slot ending exactly when another begins does not conflict.
    ///
    /// # Returns
    /// `Ok(true)` on the first conflicting slot pair, `Ok(false)` when
    /// there is none, or [`ParseTimeError`] when a day-overlapping slot
    /// carries a malformed time string.
    pub fn conflicts_with(&self, other: &Course) -> Result<bool, ParseTimeError> {
        let shares_half = (self.first_half_semester && other.first_half_semester)
            || (self.second_half_semester && other.second_half_semester);
        if !shares_half {
            return Ok(false);
        }

        for slot_a in &self.schedule {
            let days_a = DaySet::from_str(&slot_a.days).unwrap_or_default();

            for slot_b in &other.schedule {
                let days_b = DaySet::from_str(&slot_b.days).unwrap_or_default();
                if !days_a.overlaps(days_b) {
                    continue;
                }

                let start_a = minutes_since_midnight(parse_time(&slot_a.start_time)?);
                let end_a = minutes_since_midnight(parse_time(&slot_a.end_time)?);
                let start_b = minutes_since_midnight(parse_time(&slot_b.start_time)?);
                let end_b = minutes_since_midnight(parse_time(&slot_b.end_time)?);

                if (start_a <= start_b && start_b < end_a)
                    || (start_b <= start_a && start_a < end_b)
                {
                    return Ok(true);
                }
            }
        }

        Ok(false)
    }
}

#[cfg(test)]
mod tests {
    use crate::course::{Course, Slot};
    use crate::time::ParseTimeError;

    fn slot(days: &str, start: &str, end: &str) -> Slot {
        Slot {
            days: days.to_owned(),
            start_time: start.to_owned(),
            end_time: end.to_owned(),
        }
    }

    fn course(schedule: Vec<Slot>) -> Course {
        Course {
            school: "A".to_owned(),
            department: "CS".to_owned(),
            course_number: 4,
            course_code_suffix: String::new(),
            section: 1,
            course_name: "Test Course".to_owned(),
            course_status: "Open".to_owned(),
            open_seats: 5,
            total_seats: 30,
            faculty: vec![],
            quarter_credits: 12,
            first_half_semester: true,
            second_half_semester: true,
            schedule,
            start_date: "2026-01-20".to_owned(),
            end_date: "2026-05-15".to_owned(),
        }
    }

    #[test]
    fn test_overlapping_slots_conflict() {
        let a = course(vec![slot("MWF", "9:00", "10:30")]);
        let b = course(vec![slot("WF", "10:00", "11:00")]);

        assert_eq!(a.conflicts_with(&b), Ok(true));
        // Symmetric
        assert_eq!(b.conflicts_with(&a), Ok(true));
    }

    #[test]
    fn test_contained_interval_conflicts() {
        let a = course(vec![slot("T", "9:00", "12:00")]);
        let b = course(vec![slot("T", "10:00", "10:50")]);

        assert_eq!(a.conflicts_with(&b), Ok(true));
        assert_eq!(b.conflicts_with(&a), Ok(true));
    }

    #[test]
    fn test_back_to_back_slots_do_not_conflict() {
        // Half-open intervals: one ends exactly when the other begins
        let a = course(vec![slot("MWF", "9:00", "10:00")]);
        let b = course(vec![slot("MWF", "10:00", "11:00")]);

        assert_eq!(a.conflicts_with(&b), Ok(false));
        assert_eq!(b.conflicts_with(&a), Ok(false));
    }

    #[test]
    fn test_disjoint_days_do_not_conflict() {
        let a = course(vec![slot("MWF", "9:00", "10:00")]);
        let b = course(vec![slot("TR", "9:00", "10:00")]);

        assert_eq!(a.conflicts_with(&b), Ok(false));
    }

    #[test]
    fn test_half_semester_gate() {
        let mut a = course(vec![slot("MWF", "9:00", "10:00")]);
        a.first_half_semester = true;
        a.second_half_semester = false;

        let mut b = course(vec![slot("MWF", "9:00", "10:00")]);
        b.first_half_semester = false;
        b.second_half_semester = true;

        // Identical slots, but disjoint halves of the semester
        assert_eq!(a.conflicts_with(&b), Ok(false));
        assert_eq!(b.conflicts_with(&a), Ok(false));

        b.first_half_semester = true;
        assert_eq!(a.conflicts_with(&b), Ok(true));
    }

    #[test]
    fn test_any_slot_pair_can_conflict() {
        let a = course(vec![
            slot("M", "9:00", "10:00"),
            slot("R", "15:00", "16:00"),
        ]);
        let b = course(vec![
            slot("T", "9:00", "10:00"),
            slot("R", "15:30", "17:00"),
        ]);

        assert_eq!(a.conflicts_with(&b), Ok(true));
    }

    #[test]
    fn test_empty_schedule_never_conflicts() {
        let a = course(vec![]);
        let b = course(vec![slot("MWF", "9:00", "10:00")]);

        assert_eq!(a.conflicts_with(&b), Ok(false));
        assert_eq!(b.conflicts_with(&a), Ok(false));
    }

    #[test]
    fn test_malformed_time_propagates() {
        let a = course(vec![slot("MWF", "9:00", "oops")]);
        let b = course(vec![slot("W", "9:30", "10:30")]);

        assert_eq!(
            a.conflicts_with(&b),
            Err(ParseTimeError::InvalidFormat("oops".to_owned()))
        );
    }

    #[test]
    fn test_malformed_time_ignored_without_day_overlap() {
        // Times are only parsed once a slot pair shares a day
        let a = course(vec![slot("M", "9:00", "oops")]);
        let b = course(vec![slot("T", "9:30", "10:30")]);

        assert_eq!(a.conflicts_with(&b), Ok(false));
    }
}
