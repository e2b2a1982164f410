//! Eligibility filtering: the first pipeline stage.

use proctor_core::{SeatingRules, StudentRecord};

/// Reduce a roster to the students admissible under the rules' filter
/// fields, preserving roster order.
///
/// Each predicate is skipped when its rule field is absent: a `None`
/// `min_attendance` admits any attendance figure, and empty
/// `allowed_status` / `allowed_fee_status` lists admit any value.
/// Infallible; an empty roster yields an empty result.
pub fn eligible(roster: &[StudentRecord], rules: &SeatingRules) -> Vec<StudentRecord> {
    roster
        .iter()
        .filter(|student| {
            if let Some(min) = rules.min_attendance {
                if student.attendance_percent < min {
                    return false;
                }
            }
            if !rules.allowed_status.is_empty() && !rules.allowed_status.contains(&student.status) {
                return false;
            }
            if !rules.allowed_fee_status.is_empty()
                && !rules.allowed_fee_status.contains(&student.fee_status)
            {
                return false;
            }
            true
        })
        .cloned()
        .collect()
}
