//! Fixture builders for students and rooms.

use proctor_core::{RoomGeometry, RoomLabel, StudentRecord};

/// A regular, fees-paid student with 80% attendance.
///
/// `enrollment_no` doubles as the display name suffix so assertion
/// failures identify the student at a glance.
pub fn student(enrollment_no: &str, branch: &str) -> StudentRecord {
    StudentRecord {
        enrollment_no: enrollment_no.to_string(),
        name: format!("Student {enrollment_no}"),
        program: "B.Tech".to_string(),
        branch: branch.to_string(),
        semester: 5,
        attendance_percent: 80.0,
        status: "Regular".to_string(),
        fee_status: "Paid".to_string(),
    }
}

/// A roster with `per_branch` students in each named branch.
///
/// Enrollment numbers are `{branch}{index}` with `index` starting at 1,
/// emitted branch by branch, so the roster arrives grouped (the worst
/// case for anti-collusion seating).
pub fn roster(branches: &[&str], per_branch: usize) -> Vec<StudentRecord> {
    let mut out = Vec::with_capacity(branches.len() * per_branch);
    for branch in branches {
        for i in 1..=per_branch {
            out.push(student(&format!("{branch}{i}"), branch));
        }
    }
    out
}

/// An unlabeled room where capacity matches `rows * columns`.
pub fn room(rows: u32, columns: u32) -> RoomGeometry {
    RoomGeometry {
        label: RoomLabel::default(),
        rows,
        columns,
        capacity: rows * columns,
    }
}

/// A room with an explicit capacity and a building/floor/number label.
pub fn labeled_room(number: &str, rows: u32, columns: u32, capacity: u32) -> RoomGeometry {
    RoomGeometry {
        label: RoomLabel {
            building: Some("Main".to_string()),
            floor: Some("Ground".to_string()),
            number: Some(number.to_string()),
        },
        rows,
        columns,
        capacity,
    }
}
