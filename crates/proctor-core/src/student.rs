//! The roster entry consumed by the allocation pipeline.

/// A single roster entry.
///
/// Records are immutable inputs: the engine clones them into grids and
/// result lists but never mutates the caller's roster. Classification
/// fields (`program`, `branch`, `semester`) and filter attributes
/// (`attendance_percent`, `status`, `fee_status`) are opaque to the
/// engine except where [`SeatingRules`](crate::SeatingRules) names them.
#[derive(Clone, Debug, PartialEq)]
pub struct StudentRecord {
    /// Enrollment number, unique within a roster. Sort-mode tie-breaker.
    pub enrollment_no: String,
    /// Student name, carried through for downstream rendering.
    pub name: String,
    /// Degree program (e.g. "B.Tech").
    pub program: String,
    /// Branch of study. Drives ordering and branch mixing.
    pub branch: String,
    /// Current semester.
    pub semester: u32,
    /// Attendance percentage in `[0, 100]`.
    pub attendance_percent: f64,
    /// Enrollment status (e.g. "Regular", "Detained").
    pub status: String,
    /// Fee payment status (e.g. "Paid", "Pending").
    pub fee_status: String,
}
