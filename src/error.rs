//! Error types for plan construction and editing.
//!
//! The engine itself (evaluation, violations, depth, credits) is total and
//! never fails. Errors only arise at the edges: building a semester timeline,
//! parsing a plan document, or editing a plan with an id or slot that does
//! not exist.

use thiserror::Error;

/// Errors raised while building or editing a plan.
#[derive(Debug, Error)]
pub enum PlanError {
    /// A semester order needs at least one semester.
    #[error("semester order is empty")]
    EmptySemesterOrder,

    /// The same label appears twice in a semester order.
    #[error("duplicate semester label: {label}")]
    DuplicateSemester { label: String },

    /// `pool` is the unscheduled bucket and cannot name a semester.
    #[error("semester label '{label}' is reserved")]
    ReservedSemesterLabel { label: String },

    /// The leading word of a label is not Fall, Spring or Summer.
    #[error("unknown season in semester label '{label}'")]
    UnknownSeason { label: String },

    /// A rank or label that is not part of the configured timeline.
    #[error("unknown semester: {semester}")]
    UnknownSemester { semester: String },

    /// An edit referenced a course id that is not in the plan.
    #[error("unknown course: {course_id}")]
    UnknownCourse { course_id: String },

    /// A new course reused an id already in the plan.
    #[error("duplicate course id: {course_id}")]
    DuplicateCourse { course_id: String },

    /// The plan document could not be parsed or written.
    #[error("plan document error: {0}")]
    Json(#[from] serde_json::Error),
}
