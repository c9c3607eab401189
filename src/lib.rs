//! Course plan engine for the U-Engine ecosystem.
//!
//! Validates a multi-semester course plan against prerequisite and
//! offering constraints and derives the figures a planner shows next to
//! it. Every engine function is a pure function of a plan snapshot
//! (courses, placements, degrees, semester order).
//!
//! # Modules
//!
//! - **`models`**: Domain types: `Course`, `PrerequisiteGroup`, `Degree`,
//!   `SemesterOrder`, `Placements`, `Plan`, `PlanDocument`
//! - **`requirements`**: Prerequisite group evaluation (course-choice OR,
//!   pattern threshold, AND across groups)
//! - **`violations`**: Plan validation (unmet prerequisites, season offering)
//! - **`analysis`**: Prerequisite depth with cycle reporting, semester
//!   credits, degree progress, `PlanKpi`
//! - **`validation`**: Input integrity checks (duplicate IDs, dangling
//!   references, prerequisite cycles)
//!
//! # Example
//!
//! ```
//! use u_courseplan::models::{Course, Plan, PrerequisiteGroup, SemesterOrder};
//!
//! let mut plan = Plan::new(SemesterOrder::default());
//! plan.add_course(Course::new("cs210", "CS 210")).unwrap();
//! plan.add_course(
//!     Course::new("math200", "MATH 200")
//!         .with_prerequisite(PrerequisiteGroup::pattern(1).with_level("2")),
//! )
//! .unwrap();
//!
//! plan.move_course_to("cs210", "Fall 2025").unwrap();
//! plan.move_course_to("math200", "Spring 2026").unwrap();
//! assert!(plan.violations().is_empty());
//! ```

pub mod analysis;
pub mod error;
pub mod models;
pub mod requirements;
pub mod validation;
pub mod violations;

pub use error::PlanError;
