//! Derived plan metrics.
//!
//! # Depth
//!
//! `prerequisite_depth` computes the longest prerequisite chain ending at a
//! course and reports whether a cycle had to be cut on the way.
//!
//! # Credits
//!
//! `semester_credits` and `degree_progress` sum placed course credits per
//! slot and per degree. `PlanKpi` bundles these with the violation count.

mod credits;
mod depth;
mod kpi;

pub use credits::{degree_progress, semester_credits, DegreeProgress, SemesterCredits};
pub use depth::{all_depths, prerequisite_depth, DepthReport};
pub use kpi::PlanKpi;
