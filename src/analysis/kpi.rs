//! Plan summary metrics.
//!
//! Gathers the figures a planner view shows at a glance into one value:
//!
//! | Metric | Definition |
//! |--------|-----------|
//! | Semester credits | Per-semester UG/G/total sums |
//! | Scheduled credits | Sum of all semester totals |
//! | Unscheduled | Courses left in the pool |
//! | Degree progress | Earned vs. required per degree |
//! | Violations | Count of prerequisite and offering violations |
//! | Max depth | Longest prerequisite chain among all courses |
//! | Cycles | Courses whose depth computation cut a cycle |

use serde::{Deserialize, Serialize};

use super::credits::{semester_credits, DegreeProgress, SemesterCredits};
use super::depth::prerequisite_depth;
use crate::models::{CourseCatalog, Plan, Slot};
use crate::violations::find_violations;

/// Plan performance indicators.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlanKpi {
    /// Credits per semester, in timeline order (label, credits).
    pub semester_credits: Vec<(String, SemesterCredits)>,
    /// Credits sitting in the pool.
    pub pool_credits: SemesterCredits,
    /// Sum of credits across all semesters.
    pub scheduled_credits: u32,
    /// Number of pooled course ids.
    pub unscheduled_count: usize,
    /// Progress per degree, in degree-list order.
    pub degree_progress: Vec<DegreeProgress>,
    /// Number of plan violations.
    pub violation_count: usize,
    /// Longest prerequisite chain in the catalog (0 if no courses).
    pub max_depth: u32,
    /// Ids of courses that reach a prerequisite cycle.
    pub cyclic_courses: Vec<String>,
}

impl PlanKpi {
    /// Computes KPIs for a plan snapshot.
    pub fn calculate(plan: &Plan) -> Self {
        let catalog = CourseCatalog::new(&plan.courses);
        let placements = &plan.placements;

        let per_semester: Vec<(String, SemesterCredits)> = plan
            .order
            .iter()
            .map(|(rank, s)| {
                (
                    s.label.clone(),
                    semester_credits(Slot::Term(rank), placements, &catalog),
                )
            })
            .collect();
        let scheduled_credits = per_semester
            .iter()
            .fold(0u32, |sum, (_, c)| sum.saturating_add(c.total));

        let degree_progress = plan
            .degrees
            .iter()
            .map(|d| DegreeProgress::calculate(d, placements, &catalog))
            .collect();

        let mut max_depth = 0;
        let mut cyclic_courses = Vec::new();
        for course in &plan.courses {
            let report = prerequisite_depth(&course.id, &catalog);
            max_depth = max_depth.max(report.depth);
            if report.cycle_detected {
                cyclic_courses.push(course.id.clone());
            }
        }

        Self {
            semester_credits: per_semester,
            pool_credits: semester_credits(Slot::Pool, placements, &catalog),
            scheduled_credits,
            unscheduled_count: placements.pool().len(),
            degree_progress,
            violation_count: find_violations(&plan.courses, placements, &plan.order).len(),
            max_depth,
            cyclic_courses,
        }
    }

    /// Whether the plan has no violations and no semester exceeds `max_semester_credits`.
    pub fn meets_thresholds(&self, max_semester_credits: u32) -> bool {
        self.violation_count == 0
            && self
                .semester_credits
                .iter()
                .all(|(_, c)| c.total <= max_semester_credits)
    }
}
