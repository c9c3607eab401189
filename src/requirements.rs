//! Prerequisite group evaluation.
//!
//! Decides whether a prerequisite group holds for a course scheduled at a
//! reference semester. Only courses in semesters strictly before the
//! reference count; the pool has no rank and never counts.
//!
//! | Group | Rule |
//! |-------|------|
//! | `CourseChoice` | some listed id sits at a rank < reference |
//! | `Pattern` | #(earlier courses matching filters) ≥ count |
//!
//! Courses whose code does not parse as `DEPT 123` are skipped by pattern
//! groups. Placed ids with no course record are skipped as well.

use crate::models::{CourseCatalog, Placements, PrerequisiteGroup, Prerequisites, SemesterRank};

/// Whether a single group is satisfied for a course at `reference`.
pub fn is_group_satisfied(
    group: &PrerequisiteGroup,
    reference: SemesterRank,
    placements: &Placements,
    catalog: &CourseCatalog<'_>,
) -> bool {
    match group {
        PrerequisiteGroup::CourseChoice { courses } => courses.iter().any(|id| {
            placements
                .rank_of(id)
                .is_some_and(|rank| rank < reference)
        }),
        PrerequisiteGroup::Pattern {
            count,
            level,
            department,
        } => {
            let matched = count_pattern_matches(
                department.as_deref(),
                level.as_deref(),
                reference,
                placements,
                catalog,
            );
            matched >= *count as usize
        }
    }
}

/// Whether every group holds (AND). An empty container is satisfied.
pub fn are_prerequisites_met(
    prerequisites: &Prerequisites,
    reference: SemesterRank,
    placements: &Placements,
    catalog: &CourseCatalog<'_>,
) -> bool {
    prerequisites
        .groups
        .iter()
        .all(|g| is_group_satisfied(g, reference, placements, catalog))
}

/// Groups that do not hold, in declaration order.
pub fn unsatisfied_groups<'p>(
    prerequisites: &'p Prerequisites,
    reference: SemesterRank,
    placements: &Placements,
    catalog: &CourseCatalog<'_>,
) -> Vec<&'p PrerequisiteGroup> {
    prerequisites
        .groups
        .iter()
        .filter(|g| !is_group_satisfied(g, reference, placements, catalog))
        .collect()
}

/// Counts courses scheduled before `reference` whose code passes the filters.
pub fn count_pattern_matches(
    department: Option<&str>,
    level: Option<&str>,
    reference: SemesterRank,
    placements: &Placements,
    catalog: &CourseCatalog<'_>,
) -> usize {
    placements
        .scheduled()
        .take_while(|(rank, _)| *rank < reference)
        .filter_map(|(_, id)| catalog.get(id))
        .filter_map(|course| course.parsed_code())
        .filter(|code| code.matches(department, level))
        .count()
}
