//! Prerequisite chain depth.
//!
//! Depth is the length of the longest prerequisite chain ending at a
//! course, counting the course itself:
//!
//! ```text
//! depth(c) = 1                                  if c names no known prerequisite
//!          = 1 + max(depth(p) for p in prereqs) otherwise
//! ```
//!
//! Only explicit ids from course-choice groups take part; pattern groups
//! and ids that resolve to no course are ignored. Prerequisite graphs are
//! user-edited and may contain cycles: re-entering a course already on the
//! current path contributes depth 0 and flags the report instead of
//! recursing forever.

use std::collections::{HashMap, HashSet};
use tracing::debug;

use crate::models::{Course, CourseCatalog};

/// Result of a depth computation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DepthReport {
    /// Longest chain length, counting the course itself.
    pub depth: u32,
    /// Whether a prerequisite cycle was cut while computing `depth`.
    pub cycle_detected: bool,
}

impl DepthReport {
    const LEAF: Self = Self {
        depth: 1,
        cycle_detected: false,
    };

    const CYCLE: Self = Self {
        depth: 0,
        cycle_detected: true,
    };
}

/// Computes the prerequisite depth of a course.
///
/// An id with no course record has depth 1.
pub fn prerequisite_depth(course_id: &str, catalog: &CourseCatalog<'_>) -> DepthReport {
    let Some(course) = catalog.get(course_id) else {
        return DepthReport::LEAF;
    };

    let report = depth_below(course, catalog, &HashSet::new());
    if report.cycle_detected {
        debug!("Prerequisite cycle reachable from course '{}'", course_id);
    }
    report
}

/// Depth of every course, keyed by id.
pub fn all_depths(courses: &[Course]) -> HashMap<String, DepthReport> {
    let catalog = CourseCatalog::new(courses);
    courses
        .iter()
        .map(|c| (c.id.clone(), prerequisite_depth(&c.id, &catalog)))
        .collect()
}

fn depth_below<'a>(
    course: &'a Course,
    catalog: &CourseCatalog<'a>,
    ancestors: &HashSet<&'a str>,
) -> DepthReport {
    if ancestors.contains(course.id.as_str()) {
        return DepthReport::CYCLE;
    }

    let prerequisites: Vec<&'a Course> = course
        .prerequisites
        .course_ids()
        .filter_map(|id| catalog.get(id))
        .collect();
    if prerequisites.is_empty() {
        return DepthReport::LEAF;
    }

    // Each branch sees the path down to this course, never its siblings.
    let mut path = ancestors.clone();
    path.insert(course.id.as_str());

    let mut deepest = 0;
    let mut cycle_detected = false;
    for prerequisite in prerequisites {
        let branch = depth_below(prerequisite, catalog, &path);
        deepest = deepest.max(branch.depth);
        cycle_detected |= branch.cycle_detected;
    }

    DepthReport {
        depth: deepest + 1,
        cycle_detected,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::PrerequisiteGroup;

    fn depth_of(courses: &[Course], id: &str) -> DepthReport {
        prerequisite_depth(id, &CourseCatalog::new(courses))
    }

    #[test]
    fn test_no_prerequisites() {
        let courses = vec![Course::new("a", "CS 101")];
        assert_eq!(
            depth_of(&courses, "a"),
            DepthReport {
                depth: 1,
                cycle_detected: false
            }
        );
    }

    #[test]
    fn test_chain_takes_longest_branch() {
        // d → c → b → a, and d → a
        let courses = vec![
            Course::new("a", "CS 101"),
            Course::new("b", "CS 201").with_prerequisite(PrerequisiteGroup::one_of(["a"])),
            Course::new("c", "CS 301").with_prerequisite(PrerequisiteGroup::one_of(["b"])),
            Course::new("d", "CS 401")
                .with_prerequisite(PrerequisiteGroup::one_of(["a"]))
                .with_prerequisite(PrerequisiteGroup::one_of(["c"])),
        ];
        assert_eq!(depth_of(&courses, "b").depth, 2);
        assert_eq!(depth_of(&courses, "c").depth, 3);
        assert_eq!(depth_of(&courses, "d").depth, 4);
        assert!(!depth_of(&courses, "d").cycle_detected);
    }

    #[test]
    fn test_pattern_groups_and_unknown_ids_ignored() {
        let courses = vec![Course::new("a", "CS 401")
            .with_prerequisite(PrerequisiteGroup::pattern(2).with_level("3"))
            .with_prerequisite(PrerequisiteGroup::one_of(["deleted"]))];
        assert_eq!(depth_of(&courses, "a").depth, 1);
    }

    #[test]
    fn test_unknown_course_is_leaf() {
        assert_eq!(depth_of(&[], "nope").depth, 1);
    }

    #[test]
    fn test_mutual_cycle_terminates() {
        let courses = vec![
            Course::new("a", "CS 101").with_prerequisite(PrerequisiteGroup::one_of(["b"])),
            Course::new("b", "CS 102").with_prerequisite(PrerequisiteGroup::one_of(["a"])),
        ];
        let a = depth_of(&courses, "a");
        let b = depth_of(&courses, "b");
        assert_eq!(a.depth, 2);
        assert_eq!(b.depth, 2);
        assert!(a.cycle_detected);
        assert!(b.cycle_detected);
    }

    #[test]
    fn test_self_cycle() {
        let courses =
            vec![Course::new("a", "CS 101").with_prerequisite(PrerequisiteGroup::one_of(["a"]))];
        let report = depth_of(&courses, "a");
        assert_eq!(report.depth, 1);
        assert!(report.cycle_detected);
    }

    #[test]
    fn test_diamond_is_not_a_cycle() {
        // d → {b, c}, b → a, c → a
        let courses = vec![
            Course::new("a", "CS 101"),
            Course::new("b", "CS 201").with_prerequisite(PrerequisiteGroup::one_of(["a"])),
            Course::new("c", "CS 202").with_prerequisite(PrerequisiteGroup::one_of(["a"])),
            Course::new("d", "CS 301").with_prerequisite(PrerequisiteGroup::one_of(["b", "c"])),
        ];
        let report = depth_of(&courses, "d");
        assert_eq!(report.depth, 3);
        assert!(!report.cycle_detected);
    }

    #[test]
    fn test_all_depths() {
        let courses = vec![
            Course::new("a", "CS 101"),
            Course::new("b", "CS 201").with_prerequisite(PrerequisiteGroup::one_of(["a"])),
        ];
        let depths = all_depths(&courses);
        assert_eq!(depths["a"].depth, 1);
        assert_eq!(depths["b"].depth, 2);
    }
}
