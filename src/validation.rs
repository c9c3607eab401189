//! Input validation for course plans.
//!
//! The engine tolerates inconsistent data (it skips what it cannot
//! resolve), so nothing here is required before evaluating a plan. These
//! checks surface the problems the engine silently steps over:
//! - Duplicate course or degree IDs
//! - Prerequisite references to missing courses
//! - Degree assignments to missing degrees
//! - Placements of missing courses
//! - Circular prerequisite chains (DFS)
//!
//! # Reference
//! Cormen et al. (2009), "Introduction to Algorithms", Ch. 22.4 (Topological Sort)

use std::collections::{BTreeMap, BTreeSet, HashSet};

use crate::models::{Course, Degree, Placements};

/// Validation result.
pub type ValidationResult = Result<(), Vec<ValidationError>>;

/// A validation error.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidationError {
    /// Error category.
    pub kind: ValidationErrorKind,
    /// Human-readable description.
    pub message: String,
}

/// Categories of validation errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationErrorKind {
    /// Two entities share the same ID.
    DuplicateId,
    /// A prerequisite group names a course that doesn't exist.
    InvalidPrerequisite,
    /// A course is assigned to a degree that doesn't exist.
    InvalidDegreeReference,
    /// A placement names a course that doesn't exist.
    InvalidPlacement,
    /// Prerequisite graph contains a cycle.
    CyclicPrerequisite,
}

impl ValidationError {
    fn new(kind: ValidationErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

/// Validates the structural integrity of a plan.
///
/// Checks:
/// 1. No duplicate course IDs
/// 2. No duplicate degree IDs
/// 3. All prerequisite references point to existing courses
/// 4. All degree assignments point to existing degrees
/// 5. All placed IDs point to existing courses
/// 6. No circular prerequisite chains
///
/// # Returns
/// `Ok(())` if all checks pass, `Err(errors)` with all detected issues.
pub fn validate_input(
    courses: &[Course],
    degrees: &[Degree],
    placements: &Placements,
) -> ValidationResult {
    let mut errors = Vec::new();

    let mut course_ids = HashSet::new();
    for c in courses {
        if !course_ids.insert(c.id.as_str()) {
            errors.push(ValidationError::new(
                ValidationErrorKind::DuplicateId,
                format!("Duplicate course ID: {}", c.id),
            ));
        }
    }

    let mut degree_ids = HashSet::new();
    for d in degrees {
        if !degree_ids.insert(d.id.as_str()) {
            errors.push(ValidationError::new(
                ValidationErrorKind::DuplicateId,
                format!("Duplicate degree ID: {}", d.id),
            ));
        }
    }

    for course in courses {
        for prereq in course.prerequisites.course_ids() {
            if !course_ids.contains(prereq) {
                errors.push(ValidationError::new(
                    ValidationErrorKind::InvalidPrerequisite,
                    format!(
                        "Course '{}' references unknown prerequisite '{}'",
                        course.code, prereq
                    ),
                ));
            }
        }

        for degree in &course.assigned_degrees {
            if !degree_ids.contains(degree.as_str()) {
                errors.push(ValidationError::new(
                    ValidationErrorKind::InvalidDegreeReference,
                    format!(
                        "Course '{}' is assigned to unknown degree '{}'",
                        course.code, degree
                    ),
                ));
            }
        }
    }

    let placed = placements
        .terms()
        .flat_map(|(_, ids)| ids.iter())
        .chain(placements.pool().iter());
    for id in placed {
        if !course_ids.contains(id.as_str()) {
            errors.push(ValidationError::new(
                ValidationErrorKind::InvalidPlacement,
                format!("Placement references unknown course '{id}'"),
            ));
        }
    }

    if let Some(cycle_err) = detect_cycles(courses) {
        errors.push(cycle_err);
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

/// Detects cycles in the prerequisite graph using DFS.
///
/// # Algorithm
/// If a back-edge is found (visiting a node currently in the recursion
/// stack), a cycle exists. Nodes are visited in sorted order so the
/// reported course is deterministic.
fn detect_cycles(courses: &[Course]) -> Option<ValidationError> {
    // Adjacency list: course_id → prerequisite ids
    let mut adj: BTreeMap<&str, Vec<&str>> = BTreeMap::new();
    let mut all_ids: BTreeSet<&str> = BTreeSet::new();

    for course in courses {
        all_ids.insert(&course.id);
        adj.entry(course.id.as_str())
            .or_default()
            .extend(course.prerequisites.course_ids());
    }

    let mut visited = HashSet::new();
    let mut in_stack = HashSet::new();

    for &node in &all_ids {
        if !visited.contains(node) && has_cycle_dfs(node, &adj, &mut visited, &mut in_stack) {
            return Some(ValidationError::new(
                ValidationErrorKind::CyclicPrerequisite,
                format!("Circular prerequisite chain involving course '{node}'"),
            ));
        }
    }

    None
}

fn has_cycle_dfs<'a>(
    node: &'a str,
    adj: &BTreeMap<&'a str, Vec<&'a str>>,
    visited: &mut HashSet<&'a str>,
    in_stack: &mut HashSet<&'a str>,
) -> bool {
    visited.insert(node);
    in_stack.insert(node);

    if let Some(neighbors) = adj.get(node) {
        for &next in neighbors {
            if in_stack.contains(next) {
                return true; // Back edge → cycle
            }
            if !visited.contains(next) && has_cycle_dfs(next, adj, visited, in_stack) {
                return true;
            }
        }
    }

    in_stack.remove(node);
    false
}
