//! Plan validation: prerequisite and offering violations.
//!
//! Walks every scheduled course in (semester, placement) order and checks:
//! 1. All prerequisite groups hold at the course's semester (AND)
//! 2. The course is offered in the semester's season for its delivery mode
//!
//! Pooled courses are not checked. Placed ids with no course record are
//! skipped. Output is order-stable and not de-duplicated.

use serde::{Deserialize, Serialize};
use std::fmt;
use tracing::debug;

use crate::models::{Course, CourseCatalog, DeliveryMode, Placements, Season, SemesterOrder, Slot};
use crate::requirements::are_prerequisites_met;

/// A single problem with the current plan.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Violation {
    /// Type of violation.
    pub kind: ViolationKind,
    /// Offending course.
    pub course_id: String,
    /// Label of the semester the course is placed in.
    pub semester: String,
    /// Human-readable description, prefixed with the course code.
    pub message: String,
}

/// Classification of plan violations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ViolationKind {
    /// At least one prerequisite group is not satisfied.
    UnmetPrerequisites,
    /// The course is not offered in this season.
    OfferingRestriction,
}

impl fmt::Display for Violation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}

/// Finds every violation in the plan.
pub fn find_violations(
    courses: &[Course],
    placements: &Placements,
    order: &SemesterOrder,
) -> Vec<Violation> {
    let catalog = CourseCatalog::new(courses);
    let mut violations = Vec::new();

    for (rank, semester) in order.iter() {
        for course_id in placements.courses_in(Slot::Term(rank)) {
            let Some(course) = catalog.get(course_id) else {
                continue;
            };

            if !course.prerequisites.is_empty()
                && !are_prerequisites_met(&course.prerequisites, rank, placements, &catalog)
            {
                violations.push(Violation {
                    kind: ViolationKind::UnmetPrerequisites,
                    course_id: course.id.clone(),
                    semester: semester.label.clone(),
                    message: format!("{}: Prerequisites not satisfied", course.code),
                });
            }

            if let Some(reason) = offering_restriction(course, semester.season) {
                violations.push(Violation {
                    kind: ViolationKind::OfferingRestriction,
                    course_id: course.id.clone(),
                    semester: semester.label.clone(),
                    message: format!("{}: Semester restriction violated ({reason})", course.code),
                });
            }
        }
    }

    debug!("Plan validation found {} violations", violations.len());
    violations
}

/// Violation messages only, in the same order as [`find_violations`].
pub fn violation_messages(
    courses: &[Course],
    placements: &Placements,
    order: &SemesterOrder,
) -> Vec<String> {
    find_violations(courses, placements, order)
        .into_iter()
        .map(|v| v.message)
        .collect()
}

/// Why the course cannot run in `season`, or `None` if it can.
///
/// An empty restriction list means the mode runs every season.
pub fn offering_restriction(course: &Course, season: Season) -> Option<String> {
    let in_person = &course.semester_restrictions_in_person;
    let online = &course.semester_restrictions_online;

    match course.delivery_mode {
        DeliveryMode::InPerson if !in_person.is_empty() && !in_person.contains(&season) => Some(
            format!("In-Person only offered in {}", join_seasons(in_person)),
        ),
        DeliveryMode::Online if !online.is_empty() && !online.contains(&season) => {
            Some(format!("Online only offered in {}", join_seasons(online)))
        }
        DeliveryMode::Both => {
            let in_person_ok = in_person.is_empty() || in_person.contains(&season);
            let online_ok = online.is_empty() || online.contains(&season);
            (!in_person_ok && !online_ok).then(|| format!("not offered in {season}"))
        }
        _ => None,
    }
}

fn join_seasons(seasons: &[Season]) -> String {
    seasons
        .iter()
        .map(Season::as_str)
        .collect::<Vec<_>>()
        .join(", ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{PrerequisiteGroup, SemesterRank};

    fn term(i: usize) -> Slot {
        Slot::Term(SemesterRank::new(i))
    }

    fn plan(entries: &[(&str, Slot)]) -> (SemesterOrder, Placements) {
        let order = SemesterOrder::default();
        let mut p = Placements::new(&order);
        for (id, slot) in entries {
            p.move_course(*id, *slot).unwrap();
        }
        (order, p)
    }

    #[test]
    fn test_in_person_restriction() {
        let courses = vec![Course::new("x", "STAT 506").with_in_person_seasons([Season::Fall])];
        let (order, p) = plan(&[("x", term(1))]);

        let violations = find_violations(&courses, &p, &order);
        assert_eq!(violations.len(), 1);
        assert_eq!(violations[0].kind, ViolationKind::OfferingRestriction);
        assert_eq!(violations[0].semester, "Spring 2026");
        assert_eq!(
            violations[0].to_string(),
            "STAT 506: Semester restriction violated (In-Person only offered in Fall)"
        );
    }

    #[test]
    fn test_online_restriction_lists_all_seasons() {
        let courses = vec![Course::new("x", "DS 435")
            .with_delivery_mode(DeliveryMode::Online)
            .with_online_seasons([Season::Spring, Season::Summer])];
        let (order, p) = plan(&[("x", term(0))]);

        assert_eq!(
            violation_messages(&courses, &p, &order),
            vec!["DS 435: Semester restriction violated (Online only offered in Spring, Summer)"]
        );
    }

    #[test]
    fn test_online_ignores_in_person_list() {
        let courses = vec![Course::new("x", "DS 435")
            .with_delivery_mode(DeliveryMode::Online)
            .with_in_person_seasons([Season::Spring])];
        let (order, p) = plan(&[("x", term(0))]);
        assert!(find_violations(&courses, &p, &order).is_empty());
    }

    #[test]
    fn test_both_covered_by_online() {
        let courses = vec![Course::new("y", "CS 448")
            .with_delivery_mode(DeliveryMode::Both)
            .with_in_person_seasons([Season::Fall])
            .with_online_seasons([Season::Spring])];
        let (order, p) = plan(&[("y", term(1))]);
        assert!(find_violations(&courses, &p, &order).is_empty());
    }

    #[test]
    fn test_both_unavailable() {
        let courses = vec![Course::new("y", "CS 448")
            .with_delivery_mode(DeliveryMode::Both)
            .with_in_person_seasons([Season::Fall])
            .with_online_seasons([Season::Summer])];
        let (order, p) = plan(&[("y", term(1))]);
        assert_eq!(
            violation_messages(&courses, &p, &order),
            vec!["CS 448: Semester restriction violated (not offered in Spring)"]
        );
    }

    #[test]
    fn test_unknown_mode_not_checked() {
        let courses = vec![Course::new("z", "CS 100")
            .with_delivery_mode(DeliveryMode::Other)
            .with_in_person_seasons([Season::Summer])
            .with_online_seasons([Season::Summer])];
        let (order, p) = plan(&[("z", term(0))]);
        assert!(find_violations(&courses, &p, &order).is_empty());
    }

    #[test]
    fn test_prerequisite_violation() {
        let courses = vec![
            Course::new("a", "CS 101"),
            Course::new("b", "CS 201").with_prerequisite(PrerequisiteGroup::one_of(["a"])),
        ];
        // Same semester: not earlier
        let (order, p) = plan(&[("a", term(0)), ("b", term(0))]);
        let violations = find_violations(&courses, &p, &order);
        assert_eq!(violations.len(), 1);
        assert_eq!(violations[0].kind, ViolationKind::UnmetPrerequisites);
        assert_eq!(violations[0].message, "CS 201: Prerequisites not satisfied");

        let (order, p) = plan(&[("a", term(0)), ("b", term(1))]);
        assert!(find_violations(&courses, &p, &order).is_empty());
    }

    #[test]
    fn test_unresolvable_prerequisite_is_unmet() {
        let courses =
            vec![Course::new("b", "CS 201").with_prerequisite(PrerequisiteGroup::one_of(["gone"]))];
        let (order, p) = plan(&[("b", term(3))]);
        assert_eq!(
            violation_messages(&courses, &p, &order),
            vec!["CS 201: Prerequisites not satisfied"]
        );
    }

    #[test]
    fn test_pool_and_unknown_ids_skipped() {
        let courses = vec![Course::new("b", "CS 201")
            .with_prerequisite(PrerequisiteGroup::one_of(["a"]))
            .with_in_person_seasons([Season::Summer])];
        let (order, p) = plan(&[("b", Slot::Pool), ("ghost", term(0))]);
        assert!(find_violations(&courses, &p, &order).is_empty());
    }

    #[test]
    fn test_order_follows_semesters_then_placement() {
        let courses = vec![
            Course::new("a", "CS 301").with_prerequisite(PrerequisiteGroup::one_of(["none"])),
            Course::new("b", "CS 302")
                .with_prerequisite(PrerequisiteGroup::one_of(["none"]))
                .with_in_person_seasons([Season::Summer]),
            Course::new("c", "CS 303").with_prerequisite(PrerequisiteGroup::one_of(["none"])),
        ];
        let (order, p) = plan(&[("c", term(2)), ("b", term(0)), ("a", term(0))]);

        let messages = violation_messages(&courses, &p, &order);
        assert_eq!(
            messages,
            vec![
                "CS 302: Prerequisites not satisfied",
                "CS 302: Semester restriction violated (In-Person only offered in Summer)",
                "CS 301: Prerequisites not satisfied",
                "CS 303: Prerequisites not satisfied",
            ]
        );
        // Idempotent
        assert_eq!(messages, violation_messages(&courses, &p, &order));
    }
}
