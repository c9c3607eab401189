//! Credit load and degree progress.
//!
//! Both are sums over placed courses. Ids with no course record add
//! nothing. Degree progress only counts scheduled semesters, never the
//! pool, and a course assigned to several degrees counts in full toward
//! each of them.

use serde::{Deserialize, Serialize};

use crate::models::{CourseCatalog, Degree, Level, Placements, Slot};

/// Credit load of one slot, split by level.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SemesterCredits {
    /// Undergraduate credits.
    pub undergrad: u32,
    /// Graduate credits.
    pub grad: u32,
    /// `undergrad + grad`.
    pub total: u32,
}

/// Sums the credits placed in a slot.
///
/// Courses without a level count toward neither bucket. Sums saturate at
/// `u32::MAX`.
pub fn semester_credits(
    slot: Slot,
    placements: &Placements,
    catalog: &CourseCatalog<'_>,
) -> SemesterCredits {
    let mut credits = SemesterCredits::default();

    for course in placements
        .courses_in(slot)
        .iter()
        .filter_map(|id| catalog.get(id))
    {
        match course.level {
            Some(Level::Undergraduate) => {
                credits.undergrad = credits.undergrad.saturating_add(course.credits)
            }
            Some(Level::Graduate) => credits.grad = credits.grad.saturating_add(course.credits),
            None => {}
        }
    }

    credits.total = credits.undergrad.saturating_add(credits.grad);
    credits
}

/// Credits earned toward a degree by scheduled courses.
pub fn degree_progress(
    degree_id: &str,
    placements: &Placements,
    catalog: &CourseCatalog<'_>,
) -> u32 {
    placements
        .scheduled()
        .filter_map(|(_, id)| catalog.get(id))
        .filter(|course| course.counts_toward(degree_id))
        .fold(0u32, |sum, course| sum.saturating_add(course.credits))
}

/// Progress of one degree, ready for display.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DegreeProgress {
    /// Degree identifier.
    pub degree_id: String,
    /// Degree name.
    pub name: String,
    /// Credits from scheduled courses.
    pub earned: u32,
    /// Credits the degree requires.
    pub required: u32,
    /// `earned / required` as a percentage. 100 when nothing is required.
    pub percentage: f64,
}

impl DegreeProgress {
    /// Computes progress for a degree.
    pub fn calculate(
        degree: &Degree,
        placements: &Placements,
        catalog: &CourseCatalog<'_>,
    ) -> Self {
        let earned = degree_progress(&degree.id, placements, catalog);
        let percentage = if degree.required_credits == 0 {
            100.0
        } else {
            f64::from(earned) / f64::from(degree.required_credits) * 100.0
        };

        Self {
            degree_id: degree.id.clone(),
            name: degree.name.clone(),
            earned,
            required: degree.required_credits,
            percentage,
        }
    }

    /// Credits still missing.
    pub fn remaining(&self) -> u32 {
        self.required.saturating_sub(self.earned)
    }

    /// Whether the requirement is met.
    pub fn is_complete(&self) -> bool {
        self.earned >= self.required
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Course, DegreeType, SemesterOrder, SemesterRank};

    fn term(i: usize) -> Slot {
        Slot::Term(SemesterRank::new(i))
    }

    fn sample_courses() -> Vec<Course> {
        vec![
            Course::new("1", "STAT 415").with_credits(3).with_degree("bs"),
            Course::new("2", "STAT 480").with_credits(1).with_degree("bs"),
            Course::new("7", "STAT 506")
                .with_credits(3)
                .with_level(Level::Graduate)
                .with_degree("bs")
                .with_degree("ms"),
            Course::new("9", "DS 435").with_credits(4).with_degree("ms"),
        ]
    }

    fn sample_placements() -> Placements {
        let mut p = Placements::new(&SemesterOrder::default());
        p.move_course("1", term(0)).unwrap();
        p.move_course("7", term(0)).unwrap();
        p.move_course("ghost", term(0)).unwrap();
        p.move_course("2", term(1)).unwrap();
        p.move_course("9", Slot::Pool).unwrap();
        p
    }

    #[test]
    fn test_semester_credits_split() {
        let courses = sample_courses();
        let catalog = CourseCatalog::new(&courses);
        let p = sample_placements();

        assert_eq!(
            semester_credits(term(0), &p, &catalog),
            SemesterCredits {
                undergrad: 3,
                grad: 3,
                total: 6
            }
        );
        assert_eq!(semester_credits(term(1), &p, &catalog).total, 1);
        assert_eq!(semester_credits(term(3), &p, &catalog), SemesterCredits::default());
        // The pool can be summed too
        assert_eq!(semester_credits(Slot::Pool, &p, &catalog).undergrad, 4);
    }

    #[test]
    fn test_levelless_course_counts_nowhere() {
        let mut course = Course::new("x", "CS 100").with_credits(5);
        course.level = None;
        let courses = vec![course];
        let catalog = CourseCatalog::new(&courses);
        let mut p = Placements::new(&SemesterOrder::default());
        p.move_course("x", term(0)).unwrap();
        assert_eq!(semester_credits(term(0), &p, &catalog).total, 0);
    }

    #[test]
    fn test_degree_progress_excludes_pool() {
        let courses = sample_courses();
        let catalog = CourseCatalog::new(&courses);
        let p = sample_placements();

        assert_eq!(degree_progress("bs", &p, &catalog), 7);
        // "9" is pooled; "7" counts for both degrees
        assert_eq!(degree_progress("ms", &p, &catalog), 3);
        assert_eq!(degree_progress("phd", &p, &catalog), 0);
    }

    #[test]
    fn test_degree_progress_summary() {
        let courses = sample_courses();
        let catalog = CourseCatalog::new(&courses);
        let p = sample_placements();
        let degree = Degree::new("ms", "Master of Applied Statistics", DegreeType::Master, 30);

        let progress = DegreeProgress::calculate(&degree, &p, &catalog);
        assert_eq!(progress.earned, 3);
        assert_eq!(progress.remaining(), 27);
        assert!(!progress.is_complete());
        assert!((progress.percentage - 10.0).abs() < 1e-10);

        let nothing = Degree::new("z", "Empty", DegreeType::Doctorate, 0);
        let progress = DegreeProgress::calculate(&nothing, &p, &catalog);
        assert!(progress.is_complete());
        assert!((progress.percentage - 100.0).abs() < 1e-10);
    }

    #[test]
    fn test_huge_credits_saturate() {
        let courses = vec![
            Course::new("a", "CS 101")
                .with_credits(3_000_000_000)
                .with_degree("bs"),
            Course::new("b", "CS 102")
                .with_credits(3_000_000_000)
                .with_degree("bs"),
            Course::new("c", "CS 501")
                .with_credits(3_000_000_000)
                .with_level(Level::Graduate),
        ];
        let catalog = CourseCatalog::new(&courses);
        let mut p = Placements::new(&SemesterOrder::default());
        p.move_course("a", term(0)).unwrap();
        p.move_course("b", term(0)).unwrap();
        p.move_course("c", term(0)).unwrap();

        let credits = semester_credits(term(0), &p, &catalog);
        assert_eq!(credits.undergrad, u32::MAX);
        assert_eq!(credits.grad, 3_000_000_000);
        assert_eq!(credits.total, u32::MAX);
        assert_eq!(degree_progress("bs", &p, &catalog), u32::MAX);
    }
}
