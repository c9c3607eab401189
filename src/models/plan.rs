//! Plan snapshot and plan document.
//!
//! `Plan` owns everything the engine reads (timeline, courses, placements,
//! degrees) and offers the editing operations a planner front end performs.
//! Every edit leaves the plan consistent: new courses land in the pool,
//! deleted courses disappear from placements, deleted degrees disappear
//! from course assignments.
//!
//! `PlanDocument` is the JSON shape a plan is saved and exchanged in:
//! `{ courses, placements, degrees, notes, exportDate, version }`.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use tracing::{debug, info};

use super::{Course, CourseCatalog, Degree, Placements, SemesterOrder, Slot};
use crate::analysis::{self, DegreeProgress, DepthReport, PlanKpi, SemesterCredits};
use crate::error::PlanError;
use crate::violations::{self, Violation};

/// Version written into exported documents.
pub const DOCUMENT_VERSION: &str = "1.0";

/// Saved/exported form of a plan.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlanDocument {
    /// Course records.
    pub courses: Vec<Course>,
    /// Semester label (or `pool`) → ordered course ids.
    pub placements: BTreeMap<String, Vec<String>>,
    /// Degree records.
    pub degrees: Vec<Degree>,
    /// Free-form notes. Carried, never read by the engine.
    #[serde(default)]
    pub notes: String,
    /// ISO-8601 timestamp of the export.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub export_date: Option<String>,
    /// Document format version.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,
}

impl PlanDocument {
    /// Parses a document.
    ///
    /// # Errors
    /// `PlanError::Json` if the text is not a document (missing `courses`,
    /// `placements` or `degrees`, or malformed records).
    pub fn from_json(json: &str) -> Result<Self, PlanError> {
        let document: Self = serde_json::from_str(json)?;
        info!(
            "Loaded plan document: {} courses, {} degrees (version {})",
            document.courses.len(),
            document.degrees.len(),
            document.version.as_deref().unwrap_or("unknown")
        );
        Ok(document)
    }

    /// Pretty-printed JSON.
    pub fn to_json_pretty(&self) -> Result<String, PlanError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Builds a plan on the given timeline.
    ///
    /// Placements under unknown labels and repeated ids are dropped.
    pub fn into_plan(self, order: SemesterOrder) -> Plan {
        let placements = Placements::from_map(&self.placements, &order);
        Plan {
            order,
            courses: self.courses,
            placements,
            degrees: self.degrees,
            notes: self.notes,
        }
    }
}

/// An editable course plan.
#[derive(Debug, Clone, PartialEq)]
pub struct Plan {
    /// Semester timeline.
    pub order: SemesterOrder,
    /// Course records.
    pub courses: Vec<Course>,
    /// Where each course sits.
    pub placements: Placements,
    /// Degree records.
    pub degrees: Vec<Degree>,
    /// Free-form notes.
    pub notes: String,
}

impl Plan {
    /// Creates an empty plan on the timeline.
    pub fn new(order: SemesterOrder) -> Self {
        let placements = Placements::new(&order);
        Self {
            order,
            courses: Vec::new(),
            placements,
            degrees: Vec::new(),
            notes: String::new(),
        }
    }

    /// Id index over the plan's courses.
    pub fn catalog(&self) -> CourseCatalog<'_> {
        CourseCatalog::new(&self.courses)
    }

    /// Finds a course.
    pub fn course(&self, course_id: &str) -> Option<&Course> {
        self.courses.iter().find(|c| c.id == course_id)
    }

    /// Finds a degree.
    pub fn degree(&self, degree_id: &str) -> Option<&Degree> {
        self.degrees.iter().find(|d| d.id == degree_id)
    }

    /// Adds a course and places it in the pool.
    ///
    /// # Errors
    /// `DuplicateCourse` if the id is taken.
    pub fn add_course(&mut self, course: Course) -> Result<(), PlanError> {
        if self.course(&course.id).is_some() {
            return Err(PlanError::DuplicateCourse {
                course_id: course.id,
            });
        }
        self.placements.move_course(course.id.clone(), Slot::Pool)?;
        self.courses.push(course);
        Ok(())
    }

    /// Replaces the course with the same id. Its placement is unchanged.
    ///
    /// # Errors
    /// `UnknownCourse` if no course has that id.
    pub fn update_course(&mut self, course: Course) -> Result<(), PlanError> {
        match self.courses.iter_mut().find(|c| c.id == course.id) {
            Some(existing) => {
                *existing = course;
                Ok(())
            }
            None => Err(PlanError::UnknownCourse {
                course_id: course.id,
            }),
        }
    }

    /// Deletes a course and its placement.
    ///
    /// Other courses' prerequisite groups keep referring to the id; those
    /// references simply stop resolving.
    ///
    /// # Errors
    /// `UnknownCourse` if no course has that id.
    pub fn remove_course(&mut self, course_id: &str) -> Result<Course, PlanError> {
        let index = self
            .courses
            .iter()
            .position(|c| c.id == course_id)
            .ok_or_else(|| PlanError::UnknownCourse {
                course_id: course_id.to_string(),
            })?;
        self.placements.remove_course(course_id);
        Ok(self.courses.remove(index))
    }

    /// Moves a course to a semester or the pool.
    ///
    /// # Errors
    /// `UnknownCourse` for an unknown id, `UnknownSemester` for a rank
    /// outside the timeline.
    pub fn move_course(&mut self, course_id: &str, target: Slot) -> Result<(), PlanError> {
        if self.course(course_id).is_none() {
            return Err(PlanError::UnknownCourse {
                course_id: course_id.to_string(),
            });
        }
        self.placements.move_course(course_id, target)?;
        debug!("Moved course '{}' to {:?}", course_id, target);
        Ok(())
    }

    /// Moves a course to the slot named by a placement key (`pool` or a label).
    ///
    /// # Errors
    /// `UnknownSemester` if the key names no slot, plus the errors of
    /// [`Plan::move_course`].
    pub fn move_course_to(&mut self, course_id: &str, key: &str) -> Result<(), PlanError> {
        let slot = self
            .order
            .slot_of(key)
            .ok_or_else(|| PlanError::UnknownSemester {
                semester: key.to_string(),
            })?;
        self.move_course(course_id, slot)
    }

    /// Adds a degree, or replaces the one with the same id.
    pub fn upsert_degree(&mut self, degree: Degree) {
        match self.degrees.iter_mut().find(|d| d.id == degree.id) {
            Some(existing) => *existing = degree,
            None => self.degrees.push(degree),
        }
    }

    /// Deletes a degree and removes it from every course's assignments.
    pub fn remove_degree(&mut self, degree_id: &str) -> Option<Degree> {
        let index = self.degrees.iter().position(|d| d.id == degree_id)?;
        for course in &mut self.courses {
            course.assigned_degrees.retain(|d| d != degree_id);
        }
        Some(self.degrees.remove(index))
    }

    /// Current violations, in (semester, placement) order.
    pub fn violations(&self) -> Vec<Violation> {
        violations::find_violations(&self.courses, &self.placements, &self.order)
    }

    /// Prerequisite depth of a course.
    pub fn depth(&self, course_id: &str) -> DepthReport {
        analysis::prerequisite_depth(course_id, &self.catalog())
    }

    /// Credit load of a slot.
    pub fn semester_credits(&self, slot: Slot) -> SemesterCredits {
        analysis::semester_credits(slot, &self.placements, &self.catalog())
    }

    /// Credits earned toward a degree by scheduled courses.
    pub fn degree_progress(&self, degree_id: &str) -> u32 {
        analysis::degree_progress(degree_id, &self.placements, &self.catalog())
    }

    /// Progress summaries for every degree.
    pub fn degree_summaries(&self) -> Vec<DegreeProgress> {
        let catalog = self.catalog();
        self.degrees
            .iter()
            .map(|d| DegreeProgress::calculate(d, &self.placements, &catalog))
            .collect()
    }

    /// Summary metrics.
    pub fn kpi(&self) -> PlanKpi {
        PlanKpi::calculate(self)
    }

    /// Document form of the plan, stamped with `export_date`.
    pub fn to_document(&self, export_date: impl Into<String>) -> PlanDocument {
        PlanDocument {
            courses: self.courses.clone(),
            placements: self.placements.to_map(&self.order),
            degrees: self.degrees.clone(),
            notes: self.notes.clone(),
            export_date: Some(export_date.into()),
            version: Some(DOCUMENT_VERSION.to_string()),
        }
    }
}
