//! Course model.
//!
//! A course is the unit placed into semesters. Besides its identity and
//! credit value it carries the offering rules (delivery mode plus per-mode
//! season restrictions), the degrees it counts toward, and its prerequisites.

use regex::Regex;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::sync::LazyLock;

use super::{PrerequisiteGroup, Prerequisites, Season};

/// `LETTERS <space> DIGIT DIGIT DIGIT`, e.g. `STAT 415`. ASCII digits only.
static COURSE_CODE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^([A-Z]+)\s+([0-9])([0-9]{2})$").expect("course code pattern is valid")
});

/// Academic level, used to split semester credit load.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Level {
    Undergraduate,
    Graduate,
}

/// How a course is delivered. Selects which restriction list applies.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DeliveryMode {
    #[default]
    #[serde(rename = "In-Person")]
    InPerson,
    Online,
    /// Offered both ways; available if either mode is.
    Both,
    /// Unrecognized mode. No offering check applies.
    #[serde(other)]
    Other,
}

impl DeliveryMode {
    /// Name as written in plan documents and messages.
    pub fn as_str(&self) -> &'static str {
        match self {
            DeliveryMode::InPerson => "In-Person",
            DeliveryMode::Online => "Online",
            DeliveryMode::Both => "Both",
            DeliveryMode::Other => "Other",
        }
    }
}

/// A plannable course.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Course {
    /// Unique course identifier.
    pub id: String,
    /// Department and number (`CS 210`).
    pub code: String,
    /// Course title.
    #[serde(default)]
    pub title: String,
    /// Credit value.
    pub credits: u32,
    /// Academic level. `None` counts toward neither credit bucket.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub level: Option<Level>,
    /// Free text.
    #[serde(default)]
    pub description: String,
    /// Delivery mode.
    #[serde(default)]
    pub delivery_mode: DeliveryMode,
    /// Seasons the in-person section runs. Empty = every season.
    #[serde(default)]
    pub semester_restrictions_in_person: Vec<Season>,
    /// Seasons the online section runs. Empty = every season.
    #[serde(default)]
    pub semester_restrictions_online: Vec<Season>,
    /// Degree ids this course counts toward.
    #[serde(default)]
    pub assigned_degrees: Vec<String>,
    /// Prerequisite groups (AND).
    #[serde(default)]
    pub prerequisites: Prerequisites,
}

impl Course {
    /// Creates a 3-credit, in-person undergraduate course with no restrictions.
    pub fn new(id: impl Into<String>, code: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            code: code.into(),
            title: String::new(),
            credits: 3,
            level: Some(Level::Undergraduate),
            description: String::new(),
            delivery_mode: DeliveryMode::InPerson,
            semester_restrictions_in_person: Vec::new(),
            semester_restrictions_online: Vec::new(),
            assigned_degrees: Vec::new(),
            prerequisites: Prerequisites::default(),
        }
    }

    /// Sets the title.
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    /// Sets the description.
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Sets the credit value.
    pub fn with_credits(mut self, credits: u32) -> Self {
        self.credits = credits;
        self
    }

    /// Sets the level.
    pub fn with_level(mut self, level: Level) -> Self {
        self.level = Some(level);
        self
    }

    /// Sets the delivery mode.
    pub fn with_delivery_mode(mut self, mode: DeliveryMode) -> Self {
        self.delivery_mode = mode;
        self
    }

    /// Restricts the in-person section to these seasons.
    pub fn with_in_person_seasons(mut self, seasons: impl IntoIterator<Item = Season>) -> Self {
        self.semester_restrictions_in_person = seasons.into_iter().collect();
        self
    }

    /// Restricts the online section to these seasons.
    pub fn with_online_seasons(mut self, seasons: impl IntoIterator<Item = Season>) -> Self {
        self.semester_restrictions_online = seasons.into_iter().collect();
        self
    }

    /// Counts this course toward a degree.
    pub fn with_degree(mut self, degree_id: impl Into<String>) -> Self {
        self.assigned_degrees.push(degree_id.into());
        self
    }

    /// Adds a prerequisite group.
    pub fn with_prerequisite(mut self, group: PrerequisiteGroup) -> Self {
        self.prerequisites.groups.push(group);
        self
    }

    /// Whether this course counts toward the degree.
    pub fn counts_toward(&self, degree_id: &str) -> bool {
        self.assigned_degrees.iter().any(|d| d == degree_id)
    }

    /// Parsed code, `None` if it does not have the `DEPT 123` shape.
    pub fn parsed_code(&self) -> Option<CourseCode> {
        CourseCode::parse(&self.code)
    }
}

/// A course code split into department, level digit and remaining digits.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CourseCode {
    /// Letter prefix (`MATH`).
    pub department: String,
    /// First digit of the number (`2` in `210`).
    pub level: char,
    /// Last two digits (`10` in `210`).
    pub number: String,
}

impl CourseCode {
    /// Parses `LETTERS <space> DIGIT DIGIT DIGIT`.
    pub fn parse(code: &str) -> Option<Self> {
        let caps = COURSE_CODE.captures(code)?;
        Some(Self {
            department: caps.get(1)?.as_str().to_string(),
            level: caps.get(2)?.as_str().chars().next()?,
            number: caps.get(3)?.as_str().to_string(),
        })
    }

    /// Whether the code passes both optional filters.
    pub fn matches(&self, department: Option<&str>, level: Option<&str>) -> bool {
        let department_ok = department.is_none_or(|d| d == self.department);
        let level_ok = level.is_none_or(|l| {
            let mut chars = l.chars();
            chars.next() == Some(self.level) && chars.next().is_none()
        });
        department_ok && level_ok
    }
}

/// Id index over a course list.
///
/// When ids collide the first course wins.
#[derive(Debug, Clone, Default)]
pub struct CourseCatalog<'a> {
    by_id: HashMap<&'a str, &'a Course>,
}

impl<'a> CourseCatalog<'a> {
    /// Indexes the courses by id.
    pub fn new(courses: &'a [Course]) -> Self {
        let mut by_id = HashMap::with_capacity(courses.len());
        for course in courses {
            by_id.entry(course.id.as_str()).or_insert(course);
        }
        Self { by_id }
    }

    /// Looks up a course.
    pub fn get(&self, id: &str) -> Option<&'a Course> {
        self.by_id.get(id).copied()
    }

    /// Whether the id resolves.
    pub fn contains(&self, id: &str) -> bool {
        self.by_id.contains_key(id)
    }

    /// Number of distinct ids.
    pub fn len(&self) -> usize {
        self.by_id.len()
    }

    /// Whether the catalog is empty.
    pub fn is_empty(&self) -> bool {
        self.by_id.is_empty()
    }
}
