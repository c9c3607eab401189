//! Prerequisite requirement model.
//!
//! A course's prerequisites are a single AND container holding an ordered
//! list of groups. Each group is satisfied on its own terms:
//!
//! | Group | Satisfied when |
//! |-------|----------------|
//! | `CourseChoice` | at least one listed course is scheduled earlier |
//! | `Pattern` | at least `count` earlier courses match department/level |
//!
//! The JSON shape is `{ "type": "and", "groups": [...] }` with each group
//! tagged by `"type": "course"` or `"type": "pattern"`.

use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;

use super::CourseCatalog;

/// Combinator of the top-level container. Only AND exists.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PrerequisiteLogic {
    #[default]
    And,
}

/// The AND container of prerequisite groups.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Prerequisites {
    /// Always `and`.
    #[serde(rename = "type", default)]
    pub logic: PrerequisiteLogic,
    /// Groups that must all be satisfied.
    #[serde(default)]
    pub groups: Vec<PrerequisiteGroup>,
}

/// One AND-ed unit of a prerequisite requirement.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum PrerequisiteGroup {
    /// Any one of these course ids (OR).
    #[serde(rename = "course")]
    CourseChoice {
        #[serde(default)]
        courses: Vec<String>,
    },
    /// At least `count` earlier courses matching the filters.
    Pattern {
        count: u32,
        /// Leading digit of the course number (`"2"` matches `CS 210`).
        #[serde(
            default,
            deserialize_with = "empty_as_none",
            skip_serializing_if = "Option::is_none"
        )]
        level: Option<String>,
        /// Letter prefix of the course code (`"MATH"`).
        #[serde(
            default,
            deserialize_with = "empty_as_none",
            skip_serializing_if = "Option::is_none"
        )]
        department: Option<String>,
    },
}

/// Empty filter strings mean "no filter".
fn empty_as_none<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<String>::deserialize(deserializer)?;
    Ok(value.filter(|s| !s.is_empty()))
}

impl Prerequisites {
    /// Creates an empty container.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a group.
    pub fn with_group(mut self, group: PrerequisiteGroup) -> Self {
        self.groups.push(group);
        self
    }

    /// Whether there is nothing to satisfy.
    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }

    /// Explicit course ids across all course-choice groups, in order.
    ///
    /// Pattern groups name no courses and contribute nothing.
    pub fn course_ids(&self) -> impl Iterator<Item = &str> {
        self.groups.iter().flat_map(|g| g.course_ids())
    }
}

impl PrerequisiteGroup {
    /// Course-choice group over the given ids.
    pub fn one_of<I, S>(courses: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::CourseChoice {
            courses: courses.into_iter().map(Into::into).collect(),
        }
    }

    /// Unfiltered pattern group: any `count` earlier courses.
    pub fn pattern(count: u32) -> Self {
        Self::Pattern {
            count,
            level: None,
            department: None,
        }
    }

    /// Sets the level filter of a pattern group. No effect on course-choice groups.
    pub fn with_level(mut self, level: impl Into<String>) -> Self {
        if let Self::Pattern { level: slot, .. } = &mut self {
            *slot = Some(level.into());
        }
        self
    }

    /// Sets the department filter of a pattern group. No effect on course-choice groups.
    pub fn with_department(mut self, department: impl Into<String>) -> Self {
        if let Self::Pattern {
            department: slot, ..
        } = &mut self
        {
            *slot = Some(department.into());
        }
        self
    }

    /// Explicit course ids of this group.
    pub fn course_ids(&self) -> impl Iterator<Item = &str> {
        let ids: &[String] = match self {
            Self::CourseChoice { courses } => courses,
            Self::Pattern { .. } => &[],
        };
        ids.iter().map(String::as_str)
    }

    /// Human-readable description, resolving course ids through the catalog.
    ///
    /// Unknown ids render as `Unknown course (ID: ..)`.
    pub fn describe(&self, catalog: &CourseCatalog<'_>) -> String {
        match self {
            Self::CourseChoice { courses } => {
                let names: Vec<String> = courses
                    .iter()
                    .map(|id| match catalog.get(id) {
                        Some(c) => format!("{} - {}", c.code, c.title),
                        None => format!("Unknown course (ID: {id})"),
                    })
                    .collect();
                format!("One of: {}", names.join(", "))
            }
            Self::Pattern { .. } => self.to_string(),
        }
    }
}

impl fmt::Display for PrerequisiteGroup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::CourseChoice { courses } => write!(f, "One of: {}", courses.join(", ")),
            Self::Pattern {
                count,
                level,
                department,
            } => {
                write!(f, "At least {count} ")?;
                if let Some(level) = level {
                    write!(f, "{level}xx level ")?;
                }
                f.write_str(department.as_deref().unwrap_or("courses"))
            }
        }
    }
}
