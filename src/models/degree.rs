//! Degree model.
//!
//! A degree is a credit target. Courses opt in through their
//! `assigned_degrees`; progress is always derived from the plan and never
//! stored on the degree.

use serde::{Deserialize, Serialize};

/// Kind of degree program.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DegreeType {
    Bachelor,
    Master,
    Doctorate,
}

/// A degree program the plan works toward.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Degree {
    /// Unique degree identifier.
    pub id: String,
    /// Display name (`Master of Applied Statistics`).
    pub name: String,
    /// Program kind.
    #[serde(rename = "type")]
    pub degree_type: DegreeType,
    /// Credits needed to complete the degree.
    pub required_credits: u32,
}

impl Degree {
    /// Creates a degree.
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        degree_type: DegreeType,
        required_credits: u32,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            degree_type,
            required_credits,
        }
    }
}
