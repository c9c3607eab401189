//! Semester timeline model.
//!
//! A plan spans a fixed, ordered list of semesters plus the unscheduled
//! pool. Each semester carries an explicit [`SemesterRank`] so temporal
//! comparisons are integer comparisons, and the pool has no rank at all:
//! a course sitting in the pool is never "before" anything.
//!
//! # Labels
//!
//! Labels follow the `<Season> <Year>` shape (`Fall 2025`). The season is the
//! text before the first space and drives offering-restriction checks.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::PlanError;

/// Placement key of the unscheduled bucket.
pub const POOL_KEY: &str = "pool";

/// Default four-semester timeline.
pub const DEFAULT_SEMESTERS: [&str; 4] = ["Fall 2025", "Spring 2026", "Fall 2026", "Spring 2027"];

/// Academic season, independent of year.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Season {
    Fall,
    Spring,
    Summer,
}

impl Season {
    /// Season name as written in labels and restriction lists.
    pub fn as_str(&self) -> &'static str {
        match self {
            Season::Fall => "Fall",
            Season::Spring => "Spring",
            Season::Summer => "Summer",
        }
    }

    /// Parses a season name.
    pub fn parse(name: &str) -> Option<Self> {
        match name {
            "Fall" => Some(Season::Fall),
            "Spring" => Some(Season::Spring),
            "Summer" => Some(Season::Summer),
            _ => None,
        }
    }

    /// Extracts the season from a semester label (`Fall 2025` → `Fall`).
    pub fn from_label(label: &str) -> Option<Self> {
        label.split(' ').next().and_then(Self::parse)
    }
}

impl fmt::Display for Season {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Position of a semester in the timeline (0 = earliest).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SemesterRank(usize);

impl SemesterRank {
    /// Creates a rank from a zero-based timeline index.
    pub const fn new(index: usize) -> Self {
        Self(index)
    }

    /// Zero-based timeline index.
    #[inline]
    pub const fn index(self) -> usize {
        self.0
    }
}

/// Where a course sits in a plan.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Slot {
    /// Not yet scheduled.
    Pool,
    /// Scheduled in the semester at this rank.
    Term(SemesterRank),
}

impl Slot {
    /// Rank of the slot, `None` for the pool.
    pub fn rank(self) -> Option<SemesterRank> {
        match self {
            Slot::Pool => None,
            Slot::Term(rank) => Some(rank),
        }
    }
}

/// A semester in the timeline.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Semester {
    /// Display label, also the placement key (`Fall 2025`).
    pub label: String,
    /// Season parsed from the label.
    pub season: Season,
}

/// The configured, totally ordered semester timeline.
///
/// Serializes as the plain list of labels.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Vec<String>", into = "Vec<String>")]
pub struct SemesterOrder {
    semesters: Vec<Semester>,
}

impl SemesterOrder {
    /// Builds a timeline from labels, earliest first.
    ///
    /// # Errors
    /// Rejects an empty list, duplicate labels, the reserved `pool` key,
    /// and labels that do not start with a known season.
    pub fn new<I, S>(labels: I) -> Result<Self, PlanError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut semesters: Vec<Semester> = Vec::new();

        for label in labels {
            let label = label.into();
            if label == POOL_KEY {
                return Err(PlanError::ReservedSemesterLabel { label });
            }
            if semesters.iter().any(|s| s.label == label) {
                return Err(PlanError::DuplicateSemester { label });
            }
            let Some(season) = Season::from_label(&label) else {
                return Err(PlanError::UnknownSeason { label });
            };
            semesters.push(Semester { label, season });
        }

        if semesters.is_empty() {
            return Err(PlanError::EmptySemesterOrder);
        }

        Ok(Self { semesters })
    }

    /// Rank of the semester with this label.
    pub fn rank_of(&self, label: &str) -> Option<SemesterRank> {
        self.semesters
            .iter()
            .position(|s| s.label == label)
            .map(SemesterRank::new)
    }

    /// Resolves a placement key: `pool` or a semester label.
    pub fn slot_of(&self, key: &str) -> Option<Slot> {
        if key == POOL_KEY {
            Some(Slot::Pool)
        } else {
            self.rank_of(key).map(Slot::Term)
        }
    }

    /// Semester at a rank.
    pub fn get(&self, rank: SemesterRank) -> Option<&Semester> {
        self.semesters.get(rank.index())
    }

    /// Semesters with their ranks, earliest first.
    pub fn iter(&self) -> impl Iterator<Item = (SemesterRank, &Semester)> {
        self.semesters
            .iter()
            .enumerate()
            .map(|(i, s)| (SemesterRank::new(i), s))
    }

    /// Labels, earliest first.
    pub fn labels(&self) -> impl Iterator<Item = &str> {
        self.semesters.iter().map(|s| s.label.as_str())
    }

    /// Number of semesters.
    pub fn len(&self) -> usize {
        self.semesters.len()
    }

    /// Always false for a constructed order; kept for API symmetry.
    pub fn is_empty(&self) -> bool {
        self.semesters.is_empty()
    }
}

impl Default for SemesterOrder {
    fn default() -> Self {
        let seasons = [Season::Fall, Season::Spring, Season::Fall, Season::Spring];
        Self {
            semesters: DEFAULT_SEMESTERS
                .iter()
                .zip(seasons)
                .map(|(label, season)| Semester {
                    label: (*label).to_string(),
                    season,
                })
                .collect(),
        }
    }
}

impl TryFrom<Vec<String>> for SemesterOrder {
    type Error = PlanError;

    fn try_from(labels: Vec<String>) -> Result<Self, Self::Error> {
        Self::new(labels)
    }
}

impl From<SemesterOrder> for Vec<String> {
    fn from(order: SemesterOrder) -> Self {
        order.semesters.into_iter().map(|s| s.label).collect()
    }
}
