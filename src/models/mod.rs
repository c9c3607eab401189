//! Course plan domain models.
//!
//! Provides the data types the engine reads: the course catalog with
//! prerequisite groups, degrees, the semester timeline, and the placement
//! store that maps courses to semesters or the unscheduled pool.
//!
//! # Document Mapping
//!
//! | Model | Plan document field |
//! |-------|---------------------|
//! | `Course` | `courses[]` |
//! | `Placements` | `placements` (label → ids, plus `pool`) |
//! | `Degree` | `degrees[]` |
//! | `SemesterOrder` | implied by the placement labels |

mod course;
mod degree;
mod placement;
mod plan;
mod prerequisite;
mod semester;

pub use course::{Course, CourseCatalog, CourseCode, DeliveryMode, Level};
pub use degree::{Degree, DegreeType};
pub use placement::Placements;
pub use plan::{Plan, PlanDocument, DOCUMENT_VERSION};
pub use prerequisite::{PrerequisiteGroup, PrerequisiteLogic, Prerequisites};
pub use semester::{
    Season, Semester, SemesterOrder, SemesterRank, Slot, DEFAULT_SEMESTERS, POOL_KEY,
};
