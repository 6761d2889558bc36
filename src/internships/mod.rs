//! Internship tracking: the record book, search and deadline views, and the
//! two recommendation engines (role matching and the priority advisor).

pub mod advisor;
pub mod deadlines;
pub mod domain;
pub mod import;
pub mod matching;
pub mod search;
pub mod stats;
pub mod store;

pub use advisor::{
    AdvisorInsights, AdvisorReport, PipelineCounts, PriorityAdvisor, PriorityFactor,
    PriorityLevel, ScoreComponent, ScoredRecord,
};
pub use deadlines::{DeadlineBoard, DeadlineEntry, DeadlineUrgency};
pub use domain::{ApplicationStatus, InternshipRecord, NewInternship, RecordEdit};
pub use import::{CsvImporter, ImportError};
pub use matching::{MatchOutcome, RecordMatch, RoleCatalog, RoleMatch, RoleMatcher, SkillSet};
pub use search::SearchQuery;
pub use stats::PipelineStatistics;
pub use store::{InternshipBook, JsonFileStore, MemoryStore, RecordStore, StoreError};
