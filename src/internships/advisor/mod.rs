//! Priority advisor: ranks open applications by how soon they deserve attention.
//!
//! Each record earns points from five independent factors (deadline, status,
//! skill breadth, stipend, time on the list). The raw sum can exceed 100 when
//! several factors peak together; it is kept as-is for ranking and for the
//! priority band, and only [`ScoredRecord::display_score`] is clamped.

mod insights;
mod policy;
mod rules;
mod stipend;

pub use insights::{derive_insights, AdvisorInsights, PipelineCounts};
pub use policy::PriorityLevel;
pub use stipend::{parse_stipend, StipendValue};

use super::domain::InternshipRecord;
use chrono::NaiveDate;
use serde::Serialize;
use tracing::debug;

pub const DISPLAY_SCORE_CEILING: u32 = 100;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum PriorityFactor {
    Deadline,
    Status,
    SkillBreadth,
    Stipend,
    Tenure,
}

/// Points earned by one factor, with the justification shown to the user when there is one.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ScoreComponent {
    pub factor: PriorityFactor,
    pub points: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reason: Option<String>,
}

impl ScoreComponent {
    pub(crate) fn new(factor: PriorityFactor, points: u32, reason: Option<String>) -> Self {
        Self {
            factor,
            points,
            reason,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ScoredRecord<'a> {
    pub record: &'a InternshipRecord,
    pub total_score: u32,
    pub priority: PriorityLevel,
    pub components: Vec<ScoreComponent>,
}

impl ScoredRecord<'_> {
    /// Score for the "/100" label.
    pub fn display_score(&self) -> u32 {
        self.total_score.min(DISPLAY_SCORE_CEILING)
    }

    /// Justifications in factor order.
    pub fn reasons(&self) -> Vec<&str> {
        self.components
            .iter()
            .filter_map(|component| component.reason.as_deref())
            .collect()
    }

    pub fn points_for(&self, factor: PriorityFactor) -> u32 {
        self.components
            .iter()
            .filter(|component| component.factor == factor)
            .map(|component| component.points)
            .sum()
    }
}

/// Ranked priorities plus pipeline-wide insights.
#[derive(Debug, Clone, Serialize)]
pub struct AdvisorReport<'a> {
    pub today: NaiveDate,
    pub priorities: Vec<ScoredRecord<'a>>,
    pub insights: AdvisorInsights,
}

/// Stateless scoring engine; every call recomputes from the records given.
#[derive(Debug, Clone, Copy, Default)]
pub struct PriorityAdvisor;

impl PriorityAdvisor {
    pub fn new() -> Self {
        Self
    }

    /// Scores an open record. Accepted and rejected records are not scored.
    pub fn score<'a>(&self, record: &'a InternshipRecord, today: NaiveDate) -> Option<ScoredRecord<'a>> {
        if record.status.is_terminal() {
            return None;
        }

        let components = rules::score_components(record, today);
        let total_score = components.iter().map(|component| component.points).sum();

        Some(ScoredRecord {
            record,
            total_score,
            priority: PriorityLevel::from_score(total_score),
            components,
        })
    }

    /// Open records, highest score first. Equal scores keep record order.
    pub fn rank<'a>(&self, records: &'a [InternshipRecord], today: NaiveDate) -> Vec<ScoredRecord<'a>> {
        let mut scored: Vec<ScoredRecord<'a>> = records
            .iter()
            .filter_map(|record| self.score(record, today))
            .collect();
        scored.sort_by(|a, b| b.total_score.cmp(&a.total_score));

        debug!(
            open = scored.len(),
            skipped = records.len() - scored.len(),
            "priorities ranked"
        );
        scored
    }

    pub fn report<'a>(&self, records: &'a [InternshipRecord], today: NaiveDate) -> AdvisorReport<'a> {
        AdvisorReport {
            today,
            priorities: self.rank(records, today),
            insights: derive_insights(records, today),
        }
    }
}
