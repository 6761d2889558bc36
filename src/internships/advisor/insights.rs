use crate::internships::domain::{ApplicationStatus, InternshipRecord};
use chrono::NaiveDate;
use serde::Serialize;

const HEAVY_BACKLOG: usize = 10;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct PipelineCounts {
    pub total: usize,
    pub not_applied: usize,
    pub applied: usize,
    /// Scheduled and completed interviews together.
    pub interviews: usize,
    pub accepted: usize,
    pub rejected: usize,
    pub withdrawn: usize,
}

impl PipelineCounts {
    pub fn from_records(records: &[InternshipRecord]) -> Self {
        let mut counts = Self {
            total: records.len(),
            ..Self::default()
        };

        for record in records {
            match record.status {
                ApplicationStatus::NotApplied => counts.not_applied += 1,
                ApplicationStatus::Applied => counts.applied += 1,
                ApplicationStatus::InterviewScheduled | ApplicationStatus::InterviewCompleted => {
                    counts.interviews += 1
                }
                ApplicationStatus::Accepted => counts.accepted += 1,
                ApplicationStatus::Rejected => counts.rejected += 1,
                ApplicationStatus::Withdrawn => counts.withdrawn += 1,
            }
        }

        counts
    }

    /// Accepted share of everything tracked, as a percentage.
    pub fn acceptance_rate(&self) -> f64 {
        if self.total == 0 {
            return 0.0;
        }
        self.accepted as f64 / self.total as f64 * 100.0
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AdvisorInsights {
    pub pipeline: PipelineCounts,
    pub acceptance_rate: f64,
    /// Deadlines already passed, counted across every record regardless of status.
    pub overdue_deadlines: usize,
    pub recommended_actions: Vec<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub warnings: Vec<String>,
}

pub fn derive_insights(records: &[InternshipRecord], today: NaiveDate) -> AdvisorInsights {
    let pipeline = PipelineCounts::from_records(records);
    let acceptance_rate = pipeline.acceptance_rate();

    let mut recommended_actions = Vec::new();

    if pipeline.not_applied > HEAVY_BACKLOG {
        recommended_actions.push(format!(
            "You have {} pending applications - try to apply to 2-3 per day",
            pipeline.not_applied
        ));
    } else if pipeline.not_applied > 0 {
        recommended_actions.push(format!(
            "Focus on completing your {} pending application{}",
            pipeline.not_applied,
            if pipeline.not_applied == 1 { "" } else { "s" }
        ));
    }

    if pipeline.applied > 0 && pipeline.interviews == 0 {
        recommended_actions.push(format!(
            "Consider following up on your {} application{}",
            pipeline.applied,
            if pipeline.applied == 1 { "" } else { "s" }
        ));
    }

    if pipeline.interviews > 0 {
        recommended_actions.push(format!(
            "Prep for your {} upcoming/completed interview{}!",
            pipeline.interviews,
            if pipeline.interviews == 1 { "" } else { "s" }
        ));
    }

    if pipeline.total > 0 {
        let message = if acceptance_rate > 20.0 {
            format!("Great job! {acceptance_rate:.1}% acceptance rate is solid!")
        } else if acceptance_rate > 10.0 {
            format!("Decent {acceptance_rate:.1}% acceptance rate - keep going!")
        } else {
            "Keep applying! More applications = better chances".to_string()
        };
        recommended_actions.push(message);
    }

    let overdue_deadlines = records
        .iter()
        .filter_map(|record| record.days_until_deadline(today))
        .filter(|days_left| *days_left < 0)
        .count();

    let mut warnings = Vec::new();
    if overdue_deadlines > 0 {
        warnings.push(format!(
            "You have {overdue_deadlines} overdue deadline(s) - check if applications are still open"
        ));
    }

    AdvisorInsights {
        pipeline,
        acceptance_rate,
        overdue_deadlines,
        recommended_actions,
        warnings,
    }
}
