use super::domain::{ApplicationStatus, InternshipRecord};
use serde::Serialize;

pub const TOP_COMPANIES: usize = 5;
pub const TOP_SKILLS: usize = 10;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StatusShare {
    pub status: ApplicationStatus,
    pub status_label: &'static str,
    pub count: usize,
    pub percentage: f64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CountEntry {
    pub name: String,
    pub count: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SuccessRate {
    pub accepted: usize,
    /// Records that reached at least the "Applied" stage.
    pub submitted: usize,
    pub percentage: f64,
}

/// Overview of everything in the tracker.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PipelineStatistics {
    pub total: usize,
    pub status_breakdown: Vec<StatusShare>,
    pub top_companies: Vec<CountEntry>,
    pub top_skills: Vec<CountEntry>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub success_rate: Option<SuccessRate>,
}

impl PipelineStatistics {
    pub fn from_records(records: &[InternshipRecord]) -> Self {
        let total = records.len();

        let status_breakdown = ApplicationStatus::ordered()
            .into_iter()
            .filter_map(|status| {
                let count = records.iter().filter(|record| record.status == status).count();
                (count > 0).then(|| StatusShare {
                    status,
                    status_label: status.label(),
                    count,
                    percentage: count as f64 / total as f64 * 100.0,
                })
            })
            .collect();

        let top_companies = most_common(
            records.iter().map(|record| record.company.as_str()),
            TOP_COMPANIES,
            NameMatch::Exact,
        );
        let top_skills = most_common(
            records
                .iter()
                .flat_map(|record| record.skills.iter().map(String::as_str)),
            TOP_SKILLS,
            NameMatch::IgnoreCase,
        );

        let accepted = records
            .iter()
            .filter(|record| record.status == ApplicationStatus::Accepted)
            .count();
        let submitted = records
            .iter()
            .filter(|record| record.status.is_submitted())
            .count();
        let success_rate = (submitted > 0).then(|| SuccessRate {
            accepted,
            submitted,
            percentage: accepted as f64 / submitted as f64 * 100.0,
        });

        Self {
            total,
            status_breakdown,
            top_companies,
            top_skills,
            success_rate,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum NameMatch {
    Exact,
    IgnoreCase,
}

/// Highest count first, ties in first-seen order. Under `IgnoreCase` the
/// first spelling seen is the one displayed.
fn most_common<'a, I>(names: I, limit: usize, matching: NameMatch) -> Vec<CountEntry>
where
    I: Iterator<Item = &'a str>,
{
    let mut entries: Vec<(String, CountEntry)> = Vec::new();
    for name in names {
        let trimmed = name.trim();
        if trimmed.is_empty() {
            continue;
        }
        let key = match matching {
            NameMatch::Exact => trimmed.to_string(),
            NameMatch::IgnoreCase => trimmed.to_lowercase(),
        };
        match entries.iter_mut().find(|(existing, _)| *existing == key) {
            Some((_, entry)) => entry.count += 1,
            None => entries.push((
                key,
                CountEntry {
                    name: trimmed.to_string(),
                    count: 1,
                },
            )),
        }
    }

    let mut counted: Vec<CountEntry> = entries.into_iter().map(|(_, entry)| entry).collect();
    counted.sort_by(|a, b| b.count.cmp(&a.count));
    counted.truncate(limit);
    counted
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(company: &str, skills: &[&str], status: ApplicationStatus) -> InternshipRecord {
        InternshipRecord {
            id: 0,
            company: company.to_string(),
            role: "Intern".to_string(),
            location: String::new(),
            stipend: String::new(),
            duration: String::new(),
            skills: skills.iter().map(|skill| skill.to_string()).collect(),
            status,
            date_added: "2025-01-01".to_string(),
            deadline: None,
            notes: None,
            last_updated: None,
        }
    }

    #[test]
    fn breakdown_follows_pipeline_order() {
        let records = vec![
            record("A", &[], ApplicationStatus::Rejected),
            record("B", &[], ApplicationStatus::NotApplied),
            record("C", &[], ApplicationStatus::NotApplied),
            record("D", &[], ApplicationStatus::Applied),
        ];

        let stats = PipelineStatistics::from_records(&records);
        let labels: Vec<(&str, usize)> = stats
            .status_breakdown
            .iter()
            .map(|share| (share.status_label, share.count))
            .collect();
        assert_eq!(
            labels,
            vec![("Not Applied", 2), ("Applied", 1), ("Rejected", 1)]
        );
        assert_eq!(stats.status_breakdown[0].percentage, 50.0);
    }

    #[test]
    fn top_skills_merge_case_and_keep_first_spelling() {
        let records = vec![
            record("A", &["Python", "SQL"], ApplicationStatus::NotApplied),
            record("B", &["python", "Docker"], ApplicationStatus::NotApplied),
            record("C", &["Docker", "PYTHON"], ApplicationStatus::NotApplied),
        ];

        let stats = PipelineStatistics::from_records(&records);
        assert_eq!(
            stats.top_skills[0],
            CountEntry {
                name: "Python".to_string(),
                count: 3
            }
        );
        assert_eq!(stats.top_skills[1].name, "Docker");
        assert_eq!(stats.top_skills[2].name, "SQL");
    }

    #[test]
    fn companies_are_counted_by_exact_name() {
        let records = vec![
            record("Acme", &[], ApplicationStatus::NotApplied),
            record("acme", &[], ApplicationStatus::NotApplied),
            record("Acme", &[], ApplicationStatus::Applied),
        ];

        let stats = PipelineStatistics::from_records(&records);
        let companies: Vec<(&str, usize)> = stats
            .top_companies
            .iter()
            .map(|entry| (entry.name.as_str(), entry.count))
            .collect();
        assert_eq!(companies, vec![("Acme", 2), ("acme", 1)]);
    }

    #[test]
    fn success_rate_uses_submitted_applications() {
        let records = vec![
            record("A", &[], ApplicationStatus::Accepted),
            record("B", &[], ApplicationStatus::Rejected),
            record("C", &[], ApplicationStatus::InterviewScheduled),
            record("D", &[], ApplicationStatus::Applied),
            record("E", &[], ApplicationStatus::NotApplied),
            record("F", &[], ApplicationStatus::Withdrawn),
        ];

        let rate = PipelineStatistics::from_records(&records)
            .success_rate
            .expect("applications submitted");
        assert_eq!(rate.accepted, 1);
        assert_eq!(rate.submitted, 4);
        assert_eq!(rate.percentage, 25.0);
    }

    #[test]
    fn no_submissions_means_no_success_rate() {
        let records = vec![record("A", &[], ApplicationStatus::NotApplied)];
        assert!(PipelineStatistics::from_records(&records)
            .success_rate
            .is_none());
    }
}
