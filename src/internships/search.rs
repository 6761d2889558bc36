use super::domain::{ApplicationStatus, InternshipRecord};

/// Lookup criteria offered by the search menu. Text criteria are
/// case-insensitive substring matches; status is an exact match.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchQuery {
    Company(String),
    Role(String),
    Location(String),
    Skill(String),
    Status(ApplicationStatus),
}

impl SearchQuery {
    pub fn matches(&self, record: &InternshipRecord) -> bool {
        match self {
            SearchQuery::Company(term) => contains_ignore_case(&record.company, term),
            SearchQuery::Role(term) => contains_ignore_case(&record.role, term),
            SearchQuery::Location(term) => contains_ignore_case(&record.location, term),
            SearchQuery::Skill(term) => record
                .skills
                .iter()
                .any(|skill| contains_ignore_case(skill, term)),
            SearchQuery::Status(status) => record.status == *status,
        }
    }
}

/// Records matching `query`, in store order.
pub fn search<'a>(records: &'a [InternshipRecord], query: &SearchQuery) -> Vec<&'a InternshipRecord> {
    records.iter().filter(|record| query.matches(record)).collect()
}

fn contains_ignore_case(haystack: &str, needle: &str) -> bool {
    haystack
        .to_lowercase()
        .contains(&needle.trim().to_lowercase())
}
