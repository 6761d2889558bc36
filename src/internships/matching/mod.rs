//! Skill-to-role matching.
//!
//! The matcher compares a user's skills against the role catalog and against
//! the skills listed on tracked internships. Every result carries the share of
//! the *target's* skills the user already has, so a role asking for five
//! skills where the user knows two is a 40% match.

mod catalog;
mod skills;

pub use catalog::{RoleCatalog, RoleProfile};
pub use skills::SkillSet;

use super::domain::InternshipRecord;
use serde::Serialize;
use std::cmp::Ordering;
use tracing::debug;

/// How well the user's skills cover one catalog role.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RoleMatch {
    pub role: String,
    /// Percentage of required skills covered, rounded to one decimal.
    pub match_percent: f64,
    pub matched_skills: Vec<String>,
    pub missing_skills: Vec<String>,
}

/// A tracked internship whose listed skills overlap the user's.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RecordMatch<'a> {
    pub record: &'a InternshipRecord,
    pub match_percent: f64,
    pub matched_skills: Vec<String>,
}

/// Result of a matching request. An empty skill list is reported separately
/// from a list that simply matched nothing.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "outcome", content = "matches", rename_all = "snake_case")]
pub enum MatchOutcome<T> {
    NoSkillsProvided,
    Ranked(Vec<T>),
}

impl<T> MatchOutcome<T> {
    /// Ranked matches; empty when no skills were provided.
    pub fn matches(&self) -> &[T] {
        match self {
            MatchOutcome::NoSkillsProvided => &[],
            MatchOutcome::Ranked(matches) => matches,
        }
    }

    pub fn is_no_skills(&self) -> bool {
        matches!(self, MatchOutcome::NoSkillsProvided)
    }

    /// Skills were given but nothing overlapped.
    pub fn is_empty_result(&self) -> bool {
        matches!(self, MatchOutcome::Ranked(matches) if matches.is_empty())
    }
}

/// Stateless matcher over an injected catalog.
#[derive(Debug, Clone)]
pub struct RoleMatcher {
    catalog: RoleCatalog,
}

impl Default for RoleMatcher {
    fn default() -> Self {
        Self::new(RoleCatalog::standard())
    }
}

impl RoleMatcher {
    pub fn new(catalog: RoleCatalog) -> Self {
        Self { catalog }
    }

    pub fn catalog(&self) -> &RoleCatalog {
        &self.catalog
    }

    /// Scores a single role, including roles the user has no skills for.
    pub fn evaluate_role(&self, user_skills: &SkillSet, role: &RoleProfile) -> RoleMatch {
        let matched_skills = role.required.intersection(user_skills);
        let missing_skills = role.required.difference(user_skills);
        let match_percent = coverage_percent(matched_skills.len(), role.required.len());

        RoleMatch {
            role: role.name.clone(),
            match_percent,
            matched_skills,
            missing_skills,
        }
    }

    /// Catalog roles sharing at least one skill with the user, best coverage
    /// first. Equal coverage keeps catalog order.
    pub fn suggest_roles(&self, user_skills: &SkillSet) -> MatchOutcome<RoleMatch> {
        if user_skills.is_empty() {
            return MatchOutcome::NoSkillsProvided;
        }

        let mut matches: Vec<RoleMatch> = self
            .catalog
            .roles()
            .iter()
            .map(|role| self.evaluate_role(user_skills, role))
            .filter(|role_match| role_match.match_percent > 0.0)
            .collect();

        matches.sort_by(|a, b| descending(a.match_percent, b.match_percent));
        debug!(roles = matches.len(), "role suggestions ranked");
        MatchOutcome::Ranked(matches)
    }

    /// Tracked internships whose skills overlap the user's, best coverage
    /// first. Records listing no skills never match.
    pub fn match_records<'a>(
        &self,
        user_skills: &SkillSet,
        records: &'a [InternshipRecord],
    ) -> MatchOutcome<RecordMatch<'a>> {
        if user_skills.is_empty() {
            return MatchOutcome::NoSkillsProvided;
        }

        let mut matches: Vec<RecordMatch<'a>> = records
            .iter()
            .filter_map(|record| {
                let record_skills = SkillSet::from_skills(&record.skills);
                let matched_skills = record_skills.intersection(user_skills);
                if matched_skills.is_empty() {
                    return None;
                }
                let match_percent = coverage_percent(matched_skills.len(), record_skills.len());
                Some(RecordMatch {
                    record,
                    match_percent,
                    matched_skills,
                })
            })
            .collect();

        matches.sort_by(|a, b| descending(a.match_percent, b.match_percent));
        debug!(records = matches.len(), "record matches ranked");
        MatchOutcome::Ranked(matches)
    }
}

/// `100 * matched / required`, rounded to one decimal. An empty requirement
/// list covers nothing.
fn coverage_percent(matched: usize, required: usize) -> f64 {
    if required == 0 {
        return 0.0;
    }
    let raw = matched as f64 * 100.0 / required as f64;
    (raw * 10.0).round() / 10.0
}

fn descending(a: f64, b: f64) -> Ordering {
    b.partial_cmp(&a).unwrap_or(Ordering::Equal)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn coverage_guards_empty_requirements() {
        assert_eq!(coverage_percent(0, 0), 0.0);
        assert_eq!(coverage_percent(3, 0), 0.0);
    }

    #[test]
    fn coverage_rounds_to_one_decimal() {
        assert_eq!(coverage_percent(1, 3), 33.3);
        assert_eq!(coverage_percent(2, 3), 66.7);
        assert_eq!(coverage_percent(5, 5), 100.0);
    }
}
