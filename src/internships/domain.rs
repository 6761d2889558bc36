use chrono::NaiveDate;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

pub const DATE_FORMAT: &str = "%Y-%m-%d";
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Position of an application in the pipeline, in pipeline order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum ApplicationStatus {
    #[serde(rename = "Not Applied")]
    NotApplied,
    #[serde(rename = "Applied")]
    Applied,
    #[serde(rename = "Interview Scheduled")]
    InterviewScheduled,
    #[serde(rename = "Interview Completed")]
    InterviewCompleted,
    #[serde(rename = "Accepted")]
    Accepted,
    #[serde(rename = "Rejected")]
    Rejected,
    #[serde(rename = "Withdrawn")]
    Withdrawn,
}

impl ApplicationStatus {
    pub const fn ordered() -> [Self; 7] {
        [
            Self::NotApplied,
            Self::Applied,
            Self::InterviewScheduled,
            Self::InterviewCompleted,
            Self::Accepted,
            Self::Rejected,
            Self::Withdrawn,
        ]
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::NotApplied => "Not Applied",
            Self::Applied => "Applied",
            Self::InterviewScheduled => "Interview Scheduled",
            Self::InterviewCompleted => "Interview Completed",
            Self::Accepted => "Accepted",
            Self::Rejected => "Rejected",
            Self::Withdrawn => "Withdrawn",
        }
    }

    /// Accepted and rejected applications have a final answer and are never prioritized.
    pub const fn is_terminal(self) -> bool {
        matches!(self, Self::Accepted | Self::Rejected)
    }

    pub const fn is_interview(self) -> bool {
        matches!(self, Self::InterviewScheduled | Self::InterviewCompleted)
    }

    /// Statuses that imply an application was actually sent.
    pub const fn is_submitted(self) -> bool {
        matches!(
            self,
            Self::Applied
                | Self::InterviewScheduled
                | Self::InterviewCompleted
                | Self::Accepted
                | Self::Rejected
        )
    }
}

impl fmt::Display for ApplicationStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown status '{0}' (expected one of: Not Applied, Applied, Interview Scheduled, Interview Completed, Accepted, Rejected, Withdrawn)")]
pub struct UnknownStatus(pub String);

impl FromStr for ApplicationStatus {
    type Err = UnknownStatus;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        let key: String = raw
            .trim()
            .chars()
            .filter(|ch| !matches!(ch, ' ' | '_' | '-'))
            .collect::<String>()
            .to_ascii_lowercase();

        Self::ordered()
            .into_iter()
            .find(|status| status.label().replace(' ', "").to_ascii_lowercase() == key)
            .ok_or_else(|| UnknownStatus(raw.to_string()))
    }
}

/// One tracked internship opportunity as persisted in the record file.
///
/// Dates are kept as entered so a hand-edited file with a bad date still loads;
/// use [`InternshipRecord::added_on`] and [`InternshipRecord::deadline_date`]
/// to get parsed values.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InternshipRecord {
    pub id: u32,
    pub company: String,
    pub role: String,
    #[serde(default)]
    pub location: String,
    #[serde(default)]
    pub stipend: String,
    #[serde(default)]
    pub duration: String,
    #[serde(default)]
    pub skills: Vec<String>,
    pub status: ApplicationStatus,
    pub date_added: String,
    #[serde(
        default,
        deserialize_with = "empty_string_as_none",
        serialize_with = "none_as_empty_string"
    )]
    pub deadline: Option<String>,
    #[serde(
        default,
        deserialize_with = "empty_string_as_none",
        serialize_with = "none_as_empty_string"
    )]
    pub notes: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_updated: Option<String>,
}

impl InternshipRecord {
    pub fn added_on(&self) -> Option<NaiveDate> {
        parse_date(&self.date_added).ok()
    }

    /// `None` when no deadline is set or when the stored text is not a date.
    pub fn deadline_date(&self) -> Option<NaiveDate> {
        self.deadline
            .as_deref()
            .and_then(|raw| parse_date(raw).ok())
    }

    pub fn days_until_deadline(&self, today: NaiveDate) -> Option<i64> {
        self.deadline_date().map(|deadline| days_until(deadline, today))
    }

    pub fn title(&self) -> String {
        format!("{} at {}", self.role, self.company)
    }
}

/// User-supplied fields for a new record; the book assigns id, status and date.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NewInternship {
    pub company: String,
    pub role: String,
    pub location: String,
    pub stipend: String,
    pub duration: String,
    pub skills: Vec<String>,
    pub deadline: Option<NaiveDate>,
    pub notes: Option<String>,
}

/// A single field change applied by `InternshipBook::edit`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RecordEdit {
    Company(String),
    Role(String),
    Location(String),
    Stipend(String),
    Duration(String),
    Skills(Vec<String>),
    Deadline(NaiveDate),
    Notes(Option<String>),
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid date '{0}': expected YYYY-MM-DD")]
pub struct InvalidDate(pub String);

pub fn parse_date(raw: &str) -> Result<NaiveDate, InvalidDate> {
    NaiveDate::parse_from_str(raw.trim(), DATE_FORMAT).map_err(|_| InvalidDate(raw.to_string()))
}

/// Whole calendar days from `today` to `date`; negative once the date has passed.
pub fn days_until(date: NaiveDate, today: NaiveDate) -> i64 {
    (date - today).num_days()
}

/// Splits comma-separated skill input, trimming entries and dropping empty ones.
pub fn parse_skill_list(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|skill| !skill.is_empty())
        .map(str::to_string)
        .collect()
}

/// Suffix for a day count: "1 day", "3 days".
pub fn plural(count: i64) -> &'static str {
    if count == 1 {
        ""
    } else {
        "s"
    }
}

pub(crate) fn empty_string_as_none<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let opt = Option::<String>::deserialize(deserializer)?;
    Ok(opt.filter(|value| !value.trim().is_empty()))
}

fn none_as_empty_string<S>(value: &Option<String>, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    serializer.serialize_str(value.as_deref().unwrap_or_default())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_parses_labels_and_snake_case() {
        assert_eq!(
            "interview scheduled".parse::<ApplicationStatus>(),
            Ok(ApplicationStatus::InterviewScheduled)
        );
        assert_eq!(
            "not_applied".parse::<ApplicationStatus>(),
            Ok(ApplicationStatus::NotApplied)
        );
        assert_eq!(
            " Withdrawn ".parse::<ApplicationStatus>(),
            Ok(ApplicationStatus::Withdrawn)
        );
        assert!("ghosted".parse::<ApplicationStatus>().is_err());
    }

    #[test]
    fn status_serializes_with_label() {
        let json = serde_json::to_string(&ApplicationStatus::InterviewCompleted)
            .expect("status serializes");
        assert_eq!(json, "\"Interview Completed\"");
    }

    #[test]
    fn empty_deadline_and_notes_load_as_none() {
        let json = r#"{
            "id": 1,
            "company": "Acme",
            "role": "Intern",
            "location": "Remote",
            "stipend": "Unpaid",
            "duration": "3 months",
            "skills": ["Rust"],
            "status": "Not Applied",
            "date_added": "2025-01-10",
            "deadline": "",
            "notes": ""
        }"#;

        let record: InternshipRecord = serde_json::from_str(json).expect("record parses");
        assert!(record.deadline.is_none());
        assert!(record.notes.is_none());
        assert_eq!(record.added_on(), NaiveDate::from_ymd_opt(2025, 1, 10));
    }

    #[test]
    fn unset_deadline_and_notes_are_written_as_empty_strings() {
        let record = InternshipRecord {
            id: 3,
            company: "Acme".to_string(),
            role: "Intern".to_string(),
            location: String::new(),
            stipend: String::new(),
            duration: String::new(),
            skills: Vec::new(),
            status: ApplicationStatus::NotApplied,
            date_added: "2025-01-10".to_string(),
            deadline: None,
            notes: None,
            last_updated: None,
        };

        let value = serde_json::to_value(&record).expect("record serializes");
        assert_eq!(value["deadline"], "");
        assert_eq!(value["notes"], "");

        let reloaded: InternshipRecord = serde_json::from_value(value).expect("record parses");
        assert_eq!(reloaded, record);
    }

    #[test]
    fn plural_suffix_only_for_counts_other_than_one() {
        assert_eq!(plural(1), "");
        assert_eq!(plural(0), "s");
        assert_eq!(plural(4), "s");
    }

    #[test]
    fn malformed_dates_read_as_missing() {
        let json = r#"{
            "id": 1,
            "company": "Acme",
            "role": "Intern",
            "status": "Applied",
            "date_added": "last week",
            "deadline": "31/12/2025"
        }"#;

        let record: InternshipRecord = serde_json::from_str(json).expect("record parses");
        assert!(record.added_on().is_none());
        assert_eq!(record.deadline.as_deref(), Some("31/12/2025"));
        assert!(record.deadline_date().is_none());
    }

    #[test]
    fn skill_list_drops_blank_entries() {
        assert_eq!(
            parse_skill_list(" Python, ,SQL ,, Machine Learning"),
            vec!["Python", "SQL", "Machine Learning"]
        );
        assert!(parse_skill_list("  ").is_empty());
    }

    #[test]
    fn days_until_counts_calendar_days() {
        let today = NaiveDate::from_ymd_opt(2025, 3, 1).expect("valid date");
        let due = NaiveDate::from_ymd_opt(2025, 3, 4).expect("valid date");
        assert_eq!(days_until(due, today), 3);
        assert_eq!(days_until(today, due), -3);
        assert_eq!(days_until(today, today), 0);
    }
}
