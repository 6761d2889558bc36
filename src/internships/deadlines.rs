use super::domain::InternshipRecord;
use chrono::NaiveDate;
use serde::Serialize;

/// Deadlines at most this many days away count as upcoming.
pub const UPCOMING_WINDOW_DAYS: i64 = 7;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case", tag = "kind", content = "days")]
pub enum DeadlineUrgency {
    Overdue(i64),
    Today,
    /// One to three days left.
    Soon(i64),
    Later(i64),
}

impl DeadlineUrgency {
    pub fn classify(days_left: i64) -> Self {
        match days_left {
            d if d < 0 => Self::Overdue(-d),
            0 => Self::Today,
            1..=3 => Self::Soon(days_left),
            _ => Self::Later(days_left),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DeadlineEntry<'a> {
    pub record: &'a InternshipRecord,
    pub deadline: NaiveDate,
    pub days_left: i64,
}

/// Records with a readable deadline, soonest first, split by how close the deadline is.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct DeadlineBoard<'a> {
    pub overdue: Vec<DeadlineEntry<'a>>,
    pub upcoming: Vec<DeadlineEntry<'a>>,
    pub future: Vec<DeadlineEntry<'a>>,
}

impl<'a> DeadlineBoard<'a> {
    pub fn build(records: &'a [InternshipRecord], today: NaiveDate) -> Self {
        let mut entries: Vec<DeadlineEntry<'a>> = records
            .iter()
            .filter_map(|record| {
                let deadline = record.deadline_date()?;
                Some(DeadlineEntry {
                    record,
                    deadline,
                    days_left: (deadline - today).num_days(),
                })
            })
            .collect();
        entries.sort_by_key(|entry| entry.deadline);

        let mut board = Self::default();
        for entry in entries {
            if entry.days_left < 0 {
                board.overdue.push(entry);
            } else if entry.days_left <= UPCOMING_WINDOW_DAYS {
                board.upcoming.push(entry);
            } else {
                board.future.push(entry);
            }
        }
        board
    }

    pub fn is_empty(&self) -> bool {
        self.overdue.is_empty() && self.upcoming.is_empty() && self.future.is_empty()
    }
}
