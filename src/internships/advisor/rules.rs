use super::stipend::{parse_stipend, StipendValue};
use super::{PriorityFactor, ScoreComponent};
use crate::internships::domain::{days_until, plural, ApplicationStatus, InternshipRecord};
use chrono::NaiveDate;

/// Runs every factor against the record. Factors are independent: one
/// unreadable date only removes that factor's contribution.
pub(crate) fn score_components(record: &InternshipRecord, today: NaiveDate) -> Vec<ScoreComponent> {
    [
        deadline_component(record, today),
        status_component(record.status),
        skills_component(record.skills.len()),
        stipend_component(&record.stipend),
        tenure_component(record, today),
    ]
    .into_iter()
    .flatten()
    .collect()
}

fn deadline_component(record: &InternshipRecord, today: NaiveDate) -> Option<ScoreComponent> {
    let days_left = days_until(record.deadline_date()?, today);

    let (points, reason) = match days_left {
        d if d < 0 => (5, Some("Overdue - apply ASAP if still interested".to_string())),
        0 => (30, Some("Deadline is TODAY - urgent!".to_string())),
        1..=3 => (
            25,
            Some(format!(
                "Only {days_left} day{} left - very urgent",
                plural(days_left)
            )),
        ),
        4..=7 => (20, Some(format!("{days_left} days left - should apply soon"))),
        8..=14 => (
            15,
            Some(format!("{days_left} days left - good time to apply")),
        ),
        _ => (10, None),
    };

    Some(ScoreComponent::new(PriorityFactor::Deadline, points, reason))
}

fn status_component(status: ApplicationStatus) -> Option<ScoreComponent> {
    let (points, reason) = match status {
        ApplicationStatus::NotApplied => (25, "Haven't applied yet - fresh opportunity"),
        ApplicationStatus::Applied => (15, "Already applied - might want to follow up"),
        ApplicationStatus::InterviewScheduled => (30, "Interview coming up - prep time!"),
        ApplicationStatus::InterviewCompleted => {
            (20, "Waiting for response - consider follow-up")
        }
        ApplicationStatus::Withdrawn
        | ApplicationStatus::Accepted
        | ApplicationStatus::Rejected => return None,
    };

    Some(ScoreComponent::new(
        PriorityFactor::Status,
        points,
        Some(reason.to_string()),
    ))
}

fn skills_component(skill_count: usize) -> Option<ScoreComponent> {
    let component = match skill_count {
        0..=3 => ScoreComponent::new(
            PriorityFactor::SkillBreadth,
            20,
            Some("Fewer skills required - good match potential".to_string()),
        ),
        4..=5 => ScoreComponent::new(PriorityFactor::SkillBreadth, 15, None),
        _ => ScoreComponent::new(PriorityFactor::SkillBreadth, 10, None),
    };
    Some(component)
}

fn stipend_component(stipend: &str) -> Option<ScoreComponent> {
    let component = match parse_stipend(stipend) {
        StipendValue::Unpaid => ScoreComponent::new(PriorityFactor::Stipend, 5, None),
        StipendValue::Amount(amount) if amount >= 50_000 => ScoreComponent::new(
            PriorityFactor::Stipend,
            15,
            Some("Great stipend - high value opportunity".to_string()),
        ),
        StipendValue::Amount(amount) if amount >= 20_000 => ScoreComponent::new(
            PriorityFactor::Stipend,
            12,
            Some("Good stipend offered".to_string()),
        ),
        StipendValue::Amount(_) | StipendValue::Unspecified => {
            ScoreComponent::new(PriorityFactor::Stipend, 8, None)
        }
    };
    Some(component)
}

fn tenure_component(record: &InternshipRecord, today: NaiveDate) -> Option<ScoreComponent> {
    let days_in_list = (today - record.added_on()?).num_days();

    match days_in_list {
        d if d >= 30 => Some(ScoreComponent::new(
            PriorityFactor::Tenure,
            10,
            Some("Been in your list for a while - time to act".to_string()),
        )),
        d if d >= 14 => Some(ScoreComponent::new(PriorityFactor::Tenure, 5, None)),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn points(component: Option<ScoreComponent>) -> u32 {
        component.map(|component| component.points).unwrap_or(0)
    }

    #[test]
    fn deadline_bands() {
        let today = NaiveDate::from_ymd_opt(2025, 5, 10).expect("valid date");
        let mut record = crate::internships::advisor::tests::record_fixture();

        let cases = [
            ("2025-05-09", 5),
            ("2025-05-10", 30),
            ("2025-05-11", 25),
            ("2025-05-13", 25),
            ("2025-05-14", 20),
            ("2025-05-17", 20),
            ("2025-05-18", 15),
            ("2025-05-24", 15),
            ("2025-05-25", 10),
        ];

        for (deadline, expected) in cases {
            record.deadline = Some(deadline.to_string());
            assert_eq!(
                points(deadline_component(&record, today)),
                expected,
                "deadline {deadline}"
            );
        }

        record.deadline = None;
        assert!(deadline_component(&record, today).is_none());
    }

    #[test]
    fn single_day_reason_is_singular() {
        let today = NaiveDate::from_ymd_opt(2025, 5, 10).expect("valid date");
        let mut record = crate::internships::advisor::tests::record_fixture();
        record.deadline = Some("2025-05-11".to_string());

        let component = deadline_component(&record, today).expect("deadline scored");
        assert_eq!(
            component.reason.as_deref(),
            Some("Only 1 day left - very urgent")
        );
    }

    #[test]
    fn skill_breadth_bands() {
        assert_eq!(points(skills_component(0)), 20);
        assert_eq!(points(skills_component(3)), 20);
        assert_eq!(points(skills_component(4)), 15);
        assert_eq!(points(skills_component(5)), 15);
        assert_eq!(points(skills_component(6)), 10);
    }

    #[test]
    fn stipend_bands() {
        assert_eq!(points(stipend_component("Unpaid")), 5);
        assert_eq!(points(stipend_component("0")), 5);
        assert_eq!(points(stipend_component("50000")), 15);
        assert_eq!(points(stipend_component("Rs. 49999 monthly")), 12);
        assert_eq!(points(stipend_component("20000")), 12);
        assert_eq!(points(stipend_component("19999")), 8);
        assert_eq!(points(stipend_component("Performance based")), 8);
    }

    #[test]
    fn tenure_bands() {
        let today = NaiveDate::from_ymd_opt(2025, 5, 31).expect("valid date");
        let mut record = crate::internships::advisor::tests::record_fixture();

        record.date_added = "2025-05-01".to_string();
        assert_eq!(points(tenure_component(&record, today)), 10);
        record.date_added = "2025-05-17".to_string();
        assert_eq!(points(tenure_component(&record, today)), 5);
        record.date_added = "2025-05-18".to_string();
        assert_eq!(points(tenure_component(&record, today)), 0);
        record.date_added = "not a date".to_string();
        assert!(tenure_component(&record, today).is_none());
    }

    #[test]
    fn withdrawn_status_contributes_nothing() {
        assert!(status_component(ApplicationStatus::Withdrawn).is_none());
        assert_eq!(points(status_component(ApplicationStatus::InterviewScheduled)), 30);
    }
}
