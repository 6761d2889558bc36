use chrono::NaiveDate;
use internship_tracker::internships::domain::plural;
use internship_tracker::internships::{
    AdvisorReport, DeadlineBoard, DeadlineEntry, DeadlineUrgency, InternshipRecord, MatchOutcome,
    PipelineStatistics, PriorityLevel, RecordMatch, RoleMatch, SkillSet,
};

const WIDE_RULE: usize = 100;
const RULE: usize = 60;

fn banner(title: &str, width: usize) {
    println!("\n{}", "=".repeat(width));
    println!("{title}");
    println!("{}", "=".repeat(width));
}

pub(crate) fn render_records(records: &[InternshipRecord], today: NaiveDate, title: &str) {
    if records.is_empty() {
        println!("No internships found. Add some first!");
        return;
    }

    banner(title, WIDE_RULE);
    for record in records {
        render_record(record, today);
    }
}

pub(crate) fn render_search_results(results: &[&InternshipRecord], today: NaiveDate) {
    if results.is_empty() {
        println!("No matching internships found!");
        return;
    }

    println!("Found {} matching internship(s):", results.len());
    println!("{}", "=".repeat(WIDE_RULE));
    for record in results {
        render_record(record, today);
    }
}

fn render_record(record: &InternshipRecord, today: NaiveDate) {
    println!("\nID: {}", record.id);
    println!("Company: {}", record.company);
    println!("Role: {}", record.role);
    println!("Location: {}", record.location);
    println!("Stipend: {}", record.stipend);
    println!("Duration: {}", record.duration);
    println!("Skills: {}", record.skills.join(", "));
    println!("Status: {}", record.status);
    println!("Date Added: {}", record.date_added);

    if let Some(raw) = &record.deadline {
        match record.days_until_deadline(today).map(DeadlineUrgency::classify) {
            Some(DeadlineUrgency::Overdue(days)) => {
                println!("Deadline: {raw} ⚠️ OVERDUE by {days} day{}", plural(days))
            }
            Some(DeadlineUrgency::Today) => println!("Deadline: {raw} 🔥 TODAY!"),
            Some(DeadlineUrgency::Soon(days)) => {
                println!("Deadline: {raw} ⏰ {days} day{} left", plural(days))
            }
            Some(DeadlineUrgency::Later(days)) => println!("Deadline: {raw} ({days} days left)"),
            None => println!("Deadline: {raw}"),
        }
    }

    if let Some(notes) = &record.notes {
        println!("Notes: {notes}");
    }
    println!("{}", "-".repeat(WIDE_RULE));
}

pub(crate) fn render_statistics(stats: &PipelineStatistics) {
    if stats.total == 0 {
        println!("No internships found. Add some first!");
        return;
    }

    banner("INTERNSHIP STATISTICS", RULE);
    println!("\n📊 Total Internships: {}", stats.total);

    println!("\n📈 Status Breakdown:");
    for share in &stats.status_breakdown {
        println!(
            "   {}: {} ({:.1}%)",
            share.status_label, share.count, share.percentage
        );
    }

    println!("\n🏢 Top Companies:");
    for company in &stats.top_companies {
        println!("   {}: {}", company.name, company.count);
    }

    println!("\n💡 Most Required Skills:");
    for skill in &stats.top_skills {
        println!("   {}: {}", skill.name, skill.count);
    }

    if let Some(rate) = &stats.success_rate {
        println!(
            "\n✨ Success Rate: {:.1}% ({} accepted out of {} applied)",
            rate.percentage, rate.accepted, rate.submitted
        );
    }
}

pub(crate) fn render_deadlines(board: &DeadlineBoard<'_>, future_limit: usize) {
    banner("UPCOMING DEADLINES", RULE);

    if board.is_empty() {
        println!("\nNo internships with deadlines set!");
        return;
    }

    if !board.overdue.is_empty() {
        println!("\n🚨 OVERDUE:");
        for entry in &board.overdue {
            let days = -entry.days_left;
            deadline_line(entry, &format!("Overdue by {days} day{}", plural(days)));
        }
    }

    if !board.upcoming.is_empty() {
        println!("\n⏰ UPCOMING (Next 7 Days):");
        for entry in &board.upcoming {
            let urgency = if entry.days_left == 0 {
                "🔥 TODAY!".to_string()
            } else {
                format!("{} day{} left", entry.days_left, plural(entry.days_left))
            };
            deadline_line(entry, &urgency);
        }
    }

    if !board.future.is_empty() {
        println!("\n📅 FUTURE DEADLINES:");
        for entry in board.future.iter().take(future_limit) {
            deadline_line(entry, &format!("{} days left", entry.days_left));
        }
    }
}

fn deadline_line(entry: &DeadlineEntry<'_>, urgency: &str) {
    println!("   ID {}: {}", entry.record.id, entry.record.title());
    println!("   Deadline: {} ({urgency})", entry.deadline);
    println!("   Status: {}", entry.record.status);
    println!();
}

pub(crate) fn render_suggestions(
    user_skills: &SkillSet,
    roles: &MatchOutcome<RoleMatch>,
    records: &MatchOutcome<RecordMatch<'_>>,
    limit: usize,
) {
    if roles.is_no_skills() {
        println!("No skills entered! Pass a comma-separated list, e.g. --skills \"Python, SQL\"");
        return;
    }

    banner("SKILL-BASED ROLE SUGGESTION", RULE);
    println!("\n🎯 Your Skills: {}", user_skills.normalized_sorted().join(", "));

    banner("RECOMMENDED ROLES", RULE);
    if roles.matches().is_empty() {
        println!("\nNo matching roles found. Try adding more relevant skills!");
        return;
    }

    for (rank, role) in roles.matches().iter().take(limit).enumerate() {
        println!("\n{}. {}", rank + 1, role.role);
        println!("   Match: {:.1}%", role.match_percent);
        println!("   ✓ You have: {}", role.matched_skills.join(", "));
        if !role.missing_skills.is_empty() {
            println!("   ✗ Consider learning: {}", role.missing_skills.join(", "));
        }
    }

    banner("MATCHING INTERNSHIPS FROM YOUR LIST", RULE);
    if records.matches().is_empty() {
        println!("\nNo matching internships in your list yet!");
        return;
    }

    for (rank, matched) in records.matches().iter().take(limit).enumerate() {
        println!("\n{}. {}", rank + 1, matched.record.title());
        println!("   Match: {:.1}%", matched.match_percent);
        println!("   Matching Skills: {}", matched.matched_skills.join(", "));
        println!("   Status: {}", matched.record.status);
    }
}

pub(crate) fn render_advice(report: &AdvisorReport<'_>, limit: usize) {
    banner("🤖 SMART APPLICATION ADVISOR", RULE);

    if report.priorities.is_empty() {
        println!("\n✨ All caught up! No pending applications to prioritize.");
        println!("Everything has been accepted or rejected; add more internships to keep going.");
    } else {
        banner("🎯 TOP PRIORITY APPLICATIONS", RULE);
        for (rank, scored) in report.priorities.iter().take(limit).enumerate() {
            let record = scored.record;
            println!("\n{}. {}", rank + 1, record.title());
            println!(
                "   Priority: {} {} (Score: {}/100)",
                priority_glyph(scored.priority),
                scored.priority.label(),
                scored.display_score()
            );
            println!("   Status: {}", record.status);
            if let Some(deadline) = &record.deadline {
                println!("   Deadline: {deadline}");
            }
            println!("   Location: {}", record.location);
            println!("\n   Why prioritize this:");
            for reason in scored.reasons() {
                println!("      • {reason}");
            }
        }
    }

    let insights = &report.insights;
    let pipeline = &insights.pipeline;
    banner("💡 PERSONALIZED INSIGHTS", RULE);
    println!("\n📊 Your Application Pipeline:");
    println!("   • Total tracked: {}", pipeline.total);
    println!("   • Not applied yet: {}", pipeline.not_applied);
    println!("   • Applied: {}", pipeline.applied);
    println!("   • In interview stage: {}", pipeline.interviews);
    println!("   • Accepted: {}", pipeline.accepted);
    println!("   • Rejected: {}", pipeline.rejected);

    println!("\n🎯 Recommended Actions:");
    for action in &insights.recommended_actions {
        println!("   • {action}");
    }
    for warning in &insights.warnings {
        println!("   • ⚠️ {warning}");
    }
}

fn priority_glyph(level: PriorityLevel) -> &'static str {
    match level {
        PriorityLevel::Critical => "🔴",
        PriorityLevel::High => "🟠",
        PriorityLevel::Medium => "🟡",
        PriorityLevel::Low => "🟢",
    }
}
