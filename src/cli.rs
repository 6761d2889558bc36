use crate::render;
use chrono::{Local, NaiveDate, NaiveDateTime};
use clap::{Args, Parser, Subcommand};
use internship_tracker::config::AppConfig;
use internship_tracker::error::AppError;
use internship_tracker::internships::domain::{parse_date, parse_skill_list};
use internship_tracker::internships::{
    ApplicationStatus, CsvImporter, DeadlineBoard, InternshipBook, JsonFileStore, NewInternship,
    PipelineStatistics, PriorityAdvisor, RecordEdit, RecordStore, RoleMatcher, SearchQuery,
    SkillSet,
};
use internship_tracker::telemetry;
use std::path::PathBuf;
use tracing::info;

#[derive(Parser, Debug)]
#[command(
    name = "Internship Tracker",
    about = "Track internship applications, deadlines and what to work on next",
    version
)]
struct Cli {
    /// Record file to use instead of TRACKER_DATA_FILE / internships.json
    #[arg(long, global = true)]
    data_file: Option<PathBuf>,
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Add a new internship (starts as "Not Applied")
    Add(AddArgs),
    /// Show every tracked internship
    List(TodayArgs),
    /// Search or filter internships
    Search {
        #[command(subcommand)]
        query: SearchCommand,
    },
    /// Change fields of an existing internship
    Edit(EditArgs),
    /// Move an internship to a new status
    Status(StatusArgs),
    /// Remove an internship; remaining ids are renumbered
    Delete(DeleteArgs),
    /// Pipeline statistics, top companies and most requested skills
    Stats,
    /// Overdue, upcoming and future deadlines
    Deadlines(DeadlineArgs),
    /// Suggest roles and tracked internships that fit your skills
    Suggest(SuggestArgs),
    /// Rank open applications by priority and recommend next actions
    Advise(AdviseArgs),
    /// Bulk-add internships from a CSV spreadsheet
    Import(ImportArgs),
}

#[derive(Args, Debug)]
struct AddArgs {
    #[arg(long)]
    company: String,
    #[arg(long)]
    role: String,
    #[arg(long, default_value = "")]
    location: String,
    /// e.g. 10000 or Unpaid
    #[arg(long, default_value = "")]
    stipend: String,
    /// e.g. "3 months"
    #[arg(long, default_value = "")]
    duration: String,
    /// Comma-separated list of required skills
    #[arg(long, default_value = "")]
    skills: String,
    /// Application deadline (YYYY-MM-DD)
    #[arg(long, value_parser = parse_date_arg)]
    deadline: Option<NaiveDate>,
    #[arg(long)]
    notes: Option<String>,
}

#[derive(Args, Debug)]
struct TodayArgs {
    /// Evaluation date (defaults to today)
    #[arg(long, value_parser = parse_date_arg)]
    today: Option<NaiveDate>,
}

#[derive(Subcommand, Debug)]
enum SearchCommand {
    /// Company name contains the term
    Company { term: String },
    /// Role/position contains the term
    Role { term: String },
    /// Exact status, e.g. "Interview Scheduled"
    Status {
        #[arg(value_parser = parse_status_arg)]
        status: ApplicationStatus,
    },
    /// Location contains the term
    Location { term: String },
    /// Any listed skill contains the term
    Skill { term: String },
}

#[derive(Args, Debug)]
struct EditArgs {
    id: u32,
    #[arg(long)]
    company: Option<String>,
    #[arg(long)]
    role: Option<String>,
    #[arg(long)]
    location: Option<String>,
    #[arg(long)]
    stipend: Option<String>,
    #[arg(long)]
    duration: Option<String>,
    /// Comma-separated replacement skill list
    #[arg(long)]
    skills: Option<String>,
    #[arg(long, value_parser = parse_date_arg)]
    deadline: Option<NaiveDate>,
    #[arg(long, conflicts_with = "clear_notes")]
    notes: Option<String>,
    #[arg(long)]
    clear_notes: bool,
}

impl EditArgs {
    fn edits(self) -> Vec<RecordEdit> {
        let mut edits = Vec::new();
        if let Some(value) = self.company {
            edits.push(RecordEdit::Company(value));
        }
        if let Some(value) = self.role {
            edits.push(RecordEdit::Role(value));
        }
        if let Some(value) = self.location {
            edits.push(RecordEdit::Location(value));
        }
        if let Some(value) = self.stipend {
            edits.push(RecordEdit::Stipend(value));
        }
        if let Some(value) = self.duration {
            edits.push(RecordEdit::Duration(value));
        }
        if let Some(value) = self.skills {
            edits.push(RecordEdit::Skills(parse_skill_list(&value)));
        }
        if let Some(value) = self.deadline {
            edits.push(RecordEdit::Deadline(value));
        }
        if let Some(value) = self.notes {
            edits.push(RecordEdit::Notes(Some(value)));
        }
        if self.clear_notes {
            edits.push(RecordEdit::Notes(None));
        }
        edits
    }
}

#[derive(Args, Debug)]
struct StatusArgs {
    id: u32,
    /// Not Applied, Applied, Interview Scheduled, Interview Completed, Accepted, Rejected or Withdrawn
    #[arg(value_parser = parse_status_arg)]
    status: ApplicationStatus,
}

#[derive(Args, Debug)]
struct DeleteArgs {
    id: u32,
    /// Confirm the deletion
    #[arg(long)]
    yes: bool,
}

#[derive(Args, Debug)]
struct DeadlineArgs {
    #[command(flatten)]
    today: TodayArgs,
    /// How many future deadlines to show
    #[arg(long)]
    limit: Option<usize>,
}

#[derive(Args, Debug)]
struct SuggestArgs {
    /// Your skills, comma-separated
    #[arg(long)]
    skills: String,
    /// How many roles and internships to show
    #[arg(long)]
    limit: Option<usize>,
    /// Print the full ranking as JSON
    #[arg(long)]
    json: bool,
}

#[derive(Args, Debug)]
struct AdviseArgs {
    #[command(flatten)]
    today: TodayArgs,
    /// How many priorities to show
    #[arg(long)]
    limit: Option<usize>,
    /// Print the full report as JSON
    #[arg(long)]
    json: bool,
}

#[derive(Args, Debug)]
struct ImportArgs {
    /// CSV with Company, Role, Location, Stipend, Duration, Skills, Deadline, Notes columns
    path: PathBuf,
}

pub(crate) fn run() -> Result<(), AppError> {
    let cli = Cli::parse();
    let mut config = AppConfig::load()?;
    if let Some(path) = cli.data_file {
        config.storage.data_file = path;
    }

    telemetry::init(&config.telemetry)?;

    let store = JsonFileStore::new(config.storage.data_file.clone());
    let top_n = config.display.top_n;

    match cli.command {
        Command::Add(args) => add(&store, args),
        Command::List(args) => {
            let book = store.load()?;
            render::render_records(book.records(), resolve_today(args.today), "ALL INTERNSHIPS");
            Ok(())
        }
        Command::Search { query } => {
            let book = store.load()?;
            let results = book.search(&query.into_query());
            render::render_search_results(&results, today());
            Ok(())
        }
        Command::Edit(args) => edit(&store, args),
        Command::Status(args) => update_status(&store, args),
        Command::Delete(args) => delete(&store, args),
        Command::Stats => {
            let book = store.load()?;
            render::render_statistics(&PipelineStatistics::from_records(book.records()));
            Ok(())
        }
        Command::Deadlines(args) => {
            let book = store.load()?;
            let board = DeadlineBoard::build(book.records(), resolve_today(args.today.today));
            render::render_deadlines(&board, args.limit.unwrap_or(top_n));
            Ok(())
        }
        Command::Suggest(args) => suggest(&store, args, top_n),
        Command::Advise(args) => advise(&store, args, top_n),
        Command::Import(args) => import(&store, args),
    }
}

impl SearchCommand {
    fn into_query(self) -> SearchQuery {
        match self {
            SearchCommand::Company { term } => SearchQuery::Company(term),
            SearchCommand::Role { term } => SearchQuery::Role(term),
            SearchCommand::Status { status } => SearchQuery::Status(status),
            SearchCommand::Location { term } => SearchQuery::Location(term),
            SearchCommand::Skill { term } => SearchQuery::Skill(term),
        }
    }
}

fn add(store: &impl RecordStore, args: AddArgs) -> Result<(), AppError> {
    let mut book = store.load()?;
    let entry = NewInternship {
        company: args.company,
        role: args.role,
        location: args.location,
        stipend: args.stipend,
        duration: args.duration,
        skills: parse_skill_list(&args.skills),
        deadline: args.deadline,
        notes: args.notes,
    };

    let record = book.add(entry, today()).clone();
    store.save(&book)?;

    info!(id = record.id, "internship saved");
    println!("Internship added successfully!");
    println!("ID: {} - {}", record.id, record.title());
    Ok(())
}

fn edit(store: &impl RecordStore, args: EditArgs) -> Result<(), AppError> {
    let id = args.id;
    let edits = args.edits();
    if edits.is_empty() {
        return Err(AppError::Input(
            "nothing to edit; pass at least one field flag".to_string(),
        ));
    }

    let mut book = store.load()?;
    let now = now();
    for change in edits {
        book.edit(id, change, now)?;
    }
    store.save(&book)?;

    println!("Internship {id} updated successfully!");
    Ok(())
}

fn update_status(store: &impl RecordStore, args: StatusArgs) -> Result<(), AppError> {
    let mut book = store.load()?;
    let (previous, record) = book.update_status(args.id, args.status, now())?;
    let current = record.status;
    store.save(&book)?;

    println!("Status updated from '{previous}' to '{current}'");
    Ok(())
}

fn delete(store: &impl RecordStore, args: DeleteArgs) -> Result<(), AppError> {
    let mut book = store.load()?;

    if !args.yes {
        let record = book.get(args.id).ok_or_else(|| {
            AppError::Input(format!("no internship with id {}", args.id))
        })?;
        println!("Would delete: {}", record.title());
        println!("Deletion cancelled. Re-run with --yes to confirm.");
        return Ok(());
    }

    let removed = book.delete(args.id)?;
    store.save(&book)?;

    println!("Deleted {}. Remaining ids were renumbered.", removed.title());
    Ok(())
}

fn suggest(store: &impl RecordStore, args: SuggestArgs, top_n: usize) -> Result<(), AppError> {
    let book = store.load()?;
    let user_skills = SkillSet::parse(&args.skills);
    let matcher = RoleMatcher::default();

    let roles = matcher.suggest_roles(&user_skills);
    let records = matcher.match_records(&user_skills, book.records());

    if args.json {
        let payload = serde_json::json!({
            "skills": user_skills,
            "roles": roles,
            "internships": records,
        });
        println!("{}", serde_json::to_string_pretty(&payload)?);
        return Ok(());
    }

    render::render_suggestions(&user_skills, &roles, &records, args.limit.unwrap_or(top_n));
    Ok(())
}

fn advise(store: &impl RecordStore, args: AdviseArgs, top_n: usize) -> Result<(), AppError> {
    let book = store.load()?;
    if book.is_empty() {
        println!("No internships found. Add some first!");
        return Ok(());
    }

    let report = PriorityAdvisor::new().report(book.records(), resolve_today(args.today.today));

    if args.json {
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    render::render_advice(&report, args.limit.unwrap_or(top_n));
    Ok(())
}

fn import(store: &impl RecordStore, args: ImportArgs) -> Result<(), AppError> {
    let entries = CsvImporter::from_path(&args.path)?;
    let mut book: InternshipBook = store.load()?;
    let today = today();

    let count = entries.len();
    for entry in entries {
        book.add(entry, today);
    }
    store.save(&book)?;

    info!(count, path = %args.path.display(), "internships imported");
    println!("Imported {count} internship(s); {} tracked in total.", book.len());
    Ok(())
}

fn today() -> NaiveDate {
    Local::now().date_naive()
}

fn now() -> NaiveDateTime {
    Local::now().naive_local()
}

fn resolve_today(override_date: Option<NaiveDate>) -> NaiveDate {
    override_date.unwrap_or_else(today)
}

fn parse_date_arg(raw: &str) -> Result<NaiveDate, String> {
    parse_date(raw).map_err(|err| err.to_string())
}

fn parse_status_arg(raw: &str) -> Result<ApplicationStatus, String> {
    raw.parse::<ApplicationStatus>()
        .map_err(|err| err.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use internship_tracker::internships::MemoryStore;

    #[test]
    fn cli_parses_advise_with_date_override() {
        let cli = Cli::try_parse_from([
            "internship-tracker",
            "advise",
            "--today",
            "2025-05-10",
            "--limit",
            "3",
        ])
        .expect("arguments parse");

        match cli.command {
            Command::Advise(args) => {
                assert_eq!(args.today.today, NaiveDate::from_ymd_opt(2025, 5, 10));
                assert_eq!(args.limit, Some(3));
                assert!(!args.json);
            }
            other => panic!("expected advise command, got {other:?}"),
        }
    }

    #[test]
    fn cli_rejects_unknown_status() {
        let result = Cli::try_parse_from(["internship-tracker", "status", "1", "ghosted"]);
        assert!(result.is_err());
    }

    #[test]
    fn edit_args_collect_every_requested_change() {
        let cli = Cli::try_parse_from([
            "internship-tracker",
            "edit",
            "2",
            "--stipend",
            "30000",
            "--skills",
            "Rust, Go",
            "--clear-notes",
        ])
        .expect("arguments parse");

        let Command::Edit(args) = cli.command else {
            panic!("expected edit command");
        };
        assert_eq!(
            args.edits(),
            vec![
                RecordEdit::Stipend("30000".to_string()),
                RecordEdit::Skills(vec!["Rust".to_string(), "Go".to_string()]),
                RecordEdit::Notes(None),
            ]
        );
    }

    #[test]
    fn delete_without_confirmation_keeps_record() {
        let store = MemoryStore::default();
        let mut book = InternshipBook::new();
        book.add(
            NewInternship {
                company: "Acme".to_string(),
                role: "Intern".to_string(),
                ..NewInternship::default()
            },
            today(),
        );
        store.save(&book).expect("memory save");

        delete(&store, DeleteArgs { id: 1, yes: false }).expect("cancelled delete is ok");
        assert_eq!(store.load().expect("memory load").len(), 1);

        delete(&store, DeleteArgs { id: 1, yes: true }).expect("confirmed delete");
        assert!(store.load().expect("memory load").is_empty());
    }
}
