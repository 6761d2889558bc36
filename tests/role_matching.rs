use internship_tracker::internships::{
    ApplicationStatus, InternshipRecord, MatchOutcome, RoleCatalog, RoleMatcher, SkillSet,
};

fn record(id: u32, skills: &[&str]) -> InternshipRecord {
    InternshipRecord {
        id,
        company: format!("Company {id}"),
        role: "Intern".to_string(),
        location: "Remote".to_string(),
        stipend: "Unpaid".to_string(),
        duration: "3 months".to_string(),
        skills: skills.iter().map(|skill| skill.to_string()).collect(),
        status: ApplicationStatus::NotApplied,
        date_added: "2025-01-01".to_string(),
        deadline: None,
        notes: None,
        last_updated: None,
    }
}

#[test]
fn data_science_match_reports_coverage_and_gaps() {
    let matcher = RoleMatcher::default();
    let skills = SkillSet::parse("python, sql");

    let outcome = matcher.suggest_roles(&skills);
    let data_science = outcome
        .matches()
        .iter()
        .find(|role| role.role == "Data Science")
        .expect("data science suggested");

    assert_eq!(data_science.match_percent, 40.0);
    assert_eq!(data_science.matched_skills, vec!["Python", "SQL"]);
    assert_eq!(
        data_science.missing_skills,
        vec!["Machine Learning", "Statistics", "Data Analysis"]
    );
}

#[test]
fn roles_rank_by_coverage_with_catalog_order_on_ties() {
    let matcher = RoleMatcher::default();
    let outcome = matcher.suggest_roles(&SkillSet::parse("Python, SQL"));

    let ranked: Vec<(&str, f64)> = outcome
        .matches()
        .iter()
        .map(|role| (role.role.as_str(), role.match_percent))
        .collect();

    assert_eq!(
        ranked,
        vec![
            ("Data Science", 40.0),
            ("Backend Development", 40.0),
            ("Data Analysis", 40.0),
            ("Software Development", 20.0),
            ("Machine Learning", 20.0),
        ]
    );
    assert!(ranked
        .iter()
        .all(|(_, percent)| (0.0..=100.0).contains(percent)));
}

#[test]
fn empty_skill_input_is_distinct_from_no_matches() {
    let matcher = RoleMatcher::default();
    let records = vec![record(1, &["Python"])];

    let empty = SkillSet::parse(" , ,");
    let roles = matcher.suggest_roles(&empty);
    assert!(roles.is_no_skills());
    assert!(roles.matches().is_empty());
    assert!(matcher.match_records(&empty, &records).is_no_skills());

    let unknown = SkillSet::parse("Underwater Basket Weaving");
    let roles = matcher.suggest_roles(&unknown);
    assert!(!roles.is_no_skills());
    assert!(roles.is_empty_result());
}

#[test]
fn role_without_requirements_is_zero_percent() {
    let catalog = RoleCatalog::new([
        ("Mystery Role", Vec::<&str>::new()),
        ("Rustacean", vec!["Rust", "Cargo"]),
    ]);
    let matcher = RoleMatcher::new(catalog);
    let skills = SkillSet::parse("Rust, Python");

    let mystery = matcher
        .catalog()
        .get("Mystery Role")
        .expect("role in catalog");
    let evaluated = matcher.evaluate_role(&skills, mystery);
    assert_eq!(evaluated.match_percent, 0.0);
    assert!(evaluated.matched_skills.is_empty());

    match matcher.suggest_roles(&skills) {
        MatchOutcome::Ranked(roles) => {
            assert_eq!(roles.len(), 1);
            assert_eq!(roles[0].role, "Rustacean");
            assert_eq!(roles[0].match_percent, 50.0);
        }
        MatchOutcome::NoSkillsProvided => panic!("skills were provided"),
    }
}

#[test]
fn records_rank_by_their_own_skill_coverage() {
    let records = vec![
        record(1, &["Python", "Django", "PostgreSQL", "Docker"]),
        record(2, &[]),
        record(3, &["python", "sql"]),
        record(4, &["Java", "Spring"]),
        record(5, &["SQL", "Excel"]),
        record(6, &["Python", "Go"]),
    ];

    let matcher = RoleMatcher::default();
    let skills = SkillSet::parse("Python, SQL");
    let outcome = matcher.match_records(&skills, &records);

    let ranked: Vec<(u32, f64)> = outcome
        .matches()
        .iter()
        .map(|matched| (matched.record.id, matched.match_percent))
        .collect();
    assert_eq!(ranked, vec![(3, 100.0), (5, 50.0), (6, 50.0), (1, 25.0)]);
    assert_eq!(outcome.matches()[0].matched_skills, vec!["python", "sql"]);
}

#[test]
fn suggestions_are_repeatable_and_catalog_is_untouched() {
    let matcher = RoleMatcher::default();
    let skills = SkillSet::parse("HTML, CSS, React");

    let first = matcher.suggest_roles(&skills);
    let second = matcher.suggest_roles(&skills);
    assert_eq!(first, second);
    assert_eq!(matcher.catalog(), &RoleCatalog::standard());
    assert_eq!(first.matches()[0].role, "Web Development");
    assert_eq!(first.matches()[0].match_percent, 60.0);
}
