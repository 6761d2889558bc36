use super::skills::SkillSet;

/// A role and the skills it calls for.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoleProfile {
    pub name: String,
    pub required: SkillSet,
}

/// Immutable role→required-skill table handed to the matcher. Iteration
/// order is insertion order and decides ties when ranking.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RoleCatalog {
    roles: Vec<RoleProfile>,
}

impl RoleCatalog {
    pub fn new<I, N, S>(roles: I) -> Self
    where
        I: IntoIterator<Item = (N, Vec<S>)>,
        N: Into<String>,
        S: AsRef<str>,
    {
        let roles = roles
            .into_iter()
            .map(|(name, skills)| RoleProfile {
                name: name.into(),
                required: SkillSet::from_skills(skills),
            })
            .collect();
        Self { roles }
    }

    /// The built-in catalog of common internship tracks.
    pub fn standard() -> Self {
        Self::new([
            (
                "Software Development",
                vec!["Python", "Java", "C++", "JavaScript", "Git"],
            ),
            (
                "Data Science",
                vec![
                    "Python",
                    "Machine Learning",
                    "Statistics",
                    "SQL",
                    "Data Analysis",
                ],
            ),
            (
                "Web Development",
                vec!["HTML", "CSS", "JavaScript", "React", "Node.js"],
            ),
            (
                "Mobile Development",
                vec!["Java", "Kotlin", "Swift", "React Native", "Flutter"],
            ),
            (
                "DevOps",
                vec!["Linux", "Docker", "Kubernetes", "AWS", "CI/CD"],
            ),
            (
                "Machine Learning",
                vec![
                    "Python",
                    "TensorFlow",
                    "PyTorch",
                    "Machine Learning",
                    "Deep Learning",
                ],
            ),
            (
                "Backend Development",
                vec!["Python", "Java", "Node.js", "SQL", "REST API"],
            ),
            (
                "Frontend Development",
                vec!["HTML", "CSS", "JavaScript", "React", "Vue.js"],
            ),
            (
                "Data Analysis",
                vec![
                    "Python",
                    "SQL",
                    "Excel",
                    "Data Visualization",
                    "Statistics",
                ],
            ),
            (
                "Cybersecurity",
                vec![
                    "Network Security",
                    "Cryptography",
                    "Ethical Hacking",
                    "Linux",
                    "Security Tools",
                ],
            ),
        ])
    }

    pub fn roles(&self) -> &[RoleProfile] {
        &self.roles
    }

    pub fn get(&self, name: &str) -> Option<&RoleProfile> {
        self.roles
            .iter()
            .find(|role| role.name.eq_ignore_ascii_case(name))
    }

    pub fn len(&self) -> usize {
        self.roles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.roles.is_empty()
    }
}
