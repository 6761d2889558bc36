use serde::Serialize;

/// Skill names compared case-insensitively. The first spelling seen for a
/// skill is kept for display and later duplicates are dropped.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct SkillSet {
    skills: Vec<Skill>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
struct Skill {
    display: String,
    #[serde(skip)]
    key: String,
}

impl SkillSet {
    pub fn from_skills<I, S>(skills: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut set = Self::default();
        for skill in skills {
            set.insert(skill.as_ref());
        }
        set
    }

    /// Parses comma-separated user input.
    pub fn parse(raw: &str) -> Self {
        Self::from_skills(raw.split(','))
    }

    fn insert(&mut self, raw: &str) {
        let display = raw.trim();
        if display.is_empty() {
            return;
        }
        let key = normalize(display);
        if self.skills.iter().any(|skill| skill.key == key) {
            return;
        }
        self.skills.push(Skill {
            display: display.to_string(),
            key,
        });
    }

    pub fn len(&self) -> usize {
        self.skills.len()
    }

    pub fn is_empty(&self) -> bool {
        self.skills.is_empty()
    }

    pub fn contains(&self, skill: &str) -> bool {
        let key = normalize(skill);
        self.skills.iter().any(|candidate| candidate.key == key)
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.skills.iter().map(|skill| skill.display.as_str())
    }

    /// Members of `self` that also appear in `other`, in `self`'s order and spelling.
    pub fn intersection(&self, other: &SkillSet) -> Vec<String> {
        self.skills
            .iter()
            .filter(|skill| other.contains_key(&skill.key))
            .map(|skill| skill.display.clone())
            .collect()
    }

    /// Members of `self` missing from `other`, in `self`'s order and spelling.
    pub fn difference(&self, other: &SkillSet) -> Vec<String> {
        self.skills
            .iter()
            .filter(|skill| !other.contains_key(&skill.key))
            .map(|skill| skill.display.clone())
            .collect()
    }

    /// Lowercased spellings, sorted, for echoing user input back.
    pub fn normalized_sorted(&self) -> Vec<String> {
        let mut keys: Vec<String> = self.skills.iter().map(|skill| skill.key.clone()).collect();
        keys.sort();
        keys
    }

    fn contains_key(&self, key: &str) -> bool {
        self.skills.iter().any(|skill| skill.key == key)
    }
}

fn normalize(skill: &str) -> String {
    skill.trim().to_lowercase()
}
