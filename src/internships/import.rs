use super::domain::{empty_string_as_none, parse_date, parse_skill_list, NewInternship};
use serde::Deserialize;
use std::io::Read;
use std::path::Path;
use tracing::{debug, warn};

#[derive(Debug)]
pub enum ImportError {
    Io(std::io::Error),
    Csv(csv::Error),
}

impl std::fmt::Display for ImportError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ImportError::Io(err) => write!(f, "failed to read internship spreadsheet: {}", err),
            ImportError::Csv(err) => write!(f, "invalid internship CSV data: {}", err),
        }
    }
}

impl std::error::Error for ImportError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ImportError::Io(err) => Some(err),
            ImportError::Csv(err) => Some(err),
        }
    }
}

impl From<std::io::Error> for ImportError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err)
    }
}

impl From<csv::Error> for ImportError {
    fn from(err: csv::Error) -> Self {
        Self::Csv(err)
    }
}

/// Reads internships from a spreadsheet export with the columns
/// `Company, Role, Location, Stipend, Duration, Skills, Deadline, Notes`.
/// Only Company and Role are required.
pub struct CsvImporter;

impl CsvImporter {
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Vec<NewInternship>, ImportError> {
        let file = std::fs::File::open(path)?;
        Self::from_reader(file)
    }

    pub fn from_reader<R: Read>(reader: R) -> Result<Vec<NewInternship>, ImportError> {
        let mut csv_reader = csv::ReaderBuilder::new()
            .trim(csv::Trim::All)
            .from_reader(reader);
        let mut entries = Vec::new();

        for (index, row) in csv_reader.deserialize::<InternshipRow>().enumerate() {
            let row = row?;
            entries.push(row.into_entry(index + 2));
        }

        debug!(count = entries.len(), "internships parsed from CSV");
        Ok(entries)
    }
}

#[derive(Debug, Deserialize)]
struct InternshipRow {
    #[serde(rename = "Company")]
    company: String,
    #[serde(rename = "Role")]
    role: String,
    #[serde(rename = "Location", default, deserialize_with = "empty_string_as_none")]
    location: Option<String>,
    #[serde(rename = "Stipend", default, deserialize_with = "empty_string_as_none")]
    stipend: Option<String>,
    #[serde(rename = "Duration", default, deserialize_with = "empty_string_as_none")]
    duration: Option<String>,
    #[serde(rename = "Skills", default, deserialize_with = "empty_string_as_none")]
    skills: Option<String>,
    #[serde(rename = "Deadline", default, deserialize_with = "empty_string_as_none")]
    deadline: Option<String>,
    #[serde(rename = "Notes", default, deserialize_with = "empty_string_as_none")]
    notes: Option<String>,
}

impl InternshipRow {
    fn into_entry(self, line: usize) -> NewInternship {
        let deadline = self.deadline.as_deref().and_then(|raw| match parse_date(raw) {
            Ok(date) => Some(date),
            Err(err) => {
                warn!(line, company = %self.company, %err, "deadline not set");
                None
            }
        });

        NewInternship {
            company: self.company,
            role: self.role,
            location: self.location.unwrap_or_default(),
            stipend: self.stipend.unwrap_or_default(),
            duration: self.duration.unwrap_or_default(),
            skills: self
                .skills
                .as_deref()
                .map(parse_skill_list)
                .unwrap_or_default(),
            deadline,
            notes: self.notes,
        }
    }
}
