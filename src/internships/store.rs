use super::domain::{
    ApplicationStatus, InternshipRecord, NewInternship, RecordEdit, DATE_FORMAT, TIMESTAMP_FORMAT,
};
use super::search::{search, SearchQuery};
use chrono::{NaiveDate, NaiveDateTime};
use serde::Serialize;
use serde_json::error::Category;
use std::cell::RefCell;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

/// Ordered collection of tracked internships. Ids stay dense and follow
/// insertion order; deleting a record renumbers the ones after it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InternshipBook {
    records: Vec<InternshipRecord>,
}

impl InternshipBook {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_records(records: Vec<InternshipRecord>) -> Self {
        Self { records }
    }

    pub fn records(&self) -> &[InternshipRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn get(&self, id: u32) -> Option<&InternshipRecord> {
        self.records.iter().find(|record| record.id == id)
    }

    pub fn search(&self, query: &SearchQuery) -> Vec<&InternshipRecord> {
        search(&self.records, query)
    }

    /// Appends a record with the next id, `Not Applied` status and `today` as its added date.
    pub fn add(&mut self, entry: NewInternship, today: NaiveDate) -> &InternshipRecord {
        let id = self.records.len() as u32 + 1;
        let record = InternshipRecord {
            id,
            company: entry.company.trim().to_string(),
            role: entry.role.trim().to_string(),
            location: entry.location.trim().to_string(),
            stipend: entry.stipend.trim().to_string(),
            duration: entry.duration.trim().to_string(),
            skills: entry.skills,
            status: ApplicationStatus::NotApplied,
            date_added: today.format(DATE_FORMAT).to_string(),
            deadline: entry
                .deadline
                .map(|deadline| deadline.format(DATE_FORMAT).to_string()),
            notes: entry
                .notes
                .map(|notes| notes.trim().to_string())
                .filter(|notes| !notes.is_empty()),
            last_updated: None,
        };

        debug!(id, company = %record.company, "internship added");
        self.records.push(record);
        &self.records[self.records.len() - 1]
    }

    /// Returns the previous status alongside the updated record.
    pub fn update_status(
        &mut self,
        id: u32,
        status: ApplicationStatus,
        now: NaiveDateTime,
    ) -> Result<(ApplicationStatus, &InternshipRecord), StoreError> {
        let record = self.get_mut(id)?;
        let previous = record.status;
        record.status = status;
        record.last_updated = Some(now.format(TIMESTAMP_FORMAT).to_string());
        debug!(id, from = %previous, to = %status, "status updated");
        Ok((previous, &*record))
    }

    /// Applies one field change. Blank text leaves the field as it was;
    /// notes are the exception and may be cleared.
    pub fn edit(
        &mut self,
        id: u32,
        edit: RecordEdit,
        now: NaiveDateTime,
    ) -> Result<&InternshipRecord, StoreError> {
        let record = self.get_mut(id)?;

        match edit {
            RecordEdit::Company(value) => replace_if_present(&mut record.company, value),
            RecordEdit::Role(value) => replace_if_present(&mut record.role, value),
            RecordEdit::Location(value) => replace_if_present(&mut record.location, value),
            RecordEdit::Stipend(value) => replace_if_present(&mut record.stipend, value),
            RecordEdit::Duration(value) => replace_if_present(&mut record.duration, value),
            RecordEdit::Skills(skills) => {
                if !skills.is_empty() {
                    record.skills = skills;
                }
            }
            RecordEdit::Deadline(deadline) => {
                record.deadline = Some(deadline.format(DATE_FORMAT).to_string());
            }
            RecordEdit::Notes(notes) => {
                record.notes = notes
                    .map(|notes| notes.trim().to_string())
                    .filter(|notes| !notes.is_empty());
            }
        }

        record.last_updated = Some(now.format(TIMESTAMP_FORMAT).to_string());
        Ok(&*record)
    }

    /// Removes the record and renumbers the remaining ids from 1.
    pub fn delete(&mut self, id: u32) -> Result<InternshipRecord, StoreError> {
        let index = self
            .records
            .iter()
            .position(|record| record.id == id)
            .ok_or(StoreError::RecordNotFound(id))?;

        let removed = self.records.remove(index);
        for (position, record) in self.records.iter_mut().enumerate() {
            record.id = position as u32 + 1;
        }
        debug!(id, remaining = self.records.len(), "internship deleted");
        Ok(removed)
    }

    fn get_mut(&mut self, id: u32) -> Result<&mut InternshipRecord, StoreError> {
        self.records
            .iter_mut()
            .find(|record| record.id == id)
            .ok_or(StoreError::RecordNotFound(id))
    }
}

fn replace_if_present(field: &mut String, value: String) {
    let trimmed = value.trim();
    if !trimmed.is_empty() {
        *field = trimmed.to_string();
    }
}

/// Persistence boundary for the record book.
pub trait RecordStore {
    fn load(&self) -> Result<InternshipBook, StoreError>;
    fn save(&self, book: &InternshipBook) -> Result<(), StoreError>;
}

#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("failed to access record file: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to encode records: {0}")]
    Json(#[from] serde_json::Error),
    #[error("no internship with id {0}")]
    RecordNotFound(u32),
}

/// Keeps the book in a JSON array on disk, indented four spaces.
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    pub fn new<P: Into<PathBuf>>(path: P) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl RecordStore for JsonFileStore {
    /// A missing file is an empty book. A file that is not valid JSON is
    /// also treated as empty and the next save overwrites it. Well-formed
    /// JSON that does not describe records is an error, so nothing gets
    /// written over it.
    fn load(&self) -> Result<InternshipBook, StoreError> {
        let raw = match std::fs::read_to_string(&self.path) {
            Ok(raw) => raw,
            Err(err) if err.kind() == ErrorKind::NotFound => {
                debug!(path = %self.path.display(), "no record file yet");
                return Ok(InternshipBook::new());
            }
            Err(err) => return Err(err.into()),
        };

        match serde_json::from_str::<Vec<InternshipRecord>>(&raw) {
            Ok(records) => {
                debug!(path = %self.path.display(), count = records.len(), "records loaded");
                Ok(InternshipBook::from_records(records))
            }
            Err(err) if matches!(err.classify(), Category::Syntax | Category::Eof) => {
                warn!(path = %self.path.display(), error = %err, "record file is not valid JSON; starting empty");
                Ok(InternshipBook::new())
            }
            Err(err) => Err(err.into()),
        }
    }

    fn save(&self, book: &InternshipBook) -> Result<(), StoreError> {
        let mut buffer = Vec::new();
        let formatter = serde_json::ser::PrettyFormatter::with_indent(b"    ");
        let mut serializer = serde_json::Serializer::with_formatter(&mut buffer, formatter);
        book.records().serialize(&mut serializer)?;

        std::fs::write(&self.path, buffer)?;
        debug!(path = %self.path.display(), count = book.len(), "records saved");
        Ok(())
    }
}

/// In-process store for tests and dry runs.
#[derive(Debug, Default)]
pub struct MemoryStore {
    book: RefCell<InternshipBook>,
}

impl MemoryStore {
    pub fn new(book: InternshipBook) -> Self {
        Self {
            book: RefCell::new(book),
        }
    }
}

impl RecordStore for MemoryStore {
    fn load(&self) -> Result<InternshipBook, StoreError> {
        Ok(self.book.borrow().clone())
    }

    fn save(&self, book: &InternshipBook) -> Result<(), StoreError> {
        *self.book.borrow_mut() = book.clone();
        Ok(())
    }
}
