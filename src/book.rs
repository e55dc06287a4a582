//! Persistent address book: an ordered, name-keyed collection of records.

use crate::error::{PersistenceError, PersistenceResult};
use crate::models::ContactRecord;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use tracing::debug;

/// The full contact collection, keyed by name and backed by a JSON file.
///
/// Records are kept in insertion order; adding a record under an existing
/// name overwrites it in place without changing its position. Every mutating
/// operation rewrites the backing file before returning, so the in-memory
/// state and the file agree whenever a call has succeeded.
///
/// The file path is an explicit construction parameter; there is no default
/// path shared across instances.
#[derive(Debug)]
pub struct ContactBook {
    path: PathBuf,
    records: Vec<ContactRecord>,
}

impl ContactBook {
    /// Open the book at `path`, loading any existing records.
    ///
    /// A missing file means a new, empty book.
    ///
    /// # Errors
    ///
    /// Returns `PersistenceError` for any read failure other than the file
    /// not existing, and for unparseable file contents.
    pub fn open(path: impl Into<PathBuf>) -> PersistenceResult<Self> {
        let path = path.into();
        let records = match fs::read(&path) {
            Ok(bytes) => serde_json::from_slice(&bytes).map_err(|source| {
                PersistenceError::Format {
                    path: path.clone(),
                    source,
                }
            })?,
            Err(err) if err.kind() == ErrorKind::NotFound => Vec::new(),
            Err(source) => {
                return Err(PersistenceError::Io {
                    path: path.clone(),
                    source,
                })
            }
        };

        debug!(path = %path.display(), records = records.len(), "opened contact book");
        Ok(Self { path, records })
    }

    /// The path of the backing file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Insert a record, overwriting any existing record with the same name.
    ///
    /// The full book is saved to disk before this returns.
    ///
    /// # Errors
    ///
    /// Returns `PersistenceError` if the save fails; the in-memory insert has
    /// already happened at that point.
    pub fn add_record(&mut self, record: ContactRecord) -> PersistenceResult<()> {
        let name = record.name().as_str();
        match self.records.iter().position(|r| r.name() == record.name()) {
            Some(index) => {
                debug!(name, "overwriting existing record");
                self.records[index] = record;
            }
            None => {
                debug!(name, "adding record");
                self.records.push(record);
            }
        }
        self.save()
    }

    /// Remove the record for `name`, if present.
    ///
    /// Returns whether a record was removed. The book is saved only when a
    /// removal actually happened; deleting an absent name touches nothing.
    ///
    /// # Errors
    ///
    /// Returns `PersistenceError` if the save fails.
    pub fn delete(&mut self, name: &str) -> PersistenceResult<bool> {
        match self.records.iter().position(|r| r.name().as_str() == name) {
            Some(index) => {
                self.records.remove(index);
                debug!(name, "deleted record");
                self.save()?;
                Ok(true)
            }
            None => Ok(false),
        }
    }

    /// Exact-name lookup.
    pub fn find(&self, name: &str) -> Option<&ContactRecord> {
        self.records.iter().find(|r| r.name().as_str() == name)
    }

    /// Search by substring: case-insensitively against names, exactly against
    /// phone digits.
    ///
    /// A record is appended once per match, so one that matches on both its
    /// name and several phones appears several times. Results follow the
    /// book's insertion order.
    pub fn search(&self, query: &str) -> Vec<&ContactRecord> {
        let query_lower = query.to_lowercase();
        let mut results = Vec::new();

        for record in &self.records {
            if record.name().as_str().to_lowercase().contains(&query_lower) {
                results.push(record);
            }
            for phone in record.phones() {
                if phone.as_str().contains(query) {
                    results.push(record);
                }
            }
        }

        debug!(query, hits = results.len(), "searched contact book");
        results
    }

    /// Iterate over all records in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &ContactRecord> {
        self.records.iter()
    }

    /// Number of records in the book.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether the book holds no records.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Write the whole collection to the backing file, replacing its contents.
    fn save(&self) -> PersistenceResult<()> {
        let bytes =
            serde_json::to_vec_pretty(&self.records).map_err(|source| PersistenceError::Format {
                path: self.path.clone(),
                source,
            })?;
        fs::write(&self.path, bytes).map_err(|source| PersistenceError::Io {
            path: self.path.clone(),
            source,
        })?;

        debug!(path = %self.path.display(), records = self.records.len(), "saved contact book");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn temp_book() -> (tempfile::TempDir, ContactBook) {
        let dir = tempfile::tempdir().unwrap();
        let book = ContactBook::open(dir.path().join("contacts.json")).unwrap();
        (dir, book)
    }

    fn record(name: &str, phones: &[&str]) -> ContactRecord {
        let mut record = ContactRecord::new(name, None).unwrap();
        for phone in phones {
            record.add_phone(phone).unwrap();
        }
        record
    }

    #[test]
    fn test_open_missing_file_starts_empty() {
        let (_dir, book) = temp_book();
        assert!(book.is_empty());
    }

    #[test]
    fn test_open_corrupt_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("contacts.json");
        fs::write(&path, b"not json").unwrap();

        let err = ContactBook::open(&path).unwrap_err();
        assert!(matches!(err, PersistenceError::Format { .. }));
    }

    #[test]
    fn test_add_record_overwrites_by_name_in_place() {
        let (_dir, mut book) = temp_book();
        book.add_record(record("Anna", &["0501234567"])).unwrap();
        book.add_record(record("Bohdan", &[])).unwrap();
        book.add_record(record("Anna", &["0987654321"])).unwrap();

        assert_eq!(book.len(), 2);
        let names: Vec<&str> = book.iter().map(|r| r.name().as_str()).collect();
        assert_eq!(names, ["Anna", "Bohdan"]);
        assert_eq!(
            book.find("Anna").unwrap().phones()[0].as_str(),
            "0987654321"
        );
    }

    #[test]
    fn test_delete_absent_name_is_noop() {
        let (_dir, mut book) = temp_book();
        book.add_record(record("Anna", &[])).unwrap();

        assert!(!book.delete("Bohdan").unwrap());
        assert!(book.delete("Anna").unwrap());
        assert!(book.is_empty());
    }

    #[test]
    fn test_find_exact_name() {
        let (_dir, mut book) = temp_book();
        book.add_record(record("Anna", &[])).unwrap();

        assert!(book.find("Anna").is_some());
        assert!(book.find("anna").is_none());
        assert!(book.find("Ann").is_none());
    }

    #[test]
    fn test_search_names_case_insensitive() {
        let (_dir, mut book) = temp_book();
        book.add_record(record("Anna", &[])).unwrap();
        book.add_record(record("Bohdan", &[])).unwrap();
        book.add_record(record("Hanna", &[])).unwrap();

        let hits: Vec<&str> = book
            .search("ANN")
            .into_iter()
            .map(|r| r.name().as_str())
            .collect();
        assert_eq!(hits, ["Anna", "Hanna"]);
    }

    #[test]
    fn test_search_matches_phone_substrings() {
        let (_dir, mut book) = temp_book();
        book.add_record(record("Anna", &["0300000000"])).unwrap();
        book.add_record(record("Bohdan", &["1111030111", "9999999999"]))
            .unwrap();
        book.add_record(record("Olena", &["5555555555"])).unwrap();

        let hits: Vec<&str> = book
            .search("030")
            .into_iter()
            .map(|r| r.name().as_str())
            .collect();
        assert_eq!(hits, ["Anna", "Bohdan"]);
    }

    #[test]
    fn test_search_appends_once_per_match() {
        let (_dir, mut book) = temp_book();
        // Both phones contain the query, so the record appears twice.
        book.add_record(record("Anna", &["0301112222", "3330304444"]))
            .unwrap();

        let hits = book.search("030");
        assert_eq!(hits.len(), 2);
        assert!(hits.iter().all(|r| r.name().as_str() == "Anna"));
    }
}
