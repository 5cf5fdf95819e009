//! In-memory file library for the converter.
//!
//! Records are kept newest first. Adding a record selects it; removing the
//! selected record moves the selection to the first remaining one.

mod mime;
mod record;

pub use mime::{guess_mime, DEFAULT_MIME};
pub use record::{FileRecord, ScriptState, SCRIPT_WAITING};

use tracing::debug;

#[derive(Debug, Default)]
pub struct FileLibrary {
    files: Vec<FileRecord>,
    active_id: Option<String>,
}

impl FileLibrary {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert at the front and select it.
    pub fn add(&mut self, record: FileRecord) -> &FileRecord {
        self.active_id = Some(record.id.clone());
        self.files.insert(0, record);
        &self.files[0]
    }

    /// Remove a record by id.
    pub fn remove(&mut self, id: &str) -> Option<FileRecord> {
        let index = self.files.iter().position(|f| f.id == id)?;
        let removed = self.files.remove(index);
        if self.active_id.as_deref() == Some(id) {
            self.active_id = self.files.first().map(|f| f.id.clone());
        }
        debug!(id, remaining = self.files.len(), "file removed from library");
        Some(removed)
    }

    /// Select a record. Unknown ids leave the selection alone.
    pub fn select(&mut self, id: &str) -> bool {
        if self.files.iter().any(|f| f.id == id) {
            self.active_id = Some(id.to_string());
            true
        } else {
            false
        }
    }

    pub fn select_next(&mut self) {
        self.step(1);
    }

    pub fn select_prev(&mut self) {
        self.step(self.files.len().saturating_sub(1));
    }

    fn step(&mut self, by: usize) {
        if self.files.is_empty() {
            return;
        }
        let next = self
            .active_index()
            .map(|i| (i + by) % self.files.len())
            .unwrap_or(0);
        self.active_id = Some(self.files[next].id.clone());
    }

    pub fn active(&self) -> Option<&FileRecord> {
        let id = self.active_id.as_deref()?;
        self.get(id)
    }

    pub fn active_id(&self) -> Option<&str> {
        self.active_id.as_deref()
    }

    pub fn active_index(&self) -> Option<usize> {
        let id = self.active_id.as_deref()?;
        self.files.iter().position(|f| f.id == id)
    }

    pub fn get(&self, id: &str) -> Option<&FileRecord> {
        self.files.iter().find(|f| f.id == id)
    }

    /// Store a finished script. Returns false if the file is gone.
    pub fn set_script(&mut self, id: &str, script: String) -> bool {
        match self.files.iter_mut().find(|f| f.id == id) {
            Some(record) => {
                record.script = ScriptState::Ready(script);
                true
            }
            None => false,
        }
    }

    pub fn files(&self) -> &[FileRecord] {
        &self.files
    }

    pub fn len(&self) -> usize {
        self.files.len()
    }

    pub fn is_empty(&self) -> bool {
        self.files.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(name: &str) -> FileRecord {
        FileRecord::from_bytes(name, None, name.as_bytes().to_vec())
    }

    #[test]
    fn test_add_is_newest_first_and_selects() {
        let mut library = FileLibrary::new();
        let a = library.add(record("a")).id.clone();
        let b = library.add(record("b")).id.clone();

        assert_eq!(library.files()[0].id, b);
        assert_eq!(library.files()[1].id, a);
        assert_eq!(library.active_id(), Some(b.as_str()));
    }

    #[test]
    fn test_remove_active_selects_first_remaining() {
        let mut library = FileLibrary::new();
        let a = library.add(record("a")).id.clone();
        let b = library.add(record("b")).id.clone();
        let c = library.add(record("c")).id.clone();

        library.select(&a);
        library.remove(&a);
        assert_eq!(library.active_id(), Some(c.as_str()));

        library.remove(&b);
        assert_eq!(library.active_id(), Some(c.as_str()));

        library.remove(&c);
        assert!(library.active().is_none());
        assert!(library.is_empty());
    }

    #[test]
    fn test_remove_unknown() {
        let mut library = FileLibrary::new();
        library.add(record("a"));
        assert!(library.remove("nope").is_none());
        assert_eq!(library.len(), 1);
    }

    #[test]
    fn test_select_unknown_keeps_selection() {
        let mut library = FileLibrary::new();
        let a = library.add(record("a")).id.clone();
        assert!(!library.select("nope"));
        assert_eq!(library.active_id(), Some(a.as_str()));
    }

    #[test]
    fn test_select_next_prev_wrap() {
        let mut library = FileLibrary::new();
        let a = library.add(record("a")).id.clone();
        let b = library.add(record("b")).id.clone();

        assert_eq!(library.active_id(), Some(b.as_str()));
        library.select_next();
        assert_eq!(library.active_id(), Some(a.as_str()));
        library.select_next();
        assert_eq!(library.active_id(), Some(b.as_str()));
        library.select_prev();
        assert_eq!(library.active_id(), Some(a.as_str()));
    }

    #[test]
    fn test_set_script() {
        let mut library = FileLibrary::new();
        let a = library.add(record("a")).id.clone();

        assert!(library.set_script(&a, "print(1)".to_string()));
        assert_eq!(library.get(&a).unwrap().smart_script(), "print(1)");

        library.remove(&a);
        assert!(!library.set_script(&a, "late".to_string()));
    }
}
