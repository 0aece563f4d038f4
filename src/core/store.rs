use std::path::{Path, PathBuf};

use rand::Rng;
use thiserror::Error;

use super::note::{Comment, Note, NoteId};

/// Spawn area for notes that have no board position yet. Matches the
/// board's initial viewport so defaulted notes land somewhere visible.
const SPAWN_WIDTH: f32 = 760.0;
const SPAWN_HEIGHT: f32 = 440.0;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("failed to read notes file: {0}")]
    Read(#[from] std::io::Error),
    #[error("malformed notes file: {0}")]
    Parse(#[from] serde_json::Error),
}

/// The note collection plus the active selection. All mutation entry points
/// live here; every mutation rewrites the whole serialized collection.
pub struct NoteStore {
    path: PathBuf,
    notes: Vec<Note>,
    active: Option<NoteId>,
}

impl NoteStore {
    /// Load the collection from disk. An absent or malformed file yields an
    /// empty collection; malformed data is logged, never surfaced. Any note
    /// lacking board coordinates gets a random in-viewport position.
    pub fn load(path: PathBuf) -> Self {
        let mut notes = match read_notes(&path) {
            Ok(notes) => notes,
            Err(StoreError::Read(_)) => Vec::new(),
            Err(e @ StoreError::Parse(_)) => {
                log::warn!("Starting with an empty collection: {}", e);
                Vec::new()
            }
        };
        assign_default_positions(&mut notes);
        Self {
            path,
            notes,
            active: None,
        }
    }

    pub fn notes(&self) -> &[Note] {
        &self.notes
    }

    pub fn active(&self) -> Option<&Note> {
        self.active
            .and_then(|id| self.notes.iter().find(|n| n.id == id))
    }

    pub fn active_id(&self) -> Option<NoteId> {
        self.active
    }

    /// Make a note the active selection. Unknown ids are ignored.
    pub fn select(&mut self, id: NoteId) {
        if self.notes.iter().any(|n| n.id == id) {
            self.active = Some(id);
        }
    }

    /// Create a note with defaulted fields, append it, select it, persist.
    pub fn add_note(&mut self) -> NoteId {
        let id = self.next_id();
        self.notes.push(Note::new(id));
        self.active = Some(id);
        self.save();
        id
    }

    /// Replace the note with a matching id and re-select it. An unknown id
    /// silently drops the update.
    pub fn update_note(&mut self, note: Note) {
        if let Some(slot) = self.notes.iter_mut().find(|n| n.id == note.id) {
            self.active = Some(note.id);
            *slot = note;
            self.save();
        }
    }

    /// Remove the matching note. Deleting the active note clears the
    /// selection; deleting any other note leaves it alone.
    pub fn delete_note(&mut self, id: NoteId) {
        self.notes.retain(|n| n.id != id);
        if self.active == Some(id) {
            self.active = None;
        }
        self.save();
    }

    /// Append a comment with a generated id to the matching note.
    pub fn add_comment(&mut self, id: NoteId, text: impl Into<String>) {
        let comment = Comment {
            id: chrono::Utc::now().timestamp_millis(),
            text: text.into(),
        };
        if let Some(note) = self.notes.iter_mut().find(|n| n.id == id) {
            note.comments.push(comment);
            self.save();
        }
    }

    /// Timestamp-derived id, bumped past any same-millisecond collision.
    fn next_id(&self) -> NoteId {
        let mut id = chrono::Utc::now().timestamp_millis();
        while self.notes.iter().any(|n| n.id == id) {
            id += 1;
        }
        id
    }

    /// Full rewrite of the serialized collection. Fire-and-forget: a write
    /// failure is logged and otherwise silent.
    fn save(&self) {
        match serde_json::to_string_pretty(&self.notes) {
            Ok(json) => {
                if let Err(e) = std::fs::write(&self.path, json) {
                    log::error!("Failed to save notes: {}", e);
                }
            }
            Err(e) => log::error!("Failed to serialize notes: {}", e),
        }
    }
}

fn read_notes(path: &Path) -> Result<Vec<Note>, StoreError> {
    let content = std::fs::read_to_string(path)?;
    Ok(serde_json::from_str(&content)?)
}

fn assign_default_positions(notes: &mut [Note]) {
    let mut rng = rand::thread_rng();
    for note in notes {
        if note.x.is_none() || note.y.is_none() {
            note.x = Some(rng.gen_range(0.0..SPAWN_WIDTH));
            note.y = Some(rng.gen_range(0.0..SPAWN_HEIGHT));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::note::{DEFAULT_COLOR, DEFAULT_TITLE};

    fn store_in(dir: &tempfile::TempDir) -> NoteStore {
        NoteStore::load(dir.path().join("notes.json"))
    }

    #[test]
    fn absent_file_loads_empty() {
        let dir = tempfile::tempdir().unwrap();
        let store = store_in(&dir);
        assert!(store.notes().is_empty());
        assert!(store.active().is_none());
    }

    #[test]
    fn malformed_file_loads_empty() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("notes.json");
        std::fs::write(&path, "{not json").unwrap();
        let store = NoteStore::load(path);
        assert!(store.notes().is_empty());
    }

    #[test]
    fn add_note_appends_and_selects_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let mut store = store_in(&dir);
        let id = store.add_note();
        assert_eq!(store.notes().len(), 1);
        let active = store.active().unwrap();
        assert_eq!(active.id, id);
        assert_eq!(active.title, DEFAULT_TITLE);
        assert_eq!(active.color, DEFAULT_COLOR);
        assert!(active.tags.is_empty());
        assert!(active.comments.is_empty());
    }

    #[test]
    fn same_millisecond_ids_stay_unique() {
        let dir = tempfile::tempdir().unwrap();
        let mut store = store_in(&dir);
        let a = store.add_note();
        let b = store.add_note();
        let c = store.add_note();
        assert_ne!(a, b);
        assert_ne!(b, c);
        assert_ne!(a, c);
    }

    #[test]
    fn update_replaces_record_and_reselects() {
        let dir = tempfile::tempdir().unwrap();
        let mut store = store_in(&dir);
        let a = store.add_note();
        let b = store.add_note();
        assert_eq!(store.active_id(), Some(b));

        let mut note = store.notes()[0].clone();
        assert_eq!(note.id, a);
        note.title = "Groceries".to_string();
        store.update_note(note);

        assert_eq!(store.notes()[0].title, "Groceries");
        assert_eq!(store.active_id(), Some(a));
    }

    #[test]
    fn update_with_unknown_id_is_dropped() {
        let dir = tempfile::tempdir().unwrap();
        let mut store = store_in(&dir);
        store.add_note();
        let before: Vec<_> = store.notes().to_vec();

        let mut ghost = Note::new(999);
        ghost.title = "Ghost".to_string();
        store.update_note(ghost);

        assert_eq!(store.notes(), &before[..]);
    }

    #[test]
    fn delete_active_clears_selection() {
        let dir = tempfile::tempdir().unwrap();
        let mut store = store_in(&dir);
        let id = store.add_note();
        store.delete_note(id);
        assert!(store.notes().is_empty());
        assert!(store.active().is_none());
    }

    #[test]
    fn delete_non_active_keeps_selection() {
        let dir = tempfile::tempdir().unwrap();
        let mut store = store_in(&dir);
        let a = store.add_note();
        let b = store.add_note();
        assert_eq!(store.active_id(), Some(b));
        store.delete_note(a);
        assert_eq!(store.active_id(), Some(b));
        assert_eq!(store.notes().len(), 1);

        // Missing id is a no-op
        store.delete_note(999);
        assert_eq!(store.notes().len(), 1);
        assert_eq!(store.active_id(), Some(b));
    }

    #[test]
    fn comment_append_preserves_prior_comments() {
        let dir = tempfile::tempdir().unwrap();
        let mut store = store_in(&dir);
        let id = store.add_note();
        store.add_comment(id, "first");
        store.add_comment(id, "second");

        let comments = &store.notes()[0].comments;
        assert_eq!(comments.len(), 2);
        assert_eq!(comments[0].text, "first");
        assert_eq!(comments[1].text, "second");

        // Unknown id appends nowhere
        store.add_comment(999, "lost");
        assert_eq!(store.notes()[0].comments.len(), 2);
    }

    #[test]
    fn persistence_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("notes.json");

        let mut store = NoteStore::load(path.clone());
        let id = store.add_note();
        let mut note = store.active().unwrap().clone();
        note.title = "Board idea".to_string();
        note.content = "sketch the layout".to_string();
        note.color = "#ffe08a".to_string();
        note.x = Some(120.0);
        note.y = Some(80.0);
        store.update_note(note);
        store.add_comment(id, "looks good");

        let reloaded = NoteStore::load(path);
        assert_eq!(reloaded.notes(), store.notes());
        // Selection is transient
        assert!(reloaded.active().is_none());
    }

    #[test]
    fn missing_positions_are_defaulted_on_load() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("notes.json");
        let json = r#"[{
            "id": 1,
            "title": "Untouched",
            "content": "",
            "color": "#ffffff",
            "tags": [],
            "comments": [],
            "created": "2026-08-01T09:30:00"
        }]"#;
        std::fs::write(&path, json).unwrap();

        let store = NoteStore::load(path);
        let note = &store.notes()[0];
        let x = note.x.unwrap();
        let y = note.y.unwrap();
        assert!((0.0..SPAWN_WIDTH).contains(&x));
        assert!((0.0..SPAWN_HEIGHT).contains(&y));
    }
}
