use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// Note ids are creation-timestamp millis; the store bumps collisions.
pub type NoteId = i64;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Comment {
    pub id: i64,
    pub text: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Note {
    pub id: NoteId,
    pub title: String,
    pub content: String,
    pub color: String,
    pub tags: Vec<String>,
    pub comments: Vec<Comment>,
    pub created: NaiveDateTime,
    /// Board coordinates. Absent until assigned; defaulted on load.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub x: Option<f32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub y: Option<f32>,
}

pub const DEFAULT_TITLE: &str = "New Note";
pub const DEFAULT_COLOR: &str = "#ffffff";

impl Note {
    pub fn new(id: NoteId) -> Self {
        Self {
            id,
            title: DEFAULT_TITLE.to_string(),
            content: String::new(),
            color: DEFAULT_COLOR.to_string(),
            tags: Vec::new(),
            comments: Vec::new(),
            created: chrono::Local::now().naive_local(),
            x: None,
            y: None,
        }
    }

    /// Union tags into the note, keeping insertion order and dropping exact duplicates.
    pub fn add_tags<I>(&mut self, tags: I)
    where
        I: IntoIterator<Item = String>,
    {
        for tag in tags {
            if !self.tags.contains(&tag) {
                self.tags.push(tag);
            }
        }
    }

    /// Remove a tag by exact string match.
    pub fn remove_tag(&mut self, tag: &str) {
        self.tags.retain(|t| t != tag);
    }
}

/// Split comma-separated tag input: trim each piece, drop empties.
/// No case normalization.
pub fn parse_tags(input: &str) -> Vec<String> {
    input
        .split(',')
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
        .collect()
}

/// Parse a `#rrggbb` color string. Anything else yields `None`.
pub fn hex_rgb(hex: &str) -> Option<(u8, u8, u8)> {
    let hex = hex.strip_prefix('#')?;
    if hex.len() != 6 {
        return None;
    }
    let r = u8::from_str_radix(&hex[0..2], 16).ok()?;
    let g = u8::from_str_radix(&hex[2..4], 16).ok()?;
    let b = u8::from_str_radix(&hex[4..6], 16).ok()?;
    Some((r, g, b))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_note_defaults() {
        let note = Note::new(42);
        assert_eq!(note.id, 42);
        assert_eq!(note.title, DEFAULT_TITLE);
        assert!(note.content.is_empty());
        assert_eq!(note.color, DEFAULT_COLOR);
        assert!(note.tags.is_empty());
        assert!(note.comments.is_empty());
        assert!(note.x.is_none());
        assert!(note.y.is_none());
    }

    #[test]
    fn tag_parse_trims_and_drops_empties() {
        assert_eq!(parse_tags("a, a, b"), vec!["a", "a", "b"]);
        assert_eq!(parse_tags(" rust ,, gui , "), vec!["rust", "gui"]);
        assert!(parse_tags("  ,  ").is_empty());
    }

    #[test]
    fn tag_union_is_idempotent() {
        let mut note = Note::new(1);
        note.add_tags(parse_tags("a, a, b"));
        assert_eq!(note.tags, vec!["a", "b"]);
        note.add_tags(parse_tags("a"));
        assert_eq!(note.tags, vec!["a", "b"]);
        // Case-sensitive: "A" is a distinct tag
        note.add_tags(parse_tags("A"));
        assert_eq!(note.tags, vec!["a", "b", "A"]);
    }

    #[test]
    fn tag_remove_exact_match() {
        let mut note = Note::new(1);
        note.add_tags(vec!["a".to_string(), "b".to_string()]);
        note.remove_tag("a");
        assert_eq!(note.tags, vec!["b"]);
        note.remove_tag("missing");
        assert_eq!(note.tags, vec!["b"]);
    }

    #[test]
    fn hex_colors() {
        assert_eq!(hex_rgb("#ffffff"), Some((255, 255, 255)));
        assert_eq!(hex_rgb("#1a2b3c"), Some((0x1a, 0x2b, 0x3c)));
        assert_eq!(hex_rgb("ffffff"), None);
        assert_eq!(hex_rgb("#fff"), None);
        assert_eq!(hex_rgb("#zzzzzz"), None);
    }
}
