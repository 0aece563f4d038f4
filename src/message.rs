use cosmic::iced::Point;

use crate::core::note::NoteId;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LayoutMode {
    Grid,
    Board,
}

impl LayoutMode {
    pub fn title(&self) -> &'static str {
        match self {
            Self::Grid => "Grid",
            Self::Board => "Board",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoteField {
    Title,
    Color,
}

#[derive(Debug, Clone)]
pub enum Message {
    // Session gate
    UsernameChanged(String),
    PasswordChanged(String),
    LoginSubmit,
    Logout,

    // Layout
    SetLayout(LayoutMode),

    // Note CRUD
    AddNote,
    SelectNote(NoteId),
    SetNoteField(NoteId, NoteField, String),
    NoteBodyAction(cosmic::widget::text_editor::Action),
    ConfirmDeleteNote(NoteId),
    CancelDeleteNote,
    DeleteNote(NoteId),

    // Tags
    TagInputChanged(String),
    TagSubmit,
    RemoveTag(NoteId, String),

    // Comments
    CommentInputChanged(String),
    CommentSubmit,

    // Board drag
    MoveNote(NoteId, Point),
}
