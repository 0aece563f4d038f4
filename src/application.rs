use cosmic::app::{Core, Task as CosmicTask};
use cosmic::widget::{button, row, text_editor};
use cosmic::{Application, Element, executor};

use crate::config::PinboardConfig;
use crate::core::note::{parse_tags, Note, NoteId};
use crate::core::session::Session;
use crate::core::store::NoteStore;
use crate::message::{LayoutMode, Message, NoteField};
use crate::pages;

pub struct Pinboard {
    core: Core,
    config: PinboardConfig,
    cosmic_config: cosmic::cosmic_config::Config,

    // Domain state
    session: Session,
    store: NoteStore,

    // UI state
    layout: LayoutMode,
    tag_input: String,
    comment_input: String,
    pending_delete: Option<NoteId>,
    body_editor: Option<(NoteId, text_editor::Content)>,
}

pub struct Flags {
    pub config: PinboardConfig,
    pub cosmic_config: cosmic::cosmic_config::Config,
}

impl Application for Pinboard {
    type Executor = executor::Default;
    type Flags = Flags;
    type Message = Message;

    const APP_ID: &'static str = "dev.pinboard.app";

    fn core(&self) -> &Core {
        &self.core
    }

    fn core_mut(&mut self) -> &mut Core {
        &mut self.core
    }

    fn init(core: Core, flags: Self::Flags) -> (Self, CosmicTask<Self::Message>) {
        let config = flags.config;
        let cosmic_config = flags.cosmic_config;

        if let Err(e) = config.ensure_dirs() {
            log::error!("Failed to create data directory: {}", e);
        }

        let store = NoteStore::load(config.notes_path());

        let app = Self {
            core,
            config,
            cosmic_config,
            session: Session::default(),
            store,
            layout: LayoutMode::Grid,
            tag_input: String::new(),
            comment_input: String::new(),
            pending_delete: None,
            body_editor: None,
        };

        (app, CosmicTask::none())
    }

    fn header_center(&self) -> Vec<Element<'_, Message>> {
        if !self.session.logged_in() {
            return Vec::new();
        }

        let grid_btn = if self.layout == LayoutMode::Grid {
            button::suggested(LayoutMode::Grid.title())
        } else {
            button::standard(LayoutMode::Grid.title())
        }
        .on_press(Message::SetLayout(LayoutMode::Grid));

        let board_btn = if self.layout == LayoutMode::Board {
            button::suggested(LayoutMode::Board.title())
        } else {
            button::standard(LayoutMode::Board.title())
        }
        .on_press(Message::SetLayout(LayoutMode::Board));

        vec![row().spacing(4).push(grid_btn).push(board_btn).into()]
    }

    fn header_end(&self) -> Vec<Element<'_, Message>> {
        if !self.session.logged_in() {
            return Vec::new();
        }
        vec![button::standard(crate::fl!("logout")).on_press(Message::Logout).into()]
    }

    fn subscription(&self) -> cosmic::iced::Subscription<Message> {
        cosmic::iced::event::listen_with(|event, _status, _id| match event {
            cosmic::iced::Event::Keyboard(cosmic::iced::keyboard::Event::KeyPressed {
                key: cosmic::iced::keyboard::Key::Character(ref c),
                modifiers,
                ..
            }) if c.as_str() == "n" && modifiers.control() => Some(Message::AddNote),
            _ => None,
        })
    }

    fn update(&mut self, message: Message) -> CosmicTask<Message> {
        match message {
            // Session gate
            Message::UsernameChanged(value) => {
                self.session.username = value;
            }

            Message::PasswordChanged(value) => {
                self.session.password = value;
            }

            Message::LoginSubmit => {
                self.session.login();
            }

            Message::Logout => {
                self.session.logout();
                self.layout = LayoutMode::Grid;
                self.pending_delete = None;
                self.body_editor = None;
                self.tag_input.clear();
                self.comment_input.clear();
            }

            Message::SetLayout(mode) => {
                self.layout = mode;
            }

            // Note CRUD
            Message::AddNote => {
                if self.session.logged_in() {
                    let id = self.store.add_note();
                    self.open_editor(id);
                }
            }

            Message::SelectNote(id) => {
                self.store.select(id);
                self.open_editor(id);
            }

            Message::SetNoteField(id, field, value) => {
                // Full-record replacement on every keystroke
                if let Some(mut note) = self.note(id) {
                    match field {
                        NoteField::Title => note.title = value,
                        NoteField::Color => note.color = value,
                    }
                    self.store.update_note(note);
                }
            }

            Message::NoteBodyAction(action) => {
                let edited = if let Some((id, ref mut content)) = self.body_editor {
                    content.perform(action);
                    let mut text = content.text();
                    if text.ends_with('\n') {
                        text.pop();
                    }
                    Some((id, text))
                } else {
                    None
                };
                if let Some((id, text)) = edited {
                    if let Some(mut note) = self.note(id) {
                        note.content = text;
                        self.store.update_note(note);
                    }
                }
            }

            Message::ConfirmDeleteNote(id) => {
                self.pending_delete = Some(id);
            }

            Message::CancelDeleteNote => {
                self.pending_delete = None;
            }

            Message::DeleteNote(id) => {
                let was_active = self.store.active_id() == Some(id);
                self.store.delete_note(id);
                self.pending_delete = None;
                if was_active {
                    self.body_editor = None;
                    self.tag_input.clear();
                    self.comment_input.clear();
                }
            }

            // Tags
            Message::TagInputChanged(value) => {
                self.tag_input = value;
            }

            Message::TagSubmit => {
                let input = std::mem::take(&mut self.tag_input);
                if let Some(mut note) = self.store.active().cloned() {
                    note.add_tags(parse_tags(&input));
                    self.store.update_note(note);
                }
            }

            Message::RemoveTag(id, ref tag) => {
                if let Some(mut note) = self.note(id) {
                    note.remove_tag(tag);
                    self.store.update_note(note);
                }
            }

            // Comments
            Message::CommentInputChanged(value) => {
                self.comment_input = value;
            }

            Message::CommentSubmit => {
                let text = self.comment_input.trim().to_string();
                if !text.is_empty() {
                    if let Some(id) = self.store.active_id() {
                        self.store.add_comment(id, text);
                        self.comment_input.clear();
                    }
                }
            }

            // Board drag
            Message::MoveNote(id, position) => {
                if let Some(mut note) = self.note(id) {
                    note.x = Some(position.x);
                    note.y = Some(position.y);
                    self.store.update_note(note);
                }
            }
        }
        CosmicTask::none()
    }

    fn view(&self) -> Element<'_, Message> {
        if !self.session.logged_in() {
            return pages::login::login_view(&self.session);
        }
        match self.layout {
            LayoutMode::Grid => pages::grid::grid_view(
                self.store.notes(),
                self.store.active(),
                &self.tag_input,
                &self.comment_input,
                self.pending_delete,
                &self.body_editor,
            ),
            LayoutMode::Board => {
                pages::board::board_view(self.store.notes(), self.store.active_id())
            }
        }
    }
}

impl Pinboard {
    /// Reset the per-note UI state and load the body into the editor buffer.
    fn open_editor(&mut self, id: NoteId) {
        self.tag_input.clear();
        self.comment_input.clear();
        self.pending_delete = None;
        if let Some(note) = self.store.notes().iter().find(|n| n.id == id) {
            self.body_editor = Some((id, text_editor::Content::with_text(&note.content)));
        }
    }

    fn note(&self, id: NoteId) -> Option<Note> {
        self.store.notes().iter().find(|n| n.id == id).cloned()
    }
}
