use cosmic::iced::Alignment;
use cosmic::widget::{button, container, icon, row, text};
use cosmic::{Element, theme};

use crate::core::note::NoteId;
use crate::message::Message;

/// A tag badge with its remove button.
pub fn tag_chip(note_id: NoteId, tag: &str) -> Element<'static, Message> {
    container(
        row()
            .spacing(4)
            .align_y(Alignment::Center)
            .push(text::caption(tag.to_string()).size(11.0))
            .push(
                button::icon(icon::from_name("edit-delete-symbolic"))
                    .on_press(Message::RemoveTag(note_id, tag.to_string())),
            ),
    )
    .padding([2, 6])
    .class(theme::Container::Card)
    .into()
}
