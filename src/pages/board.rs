use cosmic::iced::Length;
use cosmic::widget::container;
use cosmic::Element;

use crate::components::board;
use crate::core::note::{Note, NoteId};
use crate::message::Message;

/// Free-position layout. Drag state lives inside the canvas widget; only the
/// resulting coordinates reach the store.
pub fn board_view(notes: &[Note], active: Option<NoteId>) -> Element<'_, Message> {
    container(board::board(notes, active))
        .padding(16)
        .width(Length::Fill)
        .height(Length::Fill)
        .into()
}
