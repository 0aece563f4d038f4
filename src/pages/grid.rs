use cosmic::iced::{Alignment, Length};
use cosmic::widget::{
    button, column, container, flex_row, icon, row, scrollable, text, text_editor, text_input,
};
use cosmic::{Element, theme};

use crate::components::daily_chart::daily_chart;
use crate::components::tag_chip::tag_chip;
use crate::core::note::{Note, NoteId};
use crate::core::stats::notes_per_day;
use crate::message::{Message, NoteField};

/// Color choices offered in the editor.
const PALETTE: &[(&str, &str)] = &[
    ("White", "#ffffff"),
    ("Yellow", "#fff3a3"),
    ("Green", "#c8e6c9"),
    ("Blue", "#bbdefb"),
    ("Pink", "#f8bbd0"),
    ("Orange", "#ffe0b2"),
];

fn note_card(note: &Note) -> Element<'static, Message> {
    let mut col = column().spacing(4);

    col = col.push(text::body(note.title.clone()));

    if !note.content.is_empty() {
        let preview: String = note.content.lines().take(3).collect::<Vec<_>>().join("\n");
        col = col.push(text::caption(preview).size(12.0));
    }

    if !note.tags.is_empty() {
        let tag_badges: Vec<Element<'static, Message>> = note
            .tags
            .iter()
            .map(|t| {
                container(text::caption(t.clone()).size(11.0))
                    .padding([2, 6])
                    .class(theme::Container::Card)
                    .into()
            })
            .collect();
        col = col.push(flex_row(tag_badges).row_spacing(4).column_spacing(4));
    }

    col = col.push(text::caption(note.created.format("%Y-%m-%d").to_string()).size(11.0));

    if !note.comments.is_empty() {
        col = col.push(
            text::caption(crate::fl!("comments-count", count = (note.comments.len() as i64)))
                .size(11.0),
        );
    }

    let card_body = container(col)
        .padding(12)
        .width(Length::Fill)
        .class(theme::Container::Card);

    button::custom(card_body)
        .padding(0)
        .class(theme::Button::Text)
        .on_press(Message::SelectNote(note.id))
        .into()
}

fn color_button<'a>(
    note_id: NoteId,
    label: &'a str,
    hex: &str,
    current: &str,
) -> Element<'a, Message> {
    let btn = if current == hex {
        button::suggested(label)
    } else {
        button::standard(label)
    };
    btn.on_press(Message::SetNoteField(
        note_id,
        NoteField::Color,
        hex.to_string(),
    ))
    .into()
}

fn editor_panel<'a>(
    note: &'a Note,
    tag_input: &str,
    comment_input: &str,
    confirming_delete: bool,
    body_editor: &'a Option<(NoteId, text_editor::Content)>,
) -> Element<'a, Message> {
    let note_id = note.id;
    let mut col = column().spacing(12);

    // Title row with delete controls
    let mut title_row = row().spacing(8).align_y(Alignment::Center);
    title_row = title_row.push(
        text_input::text_input(crate::fl!("note-title"), note.title.clone())
            .on_input(move |v| Message::SetNoteField(note_id, NoteField::Title, v))
            .width(Length::Fill),
    );
    if confirming_delete {
        title_row = title_row
            .push(button::destructive("Delete").on_press(Message::DeleteNote(note_id)))
            .push(button::standard("Cancel").on_press(Message::CancelDeleteNote));
    } else {
        title_row = title_row.push(
            button::icon(icon::from_name("edit-delete-symbolic"))
                .on_press(Message::ConfirmDeleteNote(note_id)),
        );
    }
    col = col.push(title_row);

    // Body
    if let Some((eid, content)) = body_editor {
        if *eid == note_id {
            col = col.push(
                container(
                    text_editor(content)
                        .on_action(Message::NoteBodyAction)
                        .height(Length::Fixed(180.0)),
                )
                .width(Length::Fill),
            );
        }
    }

    // Color
    col = col.push(text::caption(crate::fl!("note-color")));
    let swatches: Vec<Element<'a, Message>> = PALETTE
        .iter()
        .map(|(label, hex)| color_button(note_id, label, hex, &note.color))
        .collect();
    col = col.push(flex_row(swatches).row_spacing(4).column_spacing(4));

    // Tags
    col = col.push(
        text_input::text_input(crate::fl!("tags-placeholder"), tag_input.to_string())
            .on_input(Message::TagInputChanged)
            .on_submit(|_| Message::TagSubmit)
            .width(Length::Fill),
    );
    if !note.tags.is_empty() {
        let chips: Vec<Element<'a, Message>> =
            note.tags.iter().map(|t| tag_chip(note_id, t)).collect();
        col = col.push(flex_row(chips).row_spacing(4).column_spacing(4));
    }

    // Comments
    col = col.push(text::title4(crate::fl!("comments-heading")));
    for comment in &note.comments {
        col = col.push(
            container(text::caption(comment.text.clone()))
                .padding([4, 8])
                .width(Length::Fill)
                .class(theme::Container::Card),
        );
    }
    col = col.push(
        row()
            .spacing(8)
            .align_y(Alignment::Center)
            .push(
                text_input::text_input(
                    crate::fl!("comment-placeholder"),
                    comment_input.to_string(),
                )
                .on_input(Message::CommentInputChanged)
                .on_submit(|_| Message::CommentSubmit)
                .width(Length::Fill),
            )
            .push(
                button::icon(icon::from_name("list-add-symbolic"))
                    .on_press(Message::CommentSubmit),
            ),
    );

    container(col)
        .padding(12)
        .width(Length::Fill)
        .class(theme::Container::Card)
        .into()
}

fn empty_panel() -> Element<'static, Message> {
    container(text::body(crate::fl!("note-placeholder")))
        .padding(32)
        .center_x(Length::Fill)
        .width(Length::Fill)
        .into()
}

pub fn grid_view<'a>(
    notes: &'a [Note],
    active: Option<&'a Note>,
    tag_input: &str,
    comment_input: &str,
    pending_delete: Option<NoteId>,
    body_editor: &'a Option<(NoteId, text_editor::Content)>,
) -> Element<'a, Message> {
    let mut content = column().spacing(16);

    // Card list in collection order
    let mut list_col = column().spacing(8);
    list_col = list_col.push(
        button::suggested(crate::fl!("add-note")).on_press(Message::AddNote),
    );
    if notes.is_empty() {
        list_col = list_col.push(
            container(text::body(crate::fl!("notes-empty")))
                .padding(32)
                .center_x(Length::Fill)
                .width(Length::Fill),
        );
    } else {
        let cards: Vec<Element<'a, Message>> = notes.iter().map(note_card).collect();
        list_col = list_col.push(flex_row(cards).row_spacing(8).column_spacing(8));
    }

    let editor: Element<'a, Message> = match active {
        Some(note) => editor_panel(
            note,
            tag_input,
            comment_input,
            pending_delete == Some(note.id),
            body_editor,
        ),
        None => empty_panel(),
    };

    content = content.push(
        row()
            .spacing(16)
            .push(container(list_col).width(Length::FillPortion(1)))
            .push(container(editor).width(Length::FillPortion(2))),
    );

    if !notes.is_empty() {
        content = content.push(daily_chart(&notes_per_day(notes)));
    }

    container(scrollable(content.padding(16).width(Length::Fill)))
        .width(Length::Fill)
        .height(Length::Fill)
        .into()
}
