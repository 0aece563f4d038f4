use cosmic::iced::mouse;
use cosmic::iced::{Color, Length, Point, Rectangle, Size};
use cosmic::widget::canvas::{self, Canvas, Path};
use cosmic::{Element, Renderer, Theme};

use crate::core::note::{hex_rgb, Note, NoteId};
use crate::message::Message;

pub const CARD_WIDTH: f32 = 180.0;
pub const CARD_HEIGHT: f32 = 110.0;

/// Free-position note board. Cards draw in collection order, so later notes
/// sit on top; there is no separate z-order.
pub struct Board<'a> {
    notes: &'a [Note],
    active: Option<NoteId>,
}

/// The held card and the pointer's grab offset within it. Lives only inside
/// the widget; never persisted.
#[derive(Default)]
pub struct DragState {
    held: Option<(NoteId, f32, f32)>,
}

pub fn board(notes: &[Note], active: Option<NoteId>) -> Element<'_, Message> {
    Canvas::new(Board { notes, active })
        .width(Length::Fill)
        .height(Length::Fill)
        .into()
}

fn card_rect(note: &Note) -> Rectangle {
    Rectangle::new(
        Point::new(note.x.unwrap_or(0.0), note.y.unwrap_or(0.0)),
        Size::new(CARD_WIDTH, CARD_HEIGHT),
    )
}

impl canvas::Program<Message, Theme, Renderer> for Board<'_> {
    type State = DragState;

    fn update(
        &self,
        state: &mut DragState,
        event: canvas::Event,
        bounds: Rectangle,
        cursor: mouse::Cursor,
    ) -> (canvas::event::Status, Option<Message>) {
        match event {
            canvas::Event::Mouse(mouse::Event::ButtonPressed(mouse::Button::Left)) => {
                if let Some(position) = cursor.position_in(bounds) {
                    // Topmost card under the pointer wins.
                    if let Some(note) = self
                        .notes
                        .iter()
                        .rev()
                        .find(|n| card_rect(n).contains(position))
                    {
                        let rect = card_rect(note);
                        state.held = Some((note.id, position.x - rect.x, position.y - rect.y));
                        return (
                            canvas::event::Status::Captured,
                            Some(Message::SelectNote(note.id)),
                        );
                    }
                }
                (canvas::event::Status::Ignored, None)
            }
            canvas::Event::Mouse(mouse::Event::CursorMoved { .. }) => {
                if let (Some((id, dx, dy)), Some(position)) = (state.held, cursor.position()) {
                    // Relative to the board origin. No clamping: a card may be
                    // dragged outside the visible area.
                    let target =
                        Point::new(position.x - bounds.x - dx, position.y - bounds.y - dy);
                    return (
                        canvas::event::Status::Captured,
                        Some(Message::MoveNote(id, target)),
                    );
                }
                (canvas::event::Status::Ignored, None)
            }
            canvas::Event::Mouse(mouse::Event::ButtonReleased(mouse::Button::Left)) => {
                if state.held.take().is_some() {
                    (canvas::event::Status::Captured, None)
                } else {
                    (canvas::event::Status::Ignored, None)
                }
            }
            _ => (canvas::event::Status::Ignored, None),
        }
    }

    fn draw(
        &self,
        _state: &DragState,
        renderer: &Renderer,
        _theme: &Theme,
        bounds: Rectangle,
        _cursor: mouse::Cursor,
    ) -> Vec<canvas::Geometry<Renderer>> {
        let mut frame = canvas::Frame::new(renderer, bounds.size());

        for note in self.notes {
            let rect = card_rect(note);
            let card = Path::rounded_rectangle(rect.position(), rect.size(), 8.0.into());

            let (r, g, b) = hex_rgb(&note.color).unwrap_or((255, 255, 255));
            frame.fill(&card, Color::from_rgb8(r, g, b));

            let width = if self.active == Some(note.id) { 2.0 } else { 1.0 };
            frame.stroke(
                &card,
                canvas::Stroke::default()
                    .with_color(Color {
                        a: 0.5,
                        ..Color::BLACK
                    })
                    .with_width(width),
            );

            frame.fill_text(canvas::Text {
                content: note.title.clone(),
                position: Point::new(rect.x + 10.0, rect.y + 10.0),
                color: Color::BLACK,
                size: 14.0.into(),
                ..canvas::Text::default()
            });

            frame.fill_text(canvas::Text {
                content: note.created.format("%Y-%m-%d").to_string(),
                position: Point::new(rect.x + 10.0, rect.y + CARD_HEIGHT - 24.0),
                color: Color {
                    a: 0.6,
                    ..Color::BLACK
                },
                size: 11.0.into(),
                ..canvas::Text::default()
            });
        }

        vec![frame.into_geometry()]
    }

    fn mouse_interaction(
        &self,
        state: &DragState,
        bounds: Rectangle,
        cursor: mouse::Cursor,
    ) -> mouse::Interaction {
        if state.held.is_some() {
            return mouse::Interaction::Grabbing;
        }
        if let Some(position) = cursor.position_in(bounds) {
            if self.notes.iter().any(|n| card_rect(n).contains(position)) {
                return mouse::Interaction::Grab;
            }
        }
        mouse::Interaction::default()
    }
}
