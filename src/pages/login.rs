use cosmic::iced::Length;
use cosmic::widget::{button, column, container, text, text_input};
use cosmic::{Element, theme};

use crate::core::session::Session;
use crate::message::Message;

/// Credential gate shown instead of the app until login succeeds.
pub fn login_view(session: &Session) -> Element<'_, Message> {
    let mut form = column().spacing(12);

    form = form.push(text::title4(crate::fl!("login-title")));

    form = form.push(
        text_input::text_input(crate::fl!("login-username"), session.username.clone())
            .on_input(Message::UsernameChanged)
            .on_submit(|_| Message::LoginSubmit)
            .width(Length::Fill),
    );

    form = form.push(
        text_input::secure_input(
            crate::fl!("login-password"),
            session.password.clone(),
            None::<Message>,
            true,
        )
        .on_input(Message::PasswordChanged)
        .on_submit(|_| Message::LoginSubmit)
        .width(Length::Fill),
    );

    if let Some(error) = session.error() {
        form = form.push(text::body(format!("✗ {}", error)));
    }

    form = form.push(button::suggested(crate::fl!("login-submit")).on_press(Message::LoginSubmit));

    container(
        container(form)
            .padding(24)
            .width(Length::Fixed(360.0))
            .class(theme::Container::Card),
    )
    .center_x(Length::Fill)
    .center_y(Length::Fill)
    .width(Length::Fill)
    .height(Length::Fill)
    .into()
}
