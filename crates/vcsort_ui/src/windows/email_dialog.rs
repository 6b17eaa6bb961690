//! Email dialog view.

use iced::alignment::Vertical;
use iced::widget::{button, column, container, row, text, text_editor, text_input, Space};
use iced::{Background, Border, Element, Length, Theme};

use crate::app::{App, Message};
use crate::theme::{colors, font, spacing};

const DIALOG_WIDTH: f32 = 480.0;
/// Roughly four lines of notes.
const NOTES_HEIGHT: f32 = 96.0;

pub fn view(app: &App) -> Element<'_, Message> {
    let state = &app.email;
    let configured = app.mailer.is_configured();
    let editable = !state.sending;

    let mut content = column![
        text("Email Your Ranking").size(font::LG),
        text("Your final order is attached to the message automatically.")
            .size(font::SM)
            .color(colors::TEXT_SECONDARY),
    ]
    .spacing(spacing::SM);

    if !configured {
        content = content.push(banner(
            "Email is not configured. Fill in [email] service_id, template_id and public_key in .config/settings.toml.",
            colors::WARNING,
        ));
    }

    let mut notes = text_editor(&state.notes)
        .placeholder("Anything we should know?")
        .height(Length::Fixed(NOTES_HEIGHT))
        .size(font::NORMAL);
    if editable {
        notes = notes.on_action(Message::EmailNotesEdited);
    }

    content = content
        .push(field(
            "Your name",
            text_input("Name", &state.form.from_name)
                .on_input_maybe(editable.then_some(Message::EmailNameChanged))
                .size(font::NORMAL),
        ))
        .push(field(
            "Your email",
            text_input("name@example.com", &state.form.from_email)
                .on_input_maybe(editable.then_some(Message::EmailAddressChanged))
                .size(font::NORMAL),
        ))
        .push(field("Notes (optional)", notes));

    if let Some(error) = &state.error {
        content = content.push(banner(error, colors::ERROR));
    }

    let can_send = configured && editable && state.form.is_complete();
    let send_label = if state.sending { "Sending..." } else { "Send" };

    content = content.push(
        row![
            Space::new().width(Length::Fill),
            button(text("Cancel").size(font::NORMAL))
                .on_press_maybe(editable.then_some(Message::CloseEmail))
                .style(button::secondary)
                .padding([spacing::SM, spacing::LG]),
            button(text(send_label).size(font::NORMAL))
                .on_press_maybe(can_send.then_some(Message::SendEmail))
                .padding([spacing::SM, spacing::LG]),
        ]
        .spacing(spacing::SM)
        .align_y(Vertical::Center),
    );

    container(content)
        .padding(spacing::XL)
        .width(Length::Fixed(DIALOG_WIDTH))
        .style(|_theme: &Theme| container::Style {
            background: Some(Background::Color(colors::CARD)),
            border: Border {
                color: colors::BORDER,
                width: 1.0,
                radius: 8.0.into(),
            },
            ..Default::default()
        })
        .into()
}

fn field<'a>(label: &'a str, input: impl Into<Element<'a, Message>>) -> Element<'a, Message> {
    column![text(label).size(font::SM), input.into()]
        .spacing(spacing::XS)
        .into()
}

fn banner<'a>(message: &'a str, color: iced::Color) -> Element<'a, Message> {
    container(text(message).size(font::SM))
        .padding(spacing::SM)
        .width(Length::Fill)
        .style(move |_theme: &Theme| container::Style {
            background: Some(Background::Color(color)),
            border: Border {
                radius: 4.0.into(),
                ..Default::default()
            },
            ..Default::default()
        })
        .into()
}
