//! Sorter page.
//!
//! Header with session controls, the reorderable list and the bottom action
//! bar with finalize, export and email.

use iced::alignment::Vertical;
use iced::widget::{button, column, container, row, scrollable, text, Space};
use iced::{Background, Border, Color, Element, Font, Length, Theme};

use vcsort_core::models::{LayoutMode, VideoItem};
use vcsort_core::ranking::Session;

use crate::app::{App, Message, Notice};
use crate::theme::{colors, font, spacing};
use crate::widgets::reorderable_list::{self, RowState};
use crate::widgets::video_preview;

/// Build the sorter page.
pub fn view<'a>(app: &'a App, session: &'a Session) -> Element<'a, Message> {
    let list = reorderable_list::view(
        session.list().items(),
        video_id,
        &app.drag_state,
        app.selected_id.as_deref(),
        session.layout(),
        |item, idx, state| video_card(app, item, idx + 1, state, session.layout()),
    );

    let mut content = column![
        header(session),
        controls(session),
        shuffle_bar(session),
    ]
    .spacing(spacing::SM);

    if let Some(notice) = &app.notice {
        let color = match notice {
            Notice::Success(_) => colors::SUCCESS,
            Notice::Warning(_) => colors::WARNING,
            Notice::Error(_) => colors::ERROR,
        };
        content = content.push(banner(notice.text(), color));
    }

    content = content
        .push(
            scrollable(container(list).padding([0.0, spacing::SM]).width(Length::Fill))
                .height(Length::Fill),
        )
        .push(action_bar(session));

    if let Some(status) = session.list().status() {
        content = content.push(banner(status, colors::SUCCESS));
    }

    container(content.padding(spacing::LG))
        .width(Length::Fill)
        .height(Length::Fill)
        .into()
}

fn video_id(item: &VideoItem) -> &str {
    &item.id
}

/// Title, instructions and list size.
fn header<'a>(session: &'a Session) -> Element<'a, Message> {
    let mode = if session.is_experiment_mode() {
        format!("Random experiment: {} videos", session.list().len())
    } else {
        format!("Full dataset: {} videos", session.list().len())
    };

    let direction = match session.layout() {
        LayoutMode::Vertical => "top (least complex) to bottom (most complex)",
        LayoutMode::Horizontal => "left (least complex) to right (most complex)",
    };

    column![
        text("Video Complexity Sorter").size(font::HEADER),
        text(format!(
            "Drag the videos into order from {}. Click a video, then use the Up/Down keys to nudge it.",
            direction
        ))
        .size(font::NORMAL)
        .color(colors::TEXT_SECONDARY),
        text(mode).size(font::MD),
    ]
    .spacing(spacing::XS)
    .into()
}

/// Layout toggle and experiment controls.
fn controls<'a>(session: &'a Session) -> Element<'a, Message> {
    let layout_label = match session.layout() {
        LayoutMode::Vertical => "Switch to Horizontal Layout",
        LayoutMode::Horizontal => "Switch to Vertical Layout",
    };

    let k = session.sample_size();
    let experiment_label = if session.is_experiment_mode() {
        format!("Load New Random {}", k)
    } else {
        format!("Start {}-Video Random Sort", k)
    };

    let mut bar = row![
        button(text(layout_label).size(font::NORMAL))
            .on_press(Message::ToggleLayout)
            .style(button::secondary)
            .padding([spacing::SM, spacing::LG]),
        button(text(experiment_label).size(font::NORMAL))
            .on_press_maybe(
                session
                    .can_start_experiment()
                    .then_some(Message::StartExperiment)
            )
            .padding([spacing::SM, spacing::LG]),
    ]
    .spacing(spacing::SM)
    .align_y(Vertical::Center);

    if session.can_reset() {
        bar = bar.push(
            button(text("Reset to Full Dataset").size(font::NORMAL))
                .on_press(Message::ResetToFull)
                .style(button::secondary)
                .padding([spacing::SM, spacing::LG]),
        );
    }

    if !session.can_start_experiment() {
        bar = bar.push(
            text(format!(
                "Need at least {} videos for a random sort ({} loaded)",
                k,
                session.pool().len()
            ))
            .size(font::SM)
            .color(colors::TEXT_MUTED),
        );
    }

    bar.into()
}

fn shuffle_bar<'a>(session: &'a Session) -> Element<'a, Message> {
    row![
        Space::new().width(Length::Fill),
        shuffle_button(session),
    ]
    .into()
}

fn shuffle_button<'a>(session: &'a Session) -> Element<'a, Message> {
    button(text("Shuffle Videos").size(font::NORMAL))
        .on_press_maybe((session.list().len() > 1).then_some(Message::Shuffle))
        .style(button::secondary)
        .padding([spacing::XS, spacing::MD])
        .into()
}

/// Shuffle, finalize, export and email.
fn action_bar<'a>(session: &'a Session) -> Element<'a, Message> {
    let has_items = !session.list().is_empty();

    row![
        shuffle_button(session),
        Space::new().width(Length::Fill),
        button(text("Finalize Order").size(font::NORMAL))
            .on_press_maybe(has_items.then_some(Message::Finalize))
            .style(button::success)
            .padding([spacing::SM, spacing::LG]),
        button(text("Export as CSV").size(font::NORMAL))
            .on_press_maybe(has_items.then_some(Message::ExportCsv))
            .padding([spacing::SM, spacing::LG]),
        button(text("Email Results").size(font::NORMAL))
            .on_press_maybe(has_items.then_some(Message::OpenEmail))
            .padding([spacing::SM, spacing::LG]),
    ]
    .spacing(spacing::SM)
    .align_y(Vertical::Center)
    .into()
}

/// One video in the list.
fn video_card<'a>(
    app: &'a App,
    item: &'a VideoItem,
    rank: usize,
    state: RowState,
    layout: LayoutMode,
) -> Element<'a, Message> {
    let expanded = app.expanded.contains(&item.id);

    let mut title = row![
        rank_badge(rank),
        text(item.name.as_str()).size(font::MD),
    ]
    .spacing(spacing::SM)
    .align_y(Vertical::Center);

    if let Some(target) = &item.target_complexity {
        title = title.push(
            text(format!("Target: {}", target))
                .size(font::SM)
                .color(colors::TEXT_SECONDARY),
        );
    }

    if layout == LayoutMode::Vertical {
        title = title.push(Space::new().width(Length::Fill));
    }

    title = title.push(
        button(text(if expanded { "Hide details" } else { "Details" }).size(font::SM))
            .on_press(Message::ToggleDetails(item.id.clone()))
            .style(button::text)
            .padding([spacing::XS, spacing::SM]),
    );

    let caption = text(item.original_name.as_str())
        .size(font::SM)
        .font(Font {
            style: iced::font::Style::Italic,
            ..Font::DEFAULT
        })
        .color(if state.is_dragging {
            colors::TEXT_MUTED
        } else {
            colors::TEXT_SECONDARY
        });

    let mut card = column![title, video_preview::view(&app.preview, item), caption]
        .spacing(spacing::XS);

    if expanded {
        card = card.push(
            container(text(item.metadata().description()).size(font::SM))
                .padding(spacing::SM)
                .width(Length::Fill)
                .style(|_theme: &Theme| container::Style {
                    background: Some(Background::Color(colors::BADGE_BG)),
                    border: Border {
                        radius: 4.0.into(),
                        ..Default::default()
                    },
                    ..Default::default()
                }),
        );
    }

    card.into()
}

fn rank_badge<'a>(rank: usize) -> Element<'a, Message> {
    container(text(format!("#{}", rank)).size(font::NORMAL))
        .padding([2.0, spacing::SM])
        .style(|_theme: &Theme| container::Style {
            background: Some(Background::Color(colors::PRIMARY)),
            border: Border {
                radius: 10.0.into(),
                ..Default::default()
            },
            text_color: Some(Color::WHITE),
            ..Default::default()
        })
        .into()
}

/// Full-width colored message strip.
fn banner<'a>(message: &'a str, color: Color) -> Element<'a, Message> {
    container(text(message).size(font::NORMAL))
        .padding([spacing::SM, spacing::MD])
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
