//! Reorderable list widget for drag-and-drop reordering.
//!
//! Rows are addressed by a stable key rather than by position, so a drop is
//! always resolved against the item under the cursor at release time.
//! Uses mouse_area to detect press, enter and exit; the release is picked up
//! by the application-wide event subscription.

use iced::widget::{column, container, mouse_area, row, text, Space};
use iced::{Alignment, Background, Border, Color, Element, Length, Theme};

use vcsort_core::models::LayoutMode;

use crate::app::{DragState, Message};
use crate::theme::{colors, font, spacing, GRID_CARD_WIDTH};

/// Where a row sits relative to the current drag.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RowState {
    pub is_dragging: bool,
    pub is_drop_target: bool,
    pub is_selected: bool,
}

/// Build a reorderable list view.
///
/// # Arguments
/// * `items` - Slice of items to display
/// * `key` - Stable identity of an item
/// * `drag_state` - Current drag state
/// * `selected` - Key of the keyboard-selected item
/// * `layout` - Vertical list or wrapping horizontal grid
/// * `render_row` - Renders each row's content (excluding drag wrapper)
pub fn view<'a, T, K, F>(
    items: &'a [T],
    key: K,
    drag_state: &DragState,
    selected: Option<&str>,
    layout: LayoutMode,
    render_row: F,
) -> Element<'a, Message>
where
    T: 'a,
    K: Fn(&T) -> &str,
    F: Fn(&'a T, usize, RowState) -> Element<'a, Message>,
{
    if items.is_empty() {
        return container(
            column![
                text("No videos to rank").size(font::MD),
                Space::new().height(spacing::XS),
                text("Start a random sort or reset to the full dataset.")
                    .size(font::SM)
                    .color(colors::TEXT_SECONDARY),
            ]
            .align_x(Alignment::Center),
        )
        .padding(30)
        .width(Length::Fill)
        .center_x(Length::Fill)
        .into();
    }

    let dragging = drag_state.dragging.as_deref();
    let hover = drag_state.hover.as_deref();
    let dragging_idx = dragging.and_then(|id| items.iter().position(|i| key(i) == id));
    let hover_idx = hover.and_then(|id| items.iter().position(|i| key(i) == id));

    let rows: Vec<Element<'a, Message>> = items
        .iter()
        .enumerate()
        .flat_map(|(idx, item)| {
            let id = key(item);
            let state = RowState {
                is_dragging: dragging == Some(id),
                is_drop_target: dragging.is_some() && hover == Some(id) && dragging != Some(id),
                is_selected: selected == Some(id),
            };

            let mut elements: Vec<Element<'a, Message>> = Vec::with_capacity(2);

            // Indicator goes on the side the dragged item will land
            let lands_before = state.is_drop_target && hover_idx < dragging_idx;
            let lands_after = state.is_drop_target && hover_idx > dragging_idx;

            if lands_before {
                elements.push(drop_indicator(layout));
            }

            let content = render_row(item, idx, state);
            elements.push(draggable_row(id.to_string(), content, state, dragging.is_some(), layout));

            if lands_after {
                elements.push(drop_indicator(layout));
            }

            elements
        })
        .collect();

    match layout {
        LayoutMode::Vertical => column(rows)
            .spacing(spacing::XS)
            .width(Length::Fill)
            .into(),
        LayoutMode::Horizontal => row(rows)
            .spacing(spacing::SM)
            .wrap()
            .vertical_spacing(spacing::SM)
            .into(),
    }
}

/// Create a draggable row wrapper.
fn draggable_row<'a>(
    id: String,
    content: Element<'a, Message>,
    state: RowState,
    any_dragging: bool,
    layout: LayoutMode,
) -> Element<'a, Message> {
    let (bg_color, border_color, opacity) = if state.is_dragging {
        (colors::CARD_DRAGGING, colors::PRIMARY, 0.7)
    } else if state.is_selected {
        (colors::CARD, colors::SELECTED, 1.0)
    } else if any_dragging {
        (colors::CARD_IDLE, colors::BORDER, 1.0)
    } else {
        (colors::CARD, Color::TRANSPARENT, 1.0)
    };
    let border_width = if state.is_dragging || state.is_selected { 2.0 } else { 1.0 };

    let width = match layout {
        LayoutMode::Vertical => Length::Fill,
        LayoutMode::Horizontal => Length::Fixed(GRID_CARD_WIDTH),
    };

    let styled_container = container(content)
        .padding([spacing::SM, spacing::SM])
        .width(width)
        .style(move |_theme: &Theme| container::Style {
            background: Some(Background::Color(Color {
                a: opacity,
                ..bg_color
            })),
            border: Border {
                color: border_color,
                width: border_width,
                radius: 4.0.into(),
            },
            ..Default::default()
        });

    mouse_area(styled_container)
        .on_press(Message::DragStart(id.clone()))
        .on_enter(Message::CardEntered(id.clone()))
        .on_exit(Message::CardExited(id))
        .into()
}

/// Create a drop indicator line.
fn drop_indicator<'a>(layout: LayoutMode) -> Element<'a, Message> {
    let bar = match layout {
        LayoutMode::Vertical => Space::new().width(Length::Fill).height(2),
        LayoutMode::Horizontal => Space::new().width(2).height(220),
    };

    container(bar)
        .style(|_theme: &Theme| container::Style {
            background: Some(Background::Color(colors::DROP_INDICATOR)),
            border: Border {
                radius: 1.0.into(),
                ..Default::default()
            },
            ..Default::default()
        })
        .into()
}
