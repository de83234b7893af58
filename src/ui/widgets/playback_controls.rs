//! Controls that drive the play button
//!
//! Provides the progress entry row and the state toggle with consistent
//! styling. Message types are supplied by the caller.

use iced::widget::{button, column, row, text, text_input};
use iced::{Alignment, Element};

use crate::ui::primitives::ButtonState;
use crate::ui::theme;

/// Height shared by the input and the buttons
const CONTROL_HEIGHT: f32 = 40.0;

/// Progress entry field with an "Update progress" action
///
/// Shows `error` underneath the row when set.
pub fn progress_entry<'a, Message: Clone + 'a>(
    value: &str,
    error: Option<&'a str>,
    on_input: impl Fn(String) -> Message + 'a,
    on_submit: Message,
) -> Element<'a, Message> {
    let input = text_input("Progress (0 - 100)", value)
        .on_input(on_input)
        .on_submit(on_submit.clone())
        .padding(10)
        .size(14)
        .width(180)
        .style(theme::progress_input);

    let update = button(text("Update progress").size(14))
        .padding([10, 20])
        .height(CONTROL_HEIGHT)
        .style(theme::primary_button)
        .on_press(on_submit);

    let entry = row![input, update]
        .spacing(12)
        .align_y(Alignment::Center);

    match error {
        Some(message) => column![
            entry,
            text(message)
                .size(12)
                .style(|theme| text::Style {
                    color: Some(theme::danger(theme)),
                }),
        ]
        .spacing(6)
        .align_x(Alignment::Center)
        .into(),
        None => entry.into(),
    }
}

/// Button toggling between play and pause
///
/// The label names the state the press will switch to.
pub fn toggle_button<'a, Message: Clone + 'a>(
    state: ButtonState,
    on_press: Message,
) -> Element<'a, Message> {
    let label = match state {
        ButtonState::Play => "Pause",
        ButtonState::Pause => "Play",
    };

    button(text(label).size(14))
        .padding([10, 28])
        .height(CONTROL_HEIGHT)
        .style(theme::secondary_button)
        .on_press(on_press)
        .into()
}
