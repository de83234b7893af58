//! Application view rendering

use iced::widget::{column, container, mouse_area, text};
use iced::{Alignment, Element, Fill, mouse};

use super::App;
use super::message::Message;
use crate::ui::{theme, widgets};

impl App {
    /// Build the demo screen
    pub fn view(&self) -> Element<'_, Message> {
        let button = mouse_area(self.play_button.view(self.hover.progress()))
            .on_press(Message::ToggleState)
            .on_enter(Message::ButtonHoverEnter)
            .on_exit(Message::ButtonHoverExit)
            .interaction(mouse::Interaction::Pointer);

        let status = if self.play_button.is_transitioning() {
            format!("{:.1}%  ·  switching", self.play_button.progress())
        } else {
            format!(
                "{:.1}%  ·  {}",
                self.play_button.progress(),
                self.play_button.button_state()
            )
        };

        let controls = column![
            text(status).size(13).style(|theme| text::Style {
                color: Some(theme::text_muted(theme)),
            }),
            widgets::progress_entry(
                &self.progress_input,
                self.input_error.as_deref(),
                Message::ProgressInputChanged,
                Message::UpdateProgress,
            ),
            widgets::toggle_button(self.play_button.button_state(), Message::ToggleState),
        ]
        .spacing(16)
        .align_x(Alignment::Center);

        let content = column![
            container(button).center(Fill).padding(24),
            controls,
        ]
        .spacing(24)
        .padding(32)
        .align_x(Alignment::Center);

        container(content)
            .width(Fill)
            .height(Fill)
            .style(theme::page)
            .into()
    }
}
