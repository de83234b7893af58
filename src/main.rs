//! Progress Play Button - play/pause button with a circular progress ring
//! Built with iced, with a small demo screen driving the widget

#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

mod app;
mod features;
mod ui;

fn main() -> iced::Result {
    // Initialize tracing for logging
    tracing_subscriber::fmt::init();

    iced::application(app::App::new, app::App::update, app::App::view)
        .title(app::App::title)
        .theme(app::App::theme)
        .subscription(app::App::subscription)
        .window(iced::window::Settings {
            size: iced::Size::new(420.0, 560.0),
            // Close goes through CloseRequested so the session is saved first
            exit_on_close_request: false,
            ..Default::default()
        })
        .antialiasing(true)
        .run()
}
