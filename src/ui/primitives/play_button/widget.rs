//! Square layout for the play button
//!
//! Implements iced's `Widget` trait so the button always lays out as a
//! square sized to the smaller available axis. Painting is delegated to a
//! canvas child covering that square.

use iced::advanced::layout::{self, Layout};
use iced::advanced::renderer;
use iced::advanced::widget::{self, Widget};
use iced::widget::Canvas;
use iced::widget::canvas::{Frame, Geometry, Path, Program};
use iced::{Color, Element, Length, Rectangle, Renderer, Size, Theme, mouse};

use super::PlayButton;
use crate::ui::theme;

/// Canvas program painting one `PlayButton`
struct Painter<'a> {
    button: &'a PlayButton,
    highlight: f32,
}

impl<Message> Program<Message> for Painter<'_> {
    type State = ();

    fn draw(
        &self,
        _state: &Self::State,
        renderer: &Renderer,
        theme: &Theme,
        bounds: Rectangle,
        _cursor: mouse::Cursor,
    ) -> Vec<Geometry> {
        let layout = self.button.measure(bounds.size());
        let mut layers = Vec::with_capacity(2);

        // Hover disc sits under the cached ring and glyphs
        if self.highlight > 0.0 {
            let mut frame = Frame::new(renderer, bounds.size());
            let radius = (layout.radius() - self.button.stroke_width() / 2.0).max(0.0);
            let base = theme::hover_bg(theme);
            frame.fill(
                &Path::circle(layout.center(), radius),
                Color {
                    a: base.a * self.highlight.clamp(0.0, 1.0),
                    ..base
                },
            );
            layers.push(frame.into_geometry());
        }

        layers.push(
            self.button
                .cache
                .draw(renderer, bounds.size(), |frame| self.button.draw(frame, &layout)),
        );

        layers
    }
}

/// Widget wrapper that forces a square
pub struct PlayButtonWidget<'a> {
    button: &'a PlayButton,
    highlight: f32,
}

impl<'a> PlayButtonWidget<'a> {
    pub fn new(button: &'a PlayButton) -> Self {
        Self {
            button,
            highlight: 0.0,
        }
    }

    /// Hover highlight strength (0.0 - 1.0)
    pub fn highlight(mut self, highlight: f32) -> Self {
        self.highlight = highlight;
        self
    }

    fn content<Message: 'a>(&self) -> Element<'a, Message> {
        Canvas::new(Painter {
            button: self.button,
            highlight: self.highlight,
        })
        .width(Length::Fill)
        .height(Length::Fill)
        .into()
    }
}

impl<'a, Message: 'a> Widget<Message, Theme, Renderer> for PlayButtonWidget<'a> {
    fn size(&self) -> Size<Length> {
        Size::new(Length::Fill, Length::Fill)
    }

    fn layout(
        &mut self,
        tree: &mut widget::Tree,
        renderer: &Renderer,
        limits: &layout::Limits,
    ) -> layout::Node {
        let side = self.button.measure(limits.max()).side;

        let mut content: Element<'a, Message> = self.content();
        let child_limits = layout::Limits::new(Size::ZERO, Size::new(side, side));
        let child_node =
            content
                .as_widget_mut()
                .layout(&mut tree.children[0], renderer, &child_limits);

        layout::Node::with_children(Size::new(side, side), vec![child_node])
    }

    fn draw(
        &self,
        tree: &widget::Tree,
        renderer: &mut Renderer,
        theme: &Theme,
        style: &renderer::Style,
        layout: Layout<'_>,
        cursor: mouse::Cursor,
        viewport: &Rectangle,
    ) {
        let content: Element<'a, Message> = self.content();

        if let Some(child_layout) = layout.children().next() {
            content.as_widget().draw(
                &tree.children[0],
                renderer,
                theme,
                style,
                child_layout,
                cursor,
                viewport,
            );
        }
    }

    fn children(&self) -> Vec<widget::Tree> {
        let content: Element<'a, Message> = self.content();
        vec![widget::Tree::new(&content)]
    }

    fn diff(&self, tree: &mut widget::Tree) {
        let content: Element<'a, Message> = self.content();
        tree.diff_children(&[content]);
    }
}

impl<'a, Message: 'a> From<PlayButtonWidget<'a>> for Element<'a, Message> {
    fn from(widget: PlayButtonWidget<'a>) -> Self {
        Element::new(widget)
    }
}
