//! Bar chart canvas for the active run
//!
//! Implements the iced canvas `Program` trait: bottom-anchored bars scaled
//! to the sequence maximum, highlighted indices in red.

use iced::widget::canvas::{Frame, Geometry, Program};
use iced::widget::Canvas;
use iced::{mouse, Color, Element, Length, Point, Rectangle, Size, Theme};

use sortscope_core::Value;

const BACKGROUND: Color = Color::BLACK;
const BAR: Color = Color::WHITE;
const HIGHLIGHT: Color = Color::from_rgb(0.9, 0.15, 0.15);

/// Canvas program rendering one published frame
pub struct BarsCanvas<'a> {
    pub values: &'a [Value],
    pub index_a: Option<usize>,
    pub index_b: Option<usize>,
}

impl<'a, Message> Program<Message> for BarsCanvas<'a> {
    type State = ();

    fn draw(
        &self,
        _state: &Self::State,
        renderer: &iced::Renderer,
        _theme: &Theme,
        bounds: Rectangle,
        _cursor: mouse::Cursor,
    ) -> Vec<Geometry> {
        let mut frame = Frame::new(renderer, bounds.size());
        frame.fill_rectangle(Point::ORIGIN, bounds.size(), BACKGROUND);

        if self.values.is_empty() {
            return vec![frame.into_geometry()];
        }

        let max_value = self.values.iter().copied().max().unwrap_or(1).max(1);
        let bar_width = (bounds.width / self.values.len() as f32).max(1.0);

        for (i, &value) in self.values.iter().enumerate() {
            let bar_height = (value as f32 * bounds.height) / max_value as f32;
            let highlighted = Some(i) == self.index_a || Some(i) == self.index_b;
            frame.fill_rectangle(
                Point::new(i as f32 * bar_width, bounds.height - bar_height),
                Size::new(bar_width, bar_height),
                if highlighted { HIGHLIGHT } else { BAR },
            );
        }

        vec![frame.into_geometry()]
    }
}

/// Create the bar chart element for a frame
pub fn bars<'a, Message: 'a>(
    values: &'a [Value],
    index_a: Option<usize>,
    index_b: Option<usize>,
) -> Element<'a, Message> {
    Canvas::new(BarsCanvas {
        values,
        index_a,
        index_b,
    })
    .width(Length::Fill)
    .height(Length::Fill)
    .into()
}
