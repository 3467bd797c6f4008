//! Search bar widget

use iced::widget::text_input;
use iced::{Element, Padding};

pub const PLACEHOLDER: &str = "Enter topic (life, love, success)";

/// Topic input; Enter submits
pub fn view<'a, Message: Clone + 'a>(
    value: &str,
    on_input: impl Fn(String) -> Message + 'a,
    on_submit: Message,
) -> Element<'a, Message> {
    text_input(PLACEHOLDER, value)
        .on_input(on_input)
        .on_submit(on_submit)
        .padding(Padding::new(12.0))
        .size(16)
        .into()
}
