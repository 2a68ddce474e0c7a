//! Search bar widget

use iced::widget::{button, container, row, text, text_input};
use iced::{Background, Border, Color, Element, Length, Padding};

use super::theme::{self, DarkTheme};

/// Search field plus submit button. Enter in the field submits too.
pub fn view<'a, Message: Clone + 'a>(
    value: &str,
    on_input: impl Fn(String) -> Message + 'a,
    on_submit: Message,
) -> Element<'a, Message> {
    let input = text_input("Search the complete works...", value)
        .on_input(on_input)
        .on_submit(on_submit.clone())
        .padding(Padding::new(14.0))
        .size(18)
        .style(|_theme, _status| text_input::Style {
            background: Background::Color(Color::TRANSPARENT),
            border: Border::default(),
            icon: DarkTheme::TEXT_MUTED,
            placeholder: DarkTheme::TEXT_PLACEHOLDER,
            value: DarkTheme::TEXT,
            selection: DarkTheme::PRIMARY,
        });

    container(
        row![input, button(text("Search").size(15)).on_press(on_submit)]
            .spacing(8)
            .align_y(iced::Alignment::Center),
    )
    .padding(Padding::from([6.0, 12.0]))
    .width(Length::Fill)
    .style(|_theme| theme::surface(12.0))
    .into()
}
