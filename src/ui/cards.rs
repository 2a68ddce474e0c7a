//! Result cards
//!
//! The deck is replaced wholesale on every render pass. Each pass bumps the
//! generation, and "More" triggers carry the generation they were drawn
//! with, so activations from a replaced deck can be told apart and ignored.

use iced::widget::{button, column, container, row, scrollable, text, Row, Space};
use iced::{Element, Length, Padding};

use super::theme::{self, DarkTheme};
use crate::backend::SearchResult;

#[derive(Debug, Default)]
pub struct CardDeck {
    generation: u64,
    /// Query that produced these cards
    query: String,
    cards: Vec<SearchResult>,
}

impl CardDeck {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace every card with `results`, kept in the order given
    pub fn replace(&mut self, query: &str, results: Vec<SearchResult>) -> u64 {
        self.generation += 1;
        self.query = query.to_string();
        self.cards = results;
        self.generation
    }

    pub fn cards(&self) -> &[SearchResult] {
        &self.cards
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Whether a trigger drawn at `generation` belongs to the current deck
    pub fn is_current(&self, generation: u64) -> bool {
        generation != 0 && generation == self.generation
    }
}

pub fn view<'a, Message: Clone + 'a>(
    deck: &'a CardDeck,
    on_more: impl Fn(u64, String) -> Message,
) -> Element<'a, Message> {
    let generation = deck.generation();
    let items: Vec<Element<'a, Message>> = deck
        .cards()
        .iter()
        .map(|result| card(result, on_more(generation, result.quote.clone())))
        .collect();

    container(scrollable(column(items).spacing(12)).height(Length::Fill))
        .height(Length::FillPortion(1))
        .into()
}

fn card<'a, Message: Clone + 'a>(result: &'a SearchResult, more: Message) -> Element<'a, Message> {
    let content = column![
        text(&result.title).size(18).color(DarkTheme::TEXT),
        field("Character:", &result.player),
        field("Quote:", &result.quote),
        field("Act/Scene/Line:", &result.act_scene_line),
    ]
    .spacing(6);

    let actions = row![
        Space::with_width(Length::Fill),
        button(text("More").size(13).color(DarkTheme::PRIMARY))
            .style(button::text)
            .on_press(more),
    ];

    container(column![content, actions].spacing(8))
        .padding(Padding::from([14.0, 16.0]))
        .width(Length::Fill)
        .style(|_theme| theme::card())
        .into()
}

fn field<'a, Message: 'a>(label: &'static str, value: &'a str) -> Row<'a, Message> {
    row![
        text(label).size(13).color(DarkTheme::TEXT_MUTED),
        text(value).size(14).color(DarkTheme::TEXT),
    ]
    .spacing(6)
}
