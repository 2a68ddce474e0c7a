//! Single-slot modal dialog
//!
//! The app holds one `ModalService`; showing a dialog replaces whatever was
//! open, so at most one modal ever exists.

use iced::widget::text::Span;
use iced::widget::{button, center, column, container, mouse_area, opaque, rich_text, row, span, stack, text, Space};
use iced::{Element, Length, Padding};

use super::theme::{self, DarkTheme};
use crate::highlight::{Highlighted, Segment};

pub const NO_RESULTS_TEXT: &str = "Sorry, we couldn't find any results.";
pub const FAILURE_TEXT: &str = "Sorry, something went wrong. Please try again.";

/// What a dialog shows
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ModalContent {
    /// Backend answered with an empty list
    NoResults,
    /// Request, status, or decode failure; detail is for logs and headless output
    Failure(String),
    /// Context passage with the search term marked
    Context(Highlighted),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Modal {
    /// Increases with every `show`, so callers can tell dialogs apart
    pub id: u64,
    pub content: ModalContent,
}

#[derive(Debug, Default)]
pub struct ModalService {
    active: Option<Modal>,
    shown: u64,
}

impl ModalService {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace any open dialog with a new one and open it
    pub fn show(&mut self, content: ModalContent) -> u64 {
        if let Some(previous) = self.active.take() {
            tracing::debug!(id = previous.id, "replacing open modal");
        }
        self.shown += 1;
        self.active = Some(Modal {
            id: self.shown,
            content,
        });
        self.shown
    }

    /// Close the open dialog, if any. Returns whether one was open.
    pub fn close_if_open(&mut self) -> bool {
        self.active.take().is_some()
    }

    pub fn current(&self) -> Option<&Modal> {
        self.active.as_ref()
    }

    #[cfg(test)]
    pub fn is_open(&self) -> bool {
        self.active.is_some()
    }
}

/// Draw `modal` over `base`; clicking the backdrop or "Close" emits `on_close`
pub fn view<'a, Message: Clone + 'static>(
    base: impl Into<Element<'a, Message>>,
    modal: &'a Modal,
    on_close: Message,
) -> Element<'a, Message> {
    let body: Element<'a, Message> = match &modal.content {
        ModalContent::NoResults => text(NO_RESULTS_TEXT).size(15).color(DarkTheme::TEXT).into(),
        ModalContent::Failure(_) => text(FAILURE_TEXT).size(15).color(DarkTheme::TEXT).into(),
        ModalContent::Context(highlighted) => context_text(highlighted),
    };

    let footer = row![
        Space::with_width(Length::Fill),
        button(text("Close").size(14)).on_press(on_close.clone()),
    ];

    let dialog = container(column![body, footer].spacing(16))
        .padding(Padding::new(24.0))
        .max_width(560.0)
        .style(|_theme| theme::surface(12.0));

    stack![
        base.into(),
        opaque(
            mouse_area(center(opaque(dialog)).style(|_theme| theme::backdrop()))
                .on_press(on_close)
        )
    ]
    .into()
}

fn context_text<'a, Message: Clone + 'static>(highlighted: &'a Highlighted) -> Element<'a, Message> {
    let mut spans: Vec<Span<'a, Message>> = Vec::with_capacity(highlighted.segments.len() + 2);
    spans.push(span("..."));
    for segment in &highlighted.segments {
        spans.push(match segment {
            Segment::Plain(t) => span(t.as_str()),
            Segment::Match(t) => span(t.as_str()).color(DarkTheme::HIGHLIGHT),
        });
    }
    spans.push(span("..."));

    rich_text(spans).size(15).color(DarkTheme::TEXT).into()
}
