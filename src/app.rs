//! Core application state and Iced Application implementation
//!
//! Submitting the search field fetches `/search` and fills the card deck;
//! a card's "More" fetches `/search-context` and opens the modal. Each of
//! the two call sites numbers its requests and only applies the answer to
//! the latest one.

use iced::keyboard::{self, Key};
use iced::widget::{column, container, text, Space};
use iced::{Background, Border, Element, Event, Length, Subscription, Task, Theme};

use crate::backend::{BackendClient, ContextResult, SearchResult};
use crate::config::{Config, HighlightSource};
use crate::highlight::Highlighted;
use crate::sequence::{RequestId, RequestSequence};
use crate::ui::cards::{self, CardDeck};
use crate::ui::modal::{self, ModalContent, ModalService};
use crate::ui::search_bar;
use crate::ui::theme::DarkTheme;

// ============================================================================
// Application State
// ============================================================================

pub struct ShakeSearch {
    /// Live contents of the search field
    query: String,
    deck: CardDeck,
    modals: ModalService,
    searches: RequestSequence,
    lookups: RequestSequence,
    loading: bool,
    backend: BackendClient,
    highlight_term: HighlightSource,
}

#[derive(Debug, Clone)]
pub enum Message {
    QueryChanged(String),
    Submit,
    SearchComplete {
        request: RequestId,
        query: String,
        result: Result<Vec<SearchResult>, String>,
    },
    /// "More" on a card drawn at deck `generation`
    ShowContext {
        generation: u64,
        quote: String,
    },
    ContextComplete {
        request: RequestId,
        /// Query of the deck the clicked card belonged to
        term: String,
        result: Result<Vec<ContextResult>, String>,
    },
    CloseModal,
    IcedEvent(Event),
}

impl ShakeSearch {
    pub fn new(config: &Config) -> Self {
        Self {
            query: String::new(),
            deck: CardDeck::new(),
            modals: ModalService::new(),
            searches: RequestSequence::new(),
            lookups: RequestSequence::new(),
            loading: false,
            backend: BackendClient::from_config(config),
            highlight_term: config.highlight_term,
        }
    }

    pub fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::QueryChanged(query) => {
                self.query = query;
                Task::none()
            }

            Message::Submit => self.search(),

            Message::SearchComplete {
                request,
                query,
                result,
            } => {
                if !self.searches.is_current(request) {
                    tracing::debug!(request, %query, "dropping superseded search response");
                    return Task::none();
                }
                self.loading = false;

                match result {
                    Ok(results) if results.is_empty() => {
                        tracing::info!(%query, "no results");
                        self.modals.show(ModalContent::NoResults);
                    }
                    Ok(results) => {
                        tracing::info!(%query, count = results.len(), "search complete");
                        self.deck.replace(&query, results);
                    }
                    Err(e) => {
                        tracing::warn!(%query, "search failed: {}", e);
                        self.modals.show(ModalContent::Failure(e));
                    }
                }
                Task::none()
            }

            Message::ShowContext { generation, quote } => {
                if !self.deck.is_current(generation) {
                    tracing::debug!(generation, "ignoring trigger from a replaced deck");
                    return Task::none();
                }
                self.show_context(quote)
            }

            Message::ContextComplete {
                request,
                term,
                result,
            } => {
                if !self.lookups.is_current(request) {
                    tracing::debug!(request, "dropping superseded context response");
                    return Task::none();
                }

                let content = match result {
                    Ok(results) => {
                        let term = match self.highlight_term {
                            HighlightSource::Submitted => term,
                            HighlightSource::Live => self.query.clone(),
                        };
                        context_modal(results, &term)
                    }
                    Err(e) => {
                        tracing::warn!("context lookup failed: {}", e);
                        ModalContent::Failure(e)
                    }
                };
                self.modals.show(content);
                Task::none()
            }

            Message::CloseModal => {
                self.modals.close_if_open();
                Task::none()
            }

            Message::IcedEvent(event) => {
                if let Event::Keyboard(keyboard::Event::KeyPressed { key, .. }) = event {
                    return self.on_key(key);
                }
                Task::none()
            }
        }
    }

    pub fn view(&self) -> Element<'_, Message> {
        let search_bar = search_bar::view(&self.query, Message::QueryChanged, Message::Submit);

        let body: Element<'_, Message> = if self.deck.is_empty() {
            let hint = if self.loading {
                "Searching..."
            } else {
                "Search for a word to find the lines that use it."
            };
            container(text(hint).size(14).color(DarkTheme::TEXT_MUTED))
                .width(Length::Fill)
                .center_x(Length::Fill)
                .into()
        } else {
            cards::view(&self.deck, |generation, quote| Message::ShowContext {
                generation,
                quote,
            })
        };

        let page = container(
            container(column![search_bar, Space::with_height(16), body])
                .padding(16)
                .width(Length::Fill)
                .height(Length::Fill),
        )
        .width(Length::Fill)
        .height(Length::Fill)
        .style(|_theme| container::Style {
            background: Some(Background::Color(DarkTheme::BACKGROUND)),
            border: Border::default(),
            ..Default::default()
        });

        match self.modals.current() {
            Some(open) => modal::view(page, open, Message::CloseModal),
            None => page.into(),
        }
    }

    pub fn subscription(&self) -> Subscription<Message> {
        iced::event::listen().map(Message::IcedEvent)
    }

    pub fn theme(&self) -> Theme {
        Theme::Dark
    }

    #[cfg(test)]
    pub fn deck(&self) -> &CardDeck {
        &self.deck
    }

    #[cfg(test)]
    pub fn modals(&self) -> &ModalService {
        &self.modals
    }

    #[cfg(test)]
    pub fn is_loading(&self) -> bool {
        self.loading
    }

    fn on_key(&mut self, key: Key) -> Task<Message> {
        match key {
            Key::Named(keyboard::key::Named::Escape) => self.update(Message::CloseModal),
            _ => Task::none(),
        }
    }

    // ========================================================================
    // Requests
    // ========================================================================

    fn search(&mut self) -> Task<Message> {
        if self.query.trim().is_empty() {
            return Task::none();
        }

        let request = self.searches.issue();
        let query = self.query.clone();
        let backend = self.backend.clone();
        self.loading = true;
        tracing::debug!(request, %query, "searching");

        let q = query.clone();
        Task::perform(
            async move { backend.search(&q).await.map_err(|e| e.to_string()) },
            move |result| Message::SearchComplete {
                request,
                query: query.clone(),
                result,
            },
        )
    }

    fn show_context(&mut self, quote: String) -> Task<Message> {
        let request = self.lookups.issue();
        let term = self.deck.query().to_string();
        let backend = self.backend.clone();
        tracing::debug!(request, %quote, "fetching context");

        Task::perform(
            async move { backend.context(&quote).await.map_err(|e| e.to_string()) },
            move |result| Message::ContextComplete {
                request,
                term: term.clone(),
                result,
            },
        )
    }
}

/// Modal for a context response: apology when empty, otherwise the first
/// entry with `term` highlighted
pub fn context_modal(results: Vec<ContextResult>, term: &str) -> ModalContent {
    match results.into_iter().next() {
        Some(first) => ModalContent::Context(Highlighted::new(&first.context, term)),
        None => ModalContent::NoResults,
    }
}
