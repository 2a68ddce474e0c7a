//! Widgets and view state for the search window

pub mod cards;
pub mod modal;
pub mod search_bar;
pub mod theme;
