//! Literal search-term highlighting for context passages

use std::fmt;

/// A run of context text, either plain or a match of the term
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Segment {
    Plain(String),
    Match(String),
}

/// Context text split around every occurrence of a term
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Highlighted {
    pub segments: Vec<Segment>,
}

impl Highlighted {
    /// Split `text` on every literal, case-sensitive occurrence of `term`,
    /// scanning left to right without overlap. An empty term matches nothing.
    pub fn new(text: &str, term: &str) -> Self {
        let mut segments = Vec::new();

        if term.is_empty() {
            if !text.is_empty() {
                segments.push(Segment::Plain(text.to_string()));
            }
            return Self { segments };
        }

        let mut rest = text;
        while let Some(pos) = rest.find(term) {
            if pos > 0 {
                segments.push(Segment::Plain(rest[..pos].to_string()));
            }
            segments.push(Segment::Match(term.to_string()));
            rest = &rest[pos + term.len()..];
        }
        if !rest.is_empty() {
            segments.push(Segment::Plain(rest.to_string()));
        }

        Self { segments }
    }

    #[cfg(test)]
    pub fn match_count(&self) -> usize {
        self.segments
            .iter()
            .filter(|s| matches!(s, Segment::Match(_)))
            .count()
    }

    /// The original text with no markers
    #[cfg(test)]
    pub fn plain_text(&self) -> String {
        self.segments
            .iter()
            .map(|s| match s {
                Segment::Plain(t) | Segment::Match(t) => t.as_str(),
            })
            .collect()
    }
}

/// Unescaped form with `<highlight>` markers, for logs and debugging.
/// Use [`crate::render`] for anything that ends up in markup.
impl fmt::Display for Highlighted {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for segment in &self.segments {
            match segment {
                Segment::Plain(t) => f.write_str(t)?,
                Segment::Match(t) => write!(f, "<highlight>{t}</highlight>")?,
            }
        }
        Ok(())
    }
}
