//! Markup rendering for headless output.
//!
//! Every interpolated value goes through [`html_escape`]; the only literal
//! tags are the ones written here.

use askama::{Html, MarkupDisplay};

use crate::backend::SearchResult;
use crate::highlight::{Highlighted, Segment};
use crate::ui::modal::{ModalContent, FAILURE_TEXT, NO_RESULTS_TEXT};

pub fn html_escape(s: &str) -> String {
    MarkupDisplay::new_unsafe(s, Html).to_string()
}

pub fn card_markup(result: &SearchResult) -> String {
    format!(
        r#"<div class="card">
  <span class="card-title">{title}</span>
  <p><strong>Character:</strong> {player}</p>
  <p><strong>Quote:</strong> {quote}</p>
  <p><strong>Act/Scene/Line:</strong> {asl}</p>
  <a class="more-button" data-quote="{quote}">More</a>
</div>"#,
        title = html_escape(&result.title),
        player = html_escape(&result.player),
        quote = html_escape(&result.quote),
        asl = html_escape(&result.act_scene_line),
    )
}

/// All cards, in order, as one container
pub fn cards_markup(results: &[SearchResult]) -> String {
    let cards: Vec<String> = results.iter().map(card_markup).collect();
    format!("<div id=\"card-container\">\n{}\n</div>", cards.join("\n"))
}

/// `...text...` with each match wrapped in `<highlight>`
pub fn context_markup(highlighted: &Highlighted) -> String {
    let mut out = String::from("...");
    for segment in &highlighted.segments {
        match segment {
            Segment::Plain(t) => out.push_str(&html_escape(t)),
            Segment::Match(t) => {
                out.push_str("<highlight>");
                out.push_str(&html_escape(t));
                out.push_str("</highlight>");
            }
        }
    }
    out.push_str("...");
    out
}

pub fn modal_markup(content: &ModalContent) -> String {
    let body = match content {
        ModalContent::NoResults => html_escape(NO_RESULTS_TEXT),
        ModalContent::Failure(_) => html_escape(FAILURE_TEXT),
        ModalContent::Context(highlighted) => context_markup(highlighted),
    };
    format!(
        "<div class=\"modal\">\n  <div class=\"modal-content\"><p>{body}</p></div>\n  <div class=\"modal-footer\"><a class=\"modal-close\">Close</a></div>\n</div>"
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn romeo() -> SearchResult {
        SearchResult {
            title: "Romeo and Juliet".to_string(),
            player: "Romeo".to_string(),
            quote: "love is a smoke".to_string(),
            act_scene_line: "1.1.188".to_string(),
        }
    }

    #[test]
    fn test_card_shows_all_fields() {
        let markup = card_markup(&romeo());
        assert!(markup.contains(r#"<span class="card-title">Romeo and Juliet</span>"#));
        assert!(markup.contains("<strong>Character:</strong> Romeo"));
        assert!(markup.contains("<strong>Quote:</strong> love is a smoke"));
        assert!(markup.contains("<strong>Act/Scene/Line:</strong> 1.1.188"));
        assert!(markup.contains(r#"data-quote="love is a smoke""#));
    }

    #[test]
    fn test_card_fields_are_escaped() {
        let result = SearchResult {
            title: "<script>alert(1)</script>".to_string(),
            player: "Puck & Oberon".to_string(),
            quote: r#"say "adieu" o'er"#.to_string(),
            act_scene_line: "<b>".to_string(),
        };
        let markup = card_markup(&result);

        assert!(!markup.contains("<script>"));
        assert!(!markup.contains("<b>"));
        assert!(markup.contains("&lt;script&gt;alert(1)"));
        assert!(markup.contains("Puck &amp; Oberon"));
        assert!(markup.contains("say &quot;adieu&quot; o"));
        assert!(!markup.contains("o'er"));
    }

    #[test]
    fn test_html_escape() {
        assert_eq!(html_escape("Puck & <Oberon>"), "Puck &amp; &lt;Oberon&gt;");
        assert_eq!(html_escape(r#""adieu""#), "&quot;adieu&quot;");
        assert!(!html_escape("o'er").contains('\''));
        assert_eq!(html_escape("plain words"), "plain words");
    }

    #[test]
    fn test_cards_markup_keeps_order() {
        let mut second = romeo();
        second.title = "Twelfth Night".to_string();
        let markup = cards_markup(&[romeo(), second]);

        let first_at = markup.find("Romeo and Juliet").unwrap();
        let second_at = markup.find("Twelfth Night").unwrap();
        assert!(first_at < second_at);
        assert_eq!(markup.matches("class=\"card\"").count(), 2);
    }

    #[test]
    fn test_context_markup() {
        let h = Highlighted::new("for love is a smoke made with the fume of sighs", "love");
        assert_eq!(
            context_markup(&h),
            "...for <highlight>love</highlight> is a smoke made with the fume of sighs..."
        );
    }

    #[test]
    fn test_context_markup_escapes_text_and_term() {
        let h = Highlighted::new("if <love> be rough", "<love>");
        assert_eq!(
            context_markup(&h),
            "...if <highlight>&lt;love&gt;</highlight> be rough..."
        );
    }

    #[test]
    fn test_modal_markup_apology() {
        let markup = modal_markup(&ModalContent::NoResults);
        assert!(markup.contains(&format!("<p>{}</p>", html_escape(NO_RESULTS_TEXT))));
        assert!(!markup.contains("couldn't"));
        assert_eq!(markup.matches("Close").count(), 1);
    }

    #[test]
    fn test_modal_markup_failure_hides_detail() {
        let markup = modal_markup(&ModalContent::Failure("connection refused".into()));
        assert!(markup.contains("something went wrong"));
        assert!(!markup.contains("connection refused"));
    }
}
