//! Wire types returned by the search backend

use serde::{Deserialize, Serialize};

/// One matched line from `/search`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct SearchResult {
    pub title: String,
    /// Speaking character
    pub player: String,
    pub quote: String,
    /// Locator such as `1.1.188`
    pub act_scene_line: String,
}

/// Surrounding text from `/search-context`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ContextResult {
    pub context: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_search_result_field_names() {
        let body = r#"[{"Title":"Romeo and Juliet","Player":"Romeo","Quote":"love is a smoke","ActSceneLine":"1.1.188"}]"#;
        let results: Vec<SearchResult> = serde_json::from_str(body).unwrap();

        assert_eq!(results.len(), 1);
        assert_eq!(results[0].title, "Romeo and Juliet");
        assert_eq!(results[0].player, "Romeo");
        assert_eq!(results[0].quote, "love is a smoke");
        assert_eq!(results[0].act_scene_line, "1.1.188");
    }

    #[test]
    fn test_context_result_ignores_extra_fields() {
        let body = r#"[{"Context":"for love is a smoke","Offset":"12"}]"#;
        let results: Vec<ContextResult> = serde_json::from_str(body).unwrap();
        assert_eq!(results[0].context, "for love is a smoke");
    }

    #[test]
    fn test_missing_field_is_an_error() {
        let body = r#"[{"Title":"Hamlet","Quote":"words, words, words"}]"#;
        assert!(serde_json::from_str::<Vec<SearchResult>>(body).is_err());
    }
}
