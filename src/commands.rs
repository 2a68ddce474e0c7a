//! Command-line parsing
//!
//! Parses `shakesearch [command] [args...]` into a [`Command`].

/// Parsed command from the process arguments
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// No arguments: open the search window
    Gui,
    /// Headless search: search <query...>
    Search { query: String },
    /// Headless context lookup: context <quote...> [--term <term>]
    Context { quote: String, term: Option<String> },
    /// Print effective configuration: config
    Config,
    /// Show help: help
    Help,
    /// Bad invocation, with a message for the user
    Invalid { message: String },
}

impl Command {
    /// Parse arguments, excluding the program name
    pub fn parse(args: &[String]) -> Self {
        let Some((cmd, rest)) = args.split_first() else {
            return Command::Gui;
        };

        match cmd.to_lowercase().as_str() {
            "search" | "s" => {
                let query = rest.join(" ");
                if query.trim().is_empty() {
                    Command::Invalid {
                        message: "Usage: shakesearch search <query>".to_string(),
                    }
                } else {
                    Command::Search { query }
                }
            }
            "context" | "ctx" | "c" => Self::parse_context(rest),
            "config" => Command::Config,
            "help" | "--help" | "-h" => Command::Help,
            other => Command::Invalid {
                message: format!("Unknown command: {}. Run 'shakesearch help' for usage.", other),
            },
        }
    }

    fn parse_context(args: &[String]) -> Self {
        let mut words = Vec::new();
        let mut term = None;
        let mut iter = args.iter();

        while let Some(arg) = iter.next() {
            if arg == "--term" || arg == "-t" {
                match iter.next() {
                    Some(value) => term = Some(value.clone()),
                    None => {
                        return Command::Invalid {
                            message: "--term needs a value".to_string(),
                        }
                    }
                }
            } else {
                words.push(arg.as_str());
            }
        }

        let quote = words.join(" ");
        if quote.trim().is_empty() {
            return Command::Invalid {
                message: "Usage: shakesearch context <quote> [--term <term>]".to_string(),
            };
        }
        Command::Context { quote, term }
    }

    /// Get help text for all commands
    pub fn help_text() -> &'static str {
        r#"ShakeSearch - search the complete works of Shakespeare

Usage: shakesearch [command]

Commands:
  (none)                            Open the search window
  search <query>                    Print matching lines as cards
  context <quote> [--term <term>]   Print the passage around a quote
  config                            Print the effective configuration
  help                              Show this help

Environment:
  SHAKESEARCH_URL            Backend base URL (default http://127.0.0.1:3001)
  SHAKESEARCH_ENCODE_QUERY   Percent-encode query values (default true)
  SHAKESEARCH_HIGHLIGHT      submitted | live (default submitted)
  RUST_LOG                   Log filter, e.g. shakesearch=debug

Config file: ~/.config/shakesearch/config.toml"#
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_parse_no_args() {
        assert_eq!(Command::parse(&[]), Command::Gui);
    }

    #[test]
    fn test_parse_search() {
        match Command::parse(&args(&["search", "to", "be"])) {
            Command::Search { query } => assert_eq!(query, "to be"),
            other => panic!("Expected Search command, got {other:?}"),
        }
    }

    #[test]
    fn test_parse_search_without_query() {
        assert!(matches!(
            Command::parse(&args(&["search"])),
            Command::Invalid { .. }
        ));
    }

    #[test]
    fn test_parse_context_with_term() {
        match Command::parse(&args(&["context", "love", "is", "a", "smoke", "--term", "love"])) {
            Command::Context { quote, term } => {
                assert_eq!(quote, "love is a smoke");
                assert_eq!(term.as_deref(), Some("love"));
            }
            other => panic!("Expected Context command, got {other:?}"),
        }
    }

    #[test]
    fn test_parse_context_missing_term_value() {
        assert!(matches!(
            Command::parse(&args(&["ctx", "love", "--term"])),
            Command::Invalid { .. }
        ));
    }

    #[test]
    fn test_parse_unknown() {
        match Command::parse(&args(&["frobnicate"])) {
            Command::Invalid { message } => assert!(message.contains("frobnicate")),
            other => panic!("Expected Invalid, got {other:?}"),
        }
    }
}
