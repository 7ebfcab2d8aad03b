// tagsift-core/src/tokenizer.rs
//! Extracts tag tokens from raw markup.
//!
//! The scanner looks for `<...>` spans left to right and reduces each span to a
//! [`TagToken`]. It has no notion of nesting, comments or doctypes: anything
//! delimited by `<` and `>` is tokenized the same way. A trailing `<` with no
//! matching `>` ends the scan.
//!
//! License: MIT OR APACHE 2.0

use std::collections::HashSet;

use log::debug;

/// One parsed `<...>` occurrence.
///
/// `name` keeps the case found in the source. A closing tag such as `</b>`
/// yields the name `/b`.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct TagToken {
    /// Tag content up to the first space.
    pub name: String,
    /// Raw attribute pieces that followed the name. Always cleared before emission.
    pub attributes: HashSet<String>,
}

impl TagToken {
    /// Creates a token with no attributes.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            attributes: HashSet::new(),
        }
    }

    /// Splits raw tag content into a name and its attribute pieces.
    pub fn from_content(content: &str) -> Self {
        match content.split_once(' ') {
            Some((name, rest)) => Self {
                name: name.to_string(),
                attributes: rest.split_whitespace().map(str::to_string).collect(),
            },
            None => Self::new(content),
        }
    }
}

/// Scans `html` and returns every tag token in order of appearance.
pub fn parse(html: &str) -> Vec<TagToken> {
    let mut tokens = Vec::new();
    let mut cursor = 0usize;

    while let Some(open_rel) = html[cursor..].find('<') {
        let open = cursor + open_rel;
        let Some(close_rel) = html[open..].find('>') else {
            debug!("Unterminated tag at byte {}; dropping trailing fragment.", open);
            break;
        };
        let close = open + close_rel;
        tokens.push(TagToken::from_content(&html[open + 1..close]));
        cursor = close + 1;
    }

    debug!("Tokenized {} tag(s) from {} byte(s) of input.", tokens.len(), html.len());
    tokens
}

#[cfg(test)]
mod tests {
    use super::*;

    fn names(tokens: &[TagToken]) -> Vec<&str> {
        tokens.iter().map(|t| t.name.as_str()).collect()
    }

    #[test]
    fn test_parse_simple_tags_in_order() {
        let tokens = parse("<b><i><p>");
        assert_eq!(names(&tokens), vec!["b", "i", "p"]);
    }

    #[test]
    fn test_closing_tag_keeps_slash() {
        let tokens = parse("<b>Bold</b>");
        assert_eq!(names(&tokens), vec!["b", "/b"]);
    }

    #[test]
    fn test_name_stops_at_first_space() {
        let tokens = parse(r#"<a href="x" target="_blank">"#);
        assert_eq!(tokens.len(), 1);
        assert_eq!(tokens[0].name, "a");
        assert!(tokens[0].attributes.contains(r#"href="x""#));
        assert!(tokens[0].attributes.contains(r#"target="_blank""#));
    }

    #[test]
    fn test_case_is_preserved() {
        let tokens = parse("<B><Script>");
        assert_eq!(names(&tokens), vec!["B", "Script"]);
    }

    #[test]
    fn test_no_angle_brackets_yields_nothing() {
        assert!(parse("plain text only").is_empty());
        assert!(parse("").is_empty());
    }

    #[test]
    fn test_unterminated_tag_is_dropped() {
        let tokens = parse("<b><i");
        assert_eq!(names(&tokens), vec!["b"]);
    }

    #[test]
    fn test_stray_close_bracket_is_ignored() {
        let tokens = parse("a > b <u>");
        assert_eq!(names(&tokens), vec!["u"]);
    }

    #[test]
    fn test_empty_tag_content() {
        let tokens = parse("<>");
        assert_eq!(tokens.len(), 1);
        assert_eq!(tokens[0].name, "");
    }

    #[test]
    fn test_comment_and_doctype_are_plain_tokens() {
        let tokens = parse("<!DOCTYPE html><!-- note -->");
        assert_eq!(names(&tokens), vec!["!DOCTYPE", "!--"]);
    }

    #[test]
    fn test_multibyte_text_between_tags() {
        let tokens = parse("héllo <b>wörld</b> ✓");
        assert_eq!(names(&tokens), vec!["b", "/b"]);
    }
}
