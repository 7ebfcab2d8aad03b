// tagsift-core/src/stripper.rs
//! Attribute removal for surviving tags.

use crate::tokenizer::TagToken;

/// Returns the token with an empty attribute set. Never looks at the name.
pub fn strip_attributes(mut token: TagToken) -> TagToken {
    token.attributes.clear();
    token
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strip_clears_attributes() {
        let token = TagToken::from_content(r#"b class="x" onclick="y""#);
        assert_eq!(token.attributes.len(), 2);
        let stripped = strip_attributes(token);
        assert_eq!(stripped.name, "b");
        assert!(stripped.attributes.is_empty());
    }

    #[test]
    fn test_strip_is_idempotent() {
        let once = strip_attributes(TagToken::from_content("script src=evil.js"));
        let twice = strip_attributes(once.clone());
        assert_eq!(once, twice);
    }
}
