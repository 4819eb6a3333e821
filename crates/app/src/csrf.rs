//! CSRF tokens
//!
//! The web application issues a CSRF token and the name of the header it expects it in
//! through page metadata:
//!
//! ```html
//! <meta name="_csrf" content="4bfd1575-3ad1-4d21-96c7-4ef2d9f86721"/>
//! <meta name="_csrf_header" content="X-CSRF-TOKEN"/>
//! ```

use std::fmt::{Debug, Formatter, Result as FmtResult};

use regex::Regex;

/// Header used when the page does not name one.
pub const DEFAULT_CSRF_HEADER: &str = "X-CSRF-TOKEN";

const TOKEN_META_NAME: &str = "_csrf";
const HEADER_META_NAME: &str = "_csrf_header";

/// CSRF token attached to mutating requests.
#[derive(Clone, PartialEq, Eq)]
pub struct CsrfToken {
    header_name: String,
    token: String,
}

impl CsrfToken {
    /// Create a token sent in the given header.
    pub fn new(header_name: impl Into<String>, token: impl Into<String>) -> Self {
        Self {
            header_name: header_name.into(),
            token: token.into(),
        }
    }

    /// Header the token is sent in.
    pub fn header_name(&self) -> &str {
        &self.header_name
    }

    /// Token value.
    pub fn token(&self) -> &str {
        &self.token
    }

    /// Read the token and header name from a page's `<meta>` tags.
    ///
    /// Returns `None` when the page carries no non-empty `_csrf` token. A missing
    /// `_csrf_header` falls back to [`DEFAULT_CSRF_HEADER`].
    pub fn from_page_metadata(html: &str) -> Option<Self> {
        let meta_tag = Regex::new(r"(?is)<meta\b[^>]*>").ok()?;
        let attribute =
            Regex::new(r#"(?is)\b(name|content)\s*=\s*(?:"([^"]*)"|'([^']*)')"#).ok()?;

        let mut token = None;
        let mut header_name = None;

        for tag in meta_tag.find_iter(html) {
            let mut name = None;
            let mut content = None;

            for captures in attribute.captures_iter(tag.as_str()) {
                let value = captures
                    .get(2)
                    .or_else(|| captures.get(3))
                    .map(|m| m.as_str().trim().to_string());

                match captures.get(1).map(|m| m.as_str().to_ascii_lowercase()) {
                    Some(key) if key == "name" => name = value,
                    Some(key) if key == "content" => content = value,
                    _ => {}
                }
            }

            match name.as_deref() {
                Some(TOKEN_META_NAME) => token = content,
                Some(HEADER_META_NAME) => header_name = content,
                _ => {}
            }
        }

        let token = token.filter(|token| !token.is_empty())?;
        let header_name = header_name
            .filter(|header| !header.is_empty())
            .unwrap_or_else(|| DEFAULT_CSRF_HEADER.to_string());

        Some(Self { header_name, token })
    }
}

impl Debug for CsrfToken {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.debug_struct("CsrfToken")
            .field("header_name", &self.header_name)
            .field("token", &"<redacted>")
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reads_token_and_header_from_meta_tags() {
        let html = r#"
            <html><head>
                <meta charset="utf-8">
                <meta name="_csrf" content="abc-123"/>
                <meta name="_csrf_header" content="X-XSRF-TOKEN"/>
            </head></html>
        "#;

        let csrf = CsrfToken::from_page_metadata(html);

        assert_eq!(csrf, Some(CsrfToken::new("X-XSRF-TOKEN", "abc-123")));
    }

    #[test]
    fn attribute_order_and_quotes_do_not_matter() {
        let html = r"<META content='tok' NAME='_csrf'>";

        let csrf = CsrfToken::from_page_metadata(html);

        assert_eq!(csrf, Some(CsrfToken::new(DEFAULT_CSRF_HEADER, "tok")));
    }

    #[test]
    fn missing_or_empty_token_yields_none() {
        assert_eq!(CsrfToken::from_page_metadata("<html></html>"), None);
        assert_eq!(
            CsrfToken::from_page_metadata(r#"<meta name="_csrf" content="">"#),
            None
        );
        assert_eq!(
            CsrfToken::from_page_metadata(r#"<meta name="_csrf_header" content="X-CSRF-TOKEN">"#),
            None
        );
    }

    #[test]
    fn debug_redacts_token() {
        let debug = format!("{:?}", CsrfToken::new("X-CSRF-TOKEN", "secret"));

        assert!(!debug.contains("secret"), "token leaked in {debug}");
    }
}
