use std::fmt;

use super::generator::normalize;

/// A bracketed placeholder such as `#[EFFECTIVE_DATE]#`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Token(String);

impl Token {
    pub const OPEN: &'static str = "#[";
    pub const CLOSE: &'static str = "]#";

    /// Build a token from raw entry text. Returns `None` for blank text.
    pub fn from_text(text: &str) -> Option<Self> {
        let normalized = normalize(text);
        if normalized.is_empty() {
            None
        } else {
            Some(Self::wrap(&normalized))
        }
    }

    /// Wrap already-normalized text without touching it.
    pub(crate) fn wrap(body: &str) -> Self {
        Token(format!("{}{}{}", Self::OPEN, body, Self::CLOSE))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// The text between the brackets.
    pub fn body(&self) -> &str {
        &self.0[Self::OPEN.len()..self.0.len() - Self::CLOSE.len()]
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for Token {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl From<Token> for String {
    fn from(token: Token) -> Self {
        token.0
    }
}
