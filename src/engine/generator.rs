//! Token generation
//!
//! Turns raw form entries into bracketed tokens:
//! trim → upper-case → collapse whitespace runs into `_` → wrap in `#[..]#`.
//! Blank entries produce nothing. The pricing-table tokens are a fixed set
//! that does not depend on any entry.

use super::token::Token;

/// Fixed tokens describing the subscription pricing table.
pub const PRICING_TABLE_TOKENS: [&str; 3] = [
    "#[TABLE::START::SUBSCRIPTIONS]#",
    "#[ROW::PRODUCT_NAME]#",
    "#[TABLE::END::SUBSCRIPTIONS]#",
];

/// Whitespace as web form fields see it: Unicode whitespace plus the byte
/// order mark U+FEFF, minus NEXT LINE U+0085.
pub fn is_token_whitespace(c: char) -> bool {
    (c.is_whitespace() && c != '\u{0085}') || c == '\u{FEFF}'
}

/// Normalize entry text: trim, upper-case, and replace every run of
/// whitespace with a single underscore.
///
/// Idempotent: `normalize(&normalize(x)) == normalize(x)`.
pub fn normalize(text: &str) -> String {
    let upper = text.trim_matches(is_token_whitespace).to_uppercase();
    upper
        .split(is_token_whitespace)
        .filter(|word| !word.is_empty())
        .collect::<Vec<_>>()
        .join("_")
}

/// Generate tokens for every non-blank entry, preserving order.
pub fn generate<S: AsRef<str>>(entries: &[S]) -> Vec<Token> {
    entries
        .iter()
        .filter_map(|entry| Token::from_text(entry.as_ref()))
        .collect()
}

/// True when at least one entry would produce a token.
pub fn has_content<S: AsRef<str>>(entries: &[S]) -> bool {
    entries
        .iter()
        .any(|entry| !entry.as_ref().trim_matches(is_token_whitespace).is_empty())
}

pub fn pricing_table_tokens() -> Vec<Token> {
    PRICING_TABLE_TOKENS
        .iter()
        .map(|raw| Token::wrap(&raw[Token::OPEN.len()..raw.len() - Token::CLOSE.len()]))
        .collect()
}
