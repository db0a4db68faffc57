pub mod config;
pub mod error;
pub mod generator;
pub mod token;

pub use config::{Config, LogConfig};
pub use error::{ClipboardError, CopilotError, FormError};
pub use generator::{
    generate, has_content, is_token_whitespace, normalize, pricing_table_tokens,
    PRICING_TABLE_TOKENS,
};
pub use token::Token;
