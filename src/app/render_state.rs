use crate::app::mode::AppMode;
use crate::engine::Token;

/// Snapshot of everything the UI draws for one frame
#[derive(Debug, Clone, PartialEq)]
pub struct RenderState {
    pub mode: AppMode,
    pub entries: Vec<String>,
    pub focused_entry: usize,
    /// Cursor column inside the focused entry, in terminal cells
    pub cursor_column: usize,
    pub can_remove: bool,
    pub can_generate: bool,
    pub pricing_enabled: bool,
    pub tokens: Vec<Token>,
    /// Empty while the pricing block is hidden
    pub pricing_tokens: Vec<Token>,
    /// Index into `tokens` followed by `pricing_tokens`, set while browsing
    pub selected_output: Option<usize>,
    pub status: Option<String>,
    pub show_help: bool,
}

impl RenderState {
    pub fn output_len(&self) -> usize {
        self.tokens.len() + self.pricing_tokens.len()
    }

    /// Selected position inside the generated token list, if any
    pub fn selected_token(&self) -> Option<usize> {
        self.selected_output.filter(|&index| index < self.tokens.len())
    }

    /// Selected position inside the pricing token list, if any
    pub fn selected_pricing_token(&self) -> Option<usize> {
        self.selected_output
            .and_then(|index| index.checked_sub(self.tokens.len()))
            .filter(|&index| index < self.pricing_tokens.len())
    }
}
