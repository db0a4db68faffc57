/// Which pane owns the keyboard.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AppMode {
    /// Typing into the focused entry field
    #[default]
    Editing,
    /// Moving through the token output to copy items
    Browsing,
    Quit,
}

impl AppMode {
    /// Tab cycles between the two panes; `Quit` stays put.
    pub fn switch_pane(self) -> Self {
        match self {
            AppMode::Editing => AppMode::Browsing,
            AppMode::Browsing => AppMode::Editing,
            AppMode::Quit => AppMode::Quit,
        }
    }
}
