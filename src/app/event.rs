/// Edits applied to the focused entry
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum EntryEdit {
    Insert(char),
    Backspace,
    Delete,
    Left,
    Right,
    Home,
    End,
}

/// Application events
#[derive(Debug, PartialEq, Eq, Clone)]
pub enum AppEvent {
    AddEntry,
    /// Remove the focused entry
    RemoveEntry,
    Edit(EntryEdit),
    /// Pasted text for the focused entry
    Paste(String),
    FocusNext,
    FocusPrevious,
    SwitchPane,
    Generate,
    TogglePricing,
    /// Copy the selected output token
    Copy,
    Help,
    Quit,
    None,
}
