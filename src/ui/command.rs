//! Key bindings for the form
//!
//! Translates terminal input into `AppEvent`s. The mapping depends on which
//! pane has focus:
//! - Editing: printable keys type into the focused entry, Enter generates
//! - Browsing: ↑/↓ (or j/k) select a token, Enter/`c`/`y` copy it
//!
//! Global: Tab switches pane, Ctrl-N adds an entry, Ctrl-G generates,
//! Ctrl-P toggles the pricing block, F1 shows help, Esc/Ctrl-C/Ctrl-Q quit.

use crossterm::event::{Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::app::{AppEvent, AppMode, EntryEdit};

/// Convert a raw terminal event into an AppEvent
pub fn event_to_app_event(event: Event, mode: AppMode) -> AppEvent {
    match event {
        Event::Key(key) if key.kind != KeyEventKind::Release => key_to_app_event(key, mode),
        Event::Paste(text) => AppEvent::Paste(text),
        _ => AppEvent::None,
    }
}

pub fn key_to_app_event(key: KeyEvent, mode: AppMode) -> AppEvent {
    let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
    let alt = key.modifiers.contains(KeyModifiers::ALT);

    if ctrl {
        if let KeyCode::Char(c) = key.code {
            match c.to_ascii_lowercase() {
                'c' | 'q' => return AppEvent::Quit,
                'n' => return AppEvent::AddEntry,
                'g' => return AppEvent::Generate,
                'p' => return AppEvent::TogglePricing,
                'd' if mode == AppMode::Editing => return AppEvent::RemoveEntry,
                _ => {}
            }
        }
    }

    match key.code {
        KeyCode::Esc => return AppEvent::Quit,
        KeyCode::F(1) => return AppEvent::Help,
        KeyCode::Tab | KeyCode::BackTab => return AppEvent::SwitchPane,
        KeyCode::Up => return AppEvent::FocusPrevious,
        KeyCode::Down => return AppEvent::FocusNext,
        _ => {}
    }

    match mode {
        AppMode::Editing => match key.code {
            KeyCode::Enter => AppEvent::Generate,
            // AltGr arrives as Ctrl+Alt
            KeyCode::Char(c) if !(ctrl || alt) || (ctrl && alt) => {
                AppEvent::Edit(EntryEdit::Insert(c))
            }
            KeyCode::Backspace => AppEvent::Edit(EntryEdit::Backspace),
            KeyCode::Delete => AppEvent::Edit(EntryEdit::Delete),
            KeyCode::Left => AppEvent::Edit(EntryEdit::Left),
            KeyCode::Right => AppEvent::Edit(EntryEdit::Right),
            KeyCode::Home => AppEvent::Edit(EntryEdit::Home),
            KeyCode::End => AppEvent::Edit(EntryEdit::End),
            _ => AppEvent::None,
        },
        AppMode::Browsing => match key.code {
            KeyCode::Enter | KeyCode::Char('c') | KeyCode::Char('y') => AppEvent::Copy,
            KeyCode::Char('j') => AppEvent::FocusNext,
            KeyCode::Char('k') => AppEvent::FocusPrevious,
            KeyCode::Char('?') => AppEvent::Help,
            KeyCode::Char('q') => AppEvent::Quit,
            _ => AppEvent::None,
        },
        AppMode::Quit => AppEvent::None,
    }
}
