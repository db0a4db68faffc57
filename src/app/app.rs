use log::{debug, info, warn};

use super::cursor::LineCursor;
use super::event::{AppEvent, EntryEdit};
use super::mode::AppMode;
use super::render_state::RenderState;
use super::state::FormState;
use crate::engine::{generator, Config, Token};
use crate::input::{ClipboardSink, SystemClipboard};

pub struct App {
    mode: AppMode,
    form: FormState,
    focused_entry: usize,
    cursor: LineCursor,
    tokens: Vec<Token>,
    selected_output: usize,
    status: Option<String>,
    show_help: bool,
    clipboard: Box<dyn ClipboardSink>,
    dirty: bool,
}

impl App {
    pub fn new() -> Self {
        Self::with_form(FormState::new(), Box::new(SystemClipboard::new()))
    }

    pub fn from_config(config: &Config) -> Self {
        let mut form = FormState::with_entries(config.initial_entries.iter().cloned());
        form.set_pricing(config.pricing_enabled);
        Self::with_form(form, Box::new(SystemClipboard::new()))
    }

    pub fn with_form(form: FormState, clipboard: Box<dyn ClipboardSink>) -> Self {
        let cursor = LineCursor::at_end(form.entry(0).unwrap_or_default());
        Self {
            mode: AppMode::Editing,
            form,
            focused_entry: 0,
            cursor,
            tokens: Vec::new(),
            selected_output: 0,
            status: None,
            show_help: false,
            clipboard,
            dirty: true,
        }
    }

    /// Swap the clipboard sink, e.g. for a `MemoryClipboard` in tests.
    pub fn with_clipboard(mut self, clipboard: Box<dyn ClipboardSink>) -> Self {
        self.clipboard = clipboard;
        self
    }

    pub fn mode(&self) -> AppMode {
        self.mode
    }

    pub fn form(&self) -> &FormState {
        &self.form
    }

    pub fn tokens(&self) -> &[Token] {
        &self.tokens
    }

    pub fn focused_entry(&self) -> usize {
        self.focused_entry
    }

    pub fn status(&self) -> Option<&str> {
        self.status.as_deref()
    }

    pub fn is_running(&self) -> bool {
        self.mode != AppMode::Quit
    }

    /// Generated tokens followed by the pricing tokens when enabled.
    pub fn output_tokens(&self) -> Vec<Token> {
        let mut output = self.tokens.clone();
        if self.form.pricing_enabled() {
            output.extend(generator::pricing_table_tokens());
        }
        output
    }

    /// Returns whether anything changed since the last call and clears the flag.
    pub fn consume_dirty(&mut self) -> bool {
        std::mem::take(&mut self.dirty)
    }

    pub fn handle_event(&mut self, event: AppEvent) {
        if event == AppEvent::None {
            return;
        }
        self.dirty = true;

        if self.show_help && !matches!(event, AppEvent::Help | AppEvent::Quit) {
            self.show_help = false;
            return;
        }

        match event {
            AppEvent::AddEntry => self.add_entry(),
            AppEvent::RemoveEntry => self.remove_focused_entry(),
            AppEvent::Edit(edit) => {
                if self.mode == AppMode::Editing {
                    self.edit_focused(edit);
                }
            }
            AppEvent::Paste(text) => {
                if self.mode == AppMode::Editing {
                    self.paste(&text);
                }
            }
            AppEvent::FocusNext => self.move_focus(1),
            AppEvent::FocusPrevious => self.move_focus(-1),
            AppEvent::SwitchPane => {
                self.mode = self.mode.switch_pane();
                self.clamp_selection();
            }
            AppEvent::Generate => self.generate(),
            AppEvent::TogglePricing => {
                let enabled = self.form.toggle_pricing();
                info!("pricing table tokens {}", if enabled { "on" } else { "off" });
                self.clamp_selection();
            }
            AppEvent::Copy => self.copy_selected(),
            AppEvent::Help => self.show_help = !self.show_help,
            AppEvent::Quit => self.mode = AppMode::Quit,
            AppEvent::None => {}
        }
    }

    pub fn get_render_state(&self) -> RenderState {
        let focused_text = self.form.entry(self.focused_entry).unwrap_or_default();
        let pricing_tokens = if self.form.pricing_enabled() {
            generator::pricing_table_tokens()
        } else {
            Vec::new()
        };
        let output_len = self.tokens.len() + pricing_tokens.len();
        let selected_output = (self.mode == AppMode::Browsing && output_len > 0)
            .then_some(self.selected_output);

        RenderState {
            mode: self.mode,
            entries: self.form.entries().to_vec(),
            focused_entry: self.focused_entry,
            cursor_column: self.cursor.display_column(focused_text),
            can_remove: self.form.can_remove(),
            can_generate: self.form.can_generate(),
            pricing_enabled: self.form.pricing_enabled(),
            tokens: self.tokens.clone(),
            pricing_tokens,
            selected_output,
            status: self.status.clone(),
            show_help: self.show_help,
        }
    }

    fn add_entry(&mut self) {
        self.form.add_entry();
        self.focused_entry = self.form.len() - 1;
        self.cursor = LineCursor::new();
        self.mode = AppMode::Editing;
        debug!("added entry, {} total", self.form.len());
    }

    fn remove_focused_entry(&mut self) {
        if self.mode != AppMode::Editing || !self.form.can_remove() {
            return;
        }
        match self.form.remove_entry(self.focused_entry) {
            Ok(_) => {
                self.focused_entry = self.focused_entry.min(self.form.len() - 1);
                self.cursor = LineCursor::at_end(self.focused_text());
                debug!("removed entry, {} left", self.form.len());
            }
            Err(err) => debug!("remove ignored: {}", err),
        }
    }

    fn edit_focused(&mut self, edit: EntryEdit) {
        let current = self.focused_text().to_string();
        let updated = match edit {
            EntryEdit::Insert(c) => {
                let mut buf = [0u8; 4];
                Some(self.cursor.insert(&current, c.encode_utf8(&mut buf)))
            }
            EntryEdit::Backspace => self.cursor.backspace(&current),
            EntryEdit::Delete => self.cursor.delete(&current),
            EntryEdit::Left => {
                self.cursor.move_left();
                None
            }
            EntryEdit::Right => {
                self.cursor.move_right(&current);
                None
            }
            EntryEdit::Home => {
                self.cursor.move_home();
                None
            }
            EntryEdit::End => {
                self.cursor.move_end(&current);
                None
            }
        };
        if let Some(text) = updated {
            self.store_focused(text);
        }
    }

    fn paste(&mut self, text: &str) {
        // Single-line fields drop line breaks from pasted text
        let cleaned: String = text.chars().filter(|c| !matches!(c, '\n' | '\r')).collect();
        if cleaned.is_empty() {
            return;
        }
        let current = self.focused_text().to_string();
        let updated = self.cursor.insert(&current, &cleaned);
        self.store_focused(updated);
    }

    fn store_focused(&mut self, text: String) {
        if let Err(err) = self.form.update_entry(self.focused_entry, text) {
            debug!("edit ignored: {}", err);
        }
    }

    fn move_focus(&mut self, delta: isize) {
        match self.mode {
            AppMode::Editing => {
                let last = self.form.len() - 1;
                self.focused_entry = self.focused_entry.saturating_add_signed(delta).min(last);
                self.cursor = LineCursor::at_end(self.focused_text());
            }
            AppMode::Browsing => {
                self.selected_output = self.selected_output.saturating_add_signed(delta);
                self.clamp_selection();
            }
            AppMode::Quit => {}
        }
    }

    fn generate(&mut self) {
        if !self.form.can_generate() {
            debug!("generate ignored: every entry is blank");
            return;
        }
        self.tokens = generator::generate(self.form.entries());
        self.selected_output = 0;
        info!("generated {} tokens", self.tokens.len());
        self.status = Some(format!("Generated {} token(s)", self.tokens.len()));
    }

    fn copy_selected(&mut self) {
        if self.mode != AppMode::Browsing {
            return;
        }
        let Some(token) = self.output_tokens().into_iter().nth(self.selected_output) else {
            return;
        };
        match self.clipboard.copy(token.as_str()) {
            Ok(()) => {
                info!("copied {}", token);
                self.status = Some(format!("Copied {}", token));
            }
            // Copy failures stay out of the UI
            Err(err) => warn!("copy of {} failed: {}", token, err),
        }
    }

    fn clamp_selection(&mut self) {
        let len = self.tokens.len()
            + if self.form.pricing_enabled() {
                generator::PRICING_TABLE_TOKENS.len()
            } else {
                0
            };
        self.selected_output = self.selected_output.min(len.saturating_sub(1));
    }

    fn focused_text(&self) -> &str {
        self.form.entry(self.focused_entry).unwrap_or_default()
    }
}

impl Default for App {
    fn default() -> Self {
        Self::new()
    }
}
