//! Grapheme-aware cursor for editing a single-line entry.
//!
//! The cursor never owns the text. Each edit takes the current entry and
//! returns the new text, which the caller stores through
//! `FormState::update_entry`.

use unicode_segmentation::UnicodeSegmentation;
use unicode_width::UnicodeWidthStr;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LineCursor {
    /// Position in graphemes, 0 = before the first grapheme
    position: usize,
}

impl LineCursor {
    pub fn new() -> Self {
        Self { position: 0 }
    }

    pub fn at_end(text: &str) -> Self {
        Self {
            position: grapheme_count(text),
        }
    }

    pub fn position(&self) -> usize {
        self.position
    }

    /// Terminal column of the cursor relative to the start of the text.
    pub fn display_column(&self, text: &str) -> usize {
        text[..self.byte_offset(text)].width()
    }

    pub fn clamp(&mut self, text: &str) {
        self.position = self.position.min(grapheme_count(text));
    }

    pub fn insert(&mut self, text: &str, inserted: &str) -> String {
        self.clamp(text);
        let offset = self.byte_offset(text);
        let mut prefix = String::with_capacity(text.len() + inserted.len());
        prefix.push_str(&text[..offset]);
        prefix.push_str(inserted);
        // Combining marks may merge with the grapheme before them
        self.position = grapheme_count(&prefix);
        prefix.push_str(&text[offset..]);
        prefix
    }

    /// Remove the grapheme before the cursor. `None` when at the start.
    pub fn backspace(&mut self, text: &str) -> Option<String> {
        self.clamp(text);
        if self.position == 0 {
            return None;
        }
        self.position -= 1;
        Some(self.remove_at_cursor(text))
    }

    /// Remove the grapheme under the cursor. `None` when at the end.
    pub fn delete(&mut self, text: &str) -> Option<String> {
        self.clamp(text);
        if self.position >= grapheme_count(text) {
            return None;
        }
        Some(self.remove_at_cursor(text))
    }

    pub fn move_left(&mut self) {
        self.position = self.position.saturating_sub(1);
    }

    pub fn move_right(&mut self, text: &str) {
        if self.position < grapheme_count(text) {
            self.position += 1;
        }
    }

    pub fn move_home(&mut self) {
        self.position = 0;
    }

    pub fn move_end(&mut self, text: &str) {
        self.position = grapheme_count(text);
    }

    fn remove_at_cursor(&self, text: &str) -> String {
        let start = self.byte_offset(text);
        let end = text[start..]
            .graphemes(true)
            .next()
            .map_or(start, |g| start + g.len());
        let mut result = String::with_capacity(text.len());
        result.push_str(&text[..start]);
        result.push_str(&text[end..]);
        result
    }

    fn byte_offset(&self, text: &str) -> usize {
        text.grapheme_indices(true)
            .nth(self.position)
            .map_or(text.len(), |(offset, _)| offset)
    }
}

fn grapheme_count(text: &str) -> usize {
    text.graphemes(true).count()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_insert_into_empty_text() {
        let mut cursor = LineCursor::new();
        let text = cursor.insert("", "a");
        assert_eq!(text, "a");
        assert_eq!(cursor.position(), 1);
    }

    #[test]
    fn test_insert_in_the_middle() {
        let mut cursor = LineCursor::new();
        cursor.move_right("ac");
        let text = cursor.insert("ac", "b");
        assert_eq!(text, "abc");
        assert_eq!(cursor.position(), 2);
    }

    #[test]
    fn test_insert_multi_grapheme_string() {
        let mut cursor = LineCursor::at_end("date");
        let text = cursor.insert("date", " of term");
        assert_eq!(text, "date of term");
        assert_eq!(cursor.position(), 12);
    }

    #[test]
    fn test_backspace_at_start_is_none() {
        let mut cursor = LineCursor::new();
        assert_eq!(cursor.backspace("abc"), None);
        assert_eq!(cursor.position(), 0);
    }

    #[test]
    fn test_backspace_removes_previous_grapheme() {
        let mut cursor = LineCursor::at_end("naïve");
        assert_eq!(cursor.backspace("naïve").as_deref(), Some("naïv"));
        assert_eq!(cursor.position(), 4);
    }

    #[test]
    fn test_backspace_removes_whole_emoji() {
        let text = "hi👍🏽";
        let mut cursor = LineCursor::at_end(text);
        assert_eq!(cursor.backspace(text).as_deref(), Some("hi"));
    }

    #[test]
    fn test_delete_under_cursor() {
        let mut cursor = LineCursor::new();
        assert_eq!(cursor.delete("éa").as_deref(), Some("a"));
        assert_eq!(cursor.position(), 0);
    }

    #[test]
    fn test_delete_at_end_is_none() {
        let mut cursor = LineCursor::at_end("ab");
        assert_eq!(cursor.delete("ab"), None);
    }

    #[test]
    fn test_movement_is_bounded() {
        let mut cursor = LineCursor::new();
        cursor.move_left();
        assert_eq!(cursor.position(), 0);
        cursor.move_end("abc");
        cursor.move_right("abc");
        assert_eq!(cursor.position(), 3);
        cursor.move_home();
        assert_eq!(cursor.position(), 0);
    }

    #[test]
    fn test_clamp_after_text_shrinks() {
        let mut cursor = LineCursor::at_end("abcdef");
        cursor.clamp("ab");
        assert_eq!(cursor.position(), 2);
    }

    #[test]
    fn test_display_column_counts_wide_chars() {
        let cursor = LineCursor::at_end("日本");
        assert_eq!(cursor.display_column("日本"), 4);
        assert_eq!(LineCursor::new().display_column("日本"), 0);
    }
}
