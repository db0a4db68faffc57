use crate::engine::{generator, FormError};

/// Entries typed into the form plus the pricing-table toggle.
///
/// The entry list is never empty: it starts with one blank entry and the
/// last remaining entry cannot be removed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormState {
    entries: Vec<String>,
    pricing_enabled: bool,
}

impl FormState {
    pub fn new() -> Self {
        Self {
            entries: vec![String::new()],
            pricing_enabled: false,
        }
    }

    /// Start from pre-filled entries. An empty list yields one blank entry.
    pub fn with_entries<I, S>(entries: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut entries: Vec<String> = entries.into_iter().map(Into::into).collect();
        if entries.is_empty() {
            entries.push(String::new());
        }
        Self {
            entries,
            pricing_enabled: false,
        }
    }

    pub fn entries(&self) -> &[String] {
        &self.entries
    }

    pub fn entry(&self, index: usize) -> Option<&str> {
        self.entries.get(index).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn add_entry(&mut self) {
        self.entries.push(String::new());
    }

    pub fn remove_entry(&mut self, index: usize) -> Result<String, FormError> {
        self.check_index(index)?;
        if !self.can_remove() {
            return Err(FormError::LastEntry);
        }
        Ok(self.entries.remove(index))
    }

    /// Replace the entry verbatim. Trimming happens only at generation time.
    pub fn update_entry(&mut self, index: usize, text: impl Into<String>) -> Result<(), FormError> {
        self.check_index(index)?;
        self.entries[index] = text.into();
        Ok(())
    }

    pub fn can_remove(&self) -> bool {
        self.entries.len() > 1
    }

    pub fn can_generate(&self) -> bool {
        generator::has_content(&self.entries)
    }

    pub fn pricing_enabled(&self) -> bool {
        self.pricing_enabled
    }

    pub fn set_pricing(&mut self, enabled: bool) {
        self.pricing_enabled = enabled;
    }

    pub fn toggle_pricing(&mut self) -> bool {
        self.pricing_enabled = !self.pricing_enabled;
        self.pricing_enabled
    }

    fn check_index(&self, index: usize) -> Result<(), FormError> {
        if index < self.entries.len() {
            Ok(())
        } else {
            Err(FormError::OutOfBounds {
                index,
                len: self.entries.len(),
            })
        }
    }
}

impl Default for FormState {
    fn default() -> Self {
        Self::new()
    }
}
