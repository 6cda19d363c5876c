use serde::{Deserialize, Serialize};

/// Ordered, editable sequence of single-line entries ("Achievements",
/// "Areas of Expertise", "Documents").
///
/// Entries stay exactly as typed while the form is open, blank rows included,
/// so the inputs keep their positions. [`ListField::pruned`] produces the
/// submitted value.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ListField {
    entries: Vec<String>,
}

impl ListField {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_entries<I, S>(entries: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            entries: entries.into_iter().map(Into::into).collect(),
        }
    }

    pub fn entries(&self) -> &[String] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Append an entry at the end
    pub fn push(&mut self, value: impl Into<String>) {
        self.entries.push(value.into());
    }

    /// Append an empty row for the user to fill in
    pub fn push_blank(&mut self) {
        self.entries.push(String::new());
    }

    /// Remove the entry at `index`, shifting later entries up
    pub fn remove_at(&mut self, index: usize) -> Option<String> {
        (index < self.entries.len()).then(|| self.entries.remove(index))
    }

    /// Replace the entry at `index`. Returns `false` when out of range.
    pub fn set(&mut self, index: usize, value: impl Into<String>) -> bool {
        match self.entries.get_mut(index) {
            Some(slot) => {
                *slot = value.into();
                true
            }
            None => false,
        }
    }

    /// Trimmed entries with blanks dropped, in their original order
    pub fn pruned(&self) -> Vec<String> {
        self.entries
            .iter()
            .map(|e| e.trim())
            .filter(|e| !e.is_empty())
            .map(str::to_string)
            .collect()
    }
}
