use crate::types::Entry;

pub const PLACEHOLDER: &str = "No entries found. Try adding one!";

/// The cards currently on screen and the filter that produced them.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EntryListing {
    pub filter: String,
    pub cards: Vec<Entry>,
}

impl EntryListing {
    /// Visible entries: those matching `filter`, newest id first.
    pub fn build(entries: &[Entry], filter: &str) -> Self {
        let mut cards: Vec<Entry> = entries
            .iter()
            .filter(|entry| entry.matches(filter))
            .cloned()
            .collect();
        cards.sort_by(|a, b| b.id.cmp(&a.id));
        Self {
            filter: filter.to_string(),
            cards,
        }
    }

    /// When true the placeholder is shown instead of cards.
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn position(&self, id: i64) -> Option<usize> {
        self.cards.iter().position(|card| card.id == id)
    }
}
