//! State transitions over the entry collection, kept free of storage and UI.

use crate::types::{parse_tags, Entry};

/// Field values as submitted from the add form or the edit modal.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EntryDraft {
    pub title: String,
    pub content: String,
    pub tags: Vec<String>,
}

impl EntryDraft {
    pub fn from_fields(title: &str, content: &str, raw_tags: &str) -> Self {
        Self {
            title: title.to_string(),
            content: content.to_string(),
            tags: parse_tags(raw_tags),
        }
    }

    fn into_entry(self, id: i64) -> Entry {
        Entry {
            id,
            title: self.title,
            content: self.content,
            tags: self.tags,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Append a new entry. `id` is the creation time in ms.
    Add { id: i64, draft: EntryDraft },
    /// Replace every field of the entry with `id`, keeping its position.
    Update { id: i64, draft: EntryDraft },
    Delete { id: i64 },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Added(i64),
    Updated(i64),
    Deleted(i64),
    NotFound(i64),
}

impl Outcome {
    pub fn id(self) -> i64 {
        match self {
            Outcome::Added(id)
            | Outcome::Updated(id)
            | Outcome::Deleted(id)
            | Outcome::NotFound(id) => id,
        }
    }
}

#[derive(Debug)]
pub struct Applied {
    pub entries: Vec<Entry>,
    pub outcome: Outcome,
}

impl Applied {
    /// False when the command targeted an id that is not in the collection.
    pub fn changed(&self) -> bool {
        !matches!(self.outcome, Outcome::NotFound(_))
    }
}

pub fn apply(mut entries: Vec<Entry>, command: Command) -> Applied {
    let outcome = match command {
        Command::Add { id, draft } => {
            let id = next_free_id(&entries, id);
            entries.push(draft.into_entry(id));
            Outcome::Added(id)
        }
        Command::Update { id, draft } => match entries.iter_mut().find(|e| e.id == id) {
            Some(entry) => {
                *entry = draft.into_entry(id);
                Outcome::Updated(id)
            }
            None => Outcome::NotFound(id),
        },
        Command::Delete { id } => {
            let before = entries.len();
            entries.retain(|e| e.id != id);
            if entries.len() == before {
                Outcome::NotFound(id)
            } else {
                Outcome::Deleted(id)
            }
        }
    };
    Applied { entries, outcome }
}

// Two entries created within the same millisecond would share an id.
fn next_free_id(entries: &[Entry], candidate: i64) -> i64 {
    let mut id = candidate;
    while entries.iter().any(|e| e.id == id) {
        id += 1;
    }
    id
}
