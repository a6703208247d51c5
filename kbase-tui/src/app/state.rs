use crate::collection::EntryDraft;
use crate::types::{join_tags, Entry};

/// The two mutually exclusive pages.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Page {
    List,
    AddNew,
}

/// Which part of the list page receives typed characters.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListFocus {
    Search,
    Cards,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormField {
    Title,
    Content,
    Tags,
}

impl FormField {
    pub fn next(self) -> Self {
        match self {
            FormField::Title => FormField::Content,
            FormField::Content => FormField::Tags,
            FormField::Tags => FormField::Title,
        }
    }

    pub fn prev(self) -> Self {
        match self {
            FormField::Title => FormField::Tags,
            FormField::Content => FormField::Title,
            FormField::Tags => FormField::Content,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            FormField::Title => "Title",
            FormField::Content => "Content",
            FormField::Tags => "Tags (comma separated)",
        }
    }
}

/// A text input with mid-string cursor support.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct TextInput {
    pub value: String,
    pub cursor: usize,
}

impl TextInput {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_value(s: &str) -> Self {
        Self {
            value: s.to_string(),
            cursor: s.len(),
        }
    }

    /// Insert a character at the cursor position.
    pub fn insert(&mut self, c: char) {
        self.value.insert(self.cursor, c);
        self.cursor += c.len_utf8();
    }

    /// Delete the character immediately before the cursor (backspace).
    pub fn backspace(&mut self) {
        if self.cursor == 0 {
            return;
        }
        let new_cursor = self.prev_boundary(self.cursor);
        self.value.drain(new_cursor..self.cursor);
        self.cursor = new_cursor;
    }

    pub fn move_left(&mut self) {
        if self.cursor > 0 {
            self.cursor = self.prev_boundary(self.cursor);
        }
    }

    pub fn move_right(&mut self) {
        if self.cursor < self.value.len() {
            self.cursor = self.next_boundary(self.cursor);
        }
    }

    pub fn home(&mut self) {
        self.cursor = 0;
    }

    pub fn end(&mut self) {
        self.cursor = self.value.len();
    }

    pub fn clear(&mut self) {
        self.value.clear();
        self.cursor = 0;
    }

    /// Returns the string split at the cursor: (before, after).
    pub fn split_at_cursor(&self) -> (&str, &str) {
        self.value.split_at(self.cursor)
    }

    fn prev_boundary(&self, pos: usize) -> usize {
        self.value[..pos]
            .char_indices()
            .next_back()
            .map_or(0, |(i, _)| i)
    }

    fn next_boundary(&self, pos: usize) -> usize {
        self.value[pos..]
            .chars()
            .next()
            .map_or(pos, |c| pos + c.len_utf8())
    }
}

/// Title/content/tags inputs shared by the add page and the edit modal.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EntryForm {
    pub title: TextInput,
    pub content: TextInput,
    pub tags: TextInput,
    pub focused_field: FormField,
}

impl Default for EntryForm {
    fn default() -> Self {
        Self {
            title: TextInput::new(),
            content: TextInput::new(),
            tags: TextInput::new(),
            focused_field: FormField::Title,
        }
    }
}

impl EntryForm {
    pub fn from_entry(entry: &Entry) -> Self {
        Self {
            title: TextInput::with_value(&entry.title),
            content: TextInput::with_value(&entry.content),
            tags: TextInput::with_value(&join_tags(&entry.tags)),
            focused_field: FormField::Title,
        }
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }

    pub fn input(&self, field: FormField) -> &TextInput {
        match field {
            FormField::Title => &self.title,
            FormField::Content => &self.content,
            FormField::Tags => &self.tags,
        }
    }

    pub fn focused_input_mut(&mut self) -> &mut TextInput {
        match self.focused_field {
            FormField::Title => &mut self.title,
            FormField::Content => &mut self.content,
            FormField::Tags => &mut self.tags,
        }
    }

    pub fn next_field(&mut self) {
        self.focused_field = self.focused_field.next();
    }

    pub fn prev_field(&mut self) {
        self.focused_field = self.focused_field.prev();
    }

    pub fn is_on_last_field(&self) -> bool {
        self.focused_field == FormField::Tags
    }

    pub fn draft(&self) -> EntryDraft {
        EntryDraft::from_fields(&self.title.value, &self.content.value, &self.tags.value)
    }
}

/// The edit modal while shown. `entry_id` plays the role of the hidden id field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EditModal {
    pub entry_id: i64,
    pub form: EntryForm,
}

/// Pending delete awaiting a yes/no answer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeleteContext {
    pub entry_id: i64,
    pub display_title: String,
}
