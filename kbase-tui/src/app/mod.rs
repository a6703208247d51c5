use crate::types::Entry;

mod listing;
mod navigation;
mod state;
pub use listing::{EntryListing, PLACEHOLDER};
pub use state::{DeleteContext, EntryForm, FormField, ListFocus, Page, TextInput};
use state::EditModal;

pub const ADD_CONFIRMATION: &str = "Entry saved successfully!";

pub struct App {
    pub running: bool,
    pub current_page: Page,
    pub status_message: Option<String>,
    /// Where entries are persisted, shown in the header.
    pub storage_label: String,

    // List page
    pub search_input: TextInput,
    pub list_focus: ListFocus,
    pub listing: EntryListing,
    pub selected_index: Option<usize>,
    pub list_scroll: usize, // Cards skipped from the top (clamped by the renderer each frame)

    // Add page
    pub add_form: EntryForm,

    // Overlays
    pub edit_modal: Option<EditModal>,
    pub delete_context: Option<DeleteContext>,
}

impl App {
    pub fn new(storage_label: impl Into<String>) -> Self {
        Self {
            running: true,
            current_page: Page::List,
            status_message: None,
            storage_label: storage_label.into(),
            search_input: TextInput::new(),
            list_focus: ListFocus::Search,
            listing: EntryListing::default(),
            selected_index: None,
            list_scroll: 0,
            add_form: EntryForm::default(),
            edit_modal: None,
            delete_context: None,
        }
    }

    pub fn quit(&mut self) {
        self.running = false;
    }

    pub fn set_status(&mut self, message: impl Into<String>) {
        self.status_message = Some(message.into());
    }

    pub fn clear_status(&mut self) {
        self.status_message = None;
    }

    /// Replace the visible cards, keeping the selection on the same entry when
    /// it is still visible and clamping it otherwise.
    pub fn show_listing(&mut self, entries: &[Entry], filter: &str) {
        let previous_id = self.selected_entry_id();
        self.listing = EntryListing::build(entries, filter);

        self.selected_index = if self.listing.is_empty() {
            None
        } else {
            let by_id = previous_id.and_then(|id| self.listing.position(id));
            match (by_id, self.selected_index) {
                (Some(idx), _) => Some(idx),
                (None, Some(idx)) => Some(idx.min(self.listing.len() - 1)),
                (None, None) => None,
            }
        };
        if self.selected_index.is_none() {
            self.list_focus = ListFocus::Search;
        }
    }

    pub fn selected_entry(&self) -> Option<&Entry> {
        self.selected_index.and_then(|idx| self.listing.cards.get(idx))
    }

    pub fn selected_entry_id(&self) -> Option<i64> {
        self.selected_entry().map(|entry| entry.id)
    }

    pub fn reset_add_form(&mut self) {
        self.add_form.reset();
    }

    /// Show the modal pre-populated with `entry`.
    pub fn open_edit_modal(&mut self, entry: &Entry) {
        self.edit_modal = Some(EditModal {
            entry_id: entry.id,
            form: EntryForm::from_entry(entry),
        });
    }

    /// Hide the modal, discarding its field values.
    pub fn close_edit_modal(&mut self) {
        self.edit_modal = None;
    }

    /// Ask for confirmation before deleting the selected card.
    pub fn enter_delete_confirm(&mut self) {
        let Some(entry) = self.selected_entry() else {
            return;
        };
        self.delete_context = Some(DeleteContext {
            entry_id: entry.id,
            display_title: entry.title.clone(),
        });
    }

    pub fn cancel_delete(&mut self) {
        self.delete_context = None;
    }
}
