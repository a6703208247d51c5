use crate::app::App;
use crossterm::event::KeyEvent;

use super::super::action_queue::{Action, ActionTx};
use super::enqueue_action;
use super::form::{handle_form_key, FormKey};

pub(super) fn handle_add_entry_key(key: KeyEvent, app: &mut App, action_tx: &ActionTx) {
    match handle_form_key(key, &mut app.add_form) {
        FormKey::Submit => enqueue_action(action_tx, Action::SubmitAdd),
        // Leaving the add page is the same as choosing "view all".
        FormKey::Cancel => enqueue_action(action_tx, Action::ViewAll),
        FormKey::Edited => app.clear_status(),
        FormKey::Ignored => {}
    }
}
