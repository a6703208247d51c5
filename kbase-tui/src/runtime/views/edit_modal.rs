use crate::app::App;
use crossterm::event::KeyEvent;

use super::super::action_queue::{Action, ActionTx};
use super::enqueue_action;
use super::form::{handle_form_key, FormKey};

pub(super) fn handle_edit_modal_key(key: KeyEvent, app: &mut App, action_tx: &ActionTx) {
    let Some(modal) = app.edit_modal.as_mut() else {
        return;
    };
    match handle_form_key(key, &mut modal.form) {
        FormKey::Submit => enqueue_action(action_tx, Action::SubmitEdit),
        FormKey::Cancel => app.close_edit_modal(),
        FormKey::Edited | FormKey::Ignored => {}
    }
}
