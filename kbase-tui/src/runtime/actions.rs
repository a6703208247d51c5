use crate::app::{App, Page, ADD_CONFIRMATION};
use crate::collection::{apply, Command};
use crate::store::{EntryStore, KeyValueStorage, StoreError};
use crate::time_utils::now_millis;
use tracing::{debug, info};

use super::action_queue::Action;

/// First paint: list page, full unfiltered render.
pub fn load_initial<S: KeyValueStorage>(app: &mut App, store: &EntryStore<S>) {
    handle_view_all(app, store);
}

pub(super) fn run_action<S: KeyValueStorage>(
    action: Action,
    app: &mut App,
    store: &mut EntryStore<S>,
) -> Result<(), StoreError> {
    match action {
        Action::ViewAll => {
            handle_view_all(app, store);
        }
        Action::Search => {
            let filter = app.search_input.value.clone();
            render_entries(app, store, &filter);
        }
        Action::SubmitAdd => {
            handle_add_submit(app, store, now_millis())?;
        }
        Action::OpenEdit { id } => {
            handle_open_edit(app, store, id);
        }
        Action::SubmitEdit => {
            handle_edit_submit(app, store)?;
        }
        Action::ConfirmDelete => {
            handle_confirm_delete(app, store)?;
        }
    }
    Ok(())
}

/// Re-read the store and rebuild the visible cards.
fn render_entries<S: KeyValueStorage>(app: &mut App, store: &EntryStore<S>, filter: &str) {
    let entries = store.get_entries();
    app.show_listing(&entries, filter);
}

fn render_with_current_search<S: KeyValueStorage>(app: &mut App, store: &EntryStore<S>) {
    let filter = app.search_input.value.clone();
    render_entries(app, store, &filter);
}

fn handle_view_all<S: KeyValueStorage>(app: &mut App, store: &EntryStore<S>) {
    render_entries(app, store, "");
    app.show_page(Page::List);
}

/// Persist a new entry from the add form. When the write fails nothing after
/// it happens: the form keeps its values and the add page stays visible.
fn handle_add_submit<S: KeyValueStorage>(
    app: &mut App,
    store: &mut EntryStore<S>,
    now_ms: i64,
) -> Result<(), StoreError> {
    let command = Command::Add {
        id: now_ms,
        draft: app.add_form.draft(),
    };
    let applied = apply(store.get_entries(), command);
    store.save_entries(&applied.entries)?;
    info!(id = applied.outcome.id(), "entry added");

    app.reset_add_form();
    render_entries(app, store, "");
    app.show_page(Page::List);
    app.set_status(ADD_CONFIRMATION);
    Ok(())
}

fn handle_open_edit<S: KeyValueStorage>(app: &mut App, store: &EntryStore<S>, id: i64) {
    match store.get_entries().iter().find(|entry| entry.id == id) {
        Some(entry) => app.open_edit_modal(entry),
        None => debug!(id, "edit requested for missing entry"),
    }
}

/// Save the modal's values over the entry it was opened for. A missing entry
/// leaves both the store and the modal untouched.
fn handle_edit_submit<S: KeyValueStorage>(
    app: &mut App,
    store: &mut EntryStore<S>,
) -> Result<(), StoreError> {
    let Some(modal) = &app.edit_modal else {
        return Ok(());
    };
    let command = Command::Update {
        id: modal.entry_id,
        draft: modal.form.draft(),
    };
    let applied = apply(store.get_entries(), command);
    if !applied.changed() {
        debug!(id = applied.outcome.id(), "edit target no longer exists");
        return Ok(());
    }
    store.save_entries(&applied.entries)?;
    info!(id = applied.outcome.id(), "entry updated");

    app.close_edit_modal();
    render_with_current_search(app, store);
    Ok(())
}

fn handle_confirm_delete<S: KeyValueStorage>(
    app: &mut App,
    store: &mut EntryStore<S>,
) -> Result<(), StoreError> {
    let Some(ctx) = app.delete_context.take() else {
        return Ok(());
    };
    let applied = apply(store.get_entries(), Command::Delete { id: ctx.entry_id });
    if applied.changed() {
        store.save_entries(&applied.entries)?;
        info!(id = applied.outcome.id(), "entry deleted");
    } else {
        debug!(id = applied.outcome.id(), "delete target no longer exists");
    }
    render_with_current_search(app, store);
    Ok(())
}
