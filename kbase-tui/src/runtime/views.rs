use crate::app::{App, Page};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use super::action_queue::{Action, ActionTx};

mod add_entry;
mod confirm_delete;
mod edit_modal;
mod form;
mod list;

fn enqueue_action(action_tx: &ActionTx, action: Action) {
    let _ = action_tx.send(action);
}

/// Dispatch a key press. Overlays capture the keyboard: the delete dialog
/// first, then the edit modal, then page navigation and the current page.
pub(super) fn handle_view_key(key: KeyEvent, app: &mut App, action_tx: &ActionTx) {
    if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
        app.quit();
        return;
    }

    if app.delete_context.is_some() {
        confirm_delete::handle_confirm_delete_key(key, app, action_tx);
        return;
    }
    if app.edit_modal.is_some() {
        edit_modal::handle_edit_modal_key(key, app, action_tx);
        return;
    }
    if handle_navigation_key(key, app, action_tx) {
        return;
    }

    match app.current_page {
        Page::List => list::handle_list_key(key, app, action_tx),
        Page::AddNew => add_entry::handle_add_entry_key(key, app, action_tx),
    }
}

/// `F1`/`Ctrl+L` view all, `F2`/`Ctrl+N` add new. Returns true when handled.
fn handle_navigation_key(key: KeyEvent, app: &mut App, action_tx: &ActionTx) -> bool {
    let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
    match key.code {
        KeyCode::F(1) => navigate_view_all(action_tx),
        KeyCode::Char('l') if ctrl => navigate_view_all(action_tx),
        KeyCode::F(2) => navigate_add_new(app),
        KeyCode::Char('n') if ctrl => navigate_add_new(app),
        _ => return false,
    }
    true
}

fn navigate_view_all(action_tx: &ActionTx) {
    enqueue_action(action_tx, Action::ViewAll);
}

fn navigate_add_new(app: &mut App) {
    app.reset_add_form();
    app.show_page(Page::AddNew);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::{DeleteContext, ListFocus};
    use crate::types::Entry;

    use super::super::action_queue::{channel, ActionRx};

    pub(super) fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    pub(super) fn ctrl(c: char) -> KeyEvent {
        KeyEvent::new(KeyCode::Char(c), KeyModifiers::CONTROL)
    }

    pub(super) fn drain(rx: &mut ActionRx) -> Vec<Action> {
        let mut actions = Vec::new();
        while let Ok(action) = rx.try_recv() {
            actions.push(action);
        }
        actions
    }

    pub(super) fn app_with_entries(ids: &[i64]) -> App {
        let entries: Vec<Entry> = ids
            .iter()
            .map(|&id| Entry {
                id,
                title: format!("entry {id}"),
                content: String::new(),
                tags: Vec::new(),
            })
            .collect();
        let mut app = App::new("memory");
        app.show_listing(&entries, "");
        app
    }

    #[test]
    fn test_ctrl_c_quits_even_with_modal_open() {
        let mut app = app_with_entries(&[1]);
        app.open_edit_modal(&app.listing.cards[0].clone());
        let (tx, _rx) = channel();
        handle_view_key(ctrl('c'), &mut app, &tx);
        assert!(!app.running);
    }

    #[test]
    fn test_f1_enqueues_view_all() {
        let mut app = app_with_entries(&[]);
        app.show_page(Page::AddNew);
        let (tx, mut rx) = channel();
        handle_view_key(key(KeyCode::F(1)), &mut app, &tx);
        assert_eq!(drain(&mut rx), vec![Action::ViewAll]);
    }

    #[test]
    fn test_add_new_resets_form_and_switches_page() {
        let mut app = app_with_entries(&[]);
        app.add_form.title.insert('x');
        let (tx, mut rx) = channel();
        handle_view_key(ctrl('n'), &mut app, &tx);
        assert_eq!(app.current_page, Page::AddNew);
        assert!(app.add_form.title.value.is_empty());
        assert!(drain(&mut rx).is_empty());
    }

    #[test]
    fn test_modal_blocks_navigation() {
        let mut app = app_with_entries(&[1]);
        app.open_edit_modal(&app.listing.cards[0].clone());
        let (tx, mut rx) = channel();
        handle_view_key(key(KeyCode::F(2)), &mut app, &tx);
        assert_eq!(app.current_page, Page::List);
        assert!(drain(&mut rx).is_empty());
    }

    #[test]
    fn test_delete_dialog_captures_keys() {
        let mut app = app_with_entries(&[1]);
        app.list_focus = ListFocus::Cards;
        app.delete_context = Some(DeleteContext {
            entry_id: 1,
            display_title: "entry 1".to_string(),
        });
        let (tx, mut rx) = channel();
        handle_view_key(key(KeyCode::Char('q')), &mut app, &tx);
        assert!(app.running);
        assert!(drain(&mut rx).is_empty());
    }
}
