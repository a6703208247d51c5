use crate::app::{App, ListFocus, Page};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use super::super::action_queue::{Action, ActionTx};
use super::enqueue_action;

pub(super) fn handle_list_key(key: KeyEvent, app: &mut App, action_tx: &ActionTx) {
    match app.list_focus {
        ListFocus::Search => handle_search_key(key, app, action_tx),
        ListFocus::Cards => handle_cards_key(key, app, action_tx),
    }
}

/// Every edit of the search text re-renders immediately and drops any stale status.
fn handle_search_key(key: KeyEvent, app: &mut App, action_tx: &ActionTx) {
    let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
    match key.code {
        KeyCode::Char('x') if ctrl => app.search_input.clear(),
        KeyCode::Char(c) if !ctrl => app.search_input.insert(c),
        KeyCode::Backspace => app.search_input.backspace(),
        KeyCode::Left => return app.search_input.move_left(),
        KeyCode::Right => return app.search_input.move_right(),
        KeyCode::Home => return app.search_input.home(),
        KeyCode::End | KeyCode::Esc => return app.search_input.end(),
        KeyCode::Tab | KeyCode::Down | KeyCode::Enter => return app.focus_cards(),
        _ => return,
    }
    app.clear_status();
    enqueue_action(action_tx, Action::Search);
}

fn handle_cards_key(key: KeyEvent, app: &mut App, action_tx: &ActionTx) {
    match key.code {
        KeyCode::Down | KeyCode::Char('j') => {
            app.clear_status();
            app.select_next();
        }
        KeyCode::Up | KeyCode::Char('k') => {
            app.clear_status();
            app.select_previous();
        }
        KeyCode::Enter | KeyCode::Char('e') | KeyCode::Char('E') => {
            if let Some(id) = app.selected_entry_id() {
                enqueue_action(action_tx, Action::OpenEdit { id });
            }
        }
        KeyCode::Delete | KeyCode::Char('d') | KeyCode::Char('D') => {
            app.enter_delete_confirm();
        }
        KeyCode::Char('/') | KeyCode::Tab | KeyCode::BackTab | KeyCode::Esc => {
            app.focus_search();
        }
        KeyCode::Char('a') | KeyCode::Char('A') => {
            app.reset_add_form();
            app.show_page(Page::AddNew);
        }
        KeyCode::Char('q') | KeyCode::Char('Q') => app.quit(),
        _ => {}
    }
}

#[cfg(test)]
mod tests {
    use super::super::tests::{app_with_entries, ctrl, drain, key};
    use super::*;

    use super::super::super::action_queue::channel;

    #[test]
    fn test_search_edit_and_card_moves_clear_saved_status() {
        let mut app = app_with_entries(&[1, 2]);
        let (tx, mut rx) = channel();
        app.set_status("Entry saved successfully!");

        handle_list_key(key(KeyCode::Left), &mut app, &tx);
        assert!(app.status_message.is_some());

        handle_list_key(key(KeyCode::Char('n')), &mut app, &tx);
        assert!(app.status_message.is_none());
        assert_eq!(drain(&mut rx), vec![Action::Search]);

        app.set_status("Entry saved successfully!");
        app.focus_cards();
        handle_list_key(key(KeyCode::Char('j')), &mut app, &tx);
        assert!(app.status_message.is_none());
    }

    #[test]
    fn test_each_search_keystroke_enqueues_render() {
        let mut app = app_with_entries(&[1, 2]);
        let (tx, mut rx) = channel();
        handle_list_key(key(KeyCode::Char('b')), &mut app, &tx);
        handle_list_key(key(KeyCode::Char('a')), &mut app, &tx);
        handle_list_key(key(KeyCode::Backspace), &mut app, &tx);
        assert_eq!(app.search_input.value, "b");
        assert_eq!(drain(&mut rx), vec![Action::Search; 3]);
    }

    #[test]
    fn test_q_is_text_while_searching() {
        let mut app = app_with_entries(&[1]);
        let (tx, _rx) = channel();
        handle_list_key(key(KeyCode::Char('q')), &mut app, &tx);
        assert!(app.running);
        assert_eq!(app.search_input.value, "q");
    }

    #[test]
    fn test_ctrl_x_clears_search() {
        let mut app = app_with_entries(&[1]);
        app.search_input.insert('z');
        let (tx, mut rx) = channel();
        handle_list_key(ctrl('x'), &mut app, &tx);
        assert!(app.search_input.value.is_empty());
        assert_eq!(drain(&mut rx), vec![Action::Search]);
    }

    #[test]
    fn test_edit_uses_selected_card_id() {
        let mut app = app_with_entries(&[1000, 2000]);
        let (tx, mut rx) = channel();
        handle_list_key(key(KeyCode::Tab), &mut app, &tx);
        handle_list_key(key(KeyCode::Char('j')), &mut app, &tx);
        handle_list_key(key(KeyCode::Char('e')), &mut app, &tx);
        assert_eq!(drain(&mut rx), vec![Action::OpenEdit { id: 1000 }]);
    }

    #[test]
    fn test_delete_asks_for_confirmation_first() {
        let mut app = app_with_entries(&[1000]);
        let (tx, mut rx) = channel();
        handle_list_key(key(KeyCode::Tab), &mut app, &tx);
        handle_list_key(key(KeyCode::Char('d')), &mut app, &tx);
        assert_eq!(app.delete_context.as_ref().map(|c| c.entry_id), Some(1000));
        assert!(drain(&mut rx).is_empty());
    }

    #[test]
    fn test_a_opens_add_page() {
        let mut app = app_with_entries(&[1]);
        let (tx, _rx) = channel();
        handle_list_key(key(KeyCode::Tab), &mut app, &tx);
        handle_list_key(key(KeyCode::Char('a')), &mut app, &tx);
        assert_eq!(app.current_page, Page::AddNew);
    }

    #[test]
    fn test_q_quits_from_cards() {
        let mut app = app_with_entries(&[1]);
        let (tx, _rx) = channel();
        handle_list_key(key(KeyCode::Tab), &mut app, &tx);
        handle_list_key(key(KeyCode::Char('q')), &mut app, &tx);
        assert!(!app.running);
    }
}
