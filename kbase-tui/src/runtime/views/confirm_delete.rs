use crate::app::App;
use crossterm::event::{KeyCode, KeyEvent};

use super::super::action_queue::{Action, ActionTx};
use super::enqueue_action;

pub(super) fn handle_confirm_delete_key(key: KeyEvent, app: &mut App, action_tx: &ActionTx) {
    match key.code {
        KeyCode::Char('y') | KeyCode::Char('Y') | KeyCode::Enter => {
            enqueue_action(action_tx, Action::ConfirmDelete);
        }
        KeyCode::Char('n') | KeyCode::Char('N') | KeyCode::Esc => {
            app.cancel_delete();
        }
        _ => {}
    }
}

#[cfg(test)]
mod tests {
    use super::super::tests::{app_with_entries, drain, key};
    use super::*;
    use crate::app::DeleteContext;

    use super::super::super::action_queue::channel;

    fn pending_delete() -> App {
        let mut app = app_with_entries(&[1000]);
        app.delete_context = Some(DeleteContext {
            entry_id: 1000,
            display_title: "entry 1000".to_string(),
        });
        app
    }

    #[test]
    fn test_yes_enqueues_delete() {
        let mut app = pending_delete();
        let (tx, mut rx) = channel();
        handle_confirm_delete_key(key(KeyCode::Char('y')), &mut app, &tx);
        assert_eq!(drain(&mut rx), vec![Action::ConfirmDelete]);
        assert!(app.delete_context.is_some());
    }

    #[test]
    fn test_no_cancels_without_action() {
        let mut app = pending_delete();
        let (tx, mut rx) = channel();
        handle_confirm_delete_key(key(KeyCode::Esc), &mut app, &tx);
        assert!(drain(&mut rx).is_empty());
        assert!(app.delete_context.is_none());
    }
}
