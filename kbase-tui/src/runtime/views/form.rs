use crate::app::EntryForm;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// What a key press on a form asks the caller to do.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(super) enum FormKey {
    Submit,
    Cancel,
    Edited,
    Ignored,
}

/// Field editing shared by the add page and the edit modal.
pub(super) fn handle_form_key(key: KeyEvent, form: &mut EntryForm) -> FormKey {
    let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
    match key.code {
        KeyCode::Char('s') if ctrl => FormKey::Submit,
        KeyCode::Char('x') if ctrl => {
            form.focused_input_mut().clear();
            FormKey::Edited
        }
        KeyCode::Esc => FormKey::Cancel,
        KeyCode::Enter => {
            if form.is_on_last_field() {
                FormKey::Submit
            } else {
                form.next_field();
                FormKey::Edited
            }
        }
        KeyCode::Tab | KeyCode::Down => {
            form.next_field();
            FormKey::Edited
        }
        KeyCode::BackTab | KeyCode::Up => {
            form.prev_field();
            FormKey::Edited
        }
        KeyCode::Left => {
            form.focused_input_mut().move_left();
            FormKey::Edited
        }
        KeyCode::Right => {
            form.focused_input_mut().move_right();
            FormKey::Edited
        }
        KeyCode::Home => {
            form.focused_input_mut().home();
            FormKey::Edited
        }
        KeyCode::End => {
            form.focused_input_mut().end();
            FormKey::Edited
        }
        KeyCode::Backspace => {
            form.focused_input_mut().backspace();
            FormKey::Edited
        }
        KeyCode::Char(c) if !ctrl => {
            form.focused_input_mut().insert(c);
            FormKey::Edited
        }
        _ => FormKey::Ignored,
    }
}

#[cfg(test)]
mod tests {
    use super::super::tests::{ctrl, key};
    use super::*;
    use crate::app::FormField;

    fn type_str(form: &mut EntryForm, s: &str) {
        for c in s.chars() {
            handle_form_key(key(KeyCode::Char(c)), form);
        }
    }

    #[test]
    fn test_typing_fills_focused_field_then_enter_advances() {
        let mut form = EntryForm::default();
        type_str(&mut form, "Recipe");
        assert_eq!(handle_form_key(key(KeyCode::Enter), &mut form), FormKey::Edited);
        type_str(&mut form, "Bake at 350");
        handle_form_key(key(KeyCode::Tab), &mut form);
        type_str(&mut form, "food, baking");

        assert_eq!(form.focused_field, FormField::Tags);
        assert_eq!(form.title.value, "Recipe");
        assert_eq!(form.content.value, "Bake at 350");
        assert_eq!(form.tags.value, "food, baking");
    }

    #[test]
    fn test_enter_on_last_field_submits() {
        let mut form = EntryForm::default();
        form.focused_field = FormField::Tags;
        assert_eq!(handle_form_key(key(KeyCode::Enter), &mut form), FormKey::Submit);
    }

    #[test]
    fn test_ctrl_s_submits_from_any_field() {
        let mut form = EntryForm::default();
        assert_eq!(handle_form_key(ctrl('s'), &mut form), FormKey::Submit);
    }

    #[test]
    fn test_ctrl_x_clears_only_focused_field() {
        let mut form = EntryForm::default();
        type_str(&mut form, "title");
        handle_form_key(key(KeyCode::Tab), &mut form);
        type_str(&mut form, "body");
        handle_form_key(ctrl('x'), &mut form);
        assert_eq!(form.title.value, "title");
        assert!(form.content.value.is_empty());
    }

    #[test]
    fn test_esc_cancels() {
        let mut form = EntryForm::default();
        assert_eq!(handle_form_key(key(KeyCode::Esc), &mut form), FormKey::Cancel);
    }
}
