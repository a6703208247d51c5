use crate::app::App;
use crate::store::{EntryStore, KeyValueStorage};
use crate::ui;
use anyhow::Result;
use crossterm::event::{self, Event, KeyEventKind};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io;
use tracing::error;

use super::action_queue::channel;
use super::actions::run_action;
use super::views::handle_view_key;

pub fn run_app<S: KeyValueStorage>(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut App,
    store: &mut EntryStore<S>,
) -> Result<()> {
    let (action_tx, mut action_rx) = channel();

    loop {
        terminal.draw(|f| ui::render(f, app))?;

        // Blocks until the next event; resizes fall through to a redraw.
        if let Event::Key(key) = event::read()? {
            if key.kind == KeyEventKind::Press {
                handle_view_key(key, app, &action_tx);
            }
        }

        while let Ok(action) = action_rx.try_recv() {
            if let Err(e) = run_action(action.clone(), app, store) {
                error!(?action, error = %e, "action failed, changes not persisted");
            }
        }

        if !app.running {
            break;
        }
    }

    Ok(())
}
