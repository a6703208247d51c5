use tokio::sync::mpsc::{self, UnboundedReceiver, UnboundedSender};

/// Work that needs the store. Key handlers enqueue these; the event loop runs
/// them to completion before the next event is read.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(super) enum Action {
    /// Re-read the store, render unfiltered and show the list page.
    ViewAll,
    /// Re-render with the current search text.
    Search,
    SubmitAdd,
    OpenEdit { id: i64 },
    SubmitEdit,
    ConfirmDelete,
}

pub(super) type ActionTx = UnboundedSender<Action>;
pub(super) type ActionRx = UnboundedReceiver<Action>;

pub(super) fn channel() -> (ActionTx, ActionRx) {
    mpsc::unbounded_channel()
}
