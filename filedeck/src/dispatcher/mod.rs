//! Validates requested actions, runs their effects and notifies the host.

mod effects;
mod payload;

pub use payload::{ActionPayload, ClickTarget, FileActionData, Modifiers};

use crate::actions::{
    ActionEffect, FileAction, SelectionTransformInput, SortOrder, ids,
};
use crate::browser::FileBrowser;
use crate::dnd::DropRejection;
use crate::error::{FileBrowserError, Result};
use crate::file::FileId;
use crate::store::StoreCommand;

/// Nested requests allowed before a request is refused.
pub const MAX_DISPATCH_DEPTH: usize = 16;

/// Host integration point notified after every executed action.
pub trait FileActionHandler {
    fn on_file_action(&mut self, data: &FileActionData) -> anyhow::Result<()>;
}

impl<F> FileActionHandler for F
where
    F: FnMut(&FileActionData) -> anyhow::Result<()>,
{
    fn on_file_action(&mut self, data: &FileActionData) -> anyhow::Result<()> {
        self(data)
    }
}

/// Result of a request that passed the registry lookup.
#[derive(Debug)]
pub enum ActionOutcome {
    /// Effects ran and the host was notified.
    Completed,
    /// The action is disabled for the current state. Not an error.
    Rejected(RejectReason),
    /// An effect or the host callback failed; already logged.
    Failed(FileBrowserError),
}

impl ActionOutcome {
    pub fn is_completed(&self) -> bool {
        matches!(self, ActionOutcome::Completed)
    }

    pub fn is_rejected(&self) -> bool {
        matches!(self, ActionOutcome::Rejected(_))
    }
}

/// Why a request was silently refused.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RejectReason {
    SelectionRequired,
    /// A touched file does not satisfy the action's file filter.
    FilteredOut(FileId),
    UnknownFile(FileId),
    NoHotkeyBinding(String),
    DragAndDropDisabled,
    NotDraggable(FileId),
    NoActiveDrag,
    Drop(DropRejection),
}

impl FileBrowser {
    /// Request the action registered under `action_id`.
    ///
    /// Disabled actions are rejected silently. Failures of effects and of
    /// the host callback are logged and reported as
    /// [`ActionOutcome::Failed`]; only an unknown id or runaway nesting
    /// is returned as an error.
    pub fn request_action(
        &mut self,
        action_id: &str,
        payload: ActionPayload,
    ) -> Result<ActionOutcome> {
        let action = self.registry.lookup(action_id)?.clone();
        if self.depth >= MAX_DISPATCH_DEPTH {
            return Err(FileBrowserError::DispatchDepthExceeded {
                action_id: action_id.to_string(),
                depth: self.depth,
            });
        }

        self.track_selection(|browser| {
            browser.depth += 1;
            let outcome = browser.run_action(&action, payload);
            browser.depth -= 1;
            outcome
        })
    }

    /// Run `f`; when it is a top-level mutation that changed the
    /// selection, notify the host once afterwards.
    pub(crate) fn track_selection<R>(
        &mut self,
        f: impl FnOnce(&mut Self) -> R,
    ) -> R {
        if self.depth > 0 {
            return f(self);
        }

        let before = self.store.state().selection().clone();
        let result = f(self);
        if self.store.state().selection() != &before {
            self.notify_selection_change();
        }
        result
    }

    fn notify_selection_change(&mut self) {
        let selection = self.store.state().selection().clone();
        self.depth += 1;
        let outcome = self.request_action(
            ids::CHANGE_SELECTION,
            ActionPayload::ChangeSelection { selection },
        );
        self.depth -= 1;
        if let Err(err) = outcome {
            log::error!("selection change notification failed: {err}");
        }
    }

    fn run_action(
        &mut self,
        action: &FileAction,
        payload: ActionPayload,
    ) -> Result<ActionOutcome> {
        let state = self.store.state();

        if action.needs_selection() && state.selection().is_empty() {
            return Ok(ActionOutcome::Rejected(
                RejectReason::SelectionRequired,
            ));
        }

        if let Some(filter) = action.file_filter() {
            let failing = match payload.target_files() {
                Some(files) => files
                    .into_iter()
                    .find(|file| !filter.matches(file))
                    .map(|file| file.id.clone()),
                None => state
                    .selected_files()
                    .into_iter()
                    .find(|file| !filter.matches(file))
                    .map(|file| file.id),
            };
            if let Some(file_id) = failing {
                return Ok(ActionOutcome::Rejected(RejectReason::FilteredOut(
                    file_id,
                )));
            }
        }

        let mut data = FileActionData::new(
            action.id(),
            payload,
            action.file_filter(),
            state,
        );

        if let Some(transform) = action.selection_transform() {
            let state = self.store.state();
            let file_ids = state.selectable_file_ids();
            let next = transform.apply(&SelectionTransformInput {
                file_ids: &file_ids,
                hidden_file_ids: state.hidden_file_ids(),
                prev_selection: state.selection(),
            });
            if let Some(next) = next {
                self.store.dispatch(StoreCommand::SetSelection(next));
            }
        }

        self.apply_metadata(action);

        match action.effect().cloned() {
            Some(ActionEffect::Custom(effect)) => {
                if let Err(err) = effect.apply(&data, self) {
                    return Ok(effect_failed(action.id(), err));
                }
            },
            Some(builtin) => self.apply_builtin(&builtin, &data)?,
            None => {},
        }

        data.refresh(action.file_filter(), self.store.state());
        if let Some(handler) = self.handler.as_mut() {
            if let Err(err) = handler.on_file_action(&data) {
                return Ok(effect_failed(action.id(), err));
            }
        }

        Ok(ActionOutcome::Completed)
    }

    /// Sort, view and option changes implied by action metadata.
    fn apply_metadata(&mut self, action: &FileAction) {
        if let Some(key) = action.sort_key() {
            let order = match self.store.state().sort() {
                Some(active) if active.action_id == action.id() => {
                    active.order.toggled()
                },
                _ => SortOrder::Asc,
            };
            self.store.dispatch(StoreCommand::SetSort {
                action_id: action.id().to_string(),
                key,
                order,
            });
        }

        if let Some(view) = action.file_view() {
            self.store.dispatch(StoreCommand::SetView(view));
        }

        if let Some(option) = action.option() {
            let current = self
                .store
                .state()
                .option(&option.id)
                .unwrap_or(option.default_value);
            self.store.dispatch(StoreCommand::SetOption {
                id: option.id.clone(),
                value: !current,
            });
        }
    }
}

fn effect_failed(action_id: &str, err: anyhow::Error) -> ActionOutcome {
    let error = FileBrowserError::ActionEffect {
        action_id: action_id.to_string(),
        message: format!("{err:#}"),
    };
    log::error!("{error}");
    ActionOutcome::Failed(error)
}
