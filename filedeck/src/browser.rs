use std::rc::Rc;
use std::time::{Duration, Instant};

use crate::actions::{
    ActionRegistry, FileAction, SortOrder, default_actions, essential_actions,
    ids,
};
use crate::click::{ClickCounter, ClickType};
use crate::config::BrowserConfig;
use crate::dispatcher::{
    ActionOutcome, ActionPayload, ClickTarget, FileActionHandler, Modifiers,
    RejectReason,
};
use crate::dnd::{DragState, DropRejection, HoverOpen, check_drop};
use crate::error::Result;
use crate::file::FileData;
use crate::sort::SortCollator;
use crate::store::{
    BrowserState, SearchPredicate, Store, StoreCommand, StoreEvent,
    default_search_predicate,
};

/// Pure rename hook: `(proposed, file) -> sanitized`.
pub type RenameSanitizer = dyn Fn(&str, &FileData) -> String;

/// One headless file browser instance.
///
/// Owns its store, action registry and gesture timers. Presentation code
/// feeds raw gestures in and reads [`BrowserState`] and drained
/// [`StoreEvent`]s back.
pub struct FileBrowser {
    pub(crate) store: Store,
    pub(crate) registry: ActionRegistry,
    pub(crate) handler: Option<Box<dyn FileActionHandler>>,
    pub(crate) sanitizer: Option<Box<RenameSanitizer>>,
    pub(crate) clicks: ClickCounter,
    pub(crate) hover: HoverOpen,
    pub(crate) depth: usize,
}

impl FileBrowser {
    pub fn builder(config: BrowserConfig) -> FileBrowserBuilder {
        FileBrowserBuilder::new(config)
    }

    // --- Read access ---

    pub fn state(&self) -> &BrowserState {
        self.store.state()
    }

    pub fn registry(&self) -> &ActionRegistry {
        &self.registry
    }

    pub fn config(&self) -> &BrowserConfig {
        self.store.state().config()
    }

    /// Whether a hover-to-open is waiting for its delay.
    pub fn hover_open_pending(&self) -> bool {
        self.hover.is_pending()
    }

    // --- Store access ---

    /// Apply an internal mutation directly. Meant for action effects.
    pub fn dispatch(&mut self, command: StoreCommand) -> bool {
        self.store.dispatch(command)
    }

    pub fn drain_events(&mut self) -> Vec<StoreEvent> {
        self.store.drain_events()
    }

    // --- Host data ---

    pub fn set_files(&mut self, files: Vec<FileData>) {
        self.track_selection(|browser| {
            browser.store.dispatch(StoreCommand::SetFiles(files))
        });
    }

    pub fn set_folder_chain(&mut self, folder_chain: Vec<FileData>) {
        self.store.dispatch(StoreCommand::SetFolderChain(folder_chain));
    }

    pub fn set_search(&mut self, search: impl Into<String>) {
        let search = search.into();
        self.track_selection(|browser| {
            browser.store.dispatch(StoreCommand::SetSearch(search))
        });
    }

    // --- Pointer and keyboard gestures ---

    /// Raw mouse click; the click counter decides single or double.
    pub fn mouse_click(
        &mut self,
        file_id: &str,
        target: ClickTarget,
        modifiers: Modifiers,
        now: Instant,
    ) -> Result<ActionOutcome> {
        let click_type = self.clicks.register(file_id, now);
        self.click_file(file_id, click_type, target, modifiers)
    }

    /// Mouse click whose type was resolved by the caller.
    pub fn click_file(
        &mut self,
        file_id: &str,
        click_type: ClickType,
        target: ClickTarget,
        modifiers: Modifiers,
    ) -> Result<ActionOutcome> {
        let Some((file, index)) = self.displayed_file(file_id) else {
            return Ok(unknown_file(file_id));
        };
        self.request_action(
            ids::MOUSE_CLICK_FILE,
            ActionPayload::MouseClick {
                file,
                index,
                click_type,
                modifiers,
                target,
            },
        )
    }

    /// Enter or Space on a focused entry.
    pub fn keyboard_click(
        &mut self,
        file_id: &str,
        enter_key: bool,
        modifiers: Modifiers,
    ) -> Result<ActionOutcome> {
        let Some((file, index)) = self.displayed_file(file_id) else {
            return Ok(unknown_file(file_id));
        };
        self.request_action(
            ids::KEYBOARD_CLICK_FILE,
            ActionPayload::KeyboardClick {
                file,
                index,
                enter_key,
                modifiers,
            },
        )
    }

    /// Request the first action bound to `combo`.
    pub fn hotkey(&mut self, combo: &str) -> Result<ActionOutcome> {
        let action_id = self
            .registry
            .actions_for_hotkey(combo)
            .first()
            .map(|action| action.id().to_string());
        match action_id {
            Some(action_id) => {
                self.request_action(&action_id, ActionPayload::None)
            },
            None => Ok(ActionOutcome::Rejected(
                RejectReason::NoHotkeyBinding(combo.to_string()),
            )),
        }
    }

    /// Click on empty space outside every entry.
    pub fn outside_click(&mut self) {
        let config = self.config();
        if !config.clear_selection_on_outside_click || config.disable_selection
        {
            return;
        }
        self.clicks.reset();
        self.track_selection(|browser| {
            browser.store.dispatch(StoreCommand::ClearSelection)
        });
    }

    /// Right click on `file_id`, or on the background when `None`.
    pub fn context_menu(
        &mut self,
        file_id: Option<&str>,
        client_x: f32,
        client_y: f32,
    ) -> Result<ActionOutcome> {
        self.request_action(
            ids::OPEN_FILE_CONTEXT_MENU,
            ActionPayload::ContextMenu {
                trigger_file_id: file_id.map(str::to_string),
                client_x,
                client_y,
            },
        )
    }

    pub fn close_context_menu(&mut self) {
        self.store.dispatch(StoreCommand::HideContextMenu);
    }

    // --- Renaming ---

    pub fn start_renaming(&mut self, file_id: &str) -> Result<ActionOutcome> {
        self.request_action(
            ids::START_RENAMING_FILE,
            ActionPayload::StartRenaming {
                file_id: file_id.to_string(),
            },
        )
    }

    /// Commit `target_name`, or cancel with `None`.
    pub fn end_renaming(
        &mut self,
        target_name: Option<&str>,
    ) -> Result<ActionOutcome> {
        self.request_action(
            ids::END_RENAMING_FILE,
            ActionPayload::EndRenaming {
                target_name: target_name.map(str::to_string),
            },
        )
    }

    /// Sanitize a name typed into the rename field of `file_id`.
    pub fn sanitize_rename(
        &self,
        file_id: &str,
        proposed: &str,
    ) -> Option<String> {
        let file = self.store.state().file(file_id)?;
        Some(self.sanitized_name(proposed, file))
    }

    pub(crate) fn sanitized_name(
        &self,
        proposed: &str,
        file: &FileData,
    ) -> String {
        match &self.sanitizer {
            Some(sanitize) => sanitize(proposed, file),
            None => proposed.to_string(),
        }
    }

    // --- Drag and drop ---

    pub fn drag_start(&mut self, file_id: &str) -> Result<ActionOutcome> {
        if self.config().disable_drag_and_drop {
            return Ok(ActionOutcome::Rejected(
                RejectReason::DragAndDropDisabled,
            ));
        }
        let Some((file, _)) = self.displayed_file(file_id) else {
            return Ok(unknown_file(file_id));
        };
        if !file.is_draggable() {
            return Ok(ActionOutcome::Rejected(RejectReason::NotDraggable(
                file.id,
            )));
        }

        let state = self.store.state();
        let drag = DragState::new(
            file,
            state.current_folder().cloned(),
            state.selected_files(),
        );
        self.request_action(
            ids::START_DRAG_N_DROP,
            ActionPayload::StartDrag {
                source: drag.source_folder,
                dragged_file: drag.dragged_file,
                selected_files: drag.selected_files,
            },
        )
    }

    /// Pointer moved over `target_id` while dragging.
    pub fn drag_hover(&mut self, target_id: &str, now: Instant) {
        if self.store.state().drag().is_none() {
            return;
        }
        let Some(target) = self.find_file(target_id).cloned() else {
            return;
        };
        let current = self.store.state().current_folder().cloned();
        self.hover.enter(&target, current.as_ref(), now);
    }

    pub fn drag_leave(&mut self, target_id: &str) {
        self.hover.leave(target_id);
    }

    /// Release the drag over `target_id`.
    pub fn drop_on(
        &mut self,
        target_id: &str,
        copy: bool,
    ) -> Result<ActionOutcome> {
        self.hover.cancel();
        let Some(drag) = self.store.state().drag().cloned() else {
            return Ok(ActionOutcome::Rejected(RejectReason::NoActiveDrag));
        };
        let Some(destination) = self.find_file(target_id).cloned() else {
            self.store.dispatch(StoreCommand::SetDrag(None));
            return Ok(unknown_file(target_id));
        };

        if let Err(reason) = self.validate_drop(&drag, &destination) {
            self.store.dispatch(StoreCommand::SetDrag(None));
            return Ok(ActionOutcome::Rejected(RejectReason::Drop(reason)));
        }

        self.request_action(
            ids::END_DRAG_N_DROP,
            ActionPayload::EndDrag {
                source: drag.source_folder,
                dragged_file: drag.dragged_file,
                selected_files: drag.selected_files,
                destination,
                copy,
            },
        )
    }

    pub fn drag_cancel(&mut self) {
        self.hover.cancel();
        self.store.dispatch(StoreCommand::SetDrag(None));
    }

    /// Advance gesture timers. Returns the outcome of a hover-to-open
    /// that fired.
    pub fn tick(&mut self, now: Instant) -> Result<Option<ActionOutcome>> {
        let Some(folder_id) = self.hover.poll(now) else {
            return Ok(None);
        };
        let Some(folder) = self.find_file(&folder_id).cloned() else {
            return Ok(None);
        };
        self.request_action(
            ids::OPEN_FILES,
            ActionPayload::OpenFiles {
                target_file: Some(folder.clone()),
                files: vec![folder],
            },
        )
        .map(Some)
    }

    /// Drop rules checked against the live state: besides `check_drop`, a
    /// selected folder never receives a drop.
    pub(crate) fn validate_drop(
        &self,
        drag: &DragState,
        destination: &FileData,
    ) -> std::result::Result<(), DropRejection> {
        let state = self.store.state();
        check_drop(drag, destination, state.folder_chain())?;
        if state.is_selected(&destination.id) {
            return Err(DropRejection::SelectedTarget);
        }
        Ok(())
    }

    fn displayed_file(&self, file_id: &str) -> Option<(FileData, usize)> {
        let state = self.store.state();
        let index = state.display_order().iter().position(|id| id == file_id)?;
        let file = state.file(file_id)?.clone();
        Some((file, index))
    }

    /// A displayed file or a folder of the open chain.
    fn find_file(&self, file_id: &str) -> Option<&FileData> {
        let state = self.store.state();
        state.file(file_id).or_else(|| {
            state.folder_chain().iter().find(|folder| folder.id == file_id)
        })
    }

    fn seed_defaults(&mut self) {
        let options: Vec<(String, bool)> = self
            .registry
            .iter()
            .filter_map(|action| action.option())
            .map(|option| (option.id.clone(), option.default_value))
            .collect();
        for (id, value) in options {
            self.store.dispatch(StoreCommand::SetOption { id, value });
        }

        let config = self.store.state().config().clone();
        if let Some(action_id) = config.default_sort_action_id {
            match self.registry.lookup(&action_id).map(FileAction::sort_key) {
                Ok(Some(key)) => {
                    self.store.dispatch(StoreCommand::SetSort {
                        action_id,
                        key,
                        order: SortOrder::Asc,
                    });
                },
                _ => log::warn!(
                    "default sort action `{action_id}` is not a registered \
                     sort action"
                ),
            }
        }
        if let Some(action_id) = config.default_file_view_action_id {
            match self.registry.lookup(&action_id).map(FileAction::file_view) {
                Ok(Some(view)) => {
                    self.store.dispatch(StoreCommand::SetView(view));
                },
                _ => log::warn!(
                    "default file view action `{action_id}` is not a \
                     registered view action"
                ),
            }
        }
    }
}

fn unknown_file(file_id: &str) -> ActionOutcome {
    log::debug!("gesture on unknown file `{file_id}` ignored");
    ActionOutcome::Rejected(RejectReason::UnknownFile(file_id.to_string()))
}

/// Collects host options and creates a [`FileBrowser`].
pub struct FileBrowserBuilder {
    config: BrowserConfig,
    file_actions: Vec<FileAction>,
    handler: Option<Box<dyn FileActionHandler>>,
    collator: Option<Rc<dyn SortCollator>>,
    sanitizer: Option<Box<RenameSanitizer>>,
    search: SearchPredicate,
    files: Vec<FileData>,
    folder_chain: Vec<FileData>,
}

impl FileBrowserBuilder {
    pub fn new(config: BrowserConfig) -> Self {
        Self {
            config,
            file_actions: Vec::new(),
            handler: None,
            collator: None,
            sanitizer: None,
            search: default_search_predicate,
            files: Vec::new(),
            folder_chain: Vec::new(),
        }
    }

    /// Extra actions, or overrides of built-ins with the same id.
    pub fn file_actions(mut self, actions: Vec<FileAction>) -> Self {
        self.file_actions.extend(actions);
        self
    }

    pub fn on_file_action(
        mut self,
        handler: impl FileActionHandler + 'static,
    ) -> Self {
        self.handler = Some(Box::new(handler));
        self
    }

    pub fn sort_collator(
        mut self,
        collator: impl SortCollator + 'static,
    ) -> Self {
        self.collator = Some(Rc::new(collator));
        self
    }

    pub fn rename_sanitizer(
        mut self,
        sanitizer: impl Fn(&str, &FileData) -> String + 'static,
    ) -> Self {
        self.sanitizer = Some(Box::new(sanitizer));
        self
    }

    pub fn search_predicate(mut self, search: SearchPredicate) -> Self {
        self.search = search;
        self
    }

    pub fn files(mut self, files: Vec<FileData>) -> Self {
        self.files = files;
        self
    }

    pub fn folder_chain(mut self, folder_chain: Vec<FileData>) -> Self {
        self.folder_chain = folder_chain;
        self
    }

    /// Register actions and seed the initial state.
    ///
    /// Fails when the host supplies two actions with the same id.
    pub fn build(self) -> Result<FileBrowser> {
        let mut registry = ActionRegistry::new();
        registry.register(essential_actions())?;
        if !self.config.disable_default_file_actions {
            registry.register(default_actions())?;
        }
        registry.register(self.file_actions)?;

        let double_click_delay =
            Duration::from_millis(self.config.double_click_delay_ms);
        let store = Store::new(self.config)
            .with_collator(self.collator)
            .with_search_predicate(self.search);

        let mut browser = FileBrowser {
            store,
            registry,
            handler: self.handler,
            sanitizer: self.sanitizer,
            clicks: ClickCounter::new(double_click_delay),
            hover: HoverOpen::new(),
            depth: 0,
        };
        browser.seed_defaults();
        browser
            .store
            .dispatch(StoreCommand::SetFolderChain(self.folder_chain));
        browser.store.dispatch(StoreCommand::SetFiles(self.files));
        browser.store.drain_events();

        log::debug!(
            "file browser `{}` created with {} actions",
            browser.state().instance_id(),
            browser.registry.len()
        );
        Ok(browser)
    }
}
