use super::payload::{ActionPayload, ClickTarget, FileActionData};
use crate::actions::{ActionEffect, ids};
use crate::browser::FileBrowser;
use crate::click::ClickType;
use crate::dnd::DragState;
use crate::error::Result;
use crate::file::FileData;
use crate::store::{ContextMenuState, LastClick, StoreCommand};

impl FileBrowser {
    pub(super) fn apply_builtin(
        &mut self,
        effect: &ActionEffect,
        data: &FileActionData,
    ) -> Result<()> {
        match effect {
            ActionEffect::MouseClickFile => self.mouse_click_file(data),
            ActionEffect::KeyboardClickFile => self.keyboard_click_file(data),
            ActionEffect::StartDragNDrop => self.start_drag_n_drop(data),
            ActionEffect::EndDragNDrop => self.end_drag_n_drop(data),
            ActionEffect::StartRenamingFile => self.start_renaming_file(data),
            ActionEffect::EndRenamingFile => self.end_renaming_file(data),
            ActionEffect::OpenParentFolder => self.open_parent_folder(),
            ActionEffect::OpenFileContextMenu => {
                self.open_file_context_menu(data)
            },
            ActionEffect::OpenSelection => self.open_selection(data),
            ActionEffect::Custom(_) => Ok(()),
        }
    }

    fn open_files(&mut self, files: Vec<FileData>) -> Result<()> {
        let target_file = match files.as_slice() {
            [single] => Some(single.clone()),
            _ => None,
        };
        self.request_action(
            ids::OPEN_FILES,
            ActionPayload::OpenFiles { target_file, files },
        )?;
        Ok(())
    }

    fn mouse_click_file(&mut self, data: &FileActionData) -> Result<()> {
        let ActionPayload::MouseClick {
            file,
            index,
            click_type,
            modifiers,
            target,
        } = &data.payload
        else {
            return unexpected_payload(data);
        };

        if *click_type == ClickType::Double {
            // Only the clicked file opens, whatever else is selected.
            if file.is_openable() {
                self.open_files(vec![file.clone()])?;
            }
            return Ok(());
        }

        let state = self.store.state();
        let disable_selection = state.config().disable_selection;
        let toggle = !state.config().disable_simple_deselection;
        let last_click = state.last_click().cloned();

        let anchored = if disable_selection {
            last_click.as_ref().is_some_and(|click| click.file_id == file.id)
        } else {
            state.is_selected(&file.id) && state.selection().len() == 1
        };
        if modifiers.is_empty()
            && *target == ClickTarget::Name
            && file.is_renamable()
            && anchored
        {
            self.request_action(
                ids::START_RENAMING_FILE,
                ActionPayload::StartRenaming {
                    file_id: file.id.clone(),
                },
            )?;
            return Ok(());
        }

        let file_id = file.id.clone();
        let command = if file.is_selectable() && !disable_selection {
            if modifiers.ctrl() {
                Some(StoreCommand::SelectFile {
                    file_id: file_id.clone(),
                    exclusive: false,
                    toggle: true,
                })
            } else if modifiers.shift() {
                match last_click {
                    Some(last) => Some(StoreCommand::SelectRange {
                        start: last.index.min(*index),
                        end: last.index.max(*index),
                    }),
                    None => Some(StoreCommand::SelectFile {
                        file_id: file_id.clone(),
                        exclusive: false,
                        toggle,
                    }),
                }
            } else {
                Some(StoreCommand::SelectFile {
                    file_id: file_id.clone(),
                    exclusive: true,
                    toggle,
                })
            }
        } else if !modifiers.ctrl() && !disable_selection {
            Some(StoreCommand::ClearSelection)
        } else {
            None
        };

        if let Some(command) = command {
            self.store.dispatch(command);
        }
        self.store.dispatch(StoreCommand::SetLastClick(Some(LastClick {
            file_id,
            index: *index,
        })));
        Ok(())
    }

    fn keyboard_click_file(&mut self, data: &FileActionData) -> Result<()> {
        let ActionPayload::KeyboardClick {
            file,
            index,
            enter_key,
            ..
        } = &data.payload
        else {
            return unexpected_payload(data);
        };

        self.store.dispatch(StoreCommand::SetLastClick(Some(LastClick {
            file_id: file.id.clone(),
            index: *index,
        })));

        // A non-empty selection is opened by the `open_selection` hotkey.
        if *enter_key && self.store.state().selection().is_empty() {
            self.open_files(vec![file.clone()])?;
        }
        Ok(())
    }

    fn start_drag_n_drop(&mut self, data: &FileActionData) -> Result<()> {
        let ActionPayload::StartDrag {
            source,
            dragged_file,
            selected_files,
        } = &data.payload
        else {
            return unexpected_payload(data);
        };

        self.store.dispatch(StoreCommand::SetDrag(Some(DragState {
            dragged_file: dragged_file.clone(),
            source_folder: source.clone(),
            selected_files: selected_files.clone(),
        })));
        Ok(())
    }

    fn end_drag_n_drop(&mut self, data: &FileActionData) -> Result<()> {
        let ActionPayload::EndDrag {
            source,
            dragged_file,
            selected_files,
            destination,
            copy,
        } = &data.payload
        else {
            return unexpected_payload(data);
        };

        let drag = DragState {
            dragged_file: dragged_file.clone(),
            source_folder: source.clone(),
            selected_files: selected_files.clone(),
        };
        let result = match self.validate_drop(&drag, destination) {
            Ok(()) => self
                .request_action(
                    ids::MOVE_FILES,
                    ActionPayload::MoveFiles {
                        source: source.clone(),
                        destination: destination.clone(),
                        files: drag.moved_files(),
                        copy: *copy,
                    },
                )
                .map(|_| ()),
            Err(_) => Ok(()),
        };

        self.hover.cancel();
        self.store.dispatch(StoreCommand::SetDrag(None));
        result
    }

    fn start_renaming_file(&mut self, data: &FileActionData) -> Result<()> {
        let ActionPayload::StartRenaming { file_id } = &data.payload else {
            return unexpected_payload(data);
        };

        let renamable = self
            .store
            .state()
            .file(file_id)
            .is_some_and(FileData::is_renamable);
        if renamable {
            self.store.dispatch(StoreCommand::StartRenaming {
                file_id: file_id.clone(),
            });
        } else {
            log::warn!(
                "start renaming requested for `{file_id}`, which is not \
                 renamable"
            );
        }
        Ok(())
    }

    fn end_renaming_file(&mut self, data: &FileActionData) -> Result<()> {
        let ActionPayload::EndRenaming { target_name } = &data.payload else {
            return unexpected_payload(data);
        };

        let state = self.store.state();
        let Some(file) = state
            .renaming_file_id()
            .and_then(|id| state.file(id))
            .cloned()
        else {
            return Ok(());
        };

        let rename = target_name
            .as_deref()
            .map(|name| self.sanitized_name(name, &file))
            .filter(|name| {
                !name.is_empty() && file.is_renamable() && *name != file.name
            });
        let result = match rename {
            Some(target_name) => self
                .request_action(
                    ids::RENAME_FILE,
                    ActionPayload::RenameFile { file, target_name },
                )
                .map(|_| ()),
            None => Ok(()),
        };

        self.store.dispatch(StoreCommand::EndRenaming);
        result
    }

    fn open_parent_folder(&mut self) -> Result<()> {
        let state = self.store.state();
        match state.parent_folder() {
            Some(parent) if parent.is_openable() => {
                let parent = parent.clone();
                self.open_files(vec![parent])
            },
            _ => {
                if !state.config().force_enable_open_parent {
                    log::warn!(
                        "open parent folder requested, but the parent \
                         folder is not openable"
                    );
                }
                Ok(())
            },
        }
    }

    fn open_file_context_menu(&mut self, data: &FileActionData) -> Result<()> {
        let ActionPayload::ContextMenu {
            trigger_file_id,
            client_x,
            client_y,
        } = &data.payload
        else {
            return unexpected_payload(data);
        };

        let state = self.store.state();
        let command = trigger_file_id
            .as_deref()
            .and_then(|id| state.file(id))
            .filter(|file| {
                !state.config().disable_selection && !state.is_selected(&file.id)
            })
            .map(|file| {
                if file.is_selectable() {
                    StoreCommand::SelectFiles {
                        file_ids: vec![file.id.clone()],
                        reset: true,
                    }
                } else {
                    StoreCommand::ClearSelection
                }
            });
        if let Some(command) = command {
            self.store.dispatch(command);
        }

        self.store
            .dispatch(StoreCommand::ShowContextMenu(ContextMenuState {
                trigger_file_id: trigger_file_id.clone(),
                mouse_x: client_x - 2.0,
                mouse_y: client_y - 4.0,
            }));
        Ok(())
    }

    fn open_selection(&mut self, data: &FileActionData) -> Result<()> {
        if data.selected_files_for_action.is_empty() {
            return Ok(());
        }
        self.open_files(data.selected_files_for_action.clone())
    }
}

fn unexpected_payload(data: &FileActionData) -> Result<()> {
    log::warn!(
        "file action `{}` received an unexpected payload: {:?}",
        data.action_id,
        data.payload
    );
    Ok(())
}
