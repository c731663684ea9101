use bitflags::bitflags;

use crate::click::ClickType;
use crate::file::{FileData, FileId};
use crate::selection::Selection;
use crate::store::BrowserState;

bitflags! {
    /// Keyboard modifiers held during a pointer gesture.
    #[derive(Default, Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct Modifiers : u8 {
        const CTRL  = 0b0000_0001;
        const SHIFT = 0b0000_0010;
        const ALT   = 0b0000_0100;
        const META  = 0b0000_1000;
    }
}

impl Modifiers {
    /// Ctrl, or Meta on platforms where it plays that role.
    pub fn ctrl(self) -> bool {
        self.intersects(Modifiers::CTRL | Modifiers::META)
    }

    pub fn shift(self) -> bool {
        self.contains(Modifiers::SHIFT)
    }
}

/// Part of a file entry that received a click.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ClickTarget {
    #[default]
    Entry,
    /// The name label, where a click may start renaming.
    Name,
}

/// Gesture-specific data attached to a requested action.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum ActionPayload {
    #[default]
    None,
    MouseClick {
        file: FileData,
        index: usize,
        click_type: ClickType,
        modifiers: Modifiers,
        target: ClickTarget,
    },
    KeyboardClick {
        file: FileData,
        index: usize,
        enter_key: bool,
        modifiers: Modifiers,
    },
    StartDrag {
        source: Option<FileData>,
        dragged_file: FileData,
        selected_files: Vec<FileData>,
    },
    EndDrag {
        source: Option<FileData>,
        dragged_file: FileData,
        selected_files: Vec<FileData>,
        destination: FileData,
        copy: bool,
    },
    MoveFiles {
        source: Option<FileData>,
        destination: FileData,
        files: Vec<FileData>,
        copy: bool,
    },
    OpenFiles {
        target_file: Option<FileData>,
        files: Vec<FileData>,
    },
    StartRenaming {
        file_id: FileId,
    },
    EndRenaming {
        target_name: Option<String>,
    },
    RenameFile {
        file: FileData,
        target_name: String,
    },
    ChangeSelection {
        selection: Selection,
    },
    ContextMenu {
        trigger_file_id: Option<FileId>,
        client_x: f32,
        client_y: f32,
    },
}

impl ActionPayload {
    /// Files the payload explicitly acts on, if any.
    ///
    /// Actions without explicit targets act on the current selection.
    pub fn target_files(&self) -> Option<Vec<&FileData>> {
        match self {
            ActionPayload::MouseClick { file, .. }
            | ActionPayload::KeyboardClick { file, .. }
            | ActionPayload::RenameFile { file, .. } => Some(vec![file]),
            ActionPayload::StartDrag { dragged_file, .. } => {
                Some(vec![dragged_file])
            },
            ActionPayload::EndDrag { destination, .. } => Some(vec![destination]),
            ActionPayload::MoveFiles { files, .. }
            | ActionPayload::OpenFiles { files, .. } => {
                Some(files.iter().collect())
            },
            ActionPayload::None
            | ActionPayload::StartRenaming { .. }
            | ActionPayload::EndRenaming { .. }
            | ActionPayload::ChangeSelection { .. }
            | ActionPayload::ContextMenu { .. } => None,
        }
    }

    /// The single file the gesture was aimed at, if any.
    pub fn target_file(&self) -> Option<&FileData> {
        match self {
            ActionPayload::MouseClick { file, .. }
            | ActionPayload::KeyboardClick { file, .. }
            | ActionPayload::RenameFile { file, .. } => Some(file),
            ActionPayload::StartDrag { dragged_file, .. } => Some(dragged_file),
            ActionPayload::EndDrag { destination, .. }
            | ActionPayload::MoveFiles { destination, .. } => Some(destination),
            ActionPayload::OpenFiles { target_file, .. } => target_file.as_ref(),
            _ => None,
        }
    }
}

/// Everything a host or effect learns about a dispatched action.
#[derive(Debug, Clone, PartialEq)]
pub struct FileActionData {
    pub action_id: String,
    pub payload: ActionPayload,
    pub target: Option<FileData>,
    pub instance_id: String,
    /// Selected files in display order.
    pub selected_files: Vec<FileData>,
    /// Selected files that pass the action's file filter.
    pub selected_files_for_action: Vec<FileData>,
    pub current_folder: Option<FileData>,
    pub context_menu_trigger: Option<FileData>,
}

impl FileActionData {
    pub(crate) fn new(
        action_id: &str,
        payload: ActionPayload,
        filter: Option<crate::actions::FileFilter>,
        state: &BrowserState,
    ) -> Self {
        let target = payload.target_file().cloned();
        let mut data = Self {
            action_id: action_id.to_string(),
            payload,
            target,
            instance_id: state.instance_id().to_string(),
            selected_files: Vec::new(),
            selected_files_for_action: Vec::new(),
            current_folder: None,
            context_menu_trigger: None,
        };
        data.refresh(filter, state);
        data
    }

    /// Re-read the state snapshot fields after effects have run.
    pub(crate) fn refresh(
        &mut self,
        filter: Option<crate::actions::FileFilter>,
        state: &BrowserState,
    ) {
        self.selected_files = state.selected_files();
        self.selected_files_for_action = match filter {
            Some(filter) => self
                .selected_files
                .iter()
                .filter(|file| filter.matches(file))
                .cloned()
                .collect(),
            None => self.selected_files.clone(),
        };
        self.current_folder = state.current_folder().cloned();
        self.context_menu_trigger = state
            .context_menu()
            .and_then(|menu| menu.trigger_file_id.as_deref())
            .and_then(|id| state.file(id))
            .cloned();
    }
}
