use crate::actions::{FileViewConfig, SortKey, SortOrder};
use crate::dnd::DragState;
use crate::file::{FileData, FileId};
use crate::selection::Selection;

use super::state::{ContextMenuState, LastClick};

/// Internal mutations reduced by the store.
#[derive(Debug, Clone)]
pub enum StoreCommand {
    /// Replace the displayed files wholesale.
    SetFiles(Vec<FileData>),
    /// Replace the ancestor chain of the displayed folder.
    SetFolderChain(Vec<FileData>),
    /// Replace the selection with the given set.
    SetSelection(Selection),
    /// Add files to the selection, optionally dropping the previous one.
    SelectFiles { file_ids: Vec<FileId>, reset: bool },
    /// Click-style single file selection.
    SelectFile {
        file_id: FileId,
        exclusive: bool,
        toggle: bool,
    },
    /// Flip selection of one file.
    ToggleSelection { file_id: FileId },
    /// Select an inclusive range of display positions.
    SelectRange { start: usize, end: usize },
    ClearSelection,
    SetLastClick(Option<LastClick>),
    StartRenaming { file_id: FileId },
    EndRenaming,
    SetSort {
        action_id: String,
        key: SortKey,
        order: SortOrder,
    },
    SetView(FileViewConfig),
    SetOption { id: String, value: bool },
    SetSearch(String),
    ShowContextMenu(ContextMenuState),
    HideContextMenu,
    SetDrag(Option<DragState>),
}

/// Change notifications recorded by the store.
///
/// One event is recorded per piece of state that actually changed.
#[derive(Debug, Clone, PartialEq)]
pub enum StoreEvent {
    FilesChanged,
    FolderChainChanged,
    DisplayOrderChanged,
    SelectionChanged(Selection),
    LastClickChanged,
    RenamingChanged(Option<FileId>),
    SortChanged,
    ViewChanged,
    OptionChanged { id: String, value: bool },
    SearchChanged,
    ContextMenuChanged,
    DragChanged,
}
