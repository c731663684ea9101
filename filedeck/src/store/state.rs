use std::collections::{HashMap, HashSet};

use crate::actions::{FileViewConfig, SortKey, SortOrder, ids};
use crate::config::BrowserConfig;
use crate::dnd::DragState;
use crate::file::{FileData, FileId};
use crate::selection::Selection;
use crate::sort::{DisplayOptions, SortState};

/// Anchor for shift-click range selection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LastClick {
    pub file_id: FileId,
    pub index: usize,
}

/// Context menu anchored near the pointer.
#[derive(Debug, Clone, PartialEq)]
pub struct ContextMenuState {
    pub trigger_file_id: Option<FileId>,
    pub mouse_x: f32,
    pub mouse_y: f32,
}

/// Sort currently applied to the display order.
#[derive(Debug, Clone, Copy)]
pub struct ActiveSort<'a> {
    pub action_id: &'a str,
    pub order: SortOrder,
}

#[derive(Debug, Clone)]
pub(super) struct SortSlot {
    pub(super) action_id: String,
    pub(super) key: SortKey,
    pub(super) order: SortOrder,
}

/// Snapshot of a browser instance, mutated only by the store reducer.
#[derive(Debug, Clone)]
pub struct BrowserState {
    pub(super) config: BrowserConfig,
    pub(super) files: Vec<FileData>,
    pub(super) file_index: HashMap<FileId, usize>,
    pub(super) folder_chain: Vec<FileData>,
    pub(super) display_order: Vec<FileId>,
    pub(super) hidden_file_ids: HashSet<FileId>,
    pub(super) selection: Selection,
    pub(super) last_click: Option<LastClick>,
    pub(super) renaming_file_id: Option<FileId>,
    pub(super) sort: Option<SortSlot>,
    pub(super) view: FileViewConfig,
    pub(super) options: HashMap<String, bool>,
    pub(super) search: String,
    pub(super) context_menu: Option<ContextMenuState>,
    pub(super) drag: Option<DragState>,
}

impl BrowserState {
    pub(crate) fn new(config: BrowserConfig) -> Self {
        Self {
            config,
            files: Vec::new(),
            file_index: HashMap::new(),
            folder_chain: Vec::new(),
            display_order: Vec::new(),
            hidden_file_ids: HashSet::new(),
            selection: Selection::new(),
            last_click: None,
            renaming_file_id: None,
            sort: None,
            view: FileViewConfig::GRID,
            options: HashMap::new(),
            search: String::new(),
            context_menu: None,
            drag: None,
        }
    }

    // --- Read access ---

    pub fn config(&self) -> &BrowserConfig {
        &self.config
    }

    pub fn instance_id(&self) -> &str {
        &self.config.instance_id
    }

    /// Files in host order, with duplicate ids removed.
    pub fn files(&self) -> &[FileData] {
        &self.files
    }

    pub fn file(&self, id: &str) -> Option<&FileData> {
        self.file_index.get(id).and_then(|index| self.files.get(*index))
    }

    /// Ancestors of the displayed folder, root first.
    pub fn folder_chain(&self) -> &[FileData] {
        &self.folder_chain
    }

    /// Folder whose contents are displayed.
    pub fn current_folder(&self) -> Option<&FileData> {
        self.folder_chain.last()
    }

    pub fn parent_folder(&self) -> Option<&FileData> {
        let len = self.folder_chain.len();
        if len < 2 {
            return None;
        }
        self.folder_chain.get(len - 2)
    }

    /// Sorted, filtered sequence of displayed file ids.
    pub fn display_order(&self) -> &[FileId] {
        &self.display_order
    }

    /// Files currently filtered out of the display.
    pub fn hidden_file_ids(&self) -> &HashSet<FileId> {
        &self.hidden_file_ids
    }

    pub fn selection(&self) -> &Selection {
        &self.selection
    }

    pub fn is_selected(&self, id: &str) -> bool {
        self.selection.contains(id)
    }

    /// Selected files in display order.
    pub fn selected_files(&self) -> Vec<FileData> {
        self.display_order
            .iter()
            .filter(|id| self.selection.contains(id.as_str()))
            .filter_map(|id| self.file(id))
            .cloned()
            .collect()
    }

    pub fn last_click(&self) -> Option<&LastClick> {
        self.last_click.as_ref()
    }

    pub fn renaming_file_id(&self) -> Option<&str> {
        self.renaming_file_id.as_deref()
    }

    pub fn sort(&self) -> Option<ActiveSort<'_>> {
        self.sort.as_ref().map(|slot| ActiveSort {
            action_id: &slot.action_id,
            order: slot.order,
        })
    }

    pub fn view(&self) -> FileViewConfig {
        self.view
    }

    pub fn option(&self, id: &str) -> Option<bool> {
        self.options.get(id).copied()
    }

    pub fn search(&self) -> &str {
        &self.search
    }

    pub fn context_menu(&self) -> Option<&ContextMenuState> {
        self.context_menu.as_ref()
    }

    pub fn drag(&self) -> Option<&DragState> {
        self.drag.as_ref()
    }

    /// Whether `id` names a displayed file that can currently be selected.
    pub fn is_selectable(&self, id: &str) -> bool {
        !self.hidden_file_ids.contains(id)
            && self.file(id).is_some_and(FileData::is_selectable)
    }

    /// Selectable ids in display order.
    pub fn selectable_file_ids(&self) -> Vec<FileId> {
        self.display_order
            .iter()
            .filter(|id| self.is_selectable(id.as_str()))
            .cloned()
            .collect()
    }

    pub(crate) fn display_options(&self) -> DisplayOptions {
        DisplayOptions {
            show_hidden_files: self
                .option(ids::OPTION_SHOW_HIDDEN_FILES)
                .unwrap_or(true),
            show_folders_first: self
                .option(ids::OPTION_SHOW_FOLDERS_FIRST)
                .unwrap_or(true),
        }
    }

    pub(super) fn sort_state(&self) -> Option<SortState<'_>> {
        self.sort.as_ref().map(|slot| SortState {
            action_id: &slot.action_id,
            key: slot.key,
            order: slot.order,
        })
    }
}
