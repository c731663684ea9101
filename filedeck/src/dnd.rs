//! Drag-and-drop rules: drag snapshots, drop validation and the
//! hover-to-open timer.

use std::collections::HashSet;
use std::time::{Duration, Instant};

use crate::file::{FileData, FileId};
use crate::timer::Timer;

/// Delay before hovering a folder during a drag opens it.
pub const HOVER_OPEN_DELAY: Duration = Duration::from_millis(1500);

/// Snapshot taken when a drag starts; lives until drop or cancel.
#[derive(Debug, Clone, PartialEq)]
pub struct DragState {
    pub dragged_file: FileData,
    /// Folder displayed when the drag started.
    pub source_folder: Option<FileData>,
    /// The selection if it contains the dragged file, else just that file.
    pub selected_files: Vec<FileData>,
}

impl DragState {
    /// Build the snapshot for dragging `dragged_file`.
    pub fn new(
        dragged_file: FileData,
        source_folder: Option<FileData>,
        selection: Vec<FileData>,
    ) -> Self {
        let selected_files =
            if selection.iter().any(|file| file.id == dragged_file.id) {
                selection
            } else {
                vec![dragged_file.clone()]
            };
        Self {
            dragged_file,
            source_folder,
            selected_files,
        }
    }

    /// Files a successful drop moves.
    pub fn moved_files(&self) -> Vec<FileData> {
        if self.selected_files.is_empty() {
            vec![self.dragged_file.clone()]
        } else {
            self.selected_files.clone()
        }
    }
}

/// Reason a drop target refuses a drag.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DropRejection {
    /// Target does not accept drops.
    NotDroppable,
    /// A moved file is the target or a folder of the open chain.
    ProhibitedFile(FileId),
    /// Target is the folder the files already live in.
    SameFolder,
    /// Target is part of the current selection.
    SelectedTarget,
}

/// Decide whether `drag` may be dropped onto `target`.
pub fn check_drop(
    drag: &DragState,
    target: &FileData,
    folder_chain: &[FileData],
) -> Result<(), DropRejection> {
    if !target.is_droppable() {
        return Err(DropRejection::NotDroppable);
    }

    let prohibited: HashSet<&str> = std::iter::once(target.id.as_str())
        .chain(folder_chain.iter().map(|folder| folder.id.as_str()))
        .collect();
    let moved = std::iter::once(&drag.dragged_file)
        .chain(drag.selected_files.iter());
    for file in moved {
        if prohibited.contains(file.id.as_str()) {
            return Err(DropRejection::ProhibitedFile(file.id.clone()));
        }
    }

    let same_folder = drag
        .source_folder
        .as_ref()
        .is_some_and(|source| source.id == target.id);
    if same_folder {
        return Err(DropRejection::SameFolder);
    }
    Ok(())
}

/// Opens a folder after the pointer rests on it during a drag.
#[derive(Debug, Clone, Default)]
pub struct HoverOpen {
    timer: Timer<FileId>,
    /// Target already opened by the current hover; it is not armed again
    /// until the pointer leaves it.
    fired: Option<FileId>,
}

impl HoverOpen {
    pub fn new() -> Self {
        Self::default()
    }

    /// Pointer entered `target`. Arms the timer for openable folders other
    /// than the displayed one; moving within the same target keeps the
    /// original deadline.
    pub fn enter(
        &mut self,
        target: &FileData,
        current_folder: Option<&FileData>,
        now: Instant,
    ) {
        if self.timer.payload() == Some(&target.id)
            || self.fired.as_ref() == Some(&target.id)
        {
            return;
        }
        self.fired = None;
        let is_current =
            current_folder.is_some_and(|folder| folder.id == target.id);
        if target.is_dnd_openable() && !is_current {
            self.timer.arm(now, HOVER_OPEN_DELAY, target.id.clone());
        } else {
            self.timer.cancel();
        }
    }

    /// Pointer left `target`; cancels its pending open.
    pub fn leave(&mut self, target_id: &str) {
        if self.timer.payload().is_some_and(|id| id == target_id) {
            self.timer.cancel();
        }
        if self.fired.as_deref() == Some(target_id) {
            self.fired = None;
        }
    }

    pub fn cancel(&mut self) {
        self.timer.cancel();
        self.fired = None;
    }

    pub fn is_pending(&self) -> bool {
        self.timer.is_pending()
    }

    /// Folder to open, once the delay has elapsed.
    pub fn poll(&mut self, now: Instant) -> Option<FileId> {
        let folder_id = self.timer.poll(now)?;
        self.fired = Some(folder_id.clone());
        Some(folder_id)
    }
}
