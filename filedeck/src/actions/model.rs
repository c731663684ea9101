use std::collections::HashSet;
use std::fmt;
use std::rc::Rc;
use std::time::SystemTime;

use serde::{Deserialize, Serialize};

use crate::browser::FileBrowser;
use crate::dispatcher::FileActionData;
use crate::file::{FileData, FileId};

/// Direction applied to the sorted display order.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum SortOrder {
    #[default]
    Asc,
    Desc,
}

impl SortOrder {
    pub fn toggled(self) -> Self {
        match self {
            SortOrder::Asc => SortOrder::Desc,
            SortOrder::Desc => SortOrder::Asc,
        }
    }
}

/// Layout of file entries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FileViewMode {
    List,
    Grid,
}

/// Entry geometry selected by a view action.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileViewConfig {
    pub mode: FileViewMode,
    /// Grid views only.
    pub entry_width: Option<u32>,
    pub entry_height: u32,
}

impl FileViewConfig {
    pub const LIST: Self = Self {
        mode: FileViewMode::List,
        entry_width: None,
        entry_height: 30,
    };

    pub const GRID: Self = Self {
        mode: FileViewMode::Grid,
        entry_width: Some(165),
        entry_height: 130,
    };
}

/// Value extracted from a file to order it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SortValue {
    Text(String),
    Number(u64),
    Time(SystemTime),
}

/// Selects the sort key of a file for a sort action.
#[derive(Debug, Clone, Copy)]
pub enum SortKey {
    Name,
    Size,
    ModDate,
    Custom(fn(&FileData) -> Option<SortValue>),
}

impl SortKey {
    pub fn select(&self, file: &FileData) -> Option<SortValue> {
        match self {
            SortKey::Name => Some(SortValue::Text(file.name.clone())),
            SortKey::Size => file.size.map(SortValue::Number),
            SortKey::ModDate => file.mod_date.map(SortValue::Time),
            SortKey::Custom(select) => select(file),
        }
    }
}

/// Applicability predicate of an action.
#[derive(Debug, Clone, Copy)]
pub enum FileFilter {
    Openable,
    Selectable,
    Draggable,
    Renamable,
    Directory,
    NonDirectory,
    Custom(fn(&FileData) -> bool),
}

impl FileFilter {
    pub fn matches(&self, file: &FileData) -> bool {
        match self {
            FileFilter::Openable => file.is_openable(),
            FileFilter::Selectable => file.is_selectable(),
            FileFilter::Draggable => file.is_draggable(),
            FileFilter::Renamable => file.is_renamable(),
            FileFilter::Directory => file.is_directory(),
            FileFilter::NonDirectory => !file.is_directory(),
            FileFilter::Custom(predicate) => predicate(file),
        }
    }
}

/// Input handed to a [`SelectionTransform`].
#[derive(Debug, Clone, Copy)]
pub struct SelectionTransformInput<'a> {
    /// Selectable file ids in display order.
    pub file_ids: &'a [FileId],
    /// Files currently filtered out of the display.
    pub hidden_file_ids: &'a HashSet<FileId>,
    pub prev_selection: &'a HashSet<FileId>,
}

/// Bulk selection change performed when an action is dispatched.
///
/// `None` leaves the selection untouched, while an empty set clears it.
#[derive(Debug, Clone, Copy)]
pub enum SelectionTransform {
    SelectAll,
    Clear,
    Custom(fn(&SelectionTransformInput<'_>) -> Option<HashSet<FileId>>),
}

impl SelectionTransform {
    pub fn apply(
        &self,
        input: &SelectionTransformInput<'_>,
    ) -> Option<HashSet<FileId>> {
        match self {
            SelectionTransform::SelectAll => Some(
                input
                    .file_ids
                    .iter()
                    .filter(|id| !input.hidden_file_ids.contains(*id))
                    .cloned()
                    .collect(),
            ),
            SelectionTransform::Clear => {
                if input.prev_selection.is_empty() {
                    None
                } else {
                    Some(HashSet::new())
                }
            },
            SelectionTransform::Custom(transform) => transform(input),
        }
    }
}

/// Boolean option flipped each time the owning action is dispatched.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActionOption {
    pub id: String,
    pub default_value: bool,
}

/// Rendering hints for toolbars and context menus.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ActionButton {
    pub name: String,
    pub toolbar: bool,
    pub context_menu: bool,
    pub group: Option<String>,
    pub dropdown: bool,
    pub icon: Option<String>,
    pub icon_only: bool,
}

impl ActionButton {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    pub fn toolbar(mut self) -> Self {
        self.toolbar = true;
        self
    }

    pub fn context_menu(mut self) -> Self {
        self.context_menu = true;
        self
    }

    pub fn in_group(mut self, group: impl Into<String>) -> Self {
        self.group = Some(group.into());
        self.dropdown = true;
        self
    }

    pub fn icon(mut self, icon: impl Into<String>) -> Self {
        self.icon = Some(icon.into());
        self
    }

    pub fn icon_only(mut self) -> Self {
        self.icon_only = true;
        self
    }
}

/// Host-defined effect run when its action is dispatched.
///
/// The effect reads state and issues further mutations or requests
/// through the browser it is handed.
pub trait FileActionEffect {
    fn apply(
        &self,
        data: &FileActionData,
        browser: &mut FileBrowser,
    ) -> anyhow::Result<()>;
}

/// Behaviour attached to an action, keyed by variant.
#[derive(Clone)]
pub enum ActionEffect {
    MouseClickFile,
    KeyboardClickFile,
    StartDragNDrop,
    EndDragNDrop,
    StartRenamingFile,
    EndRenamingFile,
    OpenParentFolder,
    OpenFileContextMenu,
    OpenSelection,
    Custom(Rc<dyn FileActionEffect>),
}

impl fmt::Debug for ActionEffect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ActionEffect::MouseClickFile => f.write_str("MouseClickFile"),
            ActionEffect::KeyboardClickFile => {
                f.write_str("KeyboardClickFile")
            },
            ActionEffect::StartDragNDrop => f.write_str("StartDragNDrop"),
            ActionEffect::EndDragNDrop => f.write_str("EndDragNDrop"),
            ActionEffect::StartRenamingFile => {
                f.write_str("StartRenamingFile")
            },
            ActionEffect::EndRenamingFile => f.write_str("EndRenamingFile"),
            ActionEffect::OpenParentFolder => f.write_str("OpenParentFolder"),
            ActionEffect::OpenFileContextMenu => {
                f.write_str("OpenFileContextMenu")
            },
            ActionEffect::OpenSelection => f.write_str("OpenSelection"),
            ActionEffect::Custom(_) => f.write_str("Custom(..)"),
        }
    }
}

/// A statically registered unit of file browser behaviour.
#[derive(Debug, Clone)]
pub struct FileAction {
    id: String,
    hotkeys: Vec<String>,
    requires_selection: bool,
    file_filter: Option<FileFilter>,
    selection_transform: Option<SelectionTransform>,
    sort_key: Option<SortKey>,
    file_view: Option<FileViewConfig>,
    option: Option<ActionOption>,
    button: Option<ActionButton>,
    effect: Option<ActionEffect>,
}

impl FileAction {
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            hotkeys: Vec::new(),
            requires_selection: false,
            file_filter: None,
            selection_transform: None,
            sort_key: None,
            file_view: None,
            option: None,
            button: None,
            effect: None,
        }
    }

    pub fn with_hotkeys<I, S>(mut self, hotkeys: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.hotkeys = hotkeys.into_iter().map(Into::into).collect();
        self
    }

    pub fn requires_selection(mut self) -> Self {
        self.requires_selection = true;
        self
    }

    pub fn with_file_filter(mut self, filter: FileFilter) -> Self {
        self.file_filter = Some(filter);
        self
    }

    pub fn with_selection_transform(
        mut self,
        transform: SelectionTransform,
    ) -> Self {
        self.selection_transform = Some(transform);
        self
    }

    pub fn with_sort_key(mut self, key: SortKey) -> Self {
        self.sort_key = Some(key);
        self
    }

    pub fn with_file_view(mut self, view: FileViewConfig) -> Self {
        self.file_view = Some(view);
        self
    }

    pub fn with_option(
        mut self,
        id: impl Into<String>,
        default_value: bool,
    ) -> Self {
        self.option = Some(ActionOption {
            id: id.into(),
            default_value,
        });
        self
    }

    pub fn with_button(mut self, button: ActionButton) -> Self {
        self.button = Some(button);
        self
    }

    pub fn with_effect(mut self, effect: ActionEffect) -> Self {
        self.effect = Some(effect);
        self
    }

    /// Attach a host-defined effect.
    pub fn with_custom_effect(
        self,
        effect: impl FileActionEffect + 'static,
    ) -> Self {
        self.with_effect(ActionEffect::Custom(Rc::new(effect)))
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn hotkeys(&self) -> &[String] {
        &self.hotkeys
    }

    pub fn needs_selection(&self) -> bool {
        self.requires_selection
    }

    pub fn file_filter(&self) -> Option<FileFilter> {
        self.file_filter
    }

    pub fn selection_transform(&self) -> Option<SelectionTransform> {
        self.selection_transform
    }

    pub fn sort_key(&self) -> Option<SortKey> {
        self.sort_key
    }

    pub fn file_view(&self) -> Option<FileViewConfig> {
        self.file_view
    }

    pub fn option(&self) -> Option<&ActionOption> {
        self.option.as_ref()
    }

    pub fn button(&self) -> Option<&ActionButton> {
        self.button.as_ref()
    }

    pub fn effect(&self) -> Option<&ActionEffect> {
        self.effect.as_ref()
    }
}
