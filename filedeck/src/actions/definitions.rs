use super::ids;
use super::model::{
    ActionButton, ActionEffect, FileAction, FileFilter, FileViewConfig,
    SelectionTransform, SortKey,
};

const GROUP_ACTIONS: &str = "Actions";
const GROUP_OPTIONS: &str = "Options";

/// Actions every browser instance registers. Host overrides may replace
/// them by id but they cannot be disabled.
pub fn essential_actions() -> Vec<FileAction> {
    vec![
        FileAction::new(ids::MOUSE_CLICK_FILE)
            .with_effect(ActionEffect::MouseClickFile),
        FileAction::new(ids::KEYBOARD_CLICK_FILE)
            .with_effect(ActionEffect::KeyboardClickFile),
        FileAction::new(ids::START_DRAG_N_DROP)
            .with_effect(ActionEffect::StartDragNDrop),
        FileAction::new(ids::END_DRAG_N_DROP)
            .with_effect(ActionEffect::EndDragNDrop),
        FileAction::new(ids::MOVE_FILES),
        FileAction::new(ids::RENAME_FILE),
        FileAction::new(ids::START_RENAMING_FILE)
            .with_effect(ActionEffect::StartRenamingFile),
        FileAction::new(ids::END_RENAMING_FILE)
            .with_effect(ActionEffect::EndRenamingFile),
        FileAction::new(ids::CHANGE_SELECTION),
        FileAction::new(ids::OPEN_FILES),
        FileAction::new(ids::OPEN_PARENT_FOLDER)
            .with_button(
                ActionButton::new("Go up a directory")
                    .toolbar()
                    .icon("open_parent_folder")
                    .icon_only(),
            )
            .with_effect(ActionEffect::OpenParentFolder),
        FileAction::new(ids::OPEN_FILE_CONTEXT_MENU)
            .with_effect(ActionEffect::OpenFileContextMenu),
    ]
}

/// Actions registered unless the host disables default file actions.
pub fn default_actions() -> Vec<FileAction> {
    vec![
        FileAction::new(ids::OPEN_SELECTION)
            .with_hotkeys(["enter"])
            .requires_selection()
            .with_file_filter(FileFilter::Openable)
            .with_button(
                ActionButton::new("Open selection")
                    .toolbar()
                    .context_menu()
                    .in_group(GROUP_ACTIONS)
                    .icon("open_files"),
            )
            .with_effect(ActionEffect::OpenSelection),
        FileAction::new(ids::SELECT_ALL_FILES)
            .with_hotkeys(["ctrl+a"])
            .with_button(
                ActionButton::new("Select all files")
                    .toolbar()
                    .context_menu()
                    .in_group(GROUP_ACTIONS)
                    .icon("select_all_files"),
            )
            .with_selection_transform(SelectionTransform::SelectAll),
        FileAction::new(ids::CLEAR_SELECTION)
            .with_hotkeys(["escape"])
            .with_button(
                ActionButton::new("Clear selection")
                    .toolbar()
                    .context_menu()
                    .in_group(GROUP_ACTIONS)
                    .icon("clear_selection"),
            )
            .with_selection_transform(SelectionTransform::Clear),
        FileAction::new(ids::ENABLE_LIST_VIEW)
            .with_file_view(FileViewConfig::LIST)
            .with_button(
                ActionButton::new("Switch to List view")
                    .toolbar()
                    .context_menu()
                    .icon("list")
                    .icon_only(),
            ),
        FileAction::new(ids::ENABLE_GRID_VIEW)
            .with_file_view(FileViewConfig::GRID)
            .with_button(
                ActionButton::new("Switch to Grid view")
                    .toolbar()
                    .context_menu()
                    .icon("small_thumbnail")
                    .icon_only(),
            ),
        sort_action(ids::SORT_FILES_BY_NAME, "Sort by name", SortKey::Name),
        sort_action(ids::SORT_FILES_BY_SIZE, "Sort by size", SortKey::Size),
        sort_action(ids::SORT_FILES_BY_DATE, "Sort by date", SortKey::ModDate),
        FileAction::new(ids::TOGGLE_HIDDEN_FILES)
            .with_hotkeys(["ctrl+h"])
            .with_option(ids::OPTION_SHOW_HIDDEN_FILES, true)
            .with_button(option_button("Show hidden files")),
        FileAction::new(ids::TOGGLE_SHOW_FOLDERS_FIRST)
            .with_option(ids::OPTION_SHOW_FOLDERS_FIRST, true)
            .with_button(option_button("Show folders first")),
    ]
}

/// Opt-in actions. Their behaviour belongs to the host, which receives
/// them through the action handler.
pub fn extra_actions() -> Vec<FileAction> {
    vec![
        FileAction::new(ids::CREATE_FOLDER).with_button(
            ActionButton::new("Create folder")
                .toolbar()
                .context_menu()
                .icon("folder_create"),
        ),
        FileAction::new(ids::UPLOAD_FILES).with_button(
            ActionButton::new("Upload files")
                .toolbar()
                .context_menu()
                .icon("upload"),
        ),
        FileAction::new(ids::DOWNLOAD_FILES)
            .requires_selection()
            .with_file_filter(FileFilter::NonDirectory)
            .with_button(
                ActionButton::new("Download files")
                    .toolbar()
                    .context_menu()
                    .in_group(GROUP_ACTIONS)
                    .icon("download"),
            ),
        FileAction::new(ids::DELETE_FILES)
            .with_hotkeys(["delete"])
            .requires_selection()
            .with_button(
                ActionButton::new("Delete files")
                    .toolbar()
                    .context_menu()
                    .in_group(GROUP_ACTIONS)
                    .icon("trash"),
            ),
        FileAction::new(ids::COPY_FILES)
            .with_hotkeys(["ctrl+c"])
            .requires_selection()
            .with_button(
                ActionButton::new("Copy selection")
                    .toolbar()
                    .context_menu()
                    .in_group(GROUP_ACTIONS)
                    .icon("copy"),
            ),
    ]
}

fn sort_action(id: &str, name: &str, key: SortKey) -> FileAction {
    FileAction::new(id).with_sort_key(key).with_button(
        ActionButton::new(name)
            .toolbar()
            .context_menu()
            .in_group(GROUP_OPTIONS),
    )
}

fn option_button(name: &str) -> ActionButton {
    ActionButton::new(name)
        .toolbar()
        .context_menu()
        .in_group(GROUP_OPTIONS)
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;

    #[test]
    fn given_builtin_catalogs_when_collected_then_ids_are_unique() {
        let mut seen = HashSet::new();
        for action in essential_actions()
            .into_iter()
            .chain(default_actions())
            .chain(extra_actions())
        {
            assert!(seen.insert(action.id().to_string()), "{}", action.id());
        }
    }

    #[test]
    fn given_open_selection_when_inspected_then_it_requires_openable_selection()
    {
        let action = default_actions()
            .into_iter()
            .find(|action| action.id() == ids::OPEN_SELECTION)
            .expect("open selection should be a default action");

        assert!(action.needs_selection());
        assert!(matches!(action.file_filter(), Some(FileFilter::Openable)));
        assert_eq!(action.hotkeys(), ["enter"]);
    }

    #[test]
    fn given_sort_actions_when_inspected_then_each_exposes_a_sort_key() {
        let sort_ids = [
            ids::SORT_FILES_BY_NAME,
            ids::SORT_FILES_BY_SIZE,
            ids::SORT_FILES_BY_DATE,
        ];

        for action in default_actions()
            .into_iter()
            .filter(|action| sort_ids.contains(&action.id()))
        {
            assert!(action.sort_key().is_some(), "{}", action.id());
        }
    }
}
