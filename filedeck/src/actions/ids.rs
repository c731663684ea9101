//! Identifiers of the built-in file actions.

pub const MOUSE_CLICK_FILE: &str = "mouse_click_file";
pub const KEYBOARD_CLICK_FILE: &str = "keyboard_click_file";
pub const START_DRAG_N_DROP: &str = "start_drag_n_drop";
pub const END_DRAG_N_DROP: &str = "end_drag_n_drop";
pub const MOVE_FILES: &str = "move_files";
pub const RENAME_FILE: &str = "rename_file";
pub const START_RENAMING_FILE: &str = "start_renaming_file";
pub const END_RENAMING_FILE: &str = "end_renaming_file";
pub const CHANGE_SELECTION: &str = "change_selection";
pub const OPEN_FILES: &str = "open_files";
pub const OPEN_PARENT_FOLDER: &str = "open_parent_folder";
pub const OPEN_FILE_CONTEXT_MENU: &str = "open_file_context_menu";

pub const OPEN_SELECTION: &str = "open_selection";
pub const SELECT_ALL_FILES: &str = "select_all_files";
pub const CLEAR_SELECTION: &str = "clear_selection";
pub const ENABLE_LIST_VIEW: &str = "enable_list_view";
pub const ENABLE_GRID_VIEW: &str = "enable_grid_view";
pub const SORT_FILES_BY_NAME: &str = "sort_files_by_name";
pub const SORT_FILES_BY_SIZE: &str = "sort_files_by_size";
pub const SORT_FILES_BY_DATE: &str = "sort_files_by_date";
pub const TOGGLE_HIDDEN_FILES: &str = "toggle_hidden_files";
pub const TOGGLE_SHOW_FOLDERS_FIRST: &str = "toggle_show_folders_first";

pub const CREATE_FOLDER: &str = "create_folder";
pub const UPLOAD_FILES: &str = "upload_files";
pub const DOWNLOAD_FILES: &str = "download_files";
pub const DELETE_FILES: &str = "delete_files";
pub const COPY_FILES: &str = "copy_files";

/// Option toggled by [`TOGGLE_HIDDEN_FILES`].
pub const OPTION_SHOW_HIDDEN_FILES: &str = "show_hidden_files";
/// Option toggled by [`TOGGLE_SHOW_FOLDERS_FIRST`].
pub const OPTION_SHOW_FOLDERS_FIRST: &str = "show_folders_first";
