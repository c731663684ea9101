use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::actions::ids;
use crate::error::Result;

/// Data options a host supplies when creating a browser instance.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BrowserConfig {
    /// Identifier reported with every host notification.
    pub instance_id: String,
    pub disable_selection: bool,
    /// Clicking the sole selected file keeps it selected.
    pub disable_simple_deselection: bool,
    pub disable_drag_and_drop: bool,
    /// Skip registering the default (non-essential) actions.
    pub disable_default_file_actions: bool,
    pub double_click_delay_ms: u64,
    pub clear_selection_on_outside_click: bool,
    pub default_sort_action_id: Option<String>,
    pub default_file_view_action_id: Option<String>,
    /// Silence the warning for an unopenable parent folder.
    pub force_enable_open_parent: bool,
    pub hide_toolbar_info: bool,
}

impl Default for BrowserConfig {
    fn default() -> Self {
        Self {
            instance_id: String::from("filedeck"),
            disable_selection: false,
            disable_simple_deselection: false,
            disable_drag_and_drop: false,
            disable_default_file_actions: false,
            double_click_delay_ms: 300,
            clear_selection_on_outside_click: true,
            default_sort_action_id: Some(String::from(
                ids::SORT_FILES_BY_NAME,
            )),
            default_file_view_action_id: Some(String::from(
                ids::ENABLE_GRID_VIEW,
            )),
            force_enable_open_parent: false,
            hide_toolbar_info: false,
        }
    }
}

/// Load a config from a JSON file. A missing file yields the defaults.
pub fn load_config(path: impl AsRef<Path>) -> Result<BrowserConfig> {
    let content = match std::fs::read_to_string(path.as_ref()) {
        Ok(content) => content,
        Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
            return Ok(BrowserConfig::default());
        },
        Err(err) => return Err(err.into()),
    };
    let config: BrowserConfig = serde_json::from_str(&content)?;
    Ok(config)
}
