use std::path::Path;

use anyhow::Context;
use filedeck::{BrowserConfig, ClickTarget, FileData, Modifiers};
use serde::Deserialize;

/// Scripted browser session read from JSON.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub(crate) struct Scenario {
    pub(crate) config: BrowserConfig,
    pub(crate) folder_chain: Vec<FileData>,
    pub(crate) files: Vec<FileData>,
    /// Extra host actions registered without effects.
    pub(crate) extra_actions: bool,
    pub(crate) steps: Vec<Step>,
}

/// Modifier keys of a pointer or key gesture.
#[derive(Debug, Default, Clone, Copy, Deserialize)]
#[serde(default)]
pub(crate) struct Keys {
    pub(crate) ctrl: bool,
    pub(crate) shift: bool,
    pub(crate) alt: bool,
    pub(crate) meta: bool,
}

impl From<Keys> for Modifiers {
    fn from(keys: Keys) -> Self {
        let mut modifiers = Modifiers::empty();
        modifiers.set(Modifiers::CTRL, keys.ctrl);
        modifiers.set(Modifiers::SHIFT, keys.shift);
        modifiers.set(Modifiers::ALT, keys.alt);
        modifiers.set(Modifiers::META, keys.meta);
        modifiers
    }
}

#[derive(Debug, Clone, Copy, Default, Deserialize)]
#[serde(rename_all = "snake_case")]
pub(crate) enum Target {
    #[default]
    Entry,
    Name,
}

impl From<Target> for ClickTarget {
    fn from(target: Target) -> Self {
        match target {
            Target::Entry => ClickTarget::Entry,
            Target::Name => ClickTarget::Name,
        }
    }
}

/// One gesture. `at_ms` is measured from the start of the replay.
#[derive(Debug, Clone, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub(crate) enum Step {
    Click {
        file: String,
        #[serde(default)]
        target: Target,
        #[serde(flatten)]
        keys: Keys,
        #[serde(default)]
        at_ms: u64,
    },
    Key {
        file: String,
        #[serde(default)]
        enter: bool,
        #[serde(flatten)]
        keys: Keys,
    },
    Hotkey {
        combo: String,
    },
    Action {
        id: String,
    },
    OutsideClick,
    ContextMenu {
        file: Option<String>,
        x: f32,
        y: f32,
    },
    CloseContextMenu,
    StartRename {
        file: String,
    },
    EndRename {
        name: Option<String>,
    },
    Drag {
        file: String,
    },
    Hover {
        target: String,
        #[serde(default)]
        at_ms: u64,
    },
    Leave {
        target: String,
    },
    Drop {
        target: String,
        #[serde(default)]
        copy: bool,
    },
    CancelDrag,
    Tick {
        at_ms: u64,
    },
    Search {
        text: String,
    },
    SetFiles {
        files: Vec<FileData>,
    },
}

pub(crate) fn load_scenario(path: &Path) -> anyhow::Result<Scenario> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read {}", path.display()))?;
    serde_json::from_str(&content)
        .with_context(|| format!("failed to parse {}", path.display()))
}
