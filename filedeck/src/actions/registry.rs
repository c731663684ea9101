use std::collections::{HashMap, HashSet};

use super::model::FileAction;
use crate::error::{FileBrowserError, Result};

/// Id-keyed catalog of the file actions known to a browser instance.
///
/// Registration order is preserved: it decides which action wins when
/// several share a hotkey.
#[derive(Debug, Default, Clone)]
pub struct ActionRegistry {
    actions: HashMap<String, FileAction>,
    order: Vec<String>,
}

impl ActionRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Merge a batch of actions into the registry.
    ///
    /// An action whose id is already registered replaces the previous
    /// definition in place. Two actions sharing an id within the same
    /// batch are a configuration error.
    pub fn register(&mut self, actions: Vec<FileAction>) -> Result<()> {
        let mut batch_ids = HashSet::with_capacity(actions.len());
        for action in &actions {
            if !batch_ids.insert(action.id()) {
                return Err(FileBrowserError::DuplicateAction(
                    action.id().to_string(),
                ));
            }
        }

        for action in actions {
            let id = action.id().to_string();
            if self.actions.insert(id.clone(), action).is_none() {
                self.order.push(id);
            } else {
                log::debug!("file action `{id}` overridden");
            }
        }

        Ok(())
    }

    /// Resolve an action by id.
    pub fn lookup(&self, id: &str) -> Result<&FileAction> {
        self.actions
            .get(id)
            .ok_or_else(|| FileBrowserError::UnknownAction(id.to_string()))
    }

    pub fn contains(&self, id: &str) -> bool {
        self.actions.contains_key(id)
    }

    /// Actions bound to a key combo, in registration order.
    pub fn actions_for_hotkey(&self, combo: &str) -> Vec<&FileAction> {
        let combo = normalize_hotkey(combo);
        self.iter()
            .filter(|action| {
                action
                    .hotkeys()
                    .iter()
                    .any(|hotkey| normalize_hotkey(hotkey) == combo)
            })
            .collect()
    }

    /// Iterate actions in registration order.
    pub fn iter(&self) -> impl Iterator<Item = &FileAction> {
        self.order.iter().filter_map(|id| self.actions.get(id))
    }

    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }
}

const MODIFIER_ORDER: [&str; 4] = ["ctrl", "alt", "shift", "meta"];

/// Canonical form of a key combo: lowercase, modifiers first in a fixed
/// order, then the key itself.
pub fn normalize_hotkey(combo: &str) -> String {
    let mut modifiers = Vec::new();
    let mut keys = Vec::new();

    for part in combo.split('+') {
        let part = part.trim().to_lowercase();
        if part.is_empty() {
            continue;
        }
        let part = match part.as_str() {
            "control" => String::from("ctrl"),
            "option" => String::from("alt"),
            "cmd" | "command" => String::from("meta"),
            "esc" => String::from("escape"),
            "return" => String::from("enter"),
            "del" => String::from("delete"),
            _ => part,
        };
        if MODIFIER_ORDER.contains(&part.as_str()) {
            if !modifiers.contains(&part) {
                modifiers.push(part);
            }
        } else {
            keys.push(part);
        }
    }

    modifiers.sort_by_key(|modifier| {
        MODIFIER_ORDER
            .iter()
            .position(|known| known == modifier)
            .unwrap_or(MODIFIER_ORDER.len())
    });
    modifiers.extend(keys);
    modifiers.join("+")
}
