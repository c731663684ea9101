//! File action catalog: action metadata, built-in definitions and the
//! id-keyed registry.

pub mod definitions;
pub mod ids;
pub mod model;
pub mod registry;

pub use definitions::{default_actions, essential_actions, extra_actions};
pub use model::{
    ActionButton, ActionEffect, ActionOption, FileAction, FileActionEffect,
    FileFilter, FileViewConfig, FileViewMode, SelectionTransform,
    SelectionTransformInput, SortKey, SortOrder, SortValue,
};
pub use registry::{ActionRegistry, normalize_hotkey};
