//! Headless file browser core: file actions, selection, sorting and
//! drag-and-drop.
//!
//! The crate owns the state-machine side of a file browser widget and
//! leaves rendering to the host:
//! - [`actions`] holds the file action catalog and the id-keyed
//!   [`ActionRegistry`],
//! - [`store`] keeps per-instance [`BrowserState`], mutated only through
//!   pure reductions that record [`StoreEvent`]s,
//! - [`selection`] and [`sort`] are the pure selection and display-order
//!   engines,
//! - [`dnd`] validates drops and drives hover-to-open,
//! - [`FileBrowser`] ties them together and runs the action dispatcher.
//!
//! Front-ends usually:
//! 1. Build a [`FileBrowser`] with [`FileBrowser::builder`], passing the
//!    [`BrowserConfig`], extra actions and a [`FileActionHandler`].
//! 2. Feed host data with `set_files` / `set_folder_chain` and raw gestures
//!    with `mouse_click`, `keyboard_click`, `hotkey`, `drag_start`,
//!    `drop_on` and friends, calling `tick` to advance timers.
//! 3. Re-render from [`FileBrowser::state`] after draining
//!    [`FileBrowser::drain_events`].
//!
//! ```no_run
//! use filedeck::{BrowserConfig, FileActionData, FileBrowser, FileData};
//!
//! let mut browser = FileBrowser::builder(BrowserConfig::default())
//!     .files(vec![FileData::file("readme", "README.md")])
//!     .on_file_action(|data: &FileActionData| -> anyhow::Result<()> {
//!         println!("{}", data.action_id);
//!         Ok(())
//!     })
//!     .build()?;
//! browser.hotkey("ctrl+a")?;
//! # Ok::<(), filedeck::FileBrowserError>(())
//! ```

pub mod actions;
mod browser;
mod click;
mod config;
mod dispatcher;
pub mod dnd;
mod error;
mod file;
pub mod selection;
pub mod sort;
pub mod store;
mod timer;

pub use actions::{ActionRegistry, FileAction};
pub use browser::{FileBrowser, FileBrowserBuilder, RenameSanitizer};
pub use click::{ClickCounter, ClickType};
pub use config::{BrowserConfig, load_config};
pub use dispatcher::{
    ActionOutcome, ActionPayload, ClickTarget, FileActionData,
    FileActionHandler, MAX_DISPATCH_DEPTH, Modifiers, RejectReason,
};
pub use error::{FileBrowserError, Result};
pub use file::{FileData, FileId};
pub use store::{BrowserState, StoreCommand, StoreEvent};
pub use timer::Timer;
