//! Headless host for the `filedeck` core.
//!
//! Loads a JSON scenario, replays its gestures against a `FileBrowser`
//! and prints every host notification followed by the final state.

mod scenario;

use std::path::PathBuf;
use std::time::{Duration, Instant};

use anyhow::{Context, bail};
use env_logger::Env;
use filedeck::actions::{FileViewMode, SortOrder, extra_actions};
use filedeck::{
    ActionOutcome, ActionPayload, FileActionData, FileBrowser, FileData,
};
use serde::Serialize;

use crate::scenario::{Scenario, Step, load_scenario};

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(Env::default().default_filter_or("info"))
        .format_timestamp_millis()
        .init();

    let Some(path) = std::env::args_os().nth(1).map(PathBuf::from) else {
        bail!("usage: filedeck-replay <scenario.json>");
    };
    let scenario = load_scenario(&path)?;
    let summary = replay(scenario)?;

    let rendered = serde_json::to_string_pretty(&summary)
        .context("failed to render final state")?;
    println!("{rendered}");
    Ok(())
}

fn replay(scenario: Scenario) -> anyhow::Result<Summary> {
    let mut builder = FileBrowser::builder(scenario.config)
        .folder_chain(scenario.folder_chain)
        .files(scenario.files)
        .on_file_action(|data: &FileActionData| -> anyhow::Result<()> {
            println!("notify {}", describe(data));
            Ok(())
        });
    if scenario.extra_actions {
        builder = builder.file_actions(extra_actions());
    }
    let mut browser = builder.build().context("failed to create browser")?;

    let start = Instant::now();
    for (index, step) in scenario.steps.into_iter().enumerate() {
        log::debug!("step {index}: {step:?}");
        let outcome = run_step(&mut browser, step, start)
            .with_context(|| format!("step {index} failed"))?;
        if let Some(ActionOutcome::Rejected(reason)) = &outcome {
            log::info!("step {index} rejected: {reason:?}");
        }
    }

    Ok(Summary::from_browser(&browser))
}

fn run_step(
    browser: &mut FileBrowser,
    step: Step,
    start: Instant,
) -> filedeck::Result<Option<ActionOutcome>> {
    let at = |ms: u64| start + Duration::from_millis(ms);

    let outcome = match step {
        Step::Click {
            file,
            target,
            keys,
            at_ms,
        } => browser.mouse_click(&file, target.into(), keys.into(), at(at_ms))?,
        Step::Key { file, enter, keys } => {
            browser.keyboard_click(&file, enter, keys.into())?
        },
        Step::Hotkey { combo } => browser.hotkey(&combo)?,
        Step::Action { id } => {
            browser.request_action(&id, ActionPayload::None)?
        },
        Step::ContextMenu { file, x, y } => {
            browser.context_menu(file.as_deref(), x, y)?
        },
        Step::StartRename { file } => browser.start_renaming(&file)?,
        Step::EndRename { name } => browser.end_renaming(name.as_deref())?,
        Step::Drag { file } => browser.drag_start(&file)?,
        Step::Drop { target, copy } => browser.drop_on(&target, copy)?,
        Step::Tick { at_ms } => return browser.tick(at(at_ms)),
        Step::OutsideClick => {
            browser.outside_click();
            return Ok(None);
        },
        Step::CloseContextMenu => {
            browser.close_context_menu();
            return Ok(None);
        },
        Step::Hover { target, at_ms } => {
            browser.drag_hover(&target, at(at_ms));
            return Ok(None);
        },
        Step::Leave { target } => {
            browser.drag_leave(&target);
            return Ok(None);
        },
        Step::CancelDrag => {
            browser.drag_cancel();
            return Ok(None);
        },
        Step::Search { text } => {
            browser.set_search(text);
            return Ok(None);
        },
        Step::SetFiles { files } => {
            browser.set_files(files);
            return Ok(None);
        },
    };
    Ok(Some(outcome))
}

fn describe(data: &FileActionData) -> String {
    let ids = |files: &[FileData]| {
        files
            .iter()
            .map(|file| file.id.as_str())
            .collect::<Vec<_>>()
            .join(",")
    };

    let detail = match &data.payload {
        ActionPayload::OpenFiles { files, .. } => {
            format!("files=[{}]", ids(files))
        },
        ActionPayload::MoveFiles {
            destination,
            files,
            copy,
            ..
        } => format!(
            "files=[{}] destination={} copy={copy}",
            ids(files),
            destination.id
        ),
        ActionPayload::RenameFile { file, target_name } => {
            format!("file={} name={target_name}", file.id)
        },
        ActionPayload::ChangeSelection { selection } => {
            let mut selected: Vec<&str> =
                selection.iter().map(String::as_str).collect();
            selected.sort_unstable();
            format!("selection=[{}]", selected.join(","))
        },
        _ => match &data.target {
            Some(target) => format!("target={}", target.id),
            None => String::new(),
        },
    };

    if detail.is_empty() {
        data.action_id.clone()
    } else {
        format!("{} {detail}", data.action_id)
    }
}

/// Final derived state printed after the replay.
#[derive(Debug, Serialize)]
struct Summary {
    instance_id: String,
    display_order: Vec<String>,
    selection: Vec<String>,
    renaming: Option<String>,
    sort: Option<(String, SortOrder)>,
    view: FileViewMode,
    search: String,
    context_menu_open: bool,
    dragging: bool,
}

impl Summary {
    fn from_browser(browser: &FileBrowser) -> Self {
        let state = browser.state();
        let selection = state
            .display_order()
            .iter()
            .filter(|id| state.is_selected(id))
            .cloned()
            .collect();

        Self {
            instance_id: state.instance_id().to_string(),
            display_order: state.display_order().to_vec(),
            selection,
            renaming: state.renaming_file_id().map(str::to_string),
            sort: state
                .sort()
                .map(|sort| (sort.action_id.to_string(), sort.order)),
            view: state.view().mode,
            search: state.search().to_string(),
            context_menu_open: state.context_menu().is_some(),
            dragging: state.drag().is_some(),
        }
    }
}
