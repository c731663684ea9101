use std::collections::{HashMap, HashSet};

use super::command::{StoreCommand, StoreEvent};
use super::state::{BrowserState, SortSlot};
use crate::file::{FileData, FileId};
use crate::selection::{self, Selection};
use crate::sort::{SortCollator, compute_display_order};

/// Decides whether a file matches the active search string.
pub type SearchPredicate = fn(&str, &FileData) -> bool;

/// Case-insensitive substring match on the file name.
pub fn default_search_predicate(search: &str, file: &FileData) -> bool {
    file.name.to_lowercase().contains(&search.to_lowercase())
}

/// Collaborators the reducer needs to derive the display order.
pub(crate) struct ReduceCtx<'a> {
    pub(crate) collator: Option<&'a dyn SortCollator>,
    pub(crate) search: SearchPredicate,
}

/// Reduce a store command into state updates and change events.
///
/// No event is produced when the command leaves the state as it was.
pub(crate) fn reduce(
    state: &mut BrowserState,
    command: StoreCommand,
    ctx: &ReduceCtx<'_>,
) -> Vec<StoreEvent> {
    use StoreCommand::*;

    let mut events = Vec::new();
    match command {
        SetFiles(files) => reduce_set_files(state, files, ctx, &mut events),
        SetFolderChain(chain) => {
            if state.folder_chain != chain {
                state.folder_chain = chain;
                events.push(StoreEvent::FolderChainChanged);
            }
        },
        SetSelection(next) => {
            if !state.config.disable_selection {
                reset_selection(state, next, &mut events);
            }
        },
        SelectFiles { file_ids, reset } => {
            if !state.config.disable_selection {
                let mut next = if reset {
                    Selection::new()
                } else {
                    state.selection.clone()
                };
                next.extend(file_ids);
                replace_selection(state, next, &mut events);
            }
        },
        SelectFile {
            file_id,
            exclusive,
            toggle,
        } => {
            if !state.config.disable_selection {
                let is_selectable = |id: &str| state.is_selectable(id);
                let next = match (exclusive, toggle) {
                    (true, _) => selection::exclusive_select(
                        &state.selection,
                        &file_id,
                        toggle,
                        is_selectable,
                    ),
                    (false, true) => selection::toggle_select(
                        &state.selection,
                        &file_id,
                        is_selectable,
                    ),
                    (false, false) => selection::add_select(
                        &state.selection,
                        &file_id,
                        is_selectable,
                    ),
                };
                replace_selection(state, next, &mut events);
            }
        },
        ToggleSelection { file_id } => {
            if !state.config.disable_selection {
                let next = selection::toggle_select(
                    &state.selection,
                    &file_id,
                    |id| state.is_selectable(id),
                );
                replace_selection(state, next, &mut events);
            }
        },
        SelectRange { start, end } => {
            if !state.config.disable_selection {
                let next = selection::range_select(
                    &state.display_order,
                    start,
                    end,
                    |id| state.is_selectable(id),
                );
                replace_selection(state, next, &mut events);
            }
        },
        ClearSelection => {
            if !state.config.disable_selection {
                reset_selection(state, selection::clear(), &mut events);
            }
        },
        SetLastClick(last_click) => {
            if state.last_click != last_click {
                state.last_click = last_click;
                events.push(StoreEvent::LastClickChanged);
            }
        },
        StartRenaming { file_id } => {
            let renamable = state.file(&file_id).is_some_and(|file| {
                file.is_renamable()
            });
            if renamable
                && state.renaming_file_id.as_deref() != Some(file_id.as_str())
            {
                state.renaming_file_id = Some(file_id.clone());
                events.push(StoreEvent::RenamingChanged(Some(file_id)));
            }
        },
        EndRenaming => {
            if state.renaming_file_id.take().is_some() {
                events.push(StoreEvent::RenamingChanged(None));
            }
        },
        SetSort {
            action_id,
            key,
            order,
        } => {
            let unchanged = state.sort.as_ref().is_some_and(|slot| {
                slot.action_id == action_id && slot.order == order
            });
            if !unchanged {
                state.sort = Some(SortSlot {
                    action_id,
                    key,
                    order,
                });
                events.push(StoreEvent::SortChanged);
                refresh_display(state, ctx, &mut events);
            }
        },
        SetView(view) => {
            if state.view != view {
                state.view = view;
                events.push(StoreEvent::ViewChanged);
            }
        },
        SetOption { id, value } => {
            if state.options.get(&id) != Some(&value) {
                state.options.insert(id.clone(), value);
                events.push(StoreEvent::OptionChanged { id, value });
                refresh_display(state, ctx, &mut events);
            }
        },
        SetSearch(search) => {
            if state.search != search {
                state.search = search;
                events.push(StoreEvent::SearchChanged);
                refresh_display(state, ctx, &mut events);
            }
        },
        ShowContextMenu(menu) => {
            if state.context_menu.as_ref() != Some(&menu) {
                state.context_menu = Some(menu);
                events.push(StoreEvent::ContextMenuChanged);
            }
        },
        HideContextMenu => {
            if state.context_menu.take().is_some() {
                events.push(StoreEvent::ContextMenuChanged);
            }
        },
        SetDrag(drag) => {
            if state.drag != drag {
                state.drag = drag;
                events.push(StoreEvent::DragChanged);
            }
        },
    }
    events
}

fn reduce_set_files(
    state: &mut BrowserState,
    files: Vec<FileData>,
    ctx: &ReduceCtx<'_>,
    events: &mut Vec<StoreEvent>,
) {
    let files = dedupe_files(files);
    if state.files == files {
        return;
    }

    state.file_index = files
        .iter()
        .enumerate()
        .map(|(index, file)| (file.id.clone(), index))
        .collect::<HashMap<_, _>>();
    state.files = files;
    events.push(StoreEvent::FilesChanged);

    refresh_display(state, ctx, events);
    prune_stale_references(state, events);
}

fn dedupe_files(files: Vec<FileData>) -> Vec<FileData> {
    let mut seen: HashSet<FileId> = HashSet::with_capacity(files.len());
    files
        .into_iter()
        .filter(|file| {
            let fresh = seen.insert(file.id.clone());
            if !fresh {
                log::warn!(
                    "dropping file `{}` with duplicate id `{}`",
                    file.name,
                    file.id
                );
            }
            fresh
        })
        .collect()
}

/// Recompute the display order and prune selection of filtered files.
fn refresh_display(
    state: &mut BrowserState,
    ctx: &ReduceCtx<'_>,
    events: &mut Vec<StoreEvent>,
) {
    let mut order = compute_display_order(
        &state.files,
        state.sort_state(),
        state.display_options(),
        ctx.collator,
    );

    if !state.search.is_empty() {
        let search = state.search.as_str();
        let (shown, filtered): (Vec<FileId>, Vec<FileId>) =
            order.file_ids.into_iter().partition(|id| {
                state.file(id).is_some_and(|file| (ctx.search)(search, file))
            });
        order.file_ids = shown;
        order.hidden_file_ids.extend(filtered);
    }

    if state.display_order != order.file_ids
        || state.hidden_file_ids != order.hidden_file_ids
    {
        state.display_order = order.file_ids;
        state.hidden_file_ids = order.hidden_file_ids;
        events.push(StoreEvent::DisplayOrderChanged);
    }

    let kept = selection::retain_selectable(&state.selection, |id| {
        state.is_selectable(id)
    });
    replace_selection(state, kept, events);
}

fn prune_stale_references(
    state: &mut BrowserState,
    events: &mut Vec<StoreEvent>,
) {
    let last_click_stale = state
        .last_click
        .as_ref()
        .is_some_and(|click| state.file(&click.file_id).is_none());
    if last_click_stale {
        state.last_click = None;
        events.push(StoreEvent::LastClickChanged);
    }

    let renaming_stale = state.renaming_file_id.as_deref().is_some_and(|id| {
        !state.file(id).is_some_and(FileData::is_renamable)
    });
    if renaming_stale {
        state.renaming_file_id = None;
        events.push(StoreEvent::RenamingChanged(None));
    }

    let menu_stale = state.context_menu.as_ref().is_some_and(|menu| {
        menu.trigger_file_id
            .as_deref()
            .is_some_and(|id| state.file(id).is_none())
    });
    if menu_stale {
        state.context_menu = None;
        events.push(StoreEvent::ContextMenuChanged);
    }
}

/// Replace the selection wholesale. Emptying a non-empty selection also
/// drops the range anchor.
fn reset_selection(
    state: &mut BrowserState,
    next: Selection,
    events: &mut Vec<StoreEvent>,
) {
    let had_selection = !state.selection.is_empty();
    replace_selection(state, next, events);
    if had_selection
        && state.selection.is_empty()
        && state.last_click.take().is_some()
    {
        events.push(StoreEvent::LastClickChanged);
    }
}

fn replace_selection(
    state: &mut BrowserState,
    next: Selection,
    events: &mut Vec<StoreEvent>,
) {
    let next = selection::retain_selectable(&next, |id| state.is_selectable(id));
    if state.selection != next {
        state.selection = next.clone();
        events.push(StoreEvent::SelectionChanged(next));
    }
}
