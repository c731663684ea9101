use std::cell::RefCell;
use std::collections::HashSet;
use std::rc::Rc;
use std::time::{Duration, Instant};

use filedeck::actions::{FileActionEffect, SelectionTransform, SortOrder, ids};
use filedeck::dnd::{DropRejection, HOVER_OPEN_DELAY};
use filedeck::{
    ActionOutcome, ActionPayload, BrowserConfig, ClickTarget, ClickType,
    FileAction, FileActionData, FileBrowser, FileBrowserError, FileData,
    Modifiers, RejectReason, StoreCommand, StoreEvent,
};

type Notifications = Rc<RefCell<Vec<FileActionData>>>;

struct Harness {
    browser: FileBrowser,
    notifications: Notifications,
}

impl Harness {
    fn new() -> Self {
        Self::with(BrowserConfig::default(), sample_files(), Vec::new())
    }

    fn with(
        config: BrowserConfig,
        files: Vec<FileData>,
        actions: Vec<FileAction>,
    ) -> Self {
        let notifications: Notifications = Rc::default();
        let sink = Rc::clone(&notifications);
        let browser = FileBrowser::builder(config)
            .files(files)
            .folder_chain(sample_chain())
            .file_actions(actions)
            .rename_sanitizer(|proposed: &str, _: &FileData| {
                proposed.trim().replace('/', "")
            })
            .on_file_action(
                move |data: &FileActionData| -> anyhow::Result<()> {
                    sink.borrow_mut().push(data.clone());
                    Ok(())
                },
            )
            .build()
            .expect("browser should build");
        Self {
            browser,
            notifications,
        }
    }

    fn select(&mut self, file_ids: &[&str]) {
        self.browser
            .dispatch(StoreCommand::SetSelection(set_of(file_ids)));
        self.browser.drain_events();
        self.notifications.borrow_mut().clear();
    }

    fn click(&mut self, file_id: &str, modifiers: Modifiers) {
        let outcome = self
            .browser
            .click_file(file_id, ClickType::Single, ClickTarget::Entry, modifiers)
            .expect("click should dispatch");
        assert!(outcome.is_completed(), "{outcome:?}");
    }

    fn selection(&self) -> HashSet<String> {
        self.browser.state().selection().clone()
    }

    fn notified(&self, action_id: &str) -> Vec<FileActionData> {
        self.notifications
            .borrow()
            .iter()
            .filter(|data| data.action_id == action_id)
            .cloned()
            .collect()
    }
}

fn sample_chain() -> Vec<FileData> {
    vec![FileData::folder("root", "/"), FileData::folder("docs", "docs")]
}

fn sample_files() -> Vec<FileData> {
    vec![
        FileData::file("a", "a.txt").renamable(),
        FileData::folder("photos", "photos"),
        FileData::file("b", "b.txt"),
        FileData::folder("archive", "archive"),
        FileData::file("c", "c.txt"),
    ]
}

fn set_of(file_ids: &[&str]) -> HashSet<String> {
    file_ids.iter().map(|id| id.to_string()).collect()
}

fn file_ids(data: &FileActionData) -> Vec<String> {
    match &data.payload {
        ActionPayload::OpenFiles { files, .. }
        | ActionPayload::MoveFiles { files, .. } => {
            files.iter().map(|file| file.id.clone()).collect()
        },
        other => panic!("unexpected payload {other:?}"),
    }
}

#[test]
fn given_default_sort_when_built_then_folders_lead_the_display_order() {
    let harness = Harness::new();

    assert_eq!(
        harness.browser.state().display_order(),
        ["archive", "photos", "a", "b", "c"]
    );
}

#[test]
fn given_equal_names_when_sorted_by_name_then_ties_keep_host_order() {
    let files = vec![
        FileData::file("1", "b"),
        FileData::file("2", "a"),
        FileData::file("3", "a"),
    ];

    let harness = Harness::with(BrowserConfig::default(), files, Vec::new());

    assert_eq!(harness.browser.state().display_order(), ["2", "3", "1"]);
}

#[test]
fn given_active_sort_when_requested_again_then_order_flips_and_folders_stay_first()
 {
    let mut harness = Harness::new();

    let outcome = harness
        .browser
        .request_action(ids::SORT_FILES_BY_NAME, ActionPayload::None)
        .expect("sort action is registered");

    assert!(outcome.is_completed());
    let state = harness.browser.state();
    assert_eq!(state.sort().map(|sort| sort.order), Some(SortOrder::Desc));
    assert_eq!(state.display_order(), ["photos", "archive", "c", "b", "a"]);
}

#[test]
fn given_selection_when_file_double_clicked_then_only_that_file_opens() {
    let mut harness = Harness::new();
    harness.select(&["b", "c"]);

    harness
        .browser
        .click_file("a", ClickType::Double, ClickTarget::Entry, Modifiers::empty())
        .expect("click should dispatch");

    let opened = harness.notified(ids::OPEN_FILES);
    assert_eq!(opened.len(), 1);
    assert_eq!(file_ids(&opened[0]), ["a"]);
}

#[test]
fn given_two_quick_raw_clicks_when_counted_then_the_file_opens() {
    let mut harness = Harness::new();
    let start = Instant::now();

    for offset in [0, 120] {
        harness
            .browser
            .mouse_click(
                "a",
                ClickTarget::Entry,
                Modifiers::empty(),
                start + Duration::from_millis(offset),
            )
            .expect("click should dispatch");
    }

    let opened = harness.notified(ids::OPEN_FILES);
    assert_eq!(opened.len(), 1);
    assert_eq!(file_ids(&opened[0]), ["a"]);
}

#[test]
fn given_ctrl_clicks_when_same_file_toggled_twice_then_selection_is_restored()
{
    let mut harness = Harness::new();
    harness.select(&["a"]);

    harness.click("b", Modifiers::CTRL);
    assert_eq!(harness.selection(), set_of(&["a", "b"]));
    harness.click("b", Modifiers::CTRL);

    assert_eq!(harness.selection(), set_of(&["a"]));
}

#[test]
fn given_anchor_when_shift_clicked_either_way_then_ranges_are_equal() {
    let mut forward = Harness::new();
    forward.click("a", Modifiers::empty());
    forward.click("c", Modifiers::SHIFT);

    let mut backward = Harness::new();
    backward.click("c", Modifiers::empty());
    backward.click("a", Modifiers::SHIFT);

    assert_eq!(forward.selection(), set_of(&["a", "b", "c"]));
    assert_eq!(forward.selection(), backward.selection());
}

#[test]
fn given_cleared_selection_when_shift_clicked_then_no_range_is_selected() {
    let mut harness = Harness::new();
    harness.click("a", Modifiers::empty());

    let cleared = harness.browser.hotkey("escape").expect("escape resolves");
    harness.click("c", Modifiers::SHIFT);

    assert!(cleared.is_completed(), "{cleared:?}");
    assert_eq!(harness.selection(), set_of(&["c"]));
}

#[test]
fn given_outside_click_when_shift_clicked_then_no_range_is_selected() {
    let mut harness = Harness::new();
    harness.click("c", Modifiers::empty());

    harness.browser.outside_click();
    assert!(harness.browser.state().last_click().is_none());
    harness.click("a", Modifiers::SHIFT);

    assert_eq!(harness.selection(), set_of(&["a"]));
}

#[test]
fn given_sole_selected_file_when_clicked_again_then_it_is_deselected() {
    let mut harness = Harness::new();

    harness.click("b", Modifiers::empty());
    harness.click("b", Modifiers::empty());

    assert!(harness.selection().is_empty());
}

#[test]
fn given_simple_deselection_disabled_when_clicked_again_then_it_stays() {
    let config = BrowserConfig {
        disable_simple_deselection: true,
        ..BrowserConfig::default()
    };
    let mut harness = Harness::with(config, sample_files(), Vec::new());

    harness.click("b", Modifiers::empty());
    harness.click("b", Modifiers::empty());

    assert_eq!(harness.selection(), set_of(&["b"]));
}

#[test]
fn given_click_when_selection_changes_then_host_is_notified_once() {
    let mut harness = Harness::new();

    harness.click("a", Modifiers::empty());

    let changes = harness.notified(ids::CHANGE_SELECTION);
    assert_eq!(changes.len(), 1);
    assert_eq!(
        changes[0].payload,
        ActionPayload::ChangeSelection {
            selection: set_of(&["a"]),
        }
    );
    let mouse = harness.notified(ids::MOUSE_CLICK_FILE);
    assert_eq!(mouse.len(), 1);
    assert_eq!(mouse[0].selected_files.len(), 1);
}

#[test]
fn given_empty_selection_when_clear_requested_then_nothing_changes() {
    let mut harness = Harness::new();
    harness.browser.drain_events();

    let outcome = harness
        .browser
        .hotkey("Escape")
        .expect("escape is bound");

    assert!(outcome.is_completed());
    let events = harness.browser.drain_events();
    assert!(
        !events
            .iter()
            .any(|event| matches!(event, StoreEvent::SelectionChanged(_))),
        "{events:?}"
    );
    assert!(harness.notified(ids::CHANGE_SELECTION).is_empty());
}

#[test]
fn given_transforms_when_none_or_empty_returned_then_events_differ() {
    let actions = vec![
        FileAction::new("keep_selection")
            .with_selection_transform(SelectionTransform::Custom(|_| None)),
        FileAction::new("drop_selection").with_selection_transform(
            SelectionTransform::Custom(|_| Some(HashSet::new())),
        ),
    ];
    let mut harness =
        Harness::with(BrowserConfig::default(), sample_files(), actions);
    harness.select(&["a"]);

    harness
        .browser
        .request_action("keep_selection", ActionPayload::None)
        .expect("action is registered");
    let kept = harness.browser.drain_events();
    harness
        .browser
        .request_action("drop_selection", ActionPayload::None)
        .expect("action is registered");
    let dropped = harness.browser.drain_events();

    assert!(kept.is_empty(), "{kept:?}");
    assert_eq!(dropped, vec![StoreEvent::SelectionChanged(HashSet::new())]);
    assert_eq!(harness.notified(ids::CHANGE_SELECTION).len(), 1);
}

#[test]
fn given_select_all_hotkey_when_pressed_then_every_selectable_file_is_selected()
 {
    let mut files = sample_files();
    files.push(FileData::file("locked", "locked.bin").not_selectable());
    let mut harness = Harness::with(BrowserConfig::default(), files, Vec::new());

    harness.browser.hotkey("Ctrl+A").expect("ctrl+a is bound");

    assert_eq!(
        harness.selection(),
        set_of(&["a", "b", "c", "photos", "archive"])
    );
}

#[test]
fn given_empty_selection_when_open_selection_requested_then_it_is_rejected() {
    let mut harness = Harness::new();

    let outcome = harness.browser.hotkey("enter").expect("enter is bound");

    assert!(matches!(
        outcome,
        ActionOutcome::Rejected(RejectReason::SelectionRequired)
    ));
    assert!(harness.notifications.borrow().is_empty());
}

#[test]
fn given_unopenable_file_in_selection_when_opened_then_action_is_filtered() {
    let mut files = sample_files();
    files.push(FileData::file("sealed", "sealed.bin").not_openable());
    let mut harness = Harness::with(BrowserConfig::default(), files, Vec::new());
    harness.select(&["a", "sealed"]);

    let outcome = harness.browser.hotkey("enter").expect("enter is bound");

    let ActionOutcome::Rejected(RejectReason::FilteredOut(file_id)) = outcome
    else {
        panic!("expected a filtered rejection, got {outcome:?}");
    };
    assert_eq!(file_id, "sealed");
    assert!(harness.notified(ids::OPEN_FILES).is_empty());
}

#[test]
fn given_selection_when_open_selection_requested_then_files_open() {
    let mut harness = Harness::new();
    harness.select(&["a", "b"]);

    harness.browser.hotkey("enter").expect("enter is bound");

    let opened = harness.notified(ids::OPEN_FILES);
    assert_eq!(opened.len(), 1);
    assert_eq!(file_ids(&opened[0]), ["a", "b"]);
}

#[test]
fn given_unknown_action_when_requested_then_error_is_returned() {
    let mut harness = Harness::new();

    let result = harness
        .browser
        .request_action("does_not_exist", ActionPayload::None);

    assert!(matches!(
        result,
        Err(FileBrowserError::UnknownAction(id)) if id == "does_not_exist"
    ));
}

#[test]
fn given_failing_host_callback_when_action_runs_then_failure_is_reported() {
    let browser = FileBrowser::builder(BrowserConfig::default())
        .files(sample_files())
        .file_actions(vec![FileAction::new("explode")])
        .on_file_action(|data: &FileActionData| -> anyhow::Result<()> {
            if data.action_id == "explode" {
                anyhow::bail!("host refused");
            }
            Ok(())
        })
        .build();
    let mut browser = browser.expect("browser should build");

    let failed = browser
        .request_action("explode", ActionPayload::None)
        .expect("failures are outcomes, not errors");
    let next = browser
        .hotkey("ctrl+a")
        .expect("dispatching continues after a failure");

    let ActionOutcome::Failed(FileBrowserError::ActionEffect {
        action_id,
        message,
    }) = failed
    else {
        panic!("expected an effect failure, got {failed:?}");
    };
    assert_eq!(action_id, "explode");
    assert!(message.contains("host refused"));
    assert!(next.is_completed());
}

struct Recurse;

impl FileActionEffect for Recurse {
    fn apply(
        &self,
        data: &FileActionData,
        browser: &mut FileBrowser,
    ) -> anyhow::Result<()> {
        match browser.request_action(&data.action_id, ActionPayload::None)? {
            ActionOutcome::Failed(err) => Err(err.into()),
            _ => Ok(()),
        }
    }
}

#[test]
fn given_self_dispatching_effect_when_requested_then_depth_guard_stops_it() {
    let actions = vec![FileAction::new("recurse").with_custom_effect(Recurse)];
    let mut harness =
        Harness::with(BrowserConfig::default(), sample_files(), actions);

    let outcome = harness
        .browser
        .request_action("recurse", ActionPayload::None)
        .expect("the guard surfaces as a failed outcome");

    let ActionOutcome::Failed(err) = outcome else {
        panic!("expected a failure, got {outcome:?}");
    };
    assert!(err.to_string().contains("exceeded dispatch depth"), "{err}");
    assert!(harness.notified("recurse").is_empty());

    let after = harness.browser.hotkey("ctrl+a").expect("guard resets");
    assert!(after.is_completed());
}

#[test]
fn given_selected_folder_when_dropped_onto_itself_then_no_move_is_issued() {
    let mut harness = Harness::new();
    harness.select(&["photos", "a"]);

    harness.browser.drag_start("photos").expect("drag starts");
    let outcome = harness
        .browser
        .drop_on("photos", false)
        .expect("drop is handled");

    let ActionOutcome::Rejected(RejectReason::Drop(reason)) = outcome else {
        panic!("expected a drop rejection, got {outcome:?}");
    };
    assert_eq!(reason, DropRejection::ProhibitedFile(String::from("photos")));
    assert!(harness.notified(ids::MOVE_FILES).is_empty());
    assert!(harness.browser.state().drag().is_none());
}

#[test]
fn given_selected_folder_when_dropped_onto_sibling_then_one_move_is_issued() {
    let mut harness = Harness::new();
    harness.select(&["photos", "a"]);

    harness.browser.drag_start("photos").expect("drag starts");
    let outcome = harness
        .browser
        .drop_on("archive", false)
        .expect("drop is handled");

    assert!(outcome.is_completed(), "{outcome:?}");
    let moves = harness.notified(ids::MOVE_FILES);
    assert_eq!(moves.len(), 1);
    assert_eq!(file_ids(&moves[0]), ["photos", "a"]);
    assert_eq!(
        moves[0].target.as_ref().map(|file| file.id.as_str()),
        Some("archive")
    );
    assert_eq!(harness.selection(), set_of(&["photos", "a"]));
}

#[test]
fn given_selected_folder_when_unselected_file_dropped_on_it_then_it_is_refused()
 {
    let mut harness = Harness::new();
    harness.select(&["archive"]);

    harness.browser.drag_start("b").expect("drag starts");
    let outcome = harness
        .browser
        .drop_on("archive", false)
        .expect("drop is handled");

    assert!(matches!(
        outcome,
        ActionOutcome::Rejected(RejectReason::Drop(
            DropRejection::SelectedTarget
        ))
    ));
    assert!(harness.notified(ids::MOVE_FILES).is_empty());
    assert!(harness.browser.state().drag().is_none());
}

#[test]
fn given_unselected_file_when_dragged_then_selection_is_not_mutated() {
    let mut harness = Harness::new();
    harness.select(&["a"]);

    harness.browser.drag_start("b").expect("drag starts");
    harness
        .browser
        .drop_on("archive", true)
        .expect("drop is handled");

    let moves = harness.notified(ids::MOVE_FILES);
    assert_eq!(file_ids(&moves[0]), ["b"]);
    assert!(matches!(
        moves[0].payload,
        ActionPayload::MoveFiles { copy: true, .. }
    ));
    assert_eq!(harness.selection(), set_of(&["a"]));
}

#[test]
fn given_drag_and_drop_disabled_when_drag_starts_then_it_is_rejected() {
    let config = BrowserConfig {
        disable_drag_and_drop: true,
        ..BrowserConfig::default()
    };
    let mut harness = Harness::with(config, sample_files(), Vec::new());

    let outcome = harness.browser.drag_start("a").expect("drag is handled");

    assert!(matches!(
        outcome,
        ActionOutcome::Rejected(RejectReason::DragAndDropDisabled)
    ));
    assert!(harness.browser.state().drag().is_none());
}

#[test]
fn given_hover_when_pointer_leaves_one_ms_early_then_folder_never_opens() {
    let mut harness = Harness::new();
    let start = Instant::now();
    harness.browser.drag_start("a").expect("drag starts");

    harness.browser.drag_hover("archive", start);
    let early = harness
        .browser
        .tick(start + HOVER_OPEN_DELAY - Duration::from_millis(1))
        .expect("tick succeeds");
    harness.browser.drag_leave("archive");
    let late = harness
        .browser
        .tick(start + HOVER_OPEN_DELAY * 2)
        .expect("tick succeeds");

    assert!(early.is_none());
    assert!(late.is_none());
    assert!(!harness.browser.hover_open_pending());
    assert!(harness.notified(ids::OPEN_FILES).is_empty());
}

#[test]
fn given_sustained_hover_when_delay_elapses_then_folder_opens() {
    let mut harness = Harness::new();
    let start = Instant::now();
    harness.browser.drag_start("a").expect("drag starts");

    harness.browser.drag_hover("photos", start);
    let fired = harness
        .browser
        .tick(start + HOVER_OPEN_DELAY)
        .expect("tick succeeds");

    assert!(fired.is_some_and(|outcome| outcome.is_completed()));
    let opened = harness.notified(ids::OPEN_FILES);
    assert_eq!(file_ids(&opened[0]), ["photos"]);
}

#[test]
fn given_opened_hover_target_when_pointer_stays_then_it_opens_only_once() {
    let mut harness = Harness::new();
    let start = Instant::now();
    harness.browser.drag_start("a").expect("drag starts");
    harness.browser.drag_hover("photos", start);
    let _ = harness
        .browser
        .tick(start + HOVER_OPEN_DELAY)
        .expect("tick succeeds");

    harness
        .browser
        .drag_hover("photos", start + HOVER_OPEN_DELAY * 2);
    let again = harness
        .browser
        .tick(start + HOVER_OPEN_DELAY * 4)
        .expect("tick succeeds");

    assert!(again.is_none());
    assert!(!harness.browser.hover_open_pending());
    assert_eq!(harness.notified(ids::OPEN_FILES).len(), 1);
}

#[test]
fn given_selected_renamable_file_when_name_clicked_then_rename_starts() {
    let mut harness = Harness::new();
    harness.click("a", Modifiers::empty());

    harness
        .browser
        .click_file("a", ClickType::Single, ClickTarget::Name, Modifiers::empty())
        .expect("click should dispatch");

    assert_eq!(harness.browser.state().renaming_file_id(), Some("a"));
    assert_eq!(harness.selection(), set_of(&["a"]));
    assert_eq!(harness.notified(ids::START_RENAMING_FILE).len(), 1);
}

#[test]
fn given_unselected_file_when_name_clicked_then_it_is_selected_instead() {
    let mut harness = Harness::new();

    harness
        .browser
        .click_file("a", ClickType::Single, ClickTarget::Name, Modifiers::empty())
        .expect("click should dispatch");

    assert_eq!(harness.browser.state().renaming_file_id(), None);
    assert_eq!(harness.selection(), set_of(&["a"]));
}

#[test]
fn given_rename_in_progress_when_ended_then_sanitized_name_is_requested() {
    let mut harness = Harness::new();
    harness.browser.start_renaming("a").expect("rename starts");

    harness
        .browser
        .end_renaming(Some(" notes/2024.txt "))
        .expect("rename ends");

    let renames = harness.notified(ids::RENAME_FILE);
    assert_eq!(renames.len(), 1);
    let ActionPayload::RenameFile { file, target_name } = &renames[0].payload
    else {
        panic!("unexpected payload {:?}", renames[0].payload);
    };
    assert_eq!(file.id, "a");
    assert_eq!(target_name, "notes2024.txt");
    assert_eq!(harness.browser.state().renaming_file_id(), None);
}

#[test]
fn given_blank_or_unchanged_name_when_rename_ends_then_it_is_cancelled() {
    let mut harness = Harness::new();

    for name in ["   ", "a.txt"] {
        harness.browser.start_renaming("a").expect("rename starts");
        harness.browser.end_renaming(Some(name)).expect("rename ends");
        assert_eq!(harness.browser.state().renaming_file_id(), None);
    }

    assert!(harness.notified(ids::RENAME_FILE).is_empty());
}

#[test]
fn given_non_renamable_file_when_rename_requested_then_state_is_unchanged() {
    let mut harness = Harness::new();

    let outcome = harness.browser.start_renaming("b").expect("handled");

    assert!(outcome.is_completed());
    assert_eq!(harness.browser.state().renaming_file_id(), None);
}

#[test]
fn given_unselected_file_when_right_clicked_then_selection_moves_to_it() {
    let mut harness = Harness::new();
    harness.select(&["a"]);

    harness
        .browser
        .context_menu(Some("b"), 100.0, 50.0)
        .expect("menu opens");

    assert_eq!(harness.selection(), set_of(&["b"]));
    let menu = harness
        .browser
        .state()
        .context_menu()
        .cloned()
        .expect("menu is shown");
    assert_eq!(menu.trigger_file_id.as_deref(), Some("b"));
    assert_eq!((menu.mouse_x, menu.mouse_y), (98.0, 46.0));

    harness.browser.close_context_menu();
    assert!(harness.browser.state().context_menu().is_none());
}

#[test]
fn given_multi_selection_when_member_right_clicked_then_it_is_kept() {
    let mut harness = Harness::new();
    harness.select(&["a", "b"]);

    harness
        .browser
        .context_menu(Some("a"), 10.0, 10.0)
        .expect("menu opens");

    assert_eq!(harness.selection(), set_of(&["a", "b"]));
}

#[test]
fn given_selection_disabled_when_right_clicked_then_selection_is_untouched() {
    let config = BrowserConfig {
        disable_selection: true,
        ..BrowserConfig::default()
    };
    let mut harness = Harness::with(config, sample_files(), Vec::new());

    harness
        .browser
        .context_menu(Some("a"), 10.0, 10.0)
        .expect("menu opens");

    assert!(harness.selection().is_empty());
    assert!(harness.browser.state().context_menu().is_some());
}

#[test]
fn given_folder_chain_when_parent_opened_then_parent_is_requested() {
    let mut harness = Harness::new();

    harness
        .browser
        .request_action(ids::OPEN_PARENT_FOLDER, ActionPayload::None)
        .expect("action is registered");

    let opened = harness.notified(ids::OPEN_FILES);
    assert_eq!(file_ids(&opened[0]), ["root"]);
}

#[test]
fn given_unopenable_parent_when_parent_opened_then_nothing_opens() {
    let mut harness = Harness::new();
    harness.browser.set_folder_chain(vec![
        FileData::folder("root", "/").not_openable(),
        FileData::folder("docs", "docs"),
    ]);

    let outcome = harness
        .browser
        .request_action(ids::OPEN_PARENT_FOLDER, ActionPayload::None)
        .expect("action is registered");

    assert!(outcome.is_completed());
    assert!(harness.notified(ids::OPEN_FILES).is_empty());
}

#[test]
fn given_empty_selection_when_enter_pressed_on_entry_then_it_opens() {
    let mut harness = Harness::new();

    harness
        .browser
        .keyboard_click("c", true, Modifiers::empty())
        .expect("key click dispatches");

    let opened = harness.notified(ids::OPEN_FILES);
    assert_eq!(file_ids(&opened[0]), ["c"]);
    let anchor = harness.browser.state().last_click().cloned();
    assert_eq!(anchor.map(|click| click.index), Some(4));
}

#[test]
fn given_selection_when_enter_pressed_on_entry_then_nothing_opens() {
    let mut harness = Harness::new();
    harness.select(&["a"]);

    harness
        .browser
        .keyboard_click("c", true, Modifiers::empty())
        .expect("key click dispatches");

    assert!(harness.notified(ids::OPEN_FILES).is_empty());
}

#[test]
fn given_selection_when_clicked_outside_then_it_clears_and_notifies() {
    let mut harness = Harness::new();
    harness.select(&["a", "b"]);

    harness.browser.outside_click();

    assert!(harness.selection().is_empty());
    assert_eq!(harness.notified(ids::CHANGE_SELECTION).len(), 1);
}

#[test]
fn given_outside_clearing_disabled_when_clicked_outside_then_it_is_kept() {
    let config = BrowserConfig {
        clear_selection_on_outside_click: false,
        ..BrowserConfig::default()
    };
    let mut harness = Harness::with(config, sample_files(), Vec::new());
    harness.select(&["a"]);

    harness.browser.outside_click();

    assert_eq!(harness.selection(), set_of(&["a"]));
}

#[test]
fn given_hidden_selected_file_when_hidden_files_toggled_off_then_it_is_pruned()
 {
    let mut files = sample_files();
    files.push(FileData::file("dot", ".env").hidden());
    let mut harness = Harness::with(BrowserConfig::default(), files, Vec::new());
    harness.select(&["dot", "a"]);

    harness.browser.hotkey("ctrl+h").expect("ctrl+h is bound");

    assert!(!harness.browser.state().display_order().contains(&"dot".into()));
    assert_eq!(harness.selection(), set_of(&["a"]));
    assert_eq!(harness.notified(ids::CHANGE_SELECTION).len(), 1);
}

#[test]
fn given_selected_file_removed_when_files_replaced_then_host_is_notified() {
    let mut harness = Harness::new();
    harness.select(&["a", "b"]);

    harness.browser.set_files(vec![FileData::file("a", "a.txt")]);

    assert_eq!(harness.selection(), set_of(&["a"]));
    let changes = harness.notified(ids::CHANGE_SELECTION);
    assert_eq!(changes.len(), 1);
}

#[test]
fn given_search_when_set_then_non_matching_files_leave_display_and_selection()
{
    let mut harness = Harness::new();
    harness.select(&["a", "b"]);

    harness.browser.set_search("A.T");

    assert_eq!(harness.browser.state().display_order(), ["a"]);
    assert_eq!(harness.selection(), set_of(&["a"]));
}

#[test]
fn given_view_action_when_requested_then_view_changes() {
    let mut harness = Harness::new();

    harness
        .browser
        .request_action(ids::ENABLE_LIST_VIEW, ActionPayload::None)
        .expect("action is registered");

    assert_eq!(
        harness.browser.state().view(),
        filedeck::actions::FileViewConfig::LIST
    );
    assert_eq!(harness.notified(ids::ENABLE_LIST_VIEW).len(), 1);
}
