//! Per-instance state container mutated only through [`StoreCommand`]s.

mod command;
mod reducer;
mod state;

use std::rc::Rc;

pub use command::{StoreCommand, StoreEvent};
pub use reducer::{SearchPredicate, default_search_predicate};
pub use state::{ActiveSort, BrowserState, ContextMenuState, LastClick};

use crate::config::BrowserConfig;
use crate::sort::SortCollator;
use reducer::ReduceCtx;

/// State store of one browser instance.
///
/// Reductions are pure and synchronous. Changes are recorded as
/// [`StoreEvent`]s until the presentation layer drains them.
pub struct Store {
    state: BrowserState,
    events: Vec<StoreEvent>,
    collator: Option<Rc<dyn SortCollator>>,
    search: SearchPredicate,
}

impl Store {
    /// Create an empty store seeded with `config`.
    pub fn new(config: BrowserConfig) -> Self {
        Self {
            state: BrowserState::new(config),
            events: Vec::new(),
            collator: None,
            search: default_search_predicate,
        }
    }

    pub(crate) fn with_collator(
        mut self,
        collator: Option<Rc<dyn SortCollator>>,
    ) -> Self {
        self.collator = collator;
        self
    }

    pub(crate) fn with_search_predicate(
        mut self,
        search: SearchPredicate,
    ) -> Self {
        self.search = search;
        self
    }

    /// Immutable snapshot of the current state.
    pub fn state(&self) -> &BrowserState {
        &self.state
    }

    /// Reduce `command`; returns whether any state changed.
    pub fn dispatch(&mut self, command: StoreCommand) -> bool {
        let ctx = ReduceCtx {
            collator: self.collator.as_deref(),
            search: self.search,
        };
        let events = reducer::reduce(&mut self.state, command, &ctx);
        let changed = !events.is_empty();
        self.events.extend(events);
        changed
    }

    /// Take every event recorded since the last drain.
    pub fn drain_events(&mut self) -> Vec<StoreEvent> {
        std::mem::take(&mut self.events)
    }
}

impl std::fmt::Debug for Store {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Store")
            .field("state", &self.state)
            .field("events", &self.events)
            .field("collator", &self.collator.is_some())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::file::FileData;

    #[test]
    fn given_changes_when_drained_then_events_are_returned_once() {
        let mut store = Store::new(BrowserConfig::default());

        let changed = store.dispatch(StoreCommand::SetFiles(vec![
            FileData::file("a", "a.txt"),
        ]));
        let first = store.drain_events();
        let second = store.drain_events();

        assert!(changed);
        assert!(first.contains(&StoreEvent::FilesChanged));
        assert!(second.is_empty());
    }

    #[test]
    fn given_no_op_command_when_dispatched_then_nothing_is_recorded() {
        let mut store = Store::new(BrowserConfig::default());

        let changed = store.dispatch(StoreCommand::ClearSelection);

        assert!(!changed);
        assert!(store.drain_events().is_empty());
    }

    #[test]
    fn given_collator_when_sort_set_then_it_orders_names() {
        let natural: Rc<dyn SortCollator> =
            Rc::new(crate::sort::NaturalCollator);
        let mut store =
            Store::new(BrowserConfig::default()).with_collator(Some(natural));
        store.dispatch(StoreCommand::SetFiles(vec![
            FileData::file("10", "file10"),
            FileData::file("9", "file9"),
        ]));

        store.dispatch(StoreCommand::SetSort {
            action_id: String::from("sort_files_by_name"),
            key: crate::actions::SortKey::Name,
            order: crate::actions::SortOrder::Asc,
        });

        assert_eq!(store.state().display_order(), ["9", "10"]);
    }
}
