use std::time::{Duration, Instant};

use serde::{Deserialize, Serialize};

use crate::file::FileId;
use crate::timer::Timer;

/// Click kind resolved by [`ClickCounter`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ClickType {
    Single,
    Double,
}

/// Groups consecutive clicks on the same file into double clicks.
///
/// The first click is reported as single right away and opens a window
/// of `delay`; a second click on the same file inside that window is a
/// double click and closes it.
#[derive(Debug, Clone)]
pub struct ClickCounter {
    delay: Duration,
    window: Timer<FileId>,
}

impl ClickCounter {
    pub fn new(delay: Duration) -> Self {
        Self {
            delay,
            window: Timer::new(),
        }
    }

    pub fn register(&mut self, file_id: &str, now: Instant) -> ClickType {
        let _ = self.window.poll(now);
        let same_file = self
            .window
            .payload()
            .is_some_and(|pending| pending == file_id);

        if same_file {
            self.window.cancel();
            ClickType::Double
        } else {
            self.window.arm(now, self.delay, file_id.to_string());
            ClickType::Single
        }
    }

    /// Forget any pending first click.
    pub fn reset(&mut self) {
        self.window.cancel();
    }
}
