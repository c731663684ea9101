use std::time::{Duration, Instant};

/// Deadline timer carrying a payload, driven by explicit clock readings.
///
/// The owner polls it with the current instant; a fired or cancelled
/// timer stays idle until armed again.
#[derive(Debug, Clone)]
pub struct Timer<T> {
    armed: Option<(Instant, T)>,
}

impl<T> Default for Timer<T> {
    fn default() -> Self {
        Self { armed: None }
    }
}

impl<T> Timer<T> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Arm the timer, replacing any pending deadline.
    pub fn arm(&mut self, now: Instant, delay: Duration, payload: T) {
        self.armed = Some((now + delay, payload));
    }

    /// Cancel the pending deadline. Safe to call on an idle timer.
    pub fn cancel(&mut self) -> Option<T> {
        self.armed.take().map(|(_, payload)| payload)
    }

    /// Returns whether a deadline is armed and has not fired yet.
    pub fn is_pending(&self) -> bool {
        self.armed.is_some()
    }

    pub fn deadline(&self) -> Option<Instant> {
        self.armed.as_ref().map(|(deadline, _)| *deadline)
    }

    pub fn payload(&self) -> Option<&T> {
        self.armed.as_ref().map(|(_, payload)| payload)
    }

    /// Fire the timer if its deadline has been reached.
    pub fn poll(&mut self, now: Instant) -> Option<T> {
        match &self.armed {
            Some((deadline, _)) if now >= *deadline => self.cancel(),
            _ => None,
        }
    }
}
