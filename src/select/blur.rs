//! Deferred blur handling
//!
//! A blur does not clear focus right away: a mouse-down on a suggestion row
//! must still be able to select after the field loses focus. Two mechanisms
//! cover this. While the pointer is held on a suggestion the blur is parked
//! and settles on release. Otherwise the clear fires after a grace period.

use std::time::{Duration, Instant};

#[derive(Debug, Clone)]
pub struct BlurTimer {
    grace: Duration,
    pointer_guard: bool,
    pointer_held: bool,
    deadline: Option<Instant>,
    /// Blur waiting for the pointer to be released
    parked: bool,
}

impl BlurTimer {
    pub fn new(grace: Duration, pointer_guard: bool) -> Self {
        Self {
            grace,
            pointer_guard,
            pointer_held: false,
            deadline: None,
            parked: false,
        }
    }

    /// Schedule the clear for a blur that happened at `now`.
    ///
    /// Returns true when the blur should settle immediately.
    pub fn schedule(&mut self, now: Instant) -> bool {
        if self.guard_active() {
            self.deadline = None;
            self.parked = true;
            return false;
        }
        if self.grace.is_zero() {
            self.cancel();
            return true;
        }
        self.deadline = Some(now + self.grace);
        false
    }

    pub fn press_pointer(&mut self) {
        self.pointer_held = true;
    }

    /// Returns true when a parked blur should settle now.
    pub fn release_pointer(&mut self) -> bool {
        self.pointer_held = false;
        std::mem::take(&mut self.parked)
    }

    pub fn is_pointer_held(&self) -> bool {
        self.pointer_held
    }

    /// Consume an expired deadline. Returns true when the blur should settle.
    pub fn take_due(&mut self, now: Instant) -> bool {
        match self.deadline {
            Some(deadline) if now >= deadline => {
                self.deadline = None;
                if self.guard_active() {
                    self.parked = true;
                    false
                } else {
                    true
                }
            }
            _ => false,
        }
    }

    /// Time left until the pending clear, if one is scheduled
    pub fn remaining(&self, now: Instant) -> Option<Duration> {
        self.deadline
            .map(|deadline| deadline.saturating_duration_since(now))
    }

    pub fn is_pending(&self) -> bool {
        self.deadline.is_some() || self.parked
    }

    pub fn cancel(&mut self) {
        self.deadline = None;
        self.parked = false;
    }

    fn guard_active(&self) -> bool {
        self.pointer_guard && self.pointer_held
    }
}

#[cfg(test)]
#[path = "blur_tests.rs"]
mod blur_tests;
