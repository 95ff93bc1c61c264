//! Bookkeeping for the requestAnimationFrame loop
//!
//! Shared between `DinoGame` and its frame callback. At most one frame
//! request is in flight at a time.

use std::cell::Cell;

#[derive(Debug, Default)]
pub struct FrameSchedule {
    running: Cell<bool>,
    pending: Cell<Option<i32>>,
}

impl FrameSchedule {
    pub fn is_running(&self) -> bool {
        self.running.get()
    }

    pub fn start(&self) {
        self.running.set(true);
    }

    /// Stop the loop; returns the request to cancel, if any
    pub fn stop(&self) -> Option<i32> {
        self.running.set(false);
        self.pending.take()
    }

    /// Record the id of the request just made
    pub fn scheduled(&self, id: i32) {
        self.pending.set(Some(id));
    }

    /// A requested frame fired; returns whether it should do any work
    pub fn on_frame(&self) -> bool {
        self.pending.set(None);
        self.running.get()
    }

    /// Whether the frame that just ran should request the next one
    ///
    /// False if the loop was stopped meanwhile, or restarted and so already
    /// has a request in flight.
    pub fn wants_next(&self) -> bool {
        self.running.get() && self.pending.get().is_none()
    }

    /// The next frame could not be requested
    pub fn failed(&self) {
        self.running.set(false);
        self.pending.set(None);
    }
}
