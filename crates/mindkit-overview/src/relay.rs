//! Deferred, coalesced recompute scheduling.
//!
//! Every change notification the overview receives triggers the same
//! recompute-and-redraw action. Rather than recomputing once per
//! notification, a dirty flag collapses bursts: the first notification
//! schedules one deferred task, later ones are no-ops until that task has
//! started. The flag clears at the start of the deferred run, so a
//! notification arriving during the recompute schedules a fresh pass.

use std::cell::Cell;
use std::collections::VecDeque;
use std::rc::Rc;

use mindkit_core::{shared, Shared};

/// A single-shot "run this on the next loop turn" primitive.
///
/// Hosts with a native post-to-event-loop facility implement this over it;
/// hosts without one can use [`TaskQueue`] and drain it once per loop turn.
pub trait Deferrer {
    /// Queues a task to run after the current dispatch completes.
    fn defer(&self, task: Box<dyn FnOnce()>);
}

/// A manually drained task queue implementing [`Deferrer`].
#[derive(Clone, Default)]
pub struct TaskQueue {
    tasks: Shared<VecDeque<Box<dyn FnOnce()>>>,
}

impl TaskQueue {
    /// Creates an empty queue.
    pub fn new() -> Self {
        Self {
            tasks: shared(VecDeque::new()),
        }
    }

    /// Runs every queued task, including ones queued by the tasks themselves.
    ///
    /// Returns the number of tasks executed.
    pub fn run_pending(&self) -> usize {
        let mut executed = 0;
        loop {
            let task = self.tasks.borrow_mut().pop_front();
            match task {
                Some(task) => {
                    task();
                    executed += 1;
                }
                None => return executed,
            }
        }
    }

    /// The number of tasks waiting to run.
    pub fn pending(&self) -> usize {
        self.tasks.borrow().len()
    }
}

impl Deferrer for TaskQueue {
    fn defer(&self, task: Box<dyn FnOnce()>) {
        self.tasks.borrow_mut().push_back(task);
    }
}

/// Dirty-flag coalescing over a [`Deferrer`].
#[derive(Clone)]
pub struct UpdateCoalescer {
    pending: Rc<Cell<bool>>,
    deferrer: Rc<dyn Deferrer>,
}

impl UpdateCoalescer {
    /// Creates a coalescer scheduling through the given deferrer.
    pub fn new(deferrer: Rc<dyn Deferrer>) -> Self {
        Self {
            pending: Rc::new(Cell::new(false)),
            deferrer,
        }
    }

    /// Requests a deferred run of `action`.
    ///
    /// Returns true when a task was scheduled, false when one is already
    /// pending (the request coalesces into it).
    pub fn request<F>(&self, action: F) -> bool
    where
        F: FnOnce() + 'static,
    {
        if self.pending.get() {
            tracing::trace!("recompute already pending, coalescing");
            return false;
        }
        self.pending.set(true);
        let pending = Rc::clone(&self.pending);
        self.deferrer.defer(Box::new(move || {
            pending.set(false);
            action();
        }));
        true
    }

    /// True while a scheduled run has not started yet.
    pub fn is_pending(&self) -> bool {
        self.pending.get()
    }
}
