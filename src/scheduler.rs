//! Throttling scheduler.
//!
//! A [`Scheduler`] runs its action once the delay elapsed after [`Scheduler::schedule`].
//! Scheduling again always cancels the previous timer and starts a new one, so a burst
//! of calls only fires once, a full delay after the last call.
//!
//! Every scheduler of a player shares one [`Timeline`]: a single-threaded clock advanced by
//! the host event loop. Actions run synchronously while the timeline is advanced, with the
//! clock set to their deadline, and nothing runs concurrently. The types are `!Send`, so
//! the timeline and everything scheduled on it stay on one thread.

use log::trace;
use std::{
    cell::{Cell, RefCell},
    cmp::Ordering,
    collections::BinaryHeap,
    fmt,
    rc::{Rc, Weak},
    time::Duration,
};

type Action = Box<dyn FnMut()>;

/// Shared state of a scheduler, referenced weakly by the timeline queue.
struct Timer {
    delay: Cell<Duration>,
    /// Incremented on each schedule and cancel, queue entries of older generations are stale.
    generation: Cell<u64>,
    deadline: Cell<Option<Duration>>,
    action: RefCell<Option<Action>>,
}

impl Timer {
    fn fire(&self) {
        // The action is taken out while it runs, so it can replace itself with `set_action`.
        let action = self.action.borrow_mut().take();
        if let Some(mut action) = action {
            action();
            let mut slot = self.action.borrow_mut();
            if slot.is_none() {
                *slot = Some(action);
            }
        }
    }
}

/// Entry of the timeline queue.
struct Entry {
    at: Duration,
    seq: u64,
    generation: u64,
    timer: Weak<Timer>,
}

impl Entry {
    fn is_live(&self) -> bool {
        let Some(timer) = self.timer.upgrade() else {
            return false;
        };
        timer.deadline.get().is_some() && timer.generation.get() == self.generation
    }
}

impl PartialEq for Entry {
    fn eq(&self, other: &Self) -> bool {
        self.at == other.at && self.seq == other.seq
    }
}

impl Eq for Entry {}

impl PartialOrd for Entry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

// Reversed for a min-heap: earliest deadline first, then scheduling order.
impl Ord for Entry {
    fn cmp(&self, other: &Self) -> Ordering {
        other.at.cmp(&self.at).then_with(|| other.seq.cmp(&self.seq))
    }
}

#[derive(Default)]
struct Clock {
    now: Duration,
    seq: u64,
    queue: BinaryHeap<Entry>,
}

/// Single-threaded clock on which every [`Scheduler`] of a player runs.
///
/// The host advances the timeline from its event loop, [`Timeline::next_deadline`] gives
/// the time until something is due.
#[derive(Clone, Default)]
pub struct Timeline {
    clock: Rc<RefCell<Clock>>,
}

impl Timeline {
    /// Create a timeline starting at zero.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Current time of the timeline.
    #[must_use]
    pub fn now(&self) -> Duration {
        self.clock.borrow().now
    }

    /// Earliest deadline of a pending scheduler.
    #[must_use]
    pub fn next_deadline(&self) -> Option<Duration> {
        let mut clock = self.clock.borrow_mut();
        while let Some(entry) = clock.queue.peek() {
            if entry.is_live() {
                return Some(entry.at);
            }
            clock.queue.pop();
        }
        None
    }

    /// Advance the clock by `elapsed`, firing every due action. Return the number of actions fired.
    pub fn advance(&self, elapsed: Duration) -> usize {
        let target = self.now() + elapsed;
        self.advance_to(target)
    }

    /// Advance the clock up to `target`, firing every due action in deadline order.
    /// Actions scheduled by fired actions are fired too if due before `target`.
    /// The clock never goes backward.
    pub fn advance_to(&self, target: Duration) -> usize {
        let mut fired = 0;
        while let Some(entry) = self.pop_due(target) {
            let Some(timer) = entry.timer.upgrade() else {
                continue;
            };
            if timer.deadline.get().is_none() || timer.generation.get() != entry.generation {
                continue;
            }
            timer.deadline.set(None);
            trace!("Scheduler fired at {:?}", entry.at);
            timer.fire();
            fired += 1;
        }

        let mut clock = self.clock.borrow_mut();
        if clock.now < target {
            clock.now = target;
        }
        fired
    }

    fn pop_due(&self, target: Duration) -> Option<Entry> {
        let mut clock = self.clock.borrow_mut();
        if clock.queue.peek().is_some_and(|entry| entry.at <= target) {
            let entry = clock.queue.pop()?;
            if clock.now < entry.at {
                clock.now = entry.at;
            }
            Some(entry)
        } else {
            None
        }
    }

    fn push(&self, timer: &Rc<Timer>) -> Duration {
        let mut clock = self.clock.borrow_mut();
        let at = clock.now + timer.delay.get();
        clock.seq += 1;
        let entry = Entry {
            at,
            seq: clock.seq,
            generation: timer.generation.get(),
            timer: Rc::downgrade(timer),
        };
        clock.queue.push(entry);
        at
    }
}

impl fmt::Debug for Timeline {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let clock = self.clock.borrow();
        f.debug_struct("Timeline")
            .field("now", &clock.now)
            .field("queued", &clock.queue.len())
            .finish()
    }
}

/// Cancel-and-reschedule single-shot timer.
///
/// Idle until [`schedule`](Self::schedule) is called, then pending until the action
/// fires or [`cancel`](Self::cancel) is called. Dropping a scheduler cancels it.
pub struct Scheduler {
    timer: Rc<Timer>,
    timeline: Timeline,
}

impl Scheduler {
    /// Create an idle scheduler running `action` on `timeline` after `delay`.
    pub fn new(timeline: &Timeline, delay: Duration, action: impl FnMut() + 'static) -> Self {
        Self {
            timer: Rc::new(Timer {
                delay: Cell::new(delay),
                generation: Cell::new(0),
                deadline: Cell::new(None),
                action: RefCell::new(Some(Box::new(action))),
            }),
            timeline: timeline.clone(),
        }
    }

    /// Start the timer, cancelling the pending one if any.
    pub fn schedule(&self) {
        self.cancel();
        self.bump_generation();
        let at = self.timeline.push(&self.timer);
        self.timer.deadline.set(Some(at));
    }

    /// Stop the pending timer, its action won't fire. Does nothing when idle.
    pub fn cancel(&self) {
        if self.timer.deadline.take().is_some() {
            self.bump_generation();
        }
    }

    /// Is the timer pending.
    #[must_use]
    pub fn in_progress(&self) -> bool {
        self.timer.deadline.get().is_some()
    }

    /// Time at which the pending action fires.
    #[must_use]
    pub fn deadline(&self) -> Option<Duration> {
        self.timer.deadline.get()
    }

    /// Delay used by the next [`schedule`](Self::schedule).
    #[must_use]
    pub fn delay(&self) -> Duration {
        self.timer.delay.get()
    }

    /// Change the delay, a pending timer keeps its deadline.
    pub fn set_delay(&self, delay: Duration) {
        self.timer.delay.set(delay);
    }

    /// Replace the action. Can be called from the action itself.
    pub fn set_action(&self, action: impl FnMut() + 'static) {
        *self.timer.action.borrow_mut() = Some(Box::new(action));
    }

    fn bump_generation(&self) {
        self.timer.generation.set(self.timer.generation.get().wrapping_add(1));
    }
}

impl Drop for Scheduler {
    fn drop(&mut self) {
        self.cancel();
    }
}

impl fmt::Debug for Scheduler {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Scheduler")
            .field("delay", &self.delay())
            .field("deadline", &self.deadline())
            .finish_non_exhaustive()
    }
}
