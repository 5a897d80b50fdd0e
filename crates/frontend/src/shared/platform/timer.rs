use gloo_timers::callback::Timeout;
use std::cell::{Cell, RefCell};
use std::collections::HashMap;
use std::rc::Rc;

/// Opaque id of a scheduled task.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TimerId(pub i32);

/// One-shot timers. Tasks run once unless cancelled; dropping the id does not cancel.
pub trait Scheduler {
    fn schedule(&self, delay_ms: u32, task: Box<dyn FnOnce()>) -> TimerId;
    fn cancel(&self, id: TimerId);
}

/// Owns the handles of live timers.
///
/// A cancelled handle is dropped at once. A fired one is only marked finished
/// by its callback and dropped on the next `insert`/`take`, never while the
/// callback is still on the stack.
struct TimerSlots<H> {
    next_id: Cell<i32>,
    live: RefCell<HashMap<TimerId, H>>,
    finished: Rc<RefCell<Vec<TimerId>>>,
}

impl<H> TimerSlots<H> {
    fn new() -> Self {
        Self {
            next_id: Cell::new(0),
            live: RefCell::new(HashMap::new()),
            finished: Rc::new(RefCell::new(Vec::new())),
        }
    }

    fn next_id(&self) -> TimerId {
        let id = self.next_id.get().wrapping_add(1);
        self.next_id.set(id);
        TimerId(id)
    }

    /// Call after the task has run.
    fn finisher(&self, id: TimerId) -> impl FnOnce() + 'static {
        let finished = Rc::clone(&self.finished);
        move || finished.borrow_mut().push(id)
    }

    fn insert(&self, id: TimerId, handle: H) {
        self.sweep();
        self.live.borrow_mut().insert(id, handle);
    }

    fn take(&self, id: TimerId) -> Option<H> {
        self.sweep();
        self.live.borrow_mut().remove(&id)
    }

    fn sweep(&self) {
        let done: Vec<TimerId> = self.finished.borrow_mut().drain(..).collect();
        if done.is_empty() {
            return;
        }
        let released: Vec<H> = {
            let mut live = self.live.borrow_mut();
            done.iter().filter_map(|id| live.remove(id)).collect()
        };
        drop(released);
    }
}

thread_local! {
    static PAGE_TIMERS: GlooScheduler = GlooScheduler(Rc::new(TimerSlots::new()));
}

/// `setTimeout` through `gloo-timers`.
///
/// All handles share the page's timer table; dropping a `Timeout` clears the browser timer.
#[derive(Clone)]
pub struct GlooScheduler(Rc<TimerSlots<Timeout>>);

impl GlooScheduler {
    pub fn page() -> Self {
        PAGE_TIMERS.with(Clone::clone)
    }
}

impl Scheduler for GlooScheduler {
    fn schedule(&self, delay_ms: u32, task: Box<dyn FnOnce()>) -> TimerId {
        let id = self.0.next_id();
        let finish = self.0.finisher(id);
        let timeout = Timeout::new(delay_ms, move || {
            task();
            finish();
        });
        self.0.insert(id, timeout);
        id
    }

    fn cancel(&self, id: TimerId) {
        drop(self.0.take(id));
    }
}
