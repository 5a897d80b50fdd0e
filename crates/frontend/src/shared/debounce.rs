use super::platform::{Scheduler, TimerId};
use std::cell::{Cell, RefCell};
use std::rc::Rc;

struct DebounceState<A> {
    func: RefCell<Box<dyn FnMut(A)>>,
    pending: Cell<Option<TimerId>>,
    last_args: RefCell<Option<A>>,
}

/// Runs `func` once the calls stop for `wait_ms`, with the arguments of the last call.
pub struct Debouncer<A, S: Scheduler> {
    state: Rc<DebounceState<A>>,
    scheduler: S,
    wait_ms: u32,
}

impl<A: 'static, S: Scheduler> Debouncer<A, S> {
    pub fn new(scheduler: S, wait_ms: u32, func: impl FnMut(A) + 'static) -> Self {
        Self {
            state: Rc::new(DebounceState {
                func: RefCell::new(Box::new(func)),
                pending: Cell::new(None),
                last_args: RefCell::new(None),
            }),
            scheduler,
            wait_ms,
        }
    }

    pub fn call(&self, args: A) {
        if let Some(id) = self.state.pending.take() {
            self.scheduler.cancel(id);
        }
        *self.state.last_args.borrow_mut() = Some(args);

        let state = Rc::clone(&self.state);
        let id = self.scheduler.schedule(
            self.wait_ms,
            Box::new(move || {
                state.pending.set(None);
                let args = state.last_args.borrow_mut().take();
                if let Some(args) = args {
                    (state.func.borrow_mut())(args);
                }
            }),
        );
        self.state.pending.set(Some(id));
    }

    pub fn is_pending(&self) -> bool {
        self.state.pending.get().is_some()
    }
}
