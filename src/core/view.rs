//! Timer-owning driver around [`Sequencer`].
//!
//! [`ViewSequencer`] arms the timers the state machine asks for, keeps the
//! single pending handle, and notifies a listener whenever the visible
//! [`ViewFrame`] changes. Tearing it down (or dropping it) releases the
//! handle, so no transition runs after disposal.

use std::cell::RefCell;
use std::rc::{Rc, Weak};

use log::{debug, warn};

use super::scheduler::Scheduler;
use super::sequencer::{Sequencer, Step, TimerKind, TimerRequest};
use crate::models::{ScreenState, SectionId, ViewFrame};

type Listener = Rc<dyn Fn(ViewFrame)>;

struct Inner<S: Scheduler> {
    machine: Sequencer,
    timer: Option<S::Handle>,
    listener: Option<Listener>,
    torn_down: bool,
}

/// Single owner of screen state and its timers.
pub struct ViewSequencer<S: Scheduler + 'static> {
    inner: Rc<RefCell<Inner<S>>>,
    scheduler: Rc<S>,
}

impl<S: Scheduler + 'static> ViewSequencer<S> {
    pub fn new(scheduler: S) -> Self {
        Self {
            inner: Rc::new(RefCell::new(Inner {
                machine: Sequencer::new(),
                timer: None,
                listener: None,
                torn_down: false,
            })),
            scheduler: Rc::new(scheduler),
        }
    }

    /// Register the frame listener, replacing any previous one.
    pub fn subscribe(&self, listener: impl Fn(ViewFrame) + 'static) {
        self.inner.borrow_mut().listener = Some(Rc::new(listener));
    }

    /// Start the intro dwell. Later calls do nothing.
    pub fn start(&self) {
        let request = {
            let mut inner = self.inner.borrow_mut();
            if inner.torn_down {
                return;
            }
            inner.machine.start()
        };
        if let Some(request) = request {
            debug!("sequencer: intro dwell armed ({}ms)", request.delay_ms);
            self.arm(request);
        }
    }

    pub fn frame(&self) -> ViewFrame {
        self.inner.borrow().machine.frame()
    }

    pub fn screen(&self) -> ScreenState {
        self.inner.borrow().machine.screen()
    }

    pub fn select(&self, section: SectionId) {
        self.dispatch("select", |machine| machine.select(section));
    }

    pub fn back(&self) {
        self.dispatch("back", Sequencer::back);
    }

    /// Cancel any pending timer and stop reacting to events.
    pub fn teardown(&self) {
        let mut inner = self.inner.borrow_mut();
        if inner.torn_down {
            return;
        }
        inner.torn_down = true;
        inner.listener = None;
        if inner.timer.take().is_some() {
            debug!("sequencer: pending timer cancelled on teardown");
        }
    }

    pub fn is_torn_down(&self) -> bool {
        self.inner.borrow().torn_down
    }

    fn dispatch(&self, event: &str, apply: impl FnOnce(&mut Sequencer) -> Step) {
        let step = {
            let mut inner = self.inner.borrow_mut();
            if inner.torn_down {
                warn!("sequencer: '{}' after teardown dropped", event);
                return;
            }
            apply(&mut inner.machine)
        };
        match step {
            Step::Ignored => debug!("sequencer: '{}' ignored in {:?}", event, self.frame()),
            Step::Changed => notify(&self.inner),
            Step::Arm(request) => {
                self.arm(request);
                notify(&self.inner);
            }
        }
    }

    fn arm(&self, request: TimerRequest) {
        let weak = Rc::downgrade(&self.inner);
        let handle = self.scheduler.schedule(
            request.delay_ms,
            Box::new(move || on_timer::<S>(weak, request.kind)),
        );
        self.inner.borrow_mut().timer = Some(handle);
    }
}

impl<S: Scheduler + 'static> Drop for ViewSequencer<S> {
    fn drop(&mut self) {
        self.teardown();
    }
}

fn on_timer<S: Scheduler>(weak: Weak<RefCell<Inner<S>>>, kind: TimerKind) {
    let Some(inner) = weak.upgrade() else {
        return;
    };
    let step = {
        let mut guard = inner.borrow_mut();
        if guard.torn_down {
            return;
        }
        guard.timer = None;
        guard.machine.fire(kind)
    };
    if step == Step::Changed {
        notify(&inner);
    }
}

fn notify<S: Scheduler>(inner: &Rc<RefCell<Inner<S>>>) {
    let (listener, frame) = {
        let guard = inner.borrow();
        (guard.listener.clone(), guard.machine.frame())
    };
    debug!("sequencer: {:?}", frame);
    if let Some(listener) = listener {
        listener(frame);
    }
}
