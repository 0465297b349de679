//! Custom hooks shared by stage components.
//!
//! Provides reusable stateful logic backed by cancellable browser timers.

use leptos::prelude::*;

use crate::core::{BrowserScheduler, BrowserTimer, Scheduler};

/// Boolean that drops back to `false` a fixed time after being raised.
///
/// Raising it again restarts the countdown. The pending timer belongs to the
/// owning component, so it is cancelled when that component unmounts.
#[derive(Clone, Copy)]
pub struct TimedFlag {
    /// Current value.
    pub on: RwSignal<bool>,
    reset: StoredValue<Option<BrowserTimer>, LocalStorage>,
    duration_ms: u32,
}

impl TimedFlag {
    pub fn new(duration_ms: u32) -> Self {
        Self {
            on: RwSignal::new(false),
            reset: StoredValue::new_local(None),
            duration_ms,
        }
    }

    pub fn get(&self) -> bool {
        self.on.get()
    }

    /// Set the flag and (re)start the countdown.
    pub fn raise(&self) {
        let on = self.on;
        on.set(true);
        let timer = BrowserScheduler.schedule(self.duration_ms, Box::new(move || on.set(false)));
        // Replacing the previous handle cancels its countdown
        self.reset.try_update_value(|slot| *slot = Some(timer));
    }
}

/// Steps through `phases` at fixed offsets from mount.
///
/// Returns a signal starting at `initial`; each `(delay_ms, phase)` pair
/// sets the signal once its delay elapses. Unmounting cancels the rest.
pub fn use_phases<T>(initial: T, phases: Vec<(u32, T)>) -> ReadSignal<T>
where
    T: Clone + Send + Sync + 'static,
{
    let (phase, set_phase) = signal(initial);

    let timers: Vec<BrowserTimer> = phases
        .into_iter()
        .map(|(delay_ms, next)| {
            BrowserScheduler.schedule(delay_ms, Box::new(move || set_phase.set(next)))
        })
        .collect();

    // Dropped with the owner, which clears any timer still pending
    let _ = StoredValue::new_local(timers);

    phase
}
