//! Core application logic, independent of the component tree.
//!
//! This module provides:
//! - [`ViewSequencer`] the screen state machine and the timers that drive it
//! - [`Scheduler`] cancellable timers ([`BrowserScheduler`] in the browser)
//! - [`contact`] form validation and `mailto:` link building

pub mod contact;
pub mod error;
mod scheduler;
mod sequencer;
mod view;

pub use contact::EmailTemplate;
pub use scheduler::{BrowserScheduler, BrowserTimer, Scheduler};
pub use view::ViewSequencer;
