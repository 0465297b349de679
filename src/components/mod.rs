//! UI components built with Leptos.
//!
//! - [`router`] - Screen router (main entry point)
//! - [`intro`] - Name reveal shown on load
//! - [`profiles`] - "Who's Browsing?" section picker
//! - [`navbar`] - Top bar with back button and section switcher
//! - [`sections`] - Content panels (about, experience, projects, education, contact)
//! - [`error_screen`] - Fallback page for the root error boundary
//! - [`hooks`] - Timer-backed reactive helpers
//! - [`icons`] - Centralized icon definitions (change theme here)

pub mod error_screen;
pub mod hooks;
pub mod icons;
pub mod intro;
pub mod navbar;
pub mod profiles;
pub mod router;
pub mod sections;

pub use router::ScreenRouter;
