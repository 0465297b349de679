//! Browser utilities.
//!
//! Provides:
//! - [`dom`] - Window access, navigation, clipboard and scrolling helpers

pub mod dom;
