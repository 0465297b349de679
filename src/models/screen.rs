//! Top-level screen state.

use super::SectionId;

/// The screen currently owning the viewport.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ScreenState {
    /// Branding animation shown once at start.
    Intro,
    /// "Who's Browsing?" grid.
    ProfilePicker,
    /// One of the content panels.
    Content(SectionId),
}

impl ScreenState {
    /// Selected section, if a content panel is showing.
    pub fn section(self) -> Option<SectionId> {
        match self {
            Self::Content(section) => Some(section),
            _ => None,
        }
    }
}

/// What the router renders: the committed screen and whether it is
/// currently playing its exit animation.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ViewFrame {
    pub screen: ScreenState,
    pub exiting: bool,
}

impl ViewFrame {
    pub const fn settled(screen: ScreenState) -> Self {
        Self {
            screen,
            exiting: false,
        }
    }
}

impl Default for ViewFrame {
    fn default() -> Self {
        Self::settled(ScreenState::Intro)
    }
}
