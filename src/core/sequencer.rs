//! Screen sequencing state machine.
//!
//! [`Sequencer`] decides which screen is on display and which timer the
//! driver has to arm next. It never touches a clock itself: delays come back
//! to the caller as [`TimerRequest`]s and are reported through
//! [`Sequencer::fire`] when they elapse. See [`ViewSequencer`] for the driver
//! that owns the timer handles.
//!
//! ```text
//!   Intro ──3500ms──▶ ProfilePicker ──select──▶ (300ms) ──▶ Content(s)
//!                           ▲                                  │  ▲
//!                           └──────── (300ms) ◀──── back ──────┘  │
//!                                                    select(s') ──┘
//! ```
//!
//! [`ViewSequencer`]: super::ViewSequencer

use crate::config::timing::{INTRO_DWELL_MS, SETTLE_DELAY_MS};
use crate::models::{ScreenState, SectionId, ViewFrame};

/// Timers the sequencer can ask for.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TimerKind {
    /// One-shot intro dwell.
    IntroDwell,
    /// Exit animation pause before the next screen mounts.
    Settle,
}

/// A delay the driver must schedule, reporting back via [`Sequencer::fire`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TimerRequest {
    pub kind: TimerKind,
    pub delay_ms: u32,
}

impl TimerRequest {
    const INTRO: Self = Self {
        kind: TimerKind::IntroDwell,
        delay_ms: INTRO_DWELL_MS,
    };

    const SETTLE: Self = Self {
        kind: TimerKind::Settle,
        delay_ms: SETTLE_DELAY_MS,
    };
}

/// Outcome of feeding an event to the sequencer.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Step {
    /// Event dropped; nothing changed.
    Ignored,
    /// The visible frame changed.
    Changed,
    /// The current screen started exiting; arm the timer to finish.
    Arm(TimerRequest),
}

/// The screen state machine.
#[derive(Clone, Debug)]
pub struct Sequencer {
    screen: ScreenState,
    /// Screen committed once the settle timer fires.
    incoming: Option<ScreenState>,
    started: bool,
}

impl Sequencer {
    pub fn new() -> Self {
        Self {
            screen: ScreenState::Intro,
            incoming: None,
            started: false,
        }
    }

    /// Begin the intro dwell. Only the first call asks for a timer.
    pub fn start(&mut self) -> Option<TimerRequest> {
        if self.started {
            return None;
        }
        self.started = true;
        Some(TimerRequest::INTRO)
    }

    /// Committed screen. During a settle window this is still the screen
    /// that is leaving.
    pub fn screen(&self) -> ScreenState {
        self.screen
    }

    pub fn is_settling(&self) -> bool {
        self.incoming.is_some()
    }

    pub fn frame(&self) -> ViewFrame {
        ViewFrame {
            screen: self.screen,
            exiting: self.is_settling(),
        }
    }

    /// Handle a section selection from the picker or the navbar.
    pub fn select(&mut self, section: SectionId) -> Step {
        if self.is_settling() {
            return Step::Ignored;
        }
        match self.screen {
            ScreenState::ProfilePicker => self.leave_for(ScreenState::Content(section)),
            ScreenState::Content(current) if current != section => {
                self.screen = ScreenState::Content(section);
                Step::Changed
            }
            _ => Step::Ignored,
        }
    }

    /// Handle the navbar's back button.
    pub fn back(&mut self) -> Step {
        match self.screen {
            ScreenState::Content(_) if !self.is_settling() => {
                self.leave_for(ScreenState::ProfilePicker)
            }
            _ => Step::Ignored,
        }
    }

    /// Report an elapsed timer.
    pub fn fire(&mut self, kind: TimerKind) -> Step {
        match kind {
            TimerKind::IntroDwell if self.screen == ScreenState::Intro => {
                self.screen = ScreenState::ProfilePicker;
                Step::Changed
            }
            TimerKind::Settle => match self.incoming.take() {
                Some(next) => {
                    self.screen = next;
                    Step::Changed
                }
                None => Step::Ignored,
            },
            TimerKind::IntroDwell => Step::Ignored,
        }
    }

    fn leave_for(&mut self, next: ScreenState) -> Step {
        self.incoming = Some(next);
        Step::Arm(TimerRequest::SETTLE)
    }
}

impl Default for Sequencer {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn at_picker() -> Sequencer {
        let mut seq = Sequencer::new();
        seq.start();
        seq.fire(TimerKind::IntroDwell);
        seq
    }

    fn at_content(section: SectionId) -> Sequencer {
        let mut seq = at_picker();
        seq.select(section);
        seq.fire(TimerKind::Settle);
        seq
    }

    #[test]
    fn test_initial_state_is_intro() {
        let seq = Sequencer::new();
        assert_eq!(seq.screen(), ScreenState::Intro);
        assert_eq!(seq.frame(), ViewFrame::settled(ScreenState::Intro));
    }

    #[test]
    fn test_start_requests_intro_dwell_once() {
        let mut seq = Sequencer::new();
        assert_eq!(
            seq.start(),
            Some(TimerRequest {
                kind: TimerKind::IntroDwell,
                delay_ms: 3500
            })
        );
        assert_eq!(seq.start(), None);
    }

    #[test]
    fn test_intro_dwell_is_one_shot() {
        let mut seq = Sequencer::new();
        seq.start();
        assert_eq!(seq.fire(TimerKind::IntroDwell), Step::Changed);
        assert_eq!(seq.screen(), ScreenState::ProfilePicker);

        // A stray second dwell never moves anything
        assert_eq!(seq.fire(TimerKind::IntroDwell), Step::Ignored);
        assert_eq!(seq.screen(), ScreenState::ProfilePicker);
    }

    #[test]
    fn test_select_from_picker_settles_first() {
        let mut seq = at_picker();
        assert_eq!(
            seq.select(SectionId::Projects),
            Step::Arm(TimerRequest {
                kind: TimerKind::Settle,
                delay_ms: 300
            })
        );
        assert_eq!(
            seq.frame(),
            ViewFrame {
                screen: ScreenState::ProfilePicker,
                exiting: true
            }
        );

        assert_eq!(seq.fire(TimerKind::Settle), Step::Changed);
        assert_eq!(seq.frame(), ViewFrame::settled(ScreenState::Content(SectionId::Projects)));
    }

    #[test]
    fn test_back_returns_to_picker_and_forgets_section() {
        let mut seq = at_content(SectionId::About);
        assert!(matches!(seq.back(), Step::Arm(_)));
        assert_eq!(seq.fire(TimerKind::Settle), Step::Changed);
        assert_eq!(seq.screen(), ScreenState::ProfilePicker);
        assert_eq!(seq.screen().section(), None);
        assert!(!seq.is_settling());
    }

    #[test]
    fn test_lateral_select_is_immediate() {
        let mut seq = at_content(SectionId::About);
        assert_eq!(seq.select(SectionId::Education), Step::Changed);
        assert_eq!(seq.frame(), ViewFrame::settled(ScreenState::Content(SectionId::Education)));
    }

    #[test]
    fn test_reselecting_current_section_is_noop() {
        let mut seq = at_content(SectionId::About);
        assert_eq!(seq.select(SectionId::About), Step::Ignored);
    }

    #[test]
    fn test_events_inside_settle_window_are_dropped() {
        let mut seq = at_picker();
        seq.select(SectionId::Projects);
        assert_eq!(seq.select(SectionId::Contact), Step::Ignored);
        assert_eq!(seq.back(), Step::Ignored);
        seq.fire(TimerKind::Settle);
        assert_eq!(seq.screen(), ScreenState::Content(SectionId::Projects));

        // Same on the way back
        seq.back();
        assert_eq!(seq.select(SectionId::Education), Step::Ignored);
        seq.fire(TimerKind::Settle);
        assert_eq!(seq.screen(), ScreenState::ProfilePicker);
    }

    #[test]
    fn test_back_outside_content_is_noop() {
        let mut seq = Sequencer::new();
        seq.start();
        assert_eq!(seq.back(), Step::Ignored);
        assert_eq!(seq.screen(), ScreenState::Intro);

        let mut seq = at_picker();
        assert_eq!(seq.back(), Step::Ignored);
        assert_eq!(seq.frame(), ViewFrame::settled(ScreenState::ProfilePicker));
    }

    #[test]
    fn test_select_during_intro_is_noop() {
        let mut seq = Sequencer::new();
        seq.start();
        assert_eq!(seq.select(SectionId::About), Step::Ignored);
        assert_eq!(seq.screen(), ScreenState::Intro);
    }

    #[test]
    fn test_stale_settle_is_ignored() {
        let mut seq = at_picker();
        assert_eq!(seq.fire(TimerKind::Settle), Step::Ignored);
        assert_eq!(seq.screen(), ScreenState::ProfilePicker);
    }

    #[test]
    fn test_full_cycle_never_revisits_intro() {
        let mut seq = at_picker();
        for section in SectionId::ALL {
            seq.select(section);
            seq.fire(TimerKind::Settle);
            assert_eq!(seq.screen(), ScreenState::Content(section));
            seq.back();
            seq.fire(TimerKind::Settle);
            assert_eq!(seq.screen(), ScreenState::ProfilePicker);
        }
        assert_eq!(seq.fire(TimerKind::IntroDwell), Step::Ignored);
        assert_ne!(seq.screen(), ScreenState::Intro);
    }
}
