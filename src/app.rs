//! Root application module.
//!
//! Contains the main App component, AppContext definition, and
//! application-level setup logic following Leptos conventions.

use leptos::prelude::*;

use crate::components::ScreenRouter;
use crate::components::error_screen::ErrorScreen;
use crate::core::{BrowserScheduler, ViewSequencer};
use crate::models::{Portfolio, SectionId, ViewFrame};

// ============================================================================
// AppContext
// ============================================================================

/// Application-wide reactive context.
///
/// This context is provided at the root of the component tree and can be
/// accessed from any child component using `use_context::<AppContext>()`.
///
/// Stages only read [`AppContext::frame`] and talk back through
/// [`AppContext::select`] / [`AppContext::back`]; the sequencer is the only
/// writer of the frame.
///
/// # Note
///
/// This struct is `Copy` because every field is an arena handle.
#[derive(Clone, Copy)]
pub struct AppContext {
    /// Screen currently on display (and whether it is exiting).
    pub frame: RwSignal<ViewFrame>,

    /// Static portfolio content.
    pub content: StoredValue<Portfolio>,

    sequencer: StoredValue<ViewSequencer<BrowserScheduler>, LocalStorage>,
}

impl AppContext {
    /// Creates the context and wires the sequencer to the frame signal.
    ///
    /// The intro dwell does not start until [`AppContext::start`].
    pub fn new(portfolio: Portfolio) -> Self {
        let frame = RwSignal::new(ViewFrame::default());
        let sequencer = ViewSequencer::new(BrowserScheduler);
        sequencer.subscribe(move |next| frame.set(next));

        Self {
            frame,
            content: StoredValue::new(portfolio),
            sequencer: StoredValue::new_local(sequencer),
        }
    }

    pub fn start(&self) {
        self.sequencer.with_value(|s| s.start());
    }

    /// Cancel pending transitions. Safe to call after the sequencer's
    /// owner has already been disposed.
    pub fn teardown(&self) {
        self.sequencer.try_with_value(|s| s.teardown());
    }

    pub fn select(&self, section: SectionId) {
        self.sequencer.with_value(|s| s.select(section));
    }

    pub fn back(&self) {
        self.sequencer.with_value(|s| s.back());
    }

    /// Selected section while a content panel is showing.
    pub fn section(&self) -> Option<SectionId> {
        self.frame.with(|f| f.screen.section())
    }
}

/// Root application component with error boundary.
///
/// This component:
/// - Parses the bundled portfolio content
/// - Creates and provides the global AppContext
/// - Starts the screen sequencer and tears it down on cleanup
/// - Wraps the app in an ErrorBoundary for graceful error handling
#[component]
pub fn App() -> impl IntoView {
    let content = Portfolio::bundled().map(|portfolio| {
        log::info!(
            "loaded portfolio for {} ({} projects)",
            portfolio.owner.name,
            portfolio.projects.len()
        );
        let ctx = AppContext::new(portfolio);
        provide_context(ctx);
        ctx.start();
        on_cleanup(move || ctx.teardown());

        view! { <ScreenRouter /> }
    });

    if let Err(e) = &content {
        log::error!("{}", e);
    }

    view! {
        <ErrorBoundary fallback=|errors| view! { <ErrorScreen errors=errors /> }>
            {content}
        </ErrorBoundary>
    }
}
