//! Application configuration.
//!
//! Centralizes all configuration constants used throughout the application.
//! Portfolio copy is loaded at compile time using `include_str!`.

use log::Level;

// =============================================================================
// Content Assets (loaded at compile time)
// =============================================================================

/// Portfolio content (owner, skills, experience, projects, education, contact).
pub const PORTFOLIO_TOML: &str = include_str!("../assets/content/portfolio.toml");

// =============================================================================
// Application Metadata
// =============================================================================

/// Brand shown in the navbar.
pub const APP_BRAND: &str = "PORTFOLIO";

/// Application version.
pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Heading of the profile picker screen.
pub const PICKER_HEADING: &str = "Who's Browsing?";

// =============================================================================
// Logging
// =============================================================================

/// Maximum level forwarded to the browser console.
#[cfg(debug_assertions)]
pub const LOG_LEVEL: Level = Level::Debug;

/// Maximum level forwarded to the browser console.
#[cfg(not(debug_assertions))]
pub const LOG_LEVEL: Level = Level::Info;

// =============================================================================
// Screen Sequencing
// =============================================================================

/// Timing constants for screen transitions (milliseconds).
pub mod timing {
    /// Dwell time of the intro screen before the profile picker appears.
    pub const INTRO_DWELL_MS: u32 = 3500;

    /// Pause between a screen's exit and the next screen's entry.
    pub const SETTLE_DELAY_MS: u32 = 300;
}

/// Intro animation sub-phase delays (milliseconds from intro mount).
pub mod intro_phases {
    /// Owner name fades in.
    pub const FULL_NAME_AT_MS: u32 = 500;

    /// Name collapses into the monogram.
    pub const MONOGRAM_AT_MS: u32 = 3000;
}

// =============================================================================
// Contact Form
// =============================================================================

/// Contact form behavior.
pub mod contact {
    /// How long the "copied" confirmation stays visible.
    pub const COPY_FEEDBACK_MS: u32 = 2000;

    /// Pattern an email address must match before a mailto link is built.
    pub const EMAIL_PATTERN: &str = r"^[^ \t\r\n@]+@[^ \t\r\n@]+\.[^ \t\r\n@]+$";
}

// =============================================================================
// UI Configuration
// =============================================================================

/// Media query below which the navbar collapses into the mobile menu.
pub const MOBILE_QUERY: &str = "(max-width: 767px)";
