//! Custom error types for the application.
//!
//! - [`SectionError`] - Unrecognized section identifiers at the UI boundary
//! - [`ContentError`] - Bundled portfolio content that fails to parse
//! - [`ContactError`] - Contact form validation and browser API failures

use thiserror::Error;

/// A section identifier outside the fixed catalog.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SectionError {
    #[error("unknown section '{0}'")]
    Unknown(String),
}

/// Portfolio content errors.
#[derive(Debug, Error)]
pub enum ContentError {
    /// The bundled TOML document is malformed or missing fields.
    #[error("failed to parse portfolio content: {0}")]
    Parse(#[from] toml::de::Error),
    /// A project or experience entry has no title.
    #[error("{kind} entry #{index} has an empty title")]
    EmptyTitle { kind: &'static str, index: usize },
}

/// Contact form errors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ContactError {
    #[error("Please tell me your name.")]
    MissingName,
    #[error("Please enter a valid email address.")]
    InvalidEmail,
    #[error("Please select who you are.")]
    MissingVisitorType,
    #[error("Please select the type of opportunity.")]
    MissingOpportunity,
    #[error("Please write a short message.")]
    MissingMessage,
    /// Browser window not available
    #[error("Browser window not available")]
    NoWindow,
    /// Mail client navigation was refused by the browser
    #[error("Failed to open mail client: {0}")]
    Navigation(String),
    /// Clipboard write was rejected
    #[error("Failed to copy template: {0}")]
    Clipboard(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        assert_eq!(
            SectionError::Unknown("blog".into()).to_string(),
            "unknown section 'blog'"
        );
        assert_eq!(
            ContentError::EmptyTitle {
                kind: "project",
                index: 2
            }
            .to_string(),
            "project entry #2 has an empty title"
        );
        assert_eq!(
            ContactError::Clipboard("denied".into()).to_string(),
            "Failed to copy template: denied"
        );
    }
}
