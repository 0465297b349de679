//! Contact form logic: validation, email templates and `mailto:` links.

use std::sync::LazyLock;

use regex::Regex;

use crate::config::contact::EMAIL_PATTERN;
use crate::core::error::ContactError;
use crate::models::{ContactForm, OpportunityType, VisitorType};

static EMAIL_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(EMAIL_PATTERN).expect("EMAIL_PATTERN is a valid regex"));

/// Subject and body of the email a visitor sends.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EmailTemplate {
    pub subject: String,
    pub body: String,
}

impl EmailTemplate {
    /// Build the template for a form, greeting `recipient` by name.
    pub fn for_form(form: &ContactForm, recipient: &str) -> Self {
        let (subject, opener) = match form.visitor {
            Some(VisitorType::Recruiter) => {
                let kind = form.opportunity.map(OpportunityType::value);
                let subject = match kind {
                    Some(kind) => format!("Opportunity Discussion - {}", kind),
                    None => "Opportunity Discussion".to_string(),
                };
                let opener = match kind {
                    Some(kind) => format!(
                        "I came across your portfolio and I'm interested in discussing {} opportunities with you.",
                        kind
                    ),
                    None => "I came across your portfolio and I'm interested in discussing opportunities with you.".to_string(),
                };
                (subject, opener)
            }
            Some(VisitorType::Collaborator) => (
                "Collaboration Opportunity".to_string(),
                "I'd love to explore potential collaboration opportunities with you.".to_string(),
            ),
            Some(VisitorType::General) | None => (
                "Getting in Touch".to_string(),
                "I visited your portfolio and wanted to connect.".to_string(),
            ),
        };

        let mut body = format!("Hi {},\n\n{}\n\n", recipient, opener);
        let message = form.message.trim();
        if !message.is_empty() {
            body.push_str(message);
            body.push_str("\n\n");
        }
        body.push_str("Best regards,\n");
        body.push_str(form.name.trim());

        Self { subject, body }
    }

    /// `mailto:` URI with percent-encoded subject and body.
    pub fn mailto(&self, address: &str) -> String {
        format!(
            "mailto:{}?subject={}&body={}",
            address,
            urlencoding::encode(&self.subject),
            urlencoding::encode(&self.body)
        )
    }

    /// Plain-text form copied to the clipboard.
    pub fn clipboard_text(&self) -> String {
        format!("Subject: {}\n\n{}", self.subject, self.body)
    }
}

/// Check the fields required before a mail client is opened. Recruiters
/// must also say what kind of opportunity they have in mind.
pub fn validate(form: &ContactForm) -> Result<(), ContactError> {
    if form.name.trim().is_empty() {
        return Err(ContactError::MissingName);
    }
    if !EMAIL_RE.is_match(form.email.trim()) {
        return Err(ContactError::InvalidEmail);
    }
    match form.visitor {
        None => return Err(ContactError::MissingVisitorType),
        Some(VisitorType::Recruiter) if form.opportunity.is_none() => {
            return Err(ContactError::MissingOpportunity);
        }
        Some(_) => {}
    }
    if form.message.trim().is_empty() {
        return Err(ContactError::MissingMessage);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn form(visitor: Option<VisitorType>) -> ContactForm {
        ContactForm {
            name: "Jane Doe".into(),
            email: "jane@example.com".into(),
            visitor,
            opportunity: None,
            message: String::new(),
        }
    }

    #[test]
    fn test_recruiter_template() {
        let mut f = form(Some(VisitorType::Recruiter));
        f.opportunity = Some(OpportunityType::FullTime);
        let t = EmailTemplate::for_form(&f, "Kunal");
        assert_eq!(t.subject, "Opportunity Discussion - full-time");
        assert_eq!(
            t.body,
            "Hi Kunal,\n\nI came across your portfolio and I'm interested in discussing full-time opportunities with you.\n\nBest regards,\nJane Doe"
        );
    }

    #[test]
    fn test_recruiter_without_opportunity() {
        let t = EmailTemplate::for_form(&form(Some(VisitorType::Recruiter)), "Kunal");
        assert_eq!(t.subject, "Opportunity Discussion");
    }

    #[test]
    fn test_collaborator_and_general_templates() {
        let t = EmailTemplate::for_form(&form(Some(VisitorType::Collaborator)), "Kunal");
        assert_eq!(t.subject, "Collaboration Opportunity");
        assert!(t.body.starts_with("Hi Kunal,\n\nI'd love to explore"));

        let t = EmailTemplate::for_form(&form(Some(VisitorType::General)), "Kunal");
        assert_eq!(t.subject, "Getting in Touch");

        let t = EmailTemplate::for_form(&form(None), "Kunal");
        assert_eq!(t.subject, "Getting in Touch");
        assert!(t.body.ends_with("Best regards,\nJane Doe"));
    }

    #[test]
    fn test_message_is_included() {
        let mut f = form(Some(VisitorType::General));
        f.message = "  Loved the churn project!  ".into();
        let t = EmailTemplate::for_form(&f, "Kunal");
        assert_eq!(
            t.body,
            "Hi Kunal,\n\nI visited your portfolio and wanted to connect.\n\nLoved the churn project!\n\nBest regards,\nJane Doe"
        );
    }

    #[test]
    fn test_mailto_encodes_fields() {
        let t = EmailTemplate {
            subject: "Opportunity Discussion - internship".into(),
            body: "Hi Kunal,\n\nA&B?".into(),
        };
        assert_eq!(
            t.mailto("me@example.com"),
            "mailto:me@example.com?subject=Opportunity%20Discussion%20-%20internship&body=Hi%20Kunal%2C%0A%0AA%26B%3F"
        );
    }

    #[test]
    fn test_clipboard_text() {
        let t = EmailTemplate {
            subject: "Getting in Touch".into(),
            body: "Hi".into(),
        };
        assert_eq!(t.clipboard_text(), "Subject: Getting in Touch\n\nHi");
    }

    fn filled(visitor: VisitorType) -> ContactForm {
        ContactForm {
            message: "Hello!".into(),
            ..form(Some(visitor))
        }
    }

    #[test]
    fn test_validation() {
        assert_eq!(validate(&filled(VisitorType::General)), Ok(()));

        let mut f = filled(VisitorType::General);
        f.name = "   ".into();
        assert_eq!(validate(&f), Err(ContactError::MissingName));

        for bad in ["", "jane", "jane@", "jane@example", "ja ne@example.com"] {
            let mut f = filled(VisitorType::General);
            f.email = bad.into();
            assert_eq!(validate(&f), Err(ContactError::InvalidEmail), "{bad}");
        }

        assert_eq!(validate(&form(None)), Err(ContactError::MissingVisitorType));
    }

    #[test]
    fn test_recruiter_must_pick_opportunity() {
        let mut f = filled(VisitorType::Recruiter);
        assert_eq!(validate(&f), Err(ContactError::MissingOpportunity));

        f.opportunity = Some(OpportunityType::Internship);
        assert_eq!(validate(&f), Ok(()));

        // Only recruiters are asked for one
        assert_eq!(validate(&filled(VisitorType::Collaborator)), Ok(()));
    }

    #[test]
    fn test_message_is_required() {
        let mut f = filled(VisitorType::General);
        f.message = " \n\t ".into();
        assert_eq!(validate(&f), Err(ContactError::MissingMessage));

        let mut f = form(Some(VisitorType::Recruiter));
        f.opportunity = Some(OpportunityType::FullTime);
        assert_eq!(validate(&f), Err(ContactError::MissingMessage));
    }
}
