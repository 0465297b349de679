//! Contact form data.

use std::str::FromStr;

/// Who is reaching out.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum VisitorType {
    Recruiter,
    Collaborator,
    General,
}

impl VisitorType {
    pub const ALL: [VisitorType; 3] = [Self::Recruiter, Self::Collaborator, Self::General];

    /// `<option>` value.
    pub const fn value(self) -> &'static str {
        match self {
            Self::Recruiter => "recruiter",
            Self::Collaborator => "collaborator",
            Self::General => "general",
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Recruiter => "Recruiter / Hiring Manager",
            Self::Collaborator => "Fellow Developer / Collaborator",
            Self::General => "Just Browsing",
        }
    }
}

impl FromStr for VisitorType {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL.into_iter().find(|v| v.value() == s).ok_or(())
    }
}

/// Kind of opportunity a recruiter is offering.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum OpportunityType {
    Internship,
    FullTime,
    Other,
}

impl OpportunityType {
    pub const ALL: [OpportunityType; 3] = [Self::Internship, Self::FullTime, Self::Other];

    pub const fn value(self) -> &'static str {
        match self {
            Self::Internship => "internship",
            Self::FullTime => "full-time",
            Self::Other => "other",
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Internship => "Internship",
            Self::FullTime => "Full-time Position",
            Self::Other => "Other",
        }
    }
}

impl FromStr for OpportunityType {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL.into_iter().find(|o| o.value() == s).ok_or(())
    }
}

/// Current form input.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ContactForm {
    pub name: String,
    pub email: String,
    pub visitor: Option<VisitorType>,
    /// Only meaningful for recruiters.
    pub opportunity: Option<OpportunityType>,
    pub message: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_option_values_parse_back() {
        for visitor in VisitorType::ALL {
            assert_eq!(visitor.value().parse(), Ok(visitor));
        }
        for opportunity in OpportunityType::ALL {
            assert_eq!(opportunity.value().parse(), Ok(opportunity));
        }
        // The placeholder option has an empty value
        assert!("".parse::<VisitorType>().is_err());
        assert!("".parse::<OpportunityType>().is_err());
    }
}
