//! Section identifiers and the fixed section catalog.

use std::fmt;
use std::str::FromStr;

use crate::core::error::SectionError;

/// One of the five content destinations.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum SectionId {
    About,
    Experience,
    Projects,
    Education,
    Contact,
}

impl SectionId {
    /// All sections in catalog order.
    pub const ALL: [SectionId; 5] = [
        Self::About,
        Self::Experience,
        Self::Projects,
        Self::Education,
        Self::Contact,
    ];

    /// Stable lowercase identifier.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::About => "about",
            Self::Experience => "experience",
            Self::Projects => "projects",
            Self::Education => "education",
            Self::Contact => "contact",
        }
    }

    /// Catalog entry describing this section.
    pub fn entry(self) -> &'static CatalogEntry {
        &CATALOG[self as usize]
    }

    /// Name shown on profile cards and in the navbar menu.
    pub fn display_name(self) -> &'static str {
        self.entry().display_name
    }
}

impl fmt::Display for SectionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SectionId {
    type Err = SectionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|id| id.as_str() == s)
            .ok_or_else(|| SectionError::Unknown(s.to_string()))
    }
}

/// Read-only presentation data for a section.
#[derive(Debug)]
pub struct CatalogEntry {
    pub id: SectionId,
    pub display_name: &'static str,
    /// Gradient stops for the profile card (from, to).
    pub gradient: (&'static str, &'static str),
}

impl CatalogEntry {
    /// CSS `background` value for the card and avatar.
    pub fn background(&self) -> String {
        format!(
            "linear-gradient(135deg, {} 0%, {} 100%)",
            self.gradient.0, self.gradient.1
        )
    }
}

/// The section catalog, indexed by `SectionId as usize`.
pub static CATALOG: [CatalogEntry; 5] = [
    CatalogEntry {
        id: SectionId::About,
        display_name: "About Me",
        gradient: ("#8B5CF6", "#C4B5FD"),
    },
    CatalogEntry {
        id: SectionId::Experience,
        display_name: "Experience",
        gradient: ("#EF4444", "#F87171"),
    },
    CatalogEntry {
        id: SectionId::Projects,
        display_name: "Projects",
        gradient: ("#3B82F6", "#93C5FD"),
    },
    CatalogEntry {
        id: SectionId::Education,
        display_name: "Education",
        gradient: ("#10B981", "#5EEAD4"),
    },
    CatalogEntry {
        id: SectionId::Contact,
        display_name: "Contact",
        gradient: ("#F59E0B", "#FCD34D"),
    },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_catalog_order_matches_ids() {
        for (index, entry) in CATALOG.iter().enumerate() {
            assert_eq!(entry.id as usize, index);
            assert_eq!(SectionId::ALL[index], entry.id);
        }
    }

    #[test]
    fn test_parse_known_sections() {
        assert_eq!("about".parse::<SectionId>(), Ok(SectionId::About));
        assert_eq!("projects".parse::<SectionId>(), Ok(SectionId::Projects));
        assert_eq!("contact".parse::<SectionId>(), Ok(SectionId::Contact));
    }

    #[test]
    fn test_parse_rejects_unknown() {
        assert_eq!(
            "blog".parse::<SectionId>(),
            Err(SectionError::Unknown("blog".to_string()))
        );
        // Case-sensitive, like the identifiers emitted by the UI
        assert!("About".parse::<SectionId>().is_err());
        assert!("".parse::<SectionId>().is_err());
    }

    #[test]
    fn test_display_names() {
        assert_eq!(SectionId::About.display_name(), "About Me");
        assert_eq!(SectionId::Education.to_string(), "education");
        assert_eq!(
            SectionId::Contact.entry().background(),
            "linear-gradient(135deg, #F59E0B 0%, #FCD34D 100%)"
        );
    }
}
