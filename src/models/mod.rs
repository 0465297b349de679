//! Data models and types for the application.
//!
//! Contains domain types for:
//! - [`ScreenState`], [`ViewFrame`] - What the router renders
//! - [`SectionId`], [`CATALOG`] - The five content destinations
//! - [`Portfolio`] - Static portfolio content
//! - [`ContactForm`], [`VisitorType`], [`OpportunityType`] - Contact form input

mod contact;
mod portfolio;
mod screen;
mod section;

pub use contact::{ContactForm, OpportunityType, VisitorType};
pub use portfolio::{ContactCopy, Experience, Portfolio, Project, Skill, SkillGroup};
pub use screen::{ScreenState, ViewFrame};
pub use section::{CATALOG, CatalogEntry, SectionId};
