//! Centralized icon definitions.
//!
//! Maps semantic icon names to the lucide set so components never reference
//! `icondata` directly.

use icondata::Icon;

use crate::models::SectionId;

pub use icondata::{
    LuArrowLeft as BACK, LuBookOpen as COURSES, LuBriefcase as BRIEFCASE, LuBuilding2 as COMPANY,
    LuCalendar as CALENDAR, LuCheck as CHECK, LuChevronDown as CHEVRON_DOWN, LuCopy as COPY,
    LuDownload as DOWNLOAD, LuExternalLink as EXTERNAL_LINK, LuGithub as GITHUB,
    LuGraduationCap as GRADUATION, LuInfo as INFO, LuLinkedin as LINKEDIN, LuMail as MAIL,
    LuMapPin as LOCATION, LuMenu as MENU, LuPlay as PLAY, LuPlus as PLUS, LuRotateCw as RELOAD,
    LuSend as SEND, LuThumbsUp as THUMBS_UP, LuUser as USER, LuX as CLOSE,
};

/// Profile card icon for a section.
pub fn section_icon(section: SectionId) -> Icon {
    match section {
        SectionId::About => icondata::LuFilm,
        SectionId::Experience => icondata::LuClapperboard,
        SectionId::Projects => icondata::LuCirclePlay,
        SectionId::Education => icondata::LuTv,
        SectionId::Contact => icondata::LuMessageCircle,
    }
}
