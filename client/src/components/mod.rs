//! Page section components.
//!
//! SYSTEM CONTEXT
//! ==============
//! Sections render static catalog content from `data` and own the small
//! amount of local state they need (hero reveal, contact form, menu toggle).

pub mod about_section;
pub mod code_display;
pub mod contact_section;
pub mod hero_section;
pub mod navbar;
pub mod project_section;
