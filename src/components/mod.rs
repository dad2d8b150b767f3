//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Each section of the page is one component. Static sections read
//! `crate::content` directly; only `theme_toggle` touches shared state.

pub mod card;
pub mod certifications;
pub mod footer;
pub mod profile_header;
pub mod project_grid;
pub mod skills;
pub mod theme_toggle;
