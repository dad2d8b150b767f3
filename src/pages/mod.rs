//! Page modules.
//!
//! ARCHITECTURE
//! ============
//! The site has a single page; it owns section ordering and the root
//! container's theme class and delegates rendering details to `components`.

pub mod portfolio;
