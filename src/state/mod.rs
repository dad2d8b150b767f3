//! Client-side UI state.
//!
//! The page holds exactly one piece of mutable state, the theme flag.
//! Everything else it renders comes from `crate::content`.

pub mod theme;
