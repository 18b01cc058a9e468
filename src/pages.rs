//! Page views
//!
//! Each page module composes loaders with the shared components from the
//! components module into a complete document.

pub mod article;
