//! Reusable HTML components for the article page
//!
//! This module provides Maud component functions used by page views.
//! Components are pure: they render markup from already resolved data and
//! never fetch.

pub mod comment;
pub mod label;
pub mod layout;
pub mod pagination;
pub mod skeleton;
