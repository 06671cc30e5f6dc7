//! A generic table widget for Dioxus: column definitions plus row data in,
//! a styled table with optional pagination, per-column search, and a
//! loading state out.

pub mod components;
pub mod theme;

pub use components::*;
pub use theme::*;
