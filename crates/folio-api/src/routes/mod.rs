//! # API Route Modules
//!
//! - `contact`: the contact submission handler (`POST /api/contact`).
//! - `content`: read-only site content (profile, projects, navigation).

pub mod contact;
pub mod content;
