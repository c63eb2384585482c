//! Browser glue and rendering helpers.

pub mod browser;
pub mod markdown;
