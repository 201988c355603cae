//! Data types for the extraction engine.

pub mod candidate;
pub mod page;
