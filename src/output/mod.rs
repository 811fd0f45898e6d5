//! Report rendering
pub mod formatter;
