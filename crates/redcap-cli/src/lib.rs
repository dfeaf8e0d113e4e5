//! CLI library components for the REDCap metadata toolkit.

pub mod logging;
