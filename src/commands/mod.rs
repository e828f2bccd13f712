//! Command implementations for mdmerge CLI

pub mod completions;
pub mod merge;
