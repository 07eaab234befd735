//! Library entry point for the dirscan CLI.

pub mod commands;
pub mod error;
pub mod format;
pub mod model;
pub mod path;
pub mod report;
pub mod scanner;
