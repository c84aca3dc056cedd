//! CLI library components for Rowsift.

pub mod cli;
pub mod commands;
pub mod logging;
pub mod preview;
