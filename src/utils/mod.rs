// Utility modules: errors, configuration and file system helpers

pub mod config;
pub mod error;
pub mod fs_utils;
