//! Configuration: file discovery, merging, defaults

pub mod file_config;
pub mod loader;

pub use file_config::FileConfig;
pub use loader::ConfigLoader;
