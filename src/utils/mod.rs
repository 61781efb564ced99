pub mod file;

pub use file::{write_file, DEFAULT_CONFIG_PATH};
