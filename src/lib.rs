pub mod generator;
pub mod models;
pub mod parser;
pub mod shell;
pub mod utils;

// Re-export the main types for easier access
pub use models::{ProxyOptions, ProxyRecord, ProxyType};
pub use parser::{explode, LinkError};
