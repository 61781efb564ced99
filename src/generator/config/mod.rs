pub mod clash;

pub use clash::{render_clash_config, RenderError};
