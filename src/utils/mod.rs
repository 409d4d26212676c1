pub mod config;
pub mod path;

pub use config::{config_path, load_config, read_config};
pub use path::{apply_relative_path, clean_path};
