pub mod config;

pub use config::{AppConfig, LoaderConfig, LogConfig, LogFormat, LogLevel, LogOutput};
