pub mod app;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;

pub use config::source::{source_from_config, FileSource, HttpSource};
pub use config::{toml_config::TomlConfig, Settings};
pub use core::{loader::TopicLoader, selector::select_topic, session::Session};
pub use domain::model::{Category, Topic, TopicId, TopicSet};
pub use utils::error::{Result, TopicError};
