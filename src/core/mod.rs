pub mod loader;
pub mod selector;
pub mod session;

pub use crate::domain::model::{Category, Topic, TopicId, TopicSet};
pub use crate::domain::ports::{ConfigProvider, TopicSource};
pub use crate::utils::error::Result;
