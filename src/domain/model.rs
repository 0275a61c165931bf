use rand::Rng;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fmt;

/// Opaque topic identifier; the document may use numbers or strings.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum TopicId {
    Number(serde_json::Number),
    Text(String),
}

impl fmt::Display for TopicId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TopicId::Number(n) => write!(f, "{}", n),
            TopicId::Text(s) => f.write_str(s),
        }
    }
}

impl From<i64> for TopicId {
    fn from(value: i64) -> Self {
        TopicId::Number(value.into())
    }
}

impl From<&str> for TopicId {
    fn from(value: &str) -> Self {
        TopicId::Text(value.to_string())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Topic {
    pub id: TopicId,
    pub topic: String,
}

impl Topic {
    pub fn new(id: impl Into<TopicId>, topic: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            topic: topic.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Category {
    pub category: String,
    pub topics: Vec<Topic>,
}

impl Category {
    pub fn is_empty(&self) -> bool {
        self.topics.is_empty()
    }

    /// Draws one topic uniformly at random. `None` when the category has no topics.
    pub fn pick<R: Rng>(&self, rng: &mut R) -> Option<&Topic> {
        let index = crate::core::selector::index_for(rng.random::<f64>(), self.topics.len())?;
        self.topics.get(index)
    }

    pub fn contains(&self, topic: &Topic) -> bool {
        self.topics.iter().any(|t| t == topic)
    }
}

/// The loaded topics document. Immutable once loaded.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TopicSet {
    pub categories: Vec<Category>,
}

impl TopicSet {
    pub fn from_slice(bytes: &[u8]) -> serde_json::Result<Self> {
        serde_json::from_slice(bytes)
    }

    pub fn is_empty(&self) -> bool {
        self.categories.is_empty()
    }

    /// Category names in display order.
    pub fn category_names(&self) -> impl Iterator<Item = &str> {
        self.categories.iter().map(|c| c.category.as_str())
    }

    /// First category whose name matches exactly.
    pub fn find_category(&self, name: &str) -> Option<&Category> {
        self.categories.iter().find(|c| c.category == name)
    }

    /// Names that appear more than once, in order of their second occurrence.
    pub fn duplicate_names(&self) -> Vec<&str> {
        let mut seen = HashSet::new();
        let mut duplicates = Vec::new();
        for name in self.category_names() {
            if !seen.insert(name) && !duplicates.contains(&name) {
                duplicates.push(name);
            }
        }
        duplicates
    }

    pub fn topic_count(&self) -> usize {
        self.categories.iter().map(|c| c.topics.len()).sum()
    }
}
