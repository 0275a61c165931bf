use crate::core::TopicSource;
use crate::domain::model::TopicSet;
use crate::utils::error::Result;

/// Loads the topics document once from a [`TopicSource`].
pub struct TopicLoader<S: TopicSource> {
    source: S,
}

impl<S: TopicSource> TopicLoader<S> {
    pub fn new(source: S) -> Self {
        Self { source }
    }

    /// Fetches and parses the document. Failures are returned as-is; no retry.
    pub async fn load(&self) -> Result<TopicSet> {
        let location = self.source.location();
        tracing::info!("📥 Loading topics from {}", location);

        let bytes = self.source.fetch().await.inspect_err(|e| {
            tracing::error!("❌ Failed to fetch topics from {}: {}", location, e);
        })?;
        tracing::debug!("Fetched {} bytes", bytes.len());

        let set = TopicSet::from_slice(&bytes).inspect_err(|e| {
            tracing::error!("❌ Topics document from {} is malformed: {}", location, e);
        })?;

        for name in set.duplicate_names() {
            tracing::warn!(
                "⚠️ Category '{}' appears more than once; only the first is selectable",
                name
            );
        }

        tracing::info!(
            "✅ Loaded {} categories ({} topics)",
            set.categories.len(),
            set.topic_count()
        );
        Ok(set)
    }
}
