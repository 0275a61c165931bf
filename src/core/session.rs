use crate::domain::model::{Topic, TopicSet};
use crate::utils::error::{Result, TopicError};
use rand::Rng;

/// The three mutually exclusive views of a session.
#[derive(Debug, Clone, PartialEq)]
pub enum ViewState {
    Loading,
    Failed { message: String, hint: String },
    Ready(TopicSet),
}

/// What the user currently has selected and on screen.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SelectionState {
    pub category: Option<String>,
    pub topic: Option<Topic>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CategoryChange {
    Selected,
    Cleared,
    Unknown,
    Unavailable,
}

#[derive(Debug)]
pub struct Session {
    view: ViewState,
    selection: SelectionState,
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}

impl Session {
    pub fn new() -> Self {
        Self {
            view: ViewState::Loading,
            selection: SelectionState::default(),
        }
    }

    /// Moves out of `Loading` exactly once. Returns false if already settled.
    pub fn finish_loading(&mut self, result: Result<TopicSet>) -> bool {
        if !matches!(self.view, ViewState::Loading) {
            tracing::warn!("Ignoring load result: session already settled");
            return false;
        }

        self.view = match result {
            Ok(set) => ViewState::Ready(set),
            Err(e) => Self::failed_view(&e),
        };
        true
    }

    fn failed_view(error: &TopicError) -> ViewState {
        ViewState::Failed {
            message: error.user_friendly_message(),
            hint: error.recovery_suggestion().to_string(),
        }
    }

    pub fn view(&self) -> &ViewState {
        &self.view
    }

    pub fn topics(&self) -> Option<&TopicSet> {
        match &self.view {
            ViewState::Ready(set) => Some(set),
            _ => None,
        }
    }

    pub fn is_loading(&self) -> bool {
        matches!(self.view, ViewState::Loading)
    }

    pub fn selected_category(&self) -> Option<&str> {
        self.selection.category.as_deref()
    }

    pub fn current_topic(&self) -> Option<&Topic> {
        self.selection.topic.as_ref()
    }

    /// Changes the selected category; any change clears the displayed topic.
    ///
    /// The exact name wins; surrounding whitespace is only ignored when the
    /// exact name matches nothing. An empty name behaves like the placeholder
    /// entry of the chooser.
    pub fn select_category(&mut self, name: &str) -> CategoryChange {
        let Some(set) = self.topics() else {
            return CategoryChange::Unavailable;
        };

        let trimmed = name.trim();
        let resolved = if set.find_category(name).is_some() {
            Some(name)
        } else if !trimmed.is_empty() && set.find_category(trimmed).is_some() {
            Some(trimmed)
        } else {
            None
        };

        let (category, change) = match resolved {
            Some(found) => (Some(found.to_string()), CategoryChange::Selected),
            None if trimmed.is_empty() => (None, CategoryChange::Cleared),
            None => (None, CategoryChange::Unknown),
        };
        self.apply_selection(category, change)
    }

    /// Selects the category at `index` in display order, name taken verbatim.
    pub fn select_category_at(&mut self, index: usize) -> CategoryChange {
        let Some(set) = self.topics() else {
            return CategoryChange::Unavailable;
        };

        match set.categories.get(index) {
            Some(found) => {
                let name = found.category.clone();
                self.apply_selection(Some(name), CategoryChange::Selected)
            }
            None => self.apply_selection(None, CategoryChange::Unknown),
        }
    }

    fn apply_selection(
        &mut self,
        category: Option<String>,
        change: CategoryChange,
    ) -> CategoryChange {
        self.selection.topic = None;
        self.selection.category = category;
        tracing::debug!(
            "Category changed to '{}' ({:?})",
            self.selection.category.as_deref().unwrap_or("none"),
            change
        );
        change
    }

    /// Whether the generate control is enabled.
    pub fn can_generate(&self) -> bool {
        self.topics().is_some() && self.selection.category.is_some()
    }

    /// Draws a new topic for the selected category.
    ///
    /// Without a selection, or for a category with no topics, nothing changes.
    pub fn generate<R: Rng>(&mut self, rng: &mut R) -> Option<&Topic> {
        let set = self.topics()?;
        let category = self.selection.category.as_deref()?;
        let topic = crate::core::selector::select_topic(set, category, rng)?.clone();

        tracing::debug!("Generated topic {} from '{}'", topic.id, category);
        self.selection.topic = Some(topic);
        self.selection.topic.as_ref()
    }
}
