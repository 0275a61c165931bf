use crate::core::session::{Session, ViewState};
use crate::domain::model::{Topic, TopicSet};
use std::fmt::Write;

pub const TITLE: &str = "Chatter Box";
pub const PLACEHOLDER: &str = "-- Select a Category --";
pub const LOADING: &str = "Loading topics...";

/// Renders whichever view the session is in.
pub fn render(session: &Session) -> String {
    match session.view() {
        ViewState::Loading => format!("{}\n", LOADING),
        ViewState::Failed { message, hint } => render_error(message, hint),
        ViewState::Ready(set) => render_ready(session, set),
    }
}

pub fn render_error(message: &str, hint: &str) -> String {
    format!("❌ Error loading topics: {}\n💡 {}\n", message, hint)
}

fn render_ready(session: &Session, set: &TopicSet) -> String {
    let mut out = String::new();
    let selected = session.selected_category();

    let _ = writeln!(out, "{}", TITLE);
    let _ = writeln!(out, "{}", "=".repeat(TITLE.len()));
    let _ = writeln!(out, "Select Category:");
    let _ = writeln!(out, "{}", render_chooser_line(None, PLACEHOLDER, selected.is_none()));
    for (i, name) in set.category_names().enumerate() {
        let _ = writeln!(out, "{}", render_chooser_line(Some(i + 1), name, selected == Some(name)));
    }

    if session.can_generate() {
        let _ = writeln!(out, "[ Generate Random Topic ]");
    } else {
        let _ = writeln!(out, "[ Generate Random Topic ] (select a category first)");
    }

    if let (Some(topic), Some(category)) = (session.current_topic(), selected) {
        out.push('\n');
        out.push_str(&render_topic(topic, category));
    }

    out
}

fn render_chooser_line(number: Option<usize>, name: &str, selected: bool) -> String {
    let marker = if selected { '>' } else { ' ' };
    match number {
        Some(n) => format!("{} {:>2}. {}", marker, n, name),
        None => format!("{}     {}", marker, name),
    }
}

/// The result panel: topic text tagged with its category and id.
pub fn render_topic(topic: &Topic, category: &str) -> String {
    format!(
        "Your Random Topic:\n  {}\n  [{}] ID: {}\n",
        topic.topic, category, topic.id
    )
}

pub fn render_category_list(set: &TopicSet) -> String {
    if set.is_empty() {
        return "No categories available\n".to_string();
    }

    set.categories
        .iter()
        .enumerate()
        .map(|(i, c)| format!("{:>2}. {} ({} topics)\n", i + 1, c.category, c.topics.len()))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::model::Category;
    use crate::utils::error::TopicError;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn icebreakers() -> TopicSet {
        TopicSet {
            categories: vec![Category {
                category: "Icebreakers".to_string(),
                topics: vec![Topic::new(1_i64, "Favorite food?")],
            }],
        }
    }

    #[test]
    fn test_render_loading() {
        assert_eq!(render(&Session::new()), "Loading topics...\n");
    }

    #[test]
    fn test_render_error_has_no_chooser() {
        let mut session = Session::new();
        session.finish_loading(Err(TopicError::BadStatusError { status: 500 }));

        let out = render(&session);
        assert!(out.contains("Error loading topics: Failed to fetch topics data"));
        assert!(!out.contains(PLACEHOLDER));
        assert!(!out.contains("Generate"));
    }

    #[test]
    fn test_render_ready_with_topic() {
        let mut session = Session::new();
        session.finish_loading(Ok(icebreakers()));

        let out = render(&session);
        assert!(out.starts_with(TITLE));
        assert!(out.contains(&format!(">     {}", PLACEHOLDER)));
        assert!(out.contains("   1. Icebreakers"));
        assert!(out.contains("(select a category first)"));

        session.select_category("Icebreakers");
        session.generate(&mut StdRng::seed_from_u64(9));
        let out = render(&session);
        assert!(out.contains(">  1. Icebreakers"));
        assert!(out.contains("Your Random Topic:\n  Favorite food?\n  [Icebreakers] ID: 1"));
    }

    #[test]
    fn test_render_category_list() {
        assert_eq!(render_category_list(&icebreakers()), " 1. Icebreakers (1 topics)\n");
        assert_eq!(
            render_category_list(&TopicSet::default()),
            "No categories available\n"
        );
    }
}
