use crate::domain::model::{Topic, TopicSet};
use rand::Rng;

/// Maps a uniform sample in `[0, 1)` onto an index in `[0, len)`.
///
/// Returns `None` for an empty list or a sample outside `[0, 1)`, so the
/// result can always be used to index a list of length `len`.
pub fn index_for(unit: f64, len: usize) -> Option<usize> {
    if len == 0 || !(0.0..1.0).contains(&unit) {
        return None;
    }
    let index = (unit * len as f64).floor() as usize;
    // 浮點誤差時仍不得越界
    Some(index.min(len - 1))
}

/// Picks one topic uniformly at random from the first category named `category`.
///
/// Unknown categories and categories without topics yield `None`. Every call is
/// an independent draw.
pub fn select_topic<'a, R: Rng>(
    set: &'a TopicSet,
    category: &str,
    rng: &mut R,
) -> Option<&'a Topic> {
    let found = set.find_category(category)?;
    let topic = found.pick(rng);
    if topic.is_none() {
        tracing::debug!("Category '{}' has no topics, nothing selected", category);
    }
    topic
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::model::Category;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn sample_set() -> TopicSet {
        TopicSet {
            categories: vec![
                Category {
                    category: "Icebreakers".to_string(),
                    topics: vec![Topic::new(1_i64, "Favorite food?")],
                },
                Category {
                    category: "Travel".to_string(),
                    topics: (1..=4_i64)
                        .map(|i| Topic::new(i, format!("Travel question {}", i)))
                        .collect(),
                },
                Category {
                    category: "Empty".to_string(),
                    topics: vec![],
                },
            ],
        }
    }

    #[test]
    fn test_index_for_bounds() {
        assert_eq!(index_for(0.0, 3), Some(0));
        assert_eq!(index_for(0.3333, 3), Some(0));
        assert_eq!(index_for(0.34, 3), Some(1));
        assert_eq!(index_for(0.999_999_999, 3), Some(2));
        assert_eq!(index_for(f64::from_bits(0x3FEF_FFFF_FFFF_FFFF), 7), Some(6));
        assert_eq!(index_for(0.5, 0), None);
        assert_eq!(index_for(1.0, 3), None);
        assert_eq!(index_for(-0.1, 3), None);
        assert_eq!(index_for(f64::NAN, 3), None);
    }

    #[test]
    fn test_single_topic_category_always_returns_it() {
        let set = sample_set();
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..100 {
            let topic = select_topic(&set, "Icebreakers", &mut rng).unwrap();
            assert_eq!(topic.id.to_string(), "1");
            assert_eq!(topic.topic, "Favorite food?");
        }
    }

    #[test]
    fn test_empty_or_unknown_category_selects_nothing() {
        let set = sample_set();
        let mut rng = StdRng::seed_from_u64(7);
        assert!(select_topic(&set, "Empty", &mut rng).is_none());
        assert!(select_topic(&set, "Nope", &mut rng).is_none());
        assert!(select_topic(&set, "", &mut rng).is_none());
        assert!(select_topic(&TopicSet::default(), "Travel", &mut rng).is_none());
    }

    #[test]
    fn test_selection_is_always_a_member() {
        let set = sample_set();
        let travel = set.find_category("Travel").unwrap();
        let mut rng = StdRng::seed_from_u64(42);
        for _ in 0..500 {
            let topic = select_topic(&set, "Travel", &mut rng).unwrap();
            assert!(travel.contains(topic));
        }
    }

    #[test]
    fn test_selection_is_uniform() {
        let set = sample_set();
        let mut rng = StdRng::seed_from_u64(2024);
        let draws = 40_000;
        let mut counts = [0usize; 4];

        for _ in 0..draws {
            let topic = select_topic(&set, "Travel", &mut rng).unwrap();
            let id: usize = topic.id.to_string().parse().unwrap();
            counts[id - 1] += 1;
        }

        let expected = draws as f64 / 4.0;
        for count in counts {
            let deviation = (count as f64 - expected).abs() / expected;
            assert!(deviation < 0.05, "counts not uniform: {:?}", counts);
        }
    }

    #[test]
    fn test_repeated_draws_are_independent() {
        let set = sample_set();
        let mut rng = StdRng::seed_from_u64(1);
        let picks: Vec<String> = (0..50)
            .map(|_| select_topic(&set, "Travel", &mut rng).unwrap().topic.clone())
            .collect();
        let distinct: std::collections::HashSet<_> = picks.iter().collect();
        assert!(distinct.len() > 1);
    }
}
