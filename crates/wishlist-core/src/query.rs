//! Query Engine
//!
//! Pure functions from the full collection plus a [`ViewState`] to what
//! the page shows. Nothing here mutates its inputs.

use std::cmp::Ordering;

use unicode_normalization::char::is_combining_mark;
use unicode_normalization::UnicodeNormalization;

use crate::domain::{EmptyState, Item, SortMode, Stats, ViewState};

/// Filter by bought-state, then by search text, then sort.
///
/// `Vec::sort_by` is stable, so any tie the sort mode does not break
/// keeps storage order.
pub fn derive_view(items: &[Item], view: &ViewState) -> Vec<Item> {
    let mut out: Vec<Item> = items
        .iter()
        .filter(|item| view.filter.matches(item.bought))
        .filter(|item| matches_query(item, &view.query))
        .cloned()
        .collect();

    match view.sort {
        SortMode::Newest => out.sort_by(|a, b| b.created_at.cmp(&a.created_at)),
        SortMode::Name => out.sort_by(|a, b| compare_names(&a.name, &b.name)),
        SortMode::Priority => out.sort_by(|a, b| {
            b.priority
                .rank()
                .cmp(&a.priority.rank())
                .then_with(|| b.created_at.cmp(&a.created_at))
        }),
    }
    out
}

/// Case-insensitive substring match on name or notes. `query` is
/// expected lowercase already; an empty query matches everything.
pub fn matches_query(item: &Item, query: &str) -> bool {
    query.is_empty()
        || item.name.to_lowercase().contains(query)
        || item.notes.to_lowercase().contains(query)
}

/// Collation in the manner of a root-locale `localeCompare`: base letters
/// first ("Éclair" between "apel" and "Zebra"), then accents, then
/// lowercase before uppercase, then the raw strings to keep the order total.
fn compare_names(a: &str, b: &str) -> Ordering {
    base_letters(a)
        .cmp(&base_letters(b))
        .then_with(|| with_accents(a).cmp(&with_accents(b)))
        .then_with(|| case_pattern(a).cmp(case_pattern(b)))
        .then_with(|| a.cmp(b))
}

/// Decomposed, accents stripped, lowercased
fn base_letters(s: &str) -> String {
    s.nfd().filter(|c| !is_combining_mark(*c)).collect::<String>().to_lowercase()
}

fn with_accents(s: &str) -> String {
    s.nfd().collect::<String>().to_lowercase()
}

/// `false` sorts first, so lowercase letters win ties
fn case_pattern(s: &str) -> impl Iterator<Item = bool> + '_ {
    s.chars().map(char::is_uppercase)
}

pub fn compute_stats(items: &[Item]) -> Stats {
    Stats {
        total: items.len(),
        bought: items.iter().filter(|item| item.bought).count(),
    }
}

/// Which empty-state message to show, if any
pub fn empty_state(items: &[Item], view: &ViewState) -> Option<EmptyState> {
    if items.is_empty() {
        return Some(EmptyState::NoItems);
    }
    let any_visible = items
        .iter()
        .any(|item| view.filter.matches(item.bought) && matches_query(item, &view.query));
    if any_visible {
        None
    } else {
        Some(EmptyState::NoMatches)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{Filter, ItemDraft, Priority};
    use chrono::{TimeZone, Utc};
    use proptest::prelude::*;

    fn item(id: u64, name: &str, priority: Priority, created_secs: i64, bought: bool) -> Item {
        let now = Utc.timestamp_opt(1_700_000_000 + created_secs, 0).unwrap();
        let draft = ItemDraft::named(name).priority(priority).validate(2).unwrap();
        let mut item = Item::new(id, draft, now);
        item.bought = bought;
        item
    }

    fn view(filter: Filter, query: &str, sort: SortMode) -> ViewState {
        ViewState {
            filter,
            query: query.to_string(),
            sort,
        }
    }

    fn ids(items: &[Item]) -> Vec<u64> {
        items.iter().map(|item| item.id).collect()
    }

    #[test]
    fn test_headphone_scenario() {
        let items = vec![item(1, "Headphone", Priority::Medium, 0, false)];

        assert_eq!(ids(&derive_view(&items, &view(Filter::All, "", SortMode::Newest))), vec![1]);
        assert_eq!(ids(&derive_view(&items, &view(Filter::Unbought, "", SortMode::Newest))), vec![1]);
        assert!(derive_view(&items, &view(Filter::Bought, "", SortMode::Newest)).is_empty());
        assert_eq!(ids(&derive_view(&items, &view(Filter::All, "head", SortMode::Newest))), vec![1]);
        assert!(derive_view(&items, &view(Filter::All, "zzz", SortMode::Newest)).is_empty());
    }

    #[test]
    fn test_query_searches_notes_case_insensitively() {
        let mut gift = item(1, "Mug", Priority::Low, 0, false);
        gift.notes = "Birthday GIFT for Sari".to_string();
        let items = vec![gift, item(2, "Lamp", Priority::Low, 1, false)];
        assert_eq!(ids(&derive_view(&items, &view(Filter::All, "gift", SortMode::Newest))), vec![1]);
    }

    #[test]
    fn test_newest_first() {
        let items = vec![
            item(1, "Old", Priority::Low, 0, false),
            item(2, "New", Priority::Low, 20, false),
            item(3, "Mid", Priority::Low, 10, false),
        ];
        assert_eq!(ids(&derive_view(&items, &ViewState::default())), vec![2, 3, 1]);
    }

    fn names(items: &[Item]) -> Vec<&str> {
        items.iter().map(|item| item.name.as_str()).collect()
    }

    #[test]
    fn test_name_sort_ignores_case() {
        let items = vec![
            item(1, "kopi", Priority::Low, 0, false),
            item(2, "Buku", Priority::Low, 0, false),
            item(3, "Apel", Priority::Low, 0, false),
            item(4, "apel", Priority::Low, 0, false),
        ];
        let sorted = derive_view(&items, &view(Filter::All, "", SortMode::Name));
        assert_eq!(names(&sorted), vec!["apel", "Apel", "Buku", "kopi"]);
    }

    #[test]
    fn test_name_sort_places_accented_letters_with_their_base() {
        let items = vec![
            item(1, "Zebra", Priority::Low, 0, false),
            item(2, "Éclair", Priority::Low, 0, false),
            item(3, "apel", Priority::Low, 0, false),
            item(4, "Apel", Priority::Low, 0, false),
            item(5, "eclair", Priority::Low, 0, false),
        ];
        let sorted = derive_view(&items, &view(Filter::All, "", SortMode::Name));
        assert_eq!(names(&sorted), vec!["apel", "Apel", "eclair", "Éclair", "Zebra"]);
    }

    #[test]
    fn test_priority_ties_fall_back_to_newest() {
        let items = vec![
            item(1, "First", Priority::High, 0, false),
            item(2, "Second", Priority::High, 10, false),
            item(3, "Third", Priority::High, 5, false),
            item(4, "Low", Priority::Low, 99, false),
            item(5, "Medium", Priority::Medium, 1, false),
        ];
        let sorted = derive_view(&items, &view(Filter::All, "", SortMode::Priority));
        assert_eq!(ids(&sorted), vec![2, 3, 1, 5, 4]);
    }

    #[test]
    fn test_residual_ties_keep_storage_order() {
        let items = vec![
            item(7, "Same", Priority::Medium, 0, false),
            item(3, "Same", Priority::Medium, 0, false),
            item(5, "Same", Priority::Medium, 0, false),
        ];
        for sort in SortMode::ALL {
            assert_eq!(ids(&derive_view(&items, &view(Filter::All, "", sort))), vec![7, 3, 5]);
        }
    }

    #[test]
    fn test_stats_ignore_view() {
        let items = vec![
            item(1, "Laptop", Priority::High, 0, false),
            item(2, "Buku", Priority::Low, 1, true),
            item(3, "Pena", Priority::Low, 2, true),
        ];
        assert_eq!(compute_stats(&items), Stats { total: 3, bought: 2 });
        assert_eq!(compute_stats(&[]), Stats::default());
    }

    #[test]
    fn test_empty_state() {
        let items = vec![item(1, "Laptop", Priority::High, 0, false)];
        assert_eq!(empty_state(&[], &ViewState::default()), Some(EmptyState::NoItems));
        assert_eq!(empty_state(&items, &ViewState::default()), None);
        assert_eq!(
            empty_state(&items, &view(Filter::Bought, "", SortMode::Newest)),
            Some(EmptyState::NoMatches)
        );
        assert_eq!(
            empty_state(&items, &view(Filter::All, "zzz", SortMode::Newest)),
            Some(EmptyState::NoMatches)
        );
    }

    fn arb_items() -> impl Strategy<Value = Vec<Item>> {
        prop::collection::vec(
            ("[a-zA-Z]{2,8}", 0u8..3, 0i64..50, any::<bool>()),
            0..20,
        )
        .prop_map(|rows| {
            rows.into_iter()
                .enumerate()
                .map(|(i, (name, p, secs, bought))| {
                    let priority = Priority::ALL[p as usize];
                    item(i as u64 + 1, &name, priority, secs, bought)
                })
                .collect()
        })
    }

    fn arb_view() -> impl Strategy<Value = ViewState> {
        (0usize..3, "[a-z]{0,2}", 0usize..3).prop_map(|(f, query, s)| ViewState {
            filter: Filter::ALL[f],
            query,
            sort: SortMode::ALL[s],
        })
    }

    proptest! {
        #[test]
        fn prop_derive_view_is_pure(items in arb_items(), state in arb_view()) {
            let items_before = items.clone();
            let state_before = state.clone();

            let first = derive_view(&items, &state);
            let second = derive_view(&items, &state);

            prop_assert_eq!(&first, &second);
            prop_assert_eq!(&items, &items_before);
            prop_assert_eq!(&state, &state_before);
        }

        #[test]
        fn prop_view_is_a_matching_subset(items in arb_items(), state in arb_view()) {
            let derived = derive_view(&items, &state);
            prop_assert!(derived.len() <= items.len());
            for shown in &derived {
                prop_assert!(state.filter.matches(shown.bought));
                prop_assert!(matches_query(shown, &state.query));
            }
            let expected = items
                .iter()
                .filter(|i| state.filter.matches(i.bought) && matches_query(i, &state.query))
                .count();
            prop_assert_eq!(derived.len(), expected);
            prop_assert_eq!(derived.is_empty(), empty_state(&items, &state).is_some());
        }
    }
}
