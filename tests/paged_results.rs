use proptest::prelude::*;
use reelmark::app::{MergeOutcome, PagedResults};
use reelmark::MovieSummary;
use std::collections::HashSet;

fn movie(id: &str) -> MovieSummary {
    MovieSummary::new(id, format!("Title {id}"), "2021", "movie")
}

fn page(ids: &[&str]) -> Vec<MovieSummary> {
    ids.iter().map(|id| movie(id)).collect()
}

fn ids(results: &PagedResults) -> Vec<&str> {
    results.items().iter().map(|m| m.id.as_str()).collect()
}

#[test]
fn new_term_resets_and_starts_at_page_one() {
    let mut results = PagedResults::default();
    assert_eq!(results.current_page(), 1);

    assert!(results.set_search_term("dune"));
    results.merge_page("dune", 1, page(&["a", "b"]));
    assert_eq!(results.request_next_page(), 2);

    assert!(results.set_search_term("arrival"));
    assert_eq!(results.term(), "arrival");
    assert_eq!(results.current_page(), 1);
    assert!(results.is_empty());
}

#[test]
fn same_term_keeps_accumulated_results() {
    let mut results = PagedResults::default();
    results.set_search_term("dune");
    results.merge_page("dune", 1, page(&["a", "b"]));
    results.request_next_page();

    assert!(!results.set_search_term("dune"));
    assert_eq!(ids(&results), ["a", "b"]);
    assert_eq!(results.current_page(), 2);
}

#[test]
fn later_pages_append_only_unseen_ids() {
    let mut results = PagedResults::default();
    results.set_search_term("dune");

    assert_eq!(
        results.merge_page("dune", 1, page(&["tt1", "tt2", "tt3"])),
        MergeOutcome::Merged { added: 3, dropped: 0 }
    );
    results.request_next_page();
    assert_eq!(
        results.merge_page("dune", 2, page(&["tt3", "tt4", "tt1", "tt5"])),
        MergeOutcome::Merged { added: 2, dropped: 2 }
    );

    assert_eq!(ids(&results), ["tt1", "tt2", "tt3", "tt4", "tt5"]);
}

#[test]
fn first_page_replaces_and_dedups_within_itself() {
    let mut results = PagedResults::default();
    results.set_search_term("dune");
    results.merge_page("dune", 1, page(&["old"]));

    let outcome = results.merge_page("dune", 1, page(&["x", "y", "x"]));

    assert_eq!(outcome, MergeOutcome::Merged { added: 2, dropped: 1 });
    assert_eq!(ids(&results), ["x", "y"]);
}

#[test]
fn page_for_other_term_is_stale() {
    let mut results = PagedResults::default();
    results.set_search_term("dune");
    results.merge_page("dune", 1, page(&["a"]));
    results.set_search_term("arrival");

    assert_eq!(results.merge_page("dune", 2, page(&["b"])), MergeOutcome::Stale);
    assert!(results.is_empty());
}

#[test]
fn has_more_compares_against_reported_total() {
    let mut results = PagedResults::default();
    results.set_search_term("dune");
    results.merge_page("dune", 1, page(&["a", "b"]));

    assert!(results.has_more(3));
    assert!(!results.has_more(2));
    assert!(!results.has_more(0));
}

#[test]
fn empty_page_is_merged() {
    let mut results = PagedResults::default();
    results.set_search_term("nothing");

    assert_eq!(
        results.merge_page("nothing", 1, Vec::new()),
        MergeOutcome::Merged { added: 0, dropped: 0 }
    );
    assert!(!results.has_more(0));
}

proptest! {
    #[test]
    fn accumulated_ids_are_unique_and_first_seen(
        pages in prop::collection::vec(prop::collection::vec(0u8..20, 0..10), 1..6)
    ) {
        let mut results = PagedResults::default();
        results.set_search_term("term");

        let mut expected: Vec<String> = Vec::new();
        let mut seen = HashSet::new();

        for (index, raw) in pages.iter().enumerate() {
            let page_number = u32::try_from(index + 1).unwrap_or(u32::MAX);
            if page_number > 1 {
                results.request_next_page();
            }
            let items: Vec<MovieSummary> = raw.iter().map(|n| movie(&format!("tt{n}"))).collect();
            for item in &items {
                if seen.insert(item.id.clone()) {
                    expected.push(item.id.clone());
                }
            }
            results.merge_page("term", page_number, items);
        }

        let actual: Vec<String> = results.items().iter().map(|m| m.id.clone()).collect();
        prop_assert_eq!(actual, expected);
    }
}
