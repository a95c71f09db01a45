use catalog_core::selection::{shows_navigation, Selection};
use catalog_core::units::format_weight_kg;
use catalog_core::{filter_entries, filter_indices, CatalogEntry, FilterMemo};

fn entry(id: u32, name: &str) -> CatalogEntry {
    CatalogEntry {
        id,
        name: name.to_string(),
        source_url: format!("https://example.test/pokemon/{id}/"),
        image_url: format!("https://example.test/sprites/{id}.png"),
        categories: vec!["fire".into()],
        weight: 85,
        base_experience: 62,
    }
}

fn names(entries: &[&CatalogEntry]) -> Vec<String> {
    entries.iter().map(|e| e.name.clone()).collect()
}

#[test]
fn search_keeps_matching_entries_in_source_order() {
    let entries = vec![
        entry(4, "charmander"),
        entry(7, "squirtle"),
        entry(5, "charmeleon"),
    ];

    let hits = filter_entries(&entries, "char");
    assert_eq!(names(&hits), vec!["charmander", "charmeleon"]);
}

#[test]
fn search_is_case_insensitive_on_both_sides() {
    let entries = vec![entry(25, "Pikachu"), entry(26, "raichu")];

    assert_eq!(filter_indices(&entries, "CHU"), vec![0, 1]);
    assert_eq!(filter_indices(&entries, "pIKa"), vec![0]);
}

#[test]
fn empty_term_returns_every_entry_unchanged() {
    let entries = vec![entry(1, "bulbasaur"), entry(2, "ivysaur")];

    let all = filter_entries(&entries, "");
    assert_eq!(all.len(), entries.len());
    for (got, want) in all.iter().zip(entries.iter()) {
        assert_eq!(*got, want);
    }
}

#[test]
fn search_without_hits_is_empty_not_an_error() {
    let entries = vec![entry(1, "bulbasaur")];
    assert!(filter_indices(&entries, "zzz").is_empty());
}

#[test]
fn memo_recomputes_only_when_key_or_term_changes() {
    let entries = vec![entry(4, "charmander"), entry(7, "squirtle")];
    let mut memo: FilterMemo<u32> = FilterMemo::new();

    assert_eq!(memo.view(&1, &entries, "char"), &[0]);
    assert_eq!(memo.view(&1, &entries, "char"), &[0]);
    assert_eq!(memo.recomputations(), 1);

    assert_eq!(memo.view(&1, &entries, "squ"), &[1]);
    assert_eq!(memo.recomputations(), 2);

    let reloaded = vec![entry(7, "squirtle")];
    assert_eq!(memo.view(&2, &reloaded, "squ"), &[0]);
    assert_eq!(memo.recomputations(), 3);

    memo.invalidate();
    memo.view(&2, &reloaded, "squ");
    assert_eq!(memo.recomputations(), 4);
}

#[test]
fn next_wraps_from_last_to_first() {
    let sel = Selection::none().select(1, 2);
    assert_eq!(sel.next(2).index(), Some(0));
}

#[test]
fn previous_wraps_from_first_to_last() {
    let sel = Selection::none().select(0, 5);
    assert_eq!(sel.previous(5).index(), Some(4));
    assert_eq!(sel.next(5).index(), Some(1));
}

#[test]
fn navigation_without_selection_is_a_noop() {
    let sel = Selection::none();
    assert_eq!(sel.next(3), sel);
    assert_eq!(sel.previous(3), sel);
}

#[test]
fn select_out_of_range_is_ignored() {
    let sel = Selection::none().select(3, 3);
    assert!(!sel.is_open());

    let open = Selection::none().select(0, 3);
    assert_eq!(open.select(9, 3), open);
}

#[test]
fn stale_selection_is_cleared_against_a_shorter_view() {
    let sel = Selection::none().select(4, 5);
    assert_eq!(sel.revalidate(2), Selection::none());
    assert_eq!(sel.next(2), Selection::none());
    assert_eq!(sel.revalidate(5), sel);
}

#[test]
fn close_clears_selection() {
    let sel = Selection::none().select(0, 1);
    assert!(sel.is_open());
    assert!(!sel.close().is_open());
}

#[test]
fn navigation_controls_need_more_than_one_entry() {
    assert!(!shows_navigation(0));
    assert!(!shows_navigation(1));
    assert!(shows_navigation(2));
}

#[test]
fn weight_is_rendered_in_kilograms_with_one_decimal() {
    assert_eq!(format_weight_kg(69), "6.9 kg");
    assert_eq!(format_weight_kg(100), "10.0 kg");
    assert_eq!(format_weight_kg(0), "0.0 kg");
    assert_eq!(entry(4, "charmander").weight_label(), "8.5 kg");
}
