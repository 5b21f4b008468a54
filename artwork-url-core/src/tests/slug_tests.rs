use super::*;

fn fresh(labels: &[&str]) -> Vec<String> {
    generate_slugs(labels, SlugState::new()).0
}

#[test]
fn repeated_label_gets_suffix() {
    assert_eq!(
        fresh(&["Symbol Mosaic Case", "Symbol Mosaic Case", "Dialect Wave Case"]),
        vec![
            "symbol-mosaic-case",
            "symbol-mosaic-case-atwgp1",
            "dialect-wave-case"
        ]
    );
}

#[test]
fn non_consecutive_repeats_count_up() {
    assert_eq!(
        fresh(&["A b", "C", "a B", "c", "A-B"]),
        vec!["a-b", "c", "a-b-atwgp1", "c-atwgp1", "a-b-atwgp2"]
    );
}

#[test]
fn k_occurrences_produce_base_then_numbered() {
    let labels = vec!["Wave"; 5];
    let slugs = fresh(&labels);
    assert_eq!(slugs[0], "wave");
    for (n, slug) in slugs.iter().enumerate().skip(1) {
        assert_eq!(slug, &format!("wave-atwgp{n}"));
    }
}

#[test]
fn punctuation_becomes_word_break() {
    assert_eq!(slug_base("Cat's Pajamas"), "cat-s-pajamas");
    assert_eq!(slug_base("Hello...World"), "hello-world");
    assert_eq!(slug_base("  Multiple   Spaces\there "), "multiple-spaces-here");
    assert_eq!(slug_base("Under_score"), "under_score");
    assert_eq!(slug_base("Case 2024"), "case-2024");
}

#[test]
fn empty_base_yields_empty_slug() {
    assert_eq!(fresh(&["", "!!!", "", "?"]), vec!["", "", "", ""]);
}

#[test]
fn empty_base_is_not_counted() {
    let (_, state) = generate_slugs(&["", "---"], SlugState::new());
    assert_eq!(state.base_count(), 0);
}

#[test]
fn deterministic_with_fresh_state() {
    let labels = ["Night Sky", "Night Sky", "Ocean", "Night  Sky!"];
    assert_eq!(fresh(&labels), fresh(&labels));
}

#[test]
fn state_is_threaded_through() {
    let (first, state) = generate_slugs(&["Moon"], SlugState::new());
    assert_eq!(first, vec!["moon"]);
    assert_eq!(state.repeats("moon"), Some(0));

    let (second, state) = generate_slugs(&["Moon", "Moon"], state);
    assert_eq!(second, vec!["moon-atwgp1", "moon-atwgp2"]);
    assert_eq!(state.repeats("moon"), Some(2));
    assert_eq!(state.repeats("sun"), None);
}

#[test]
fn literal_suffix_in_name_is_its_own_base() {
    // Counters are keyed by base only; a name that already ends in the
    // suffix can coincide with a generated repeat.
    assert_eq!(
        fresh(&["Moon", "Moon atwgp1", "Moon"]),
        vec!["moon", "moon-atwgp1", "moon-atwgp1"]
    );
}
