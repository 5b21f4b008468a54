use super::*;

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

fn sample() -> Table {
    assemble(
        strings(&["35221837", "35226788", "35207351"]),
        Some(strings(&[
            "Absolutely No Problem Phone Cases",
            "Absolutely No Problem Phone Cases",
            "Another Artwork Name",
        ])),
        strings(&[
            "absolutely-no-problem-phone-cases",
            "absolutely-no-problem-phone-cases-atwgp1",
            "another-artwork-name",
        ]),
        Truncation::Strict,
    )
    .unwrap()
}

#[test]
fn assemble_preserves_order() {
    let table = sample();
    assert_eq!(table.len(), 3);
    assert!(table.has_labels());
    let ids: Vec<&str> = table.ids().collect();
    assert_eq!(ids, vec!["35221837", "35226788", "35207351"]);
    assert_eq!(table.rows()[1].slug, "absolutely-no-problem-phone-cases-atwgp1");
}

#[test]
fn assemble_without_labels() {
    let table = assemble(
        strings(&["1", "2"]),
        None,
        strings(&["", ""]),
        Truncation::Strict,
    )
    .unwrap();
    assert!(!table.has_labels());
    assert_eq!(table.headers(), vec![ID_HEADER, URL_HEADER]);
    assert!(table.rows().iter().all(|r| r.label.is_empty()));
}

#[test]
fn shape_mismatch_is_reported() {
    let err = assemble(
        strings(&["1", "2", "3"]),
        Some(strings(&["a", "b"])),
        strings(&["a", "b", "c"]),
        Truncation::Strict,
    )
    .unwrap_err();
    match err {
        ArtworkError::ShapeMismatch { ids, labels, slugs } => {
            assert_eq!((ids, labels, slugs), (3, 2, 3));
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn truncation_cuts_to_shortest() {
    let table = assemble(
        strings(&["1", "2", "3"]),
        Some(strings(&["a", "b"])),
        strings(&["a", "b", "c", "d"]),
        Truncation::TruncateToShortest,
    )
    .unwrap();
    assert_eq!(table.len(), 2);
    assert_eq!(table.rows()[1], TableRow::new("2", "b", "b"));
}

#[test]
fn id_lists() {
    let table = sample();
    assert_eq!(table.id_lines(), "35221837\n35226788\n35207351");
    assert_eq!(table.id_list(), "35221837, 35226788, 35207351");
}

#[test]
fn render_text_right_aligns() {
    let table = assemble(
        strings(&["7", "123"]),
        Some(strings(&["Ab", "C"])),
        strings(&["ab", "c"]),
        Truncation::Strict,
    )
    .unwrap();
    let expected = "\
AW ID Artwork Name Short URL
    7           Ab        ab
  123            C         c";
    assert_eq!(table.render_text(), expected);
}

#[test]
fn render_empty_table_is_header_only() {
    let table = Table::new(Vec::new(), true);
    assert_eq!(table.render_text(), "AW ID Artwork Name Short URL");
}

#[test]
fn tsv_export() {
    let tsv = sample().to_tsv().unwrap();
    let mut lines = tsv.lines();
    assert_eq!(lines.next(), Some("AW ID\tArtwork Name\tShort URL"));
    assert_eq!(
        lines.next(),
        Some("35221837\tAbsolutely No Problem Phone Cases\tabsolutely-no-problem-phone-cases")
    );
    assert_eq!(lines.count(), 2);
}

#[test]
fn tsv_does_not_quote() {
    let table = Table::new(vec![TableRow::new("1", "Say \"Hi\", Bob", "say-hi-bob")], true);
    let tsv = table.to_tsv().unwrap();
    assert!(tsv.contains("1\tSay \"Hi\", Bob\tsay-hi-bob"));
}

#[test]
fn id_column_round_trips() {
    let ids = strings(&["9", "10", "11", "12"]);
    let table = assemble(
        ids.clone(),
        Some(strings(&["a", "b", "c", "d"])),
        strings(&["a", "b", "c", "d"]),
        Truncation::Strict,
    )
    .unwrap();
    let back: Vec<String> = table.ids().map(String::from).collect();
    assert_eq!(back, ids);
}
