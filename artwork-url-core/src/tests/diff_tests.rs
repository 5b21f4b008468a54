use super::*;

fn table(rows: &[(&str, &str, &str)]) -> Table {
    Table::new(
        rows.iter()
            .map(|(id, label, slug)| TableRow::new(*id, *label, *slug))
            .collect(),
        true,
    )
}

#[test]
fn slug_mismatch_flags_row() {
    let generated = table(&[("1", "A", "a")]);
    let cmp = compare_text(&generated, "AW ID\tArtwork Name\tShort URL\n1\tA\ta-x\n").unwrap();
    assert_eq!(cmp.rows[0].status, MatchStatus::MatchedDiffering);
    assert!(cmp.rows[0].slug_differs());
    assert!(!cmp.rows[0].label_differs());
    assert_eq!(cmp.differing, BTreeSet::from([0]));
    assert!(cmp.only_in_comparison.is_empty());
}

#[test]
fn equal_rows_are_clean() {
    let generated = table(&[("1", "A", "a"), ("2", "B", "b")]);
    let cmp = compare_text(
        &generated,
        "AW ID\tArtwork Name\tShort URL\n2\tB\tb\n1\tA\ta\n",
    )
    .unwrap();
    assert!(cmp.is_clean());
    assert_eq!(cmp.count(MatchStatus::MatchedEqual), 2);
}

#[test]
fn header_order_is_free() {
    let generated = table(&[("1", "A", "a")]);
    let cmp = compare_text(&generated, "Short URL\tAW ID\tArtwork Name\na\t1\tA\n").unwrap();
    assert!(cmp.is_clean());
}

#[test]
fn comparison_is_case_sensitive() {
    let generated = table(&[("1", "Night Sky", "night-sky")]);
    let cmp = compare_text(
        &generated,
        "AW ID\tArtwork Name\tShort URL\n1\tnight sky\tnight-sky\n",
    )
    .unwrap();
    assert_eq!(cmp.rows[0].status, MatchStatus::MatchedDiffering);
    assert!(cmp.rows[0].label_differs());
}

#[test]
fn one_sided_rows() {
    let generated = table(&[("1", "A", "a"), ("2", "B", "b")]);
    let cmp = compare_text(
        &generated,
        "AW ID\tArtwork Name\tShort URL\n1\tA\ta\n3\tC\tc\n3\tC\tc-dup\n",
    )
    .unwrap();
    assert_eq!(cmp.rows[1].status, MatchStatus::OnlyInGenerated);
    assert!(cmp.rows[1].compared.is_none());
    assert_eq!(cmp.differing, BTreeSet::from([1]));
    assert_eq!(cmp.only_in_comparison, vec![TableRow::new("3", "C", "c")]);
    assert_eq!(cmp.count(MatchStatus::OnlyInComparison), 1);
    assert!(!cmp.is_clean());
}

#[test]
fn first_reference_row_wins() {
    let generated = table(&[("1", "A", "a")]);
    let cmp = compare_text(
        &generated,
        "AW ID\tArtwork Name\tShort URL\n1\tA\ta\n1\tA\tzzz\n",
    )
    .unwrap();
    assert!(cmp.is_clean());
}

#[test]
fn missing_header_fields_are_reported() {
    let generated = table(&[("1", "A", "a")]);
    let err = compare_text(&generated, "AW ID\tName\tURL\n1\tA\ta\n").unwrap_err();
    match err {
        ArtworkError::MalformedComparisonHeader { missing } => {
            assert_eq!(missing, vec![NAME_HEADER, URL_HEADER]);
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn empty_comparison_block_is_malformed() {
    let generated = table(&[("1", "A", "a")]);
    assert!(matches!(
        compare_text(&generated, "\n\n"),
        Err(ArtworkError::MalformedComparisonHeader { .. })
    ));
}

#[test]
fn unflagged_keeps_every_row() {
    let generated = table(&[("1", "A", "a"), ("2", "B", "b")]);
    let cmp = Comparison::unflagged(&generated);
    assert_eq!(cmp.rows.len(), 2);
    assert!(cmp.is_clean());
    assert!(cmp.rows.iter().all(|r| r.status == MatchStatus::MatchedEqual));
}

#[test]
fn short_reference_row_reads_as_empty_fields() {
    let generated = table(&[("1", "A", "a")]);
    let cmp = compare_text(&generated, "AW ID\tArtwork Name\tShort URL\n1\tA\n").unwrap();
    assert_eq!(cmp.rows[0].compared, Some(TableRow::new("1", "A", "")));
    assert!(cmp.rows[0].slug_differs());
}

#[test]
fn inputs_are_untouched() {
    let generated = table(&[("1", "A", "a")]);
    let reference = vec![TableRow::new("1", "A", "b")];
    let before = (generated.clone(), reference.clone());
    let _ = compare(&generated, &reference);
    assert_eq!(before, (generated, reference));
}

#[test]
fn empty_middle_cell_keeps_its_column() {
    let generated = table(&[("1", "", "a")]);
    let cmp = compare_text(&generated, "AW ID\tArtwork Name\tShort URL\n1\t\ta\n").unwrap();
    assert_eq!(cmp.rows[0].compared, Some(TableRow::new("1", "", "a")));
    assert!(cmp.is_clean());
}

#[test]
fn empty_first_cell_under_reordered_header() {
    let generated = table(&[("5", "!!!", "")]);
    let cmp = compare_text(&generated, "Short URL\tAW ID\tArtwork Name\n\t5\t!!!\n").unwrap();
    assert_eq!(cmp.rows[0].status, MatchStatus::MatchedEqual);
    assert!(cmp.only_in_comparison.is_empty());
}

#[test]
fn cells_are_trimmed_individually() {
    let rows = parse_comparison("AW ID\tArtwork Name\tShort URL\n 7 \t  Moon \t\n").unwrap();
    assert_eq!(rows, vec![TableRow::new("7", "Moon", "")]);
}
