use super::*;

#[test]
fn tab_runs_collapse() {
    assert_eq!(
        Delimiter::TabRun.split("Name\t\t\t1,2\tDisabled"),
        vec!["Name", "1,2", "Disabled"]
    );
}

#[test]
fn tab_run_keeps_blank_field_position() {
    assert_eq!(Delimiter::TabRun.split("Name\t \t123"), vec!["Name", "", "123"]);
}

#[test]
fn comma_or_whitespace_split() {
    assert_eq!(
        Delimiter::CommaOrWhitespace.split("35221837, 35226788,,Disabled\t1"),
        vec!["35221837", "35226788", "Disabled", "1"]
    );
}

#[test]
fn newline_policy_is_single_field() {
    assert_eq!(Delimiter::Newline.split("  12 34  "), vec!["12 34"]);
    assert!(Delimiter::Newline.split("   ").is_empty());
}

#[test]
fn blank_lines_are_dropped() {
    let (header, rows) = tokenize("\n  \nA\t1\n\n\nB\t2\n   \n", Delimiter::TabRun, false);
    assert!(header.is_none());
    let rows: Vec<_> = rows.collect();
    assert_eq!(rows.len(), 2);
    assert_eq!(rows[0].line_number, 3);
    assert_eq!(rows[0].columns, vec!["A", "1"]);
    assert_eq!(rows[1].line_number, 6);
    assert_eq!(rows[1].raw, "B\t2");
}

#[test]
fn header_is_first_non_blank_line() {
    let (header, rows) = tokenize("\n\nName\tPreview\tiPhone\nA\t-\t1\n", Delimiter::TabRun, true);
    let header = header.unwrap();
    assert_eq!(header.columns, vec!["Name", "Preview", "iPhone"]);
    let rows: Vec<_> = rows.collect();
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].columns, vec!["A", "-", "1"]);
}

#[test]
fn header_on_empty_text() {
    let (header, mut rows) = tokenize("   \n", Delimiter::TabRun, true);
    assert!(header.is_none());
    assert!(rows.next().is_none());
}

#[test]
fn single_column_row_is_kept() {
    let (_, rows) = tokenize("Lonely Name", Delimiter::TabRun, false);
    let rows: Vec<_> = rows.collect();
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].columns, vec!["Lonely Name"]);
}

#[test]
fn carriage_returns_are_trimmed() {
    let (_, rows) = tokenize("A\t1\r\nB\t2\r\n", Delimiter::TabRun, false);
    let rows: Vec<_> = rows.collect();
    assert_eq!(rows[0].columns, vec!["A", "1"]);
    assert_eq!(rows[1].columns, vec!["B", "2"]);
}

#[test]
fn has_content_detects_blank_text() {
    assert!(!has_content(""));
    assert!(!has_content(" \n\t\n"));
    assert!(has_content("\n x \n"));
}

#[test]
fn delimiter_names_round_trip() {
    for d in Delimiter::ALL {
        assert_eq!(d.name().parse::<Delimiter>().unwrap(), d);
    }
    assert!("semicolon".parse::<Delimiter>().is_err());
}
