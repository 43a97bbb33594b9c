use cf_leaderboard::directory::{FALLBACK_ROSTER, fallback_roster, parse_roster_rows};

fn row(cells: &[&str]) -> Vec<String> {
    cells.iter().map(|c| c.to_string()).collect()
}

#[test]
fn test_first_row_is_treated_as_header() {
    let rows = vec![row(&["Username", "Notes"]), row(&["tourist", "goat"])];

    assert_eq!(parse_roster_rows(&rows), vec!["tourist"]);
}

#[test]
fn test_handles_are_trimmed_and_taken_from_first_column() {
    let rows = vec![
        row(&["Username"]),
        row(&["  tourist  "]),
        row(&["Petr", "extra column ignored"]),
    ];

    assert_eq!(parse_roster_rows(&rows), vec!["tourist", "Petr"]);
}

#[test]
fn test_blank_and_malformed_rows_are_discarded() {
    let rows = vec![
        row(&["Username"]),
        row(&["tourist"]),
        row(&["   "]),
        row(&[]),
        row(&["", "note without handle"]),
        row(&["rng_58"]),
    ];

    assert_eq!(parse_roster_rows(&rows), vec!["tourist", "rng_58"]);
}

#[test]
fn test_header_only_sheet_yields_no_handles() {
    let rows = vec![row(&["Username"])];
    assert!(parse_roster_rows(&rows).is_empty());

    let rows: Vec<Vec<String>> = Vec::new();
    assert!(parse_roster_rows(&rows).is_empty());
}

#[test]
fn test_fallback_roster_is_the_sample_list() {
    let roster = fallback_roster();

    assert_eq!(roster.len(), FALLBACK_ROSTER.len());
    assert!(roster.contains(&"tourist".to_string()));
    assert!(roster.contains(&"ACRush".to_string()));
}
