//! Tests for the filter pipeline.

use filtered_select::SelectOption;
use filtered_select::filter::{filter_options, group_options};

fn opt(text: &str, id: &str) -> SelectOption {
    SelectOption::new(text, id)
}

fn grouped(text: &str, id: &str, group: &str) -> SelectOption {
    SelectOption::new(text, id).with_group(group)
}

fn names() -> Vec<SelectOption> {
    vec![
        grouped("Ben", "BP", "Parents"),
        grouped("Benny", "BP", "Nicknames"),
        grouped("Alice", "AA", "Parents"),
        opt("Zed", "ZZ"),
    ]
}

#[test]
fn test_empty_query_matches_everything_sorted() {
    let filtered = filter_options(&names(), "");
    let texts: Vec<&str> = filtered.iter().map(|f| f.option.text.as_str()).collect();
    // Sort key is (group ?? "") + text, case-folded; ungrouped "Zed" sorts
    // under plain "zed".
    assert_eq!(texts, vec!["Benny", "Alice", "Ben", "Zed"]);
}

#[test]
fn test_substring_match_is_exact() {
    let filtered = filter_options(&names(), "ben");
    for entry in &filtered {
        let haystack = format!(
            "{}{}",
            entry.option.text,
            entry.option.group.as_deref().unwrap_or("")
        )
        .to_lowercase();
        assert!(haystack.contains("ben"));
    }
    assert_eq!(filtered.len(), 2);
}

#[test]
fn test_match_is_case_insensitive() {
    let filtered = filter_options(&names(), "BEN");
    assert_eq!(filtered.len(), 2);
}

#[test]
fn test_query_can_match_the_group_label() {
    let filtered = filter_options(&names(), "parents");
    let texts: Vec<&str> = filtered.iter().map(|f| f.option.text.as_str()).collect();
    assert_eq!(texts, vec!["Alice", "Ben"]);
}

#[test]
fn test_query_can_straddle_text_and_group() {
    // The haystack is text + group concatenated, so a query spanning the
    // boundary matches too.
    let filtered = filter_options(&names(), "benparents");
    assert_eq!(filtered.len(), 1);
    assert_eq!(filtered[0].option.text, "Ben");
}

#[test]
fn test_ben_benny_scenario_orders_by_group_then_text() {
    let options = vec![
        grouped("Ben", "BP", "Parents"),
        grouped("Benny", "BP", "Nicknames"),
    ];
    let filtered = filter_options(&options, "ben");
    // "NicknamesBenny" < "ParentsBen", so the nickname comes first.
    assert_eq!(filtered[0].option.text, "Benny");
    assert_eq!(filtered[1].option.text, "Ben");
}

#[test]
fn test_first_entry_selected_rest_not() {
    let filtered = filter_options(&names(), "");
    assert!(filtered[0].selected);
    assert!(filtered[1..].iter().all(|entry| !entry.selected));
}

#[test]
fn test_no_match_yields_empty_view() {
    let filtered = filter_options(&names(), "zzz");
    assert!(filtered.is_empty());
    assert!(group_options(&filtered).is_empty());
}

#[test]
fn test_empty_option_set_yields_empty_view() {
    let filtered = filter_options(&[], "anything");
    assert!(filtered.is_empty());
}

#[test]
fn test_identical_sort_keys_keep_input_order() {
    let options = vec![
        grouped("Twin", "first", "G"),
        grouped("Twin", "second", "G"),
    ];
    let filtered = filter_options(&options, "");
    assert_eq!(filtered[0].option.id, "first");
    assert_eq!(filtered[1].option.id, "second");
}

#[test]
fn test_case_fold_ties_fall_back_to_unfolded_key() {
    let options = vec![opt("apple", "lower"), opt("Apple", "upper")];
    let filtered = filter_options(&options, "");
    // Same folded key; "Apple" < "apple" in the unfolded fallback.
    assert_eq!(filtered[0].option.id, "upper");
    assert_eq!(filtered[1].option.id, "lower");
}

#[test]
fn test_grouped_view_partitions_in_first_occurrence_order() {
    let groups = group_options(&filter_options(&names(), ""));
    let labels: Vec<Option<&str>> = groups
        .iter()
        .map(|g| g.group_name.as_deref())
        .collect();
    assert_eq!(labels, vec![Some("Nicknames"), Some("Parents"), None]);
}

#[test]
fn test_grouped_view_concatenates_back_to_flat_view() {
    let filtered = filter_options(&names(), "");
    let groups = group_options(&filtered);
    let flattened: Vec<_> = groups
        .iter()
        .flat_map(|g| g.options.iter().cloned())
        .collect();
    assert_eq!(flattened, filtered);
    for group in &groups {
        for entry in &group.options {
            assert_eq!(entry.option.group.as_deref(), group.group_name.as_deref());
        }
    }
}

#[test]
fn test_duplicate_ids_are_preserved() {
    let filtered = filter_options(&names(), "ben");
    assert!(filtered.iter().all(|entry| entry.option.id == "BP"));
}
