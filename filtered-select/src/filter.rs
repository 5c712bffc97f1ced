//! The filter pipeline: substring match, sort, select-first, group.

use crate::options::{FilteredOption, GroupedOptions, SelectOption};

fn group_str(option: &SelectOption) -> &str {
    option.group.as_deref().unwrap_or("")
}

/// Filter `options` against `query` and produce the ordered filtered view.
///
/// - Matching is a case-insensitive substring test of `query` against the
///   concatenation of `text` and the group label (empty if absent); an empty
///   query matches everything.
/// - The result is sorted ascending by the case-folded `group + text` key.
///   Ties on the folded key fall back to the unfolded key; remaining ties
///   keep input order (the sort is stable).
/// - The first entry of a non-empty result is marked `selected`.
///
/// The view is recomputed from scratch on every call, never incrementally.
pub fn filter_options(options: &[SelectOption], query: &str) -> Vec<FilteredOption> {
    let needle = query.to_lowercase();
    let mut matched: Vec<(String, String, FilteredOption)> = options
        .iter()
        .filter(|option| {
            let haystack = format!("{}{}", option.text, group_str(option)).to_lowercase();
            haystack.contains(&needle)
        })
        .map(|option| {
            let key = format!("{}{}", group_str(option), option.text);
            let folded = key.to_lowercase();
            (
                folded,
                key,
                FilteredOption {
                    option: option.clone(),
                    selected: false,
                },
            )
        })
        .collect();

    matched.sort_by(|a, b| a.0.cmp(&b.0).then_with(|| a.1.cmp(&b.1)));

    let mut filtered: Vec<FilteredOption> = matched.into_iter().map(|(_, _, f)| f).collect();
    if let Some(first) = filtered.first_mut() {
        first.selected = true;
    }
    filtered
}

/// Partition a filtered view by group label.
///
/// Partitions appear in order of each label's first occurrence in the
/// filtered sequence; entries keep their filtered order. Ungrouped options
/// collect under `group_name: None`.
pub fn group_options(filtered: &[FilteredOption]) -> Vec<GroupedOptions> {
    let mut groups: Vec<GroupedOptions> = Vec::new();
    for entry in filtered {
        let name = entry.option.group.clone();
        match groups.iter_mut().find(|g| g.group_name == name) {
            Some(group) => group.options.push(entry.clone()),
            None => groups.push(GroupedOptions {
                group_name: name,
                options: vec![entry.clone()],
            }),
        }
    }
    groups
}
