//! Collapsing of enumerated path families.
//!
//! A family is a set of paths that agree on every segment except the last,
//! where the last segments differ only in one enumerated token:
//! `item_1_field` ... `item_5_field` collapses to `item_{1-5}_field`, and
//! `kind_foo_tag` / `kind_bar_tag` collapses to `kind_{foo|bar}_tag`.
//! Anything that does not fit a template uniformly is left untouched;
//! a failed collapse degrades to literal output, never to a wrong one.

use super::path::{Path, PathSegment};
use indexmap::IndexMap;
use regex::Regex;
use std::sync::OnceLock;

/// Template for endings with a numeric variable token: `prefix_<N>_suffix`.
fn numeric_template() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"^(.*)_(\d+)(_.*)$").expect("numeric template regex"))
}

/// Template for endings with a word variable token: `prefix_<word>_suffix`.
fn word_template() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"^(.*)_(\w+)(_.*)$").expect("word template regex"))
}

/// The one recurring family squeezed at render time wherever it appears.
fn response_field_family() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"response_(\d+)_form_field").expect("response family regex"))
}

/// One ending split into its fixed frame and variable token.
struct EndingParts<'a> {
    prefix: &'a str,
    token: &'a str,
    // Includes the leading underscore, as captured.
    suffix: &'a str,
}

fn split_ending<'a>(template: &Regex, ending: &'a str) -> Option<EndingParts<'a>> {
    let caps = template.captures(ending)?;
    Some(EndingParts {
        prefix: caps.get(1)?.as_str(),
        token: caps.get(2)?.as_str(),
        suffix: caps.get(3)?.as_str(),
    })
}

/// Splits every ending with the template, or gives up on the whole group.
fn split_all<'a>(template: &Regex, endings: &'a [String]) -> Option<Vec<EndingParts<'a>>> {
    endings.iter().map(|e| split_ending(template, e)).collect()
}

/// True when all endings agree on the fixed prefix and suffix around the token.
fn uniform_frame(parts: &[EndingParts]) -> bool {
    parts
        .windows(2)
        .all(|w| w[0].prefix == w[1].prefix && w[0].suffix == w[1].suffix)
}

/// Tries to rewrite a group of endings into one collapsed ending.
///
/// Templates are tried in a fixed order, numeric before word, and the first
/// one matching every ending wins. Returns `None` when the group should stay
/// as it is: fewer than two endings, no uniformly matching template, mixed
/// numeric/word tokens, a disagreeing frame, or a single distinct numeric
/// value.
fn collapse_endings(endings: &[String]) -> Option<String> {
    if endings.len() < 2 {
        return None;
    }

    if let Some(parts) = split_all(numeric_template(), endings) {
        if !uniform_frame(&parts) {
            return None;
        }
        let mut values = parts
            .iter()
            .map(|p| p.token.parse::<u64>().ok())
            .collect::<Option<Vec<u64>>>()?;
        values.sort_unstable();
        values.dedup();
        if values.len() < 2 {
            // A singleton index carries information; compressing it loses it.
            return None;
        }
        let first = &parts[0];
        return Some(format!(
            "{}_{{{}-{}}}{}",
            first.prefix,
            values[0],
            values[values.len() - 1],
            first.suffix
        ));
    }

    if let Some(parts) = split_all(word_template(), endings) {
        if !uniform_frame(&parts) {
            return None;
        }
        // A numeric token here means the group mixes numbers and words; the
        // numeric template already failed for some other member.
        if parts.iter().any(|p| p.token.bytes().all(|b| b.is_ascii_digit())) {
            return None;
        }
        let mut tokens: Vec<&str> = Vec::new();
        for part in &parts {
            if !tokens.contains(&part.token) {
                tokens.push(part.token);
            }
        }
        if tokens.len() < 2 {
            return None;
        }
        let first = &parts[0];
        return Some(format!(
            "{}_{{{}}}{}",
            first.prefix,
            tokens.join("|"),
            first.suffix
        ));
    }

    None
}

/// Collapses one family of paths sharing every segment but the last.
///
/// Returns the single representative path when the endings follow one
/// enumeration template, otherwise the group unchanged. A singleton group is
/// always returned as is.
pub fn collapse_group(paths: &[Path]) -> Vec<Path> {
    if paths.len() < 2 {
        return paths.to_vec();
    }

    let Some((first_prefix, _)) = paths[0].split_last() else {
        return paths.to_vec();
    };

    let mut endings = Vec::with_capacity(paths.len());
    for path in paths {
        match path.split_last() {
            Some((prefix, PathSegment::Key(name))) if prefix == first_prefix => {
                endings.push(name.clone());
            }
            // Mismatched prefixes or a wildcard ending: not a collapsible group.
            _ => return paths.to_vec(),
        }
    }

    match collapse_endings(&endings) {
        Some(collapsed) => {
            let mut segments = first_prefix.to_vec();
            segments.push(PathSegment::Key(collapsed));
            vec![Path::new(segments)]
        }
        None => paths.to_vec(),
    }
}

/// Collapses every family in a counted path list.
///
/// Paths are grouped by their shared leading segments in first-seen order;
/// each group goes through [`collapse_group`], and when a group merges into
/// one representative the member counts are summed so the multiset total is
/// preserved.
pub fn collapse_families(entries: Vec<(Path, usize)>) -> Vec<(Path, usize)> {
    let mut groups: IndexMap<Vec<PathSegment>, Vec<(Path, usize)>> = IndexMap::new();
    for (path, count) in entries {
        let prefix = match path.split_last() {
            Some((prefix, _)) => prefix.to_vec(),
            None => Vec::new(),
        };
        groups.entry(prefix).or_default().push((path, count));
    }

    let mut collapsed = Vec::new();
    for (_, members) in groups {
        let paths: Vec<Path> = members.iter().map(|(p, _)| p.clone()).collect();
        if members.len() > 1 {
            if let [representative] = collapse_group(&paths).as_slice() {
                let total = members.iter().map(|(_, n)| n).sum();
                collapsed.push((representative.clone(), total));
                continue;
            }
        }
        collapsed.extend(members);
    }
    collapsed
}

/// Squeezes the recurring `response_<N>_form_field` family in a rendered path.
///
/// Gathers every distinct `<N>` appearing anywhere in the string; when more
/// than one exists, all occurrences are rewritten to
/// `response_{min-max}_form_field`. A single distinct index is left alone.
pub fn collapse_response_fields(rendered: &str) -> String {
    let family = response_field_family();

    let mut indices: Vec<u64> = Vec::new();
    for caps in family.captures_iter(rendered) {
        match caps[1].parse::<u64>() {
            Ok(n) => indices.push(n),
            Err(_) => return rendered.to_string(),
        }
    }
    indices.sort_unstable();
    indices.dedup();
    if indices.len() < 2 {
        return rendered.to_string();
    }

    let replacement = format!(
        "response_{{{}-{}}}_form_field",
        indices[0],
        indices[indices.len() - 1]
    );
    family.replace_all(rendered, replacement.as_str()).into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key_path(segments: &[&str]) -> Path {
        Path::new(
            segments
                .iter()
                .map(|s| {
                    if *s == "*" {
                        PathSegment::AnyElement
                    } else {
                        PathSegment::Key(s.to_string())
                    }
                })
                .collect(),
        )
    }

    fn rendered(paths: &[Path]) -> Vec<String> {
        paths.iter().map(|p| p.to_string()).collect()
    }

    #[test]
    fn test_numeric_group_collapses_to_range() {
        let group = vec![
            key_path(&["data", "a_1_b"]),
            key_path(&["data", "a_2_b"]),
            key_path(&["data", "a_3_b"]),
        ];
        assert_eq!(rendered(&collapse_group(&group)), vec!["data.a_{1-3}_b"]);
    }

    #[test]
    fn test_numeric_range_sorts_values() {
        let group = vec![
            key_path(&["a_10_b"]),
            key_path(&["a_2_b"]),
            key_path(&["a_7_b"]),
        ];
        assert_eq!(rendered(&collapse_group(&group)), vec!["a_{2-10}_b"]);
    }

    #[test]
    fn test_singleton_group_unchanged() {
        let group = vec![key_path(&["data", "a_1_b"])];
        assert_eq!(collapse_group(&group), group);
    }

    #[test]
    fn test_collapse_is_idempotent_on_collapsed_singleton() {
        let group = vec![key_path(&["data", "a_{1-3}_b"])];
        assert_eq!(collapse_group(&group), group);
    }

    #[test]
    fn test_word_group_collapses_to_alternation() {
        let group = vec![key_path(&["x_foo_y"]), key_path(&["x_bar_y"])];
        assert_eq!(rendered(&collapse_group(&group)), vec!["x_{foo|bar}_y"]);
    }

    #[test]
    fn test_word_alternation_keeps_first_seen_order() {
        let group = vec![
            key_path(&["x_zulu_y"]),
            key_path(&["x_alpha_y"]),
            key_path(&["x_mike_y"]),
        ];
        assert_eq!(
            rendered(&collapse_group(&group)),
            vec!["x_{zulu|alpha|mike}_y"]
        );
    }

    #[test]
    fn test_mixed_numeric_and_word_group_unchanged() {
        let group = vec![key_path(&["a_1_b"]), key_path(&["a_foo_b"])];
        assert_eq!(collapse_group(&group), group);
    }

    #[test]
    fn test_unmatched_endings_unchanged() {
        let group = vec![key_path(&["plain"]), key_path(&["other"])];
        assert_eq!(collapse_group(&group), group);
    }

    #[test]
    fn test_disagreeing_frame_unchanged() {
        let group = vec![key_path(&["a_1_b"]), key_path(&["c_2_b"])];
        assert_eq!(collapse_group(&group), group);

        let group = vec![key_path(&["a_1_b"]), key_path(&["a_2_c"])];
        assert_eq!(collapse_group(&group), group);
    }

    #[test]
    fn test_wildcard_ending_unchanged() {
        let group = vec![key_path(&["items", "*"]), key_path(&["items", "*"])];
        assert_eq!(collapse_group(&group), group);
    }

    #[test]
    fn test_numeric_template_tried_before_word() {
        // Digits also match \w+, so the numeric template must win.
        let group = vec![key_path(&["a_1_b"]), key_path(&["a_5_b"])];
        assert_eq!(rendered(&collapse_group(&group)), vec!["a_{1-5}_b"]);
    }

    #[test]
    fn test_collapse_families_groups_by_prefix() {
        let entries = vec![
            (key_path(&["form", "item_1_field"]), 2),
            (key_path(&["form", "item_2_field"]), 3),
            (key_path(&["meta", "title"]), 1),
        ];
        let collapsed = collapse_families(entries);
        assert_eq!(
            collapsed,
            vec![
                (key_path(&["form", "item_{1-2}_field"]), 5),
                (key_path(&["meta", "title"]), 1),
            ]
        );
    }

    #[test]
    fn test_collapse_families_leaves_uncollapsible_members() {
        let entries = vec![
            (key_path(&["form", "a_1_b"]), 1),
            (key_path(&["form", "a_foo_b"]), 1),
        ];
        let collapsed = collapse_families(entries.clone());
        assert_eq!(collapsed, entries);
    }

    #[test]
    fn test_collapse_families_separate_prefixes_not_mixed() {
        let entries = vec![
            (key_path(&["left", "a_1_b"]), 2),
            (key_path(&["right", "a_2_b"]), 2),
        ];
        let collapsed = collapse_families(entries.clone());
        assert_eq!(collapsed, entries);
    }

    #[test]
    fn test_response_family_squeezed_across_indices() {
        assert_eq!(
            collapse_response_fields("response_1_form_field.response_5_form_field.value"),
            "response_{1-5}_form_field.response_{1-5}_form_field.value"
        );
    }

    #[test]
    fn test_response_family_single_index_unchanged() {
        assert_eq!(
            collapse_response_fields("data.response_7_form_field.value"),
            "data.response_7_form_field.value"
        );
    }

    #[test]
    fn test_response_family_interior_segment() {
        assert_eq!(
            collapse_response_fields("response_2_form_field.name.response_4_form_field.name"),
            "response_{2-4}_form_field.name.response_{2-4}_form_field.name"
        );
    }

    #[test]
    fn test_response_family_absent_unchanged() {
        assert_eq!(collapse_response_fields("a.b.c"), "a.b.c");
    }
}
