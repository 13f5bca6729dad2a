//! Filter-as-you-type over shortcut names.
//!
//! Case-insensitive substring matching that keeps store order. Pure functions
//! only; callers own the resulting list.

use crate::shortcuts::ShortcutStore;

/// Names in `store` containing `query` (case-insensitive), in store order.
///
/// An empty query returns every name.
pub fn filter(store: &ShortcutStore, query: &str) -> Vec<String> {
    filter_names(store.names(), query)
}

/// Same as [`filter`] over any ordered sequence of names.
pub fn filter_names<'a, I>(names: I, query: &str) -> Vec<String>
where
    I: IntoIterator<Item = &'a str>,
{
    if query.is_empty() {
        return names.into_iter().map(str::to_string).collect();
    }

    let query_lower = query.to_lowercase();
    names
        .into_iter()
        .filter(|name| matches_query(name, &query_lower))
        .map(str::to_string)
        .collect()
}

/// Whether `name` contains `query_lower`, ignoring case.
/// `query_lower` must already be lowercase.
#[inline]
pub fn matches_query(name: &str, query_lower: &str) -> bool {
    if name.is_ascii() && query_lower.is_ascii() {
        contains_ignore_ascii_case(name, query_lower)
    } else {
        name.to_lowercase().contains(query_lower)
    }
}

/// ASCII case-insensitive substring search without allocating.
/// `needle_lower` must already be lowercase.
#[inline]
fn contains_ignore_ascii_case(haystack: &str, needle_lower: &str) -> bool {
    let h = haystack.as_bytes();
    let n = needle_lower.as_bytes();
    if n.is_empty() {
        return true;
    }
    if n.len() > h.len() {
        return false;
    }
    h.windows(n.len())
        .any(|window| window.iter().zip(n).all(|(a, b)| a.to_ascii_lowercase() == *b))
}

#[cfg(test)]
mod tests {
    use super::*;

    const NAMES: &[&str] = &["Notepad", "Calculator", "Calendar", "Terminal", "Über Editor"];

    fn run(query: &str) -> Vec<String> {
        filter_names(NAMES.iter().copied(), query)
    }

    #[test]
    fn empty_query_returns_all_in_order() {
        assert_eq!(run(""), NAMES.to_vec());
    }

    #[test]
    fn substring_match_is_case_insensitive() {
        assert_eq!(run("calc"), vec!["Calculator"]);
        assert_eq!(run("CALC"), vec!["Calculator"]);
        assert_eq!(run("cal"), vec!["Calculator", "Calendar"]);
    }

    #[test]
    fn match_anywhere_in_name() {
        assert_eq!(run("pad"), vec!["Notepad"]);
        assert_eq!(run("in"), vec!["Terminal"]);
    }

    #[test]
    fn no_match_returns_empty() {
        assert!(run("xyz").is_empty());
    }

    #[test]
    fn not_a_fuzzy_match() {
        // Characters in order but not contiguous
        assert!(run("ntpd").is_empty());
    }

    #[test]
    fn unicode_case_folding() {
        assert_eq!(run("über"), vec!["Über Editor"]);
        assert_eq!(run("ÜBER"), vec!["Über Editor"]);
    }

    #[test]
    fn whitespace_is_significant() {
        assert_eq!(run("r e"), vec!["Über Editor"]);
        assert!(run(" notepad").is_empty());
    }

    #[test]
    fn result_is_exactly_the_matching_subset() {
        for query in ["", "a", "e", "or", "tor", "CaL", "z"] {
            let lower = query.to_lowercase();
            let expected: Vec<String> = NAMES
                .iter()
                .filter(|n| n.to_lowercase().contains(&lower))
                .map(|n| n.to_string())
                .collect();
            assert_eq!(run(query), expected, "query {:?}", query);
        }
    }

    #[test]
    fn filter_reads_store_order() {
        let dir = tempfile::tempdir().unwrap();
        let mut store = ShortcutStore::empty(dir.path().join("shortcuts.json"));
        store.add("Notepad", "notepad.exe").unwrap();
        store.add("Calculator", "calc.exe").unwrap();

        assert_eq!(filter(&store, "calc"), vec!["Calculator"]);
        assert_eq!(filter(&store, ""), vec!["Notepad", "Calculator"]);
    }

    #[test]
    fn ascii_helper_edges() {
        assert!(contains_ignore_ascii_case("abc", ""));
        assert!(!contains_ignore_ascii_case("ab", "abc"));
        assert!(contains_ignore_ascii_case("xABCx", "abc"));
    }
}
