use indexmap::IndexMap;
use serde::Serialize;

use crate::value::{bool_str, interpret_bool, parse_int};

/// Resolved option store.
///
/// Built by [`ArgStore::parse`]; read through the typed accessors. Keys are
/// stored without leading dashes, in order of first appearance.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ArgStore {
    values: IndexMap<String, String>,
    occurrences: IndexMap<String, Vec<String>>,
    rest: Vec<String>,
}

/// Strip one leading `-`, then a second one if present.
pub(crate) fn strip_dashes(raw: &str) -> &str {
    let once = raw.strip_prefix('-').unwrap_or(raw);
    once.strip_prefix('-').unwrap_or(once)
}

impl ArgStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Get the resolved value for a key.
    ///
    /// `key` may be written with or without its leading dashes.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.values.get(strip_dashes(key)).map(String::as_str)
    }

    /// Get the resolved value, or `default` if the key is absent.
    ///
    /// A key given with an empty value (`-x` or `-x=`) is present and yields `""`.
    pub fn get_str(&self, key: &str, default: &str) -> String {
        self.get(key).unwrap_or(default).to_string()
    }

    /// Get the value as an integer, or `default` if the key is absent.
    ///
    /// A present value that does not parse yields `0`, not `default`.
    pub fn get_int(&self, key: &str, default: i64) -> i64 {
        self.get(key).map_or(default, parse_int)
    }

    /// Get the value as a boolean, or `default` if the key is absent.
    ///
    /// An empty value is `true`; otherwise the value must parse to a non-zero
    /// integer.
    pub fn get_bool(&self, key: &str, default: bool) -> bool {
        self.get(key).map_or(default, interpret_bool)
    }

    /// Whether the key is present, either given explicitly or derived from a
    /// `-noKEY` negation.
    pub fn contains(&self, key: &str) -> bool {
        self.values.contains_key(strip_dashes(key))
    }

    /// Every raw value given for a key, in command-line order.
    ///
    /// Empty for absent keys and for keys derived from a negation.
    pub fn get_all(&self, key: &str) -> &[String] {
        self.occurrences
            .get(strip_dashes(key))
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// Tokens from the first non-option token onward, verbatim.
    pub fn rest(&self) -> &[String] {
        self.rest.as_slice()
    }

    /// Iterate over resolved `(key, value)` pairs in order of first appearance.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.values.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Set `key` to `value` unless it is already present.
    ///
    /// Returns whether the value was inserted.
    pub fn soft_set(&mut self, key: &str, value: impl Into<String>) -> bool {
        let key = strip_dashes(key);
        if self.values.contains_key(key) {
            return false;
        }
        self.values.insert(key.to_string(), value.into());
        true
    }

    /// Boolean form of [`ArgStore::soft_set`]; stores `"1"` or `"0"`.
    pub fn soft_set_bool(&mut self, key: &str, value: bool) -> bool {
        self.soft_set(key, bool_str(value))
    }
}

impl ArgStore {
    pub(crate) fn clear(&mut self) {
        self.values.clear();
        self.occurrences.clear();
        self.rest.clear();
    }

    pub(crate) fn insert_explicit(&mut self, key: &str, value: &str) {
        self.values.insert(key.to_string(), value.to_string());
        self.occurrences
            .entry(key.to_string())
            .or_default()
            .push(value.to_string());
    }

    pub(crate) fn insert_derived(&mut self, key: String, value: &str) {
        self.values.insert(key, value.to_string());
    }

    pub(crate) fn has_key(&self, key: &str) -> bool {
        self.values.contains_key(key)
    }

    pub(crate) fn raw(&self, key: &str) -> Option<&str> {
        self.values.get(key).map(String::as_str)
    }

    pub(crate) fn keys_snapshot(&self) -> Vec<String> {
        self.values.keys().cloned().collect()
    }

    pub(crate) fn push_rest(&mut self, token: &str) {
        self.rest.push(token.to_string());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn store(tokens: &[&str]) -> ArgStore {
        ArgStore::parse(tokens)
    }

    #[test]
    fn strip_dashes_removes_at_most_two() {
        assert_eq!(strip_dashes("x"), "x");
        assert_eq!(strip_dashes("-x"), "x");
        assert_eq!(strip_dashes("--x"), "x");
        assert_eq!(strip_dashes("---x"), "-x");
        assert_eq!(strip_dashes("-"), "");
    }

    #[test]
    fn absent_keys_return_defaults() {
        let s = store(&[]);
        assert_eq!(s.get_str("x", "d"), "d");
        assert_eq!(s.get_int("x", 7), 7);
        assert!(s.get_bool("x", true));
        assert!(!s.get_bool("x", false));
        assert!(!s.contains("x"));
        assert!(s.get_all("x").is_empty());
    }

    #[test]
    fn query_key_accepts_leading_dashes() {
        let s = store(&["-IPC=3"]);
        assert_eq!(s.get_int("-IPC", 0), 3);
        assert_eq!(s.get_int("--IPC", 0), 3);
        assert_eq!(s.get_int("IPC", 0), 3);
    }

    #[test]
    fn malformed_int_is_zero_not_default() {
        let s = store(&["-IPC=NaN", "-bar"]);
        assert_eq!(s.get_int("IPC", 11), 0);
        assert_eq!(s.get_int("bar", 11), 0);
    }

    #[test]
    fn soft_set_only_fills_gaps() {
        let mut s = store(&["-a=1", "-nob"]);
        assert!(!s.soft_set("a", "9"));
        assert!(!s.soft_set_bool("b", true));
        assert!(s.soft_set("-c", "x"));
        assert!(s.soft_set_bool("d", false));

        assert_eq!(s.get_str("a", ""), "1");
        assert!(!s.get_bool("b", true));
        assert_eq!(s.get_str("c", ""), "x");
        assert_eq!(s.get_str("d", ""), "0");
        assert!(s.get_all("c").is_empty());
    }

    const _: () = {
        const fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<ArgStore>();
    };

    #[test]
    fn frozen_store_reads_from_many_threads() {
        let s = store(&["-threads=4", "-nocolor", "-name=worker"]);
        std::thread::scope(|scope| {
            for _ in 0..4 {
                scope.spawn(|| {
                    assert_eq!(s.get_int("threads", 1), 4);
                    assert!(!s.get_bool("color", true));
                    assert_eq!(s.get_str("name", ""), "worker");
                });
            }
        });
    }

    #[test]
    fn iter_preserves_first_appearance_order() {
        let s = store(&["-b=1", "-a=2", "-b=3"]);
        let pairs: Vec<_> = s.iter().collect();
        assert_eq!(pairs, vec![("b", "3"), ("a", "2")]);
        assert_eq!(s.len(), 2);
        assert!(!s.is_empty());
    }
}
