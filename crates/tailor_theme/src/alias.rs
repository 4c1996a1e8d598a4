//! Utility alias expansion
//!
//! An alias maps a single class name onto a space-joined list of other
//! tokens, which may themselves be aliases. Expansion is depth-bounded so
//! an alias cycle degrades to "leave the token unexpanded" instead of
//! recursing forever.

use rustc_hash::FxHashMap;

/// Recursion ceiling for nested alias expansion
pub const MAX_ALIAS_DEPTH: usize = 8;

/// Name -> space-joined token list
#[derive(Clone, Debug, Default)]
pub struct AliasTable {
    entries: FxHashMap<String, String>,
}

impl AliasTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register or replace an alias
    pub fn insert(&mut self, name: impl Into<String>, expansion: impl Into<String>) {
        self.entries.insert(name.into(), expansion.into());
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.entries.get(name).map(|s| s.as_str())
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }

    /// Expand one token, recursing into nested aliases
    ///
    /// Past [`MAX_ALIAS_DEPTH`] the token passes through as a literal, so
    /// self-referencing aliases terminate instead of overflowing the stack.
    pub fn expand(&self, token: &str, depth: usize) -> Vec<String> {
        if depth > MAX_ALIAS_DEPTH {
            return vec![token.to_string()];
        }
        match self.entries.get(token) {
            Some(expansion) => expansion
                .split_ascii_whitespace()
                .flat_map(|sub| self.expand(sub, depth + 1))
                .collect(),
            None => vec![token.to_string()],
        }
    }

    /// Expand every token in a directive's raw token list
    pub fn expand_all<'a>(&self, tokens: impl IntoIterator<Item = &'a str>) -> Vec<String> {
        tokens
            .into_iter()
            .flat_map(|token| self.expand(token, 0))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_token_passes_through() {
        let table = AliasTable::new();
        assert_eq!(table.expand("bg-blue-500", 0), vec!["bg-blue-500"]);
    }

    #[test]
    fn alias_expands_to_token_list() {
        let mut table = AliasTable::new();
        table.insert("btn", "px-4 py-2 rounded-md bg-primary");
        assert_eq!(
            table.expand("btn", 0),
            vec!["px-4", "py-2", "rounded-md", "bg-primary"]
        );
    }

    #[test]
    fn nested_aliases_expand_recursively() {
        let mut table = AliasTable::new();
        table.insert("btn", "chip bg-primary");
        table.insert("chip", "px-4 py-2 rounded-full");
        assert_eq!(
            table.expand_all(["btn", "shadow-sm"]),
            vec!["px-4", "py-2", "rounded-full", "bg-primary", "shadow-sm"]
        );
    }

    #[test]
    fn self_referencing_alias_terminates() {
        let mut table = AliasTable::new();
        table.insert("x", "x");
        assert_eq!(table.expand("x", 0), vec!["x"]);
    }

    #[test]
    fn mutually_recursive_aliases_terminate() {
        let mut table = AliasTable::new();
        table.insert("a", "b");
        table.insert("b", "a");
        let expanded = table.expand("a", 0);
        assert_eq!(expanded.len(), 1);
    }
}
