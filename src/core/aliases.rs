use std::collections::{HashMap, HashSet};

use crate::shell::tokens::{normalize, tokenize};

/// Upper bound on substitutions performed while resolving one segment.
pub const MAX_ALIAS_SUBSTITUTIONS: usize = 64;

/// Insertion-ordered alias table with unique names.
#[derive(Clone, Debug, Default)]
pub struct AliasStore {
    entries: Vec<(Box<str>, Box<str>)>,
    index: HashMap<Box<str>, usize>,
}

impl AliasStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Defines `name`, or updates its value in place when it already exists.
    pub fn add(&mut self, name: &str, value: &str) {
        match self.index.get(name) {
            Some(&slot) => self.entries[slot].1 = value.into(),
            None => {
                self.index.insert(name.into(), self.entries.len());
                self.entries.push((name.into(), value.into()));
            }
        }
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.index.get(name).map(|&slot| &*self.entries[slot].1)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(k, v)| (&**k, &**v))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Substitutes aliases in every token of a segment.
    ///
    /// A segment that starts with `alias` is left alone so definitions are
    /// not rewritten. Each substituted value is split into words, with any
    /// operators it contains set apart, and the first word is checked again
    /// at the same position.
    pub fn resolve(&self, mut tokens: Vec<String>) -> Vec<String> {
        if self.is_empty() || tokens.first().map(String::as_str) == Some("alias") {
            return tokens;
        }

        let mut budget = MAX_ALIAS_SUBSTITUTIONS;
        let mut index = 0;
        while index < tokens.len() {
            let mut expanded_here: HashSet<&str> = HashSet::new();
            while index < tokens.len() {
                let Some((name, value)) = self.entry(&tokens[index]) else {
                    break;
                };
                if budget == 0 || !expanded_here.insert(name) {
                    break;
                }
                budget -= 1;
                log::trace!("alias {} -> {:?}", name, value);

                tokens.splice(index..=index, tokenize(&normalize(value), ' '));
            }
            index += 1;
        }
        tokens
    }

    fn entry(&self, name: &str) -> Option<(&str, &str)> {
        self.index
            .get(name)
            .map(|&slot| (&*self.entries[slot].0, &*self.entries[slot].1))
    }
}

/// Removes every single and double quote from an alias value.
pub fn strip_quotes(value: &str) -> String {
    value.chars().filter(|c| *c != '\'' && *c != '"').collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tokens(line: &str) -> Vec<String> {
        line.split_whitespace().map(String::from).collect()
    }

    #[test]
    fn test_add_and_get_alias() {
        let mut store = AliasStore::new();
        store.add("ll", "ls -la");
        assert_eq!(store.get("ll"), Some("ls -la"));
        assert_eq!(store.get("l"), None);
    }

    #[test]
    fn test_redefinition_keeps_position() {
        let mut store = AliasStore::new();
        store.add("ll", "ls -la");
        store.add("gs", "git status");
        store.add("ll", "ls -l");

        let all: Vec<(&str, &str)> = store.iter().collect();
        assert_eq!(all, [("ll", "ls -l"), ("gs", "git status")]);
        assert_eq!(store.len(), 2);
    }

    #[test]
    fn test_resolve_splits_value() {
        let mut store = AliasStore::new();
        store.add("ll", "ls -l");
        assert_eq!(store.resolve(tokens("ll /tmp")), tokens("ls -l /tmp"));
    }

    #[test]
    fn test_resolve_every_token() {
        let mut store = AliasStore::new();
        store.add("here", "/tmp");
        assert_eq!(store.resolve(tokens("ls here")), tokens("ls /tmp"));
    }

    #[test]
    fn test_resolve_chained_aliases() {
        let mut store = AliasStore::new();
        store.add("a", "b");
        store.add("b", "echo from-b");
        assert_eq!(store.resolve(tokens("a x")), tokens("echo from-b x"));
    }

    #[test]
    fn test_resolve_self_reference_terminates() {
        let mut store = AliasStore::new();
        store.add("ls", "ls --color");
        assert_eq!(store.resolve(tokens("ls")), tokens("ls --color"));

        store.add("x", "y x");
        let resolved = store.resolve(tokens("x"));
        assert!(resolved.len() <= MAX_ALIAS_SUBSTITUTIONS + 1);
        assert_eq!(resolved.first().map(String::as_str), Some("y"));
    }

    #[test]
    fn test_alias_command_is_not_resolved() {
        let mut store = AliasStore::new();
        store.add("ll", "ls -l");
        assert_eq!(store.resolve(tokens("alias ll")), tokens("alias ll"));
    }

    #[test]
    fn test_resolve_isolates_operators() {
        let mut store = AliasStore::new();
        store.add("both", "ls;pwd");
        assert_eq!(store.resolve(tokens("both -a")), tokens("ls ; pwd -a"));
    }

    #[test]
    fn test_empty_value_removes_token() {
        let mut store = AliasStore::new();
        store.add("nothing", "");
        assert_eq!(store.resolve(tokens("nothing echo")), tokens("echo"));
    }

    #[test]
    fn test_strip_quotes_removes_all_quotes() {
        assert_eq!(strip_quotes("'ls -l'"), "ls -l");
        assert_eq!(strip_quotes("\"a'b\"c"), "abc");
    }
}
