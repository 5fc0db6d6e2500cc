// Copyright (c) 2025 Kukui Trie Authors
//
// Licensed under dual license:
// - MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)
// - Apache License, Version 2.0 (LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0)

//! Single-character child lookup for trie nodes.

use fnv::FnvBuildHasher;
use hashbrown::HashMap;

use super::node::NodeId;

/// Map from the next character on a path to the child node that owns it.
#[derive(Debug, Clone, Default)]
pub struct NodeMap {
    entries: HashMap<char, NodeId, FnvBuildHasher>,
}

impl NodeMap {
    /// Creates an empty map.
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts or overwrites the child at `key`.
    pub fn add(&mut self, key: char, node: NodeId) {
        self.entries.insert(key, node);
    }

    /// Returns `true` if a child exists at `key`.
    pub fn contains(&self, key: char) -> bool {
        self.entries.contains_key(&key)
    }

    /// Returns the child at `key`.
    ///
    /// # Panics
    ///
    /// Panics if no child exists at `key`. Check with [`NodeMap::contains`] first.
    pub fn get(&self, key: char) -> NodeId {
        match self.entries.get(&key) {
            Some(node) => *node,
            None => panic!("node not in the node map: {key:?}"),
        }
    }

    /// Removes the child at `key`, if any.
    pub fn remove(&mut self, key: char) {
        self.entries.remove(&key);
    }

    /// Number of children.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` if the node has no children.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterates over the child characters in unspecified order.
    pub fn keys(&self) -> impl Iterator<Item = char> + '_ {
        self.entries.keys().copied()
    }

    /// Iterates over `(character, child)` pairs in unspecified order.
    pub fn iter(&self) -> impl Iterator<Item = (char, NodeId)> + '_ {
        self.entries.iter().map(|(key, node)| (*key, *node))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_add_contains_get() {
        let mut map = NodeMap::new();
        assert!(map.is_empty());

        let node = NodeId::new(7, 1);
        map.add('k', node);

        assert!(map.contains('k'));
        assert!(!map.contains('K'));
        assert_eq!(map.get('k'), node);
        assert_eq!(map.len(), 1);
    }

    #[test]
    fn test_add_overwrites() {
        let mut map = NodeMap::new();
        map.add('a', NodeId::new(7, 1));
        map.add('a', NodeId::new(7, 2));

        assert_eq!(map.len(), 1);
        assert_eq!(map.get('a'), NodeId::new(7, 2));
    }

    #[test]
    fn test_remove() {
        let mut map = NodeMap::new();
        map.add('a', NodeId::new(7, 1));
        map.add('b', NodeId::new(7, 2));

        map.remove('a');
        assert!(!map.contains('a'));
        assert!(map.contains('b'));

        // Removing an absent key is a no-op
        map.remove('z');
        assert_eq!(map.len(), 1);
    }

    #[test]
    fn test_keys_and_iter() {
        let mut map = NodeMap::new();
        map.add('ā', NodeId::new(7, 1));
        map.add('b', NodeId::new(7, 2));

        let mut keys: Vec<char> = map.keys().collect();
        keys.sort_unstable();
        assert_eq!(keys, vec!['b', 'ā']);

        let mut pairs: Vec<(char, NodeId)> = map.iter().collect();
        pairs.sort_unstable_by_key(|(key, _)| *key);
        assert_eq!(pairs, vec![('b', NodeId::new(7, 2)), ('ā', NodeId::new(7, 1))]);
    }

    #[test]
    #[should_panic(expected = "node not in the node map")]
    fn test_get_missing_key_panics() {
        let map = NodeMap::new();
        let _ = map.get('x');
    }
}
