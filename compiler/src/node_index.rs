//! Node-identity lookup with a read-through cache.
//!
//! The compiled SQL joins everything through numeric node ids, but callers
//! address nodes by repository, path and name. The storage collaborator
//! resolves a [`NodePath`] to its id; [`NodeIdCache`] fronts that lookup so
//! repeated resolutions of hot paths stay in memory.

use compact_str::{CompactString, ToCompactString};
use core::fmt;
use hashbrown::HashMap;
use std::sync::{PoisonError, RwLock};

/// Identity of a node in the metadata tree: repository, parent path and
/// file name, matching the `repo` / `node_path` / `node_name` columns.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct NodePath {
    repo: CompactString,
    path: CompactString,
    name: CompactString,
}

impl NodePath {
    pub fn new(
        repo: impl Into<CompactString>,
        path: impl Into<CompactString>,
        name: impl Into<CompactString>,
    ) -> Self {
        Self {
            repo: repo.into(),
            path: path.into(),
            name: name.into(),
        }
    }

    pub fn repo(&self) -> &str {
        &self.repo
    }

    pub fn path(&self) -> &str {
        &self.path
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// The parent of this path, or `None` at the repository root.
    pub fn parent(&self) -> Option<NodePath> {
        if self.path.is_empty() && self.name.is_empty() {
            return None;
        }
        let (parent_path, parent_name) = match self.path.rfind('/') {
            Some(idx) => (&self.path[..idx], &self.path[idx + 1..]),
            None => ("", self.path.as_str()),
        };
        Some(NodePath::new(
            self.repo.clone(),
            parent_path.to_compact_string(),
            parent_name.to_compact_string(),
        ))
    }
}

impl fmt::Display for NodePath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.path.is_empty() {
            write!(f, "{}:{}", self.repo, self.name)
        } else {
            write!(f, "{}:{}/{}", self.repo, self.path, self.name)
        }
    }
}

/// Resolves a node path to its numeric id. Implemented by the storage
/// collaborator; a missing node is reported as `None`.
pub trait NodeIdSource {
    fn node_id(&self, path: &NodePath) -> Option<i64>;
}

/// Read-through cache in front of a [`NodeIdSource`].
///
/// Capacity-bounded: when full, the whole map is dropped rather than
/// evicting entry by entry. Misses are not cached, so a node created after
/// a failed lookup becomes visible immediately.
pub struct NodeIdCache<S> {
    source: S,
    entries: RwLock<HashMap<NodePath, i64>>,
    capacity: usize,
}

const DEFAULT_CAPACITY: usize = 10_000;

impl<S: NodeIdSource> NodeIdCache<S> {
    pub fn new(source: S) -> Self {
        Self::with_capacity(source, DEFAULT_CAPACITY)
    }

    pub fn with_capacity(source: S, capacity: usize) -> Self {
        Self {
            source,
            entries: RwLock::new(HashMap::new()),
            capacity: capacity.max(1),
        }
    }

    /// The node id for `path`, from cache or from the source.
    pub fn get(&self, path: &NodePath) -> Option<i64> {
        let cached = self
            .entries
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .get(path)
            .copied();
        if cached.is_some() {
            return cached;
        }

        let id = self.source.node_id(path)?;
        let mut entries = self.entries.write().unwrap_or_else(PoisonError::into_inner);
        if entries.len() >= self.capacity {
            entries.clear();
        }
        entries.insert(path.clone(), id);
        Some(id)
    }

    /// Drops the cached id for one path. Callers invalidate after moving or
    /// deleting a node.
    pub fn invalidate(&self, path: &NodePath) {
        self.entries
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .remove(path);
    }

    /// Drops every cached entry.
    pub fn clear(&self) {
        self.entries
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .clear();
    }

    pub fn len(&self) -> usize {
        self.entries
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};

    struct CountingSource {
        lookups: AtomicUsize,
    }

    impl CountingSource {
        fn new() -> Self {
            Self {
                lookups: AtomicUsize::new(0),
            }
        }

        fn lookups(&self) -> usize {
            self.lookups.load(Ordering::SeqCst)
        }
    }

    impl NodeIdSource for &CountingSource {
        fn node_id(&self, path: &NodePath) -> Option<i64> {
            self.lookups.fetch_add(1, Ordering::SeqCst);
            if path.name().ends_with(".jar") {
                Some(path.name().len() as i64)
            } else {
                None
            }
        }
    }

    fn jar(name: &str) -> NodePath {
        NodePath::new("libs-release", "org/acme", name)
    }

    #[test]
    fn second_lookup_is_served_from_cache() {
        let source = CountingSource::new();
        let cache = NodeIdCache::new(&source);

        assert_eq!(cache.get(&jar("acme-1.0.jar")), Some(12));
        assert_eq!(cache.get(&jar("acme-1.0.jar")), Some(12));
        assert_eq!(source.lookups(), 1);
    }

    #[test]
    fn misses_are_not_cached() {
        let source = CountingSource::new();
        let cache = NodeIdCache::new(&source);

        assert_eq!(cache.get(&jar("missing.pom")), None);
        assert_eq!(cache.get(&jar("missing.pom")), None);
        assert_eq!(source.lookups(), 2);
        assert!(cache.is_empty());
    }

    #[test]
    fn invalidate_forces_a_fresh_lookup() {
        let source = CountingSource::new();
        let cache = NodeIdCache::new(&source);
        let path = jar("acme-1.0.jar");

        cache.get(&path);
        cache.invalidate(&path);
        cache.get(&path);
        assert_eq!(source.lookups(), 2);
    }

    #[test]
    fn overflow_resets_the_map() {
        let source = CountingSource::new();
        let cache = NodeIdCache::with_capacity(&source, 2);

        cache.get(&jar("a.jar"));
        cache.get(&jar("bb.jar"));
        cache.get(&jar("ccc.jar"));
        assert_eq!(cache.len(), 1);
    }

    #[test]
    fn parent_walks_toward_the_root() {
        let path = NodePath::new("libs-release", "org/acme", "acme-1.0.jar");
        let parent = path.parent().unwrap();
        assert_eq!(parent, NodePath::new("libs-release", "org", "acme"));
        let grandparent = parent.parent().unwrap();
        assert_eq!(grandparent, NodePath::new("libs-release", "", "org"));
        let root = grandparent.parent().unwrap();
        assert_eq!(root, NodePath::new("libs-release", "", ""));
        assert!(root.parent().is_none());
    }

    #[test]
    fn display_formats() {
        assert_eq!(
            NodePath::new("libs-release", "org/acme", "a.jar").to_string(),
            "libs-release:org/acme/a.jar"
        );
        assert_eq!(
            NodePath::new("libs-release", "", "org").to_string(),
            "libs-release:org"
        );
    }
}
