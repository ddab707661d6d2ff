//! Explicit one-shot watch set.
//!
//! Both visibility watchers (card reveal, lazy images) must act on an
//! element exactly once, the first time it satisfies the intersection
//! predicate. Rather than relying on observer unregistration alone, the
//! at-most-once guarantee lives here: `complete` removes the key and
//! reports whether this was its first qualifying hit.

use core::hash::Hash;

use hashbrown::HashSet;

#[derive(Debug, Default)]
pub struct WatchSet<K: Eq + Hash> {
    watched: HashSet<K>,
}

impl<K: Eq + Hash> WatchSet<K> {
    pub fn new() -> Self {
        Self {
            watched: HashSet::new(),
        }
    }

    /// Register a key for one-shot watching. Re-registering an already
    /// watched key is a no-op.
    pub fn watch(&mut self, key: K) {
        self.watched.insert(key);
    }

    /// Idempotent remove-on-first-match. Returns true exactly once per
    /// watched key; later calls (or calls for never-watched keys) return
    /// false and must produce no further action in the caller.
    pub fn complete(&mut self, key: &K) -> bool {
        self.watched.remove(key)
    }

    pub fn is_watching(&self, key: &K) -> bool {
        self.watched.contains(key)
    }

    pub fn len(&self) -> usize {
        self.watched.len()
    }

    pub fn is_empty(&self) -> bool {
        self.watched.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn completes_exactly_once_per_key() {
        let mut set = WatchSet::new();
        set.watch(7u32);
        assert!(set.complete(&7));
        assert!(!set.complete(&7));
        assert!(!set.is_watching(&7));
    }

    #[test]
    fn unwatched_keys_never_complete() {
        let mut set: WatchSet<u32> = WatchSet::new();
        assert!(!set.complete(&1));
    }

    #[test]
    fn batch_of_simultaneous_hits_is_handled_independently() {
        // An intersection batch may deliver several elements at once;
        // each key completes on its own, once.
        let mut set = WatchSet::new();
        for k in 0u32..4 {
            set.watch(k);
        }
        let first_pass: usize = (0u32..4).filter(|k| set.complete(k)).count();
        assert_eq!(first_pass, 4);
        let second_pass: usize = (0u32..4).filter(|k| set.complete(k)).count();
        assert_eq!(second_pass, 0);
        assert!(set.is_empty());
    }

    #[test]
    fn rewatching_is_a_noop_while_still_watched() {
        let mut set = WatchSet::new();
        set.watch(3u32);
        set.watch(3u32);
        assert_eq!(set.len(), 1);
        assert!(set.complete(&3));
        assert!(!set.complete(&3));
    }
}
