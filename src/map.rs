use std::cmp::Ordering;

use log::trace;
use parking_lot::RwLock;

use crate::level::{LevelGenerator, DEFAULT_SEED, MAX_LEVELS};
use crate::node::{Arena, NodeId};
use crate::order::Order;

/// An ordered map backed by a skip list.
///
/// One reader/writer lock guards the whole structure: `put` and `remove`
/// take it exclusively, `get` and `len` share it. Keys only need the
/// [`Order`] supplied at construction.
pub struct SkipMap<K, V, O> {
    order: O,
    inner: RwLock<Inner<K, V>>,
}

struct Inner<K, V> {
    // head[i] is the first node participating at level i
    head: [Option<NodeId>; MAX_LEVELS],
    arena: Arena<K, V>,
    levels: LevelGenerator,
    // maintained by put/remove; len() recounts from the level-0 chain
    size: usize,
}

type BackPointers = [Option<NodeId>; MAX_LEVELS];

impl<K, V> Inner<K, V> {
    /// Top-down search. At each level the walk resumes from the back
    /// pointer recorded one level up, advances while the next key orders
    /// before the target, and records the rightmost node not exceeding it.
    ///
    /// A match does not stop the descent: the levels below it still fill
    /// their back pointers, so the chain is complete for splicing out a
    /// node taller than the level it was first seen at.
    fn locate<O: Order<K>>(&self, order: &O, key: &K) -> (Option<NodeId>, BackPointers) {
        let mut back: BackPointers = [None; MAX_LEVELS];
        let mut found = None;
        for level in (0..MAX_LEVELS).rev() {
            let start = if level + 1 < MAX_LEVELS {
                back[level + 1]
            } else {
                None
            };
            let mut next = match start {
                Some(prev) => self.arena.get(prev).links[level],
                None => self.head[level],
            };
            while let Some(id) = next {
                let node = self.arena.get(id);
                match order.cmp(key, &node.key) {
                    Ordering::Greater => {
                        back[level] = Some(id);
                        next = node.links[level];
                    }
                    Ordering::Equal => {
                        found = Some(id);
                        break;
                    }
                    Ordering::Less => break,
                }
            }
        }
        (found, back)
    }
}

impl<K, V, O> SkipMap<K, V, O>
where
    O: Order<K>,
{
    /// An empty map using the fixed default seed, so level assignment is
    /// reproducible across runs.
    #[inline]
    pub fn new(order: O) -> Self {
        Self::with_seed(order, DEFAULT_SEED)
    }

    /// An empty map drawing node heights from an explicitly seeded source.
    pub fn with_seed(order: O, seed: u64) -> Self {
        SkipMap {
            order,
            inner: RwLock::new(Inner {
                head: [None; MAX_LEVELS],
                arena: Arena::new(),
                levels: LevelGenerator::new(seed),
                size: 0,
            }),
        }
    }

    /// Inserts `value` under `key`, overwriting any existing value.
    /// Returns `true` on overwrite, `false` on a fresh insert.
    pub fn put(&self, key: K, value: V) -> bool {
        let mut inner = self.inner.write();
        let (found, back) = inner.locate(&self.order, &key);
        if let Some(id) = found {
            inner.arena.get_mut(id).value = value;
            return true;
        }

        let height = inner.levels.random_level();
        trace!("put: inserting new node at height {}", height);
        let id = inner.arena.alloc(key, value, height);
        for level in 0..height {
            match back[level] {
                Some(prev) => {
                    let next = inner.arena.get(prev).links[level];
                    inner.arena.get_mut(id).links[level] = next;
                    inner.arena.get_mut(prev).links[level] = Some(id);
                }
                None => {
                    let next = inner.head[level];
                    inner.arena.get_mut(id).links[level] = next;
                    inner.head[level] = Some(id);
                }
            }
        }
        inner.size += 1;
        false
    }

    /// Looks up `key`, returning a copy of its value.
    pub fn get(&self, key: &K) -> Option<V>
    where
        V: Clone,
    {
        let inner = self.inner.read();
        let (found, _) = inner.locate(&self.order, key);
        found.map(|id| inner.arena.get(id).value.clone())
    }

    /// Removes `key` if present. Returns `true` when a node was unlinked.
    pub fn remove(&self, key: &K) -> bool {
        let mut inner = self.inner.write();
        let (found, back) = inner.locate(&self.order, key);
        let id = match found {
            Some(id) => id,
            None => return false,
        };

        // only the levels the node participates in are touched
        let height = inner.arena.get(id).height();
        trace!("remove: unlinking node of height {}", height);
        for level in 0..height {
            let next = inner.arena.get(id).links[level];
            match back[level] {
                Some(prev) => inner.arena.get_mut(prev).links[level] = next,
                None => inner.head[level] = next,
            }
        }
        inner.arena.free(id);
        inner.size -= 1;
        true
    }

    /// Number of stored keys, counted by walking the level-0 chain.
    pub fn len(&self) -> usize {
        let inner = self.inner.read();
        let mut count = 0;
        let mut next = inner.head[0];
        while let Some(id) = next {
            count += 1;
            next = inner.arena.get(id).links[0];
        }
        debug_assert_eq!(count, inner.size, "size counter out of sync");
        count
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
