use std::fmt::{self, Debug, Display};

use log::{debug, trace};
use rand::{rngs::StdRng, Rng, SeedableRng};
use skipdex_traits::default::IndexConfig;
use smallvec::{smallvec, SmallVec};

use crate::arena::{Arena, NodeId};
use crate::error::ConfigError;
use crate::iter::{LevelIter, Levels};
use crate::Result;

///0 <head> --> [3] --> [6] --> [7] --> [9] --> [12] --> [17] --> [19] --> [21] --> [25] --> [26] ->
///1 <head> ----------> [6] ----------> [9] ----------> [17] ------------------> [25] ----------->
///2 <head> ----------> [6] -------------------------------------------------> [25] ----------->
///3 <head> -----------------------------------------------------------------> [25] ----------->

/// Largest `max_level` accepted at construction; keeps the update array inline.
pub const SKL_MAX_LEVEL: usize = 31;

pub(crate) type Link = Option<NodeId>;
type Update = SmallVec<[Cursor; SKL_MAX_LEVEL + 1]>;

/// A position during the descend-and-skip walk.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Cursor {
    Head,
    At(NodeId),
}
#[derive(Debug)]
pub(crate) struct Node<K> {
    pub(crate) key: K,
    ///one link per level the node participates in
    pub(crate) forward: Box<[Link]>,
}
/// An ordered set of unique keys backed by a skip list.
///
/// `R` is the random source deciding node levels. It only shapes the
/// structure; every operation returns the same answer for any `R`.
pub struct SkipIndex<K, R = StdRng> {
    max_level: usize,
    ///probability that a node also joins the next level up
    p: f64,
    ///the highest level used by any node
    level: usize,
    ///forward links of the sentinel, `max_level + 1` of them
    head: Box<[Link]>,
    arena: Arena<Node<K>>,
    rng: R,
}
impl<K: Ord> SkipIndex<K, StdRng> {
    /// An index whose levels are drawn from an entropy-seeded [`StdRng`].
    pub fn new(max_level: usize, promotion_probability: f64) -> Result<Self> {
        Self::with_rng(max_level, promotion_probability, StdRng::from_entropy())
    }
    pub fn from_config(config: &IndexConfig) -> Result<Self> {
        let rng = match config.seed() {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        Self::with_rng(config.max_level(), config.promotion_probability(), rng)
    }
}
impl<K: Ord, R: Rng> SkipIndex<K, R> {
    pub fn with_rng(max_level: usize, promotion_probability: f64, rng: R) -> Result<Self> {
        if max_level > SKL_MAX_LEVEL {
            return Err(ConfigError::MaxLevelTooLarge {
                max_level,
                limit: SKL_MAX_LEVEL,
            }
            .into());
        }
        if !(promotion_probability > 0.0 && promotion_probability < 1.0) {
            return Err(ConfigError::InvalidProbability(promotion_probability).into());
        }
        Ok(Self {
            max_level,
            p: promotion_probability,
            level: 0,
            head: vec![None; max_level + 1].into_boxed_slice(),
            arena: Arena::default(),
            rng,
        })
    }
    /// Returns `false` without touching the index if `key` is already present;
    /// callers wanting replace semantics delete first.
    pub fn insert(&mut self, key: K) -> bool {
        let update = self.find_predecessors(&key);
        if self.matching_successor(update[0], &key).is_some() {
            trace!("duplicate key, insert skipped");
            return false;
        }

        let node_level = self.random_level();
        if node_level > self.level {
            // levels above the old top are preceded by the head, which `update` already holds
            debug!("level raised from {} to {}", self.level, node_level);
            self.level = node_level;
        }

        let forward = (0..=node_level)
            .map(|level| self.next(update[level], level))
            .collect();
        let id = self.arena.alloc(Node { key, forward });
        for (level, &prev) in update.iter().enumerate().take(node_level + 1) {
            self.set_next(prev, level, Some(id));
        }
        trace!("inserted node at level {}, len {}", node_level, self.len());
        true
    }
    pub fn contains(&self, key: &K) -> bool {
        self.get(key).is_some()
    }
    pub fn get(&self, key: &K) -> Option<&K> {
        let cursor = self.descend(key);
        self.matching_successor(cursor, key)
            .map(|id| &self.arena[id].key)
    }
    /// The smallest key greater than or equal to `key`.
    pub fn get_or_next(&self, key: &K) -> Option<&K> {
        let cursor = self.descend(key);
        self.next(cursor, 0).map(|id| &self.arena[id].key)
    }
    /// Returns `false` if `key` was not present, in which case nothing changed.
    pub fn delete(&mut self, key: &K) -> bool {
        self.take(key).is_some()
    }
    /// Removes `key` and hands back the stored key.
    pub fn take(&mut self, key: &K) -> Option<K> {
        let update = self.find_predecessors(key);
        let Some(target) = self.matching_successor(update[0], key) else {
            trace!("key not found, delete skipped");
            return None;
        };

        for level in 0..=self.level {
            // a node missing from one level is missing from every level above it
            if self.next(update[level], level) != Some(target) {
                break;
            }
            let skip = self.arena[target].forward[level];
            self.set_next(update[level], level, skip);
        }

        let old_level = self.level;
        while self.level > 0 && self.head[self.level].is_none() {
            self.level -= 1;
        }
        if self.level != old_level {
            debug!("level lowered from {} to {}", old_level, self.level);
        }

        let node = self.arena.release(target);
        trace!("deleted node at level {}, len {}", node.forward.len() - 1, self.len());
        Some(node.key)
    }
    pub fn first(&self) -> Option<&K> {
        self.head[0].map(|id| &self.arena[id].key)
    }
    pub fn last(&self) -> Option<&K> {
        let mut cursor = Cursor::Head;
        for level in (0..=self.level).rev() {
            while let Some(next) = self.next(cursor, level) {
                cursor = Cursor::At(next);
            }
        }
        match cursor {
            Cursor::Head => None,
            Cursor::At(id) => Some(&self.arena[id].key),
        }
    }
}
impl<K, R> SkipIndex<K, R> {
    pub fn len(&self) -> usize {
        self.arena.len()
    }
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
    /// The highest level currently holding a node; `0` when empty.
    pub fn level(&self) -> usize {
        self.level
    }
    pub fn max_level(&self) -> usize {
        self.max_level
    }
    pub fn promotion_probability(&self) -> f64 {
        self.p
    }
    pub fn clear(&mut self) {
        self.arena.clear();
        self.head.fill(None);
        self.level = 0;
    }
    /// All keys in ascending order.
    pub fn iter(&self) -> LevelIter<'_, K> {
        LevelIter::new(&self.arena, 0, self.head[0])
    }
    /// Keys linked at `level`, or `None` above the current level.
    pub fn keys_at(&self, level: usize) -> Option<LevelIter<'_, K>> {
        if level > self.level {
            return None;
        }
        Some(LevelIter::new(&self.arena, level, self.head[level]))
    }
    /// Every level from 0 up to the current level, each with its keys.
    pub fn levels(&self) -> Levels<'_, K> {
        Levels::new(&self.arena, &self.head[..=self.level])
    }
}
impl<K: Ord, R: Rng> SkipIndex<K, R> {
    ///generate a random level in `[0, max_level]`
    ///each extra level is kept with probability `p`,
    ///so a node reaches level `i` with probability `p^i`
    fn random_level(&mut self) -> usize {
        let mut level = 0;
        while level < self.max_level && self.rng.gen::<f64>() < self.p {
            level += 1;
        }
        level
    }
}
impl<K: Ord, R> SkipIndex<K, R> {
    fn next(&self, cursor: Cursor, level: usize) -> Link {
        match cursor {
            Cursor::Head => self.head[level],
            Cursor::At(id) => self.arena[id].forward[level],
        }
    }
    fn set_next(&mut self, cursor: Cursor, level: usize, link: Link) {
        match cursor {
            Cursor::Head => self.head[level] = link,
            Cursor::At(id) => self.arena[id].forward[level] = link,
        }
    }
    ///move right along `level` while the next key is below `key`
    fn advance(&self, mut cursor: Cursor, level: usize, key: &K) -> Cursor {
        while let Some(next) = self.next(cursor, level) {
            if self.arena[next].key >= *key {
                break;
            }
            cursor = Cursor::At(next);
        }
        cursor
    }
    ///the last position before `key` on level 0
    fn descend(&self, key: &K) -> Cursor {
        (0..=self.level)
            .rev()
            .fold(Cursor::Head, |cursor, level| self.advance(cursor, level, key))
    }
    ///the last position before `key` on every level; levels above the
    ///current one are left at the head
    fn find_predecessors(&self, key: &K) -> Update {
        let mut update: Update = smallvec![Cursor::Head; self.max_level + 1];
        let mut cursor = Cursor::Head;
        for level in (0..=self.level).rev() {
            cursor = self.advance(cursor, level, key);
            update[level] = cursor;
        }
        update
    }
    fn matching_successor(&self, cursor: Cursor, key: &K) -> Option<NodeId> {
        self.next(cursor, 0)
            .filter(|&id| self.arena[id].key == *key)
    }
}
impl<K: Ord, R: Rng> Extend<K> for SkipIndex<K, R> {
    fn extend<I: IntoIterator<Item = K>>(&mut self, iter: I) {
        for key in iter {
            self.insert(key);
        }
    }
}
impl<'a, K, R> IntoIterator for &'a SkipIndex<K, R> {
    type Item = &'a K;
    type IntoIter = LevelIter<'a, K>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
impl<K: Display, R> Display for SkipIndex<K, R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (level, keys) in self.levels() {
            write!(f, "Level {}:", level)?;
            for key in keys {
                write!(f, " {}", key)?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
impl<K: Debug, R> Debug for SkipIndex<K, R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SkipIndex")
            .field("max_level", &self.max_level)
            .field("promotion_probability", &self.p)
            .field("level", &self.level)
            .field("keys", &self.iter().collect::<Vec<_>>())
            .finish()
    }
}
