use std::fmt::{self, Debug};
use std::iter::FusedIterator;

use crate::arena::Arena;
use crate::skip_list::{Link, Node};

/// Keys along one level's chain, ascending.
///
/// Cloning yields an independent cursor at the same position, so a level can
/// be walked any number of times.
pub struct LevelIter<'a, K> {
    arena: &'a Arena<Node<K>>,
    level: usize,
    next: Link,
}
impl<'a, K> LevelIter<'a, K> {
    pub(crate) fn new(arena: &'a Arena<Node<K>>, level: usize, start: Link) -> Self {
        Self {
            arena,
            level,
            next: start,
        }
    }
    pub fn level(&self) -> usize {
        self.level
    }
}
impl<'a, K> Iterator for LevelIter<'a, K> {
    type Item = &'a K;

    fn next(&mut self) -> Option<Self::Item> {
        let node = &self.arena[self.next?];
        self.next = node.forward[self.level];
        Some(&node.key)
    }
}
impl<K> FusedIterator for LevelIter<'_, K> {}
impl<K> Clone for LevelIter<'_, K> {
    fn clone(&self) -> Self {
        Self {
            arena: self.arena,
            level: self.level,
            next: self.next,
        }
    }
}
impl<K: Debug> Debug for LevelIter<'_, K> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.clone()).finish()
    }
}
/// Each level from 0 upward, paired with its keys.
pub struct Levels<'a, K> {
    arena: &'a Arena<Node<K>>,
    ///head links of the levels still to visit
    heads: &'a [Link],
    level: usize,
}
impl<'a, K> Levels<'a, K> {
    pub(crate) fn new(arena: &'a Arena<Node<K>>, heads: &'a [Link]) -> Self {
        Self {
            arena,
            heads,
            level: 0,
        }
    }
}
impl<'a, K> Iterator for Levels<'a, K> {
    type Item = (usize, LevelIter<'a, K>);

    fn next(&mut self) -> Option<Self::Item> {
        let (&start, rest) = self.heads.split_first()?;
        self.heads = rest;
        let level = self.level;
        self.level += 1;
        Some((level, LevelIter::new(self.arena, level, start)))
    }
    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.heads.len(), Some(self.heads.len()))
    }
}
impl<K> ExactSizeIterator for Levels<'_, K> {}
impl<K> Clone for Levels<'_, K> {
    fn clone(&self) -> Self {
        Self {
            arena: self.arena,
            heads: self.heads,
            level: self.level,
        }
    }
}
