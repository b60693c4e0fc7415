use std::iter::FusedIterator;

use crate::list::{Handle, XorList, NIL};

/// Walks an [`XorList`] from either end.
///
/// Each cursor carries the handle it just left, which is what turns a node's
/// XOR link back into the next handle.
pub struct Iter<'a, T> {
    list: &'a XorList<T>,
    front: Handle,
    front_prev: Handle,
    back: Handle,
    back_next: Handle,
    remaining: usize,
}
impl<'a, T> Iter<'a, T> {
    pub(crate) fn new(list: &'a XorList<T>, head: Handle, tail: Handle, len: usize) -> Self {
        Self {
            list,
            front: head,
            front_prev: NIL,
            back: tail,
            back_next: NIL,
            remaining: len,
        }
    }
}
impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }
        let node = self.list.node(self.front);
        let next = node.link ^ self.front_prev;
        self.front_prev = self.front;
        self.front = next;
        self.remaining -= 1;
        Some(&node.value)
    }
    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}
impl<T> DoubleEndedIterator for Iter<'_, T> {
    fn next_back(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }
        let node = self.list.node(self.back);
        let prev = node.link ^ self.back_next;
        self.back_next = self.back;
        self.back = prev;
        self.remaining -= 1;
        Some(&node.value)
    }
}
impl<T> ExactSizeIterator for Iter<'_, T> {}
impl<T> FusedIterator for Iter<'_, T> {}
impl<T> Clone for Iter<'_, T> {
    fn clone(&self) -> Self {
        Self {
            list: self.list,
            front: self.front,
            front_prev: self.front_prev,
            back: self.back,
            back_next: self.back_next,
            remaining: self.remaining,
        }
    }
}
