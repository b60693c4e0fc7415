use std::fmt::{self, Debug, Display};

use log::trace;

use crate::iter::Iter;

/// 1-based slot handle; `NIL` marks a missing neighbour.
pub(crate) type Handle = usize;
pub(crate) const NIL: Handle = 0;

#[derive(Debug, Clone)]
pub(crate) struct XorNode<T> {
    pub(crate) value: T,
    ///`prev ^ next`
    pub(crate) link: Handle,
}
/// A doubly linked list whose nodes keep a single link, the XOR of the
/// handles of both neighbours.
///
/// Walking needs the handle of the node just left behind: `next = link ^ prev`
/// going forward, `prev = link ^ next` going backward.
#[derive(Clone)]
pub struct XorList<T> {
    nodes: Vec<Option<XorNode<T>>>,
    ///vacant slot indices
    free: Vec<usize>,
    head: Handle,
    tail: Handle,
    len: usize,
}
impl<T> Default for XorList<T> {
    fn default() -> Self {
        Self::new()
    }
}
impl<T> XorList<T> {
    pub fn new() -> Self {
        Self {
            nodes: Vec::new(),
            free: Vec::new(),
            head: NIL,
            tail: NIL,
            len: 0,
        }
    }
    pub fn len(&self) -> usize {
        self.len
    }
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }
    pub fn push_front(&mut self, value: T) {
        let old_head = self.head;
        let handle = self.alloc(XorNode {
            value,
            link: NIL ^ old_head,
        });
        if old_head == NIL {
            self.tail = handle;
        } else {
            // old head's prev was NIL
            self.node_mut(old_head).link ^= handle;
        }
        self.head = handle;
        self.len += 1;
        trace!("push_front handle {}, len {}", handle, self.len);
    }
    pub fn push_back(&mut self, value: T) {
        let old_tail = self.tail;
        let handle = self.alloc(XorNode {
            value,
            link: old_tail ^ NIL,
        });
        if old_tail == NIL {
            self.head = handle;
        } else {
            self.node_mut(old_tail).link ^= handle;
        }
        self.tail = handle;
        self.len += 1;
        trace!("push_back handle {}, len {}", handle, self.len);
    }
    pub fn pop_front(&mut self) -> Option<T> {
        if self.head == NIL {
            return None;
        }
        let handle = self.head;
        let node = self.release(handle);
        let next = node.link ^ NIL;
        if next == NIL {
            self.tail = NIL;
        } else {
            self.node_mut(next).link ^= handle;
        }
        self.head = next;
        self.len -= 1;
        Some(node.value)
    }
    pub fn pop_back(&mut self) -> Option<T> {
        if self.tail == NIL {
            return None;
        }
        let handle = self.tail;
        let node = self.release(handle);
        let prev = node.link ^ NIL;
        if prev == NIL {
            self.head = NIL;
        } else {
            self.node_mut(prev).link ^= handle;
        }
        self.tail = prev;
        self.len -= 1;
        Some(node.value)
    }
    pub fn front(&self) -> Option<&T> {
        (self.head != NIL).then(|| &self.node(self.head).value)
    }
    pub fn back(&self) -> Option<&T> {
        (self.tail != NIL).then(|| &self.node(self.tail).value)
    }
    pub fn clear(&mut self) {
        self.nodes.clear();
        self.free.clear();
        self.head = NIL;
        self.tail = NIL;
        self.len = 0;
    }
    pub fn iter(&self) -> Iter<'_, T> {
        Iter::new(self, self.head, self.tail, self.len)
    }
    pub(crate) fn node(&self, handle: Handle) -> &XorNode<T> {
        match self.nodes.get(handle.wrapping_sub(1)) {
            Some(Some(node)) => node,
            _ => panic!("dangling handle {}", handle),
        }
    }
    fn node_mut(&mut self, handle: Handle) -> &mut XorNode<T> {
        match self.nodes.get_mut(handle.wrapping_sub(1)) {
            Some(Some(node)) => node,
            _ => panic!("dangling handle {}", handle),
        }
    }
    fn alloc(&mut self, node: XorNode<T>) -> Handle {
        match self.free.pop() {
            Some(index) => {
                self.nodes[index] = Some(node);
                index + 1
            }
            None => {
                self.nodes.push(Some(node));
                self.nodes.len()
            }
        }
    }
    fn release(&mut self, handle: Handle) -> XorNode<T> {
        let index = handle - 1;
        match self.nodes[index].take() {
            Some(node) => {
                self.free.push(index);
                node
            }
            None => panic!("dangling handle {}", handle),
        }
    }
}
impl<T> FromIterator<T> for XorList<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut list = Self::new();
        list.extend(iter);
        list
    }
}
impl<T> Extend<T> for XorList<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for value in iter {
            self.push_back(value);
        }
    }
}
impl<'a, T> IntoIterator for &'a XorList<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
impl<T: Display> Display for XorList<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut iter = self.iter();
        if let Some(first) = iter.next() {
            write!(f, "{}", first)?;
            for value in iter {
                write!(f, " {}", value)?;
            }
        }
        Ok(())
    }
}
impl<T: Debug> Debug for XorList<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}
