use std::mem;
use std::ops::{Index, IndexMut};

/// Stable address of a value stored in an [`Arena`].
///
/// An id stays valid until the value is released; the slot may then be
/// handed out again by a later `alloc`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub(crate) struct NodeId(usize);

#[derive(Debug, Clone)]
enum Slot<T> {
    Occupied(T),
    ///next vacant slot of the free list
    Vacant(Option<usize>),
}
/// Index-addressed storage with slot reuse.
#[derive(Debug, Clone)]
pub(crate) struct Arena<T> {
    slots: Vec<Slot<T>>,
    ///head of the free list
    free: Option<usize>,
    len: usize,
}
impl<T> Default for Arena<T> {
    fn default() -> Self {
        Self {
            slots: Vec::new(),
            free: None,
            len: 0,
        }
    }
}
impl<T> Arena<T> {
    pub(crate) fn alloc(&mut self, value: T) -> NodeId {
        self.len += 1;
        match self.free {
            Some(index) => {
                let slot = mem::replace(&mut self.slots[index], Slot::Occupied(value));
                match slot {
                    Slot::Vacant(next) => self.free = next,
                    Slot::Occupied(_) => unreachable!("free list points at an occupied slot"),
                }
                NodeId(index)
            }
            None => {
                self.slots.push(Slot::Occupied(value));
                NodeId(self.slots.len() - 1)
            }
        }
    }
    /// Moves the value out and puts its slot on the free list.
    ///
    /// # Panics
    /// Panics if `id` was already released.
    pub(crate) fn release(&mut self, id: NodeId) -> T {
        let slot = mem::replace(&mut self.slots[id.0], Slot::Vacant(self.free));
        match slot {
            Slot::Occupied(value) => {
                self.free = Some(id.0);
                self.len -= 1;
                value
            }
            Slot::Vacant(next) => {
                self.slots[id.0] = Slot::Vacant(next);
                panic!("release of vacant slot {}", id.0);
            }
        }
    }
    pub(crate) fn get(&self, id: NodeId) -> Option<&T> {
        match self.slots.get(id.0)? {
            Slot::Occupied(value) => Some(value),
            Slot::Vacant(_) => None,
        }
    }
    pub(crate) fn get_mut(&mut self, id: NodeId) -> Option<&mut T> {
        match self.slots.get_mut(id.0)? {
            Slot::Occupied(value) => Some(value),
            Slot::Vacant(_) => None,
        }
    }
    pub(crate) fn len(&self) -> usize {
        self.len
    }
    pub(crate) fn clear(&mut self) {
        self.slots.clear();
        self.free = None;
        self.len = 0;
    }
}
impl<T> Index<NodeId> for Arena<T> {
    type Output = T;

    fn index(&self, id: NodeId) -> &T {
        match self.get(id) {
            Some(value) => value,
            None => panic!("stale node id {}", id.0),
        }
    }
}
impl<T> IndexMut<NodeId> for Arena<T> {
    fn index_mut(&mut self, id: NodeId) -> &mut T {
        match self.get_mut(id) {
            Some(value) => value,
            None => panic!("stale node id {}", id.0),
        }
    }
}
