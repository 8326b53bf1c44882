use std::iter::FromIterator;
use std::mem;
use std::ops::{Index, IndexMut};

/// Stable reference to a node of a [`NodeList`].
///
/// A handle stays valid until the node it points to is removed. Inserting or
/// removing other nodes never moves existing ones, so handles can be stored
/// in other structures and used for O(1) removal later on.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeHandle(usize);

impl NodeHandle {
    #[inline]
    pub fn index(self) -> usize {
        self.0
    }
}

#[derive(Clone, Debug)]
enum Slot<T> {
    Occupied {
        item: T,
        prev: Option<usize>,
        next: Option<usize>,
    },
    Free {
        next_free: Option<usize>,
    },
}

/// Doubly linked list whose nodes live in a slot arena.
///
/// Freed slots are chained in a free list and reused by later insertions.
#[derive(Clone, Debug)]
pub struct NodeList<T> {
    slots: Vec<Slot<T>>,
    head: Option<usize>,
    tail: Option<usize>,
    free_head: Option<usize>,
    len: usize,
}

impl<T> Default for NodeList<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> NodeList<T> {
    pub fn new() -> Self {
        Self {
            slots: Vec::new(),
            head: None,
            tail: None,
            free_head: None,
            len: 0,
        }
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            slots: Vec::with_capacity(capacity),
            head: None,
            tail: None,
            free_head: None,
            len: 0,
        }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    #[inline]
    pub fn front(&self) -> Option<NodeHandle> {
        self.head.map(NodeHandle)
    }

    /// Returns the node following `handle`, or `None` at the end of the list
    /// or when `handle` is not a live node.
    pub fn next(&self, handle: NodeHandle) -> Option<NodeHandle> {
        match self.slots.get(handle.0) {
            Some(Slot::Occupied { next, .. }) => next.map(NodeHandle),
            _ => None,
        }
    }

    #[inline]
    pub fn contains(&self, handle: NodeHandle) -> bool {
        matches!(self.slots.get(handle.0), Some(Slot::Occupied { .. }))
    }

    pub fn get(&self, handle: NodeHandle) -> Option<&T> {
        match self.slots.get(handle.0) {
            Some(Slot::Occupied { item, .. }) => Some(item),
            _ => None,
        }
    }

    pub fn get_mut(&mut self, handle: NodeHandle) -> Option<&mut T> {
        match self.slots.get_mut(handle.0) {
            Some(Slot::Occupied { item, .. }) => Some(item),
            _ => None,
        }
    }

    pub fn push_back(&mut self, item: T) -> NodeHandle {
        let slot = Slot::Occupied {
            item,
            prev: self.tail,
            next: None,
        };
        let idx = match self.free_head {
            Some(idx) => {
                let old = mem::replace(&mut self.slots[idx], slot);
                self.free_head = match old {
                    Slot::Free { next_free } => next_free,
                    Slot::Occupied { .. } => unreachable!("free list points to occupied slot"),
                };
                idx
            }
            None => {
                self.slots.push(slot);
                self.slots.len() - 1
            }
        };
        match self.tail {
            Some(tail) => self.set_next(tail, Some(idx)),
            None => self.head = Some(idx),
        }
        self.tail = Some(idx);
        self.len += 1;
        NodeHandle(idx)
    }

    /// Unlinks the node at `handle` and returns its item. Returns `None` if
    /// the handle does not point to a live node; the list is unchanged then.
    pub fn remove(&mut self, handle: NodeHandle) -> Option<T> {
        let idx = handle.0;
        if !self.contains(handle) {
            return None;
        }
        let freed = Slot::Free {
            next_free: self.free_head,
        };
        let (item, prev, next) = match mem::replace(&mut self.slots[idx], freed) {
            Slot::Occupied { item, prev, next } => (item, prev, next),
            Slot::Free { .. } => unreachable!(),
        };
        match prev {
            Some(prev) => self.set_next(prev, next),
            None => self.head = next,
        }
        match next {
            Some(next) => self.set_prev(next, prev),
            None => self.tail = prev,
        }
        self.free_head = Some(idx);
        self.len -= 1;
        Some(item)
    }

    pub fn clear(&mut self) {
        self.slots.clear();
        self.head = None;
        self.tail = None;
        self.free_head = None;
        self.len = 0;
    }

    pub fn iter(&self) -> NodeListIter<'_, T> {
        NodeListIter {
            list: self,
            current: self.head,
            remaining: self.len,
        }
    }

    fn set_next(&mut self, idx: usize, value: Option<usize>) {
        if let Slot::Occupied { next, .. } = &mut self.slots[idx] {
            *next = value;
        }
    }

    fn set_prev(&mut self, idx: usize, value: Option<usize>) {
        if let Slot::Occupied { prev, .. } = &mut self.slots[idx] {
            *prev = value;
        }
    }
}

impl<T> Index<NodeHandle> for NodeList<T> {
    type Output = T;

    fn index(&self, handle: NodeHandle) -> &Self::Output {
        match self.get(handle) {
            Some(item) => item,
            None => panic!("stale node handle {:?}", handle),
        }
    }
}

impl<T> IndexMut<NodeHandle> for NodeList<T> {
    fn index_mut(&mut self, handle: NodeHandle) -> &mut Self::Output {
        match self.get_mut(handle) {
            Some(item) => item,
            None => panic!("stale node handle {:?}", handle),
        }
    }
}

impl<T> FromIterator<T> for NodeList<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut list = NodeList::new();
        for item in iter {
            list.push_back(item);
        }
        list
    }
}

pub struct NodeListIter<'a, T> {
    list: &'a NodeList<T>,
    current: Option<usize>,
    remaining: usize,
}

impl<'a, T> Iterator for NodeListIter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        let idx = self.current?;
        match &self.list.slots[idx] {
            Slot::Occupied { item, next, .. } => {
                self.current = *next;
                self.remaining -= 1;
                Some(item)
            }
            Slot::Free { .. } => None,
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<'a, T> ExactSizeIterator for NodeListIter<'a, T> {}

impl<'a, T> IntoIterator for &'a NodeList<T> {
    type Item = &'a T;
    type IntoIter = NodeListIter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
