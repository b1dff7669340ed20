use std::fmt::{Debug, Formatter};
use std::sync::atomic::{AtomicU64, Ordering};

use crate::error::TreeError;
use crate::node::XmlNode;

static NEXT_LIST_TAG: AtomicU64 = AtomicU64::new(1);

/// Handle to one child inside one [ChildList].
///
/// A handle stays valid until its node is removed. After that, and for any
/// other list, lookups return `None` and removal fails with
/// [TreeError::NotAMember].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ChildId {
    list: u64,
    index: u32,
    generation: u64,
}

#[derive(Clone)]
struct Link {
    node: XmlNode,
    prev: Option<u32>,
    next: Option<u32>,
}

#[derive(Clone)]
struct Slot {
    generation: u64,
    link: Option<Link>,
}

/// Ordered, doubly linked list of sibling nodes.
///
/// Nodes live in slots owned by the list; the prev/next links are slot
/// indices, so appending, prepending and removing a known member are O(1).
/// Removed slots are recycled with a bumped generation.
///
/// WARNING: a [ChildId] obtained before a removal may no longer name a node
/// afterwards. Re-read ids from the list after mutating it.
pub struct ChildList {
    tag: u64,
    slots: Vec<Slot>,
    free: Vec<u32>,
    head: Option<u32>,
    tail: Option<u32>,
}

impl Default for ChildList {
    fn default() -> Self {
        ChildList::new()
    }
}

impl ChildList {
    pub fn new() -> Self {
        ChildList {
            tag: NEXT_LIST_TAG.fetch_add(1, Ordering::Relaxed),
            slots: vec![],
            free: vec![],
            head: None,
            tail: None,
        }
    }

    /// Append a node. The new node's backward link is the former tail.
    pub fn add_node(&mut self, node: XmlNode) -> ChildId {
        let tail = self.tail;
        let index = self.alloc(Link { node, prev: tail, next: None });
        match tail {
            Some(tail) => self.set_next(tail, Some(index)),
            None => self.head = Some(index),
        }
        self.tail = Some(index);
        self.id_at(index)
    }

    /// Prepend a node, making it the new head.
    pub fn push_front(&mut self, node: XmlNode) -> ChildId {
        let head = self.head;
        let index = self.alloc(Link { node, prev: None, next: head });
        match head {
            Some(head) => self.set_prev(head, Some(index)),
            None => self.tail = Some(index),
        }
        self.head = Some(index);
        self.id_at(index)
    }

    /// Detach a member and hand the node back to the caller.
    pub fn remove_node(&mut self, id: ChildId) -> Result<XmlNode, TreeError> {
        if !self.contains(id) {
            return Err(TreeError::NotAMember(id));
        }
        let slot = &mut self.slots[id.index as usize];
        let link = slot.link.take().ok_or(TreeError::NotAMember(id))?;
        slot.generation += 1;
        self.free.push(id.index);

        // splice the neighbours together; a missing neighbour means we were head or tail
        match link.prev {
            Some(prev) => self.set_next(prev, link.next),
            None => self.head = link.next,
        }
        match link.next {
            Some(next) => self.set_prev(next, link.prev),
            None => self.tail = link.prev,
        }
        Ok(link.node)
    }

    /// Number of nodes, found by walking the list from the head.
    pub fn count_nodes(&self) -> usize {
        self.iter().count()
    }

    pub fn has_nodes(&self) -> bool {
        self.head.is_some()
    }

    pub fn first(&self) -> Option<ChildId> {
        self.head.map(|index| self.id_at(index))
    }

    pub fn last(&self) -> Option<ChildId> {
        self.tail.map(|index| self.id_at(index))
    }

    pub fn first_node(&self) -> Option<&XmlNode> {
        self.get(self.first()?)
    }

    pub fn last_node(&self) -> Option<&XmlNode> {
        self.get(self.last()?)
    }

    /// Following sibling of a member
    pub fn next(&self, id: ChildId) -> Option<ChildId> {
        self.link(id)?.next.map(|index| self.id_at(index))
    }

    /// Preceding sibling of a member
    pub fn prev(&self, id: ChildId) -> Option<ChildId> {
        self.link(id)?.prev.map(|index| self.id_at(index))
    }

    pub fn get(&self, id: ChildId) -> Option<&XmlNode> {
        self.link(id).map(|link| &link.node)
    }

    pub fn get_mut(&mut self, id: ChildId) -> Option<&mut XmlNode> {
        if !self.contains(id) {
            return None;
        }
        self.slots[id.index as usize].link.as_mut().map(|link| &mut link.node)
    }

    pub fn contains(&self, id: ChildId) -> bool {
        self.link(id).is_some()
    }

    /// Nodes in list order
    pub fn iter(&self) -> Iter<'_> {
        Iter { list: self, cursor: self.head }
    }

    /// Handles in list order
    pub fn ids(&self) -> Ids<'_> {
        Ids { list: self, cursor: self.head }
    }

    fn link(&self, id: ChildId) -> Option<&Link> {
        if id.list != self.tag {
            return None;
        }
        let slot = self.slots.get(id.index as usize)?;
        if slot.generation != id.generation {
            return None;
        }
        slot.link.as_ref()
    }

    fn alloc(&mut self, link: Link) -> u32 {
        match self.free.pop() {
            Some(index) => {
                self.slots[index as usize].link = Some(link);
                index
            }
            None => {
                self.slots.push(Slot { generation: 0, link: Some(link) });
                (self.slots.len() - 1) as u32
            }
        }
    }

    fn id_at(&self, index: u32) -> ChildId {
        ChildId {
            list: self.tag,
            index,
            generation: self.slots[index as usize].generation,
        }
    }

    fn set_next(&mut self, index: u32, next: Option<u32>) {
        if let Some(link) = self.slots[index as usize].link.as_mut() {
            link.next = next;
        }
    }

    fn set_prev(&mut self, index: u32, prev: Option<u32>) {
        if let Some(link) = self.slots[index as usize].link.as_mut() {
            link.prev = prev;
        }
    }
}

/// Cloning yields a list with its own tag, so handles of the original are
/// not valid for the copy.
impl Clone for ChildList {
    fn clone(&self) -> Self {
        ChildList {
            tag: NEXT_LIST_TAG.fetch_add(1, Ordering::Relaxed),
            slots: self.slots.clone(),
            free: self.free.clone(),
            head: self.head,
            tail: self.tail,
        }
    }
}

/// Lists are equal if they hold equal nodes in the same order.
impl PartialEq for ChildList {
    fn eq(&self, other: &Self) -> bool {
        self.iter().eq(other.iter())
    }
}

impl Debug for ChildList {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

pub struct Iter<'a> {
    list: &'a ChildList,
    cursor: Option<u32>,
}

impl<'a> Iterator for Iter<'a> {
    type Item = &'a XmlNode;

    fn next(&mut self) -> Option<&'a XmlNode> {
        let list = self.list;
        let link = list.slots[self.cursor? as usize].link.as_ref()?;
        self.cursor = link.next;
        Some(&link.node)
    }
}

pub struct Ids<'a> {
    list: &'a ChildList,
    cursor: Option<u32>,
}

impl Iterator for Ids<'_> {
    type Item = ChildId;

    fn next(&mut self) -> Option<ChildId> {
        let index = self.cursor?;
        self.cursor = self.list.slots[index as usize].link.as_ref()?.next;
        Some(self.list.id_at(index))
    }
}

impl<'a> IntoIterator for &'a ChildList {
    type Item = &'a XmlNode;
    type IntoIter = Iter<'a>;

    fn into_iter(self) -> Iter<'a> {
        self.iter()
    }
}
