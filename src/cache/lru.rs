//! Recency List Module
//!
//! Implements the recency order backing LRU eviction as an arena-backed
//! intrusive doubly-linked list.
//!
//! Nodes live in a growable `Vec` and are addressed by index, with freed
//! slots recycled through a free list. This gives O(1) unlink/relink without
//! per-node allocations or pointer lifetime issues:
//! - Head = Most recently used
//! - Tail = Least recently used

// == Node Handle ==
/// Index of a node in the arena.
pub type NodeId = usize;

/// Sentinel value for null links.
const NIL: NodeId = usize::MAX;

// == List Node ==
/// A node in the intrusive doubly-linked recency list.
#[derive(Debug, Clone)]
struct Node<K> {
    /// The key this node tracks
    key: K,
    /// Index of the previous (more recently used) node
    prev: NodeId,
    /// Index of the next (less recently used) node
    next: NodeId,
}

// == Recency List ==
/// Tracks access order for LRU eviction.
///
/// The caller (the cache store) keeps the `NodeId` returned by
/// [`push_front`](Self::push_front) alongside each stored entry, so every
/// touch, removal, and eviction is O(1).
#[derive(Debug)]
pub struct RecencyList<K> {
    /// Node arena; slots of evicted nodes are recycled
    arena: Vec<Node<K>>,
    /// Indices of recycled arena slots
    free: Vec<NodeId>,
    /// Most recently used node
    head: NodeId,
    /// Least recently used node
    tail: NodeId,
    /// Number of live nodes
    len: usize,
}

impl<K: Clone> RecencyList<K> {
    // == Constructor ==
    /// Creates a new empty recency list.
    pub fn new() -> Self {
        Self::with_capacity(0)
    }

    /// Creates a new empty recency list with pre-allocated arena space.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            arena: Vec::with_capacity(capacity),
            free: Vec::new(),
            head: NIL,
            tail: NIL,
            len: 0,
        }
    }

    // == Push Front ==
    /// Inserts a new key at the front (most recent) and returns its handle.
    pub fn push_front(&mut self, key: K) -> NodeId {
        let node = Node {
            key,
            prev: NIL,
            next: NIL,
        };
        let id = match self.free.pop() {
            Some(id) => {
                self.arena[id] = node;
                id
            }
            None => {
                self.arena.push(node);
                self.arena.len() - 1
            }
        };
        self.link_front(id);
        self.len += 1;
        id
    }

    // == Touch ==
    /// Marks an existing node as most recently used (moves it to the front).
    pub fn touch(&mut self, id: NodeId) {
        if self.head == id {
            return;
        }
        self.unlink(id);
        self.link_front(id);
    }

    // == Remove ==
    /// Removes a node from the list, returning its key.
    pub fn remove(&mut self, id: NodeId) -> K {
        self.unlink(id);
        self.free.push(id);
        self.len -= 1;
        self.arena[id].key.clone()
    }

    // == Pop Back ==
    /// Removes and returns the least recently used key.
    ///
    /// Returns None if the list is empty.
    pub fn pop_back(&mut self) -> Option<K> {
        if self.tail == NIL {
            return None;
        }
        let id = self.tail;
        Some(self.remove(id))
    }

    // == Peeks ==
    /// Returns the most recently used key without removing it.
    #[allow(dead_code)]
    pub fn front(&self) -> Option<&K> {
        (self.head != NIL).then(|| &self.arena[self.head].key)
    }

    /// Returns the least recently used key without removing it.
    pub fn back(&self) -> Option<&K> {
        (self.tail != NIL).then(|| &self.arena[self.tail].key)
    }

    // == Length ==
    /// Returns the number of tracked keys.
    pub fn len(&self) -> usize {
        self.len
    }

    // == Is Empty ==
    #[allow(dead_code)]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    // == Clear ==
    /// Removes all nodes; the arena is released.
    pub fn clear(&mut self) {
        self.arena.clear();
        self.free.clear();
        self.head = NIL;
        self.tail = NIL;
        self.len = 0;
    }

    // == Internal: Link Operations ==
    /// Links a detached node at the front of the list.
    fn link_front(&mut self, id: NodeId) {
        self.arena[id].prev = NIL;
        self.arena[id].next = self.head;
        if self.head != NIL {
            self.arena[self.head].prev = id;
        }
        self.head = id;
        if self.tail == NIL {
            self.tail = id;
        }
    }

    /// Detaches a node from the list, patching its neighbors.
    fn unlink(&mut self, id: NodeId) {
        let Node { prev, next, .. } = self.arena[id];
        if prev != NIL {
            self.arena[prev].next = next;
        } else {
            self.head = next;
        }
        if next != NIL {
            self.arena[next].prev = prev;
        } else {
            self.tail = prev;
        }
        self.arena[id].prev = NIL;
        self.arena[id].next = NIL;
    }
}
