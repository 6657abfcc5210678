//! Indexed binary min-heap with O(log n) decrease-key.
//!
//! The heap does not own its elements. Callers keep them in a slice (the
//! arena) and the heap tracks arena indices; each element records its current
//! heap slot through [`IndexedItem`]. `decrease_key` therefore needs no
//! search: it reads the element's back-pointer and restores heap order by
//! sifting up. The back-pointer is rewritten on every element move, so it
//! matches the true slot after every mutating call, not just at quiescence.
//!
//! Capacity is fixed at construction. Growing the backing array would move
//! every element without a rebuild pass over the back-pointers, so an insert
//! beyond capacity fails with [`HeapError::QueueFull`] instead.

use std::fmt;

/// Errors returned by [`IndexedHeap`] operations.
#[derive(Clone, Copy, Debug, Eq, PartialEq, thiserror::Error)]
#[non_exhaustive]
pub enum HeapError {
    /// An insert was attempted on a heap already holding `capacity` elements.
    #[error("priority queue is full (capacity {capacity})")]
    QueueFull {
        /// The fixed capacity the heap was constructed with.
        capacity: usize,
    },
    /// An extract or peek was attempted on an empty heap.
    #[error("priority queue is empty")]
    QueueEmpty,
}

impl HeapError {
    /// Returns a stable, machine-readable error code for the variant.
    #[must_use]
    pub const fn code(&self) -> HeapErrorCode {
        match self {
            Self::QueueFull { .. } => HeapErrorCode::QueueFull,
            Self::QueueEmpty => HeapErrorCode::QueueEmpty,
        }
    }
}

/// Machine-readable error codes for [`HeapError`].
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum HeapErrorCode {
    /// An insert was attempted on a full heap.
    QueueFull,
    /// An extract or peek was attempted on an empty heap.
    QueueEmpty,
}

impl HeapErrorCode {
    /// Returns the symbolic identifier for logging and metrics surfaces.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::QueueFull => "HEAP_QUEUE_FULL",
            Self::QueueEmpty => "HEAP_QUEUE_EMPTY",
        }
    }
}

impl fmt::Display for HeapErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Capability required of elements queued in an [`IndexedHeap`].
///
/// The element exposes its ordering key and stores the slot the heap last
/// placed it in. The heap calls [`IndexedItem::set_heap_index`] on every move
/// it performs; elements must return exactly that value from
/// [`IndexedItem::heap_index`] until the next move.
pub trait IndexedItem {
    /// Ordering key; a smaller key means higher priority.
    type Key: Ord;

    /// Returns the element's current ordering key.
    fn key(&self) -> Self::Key;

    /// Returns the heap slot recorded by the last [`IndexedItem::set_heap_index`] call.
    fn heap_index(&self) -> usize;

    /// Records the element's new slot after the heap moves it.
    fn set_heap_index(&mut self, slot: usize);
}

/// Fixed-capacity, arena-addressed binary min-heap supporting decrease-key.
///
/// `slots[i]` holds the arena index of the element occupying heap slot `i`,
/// and `arena[slots[i]].heap_index() == i` holds after every operation.
#[derive(Clone, Debug)]
pub struct IndexedHeap {
    slots: Vec<usize>,
    capacity: usize,
}

impl IndexedHeap {
    /// Creates an empty heap that can hold at most `capacity` elements.
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            slots: Vec::with_capacity(capacity),
            capacity,
        }
    }

    /// Returns the number of queued elements.
    #[must_use]
    #[rustfmt::skip]
    pub fn len(&self) -> usize { self.slots.len() }

    /// Returns `true` when no elements are queued.
    #[must_use]
    #[rustfmt::skip]
    pub fn is_empty(&self) -> bool { self.slots.is_empty() }

    /// Returns the fixed capacity the heap was constructed with.
    #[must_use]
    #[rustfmt::skip]
    pub fn capacity(&self) -> usize { self.capacity }

    /// Queues `item`, the arena index of an element not currently queued.
    ///
    /// # Errors
    /// Returns [`HeapError::QueueFull`] when the heap already holds
    /// `capacity` elements; the heap is left unchanged.
    ///
    /// # Panics
    /// Panics if `item` is not a valid index into `arena`.
    pub fn insert<T: IndexedItem>(
        &mut self,
        arena: &mut [T],
        item: usize,
    ) -> Result<(), HeapError> {
        if self.slots.len() == self.capacity {
            return Err(HeapError::QueueFull {
                capacity: self.capacity,
            });
        }
        let slot = self.slots.len();
        self.slots.push(item);
        arena[item].set_heap_index(slot);
        self.sift_up(arena, slot);
        Ok(())
    }

    /// Removes and returns the arena index of the minimum-keyed element.
    ///
    /// Ties at the root are broken arbitrarily; extraction order between
    /// equal keys is not insertion-stable.
    ///
    /// # Errors
    /// Returns [`HeapError::QueueEmpty`] when no elements are queued.
    pub fn extract_min<T: IndexedItem>(&mut self, arena: &mut [T]) -> Result<usize, HeapError> {
        let Some(&root) = self.slots.first() else {
            return Err(HeapError::QueueEmpty);
        };
        if let Some(last) = self.slots.pop() {
            if !self.slots.is_empty() {
                self.place(arena, 0, last);
                self.sift_down(arena, 0);
            }
        }
        Ok(root)
    }

    /// Returns the arena index of the minimum-keyed element without removal.
    ///
    /// # Errors
    /// Returns [`HeapError::QueueEmpty`] when no elements are queued.
    pub fn peek_min(&self) -> Result<usize, HeapError> {
        self.slots.first().copied().ok_or(HeapError::QueueEmpty)
    }

    /// Restores heap order after the caller lowered `item`'s key in place.
    ///
    /// The element's slot is read from its back-pointer, so the lookup is
    /// O(1) and the repair sifts up only. A key that did not actually
    /// decrease is a harmless no-op: the sift terminates at the first parent
    /// that is not greater.
    ///
    /// # Panics
    /// Panics if `item` is not a valid index into `arena`. `item` must be
    /// queued; a stale back-pointer on an unqueued element is a caller bug.
    pub fn decrease_key<T: IndexedItem>(&mut self, arena: &mut [T], item: usize) {
        let slot = arena[item].heap_index();
        debug_assert_eq!(self.slots.get(slot), Some(&item), "stale heap back-pointer");
        self.sift_up(arena, slot);
    }

    fn sift_up<T: IndexedItem>(&mut self, arena: &mut [T], mut slot: usize) {
        while slot > 0 {
            let parent = (slot - 1) / 2;
            if arena[self.slots[slot]].key() < arena[self.slots[parent]].key() {
                self.swap_slots(arena, slot, parent);
                slot = parent;
            } else {
                break;
            }
        }
    }

    fn sift_down<T: IndexedItem>(&mut self, arena: &mut [T], mut slot: usize) {
        loop {
            let left = 2 * slot + 1;
            if left >= self.slots.len() {
                break;
            }
            let right = left + 1;
            let mut child = left;
            if right < self.slots.len()
                && arena[self.slots[right]].key() < arena[self.slots[left]].key()
            {
                child = right;
            }
            if arena[self.slots[child]].key() < arena[self.slots[slot]].key() {
                self.swap_slots(arena, slot, child);
                slot = child;
            } else {
                break;
            }
        }
    }

    /// Writes `item` into `slot` and rewrites its back-pointer.
    fn place<T: IndexedItem>(&mut self, arena: &mut [T], slot: usize, item: usize) {
        self.slots[slot] = item;
        arena[item].set_heap_index(slot);
    }

    fn swap_slots<T: IndexedItem>(&mut self, arena: &mut [T], a: usize, b: usize) {
        self.slots.swap(a, b);
        arena[self.slots[a]].set_heap_index(a);
        arena[self.slots[b]].set_heap_index(b);
    }
}
