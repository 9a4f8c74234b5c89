use {
    super::{Link, ListNode},
    crate::error::InsertAfterEnd,
    std::marker::PhantomData,
};

/// A `Cursor` is a position between the start of a list and its end, through
/// which nodes are unlinked and spliced in O(1). This `struct` is
/// constructed by the [`List::cursor`](crate::List::cursor) function.
///
/// Rather than pointing at a node, the cursor points at the *link that owns
/// the node at its position*: the `head` of the list for position 0, the
/// `next` field of the previous node everywhere else.
///
/// ```text
/// head: ●──►┌─────┬──►┌─────┬──►┌─────┬──╳
///           │ "a" │   │ "b" │   │ "c" │
///           └─────┘   └─────┘   └─────┘
///       ▲         ▲                    ▲
///       │         │                    └ slot past the end ("c"'s `next`)
///       │         └ slot of position 1 ("a"'s `next`)
///       └ slot of position 0 (the list `head`)
/// ```
///
/// Both kinds of slot are a `Link<T>`, so removing the first node and
/// removing a later one are the same operation; no backward pointer is ever
/// needed. The cursor keeps the exclusive borrow of its list alive for
/// `'life`, which rules out a second cursor, any read of the list, or a drop
/// of the list while this one exists (invariant (4)).
pub struct Cursor<'life, T> {
    // Invariant (3): `slot` points at a live link of the borrowed list.
    slot: *mut Link<T>,
    _marker: PhantomData<&'life mut Link<T>>,
}

impl<'life, T> Cursor<'life, T> {
    /// Builds a `Cursor` from the link owning the node at its first
    /// position.
    pub(crate) fn from_slot(slot: &'life mut Link<T>) -> Self {
        Self {
            slot,
            _marker: Default::default(),
        }
    }

    /// Returns `true` if the cursor has moved past the last node.
    ///
    /// At the end there is no node to peek at, remove or insert after;
    /// [`insert_before`](Self::insert_before) still works and appends.
    pub fn at_end(&self) -> bool {
        self.peek().is_none()
    }

    /// Returns the value of the node at the cursor position, or `None` past
    /// the end.
    pub fn peek(&self) -> Option<&T> {
        let link = unsafe {
            // SAFETY: Invariants (3) and (4) assert that `slot` points at a
            // link of the list this cursor exclusively borrows.
            &*self.slot
        };
        link.as_deref().map(ListNode::value)
    }

    /// Moves the cursor to the next position. Past the end this is a no-op.
    pub fn advance(&mut self) {
        let link = unsafe {
            // SAFETY: Invariants (3) and (4), as in `peek`.
            &mut *self.slot
        };
        if let Some(node) = link {
            // The link owning the next position is this node's `next` field.
            self.slot = &mut node.next;
        }
    }

    /// Unlinks and returns the node at the cursor position, or `None` past
    /// the end. Afterwards the cursor is at the node that followed.
    pub fn remove(&mut self) -> Option<Box<ListNode<T>>> {
        let link = unsafe {
            // SAFETY: Invariants (3) and (4), as in `peek`.
            &mut *self.slot
        };
        let mut node = link.take()?;
        // Preserving invariant (2): the successor moves from the removed
        // node's `next` into the slot, and the node leaves with no tail.
        *link = node.next.take();
        Some(node)
    }

    /// Splices `node` in at the cursor position, pushing the node that was
    /// there (and everything after it) one position back.
    ///
    /// This works at every position: at position 0 it rewrites the list
    /// head, past the end it appends. The cursor stays at the node it was
    /// at before the call.
    pub fn insert_before(&mut self, mut node: Box<ListNode<T>>) {
        let link = unsafe {
            // SAFETY: Invariants (3) and (4), as in `peek`.
            &mut *self.slot
        };
        node.next = link.take();
        let node = link.insert(node);
        // The node the cursor was at is now owned by the inserted node's
        // `next` field; follow it so the cursor does not move.
        self.slot = &mut node.next;
    }

    /// Splices `node` in right after the node at the cursor position. The
    /// cursor does not move.
    ///
    /// Past the end there is no node to insert after; the rejected node is
    /// handed back in the error so the caller can reuse it.
    pub fn insert_after(&mut self, mut node: Box<ListNode<T>>) -> Result<(), InsertAfterEnd<T>> {
        let link = unsafe {
            // SAFETY: Invariants (3) and (4), as in `peek`.
            &mut *self.slot
        };
        match link.as_deref_mut() {
            Some(current) => {
                node.next = current.next.take();
                current.next = Some(node);
                Ok(())
            }
            None => Err(InsertAfterEnd(node)),
        }
    }
}

impl<'life, T: std::fmt::Debug> std::fmt::Debug for Cursor<'life, T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_tuple("Cursor").field(&self.peek()).finish()
    }
}
