#![allow(dead_code)]
//! This module is used to document the invariants that are meant to be
//! preserved in this crate.

/// The `head` of a [`List<T>`](`crate::List<T>`) is the link owning the
/// first node; if it is `None` the list is empty.
pub const INVARIANT_1: () = ();

/// Every live node is owned by exactly one link, either the `head` of a
/// list or the `next` field of its predecessor. Following `next` links
/// never revisits a node and always reaches `None`.
pub const INVARIANT_2: () = ();

/// The `slot` attribute of a [`Cursor<T>`](`crate::Cursor<T>`) points at a
/// live link of the borrowed list: the list `head` for position 0, the
/// `next` field of the previous node everywhere else. `*slot` is `None`
/// exactly when the cursor is past the end.
pub const INVARIANT_3: () = ();

/// A [`Cursor<T>`](`crate::Cursor<T>`) holds the exclusive borrow of its
/// list for its whole lifetime, so every link it can point at stays alive:
/// nodes are only relinked through the cursor itself, and relinking moves
/// the owning `Box` pointer, never the heap node behind it.
pub const INVARIANT_4: () = ();
