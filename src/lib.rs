//! A singly linked list of priced inventory objects, sortable in place.
//!
//! Structural edits go through a [`Cursor`] that can unlink and splice
//! nodes in O(1) at any position, including position 0. That is what lets
//! [`merge`] drain one sorted list into another in a single forward pass
//! and [`merge_sort`] reorder a list by relinking nodes instead of moving
//! values around.
//!
//! # Basic usage
//! ```
//! use pricelist::{compare_by_price, list, merge_sort, PricedObject};
//!
//! let apple = PricedObject::new_static(5, "apple", 10.0);
//! let pear = PricedObject::new_dynamic(3, "pear", 2.0, 1.0);
//! let plum = PricedObject::new_static(4, "plum", 4.5);
//!
//! let mut shelf = list![&apple, &pear, &plum];
//! merge_sort(&mut shelf, |a, b| compare_by_price(a, b));
//!
//! let names: Vec<&str> = shelf.iter().map(|obj| obj.name()).collect();
//! assert_eq!(names, &["plum", "pear", "apple"]);
//! ```
mod compare;
mod error;
mod node;
mod object;
mod sort;
mod stats;

pub mod invariants;

pub use crate::{
    compare::{compare_by_price, compare_by_quantity},
    error::{EmptyList, InsertAfterEnd, OutOfStock},
    node::{cursor::Cursor, Iter, ListNode},
    object::{PricedObject, BULK_DISCOUNT, ERR_OUT_OF_STOCK},
    sort::{merge, merge_sort, split},
    stats::{max_min_avg_price, PriceStats},
};

use crate::node::Link;

/// Builds a [`List`] from its elements, front to back.
#[macro_export]
macro_rules! list {
    [$($elem:expr),* $(,)?] => {
        [$($elem),*].into_iter().collect::<$crate::List<_>>()
    }
}

/// An owning singly linked list.
///
/// The element type is generic; the pricing side of this crate instantiates
/// it as `List<&PricedObject>`, so a list sequences objects it does not
/// own; dropping the list drops nodes, never inventory.
pub struct List<T> {
    // Invariant (1): `head` owns the first node; `None` is the empty list.
    head: Link<T>,
}
impl<T> List<T> {
    /// Creates an empty list.
    pub const fn new() -> Self {
        Self { head: None }
    }
    /// Counts the nodes of the list.
    ///
    /// This is O(n). A cursor relinks nodes without going through this
    /// `struct`, so a cached length could not be kept honest.
    pub fn len(&self) -> usize {
        self.iter().count()
    }
    /// Returns `true` if the list has no nodes.
    pub fn is_empty(&self) -> bool {
        self.head.is_none()
    }
    /// Pushes `value` in front of the first node.
    pub fn push_front(&mut self, value: T) {
        let mut node = ListNode::new(value);
        node.next = self.head.take();
        self.head = Some(node);
    }
    /// Unlinks the first node and returns its value.
    pub fn pop_front(&mut self) -> Option<T> {
        let node = self.head.take()?;
        let node = *node;
        self.head = node.next;
        Some(node.value)
    }
    /// Gets a [`Cursor`] at the first node (or past the end, if the list is
    /// empty).
    ///
    /// The cursor holds the exclusive borrow of the list until it goes out
    /// of use; while it lives, all edits go through it.
    pub fn cursor(&mut self) -> Cursor<'_, T> {
        Cursor::from_slot(&mut self.head)
    }
    /// Iterates over shared references to the values, front to back.
    pub fn iter(&self) -> Iter<'_, T> {
        Iter::new(self.head.as_deref())
    }
    /// Folds every value into an accumulator, visiting front to back.
    ///
    /// The accumulator threads through tail-first: for values `v1, v2, v3`
    /// the result is `f(&v3, f(&v2, f(&v1, init)))`.
    pub fn fold<B, F>(&self, init: B, mut f: F) -> B
    where
        F: FnMut(&T, B) -> B,
    {
        let mut acc = init;
        for value in self.iter() {
            acc = f(value, acc);
        }
        acc
    }
}
impl<T> Default for List<T> {
    fn default() -> Self {
        Self::new()
    }
}
impl<T: Clone> Clone for List<T> {
    fn clone(&self) -> Self {
        self.iter().cloned().collect()
    }
}
impl<T> FromIterator<T> for List<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut new = Self::new();
        let mut tail = new.cursor();
        for value in iter {
            // Inserting before a past-the-end cursor appends and leaves the
            // cursor past the end, so this builds the list front to back.
            tail.insert_before(ListNode::new(value));
        }
        new
    }
}
impl<T> Drop for List<T> {
    fn drop(&mut self) {
        // One link at a time; dropping the head `Box` recursively would
        // blow the stack on a long list.
        while self.pop_front().is_some() {}
    }
}
impl<T: std::fmt::Debug> std::fmt::Debug for List<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

/// Owning iterator, draining the list front to back.
pub struct IntoIter<T>(List<T>);
impl<T> Iterator for IntoIter<T> {
    type Item = T;

    fn next(&mut self) -> Option<Self::Item> {
        self.0.pop_front()
    }
}
impl<T> IntoIterator for List<T> {
    type Item = T;
    type IntoIter = IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        IntoIter::<T>(self)
    }
}
