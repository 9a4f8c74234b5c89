use std::fmt;

pub mod cursor;

/// Owning link to a list node.
///
/// `None` marks the end of a chain. The `head` of a [`List<T>`](crate::List)
/// and the `next` field of a node are both a `Link<T>`, so "the place a node
/// hangs from" is one single type; [`cursor::Cursor`] is built on that.
pub(crate) type Link<T> = Option<Box<ListNode<T>>>;

/// List element for a singly linked list.
pub struct ListNode<T> {
    pub(crate) value: T,
    pub(crate) next: Link<T>,
}

// The present implementation aims to preserve the following invariant (2):
// * Every live node is owned by exactly one link (a list head or the `next`
//   field of its predecessor)
// * Following `next` links therefore never revisits a node and always
//   reaches `None`
impl<T> ListNode<T> {
    /// Creates a new detached element with value `value`.
    ///
    /// The node is boxed from the start; it moves between lists by
    /// relinking, so the value never has to move again.
    pub fn new(value: T) -> Box<Self> {
        Box::new(Self { value, next: None })
    }

    /// Gets a shared reference to the value of the node.
    pub fn value(&self) -> &T {
        &self.value
    }

    /// Gets an exclusive reference to the value of the node.
    pub fn value_mut(&mut self) -> &mut T {
        &mut self.value
    }

    /// Consumes the node and gives the value back.
    pub fn into_value(self) -> T {
        self.value
    }
}

impl<T: fmt::Debug> fmt::Debug for ListNode<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("ListNode").field(&self.value).finish()
    }
}

/// List iterator.
pub struct Iter<'life, T> {
    next: Option<&'life ListNode<T>>,
}
impl<'life, T> Iterator for Iter<'life, T> {
    type Item = &'life T;

    fn next(&mut self) -> Option<Self::Item> {
        let current = self.next?;
        self.next = current.next.as_deref();
        Some(&current.value)
    }
}
impl<'life, T> Iter<'life, T> {
    pub(crate) fn new(first: Option<&'life ListNode<T>>) -> Self {
        Self { next: first }
    }
}
