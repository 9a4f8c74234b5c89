use {crate::node::ListNode, std::fmt, thiserror::Error};

/// A price was asked of an object with nothing left to sell, or a bulk
/// purchase asked for more units than are on hand.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("out of stock")]
pub struct OutOfStock;

/// A statistic was asked of a list with no nodes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("list is empty")]
pub struct EmptyList;

/// Error returned by [`Cursor::insert_after`](crate::Cursor::insert_after)
/// when the cursor is past the end: there is no node to insert after.
///
/// The rejected node rides along so the caller can reuse it instead of
/// losing the value.
#[derive(Debug)]
pub struct InsertAfterEnd<T>(pub Box<ListNode<T>>);

impl<T> InsertAfterEnd<T> {
    /// Gives back the node that was not inserted.
    pub fn into_inner(self) -> Box<ListNode<T>> {
        self.0
    }
}

impl<T> fmt::Display for InsertAfterEnd<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "cannot insert after the end of a list")
    }
}

impl<T: fmt::Debug> std::error::Error for InsertAfterEnd<T> {}
