//! Error types for list operations.

use core::fmt;

/// Recoverable failure of a list operation.
///
/// Both variants are ordinary outcomes the caller is expected to handle;
/// neither panics, and a failed operation never leaves the list partially
/// mutated. Valid positions are always >= 1, so failures are signaled
/// out-of-band instead of overlapping real indices.
///
/// # Example
///
/// ```
/// use forward_list::{ForwardList, ListError};
///
/// let mut list: ForwardList = ForwardList::new();
/// assert_eq!(list.pop_front(), Err(ListError::Empty));
///
/// list.push_back(10);
/// assert_eq!(list.find_index(99), Err(ListError::NotFound));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListError {
    /// The operation requires at least one element, but the list is empty.
    Empty,
    /// The search value is absent from a non-empty list.
    NotFound,
}

impl fmt::Display for ListError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ListError::Empty => write!(f, "list is empty"),
            ListError::NotFound => write!(f, "value not found"),
        }
    }
}

impl std::error::Error for ListError {}
