//! Sentinel-based index trait for zero-cost optional links.
//!
//! Node links use a reserved sentinel value (e.g., `u32::MAX`) instead of
//! `Option<Idx>` to keep nodes a single word smaller and comparisons branch-free.

/// A copyable index type with a sentinel "none" value.
///
/// # Example
///
/// ```
/// use forward_list::Index;
///
/// let idx: u32 = 5;
/// let none: u32 = u32::NONE;
///
/// assert!(idx.is_some());
/// assert!(none.is_none());
/// ```
pub trait Index: Copy + Eq {
    /// Sentinel value representing "no index" / null.
    const NONE: Self;

    /// Returns `true` if this is the sentinel value.
    #[inline]
    fn is_none(self) -> bool {
        self == Self::NONE
    }

    /// Returns `true` if this is not the sentinel value.
    #[inline]
    fn is_some(self) -> bool {
        !self.is_none()
    }

    fn as_usize(self) -> usize;

    fn from_usize(val: usize) -> Self;
}

macro_rules! impl_index_for_unsigned {
    ($($ty:ty),*) => {
        $(
            impl Index for $ty {
                const NONE: Self = <$ty>::MAX;

                #[inline]
                fn as_usize(self) -> usize {
                    self as usize
                }

                #[inline]
                fn from_usize(val: usize) -> Self {
                    val as Self
                }
            }
        )*
    };
}

// u32 addresses ~4 billion nodes; wider index types would only pad the node.
impl_index_for_unsigned!(u8, u16, u32);
