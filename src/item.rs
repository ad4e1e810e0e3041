/// The ordering capability a tree element must provide.
///
/// [`less`](Item::less) must be a strict weak order: irreflexive,
/// asymmetric, transitive, and with transitive incomparability. The tree
/// derives equality as `!a.less(b) && !b.less(a)` and never asks for
/// [`Eq`], [`Hash`](core::hash::Hash), or a total order, so an item may
/// carry payload fields that do not participate in the comparison.
///
/// Every [`Ord`] type gets the capability for free via a blanket impl.
///
/// # Examples
///
/// A record ordered by its key alone:
///
/// ```
/// use bonsai_tree::{BTree, Item};
///
/// struct Entry {
///     key: u32,
///     payload: &'static str,
/// }
///
/// impl Item for Entry {
///     fn less(&self, other: &Self) -> bool {
///         self.key < other.key
///     }
/// }
///
/// let mut tree = BTree::new(4);
/// tree.insert(Entry { key: 7, payload: "seven" });
/// ```
pub trait Item {
    /// Returns true if `self` orders strictly before `other`.
    fn less(&self, other: &Self) -> bool;
}

impl<T: Ord> Item for T {
    #[inline]
    fn less(&self, other: &Self) -> bool {
        self < other
    }
}

/// Derived equality under the strict weak order.
#[inline]
pub(crate) fn same<T: Item + ?Sized>(a: &T, b: &T) -> bool {
    !a.less(b) && !b.less(a)
}

#[cfg(test)]
mod tests {
    use super::*;

    struct ByKey(u32, &'static str);

    impl Item for ByKey {
        fn less(&self, other: &Self) -> bool {
            self.0 < other.0
        }
    }

    #[test]
    fn blanket_impl_covers_ord_types() {
        assert!(1i64.less(&2));
        assert!(!2i64.less(&1));
        assert!(same(&5i64, &5));
    }

    #[test]
    fn equality_ignores_payload_fields() {
        assert!(same(&ByKey(3, "a"), &ByKey(3, "b")));
        assert!(!same(&ByKey(3, "a"), &ByKey(4, "a")));
    }
}
