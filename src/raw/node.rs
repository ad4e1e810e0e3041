use smallvec::SmallVec;

use super::arena::NodeId;
use crate::item::{Item, same};

/// Inline capacity for the per-node sequences. Small orders keep node
/// storage inline; larger ones spill to the heap through `SmallVec`.
pub(crate) const INLINE: usize = 8;

pub(crate) type ItemSeq<T> = SmallVec<[T; INLINE]>;
pub(crate) type ChildSeq = SmallVec<[NodeId; INLINE]>;

/// One tree node: an ordered run of items, the child links flanking them
/// (empty for a leaf), and a back-link to the parent (`None` at the root).
///
/// A node with `k` items is internal iff it has `k + 1` children; a leaf
/// has none. The node itself never enforces fill bounds - the engine does.
pub(crate) struct Node<T> {
    items: ItemSeq<T>,
    children: ChildSeq,
    parent: Option<NodeId>,
}

impl<T> Node<T> {
    pub(crate) fn new_leaf() -> Self {
        Self {
            items: ItemSeq::new(),
            children: ChildSeq::new(),
            parent: None,
        }
    }

    /// Creates the replacement root produced by a root split: one separator
    /// over the two halves.
    pub(crate) fn new_root(separator: T, left: NodeId, right: NodeId) -> Self {
        let mut items = ItemSeq::new();
        items.push(separator);
        let mut children = ChildSeq::new();
        children.push(left);
        children.push(right);
        Self {
            items,
            children,
            parent: None,
        }
    }

    /// A node is a leaf iff it has no children.
    #[inline]
    pub(crate) fn is_leaf(&self) -> bool {
        self.children.is_empty()
    }

    #[inline]
    pub(crate) fn item_count(&self) -> usize {
        self.items.len()
    }

    #[inline]
    pub(crate) fn child_count(&self) -> usize {
        self.children.len()
    }

    #[inline]
    pub(crate) fn item(&self, index: usize) -> &T {
        &self.items[index]
    }

    pub(crate) fn items(&self) -> &[T] {
        &self.items
    }

    pub(crate) fn first_item(&self) -> Option<&T> {
        self.items.first()
    }

    #[inline]
    pub(crate) fn child(&self, index: usize) -> NodeId {
        self.children[index]
    }

    pub(crate) fn children(&self) -> &[NodeId] {
        &self.children
    }

    pub(crate) fn parent(&self) -> Option<NodeId> {
        self.parent
    }

    pub(crate) fn set_parent(&mut self, parent: Option<NodeId>) {
        self.parent = parent;
    }

    /// Removes and returns the item at `index`, shifting the rest left.
    pub(crate) fn remove_item(&mut self, index: usize) -> T {
        self.items.remove(index)
    }

    /// Overwrites the item at `index`, returning the previous occupant.
    pub(crate) fn replace_item(&mut self, index: usize, item: T) -> T {
        core::mem::replace(&mut self.items[index], item)
    }

    pub(crate) fn push_item(&mut self, item: T) {
        self.items.push(item);
    }

    pub(crate) fn push_front_item(&mut self, item: T) {
        self.items.insert(0, item);
    }

    pub(crate) fn pop_item(&mut self) -> Option<T> {
        self.items.pop()
    }

    pub(crate) fn pop_front_item(&mut self) -> Option<T> {
        if self.items.is_empty() {
            None
        } else {
            Some(self.items.remove(0))
        }
    }

    /// Linear scan for a child link. Only used when the child holds no item
    /// to binary-search the separators with.
    pub(crate) fn index_of_child(&self, child: NodeId) -> Option<usize> {
        self.children.iter().position(|&c| c == child)
    }

    pub(crate) fn insert_child(&mut self, index: usize, child: NodeId) {
        self.children.insert(index, child);
    }

    pub(crate) fn remove_child(&mut self, index: usize) -> NodeId {
        self.children.remove(index)
    }

    pub(crate) fn push_child(&mut self, child: NodeId) {
        self.children.push(child);
    }

    pub(crate) fn push_front_child(&mut self, child: NodeId) {
        self.children.insert(0, child);
    }

    pub(crate) fn pop_child(&mut self) -> Option<NodeId> {
        self.children.pop()
    }

    pub(crate) fn pop_front_child(&mut self) -> Option<NodeId> {
        if self.children.is_empty() {
            None
        } else {
            Some(self.children.remove(0))
        }
    }

    /// Splits off the upper half for an overflow at `mid`. The returned node
    /// takes `items[mid + 1..]` (and `children[mid + 1..]` when internal);
    /// the promoted separator `items[mid]` is returned alongside it. The
    /// caller reparents the moved children and splices the new node in.
    pub(crate) fn split_at(&mut self, mid: usize) -> (T, Node<T>) {
        let items: ItemSeq<T> = self.items.drain(mid + 1..).collect();
        let promoted = self.items.pop().expect("`Node::split_at()` - `mid` is out of range!");
        let children: ChildSeq = if self.children.is_empty() {
            ChildSeq::new()
        } else {
            self.children.drain(mid + 1..).collect()
        };
        (
            promoted,
            Node {
                items,
                children,
                parent: self.parent,
            },
        )
    }

    /// Fuses a right sibling and the separator between them into this node.
    /// The caller reparents the adopted children and detaches `right` from
    /// the shared parent.
    pub(crate) fn absorb_right(&mut self, separator: T, right: Node<T>) {
        self.items.push(separator);
        self.items.extend(right.items);
        self.children.extend(right.children);
    }
}

impl<T: Item> Node<T> {
    /// Binary search for the smallest index `i` with `item < items[i]`;
    /// `item_count()` if there is none. This is both the descent slot and
    /// the ordered insertion point.
    #[inline]
    pub(crate) fn locate(&self, item: &T) -> usize {
        self.items.partition_point(|probe| !item.less(probe))
    }

    /// Derived-equality probe at `index`; false when out of range.
    #[inline]
    pub(crate) fn match_at(&self, item: &T, index: usize) -> bool {
        self.items.get(index).is_some_and(|probe| same(item, probe))
    }

    /// Ordered insert, shifting the tail right. Returns the index used.
    pub(crate) fn insert_item(&mut self, item: T) -> usize {
        let index = self.locate(&item);
        self.items.insert(index, item);
        index
    }
}
