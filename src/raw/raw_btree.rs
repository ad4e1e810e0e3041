use super::arena::{Arena, NodeId};
use super::node::Node;
use crate::item::Item;

/// The balanced-tree engine backing `BTree`.
///
/// All nodes live in the arena; the tree itself is the configured order,
/// the root handle, and a maintained element count. A freshly constructed
/// tree is a single empty leaf root.
pub(crate) struct RawBTree<T> {
    nodes: Arena<Node<T>>,
    root: NodeId,
    order: usize,
    len: usize,
}

impl<T> RawBTree<T> {
    pub(crate) fn new(order: usize) -> Self {
        let mut nodes = Arena::new();
        let root = nodes.alloc(Node::new_leaf());
        Self {
            nodes,
            root,
            order,
            len: 0,
        }
    }

    pub(crate) const fn order(&self) -> usize {
        self.order
    }

    pub(crate) const fn len(&self) -> usize {
        self.len
    }

    pub(crate) fn root(&self) -> NodeId {
        self.root
    }

    #[inline]
    pub(crate) fn node(&self, id: NodeId) -> &Node<T> {
        self.nodes.get(id)
    }

    /// Depth of the (uniformly deep) leaves; a root-only tree has height 0.
    pub(crate) fn height(&self) -> usize {
        let mut height = 0;
        let mut curr = self.root;
        while let Some(&child) = self.nodes.get(curr).children().first() {
            height += 1;
            curr = child;
        }
        height
    }

    /// The leftmost leaf under `from`.
    pub(crate) fn min_leaf(&self, from: NodeId) -> NodeId {
        let mut curr = from;
        while let Some(&child) = self.nodes.get(curr).children().first() {
            curr = child;
        }
        curr
    }

    /// The rightmost leaf under `from`.
    pub(crate) fn max_leaf(&self, from: NodeId) -> NodeId {
        let mut curr = from;
        while let Some(&child) = self.nodes.get(curr).children().last() {
            curr = child;
        }
        curr
    }

    fn reparent_children(&mut self, id: NodeId) {
        for index in 0..self.nodes.get(id).child_count() {
            let child = self.nodes.get(id).child(index);
            self.nodes.get_mut(child).set_parent(Some(id));
        }
    }
}

impl<T: Item> RawBTree<T> {
    /// Locates the node and intra-node index holding an item equal to
    /// `item`, or `None` if the tree has no such item.
    pub(crate) fn search(&self, item: &T) -> Option<(NodeId, usize)> {
        let mut curr = self.root;
        loop {
            let node = self.nodes.get(curr);
            let index = node.locate(item);
            if index > 0 && node.match_at(item, index - 1) {
                return Some((curr, index - 1));
            }
            if index >= node.child_count() {
                return None;
            }
            curr = node.child(index);
        }
    }

    pub(crate) fn get(&self, item: &T) -> Option<&T> {
        let (holder, index) = self.search(item)?;
        Some(self.nodes.get(holder).item(index))
    }

    /// Inserts `item` unless an equal item is already present. Returns
    /// whether the tree changed.
    pub(crate) fn insert(&mut self, item: T) -> bool {
        let mut curr = self.root;
        loop {
            let node = self.nodes.get(curr);
            let index = node.locate(&item);
            if index > 0 && node.match_at(&item, index - 1) {
                return false;
            }
            if index >= node.child_count() {
                break;
            }
            curr = node.child(index);
        }

        self.split_insert(curr, item);
        self.len += 1;
        true
    }

    /// Ordered insert into `target`, then the upward cascade of splits while
    /// nodes are over-full: promote the middle item, hang the upper half off
    /// a new right sibling, and repeat at the parent. A splitting root is
    /// replaced by a fresh one-separator root, growing the tree by a level.
    fn split_insert(&mut self, mut target: NodeId, mut item: T) {
        loop {
            let node = self.nodes.get_mut(target);
            node.insert_item(item);
            if node.item_count() < self.order {
                return;
            }

            let mid = node.item_count() / 2;
            let (promoted, right) = node.split_at(mid);
            let parent = node.parent();
            let right_id = self.nodes.alloc(right);
            self.reparent_children(right_id);

            match parent {
                None => {
                    let root_id = self.nodes.alloc(Node::new_root(promoted, target, right_id));
                    self.reparent_children(root_id);
                    self.root = root_id;
                    return;
                }
                Some(parent_id) => {
                    // The new sibling sits immediately right of the slot the
                    // promoted separator will occupy.
                    let slot = self.nodes.get(parent_id).locate(&promoted);
                    self.nodes.get_mut(parent_id).insert_child(slot + 1, right_id);
                    target = parent_id;
                    item = promoted;
                }
            }
        }
    }

    /// Removes the item equal to `*item`, rebalancing as needed. Returns the
    /// removed item, or `None` if the tree held no equal item.
    pub(crate) fn remove(&mut self, item: &T) -> Option<T> {
        let (holder, index) = self.search(item)?;

        let affected;
        let removed;
        if self.nodes.get(holder).is_leaf() {
            removed = Some(self.nodes.get_mut(holder).remove_item(index));
            affected = holder;
        } else {
            // Overwrite the separator with its in-order predecessor, taken
            // from the rightmost leaf of the left subtree.
            let pred_leaf = self.max_leaf(self.nodes.get(holder).child(index));
            removed = match self.nodes.get_mut(pred_leaf).pop_item() {
                Some(predecessor) => Some(self.nodes.get_mut(holder).replace_item(index, predecessor)),
                // At order 2 a split can leave the predecessor leaf empty;
                // the separator stays put and only the rebalance below runs.
                None => None,
            };
            affected = pred_leaf;
        }

        if removed.is_some() {
            self.len -= 1;
        }

        // The affected node is a leaf, so it only counts as unbalanced when
        // it emptied out; the root is exempt.
        let node = self.nodes.get(affected);
        if node.item_count() == 0 && node.parent().is_some() {
            self.rebalance(affected, 1);
        }

        removed
    }

    /// Index of `child` within its parent's child list. An item-less child
    /// (transient during rebalancing) falls back to a linear scan; otherwise
    /// its first item binary-searches the parent's separators.
    pub(crate) fn child_slot(&self, parent: NodeId, child: NodeId) -> usize {
        match self.nodes.get(child).first_item() {
            Some(first) => self.nodes.get(parent).locate(first),
            None => self
                .nodes
                .get(parent)
                .index_of_child(child)
                .expect("`RawBTree::child_slot()` - `child` is not under `parent`!"),
        }
    }

    /// Restores the fill invariants around an under-full node: rotate an
    /// item in from a sibling that can spare one, or merge with a sibling
    /// and cascade. `min_items` is 1 for the emptied leaf that starts the
    /// cascade and the structural floor `ceil(order / 2) - 1` above it.
    fn rebalance(&mut self, n: NodeId, min_items: usize) {
        // The root plays by its own rules; contraction handles it below.
        let Some(parent) = self.nodes.get(n).parent() else {
            return;
        };
        let slot = self.child_slot(parent, n);

        let parent_node = self.nodes.get(parent);
        let left_sib = (slot > 0).then(|| parent_node.child(slot - 1));
        let right_sib = (slot + 1 < parent_node.child_count()).then(|| parent_node.child(slot + 1));

        // Rotate left: right separator comes down, right sibling's first
        // item goes up, and its first child (if any) comes along.
        if let Some(sib) = right_sib {
            if self.nodes.get(sib).item_count() > min_items {
                let first = self.nodes.get_mut(sib).pop_front_item().expect("sibling can lend");
                let separator = self.nodes.get_mut(parent).replace_item(slot, first);
                self.nodes.get_mut(n).push_item(separator);
                if let Some(child) = self.nodes.get_mut(sib).pop_front_child() {
                    self.nodes.get_mut(child).set_parent(Some(n));
                    self.nodes.get_mut(n).push_child(child);
                }
                return;
            }
        }

        // Rotate right: mirror image with the left sibling's last item.
        if let Some(sib) = left_sib {
            if self.nodes.get(sib).item_count() > min_items {
                let last = self.nodes.get_mut(sib).pop_item().expect("sibling can lend");
                let separator = self.nodes.get_mut(parent).replace_item(slot - 1, last);
                self.nodes.get_mut(n).push_front_item(separator);
                if let Some(child) = self.nodes.get_mut(sib).pop_child() {
                    self.nodes.get_mut(child).set_parent(Some(n));
                    self.nodes.get_mut(n).push_front_child(child);
                }
                return;
            }
        }

        // Neither sibling can lend: fuse with one (left preferred) around
        // the separator between them.
        let (left, right, sep_slot) = match left_sib {
            Some(sib) => (sib, n, slot - 1),
            None => (
                n,
                right_sib.expect("`RawBTree::rebalance()` - a non-root node must have a sibling!"),
                slot,
            ),
        };
        let separator = self.nodes.get_mut(parent).remove_item(sep_slot);
        let right_node = self.nodes.take(right);
        for &child in right_node.children() {
            self.nodes.get_mut(child).set_parent(Some(left));
        }
        self.nodes.get_mut(left).absorb_right(separator, right_node);
        self.nodes.get_mut(parent).remove_child(sep_slot + 1);

        // The merged node becomes the root when the parent was the root and
        // just gave up its last separator.
        let parent_node = self.nodes.get(parent);
        if parent_node.parent().is_none() && parent_node.item_count() == 0 {
            self.nodes.free(parent);
            self.nodes.get_mut(left).set_parent(None);
            self.root = left;
            return;
        }

        // From here up the floor is the structural minimum for non-root
        // internal nodes.
        let floor = self.order.div_ceil(2) - 1;
        if self.nodes.get(parent).item_count() < floor {
            self.rebalance(parent, floor);
        }
    }

    /// Builds a tree from an ascending, duplicate-free sequence by feeding
    /// the split engine at the rightmost leaf. The rightmost position is
    /// re-derived from the root after each step because a cascading split
    /// can hang the new rightmost leaf under a different parent.
    pub(crate) fn bulkload<I>(order: usize, items: I) -> Self
    where
        I: IntoIterator<Item = T>,
    {
        let mut tree = Self::new(order);
        let mut rightmost = tree.root;
        for item in items {
            tree.split_insert(rightmost, item);
            tree.len += 1;
            rightmost = tree.max_leaf(tree.root);
        }
        tree
    }
}
