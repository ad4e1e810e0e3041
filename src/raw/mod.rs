mod arena;
mod node;
mod raw_btree;

pub(crate) use arena::NodeId;
pub(crate) use raw_btree::RawBTree;
