//! An in-memory ordered-key index built on a generic B-Tree of
//! configurable order.
//!
//! This crate provides [`BTree`], a dictionary-like ordered collection with
//! a caller-chosen branching factor:
//!
//! - [`insert`](BTree::insert) / [`remove`](BTree::remove) /
//!   [`search`](BTree::search) - logarithmic point operations; duplicate
//!   inserts and absent removes are silent no-ops surfaced as `bool`.
//! - [`cursor`](BTree::cursor) / [`cursor_rev`](BTree::cursor_rev) -
//!   bidirectional in-order traversal through a stateful [`Cursor`].
//! - [`bulkload`](BTree::bulkload) - one-pass construction from a sorted
//!   sequence.
//! - [`merge`](BTree::merge) - union of two trees of equal order.
//!
//! Elements only need the [`Item`] capability, a single strict-weak
//! less-than relation; equality is derived from it and never declared, so
//! items may carry payload fields that play no part in the ordering.
//!
//! # Example
//!
//! ```
//! use bonsai_tree::BTree;
//!
//! let mut tree = BTree::new(3);
//! for key in [5, 3, 8, 1, 4] {
//!     tree.insert(key);
//! }
//!
//! assert_eq!(tree.search(&4), Ok(&4));
//! let sorted: Vec<i32> = tree.cursor().copied().collect();
//! assert_eq!(sorted, [1, 3, 4, 5, 8]);
//! ```
//!
//! # Implementation
//!
//! Nodes live in a slot arena and link to children and parents through
//! niche-optimized integer handles, so the parent back-references the
//! rebalancing and cursor logic rely on never form ownership cycles.
//! Dropping the tree releases every node and item. The crate is `no_std`
//! and only requires `alloc`.

#![no_std]
// These forbid rules and lint groups are meant to be very restrictive.
#![forbid(unsafe_code)]
#![forbid(keyword_idents)]
#![forbid(non_ascii_idents)]
#![forbid(unreachable_pub)]
#![warn(clippy::all)]
#![warn(clippy::cargo)]
#![warn(clippy::pedantic)]

extern crate alloc;

mod btree;
mod cursor;
mod error;
mod item;
mod raw;

pub use btree::BTree;
pub use cursor::Cursor;
pub use error::{Result, TreeError};
pub use item::Item;
