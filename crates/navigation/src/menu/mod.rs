//! Menu tree construction and post-processing.
//!
//! The builder assembles [`NavNode`] trees from flat menu-link records and
//! marks the active trail from the current request path. The tree utilities
//! reshape built trees for rendering: cutting away levels above a starting
//! depth, marking whole subtrees as descendants, and locating the selected
//! node through its ancestor chain.

mod builder;
mod node;
mod tree;

pub use builder::{NavLink, build_tree, links_from_sources};
pub use node::{NavNode, NodeMarker};
pub use tree::{cut_levels, find_selected, mark_descendants};
