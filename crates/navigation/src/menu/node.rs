//! Navigation node model.

use serde::Serialize;
use uuid::Uuid;

/// Selection state of a navigation node.
///
/// Assigned by the tree builder from the current request path, and by
/// [`mark_descendants`](super::mark_descendants) for subtrees below the
/// selection. Template code reads it to style the active trail.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum NodeMarker {
    /// Not on the active trail.
    #[default]
    Plain,

    /// The node matching the current request path.
    Selected,

    /// A node on the chain above the selected node.
    Ancestor,

    /// A node below the selected node.
    Descendant,
}

/// A node in a built navigation tree.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NavNode {
    /// Menu link this node was built from.
    pub id: Uuid,

    /// Display title.
    pub title: String,

    /// Link destination path.
    pub path: String,

    /// Depth in the tree (roots are level 0).
    pub level: u32,

    /// Selection marker.
    pub marker: NodeMarker,

    /// Child nodes in display order.
    pub children: Vec<NavNode>,
}

impl NavNode {
    /// Create a leaf node with a fresh id and no marker.
    pub fn new(title: impl Into<String>, path: impl Into<String>, level: u32) -> Self {
        Self {
            id: Uuid::now_v7(),
            title: title.into(),
            path: path.into(),
            level,
            marker: NodeMarker::Plain,
            children: Vec::new(),
        }
    }
}
