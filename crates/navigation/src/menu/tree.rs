//! Tree post-processing utilities.
//!
//! Operate on trees produced by the builder (or by navigation extenders
//! contributing their own subtrees). All walks are bounded: trees are
//! finite and acyclic by construction.

use super::node::{NavNode, NodeMarker};

/// Mark every node in `nodes`, and everything below, as a descendant.
///
/// Applied to the subtree under the selected node so templates can style
/// it as part of the active trail.
pub fn mark_descendants(nodes: &mut [NavNode]) {
    for node in nodes {
        node.marker = NodeMarker::Descendant;
        mark_descendants(&mut node.children);
    }
}

/// Return the nodes at the requested depth, discarding shallower levels.
///
/// If the first node already sits at `level`, the input is returned
/// unchanged. Siblings in one sequence are assumed to share a level, so
/// checking the first suffices; behavior with mixed sibling levels is
/// unspecified. Returns an empty vector when no node at `level` exists.
pub fn cut_levels(nodes: Vec<NavNode>, level: u32) -> Vec<NavNode> {
    if let Some(first) = nodes.first()
        && first.level == level
    {
        return nodes;
    }
    nodes
        .into_iter()
        .flat_map(|node| cut_levels(node.children, level))
        .collect()
}

/// Find the selected node, searching depth-first through ancestor chains.
///
/// Nodes that are neither selected nor ancestors terminate their branch:
/// the selection is only reachable along the marked trail.
pub fn find_selected(nodes: &[NavNode]) -> Option<&NavNode> {
    for node in nodes {
        match node.marker {
            NodeMarker::Selected => return Some(node),
            NodeMarker::Ancestor => {
                if let Some(found) = find_selected(&node.children) {
                    return Some(found);
                }
            }
            NodeMarker::Plain | NodeMarker::Descendant => {}
        }
    }
    None
}
