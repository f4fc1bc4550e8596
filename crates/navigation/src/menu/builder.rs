//! Menu tree builder.
//!
//! Assembles navigation trees from flat menu-link records (the shape menu
//! storage and plugin menu sources provide) and sets selection markers
//! from the current request path.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};
use uuid::Uuid;

use super::node::{NavNode, NodeMarker};

/// Flat menu link record.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NavLink {
    /// Unique identifier.
    pub id: Uuid,

    /// Link destination path.
    pub path: String,

    /// Display title.
    pub title: String,

    /// Optional parent link for hierarchy.
    #[serde(default)]
    pub parent_id: Option<Uuid>,

    /// Sort weight (lower = higher priority).
    #[serde(default)]
    pub weight: i32,

    /// Whether the link is hidden from rendering.
    #[serde(default)]
    pub hidden: bool,
}

/// Parse plugin-provided menu sources.
///
/// Each element is a `(provider, json_array)` pair. Arrays that fail to
/// parse are logged and skipped so one broken provider cannot take down
/// the whole menu.
pub fn links_from_sources(sources: Vec<(String, String)>) -> Vec<NavLink> {
    let mut links = Vec::new();

    for (provider, json) in sources {
        match serde_json::from_str::<Vec<NavLink>>(&json) {
            Ok(mut parsed) => links.append(&mut parsed),
            Err(e) => {
                warn!(
                    provider = %provider,
                    error = %e,
                    "failed to parse menu source"
                );
            }
        }
    }

    links
}

/// Build a navigation tree from flat links.
///
/// Hidden links are skipped. Siblings are ordered by weight, then title
/// (the storage ordering). The node whose path equals `current_path` is
/// marked [`NodeMarker::Selected`] and the chain above it
/// [`NodeMarker::Ancestor`]; everything else stays plain.
///
/// Links must form a forest: cycles are not detected, and links whose
/// parent is absent from the input are dropped.
pub fn build_tree(links: &[NavLink], current_path: &str) -> Vec<NavNode> {
    let mut by_parent: HashMap<Option<Uuid>, Vec<&NavLink>> = HashMap::new();
    for link in links.iter().filter(|link| !link.hidden) {
        by_parent.entry(link.parent_id).or_default().push(link);
    }
    for siblings in by_parent.values_mut() {
        siblings.sort_by(|a, b| a.weight.cmp(&b.weight).then_with(|| a.title.cmp(&b.title)));
    }

    let mut roots = build_level(&by_parent, None, 0);
    mark_selection(&mut roots, current_path);

    debug!(
        links = links.len(),
        roots = roots.len(),
        "built navigation tree"
    );
    roots
}

fn build_level(
    by_parent: &HashMap<Option<Uuid>, Vec<&NavLink>>,
    parent: Option<Uuid>,
    level: u32,
) -> Vec<NavNode> {
    let Some(siblings) = by_parent.get(&parent) else {
        return Vec::new();
    };

    siblings
        .iter()
        .map(|link| NavNode {
            id: link.id,
            title: link.title.clone(),
            path: link.path.clone(),
            level,
            marker: NodeMarker::Plain,
            children: build_level(by_parent, Some(link.id), level + 1),
        })
        .collect()
}

/// Mark the node matching `current_path` as selected and the chain above
/// it as ancestors. Returns whether the selection lives in `nodes` or below.
fn mark_selection(nodes: &mut [NavNode], current_path: &str) -> bool {
    let mut found = false;
    for node in nodes.iter_mut() {
        let below = mark_selection(&mut node.children, current_path);
        if node.path == current_path {
            node.marker = NodeMarker::Selected;
            found = true;
        } else if below {
            node.marker = NodeMarker::Ancestor;
        }
        found = found || below;
    }
    found
}
