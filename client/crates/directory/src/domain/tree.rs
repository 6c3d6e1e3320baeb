//! Menu Tree
//!
//! The backend stores menu nodes flat, linked by `parent` back-references.
//! The tree is built here, once, with cycle detection at construction:
//! cyclic input is rejected rather than silently ignored, because a cycle
//! would otherwise render an unbounded sidebar. A `parent` id that matches
//! no node demotes that child to root level with a warning, which is how
//! the original console renders orphans.

use std::collections::HashMap;

use kernel::id::MenuId;

use crate::domain::entities::MenuNode;
use crate::error::{DirectoryError, DirectoryResult};

/// A menu node with its resolved children, siblings sorted by `order`
#[derive(Debug, Clone, PartialEq)]
pub struct MenuTreeNode {
    pub node: MenuNode,
    pub children: Vec<MenuTreeNode>,
}

/// The navigable menu hierarchy
#[derive(Debug, Clone, PartialEq, Default)]
pub struct MenuTree {
    pub roots: Vec<MenuTreeNode>,
}

impl MenuTree {
    /// Build the tree from a flat node list.
    ///
    /// Rejects duplicate ids and parent cycles; inactive nodes are kept
    /// (filtering is the caller's choice via `includeInactive` upstream).
    pub fn build(nodes: Vec<MenuNode>) -> DirectoryResult<Self> {
        let mut index: HashMap<MenuId, usize> = HashMap::with_capacity(nodes.len());
        for (i, node) in nodes.iter().enumerate() {
            if index.insert(node.id.clone(), i).is_some() {
                return Err(DirectoryError::DuplicateMenuId(node.id.clone()));
            }
        }

        // Walk each parent chain; a chain longer than the node count can
        // only mean a cycle.
        for node in &nodes {
            let mut hops = 0usize;
            let mut current = node.parent.as_ref();
            while let Some(parent_id) = current {
                hops += 1;
                if hops > nodes.len() {
                    return Err(DirectoryError::MenuCycle(node.id.clone()));
                }
                current = index
                    .get(parent_id)
                    .and_then(|&i| nodes[i].parent.as_ref());
            }
        }

        let mut children_of: HashMap<MenuId, Vec<MenuNode>> = HashMap::new();
        let mut roots: Vec<MenuNode> = Vec::new();

        for node in nodes {
            match &node.parent {
                Some(parent_id) if index.contains_key(parent_id) => {
                    children_of
                        .entry(parent_id.clone())
                        .or_default()
                        .push(node);
                }
                Some(parent_id) => {
                    tracing::warn!(
                        menu_id = %node.id,
                        parent_id = %parent_id,
                        "Menu parent not found, node promoted to root"
                    );
                    roots.push(node);
                }
                None => roots.push(node),
            }
        }

        Ok(Self {
            roots: Self::attach(roots, &mut children_of),
        })
    }

    fn attach(
        mut level: Vec<MenuNode>,
        children_of: &mut HashMap<MenuId, Vec<MenuNode>>,
    ) -> Vec<MenuTreeNode> {
        level.sort_by_key(|n| n.order);
        level
            .into_iter()
            .map(|node| {
                let children = children_of.remove(&node.id).unwrap_or_default();
                MenuTreeNode {
                    children: Self::attach(children, children_of),
                    node,
                }
            })
            .collect()
    }

    /// Total number of nodes in the tree
    pub fn len(&self) -> usize {
        fn count(nodes: &[MenuTreeNode]) -> usize {
            nodes.iter().map(|n| 1 + count(&n.children)).sum()
        }
        count(&self.roots)
    }

    pub fn is_empty(&self) -> bool {
        self.roots.is_empty()
    }

    /// Depth-first iteration over all nodes
    pub fn iter(&self) -> impl Iterator<Item = &MenuNode> {
        fn walk<'a>(nodes: &'a [MenuTreeNode], out: &mut Vec<&'a MenuNode>) {
            for n in nodes {
                out.push(&n.node);
                walk(&n.children, out);
            }
        }
        let mut out = Vec::with_capacity(self.len());
        walk(&self.roots, &mut out);
        out.into_iter()
    }

    /// Whether any node navigates to `path`
    pub fn contains_path(&self, path: &str) -> bool {
        self.iter().any(|n| n.path.as_deref() == Some(path))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use kernel::id::{ApplicationId, MenuId};

    fn node(id: &str, parent: Option<&str>, order: i32) -> MenuNode {
        MenuNode {
            id: MenuId::from_raw(id),
            application: ApplicationId::from_raw("1"),
            label: format!("Node {id}"),
            path: Some(format!("/{id}")),
            icon: "folder".to_string(),
            order,
            parent: parent.map(MenuId::from_raw),
            is_active: true,
        }
    }

    #[test]
    fn test_build_groups_children_under_parents() {
        let tree = MenuTree::build(vec![
            node("1", None, 1),
            node("2", None, 2),
            node("3", Some("2"), 1),
            node("4", Some("2"), 2),
        ])
        .unwrap();

        assert_eq!(tree.roots.len(), 2);
        assert_eq!(tree.roots[1].children.len(), 2);
        assert_eq!(tree.len(), 4);
    }

    #[test]
    fn test_siblings_sorted_by_order() {
        let tree = MenuTree::build(vec![
            node("b", None, 2),
            node("a", None, 1),
            node("z", Some("a"), 9),
            node("y", Some("a"), 3),
        ])
        .unwrap();

        assert_eq!(tree.roots[0].node.id.as_str(), "a");
        assert_eq!(tree.roots[0].children[0].node.id.as_str(), "y");
    }

    #[test]
    fn test_cycle_rejected() {
        let err = MenuTree::build(vec![
            node("1", Some("2"), 1),
            node("2", Some("1"), 2),
        ])
        .unwrap_err();

        assert!(matches!(err, DirectoryError::MenuCycle(_)));
    }

    #[test]
    fn test_self_cycle_rejected() {
        let err = MenuTree::build(vec![node("1", Some("1"), 1)]).unwrap_err();
        assert!(matches!(err, DirectoryError::MenuCycle(_)));
    }

    #[test]
    fn test_duplicate_id_rejected() {
        let err = MenuTree::build(vec![node("1", None, 1), node("1", None, 2)]).unwrap_err();
        assert!(matches!(err, DirectoryError::DuplicateMenuId(_)));
    }

    #[test]
    fn test_orphan_parent_promoted_to_root() {
        let tree = MenuTree::build(vec![node("1", None, 1), node("2", Some("missing"), 2)])
            .unwrap();
        assert_eq!(tree.roots.len(), 2);
    }

    #[test]
    fn test_contains_path() {
        let tree = MenuTree::build(vec![node("1", None, 1)]).unwrap();
        assert!(tree.contains_path("/1"));
        assert!(!tree.contains_path("/dashboard"));
    }
}
