use super::symbol::{SymbolId, SymbolNode};
use crate::error::{ApiError, ApiResult};

/// Arena holding a single-rooted symbol tree.
///
/// The arena owns every node; parent links are plain ids and are only used
/// for lookups. Nodes can be appended but never removed or re-parented, so
/// each non-root node appears exactly once in its parent's children.
#[derive(Debug, Clone)]
pub struct SymbolTree {
    nodes: Vec<SymbolNode>,
}

impl SymbolTree {
    pub fn new(mut root: SymbolNode) -> Self {
        root.parent = None;
        root.children.clear();
        Self { nodes: vec![root] }
    }

    pub fn root(&self) -> SymbolId {
        SymbolId(0)
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Append `node` as the last child of `parent`.
    pub fn add_child(&mut self, parent: SymbolId, mut node: SymbolNode) -> ApiResult<SymbolId> {
        if parent.index() >= self.nodes.len() {
            return Err(ApiError::NotFound(format!("parent symbol #{}", parent.0)));
        }
        let id = SymbolId(self.nodes.len() as u32);
        node.parent = Some(parent);
        node.children.clear();
        self.nodes.push(node);
        self.nodes[parent.index()].children.push(id);
        Ok(id)
    }

    pub fn get(&self, id: SymbolId) -> Option<&SymbolNode> {
        self.nodes.get(id.index())
    }

    pub fn parent(&self, id: SymbolId) -> Option<SymbolId> {
        self.get(id).and_then(|n| n.parent)
    }

    pub fn parent_node(&self, id: SymbolId) -> Option<&SymbolNode> {
        self.parent(id).and_then(|p| self.get(p))
    }

    /// The node itself followed by each ancestor up to the root.
    pub fn ancestors(&self, id: SymbolId) -> impl Iterator<Item = SymbolId> + '_ {
        std::iter::successors(self.get(id).map(|_| id), move |current| {
            self.parent(*current)
        })
    }

    /// `::`-joined names from the root down to `id`.
    pub fn qualified_name(&self, id: SymbolId) -> String {
        let mut names: Vec<&str> = self
            .ancestors(id)
            .filter_map(|a| self.get(a))
            .map(|n| n.name.as_str())
            .collect();
        names.reverse();
        names.join("::")
    }

    /// Depth-first pre-order walk from the root, children in stored order.
    pub fn preorder(&self) -> Preorder<'_> {
        Preorder {
            tree: self,
            stack: vec![self.root()],
        }
    }
}

pub struct Preorder<'a> {
    tree: &'a SymbolTree,
    stack: Vec<SymbolId>,
}

impl<'a> Iterator for Preorder<'a> {
    type Item = (SymbolId, &'a SymbolNode);

    fn next(&mut self) -> Option<Self::Item> {
        let id = self.stack.pop()?;
        let node = self.tree.get(id)?;
        self.stack.extend(node.children.iter().rev().copied());
        Some((id, node))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::SymbolKind;

    fn sample() -> SymbolTree {
        let mut tree = SymbolTree::new(SymbolNode::new(SymbolKind::Module, "foo"));
        let root = tree.root();
        let class = tree
            .add_child(root, SymbolNode::new(SymbolKind::Class, "Bar"))
            .unwrap();
        tree.add_child(class, SymbolNode::new(SymbolKind::Method, "baz"))
            .unwrap();
        tree.add_child(root, SymbolNode::new(SymbolKind::Function, "qux"))
            .unwrap();
        tree
    }

    #[test]
    fn test_preorder_visits_each_node_once_in_order() {
        let tree = sample();
        let names: Vec<_> = tree.preorder().map(|(_, n)| n.name.clone()).collect();
        assert_eq!(names, vec!["foo", "Bar", "baz", "qux"]);
    }

    #[test]
    fn test_qualified_name_joins_from_root() {
        let tree = sample();
        let baz = tree
            .preorder()
            .find(|(_, n)| n.name == "baz")
            .map(|(id, _)| id)
            .unwrap();
        assert_eq!(tree.qualified_name(baz), "foo::Bar::baz");
        assert_eq!(tree.qualified_name(tree.root()), "foo");
    }

    #[test]
    fn test_add_child_rejects_unknown_parent() {
        let mut tree = sample();
        let err = tree
            .add_child(SymbolId(42), SymbolNode::new(SymbolKind::Class, "X"))
            .unwrap_err();
        assert!(matches!(err, ApiError::NotFound(_)));
    }

    #[test]
    fn test_children_are_linked_to_parent() {
        let tree = sample();
        for (id, node) in tree.preorder() {
            for child in node.children() {
                assert_eq!(tree.parent(*child), Some(id));
            }
        }
        assert_eq!(tree.parent(tree.root()), None);
    }
}
