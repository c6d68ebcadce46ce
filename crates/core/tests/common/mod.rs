use docscope_core::audit::{AuditReport, Violation};
use docscope_core::model::{Comment, SymbolId, SymbolKind, SymbolNode, SymbolTree, Visibility};

#[allow(dead_code)]
pub fn documented(kind: SymbolKind, name: &str) -> SymbolNode {
    SymbolNode::new(kind, name).with_comment(Comment::new(format!("{} docs", name), ""))
}

#[allow(dead_code)]
pub fn undocumented(kind: SymbolKind, name: &str) -> SymbolNode {
    SymbolNode::new(kind, name)
}

#[allow(dead_code)]
pub fn empty_doc(kind: SymbolKind, name: &str) -> SymbolNode {
    SymbolNode::new(kind, name).with_comment(Comment::new("", ""))
}

#[allow(dead_code)]
pub fn with_vis(node: SymbolNode, visibility: Visibility) -> SymbolNode {
    node.with_visibility(visibility)
}

/// Root Module "foo" (documented) -> Class "Bar" (undocumented) -> Method "baz" (undocumented).
#[allow(dead_code)]
pub fn foo_bar_baz() -> SymbolTree {
    let mut tree = SymbolTree::new(documented(SymbolKind::Module, "foo"));
    let bar = tree
        .add_child(tree.root(), undocumented(SymbolKind::Class, "Bar"))
        .expect("add Bar");
    tree.add_child(bar, undocumented(SymbolKind::Method, "baz"))
        .expect("add baz");
    tree
}

#[allow(dead_code)]
pub fn find(tree: &SymbolTree, qualified_name: &str) -> SymbolId {
    tree.preorder()
        .map(|(id, _)| id)
        .find(|id| tree.qualified_name(*id) == qualified_name)
        .unwrap_or_else(|| panic!("no symbol named {}", qualified_name))
}

#[allow(dead_code)]
pub fn flagged<'a>(report: &'a AuditReport, qualified_name: &str) -> Option<&'a Violation> {
    report
        .violations
        .iter()
        .find(|v| v.qualified_name == qualified_name)
}
