//! Documentation auditor.
//!
//! Walks a [`SymbolTree`] once in pre-order and collects a [`Violation`] for
//! every symbol that is inside the configured scope, not excluded by the
//! [`ExclusionTable`], and lacks a non-empty documentation comment.

pub mod chain;
pub mod exclusion;
pub mod violation;

pub use chain::{KindChain, KindPattern};
pub use exclusion::{ExclusionTable, ExclusionTier};
pub use violation::{DocDefect, Violation};

use crate::model::{ScopeLevel, SymbolId, SymbolKind, SymbolTree, Visibility};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct AuditOptions {
    pub verbose: bool,
}

#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct AuditReport {
    pub violation_count: usize,
    pub violations: Vec<Violation>,
}

impl AuditReport {
    fn from_violations(violations: Vec<Violation>) -> Self {
        Self {
            violation_count: violations.len(),
            violations,
        }
    }

    pub fn is_clean(&self) -> bool {
        self.violation_count == 0
    }

    /// Violation counts per kind, in order of first appearance.
    pub fn by_kind(&self) -> Vec<(String, usize)> {
        let mut counts: Vec<(String, usize)> = Vec::new();
        for v in &self.violations {
            match counts.iter_mut().find(|(kind, _)| *kind == v.kind) {
                Some((_, n)) => *n += 1,
                None => counts.push((v.kind.clone(), 1)),
            }
        }
        counts
    }
}

/// Visibility a symbol is judged by.
///
/// Call signatures take their owner's visibility and parameters take the
/// visibility of the member owning their signature.
pub fn effective_visibility(tree: &SymbolTree, id: SymbolId) -> Visibility {
    let Some(node) = tree.get(id) else {
        return Visibility::default();
    };
    let owner = match node.kind {
        SymbolKind::CallSignature => tree.parent(id),
        SymbolKind::Parameter => tree.parent(id).and_then(|p| tree.parent(p)),
        _ => None,
    };
    owner
        .and_then(|o| tree.get(o))
        .map(|o| o.visibility)
        .unwrap_or(node.visibility)
}

/// What happened to a single symbol during the audit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Verdict {
    /// The symbol has no usable kind chain.
    NoChain,
    /// The project root itself, which is never audited.
    ProjectRoot,
    Excluded(ExclusionTier),
    OutOfScope,
    Documented,
    Violation(Box<Violation>),
}

#[derive(Debug, Clone)]
pub struct Auditor {
    scope: ScopeLevel,
    exclusions: ExclusionTable,
    options: AuditOptions,
}

impl Auditor {
    pub fn new(scope: ScopeLevel) -> Self {
        Self {
            scope,
            exclusions: ExclusionTable::builtin(),
            options: AuditOptions::default(),
        }
    }

    pub fn with_exclusions(mut self, exclusions: ExclusionTable) -> Self {
        self.exclusions = exclusions;
        self
    }

    pub fn with_options(mut self, options: AuditOptions) -> Self {
        self.options = options;
        self
    }

    pub fn scope(&self) -> ScopeLevel {
        self.scope
    }

    pub fn exclusions(&self) -> &ExclusionTable {
        &self.exclusions
    }

    pub fn run(&self, tree: &SymbolTree) -> AuditReport {
        let violations = tree
            .preorder()
            .filter_map(|(id, _)| match self.judge(tree, id) {
                Verdict::Violation(v) => Some(*v),
                _ => None,
            })
            .collect();
        AuditReport::from_violations(violations)
    }

    pub fn judge(&self, tree: &SymbolTree, id: SymbolId) -> Verdict {
        let Some(node) = tree.get(id) else {
            return Verdict::NoChain;
        };
        if id == tree.root() && node.kind == SymbolKind::Project {
            return Verdict::ProjectRoot;
        }

        let chain = KindChain::of(tree, id);
        if chain.is_empty() {
            return Verdict::NoChain;
        }
        if let Some(tier) = self.exclusions.first_match(&chain) {
            return Verdict::Excluded(tier);
        }

        let visibility = effective_visibility(tree, id);
        if !self.scope.includes(visibility) {
            return Verdict::OutOfScope;
        }

        let Some(defect) = DocDefect::of(node.comment.as_ref()) else {
            return Verdict::Documented;
        };

        let sources = if node.sources.is_empty() {
            tree.parent_node(id).map(|p| p.sources.as_slice()).unwrap_or(&[])
        } else {
            node.sources.as_slice()
        };

        let mut violation = Violation {
            kind: node.kind.to_string(),
            kind_chain: chain.to_string(),
            name: node.name.clone(),
            qualified_name: tree.qualified_name(id),
            visibility,
            defect,
            location: sources.iter().map(ToString::to_string).collect(),
            reason: defect.reason(&node.kind, &node.name),
            comment: node.comment.clone(),
        };
        if self.options.verbose {
            violation.expand_reason();
        }
        Verdict::Violation(Box::new(violation))
    }
}

/// Audit `tree` with the built-in exclusion table.
pub fn audit(tree: &SymbolTree, scope: ScopeLevel, options: AuditOptions) -> AuditReport {
    Auditor::new(scope).with_options(options).run(tree)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Comment, SourceLocation, SymbolNode};

    #[test]
    fn test_call_signature_uses_parent_visibility() {
        let mut tree = SymbolTree::new(SymbolNode::new(SymbolKind::Module, "m"));
        let method = tree
            .add_child(
                tree.root(),
                SymbolNode::new(SymbolKind::Method, "run").with_visibility(Visibility::Protected),
            )
            .unwrap();
        let sig = tree
            .add_child(method, SymbolNode::new(SymbolKind::CallSignature, "run"))
            .unwrap();
        let param = tree
            .add_child(sig, SymbolNode::new(SymbolKind::Parameter, "x"))
            .unwrap();

        assert_eq!(effective_visibility(&tree, sig), Visibility::Protected);
        assert_eq!(effective_visibility(&tree, param), Visibility::Protected);
    }

    #[test]
    fn test_parameter_without_grandparent_keeps_own_visibility() {
        let tree = SymbolTree::new(
            SymbolNode::new(SymbolKind::Parameter, "x").with_visibility(Visibility::Private),
        );
        assert_eq!(effective_visibility(&tree, tree.root()), Visibility::Private);
    }

    #[test]
    fn test_location_falls_back_to_parent_sources() {
        let mut tree = SymbolTree::new(
            SymbolNode::new(SymbolKind::Module, "m")
                .with_comment(Comment::new("docs", ""))
                .with_source(SourceLocation::new("m.ts", 1, 0)),
        );
        let class = tree
            .add_child(tree.root(), SymbolNode::new(SymbolKind::Class, "C"))
            .unwrap();

        let Verdict::Violation(v) = Auditor::new(ScopeLevel::Public).judge(&tree, class) else {
            panic!("expected a violation");
        };
        assert_eq!(v.location, vec!["m.ts:1:0".to_string()]);
        assert_eq!(v.kind_chain, "Module::Class");
    }

    #[test]
    fn test_project_root_is_not_audited() {
        let mut tree = SymbolTree::new(SymbolNode::new(SymbolKind::Project, "widgets"));
        let class = tree
            .add_child(tree.root(), SymbolNode::new(SymbolKind::Class, "Widget"))
            .unwrap();

        let auditor = Auditor::new(ScopeLevel::Public);
        assert_eq!(auditor.judge(&tree, tree.root()), Verdict::ProjectRoot);

        let Verdict::Violation(v) = auditor.judge(&tree, class) else {
            panic!("expected a violation");
        };
        assert_eq!(v.kind_chain, "Project::Class");
    }

    #[test]
    fn test_by_kind_keeps_first_seen_order() {
        let mut tree = SymbolTree::new(SymbolNode::new(SymbolKind::Module, "m"));
        let root = tree.root();
        tree.add_child(root, SymbolNode::new(SymbolKind::Class, "A")).unwrap();
        tree.add_child(root, SymbolNode::new(SymbolKind::Interface, "I")).unwrap();
        tree.add_child(root, SymbolNode::new(SymbolKind::Class, "B")).unwrap();

        let report = audit(&tree, ScopeLevel::Public, AuditOptions::default());
        assert_eq!(
            report.by_kind(),
            vec![
                ("Module".to_string(), 1),
                ("Class".to_string(), 2),
                ("Interface".to_string(), 1)
            ]
        );
    }
}
