//! Kind chains and the two ways of matching them.
//!
//! A kind chain is the sequence of kinds from the root down to a symbol,
//! e.g. `Module::Class::Method`. Matching works on the structured sequence,
//! never on the joined string, so `Contains` cannot accidentally match half
//! of a kind name.

use crate::error::{DocscopeError, Result};
use crate::model::{SymbolId, SymbolKind, SymbolTree};
use std::fmt;
use std::str::FromStr;

pub const CHAIN_SEPARATOR: &str = "::";

#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct KindChain(Vec<SymbolKind>);

impl KindChain {
    pub fn new(kinds: Vec<SymbolKind>) -> Self {
        Self(kinds)
    }

    /// Chain for `id`, climbing parents until the root or a node without a kind.
    ///
    /// A symbol whose own kind is unknown has an empty chain.
    pub fn of(tree: &SymbolTree, id: SymbolId) -> Self {
        let mut kinds: Vec<SymbolKind> = tree
            .ancestors(id)
            .map_while(|a| tree.get(a).filter(|n| n.kind.is_known()))
            .map(|n| n.kind.clone())
            .collect();
        kinds.reverse();
        Self(kinds)
    }

    pub fn kinds(&self) -> &[SymbolKind] {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// True when `needle` occurs as a contiguous run anywhere in the chain.
    pub fn contains_run(&self, needle: &[SymbolKind]) -> bool {
        if needle.is_empty() || needle.len() > self.0.len() {
            return false;
        }
        self.0.windows(needle.len()).any(|w| w == needle)
    }

    /// True when the whole chain is exactly `other`.
    pub fn is_exactly(&self, other: &[SymbolKind]) -> bool {
        self.0 == other
    }
}

impl fmt::Display for KindChain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let names: Vec<&str> = self.0.iter().map(SymbolKind::as_str).collect();
        f.write_str(&names.join(CHAIN_SEPARATOR))
    }
}

impl FromStr for KindChain {
    type Err = DocscopeError;

    fn from_str(s: &str) -> Result<Self> {
        let mut kinds = Vec::new();
        for segment in s.split(CHAIN_SEPARATOR) {
            let kind = SymbolKind::from(segment);
            if !kind.is_known() {
                return Err(DocscopeError::InvalidPattern(format!(
                    "empty segment in '{}'",
                    s
                )));
            }
            kinds.push(kind);
        }
        Ok(Self(kinds))
    }
}

impl From<&[SymbolKind]> for KindChain {
    fn from(kinds: &[SymbolKind]) -> Self {
        Self(kinds.to_vec())
    }
}

/// A rule deciding whether a kind chain is excluded from the audit.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum KindPattern {
    /// Matches when the kinds appear as a contiguous run anywhere in the chain.
    Contains(KindChain),
    /// Matches only the identical chain.
    Exact(KindChain),
}

impl KindPattern {
    pub fn contains(kinds: &[SymbolKind]) -> Self {
        KindPattern::Contains(KindChain::from(kinds))
    }

    pub fn exact(kinds: &[SymbolKind]) -> Self {
        KindPattern::Exact(KindChain::from(kinds))
    }

    pub fn matches(&self, chain: &KindChain) -> bool {
        match self {
            KindPattern::Contains(needle) => chain.contains_run(needle.kinds()),
            KindPattern::Exact(expected) => chain.is_exactly(expected.kinds()),
        }
    }

    pub fn matcher_name(&self) -> &'static str {
        match self {
            KindPattern::Contains(_) => "contains",
            KindPattern::Exact(_) => "exact",
        }
    }

    pub fn chain(&self) -> &KindChain {
        match self {
            KindPattern::Contains(c) | KindPattern::Exact(c) => c,
        }
    }
}

impl fmt::Display for KindPattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.matcher_name(), self.chain())
    }
}
