use super::chain::{KindChain, KindPattern};
use crate::model::SymbolKind::*;
use serde::Serialize;
use std::fmt;

/// Which part of the exclusion table skipped a symbol.
#[derive(Serialize, Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum ExclusionTier {
    /// Shapes that are never documented on their own (type literals, aliases).
    Always,
    /// Members that inherit documentation from their declaring class.
    Ignorable,
    /// Positions the checker cannot evaluate correctly yet.
    Unhandled,
}

impl fmt::Display for ExclusionTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            ExclusionTier::Always => "always",
            ExclusionTier::Ignorable => "ignorable",
            ExclusionTier::Unhandled => "unhandled",
        })
    }
}

/// Ordered exclusion rules, consulted before the documentation check.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExclusionTable {
    always: Vec<KindPattern>,
    ignorable: Vec<KindPattern>,
    unhandled: Vec<KindPattern>,
}

impl Default for ExclusionTable {
    fn default() -> Self {
        Self::builtin()
    }
}

impl ExclusionTable {
    pub fn builtin() -> Self {
        Self {
            always: vec![
                KindPattern::contains(&[TypeLiteral]),
                KindPattern::contains(&[TypeAlias]),
            ],
            ignorable: vec![
                KindPattern::exact(&[Project, Class, Constructor]),
                KindPattern::exact(&[Project, Class, Property]),
                KindPattern::exact(&[Project, Class, Method]),
            ],
            // TODO: check these once signatures and parameters look up documentation on their owner.
            unhandled: vec![
                KindPattern::exact(&[Project, Class, Constructor, ConstructorSignature, Parameter]),
                KindPattern::exact(&[Project, Class, Constructor, ConstructorSignature]),
                KindPattern::exact(&[Module, Class, Constructor]),
                KindPattern::exact(&[Module, Class, Method]),
                KindPattern::exact(&[Module, Function]),
            ],
        }
    }

    /// A table that excludes nothing.
    pub fn empty() -> Self {
        Self {
            always: Vec::new(),
            ignorable: Vec::new(),
            unhandled: Vec::new(),
        }
    }

    /// Append extra patterns to the ignorable tier.
    pub fn with_ignored(mut self, extra: impl IntoIterator<Item = KindPattern>) -> Self {
        for pattern in extra {
            if !self.ignorable.contains(&pattern) {
                self.ignorable.push(pattern);
            }
        }
        self
    }

    /// First tier whose patterns match `chain`, checked in tier order.
    pub fn first_match(&self, chain: &KindChain) -> Option<ExclusionTier> {
        self.rules()
            .find(|(_, pattern)| pattern.matches(chain))
            .map(|(tier, _)| tier)
    }

    pub fn rules(&self) -> impl Iterator<Item = (ExclusionTier, &KindPattern)> {
        self.always
            .iter()
            .map(|p| (ExclusionTier::Always, p))
            .chain(self.ignorable.iter().map(|p| (ExclusionTier::Ignorable, p)))
            .chain(self.unhandled.iter().map(|p| (ExclusionTier::Unhandled, p)))
    }

    pub fn len(&self) -> usize {
        self.always.len() + self.ignorable.len() + self.unhandled.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
