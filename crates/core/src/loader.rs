//! Reads the analyzer's reflection dump (JSON) into a [`SymbolTree`].
//!
//! Each reflection object carries `name`, `kindString`, `comment`, `flags`,
//! `sources` and its nested reflections under `children`, `signatures`,
//! `indexSignature`, `getSignature`, `setSignature`, `parameters` and
//! `typeParameter`. Nested reflections are attached in that field order.

use crate::error::Result;
use crate::model::{Comment, SourceLocation, SymbolId, SymbolKind, SymbolNode, SymbolTree, Visibility};
use serde::{Deserialize, Deserializer};
use std::path::Path;

#[derive(Deserialize, Debug, Default, Clone, Copy)]
#[serde(rename_all = "camelCase", default)]
struct RawFlags {
    is_private: bool,
    is_protected: bool,
}

impl RawFlags {
    fn visibility(self) -> Visibility {
        if self.is_private {
            Visibility::Private
        } else if self.is_protected {
            Visibility::Protected
        } else {
            Visibility::Public
        }
    }
}

#[derive(Deserialize, Debug, Default)]
#[serde(rename_all = "camelCase", default)]
struct RawReflection {
    name: String,
    kind_string: Option<String>,
    comment: Option<Comment>,
    flags: RawFlags,
    sources: Vec<SourceLocation>,
    children: Vec<RawReflection>,
    signatures: Vec<RawReflection>,
    #[serde(deserialize_with = "one_or_many")]
    index_signature: Vec<RawReflection>,
    #[serde(deserialize_with = "one_or_many")]
    get_signature: Vec<RawReflection>,
    #[serde(deserialize_with = "one_or_many")]
    set_signature: Vec<RawReflection>,
    parameters: Vec<RawReflection>,
    #[serde(deserialize_with = "one_or_many")]
    type_parameter: Vec<RawReflection>,
}

impl RawReflection {
    /// Split into the node itself and its nested reflections.
    fn into_parts(self) -> (SymbolNode, Vec<RawReflection>) {
        let kind = self
            .kind_string
            .as_deref()
            .map(SymbolKind::from)
            .unwrap_or(SymbolKind::Unknown);

        let mut node = SymbolNode::new(kind, self.name).with_visibility(self.flags.visibility());
        node.comment = self.comment;
        node.sources = self.sources;

        let nested = [
            self.children,
            self.signatures,
            self.index_signature,
            self.get_signature,
            self.set_signature,
            self.parameters,
            self.type_parameter,
        ]
        .into_iter()
        .flatten()
        .collect();
        (node, nested)
    }
}

fn one_or_many<'de, D>(deserializer: D) -> std::result::Result<Vec<RawReflection>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum OneOrMany {
        Many(Vec<RawReflection>),
        One(Box<RawReflection>),
    }

    Ok(match Option::<OneOrMany>::deserialize(deserializer)? {
        Some(OneOrMany::One(r)) => vec![*r],
        Some(OneOrMany::Many(v)) => v,
        None => Vec::new(),
    })
}

fn build(raw: RawReflection) -> Result<SymbolTree> {
    let (root, nested) = raw.into_parts();
    let mut tree = SymbolTree::new(root);

    // Pushed in reverse so siblings keep their order and ids follow pre-order.
    let mut stack: Vec<(SymbolId, RawReflection)> = Vec::new();
    let root_id = tree.root();
    stack.extend(nested.into_iter().rev().map(|r| (root_id, r)));

    while let Some((parent, raw)) = stack.pop() {
        let (node, nested) = raw.into_parts();
        let id = tree.add_child(parent, node)?;
        stack.extend(nested.into_iter().rev().map(|r| (id, r)));
    }

    Ok(tree)
}

pub fn tree_from_json(json: &str) -> Result<SymbolTree> {
    let raw: RawReflection = serde_json::from_str(json)?;
    build(raw)
}

pub fn load_tree(path: &Path) -> Result<SymbolTree> {
    let content = std::fs::read_to_string(path)?;
    let tree = tree_from_json(&content)?;
    tracing::debug!(path = %path.display(), nodes = tree.len(), "Loaded symbol tree");
    Ok(tree)
}
