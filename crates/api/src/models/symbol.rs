use super::kind::SymbolKind;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(
    Serialize, Deserialize, Debug, Clone, Copy, Default, PartialEq, Eq, Hash, JsonSchema,
)]
#[serde(rename_all = "lowercase")]
pub enum Visibility {
    #[default]
    Public,
    Protected,
    Private,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, JsonSchema)]
pub struct CommentTag {
    pub tag: String,
    #[serde(default)]
    pub text: String,
}

/// Documentation attached to a symbol.
///
/// A present comment whose short and long text are both empty is
/// "documented with nothing", which is distinct from having no comment.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct Comment {
    #[serde(default)]
    pub short_text: String,
    #[serde(default)]
    pub text: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub tags: Vec<CommentTag>,
}

impl Comment {
    pub fn new(short_text: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            short_text: short_text.into(),
            text: text.into(),
            tags: Vec::new(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.short_text.is_empty() && self.text.is_empty()
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, Hash, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct SourceLocation {
    pub file_name: String,
    pub line: usize,
    pub character: usize,
}

impl SourceLocation {
    pub fn new(file_name: impl Into<String>, line: usize, character: usize) -> Self {
        Self {
            file_name: file_name.into(),
            line,
            character,
        }
    }
}

impl fmt::Display for SourceLocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}:{}", self.file_name, self.line, self.character)
    }
}

/// Index of a node inside its owning [`SymbolTree`](super::tree::SymbolTree).
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SymbolId(pub u32);

impl SymbolId {
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

/// A described program symbol.
///
/// `parent` and `children` are maintained by the tree; a node built with
/// [`SymbolNode::new`] is detached until it is handed to the tree.
#[derive(Debug, Clone)]
pub struct SymbolNode {
    pub kind: SymbolKind,
    pub name: String,
    pub comment: Option<Comment>,
    pub visibility: Visibility,
    pub sources: Vec<SourceLocation>,
    pub(crate) parent: Option<SymbolId>,
    pub(crate) children: Vec<SymbolId>,
}

impl SymbolNode {
    pub fn new(kind: SymbolKind, name: impl Into<String>) -> Self {
        Self {
            kind,
            name: name.into(),
            comment: None,
            visibility: Visibility::Public,
            sources: Vec::new(),
            parent: None,
            children: Vec::new(),
        }
    }

    pub fn with_comment(mut self, comment: Comment) -> Self {
        self.comment = Some(comment);
        self
    }

    pub fn with_visibility(mut self, visibility: Visibility) -> Self {
        self.visibility = visibility;
        self
    }

    pub fn with_source(mut self, source: SourceLocation) -> Self {
        self.sources.push(source);
        self
    }

    pub fn parent(&self) -> Option<SymbolId> {
        self.parent
    }

    pub fn children(&self) -> &[SymbolId] {
        &self.children
    }
}
