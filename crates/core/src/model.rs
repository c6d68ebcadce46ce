// Re-export the symbol model from the API layer for internal use
pub use docscope_api::models::{
    Comment, CommentTag, ScopeLevel, SourceLocation, SymbolId, SymbolKind, SymbolNode, SymbolTree,
    Visibility,
};
