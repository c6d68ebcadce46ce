pub mod kind;
pub mod scope;
pub mod symbol;
pub mod tree;

pub use kind::*;
pub use scope::*;
pub use symbol::*;
pub use tree::*;
