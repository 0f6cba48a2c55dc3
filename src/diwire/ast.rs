//! AST for diwire documents
//!
//! Elements are plain owned values. The parser builds them bottom-up in a single pass
//! and hands the finished [`Container`] to the caller; nothing is shared and nothing
//! is patched afterwards.

pub mod elements;

pub use elements::container::Container;
pub use elements::import::{inferred_alias, Import};
pub use elements::list::List;
pub use elements::reg::Reg;
pub use elements::resolver::Resolver;
