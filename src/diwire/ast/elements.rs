//! AST element definitions, one module per element

pub mod container;
pub mod import;
pub mod list;
pub mod reg;
pub mod resolver;
