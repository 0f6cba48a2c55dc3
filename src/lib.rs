//! # diwire
//!
//! A parser for diwire, a small language describing a dependency-injection
//! composition: the packages it imports, the root resolver, registrations (eager or
//! lazy) and lists that aggregate tagged values.
//!
//! ```text
//! import "my/pkg"
//! root pkg.NewCompositionRoot MyList
//! reg Named pkg.NewThing
//! list MyList Named
//! ```
//!
//! Layout
//!
//! src/diwire
//!   ├── lexing      Tokens and the cursor lexer (logos underneath)
//!   ├── parsing     Recursive-descent parser and errors
//!   ├── ast         Container and its elements; `Display` is canonical source
//!   ├── formats     Named output formats
//!   ├── processor   Source/file to rendered output
//!   ├── config      Layered configuration for the CLI
//!   └── testing     Samples and fluent assertions
//!
//! Nothing here checks meaning: tags that are never registered, shadowed import
//! aliases and placeholder dependencies are all passed through untouched.

pub mod diwire;

pub use crate::diwire::ast::{Container, Import, List, Reg, Resolver};
pub use crate::diwire::parsing::{parse, parse_reader, ParseError};
