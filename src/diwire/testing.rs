//! Testing utilities
//!
//! - [`samples`] loads the curated documents in `samples/`.
//! - [`assert_container`] verifies a parsed container field by field:
//!
//! ```rust,ignore
//! use diwire::diwire::testing::{assert_container, samples};
//!
//! let container = parse(&samples::source("020-registrations.diwire")).unwrap();
//! assert_container(&container)
//!     .import_count(2)
//!     .reg(0, |reg| {
//!         reg.anonymous().lazy(false).resolver(|r| {
//!             r.calls("pkg", "NewThing").deps(&["_", "Named"]);
//!         });
//!     });
//! ```

pub mod assertions;
pub mod samples;

pub use assertions::{assert_container, ContainerAssertion, RegAssertion, ResolverAssertion};
