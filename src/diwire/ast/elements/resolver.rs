//! Resolver element
//!
//! A resolver names a package-qualified constructor and the tags of its arguments,
//! e.g. `pkg.NewThing _ Named`. Dependency names are kept exactly as written; a
//! placeholder such as `_` is not interpreted here.

use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Resolver {
    pub package: String,
    pub func: String,
    pub deps: Vec<String>,
}

impl Resolver {
    pub fn new<S: Into<String>>(
        package: impl Into<String>,
        func: impl Into<String>,
        deps: impl IntoIterator<Item = S>,
    ) -> Self {
        Resolver {
            package: package.into(),
            func: func.into(),
            deps: deps.into_iter().map(Into::into).collect(),
        }
    }
}

impl fmt::Display for Resolver {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}", self.package, self.func)?;
        for dep in &self.deps {
            write!(f, " {dep}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display() {
        let resolver = Resolver::new("pkg", "NewThing", ["_", "Named"]);
        assert_eq!(resolver.to_string(), "pkg.NewThing _ Named");
    }

    #[test]
    fn test_display_without_deps() {
        let resolver = Resolver::new("pkg", "NewThing", Vec::<String>::new());
        assert_eq!(resolver.to_string(), "pkg.NewThing");
    }
}
