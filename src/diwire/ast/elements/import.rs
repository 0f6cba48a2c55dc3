//! Import element
//!
//! An import binds an alias to a package path. `import "my/pkg"` infers the alias
//! `pkg` from the last path segment; `import p "my/pkg"` names it explicitly.

use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Import {
    pub alias: String,
    pub package: String,
}

impl Import {
    pub fn new(alias: impl Into<String>, package: impl Into<String>) -> Self {
        Import {
            alias: alias.into(),
            package: package.into(),
        }
    }

    /// Import a package under the alias inferred from its path
    pub fn from_package(package: impl Into<String>) -> Self {
        let package = package.into();
        Import {
            alias: inferred_alias(&package).to_string(),
            package,
        }
    }

    /// Whether the alias is the one a bare import of this package would get
    pub fn has_inferred_alias(&self) -> bool {
        self.alias == inferred_alias(&self.package)
    }
}

/// The text after the last `/` of a package path
pub fn inferred_alias(package: &str) -> &str {
    package.rsplit_once('/').map_or(package, |(_, last)| last)
}

/// Renders the entry form used inside an import block: `"pkg"` or `alias "pkg"`
impl fmt::Display for Import {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.has_inferred_alias() {
            write!(f, "\"{}\"", self.package)
        } else {
            write!(f, "{} \"{}\"", self.alias, self.package)
        }
    }
}
