//! Registration element
//!
//! `reg [tags] resolver` binds the value built by a resolver to zero or more tags.
//! `lazy` has the same shape and marks the resolver to be invoked on first use.

use super::resolver::Resolver;
use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Reg {
    pub tags: Vec<String>,
    pub resolver: Resolver,
    pub lazy: bool,
}

impl Reg {
    pub fn new<S: Into<String>>(tags: impl IntoIterator<Item = S>, resolver: Resolver) -> Self {
        Reg {
            tags: tags.into_iter().map(Into::into).collect(),
            resolver,
            lazy: false,
        }
    }

    pub fn lazy<S: Into<String>>(tags: impl IntoIterator<Item = S>, resolver: Resolver) -> Self {
        Reg {
            lazy: true,
            ..Reg::new(tags, resolver)
        }
    }

    /// The keyword this registration is written with
    pub fn keyword(&self) -> &'static str {
        if self.lazy {
            "lazy"
        } else {
            "reg"
        }
    }

    pub fn is_anonymous(&self) -> bool {
        self.tags.is_empty()
    }
}

impl fmt::Display for Reg {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ", self.keyword())?;
        if !self.tags.is_empty() {
            write!(f, "{} ", self.tags.join(", "))?;
        }
        write!(f, "{}", self.resolver)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn resolver() -> Resolver {
        Resolver::new("pkg", "NewOtherThing", ["Named"])
    }

    #[test]
    fn test_anonymous_reg() {
        let reg = Reg::new(Vec::<String>::new(), resolver());
        assert!(reg.is_anonymous());
        assert_eq!(reg.to_string(), "reg pkg.NewOtherThing Named");
    }

    #[test]
    fn test_tagged_lazy_reg() {
        let reg = Reg::lazy(["A", "B"], resolver());
        assert!(reg.lazy);
        assert_eq!(reg.to_string(), "lazy A, B pkg.NewOtherThing Named");
    }
}
