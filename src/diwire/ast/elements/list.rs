//! List element
//!
//! `list MyList A, B` gathers every value tagged `A` or `B` under the tag `MyList`.

use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct List {
    pub tags: Vec<String>,
    pub resolve_to: Vec<String>,
}

impl List {
    pub fn new<S: Into<String>, T: Into<String>>(
        tags: impl IntoIterator<Item = S>,
        resolve_to: impl IntoIterator<Item = T>,
    ) -> Self {
        List {
            tags: tags.into_iter().map(Into::into).collect(),
            resolve_to: resolve_to.into_iter().map(Into::into).collect(),
        }
    }
}

impl fmt::Display for List {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "list {} {}",
            self.tags.join(", "),
            self.resolve_to.join(", ")
        )
    }
}
