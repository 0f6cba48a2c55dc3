//! Container element
//!
//! The root of a parsed document. A container owns every other element and always
//! has at least one import and exactly one root resolver; registrations and lists
//! may be empty.
//!
//! Rendering
//!
//! `Display` writes canonical diwire text that parses back to an equal container.
//! Imports are written as a parenthesized block, one entry per line, followed by the
//! root and then every registration and every list in their original order:
//!
//! ```text
//! import (
//!     "my/pkg"
//!     other "my/other"
//! )
//!
//! root pkg.NewCompositionRoot MyList
//!
//! reg pkg.NewThing _ Named
//! lazy Named, OtherName pkg.NewOtherThing
//! list MyList Named, OtherName
//! ```

use super::import::Import;
use super::list::List;
use super::reg::Reg;
use super::resolver::Resolver;
use serde::{Deserialize, Serialize};
use std::fmt;

const INDENT: &str = "    ";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Container {
    pub imports: Vec<Import>,
    pub root: Resolver,
    pub regs: Vec<Reg>,
    pub lists: Vec<List>,
}

impl Container {
    pub fn new(imports: Vec<Import>, root: Resolver) -> Self {
        Container {
            imports,
            root,
            regs: Vec::new(),
            lists: Vec::new(),
        }
    }

    pub fn with_regs(mut self, regs: Vec<Reg>) -> Self {
        self.regs = regs;
        self
    }

    pub fn with_lists(mut self, lists: Vec<List>) -> Self {
        self.lists = lists;
        self
    }

    fn has_declarations(&self) -> bool {
        !self.regs.is_empty() || !self.lists.is_empty()
    }
}

impl fmt::Display for Container {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "import (")?;
        for import in &self.imports {
            writeln!(f, "{INDENT}{import}")?;
        }
        writeln!(f, ")")?;
        writeln!(f)?;
        writeln!(f, "root {}", self.root)?;

        if self.has_declarations() {
            writeln!(f)?;
            for reg in &self.regs {
                writeln!(f, "{reg}")?;
            }
            for list in &self.lists {
                writeln!(f, "{list}")?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Container {
        Container::new(
            vec![Import::new("pkg", "my/pkg"), Import::new("o", "my/other")],
            Resolver::new("pkg", "NewCompositionRoot", ["MyList"]),
        )
        .with_regs(vec![
            Reg::new(Vec::<String>::new(), Resolver::new("pkg", "NewThing", ["_", "Named"])),
            Reg::lazy(
                ["Named", "OtherName"],
                Resolver::new("o", "NewOtherThing", Vec::<String>::new()),
            ),
        ])
        .with_lists(vec![List::new(["MyList"], ["Named", "OtherName"])])
    }

    #[test]
    fn test_display() {
        let expected = "import (\n    \"my/pkg\"\n    o \"my/other\"\n)\n\nroot pkg.NewCompositionRoot MyList\n\nreg pkg.NewThing _ Named\nlazy Named, OtherName o.NewOtherThing\nlist MyList Named, OtherName\n";
        assert_eq!(sample().to_string(), expected);
    }

    #[test]
    fn test_display_without_declarations() {
        let container = Container::new(
            vec![Import::from_package("my/pkg")],
            Resolver::new("pkg", "Main", Vec::<String>::new()),
        );
        assert_eq!(
            container.to_string(),
            "import (\n    \"my/pkg\"\n)\n\nroot pkg.Main\n"
        );
    }
}
