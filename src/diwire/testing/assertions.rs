//! Fluent assertion API for containers

use crate::diwire::ast::{Container, Import, List, Reg, Resolver};

// ============================================================================
// Entry Point
// ============================================================================

/// Create an assertion builder for a container
pub fn assert_container(container: &Container) -> ContainerAssertion<'_> {
    ContainerAssertion { container }
}

// ============================================================================
// Container Assertions
// ============================================================================

pub struct ContainerAssertion<'a> {
    container: &'a Container,
}

impl<'a> ContainerAssertion<'a> {
    pub fn import_count(self, expected: usize) -> Self {
        let actual = self.container.imports.len();
        assert_eq!(
            actual, expected,
            "Expected {} imports, found {}: {:?}",
            expected, actual, self.container.imports
        );
        self
    }

    /// Assert an import's alias and package
    pub fn import(self, index: usize, alias: &str, package: &str) -> Self {
        let import = self.nth(&self.container.imports, index, "imports");
        assert_eq!(
            import,
            &Import::new(alias, package),
            "imports[{}] mismatch",
            index
        );
        self
    }

    pub fn root<F>(self, assertion: F) -> Self
    where
        F: FnOnce(ResolverAssertion<'a>),
    {
        assertion(ResolverAssertion {
            resolver: &self.container.root,
            context: "root".to_string(),
        });
        self
    }

    pub fn reg_count(self, expected: usize) -> Self {
        let actual = self.container.regs.len();
        assert_eq!(
            actual,
            expected,
            "Expected {} regs, found {}: [{}]",
            expected,
            actual,
            summarize(&self.container.regs)
        );
        self
    }

    pub fn reg<F>(self, index: usize, assertion: F) -> Self
    where
        F: FnOnce(RegAssertion<'a>),
    {
        let reg = self.nth(&self.container.regs, index, "regs");
        assertion(RegAssertion {
            reg,
            context: format!("regs[{}]", index),
        });
        self
    }

    pub fn list_count(self, expected: usize) -> Self {
        let actual = self.container.lists.len();
        assert_eq!(
            actual,
            expected,
            "Expected {} lists, found {}: [{}]",
            expected,
            actual,
            summarize(&self.container.lists)
        );
        self
    }

    /// Assert a list's tags and the tags it resolves to
    pub fn list(self, index: usize, tags: &[&str], resolve_to: &[&str]) -> Self {
        let list = self.nth(&self.container.lists, index, "lists");
        assert_eq!(list, &List::new(tags.iter().copied(), resolve_to.iter().copied()));
        self
    }

    fn nth<T>(&self, items: &'a [T], index: usize, what: &str) -> &'a T {
        assert!(
            index < items.len(),
            "{} index {} out of bounds (container has {})",
            what,
            index,
            items.len()
        );
        &items[index]
    }
}

// ============================================================================
// Registration Assertions
// ============================================================================

pub struct RegAssertion<'a> {
    reg: &'a Reg,
    context: String,
}

impl<'a> RegAssertion<'a> {
    pub fn tags(self, expected: &[&str]) -> Self {
        assert_eq!(self.reg.tags, expected, "{}: tags mismatch", self.context);
        self
    }

    pub fn anonymous(self) -> Self {
        assert!(
            self.reg.is_anonymous(),
            "{}: expected no tags, found {:?}",
            self.context,
            self.reg.tags
        );
        self
    }

    pub fn lazy(self, expected: bool) -> Self {
        assert_eq!(self.reg.lazy, expected, "{}: lazy mismatch", self.context);
        self
    }

    pub fn resolver<F>(self, assertion: F) -> Self
    where
        F: FnOnce(ResolverAssertion<'a>),
    {
        assertion(ResolverAssertion {
            resolver: &self.reg.resolver,
            context: format!("{}.resolver", self.context),
        });
        self
    }
}

// ============================================================================
// Resolver Assertions
// ============================================================================

pub struct ResolverAssertion<'a> {
    resolver: &'a Resolver,
    context: String,
}

impl ResolverAssertion<'_> {
    /// Assert `package.func`
    pub fn calls(self, package: &str, func: &str) -> Self {
        assert_eq!(
            (self.resolver.package.as_str(), self.resolver.func.as_str()),
            (package, func),
            "{}: resolver target mismatch",
            self.context
        );
        self
    }

    pub fn deps(self, expected: &[&str]) -> Self {
        assert_eq!(self.resolver.deps, expected, "{}: deps mismatch", self.context);
        self
    }

    pub fn no_deps(self) -> Self {
        self.deps(&[])
    }
}

fn summarize<T: std::fmt::Display>(items: &[T]) -> String {
    items
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}
