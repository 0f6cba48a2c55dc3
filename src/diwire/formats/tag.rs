//! XML-like tag serialization
//!
//! Mirrors the container structure one tag per element. Resolver coordinates are
//! attributes, lists of names are child tags:
//!
//! ```text
//! <container>
//!   <import alias="pkg">my/pkg</import>
//!   <root package="pkg" func="Main">
//!     <dep>MyList</dep>
//!   </root>
//!   <reg lazy="true">
//!     <tag>Named</tag>
//!     <resolver package="pkg" func="NewThing"/>
//!   </reg>
//!   <list>
//!     <tag>MyList</tag>
//!     <resolve-to>Named</resolve-to>
//!   </list>
//! </container>
//! ```

use super::registry::{FormatError, Formatter};
use crate::diwire::ast::{Container, Import, List, Reg, Resolver};

pub struct TagFormatter;

impl Formatter for TagFormatter {
    fn name(&self) -> &str {
        "tag"
    }

    fn serialize(&self, container: &Container) -> Result<String, FormatError> {
        let mut serializer = TagSerializer::default();
        serializer.container(container);
        Ok(serializer.output)
    }

    fn description(&self) -> &str {
        "XML-like tag tree"
    }
}

#[derive(Default)]
struct TagSerializer {
    output: String,
    indent_level: usize,
}

impl TagSerializer {
    fn push_line(&mut self, s: &str) {
        self.output.push_str(&"  ".repeat(self.indent_level));
        self.output.push_str(s);
        self.output.push('\n');
    }

    fn tag_with_text(&mut self, tag: &str, text: &str) {
        self.push_line(&format!("<{tag}>{}</{tag}>", escape_xml(text)));
    }

    fn nested(&mut self, open: &str, close: &str, body: impl FnOnce(&mut Self)) {
        self.push_line(open);
        self.indent_level += 1;
        body(self);
        self.indent_level -= 1;
        self.push_line(close);
    }

    fn container(&mut self, container: &Container) {
        self.nested("<container>", "</container>", |s| {
            container.imports.iter().for_each(|import| s.import(import));
            s.resolver("root", &container.root);
            container.regs.iter().for_each(|reg| s.reg(reg));
            container.lists.iter().for_each(|list| s.list(list));
        });
    }

    fn import(&mut self, import: &Import) {
        self.push_line(&format!(
            "<import alias=\"{}\">{}</import>",
            escape_xml(&import.alias),
            escape_xml(&import.package)
        ));
    }

    fn resolver(&mut self, tag: &str, resolver: &Resolver) {
        let open = format!(
            "<{tag} package=\"{}\" func=\"{}\"",
            escape_xml(&resolver.package),
            escape_xml(&resolver.func)
        );
        if resolver.deps.is_empty() {
            self.push_line(&format!("{open}/>"));
            return;
        }
        self.nested(&format!("{open}>"), &format!("</{tag}>"), |s| {
            resolver.deps.iter().for_each(|dep| s.tag_with_text("dep", dep));
        });
    }

    fn reg(&mut self, reg: &Reg) {
        self.nested(&format!("<reg lazy=\"{}\">", reg.lazy), "</reg>", |s| {
            reg.tags.iter().for_each(|tag| s.tag_with_text("tag", tag));
            s.resolver("resolver", &reg.resolver);
        });
    }

    fn list(&mut self, list: &List) {
        self.nested("<list>", "</list>", |s| {
            list.tags.iter().for_each(|tag| s.tag_with_text("tag", tag));
            list.resolve_to
                .iter()
                .for_each(|tag| s.tag_with_text("resolve-to", tag));
        });
    }
}

fn escape_xml(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}
