//! # Class Lists
//!
//! Reads BEM modifiers off a DOM `class` attribute. Each whitespace
//! separated token is parsed into a transient [`BemBase`]; tokens that are
//! not valid BEM names (utility classes, framework hooks) are skipped and
//! counted.
//!
//! A token is *in scope* of a `BemBase` when its block and element equal
//! the scope's. Only in-scope tokens contribute modifiers:
//!
//! ```text
//! class="menu menu--open menu__item--active menu--size_l"
//! scope  menu        → open, size=l
//! scope  menu__item  → active
//! ```

use crate::base::BemBase;
use crate::shape::Modifier;

/// The BEM tokens of one `class` attribute, in document order.
#[derive(Debug, Clone, Default)]
pub struct ClassList {
    names: Vec<BemBase>,
    skipped: usize,
}

impl ClassList {
    /// Split `attr` on whitespace and parse every BEM token.
    pub fn parse(attr: &str) -> Self {
        let mut list = Self::default();
        for token in attr.split_whitespace() {
            match BemBase::new(token) {
                Ok(name) => list.names.push(name),
                Err(_) => list.skipped += 1,
            }
        }
        list
    }

    /// Every BEM token, in document order.
    pub fn iter(&self) -> impl Iterator<Item = &BemBase> {
        self.names.iter()
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    /// Number of tokens that were not valid BEM names.
    pub fn skipped(&self) -> usize {
        self.skipped
    }

    /// Whether the list carries exactly this class name.
    pub fn contains(&self, name: &BemBase) -> bool {
        let wanted = name.to_bem_string();
        self.iter().any(|n| n.to_bem_string() == wanted)
    }

    /// Modifiers of every in-scope token, in document order.
    ///
    /// The yielded modifiers borrow from the list only, so they outlive
    /// `scope`.
    pub fn modifiers_of<'a, 's>(
        &'a self,
        scope: &'s BemBase,
    ) -> impl Iterator<Item = &'a Modifier> + 's
    where
        'a: 's,
    {
        self.names
            .iter()
            .filter(move |n| n.blk() == scope.blk() && n.elt() == scope.elt())
            .filter_map(BemBase::modifier)
    }

    /// The first in-scope modifier called `name`.
    pub fn modifier<'a>(&'a self, scope: &BemBase, name: &str) -> Option<&'a Modifier> {
        self.modifiers_of(scope).find(|m| m.name == name)
    }
}

impl From<&str> for ClassList {
    fn from(attr: &str) -> Self {
        Self::parse(attr)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ATTR: &str = "menu menu--open menu__item--active menu--size_l js_hook";

    #[test]
    fn test_parse_skips_non_bem_tokens() {
        let list = ClassList::parse(ATTR);
        assert_eq!(list.len(), 4);
        assert_eq!(list.skipped(), 1);
    }

    #[test]
    fn test_modifiers_of_block() {
        let list = ClassList::parse(ATTR);
        let scope = BemBase::new("menu").unwrap();
        let mods: Vec<&Modifier> = list.modifiers_of(&scope).collect();
        assert_eq!(
            mods,
            vec![&Modifier::new("open"), &Modifier::with_value("size", "l")]
        );
    }

    #[test]
    fn test_modifiers_of_element() {
        let list = ClassList::parse(ATTR);
        let scope = BemBase::new("menu__item").unwrap();
        assert_eq!(
            list.modifier(&scope, "active"),
            Some(&Modifier::new("active"))
        );
        assert!(list.modifier(&scope, "open").is_none());
    }

    #[test]
    fn test_modifier_outlives_scope() {
        let list = ClassList::parse(ATTR);
        let found = {
            let scope = BemBase::new("menu__item").unwrap();
            list.modifier(&scope, "active")
        };
        assert_eq!(found, Some(&Modifier::new("active")));
    }

    #[test]
    fn test_iter_in_document_order() {
        let list = ClassList::parse(ATTR);
        let names: Vec<String> = list.iter().map(BemBase::to_bem_string).collect();
        assert_eq!(
            names,
            vec!["menu", "menu--open", "menu__item--active", "menu--size_l"]
        );
    }

    #[test]
    fn test_scope_modifier_is_ignored() {
        let list = ClassList::parse(ATTR);
        let scope = BemBase::new("menu--whatever").unwrap();
        assert_eq!(list.modifiers_of(&scope).count(), 2);
    }

    #[test]
    fn test_contains() {
        let list = ClassList::from(ATTR);
        assert!(list.contains(&BemBase::new("menu--open").unwrap()));
        assert!(!list.contains(&BemBase::new("menu--closed").unwrap()));
    }

    #[test]
    fn test_empty_attribute() {
        let list = ClassList::parse("   ");
        assert!(list.is_empty());
        assert_eq!(list.skipped(), 0);
    }
}
