//! Types dealing with the substitutions table.

use super::ast::QualifiedName;

use std::fmt;
use std::ops::Deref;

/// The names seen so far in a single symbol, for `S_` and `S<seq-id>_` back references.
///
/// The first name completed becomes the qualifier that `S_` refers to. Names registered
/// afterwards are appended and never move, so `S<n>_` keeps resolving to the same name for
/// the rest of the symbol.
#[derive(Clone, Default, PartialEq, Eq)]
pub struct SubstitutionTable<'a> {
    qualifier: Option<QualifiedName<'a>>,
    substitutions: Vec<QualifiedName<'a>>,
}

impl fmt::Debug for SubstitutionTable<'_> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.pad("SubstitutionTable ")?;
        f.debug_map()
            .entries(self.substitutions.iter().enumerate())
            .finish()?;
        write!(f, " qualifier {:?}", self.qualifier)
    }
}

impl<'a> SubstitutionTable<'a> {
    /// Construct a new `SubstitutionTable`.
    pub fn new() -> SubstitutionTable<'a> {
        Default::default()
    }

    /// The name `S_` refers to.
    pub fn qualifier(&self) -> Option<&QualifiedName<'a>> {
        self.qualifier.as_ref()
    }

    pub fn set_qualifier(&mut self, name: QualifiedName<'a>) {
        self.qualifier = Some(name);
    }

    /// Insert a freshly-parsed name into the table and return the index at which it now
    /// lives.
    pub fn insert(&mut self, name: QualifiedName<'a>) -> usize {
        let idx = self.substitutions.len();
        self.substitutions.push(name);
        idx
    }
}

impl<'a> Deref for SubstitutionTable<'a> {
    type Target = [QualifiedName<'a>];

    fn deref(&self) -> &Self::Target {
        &self.substitutions[..]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::itanium::ast::{Component, CvQualifiers, RefQualifier};

    fn name<'a>(components: &'a [Component<'a>]) -> QualifiedName<'a> {
        QualifiedName {
            components,
            cv: CvQualifiers::empty(),
            ref_qualifier: RefQualifier::None,
            template_args: &[],
        }
    }

    #[test]
    fn indices_are_stable() {
        let first = [Component::Source("a")];
        let second = [Component::Source("a"), Component::Source("b")];
        let mut subs = SubstitutionTable::new();

        assert!(subs.qualifier().is_none());
        subs.set_qualifier(name(&first));

        assert_eq!(subs.insert(name(&second)), 0);
        assert_eq!(subs.insert(name(&first)), 1);
        assert!(subs.get(2).is_none());
        assert_eq!(subs[0].components, &second);
        assert_eq!(subs.qualifier().map(|q| q.components), Some(&first[..]));
    }
}
