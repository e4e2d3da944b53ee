//! Choice-group content model engine
//!
//! A WordprocessingML container element (paragraph, run, revision wrapper)
//! holds an ordered, heterogeneous sequence of children drawn from a fixed
//! vocabulary of alternative element kinds. [`ChoiceGroup`] stores that
//! sequence in exact document order and supports position-addressed access
//! per kind ("the second run", "the first bookmark end") independent of the
//! kinds interleaved around it.
//!
//! The vocabulary is described by a [`ChoiceChild`] implementation: an enum
//! whose variants carry the concrete payloads. The discriminant and the
//! payload type are separate axes; several kinds may share one payload type
//! (both comment range markers carry the same struct), and the stored kind
//! alone decides which tag is emitted on write.

use crate::error::Result;
use crate::xml::XmlElement;
use quick_xml::Writer;
use std::io::Write;

/// A child drawn from a closed choice-group vocabulary
pub trait ChoiceChild: Sized {
    /// Discriminant enumeration naming every legal child kind
    type Kind: Copy + Eq + std::fmt::Debug;

    /// The kind this value currently represents
    fn kind(&self) -> Self::Kind;

    /// Classify `node` by local tag name and parse it.
    ///
    /// Returns `None` when the tag is not part of this vocabulary (the
    /// caller skips it), `Some(Err(_))` when the tag is recognized but a
    /// value inside fails its scalar codec (the whole container parse
    /// aborts).
    fn classify(node: &XmlElement) -> Option<Result<Self>>;

    /// Construct the default-valued payload registered for `kind`
    fn default_for(kind: Self::Kind) -> Self;

    /// Emit the child under the tag registered for its kind
    fn write_to<W: Write>(&self, writer: &mut Writer<W>) -> Result<()>;
}

/// Ordered sequence of choice-group entries.
///
/// Insertion order is document order and is preserved exactly through
/// parse, mutation and write. Mutation goes through `&mut self`, so
/// exclusive access is a compile-time contract rather than internal
/// locking. A sequence of read calls is not an atomic snapshot under
/// shared ownership; callers that need iterate-while-stable semantics
/// across threads should take [`ChoiceGroup::snapshot`] and iterate that.
#[derive(Clone, Debug)]
pub struct ChoiceGroup<C> {
    entries: Vec<C>,
}

impl<C> Default for ChoiceGroup<C> {
    fn default() -> Self {
        Self {
            entries: Vec::new(),
        }
    }
}

impl<C: ChoiceChild> ChoiceGroup<C> {
    /// Create an empty group
    pub fn new() -> Self {
        Self::default()
    }

    /// Classify one child node and append it if it belongs to the
    /// vocabulary. Returns `true` when the node was consumed.
    pub fn parse_child(&mut self, node: &XmlElement) -> Result<bool> {
        match C::classify(node) {
            Some(entry) => {
                self.entries.push(entry?);
                Ok(true)
            }
            None => Ok(false),
        }
    }

    /// Number of entries of the given kind
    pub fn count_of(&self, kind: C::Kind) -> usize {
        self.entries.iter().filter(|e| e.kind() == kind).count()
    }

    /// The index-th entry of the given kind, counted among matching
    /// entries only. Out of range is `None`, not an error.
    pub fn nth_of(&self, kind: C::Kind, index: usize) -> Option<&C> {
        self.entries.iter().filter(|e| e.kind() == kind).nth(index)
    }

    /// Mutable access to the index-th entry of the given kind
    pub fn nth_of_mut(&mut self, kind: C::Kind, index: usize) -> Option<&mut C> {
        self.entries
            .iter_mut()
            .filter(|e| e.kind() == kind)
            .nth(index)
    }

    /// All entries of the given kind, in document order
    pub fn all_of(&self, kind: C::Kind) -> impl Iterator<Item = &C> {
        self.entries.iter().filter(move |e| e.kind() == kind)
    }

    /// Append a default-valued entry of the given kind and return it for
    /// further mutation
    pub fn append_new(&mut self, kind: C::Kind) -> &mut C {
        self.entries.push(C::default_for(kind));
        self.entries.last_mut().unwrap()
    }

    /// Insert a default-valued entry before the index-th existing entry of
    /// the given kind.
    ///
    /// When no such entry exists the new entry goes to the head of the
    /// whole sequence. That fallback (front, not end) reproduces
    /// long-standing behavior that documents built against; see DESIGN.md
    /// before changing it.
    pub fn insert_new(&mut self, kind: C::Kind, index: usize) -> &mut C {
        let at = self.position_of(kind, index).unwrap_or(0);
        self.entries.insert(at, C::default_for(kind));
        &mut self.entries[at]
    }

    /// Replace the index-th entry of `value`'s own kind. Returns `false`
    /// without modifying anything when no such entry exists.
    pub fn set_nth(&mut self, index: usize, value: C) -> bool {
        match self.position_of(value.kind(), index) {
            Some(at) => {
                self.entries[at] = value;
                true
            }
            None => false,
        }
    }

    /// Remove and return the index-th entry of the given kind; a no-op
    /// returning `None` when out of range
    pub fn remove_at(&mut self, kind: C::Kind, index: usize) -> Option<C> {
        let at = self.position_of(kind, index)?;
        Some(self.entries.remove(at))
    }

    /// Emit every entry in stored order
    pub fn write_to<W: Write>(&self, writer: &mut Writer<W>) -> Result<()> {
        for entry in &self.entries {
            entry.write_to(writer)?;
        }
        Ok(())
    }

    /// Global position of the index-th entry of a kind
    fn position_of(&self, kind: C::Kind, index: usize) -> Option<usize> {
        self.entries
            .iter()
            .enumerate()
            .filter(|(_, e)| e.kind() == kind)
            .nth(index)
            .map(|(at, _)| at)
    }
}

impl<C> ChoiceGroup<C> {
    /// Append an entry at the end of the sequence
    pub fn push(&mut self, entry: C) {
        self.entries.push(entry);
    }

    /// Number of entries of all kinds
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the group holds no entries
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// All entries in document order
    pub fn entries(&self) -> &[C] {
        &self.entries
    }

    /// Iterate entries in document order
    pub fn iter(&self) -> std::slice::Iter<'_, C> {
        self.entries.iter()
    }

    /// Iterate entries mutably in document order
    pub fn iter_mut(&mut self) -> std::slice::IterMut<'_, C> {
        self.entries.iter_mut()
    }

    /// Owned copy of the sequence for iterate-while-stable callers
    pub fn snapshot(&self) -> Vec<C>
    where
        C: Clone,
    {
        self.entries.clone()
    }
}

impl<'a, C> IntoIterator for &'a ChoiceGroup<C> {
    type Item = &'a C;
    type IntoIter = std::slice::Iter<'a, C>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::document::run::{RunChild, RunChildKind};
    use crate::xml::parse_element;

    #[test]
    fn test_parse_child_classification() {
        let mut group: ChoiceGroup<RunChild> = ChoiceGroup::new();

        let tab = parse_element("<w:tab/>").unwrap();
        assert!(group.parse_child(&tab).unwrap());

        let unknown = parse_element("<w:somethingNew/>").unwrap();
        assert!(!group.parse_child(&unknown).unwrap());

        assert_eq!(group.len(), 1);
        assert_eq!(group.count_of(RunChildKind::Tab), 1);
    }

    #[test]
    fn test_parse_child_propagates_scalar_errors() {
        let mut group: ChoiceGroup<RunChild> = ChoiceGroup::new();

        let bad = parse_element(r#"<w:sym w:font="Wingdings" w:char="nothex"/>"#).unwrap();
        assert!(group.parse_child(&bad).is_err());
        assert!(group.is_empty());
    }

    #[test]
    fn test_append_and_insert_defaults() {
        let mut group: ChoiceGroup<RunChild> = ChoiceGroup::new();
        group.append_new(RunChildKind::Tab);
        group.append_new(RunChildKind::Break);

        // No Text entry yet: the new one lands at the front of the sequence
        group.insert_new(RunChildKind::Text, 3);
        assert_eq!(group.entries()[0].kind(), RunChildKind::Text);
        assert_eq!(group.len(), 3);
    }
}
